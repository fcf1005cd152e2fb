use super::*;

/// Performs validation checks on the input feature table.
///
/// This function validates that:
/// - The input data matrix has at least one row and one column
/// - The input data does not contain NaN or infinite values
/// - When a target length is provided, it matches the number of rows in the input data
///
/// # Parameters
///
/// - `x` - A 2D array of feature values where rows represent samples and columns represent features
/// - `n_targets` - An optional length of the target vector corresponding to each sample
///
/// # Returns
///
/// - `Ok(())` - If all validation checks pass
/// - `Err(ModelError::InputValidationError)` - If any validation check fails, with an informative error message
pub fn preliminary_check<S>(x: &ArrayBase<S, Ix2>, n_targets: Option<usize>) -> Result<(), ModelError>
where
    S: Data<Elem = f64>,
{
    if x.nrows() == 0 {
        return Err(ModelError::InputValidationError(
            "Input data is empty".to_string(),
        ));
    }

    if x.ncols() == 0 {
        return Err(ModelError::InputValidationError(
            "Feature vectors cannot be empty".to_string(),
        ));
    }

    if let Some(n_targets) = n_targets {
        if n_targets != x.nrows() {
            return Err(ModelError::InputValidationError(format!(
                "Input data and target vector have different lengths, x rows: {}, y length: {}",
                x.nrows(),
                n_targets
            )));
        }
    }

    for (i, row) in x.outer_iter().enumerate() {
        for (j, &val) in row.iter().enumerate() {
            if !val.is_finite() {
                return Err(ModelError::InputValidationError(format!(
                    "Input data contains NaN or infinite value at position [{}][{}]",
                    i, j
                )));
            }
        }
    }

    Ok(())
}

/// Builds a feature table from a slice of row vectors.
///
/// Every row must have the same, non-zero length.
///
/// # Parameters
///
/// * `rows` - Feature vectors, one per sample
///
/// # Returns
///
/// - `Ok(Array2<f64>)` - The table with shape (rows.len(), feature count)
/// - `Err(ModelError::InputValidationError)` - If `rows` is empty, a row is empty, or rows are ragged
///
/// # Examples
/// ```rust
/// use rustyforest::machine_learning::table_from_rows;
///
/// let table = table_from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
/// assert_eq!(table.dim(), (2, 2));
/// assert!(table_from_rows(&[vec![1.0, 2.0], vec![3.0]]).is_err());
/// ```
pub fn table_from_rows(rows: &[Vec<f64>]) -> Result<Array2<f64>, ModelError> {
    let n_features = match rows.first() {
        Some(first) => first.len(),
        None => {
            return Err(ModelError::InputValidationError(
                "Input data is empty".to_string(),
            ));
        }
    };

    if n_features == 0 {
        return Err(ModelError::InputValidationError(
            "Feature vectors cannot be empty".to_string(),
        ));
    }

    if let Some((i, row)) = rows
        .iter()
        .enumerate()
        .find(|(_, row)| row.len() != n_features)
    {
        return Err(ModelError::InputValidationError(format!(
            "Row {} has {} features, expected {}",
            i,
            row.len(),
            n_features
        )));
    }

    let flat: Vec<f64> = rows.iter().flatten().copied().collect();
    Array2::from_shape_vec((rows.len(), n_features), flat)
        .map_err(|e| ModelError::InputValidationError(e.to_string()))
}

/// Validates that the minimum number of samples required to split a node is at least 2.
///
/// # Parameters
///
/// * `min_samples_split` - The value to validate
///
/// # Returns
///
/// - `Ok(())` - If the value is at least 2
/// - `Err(ModelError::InputValidationError)` - Otherwise
pub fn validate_min_samples_split(min_samples_split: usize) -> Result<(), ModelError> {
    if min_samples_split < 2 {
        return Err(ModelError::InputValidationError(format!(
            "min_samples_split must be at least 2, got {}",
            min_samples_split
        )));
    }

    Ok(())
}

/// Validates that the minimum number of samples per leaf is at least 1.
pub fn validate_min_samples_leaf(min_samples_leaf: usize) -> Result<(), ModelError> {
    if min_samples_leaf == 0 {
        return Err(ModelError::InputValidationError(
            "min_samples_leaf must be at least 1".to_string(),
        ));
    }

    Ok(())
}

/// Validates that the minimum impurity decrease is non-negative and finite.
pub fn validate_min_impurity_decrease(min_impurity_decrease: f64) -> Result<(), ModelError> {
    if min_impurity_decrease < 0.0 || !min_impurity_decrease.is_finite() {
        return Err(ModelError::InputValidationError(format!(
            "min_impurity_decrease must be non-negative and finite, got {}",
            min_impurity_decrease
        )));
    }

    Ok(())
}

/// Validates that an ensemble contains at least one estimator.
pub fn validate_n_estimators(n_estimators: usize) -> Result<(), ModelError> {
    if n_estimators == 0 {
        return Err(ModelError::InputValidationError(
            "n_estimators must be greater than 0".to_string(),
        ));
    }

    Ok(())
}
