use super::*;

/// Enumerates the thresholds worth testing for one feature at one node.
///
/// The distinct values of `feature_index` among the rows in `indices` are sorted and
/// the midpoint of every consecutive pair is returned in ascending order. Fewer than
/// two distinct values yield no thresholds, i.e. the feature cannot split the node.
///
/// # Parameters
///
/// - `x` - Feature table with shape (n_samples, n_features)
/// - `indices` - Rows of `x` that reached the node (repeats allowed)
/// - `feature_index` - Column to enumerate thresholds for
///
/// # Returns
///
/// * `Vec<f64>` - Candidate thresholds in ascending order
///
/// # Examples
/// ```rust
/// use ndarray::array;
/// use rustyforest::machine_learning::candidate_thresholds;
///
/// let x = array![[1.0], [3.0], [3.0], [2.0]];
/// assert_eq!(candidate_thresholds(&x, &[0, 1, 2, 3], 0), vec![1.5, 2.5]);
/// assert!(candidate_thresholds(&x, &[1, 2], 0).is_empty());
/// ```
pub fn candidate_thresholds<S>(x: &ArrayBase<S, Ix2>, indices: &[usize], feature_index: usize) -> Vec<f64>
where
    S: Data<Elem = f64>,
{
    let mut values: Vec<f64> = indices.iter().map(|&i| x[[i, feature_index]]).collect();
    values.sort_by(|a, b| a.total_cmp(b));
    values.dedup();

    values
        .windows(2)
        .map(|pair| (pair[0] + pair[1]) / 2.0)
        .collect()
}

/// Routes rows to the left (`x[row, feature_index] <= threshold`) or right child.
///
/// Relative order of `indices` is preserved on both sides, and
/// `left.len() + right.len() == indices.len()`. Callers reject the split when either
/// side is empty.
///
/// # Parameters
///
/// - `x` - Feature table with shape (n_samples, n_features)
/// - `indices` - Rows of `x` that reached the node
/// - `feature_index` - Column tested by the split
/// - `threshold` - Split threshold
///
/// # Returns
///
/// * `(Vec<usize>, Vec<usize>)` - Row indices routed left and right
pub fn partition<S>(
    x: &ArrayBase<S, Ix2>,
    indices: &[usize],
    feature_index: usize,
    threshold: f64,
) -> (Vec<usize>, Vec<usize>)
where
    S: Data<Elem = f64>,
{
    indices
        .iter()
        .copied()
        .partition(|&i| x[[i, feature_index]] <= threshold)
}

/// Splits an owned table and its targets by one feature threshold.
///
/// Same routing rule as [`partition`], but returns the rows and targets themselves.
///
/// # Returns
///
/// * `(Array2<f64>, Array1<T>, Array2<f64>, Array1<T>)` - `(rows_left, targets_left, rows_right, targets_right)`
///
/// # Examples
/// ```rust
/// use ndarray::array;
/// use rustyforest::machine_learning::partition_rows;
///
/// let x = array![[1.0, 0.0], [5.0, 0.0], [2.0, 1.0]];
/// let y = array![0usize, 1, 0];
/// let (x_left, y_left, x_right, y_right) = partition_rows(&x, &y, 0, 3.0);
/// assert_eq!(x_left.nrows(), 2);
/// assert_eq!(y_left, array![0, 0]);
/// assert_eq!(x_right, array![[5.0, 0.0]]);
/// assert_eq!(y_right, array![1]);
/// ```
pub fn partition_rows<S1, S2, T>(
    x: &ArrayBase<S1, Ix2>,
    y: &ArrayBase<S2, Ix1>,
    feature_index: usize,
    threshold: f64,
) -> (Array2<f64>, Array1<T>, Array2<f64>, Array1<T>)
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = T>,
    T: Clone,
{
    let indices: Vec<usize> = (0..x.nrows()).collect();
    let (left, right) = partition(x, &indices, feature_index, threshold);

    (
        x.select(Axis(0), &left),
        y.select(Axis(0), &left),
        x.select(Axis(0), &right),
        y.select(Axis(0), &right),
    )
}

/// Sample-size-weighted impurity of the two children of a split.
///
/// Computed as `(n_left * impurity_left + n_right * impurity_right) / (n_left + n_right)`.
#[inline]
pub fn weighted_impurity(n_left: usize, impurity_left: f64, n_right: usize, impurity_right: f64) -> f64 {
    let n_total = (n_left + n_right) as f64;
    (n_left as f64 * impurity_left + n_right as f64 * impurity_right) / n_total
}
