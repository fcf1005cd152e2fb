use ahash::AHashMap;
use ndarray::{ArrayBase, Data, Ix1};
use std::hash::Hash;

/// Calculates the arithmetic mean of a set of values.
///
/// # Parameters
///
/// - `values` - Values stored in a 1D array
///
/// # Returns
///
/// - `f64` - Mean of the values (0.0 when the array is empty)
///
/// # Examples
/// ```rust
/// use ndarray::array;
/// use rustyforest::math::mean;
///
/// let values = array![0.2, 0.2, 2.3, 1.8];
/// assert!((mean(&values) - 1.125).abs() < 1e-12);
/// ```
#[inline]
pub fn mean<S>(values: &ArrayBase<S, Ix1>) -> f64
where
    S: Data<Elem = f64>,
{
    if values.is_empty() {
        return 0.0;
    }

    values.sum() / values.len() as f64
}

/// Calculates the variance (mean squared deviation from the mean) of a set of values.
///
/// This is the impurity used by regression trees: a node holding identical
/// target values has a variance of exactly 0.0.
///
/// # Parameters
///
/// - `y` - Values for which to calculate the variance
///
/// # Returns
///
/// - `f64` - Variance of the input values (0.0 when the array is empty)
///
/// # Examples
/// ```rust
/// use ndarray::array;
/// use rustyforest::math::variance;
///
/// let values = array![1.0, 2.0, 3.0];
/// let mse = variance(&values);
/// // Mean is 2.0, so variance = ((1-2)^2 + (2-2)^2 + (3-2)^2) / 3 = (1 + 0 + 1) / 3 ~= 0.66667
/// assert!((mse - 0.6666667).abs() < 1e-6);
/// ```
#[inline]
pub fn variance<S>(y: &ArrayBase<S, Ix1>) -> f64
where
    S: Data<Elem = f64>,
{
    let n = y.len();
    if n == 0 {
        return 0.0;
    }

    let mean = mean(y);

    // Sum of squared differences in one pass
    let sum_squared_diff = y.fold(0.0, |acc, &val| {
        let diff = val - mean;
        acc + diff * diff
    });

    sum_squared_diff / n as f64
}

/// Counts how often each distinct label occurs.
///
/// Returns the counts together with the labels in the order they were first
/// encountered, which is what callers use to break ties deterministically.
pub(crate) fn label_counts<S, T>(y: &ArrayBase<S, Ix1>) -> (AHashMap<T, usize>, Vec<T>)
where
    S: Data<Elem = T>,
    T: Copy + Eq + Hash,
{
    let mut counts = AHashMap::with_capacity(10);
    let mut first_seen = Vec::new();

    for &label in y.iter() {
        let count = counts.entry(label).or_insert(0);
        if *count == 0 {
            first_seen.push(label);
        }
        *count += 1;
    }

    (counts, first_seen)
}

/// Calculates the Gini impurity of a label set.
///
/// Gini impurity measures how frequently a randomly chosen element would be
/// mislabeled if it were randomly labeled according to the distribution of labels.
///
/// # Parameters
///
/// - `y` - Class labels stored in a 1D array
///
/// # Returns
///
/// - `f64` - Gini impurity in the range \[0.0, 1.0 - 1/k\] for `k` observed classes
///
/// # Examples
/// ```rust
/// use ndarray::array;
/// use rustyforest::math::gini;
///
/// let labels = array![0usize, 0, 1, 1];
/// let gini_val = gini(&labels);
/// // For two classes with equal frequency, Gini = 1 - (0.5^2 + 0.5^2) = 0.5
/// assert!((gini_val - 0.5).abs() < 1e-6);
/// ```
#[inline]
pub fn gini<S, T>(y: &ArrayBase<S, Ix1>) -> f64
where
    S: Data<Elem = T>,
    T: Copy + Eq + Hash,
{
    let total_samples = y.len() as f64;
    if total_samples == 0.0 {
        return 0.0;
    }

    let (class_counts, first_seen) = label_counts(y);

    // Summed in first-seen order so the result does not depend on the hasher seed
    let sum_squared_proportions: f64 = first_seen
        .iter()
        .map(|label| {
            let p = class_counts.get(label).copied().unwrap_or(0) as f64 / total_samples;
            p * p
        })
        .sum();

    1.0 - sum_squared_proportions
}

/// Returns the most frequent label of a label set.
///
/// Ties are broken in favour of the label that appears first in `y`.
///
/// # Parameters
///
/// - `y` - Class labels stored in a 1D array
///
/// # Returns
///
/// - `Option<T>` - The majority label, or `None` for an empty array
///
/// # Examples
/// ```rust
/// use ndarray::array;
/// use rustyforest::math::majority_label;
///
/// assert_eq!(majority_label(&array![2usize, 1, 1, 2, 0]), Some(2));
/// assert_eq!(majority_label(&array![0usize, 1, 1]), Some(1));
/// ```
pub fn majority_label<S, T>(y: &ArrayBase<S, Ix1>) -> Option<T>
where
    S: Data<Elem = T>,
    T: Copy + Eq + Hash,
{
    let (counts, first_seen) = label_counts(y);

    let mut best: Option<(T, usize)> = None;
    for label in first_seen {
        let count = counts.get(&label).copied().unwrap_or(0);
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((label, count)),
        }
    }

    best.map(|(label, _)| label)
}

/// Calculates the fraction of predictions that match the ground truth.
///
/// # Parameters
///
/// - `y_true` - Ground-truth labels
/// - `y_pred` - Predicted labels
///
/// # Returns
///
/// - `f64` - Accuracy in \[0.0, 1.0\] (0.0 when the arrays are empty)
///
/// # Panics
///
/// - Panics if the two arrays have different lengths
pub fn accuracy<S1, S2, T>(y_true: &ArrayBase<S1, Ix1>, y_pred: &ArrayBase<S2, Ix1>) -> f64
where
    S1: Data<Elem = T>,
    S2: Data<Elem = T>,
    T: PartialEq,
{
    if y_true.len() != y_pred.len() {
        panic!(
            "Input arrays must have the same length. Actual: {}, Predicted: {}",
            y_true.len(),
            y_pred.len()
        );
    }

    if y_true.is_empty() {
        return 0.0;
    }

    let correct = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|(actual, predicted)| actual == predicted)
        .count();

    correct as f64 / y_true.len() as f64
}

/// Calculates the coefficient of determination (R²) of a set of predictions.
///
/// # Parameters
///
/// - `y_true` - Ground-truth values
/// - `y_pred` - Predicted values
///
/// # Returns
///
/// - `f64` - R² score. When the ground truth is constant, returns 1.0 for a perfect fit and 0.0 otherwise.
///
/// # Panics
///
/// - Panics if the two arrays have different lengths
///
/// # Examples
/// ```rust
/// use ndarray::array;
/// use rustyforest::math::r2_score;
///
/// let actual = array![1.0, 2.0, 3.0];
/// assert!((r2_score(&actual, &actual) - 1.0).abs() < 1e-12);
/// ```
pub fn r2_score<S1, S2>(y_true: &ArrayBase<S1, Ix1>, y_pred: &ArrayBase<S2, Ix1>) -> f64
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    if y_true.len() != y_pred.len() {
        panic!(
            "Input arrays must have the same length. Actual: {}, Predicted: {}",
            y_true.len(),
            y_pred.len()
        );
    }

    let mean_true = mean(y_true);
    let sse: f64 = y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(&actual, &predicted)| (actual - predicted).powi(2))
        .sum();
    let sst: f64 = y_true.iter().map(|&actual| (actual - mean_true).powi(2)).sum();

    if sst == 0.0 {
        return if sse == 0.0 { 1.0 } else { 0.0 };
    }

    1.0 - sse / sst
}
