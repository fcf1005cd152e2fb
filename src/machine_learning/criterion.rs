use super::*;
use crate::math::{accuracy, r2_score};
use std::hash::Hash;

/// Split quality measure and leaf rule of a tree.
///
/// Classification and regression trees share the same builder; they differ only in
/// how node impurity is measured, how a leaf turns its targets into a prediction,
/// and how an ensemble combines the predictions of its members.
///
/// Implementations are zero-sized marker types used as the type parameter of
/// [`DecisionTree`] and [`RandomForest`].
pub trait Criterion: Debug + Clone + Copy + Default + PartialEq + Send + Sync + 'static {
    /// Target type: a class label for classification, a real value for regression.
    type Target: Copy + Debug + Default + PartialEq + Send + Sync;

    /// Short name used in log output.
    const NAME: &'static str;

    /// Whether the builder stops as soon as a node has zero impurity.
    const STOPS_WHEN_PURE: bool;

    /// Impurity of a non-empty set of targets. Lower is more homogeneous.
    fn impurity<S>(targets: &ArrayBase<S, Ix1>) -> f64
    where
        S: Data<Elem = Self::Target>;

    /// Prediction stored in a leaf holding `targets`.
    fn leaf_value<S>(targets: &ArrayBase<S, Ix1>) -> Self::Target
    where
        S: Data<Elem = Self::Target>;

    /// Combines per-tree predictions for a single sample into the ensemble prediction.
    fn aggregate(predictions: &[Self::Target]) -> Self::Target;

    /// Goodness of fit used for out-of-bag evaluation.
    fn score(y_true: &[Self::Target], y_pred: &[Self::Target]) -> f64;

    /// Rejects target values the criterion cannot work with.
    fn check_targets<S>(_targets: &ArrayBase<S, Ix1>) -> Result<(), ModelError>
    where
        S: Data<Elem = Self::Target>,
    {
        Ok(())
    }

    /// Number of classes seen in `targets`, or `None` for regression.
    fn n_classes<S>(_targets: &ArrayBase<S, Ix1>) -> Option<usize>
    where
        S: Data<Elem = Self::Target>,
    {
        None
    }

    /// Class frequencies of `targets`, indexed by class label.
    fn class_distribution<S>(_targets: &ArrayBase<S, Ix1>, _n_classes: usize) -> Option<Vec<f64>>
    where
        S: Data<Elem = Self::Target>,
    {
        None
    }
}

/// Gini impurity for classification on `usize` class labels.
///
/// Leaves predict the majority label. Ties go to the label that appears first among
/// the node's targets, and the ensemble vote is broken the same way over tree order.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Gini;

impl Criterion for Gini {
    type Target = usize;

    const NAME: &'static str = "gini";
    const STOPS_WHEN_PURE: bool = true;

    fn impurity<S>(targets: &ArrayBase<S, Ix1>) -> f64
    where
        S: Data<Elem = usize>,
    {
        gini(targets)
    }

    fn leaf_value<S>(targets: &ArrayBase<S, Ix1>) -> usize
    where
        S: Data<Elem = usize>,
    {
        majority_label(targets).unwrap_or_default()
    }

    fn aggregate(predictions: &[usize]) -> usize {
        majority_vote(predictions)
    }

    fn score(y_true: &[usize], y_pred: &[usize]) -> f64 {
        accuracy(&ArrayView1::from(y_true), &ArrayView1::from(y_pred))
    }

    fn n_classes<S>(targets: &ArrayBase<S, Ix1>) -> Option<usize>
    where
        S: Data<Elem = usize>,
    {
        targets.iter().max().map(|&max_label| max_label + 1)
    }

    fn class_distribution<S>(targets: &ArrayBase<S, Ix1>, n_classes: usize) -> Option<Vec<f64>>
    where
        S: Data<Elem = usize>,
    {
        let mut counts = vec![0.0; n_classes];
        for &label in targets.iter() {
            if let Some(count) = counts.get_mut(label) {
                *count += 1.0;
            }
        }

        let total = targets.len() as f64;
        if total > 0.0 {
            counts.iter_mut().for_each(|count| *count /= total);
        }

        Some(counts)
    }
}

/// Variance (mean squared error around the mean) for regression on `f64` targets.
///
/// Leaves predict the mean of their targets and the ensemble averages its members.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MeanSquaredError;

impl Criterion for MeanSquaredError {
    type Target = f64;

    const NAME: &'static str = "mse";
    const STOPS_WHEN_PURE: bool = false;

    fn impurity<S>(targets: &ArrayBase<S, Ix1>) -> f64
    where
        S: Data<Elem = f64>,
    {
        variance(targets)
    }

    fn leaf_value<S>(targets: &ArrayBase<S, Ix1>) -> f64
    where
        S: Data<Elem = f64>,
    {
        crate::math::mean(targets)
    }

    fn aggregate(predictions: &[f64]) -> f64 {
        if predictions.is_empty() {
            return 0.0;
        }
        predictions.iter().sum::<f64>() / predictions.len() as f64
    }

    fn score(y_true: &[f64], y_pred: &[f64]) -> f64 {
        r2_score(&ArrayView1::from(y_true), &ArrayView1::from(y_pred))
    }

    fn check_targets<S>(targets: &ArrayBase<S, Ix1>) -> Result<(), ModelError>
    where
        S: Data<Elem = f64>,
    {
        if let Some(i) = targets.iter().position(|v| !v.is_finite()) {
            return Err(ModelError::InputValidationError(format!(
                "Target vector contains NaN or infinite value at position {}",
                i
            )));
        }

        Ok(())
    }
}

/// Returns the most voted label, ties broken by the first label to appear in `votes`.
fn majority_vote<T>(votes: &[T]) -> T
where
    T: Copy + Default + Eq + Hash,
{
    majority_label(&ArrayView1::from(votes)).unwrap_or_default()
}
