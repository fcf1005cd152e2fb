pub use crate::math::{accuracy, r2_score};
pub use crate::math::{gini, majority_label, mean, variance};
