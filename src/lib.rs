//! Decision trees and random forests for classification and regression on `ndarray` tables.
//!
//! Trees are grown greedily by binary threshold splits that minimize Gini impurity
//! (classification) or variance (regression). Forests bag trees over bootstrap samples
//! and draw a random feature subset at every split.
//!
//! # Examples
//! ```rust
//! use rustyforest::prelude::*;
//! use ndarray::array;
//!
//! let x = array![[1.0, 1.0], [1.5, 2.0], [2.0, 1.0], [8.0, 8.0], [8.5, 9.0], [9.0, 8.0]];
//! let y = array![0, 0, 0, 1, 1, 1];
//!
//! let mut tree = DecisionTreeClassifier::new(Some(3), 2).unwrap();
//! tree.fit(&x, &y).unwrap();
//! assert_eq!(tree.predict(&x).unwrap(), y);
//!
//! let mut forest = RandomForestClassifier::new(25, Some(3), 2, None).unwrap();
//! forest.fit(&x, &y).unwrap();
//! assert_eq!(forest.predict_one(&[8.2, 8.4]).unwrap(), 1);
//! ```

/// Error type shared by every model in the crate
pub mod error;

/// A macro that generates a getter method for any field.
///
/// This macro creates a public getter method that returns the value of the specified
/// field. The generated method includes documentation describing the field being accessed.
///
/// # Parameters
///
/// - `$method_name` - The name of the getter method (e.g., get_n_features)
/// - `$field_name` - The name of the field to access (e.g., n_features)
/// - `$return_type` - The return type of the getter method
#[cfg(feature = "machine_learning")]
macro_rules! get_field {
    ($method_name:ident, $field_name:ident, $return_type:ty) => {
        #[doc = concat!("Gets the `", stringify!($field_name), "` field.\n\n")]
        #[doc = "# Returns\n\n"]
        #[doc = concat!("* `", stringify!($return_type), "` - The value of the `", stringify!($field_name), "` field")]
        pub fn $method_name(&self) -> $return_type {
            self.$field_name
        }
    };
}

/// A macro that generates a public getter method returning a reference to a field.
///
/// # Parameters
///
/// - `$method_name` - The identifier for the generated getter method name
/// - `$field_name` - The identifier of the struct field to access
/// - `$return_type` - The reference type returned (e.g. `&DecisionTreeParams`)
#[cfg(feature = "machine_learning")]
macro_rules! get_field_as_ref {
    ($method_name:ident, $field_name:ident, $return_type:ty) => {
        #[doc = concat!("Gets the `", stringify!($field_name), "` field.\n\n")]
        #[doc = "# Returns\n\n"]
        #[doc = concat!("* `", stringify!($return_type), "` - The value of the `", stringify!($field_name), "` field as a reference")]
        pub fn $method_name(&self) -> $return_type {
            &self.$field_name
        }
    };
}

/// Module `math` contains the statistics the tree models are built on.
///
/// # Impurity and Leaf Values
/// - `gini` - Gini impurity of a label set
/// - `variance` - Population variance of a set of real targets
/// - `mean` - Arithmetic mean of a set of real targets
/// - `majority_label` - Most frequent label, ties broken by first appearance
///
/// # Evaluation
/// - `accuracy` - Fraction of matching labels
/// - `r2_score` - Coefficient of determination
///
/// # Example
/// ```rust
/// use rustyforest::math::{gini, variance};
/// use ndarray::array;
///
/// assert_eq!(gini(&array![0, 0, 1, 1]), 0.5);
/// assert_eq!(variance(&array![1.0, 3.0]), 1.0);
/// ```
#[cfg(feature = "math")]
pub mod math;

/// Module `machine_learning` provides the tree-based models.
///
/// # Models
/// - **DecisionTreeClassifier** / **DecisionTreeRegressor**: CART-style trees using Gini impurity or variance
/// - **RandomForestClassifier** / **RandomForestRegressor**: bagged ensembles with per-split feature subsampling
///
/// # Building Blocks
/// - `Criterion` - Trait tying an impurity measure to its leaf rule and ensemble aggregation
/// - `candidate_thresholds`, `partition`, `partition_rows` - Split enumeration and row routing
/// - `bootstrap`, `bootstrap_indices`, `random_feature_subset` - Resampling helpers
/// - `table_from_rows` - Builds a feature table from row vectors, rejecting ragged input
///
/// # Examples
/// ```rust
/// use rustyforest::machine_learning::*;
/// use ndarray::array;
///
/// let x = array![[1.0], [2.0], [3.0], [4.0]];
/// let y = array![1.0, 1.0, 5.0, 5.0];
///
/// let mut tree = DecisionTreeRegressor::new(None, 2).unwrap();
/// tree.fit(&x, &y).unwrap();
/// assert_eq!(tree.predict_one(&[3.5]).unwrap(), 5.0);
/// ```
#[cfg(feature = "machine_learning")]
pub mod machine_learning;

/// A convenience module that re-exports the most commonly used types from this crate.
///
/// # Examples
/// ```rust
/// use rustyforest::prelude::*;
/// ```
pub mod prelude;
