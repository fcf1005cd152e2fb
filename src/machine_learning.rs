use crate::error::ModelError;
use crate::math::{gini, majority_label, variance};
use ndarray::{Array1, Array2, ArrayBase, ArrayView1, ArrayView2, Axis, Data, Ix1, Ix2};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::fmt::Debug;
use std::marker::PhantomData;
use tracing::{debug, info, instrument, trace};

/// Bootstrap resampling and random feature subsets used by the ensembles
pub mod bootstrap;
/// Impurity criteria shared by classification and regression trees
pub mod criterion;
/// Decision tree implementation for classification and regression tasks
pub mod decision_tree;
/// This module provides helper functions for machine learning models
pub mod helper_functions;
/// Random forest implementation built on bagged decision trees
pub mod random_forest;
/// Candidate threshold enumeration and row partitioning for tree splits
pub mod splitter;

pub use bootstrap::*;
pub use criterion::*;
pub use decision_tree::*;
pub use helper_functions::*;
pub use random_forest::*;
pub use splitter::*;
