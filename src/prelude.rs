/// Prelude module for the tree models.
#[cfg(feature = "machine_learning")]
pub mod machine_learning_prelude;
/// Prelude module for mathematical operations.
#[cfg(feature = "math")]
pub mod math_prelude;

pub use crate::error::ModelError;
#[cfg(feature = "machine_learning")]
pub use machine_learning_prelude::*;
#[cfg(feature = "math")]
pub use math_prelude::*;
