pub use crate::machine_learning::criterion::{Criterion, Gini, MeanSquaredError};
pub use crate::machine_learning::decision_tree::{
    DecisionTree, DecisionTreeClassifier, DecisionTreeParams, DecisionTreeRegressor, Node,
};
pub use crate::machine_learning::helper_functions::table_from_rows;
pub use crate::machine_learning::random_forest::{
    MaxFeatures, RandomForest, RandomForestClassifier, RandomForestParams, RandomForestRegressor,
};
