use super::*;

/// Default minimum number of samples required to enable parallel prediction
const DEFAULT_PARALLEL_THRESHOLD_SAMPLES: usize = 100;

/// Smallest impurity decrease, relative to the node's impurity, that counts as an improvement.
///
/// Relative so that targets on any scale can be split.
const RELATIVE_IMPURITY_TOLERANCE: f64 = 1e-12;

/// Hyperparameters for controlling decision tree growth and complexity.
///
/// These parameters help prevent overfitting and control the tree structure during training.
///
/// # Fields
///
/// - `max_depth` - Maximum depth of the tree. If `None`, nodes are expanded until all leaves are pure, contain fewer than `min_samples_split` samples, or admit no improving split.
/// - `min_samples_split` - Minimum number of samples required to split an internal node. Must be at least 2.
/// - `min_samples_leaf` - Minimum number of samples required on each side of a split. Candidates leaving fewer samples on either side are skipped.
/// - `min_impurity_decrease` - Minimum impurity decrease required for a split. A node will be split only if the decrease in impurity is greater than or equal to this value.
/// - `max_features` - Number of features drawn at random, without replacement, for every node's split search. If `None`, every feature is searched in ascending order.
/// - `random_state` - Seed for the feature subsampling. If `None`, the random source is seeded from entropy at `fit` time.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTreeParams {
    pub max_depth: Option<usize>,
    pub min_samples_split: usize,
    pub min_samples_leaf: usize,
    pub min_impurity_decrease: f64,
    pub max_features: Option<usize>,
    pub random_state: Option<u64>,
}

/// Default hyperparameters for decision tree.
///
/// Provides the defaults: depth limit of 5 (`max_depth = Some(5)`), minimum 2 samples to split (`min_samples_split = 2`),
/// minimum 1 sample per leaf (`min_samples_leaf = 1`), no minimum impurity decrease requirement (`min_impurity_decrease = 0.0`),
/// every feature searched (`max_features = None`) and no random state (`random_state = None`).
impl Default for DecisionTreeParams {
    fn default() -> Self {
        Self {
            max_depth: Some(5),
            min_samples_split: 2,
            min_samples_leaf: 1,
            min_impurity_decrease: 0.0,
            max_features: None,
            random_state: None,
        }
    }
}

impl DecisionTreeParams {
    /// Checks that every hyperparameter is within its valid range.
    ///
    /// # Returns
    ///
    /// - `Ok(())` - If the parameters are valid
    /// - `Err(ModelError::InputValidationError)` - If `min_samples_split < 2`, `min_samples_leaf == 0`, `max_features == Some(0)` or `min_impurity_decrease` is negative or not finite
    pub fn validate(&self) -> Result<(), ModelError> {
        validate_min_samples_split(self.min_samples_split)?;
        validate_min_samples_leaf(self.min_samples_leaf)?;
        validate_min_impurity_decrease(self.min_impurity_decrease)?;

        if self.max_features == Some(0) {
            return Err(ModelError::InputValidationError(
                "max_features must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// A node in the decision tree structure.
///
/// Every node records how many training samples reached it and their impurity.
/// Children are owned through boxes, so a tree is dropped recursively together with its root.
///
/// # Variants
///
/// - `Leaf` - A terminal node that produces a prediction.
///   - `value`: The predicted value (majority class label for classification, mean target for regression).
///   - `probabilities`: For classification, the class frequencies of the samples in the leaf, indexed by label.
/// - `Internal` - A decision node. Samples with `sample[feature_index] <= threshold` go to `left`, the rest to `right`.
#[derive(Debug, Clone, PartialEq)]
pub enum Node<T> {
    Leaf {
        value: T,
        n_samples: usize,
        impurity: f64,
        probabilities: Option<Vec<f64>>,
    },
    Internal {
        feature_index: usize,
        threshold: f64,
        n_samples: usize,
        impurity: f64,
        left: Box<Node<T>>,
        right: Box<Node<T>>,
    },
}

impl<T> Node<T> {
    /// Number of training samples that reached this node.
    pub fn n_samples(&self) -> usize {
        match self {
            Node::Leaf { n_samples, .. } | Node::Internal { n_samples, .. } => *n_samples,
        }
    }

    /// Impurity of the training samples that reached this node.
    pub fn impurity(&self) -> f64 {
        match self {
            Node::Leaf { impurity, .. } | Node::Internal { impurity, .. } => *impurity,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Depth of the subtree rooted here; a single leaf has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// Number of leaves in the subtree rooted here.
    pub fn n_leaves(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.n_leaves() + right.n_leaves(),
        }
    }

    /// Walks `sample` down to the leaf it is routed to.
    ///
    /// Takes O(depth) steps. `sample` must have at least as many entries as the
    /// largest feature index used by the tree.
    pub fn route<S>(&self, sample: &ArrayBase<S, Ix1>) -> &Node<T>
    where
        S: Data<Elem = f64>,
    {
        let mut node = self;
        while let Node::Internal {
            feature_index,
            threshold,
            left,
            right,
            ..
        } = node
        {
            node = if sample[*feature_index] <= *threshold {
                left.as_ref()
            } else {
                right.as_ref()
            };
        }
        node
    }

    /// Value of the leaf `sample` is routed to.
    pub fn predict<S>(&self, sample: &ArrayBase<S, Ix1>) -> T
    where
        S: Data<Elem = f64>,
        T: Copy,
    {
        match self.route(sample) {
            Node::Leaf { value, .. } => *value,
            Node::Internal { .. } => unreachable!("route always ends at a leaf"),
        }
    }

    /// Adds the weighted impurity decrease of every split in this subtree to `importances`.
    fn accumulate_importances(&self, importances: &mut [f64]) {
        if let Node::Internal {
            feature_index,
            n_samples,
            impurity,
            left,
            right,
            ..
        } = self
        {
            let decrease = *n_samples as f64 * *impurity
                - left.n_samples() as f64 * left.impurity()
                - right.n_samples() as f64 * right.impurity();
            importances[*feature_index] += decrease.max(0.0);

            left.accumulate_importances(importances);
            right.accumulate_importances(importances);
        }
    }
}

/// The split chosen for a node, together with the rows it sends to each child.
struct BestSplit {
    feature_index: usize,
    threshold: f64,
    score: f64,
    left: Vec<usize>,
    right: Vec<usize>,
}

/// Recursive builder state for a single `fit`.
///
/// Holds read-only views of the training table, so bootstrap samples are expressed
/// as (possibly repeating) row indices instead of copies.
struct TreeBuilder<'a, C: Criterion> {
    x: ArrayView2<'a, f64>,
    y: ArrayView1<'a, C::Target>,
    params: &'a DecisionTreeParams,
    n_classes: Option<usize>,
    rng: StdRng,
}

impl<'a, C: Criterion> TreeBuilder<'a, C> {
    /// Grows the subtree for `indices`: a leaf when a stopping rule holds, otherwise an
    /// internal node over the best improving split.
    fn build(&mut self, indices: &[usize], depth: usize) -> Node<C::Target> {
        let targets = self.y.select(Axis(0), indices);
        let impurity = C::impurity(&targets);

        let depth_reached = self.params.max_depth.is_some_and(|max_depth| depth >= max_depth);
        if depth_reached
            || indices.len() < self.params.min_samples_split
            || (C::STOPS_WHEN_PURE && impurity == 0.0)
        {
            return self.leaf(&targets, impurity);
        }

        let best = match self.find_best_split(indices) {
            Some(best) => best,
            None => {
                trace!(depth, n_samples = indices.len(), "no valid split, creating leaf");
                return self.leaf(&targets, impurity);
            }
        };

        let decrease = impurity - best.score;
        if decrease <= RELATIVE_IMPURITY_TOLERANCE * impurity || decrease < self.params.min_impurity_decrease {
            trace!(depth, n_samples = indices.len(), decrease, "no improving split, creating leaf");
            return self.leaf(&targets, impurity);
        }

        let left = self.build(&best.left, depth + 1);
        let right = self.build(&best.right, depth + 1);

        Node::Internal {
            feature_index: best.feature_index,
            threshold: best.threshold,
            n_samples: indices.len(),
            impurity,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Searches the node's candidate features and all their thresholds for the split with the
    /// lowest weighted child impurity.
    ///
    /// Features are visited in the order returned by `candidate_features` and thresholds in
    /// ascending order; only a strictly lower score replaces the current best, so the first
    /// candidate wins exact ties.
    fn find_best_split(&mut self, indices: &[usize]) -> Option<BestSplit> {
        let mut best: Option<BestSplit> = None;

        for feature_index in self.candidate_features() {
            for threshold in candidate_thresholds(&self.x, indices, feature_index) {
                let (left, right) = partition(&self.x, indices, feature_index, threshold);

                if left.len() < self.params.min_samples_leaf
                    || right.len() < self.params.min_samples_leaf
                    || left.is_empty()
                    || right.is_empty()
                {
                    continue;
                }

                let impurity_left = C::impurity(&self.y.select(Axis(0), &left));
                let impurity_right = C::impurity(&self.y.select(Axis(0), &right));
                let score = weighted_impurity(left.len(), impurity_left, right.len(), impurity_right);

                if best.as_ref().is_none_or(|current| score < current.score) {
                    best = Some(BestSplit {
                        feature_index,
                        threshold,
                        score,
                        left,
                        right,
                    });
                }
            }
        }

        best
    }

    /// Every feature in ascending order, or a fresh random subset when `max_features` is set.
    fn candidate_features(&mut self) -> Vec<usize> {
        let n_features = self.x.ncols();
        match self.params.max_features {
            Some(max_features) => random_feature_subset(n_features, max_features, &mut self.rng),
            None => (0..n_features).collect(),
        }
    }

    fn leaf(&self, targets: &Array1<C::Target>, impurity: f64) -> Node<C::Target> {
        Node::Leaf {
            value: C::leaf_value(targets),
            n_samples: targets.len(),
            impurity,
            probabilities: self
                .n_classes
                .and_then(|n_classes| C::class_distribution(targets, n_classes)),
        }
    }
}

/// Decision tree for classification and regression tasks.
///
/// Implements CART: the tree is grown top-down by exhaustively searching, at every
/// node, all features (or a random subset of `max_features` of them) and all midpoints
/// between consecutive distinct feature values for the split that minimizes the
/// sample-weighted impurity of the two children. The criterion type `C` selects the
/// task: [`Gini`] for classification on `usize` labels, [`MeanSquaredError`] for
/// regression on `f64` targets. See the [`DecisionTreeClassifier`] and
/// [`DecisionTreeRegressor`] aliases.
///
/// # Fields
///
/// - `root` - The root node of the trained tree, or `None` if not yet fitted.
/// - `n_features` - Number of features in the training data.
/// - `n_classes` - For classification, the number of classes (largest label + 1). `None` for regression.
/// - `params` - Hyperparameters controlling tree growth and complexity.
///
/// # Example
/// ```rust
/// use rustyforest::machine_learning::DecisionTreeClassifier;
/// use ndarray::array;
///
/// let x_train = array![
///     [2.77, 1.78],
///     [1.73, 1.17],
///     [3.68, 2.81],
///     [7.50, 3.16],
///     [9.00, 3.34],
///     [7.44, 0.48],
/// ];
/// let y_train = array![0usize, 0, 0, 1, 1, 1];
///
/// let mut tree = DecisionTreeClassifier::new(Some(3), 2).unwrap();
/// tree.fit(&x_train, &y_train).unwrap();
///
/// let x_test = array![[2.0, 1.5], [8.0, 2.0]];
/// let predictions = tree.predict(&x_test).unwrap();
/// assert_eq!(predictions, array![0, 1]);
///
/// // Class frequencies of the leaf each sample lands in
/// let probabilities = tree.predict_proba(&x_test).unwrap();
/// assert_eq!(probabilities.dim(), (2, 2));
/// ```
#[derive(Debug, Clone)]
pub struct DecisionTree<C: Criterion> {
    root: Option<Box<Node<C::Target>>>,
    n_features: usize,
    n_classes: Option<usize>,
    params: DecisionTreeParams,
    criterion: PhantomData<C>,
}

/// Decision tree classifier using Gini impurity.
pub type DecisionTreeClassifier = DecisionTree<Gini>;

/// Decision tree regressor using variance (mean squared error).
pub type DecisionTreeRegressor = DecisionTree<MeanSquaredError>;

impl<C: Criterion> Default for DecisionTree<C> {
    fn default() -> Self {
        Self::from_valid_params(DecisionTreeParams::default())
    }
}

impl<C: Criterion> DecisionTree<C> {
    /// Creates a new decision tree with the given depth limit and split threshold.
    ///
    /// The remaining hyperparameters take their defaults (see [`DecisionTreeParams`]).
    ///
    /// # Parameters
    ///
    /// - `max_depth` - Maximum depth of the tree, `None` for unlimited.
    /// - `min_samples_split` - Minimum number of samples required to split a node. Must be at least 2.
    ///
    /// # Returns
    ///
    /// - `Ok(DecisionTree)` - A new untrained tree
    /// - `Err(ModelError::InputValidationError)` - If `min_samples_split < 2`
    pub fn new(max_depth: Option<usize>, min_samples_split: usize) -> Result<Self, ModelError> {
        Self::with_params(DecisionTreeParams {
            max_depth,
            min_samples_split,
            ..DecisionTreeParams::default()
        })
    }

    /// Creates a new decision tree from a full set of hyperparameters.
    ///
    /// # Returns
    ///
    /// - `Ok(DecisionTree)` - A new untrained tree
    /// - `Err(ModelError::InputValidationError)` - If the parameters are invalid (see [`DecisionTreeParams::validate`])
    pub fn with_params(params: DecisionTreeParams) -> Result<Self, ModelError> {
        params.validate()?;
        Ok(Self::from_valid_params(params))
    }

    pub(crate) fn from_valid_params(params: DecisionTreeParams) -> Self {
        Self {
            root: None,
            n_features: 0,
            n_classes: None,
            params,
            criterion: PhantomData,
        }
    }

    // Getters
    get_field!(get_n_features, n_features, usize);
    get_field!(get_n_classes, n_classes, Option<usize>);
    get_field_as_ref!(get_parameters, params, &DecisionTreeParams);
    get_field_as_ref!(get_root, root, &Option<Box<Node<C::Target>>>);

    /// Depth of the fitted tree (a single leaf has depth 0).
    ///
    /// # Returns
    ///
    /// - `Ok(usize)` - The depth if the model has been fitted
    /// - `Err(ModelError::NotFitted)` - If the model has not been fitted yet
    pub fn get_depth(&self) -> Result<usize, ModelError> {
        Ok(self.fitted_root()?.depth())
    }

    /// Number of leaves of the fitted tree.
    ///
    /// # Returns
    ///
    /// - `Ok(usize)` - The leaf count if the model has been fitted
    /// - `Err(ModelError::NotFitted)` - If the model has not been fitted yet
    pub fn get_n_leaves(&self) -> Result<usize, ModelError> {
        Ok(self.fitted_root()?.n_leaves())
    }

    fn fitted_root(&self) -> Result<&Node<C::Target>, ModelError> {
        self.root.as_deref().ok_or(ModelError::NotFitted)
    }

    /// Trains the decision tree on the provided training data.
    ///
    /// Builds the tree structure by recursively finding the best splits according to
    /// the criterion and stopping rules. On error the tree keeps its previous state.
    ///
    /// # Parameters
    ///
    /// - `x` - Training features as a 2D array with shape (n_samples, n_features).
    /// - `y` - Training targets as a 1D array with shape (n_samples,).
    ///
    /// # Returns
    ///
    /// * `Result<&mut Self, ModelError>` - A mutable reference to `self` for method chaining, or a `ModelError::InputValidationError` if:
    ///     - `x` has no rows or no columns
    ///     - the number of rows in `x` and the length of `y` differ
    ///     - `x` (or, for regression, `y`) contains NaN or infinite values
    #[instrument(skip_all, fields(criterion = C::NAME, n_samples = x.nrows(), n_features = x.ncols()))]
    pub fn fit<S1, S2>(&mut self, x: &ArrayBase<S1, Ix2>, y: &ArrayBase<S2, Ix1>) -> Result<&mut Self, ModelError>
    where
        S1: Data<Elem = f64>,
        S2: Data<Elem = C::Target>,
    {
        preliminary_check(x, Some(y.len()))?;
        C::check_targets(y)?;

        let indices: Vec<usize> = (0..x.nrows()).collect();
        let n_classes = C::n_classes(y);
        self.fit_on_indices(x.view(), y.view(), &indices, n_classes);

        Ok(self)
    }

    /// Grows the tree on the rows listed in `indices` (repeats allowed).
    ///
    /// Inputs must already be validated; this is the entry point used by ensembles.
    pub(crate) fn fit_on_indices(
        &mut self,
        x: ArrayView2<f64>,
        y: ArrayView1<C::Target>,
        indices: &[usize],
        n_classes: Option<usize>,
    ) {
        let mut builder = TreeBuilder::<C> {
            x: x.view(),
            y: y.view(),
            params: &self.params,
            n_classes,
            rng: make_rng(self.params.random_state),
        };
        let root = builder.build(indices, 0);

        debug!(
            n_samples = indices.len(),
            depth = root.depth(),
            n_leaves = root.n_leaves(),
            "decision tree fitted"
        );

        self.root = Some(Box::new(root));
        self.n_features = x.ncols();
        self.n_classes = n_classes;
    }

    /// Predicts the output for a single sample.
    ///
    /// # Parameters
    ///
    /// * `x` - Feature vector for a single sample as a slice of length `n_features`.
    ///
    /// # Returns
    ///
    /// * `Result<C::Target, ModelError>` - The predicted value (class label for classification, continuous value for regression), or a `ModelError` if the model is not fitted or the sample has the wrong length.
    pub fn predict_one(&self, x: &[f64]) -> Result<C::Target, ModelError> {
        let root = self.fitted_root()?;
        check_sample(x, self.n_features)?;

        Ok(root.predict(&ArrayView1::from(x)))
    }

    /// Prediction for a row already known to have the training width.
    pub(crate) fn predict_row<S>(&self, row: &ArrayBase<S, Ix1>) -> Option<C::Target>
    where
        S: Data<Elem = f64>,
    {
        self.root.as_ref().map(|root| root.predict(row))
    }

    /// Predicts outputs for multiple samples, in parallel for large inputs.
    ///
    /// # Parameters
    ///
    /// * `x` - Feature matrix as a 2D array with shape (n_samples, n_features).
    ///
    /// # Returns
    ///
    /// * `Result<Array1<C::Target>, ModelError>` - A 1D array of predicted values with shape (n_samples,), or a `ModelError` if prediction fails.
    pub fn predict<S>(&self, x: &ArrayBase<S, Ix2>) -> Result<Array1<C::Target>, ModelError>
    where
        S: Data<Elem = f64>,
    {
        let root = self.fitted_root()?;
        check_prediction_input(x, self.n_features)?;

        let predictions: Vec<C::Target> = if x.nrows() >= DEFAULT_PARALLEL_THRESHOLD_SAMPLES {
            x.axis_iter(Axis(0))
                .into_par_iter()
                .map(|row| root.predict(&row))
                .collect()
        } else {
            x.axis_iter(Axis(0))
                .map(|row| root.predict(&row))
                .collect()
        };

        Ok(Array1::from_vec(predictions))
    }

    /// Trains the tree on training data and immediately makes predictions on test data.
    ///
    /// # Parameters
    ///
    /// - `x_train` - Training features as a 2D array with shape (n_train_samples, n_features).
    /// - `y_train` - Training targets as a 1D array with shape (n_train_samples,).
    /// - `x_test` - Test features as a 2D array with shape (n_test_samples, n_features).
    ///
    /// # Returns
    ///
    /// * `Result<Array1<C::Target>, ModelError>` - A 1D array of predictions for the test data with shape (n_test_samples,), or a `ModelError` if training or prediction fails.
    pub fn fit_predict<S1, S2, S3>(
        &mut self,
        x_train: &ArrayBase<S1, Ix2>,
        y_train: &ArrayBase<S2, Ix1>,
        x_test: &ArrayBase<S3, Ix2>,
    ) -> Result<Array1<C::Target>, ModelError>
    where
        S1: Data<Elem = f64>,
        S2: Data<Elem = C::Target>,
        S3: Data<Elem = f64>,
    {
        self.fit(x_train, y_train)?;
        self.predict(x_test)
    }

    /// Mean decrease in impurity of every feature, normalized to sum to 1.
    ///
    /// # Returns
    ///
    /// - `Ok(Array1<f64>)` - One importance per feature; all zeros when the tree is a single leaf
    /// - `Err(ModelError::NotFitted)` - If the model has not been fitted yet
    pub fn feature_importances(&self) -> Result<Array1<f64>, ModelError> {
        let root = self.fitted_root()?;

        let mut importances = vec![0.0; self.n_features];
        root.accumulate_importances(&mut importances);

        Ok(normalize_importances(Array1::from_vec(importances)))
    }

    /// Generates a human-readable string representation of the decision tree structure.
    ///
    /// Internal nodes show their split condition, leaves their prediction. The output uses
    /// tree-like formatting with box-drawing characters for branches.
    ///
    /// # Returns
    ///
    /// * `Result<String, ModelError>` - A formatted string containing the tree structure, or a `ModelError::NotFitted` if the model hasn't been trained yet.
    pub fn generate_tree_structure(&self) -> Result<String, ModelError> {
        let root = self.fitted_root()?;

        let mut output = String::new();
        output.push_str("Decision Tree Structure:\n");
        print_node(root, &mut output, "", true);
        Ok(output)
    }
}

impl DecisionTree<Gini> {
    /// Predicts class probabilities for multiple samples (classification only).
    ///
    /// The probabilities of a sample are the class frequencies of the training samples in
    /// the leaf it reaches.
    ///
    /// # Parameters
    ///
    /// * `x` - Feature matrix as a 2D array with shape (n_samples, n_features).
    ///
    /// # Returns
    ///
    /// * `Result<Array2<f64>, ModelError>` - A 2D array of class probabilities with shape (n_samples, n_classes), where each row sums to 1.0, or a `ModelError` if prediction fails.
    pub fn predict_proba<S>(&self, x: &ArrayBase<S, Ix2>) -> Result<Array2<f64>, ModelError>
    where
        S: Data<Elem = f64>,
    {
        let root = self.fitted_root()?;
        check_prediction_input(x, self.n_features)?;

        let n_classes = self.n_classes.unwrap_or(0);
        let mut result = Array2::zeros((x.nrows(), n_classes));

        for (mut out_row, row) in result.outer_iter_mut().zip(x.outer_iter()) {
            if let Node::Leaf {
                probabilities: Some(probabilities),
                ..
            } = root.route(&row)
            {
                for (out, &p) in out_row.iter_mut().zip(probabilities.iter()) {
                    *out = p;
                }
            }
        }

        Ok(result)
    }
}

/// Rejects prediction inputs whose width differs from the training data or that hold NaN/infinite values.
pub(crate) fn check_prediction_input<S>(x: &ArrayBase<S, Ix2>, n_features: usize) -> Result<(), ModelError>
where
    S: Data<Elem = f64>,
{
    if x.ncols() != n_features {
        return Err(ModelError::InputValidationError(format!(
            "Feature dimension mismatch, expected {}, got {}",
            n_features,
            x.ncols()
        )));
    }

    if x.iter().any(|v| !v.is_finite()) {
        return Err(ModelError::InputValidationError(
            "Input data contains NaN or infinite values".to_string(),
        ));
    }

    Ok(())
}

/// Single-sample counterpart of [`check_prediction_input`].
pub(crate) fn check_sample(x: &[f64], n_features: usize) -> Result<(), ModelError> {
    if x.len() != n_features {
        return Err(ModelError::InputValidationError(format!(
            "Feature dimension mismatch, expected {}, got {}",
            n_features,
            x.len()
        )));
    }

    if x.iter().any(|v| !v.is_finite()) {
        return Err(ModelError::InputValidationError(
            "Input sample contains NaN or infinite values".to_string(),
        ));
    }

    Ok(())
}

/// Scales importances to sum to 1, leaving an all-zero vector untouched.
pub(crate) fn normalize_importances(importances: Array1<f64>) -> Array1<f64> {
    let total = importances.sum();
    if total > 0.0 {
        importances / total
    } else {
        importances
    }
}

// Recursively print tree structure
fn print_node<T: Debug>(node: &Node<T>, output: &mut String, prefix: &str, is_last: bool) {
    let connector = if is_last { "└── " } else { "├── " };
    output.push_str(&format!("{}{}", prefix, connector));

    match node {
        Node::Leaf {
            value, n_samples, ..
        } => {
            output.push_str(&format!("Leaf: value={:?} (samples={})\n", value, n_samples));
        }
        Node::Internal {
            feature_index,
            threshold,
            left,
            right,
            ..
        } => {
            output.push_str(&format!(
                "Split: feature[{}] <= {:.4}\n",
                feature_index, threshold
            ));

            let new_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
            print_node(left, output, &new_prefix, false);
            print_node(right, output, &new_prefix, true);
        }
    }
}
