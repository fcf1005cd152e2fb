use super::*;

/// Default minimum number of trees required to enable parallel tree construction
const DEFAULT_PARALLEL_THRESHOLD_TREES: usize = 10;

/// Default minimum number of samples required to enable parallel prediction
const DEFAULT_PARALLEL_THRESHOLD_SAMPLES: usize = 100;

/// Number of features searched at every split of a forest's trees.
///
/// # Variants
///
/// - `Sqrt` - `floor(sqrt(n_features))`, at least 1. The usual choice for classification.
/// - `Log2` - `floor(log2(n_features))`, at least 1.
/// - `All` - Every feature, in a freshly shuffled order at each node.
/// - `Fixed` - A fixed count, clamped to the number of features. `Fixed(0)` means "auto" and behaves like `Sqrt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaxFeatures {
    Sqrt,
    Log2,
    All,
    Fixed(usize),
}

impl MaxFeatures {
    /// Resolves the setting to a concrete feature count for a table with `n_features` columns.
    ///
    /// # Examples
    /// ```rust
    /// use rustyforest::machine_learning::MaxFeatures;
    ///
    /// assert_eq!(MaxFeatures::Sqrt.resolve(10), 3);
    /// assert_eq!(MaxFeatures::Fixed(0).resolve(16), 4);
    /// assert_eq!(MaxFeatures::Fixed(50).resolve(4), 4);
    /// assert_eq!(MaxFeatures::Sqrt.resolve(1), 1);
    /// ```
    pub fn resolve(self, n_features: usize) -> usize {
        let resolved = match self {
            MaxFeatures::Sqrt | MaxFeatures::Fixed(0) => (n_features as f64).sqrt().floor() as usize,
            MaxFeatures::Log2 => (n_features as f64).log2().floor() as usize,
            MaxFeatures::All => n_features,
            MaxFeatures::Fixed(n) => n,
        };

        resolved.clamp(1, n_features.max(1))
    }
}

/// Hyperparameters of a random forest.
///
/// # Fields
///
/// - `n_estimators` - Number of trees in the forest. Must be at least 1.
/// - `max_depth` - Maximum depth of each tree, `None` for unlimited.
/// - `min_samples_split` - Minimum number of samples required to split a node. Must be at least 2.
/// - `min_samples_leaf` - Minimum number of samples required on each side of a split. Must be at least 1.
/// - `max_features` - Number of features drawn at random for every split search.
/// - `oob_score` - Whether to evaluate the forest on each tree's out-of-bag rows during `fit`.
/// - `random_state` - Seed of the forest's root random source. If `None`, it is seeded from entropy at `fit` time.
#[derive(Debug, Clone, PartialEq)]
pub struct RandomForestParams {
    pub n_estimators: usize,
    pub max_depth: Option<usize>,
    pub min_samples_split: usize,
    pub min_samples_leaf: usize,
    pub max_features: MaxFeatures,
    pub oob_score: bool,
    pub random_state: Option<u64>,
}

/// Default hyperparameters for random forest.
///
/// - `n_estimators` - 10
/// - `max_depth` - Some(5)
/// - `min_samples_split` - 2
/// - `min_samples_leaf` - 1
/// - `max_features` - `MaxFeatures::Sqrt`
/// - `oob_score` - false
/// - `random_state` - None
impl Default for RandomForestParams {
    fn default() -> Self {
        Self {
            n_estimators: 10,
            max_depth: Some(5),
            min_samples_split: 2,
            min_samples_leaf: 1,
            max_features: MaxFeatures::Sqrt,
            oob_score: false,
            random_state: None,
        }
    }
}

impl RandomForestParams {
    /// Checks that every hyperparameter is within its valid range.
    pub fn validate(&self) -> Result<(), ModelError> {
        validate_n_estimators(self.n_estimators)?;
        validate_min_samples_split(self.min_samples_split)?;
        validate_min_samples_leaf(self.min_samples_leaf)?;
        Ok(())
    }

    /// Parameters of one member tree searching `max_features` features per split.
    fn tree_params(&self, max_features: usize, random_state: u64) -> DecisionTreeParams {
        DecisionTreeParams {
            max_depth: self.max_depth,
            min_samples_split: self.min_samples_split,
            min_samples_leaf: self.min_samples_leaf,
            min_impurity_decrease: 0.0,
            max_features: Some(max_features),
            random_state: Some(random_state),
        }
    }
}

/// Random forest for classification and regression tasks.
///
/// Each of the `n_estimators` trees is grown on its own bootstrap sample of the training
/// rows, and every split of every tree searches a fresh random subset of `max_features`
/// features. Classification forests ([`RandomForestClassifier`]) predict by majority vote,
/// ties going to the label voted first in tree order; regression forests
/// ([`RandomForestRegressor`]) predict the mean of their trees.
///
/// Per-tree seeds are drawn from the forest's root random source before any tree is
/// built, so a fixed `random_state` gives identical forests whether the trees are trained
/// sequentially or in parallel.
///
/// # Fields
///
/// - `trees` - The fitted trees, or `None` if not yet fitted
/// - `params` - Hyperparameters of the forest
/// - `n_features` - Number of features in the training data
/// - `n_classes` - For classification, the number of classes (largest label + 1)
/// - `max_features` - `params.max_features` resolved against the training data
/// - `oob_score` - Out-of-bag score computed during `fit` when enabled
///
/// # Example
/// ```rust
/// use rustyforest::machine_learning::RandomForestRegressor;
/// use ndarray::array;
///
/// let x = array![[5.1, 3.5, 1.4], [4.9, 3.0, 1.4], [6.2, 3.4, 5.4], [5.9, 3.0, 5.1]];
/// let y = array![0.2, 0.2, 2.3, 1.8];
///
/// let mut forest = RandomForestRegressor::new(10, Some(5), 2, None).unwrap();
/// let predictions = forest.fit_predict(&x, &y, &x).unwrap();
/// assert_eq!(predictions.len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct RandomForest<C: Criterion> {
    trees: Option<Vec<DecisionTree<C>>>,
    params: RandomForestParams,
    n_features: usize,
    n_classes: Option<usize>,
    max_features: usize,
    oob_score: Option<f64>,
    criterion: PhantomData<C>,
}

/// Random forest classifier aggregating Gini trees by majority vote.
pub type RandomForestClassifier = RandomForest<Gini>;

/// Random forest regressor averaging variance-minimizing trees.
pub type RandomForestRegressor = RandomForest<MeanSquaredError>;

impl<C: Criterion> Default for RandomForest<C> {
    fn default() -> Self {
        Self::from_valid_params(RandomForestParams::default())
    }
}

impl<C: Criterion> RandomForest<C> {
    /// Creates a new random forest.
    ///
    /// # Parameters
    ///
    /// - `n_estimators` - Number of trees. Must be at least 1.
    /// - `max_depth` - Maximum depth of each tree, `None` for unlimited.
    /// - `min_samples_split` - Minimum number of samples required to split a node. Must be at least 2.
    /// - `max_features` - Features searched per split. `None` or `Some(0)` means auto, `floor(sqrt(n_features))`.
    ///
    /// # Returns
    ///
    /// - `Ok(RandomForest)` - A new unfitted forest
    /// - `Err(ModelError::InputValidationError)` - If a parameter is out of range
    pub fn new(
        n_estimators: usize,
        max_depth: Option<usize>,
        min_samples_split: usize,
        max_features: Option<usize>,
    ) -> Result<Self, ModelError> {
        Self::with_params(RandomForestParams {
            n_estimators,
            max_depth,
            min_samples_split,
            max_features: match max_features {
                Some(n) if n > 0 => MaxFeatures::Fixed(n),
                _ => MaxFeatures::Sqrt,
            },
            ..RandomForestParams::default()
        })
    }

    /// Creates a new random forest from a full set of hyperparameters.
    pub fn with_params(params: RandomForestParams) -> Result<Self, ModelError> {
        params.validate()?;
        Ok(Self::from_valid_params(params))
    }

    fn from_valid_params(params: RandomForestParams) -> Self {
        Self {
            trees: None,
            params,
            n_features: 0,
            n_classes: None,
            max_features: 0,
            oob_score: None,
            criterion: PhantomData,
        }
    }

    // Getters
    get_field!(get_n_features, n_features, usize);
    get_field!(get_n_classes, n_classes, Option<usize>);
    get_field!(get_max_features, max_features, usize);
    get_field_as_ref!(get_parameters, params, &RandomForestParams);
    get_field_as_ref!(get_trees, trees, &Option<Vec<DecisionTree<C>>>);

    /// Gets the number of trees the forest grows.
    pub fn get_n_estimators(&self) -> usize {
        self.params.n_estimators
    }

    /// Gets the seed of the forest's root random source.
    pub fn get_random_state(&self) -> Option<u64> {
        self.params.random_state
    }

    /// Returns the out-of-bag score computed by the last `fit`.
    ///
    /// The score is accuracy for classification and R² for regression, computed over the
    /// training rows that at least one tree left out of its bootstrap sample.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(f64))` - The score, if `oob_score` was enabled and at least one row was out of bag
    /// - `Ok(None)` - If `oob_score` was disabled or every row was drawn by every tree
    /// - `Err(ModelError::NotFitted)` - If the model has not been fitted yet
    pub fn get_oob_score(&self) -> Result<Option<f64>, ModelError> {
        self.fitted_trees()?;
        Ok(self.oob_score)
    }

    fn fitted_trees(&self) -> Result<&[DecisionTree<C>], ModelError> {
        self.trees.as_deref().ok_or(ModelError::NotFitted)
    }

    /// Trains the forest on the provided training data.
    ///
    /// Draws one seed per tree from the root random source, then grows each tree on its
    /// own bootstrap sample, in parallel when there are enough trees. On error the forest
    /// keeps its previous state.
    ///
    /// # Parameters
    ///
    /// - `x` - Training features as a 2D array with shape (n_samples, n_features)
    /// - `y` - Training targets as a 1D array with shape (n_samples,)
    ///
    /// # Returns
    ///
    /// * `Result<&mut Self, ModelError>` - A mutable reference to self if successful, or `ModelError::InputValidationError` if:
    ///     - Input data is empty or has no features
    ///     - The number of rows and targets differ
    ///     - Input contains NaN or infinite values
    #[instrument(skip_all, fields(criterion = C::NAME, n_estimators = self.params.n_estimators, n_samples = x.nrows()))]
    pub fn fit<S1, S2>(&mut self, x: &ArrayBase<S1, Ix2>, y: &ArrayBase<S2, Ix1>) -> Result<&mut Self, ModelError>
    where
        S1: Data<Elem = f64>,
        S2: Data<Elem = C::Target>,
    {
        preliminary_check(x, Some(y.len()))?;
        C::check_targets(y)?;

        let x = x.view();
        let y = y.view();
        let n_samples = x.nrows();
        let n_features = x.ncols();
        let n_estimators = self.params.n_estimators;
        let max_features = self.params.max_features.resolve(n_features);
        let n_classes = C::n_classes(&y);

        info!(
            n_estimators,
            n_samples,
            n_features,
            n_classes,
            max_features,
            max_depth = self.params.max_depth,
            "training random forest"
        );

        let mut root_rng = make_rng(self.params.random_state);
        let tree_seeds: Vec<u64> = (0..n_estimators).map(|_| root_rng.random()).collect();
        let params = &self.params;

        let build_tree = |seed: u64| -> (DecisionTree<C>, Vec<usize>) {
            let mut rng = StdRng::seed_from_u64(seed);
            let in_bag = bootstrap_indices(n_samples, &mut rng);

            let mut tree = DecisionTree::<C>::from_valid_params(
                params.tree_params(max_features, rng.random()),
            );
            tree.fit_on_indices(x, y, &in_bag, n_classes);

            (tree, out_of_bag_indices(n_samples, &in_bag))
        };

        let fitted: Vec<(DecisionTree<C>, Vec<usize>)> = if n_estimators >= DEFAULT_PARALLEL_THRESHOLD_TREES {
            tree_seeds.into_par_iter().map(build_tree).collect()
        } else {
            tree_seeds.into_iter().map(build_tree).collect()
        };

        debug!(n_trees_trained = fitted.len(), "tree training complete");

        let oob_score = if self.params.oob_score {
            out_of_bag_score(&fitted, x, y)
        } else {
            None
        };

        let trees: Vec<DecisionTree<C>> = fitted.into_iter().map(|(tree, _)| tree).collect();

        self.trees = Some(trees);
        self.n_features = n_features;
        self.n_classes = n_classes;
        self.max_features = max_features;
        self.oob_score = oob_score;

        info!(oob_score, "random forest training complete");

        Ok(self)
    }

    /// Predicts the output for a single sample by querying every tree.
    ///
    /// # Parameters
    ///
    /// * `x` - Feature vector for a single sample as a slice of length `n_features`
    ///
    /// # Returns
    ///
    /// * `Result<C::Target, ModelError>` - The majority label (classification) or mean prediction (regression), or a `ModelError` if the model is not fitted or the sample has the wrong length
    pub fn predict_one(&self, x: &[f64]) -> Result<C::Target, ModelError> {
        let trees = self.fitted_trees()?;
        check_sample(x, self.n_features)?;

        Ok(aggregate_row(trees, &ArrayView1::from(x)))
    }

    /// Predicts outputs for multiple samples.
    ///
    /// Uses parallelization when the number of samples exceeds the threshold.
    ///
    /// # Parameters
    ///
    /// * `x` - Input data as a 2D array with shape (n_samples, n_features)
    ///
    /// # Returns
    ///
    /// * `Result<Array1<C::Target>, ModelError>` - A 1D array of predictions, or `ModelError` if:
    ///     - Model has not been fitted
    ///     - Feature dimension does not match training data
    ///     - Input contains NaN or infinite values
    pub fn predict<S>(&self, x: &ArrayBase<S, Ix2>) -> Result<Array1<C::Target>, ModelError>
    where
        S: Data<Elem = f64>,
    {
        let trees = self.fitted_trees()?;
        check_prediction_input(x, self.n_features)?;

        let predictions: Vec<C::Target> = if x.nrows() >= DEFAULT_PARALLEL_THRESHOLD_SAMPLES {
            x.axis_iter(Axis(0))
                .into_par_iter()
                .map(|row| aggregate_row(trees, &row))
                .collect()
        } else {
            x.axis_iter(Axis(0))
                .map(|row| aggregate_row(trees, &row))
                .collect()
        };

        Ok(Array1::from_vec(predictions))
    }

    /// Trains the forest on the dataset and immediately predicts on test data.
    ///
    /// # Returns
    ///
    /// * `Result<Array1<C::Target>, ModelError>` - Predictions for `x_test`, or `ModelError` if fitting or prediction fails
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

    /// Mean decrease in impurity of every feature, averaged over the trees and normalized to sum to 1.
    ///
    /// # Returns
    ///
    /// - `Ok(Array1<f64>)` - One importance per feature
    /// - `Err(ModelError::NotFitted)` - If the model has not been fitted yet
    pub fn feature_importances(&self) -> Result<Array1<f64>, ModelError> {
        let trees = self.fitted_trees()?;

        let mut total: Array1<f64> = Array1::zeros(self.n_features);
        for tree in trees {
            total += &tree.feature_importances()?;
        }

        Ok(normalize_importances(total / trees.len() as f64))
    }
}

impl RandomForest<Gini> {
    /// Predicts class probabilities as the fraction of trees voting for each class.
    ///
    /// # Parameters
    ///
    /// * `x` - Feature matrix as a 2D array with shape (n_samples, n_features)
    ///
    /// # Returns
    ///
    /// * `Result<Array2<f64>, ModelError>` - A 2D array with shape (n_samples, n_classes) whose rows sum to 1.0, or a `ModelError` if prediction fails
    pub fn predict_proba<S>(&self, x: &ArrayBase<S, Ix2>) -> Result<Array2<f64>, ModelError>
    where
        S: Data<Elem = f64>,
    {
        let trees = self.fitted_trees()?;
        check_prediction_input(x, self.n_features)?;

        let n_classes = self.n_classes.unwrap_or(0);
        let weight = 1.0 / trees.len() as f64;
        let mut result = Array2::zeros((x.nrows(), n_classes));

        for (mut out_row, row) in result.outer_iter_mut().zip(x.outer_iter()) {
            for label in trees.iter().filter_map(|tree| tree.predict_row(&row)) {
                if let Some(p) = out_row.get_mut(label) {
                    *p += weight;
                }
            }
        }

        Ok(result)
    }
}

/// Combines the predictions of every tree for one row.
fn aggregate_row<C, S>(trees: &[DecisionTree<C>], row: &ArrayBase<S, Ix1>) -> C::Target
where
    C: Criterion,
    S: Data<Elem = f64>,
{
    let votes: Vec<C::Target> = trees.iter().filter_map(|tree| tree.predict_row(row)).collect();
    C::aggregate(&votes)
}

/// Scores the forest on the rows each tree did not see.
///
/// Every row is predicted by aggregating only the trees that left it out of their
/// bootstrap sample; rows that no tree left out are skipped.
fn out_of_bag_score<C: Criterion>(
    fitted: &[(DecisionTree<C>, Vec<usize>)],
    x: ArrayView2<f64>,
    y: ArrayView1<C::Target>,
) -> Option<f64> {
    let mut oob_votes: Vec<Vec<C::Target>> = vec![Vec::new(); x.nrows()];
    for (tree, oob_indices) in fitted {
        for &i in oob_indices {
            if let Some(prediction) = tree.predict_row(&x.row(i)) {
                oob_votes[i].push(prediction);
            }
        }
    }

    let (y_true, y_pred): (Vec<C::Target>, Vec<C::Target>) = oob_votes
        .iter()
        .enumerate()
        .filter(|(_, votes)| !votes.is_empty())
        .map(|(i, votes)| (y[i], C::aggregate(votes)))
        .unzip();

    if y_true.is_empty() {
        debug!("no out-of-bag rows, skipping out-of-bag score");
        return None;
    }

    debug!(n_oob_samples = y_true.len(), "computed out-of-bag predictions");
    Some(C::score(&y_true, &y_pred))
}
