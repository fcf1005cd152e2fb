use super::*;

#[test]
fn test_default() {
    let forest = RandomForestClassifier::default();
    assert_eq!(forest.get_n_estimators(), 10);
    assert_eq!(forest.get_parameters().max_depth, Some(5));
    assert_eq!(forest.get_parameters().min_samples_split, 2);
    assert_eq!(forest.get_parameters().max_features, MaxFeatures::Sqrt);
    assert!(!forest.get_parameters().oob_score);
    assert_eq!(forest.get_random_state(), None);
    assert!(forest.get_trees().is_none());
}

#[test]
fn test_new() {
    let forest = RandomForestRegressor::new(7, None, 3, Some(2)).unwrap();
    assert_eq!(forest.get_n_estimators(), 7);
    assert_eq!(forest.get_parameters().max_depth, None);
    assert_eq!(forest.get_parameters().min_samples_split, 3);
    assert_eq!(forest.get_parameters().max_features, MaxFeatures::Fixed(2));

    // Zero means auto
    let auto = RandomForestRegressor::new(7, None, 3, Some(0)).unwrap();
    assert_eq!(auto.get_parameters().max_features, MaxFeatures::Sqrt);
}

#[test]
fn test_new_rejects_invalid_parameters() {
    assert!(matches!(
        RandomForestClassifier::new(0, Some(3), 2, None),
        Err(ModelError::InputValidationError(_))
    ));
    assert!(matches!(
        RandomForestClassifier::new(5, Some(3), 1, None),
        Err(ModelError::InputValidationError(_))
    ));
    assert!(matches!(
        RandomForestClassifier::with_params(RandomForestParams {
            min_samples_leaf: 0,
            ..RandomForestParams::default()
        }),
        Err(ModelError::InputValidationError(_))
    ));
}

#[test]
fn test_max_features_resolve() {
    assert_eq!(MaxFeatures::Sqrt.resolve(1), 1);
    assert_eq!(MaxFeatures::Sqrt.resolve(4), 2);
    assert_eq!(MaxFeatures::Sqrt.resolve(10), 3);
    assert_eq!(MaxFeatures::Log2.resolve(10), 3);
    assert_eq!(MaxFeatures::Log2.resolve(1), 1);
    assert_eq!(MaxFeatures::All.resolve(6), 6);
    assert_eq!(MaxFeatures::Fixed(0).resolve(9), 3);
    assert_eq!(MaxFeatures::Fixed(2).resolve(9), 2);
    assert_eq!(MaxFeatures::Fixed(20).resolve(9), 9);
}

#[test]
fn test_not_fitted() {
    let forest = RandomForestClassifier::default();
    let x = array![[1.0, 2.0]];

    assert!(matches!(forest.predict(&x), Err(ModelError::NotFitted)));
    assert!(matches!(forest.predict_one(&[1.0, 2.0]), Err(ModelError::NotFitted)));
    assert!(matches!(forest.predict_proba(&x), Err(ModelError::NotFitted)));
    assert!(matches!(forest.feature_importances(), Err(ModelError::NotFitted)));
    assert!(matches!(forest.get_oob_score(), Err(ModelError::NotFitted)));
}

#[test]
fn test_fit_builds_every_tree() {
    let (x, y) = two_clusters();
    let mut forest = RandomForestClassifier::new(4, Some(3), 2, None).unwrap();
    forest.fit(&x, &y).unwrap();

    let trees = forest.get_trees().as_ref().unwrap();
    assert_eq!(trees.len(), 4);
    assert_eq!(forest.get_n_features(), 2);
    assert_eq!(forest.get_n_classes(), Some(2));
    assert_eq!(forest.get_max_features(), 1);

    for tree in trees {
        // Every tree is grown on a bootstrap sample of the same size as the training data
        assert_eq!(tree.get_root().as_deref().unwrap().n_samples(), 10);
        assert!(tree.get_depth().unwrap() <= 3);
        assert_eq!(tree.get_parameters().max_features, Some(1));
    }
}

#[test]
fn test_classification_accuracy() {
    let (x, y) = blobs(&[(0.0, 0.0), (6.0, 6.0)], 30, 2.0, 17);
    let mut forest = RandomForestClassifier::new(25, Some(4), 2, None).unwrap();
    forest.fit(&x, &y).unwrap();

    let predictions = forest.predict(&x).unwrap();
    let correct = predictions
        .iter()
        .zip(y.iter())
        .filter(|(prediction, target)| prediction == target)
        .count();
    assert!(correct as f64 / y.len() as f64 >= 0.9);

    assert_eq!(forest.predict_one(&[0.1, -0.2]).unwrap(), 0);
    assert_eq!(forest.predict_one(&[6.2, 5.9]).unwrap(), 1);
}

#[test]
fn test_regression() {
    let x = Array2::from_shape_fn((40, 1), |(i, _)| i as f64);
    let y = x.column(0).mapv(|v| if v < 20.0 { 1.0 } else { 9.0 });

    let mut forest = RandomForestRegressor::new(12, Some(4), 2, None).unwrap();
    forest.fit(&x, &y).unwrap();

    let low = forest.predict_one(&[3.0]).unwrap();
    let high = forest.predict_one(&[35.0]).unwrap();
    assert!((1.0..=9.0).contains(&low));
    assert!((1.0..=9.0).contains(&high));
    assert!(low < 3.0);
    assert!(high > 7.0);
}

#[test]
fn test_same_seed_same_forest() {
    let (x, y) = blobs(&[(0.0, 0.0), (2.0, 2.0), (0.0, 2.0)], 20, 1.5, 4);
    let params = RandomForestParams {
        n_estimators: 15,
        max_depth: None,
        random_state: Some(42),
        ..RandomForestParams::default()
    };

    let mut first = RandomForestClassifier::with_params(params.clone()).unwrap();
    let mut second = RandomForestClassifier::with_params(params).unwrap();
    first.fit(&x, &y).unwrap();
    second.fit(&x, &y).unwrap();

    let first_trees = first.get_trees().as_ref().unwrap();
    let second_trees = second.get_trees().as_ref().unwrap();
    for (a, b) in first_trees.iter().zip(second_trees.iter()) {
        assert_eq!(a.get_root(), b.get_root());
    }

    let queries = array![[0.5, 0.5], [1.9, 2.1], [-0.3, 2.2], [1.0, 1.0]];
    assert_eq!(first.predict(&queries).unwrap(), second.predict(&queries).unwrap());
}

#[test]
fn test_same_seed_same_impurities_and_importances() {
    let (x, y) = blobs(&[(0.0, 0.0), (1.0, 1.0), (0.0, 1.0), (1.0, 0.0)], 10, 0.9, 30);
    let fit = || {
        let mut forest = RandomForestClassifier::with_params(RandomForestParams {
            n_estimators: 12,
            max_depth: None,
            random_state: Some(99),
            ..RandomForestParams::default()
        })
        .unwrap();
        forest.fit(&x, &y).unwrap();
        forest
    };

    let reference = fit();
    for _ in 0..10 {
        let forest = fit();
        assert_eq!(
            forest.feature_importances().unwrap(),
            reference.feature_importances().unwrap()
        );
        for (a, b) in forest
            .get_trees()
            .as_ref()
            .unwrap()
            .iter()
            .zip(reference.get_trees().as_ref().unwrap().iter())
        {
            assert_eq!(a.get_root(), b.get_root());
        }
    }
}

#[test]
fn test_trees_differ_within_forest() {
    let (x, y) = blobs(&[(0.0, 0.0), (1.0, 1.0)], 30, 1.5, 6);
    let mut forest = RandomForestClassifier::with_params(RandomForestParams {
        n_estimators: 5,
        max_depth: None,
        random_state: Some(1),
        ..RandomForestParams::default()
    })
    .unwrap();
    forest.fit(&x, &y).unwrap();

    let trees = forest.get_trees().as_ref().unwrap();
    assert!(trees.iter().skip(1).any(|tree| tree.get_root() != trees[0].get_root()));
}

#[test]
fn test_single_tree_single_feature() {
    let x = array![[1.0], [2.0], [3.0], [10.0], [11.0], [12.0]];
    let y = array![0, 0, 0, 1, 1, 1];
    let mut forest = RandomForestClassifier::with_params(RandomForestParams {
        n_estimators: 1,
        random_state: Some(3),
        ..RandomForestParams::default()
    })
    .unwrap();
    forest.fit(&x, &y).unwrap();

    assert_eq!(forest.get_max_features(), 1);
    assert_eq!(forest.get_trees().as_ref().unwrap().len(), 1);
    assert_eq!(forest.predict(&array![[0.0]]).unwrap().len(), 1);
}

#[test]
fn test_fit_invalid_input() {
    let mut forest = RandomForestClassifier::default();

    assert!(matches!(
        forest.fit(&Array2::<f64>::zeros((0, 3)), &Array1::<usize>::zeros(0)),
        Err(ModelError::InputValidationError(_))
    ));
    assert!(matches!(
        forest.fit(&array![[1.0], [2.0]], &array![0]),
        Err(ModelError::InputValidationError(_))
    ));
    assert!(matches!(
        forest.fit(&array![[f64::NEG_INFINITY], [2.0]], &array![0, 1]),
        Err(ModelError::InputValidationError(_))
    ));
    assert!(forest.get_trees().is_none());
}

#[test]
fn test_predict_invalid_input() {
    let (x, y) = two_clusters();
    let mut forest = RandomForestClassifier::new(3, Some(2), 2, None).unwrap();
    forest.fit(&x, &y).unwrap();

    assert!(matches!(
        forest.predict(&array![[1.0]]),
        Err(ModelError::InputValidationError(_))
    ));
    assert!(matches!(
        forest.predict_one(&[1.0, 2.0, 3.0]),
        Err(ModelError::InputValidationError(_))
    ));
    assert!(matches!(
        forest.predict(&array![[1.0, f64::NAN]]),
        Err(ModelError::InputValidationError(_))
    ));
    assert!(matches!(
        forest.predict_one(&[f64::NAN, 2.0]),
        Err(ModelError::InputValidationError(_))
    ));
}

#[test]
fn test_predict_proba() {
    let (x, y) = blobs(&[(0.0, 0.0), (5.0, 5.0), (10.0, 0.0)], 10, 1.0, 9);
    let mut forest = RandomForestClassifier::new(11, Some(3), 2, None).unwrap();
    forest.fit(&x, &y).unwrap();

    let probabilities = forest.predict_proba(&x).unwrap();
    let predictions = forest.predict(&x).unwrap();
    assert_eq!(probabilities.dim(), (30, 3));

    for (row, prediction) in probabilities.outer_iter().zip(predictions.iter()) {
        assert_abs_diff_eq!(row.sum(), 1.0, epsilon = 1e-9);
        // The voted label holds the largest share
        let best = row.iter().cloned().fold(f64::MIN, f64::max);
        assert_abs_diff_eq!(row[*prediction], best, epsilon = 1e-12);
    }
}

#[test]
fn test_feature_importances() {
    let (x, y) = blobs(&[(0.0, 0.0), (8.0, 0.0)], 20, 1.0, 2);
    let mut forest = RandomForestClassifier::with_params(RandomForestParams {
        n_estimators: 10,
        max_features: MaxFeatures::All,
        random_state: Some(5),
        ..RandomForestParams::default()
    })
    .unwrap();
    forest.fit(&x, &y).unwrap();

    let importances = forest.feature_importances().unwrap();
    assert_eq!(importances.len(), 2);
    assert_abs_diff_eq!(importances.sum(), 1.0, epsilon = 1e-9);
    assert!(importances[0] > importances[1]);
}

#[test]
fn test_oob_score() {
    let (x, y) = blobs(&[(0.0, 0.0), (8.0, 8.0)], 25, 1.0, 12);
    let mut forest = RandomForestClassifier::with_params(RandomForestParams {
        n_estimators: 20,
        oob_score: true,
        random_state: Some(7),
        ..RandomForestParams::default()
    })
    .unwrap();
    forest.fit(&x, &y).unwrap();

    let score = forest.get_oob_score().unwrap().unwrap();
    assert!(score >= 0.9 && score <= 1.0);

    let mut without = RandomForestClassifier::new(5, Some(3), 2, None).unwrap();
    without.fit(&x, &y).unwrap();
    assert_eq!(without.get_oob_score().unwrap(), None);
}

#[test]
fn test_oob_score_regression() {
    let x = Array2::from_shape_fn((30, 1), |(i, _)| i as f64);
    let y = x.column(0).mapv(|v| 2.0 * v);
    let mut forest = RandomForestRegressor::with_params(RandomForestParams {
        n_estimators: 15,
        max_depth: None,
        oob_score: true,
        random_state: Some(11),
        ..RandomForestParams::default()
    })
    .unwrap();
    forest.fit(&x, &y).unwrap();

    let score = forest.get_oob_score().unwrap().unwrap();
    assert!(score > 0.8 && score <= 1.0);
}

#[test]
fn test_fit_predict() {
    let (x, y) = two_clusters();
    let mut forest = RandomForestClassifier::with_params(RandomForestParams {
        n_estimators: 9,
        random_state: Some(0),
        ..RandomForestParams::default()
    })
    .unwrap();
    let predictions = forest.fit_predict(&x, &y, &array![[1.1, 1.2], [8.9, 8.7]]).unwrap();
    assert_eq!(predictions, array![0, 1]);
}
