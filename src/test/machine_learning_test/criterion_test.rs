use super::*;

#[test]
fn test_gini_criterion() {
    assert_abs_diff_eq!(Gini::impurity(&array![0, 0, 1, 1]), 0.5);
    assert_eq!(Gini::impurity(&array![3, 3, 3]), 0.0);
    assert_eq!(Gini::leaf_value(&array![2, 1, 1]), 1);
    // Ties go to the label seen first
    assert_eq!(Gini::leaf_value(&array![2, 1, 1, 2]), 2);
    assert_eq!(Gini::n_classes(&array![0, 4, 1]), Some(5));
}

#[test]
fn test_gini_aggregate() {
    assert_eq!(Gini::aggregate(&[1, 0, 1]), 1);
    assert_eq!(Gini::aggregate(&[2, 0, 0, 2]), 2);
    assert_eq!(Gini::aggregate(&[0, 1, 2]), 0);
}

#[test]
fn test_gini_class_distribution() {
    let distribution = Gini::class_distribution(&array![0, 2, 2, 2], 4).unwrap();
    assert_eq!(distribution, vec![0.25, 0.0, 0.75, 0.0]);
}

#[test]
fn test_gini_score() {
    assert_abs_diff_eq!(Gini::score(&[0, 1, 1, 0], &[0, 1, 0, 0]), 0.75);
}

#[test]
fn test_mean_squared_error_criterion() {
    assert_abs_diff_eq!(MeanSquaredError::impurity(&array![1.0, 3.0]), 1.0);
    assert_eq!(MeanSquaredError::impurity(&array![2.0, 2.0]), 0.0);
    assert_abs_diff_eq!(MeanSquaredError::leaf_value(&array![0.2, 0.2, 2.3, 1.8]), 1.125, epsilon = 1e-12);
    assert_eq!(MeanSquaredError::n_classes(&array![1.0, 2.0]), None);
    assert_eq!(MeanSquaredError::class_distribution(&array![1.0], 1), None);
}

#[test]
fn test_mean_squared_error_aggregate() {
    assert_abs_diff_eq!(MeanSquaredError::aggregate(&[1.0, 2.0, 6.0]), 3.0);
    assert_eq!(MeanSquaredError::aggregate(&[]), 0.0);
}

#[test]
fn test_mean_squared_error_check_targets() {
    assert!(MeanSquaredError::check_targets(&array![1.0, -2.0]).is_ok());
    assert!(matches!(
        MeanSquaredError::check_targets(&array![1.0, f64::NAN]),
        Err(ModelError::InputValidationError(_))
    ));
    assert!(Gini::check_targets(&array![0, 7]).is_ok());
}
