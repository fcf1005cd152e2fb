use super::*;

#[test]
fn test_bootstrap_indices() {
    let mut rng = StdRng::seed_from_u64(42);
    let indices = bootstrap_indices(50, &mut rng);

    assert_eq!(indices.len(), 50);
    assert!(indices.iter().all(|&i| i < 50));

    // 50 draws with replacement almost surely repeat a row
    let mut distinct = indices.clone();
    distinct.sort_unstable();
    distinct.dedup();
    assert!(distinct.len() < 50);
}

#[test]
fn test_bootstrap_indices_empty() {
    let mut rng = StdRng::seed_from_u64(0);
    assert!(bootstrap_indices(0, &mut rng).is_empty());
}

#[test]
fn test_bootstrap_indices_is_seeded() {
    let first = bootstrap_indices(20, &mut make_rng(Some(9)));
    let second = bootstrap_indices(20, &mut make_rng(Some(9)));
    assert_eq!(first, second);
}

#[test]
fn test_out_of_bag_indices() {
    let in_bag = vec![0, 0, 2, 4, 4, 4];
    assert_eq!(out_of_bag_indices(6, &in_bag), vec![1, 3, 5]);
    assert!(out_of_bag_indices(3, &[2, 1, 0]).is_empty());
}

#[test]
fn test_bootstrap_keeps_rows_and_targets_together() {
    let x = Array2::from_shape_fn((30, 3), |(i, j)| (i * 10 + j) as f64);
    let y = Array1::from_shape_fn(30, |i| i);
    let mut rng = StdRng::seed_from_u64(3);

    let (x_sample, y_sample) = bootstrap(&x, &y, &mut rng);
    assert_eq!(x_sample.dim(), (30, 3));
    assert_eq!(y_sample.len(), 30);

    for (row, &target) in x_sample.outer_iter().zip(y_sample.iter()) {
        assert_eq!(row, x.row(target));
    }
}

#[test]
fn test_random_feature_subset() {
    let mut rng = StdRng::seed_from_u64(1);

    for max_features in 1..=8 {
        let subset = random_feature_subset(6, max_features, &mut rng);
        assert_eq!(subset.len(), max_features.min(6));
        assert!(subset.iter().all(|&f| f < 6));

        let mut distinct = subset.clone();
        distinct.sort_unstable();
        distinct.dedup();
        assert_eq!(distinct.len(), subset.len());
    }
}

#[test]
fn test_random_feature_subset_varies_between_draws() {
    let mut rng = StdRng::seed_from_u64(5);
    let draws: Vec<Vec<usize>> = (0..20).map(|_| random_feature_subset(10, 3, &mut rng)).collect();
    assert!(draws.iter().any(|draw| draw != &draws[0]));
}
