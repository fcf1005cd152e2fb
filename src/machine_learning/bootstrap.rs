use super::*;

/// Creates the random source of a model.
///
/// A seeded `StdRng` when `random_state` is given, otherwise one seeded once from
/// the thread-local entropy source.
pub fn make_rng(random_state: Option<u64>) -> StdRng {
    match random_state {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

/// Draws `n_samples` row indices uniformly with replacement from `[0, n_samples)`.
///
/// # Parameters
///
/// - `n_samples` - Number of rows in the table being resampled
/// - `rng` - Random source
///
/// # Returns
///
/// * `Vec<usize>` - Exactly `n_samples` indices, repeats and omissions expected
pub fn bootstrap_indices<R: Rng>(n_samples: usize, rng: &mut R) -> Vec<usize> {
    if n_samples == 0 {
        return Vec::new();
    }

    (0..n_samples)
        .map(|_| rng.random_range(0..n_samples))
        .collect()
}

/// Returns the rows that a bootstrap sample left out, in ascending order.
///
/// # Parameters
///
/// - `n_samples` - Number of rows in the original table
/// - `in_bag` - Indices drawn by [`bootstrap_indices`]
pub fn out_of_bag_indices(n_samples: usize, in_bag: &[usize]) -> Vec<usize> {
    let mut drawn = vec![false; n_samples];
    for &i in in_bag {
        drawn[i] = true;
    }

    (0..n_samples).filter(|&i| !drawn[i]).collect()
}

/// Resamples a table and its targets with replacement.
///
/// # Parameters
///
/// - `x` - Feature table with shape (n_samples, n_features)
/// - `y` - Targets, one per row
/// - `rng` - Random source
///
/// # Returns
///
/// * `(Array2<f64>, Array1<T>)` - A table of the same shape as `x` and its matching targets
///
/// # Examples
/// ```rust
/// use ndarray::array;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use rustyforest::machine_learning::bootstrap;
///
/// let x = array![[1.0], [2.0], [3.0]];
/// let y = array![10.0, 20.0, 30.0];
/// let mut rng = StdRng::seed_from_u64(7);
/// let (x_sample, y_sample) = bootstrap(&x, &y, &mut rng);
/// assert_eq!(x_sample.nrows(), 3);
/// for (row, target) in x_sample.rows().into_iter().zip(y_sample.iter()) {
///     assert_eq!(row[0] * 10.0, *target);
/// }
/// ```
pub fn bootstrap<S1, S2, T, R>(
    x: &ArrayBase<S1, Ix2>,
    y: &ArrayBase<S2, Ix1>,
    rng: &mut R,
) -> (Array2<f64>, Array1<T>)
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = T>,
    T: Clone,
    R: Rng,
{
    let indices = bootstrap_indices(x.nrows(), rng);
    (x.select(Axis(0), &indices), y.select(Axis(0), &indices))
}

/// Draws `min(max_features, n_features)` distinct feature indices without replacement.
///
/// All indices are shuffled and the first `max_features` are kept, so the result is in
/// random order even when every feature is selected.
///
/// # Parameters
///
/// - `n_features` - Number of features in the table
/// - `max_features` - Number of features to draw
/// - `rng` - Random source
///
/// # Returns
///
/// * `Vec<usize>` - Distinct indices, each `< n_features`
pub fn random_feature_subset<R: Rng>(
    n_features: usize,
    max_features: usize,
    rng: &mut R,
) -> Vec<usize> {
    let mut features: Vec<usize> = (0..n_features).collect();
    features.shuffle(rng);
    features.truncate(max_features.min(n_features));
    features
}
