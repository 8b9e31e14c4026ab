
/// This module contains helpers functions to efficiently write tests and
/// benchmarks: random datasets, array assertions and deterministic fitters.
pub mod test_helpers {
    use crate::datasets::Dataset;
    use crate::fitter::{FitResult, Fitter};
    use crate::selectors::error::FitError;
    use crate::Float;
    use approx::AbsDiffEq;
    use ndarray::prelude::*;
    use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rand_distr::{Distribution, Normal};
    use std::cell::Cell;
    use std::collections::{BTreeSet, HashMap};
    use std::convert::TryFrom;

    pub fn assert_array_all_close<F>(x: ArrayView1<F>, y: ArrayView1<F>, delta: F)
    where
        F: Float + AbsDiffEq<Epsilon = F>,
    {
        assert_eq!(x.len(), y.len());
        for i in 0..x.len() {
            if x[i].abs_diff_ne(&y[i], delta) {
                panic!("x: {}, y: {} ; with precision level {}", x[i], y[i], delta);
            }
        }
    }

    pub fn fill_random_vector(capacity: usize, seed: u64) -> Vec<f64> {
        let mut r = StdRng::seed_from_u64(seed);
        let normal = Normal::new(0., 1.).unwrap();

        let mut data_x: Vec<f64> = Vec::with_capacity(capacity);
        for _ in 0..data_x.capacity() {
            data_x.push(normal.sample(&mut r));
        }
        data_x
    }

    /// Draws a Gaussian design matrix and regresses it on Gaussian weights
    /// plus Gaussian noise. Features are named `x0`, `x1`, ...
    pub fn generate_random_data(n_samples: usize, n_features: usize) -> Dataset<f64> {
        let data_x = fill_random_vector(n_samples * n_features, 42);
        let data_w = fill_random_vector(n_features, 43);
        let data_e = fill_random_vector(n_samples, 44);
        let x = Array2::from_shape_vec((n_samples, n_features).f(), data_x).unwrap();
        let true_w = Array1::from_shape_vec(n_features, data_w).unwrap();
        let noise = Array1::from_shape_vec(n_samples, data_e).unwrap();
        let y = x.dot(&true_w) + noise;

        Dataset::try_from((x, y)).unwrap()
    }

    /// A dataset whose values are irrelevant, for use with [`TableFitter`].
    pub fn named_dataset(names: &[&str]) -> Dataset<f64> {
        let n_samples = 4;
        let x = Array2::from_shape_fn((n_samples, names.len()), |(i, j)| (i * (j + 1)) as f64);
        let y = Array1::from_shape_fn(n_samples, |i| i as f64);
        Dataset::new(x, y, names.iter().map(|n| n.to_string()).collect()).unwrap()
    }

    /// A fitter replaying scripted p-values.
    ///
    /// Each entry maps a set of predictors (order does not matter) to the
    /// p-value of each of them in the model fitted on exactly that set.
    /// Fitting a set without an entry fails with [`FitError::Solver`].
    #[derive(Debug)]
    pub struct TableFitter {
        fits: HashMap<BTreeSet<String>, HashMap<String, f64>>,
        intercept_p_value: f64,
        n_calls: Cell<usize>,
    }

    impl Default for TableFitter {
        fn default() -> Self {
            Self::new()
        }
    }

    impl TableFitter {
        pub fn new() -> TableFitter {
            TableFitter {
                fits: HashMap::new(),
                intercept_p_value: 0.999,
                n_calls: Cell::new(0),
            }
        }

        pub fn with_fit(mut self, p_values: &[(&str, f64)]) -> TableFitter {
            let key = p_values.iter().map(|(name, _)| name.to_string()).collect();
            let values = p_values
                .iter()
                .map(|&(name, p_value)| (name.to_string(), p_value))
                .collect();
            self.fits.insert(key, values);
            self
        }

        /// Scripts the p-value reported for the intercept of every fit.
        pub fn with_intercept_p_value(mut self, p_value: f64) -> TableFitter {
            self.intercept_p_value = p_value;
            self
        }

        /// Number of fits requested so far.
        pub fn n_calls(&self) -> usize {
            self.n_calls.get()
        }
    }

    impl Fitter<f64> for TableFitter {
        fn fit(
            &self,
            targets: ArrayView1<f64>,
            design: ArrayView2<f64>,
            columns: &[String],
        ) -> Result<FitResult<f64>, FitError> {
            self.n_calls.set(self.n_calls.get() + 1);
            if design.nrows() != targets.len() {
                return Err(FitError::DimensionMismatch {
                    n_rows: design.nrows(),
                    n_targets: targets.len(),
                });
            }

            let key: BTreeSet<String> = columns.iter().skip(1).cloned().collect();
            let table = self
                .fits
                .get(&key)
                .ok_or_else(|| FitError::Solver(format!("no scripted fit for {:?}", key)))?;

            let mut p_values = Vec::with_capacity(columns.len());
            p_values.push(self.intercept_p_value);
            for column in columns.iter().skip(1) {
                let p_value = table
                    .get(column)
                    .copied()
                    .ok_or_else(|| FitError::MissingPValue(column.clone()))?;
                p_values.push(p_value);
            }
            let p_values = Array1::from(p_values);
            let coefficients = p_values.mapv(|p| 1. - p);

            FitResult::new(columns.to_vec(), coefficients, p_values)
        }
    }

    /// A deterministic stand-in for an OLS fitter, for benchmarks and
    /// property tests.
    ///
    /// Every column gets its marginal least-squares slope against the targets
    /// and a pseudo p-value of `1 - |r|`, `r` being the Pearson correlation.
    /// Constant columns, the intercept included, get a p-value of one. Neither
    /// value depends on the other columns of the design matrix.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct CorrelationFitter;

    impl<F: Float> Fitter<F> for CorrelationFitter {
        fn fit(
            &self,
            targets: ArrayView1<F>,
            design: ArrayView2<F>,
            columns: &[String],
        ) -> Result<FitResult<F>, FitError> {
            if design.nrows() != targets.len() {
                return Err(FitError::DimensionMismatch {
                    n_rows: design.nrows(),
                    n_targets: targets.len(),
                });
            }

            let y_mean = targets.mean().unwrap_or_else(F::zero);
            let y_centered = &targets - y_mean;
            let y_ss = y_centered.dot(&y_centered);

            let mut coefficients = Array1::<F>::zeros(design.ncols());
            let mut p_values = Array1::<F>::ones(design.ncols());
            for (j, column) in design.columns().into_iter().enumerate() {
                let x_mean = column.mean().unwrap_or_else(F::zero);
                let x_centered = &column - x_mean;
                let x_ss = x_centered.dot(&x_centered);
                if x_ss == F::zero() || y_ss == F::zero() {
                    coefficients[j] = y_mean;
                    continue;
                }
                let xy = x_centered.dot(&y_centered);
                let r = xy / (x_ss * y_ss).sqrt();
                coefficients[j] = xy / x_ss;
                p_values[j] = F::one() - r.abs();
            }

            FitResult::new(columns.to_vec(), coefficients, p_values)
        }
    }
}
