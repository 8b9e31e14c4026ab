use super::Dataset;
use crate::fitter::INTERCEPT;
use crate::selectors::error::ConfigError;
use crate::Float;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use std::collections::HashSet;
use std::convert::TryFrom;

/// This implementation block provides a method for the creation of datasets
/// from a design matrix and targets, with generated feature names `x0`,
/// `x1`, ...
impl<F: Float> TryFrom<(Array2<F>, Array1<F>)> for Dataset<F> {
    type Error = ConfigError;

    fn try_from(data: (Array2<F>, Array1<F>)) -> Result<Self, Self::Error> {
        let names = (0..data.0.ncols()).map(|j| format!("x{}", j)).collect();
        Dataset::new(data.0, data.1, names)
    }
}

impl<F: Float> Dataset<F> {
    /// This method instantiates a new dataset, checking that every column has
    /// a unique name other than [`INTERCEPT`](crate::INTERCEPT) and that the
    /// design matrix and targets agree on the number of samples.
    pub fn new(
        design_matrix: Array2<F>,
        targets: Array1<F>,
        feature_names: Vec<String>,
    ) -> Result<Dataset<F>, ConfigError> {
        if design_matrix.nrows() != targets.len() {
            return Err(ConfigError::MismatchedSamples {
                n_rows: design_matrix.nrows(),
                n_targets: targets.len(),
            });
        }
        if design_matrix.ncols() != feature_names.len() {
            return Err(ConfigError::MismatchedFeatureNames {
                n_features: design_matrix.ncols(),
                n_names: feature_names.len(),
            });
        }
        let mut seen = HashSet::with_capacity(feature_names.len());
        for name in feature_names.iter() {
            if name == INTERCEPT {
                return Err(ConfigError::ReservedFeatureName(name.clone()));
            }
            if !seen.insert(name.as_str()) {
                return Err(ConfigError::DuplicateFeature(name.clone()));
            }
        }

        Ok(Dataset {
            design_matrix,
            targets,
            feature_names,
        })
    }

    pub fn n_samples(&self) -> usize {
        self.targets.len()
    }

    pub fn n_features(&self) -> usize {
        self.feature_names.len()
    }

    /// This method is a getter for the targets.
    pub fn targets(&self) -> ArrayView1<F> {
        self.targets.view()
    }

    /// This method is a getter for the design matrix.
    pub fn design_matrix(&self) -> ArrayView2<F> {
        self.design_matrix.view()
    }

    /// Predictor names, in column order.
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn feature_index(&self, name: &str) -> Option<usize> {
        self.feature_names.iter().position(|n| n == name)
    }

    /// Predictors absent from `included`, enumerated in column order.
    ///
    /// The forward step relies on this order to break ties deterministically.
    pub fn candidates<'a>(&'a self, included: &'a [String]) -> impl Iterator<Item = &'a String> {
        self.feature_names
            .iter()
            .filter(move |name| !included.contains(name))
    }

    /// Checks that `features` only names predictors of this dataset, each at
    /// most once.
    pub fn check_features(&self, features: &[String]) -> Result<(), ConfigError> {
        let mut seen = HashSet::with_capacity(features.len());
        for name in features.iter() {
            if self.feature_index(name).is_none() {
                return Err(ConfigError::UnknownFeature(name.clone()));
            }
            if !seen.insert(name.as_str()) {
                return Err(ConfigError::DuplicateFeature(name.clone()));
            }
        }
        Ok(())
    }

    /// Builds the design matrix handed to a [`Fitter`](crate::Fitter): a
    /// leading column of ones for the intercept followed by the columns of
    /// `features`, in the given order.
    pub fn design_with_intercept(&self, features: &[String]) -> Result<Array2<F>, ConfigError> {
        let indices = features
            .iter()
            .map(|name| {
                self.feature_index(name)
                    .ok_or_else(|| ConfigError::UnknownFeature(name.clone()))
            })
            .collect::<Result<Vec<usize>, ConfigError>>()?;

        let mut design = Array2::<F>::ones((self.n_samples(), indices.len() + 1));
        for (k, &j) in indices.iter().enumerate() {
            design.column_mut(k + 1).assign(&self.design_matrix.column(j));
        }
        Ok(design)
    }
}
