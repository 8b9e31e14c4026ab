use crate::datasets::Dataset;
use crate::fitter::Fitter;

/// Select trait
///
/// A selector searches the predictors of a dataset for a subset whose
/// regression coefficients are all significant, querying `fitter` for the
/// p-values of every candidate model along the way.
pub trait Select<F, M: Fitter<F>, E: std::error::Error> {
    type Object;

    fn select(&self, dataset: &Dataset<F>, fitter: &M) -> Result<Self::Object, E>;
}
