use super::traits::Select;
use crate::datasets::Dataset;
use crate::fitter::Fitter;
use std::error::Error;

/// A set of hyperparameters whose values have not been checked for validity. A reference to the
/// checked hyperparameters can only be obtained after checking has completed. If the `Select`
/// trait has been implemented on the checked hyperparameters, it is also implemented on the
/// unchecked hyperparameters with the checking step done automatically.
///
/// The hyperparameter validation done in `check_ref()` and `check()` should be identical.
pub trait ParamGuard {
    /// The checked hyperparameters
    type Checked;
    /// Error type resulting from failed hyperparameter checking
    type Error: Error;

    /// Checks the hyperparameters and returns a reference to the checked hyperparameters if
    /// successful
    fn check_ref(&self) -> Result<&Self::Checked, Self::Error>;

    /// Checks the hyperparameters and returns the checked hyperparameters if successful
    fn check(self) -> Result<Self::Checked, Self::Error>;
}

/// Performs checking step and calls `select` on the checked hyperparameters. If checking failed,
/// the checking error is converted to the original error type of `Select` and returned.
impl<F, M: Fitter<F>, E, P: ParamGuard> Select<F, M, E> for P
where
    P::Checked: Select<F, M, E>,
    E: Error + From<P::Error>,
{
    type Object = <<P as ParamGuard>::Checked as Select<F, M, E>>::Object;

    fn select(&self, dataset: &Dataset<F>, fitter: &M) -> Result<Self::Object, E> {
        let checked = self.check_ref()?;
        checked.select(dataset, fitter)
    }
}
