use super::error::{ConfigError, Result, SelectionError};
use super::hyperparams::{
    BackwardEliminationParams, BackwardEliminationValidParams, ForwardSelectionParams,
    ForwardSelectionValidParams, StepwiseSelectionParams, StepwiseSelectionValidParams,
};
use super::traits::Select;

use crate::datasets::Dataset;
use crate::fitter::Fitter;
use crate::stepwise::{select, Selection, SelectionConfig};
use crate::Float;

/// Forward selection
///
/// Grows the model one predictor at a time, always picking the most
/// significant candidate, until no candidate is significant enough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForwardSelection;

impl ForwardSelection {
    /// This method instantiates forward selection hyperparameters with their
    /// default values.
    pub fn params<F: Float>() -> ForwardSelectionParams<F> {
        ForwardSelectionParams::new()
    }
}

impl<F: Float, M: Fitter<F>> Select<F, M, SelectionError> for ForwardSelectionValidParams<F> {
    type Object = Selection<F>;

    fn select(&self, dataset: &Dataset<F>, fitter: &M) -> Result<Self::Object> {
        dataset.check_features(self.initial_list())?;
        let config = SelectionConfig {
            threshold_in: Some(self.threshold_in()),
            threshold_out: None,
            max_iterations: self.max_iterations(),
            verbose: self.verbose(),
        };
        select(dataset, fitter, self.initial_list().to_vec(), &config)
    }
}

/// Backward elimination
///
/// Starts from the full model and removes the least significant predictor
/// until every remaining predictor is significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackwardElimination;

impl BackwardElimination {
    /// This method instantiates backward elimination hyperparameters with
    /// their default values.
    pub fn params<F: Float>() -> BackwardEliminationParams<F> {
        BackwardEliminationParams::new()
    }
}

impl<F: Float, M: Fitter<F>> Select<F, M, SelectionError> for BackwardEliminationValidParams<F> {
    type Object = Selection<F>;

    fn select(&self, dataset: &Dataset<F>, fitter: &M) -> Result<Self::Object> {
        if dataset.n_features() == 0 {
            return Err(ConfigError::EmptyFeatureSet.into());
        }
        let config = SelectionConfig {
            threshold_in: None,
            threshold_out: Some(self.threshold_out()),
            max_iterations: self.max_iterations(),
            verbose: self.verbose(),
        };
        select(dataset, fitter, dataset.feature_names().to_vec(), &config)
    }
}

/// Stepwise selection
///
/// Alternates a forward step and a backward step within every pass, so a
/// predictor added early can leave the model once others make it redundant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepwiseSelection;

impl StepwiseSelection {
    /// This method instantiates stepwise selection hyperparameters with their
    /// default values.
    pub fn params<F: Float>() -> StepwiseSelectionParams<F> {
        StepwiseSelectionParams::new()
    }
}

impl<F: Float, M: Fitter<F>> Select<F, M, SelectionError> for StepwiseSelectionValidParams<F> {
    type Object = Selection<F>;

    fn select(&self, dataset: &Dataset<F>, fitter: &M) -> Result<Self::Object> {
        dataset.check_features(self.initial_list())?;
        let config = SelectionConfig {
            threshold_in: Some(self.threshold_in()),
            threshold_out: Some(self.threshold_out()),
            max_iterations: self.max_iterations(),
            verbose: self.verbose(),
        };
        select(dataset, fitter, self.initial_list().to_vec(), &config)
    }
}

/// Runs a forward selection from `initial_list` and returns the selected
/// predictors with the fit of the final model.
pub fn forward_selection<F: Float, M: Fitter<F>>(
    dataset: &Dataset<F>,
    fitter: &M,
    initial_list: &[String],
    threshold_in: F,
    verbose: bool,
) -> Result<Selection<F>> {
    ForwardSelection::params()
        .initial_list(initial_list.iter().cloned())
        .threshold_in(threshold_in)
        .verbose(verbose)
        .select(dataset, fitter)
}

/// Runs a backward elimination from the full model and returns the retained
/// predictors with the fit of the final model.
pub fn backward_selection<F: Float, M: Fitter<F>>(
    dataset: &Dataset<F>,
    fitter: &M,
    threshold_out: F,
    verbose: bool,
) -> Result<Selection<F>> {
    BackwardElimination::params()
        .threshold_out(threshold_out)
        .verbose(verbose)
        .select(dataset, fitter)
}

/// Runs a stepwise selection from `initial_list` and returns the selected
/// predictors with the fit of the final model.
pub fn stepwise_selection<F: Float, M: Fitter<F>>(
    dataset: &Dataset<F>,
    fitter: &M,
    initial_list: &[String],
    threshold_in: F,
    threshold_out: F,
    verbose: bool,
) -> Result<Selection<F>> {
    StepwiseSelection::params()
        .initial_list(initial_list.iter().cloned())
        .threshold_in(threshold_in)
        .threshold_out(threshold_out)
        .verbose(verbose)
        .select(dataset, fitter)
}
