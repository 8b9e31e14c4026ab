use super::error::ConfigError;
use super::param_guard::ParamGuard;
use super::Float;

fn is_valid_threshold<F: Float>(threshold: F) -> bool {
    threshold > F::zero() && threshold <= F::one()
}

fn check_threshold_in<F: Float>(threshold_in: F) -> Result<(), ConfigError> {
    if is_valid_threshold(threshold_in) {
        Ok(())
    } else {
        Err(ConfigError::InvalidThresholdIn(
            threshold_in.to_f64().unwrap_or(f64::NAN),
        ))
    }
}

fn check_threshold_out<F: Float>(threshold_out: F) -> Result<(), ConfigError> {
    if is_valid_threshold(threshold_out) {
        Ok(())
    } else {
        Err(ConfigError::InvalidThresholdOut(
            threshold_out.to_f64().unwrap_or(f64::NAN),
        ))
    }
}

fn check_max_iterations(max_iterations: Option<usize>) -> Result<(), ConfigError> {
    match max_iterations {
        Some(0) => Err(ConfigError::InvalidMaxIterations(0)),
        _ => Ok(()),
    }
}

/// A verified hyperparameter set ready for forward selection
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardSelectionValidParams<F> {
    initial_list: Vec<String>,
    threshold_in: F,
    max_iterations: Option<usize>,
    verbose: bool,
}

impl<F: Float> ForwardSelectionValidParams<F> {
    pub fn initial_list(&self) -> &[String] {
        &self.initial_list
    }

    pub fn threshold_in(&self) -> F {
        self.threshold_in
    }

    pub fn max_iterations(&self) -> Option<usize> {
        self.max_iterations
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

/// A hyper-parameter set during construction
///
/// Forward selection starts from `initial_list` and, on every pass, adds the
/// candidate predictor with the smallest p-value as long as that p-value is
/// strictly below `threshold_in`.
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardSelectionParams<F>(ForwardSelectionValidParams<F>);

impl<F: Float> Default for ForwardSelectionParams<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Configure and run a forward selection
impl<F: Float> ForwardSelectionParams<F> {
    /// Create default forward selection hyper parameters
    pub fn new() -> ForwardSelectionParams<F> {
        Self(ForwardSelectionValidParams {
            initial_list: Vec::new(),
            threshold_in: F::cast(0.05),
            max_iterations: None,
            verbose: true,
        })
    }

    /// Set the predictors the model starts with. Every name must be a
    /// predictor of the dataset, listed once.
    /// Defaults to an empty list if not set.
    pub fn initial_list<S, I>(mut self, initial_list: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = S>,
    {
        self.0.initial_list = initial_list.into_iter().map(Into::into).collect();
        self
    }

    /// Set the p-value a candidate must be strictly below to be added.
    ///
    /// Defaults to `0.05` if not set.
    pub fn threshold_in(mut self, threshold_in: F) -> Self {
        self.0.threshold_in = threshold_in;
        self
    }

    /// Set the maximum number of passes before the selection gives up.
    ///
    /// Defaults to no limit if not set.
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.0.max_iterations = Some(max_iterations);
        self
    }

    /// Log every accepted addition, the final predictors and the summary of
    /// the final fit.
    /// Defaults to `true` if not set.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.0.verbose = verbose;
        self
    }
}

impl<F: Float> ParamGuard for ForwardSelectionParams<F> {
    type Checked = ForwardSelectionValidParams<F>;
    type Error = ConfigError;

    /// Validate the hyper parameters
    fn check_ref(&self) -> Result<&Self::Checked, ConfigError> {
        check_threshold_in(self.0.threshold_in)?;
        check_max_iterations(self.0.max_iterations)?;
        Ok(&self.0)
    }

    fn check(self) -> Result<Self::Checked, ConfigError> {
        self.check_ref()?;
        Ok(self.0)
    }
}

/// A verified hyperparameter set ready for backward elimination
#[derive(Debug, Clone, PartialEq)]
pub struct BackwardEliminationValidParams<F> {
    threshold_out: F,
    max_iterations: Option<usize>,
    verbose: bool,
}

impl<F: Float> BackwardEliminationValidParams<F> {
    pub fn threshold_out(&self) -> F {
        self.threshold_out
    }

    pub fn max_iterations(&self) -> Option<usize> {
        self.max_iterations
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

/// A hyper-parameter set during construction
///
/// Backward elimination starts from every predictor of the dataset and, on
/// every pass, drops the predictor with the largest p-value as long as that
/// p-value is strictly above `threshold_out`.
#[derive(Debug, Clone, PartialEq)]
pub struct BackwardEliminationParams<F>(BackwardEliminationValidParams<F>);

impl<F: Float> Default for BackwardEliminationParams<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Configure and run a backward elimination
impl<F: Float> BackwardEliminationParams<F> {
    /// Create default backward elimination hyper parameters
    pub fn new() -> BackwardEliminationParams<F> {
        Self(BackwardEliminationValidParams {
            threshold_out: F::cast(0.05),
            max_iterations: None,
            verbose: true,
        })
    }

    /// Set the p-value an included predictor must exceed to be dropped.
    ///
    /// Defaults to `0.05` if not set.
    pub fn threshold_out(mut self, threshold_out: F) -> Self {
        self.0.threshold_out = threshold_out;
        self
    }

    /// Set the maximum number of passes before the selection gives up.
    ///
    /// Defaults to no limit if not set.
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.0.max_iterations = Some(max_iterations);
        self
    }

    /// Sets the verbosity level of the selection.
    ///
    /// Defaults to `true` if not set.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.0.verbose = verbose;
        self
    }
}

impl<F: Float> ParamGuard for BackwardEliminationParams<F> {
    type Checked = BackwardEliminationValidParams<F>;
    type Error = ConfigError;

    /// Validate the hyper parameters
    fn check_ref(&self) -> Result<&Self::Checked, ConfigError> {
        check_threshold_out(self.0.threshold_out)?;
        check_max_iterations(self.0.max_iterations)?;
        Ok(&self.0)
    }

    fn check(self) -> Result<Self::Checked, ConfigError> {
        self.check_ref()?;
        Ok(self.0)
    }
}

/// A verified hyperparameter set ready for stepwise selection
#[derive(Debug, Clone, PartialEq)]
pub struct StepwiseSelectionValidParams<F> {
    initial_list: Vec<String>,
    threshold_in: F,
    threshold_out: F,
    max_iterations: Option<usize>,
    verbose: bool,
}

impl<F: Float> StepwiseSelectionValidParams<F> {
    pub fn initial_list(&self) -> &[String] {
        &self.initial_list
    }

    pub fn threshold_in(&self) -> F {
        self.threshold_in
    }

    pub fn threshold_out(&self) -> F {
        self.threshold_out
    }

    pub fn max_iterations(&self) -> Option<usize> {
        self.max_iterations
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

/// A hyper-parameter set during construction
///
/// Each pass of a stepwise selection runs a forward step followed by a
/// backward step. `threshold_in` must not exceed `threshold_out`.
#[derive(Debug, Clone, PartialEq)]
pub struct StepwiseSelectionParams<F>(StepwiseSelectionValidParams<F>);

impl<F: Float> Default for StepwiseSelectionParams<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Configure and run a stepwise selection
impl<F: Float> StepwiseSelectionParams<F> {
    /// Create default stepwise selection hyper parameters
    pub fn new() -> StepwiseSelectionParams<F> {
        Self(StepwiseSelectionValidParams {
            initial_list: Vec::new(),
            threshold_in: F::cast(0.05),
            threshold_out: F::cast(0.05),
            max_iterations: None,
            verbose: true,
        })
    }

    /// Set the predictors the model starts with.
    ///
    /// Defaults to an empty list if not set.
    pub fn initial_list<S, I>(mut self, initial_list: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = S>,
    {
        self.0.initial_list = initial_list.into_iter().map(Into::into).collect();
        self
    }

    /// Set the p-value a candidate must be strictly below to be added.
    ///
    /// Defaults to `0.05` if not set.
    pub fn threshold_in(mut self, threshold_in: F) -> Self {
        self.0.threshold_in = threshold_in;
        self
    }

    /// Set the p-value an included predictor must exceed to be dropped.
    ///
    /// Defaults to `0.05` if not set.
    pub fn threshold_out(mut self, threshold_out: F) -> Self {
        self.0.threshold_out = threshold_out;
        self
    }

    /// Set the maximum number of passes before the selection gives up.
    /// Predictors can still cycle when their p-values depend on which other
    /// predictors are in the model.
    /// Defaults to no limit if not set.
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.0.max_iterations = Some(max_iterations);
        self
    }

    /// Sets the verbosity level of the selection.
    ///
    /// Defaults to `true` if not set.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.0.verbose = verbose;
        self
    }
}

impl<F: Float> ParamGuard for StepwiseSelectionParams<F> {
    type Checked = StepwiseSelectionValidParams<F>;
    type Error = ConfigError;

    /// Validate the hyper parameters
    fn check_ref(&self) -> Result<&Self::Checked, ConfigError> {
        check_threshold_in(self.0.threshold_in)?;
        check_threshold_out(self.0.threshold_out)?;
        check_max_iterations(self.0.max_iterations)?;
        if self.0.threshold_in > self.0.threshold_out {
            return Err(ConfigError::InconsistentThresholds {
                threshold_in: self.0.threshold_in.to_f64().unwrap_or(f64::NAN),
                threshold_out: self.0.threshold_out.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(&self.0)
    }

    fn check(self) -> Result<Self::Checked, ConfigError> {
        self.check_ref()?;
        Ok(self.0)
    }
}
