use thiserror::Error;

/// Simplified `Result` using [`SelectionError`](crate::SelectionError) as error type
pub type Result<T> = std::result::Result<T, SelectionError>;

/// Error variants from hyperparameter checking or dataset construction
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid threshold_in {0}, expected a value in (0, 1]")]
    InvalidThresholdIn(f64),
    #[error("invalid threshold_out {0}, expected a value in (0, 1]")]
    InvalidThresholdOut(f64),
    /// A predictor could be added then dropped on every pass
    #[error("threshold_in {threshold_in} is greater than threshold_out {threshold_out}")]
    InconsistentThresholds { threshold_in: f64, threshold_out: f64 },
    #[error("invalid max_iterations {0}")]
    InvalidMaxIterations(usize),
    #[error("unknown feature {0:?}")]
    UnknownFeature(String),
    #[error("duplicate feature {0:?}")]
    DuplicateFeature(String),
    /// The name is taken by the intercept column of every fit
    #[error("feature name {0:?} is reserved for the intercept")]
    ReservedFeatureName(String),
    #[error("design matrix has {n_rows} rows but targets have {n_targets} samples")]
    MismatchedSamples { n_rows: usize, n_targets: usize },
    #[error("design matrix has {n_features} columns but {n_names} feature names were given")]
    MismatchedFeatureNames { n_features: usize, n_names: usize },
    #[error("backward elimination requires at least one predictor")]
    EmptyFeatureSet,
}

/// Error variants raised by a [`Fitter`](crate::Fitter)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FitError {
    #[error("design matrix is rank deficient")]
    RankDeficient,
    #[error("design matrix has {n_rows} rows but targets have {n_targets} samples")]
    DimensionMismatch { n_rows: usize, n_targets: usize },
    #[error("fit result has no p-value for column {0:?}")]
    MissingPValue(String),
    #[error("fit result has {n_columns} columns, {n_coefficients} coefficients and {n_p_values} p-values")]
    ResultShape {
        n_columns: usize,
        n_coefficients: usize,
        n_p_values: usize,
    },
    #[error("solver failed: {0}")]
    Solver(String),
}

/// Error variants surfaced by the selection drivers
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SelectionError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Fit(#[from] FitError),
    #[error("selection did not converge within {0} passes")]
    MaxIterationsReached(usize),
}
