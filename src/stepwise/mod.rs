use std::fmt;

use crate::datasets::Dataset;
use crate::fitter::{FitResult, Fitter, INTERCEPT};
use crate::selectors::error::{FitError, Result, SelectionError};
use crate::Float;

#[cfg(test)]
mod tests;

/// Whether a step added a predictor to the model or dropped one from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAction {
    Add,
    Drop,
}

/// A single accepted add or drop decision.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionEvent<F> {
    pub action: StepAction,
    pub feature: String,
    pub p_value: F,
    /// One-based index of the pass the decision was made in.
    pub pass: usize,
}

impl<F: Float> fmt::Display for SelectionEvent<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = match self.action {
            StepAction::Add => "Add ",
            StepAction::Drop => "Drop",
        };
        write!(
            f,
            "{} {:30} with p-value {:.6}",
            action, self.feature, self.p_value
        )
    }
}

/// Which steps a selection pass runs, and the thresholds they compare
/// p-values against.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionConfig<F> {
    /// Runs the forward step when set.
    pub threshold_in: Option<F>,
    /// Runs the backward step when set.
    pub threshold_out: Option<F>,
    pub max_iterations: Option<usize>,
    pub verbose: bool,
}

/// The outcome of a selection driver: the retained predictors, in the order
/// they entered the model, and a final fit on exactly those predictors.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<F> {
    included: Vec<String>,
    fit: FitResult<F>,
    history: Vec<SelectionEvent<F>>,
    n_passes: usize,
}

impl<F: Float> Selection<F> {
    pub fn included(&self) -> &[String] {
        &self.included
    }

    pub fn fit(&self) -> &FitResult<F> {
        &self.fit
    }

    /// Every accepted add and drop, in the order they happened.
    pub fn history(&self) -> &[SelectionEvent<F>] {
        &self.history
    }

    /// Number of passes run, including the final pass that made no change.
    pub fn n_passes(&self) -> usize {
        self.n_passes
    }

    pub fn into_parts(self) -> (Vec<String>, FitResult<F>) {
        (self.included, self.fit)
    }
}

/// Fits `targets` on an intercept plus the columns of `features`.
///
/// An empty `features` slice yields the intercept-only model.
pub fn fit_subset<F, M>(
    dataset: &Dataset<F>,
    fitter: &M,
    features: &[String],
) -> Result<FitResult<F>>
where
    F: Float,
    M: Fitter<F>,
{
    let design = dataset.design_with_intercept(features)?;
    let mut columns = Vec::with_capacity(features.len() + 1);
    columns.push(INTERCEPT.to_string());
    columns.extend(features.iter().cloned());

    Ok(fitter.fit(dataset.targets(), design.view(), &columns)?)
}

/// Forward step
///
/// Fits one model per candidate predictor, `included` plus that candidate,
/// and keeps the candidate with the smallest p-value of its own. Candidates
/// are visited in column order and only a strictly smaller p-value replaces
/// the current best, so ties go to the earliest column. NaN p-values never
/// qualify.
///
/// Returns the name and p-value of the best candidate if it is strictly
/// below `threshold_in`, `None` otherwise or when there is no candidate.
pub fn forward_step<F, M>(
    dataset: &Dataset<F>,
    fitter: &M,
    included: &[String],
    threshold_in: F,
) -> Result<Option<(String, F)>>
where
    F: Float,
    M: Fitter<F>,
{
    let mut best: Option<(&String, F)> = None;
    let mut subset = included.to_vec();

    for candidate in dataset.candidates(included) {
        subset.push(candidate.clone());
        let fit = fit_subset(dataset, fitter, &subset)?;
        subset.pop();

        let p_value = fit
            .p_value(candidate)
            .ok_or_else(|| FitError::MissingPValue(candidate.clone()))?;
        log::debug!("candidate {} has p-value {}", candidate, p_value);

        if p_value.is_nan() {
            continue;
        }
        match best {
            Some((_, best_p_value)) if p_value >= best_p_value => {}
            _ => best = Some((candidate, p_value)),
        }
    }

    Ok(best
        .filter(|&(_, p_value)| p_value < threshold_in)
        .map(|(feature, p_value)| (feature.clone(), p_value)))
}

/// Backward step
///
/// Fits the model on `included` and finds the predictor with the largest
/// p-value, the intercept excluded. Ties go to the predictor that entered the
/// model first and NaN p-values never qualify.
///
/// Returns that predictor if its p-value is strictly above `threshold_out`.
/// An empty `included` set is a no-op: nothing is fitted.
pub fn backward_step<F, M>(
    dataset: &Dataset<F>,
    fitter: &M,
    included: &[String],
    threshold_out: F,
) -> Result<Option<(String, F)>>
where
    F: Float,
    M: Fitter<F>,
{
    if included.is_empty() {
        return Ok(None);
    }

    let fit = fit_subset(dataset, fitter, included)?;
    let mut worst: Option<(&String, F)> = None;
    for feature in included.iter() {
        let p_value = fit
            .p_value(feature)
            .ok_or_else(|| FitError::MissingPValue(feature.clone()))?;
        log::debug!("included {} has p-value {}", feature, p_value);

        if p_value.is_nan() {
            continue;
        }
        match worst {
            Some((_, worst_p_value)) if p_value <= worst_p_value => {}
            _ => worst = Some((feature, p_value)),
        }
    }

    Ok(worst
        .filter(|&(_, p_value)| p_value > threshold_out)
        .map(|(feature, p_value)| (feature.clone(), p_value)))
}

fn record<F: Float>(
    history: &mut Vec<SelectionEvent<F>>,
    event: SelectionEvent<F>,
    verbose: bool,
) {
    if verbose {
        log::info!("{}", event);
    }
    history.push(event);
}

/// Selection loop
///
/// Starting from `included`, runs passes made of the forward step and/or the
/// backward step, as enabled by `config`, until a full pass leaves the set
/// unchanged. The forward step of a pass always runs before its backward
/// step, so a predictor added in a pass can be dropped in that same pass.
///
/// Once stable, the final set is fitted one last time and returned with the
/// history of accepted decisions. Fitting errors abort the loop immediately.
pub fn select<F, M>(
    dataset: &Dataset<F>,
    fitter: &M,
    mut included: Vec<String>,
    config: &SelectionConfig<F>,
) -> Result<Selection<F>>
where
    F: Float,
    M: Fitter<F>,
{
    let mut history = Vec::new();
    let mut n_passes = 0;

    loop {
        if let Some(max_iterations) = config.max_iterations {
            if n_passes >= max_iterations {
                return Err(SelectionError::MaxIterationsReached(max_iterations));
            }
        }
        n_passes += 1;
        let mut changed = false;

        if let Some(threshold_in) = config.threshold_in {
            if let Some((feature, p_value)) =
                forward_step(dataset, fitter, &included, threshold_in)?
            {
                included.push(feature.clone());
                changed = true;
                record(
                    &mut history,
                    SelectionEvent {
                        action: StepAction::Add,
                        feature,
                        p_value,
                        pass: n_passes,
                    },
                    config.verbose,
                );
            }
        }

        if let Some(threshold_out) = config.threshold_out {
            if let Some((feature, p_value)) =
                backward_step(dataset, fitter, &included, threshold_out)?
            {
                included.retain(|f| *f != feature);
                changed = true;
                record(
                    &mut history,
                    SelectionEvent {
                        action: StepAction::Drop,
                        feature,
                        p_value,
                        pass: n_passes,
                    },
                    config.verbose,
                );
            }
        }

        if !changed {
            break;
        }
    }

    let fit = fit_subset(dataset, fitter, &included)?;
    if config.verbose {
        log::info!("Final attributes: {:?}", included);
        log::info!("\n{}", fit);
    }

    Ok(Selection {
        included,
        fit,
        history,
        n_passes,
    })
}
