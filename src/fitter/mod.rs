use ndarray::{Array1, ArrayView1, ArrayView2};
use std::fmt;

use crate::selectors::error::FitError;
use crate::Float;


/// Name of the intercept column prepended to every design matrix handed to a
/// [`Fitter`].
pub const INTERCEPT: &str = "const";

/// Fitter trait
///
/// A fitter estimates a linear regression of `targets` on `design` and reports
/// a p-value for every column. Column 0 of `design` is always the intercept (a
/// column of ones named [`INTERCEPT`]); `columns` names every column of
/// `design`, in order.
///
/// The selection drivers call the fitter once per candidate model and never
/// retry a failed fit.
pub trait Fitter<F> {
    fn fit(
        &self,
        targets: ArrayView1<F>,
        design: ArrayView2<F>,
        columns: &[String],
    ) -> Result<FitResult<F>, FitError>;
}

/// Closures taking the targets, the design matrix and its column names are
/// fitters.
impl<F, G> Fitter<F> for G
where
    G: Fn(ArrayView1<F>, ArrayView2<F>, &[String]) -> Result<FitResult<F>, FitError>,
{
    fn fit(
        &self,
        targets: ArrayView1<F>,
        design: ArrayView2<F>,
        columns: &[String],
    ) -> Result<FitResult<F>, FitError> {
        self(targets, design, columns)
    }
}

/// The outcome of a single regression fit: one coefficient and one p-value
/// per named column, the intercept first.
#[derive(Debug, Clone, PartialEq)]
pub struct FitResult<F> {
    columns: Vec<String>,
    coefficients: Array1<F>,
    p_values: Array1<F>,
}

impl<F: Float> FitResult<F> {
    pub fn new(
        columns: Vec<String>,
        coefficients: Array1<F>,
        p_values: Array1<F>,
    ) -> Result<FitResult<F>, FitError> {
        if columns.is_empty()
            || columns.len() != coefficients.len()
            || columns.len() != p_values.len()
        {
            return Err(FitError::ResultShape {
                n_columns: columns.len(),
                n_coefficients: coefficients.len(),
                n_p_values: p_values.len(),
            });
        }
        Ok(FitResult {
            columns,
            coefficients,
            p_values,
        })
    }

    /// Column names, the intercept first.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// This method is a getter for the coefficients vector.
    pub fn coefficients(&self) -> ArrayView1<F> {
        self.coefficients.view()
    }

    /// This method is a getter for the p-values vector, intercept included.
    pub fn p_values(&self) -> ArrayView1<F> {
        self.p_values.view()
    }

    /// Looks up the p-value of a column by name.
    pub fn p_value(&self, column: &str) -> Option<F> {
        self.columns
            .iter()
            .position(|c| c == column)
            .map(|idx| self.p_values[idx])
    }

    pub fn coefficient(&self, column: &str) -> Option<F> {
        self.columns
            .iter()
            .position(|c| c == column)
            .map(|idx| self.coefficients[idx])
    }

    /// Predictor names paired with their p-values, skipping the intercept.
    pub fn feature_p_values(&self) -> impl Iterator<Item = (&str, F)> + '_ {
        self.columns
            .iter()
            .zip(self.p_values.iter())
            .skip(1)
            .map(|(c, &p)| (c.as_str(), p))
    }
}

/// Renders a plain-text summary table of the fit.
impl<F: Float> fmt::Display for FitResult<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .columns
            .iter()
            .map(|c| c.len())
            .max()
            .unwrap_or(0)
            .max(8);
        let rule = "=".repeat(width + 32);

        writeln!(f, "{}", rule)?;
        writeln!(f, "{:<width$} {:>15} {:>15}", "", "coef", "P>|t|", width = width)?;
        writeln!(f, "{}", "-".repeat(width + 32))?;
        for ((column, coef), p_value) in self
            .columns
            .iter()
            .zip(self.coefficients.iter())
            .zip(self.p_values.iter())
        {
            writeln!(
                f,
                "{:<width$} {:>15.6} {:>15.6}",
                column,
                coef,
                p_value,
                width = width
            )?;
        }
        write!(f, "{}", rule)
    }
}
