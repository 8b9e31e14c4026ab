use ndarray::ScalarOperand;

use num_traits::{FromPrimitive, NumAssignOps, NumCast};

use std::cmp::PartialOrd;
use std::fmt;
use std::iter::Sum;

/// Float point numbers
///
/// This trait bound multiplexes to the most common assumption of floating point
/// number and implement them for 32bit and 64bit float points. P-values,
/// thresholds and fitted coefficients all share this scalar type.
/// Ref: https://github.com/rust-ml/linfa/blob/master/src/dataset/mod.rs#L36
pub trait Float:
    'static
    + FromPrimitive
    + num_traits::Float
    + PartialOrd
    + Sync
    + Send
    + Default
    + fmt::Display
    + fmt::Debug
    + Sum
    + NumAssignOps
    + ScalarOperand
    + approx::AbsDiffEq<Epsilon = Self>
{
    fn cast<T: NumCast>(x: T) -> Self {
        NumCast::from(x).unwrap()
    }
}

impl Float for f32 {}

impl Float for f64 {}

pub mod datasets;
pub mod fitter;
pub mod helpers;
pub mod selectors;
pub mod stepwise;

pub use datasets::Dataset;
pub use fitter::{FitResult, Fitter, INTERCEPT};
pub use selectors::error::{ConfigError, FitError, Result, SelectionError};
pub use selectors::selectors::{
    backward_selection, forward_selection, stepwise_selection, BackwardElimination,
    ForwardSelection, StepwiseSelection,
};
pub use stepwise::{Selection, SelectionEvent, StepAction};
