use crate::Float;


pub mod error;
pub mod hyperparams;
pub mod param_guard;
#[allow(clippy::module_inception)]
pub mod selectors;
pub mod traits;
