use ndarray::{Array1, Array2};

mod impl_datasets;


/// A design matrix of named predictor columns together with the response
/// vector it is regressed against.
///
/// Feature names are unique and there is exactly one per column. The number
/// of rows of the design matrix always equals the number of targets.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset<F> {
    design_matrix: Array2<F>,
    targets: Array1<F>,
    feature_names: Vec<String>,
}
