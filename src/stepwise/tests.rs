use super::*;
use crate::helpers::test_helpers::{named_dataset, TableFitter};

fn names(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

fn forward_only(threshold_in: f64) -> SelectionConfig<f64> {
    SelectionConfig {
        threshold_in: Some(threshold_in),
        threshold_out: None,
        max_iterations: None,
        verbose: false,
    }
}

#[test]
fn forward_step_picks_smallest_p_value() {
    let dataset = named_dataset(&["a", "b", "c"]);
    let fitter = TableFitter::new()
        .with_fit(&[("a", 0.04)])
        .with_fit(&[("b", 0.01)])
        .with_fit(&[("c", 0.03)]);

    let step = forward_step(&dataset, &fitter, &[], 0.05).unwrap();
    assert_eq!(step, Some(("b".to_string(), 0.01)));
    assert_eq!(fitter.n_calls(), 3);
}

#[test]
fn forward_step_reads_the_candidate_p_value_only() {
    let dataset = named_dataset(&["a", "b"]);
    let fitter = TableFitter::new().with_fit(&[("a", 0.9), ("b", 0.02)]);

    let step = forward_step(&dataset, &fitter, &names(&["a"]), 0.05).unwrap();
    assert_eq!(step, Some(("b".to_string(), 0.02)));
}

#[test]
fn forward_step_breaks_ties_by_column_order() {
    let dataset = named_dataset(&["c", "a", "b"]);
    let fitter = TableFitter::new()
        .with_fit(&[("a", 0.01)])
        .with_fit(&[("b", 0.01)])
        .with_fit(&[("c", 0.01)]);

    for _ in 0..3 {
        let step = forward_step(&dataset, &fitter, &[], 0.05).unwrap();
        assert_eq!(step, Some(("c".to_string(), 0.01)));
    }
}

#[test]
fn forward_step_threshold_is_strict() {
    let dataset = named_dataset(&["a"]);
    let fitter = TableFitter::new().with_fit(&[("a", 0.05)]);

    assert_eq!(forward_step(&dataset, &fitter, &[], 0.05).unwrap(), None);
    assert_eq!(
        forward_step(&dataset, &fitter, &[], 0.050001).unwrap(),
        Some(("a".to_string(), 0.05))
    );
}

#[test]
fn forward_step_without_candidates_fits_nothing() {
    let dataset = named_dataset(&["a", "b"]);
    let fitter = TableFitter::new();

    let step = forward_step(&dataset, &fitter, &names(&["a", "b"]), 0.05).unwrap();
    assert_eq!(step, None);
    assert_eq!(fitter.n_calls(), 0);
}

#[test]
fn forward_step_skips_nan_p_values() {
    let dataset = named_dataset(&["a", "b"]);
    let fitter = TableFitter::new()
        .with_fit(&[("a", f64::NAN)])
        .with_fit(&[("b", 0.02)]);

    let step = forward_step(&dataset, &fitter, &[], 0.05).unwrap();
    assert_eq!(step, Some(("b".to_string(), 0.02)));
}

#[test]
fn backward_step_picks_largest_p_value() {
    let dataset = named_dataset(&["a", "b", "c"]);
    let fitter = TableFitter::new().with_fit(&[("a", 0.2), ("b", 0.01), ("c", 0.6)]);

    let step = backward_step(&dataset, &fitter, &names(&["a", "b", "c"]), 0.05).unwrap();
    assert_eq!(step, Some(("c".to_string(), 0.6)));
    assert_eq!(fitter.n_calls(), 1);
}

#[test]
fn backward_step_ignores_intercept() {
    let dataset = named_dataset(&["a"]);
    let fitter = TableFitter::new()
        .with_fit(&[("a", 0.01)])
        .with_intercept_p_value(1.0);

    assert_eq!(backward_step(&dataset, &fitter, &names(&["a"]), 0.05).unwrap(), None);
}

#[test]
fn backward_step_threshold_is_strict() {
    let dataset = named_dataset(&["a", "b"]);
    let fitter = TableFitter::new().with_fit(&[("a", 0.05), ("b", 0.01)]);

    assert_eq!(
        backward_step(&dataset, &fitter, &names(&["a", "b"]), 0.05).unwrap(),
        None
    );
    assert_eq!(
        backward_step(&dataset, &fitter, &names(&["a", "b"]), 0.049999).unwrap(),
        Some(("a".to_string(), 0.05))
    );
}

#[test]
fn backward_step_breaks_ties_by_inclusion_order() {
    let dataset = named_dataset(&["a", "b"]);
    let fitter = TableFitter::new().with_fit(&[("a", 0.7), ("b", 0.7)]);

    let step = backward_step(&dataset, &fitter, &names(&["b", "a"]), 0.05).unwrap();
    assert_eq!(step, Some(("b".to_string(), 0.7)));
}

#[test]
fn backward_step_on_empty_set_fits_nothing() {
    let dataset = named_dataset(&["a"]);
    let fitter = TableFitter::new();

    assert_eq!(backward_step(&dataset, &fitter, &[], 0.05).unwrap(), None);
    assert_eq!(fitter.n_calls(), 0);
}

#[test]
fn missing_p_value_is_a_fit_error() {
    let dataset = named_dataset(&["a"]);
    let fitter = |_: ndarray::ArrayView1<f64>,
                  _: ndarray::ArrayView2<f64>,
                  _: &[String]|
     -> std::result::Result<FitResult<f64>, FitError> {
        FitResult::new(
            vec![INTERCEPT.to_string()],
            ndarray::array![0.],
            ndarray::array![0.5],
        )
    };

    let err = forward_step(&dataset, &fitter, &[], 0.05).unwrap_err();
    assert_eq!(
        err,
        SelectionError::Fit(FitError::MissingPValue("a".to_string()))
    );
}

#[test]
fn select_records_history_and_passes() {
    let dataset = named_dataset(&["a", "b"]);
    let fitter = TableFitter::new()
        .with_fit(&[])
        .with_fit(&[("a", 0.01)])
        .with_fit(&[("b", 0.2)])
        .with_fit(&[("a", 0.01), ("b", 0.3)]);

    let selection = select(&dataset, &fitter, Vec::new(), &forward_only(0.05)).unwrap();
    assert_eq!(selection.included(), &names(&["a"])[..]);
    assert_eq!(selection.n_passes(), 2);
    assert_eq!(
        selection.history(),
        &[SelectionEvent {
            action: StepAction::Add,
            feature: "a".to_string(),
            p_value: 0.01,
            pass: 1,
        }][..]
    );
    assert_eq!(selection.fit().p_value("a"), Some(0.01));
}

#[test]
fn select_falls_back_to_intercept_only_fit() {
    let dataset = named_dataset(&["a"]);
    let fitter = TableFitter::new().with_fit(&[]).with_fit(&[("a", 0.5)]);

    let (included, fit) = select(&dataset, &fitter, Vec::new(), &forward_only(0.05))
        .unwrap()
        .into_parts();
    assert!(included.is_empty());
    assert_eq!(fit.columns(), &[INTERCEPT.to_string()][..]);
}

#[test]
fn select_stops_at_max_iterations() {
    let dataset = named_dataset(&["a", "b"]);
    let fitter = TableFitter::new()
        .with_fit(&[("a", 0.01)])
        .with_fit(&[("b", 0.01)])
        .with_fit(&[("a", 0.01), ("b", 0.01)]);
    let config = SelectionConfig {
        max_iterations: Some(2),
        ..forward_only(0.05)
    };

    let err = select(&dataset, &fitter, Vec::new(), &config).unwrap_err();
    assert_eq!(err, SelectionError::MaxIterationsReached(2));
}

#[test]
fn event_display_matches_log_format() {
    let event = SelectionEvent {
        action: StepAction::Drop,
        feature: "b".to_string(),
        p_value: 0.25,
        pass: 3,
    };
    let rendered = event.to_string();
    assert!(rendered.starts_with("Drop b "));
    assert!(rendered.ends_with("with p-value 0.250000"));
}

fn stepwise_config(verbose: bool) -> SelectionConfig<f64> {
    SelectionConfig {
        threshold_in: Some(0.05),
        threshold_out: Some(0.05),
        max_iterations: None,
        verbose,
    }
}

/// `a` enters first, `b` then enters and pushes `a` out.
fn add_then_drop_fitter() -> TableFitter {
    TableFitter::new()
        .with_fit(&[("a", 0.01)])
        .with_fit(&[("b", 0.02)])
        .with_fit(&[("a", 0.2), ("b", 0.03)])
}

fn info_records(captured_logs: &[testing_logger::CapturedLog]) -> Vec<String> {
    captured_logs
        .iter()
        .filter(|log| log.level == log::Level::Info)
        .map(|log| log.body.clone())
        .collect()
}

#[test]
fn verbose_select_logs_decisions_then_final_fit() {
    testing_logger::setup();
    let dataset = named_dataset(&["a", "b"]);
    let fitter = add_then_drop_fitter();

    let selection = select(&dataset, &fitter, Vec::new(), &stepwise_config(true)).unwrap();
    assert_eq!(selection.included(), &names(&["b"])[..]);

    let expected: Vec<String> = selection
        .history()
        .iter()
        .map(|event| event.to_string())
        .chain(vec![
            "Final attributes: [\"b\"]".to_string(),
            format!("\n{}", selection.fit()),
        ])
        .collect();
    testing_logger::validate(|captured_logs| {
        let records = info_records(captured_logs);
        assert_eq!(records, expected);
        assert!(records[0].starts_with("Add  a "));
        assert!(records[1].starts_with("Add  b "));
        assert!(records[2].starts_with("Drop a "));
    });
}

#[test]
fn quiet_select_logs_nothing() {
    testing_logger::setup();
    let dataset = named_dataset(&["a", "b"]);
    let fitter = add_then_drop_fitter();

    let selection = select(&dataset, &fitter, Vec::new(), &stepwise_config(false)).unwrap();
    assert_eq!(selection.history().len(), 3);
    testing_logger::validate(|captured_logs| {
        assert!(info_records(captured_logs).is_empty());
    });
}
