use crate::loss::loss_func::LossFuncOps;
use crate::utils::is_signed_label;

/// `l(a, y) = max(0, 1 - a * y)`
///
/// At the margin (`a * y == 1`) the gradient takes the sub-margin branch `-y`.
pub struct HingeLoss {}

fn margin(pred: f64, truth: f64) -> f64 {
    assert!(is_signed_label(truth), "Hinge loss expects a label in {{-1, 1}}, got {}", truth);
    pred * truth
}

impl LossFuncOps for HingeLoss {
    const NAME: &'static str = "Hinge";

    fn evaluate(pred: f64, truth: f64) -> f64 {
        let z = margin(pred, truth);
        if z > 1.0 {
            return 0.0;
        }
        1.0 - z
    }

    fn gradient(pred: f64, truth: f64) -> f64 {
        let z = margin(pred, truth);
        if z > 1.0 {
            return 0.0;
        }
        -truth
    }

    fn predict(x: f64) -> f64 {
        x
    }
}
