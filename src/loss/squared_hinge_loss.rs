use crate::loss::loss_func::LossFuncOps;
use crate::utils::is_signed_label;

/// `l(a, y) = 1/2 * max(0, 1 - a * y)^2`, differentiable everywhere
pub struct SquaredHingeLoss {}

fn margin(pred: f64, truth: f64) -> f64 {
    assert!(is_signed_label(truth), "Squared hinge loss expects a label in {{-1, 1}}, got {}", truth);
    pred * truth
}

impl LossFuncOps for SquaredHingeLoss {
    const NAME: &'static str = "SquaredHinge";

    fn evaluate(pred: f64, truth: f64) -> f64 {
        let z = margin(pred, truth);
        if z > 1.0 {
            return 0.0;
        }
        let d = 1.0 - z;
        0.5 * d * d
    }

    fn gradient(pred: f64, truth: f64) -> f64 {
        let z = margin(pred, truth);
        if z > 1.0 {
            return 0.0;
        }
        -truth * (1.0 - z)
    }

    fn predict(x: f64) -> f64 {
        x
    }
}
