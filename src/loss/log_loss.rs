use crate::loss::loss_func::LossFuncOps;
use crate::utils::{is_signed_label, EXP_TAIL_THRESHOLD};

/// `l(a, y) = log(1 + exp(-a * y))`
///
/// `d/da l(a, y) = -y / (1 + exp(a * y))`
pub struct LogLoss {}

impl LossFuncOps for LogLoss {
    const NAME: &'static str = "Log";

    fn evaluate(pred: f64, truth: f64) -> f64 {
        assert!(is_signed_label(truth), "Log loss expects a label in {{-1, 1}}, got {}", truth);
        let z = pred * truth;

        if z > EXP_TAIL_THRESHOLD {
            (-z).exp()
        } else if z < -EXP_TAIL_THRESHOLD {
            -z
        } else {
            (-z).exp().ln_1p()
        }
    }

    fn gradient(pred: f64, truth: f64) -> f64 {
        assert!(is_signed_label(truth), "Log loss expects a label in {{-1, 1}}, got {}", truth);
        let z = pred * truth;

        if z > EXP_TAIL_THRESHOLD {
            -truth * (-z).exp()
        } else if z < -EXP_TAIL_THRESHOLD {
            -truth
        } else {
            -truth / (1.0 + z.exp())
        }
    }

    fn predict(x: f64) -> f64 {
        x
    }
}
