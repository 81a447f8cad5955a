use crate::loss::loss_func::LossFuncOps;
use crate::utils::{is_binary_label, PROBABILITY_FLOOR};

/// Negative log-likelihood of a score that is already a probability:
/// `l(p, y) = -y log(p) - (1 - y) log(1 - p)`
pub struct LogisticLoss {}

impl LossFuncOps for LogisticLoss {
    const NAME: &'static str = "Logistic";

    fn evaluate(pred: f64, truth: f64) -> f64 {
        assert!((0.0..=1.0).contains(&pred), "Logistic loss expects a probability in [0, 1], got {}", pred);
        assert!(is_binary_label(truth), "Logistic loss expects a label in {{0, 1}}, got {}", truth);

        if truth == 0.0 {
            -(1.0 - pred).max(PROBABILITY_FLOOR).ln()
        } else {
            -pred.max(PROBABILITY_FLOOR).ln()
        }
    }

    /// Unclamped derivative, so `pred` must lie strictly inside (0, 1)
    fn gradient(pred: f64, truth: f64) -> f64 {
        assert!(pred > 0.0 && pred < 1.0, "Logistic gradient expects a probability in (0, 1), got {}", pred);
        assert!(is_binary_label(truth), "Logistic loss expects a label in {{0, 1}}, got {}", truth);

        (pred - truth) / (pred * (1.0 - pred))
    }

    fn predict(x: f64) -> f64 {
        x
    }
}
