use crate::loss::loss_func::LossFuncOps;
use crate::utils::{is_binary_label, sigmoid, EXP_TAIL_THRESHOLD};

/// Logistic loss on a raw logit `a`, with `p = sigmoid(a)`:
/// `l(a, y) = -y log(p) - (1 - y) log(1 - p) = (1 - y) * a + log(1 + exp(-a))`
///
/// `d/da l(a, y) = sigmoid(a) - y`
pub struct CrossEntropyLoss {}

fn check_label(truth: f64) {
    assert!(is_binary_label(truth), "Cross entropy loss expects a label in {{0, 1}}, got {}", truth);
}

impl LossFuncOps for CrossEntropyLoss {
    const NAME: &'static str = "CrossEntropy";

    fn evaluate(pred: f64, truth: f64) -> f64 {
        check_label(truth);
        let linear = (1.0 - truth) * pred;

        // log(1 + exp(-a)) without overflowing exp(-a) or losing its tail to log1p
        if pred > EXP_TAIL_THRESHOLD {
            linear + (-pred).exp()
        } else if pred < -EXP_TAIL_THRESHOLD {
            linear - pred
        } else {
            linear + (-pred).exp().ln_1p()
        }
    }

    fn gradient(pred: f64, truth: f64) -> f64 {
        check_label(truth);

        if pred < -EXP_TAIL_THRESHOLD {
            pred.exp() - truth
        } else if pred > EXP_TAIL_THRESHOLD {
            1.0 - truth
        } else {
            sigmoid(pred) - truth
        }
    }

    fn predict(x: f64) -> f64 {
        sigmoid(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::almost_equal;

    #[test]
    fn test_evaluate() {
        assert!(almost_equal(CrossEntropyLoss::evaluate(0.0, 1.0), std::f64::consts::LN_2, 1e-12));
        assert!(almost_equal(CrossEntropyLoss::evaluate(0.0, 0.0), std::f64::consts::LN_2, 1e-12));

        // -ln(sigmoid(2)) and -ln(1 - sigmoid(2))
        assert!(almost_equal(CrossEntropyLoss::evaluate(2.0, 1.0), 0.126_928_011_042_972_6, 1e-12));
        assert!(almost_equal(CrossEntropyLoss::evaluate(2.0, 0.0), 2.126_928_011_042_972_6, 1e-12));
    }

    #[test]
    fn test_evaluate_tails() {
        assert!(almost_equal(CrossEntropyLoss::evaluate(30.0, 1.0), (-30.0f64).exp(), 1e-12));
        assert!(CrossEntropyLoss::evaluate(30.0, 1.0) > 0.0);
        assert!(almost_equal(CrossEntropyLoss::evaluate(30.0, 0.0), 30.0 + (-30.0f64).exp(), 1e-12));

        assert_eq!(CrossEntropyLoss::evaluate(-30.0, 1.0), 30.0);
        assert_eq!(CrossEntropyLoss::evaluate(-30.0, 0.0), 0.0);

        assert!(CrossEntropyLoss::evaluate(1e6, 0.0).is_finite());
        assert!(CrossEntropyLoss::evaluate(-1e6, 1.0).is_finite());
    }

    #[test]
    fn test_gradient() {
        assert_eq!(CrossEntropyLoss::gradient(0.0, 1.0), -0.5);
        assert_eq!(CrossEntropyLoss::gradient(0.0, 0.0), 0.5);
        assert!(almost_equal(CrossEntropyLoss::gradient(2.0, 1.0), sigmoid(2.0) - 1.0, 1e-15));
    }

    #[test]
    fn test_gradient_tails() {
        assert_eq!(CrossEntropyLoss::gradient(30.0, 1.0), 0.0);
        assert_eq!(CrossEntropyLoss::gradient(30.0, 0.0), 1.0);
        assert_eq!(CrossEntropyLoss::gradient(-30.0, 0.0), (-30.0f64).exp());
        assert!(almost_equal(CrossEntropyLoss::gradient(-30.0, 1.0), -1.0, 1e-12));
    }

    #[test]
    fn test_predict() {
        assert_eq!(CrossEntropyLoss::predict(0.0), 0.5);
        assert!(almost_equal(CrossEntropyLoss::predict(2.0), 0.880_797_077_977_882_3, 1e-12));
        assert_eq!(CrossEntropyLoss::predict(-1000.0), 0.0);
    }

    #[test]
    #[should_panic(expected = "label in {0, 1}")]
    fn test_evaluate_rejects_signed_label() {
        CrossEntropyLoss::evaluate(0.5, -1.0);
    }

    #[test]
    #[should_panic(expected = "label in {0, 1}")]
    fn test_gradient_rejects_signed_label() {
        CrossEntropyLoss::gradient(0.5, -1.0);
    }
}
