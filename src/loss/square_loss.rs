use crate::loss::loss_func::LossFuncOps;

pub struct SquareLoss {}

impl LossFuncOps for SquareLoss {
    const NAME: &'static str = "Square";

    fn evaluate(pred: f64, truth: f64) -> f64 {
        let err = truth - pred;
        err * err
    }

    fn gradient(pred: f64, truth: f64) -> f64 {
        -2.0 * (truth - pred)
    }

    fn predict(x: f64) -> f64 {
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate() {
        assert_eq!(SquareLoss::evaluate(3.0, 1.0), 4.0);
        assert_eq!(SquareLoss::evaluate(1.0, 3.0), 4.0);
        assert_eq!(SquareLoss::evaluate(-2.5, -2.5), 0.0);
    }

    #[test]
    fn test_gradient() {
        assert_eq!(SquareLoss::gradient(3.0, 1.0), -4.0);
        assert_eq!(SquareLoss::gradient(1.0, 3.0), 4.0);
        assert_eq!(SquareLoss::gradient(0.5, 0.5), 0.0);
    }

    #[test]
    fn test_predict() {
        assert_eq!(SquareLoss::predict(5.0), 5.0);
        assert_eq!(SquareLoss::predict(-1e300), -1e300);
    }
}
