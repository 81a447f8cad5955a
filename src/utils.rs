type F = f64;

pub type GenericResult<T> = anyhow::Result<T>;

/// Scores beyond this magnitude switch to the tail approximations of `log(1 + exp(-x))`.
pub const EXP_TAIL_THRESHOLD: F = 18.0;

/// Lower bound applied to probabilities before taking their logarithm.
pub const PROBABILITY_FLOOR: F = 0.0001;

pub fn sigmoid(x: F) -> F {
    1.0 / (1.0 + (-x).exp())
}

pub fn is_binary_label(truth: F) -> bool {
    truth == 0.0 || truth == 1.0
}

pub fn is_signed_label(truth: F) -> bool {
    truth == -1.0 || truth == 1.0
}

pub fn almost_equal(a: F, b: F, tolerance: F) -> bool {
    (a - b).abs() <= tolerance * (1.0 + a.abs().max(b.abs()))
}
