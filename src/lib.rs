//! Scalar loss functions for per-example gradient training.
//!
//! Every loss maps a raw score and a label to a loss value, the derivative of that loss with
//! respect to the score, and the prediction reported for the score:
//!
//! ```
//! use cfloss::loss::loss_func::{LossFunc, LossKind};
//!
//! let loss = LossFunc::create(LossKind::CrossEntropy);
//! assert_eq!(loss.predict(0.0), 0.5);
//! assert_eq!(loss.gradient(30.0, 1.0), 0.0);
//! ```

pub mod loss;
pub mod loss_config;
pub mod utils;
