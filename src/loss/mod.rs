pub mod loss_func;
pub mod square_loss;
pub mod logistic_loss;
pub mod cross_entropy_loss;
pub mod log_loss;
pub mod hinge_loss;
pub mod squared_hinge_loss;
