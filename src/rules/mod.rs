//! Validation rules for player submissions

mod rejection;
mod validator;

pub use rejection::{RejectReason, Rejection};
pub use validator::{Validator, is_original, is_possible};
