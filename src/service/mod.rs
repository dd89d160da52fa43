//! Contact storage and validation.

mod crud;
mod validation;
pub use crud::ContactService;
pub use validation::{ContactValidator, Rejection};
