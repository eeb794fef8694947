pub mod action;
pub mod request;

pub use action::Action;
pub use request::{Params, Request};
