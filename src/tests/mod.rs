//! integrated tests
pub mod toolkit;

mod parsing;
