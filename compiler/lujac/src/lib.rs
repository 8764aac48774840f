//! Luja command-line front end.
//!
//! The `luja` binary is a thin argument dispatcher; the work lives in
//! [`commands`] so it can be exercised from tests.

pub mod commands;
mod logging;

pub use logging::init_tracing;
