//! Core types shared across the helper

mod error;

pub use error::{HelperError, HelperResult};
