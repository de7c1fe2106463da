//! Shared primitives: error type, canvas and colour.

pub(crate) mod core;
pub(crate) mod error;
