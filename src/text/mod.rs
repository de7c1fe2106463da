//! Text measurement, wrapping and font loading.

pub(crate) mod engine;
pub(crate) mod font;
pub(crate) mod wrap;
