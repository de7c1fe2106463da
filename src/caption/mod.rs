//! Caption geometry, style configuration and the compositor itself.

pub(crate) mod annotator;
pub(crate) mod layout;
pub(crate) mod style;
