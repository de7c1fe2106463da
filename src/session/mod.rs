//! Drivers that feed the compositor: the per-photo prompt loop and the metadata batch.

pub(crate) mod batch;
pub(crate) mod captions;
pub(crate) mod interactive;
pub(crate) mod prompt;
