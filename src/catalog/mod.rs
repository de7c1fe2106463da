//! Inputs around the compositor: photo listings, the metadata table and timestamps.

pub(crate) mod metadata;
pub(crate) mod photos;
pub(crate) mod timestamp;
