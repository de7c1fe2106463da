//! Photo decode and encode.

pub(crate) mod decode;
