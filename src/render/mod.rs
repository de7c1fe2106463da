//! CPU rasterisation of caption plans and premultiplied compositing.

pub(crate) mod composite;
pub(crate) mod cpu;
