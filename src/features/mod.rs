//! Optional passes layered on top of the core codec.

pub mod compression;
