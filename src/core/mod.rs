//! Core processing building blocks: crop-rectangle arithmetic, exact resize,
//! and the in-memory pipeline that chains them. These are internal primitives
//! consumed by the high-level `api` module.
pub mod params;
pub mod processing;
