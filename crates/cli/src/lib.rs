//! fontface CLI library.

pub mod cli;

pub use fontface_core::{FaceConfig, FacePipeline};
