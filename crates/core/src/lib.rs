//! # fontface core
//!
//! Turns a directory of font files into `@font-face` stylesheets with the font data
//! embedded as base64 data URIs, and concatenates such stylesheets back into one file.
//!
//! Files sharing a directory and base name (`logo.ttf`, `logo.woff2`) form one family
//! and become one rule, with a `src:` entry per file in discovery order.
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use fontface_core::{FaceConfig, FacePipeline};
//!
//! let pipeline = FacePipeline::new(FaceConfig::default().with_jobs(4));
//! let written = pipeline.make_face(Path::new("fonts"), Path::new("css")).unwrap();
//! println!("wrote {} stylesheets", written.len());
//! ```

pub mod config;
mod error;
pub mod format;
pub mod group;
pub mod io;
pub mod parallel;
pub mod path;
pub mod pipeline;
mod record;
pub mod render;

pub use config::FaceConfig;
pub use error::{Error, Result};
pub use format::{format_token, mime_type};
pub use group::group;
pub use io::{Discovery, FileSystem, Storage};
pub use path::{family_name, group_key, map_to_destination};
pub use pipeline::{FacePipeline, make_face, read_face};
pub use record::{CssFragment, FileRecord, FontGroup};
pub use render::{concatenate, render_font_face, sentinel_paths, strip_sentinel_header};
