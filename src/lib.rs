//! seedling-icons: procedural app icon generator
//!
//! This crate draws a seedling sprouting from a soil mound on a circular green
//! background, at any pixel size, and writes the renditions that iOS, macOS,
//! Android and web packaging expect.
//!
//! # Example
//!
//! ```
//! use seedling_icons::{encode_png, render};
//!
//! let icon = render(64);
//! assert_eq!(icon.dimensions(), (64, 64));
//!
//! let png = encode_png(&icon).unwrap();
//! assert!(!png.is_empty());
//! ```
//!
//! # Writing every icon set
//!
//! ```no_run
//! use seedling_icons::OutputPlanner;
//!
//! let written = OutputPlanner::new("path/to/flutter/project").run()?;
//! assert_eq!(written.len(), 29);
//! # Ok::<(), seedling_icons::GenerateError>(())
//! ```

pub mod canvas;
pub mod color;
mod error;
pub mod geometry;
pub mod icon;
mod output;
mod seedling;

pub use canvas::Canvas;
pub use color::Color;
pub use error::GenerateError;
pub use geometry::{PointPx, RectPx};
pub use icon::{IconSet, IconTarget, Platform};
pub use output::{OutputPlanner, WrittenIcon, encode_png};
pub use seedling::render;
