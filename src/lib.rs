//! # raw-slices library
//!
//! This crate turns headerless raw voxel volumes into directories of
//! annotated per-slice PNG images for visual inspection.
//!
//! A raw volume is a flat dump of native-endian 32-bit float samples without
//! any header, so its dimensions have to be supplied alongside the file in a
//! [`ScanDescriptor`]. Dimensions are `(depth, height, width)`; depth is the
//! slice axis and every axial slice is rendered as its own figure:
//!  - Grayscale mapping over the finite intensity range of the slice
//!  - Origin at the lower left (row 0 of a slice is drawn at the bottom)
//!  - Title `"{name} - Slice {index}/{last}"`, pixel axis labels and ticks
//!  - A colour bar labelled "Intensity (Float32)"
//!
//! Slices are written as `{output_root}/{name}/slice_0000.png`,
//! `slice_0001.png`, ...
//!
//! Scans are processed one after the other. A scan that fails to load
//! (missing file, size mismatch, read error) is reported and skipped without
//! affecting the others.
//!
//! # Examples
//!
//! ## Rendering a list of scans
//!
//! ```no_run
//! # use raw_slices::{ElementType, Pipeline, PipelineConfig, ScanDescriptor};
//! let config = PipelineConfig::default().with_scans(vec![ScanDescriptor::new(
//!     "PET",
//!     "raws/pet.raw",
//!     (199, 166, 150),
//!     ElementType::Float32,
//! )]);
//! for report in Pipeline::new(config).run() {
//!     println!("{}: {:?}", report.name, report.outcome);
//! }
//! ```
//!
//! ## Loading a single volume
//!
//! ```no_run
//! # use raw_slices::{ElementType, ScanDescriptor, VolumeLoader};
//! let scan = ScanDescriptor::new("CT", "raws/ct.raw", (399, 400, 400), ElementType::Float32);
//! let volume = VolumeLoader::load(&scan).expect("should have loaded the raw volume");
//! let center = volume.slice(volume.depth() / 2);
//! ```
//!
//! [`ScanDescriptor`]: scan::ScanDescriptor

pub mod enums;
pub mod error;
pub mod figure;
pub mod pipeline;
pub mod rasterizer;
pub mod scan;
mod text;
mod ticks;
pub mod volume;
pub mod volume_loader;

pub use enums::{ElementType, Origin};
pub use error::{ErrorKind, ScanError};
pub use pipeline::{Pipeline, ScanReport};
pub use rasterizer::SliceRasterizer;
pub use scan::{PipelineConfig, ScanDescriptor};
pub use volume::Volume;
pub use volume_loader::VolumeLoader;
