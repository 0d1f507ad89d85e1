use std::path::{Path, PathBuf};

use crate::enums::ElementType;

/// Describes one raw scan on disk. Dimensions are `(depth, height, width)`
/// with depth being the slice axis.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanDescriptor {
    pub name: String,
    pub file_path: PathBuf,
    pub dimensions: (usize, usize, usize),
    pub element_type: ElementType,
}

impl ScanDescriptor {
    pub fn new(
        name: impl Into<String>,
        file_path: impl Into<PathBuf>,
        dimensions: (usize, usize, usize),
        element_type: ElementType,
    ) -> Self {
        Self {
            name: name.into(),
            file_path: file_path.into(),
            dimensions,
            element_type,
        }
    }

    /// Number of voxels the dimensions call for, `None` on overflow
    pub fn expected_voxels(&self) -> Option<usize> {
        voxel_count(self.dimensions)
    }

    /// Directory the slices of this scan are written to
    pub fn output_dir(&self, output_root: impl AsRef<Path>) -> PathBuf {
        output_root.as_ref().join(&self.name)
    }
}

/// `depth * height * width`, `None` if it does not fit in a `usize`
pub fn voxel_count((depth, height, width): (usize, usize, usize)) -> Option<usize> {
    depth.checked_mul(height)?.checked_mul(width)
}

/// Immutable settings for a whole run
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    pub scans: Vec<ScanDescriptor>,
    pub output_root: PathBuf,
    pub dpi: u32,
    pub figure_size_inches: f32,
    pub progress_interval: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            scans: vec![
                ScanDescriptor::new(
                    "PET",
                    "raws/IL46_1_D150x166x199_V1.0,1.0,1.0_S-76.3,-160.5,261.5.raw",
                    (199, 166, 150),
                    ElementType::Float32,
                ),
                ScanDescriptor::new(
                    "CT",
                    "raws/IL46_2_D400x400x399_V0.5,0.5,0.5_S-99.75,-184.75,264.35.raw",
                    (399, 400, 400),
                    ElementType::Float32,
                ),
            ],
            output_root: PathBuf::from("outputs"),
            dpi: 100,
            figure_size_inches: 8.0,
            progress_interval: 20,
        }
    }
}

impl PipelineConfig {
    pub fn with_scans(mut self, scans: Vec<ScanDescriptor>) -> Self {
        self.scans = scans;
        self
    }

    pub fn with_output_root(mut self, output_root: impl Into<PathBuf>) -> Self {
        self.output_root = output_root.into();
        self
    }

    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    pub fn with_figure_size(mut self, inches: f32) -> Self {
        self.figure_size_inches = inches;
        self
    }
}
