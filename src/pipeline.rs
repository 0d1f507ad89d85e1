use std::path::PathBuf;

use log::{error, info, warn};

use crate::{
    error::ScanError,
    rasterizer::SliceRasterizer,
    scan::{PipelineConfig, ScanDescriptor},
    volume_loader::VolumeLoader,
};

const BANNER_WIDTH: usize = 60;

/// Outcome of processing one scan
#[derive(Debug)]
pub struct ScanReport {
    pub name: String,
    /// Set only once the volume loaded and rendering started
    pub output_dir: Option<PathBuf>,
    pub outcome: Result<usize, ScanError>,
}

impl ScanReport {
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Number of slices written, 0 for failed scans
    pub fn slices_written(&self) -> usize {
        *self.outcome.as_ref().unwrap_or(&0)
    }
}

/// Runs every configured scan through load and rasterize, in order
pub struct Pipeline {
    config: PipelineConfig,
    rasterizer: SliceRasterizer,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        let rasterizer = SliceRasterizer {
            dpi: config.dpi,
            figure_size_inches: config.figure_size_inches,
            progress_interval: config.progress_interval,
        };
        Self { config, rasterizer }
    }

    /// Process all scans. A failing scan is reported and skipped; it never
    /// stops the scans after it.
    pub fn run(&self) -> Vec<ScanReport> {
        let reports = self
            .config
            .scans
            .iter()
            .map(|scan| self.process(scan))
            .collect();

        info!("");
        info!("{}", "=".repeat(BANNER_WIDTH));
        info!("All scans processed!");
        info!("{}", "=".repeat(BANNER_WIDTH));

        reports
    }

    fn process(&self, scan: &ScanDescriptor) -> ScanReport {
        info!("");
        info!("{}", "=".repeat(BANNER_WIDTH));
        info!("Processing {} scan...", scan.name);
        info!("{}", "=".repeat(BANNER_WIDTH));
        info!("Loading {}...", scan.file_path.display());

        let volume = match VolumeLoader::load(scan) {
            Ok(volume) => volume,
            Err(err) => {
                Self::report_failure(scan, &err);
                return ScanReport {
                    name: scan.name.clone(),
                    output_dir: None,
                    outcome: Err(err),
                };
            }
        };
        info!("Volume shape: {:?}", volume.dim());

        let output_dir = scan.output_dir(&self.config.output_root);
        info!("Output directory: {}", output_dir.display());
        info!("Processing {} slices...", volume.depth());

        let outcome = self.rasterizer.render_all(&volume, scan, &output_dir);
        match &outcome {
            Ok(count) => info!(
                "✓ Success! All {count} slices saved to {}/",
                output_dir.display()
            ),
            Err(err) => Self::report_failure(scan, err),
        }

        ScanReport {
            name: scan.name.clone(),
            output_dir: Some(output_dir),
            outcome,
        }
    }

    fn report_failure(scan: &ScanDescriptor, err: &ScanError) {
        match err {
            ScanError::FileNotFound { .. } => {
                warn!("✗ {err}");
                warn!("Make sure the file exists at the configured path.");
            }
            ScanError::SizeMismatch { .. } => {
                warn!("Error: {err}.");
                warn!("Skipping {} scan.", scan.name);
            }
            ScanError::UnsupportedElementType(_) | ScanError::Io(_) | ScanError::Image(_) => {
                error!("✗ An error occurred: {err}");
            }
        }
    }
}
