use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info};

use crate::{error::ScanError, figure::SliceFigure, scan::ScanDescriptor, volume::Volume};

/// Writes every axial slice of a volume as an annotated PNG file
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliceRasterizer {
    pub dpi: u32,
    pub figure_size_inches: f32,
    pub progress_interval: usize,
}

impl Default for SliceRasterizer {
    fn default() -> Self {
        Self {
            dpi: 100,
            figure_size_inches: 8.0,
            progress_interval: 20,
        }
    }
}

/// File name of the slice at `index`, zero-padded to at least four digits
pub fn slice_file_name(index: usize) -> String {
    format!("slice_{index:04}.png")
}

impl SliceRasterizer {
    /// Render all slices of `volume` into `output_dir`
    ///
    /// The directory is created if it does not exist. Existing files with the
    /// same names are overwritten.
    ///
    /// # Errors
    ///
    /// Returns the first I/O or encoding error; slices written before the
    /// failure stay on disk.
    pub fn render_all(
        &self,
        volume: &Volume,
        descriptor: &ScanDescriptor,
        output_dir: impl AsRef<Path>,
    ) -> Result<usize, ScanError> {
        let output_dir = output_dir.as_ref();
        fs::create_dir_all(output_dir)?;

        let num_slices = volume.depth();
        let last_index = num_slices.saturating_sub(1);
        let mut written = 0;

        for index in 0..num_slices {
            let path = self.render_slice(volume, descriptor, index, last_index, output_dir)?;
            written += 1;
            debug!("Wrote {}", path.display());

            if self.should_report(written, num_slices) {
                info!("  Processed {written}/{num_slices} slices...");
            }
        }

        Ok(written)
    }

    // The figure and its canvas live only for the duration of this call
    fn render_slice(
        &self,
        volume: &Volume,
        descriptor: &ScanDescriptor,
        index: usize,
        last_index: usize,
        output_dir: &Path,
    ) -> Result<PathBuf, ScanError> {
        let Some(slice) = volume.slice(index) else {
            return Err(ScanError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("slice {index} is outside the volume"),
            )));
        };

        let title = format!("{} - Slice {index}/{last_index}", descriptor.name);
        let rendered =
            SliceFigure::grayscale(slice, title).render(self.dpi, self.figure_size_inches);

        let path = output_dir.join(slice_file_name(index));
        rendered.save(&path)?;
        Ok(path)
    }

    fn should_report(&self, written: usize, total: usize) -> bool {
        written == total || (self.progress_interval > 0 && written % self.progress_interval == 0)
    }
}
