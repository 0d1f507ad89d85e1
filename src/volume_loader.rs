use crate::{
    enums::ElementType,
    error::ScanError,
    scan::{ScanDescriptor, voxel_count},
    volume::Volume,
};

use ndarray::Array3;
use std::{fs, io, path::Path};

pub struct VolumeLoader;

impl VolumeLoader {
    /// Load a volume from the raw file a descriptor points at
    ///
    /// The file is read as a headerless sequence of native-endian samples
    /// of `descriptor.element_type`.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::FileNotFound`] if the path does not exist,
    /// [`ScanError::SizeMismatch`] if the voxel count disagrees with the
    /// declared dimensions, [`ScanError::UnsupportedElementType`] for any
    /// element type other than float32 and [`ScanError::Io`] for any other
    /// read or decoding failure.
    pub fn load(descriptor: &ScanDescriptor) -> Result<Volume, ScanError> {
        if !descriptor.element_type.is_supported() {
            return Err(ScanError::UnsupportedElementType(descriptor.element_type));
        }

        descriptor
            .expected_voxels()
            .ok_or_else(|| Self::overflow_error(descriptor.dimensions))?;

        let bytes = Self::read_bytes(&descriptor.file_path)?;
        let buffer = Self::decode_f32(&bytes, descriptor.element_type)?;

        Self::from_buffer(buffer, descriptor.dimensions)
    }

    /// Reshape a flat voxel buffer into a `(depth, height, width)` volume
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::SizeMismatch`] if `buffer.len()` is not
    /// `depth * height * width`, and [`ScanError::Io`] if that product
    /// overflows
    pub fn from_buffer(
        buffer: Vec<f32>,
        dimensions: (usize, usize, usize),
    ) -> Result<Volume, ScanError> {
        let expected = voxel_count(dimensions).ok_or_else(|| Self::overflow_error(dimensions))?;
        if buffer.len() != expected {
            return Err(ScanError::SizeMismatch {
                dimensions,
                expected,
                actual: buffer.len(),
            });
        }

        let data = Array3::from_shape_vec(dimensions, buffer).map_err(|err| {
            ScanError::Io(io::Error::new(io::ErrorKind::InvalidData, err.to_string()))
        })?;

        Ok(Volume::new(data))
    }

    fn overflow_error(dimensions: (usize, usize, usize)) -> ScanError {
        ScanError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("dimensions {dimensions:?} overflow the voxel count"),
        ))
    }

    fn read_bytes(path: &Path) -> Result<Vec<u8>, ScanError> {
        fs::read(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => ScanError::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => ScanError::Io(err),
        })
    }

    fn decode_f32(bytes: &[u8], element_type: ElementType) -> Result<Vec<f32>, ScanError> {
        let element_size = element_type.size_of();
        if bytes.len() % element_size != 0 {
            return Err(ScanError::Io(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "file length {} is not a multiple of the element size {element_size}",
                    bytes.len()
                ),
            )));
        }
        Ok(bytemuck::pod_collect_to_vec(bytes))
    }
}
