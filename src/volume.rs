use ndarray::Array3;
use ndarray::ArrayView2;
use ndarray::s;

/// A scalar volume indexed as `[[z, y, x]]`, axis 0 being the slice axis
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Volume {
    pub data: Array3<f32>,
}

/// Finite value range of a slice, used for grayscale normalization
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntensityRange {
    pub min: f32,
    pub max: f32,
}

impl IntensityRange {
    /// Range over the finite values of `slice`, `None` if there are none
    pub fn of(slice: &ArrayView2<'_, f32>) -> Option<Self> {
        slice
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |range, v| match range {
                None => Some(Self { min: v, max: v }),
                Some(Self { min, max }) => Some(Self {
                    min: min.min(v),
                    max: max.max(v),
                }),
            })
    }

    /// Map `value` onto 0..=255. A degenerate range maps everything to 0.
    #[inline]
    pub fn normalize_to_u8(&self, value: f32) -> u8 {
        // f64 keeps spans near the f32 limits finite
        let span = self.max as f64 - self.min as f64;
        if span <= 0.0 {
            return 0;
        }
        (((value as f64 - self.min as f64) / span) * 255.0)
            .round()
            .clamp(0.0, 255.0) as u8
    }
}

impl Volume {
    pub fn new(data: Array3<f32>) -> Self {
        Self { data }
    }

    /// Get the dimensions of the volume (depth, height, width)
    pub fn dim(&self) -> (usize, usize, usize) {
        self.data.dim()
    }

    /// Number of axial slices
    pub fn depth(&self) -> usize {
        self.data.dim().0
    }

    /// Get a reference to the underlying data
    pub fn data(&self) -> &Array3<f32> {
        &self.data
    }

    /// Axial slice at `index`, `None` if out of range
    pub fn slice(&self, index: usize) -> Option<ArrayView2<'_, f32>> {
        if index >= self.depth() {
            return None;
        }
        Some(self.data.slice(s![index, .., ..]))
    }
}
