use std::fmt;

/// Fixed-width numeric type of a single voxel in a raw file
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ElementType {
    #[default]
    Float32,
    Float64,
    Int16,
    UInt16,
    UInt8,
}

impl ElementType {
    /// Size of one voxel in bytes
    pub fn size_of(self) -> usize {
        match self {
            ElementType::Float32 => 4,
            ElementType::Float64 => 8,
            ElementType::Int16 | ElementType::UInt16 => 2,
            ElementType::UInt8 => 1,
        }
    }

    /// Whether the loader can decode this element type
    pub fn is_supported(self) -> bool {
        matches!(self, ElementType::Float32)
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementType::Float32 => "float32",
            ElementType::Float64 => "float64",
            ElementType::Int16 => "int16",
            ElementType::UInt16 => "uint16",
            ElementType::UInt8 => "uint8",
        };
        f.write_str(name)
    }
}

/// Where row 0 of a slice is placed in the rendered image
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Upper,
    #[default]
    Lower,
}
