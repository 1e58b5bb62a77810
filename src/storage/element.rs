//! Element types a packed array can hold.

use std::fmt;
use std::io::{self, Write};
use std::mem::size_of;
use std::str::FromStr;

use crate::error::DataError;

use super::NumericArray;

/// Runtime tag for an element type.
///
/// The binary format stores no type information, so the reader has to name the exact type
/// (width, signedness, integer vs float) the writer used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    /// `i8` (`int8`).
    I8,
    /// `i16` (`int16`).
    I16,
    /// `i32` (`int32`).
    I32,
    /// `i64` (`int64`).
    I64,
    /// `u8` (`uint8`).
    U8,
    /// `u16` (`uint16`).
    U16,
    /// `u32` (`uint32`).
    U32,
    /// `u64` (`uint64`).
    U64,
    /// `f32` (`float32`).
    F32,
    /// `f64` (`float64`).
    F64,
}

impl ElementType {
    /// Width of one element in bytes.
    pub fn width(self) -> usize {
        match self {
            ElementType::I8 | ElementType::U8 => 1,
            ElementType::I16 | ElementType::U16 => 2,
            ElementType::I32 | ElementType::U32 | ElementType::F32 => 4,
            ElementType::I64 | ElementType::U64 | ElementType::F64 => 8,
        }
    }

    /// Canonical name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            ElementType::I8 => "int8",
            ElementType::I16 => "int16",
            ElementType::I32 => "int32",
            ElementType::I64 => "int64",
            ElementType::U8 => "uint8",
            ElementType::U16 => "uint16",
            ElementType::U32 => "uint32",
            ElementType::U64 => "uint64",
            ElementType::F32 => "float32",
            ElementType::F64 => "float64",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ElementType {
    type Err = DataError;

    /// Accepts dtype-style names (`int32`, `float64`, ...) and Rust primitive names (`i32`, `f64`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "int8" | "i8" => Ok(ElementType::I8),
            "int16" | "i16" => Ok(ElementType::I16),
            "int32" | "i32" => Ok(ElementType::I32),
            "int64" | "i64" => Ok(ElementType::I64),
            "uint8" | "u8" => Ok(ElementType::U8),
            "uint16" | "u16" => Ok(ElementType::U16),
            "uint32" | "u32" => Ok(ElementType::U32),
            "uint64" | "u64" => Ok(ElementType::U64),
            "float32" | "f32" => Ok(ElementType::F32),
            "float64" | "f64" => Ok(ElementType::F64),
            _ => Err(DataError::UnknownElementType(s.to_string())),
        }
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A primitive number that can be packed into (and read back from) raw native-endian bytes.
///
/// Sealed: implemented for the ten fixed-width integer and float primitives only.
pub trait Element: Copy + PartialEq + fmt::Debug + sealed::Sealed {
    /// Runtime tag for this type.
    const TYPE: ElementType;
    /// Width in bytes.
    const WIDTH: usize;

    /// Write this value's native-endian bytes.
    fn write_ne<W: Write>(self, w: &mut W) -> io::Result<()>;

    /// Rebuild a value from exactly [`Self::WIDTH`] native-endian bytes.
    fn from_ne_slice(bytes: &[u8]) -> Self;

    #[doc(hidden)]
    fn wrap(values: Vec<Self>) -> NumericArray;

    #[doc(hidden)]
    fn view(array: &NumericArray) -> Option<&[Self]>;
}

macro_rules! impl_element {
    ($($t:ty => $tag:ident),* $(,)?) => {$(
        impl sealed::Sealed for $t {}

        impl Element for $t {
            const TYPE: ElementType = ElementType::$tag;
            const WIDTH: usize = size_of::<$t>();

            fn write_ne<W: Write>(self, w: &mut W) -> io::Result<()> {
                w.write_all(&self.to_ne_bytes())
            }

            fn from_ne_slice(bytes: &[u8]) -> Self {
                let mut buf = [0u8; size_of::<$t>()];
                buf.copy_from_slice(bytes);
                <$t>::from_ne_bytes(buf)
            }

            fn wrap(values: Vec<Self>) -> NumericArray {
                NumericArray::$tag(values)
            }

            fn view(array: &NumericArray) -> Option<&[Self]> {
                match array {
                    NumericArray::$tag(v) => Some(v),
                    _ => None,
                }
            }
        }
    )*};
}

impl_element!(
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
);
