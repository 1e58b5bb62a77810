//! Packed binary arrays.
//!
//! Arrays are written as their raw native-endian element bytes, back to back, with no header,
//! length prefix or type tag. The element type (and any shape) is a contract between writer
//! and reader that lives outside the file.
//!
//! ```no_run
//! use business_categories::storage::{read_array, write_array};
//!
//! # fn main() -> Result<(), business_categories::DataError> {
//! write_array(&[1.5f32, 2.5, 3.5], "stars.nz")?;
//! let back: Vec<f32> = read_array("stars.nz")?;
//! assert_eq!(back, vec![1.5, 2.5, 3.5]);
//! # Ok(())
//! # }
//! ```

mod element;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::error::{DataError, DataResult};

pub use element::{Element, ElementType};

/// A flat array whose element type is only known at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericArray {
    /// Signed 8-bit elements.
    I8(Vec<i8>),
    /// Signed 16-bit elements.
    I16(Vec<i16>),
    /// Signed 32-bit elements.
    I32(Vec<i32>),
    /// Signed 64-bit elements.
    I64(Vec<i64>),
    /// Unsigned 8-bit elements.
    U8(Vec<u8>),
    /// Unsigned 16-bit elements.
    U16(Vec<u16>),
    /// Unsigned 32-bit elements.
    U32(Vec<u32>),
    /// Unsigned 64-bit elements.
    U64(Vec<u64>),
    /// 32-bit float elements.
    F32(Vec<f32>),
    /// 64-bit float elements.
    F64(Vec<f64>),
}

macro_rules! dispatch {
    ($array:expr, $v:ident => $body:expr) => {
        match $array {
            NumericArray::I8($v) => $body,
            NumericArray::I16($v) => $body,
            NumericArray::I32($v) => $body,
            NumericArray::I64($v) => $body,
            NumericArray::U8($v) => $body,
            NumericArray::U16($v) => $body,
            NumericArray::U32($v) => $body,
            NumericArray::U64($v) => $body,
            NumericArray::F32($v) => $body,
            NumericArray::F64($v) => $body,
        }
    };
}

impl NumericArray {
    /// The runtime element type.
    pub fn element_type(&self) -> ElementType {
        match self {
            NumericArray::I8(_) => ElementType::I8,
            NumericArray::I16(_) => ElementType::I16,
            NumericArray::I32(_) => ElementType::I32,
            NumericArray::I64(_) => ElementType::I64,
            NumericArray::U8(_) => ElementType::U8,
            NumericArray::U16(_) => ElementType::U16,
            NumericArray::U32(_) => ElementType::U32,
            NumericArray::U64(_) => ElementType::U64,
            NumericArray::F32(_) => ElementType::F32,
            NumericArray::F64(_) => ElementType::F64,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        dispatch!(self, v => v.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the elements as `T`, if `T` is the stored element type.
    pub fn as_slice<T: Element>(&self) -> Option<&[T]> {
        T::view(self)
    }

    /// Write the raw element bytes to `path`; see [`write_array`].
    pub fn write_to(&self, path: impl AsRef<Path>) -> DataResult<()> {
        dispatch!(self, v => write_array(v, path))
    }
}

impl<T: Element> From<Vec<T>> for NumericArray {
    fn from(values: Vec<T>) -> Self {
        T::wrap(values)
    }
}

/// Write `values` to `path` as raw native-endian bytes, replacing any existing file.
///
/// There is no staging file: a crash mid-write leaves a truncated file behind.
pub fn write_array<T: Element>(values: &[T], path: impl AsRef<Path>) -> DataResult<()> {
    let path = path.as_ref();
    let mut w = BufWriter::new(File::create(path)?);
    for &v in values {
        v.write_ne(&mut w)?;
    }
    w.flush()?;
    debug!(
        "wrote {} {} elements ({} bytes) to {}",
        values.len(),
        T::TYPE,
        values.len() * T::WIDTH,
        path.display()
    );
    Ok(())
}

/// Read the whole file at `path` as a flat array of `T`.
///
/// The bytes are reinterpreted as `T` without any check that `T` is what was written. Returns
/// [`DataError::SizeMismatch`] if the file length is not a multiple of `T`'s width.
pub fn read_array<T: Element>(path: impl AsRef<Path>) -> DataResult<Vec<T>> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| DataError::from_open(path, e))?;
    if bytes.len() % T::WIDTH != 0 {
        return Err(DataError::SizeMismatch {
            path: path.to_path_buf(),
            len: bytes.len() as u64,
            width: T::WIDTH,
        });
    }
    debug!(
        "read {} {} elements from {}",
        bytes.len() / T::WIDTH,
        T::TYPE,
        path.display()
    );
    Ok(bytes.chunks_exact(T::WIDTH).map(T::from_ne_slice).collect())
}

/// Read the whole file at `path` as a flat array of the runtime type `element_type`.
pub fn read_array_as(path: impl AsRef<Path>, element_type: ElementType) -> DataResult<NumericArray> {
    let path = path.as_ref();
    Ok(match element_type {
        ElementType::I8 => NumericArray::I8(read_array(path)?),
        ElementType::I16 => NumericArray::I16(read_array(path)?),
        ElementType::I32 => NumericArray::I32(read_array(path)?),
        ElementType::I64 => NumericArray::I64(read_array(path)?),
        ElementType::U8 => NumericArray::U8(read_array(path)?),
        ElementType::U16 => NumericArray::U16(read_array(path)?),
        ElementType::U32 => NumericArray::U32(read_array(path)?),
        ElementType::U64 => NumericArray::U64(read_array(path)?),
        ElementType::F32 => NumericArray::F32(read_array(path)?),
        ElementType::F64 => NumericArray::F64(read_array(path)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_array_reports_type_and_len() {
        let arr = NumericArray::from(vec![1u16, 2, 3]);
        assert_eq!(arr.element_type(), ElementType::U16);
        assert_eq!(arr.len(), 3);
        assert!(!arr.is_empty());
        assert_eq!(arr.as_slice::<u16>(), Some(&[1u16, 2, 3][..]));
        assert_eq!(arr.as_slice::<i16>(), None);
    }

    #[test]
    fn empty_array_writes_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.nz");
        write_array::<f64>(&[], &path).unwrap();
        assert_eq!(fs::metadata(&path).unwrap().len(), 0);
        assert!(read_array::<f64>(&path).unwrap().is_empty());
    }

    #[test]
    fn overwrite_replaces_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ids.nz");
        write_array(&[1i64, 2, 3, 4], &path).unwrap();
        write_array(&[9i64], &path).unwrap();
        assert_eq!(read_array::<i64>(&path).unwrap(), vec![9]);
    }
}
