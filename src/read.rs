use std::{fs, path::Path};

use log::{debug, warn};

use crate::{
    error::{Error, Result},
    sample::{Endianess, Sample},
};

/// Samples of a raw volume, in file order (x fastest, then y, then z)
#[derive(Debug, Clone, PartialEq)]
pub struct Volume<T> {
    data: Vec<T>,
}

impl<T: Sample> Volume<T> {
    pub fn from_samples(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn samples(&self) -> &[T] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Read a whole raw file and decode it into `expected` samples
pub fn read_volume<T: Sample>(
    path: &Path,
    expected: usize,
    endianess: Endianess,
) -> Result<Volume<T>> {
    let bytes = fs::read(path).map_err(Error::io(path))?;
    debug!("read {} bytes from {path:?}", bytes.len());
    decode_volume(&bytes, expected, endianess)
}

pub fn decode_volume<T: Sample>(
    bytes: &[u8],
    expected: usize,
    endianess: Endianess,
) -> Result<Volume<T>> {
    let actual = bytes.len() / T::WIDTH;
    let trailing = bytes.len() % T::WIDTH;
    if trailing != 0 {
        warn!("ignoring {trailing} trailing bytes that do not form a whole sample");
    }

    if actual != expected {
        return Err(Error::SizeMismatch { expected, actual });
    }

    Ok(Volume::from_samples(T::decode(bytes, endianess)))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn u16_bytes(values: &[u16]) -> Vec<u8> {
        values.iter().flat_map(|v| v.to_ne_bytes()).collect()
    }

    #[test]
    fn decodes_in_file_order() {
        let bytes = u16_bytes(&[10, 20, 30, 40]);
        let volume: Volume<u16> = decode_volume(&bytes, 4, Endianess::Native).unwrap();
        assert_eq!(volume.samples(), &[10, 20, 30, 40]);
        assert_eq!(volume.len(), 4);
    }

    #[test]
    fn too_few_samples() {
        let bytes = u16_bytes(&[1, 2, 3]);
        let err = decode_volume::<u16>(&bytes, 4, Endianess::Native).unwrap_err();
        assert!(matches!(
            err,
            Error::SizeMismatch {
                expected: 4,
                actual: 3
            }
        ));
    }

    #[test]
    fn too_many_samples() {
        let bytes = u16_bytes(&[1, 2, 3, 4, 5]);
        let err = decode_volume::<u16>(&bytes, 4, Endianess::Native).unwrap_err();
        assert!(matches!(
            err,
            Error::SizeMismatch {
                expected: 4,
                actual: 5
            }
        ));
    }

    #[test]
    fn count_depends_on_sample_width() {
        // 8 bytes are four u16 but only two u32
        let bytes = u16_bytes(&[1, 2, 3, 4]);
        assert!(decode_volume::<u32>(&bytes, 2, Endianess::Native).is_ok());
        assert!(decode_volume::<u32>(&bytes, 4, Endianess::Native).is_err());
    }

    #[test]
    fn reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("volume.raw");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(&[0x00, 0x0a, 0x00, 0x14]).unwrap();
        drop(file);

        let volume: Volume<u16> = read_volume(&path, 2, Endianess::Big).unwrap();
        assert_eq!(volume.samples(), &[10, 20]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.raw");
        let err = read_volume::<u16>(&path, 1, Endianess::Native).unwrap_err();
        match err {
            Error::Io { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error {other:?}"),
        }
    }
}
