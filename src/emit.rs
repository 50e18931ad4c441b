// SPDX-License-Identifier: MIT

use std::io::Write;
use std::path::Path;

use crate::file::file_size;
use crate::header::encode_size;
use crate::prelude::*;

/// Stat `path` and write its size to `dest` as a 4-byte little-endian
/// header. On failure nothing is written to `dest`.
pub fn emit_size_header<W: Write>(path: &Path, dest: &mut W) -> Result<(), HeaderError> {
    let size = file_size(path)?;
    debug!("{} is {} bytes", path.display(), size);
    let header = encode_size(size)?;
    dest.write_all(&header)?;
    dest.flush()?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn emits_exactly_four_bytes() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(&[0x41u8; 65536]).unwrap();
        tmp.flush().unwrap();

        let mut out = vec![];
        emit_size_header(tmp.path(), &mut out).unwrap();
        assert_eq!(out, vec![0x00, 0x00, 0x01, 0x00]);
    }

    #[test]
    fn empty_file_emits_zero_header() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let mut out = vec![];
        emit_size_header(tmp.path(), &mut out).unwrap();
        assert_eq!(out, vec![0x00, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn repeated_emission_is_identical() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(b"some file content").unwrap();
        tmp.flush().unwrap();

        let mut first = vec![];
        let mut second = vec![];
        emit_size_header(tmp.path(), &mut first).unwrap();
        emit_size_header(tmp.path(), &mut second).unwrap();
        assert_eq!(first, second);
        assert_eq!(u32::from_le_bytes(first.try_into().unwrap()), 17);
    }

    #[test]
    fn missing_file_writes_nothing() {
        let mut out = vec![];
        let err = emit_size_header(Path::new("/no/such/file"), &mut out);
        assert!(err.is_err());
        assert!(out.is_empty());
    }
}
