// SPDX-License-Identifier: MIT

use std::path::Path;

use crate::prelude::*;

/// Return the size in bytes of the file at `filename`.
///
/// Only the metadata is consulted, the file content is never opened.
pub fn file_size(filename: &Path) -> Result<u64, HeaderError> {
    let meta = std::fs::metadata(filename)?;
    Ok(meta.len())
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;

    #[test]
    fn size_of_written_file() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(&[0u8; 300]).unwrap();
        tmp.flush().unwrap();
        assert_eq!(file_size(tmp.path()).unwrap(), 300);
    }

    #[test]
    fn size_of_empty_file() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        assert_eq!(file_size(tmp.path()).unwrap(), 0);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = file_size(Path::new("/no/such/file")).unwrap_err();
        match err {
            HeaderError::Io(err) => {
                assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
