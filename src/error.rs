// SPDX-License-Identifier: MIT

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HeaderError {
    /// Stat or write failure, most commonly a missing or unreadable
    /// input file.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// File too large for a 4-byte length prefix. The size is never
    /// truncated to fit.
    #[error("file size {0} exceeds the 4-byte unsigned range")]
    SizeOverflow(u64),
}
