// SPDX-License-Identifier: MIT

//! The 4-byte little-endian size header.
//!
//! The consumer on the other side of the pipe reads exactly 4 bytes
//! and interprets them as an unsigned 32 bit length prefix, so sizes
//! that don't fit in 32 bits are rejected rather than truncated.

use bytes::BufMut;

use crate::error::HeaderError;

/// Encode `size` as a 4-byte little-endian unsigned integer.
pub fn encode_size(size: u64) -> Result<[u8; 4], HeaderError> {
    let size: u32 = size
        .try_into()
        .map_err(|_| HeaderError::SizeOverflow(size))?;
    let mut header = [0u8; 4];
    {
        let mut buf = &mut header[..];
        buf.put_u32_le(size);
    }
    Ok(header)
}
