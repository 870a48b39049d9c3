//! Header parsing

use super::primitives::decode;
use super::suffix::Rank;
use crate::error::IdxError;
use crate::types::{FIELD_SIZE, IdxHeader};
use std::io::{ErrorKind, Read};

/// Read one big-endian u32 header field
fn read_field<R: Read>(reader: &mut R, field: &'static str) -> Result<u32, IdxError> {
    let mut raw = [0u8; FIELD_SIZE];
    reader.read_exact(&mut raw).map_err(|e| match e.kind() {
        ErrorKind::UnexpectedEof => IdxError::TruncatedHeader { field },
        _ => IdxError::Io(e),
    })?;
    Ok(decode::<u32>(&raw))
}

/// Read the header fields present for `rank`
///
/// Field order on disk is magic, items, cols (rank >= 2), rows (rank >= 3).
pub fn read_header<R: Read>(reader: &mut R, rank: Rank) -> Result<IdxHeader, IdxError> {
    let magic = read_field(reader, "magic number")?;
    let items = read_field(reader, "item count")?;

    let cols = if rank > Rank::One {
        read_field(reader, "column count")?
    } else {
        1
    };

    let rows = if rank > Rank::Two {
        read_field(reader, "row count")?
    } else {
        1
    };

    Ok(IdxHeader {
        magic,
        items,
        rows,
        cols,
    })
}
