//! Decoder for IDX files
//!
//! A load is one synchronous pass: rank from the path suffix, header, one
//! allocation for every element, then each element decoded from its storage
//! type and cast to the target type.

mod header;
mod primitives;
mod suffix;

pub use header::read_header;
pub use primitives::{Endian, Scalar, decode, decode_as};
pub use suffix::{Rank, parse_suffix};

use crate::error::IdxError;
use crate::types::{IdxHeader, ItemSet};
use num_traits::AsPrimitive;
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

/// Load an IDX file, decoding `S` elements from disk into `T` elements
///
/// The rank comes from the `.idxN` part of `path`, see [`parse_suffix`].
///
/// ```no_run
/// let images = idxset::load::<u8, f32, _>("mnist/train-images.idx3-ubyte")?;
/// let (count, rows, cols) = images.shape();
/// # Ok::<(), idxset::IdxError>(())
/// ```
pub fn load<S, T, P>(path: P) -> Result<ItemSet<T>, IdxError>
where
    S: Scalar + AsPrimitive<T>,
    T: Copy + 'static,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    log::info!("reading IDX file {:?}", path);

    let rank = parse_suffix(path)?;

    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => IdxError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => IdxError::Io(e),
    })?;

    read::<S, T, _>(&mut BufReader::new(file), rank)
}

/// Decode an IDX stream of the given rank from any reader
///
/// Reads exactly the header and `items * rows * cols` elements; trailing
/// bytes are left in the reader.
pub fn read<S, T, R>(reader: &mut R, rank: Rank) -> Result<ItemSet<T>, IdxError>
where
    S: Scalar + AsPrimitive<T>,
    T: Copy + 'static,
    R: Read,
{
    let header = read_header(reader, rank)?;
    log::debug!(
        "IDX header: magic {:#010x}, rank {}, {} items of [{} x {}]",
        header.magic,
        rank.get(),
        header.items,
        header.rows,
        header.cols
    );
    check_declared::<S>(&header, rank);

    let mut data = allocate::<T>(&header)?;
    let item_len = header.rows as usize * header.cols as usize;

    let mut buf = [0u8; 8];
    let raw = &mut buf[..S::SIZE];

    for item in 0..header.items as usize {
        for element in 0..item_len {
            reader.read_exact(raw).map_err(|e| match e.kind() {
                ErrorKind::UnexpectedEof => IdxError::TruncatedData { item, element },
                _ => IdxError::Io(e),
            })?;
            data.push(decode::<S>(raw).as_());
        }
    }

    let set = ItemSet::from_parts(header, data);
    log::info!(
        "decoded {} for {} [{} x {}] items",
        human_size(set.footprint()),
        header.items,
        header.rows,
        header.cols
    );
    Ok(set)
}

/// Reserve room for every element, failing instead of aborting on overflow
fn allocate<T>(header: &IdxHeader) -> Result<Vec<T>, IdxError> {
    let failed = || IdxError::AllocationFailed {
        items: header.items,
        rows: header.rows,
        cols: header.cols,
    };

    let len = (header.items as usize)
        .checked_mul(header.rows as usize)
        .and_then(|n| n.checked_mul(header.cols as usize))
        .ok_or_else(failed)?;

    len.checked_mul(std::mem::size_of::<T>())
        .filter(|&bytes| bytes <= isize::MAX as usize)
        .ok_or_else(failed)?;

    let mut data = Vec::new();
    data.try_reserve_exact(len).map_err(|_| failed())?;
    Ok(data)
}

/// Warn when the magic number disagrees with how the file is being read
fn check_declared<S: Scalar>(header: &IdxHeader, rank: Rank) {
    if u32::from(header.declared_rank()) != rank.get() {
        log::warn!(
            "magic number {:#010x} declares rank {}, path suffix says {}",
            header.magic,
            header.declared_rank(),
            rank.get()
        );
    }

    match header.declared_dtype() {
        Some(dtype) if dtype.element_size() != S::SIZE => log::warn!(
            "magic number declares {:?} elements ({} bytes), reading {} byte elements",
            dtype,
            dtype.element_size(),
            S::SIZE
        ),
        Some(_) => {}
        None => log::debug!(
            "magic number {:#010x} names no known element type",
            header.magic
        ),
    }
}

/// Format a byte count in powers of 1000, e.g. `47 MB`
fn human_size(bytes: usize) -> String {
    const UNITS: [&str; 4] = ["bytes", "KB", "MB", "GB"];

    let mut size = bytes;
    let mut unit = 0;
    while unit < UNITS.len() - 1 && size >= 1000 {
        size /= 1000;
        unit += 1;
    }
    format!("{} {}", size, UNITS[unit])
}
