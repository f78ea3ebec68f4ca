// src/swap/bytes.rs
use crate::error::{AnalyzeError, Result};
use crate::types::ElementWidth;
use crate::utils::reverse_each;

/// Reverse the byte order of the first `count` elements of `buffer`, in place.
///
/// Bytes past `count * width` are not touched. On error the buffer is unchanged.
///
/// # Example
///
/// ```
/// use analyze_rs::swap::swap_in_place;
///
/// let mut data = vec![0x01, 0x02, 0x03, 0x04];
/// swap_in_place(&mut data, 4, 1).unwrap();
/// assert_eq!(data, vec![0x04, 0x03, 0x02, 0x01]);
/// ```
pub fn swap_in_place(buffer: &mut [u8], width: usize, count: usize) -> Result<()> {
    let width = ElementWidth::from_bytes(width)?;
    let span = checked_span(buffer.len(), width, count)?;

    reverse_each(&mut buffer[..span], width.bytes());
    trace_swap(&buffer[..span], width, count);
    Ok(())
}

/// Return a byte-swapped copy of `buffer`, leaving the input untouched.
///
/// The copy has the same length as `buffer`; only the first `count` elements
/// are reversed.
///
/// # Example
///
/// ```
/// use analyze_rs::swap::swap_to_vec;
///
/// let data = [0xAB, 0xCD];
/// let swapped = swap_to_vec(&data, 2, 1).unwrap();
/// assert_eq!(swapped, vec![0xCD, 0xAB]);
/// assert_eq!(data, [0xAB, 0xCD]);
/// ```
pub fn swap_to_vec(buffer: &[u8], width: usize, count: usize) -> Result<Vec<u8>> {
    let element_width = ElementWidth::from_bytes(width)?;
    checked_span(buffer.len(), element_width, count)?;

    let mut out = buffer.to_vec();
    swap_in_place(&mut out, width, count)?;
    Ok(out)
}

/// Number of bytes covered by `count` elements, checked against the buffer length
fn checked_span(len: usize, width: ElementWidth, count: usize) -> Result<usize> {
    let required = count
        .checked_mul(width.bytes())
        .ok_or(AnalyzeError::BufferTooShort { required: usize::MAX, actual: len })?;

    if required > len {
        return Err(AnalyzeError::BufferTooShort { required, actual: len });
    }
    Ok(required)
}

fn trace_swap(swapped: &[u8], width: ElementWidth, count: usize) {
    if !log::log_enabled!(log::Level::Trace) {
        return;
    }
    if let Some(last) = swapped.rchunks_exact(width.bytes()).next() {
        let mut before = last.to_vec();
        before.reverse();
        log::trace!("[{}]: {:02x?} --> {:02x?}", count, before, last);
    }
}
