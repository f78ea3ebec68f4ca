// src/swap/typed.rs
use bytemuck::Pod;
use crate::types::ElementWidth;
use crate::utils::reverse_each;

mod sealed {
    pub trait Sealed {}
}

/// Element types the swapper accepts: 16-bit and 32-bit integers and single floats
pub trait SwapElement: Pod + sealed::Sealed {
    const WIDTH: ElementWidth;
}

macro_rules! impl_swap_element {
    ($($ty:ty => $width:expr),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}
            impl SwapElement for $ty {
                const WIDTH: ElementWidth = $width;
            }
        )*
    };
}

impl_swap_element! {
    i16 => ElementWidth::Two,
    u16 => ElementWidth::Two,
    i32 => ElementWidth::Four,
    u32 => ElementWidth::Four,
    f32 => ElementWidth::Four,
}

/// Reverse the byte order of every element of `data` in place.
///
/// ```
/// use analyze_rs::swap::swap_elements;
///
/// let mut data = [0x0102u16, 0x0304];
/// swap_elements(&mut data);
/// assert_eq!(data, [0x0201, 0x0403]);
/// ```
pub fn swap_elements<T: SwapElement>(data: &mut [T]) {
    let bytes: &mut [u8] = bytemuck::cast_slice_mut(data);
    reverse_each(bytes, T::WIDTH.bytes());
    log::trace!("swapped {} elements of {} bytes", data.len(), T::WIDTH.bytes());
}

/// Return a copy of `data` with every element's byte order reversed
pub fn swapped_elements<T: SwapElement>(data: &[T]) -> Vec<T> {
    let mut out = data.to_vec();
    swap_elements(&mut out);
    out
}
