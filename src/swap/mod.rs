// src/swap/mod.rs
//! Byte-order reversal for buffers of 2-byte and 4-byte elements
//!
//! Two entry points cover the two ways a caller can ask for a swap:
//!
//! - [`swap_in_place`] - mutate the caller's buffer
//! - [`swap_to_vec`] - return a swapped copy, leaving the input untouched
//!
//! Both reverse each element independently, so applying either twice restores the
//! original bytes. 32-bit integers and floats are treated alike: only the byte
//! pattern is reversed, never the value.
//!
//! [`swap_elements`] and [`swapped_elements`] do the same for typed slices of
//! `i16`, `u16`, `i32`, `u32` and `f32`, where the width is known at compile time.

mod bytes;
mod typed;

pub use bytes::{swap_in_place, swap_to_vec};
pub use typed::{swap_elements, swapped_elements, SwapElement};
