// src/utils/endian.rs

/// Reverse the bytes of every `width`-sized chunk of `bytes`.
///
/// A trailing partial chunk is left untouched.
pub fn reverse_each(bytes: &mut [u8], width: usize) {
    if width <= 1 {
        return;
    }

    for chunk in bytes.chunks_exact_mut(width) {
        chunk.reverse();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_each() {
        let mut data = vec![1u8, 2, 3, 4, 5, 6, 7, 8];
        reverse_each(&mut data, 4);
        assert_eq!(data, vec![4, 3, 2, 1, 8, 7, 6, 5]);

        reverse_each(&mut data, 2);
        assert_eq!(data, vec![3, 4, 1, 2, 7, 8, 5, 6]);
    }

    #[test]
    fn test_reverse_each_ignores_tail() {
        let mut data = vec![1u8, 2, 3];
        reverse_each(&mut data, 2);
        assert_eq!(data, vec![2, 1, 3]);
    }
}
