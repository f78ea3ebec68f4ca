// tests/property_tests.rs
use analyze_rs::swap::{swap_elements, swap_in_place, swap_to_vec, swapped_elements};
use analyze_rs::*;
use proptest::prelude::*;

fn datatype_name() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["BINARY", "CHAR", "SHORT", "INT", "FLOAT", "COMPLEX", "DOUBLE", "RGB"])
        .prop_flat_map(|name| {
            prop::collection::vec(any::<bool>(), name.len()).prop_map(move |upper| {
                name.chars()
                    .zip(upper)
                    .map(|(c, u)| if u { c.to_ascii_uppercase() } else { c.to_ascii_lowercase() })
                    .collect::<String>()
            })
        })
}

proptest! {
    #[test]
    fn prop_build_roundtrip(
        width in any::<i16>(),
        height in any::<i16>(),
        depth in any::<i16>(),
        volumes in any::<i16>(),
        name in datatype_name(),
        glmax in any::<i32>(),
        glmin in any::<i32>(),
    ) {
        let header = HeaderRecord::build(width, height, depth, volumes, &name, glmax, glmin).unwrap();
        let bytes = header.to_bytes();
        prop_assert_eq!(bytes.len(), 348);

        let parsed = HeaderRecord::from_bytes(&bytes).unwrap();
        prop_assert_eq!(&parsed, &header);

        let dt = DataType::from_name(&name).unwrap();
        prop_assert_eq!(parsed.dime.datatype, dt.code());
        prop_assert_eq!(parsed.dime.bitpix, dt.bitpix());
        prop_assert_eq!(parsed.dime.dim, [4, width, height, depth, volumes, 0, 0, 0]);
    }

    #[test]
    fn prop_roundtrip_any_endianness(
        width in any::<i16>(),
        glmax in any::<i32>(),
        big in any::<bool>(),
    ) {
        let endianness = if big { Endianness::Big } else { Endianness::Little };
        let header = HeaderRecord::build(width, 1, 1, 1, "short", glmax, 0).unwrap();
        let bytes = header.to_bytes_in(endianness);

        let (parsed, detected) = HeaderRecord::from_bytes_detect(&bytes).unwrap();
        prop_assert_eq!(detected, endianness);
        prop_assert_eq!(parsed, header);
    }

    #[test]
    fn prop_unknown_names_rejected(name in "[a-z]{1,12}") {
        let valid = DataType::from_name(&name).map(|dt| dt.code() > 0).unwrap_or(false);
        let result = HeaderRecord::build(1, 1, 1, 1, &name, 0, 0);
        prop_assert_eq!(result.is_ok(), valid);
        if !valid {
            prop_assert_eq!(DataType::lookup_code(&name) <= 0, true);
        }
    }

    #[test]
    fn prop_wrong_length_rejected(data in prop::collection::vec(any::<u8>(), 0..700)) {
        prop_assume!(data.len() != 348);
        let is_bad_length = matches!(
            HeaderRecord::from_bytes(&data),
            Err(AnalyzeError::BadLength { .. })
        );
        prop_assert!(is_bad_length);
    }

    #[test]
    fn prop_swap_involution(
        data in prop::collection::vec(any::<u8>(), 0..512),
        four in any::<bool>(),
    ) {
        let width = if four { 4 } else { 2 };
        let count = data.len() / width;

        let once = swap_to_vec(&data, width, count).unwrap();
        let twice = swap_to_vec(&once, width, count).unwrap();
        prop_assert_eq!(&twice, &data);

        let mut in_place = data.clone();
        swap_in_place(&mut in_place, width, count).unwrap();
        prop_assert_eq!(&in_place, &once);
        swap_in_place(&mut in_place, width, count).unwrap();
        prop_assert_eq!(in_place, data);
    }

    #[test]
    fn prop_swap_reverses_each_element(data in prop::collection::vec(any::<u8>(), 0..256)) {
        let count = data.len() / 4;
        let out = swap_to_vec(&data, 4, count).unwrap();
        for i in 0..count {
            for j in 0..4 {
                prop_assert_eq!(out[i * 4 + j], data[i * 4 + 3 - j]);
            }
        }
        prop_assert_eq!(&out[count * 4..], &data[count * 4..]);
    }

    #[test]
    fn prop_typed_swap_matches_swap_bytes(values in prop::collection::vec(any::<u32>(), 0..128)) {
        let expected: Vec<u32> = values.iter().map(|v| v.swap_bytes()).collect();
        prop_assert_eq!(swapped_elements(&values), expected);

        let mut restored = swapped_elements(&values);
        swap_elements(&mut restored);
        prop_assert_eq!(restored, values);
    }
}
