//! Property-based tests for fixed-width bit assignments.

use proptest::prelude::*;

use strider_ir::BitVector;

proptest! {
    /// Display renders MSB-first and parsing it back is the identity.
    #[test]
    fn display_parse_roundtrip(value in 0u64..u64::MAX, width in 1u32..=64) {
        let bv = BitVector::from_value(value, width);
        let rendered = bv.to_string();

        prop_assert_eq!(rendered.len(), width as usize);
        prop_assert_eq!(rendered.parse::<BitVector>().unwrap(), bv);
    }

    /// `from_value` keeps exactly the low `width` bits.
    #[test]
    fn from_value_masks(value in 0u64..u64::MAX, width in 1u32..64) {
        let bv = BitVector::from_value(value, width);
        prop_assert_eq!(bv.value(), value & ((1u64 << width) - 1));
    }

    /// Bit `i` carries significance `2^i`.
    #[test]
    fn bit_significance(width in 1u32..=64, bit in 0u32..64) {
        let bit = bit % width;
        let mut bv = BitVector::zeros(width);
        bv.set(bit, true);

        prop_assert!(bv.get(bit));
        prop_assert_eq!(bv.value(), 1u64 << bit);
    }

    /// Splitting into two fields and reassembling loses nothing.
    #[test]
    fn field_split_reassembles(value in 0u64..u64::MAX, half in 1u32..=32) {
        let bv = BitVector::from_value(value, 2 * half);
        let low = bv.field(0, half);
        let high = bv.field(half, half);

        prop_assert_eq!(low.value() | (high.value() << half), bv.value());
    }
}
