//! Integer functions: extended arithmetic and bit fields.
//!
//! Bit positions count from the least significant bit. Field operations
//! whose field does not fit in 32 bits leave their input unchanged
//! (`bitfield_insert`) or give zero (`bitfield_extract`).
use crate::{gen_type::{GenInt, GenType}, scalar::BaseInt};

/// `x + y` and its carry: `(sum mod 2^32, 1 if the sum overflowed else 0)`.
pub fn uadd_carry<T: GenType<Scalar = u32>>(x: T, y: T) -> (T, T) {
    let wide = |x: u32, y: u32| x as u64 + y as u64;
    (
        x.apply2(y, |x, y| wide(x, y) as u32),
        x.apply2(y, |x, y| (wide(x, y) >> 32) as u32),
    )
}

/// `x - y` and its borrow: `(difference mod 2^32, 1 if y > x else 0)`.
pub fn usub_borrow<T: GenType<Scalar = u32>>(x: T, y: T) -> (T, T) {
    (
        x.apply2(y, u32::wrapping_sub),
        x.apply2(y, |x, y| u32::from(x < y)),
    )
}

/// The 64-bit product of `x` and `y`, as `(msb, lsb)` halves.
pub fn umul_extended<T: GenType<Scalar = u32>>(x: T, y: T) -> (T, T) {
    let product = |x: u32, y: u32| x as u64 * y as u64;
    (
        x.apply2(y, |x, y| (product(x, y) >> 32) as u32),
        x.apply2(y, |x, y| product(x, y) as u32),
    )
}

/// The 64-bit signed product of `x` and `y`, as `(msb, lsb)` halves.
pub fn imul_extended<T: GenType<Scalar = i32>>(x: T, y: T) -> (T, T) {
    let product = |x: i32, y: i32| x as i64 * y as i64;
    (
        x.apply2(y, |x, y| (product(x, y) >> 32) as i32),
        x.apply2(y, |x, y| product(x, y) as i32),
    )
}

/// Bits `[offset, offset + bits)` of `value` in the low bits of the result.
///
/// Signed results are sign extended from the top bit of the field.
pub fn bitfield_extract<T: GenInt>(value: T, offset: u32, bits: u32) -> T {
    value.apply(|value| value.bitfield_extract(offset, bits))
}

/// `base` with bits `[offset, offset + bits)` replaced by the low `bits`
/// bits of `insert`.
pub fn bitfield_insert<T: GenInt>(base: T, insert: T, offset: u32, bits: u32) -> T {
    base.apply2(insert, |base, insert| base.bitfield_insert(insert, offset, bits))
}

/// Bit `n` of the result is bit `31 - n` of `value`.
pub fn bitfield_reverse<T: GenInt>(value: T) -> T {
    value.apply(BaseInt::bitfield_reverse)
}

/// The number of set bits.
pub fn bit_count<T: GenInt>(value: T) -> T::Cast<i32> {
    value.apply_to(|value| value.bit_count() as i32)
}

/// The index of the lowest set bit, or -1 for zero.
pub fn find_lsb<T: GenInt>(value: T) -> T::Cast<i32> {
    value.apply_to(BaseInt::find_lsb)
}

/// The index of the highest set bit, or -1 for zero.
///
/// For negative `i32`s this is the highest clear bit, so -1 also gives -1.
pub fn find_msb<T: GenInt>(value: T) -> T::Cast<i32> {
    value.apply_to(BaseInt::find_msb)
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use crate::vectors::*;

    use super::*;

    #[test]
    fn sanity_carry_and_borrow() {
        let (sum, carry) = uadd_carry(vec2u(0xFFFF_FFFE, 0), vec2u(3, 7));
        assert_eq!(vec2u(1, 7), sum);
        assert_eq!(vec2u(1, 0), carry);

        let (difference, borrow) = usub_borrow(vec2u(16, 17), vec2u(17, 16));
        assert_eq!(vec2u(0xFFFF_FFFF, 1), difference);
        assert_eq!(vec2u(1, 0), borrow);
    }

    #[test]
    fn carry_out_of_the_top_word() {
        let (sum, carry) = uadd_carry(vec2u(0xFFFF_FFFE, 0), vec2u(3, 3));
        assert_eq!(vec2u(1, 3), sum);
        assert_eq!(vec2u(1, 0), carry);
    }

    #[test]
    fn sanity_extended_products() {
        let (msb, lsb) = umul_extended(vec2u(0xFFFF_FFFF, 3), vec2u(2, 5));
        assert_eq!(vec2u(1, 0), msb);
        assert_eq!(vec2u(0xFFFF_FFFE, 15), lsb);

        let (msb, lsb) = imul_extended(vec2i(-1, i32::MIN), vec2i(2, 2));
        assert_eq!(vec2i(-1, -1), msb);
        assert_eq!(vec2i(-2, 0), lsb);
    }

    #[test]
    fn sanity_bitfields() {
        assert_eq!(0xF0u32 >> 4, bitfield_extract(0xF0u32, 4, 4));
        assert_eq!(vec2i(-1, 7), bitfield_extract(vec2i(0xF0, 0x70), 4, 4));
        assert_eq!(
            vec2u(0x00FF_0001, 0xF),
            bitfield_insert(vec2u(0x0000_0001, 0xF), vec2u(0xFF, 0), 16, 8)
        );
        assert_eq!(0x1234u32, bitfield_insert(0x1234u32, 0xFF, 30, 4));
        assert_eq!(0, bitfield_extract(0x1234u32, 0, 0));
    }

    #[test]
    fn sanity_bit_reverse() {
        assert_eq!(
            vec4u(0x8000_0000, 0x0000_0001, 0xF000_0000, 0),
            bitfield_reverse(vec4u(1, 0x8000_0000, 0xF, 0))
        );
        assert_eq!(-1, bitfield_reverse(-1i32));
    }

    #[test]
    fn sanity_counts() {
        assert_eq!(vec4i(0, 1, 32, 16), bit_count(vec4u(0, 8, u32::MAX, 0xFFFF)));
        assert_eq!(vec3i(32, 1, 31), bit_count(vec3i(-1, 1, i32::MAX)));
        assert_eq!(vec4i(-1, 3, 0, 31), find_lsb(vec4u(0, 8, u32::MAX, 0x8000_0000)));
        assert_eq!(vec4i(-1, 3, 31, 15), find_msb(vec4u(0, 8, u32::MAX, 0xFFFF)));
        assert_eq!(vec3i(-1, 0, 30), find_msb(vec3i(-1, -2, 0x7FFF_FFFF)));
    }

    proptest! {
        #[test]
        fn carry_recovers_the_wide_sum(x: u32, y: u32) {
            let (sum, carry) = uadd_carry(x, y);
            prop_assert_eq!(x as u64 + y as u64, ((carry as u64) << 32) | sum as u64);
        }

        #[test]
        fn borrow_recovers_the_difference(x: u32, y: u32) {
            let (difference, borrow) = usub_borrow(x, y);
            prop_assert_eq!(
                x as i64 - y as i64,
                difference as i64 - ((borrow as i64) << 32)
            );
        }

        #[test]
        fn extended_products_recover_the_wide_product(x: i32, y: i32) {
            let (msb, lsb) = imul_extended(x, y);
            prop_assert_eq!(x as i64 * y as i64, ((msb as i64) << 32) | lsb as u32 as i64);
        }

        #[test]
        fn reverse_is_an_involution(x: u32) {
            prop_assert_eq!(x, bitfield_reverse(bitfield_reverse(x)));
        }
    }
}
