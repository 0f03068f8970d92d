//! Packing of normalized and half precision values into integer bit patterns.
//!
//! Lanes are stored little endian: the first component lands in the lowest
//! bits. Normalized values are clamped, scaled and rounded to the nearest
//! integer, with halves rounding away from zero.
use half::f16;

use crate::{
    vector::Vector,
    vectors::{Vec2, Vec4},
};

fn lane_mask(width: u32) -> u32 {
    u32::MAX >> (32 - width)
}

fn pack_lanes<const N: usize>(lanes: [u32; N], width: u32) -> u32 {
    lanes
        .into_iter()
        .enumerate()
        .fold(0, |packed, (i, lane)| packed | (lane & lane_mask(width)) << (i as u32 * width))
}

fn lane(packed: u32, index: usize, width: u32) -> u32 {
    (packed >> (index as u32 * width)) & lane_mask(width)
}

fn to_unorm(value: f32, width: u32) -> u32 {
    (value.clamp(0.0, 1.0) * lane_mask(width) as f32).round() as u32
}

fn from_unorm(bits: u32, width: u32) -> f32 {
    bits as f32 / lane_mask(width) as f32
}

fn snorm_scale(width: u32) -> f32 {
    (lane_mask(width) >> 1) as f32
}

fn to_snorm(value: f32, width: u32) -> u32 {
    (value.clamp(-1.0, 1.0) * snorm_scale(width)).round() as i32 as u32
}

fn from_snorm(bits: u32, width: u32) -> f32 {
    let shift = 32 - width;
    let signed = ((bits << shift) as i32) >> shift;
    (signed as f32 / snorm_scale(width)).clamp(-1.0, 1.0)
}

/// `v` clamped to `[0, 1]` as two 16-bit lanes.
pub fn pack_unorm2x16(v: Vec2<f32>) -> u32 {
    pack_lanes(v.to_array().map(|x| to_unorm(x, 16)), 16)
}

pub fn unpack_unorm2x16(packed: u32) -> Vec2<f32> {
    Vec2::from_fn(|i| from_unorm(lane(packed, i, 16), 16))
}

/// `v` clamped to `[-1, 1]` as two 16-bit two's complement lanes.
pub fn pack_snorm2x16(v: Vec2<f32>) -> u32 {
    pack_lanes(v.to_array().map(|x| to_snorm(x, 16)), 16)
}

/// Lanes of `-32768` unpack to `-1`.
pub fn unpack_snorm2x16(packed: u32) -> Vec2<f32> {
    Vec2::from_fn(|i| from_snorm(lane(packed, i, 16), 16))
}

/// `v` clamped to `[0, 1]` as four 8-bit lanes.
pub fn pack_unorm4x8(v: Vec4<f32>) -> u32 {
    pack_lanes(v.to_array().map(|x| to_unorm(x, 8)), 8)
}

pub fn unpack_unorm4x8(packed: u32) -> Vec4<f32> {
    Vec4::from_fn(|i| from_unorm(lane(packed, i, 8), 8))
}

/// `v` clamped to `[-1, 1]` as four 8-bit two's complement lanes.
pub fn pack_snorm4x8(v: Vec4<f32>) -> u32 {
    pack_lanes(v.to_array().map(|x| to_snorm(x, 8)), 8)
}

/// Lanes of `-128` unpack to `-1`.
pub fn unpack_snorm4x8(packed: u32) -> Vec4<f32> {
    Vec4::from_fn(|i| from_snorm(lane(packed, i, 8), 8))
}

/// `v` converted to IEEE binary16, as two 16-bit lanes.
pub fn pack_half2x16(v: Vec2<f32>) -> u32 {
    pack_lanes(v.to_array().map(|x| f16::from_f32(x).to_bits() as u32), 16)
}

pub fn unpack_half2x16(packed: u32) -> Vec2<f32> {
    Vec2::from_fn(|i| f16::from_bits(lane(packed, i, 16) as u16).to_f32())
}

/// Reinterprets `v` as the bits of a double, `v.x` being the low word.
pub fn pack_double2x32(v: Vec2<u32>) -> f64 {
    f64::from_bits((v.y as u64) << 32 | v.x as u64)
}

pub fn unpack_double2x32(value: f64) -> Vec2<u32> {
    let bits = value.to_bits();
    Vec2::new(bits as u32, (bits >> 32) as u32)
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    use crate::vectors::*;

    use super::*;

    #[test]
    fn sanity_unorm() {
        assert_eq!(0xFFFF_0000, pack_unorm2x16(vec2f(0.0, 1.0)));
        assert_eq!(0x0000_FFFF, pack_unorm2x16(vec2f(2.0, -1.0)));
        assert_eq!(vec2f(1.0, 0.0), unpack_unorm2x16(0x0000_FFFF));
        assert_eq!(0xFF00_80FF, pack_unorm4x8(vec4f(1.0, 0.5, 0.0, 1.0)));
        assert_eq!(
            vec4f(1.0, 128.0 / 255.0, 0.0, 1.0),
            unpack_unorm4x8(0xFF00_80FF)
        );
    }

    #[test]
    fn sanity_snorm() {
        assert_eq!(0x4000_817F, pack_snorm4x8(vec4f(1.0, -1.0, 0.0, 0.5)));
        assert_eq!(0x8001_7FFF, pack_snorm2x16(vec2f(3.0, -3.0)));
        assert_eq!(vec2f(1.0, -1.0), unpack_snorm2x16(0x8000_7FFF));
        assert_eq!(vec4f(-1.0, 0.0, 1.0, -1.0), unpack_snorm4x8(0x817F_0080));
    }

    #[test]
    fn sanity_half() {
        assert_eq!(0xC000_3C00, pack_half2x16(vec2f(1.0, -2.0)));
        assert_eq!(vec2f(1.0, -2.0), unpack_half2x16(0xC000_3C00));
        assert!(unpack_half2x16(pack_half2x16(vec2f(f32::INFINITY, 0.0))).x.is_infinite());
    }

    #[test]
    fn sanity_double() {
        let bits = 1.5f64.to_bits();
        let words = unpack_double2x32(1.5);
        assert_eq!(vec2u(bits as u32, (bits >> 32) as u32), words);
        assert_eq!(1.5, pack_double2x32(words));
    }

    proptest! {
        #[test]
        fn unorm2x16_round_trips(x in 0.0f32..=1.0, y in 0.0f32..=1.0) {
            let v = vec2f(x, y);
            let unpacked = unpack_unorm2x16(pack_unorm2x16(v));
            assert_abs_diff_eq!(v, unpacked, epsilon = 1.0 / 65535.0);
        }

        #[test]
        fn unorm4x8_round_trips(v in prop::array::uniform4(0.0f32..=1.0)) {
            let v = Vec4::from(v);
            assert_abs_diff_eq!(v, unpack_unorm4x8(pack_unorm4x8(v)), epsilon = 1.0 / 255.0);
        }

        #[test]
        fn snorm2x16_round_trips(x in -1.0f32..=1.0, y in -1.0f32..=1.0) {
            let v = vec2f(x, y);
            assert_abs_diff_eq!(v, unpack_snorm2x16(pack_snorm2x16(v)), epsilon = 1.0 / 32767.0);
        }

        #[test]
        fn snorm4x8_round_trips(v in prop::array::uniform4(-1.0f32..=1.0)) {
            let v = Vec4::from(v);
            assert_abs_diff_eq!(v, unpack_snorm4x8(pack_snorm4x8(v)), epsilon = 1.0 / 127.0);
        }

        #[test]
        fn double2x32_keeps_bits(x: u32, y: u32) {
            prop_assert_eq!(vec2u(x, y), unpack_double2x32(pack_double2x32(vec2u(x, y))));
        }
    }
}
