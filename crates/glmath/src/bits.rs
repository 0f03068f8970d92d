//! 32-bit twiddling behind the integer builtins.
//!
//! Everything here works on the raw `u32` pattern. Signedness is handled by
//! the callers in [`BaseInt`](crate::scalar::BaseInt).

/// Smears the highest set bit of `x - 1` downwards and adds one.
pub(crate) fn next_power_of_two(x: u32) -> u32 {
    let mut v = x.wrapping_sub(1);
    v |= v >> 1;
    v |= v >> 2;
    v |= v >> 4;
    v |= v >> 8;
    v |= v >> 16;
    v.wrapping_add(1)
}

/// Binary search from the top half down.
pub(crate) fn leading_zeros(x: u32) -> u32 {
    if x == 0 {
        return 32;
    }
    let mut x = x;
    let mut n = 0;
    if x & 0xFFFF_0000 == 0 {
        n += 16;
        x <<= 16;
    }
    if x & 0xFF00_0000 == 0 {
        n += 8;
        x <<= 8;
    }
    if x & 0xF000_0000 == 0 {
        n += 4;
        x <<= 4;
    }
    if x & 0xC000_0000 == 0 {
        n += 2;
        x <<= 2;
    }
    if x & 0x8000_0000 == 0 {
        n += 1;
    }
    n
}

/// Binary search from the bottom half up.
pub(crate) fn trailing_zeros(x: u32) -> u32 {
    if x == 0 {
        return 32;
    }
    let mut x = x;
    let mut n = 0;
    if x & 0x0000_FFFF == 0 {
        n += 16;
        x >>= 16;
    }
    if x & 0x0000_00FF == 0 {
        n += 8;
        x >>= 8;
    }
    if x & 0x0000_000F == 0 {
        n += 4;
        x >>= 4;
    }
    if x & 0x0000_0003 == 0 {
        n += 2;
        x >>= 2;
    }
    if x & 0x0000_0001 == 0 {
        n += 1;
    }
    n
}

/// SWAR population count: pairs, nibbles, bytes, then a multiply sums the
/// bytes into the top one.
pub(crate) fn bit_count(x: u32) -> u32 {
    let x = x - ((x >> 1) & 0x5555_5555);
    let x = (x & 0x3333_3333) + ((x >> 2) & 0x3333_3333);
    let x = (x + (x >> 4)) & 0x0F0F_0F0F;
    x.wrapping_mul(0x0101_0101) >> 24
}

/// Swaps neighbouring bits, then pairs, nibbles, bytes and half words.
pub(crate) fn reverse(x: u32) -> u32 {
    let x = ((x >> 1) & 0x5555_5555) | ((x & 0x5555_5555) << 1);
    let x = ((x >> 2) & 0x3333_3333) | ((x & 0x3333_3333) << 2);
    let x = ((x >> 4) & 0x0F0F_0F0F) | ((x & 0x0F0F_0F0F) << 4);
    let x = ((x >> 8) & 0x00FF_00FF) | ((x & 0x00FF_00FF) << 8);
    (x >> 16) | (x << 16)
}

pub(crate) fn find_lsb(x: u32) -> i32 {
    if x == 0 { -1 } else { trailing_zeros(x) as i32 }
}

pub(crate) fn find_msb(x: u32) -> i32 {
    if x == 0 {
        -1
    } else {
        31 - leading_zeros(x) as i32
    }
}

/// Whether the field `[offset, offset + bits)` is non-empty and inside 32 bits.
fn field_fits(offset: u32, bits: u32) -> bool {
    bits != 0 && offset < 32 && bits <= 32 && offset + bits <= 32
}

pub(crate) fn extract(x: u32, offset: u32, bits: u32, sign_extend: bool) -> u32 {
    if !field_fits(offset, bits) {
        return 0;
    }
    let shifted = x >> offset;
    if bits == 32 {
        return shifted;
    }
    let mask = (1u32 << bits) - 1;
    let field = shifted & mask;
    if sign_extend && field & (1 << (bits - 1)) != 0 {
        field | !mask
    } else {
        field
    }
}

pub(crate) fn insert(base: u32, insert: u32, offset: u32, bits: u32) -> u32 {
    if !field_fits(offset, bits) {
        return base;
    }
    let mask = if bits == 32 {
        u32::MAX
    } else {
        ((1u32 << bits) - 1) << offset
    };
    (base & !mask) | ((insert << offset) & mask)
}
