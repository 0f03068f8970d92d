//! The GLSL builtin function library.
//!
//! Functions take a [`GenType`](crate::GenType) where GLSL takes `genType`,
//! so they apply componentwise to scalars and vectors alike. Where GLSL also
//! accepts a scalar in place of a vector (`clamp(v, 0.0, 1.0)`), the
//! parameter is `impl Into<T>` and scalars are broadcast.
//!
//! GLSL names are kept, in snake case: `roundEven` is [`round_even`],
//! `floatBitsToInt` is [`float_bits_to_int`]. `mod` is a Rust keyword and is
//! called [`modulo`]. Functions that have GLSL `out` parameters return tuples
//! instead.
//!
//! | Status `x` for done or `!` for won't do | Function | Notes |
//! | --- | --- | --- |
//! |x| radians, degrees | |
//! |x| sin, cos, tan, asin, acos, atan, atan2 | GLSL's two argument `atan(y, x)` is `atan2` |
//! |x| sinh, cosh, tanh, asinh, acosh, atanh | |
//! |x| pow, exp, log, exp2, log2, sqrt, inversesqrt | |
//! |x| abs, sign, floor, trunc, round, round_even, ceil, fract | `round` rounds half away from zero |
//! |x| modulo, modf, min, max, clamp | `modulo(x, y)` is `x - y * floor(x / y)` |
//! |x| mix, mix_bool, step, smoothstep | `mix(genType, genType, genBType)` is `mix_bool` |
//! |x| isnan, isinf | |
//! |x| float_bits_to_int, float_bits_to_uint, int_bits_to_float, uint_bits_to_float | |
//! |x| fma, frexp, ldexp | `frexp` returns `(significand, exponent)` |
//! |x| pack_unorm2x16, pack_snorm2x16, pack_unorm4x8, pack_snorm4x8 | see [`crate::packing`] |
//! |x| unpack_unorm2x16, unpack_snorm2x16, unpack_unorm4x8, unpack_snorm4x8 | see [`crate::packing`] |
//! |x| pack_half2x16, unpack_half2x16, pack_double2x32, unpack_double2x32 | see [`crate::packing`] |
//! |x| length, distance, dot, cross, normalize, faceforward, reflect, refract | |
//! |x| matrix_comp_mult, outer_product, transpose, determinant, inverse | `inverse` returns a `Result` |
//! |x| less_than, less_than_equal, greater_than, greater_than_equal, equal, not_equal | |
//! |x| any, all, not | |
//! |x| uadd_carry, usub_borrow | return `(result, carry)` |
//! |x| umul_extended, imul_extended | return `(msb, lsb)` |
//! |x| bitfield_extract, bitfield_insert, bitfield_reverse, bit_count, find_lsb, find_msb | |
//! |!| ftransform, noise1..4 | deprecated in GLSL |
//! |!| texture, image, atomic and derivative functions | need a GPU |

mod common;
mod exponential;
mod geometric;
mod integer;
mod matrix;
mod relational;
mod trigonometry;

pub use common::*;
pub use exponential::*;
pub use geometric::*;
pub use integer::*;
pub use matrix::*;
pub use relational::*;
pub use trigonometry::*;
