//! Procedural macros for `glmath`.
use proc_macro::TokenStream;

mod swizzle;

/// Generates the swizzle methods of a vector type.
///
/// ```rust, ignore
/// glmath_macros::swizzle!(Vec3, [T, Vec2, Vec3, Vec4], [x, y, z], [r, g, b]);
/// ```
///
/// The first list names the component type parameter followed by the
/// vector types returned for two, three and four component selections.
/// The second list names the fields of the vector and the third the
/// letters the generated methods use for those fields, so the invocation
/// above produces `r`, `rg`, `bgr`, `rrgb` and every other selection of
/// one to four components.
#[proc_macro]
pub fn swizzle(token_stream: TokenStream) -> TokenStream {
    swizzle::swizzle(token_stream)
}
