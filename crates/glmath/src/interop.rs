//! Conversions to and from glam.
use crate::{
    matrices::{Mat2, Mat3, Mat4},
    vectors::{Vec2, Vec3, Vec4},
};

macro_rules! impl_glam_vector {
    ($glam:ty, $ty:ident<$scalar:ty>, [$($field:ident),+]) => {
        impl From<$glam> for $ty<$scalar> {
            fn from(v: $glam) -> Self {
                $ty::new($(v.$field),+)
            }
        }

        impl From<$ty<$scalar>> for $glam {
            fn from(v: $ty<$scalar>) -> Self {
                <$glam>::new($(v.$field),+)
            }
        }
    };
}

impl_glam_vector!(glam::Vec2, Vec2<f32>, [x, y]);
impl_glam_vector!(glam::Vec3, Vec3<f32>, [x, y, z]);
impl_glam_vector!(glam::Vec4, Vec4<f32>, [x, y, z, w]);
impl_glam_vector!(glam::DVec2, Vec2<f64>, [x, y]);
impl_glam_vector!(glam::DVec3, Vec3<f64>, [x, y, z]);
impl_glam_vector!(glam::DVec4, Vec4<f64>, [x, y, z, w]);
impl_glam_vector!(glam::IVec2, Vec2<i32>, [x, y]);
impl_glam_vector!(glam::IVec3, Vec3<i32>, [x, y, z]);
impl_glam_vector!(glam::IVec4, Vec4<i32>, [x, y, z, w]);
impl_glam_vector!(glam::UVec2, Vec2<u32>, [x, y]);
impl_glam_vector!(glam::UVec3, Vec3<u32>, [x, y, z]);
impl_glam_vector!(glam::UVec4, Vec4<u32>, [x, y, z, w]);
impl_glam_vector!(glam::BVec2, Vec2<bool>, [x, y]);
impl_glam_vector!(glam::BVec3, Vec3<bool>, [x, y, z]);
impl_glam_vector!(glam::BVec4, Vec4<bool>, [x, y, z, w]);

macro_rules! impl_glam_matrix {
    ($glam:ty, $mat:ident<$col:ident<$scalar:ty>>, [$($axis:ident),+]) => {
        impl From<$glam> for $mat<$col<$scalar>> {
            fn from(m: $glam) -> Self {
                $mat::new($(m.$axis.into()),+)
            }
        }

        impl From<$mat<$col<$scalar>>> for $glam {
            fn from(m: $mat<$col<$scalar>>) -> Self {
                <$glam>::from_cols($(m.$axis.into()),+)
            }
        }
    };
}

impl_glam_matrix!(glam::Mat2, Mat2<Vec2<f32>>, [x_axis, y_axis]);
impl_glam_matrix!(glam::Mat3, Mat3<Vec3<f32>>, [x_axis, y_axis, z_axis]);
impl_glam_matrix!(glam::Mat4, Mat4<Vec4<f32>>, [x_axis, y_axis, z_axis, w_axis]);
impl_glam_matrix!(glam::DMat2, Mat2<Vec2<f64>>, [x_axis, y_axis]);
impl_glam_matrix!(glam::DMat3, Mat3<Vec3<f64>>, [x_axis, y_axis, z_axis]);
impl_glam_matrix!(glam::DMat4, Mat4<Vec4<f64>>, [x_axis, y_axis, z_axis, w_axis]);

#[cfg(test)]
mod test {
    use crate::{matrices::*, vectors::*};

    #[test]
    fn sanity_vectors() {
        let v = vec3f(1.0, 2.0, 3.0);
        let g: glam::Vec3 = v.into();
        assert_eq!(glam::Vec3::new(1.0, 2.0, 3.0), g);
        assert_eq!(v, Vec3::from(g));

        let b: glam::BVec4 = vec4b(true, false, false, true).into();
        assert_eq!(glam::BVec4::new(true, false, false, true), b);
        assert_eq!(vec2u(7, 9), Vec2::from(glam::UVec2::new(7, 9)));
    }

    #[test]
    fn sanity_matrices() {
        let m = mat2d(vec2d(1.0, 2.0), vec2d(3.0, 4.0));
        let g = glam::DMat2::from(m);
        assert_eq!(glam::DMat2::from_cols_array(&[1.0, 2.0, 3.0, 4.0]), g);
        assert_eq!(m, Mat2::from(g));
        assert_eq!(
            glam::Mat4::IDENTITY,
            glam::Mat4::from(<Mat4f as crate::matrix::SquareMatrix>::identity())
        );
    }
}
