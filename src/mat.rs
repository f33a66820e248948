use core::hash::{Hash, Hasher};
use core::ops;

use bytemuck::{Pod, Zeroable};

use crate::vec::Vec3;

/// Row or column selector. Indexed matrix access takes one of these, so
/// an out-of-range index cannot be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    #[inline]
    fn idx(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// Square 3x3 matrix of floats, row-major: `e[i][j]` is row i, column j.
/// Represents the linear (rotation and scale) part of a node transform;
/// translation is carried separately.
#[derive(Debug, Default, Copy, Clone, Pod, Zeroable)]
#[repr(C)]
pub struct Mat3 {
    pub e: [[f32; 3]; 3],
}

impl Mat3 {
    pub const ZERO: Mat3 = Mat3 { e: [[0.0; 3]; 3] };
    pub const IDENTITY: Mat3 = Mat3 {
        e: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    /// The zero matrix.
    #[inline]
    pub fn new() -> Mat3 {
        Mat3::default()
    }

    /// Builds from the nine elements in row-major order.
    #[inline]
    #[allow(clippy::too_many_arguments)]
    pub fn from_elements(
        m00: f32, m01: f32, m02: f32,
        m10: f32, m11: f32, m12: f32,
        m20: f32, m21: f32, m22: f32,
    ) -> Mat3 {
        Mat3 {
            e: [[m00, m01, m02], [m10, m11, m12], [m20, m21, m22]],
        }
    }

    #[inline]
    pub fn from_rows(v: &[Vec3; 3]) -> Mat3 {
        let mut m = Mat3::new();
        for i in 0..3 {
            m.e[i] = v[i].to_slice();
        }
        m
    }

    #[inline]
    pub fn from_cols(v: &[Vec3; 3]) -> Mat3 {
        Mat3::from_rows(v).transpose()
    }

    #[inline]
    pub fn scale_uniform(d: f32) -> Mat3 {
        let mut m = Mat3::new();
        for i in 0..3 {
            m.e[i][i] = d;
        }
        m
    }

    #[inline]
    pub fn scale(v: Vec3) -> Mat3 {
        let vv = v.to_slice();

        let mut m = Mat3::new();
        for i in 0..3 {
            m.e[i][i] = vv[i];
        }
        m
    }

    #[inline]
    pub fn transpose(&self) -> Mat3 {
        let mut m = Mat3::new();

        for i in 0..3 {
            for j in 0..3 {
                m.e[j][i] = self.e[i][j];
            }
        }
        m
    }

    #[inline]
    pub fn to_rows(&self) -> [Vec3; 3] {
        bytemuck::cast(*self)
    }

    #[inline]
    pub fn to_cols(&self) -> [Vec3; 3] {
        self.transpose().to_rows()
    }

    #[inline]
    pub fn row(&self, i: Axis) -> Vec3 {
        Vec3::from_slice(&self.e[i.idx()])
    }

    #[inline]
    pub fn set_row(&mut self, i: Axis, v: Vec3) {
        self.e[i.idx()] = v.to_slice();
    }

    #[inline]
    pub fn col(&self, j: Axis) -> Vec3 {
        let j = j.idx();
        Vec3::new(self.e[0][j], self.e[1][j], self.e[2][j])
    }

    #[inline]
    pub fn set_col(&mut self, j: Axis, v: Vec3) {
        let j = j.idx();
        self.e[0][j] = v.x;
        self.e[1][j] = v.y;
        self.e[2][j] = v.z;
    }

    /// Cache form of the matrix product: `*out = self * rhs`.
    #[inline]
    pub fn mul_into(&self, rhs: &Mat3, out: &mut Mat3) {
        *out = *self * *rhs;
    }

    /// Cache form of the matrix-vector product: `*out = self * v`.
    #[inline]
    pub fn mul_vec_into(&self, v: Vec3, out: &mut Vec3) {
        *out = *self * v;
    }
}

impl ops::Mul<Mat3> for Mat3 {
    type Output = Mat3;

    #[inline]
    fn mul(self, rhs: Mat3) -> Mat3 {
        let mut m = Mat3::new();

        let a = self.to_rows();
        let b = rhs.to_cols();

        for i in 0..3 {
            for j in 0..3 {
                m.e[i][j] = Vec3::dot(a[i], b[j]);
            }
        }
        m
    }
}

impl ops::MulAssign<Mat3> for Mat3 {
    #[inline]
    fn mul_assign(&mut self, rhs: Mat3) {
        *self = *self * rhs;
    }
}

impl ops::Mul<Vec3> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        let a = self.to_rows();
        Vec3::new(a[0].dot(rhs), a[1].dot(rhs), a[2].dot(rhs))
    }
}

// Bitwise element comparison, consistent with the vector types.
impl PartialEq for Mat3 {
    #[inline]
    fn eq(&self, other: &Mat3) -> bool {
        self.e
            .iter()
            .flatten()
            .zip(other.e.iter().flatten())
            .all(|(a, b)| a.to_bits() == b.to_bits())
    }
}

impl Eq for Mat3 {}

impl Hash for Mat3 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for row in &self.e {
            for v in row {
                v.to_bits().hash(state);
            }
        }
    }
}
