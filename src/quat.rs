use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops;

use bytemuck::{Pod, Zeroable};

use crate::mat::Mat3;
use crate::vec::Vec3;

/// Rotation quaternion: scalar part `w`, vector part `(x, y, z)`.
///
/// Used strictly to represent 3D rotations; composition is the Hamilton
/// product. Degenerate (zero-norm) values never divide by zero: see
/// [`normalize_mut`](Quat::normalize_mut), [`recip`](Quat::recip),
/// [`rotate`](Quat::rotate) and
/// [`fill_rotation_matrix`](Quat::fill_rotation_matrix) for the exact
/// fallback each operation takes.
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
#[repr(C)]
pub struct Quat {
    pub w: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Default for Quat {
    #[inline]
    fn default() -> Quat {
        Quat::IDENTITY
    }
}

impl Quat {
    /// The identity rotation.
    pub const IDENTITY: Quat = Quat { w: 1.0, x: 0.0, y: 0.0, z: 0.0 };
    /// Provided for completeness only; not a rotation.
    pub const ZERO: Quat = Quat { w: 0.0, x: 0.0, y: 0.0, z: 0.0 };

    #[inline]
    pub fn new(w: f32, x: f32, y: f32, z: f32) -> Quat {
        Quat { w, x, y, z }
    }

    #[inline]
    pub fn from_scalar_vector(w: f32, v: Vec3) -> Quat {
        Quat { w, x: v.x, y: v.y, z: v.z }
    }

    /// Rotation by `angle` radians around `axis`. The axis is normalized
    /// first; a zero axis yields the identity rotation.
    #[inline]
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Quat {
        let mut axis = axis;
        if !axis.normalize_mut() {
            return Quat::IDENTITY;
        }
        let half = 0.5 * angle;
        let s = half.sin();
        Quat {
            w: half.cos(),
            x: axis.x * s,
            y: axis.y * s,
            z: axis.z * s,
        }
    }

    /// Scalar part.
    #[inline]
    pub fn re(&self) -> f32 {
        self.w
    }

    /// Vector part.
    #[inline]
    pub fn im(&self) -> Vec3 {
        Vec3 { x: self.x, y: self.y, z: self.z }
    }

    /// From `[w, x, y, z]`.
    #[inline]
    pub fn from_slice(a: &[f32; 4]) -> Quat {
        bytemuck::cast(*a)
    }

    #[inline]
    pub fn to_slice(self) -> [f32; 4] {
        bytemuck::cast(self)
    }

    #[inline]
    pub fn norm2(self) -> f32 {
        self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z
    }

    #[inline]
    pub fn norm(self) -> f32 {
        self.norm2().sqrt()
    }

    /// Rescales to unit norm in place. The zero quaternion is left
    /// unchanged and reported with `false`; an exactly-unit value is
    /// left as-is.
    #[inline]
    pub fn normalize_mut(&mut self) -> bool {
        let n2 = self.norm2();
        if n2 == 1.0 {
            true
        } else if n2 == 0.0 {
            false
        } else {
            *self = (1.0 / n2.sqrt()) * *self;
            true
        }
    }

    /// Cache form of [`normalize_mut`](Self::normalize_mut); `out`
    /// receives the (possibly unnormalized) result.
    #[inline]
    pub fn normalize_into(&self, out: &mut Quat) -> bool {
        *out = *self;
        out.normalize_mut()
    }

    #[inline]
    pub fn conj(self) -> Quat {
        Quat {
            w: self.w,
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }

    /// Multiplicative inverse, `conj() / norm2()`. A zero-norm
    /// quaternion is returned unchanged rather than failing; callers on
    /// hot paths get a well-defined value either way.
    #[inline]
    pub fn recip(self) -> Quat {
        let n2 = self.norm2();
        if n2 == 0.0 {
            self
        } else {
            (1.0 / n2) * self.conj()
        }
    }

    /// Cache form of [`recip`](Self::recip).
    #[inline]
    pub fn recip_into(&self, out: &mut Quat) {
        *out = self.recip();
    }

    /// Cache form of the Hamilton product: `*out = self * rhs`.
    #[inline]
    pub fn mul_into(&self, rhs: Quat, out: &mut Quat) {
        *out = *self * rhs;
    }

    /// Rotates `v` by this quaternion, the closed-form expansion of the
    /// conjugation `q · (0, v) · q⁻¹`. Dividing by `norm2()` makes a
    /// non-unit quaternion rotate exactly like its normalized form; the
    /// zero quaternion maps every vector to zero, which is what the
    /// conjugation through the tolerant [`recip`](Self::recip) yields.
    #[inline]
    pub fn rotate(self, v: Vec3) -> Vec3 {
        let n2 = self.norm2();
        if n2 == 0.0 {
            return Vec3::ZERO;
        }
        let s = self.w;
        let u = self.im();

        ((s * s - u.length2()) * v + 2.0 * u.dot(v) * u + 2.0 * s * u.cross(v)) * (1.0 / n2)
    }

    /// Cache form of [`rotate`](Self::rotate).
    #[inline]
    pub fn rotate_into(&self, v: Vec3, out: &mut Vec3) {
        *out = self.rotate(v);
    }

    /// Writes the equivalent rotation matrix into `m`. Scaled by
    /// `f = 2 / norm2()` so non-unit quaternions convert correctly; for
    /// the zero quaternion `f` is forced to zero, leaving the identity
    /// diagonal with zero off-diagonals instead of dividing by zero.
    pub fn fill_rotation_matrix(&self, m: &mut Mat3) {
        let n2 = self.norm2();
        let f = if n2 == 0.0 { 0.0 } else { 2.0 / n2 };

        let w = self.w;
        let x = self.x;
        let y = self.y;
        let z = self.z;

        let xy = x * y;
        let xz = x * z;
        let yz = y * z;
        let wx = w * x;
        let wy = w * y;
        let wz = w * z;
        let x2 = x * x;
        let y2 = y * y;
        let z2 = z * z;

        m.e[0][0] = 1.0 - f * (y2 + z2);
        m.e[0][1] = f * (xy - wz);
        m.e[0][2] = f * (xz + wy);

        m.e[1][0] = f * (xy + wz);
        m.e[1][1] = 1.0 - f * (x2 + z2);
        m.e[1][2] = f * (yz - wx);

        m.e[2][0] = f * (xz - wy);
        m.e[2][1] = f * (yz + wx);
        m.e[2][2] = 1.0 - f * (x2 + y2);
    }

    /// Pure form of [`fill_rotation_matrix`](Self::fill_rotation_matrix).
    #[inline]
    pub fn to_mat3(self) -> Mat3 {
        let mut m = Mat3::new();
        self.fill_rotation_matrix(&mut m);
        m
    }
}

impl fmt::Display for Quat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Quat(w: {:.prec$}, x: {:.prec$}, y: {:.prec$}, z: {:.prec$})",
               self.w, self.x, self.y, self.z,
               prec = f.precision().unwrap_or(3))
    }
}

impl ops::Mul<Quat> for f32 {
    type Output = Quat;

    #[inline]
    fn mul(self, rhs: Quat) -> Quat {
        Quat {
            w: rhs.w * self,
            x: rhs.x * self,
            y: rhs.y * self,
            z: rhs.z * self,
        }
    }
}

impl ops::Mul<f32> for Quat {
    type Output = Quat;

    #[inline]
    fn mul(self, rhs: f32) -> Quat {
        rhs * self
    }
}

impl ops::Mul<Quat> for Quat {
    type Output = Quat;

    /// Hamilton product `pq = (w1*w2 − v1·v2, w1*v2 + w2*v1 + v1×v2)`.
    #[inline]
    fn mul(self, rhs: Quat) -> Quat {
        let a = self.im();
        let b = rhs.im();

        let w = self.w * rhs.w - a.dot(b);
        let v = self.w * b + rhs.w * a + a.cross(b);
        Quat {
            w,
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl ops::MulAssign<Quat> for Quat {
    #[inline]
    fn mul_assign(&mut self, rhs: Quat) {
        *self = *self * rhs;
    }
}

impl ops::Mul<Vec3> for Quat {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.rotate(rhs)
    }
}

impl ops::Mul<Mat3> for Quat {
    type Output = Mat3;

    #[inline]
    fn mul(self, rhs: Mat3) -> Mat3 {
        self.to_mat3() * rhs
    }
}

// Bitwise comparison, consistent with the vector types.
impl PartialEq for Quat {
    #[inline]
    fn eq(&self, other: &Quat) -> bool {
        self.w.to_bits() == other.w.to_bits()
            && self.x.to_bits() == other.x.to_bits()
            && self.y.to_bits() == other.y.to_bits()
            && self.z.to_bits() == other.z.to_bits()
    }
}

impl Eq for Quat {}

impl Hash for Quat {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.w.to_bits().hash(state);
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
        self.z.to_bits().hash(state);
    }
}
