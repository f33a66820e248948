use crate::mat::Mat3;
use crate::quat::Quat;
use crate::vec::Vec3;

/// Scale, rotation and translation for a scene node, with a cached 3x3
/// matrix holding the combined scale-rotation.
///
/// The cache is refreshed only by an explicit call to
/// [`recompute`](Transform::recompute): mutating the scale or rotation
/// marks the transform stale, and [`matrix`](Transform::matrix) keeps
/// returning the previous value until the owner recomputes. Renderer
/// bindings read the 3x3 part and the translation separately; translation
/// changes never touch the cache.
#[derive(Debug, Clone, Copy)]
pub struct Transform {
    scale: Vec3,
    rotation: Quat,
    translation: Vec3,
    matrix: Mat3,
    stale: bool,
}

impl Default for Transform {
    /// Identity scale and rotation, zero translation. The cached matrix
    /// already matches, so the transform starts fresh.
    #[inline]
    fn default() -> Transform {
        Transform {
            scale: Vec3::ONE,
            rotation: Quat::IDENTITY,
            translation: Vec3::ZERO,
            matrix: Mat3::IDENTITY,
            stale: false,
        }
    }
}

impl Transform {
    #[inline]
    pub fn new() -> Transform {
        Transform::default()
    }

    /// Starts stale: the cache has not been computed from these
    /// components yet, so call [`recompute`](Self::recompute) before
    /// reading the matrix.
    #[inline]
    pub fn from_components(scale: Vec3, rotation: Quat, translation: Vec3) -> Transform {
        Transform {
            scale,
            rotation,
            translation,
            matrix: Mat3::IDENTITY,
            stale: true,
        }
    }

    #[inline]
    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    #[inline]
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    #[inline]
    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    #[inline]
    pub fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
        self.stale = true;
    }

    #[inline]
    pub fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
        self.stale = true;
    }

    /// Translation is exposed independently of the 3x3 part, so changing
    /// it never stales the cache.
    #[inline]
    pub fn set_translation(&mut self, translation: Vec3) {
        self.translation = translation;
    }

    #[inline]
    pub fn translate(&mut self, delta: Vec3) {
        self.translation += delta;
    }

    /// Whether the cached matrix predates the current scale/rotation.
    #[inline]
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Rebuilds the cached matrix from the current rotation and scale.
    ///
    /// A scale matrix is the identity with the axis scales down the
    /// diagonal, so composing it with the rotation reduces to scaling
    /// the rotation matrix one row per axis instead of running a full
    /// matrix product.
    pub fn recompute(&mut self) {
        self.rotation.fill_rotation_matrix(&mut self.matrix);
        for j in 0..3 {
            self.matrix.e[0][j] *= self.scale.x;
            self.matrix.e[1][j] *= self.scale.y;
            self.matrix.e[2][j] *= self.scale.z;
        }
        self.stale = false;
    }

    /// The cached scale-rotation matrix. Returned as-is even while
    /// stale; see [`is_stale`](Self::is_stale).
    #[inline]
    pub fn matrix(&self) -> Mat3 {
        self.matrix
    }
}

#[cfg(test)]
mod tests {
    use core::f32::consts::FRAC_PI_2;

    use approx::assert_relative_eq;

    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_vec3_eq(a: Vec3, b: Vec3) {
        assert_relative_eq!(a.x, b.x, epsilon = EPS);
        assert_relative_eq!(a.y, b.y, epsilon = EPS);
        assert_relative_eq!(a.z, b.z, epsilon = EPS);
    }

    #[test]
    fn default_is_fresh_identity() {
        let mut t = Transform::new();
        assert!(!t.is_stale());
        assert_eq!(t.scale(), Vec3::ONE);
        assert_eq!(t.rotation(), Quat::IDENTITY);
        assert_eq!(t.translation(), Vec3::ZERO);

        t.recompute();
        assert_eq!(t.matrix(), Mat3::IDENTITY);
    }

    #[test]
    fn mutating_scale_stales_without_touching_the_matrix() {
        let mut t = Transform::new();
        t.recompute();
        let before = t.matrix();

        t.set_scale(Vec3::new(5.0, 5.0, 5.0));
        assert!(t.is_stale());
        // Manual-refresh contract: the readable matrix is unchanged
        // until recompute.
        assert_eq!(t.matrix(), before);

        t.recompute();
        assert!(!t.is_stale());
        assert_eq!(t.matrix(), Mat3::scale_uniform(5.0));
    }

    #[test]
    fn mutating_rotation_stales() {
        let mut t = Transform::new();
        t.set_rotation(Quat::from_axis_angle(Vec3::UNIT_Z, FRAC_PI_2));
        assert!(t.is_stale());
        t.recompute();
        assert_vec3_eq(t.matrix() * Vec3::UNIT_X, Vec3::UNIT_Y);
    }

    #[test]
    fn translation_is_independent_of_the_cache() {
        let mut t = Transform::new();
        t.recompute();

        t.set_translation(Vec3::new(1.0, 2.0, 3.0));
        assert!(!t.is_stale());
        assert_eq!(t.translation(), Vec3::new(1.0, 2.0, 3.0));

        t.translate(Vec3::new(0.5, 0.0, -1.0));
        assert!(!t.is_stale());
        assert_eq!(t.translation(), Vec3::new(1.5, 2.0, 2.0));

        // The 3x3 part never absorbs the translation.
        assert_eq!(t.matrix(), Mat3::IDENTITY);
    }

    #[test]
    fn from_components_requires_an_explicit_recompute() {
        let mut t = Transform::from_components(
            Vec3::new(2.0, 1.0, 1.0),
            Quat::IDENTITY,
            Vec3::ZERO,
        );
        assert!(t.is_stale());

        t.recompute();
        assert!(!t.is_stale());
        assert_vec3_eq(t.matrix() * Vec3::ONE, Vec3::new(2.0, 1.0, 1.0));
    }

    #[test]
    fn scale_multiplies_one_row_per_axis() {
        let mut t = Transform::from_components(
            Vec3::new(2.0, 3.0, 4.0),
            Quat::from_axis_angle(Vec3::UNIT_Z, FRAC_PI_2),
            Vec3::ZERO,
        );
        t.recompute();

        // Row-scaled quarter turn about z.
        let m = t.matrix();
        assert_vec3_eq(m.row(crate::mat::Axis::X), Vec3::new(0.0, -2.0, 0.0));
        assert_vec3_eq(m.row(crate::mat::Axis::Y), Vec3::new(3.0, 0.0, 0.0));
        assert_vec3_eq(m.row(crate::mat::Axis::Z), Vec3::new(0.0, 0.0, 4.0));
        assert_vec3_eq(m * Vec3::UNIT_X, Vec3::new(0.0, 3.0, 0.0));
    }

    #[test]
    fn recompute_is_idempotent() {
        let mut t = Transform::from_components(
            Vec3::new(1.5, 1.5, 1.5),
            Quat::from_axis_angle(Vec3::UNIT_Y, FRAC_PI_2),
            Vec3::ZERO,
        );
        t.recompute();
        let first = t.matrix();
        t.recompute();
        assert_eq!(t.matrix(), first);
    }
}
