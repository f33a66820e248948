use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops;

use bytemuck::{Pod, Zeroable};

use crate::DivideByZero;

macro_rules! vec_op_impl {
    ($trait: ident, $func: ident, $v: ident, $($e: ident),*) => {
        impl ops::$trait<$v> for $v {
            type Output = $v;

            #[inline]
            fn $func(self, rhs: $v) -> $v {
                $v { $( $e: self.$e.$func(rhs.$e), )* }
            }
        }
    }
}

macro_rules! vec_assign_op_impl {
    ($trait: ident, $func: ident, $v: ident, $($e: ident),*) => {
        impl ops::$trait<$v> for $v {
            #[inline]
            fn $func(&mut self, rhs: $v) {
                $( self.$e.$func(rhs.$e); )*
            }
        }
    }
}

macro_rules! scalar_op_impl {
    ($trait: ident, $func: ident, $v: ident, $t: ident, $($e: ident),*) => {

        impl ops::$trait<$t> for $v {
            type Output = $v;

            #[inline]
            fn $func(self, rhs: $t) -> $v {
                $v { $( $e: self.$e.$func(rhs), )* }
            }
        }

        impl ops::$trait<$v> for $t {
            type Output = $v;

            #[inline]
            fn $func(self, rhs: $v) -> $v {
                $v { $( $e: self.$func(rhs.$e), )* }
            }
        }
    }
}

macro_rules! scalar_assign_op_impl {
    ($trait: ident, $func: ident, $v: ident, $t: ident, $($e: ident),*) => {

        impl ops::$trait<$t> for $v {
            #[inline]
            fn $func(&mut self, rhs: $t) {
                $( self.$e.$func(rhs); )*
            }
        }
    }
}

macro_rules! vec_impl {
    ($v: ident, $t: ident, $n: expr, $($e: ident),*) => {

        #[derive(Debug, Default, Copy, Clone, Pod, Zeroable)]
        #[repr(C)]
        pub struct $v {
            $( pub $e : $t, )*
        }

        impl $v {
            #[inline]
            pub fn new($( $e: $t, )*) -> $v {
                $v { $( $e : $e, )* }
            }

            #[inline]
            pub fn from_scalar(a: $t) -> $v {
                $v { $( $e : a, )* }
            }

            #[inline]
            pub fn from_slice(a: &[$t; $n]) -> $v {
                bytemuck::cast(*a)
            }

            #[inline]
            pub fn to_slice(self) -> [$t; $n] {
                bytemuck::cast(self)
            }

            /// Overwrites every coordinate in place.
            #[inline]
            pub fn set(&mut self, $( $e: $t, )*) {
                $( self.$e = $e; )*
            }

            #[inline]
            pub fn clamp(a: $v, min: $v, max: $v) -> $v {
                $v { $( $e: a.$e.clamp(min.$e, max.$e),)* }
            }

            #[inline]
            pub fn min(a: $v, b: $v) -> $v {
                $v { $( $e: a.$e.min(b.$e),)* }
            }

            #[inline]
            pub fn max(a: $v, b: $v) -> $v {
                $v { $( $e: a.$e.max(b.$e),)* }
            }

            #[inline]
            pub fn dot(self, b: $v) -> $t {
                // Seed the fold with -0.0: adding -0.0 is the IEEE 754
                // identity llvm can drop, unlike +0.0 which would flip
                // the sign of negative zero.
                $( self.$e * b.$e + )* (-0.0)
            }

            #[inline]
            pub fn length2(self) -> $t {
                $v::dot(self, self)
            }

            #[inline]
            pub fn length(self) -> $t {
                $v::length2(self).sqrt()
            }

            #[inline]
            pub fn distance2(self, b: $v) -> $t {
                (b - self).length2()
            }

            #[inline]
            pub fn distance(self, b: $v) -> $t {
                $v::distance2(self, b).sqrt()
            }

            /// Rescales to unit length in place. Returns `false` without
            /// touching the coordinates when the length is zero; a vector
            /// whose squared length is already exactly 1 is left as-is.
            #[inline]
            pub fn normalize_mut(&mut self) -> bool {
                let l2 = self.length2();
                if l2 == 1.0 {
                    true
                } else if l2 == 0.0 {
                    false
                } else {
                    *self *= 1.0 / l2.sqrt();
                    true
                }
            }

            /// Cache form of [`normalize_mut`](Self::normalize_mut):
            /// writes into `out` and leaves `self` untouched. On a
            /// zero-length vector `out` receives the unnormalized
            /// coordinates and `false` is returned.
            #[inline]
            pub fn normalize_into(&self, out: &mut $v) -> bool {
                *out = *self;
                out.normalize_mut()
            }

            /// Checked scalar division; a zero divisor is an error, not
            /// an infinity.
            #[inline]
            pub fn try_div(self, scalar: $t) -> Result<$v, DivideByZero> {
                if scalar == 0.0 {
                    Err(DivideByZero)
                } else {
                    Ok(self * (1.0 / scalar))
                }
            }

            /// Cache form of [`try_div`](Self::try_div). `out` is only
            /// written on success.
            #[inline]
            pub fn try_div_into(&self, scalar: $t, out: &mut $v) -> Result<(), DivideByZero> {
                *out = self.try_div(scalar)?;
                Ok(())
            }

            #[inline]
            pub fn add_into(&self, b: $v, out: &mut $v) {
                *out = *self + b;
            }

            #[inline]
            pub fn sub_into(&self, b: $v, out: &mut $v) {
                *out = *self - b;
            }

            #[inline]
            pub fn mul_into(&self, b: $v, out: &mut $v) {
                *out = *self * b;
            }

            #[inline]
            pub fn scale_into(&self, scalar: $t, out: &mut $v) {
                *out = *self * scalar;
            }

            #[inline]
            pub fn negate_into(&self, out: &mut $v) {
                *out = -*self;
            }
        }

        impl ops::Neg for $v {
            type Output = $v;

            #[inline]
            fn neg(self) -> $v {
                $v { $( $e: self.$e.neg(), )* }
            }
        }

        // Coordinates compare and hash bit-for-bit: NaN equals an
        // identical NaN and -0.0 differs from 0.0, so Eq and Hash agree.
        impl PartialEq for $v {
            #[inline]
            fn eq(&self, other: &$v) -> bool {
                $( self.$e.to_bits() == other.$e.to_bits() && )* true
            }
        }

        impl Eq for $v {}

        impl Hash for $v {
            fn hash<H: Hasher>(&self, state: &mut H) {
                $( self.$e.to_bits().hash(state); )*
            }
        }

        impl fmt::Display for $v {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{}({})", stringify!($v),
                        [$(
                           format!("{:.prec$}", self.$e, prec = f.precision().unwrap_or(3)),
                        )*].join(", "))
            }
        }


        vec_op_impl!(Add, add, $v, $($e),*);
        vec_op_impl!(Sub, sub, $v, $($e),*);
        vec_op_impl!(Mul, mul, $v, $($e),*);

        vec_assign_op_impl!(AddAssign, add_assign, $v, $($e),*);
        vec_assign_op_impl!(SubAssign, sub_assign, $v, $($e),*);
        vec_assign_op_impl!(MulAssign, mul_assign, $v, $($e),*);

        scalar_op_impl!(Add, add, $v, $t, $($e),*);
        scalar_op_impl!(Sub, sub, $v, $t, $($e),*);
        scalar_op_impl!(Mul, mul, $v, $t, $($e),*);

        scalar_assign_op_impl!(AddAssign, add_assign, $v, $t, $($e),*);
        scalar_assign_op_impl!(SubAssign, sub_assign, $v, $t, $($e),*);
        scalar_assign_op_impl!(MulAssign, mul_assign, $v, $t, $($e),*);
    }
}


vec_impl!(Vec2, f32, 2, x, y);
vec_impl!(Vec3, f32, 3, x, y, z);

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };
    /// All-ones vector, the identity for componentwise multiplication.
    pub const ONE: Vec2 = Vec2 { x: 1.0, y: 1.0 };
    pub const UNIT_X: Vec2 = Vec2 { x: 1.0, y: 0.0 };
    pub const UNIT_Y: Vec2 = Vec2 { x: 0.0, y: 1.0 };
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };
    /// All-ones vector, the identity for componentwise multiplication.
    pub const ONE: Vec3 = Vec3 { x: 1.0, y: 1.0, z: 1.0 };
    pub const UNIT_X: Vec3 = Vec3 { x: 1.0, y: 0.0, z: 0.0 };
    pub const UNIT_Y: Vec3 = Vec3 { x: 0.0, y: 1.0, z: 0.0 };
    pub const UNIT_Z: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 1.0 };

    /// Right-handed cross product.
    #[inline]
    pub fn cross(self, b: Vec3) -> Vec3 {
        Vec3 {
            x: self.y * b.z - self.z * b.y,
            y: self.z * b.x - self.x * b.z,
            z: self.x * b.y - self.y * b.x,
        }
    }

    #[inline]
    pub fn cross_into(&self, b: Vec3, out: &mut Vec3) {
        *out = self.cross(b);
    }
}
