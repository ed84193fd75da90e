/* ************************************************************************ **
** This file is part of symcell, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::ops::{Add, Sub, Neg, Mul, Div, AddAssign, SubAssign, MulAssign, DivAssign};
use crate::traits::{Ring, Field};
use crate::types::{V3, M33};

// ---------------------------------------------------------------------------
// vector-vector ops

// NOTE: Operator impls are deliberately between same-typed vectors,
//       rather than e.g. V3<T> and V3<U> where T: Add<U>.
macro_rules! impl_v3_binop {
    ($Trait:ident, $method:ident, $op:tt) => {
        impl<X: Ring> $Trait<V3<X>> for V3<X> {
            type Output = V3<X>;

            #[inline]
            fn $method(self, other: V3<X>) -> V3<X>
            { V3([self.0[0] $op other.0[0], self.0[1] $op other.0[1], self.0[2] $op other.0[2]]) }
        }

        impl<'b, X: Ring> $Trait<&'b V3<X>> for V3<X> {
            type Output = V3<X>;

            #[inline(always)]
            fn $method(self, other: &'b V3<X>) -> V3<X>
            { $Trait::$method(self, *other) }
        }

        impl<'a, X: Ring> $Trait<V3<X>> for &'a V3<X> {
            type Output = V3<X>;

            #[inline(always)]
            fn $method(self, other: V3<X>) -> V3<X>
            { $Trait::$method(*self, other) }
        }

        impl<'a, 'b, X: Ring> $Trait<&'b V3<X>> for &'a V3<X> {
            type Output = V3<X>;

            #[inline(always)]
            fn $method(self, other: &'b V3<X>) -> V3<X>
            { $Trait::$method(*self, *other) }
        }
    };
}

impl_v3_binop!(Add, add, +);
impl_v3_binop!(Sub, sub, -);

impl<X: Ring> Neg for V3<X> {
    type Output = V3<X>;

    #[inline]
    fn neg(self) -> V3<X>
    { self.map(|x| -x) }
}

impl<'a, X: Ring> Neg for &'a V3<X> {
    type Output = V3<X>;

    #[inline(always)]
    fn neg(self) -> V3<X>
    { -*self }
}

impl<X: Ring> Neg for M33<X> {
    type Output = M33<X>;

    #[inline]
    fn neg(self) -> M33<X>
    { self.map(|x| -x) }
}

// ---------------------------------------------------------------------------
// vector-scalar ops

impl<X: Ring> Mul<X> for V3<X> {
    type Output = V3<X>;

    #[inline]
    fn mul(self, scalar: X) -> V3<X>
    { self.map(|x| x * scalar) }
}

impl<'a, X: Ring> Mul<X> for &'a V3<X> {
    type Output = V3<X>;

    #[inline(always)]
    fn mul(self, scalar: X) -> V3<X>
    { *self * scalar }
}

impl<X: Field> Div<X> for V3<X> {
    type Output = V3<X>;

    #[inline]
    fn div(self, scalar: X) -> V3<X>
    { self.map(|x| x / scalar) }
}

impl<'a, X: Field> Div<X> for &'a V3<X> {
    type Output = V3<X>;

    #[inline(always)]
    fn div(self, scalar: X) -> V3<X>
    { *self / scalar }
}

// The orphan rules prevent a generic `impl<X> Mul<V3<X>> for X`.
macro_rules! impl_scalar_lhs_mul {
    ($($T:ty)*) => {$(
        impl Mul<V3<$T>> for $T {
            type Output = V3<$T>;

            #[inline(always)]
            fn mul(self, vector: V3<$T>) -> V3<$T>
            { vector * self }
        }

        impl<'a> Mul<&'a V3<$T>> for $T {
            type Output = V3<$T>;

            #[inline(always)]
            fn mul(self, vector: &'a V3<$T>) -> V3<$T>
            { vector * self }
        }
    )*};
}

impl_scalar_lhs_mul!{ f64 i32 i64 }

// ---------------------------------------------------------------------------
// assign ops

// vector += vector;
impl<X, B> AddAssign<B> for V3<X> where for<'a> &'a Self: Add<B, Output=Self> {
    #[inline(always)]
    fn add_assign(&mut self, rhs: B)
    { *self = &*self + rhs; }
}

// vector -= vector;
impl<X, B> SubAssign<B> for V3<X> where for<'a> &'a Self: Sub<B, Output=Self> {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: B)
    { *self = &*self - rhs; }
}

// vector *= scalar;
// vector *= matrix;   (row vectors, so the matrix goes on the right)
impl<X, B> MulAssign<B> for V3<X> where for<'a> &'a Self: Mul<B, Output=Self> {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: B)
    { *self = &*self * rhs; }
}

// vector /= scalar;
impl<X, B> DivAssign<B> for V3<X> where for<'a> &'a Self: Div<B, Output=Self> {
    #[inline(always)]
    fn div_assign(&mut self, rhs: B)
    { *self = &*self / rhs; }
}

// ---------------------------------------------------------------------------
// vector-matrix ops

// row vector * matrix
impl<'m, X: Ring> Mul<&'m M33<X>> for V3<X> {
    type Output = V3<X>;

    #[inline]
    fn mul(self, matrix: &'m M33<X>) -> V3<X>
    { V3::from_fn(|c| self.0[0] * matrix.0[0].0[c] + self.0[1] * matrix.0[1].0[c] + self.0[2] * matrix.0[2].0[c]) }
}

impl<'v, 'm, X: Ring> Mul<&'m M33<X>> for &'v V3<X> {
    type Output = V3<X>;

    #[inline(always)]
    fn mul(self, matrix: &'m M33<X>) -> V3<X>
    { *self * matrix }
}

// matrix * column vector
impl<'m, 'v, X: Ring> Mul<&'v V3<X>> for &'m M33<X> {
    type Output = V3<X>;

    #[inline]
    fn mul(self, vector: &'v V3<X>) -> V3<X>
    { V3::from_fn(|r| V3::dot(&self.0[r], vector)) }
}

// matrix * matrix
impl<'a, 'b, X: Ring> Mul<&'b M33<X>> for &'a M33<X> {
    type Output = M33<X>;

    #[inline]
    fn mul(self, other: &'b M33<X>) -> M33<X>
    { M33::from_fn(|r, c| (0..3).fold(X::zero(), |acc, k| acc + self.0[r].0[k] * other.0[k].0[c])) }
}
