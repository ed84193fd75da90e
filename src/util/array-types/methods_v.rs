/* ************************************************************************ **
** This file is part of symcell, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::traits::Ring;
use crate::types::V3;

use symcell_assert_close::{CheckClose, CheckCloseError, Tolerances};

impl<X> V3<X> {
    /// Construct a vector from a function on indices.
    #[inline(always)]
    pub fn from_fn<F>(mut f: F) -> Self
    where F: FnMut(usize) -> X,
    { V3([f(0), f(1), f(2)]) }

    /// Apply a function to each element.
    #[inline]
    pub fn map<B, F>(self, mut f: F) -> V3<B>
    where F: FnMut(X) -> B,
    {
        let V3([a, b, c]) = self;
        V3([f(a), f(b), f(c)])
    }
}

impl<X: Ring> V3<X> {
    /// Get a zero vector.
    #[inline(always)]
    pub fn zero() -> Self
    { V3([X::zero(); 3]) }

    /// Get the inner product of two vectors.
    ///
    /// It is recommended you write this as `V3::dot(a, b)`, rather than `a.dot(b)`.
    #[inline]
    pub fn dot(&self, other: &Self) -> X
    { self.0[0] * other.0[0] + self.0[1] * other.0[1] + self.0[2] * other.0[2] }

    /// Get the vector's squared magnitude.
    #[inline(always)]
    pub fn sqnorm(&self) -> X
    { self.dot(self) }

    /// Cross-product.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        V3([
            self[1] * other[2] - self[2] * other[1],
            self[2] * other[0] - self[0] * other[2],
            self[0] * other[1] - self[1] * other[0],
        ])
    }
}

impl V3<f64> {
    /// Get the vector's magnitude.
    #[inline(always)]
    pub fn norm(&self) -> f64
    { self.sqnorm().sqrt() }
}

/// Inner product of vectors.
#[inline(always)]
pub fn dot<X: Ring>(a: &V3<X>, b: &V3<X>) -> X
{ a.dot(b) }

impl CheckClose for V3<f64> {
    type Scalar = f64;

    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError<f64>>
    { self.0.check_close(&other.0, tol) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn products() {
        let a = V3([1.0, 0.0, 0.0]);
        let b = V3([0.0, 1.0, 0.0]);
        assert_eq!(a.cross(&b), V3([0.0, 0.0, 1.0]));
        assert_eq!(V3::dot(&a, &b), 0.0);
        assert_eq!(V3([3.0, 4.0, 0.0]).norm(), 5.0);
        assert_eq!(V3([1, -2, 2]).sqnorm(), 9);
    }

    #[test]
    fn close_vectors() {
        let tol = Tolerances::abs_or_rel(1e-5);
        assert!(V3([1.0, 2.0, 3.0]).is_close(&V3([1.0 + 1e-7, 2.0, 3.0 - 1e-7]), tol));
        assert!(!V3([1.0, 2.0, 3.0]).is_close(&V3([1.0, 2.1, 3.0]), tol));
    }
}
