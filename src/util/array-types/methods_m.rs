/* ************************************************************************ **
** This file is part of symcell, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Matrix methods.
//!
//! Matrices are conceptually containers of row vectors. This formalism is
//! most useful when most vectors are row vectors, in which case most
//! matrix-vector multiplication has the matrix on the right.

use crate::traits::{Ring, Field};
use crate::types::{V3, M3, M33};

use symcell_assert_close::{CheckClose, CheckCloseError, Tolerances};

/// Construct a matrix from a 2D array of rows.
#[inline(always)]
pub fn from_array<X>(arr: [[X; 3]; 3]) -> M33<X>
{
    let [a, b, c] = arr;
    M3([V3(a), V3(b), V3(c)])
}

/// Construct an identity matrix.
#[inline(always)]
pub fn eye<X: Ring>() -> M33<X>
{ M33::eye() }

/// Matrix inverse.
///
/// The output is full of infinities and NaNs if the matrix is singular;
/// callers are expected to have checked the determinant.
#[inline]
pub fn inv<X: Field>(m: &M33<X>) -> M33<X>
{
    let rec_det = X::one() / m.det();
    let cof = |r0: usize, r1: usize, c0: usize, c1: usize| {
        m[r0][c0] * m[r1][c1] - m[r0][c1] * m[r1][c0]
    };
    // transpose of the cofactor matrix
    let adj = from_array([
        [cof(1, 2, 1, 2), cof(2, 0, 1, 2), cof(0, 1, 1, 2)],
        [cof(1, 2, 2, 0), cof(2, 0, 2, 0), cof(0, 1, 2, 0)],
        [cof(1, 2, 0, 1), cof(2, 0, 0, 1), cof(0, 1, 0, 1)],
    ]);
    adj.map(|x| x * rec_det)
}

impl<X> M33<X> {
    /// Construct a matrix from a function on indices.
    #[inline(always)]
    pub fn from_fn<F>(mut f: F) -> Self
    where F: FnMut(usize, usize) -> X,
    { M3(V3::from_fn(|r| V3::from_fn(|c| f(r, c))).0) }

    /// Map each scalar element of a matrix.
    #[inline]
    pub fn map<B, F>(self, mut f: F) -> M33<B>
    where F: FnMut(X) -> B,
    {
        let M3([a, b, c]) = self;
        M3([a.map(&mut f), b.map(&mut f), c.map(&mut f)])
    }

    /// Cast into a plain `[[X; 3]; 3]`.
    #[inline]
    pub fn into_array(self) -> [[X; 3]; 3]
    {
        let M3([a, b, c]) = self;
        [a.0, b.0, c.0]
    }
}

impl<X: Ring> M33<X> {
    /// Construct the identity matrix.
    #[inline]
    pub fn eye() -> Self
    { Self::from_fn(|r, c| if r == c { X::one() } else { X::zero() }) }

    /// Matrix transpose.
    #[inline]
    pub fn t(&self) -> Self
    { Self::from_fn(|r, c| self[c][r]) }

    /// Matrix determinant.
    ///
    /// Computed by the rule of Sarrus, so it is exact for integer matrices.
    #[inline]
    pub fn det(&self) -> X
    {
        let m = self;
        m[0][0] * m[1][1] * m[2][2]
            + m[0][1] * m[1][2] * m[2][0]
            + m[0][2] * m[1][0] * m[2][1]
            - m[0][2] * m[1][1] * m[2][0]
            - m[0][1] * m[1][0] * m[2][2]
            - m[0][0] * m[1][2] * m[2][1]
    }
}

impl CheckClose for M33<f64> {
    type Scalar = f64;

    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError<f64>>
    { self.0.check_close(&other.0, tol) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_inverse() {
        // matrix whose inverse should be able to be computed exactly
        // by any reasonable matrix inversion algorithm working on f64s
        let matrix = from_array([
            [2.0, 2.0, 0.0],
            [0.0, 4.0, 0.0],
            [0.0, 0.0, 2.0],
        ]);
        let exact_inverse = from_array([
            [0.5, -0.25, 0.0],
            [0.0,  0.25, 0.0],
            [0.0,   0.0, 0.5],
        ]);
        assert_eq!(inv(&matrix), exact_inverse);
        assert_eq!(&matrix * &inv(&matrix), M33::eye());
    }

    #[test]
    fn determinant_and_transpose() {
        let m = from_array([
            [1, 1, 0],
            [0, 1, 1],
            [1, 0, 1],
        ]);
        assert_eq!(m.det(), 2);
        assert_eq!(m.t().det(), 2);
        assert_eq!(m.t(), from_array([
            [1, 0, 1],
            [1, 1, 0],
            [0, 1, 1],
        ]));
        assert_eq!(M33::<i32>::eye().det(), 1);
        assert_eq!(m.map(f64::from).det(), 2.0);
    }
}
