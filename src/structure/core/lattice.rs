/* ************************************************************************ **
** This file is part of symcell, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::errors::StructureError;
use crate::Rotate;

use std::convert::TryFrom;
use std::ops::{Mul, Div};

use symcell_array_types::{V3, M33, M3, mat, inv};
use symcell_assert_close::{CheckClose, Tolerances, CheckCloseError};

/// Lattices whose determinant is smaller than this in magnitude are rejected.
pub const DEGENERATE_DET_TOL: f64 = 1e-5;

/// Defines a vector basis for periodic boundary conditions in three dimensions.
///
/// The rows of the matrix are the lattice vectors. A lattice is a linear
/// transformation from fractional data to cartesian data, and carries a
/// precomputed inverse for going the other way.
///
/// Every `Lattice` has a determinant of magnitude at least
/// [`DEGENERATE_DET_TOL`]; this is checked on construction.
///
/// [`DEGENERATE_DET_TOL`]: constant.DEGENERATE_DET_TOL.html
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "M33", into = "M33"))]
pub struct Lattice {
    matrix: M33,
    inverse: M33,
}

// Manual impl that doesn't compare the inverse.
impl PartialEq<Lattice> for Lattice {
    fn eq(&self, other: &Lattice) -> bool {
        // deconstruct to get errors when new fields are added
        let Lattice { ref matrix, inverse: _ } = *self;
        matrix == &other.matrix
    }
}

impl Lattice {
    /// Create a lattice from a matrix where the rows are lattice vectors.
    pub fn new(matrix: &M33) -> Result<Self, StructureError> {
        let det = matrix.det();
        // (written this way so that NaN is rejected too)
        if !(det.abs() >= DEGENERATE_DET_TOL) {
            return Err(StructureError::DegenerateLattice { det });
        }
        Ok(Self::new_unchecked(matrix))
    }

    /// Construction for matrices already known to be well-conditioned,
    /// such as unimodular or HNF multiples of an existing lattice.
    #[inline]
    pub(crate) fn new_unchecked(matrix: &M33) -> Self {
        let inverse = inv(matrix);
        Lattice { matrix: *matrix, inverse }
    }

    #[inline(always)]
    pub fn from_vectors(vectors: &[V3; 3]) -> Result<Self, StructureError> {
        Self::new(&M3(*vectors))
    }

    /// Create a lattice from nine values in row-major order.
    pub fn from_flat(values: &[f64]) -> Result<Self, StructureError> {
        if values.len() != 9 {
            return Err(StructureError::DimensionMismatch {
                what: "lattice components",
                expected: 9,
                actual: values.len(),
            });
        }
        Self::new(&M33::from_fn(|r, c| values[3 * r + c]))
    }

    /// Matrix where lattice vectors are rows.
    #[inline]
    pub fn matrix(&self) -> &M33
    { &self.matrix }

    /// Get the (precomputed) inverse of the matrix where lattice vectors are rows.
    #[inline]
    pub fn inverse_matrix(&self) -> &M33
    { &self.inverse }

    #[inline]
    pub fn vectors(&self) -> &[V3; 3]
    { &self.matrix.0 }

    /// Signed determinant. Positive for a right-handed basis.
    pub fn determinant(&self) -> f64
    { self.matrix.det() }

    /// Get the (positive) volume of the lattice cell.
    pub fn volume(&self) -> f64
    { self.determinant().abs() }

    pub fn norms(&self) -> [f64; 3]
    { self.matrix.0.map(|v| v.norm()) }

    /// The matrix with lattice vectors as columns.
    pub fn transpose(&self) -> M33
    { self.matrix.t() }

    /// Inner products of each pair of lattice vectors, `L Lᵀ`.
    ///
    /// This is invariant under cartesian rotations, so it is the quantity
    /// compared when asking whether two bases describe the same shape.
    pub fn gram(&self) -> M33
    { &self.matrix * &self.matrix.t() }

    /// Test if two lattices have the same shape, by comparing their
    /// Gram matrices elementwise with the absolute-or-relative rule.
    pub fn approx_eq(&self, other: &Lattice, tol: f64) -> bool
    { self.gram().is_close(&other.gram(), Tolerances::abs_or_rel(tol)) }

    /// Take an integer linear combination of the lattice vectors.
    ///
    /// Each row of `coeffs` holds the coefficients of one output vector.
    pub fn linear_combination(&self, coeffs: &M33<i32>) -> Result<Lattice, StructureError>
    { Lattice::new(&(&coeffs.map(f64::from) * &self.matrix)) }
}

/// Helper constructors
impl Lattice {
    /// The identity lattice.
    #[inline]
    pub fn eye() -> Self { Self::cubic(1.0) }

    /// A cubic lattice ((a, a, a), (90, 90, 90))
    ///
    /// # Panics
    ///
    /// Panics if the result would be degenerate.
    #[inline]
    pub fn cubic(a: f64) -> Self { Self::orthorhombic(a, a, a) }

    /// An orthorhombic lattice ((a, b, c), (90, 90, 90))
    ///
    /// # Panics
    ///
    /// Panics if the result would be degenerate.
    pub fn orthorhombic(a: f64, b: f64, c: f64) -> Self
    {
        assert!((a * b * c).abs() >= DEGENERATE_DET_TOL, "degenerate orthorhombic lattice");
        Self::new_unchecked(&mat::from_array([[a, 0., 0.], [0., b, 0.], [0., 0., c]]))
    }

    /// Generate a random lattice.
    ///
    /// Elements are pulled from a uniform distribution of [-x, x],
    /// retrying until the result is not degenerate.
    #[cfg(test)]
    pub(crate) fn random_uniform(max: f64) -> Self {
        loop {
            let values: Vec<f64> = {
                (0..9)
                    .map(|_| (::rand::random::<f64>() - 0.5) * 2.0 * max)
                    .collect()
            };
            if let Ok(lattice) = Lattice::from_flat(&values) {
                return lattice;
            }
        }
    }
}

/// Defaults to the identity matrix.
impl Default for Lattice {
    #[inline]
    fn default() -> Lattice { Lattice::eye() }
}

/// Rotation in the sense of a change of basis: `L ← M L`.
///
/// `m` is expected to be unimodular, which preserves the volume.
impl Rotate for Lattice {
    fn rotate(&mut self, m: &M33<i32>) {
        let matrix = &m.map(f64::from) * &self.matrix;
        *self = Lattice::new_unchecked(&matrix);
    }
}

impl TryFrom<M33> for Lattice {
    type Error = StructureError;

    fn try_from(m: M33) -> Result<Self, Self::Error>
    { Lattice::new(&m) }
}

impl<'a> TryFrom<&'a [[f64; 3]; 3]> for Lattice {
    type Error = StructureError;

    fn try_from(m: &'a [[f64; 3]; 3]) -> Result<Self, Self::Error>
    { Lattice::new(&mat::from_array(*m)) }
}

impl From<Lattice> for M33 {
    fn from(lattice: Lattice) -> M33
    { lattice.matrix }
}

// fractional to cartesian
impl<'a, 'b> Mul<&'b Lattice> for &'a V3 {
    type Output = V3;

    fn mul(self, other: &'b Lattice) -> V3 {
        self * other.matrix()
    }
}

impl<'b> Mul<&'b Lattice> for V3 {
    type Output = V3;

    fn mul(self, other: &'b Lattice) -> V3 {
        self * other.matrix()
    }
}

// cartesian to fractional
impl<'a, 'b> Div<&'b Lattice> for &'a V3 {
    type Output = V3;

    fn div(self, other: &'b Lattice) -> V3 {
        self * other.inverse_matrix()
    }
}

impl<'b> Div<&'b Lattice> for V3 {
    type Output = V3;

    fn div(self, other: &'b Lattice) -> V3 {
        self * other.inverse_matrix()
    }
}

impl CheckClose for Lattice {
    type Scalar = f64;

    fn check_close(&self, other: &Lattice, tol: Tolerances) -> Result<(), CheckCloseError> {
        self.matrix().check_close(other.matrix(), tol)
    }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use std::convert::TryFrom;

    #[test]
    fn get_inverse() {
        let matrix = mat::from_array([
            [2.0, 2.0, 0.0],
            [0.0, 4.0, 0.0],
            [0.0, 0.0, 2.0],
        ]);
        let exact_inverse = mat::from_array([
            [0.5, -0.25, 0.0],
            [0.0,  0.25, 0.0],
            [0.0,   0.0, 0.5],
        ]);

        let lattice = Lattice::new(&matrix).unwrap();
        assert_eq!(&matrix, lattice.matrix());
        assert_eq!(&exact_inverse, lattice.inverse_matrix());
        assert_eq!(lattice.determinant(), 16.0);
        assert_ne!(&Lattice::eye(), &lattice);
    }

    #[test]
    fn degenerate() {
        let flat = Lattice::from_flat(&[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0]);
        match flat {
            Err(StructureError::DegenerateLattice { det }) => assert_eq!(det, 0.0),
            other => panic!("unexpected: {:?}", other),
        }

        let tiny = Lattice::try_from(&[[1e-2, 0.0, 0.0], [0.0, 1e-2, 0.0], [0.0, 0.0, 1e-2]]);
        assert!(tiny.is_err());

        match Lattice::from_flat(&[1.0; 8]) {
            Err(StructureError::DimensionMismatch { expected: 9, actual: 8, .. }) => {},
            other => panic!("unexpected: {:?}", other),
        }
    }

    // make sure the library correctly chooses whether to use the
    // regular matrix or the inverse matrix
    #[test]
    fn multiplication_order() {
        // a matrix not equal to its transpose
        let lattice = Lattice::try_from(&[
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
            [1.0, 0.0, 0.0],
        ]).unwrap();

        let input = V3([1.0, 0.0, 0.0]);
        assert_eq!(input * &lattice, V3([0.0, 1.0, 0.0]));
        assert_eq!(input / &lattice, V3([0.0, 0.0, 1.0]));
    }

    #[test]
    fn round_trip_fracs() {
        for _ in 0..20 {
            let lattice = Lattice::random_uniform(5.0);
            if lattice.volume() < 1.0 {
                continue; // poorly conditioned
            }
            let frac = V3([0.25, -0.5, 0.75]);
            let cart = frac * &lattice;
            assert_close!(abs=1e-7, (cart / &lattice).0, frac.0);
        }
    }

    #[test]
    fn gram_and_rotation() {
        let lattice = Lattice::try_from(&[
            [2.0, 0.0, 0.0],
            [1.0, 1.732050, 0.0],
            [0.0, 0.0, 16.0],
        ]).unwrap();
        let gram = lattice.gram();
        assert_close!(gram[0][0], 4.0);
        assert_close!(gram[0][1], 2.0);
        assert_close!(gram[2][2], 256.0);
        assert_eq!(lattice.transpose()[0], V3([2.0, 1.0, 0.0]));

        // a sixfold rotation of the triangular lattice, as an integer change of basis
        let mut rotated = lattice.clone();
        rotated.rotate(&mat::from_array([[0, 1, 0], [-1, 1, 0], [0, 0, 1]]));
        assert_ne!(rotated, lattice);
        assert!(rotated.approx_eq(&lattice, 1e-5));
        assert_close!(rotated.volume(), lattice.volume());

        // a shear is not a symmetry
        let mut sheared = lattice.clone();
        sheared.rotate(&mat::from_array([[1, 0, 0], [0, 1, 0], [1, 0, 1]]));
        assert!(!sheared.approx_eq(&lattice, 1e-5));
    }

    #[test]
    fn combinations() {
        let lattice = Lattice::orthorhombic(1.0, 2.0, 3.0);
        let doubled = lattice.linear_combination(&mat::from_array([[1, 1, 0], [0, 1, 0], [0, 0, 2]])).unwrap();
        assert_eq!(doubled.vectors()[0], V3([1.0, 2.0, 0.0]));
        assert_close!(doubled.volume(), 12.0);
        assert!(lattice.linear_combination(&mat::from_array([[1, 0, 0], [1, 0, 0], [0, 0, 1]])).is_err());
        assert_close!(lattice.norms(), [1.0, 2.0, 3.0]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_validates() {
        let lattice = Lattice::cubic(2.5);
        let json = serde_json::to_string(&lattice).unwrap();
        assert_eq!(serde_json::from_str::<Lattice>(&json).unwrap(), lattice);
        assert!(serde_json::from_str::<Lattice>("[[0,0,0],[0,1,0],[0,0,1]]").is_err());
    }
}
