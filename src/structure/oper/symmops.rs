/* ************************************************************************ **
** This file is part of symcell, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::FracPos;

use std::fmt;

use symcell_array_types::{V3, M33, mat};

/// Things that can be acted on by an integer matrix in fractional space.
///
/// What "rotation" means is up to the implementor: a [`Cell`] transforms
/// its fractional positions, while a [`Lattice`] changes its basis.
///
/// [`Cell`]: struct.Cell.html
/// [`Lattice`]: struct.Lattice.html
pub trait Rotate {
    fn rotate(&mut self, m: &M33<i32>);
}

/// Things that can be translated by a fractional vector.
pub trait Shift {
    fn shift(&mut self, v: &V3);
}

/// A point operation in fractional coordinates.
///
/// Positions are row vectors, so this acts as `f ← f M`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointOp {
    /// Invariants:
    ///  - `abs(det(matrix)) == 1`
    matrix: M33<i32>,
}

impl PointOp {
    pub fn eye() -> Self
    { PointOp { matrix: M33::eye() } }

    pub fn inversion() -> Self
    { PointOp { matrix: -M33::eye() } }

    /// Construct from an integer matrix.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is not unimodular.
    pub fn new(matrix: &M33<i32>) -> Self
    {
        assert_eq!(matrix.det().abs(), 1, "not a unimodular matrix: {:?}", matrix);
        PointOp { matrix: *matrix }
    }

    #[inline]
    pub fn matrix(&self) -> &M33<i32>
    { &self.matrix }

    /// Either `1` or `-1`.
    pub fn det(&self) -> i32
    { self.matrix.det() }

    /// Flipped group operator.
    ///
    /// `a.then(b)` performs `a` followed by `b`. The flipped order is more
    /// aligned with this library's row-centric design.
    pub fn then(&self, other: &PointOp) -> PointOp
    { PointOp { matrix: &self.matrix * &other.matrix } }

    /// Conventional group operator.
    pub fn of(&self, other: &PointOp) -> PointOp
    { other.then(self) }

    pub fn act_on<T: Rotate + ?Sized>(&self, target: &mut T)
    { target.rotate(&self.matrix) }

    pub fn transform_fracs(&self, fracs: &[V3]) -> Vec<V3>
    {
        let m = self.matrix.map(f64::from);
        fracs.iter().map(|v| v * &m).collect()
    }
}

impl Default for PointOp {
    fn default() -> Self
    { Self::eye() }
}

impl fmt::Debug for PointOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { write!(f, "PointOp({:?})", self.matrix) }
}

impl<'a> From<&'a [[i32; 3]; 3]> for PointOp {
    fn from(m: &'a [[i32; 3]; 3]) -> Self
    { PointOp::new(&mat::from_array(*m)) }
}

/// A pure translation in fractional coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransOp {
    vector: V3,
}

impl TransOp {
    pub fn new(vector: V3) -> Self
    { TransOp { vector } }

    pub fn zero() -> Self
    { TransOp { vector: V3::zero() } }

    #[inline]
    pub fn vector(&self) -> &V3
    { &self.vector }

    /// Reduce the translation into the home cell.
    pub fn in_cell(&self, prec: f64) -> TransOp
    { TransOp { vector: FracPos(self.vector).in_cell(prec).0 } }

    /// Compare translations modulo lattice vectors.
    pub fn approx_eq(&self, other: &TransOp, prec: f64) -> bool
    { FracPos(self.vector).approx_eq_in_cell(&FracPos(other.vector), prec) }

    pub fn act_on<T: Shift + ?Sized>(&self, target: &mut T)
    { target.shift(&self.vector) }
}

impl From<FracPos> for TransOp {
    fn from(pos: FracPos) -> Self
    { TransOp { vector: pos.0 } }
}

/// A space group operation: a point operation followed by a translation.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpaceOp {
    pub rotation: PointOp,
    pub translation: TransOp,
}

impl SpaceOp {
    pub fn new(rotation: PointOp, translation: TransOp) -> Self
    { SpaceOp { rotation, translation } }

    pub fn eye() -> Self
    { Self::default() }

    /// Rotations must match exactly and translations modulo the cell.
    pub fn approx_eq(&self, other: &SpaceOp, prec: f64) -> bool
    { self.rotation == other.rotation && self.translation.approx_eq(&other.translation, prec) }

    pub fn act_on<T: Rotate + Shift + ?Sized>(&self, target: &mut T)
    {
        self.rotation.act_on(target);
        self.translation.act_on(target);
    }

    pub fn transform_fracs(&self, fracs: &[V3]) -> Vec<V3>
    {
        let mut out = self.rotation.transform_fracs(fracs);
        crate::util::translate_mut_n3_3(&mut out, &self.translation.vector);
        out
    }
}

/// Any of the operation kinds, behind one `apply`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SymmOp {
    Point(PointOp),
    Trans(TransOp),
    Space(SpaceOp),
}

impl SymmOp {
    pub fn apply<T: Rotate + Shift + ?Sized>(&self, target: &mut T)
    {
        match *self {
            SymmOp::Point(ref op) => op.act_on(target),
            SymmOp::Trans(ref op) => op.act_on(target),
            SymmOp::Space(ref op) => op.act_on(target),
        }
    }
}

impl From<PointOp> for SymmOp {
    fn from(op: PointOp) -> Self
    { SymmOp::Point(op) }
}

impl From<TransOp> for SymmOp {
    fn from(op: TransOp) -> Self
    { SymmOp::Trans(op) }
}

impl From<SpaceOp> for SymmOp {
    fn from(op: SpaceOp) -> Self
    { SymmOp::Space(op) }
}
