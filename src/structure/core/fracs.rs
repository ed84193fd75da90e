/* ************************************************************************ **
** This file is part of symcell, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::util::fold_into_cell;

use std::ops::{Add, Sub};

use symcell_array_types::V3;
use symcell_assert_close::{CheckClose, Tolerances};

/// A position in fractional coordinates, understood modulo the unit cell.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct FracPos(pub V3);

impl FracPos {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self
    { FracPos(V3([x, y, z])) }

    #[inline]
    pub fn vector(&self) -> &V3
    { &self.0 }

    /// Canonical image of the position in the home cell.
    ///
    /// Each component is folded into `[0, 1)`, except that a component
    /// lying within `prec` below an integer is snapped to zero when it
    /// approaches from the negative side, and left just below one otherwise.
    pub fn in_cell(&self, prec: f64) -> FracPos
    { FracPos(self.0.map(|x| fold_into_cell(x, prec))) }

    /// Componentwise comparison without any wrapping.
    pub fn approx_eq(&self, other: &FracPos, prec: f64) -> bool
    { self.0.is_close(&other.0, Tolerances::abs_or_rel(prec)) }

    /// Compare the canonical images of two positions.
    pub fn approx_eq_in_cell(&self, other: &FracPos, prec: f64) -> bool
    { self.in_cell(prec).approx_eq(&other.in_cell(prec), prec) }
}

impl From<V3> for FracPos {
    #[inline]
    fn from(v: V3) -> Self
    { FracPos(v) }
}

impl From<[f64; 3]> for FracPos {
    #[inline]
    fn from(v: [f64; 3]) -> Self
    { FracPos(V3(v)) }
}

impl Add<V3> for FracPos {
    type Output = FracPos;

    fn add(self, rhs: V3) -> FracPos
    { FracPos(self.0 + rhs) }
}

impl Sub<FracPos> for FracPos {
    type Output = FracPos;

    fn sub(self, rhs: FracPos) -> FracPos
    { FracPos(self.0 - rhs.0) }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;

    #[test]
    fn near_negative_integer_snaps_to_zero() {
        let pos = FracPos::new(0.0, 0.0, -1.000000001);
        assert_eq!(pos.in_cell(1e-5), FracPos::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn wrapping() {
        let pos = FracPos::new(1.5, -0.25, 2.0);
        assert_close!(pos.in_cell(1e-5).0, V3([0.5, 0.75, 0.0]));

        // equal only after wrapping
        let a = FracPos::new(0.1, 0.2, 0.3);
        let b = FracPos::new(1.1, -0.8, 0.3);
        assert!(!a.approx_eq(&b, 1e-5));
        assert!(a.approx_eq_in_cell(&b, 1e-5));
        assert!((b - a).approx_eq(&FracPos::new(1.0, -1.0, 0.0), 1e-5));
        assert_eq!(a + V3([1.0, 0.0, 0.0]), FracPos::new(1.1, 0.2, 0.3));
    }

    #[test]
    fn random_positions_land_in_cell() {
        let prec = 1e-5;
        for _ in 0..1000 {
            let v = V3::from_fn(|_| (::rand::random::<f64>() - 0.5) * 20.0);
            let folded = FracPos(v).in_cell(prec);
            for k in 0..3 {
                let x = folded.0[k];
                assert!(0.0 <= x && x < 1.0, "{:?} -> {:?}", v, folded);
                // differs from the input by an integer, up to snapping
                let diff = x - v[k];
                assert_close!(abs=2.0 * prec, diff, diff.round());
            }
        }
    }
}
