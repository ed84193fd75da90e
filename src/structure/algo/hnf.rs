/* ************************************************************************ **
** This file is part of symcell, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Enumeration of supercell matrices in Hermite normal form.

use crate::Lattice;
use crate::errors::StructureError;

use symcell_array_types::{M33, mat};
use symcell_numtheory::divisors;

/// A lower-triangular integer matrix `[[a, 0, 0], [b, c, 0], [d, e, f]]`.
///
/// Rows are coefficients of the supercell vectors in terms of the
/// primitive lattice vectors.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hnf {
    matrix: M33<i32>,
}

impl Hnf {
    fn from_entries([a, b, c, d, e, f]: [i32; 6]) -> Self
    { Hnf { matrix: mat::from_array([[a, 0, 0], [b, c, 0], [d, e, f]]) } }

    /// The six free entries `[a, b, c, d, e, f]`, in row-major order.
    pub fn entries(&self) -> [i32; 6]
    {
        let m = &self.matrix;
        [m[0][0], m[1][0], m[1][1], m[2][0], m[2][1], m[2][2]]
    }

    #[inline]
    pub fn matrix(&self) -> &M33<i32>
    { &self.matrix }

    /// The volume multiplier, `a c f`.
    pub fn det(&self) -> i32
    { self.matrix.det() }

    /// The supercell lattice `H L`.
    pub fn supercell_lattice(&self, lattice: &Lattice) -> Lattice
    {
        // H is lower triangular with a positive diagonal, so it cannot
        // shrink the volume below that of the input
        Lattice::new_unchecked(&(&self.matrix.map(f64::from) * lattice.matrix()))
    }
}

/// Enumerate lower-triangular integer matrices for a supercell of `volume`
/// times the primitive cell.
///
/// For each ordered pair of divisors `(a, c)` of `volume`, the last diagonal
/// element is `f = volume / a / c` (integer division), and pairs with `f < 1`
/// are skipped. The off-diagonal entries then range over `0 <= b < c` and
/// `0 <= d, e < f`.
///
/// Because the division truncates, a pair whose product does not divide
/// `volume` still contributes matrices with determinant below `volume`.
/// This is how `volume = 6` yields 93 matrices rather than 91.
pub fn enumerate_hnfs(volume: i32) -> Result<Vec<Hnf>, StructureError>
{
    if volume < 1 {
        return Err(StructureError::InvalidVolumeMultiplier { volume });
    }

    let divs = divisors(volume);
    let mut out = vec![];
    for &a in &divs {
        for &c in &divs {
            let f = volume / a / c;
            if f < 1 {
                continue;
            }
            for (b, d, e) in iproduct!(0..c, 0..f, 0..f) {
                out.push(Hnf::from_entries([a, b, c, d, e, f]));
            }
        }
    }
    debug!("Enumerated {} HNF matrices of volume {}", out.len(), volume);
    Ok(out)
}
