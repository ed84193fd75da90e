/* ************************************************************************ **
** This file is part of symcell, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::{Cell, PointOp, TransOp, SpaceOp};
use crate::algo::point_group::lattice_point_group;

/// Find all space group operations of a cell.
///
/// Candidate rotations come from the point group of the cell's lattice.
/// For each rotation, the candidate translations are those carrying some
/// atom of the pivot species (the rarest one) onto the first atom of that
/// species. A candidate is kept if the transformed cell equals the input cell.
///
/// Output is grouped by rotation in catalog order, then by pivot atom.
/// It always begins with the identity and a zero translation.
pub fn space_group<S: Ord + Clone>(cell: &Cell<S>, prec: f64) -> Vec<SpaceOp>
{
    let point_ops = lattice_point_group(cell.lattice(), prec);
    space_group_with_point_ops(cell, &point_ops, prec)
}

/// `space_group`, for a precomputed set of candidate rotations.
pub fn space_group_with_point_ops<S: Ord + Clone>(
    cell: &Cell<S>,
    point_ops: &[PointOp],
    prec: f64,
) -> Vec<SpaceOp>
{
    let pivot = match cell.pivot_species() {
        Some(species) => species.clone(),
        None => {
            debug!("Cell has no atoms; every point operation is a symmetry");
            return point_ops.iter().map(|&r| SpaceOp::new(r, TransOp::zero())).collect();
        },
    };
    let pivot_indices = cell.indices_of(&pivot);
    let origin = cell.position(pivot_indices[0]);

    let mut out = vec![];
    for &rotation in point_ops {
        let mut rotated = cell.clone();
        rotation.act_on(&mut rotated);

        for &i in &pivot_indices {
            let translation = TransOp::from((origin - rotated.position(i)).in_cell(prec));

            let mut trial = rotated.clone();
            translation.act_on(&mut trial);
            if trial.approx_eq(cell, prec) {
                trace!("Symmetry: {:?} + {:?}", rotation, translation.vector());
                out.push(SpaceOp::new(rotation, translation));
            }
        }
    }
    debug!("Found {} space group operations from {} point operations", out.len(), point_ops.len());
    out
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use crate::{Coords, Lattice, Element};
    use symcell_array_types::V3;

    #[test]
    fn empty_cell() {
        let cell = Cell::<Element>::new(Lattice::cubic(2.0), Coords::Fracs(vec![]), vec![]).unwrap();
        let ops = space_group(&cell, 1e-5);
        assert_eq!(ops.len(), 48);
        assert!(ops.iter().all(|op| op.translation == TransOp::zero()));
    }

    #[test]
    fn single_atom_off_origin() {
        let cell = Cell::new(
            Lattice::orthorhombic(1.0, 2.0, 3.0),
            Coords::Fracs(vec![V3([0.1, 0.2, 0.3])]),
            vec![Element::CARBON],
        ).unwrap();
        let ops = space_group(&cell, 1e-5);
        assert_eq!(ops.len(), 8);
        assert_eq!(ops[0], SpaceOp::eye());

        // inversion through the atom needs a translation of twice its position
        let inversion = ops.iter().find(|op| op.rotation == PointOp::inversion()).unwrap();
        assert_close!(abs=1e-10, inversion.translation.vector().0, [0.2, 0.4, 0.6]);
    }

    #[test]
    fn broken_symmetry() {
        // a second species off any mirror plane leaves only the identity
        let cell = Cell::new(
            Lattice::orthorhombic(1.0, 2.0, 3.0),
            Coords::Fracs(vec![V3([0.0, 0.0, 0.0]), V3([0.1, 0.2, 0.3])]),
            vec!["A", "B"],
        ).unwrap();
        let ops = space_group(&cell, 1e-5);
        assert_eq!(ops, vec![SpaceOp::eye()]);
    }
}
