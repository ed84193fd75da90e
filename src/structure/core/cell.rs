/* ************************************************************************ **
** This file is part of symcell, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::{Lattice, Coords, FracPos};
use crate::errors::StructureError;
use crate::{Rotate, Shift, SymmOp};

use std::collections::BTreeMap;

use slice_of_array::prelude::*;
use symcell_array_types::{V3, M33};

/// A periodic structure: a lattice, fractional positions, and one species
/// label per atom.
///
/// Index `i` refers to the same atom in `fracs()` and `species()`.
/// The species type is opaque and only ever compared for equality
/// (or ordered, for choosing a pivot), so it may be an [`Element`],
/// a string, an integer type code, or anything else that fits.
///
/// [`Element`]: struct.Element.html
#[derive(Debug, Clone, PartialEq)]
pub struct Cell<S> {
    lattice: Lattice,
    fracs: Vec<V3>,
    species: Vec<S>,
}

impl<S> Cell<S> {
    /// Build a cell; cartesian input is converted to fractional coordinates.
    pub fn new<Ss>(lattice: Lattice, coords: Coords, species: Ss) -> Result<Self, StructureError>
    where Ss: IntoIterator<Item=S>,
    {
        let species: Vec<_> = species.into_iter().collect();
        if coords.len() != species.len() {
            return Err(StructureError::DimensionMismatch {
                what: "positions",
                expected: species.len(),
                actual: coords.len(),
            });
        }
        let fracs = coords.into_fracs(&lattice);
        Ok(Cell { lattice, fracs, species })
    }

    /// Build a cell from flat data: nine lattice values in row-major order,
    /// and three fractional coordinates per atom.
    pub fn from_flat<Ss>(lattice: &[f64], fracs: &[f64], species: Ss) -> Result<Self, StructureError>
    where Ss: IntoIterator<Item=S>,
    {
        let lattice = Lattice::from_flat(lattice)?;
        let species: Vec<_> = species.into_iter().collect();
        if fracs.len() != 3 * species.len() {
            return Err(StructureError::DimensionMismatch {
                what: "fractional coordinates",
                expected: 3 * species.len(),
                actual: fracs.len(),
            });
        }
        let fracs = fracs.nest::<[_; 3]>().iter().map(|&v| V3(v)).collect();
        Cell::new(lattice, Coords::Fracs(fracs), species)
    }

    pub fn num_atoms(&self) -> usize { self.fracs.len() }
    pub fn lattice(&self) -> &Lattice { &self.lattice }
    pub fn fracs(&self) -> &[V3] { &self.fracs }
    pub fn species(&self) -> &[S] { &self.species }

    pub fn position(&self, index: usize) -> FracPos
    { FracPos(self.fracs[index]) }

    pub fn to_carts(&self) -> Vec<V3>
    { Coords::Fracs(self.fracs.clone()).into_carts(&self.lattice) }

    /// Copy the cell and apply a symmetry operation to the copy.
    pub fn transformed(&self, op: &SymmOp) -> Self
    where S: Clone,
    {
        let mut out = self.clone();
        op.apply(&mut out);
        out
    }
}

impl<S: PartialEq> Cell<S> {
    /// Index of the first atom of the given species whose position matches
    /// `pos` modulo the unit cell.
    pub fn find(&self, pos: &FracPos, species: &S, prec: f64) -> Option<usize>
    {
        (0..self.num_atoms()).find(|&i| {
            self.species[i] == *species
                && self.position(i).approx_eq_in_cell(pos, prec)
        })
    }

    pub fn indices_of(&self, species: &S) -> Vec<usize>
    {
        self.species.iter().enumerate()
            .filter(|&(_, s)| s == species)
            .map(|(i, _)| i)
            .collect()
    }

    /// Test whether two cells describe the same structure.
    ///
    /// The lattices must have equal shape, the atom counts must agree, and
    /// every atom of `self` must have a counterpart of the same species in
    /// `other` at the same position modulo the cell.
    pub fn approx_eq(&self, other: &Cell<S>, prec: f64) -> bool
    {
        if self.num_atoms() != other.num_atoms() {
            return false;
        }
        if !self.lattice.approx_eq(&other.lattice, prec) {
            return false;
        }
        (0..self.num_atoms()).all(|i| {
            other.find(&self.position(i), &self.species[i], prec).is_some()
        })
    }
}

impl<S: Ord> Cell<S> {
    /// The species with the fewest atoms, ties going to the smallest label.
    ///
    /// `None` for a cell with no atoms.
    pub fn pivot_species(&self) -> Option<&S>
    {
        let mut counts = BTreeMap::new();
        for s in &self.species {
            *counts.entry(s).or_insert(0) += 1;
        }
        // min_by_key keeps the first of equal elements, and BTreeMap iterates in order
        counts.into_iter()
            .min_by_key(|&(_, count)| count)
            .map(|(s, _)| s)
    }
}

/// Rotates the fractional positions only (`f ← f M`); the lattice is kept.
impl<S> Rotate for Cell<S> {
    fn rotate(&mut self, m: &M33<i32>) {
        crate::util::transform_mut_n3_33(&mut self.fracs, &m.map(f64::from));
    }
}

impl<S> Shift for Cell<S> {
    fn shift(&mut self, v: &V3) {
        crate::util::translate_mut_n3_3(&mut self.fracs, v);
    }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use crate::{Element, PointOp, TransOp};
    use symcell_array_types::mat;

    fn salt() -> Cell<Element> {
        Cell::new(
            Lattice::cubic(5.64),
            Coords::Fracs(vec![V3([0.0, 0.0, 0.0]), V3([0.5, 0.5, 0.5])]),
            vec![Element::SODIUM, Element::CHLORINE],
        ).unwrap()
    }

    #[test]
    fn construction_errors() {
        let err = Cell::new(Lattice::eye(), Coords::Fracs(vec![V3::zero()]), vec!["A", "B"]);
        match err {
            Err(StructureError::DimensionMismatch { expected: 2, actual: 1, .. }) => {},
            other => panic!("unexpected: {:?}", other),
        }

        let flat = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];
        assert!(Cell::from_flat(&flat, &[0.0; 5], vec![1, 2]).is_err());
        assert!(Cell::from_flat(&flat[..8], &[0.0; 6], vec![1, 2]).is_err());

        let cell = Cell::from_flat(&flat, &[0.0, 0.0, 0.0, 0.5, 0.25, 0.0], vec![1, 2]).unwrap();
        assert_eq!(cell.num_atoms(), 2);
        assert_eq!(cell.position(1), FracPos::new(0.5, 0.25, 0.0));
    }

    #[test]
    fn carts_are_converted() {
        let cell = Cell::new(
            Lattice::cubic(2.0),
            Coords::Carts(vec![V3([1.0, 0.5, 0.0])]),
            vec!["X"],
        ).unwrap();
        assert_eq!(cell.fracs(), &[V3([0.5, 0.25, 0.0])]);
        assert_eq!(cell.to_carts(), vec![V3([1.0, 0.5, 0.0])]);
    }

    #[test]
    fn pivot() {
        let cell = Cell::from_flat(
            &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
            &[0.0; 15],
            vec!["O", "Ti", "O", "Sr", "O"],
        ).unwrap();
        // Ti and Sr both appear once
        assert_eq!(cell.pivot_species(), Some(&"Sr"));
        assert_eq!(cell.indices_of(&"O"), vec![0, 2, 4]);

        let empty = Cell::<&str>::new(Lattice::eye(), Coords::Fracs(vec![]), vec![]).unwrap();
        assert_eq!(empty.pivot_species(), None);
    }

    #[test]
    fn find_and_compare() {
        let cell = salt();
        let prec = 1e-5;
        assert_eq!(cell.find(&FracPos::new(-0.5, 1.5, 0.5), &Element::CHLORINE, prec), Some(1));
        assert_eq!(cell.find(&FracPos::new(-0.5, 1.5, 0.5), &Element::SODIUM, prec), None);

        // shifting by a lattice vector changes nothing
        let mut shifted = cell.clone();
        shifted.shift(&V3([1.0, 0.0, -1.0]));
        assert!(shifted.approx_eq(&cell, prec));

        // a half-body-diagonal shift puts sodium on the chlorine site
        let swapped = cell.transformed(&TransOp::new(V3([0.5, 0.5, 0.5])).into());
        assert!(!swapped.approx_eq(&cell, prec));

        // but with a single species the same shift is a symmetry (bcc)
        let bcc = Cell::new(
            Lattice::cubic(2.87),
            Coords::Fracs(vec![V3([0.0, 0.0, 0.0]), V3([0.5, 0.5, 0.5])]),
            vec![Element::IRON; 2],
        ).unwrap();
        let shifted_bcc = bcc.transformed(&TransOp::new(V3([0.5, 0.5, 0.5])).into());
        assert!(shifted_bcc.approx_eq(&bcc, prec));

        let mut moved = cell.clone();
        moved.shift(&V3([0.1, 0.0, 0.0]));
        assert!(!moved.approx_eq(&cell, prec));

        let mut fewer = cell.clone();
        fewer.fracs.pop();
        fewer.species.pop();
        assert!(!fewer.approx_eq(&cell, prec));
        assert!(!cell.approx_eq(&fewer, prec));
    }

    #[test]
    fn rotation_leaves_lattice() {
        let cell = salt();
        let op = PointOp::new(&mat::from_array([[0, 1, 0], [-1, 0, 0], [0, 0, 1]]));
        let mut rotated = cell.clone();
        op.act_on(&mut rotated);
        assert_eq!(rotated.lattice(), cell.lattice());
        assert_eq!(rotated.fracs()[1], V3([-0.5, 0.5, 0.5]));
        assert!(rotated.approx_eq(&cell, 1e-5));
    }
}
