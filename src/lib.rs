/* ************************************************************************ **
** This file is part of symcell, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Crystal symmetry detection and supercell enumeration.
//!
//! This crate re-exports the structure API and adds the pieces an
//! application needs around it: YAML settings, logger setup, and a
//! one-call [`analyze`] that runs the whole symmetry pipeline on a cell.
//!
//! [`analyze`]: fn.analyze.html

#[macro_use] extern crate serde_derive;
#[macro_use] extern crate log;
#[macro_use] extern crate failure;

extern crate serde;
extern crate serde_yaml;
extern crate serde_ignored;
extern crate fern;
extern crate ansi_term;

extern crate symcell_structure;

pub mod config;
pub mod logging;

pub use symcell_structure::*;

pub use crate::config::{Settings, YamlRead};

/// Everything [`analyze`] learns about a cell.
///
/// [`analyze`]: fn.analyze.html
#[derive(Debug, Clone)]
pub struct Analysis {
    pub reduced_lattice: Lattice,
    pub point_ops: Vec<PointOp>,
    pub space_ops: Vec<SpaceOp>,
}

/// Reduce the lattice and search for point and space group operations.
///
/// The symmetry search runs on the lattice as given, so the operations
/// are expressed in the cell's own fractional coordinates.
pub fn analyze<S: Ord + Clone>(cell: &Cell<S>, settings: &Settings) -> Analysis
{
    let reduced_lattice = delaunay_reduce(cell.lattice(), settings.reduction_prec());
    let point_ops = lattice_point_group(cell.lattice(), settings.symprec);
    let space_ops = space_group_with_point_ops(cell, &point_ops, settings.symprec);
    info!(
        "{} atoms: {} lattice point operations, {} space group operations",
        cell.num_atoms(), point_ops.len(), space_ops.len(),
    );
    Analysis { reduced_lattice, point_ops, space_ops }
}

/// Lattices of every supercell of `volume` times the input, one per HNF matrix.
pub fn supercell_lattices(lattice: &Lattice, volume: i32) -> Result<Vec<Lattice>, StructureError>
{
    let hnfs = enumerate_hnfs(volume)?;
    Ok(hnfs.iter().map(|hnf| hnf.supercell_lattice(lattice)).collect())
}
