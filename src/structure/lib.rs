/* ************************************************************************ **
** This file is part of symcell, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Periodic structures and their symmetry.
//!
//! The main entry points are [`lattice_point_group`], [`space_group`],
//! [`delaunay_reduce`], and [`enumerate_hnfs`]. Operations are returned as
//! values that can be applied to anything implementing [`Rotate`] and
//! [`Shift`], which includes [`Cell`] and [`Lattice`].
//!
//! [`lattice_point_group`]: fn.lattice_point_group.html
//! [`space_group`]: fn.space_group.html
//! [`delaunay_reduce`]: fn.delaunay_reduce.html
//! [`enumerate_hnfs`]: fn.enumerate_hnfs.html
//! [`Rotate`]: trait.Rotate.html
//! [`Shift`]: trait.Shift.html
//! [`Cell`]: struct.Cell.html
//! [`Lattice`]: struct.Lattice.html

extern crate symcell_array_types;
extern crate symcell_numtheory;
#[cfg(test)] #[macro_use] extern crate symcell_assert_close;

extern crate ordered_float;
extern crate slice_of_array;
#[macro_use] extern crate log;
#[macro_use] extern crate itertools;
#[macro_use] extern crate failure;
#[macro_use] extern crate lazy_static;
#[cfg(test)] extern crate rand;

mod errors;
mod core;
mod algo;
mod oper;
mod util;
mod element;

//---------------------------
// public reexports; API

pub use crate::errors::StructureError;

pub use crate::core::lattice::{Lattice, DEGENERATE_DET_TOL};
pub use crate::core::fracs::FracPos;
pub use crate::core::coords::Coords;
pub use crate::core::cell::Cell;

pub use crate::element::{Element, ElementParseError};
pub use crate::element::consts as consts;

pub use crate::oper::symmops::{Rotate, Shift, PointOp, TransOp, SpaceOp, SymmOp};

pub use crate::algo::reduction::{delaunay_reduce, delaunay_reduce_converged};
pub use crate::algo::point_group::{point_op_catalog, lattice_point_group, CATALOG_SIZE};
pub use crate::algo::space_group::{space_group, space_group_with_point_ops};
pub use crate::algo::hnf::{Hnf, enumerate_hnfs};
