/* ************************************************************************ **
** This file is part of symcell, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Point group of a lattice by exhaustive search over small unimodular matrices.

use crate::{Lattice, PointOp};

use symcell_array_types::{M33, mat};

/// Axis, face-diagonal, and body-diagonal directions.
///
/// Each row of a candidate operation is one of these.
const SHORT_VECTORS: [[i32; 3]; 26] = [
    [ 1,  0,  0], [ 0,  1,  0], [ 0,  0,  1],
    [-1,  0,  0], [ 0, -1,  0], [ 0,  0, -1],
    [ 0,  1,  1], [ 1,  0,  1], [ 1,  1,  0],
    [ 0, -1, -1], [-1,  0, -1], [-1, -1,  0],
    [ 0,  1, -1], [-1,  0,  1], [ 1, -1,  0],
    [ 0, -1,  1], [ 1,  0, -1], [-1,  1,  0],
    [ 1,  1,  1], [-1, -1, -1], [-1,  1,  1],
    [ 1, -1,  1], [ 1,  1, -1], [ 1, -1, -1],
    [-1,  1, -1], [-1, -1,  1],
];

/// Number of operations in the catalog.
pub const CATALOG_SIZE: usize = 6960;

lazy_static! {
    static ref CATALOG: Vec<PointOp> = generate_catalog();
}

// every ordered triple of short vectors whose determinant is exactly ±1
fn generate_catalog() -> Vec<PointOp>
{
    let catalog: Vec<_> = {
        iproduct!(&SHORT_VECTORS, &SHORT_VECTORS, &SHORT_VECTORS)
            .map(|(a, b, c)| mat::from_array([*a, *b, *c]))
            .filter(|m: &M33<i32>| m.det().abs() == 1)
            .map(|m| PointOp::new(&m))
            .collect()
    };
    debug_assert_eq!(catalog.len(), CATALOG_SIZE);
    catalog
}

/// All candidate point operations, in a fixed order beginning with the identity.
///
/// The catalog is built on first use and shared by all threads.
pub fn point_op_catalog() -> &'static [PointOp]
{ &CATALOG }

/// Every catalog operation that maps the lattice onto itself.
///
/// An operation is kept when the lattice rotated by it has the same Gram
/// matrix as the input lattice, compared at tolerance `sqrt(prec)`.
/// The result is in catalog order.
pub fn lattice_point_group(lattice: &Lattice, prec: f64) -> Vec<PointOp>
{
    let tol = prec.sqrt();
    let ops: Vec<_> = {
        point_op_catalog().iter()
            .filter(|op| {
                let mut rotated = lattice.clone();
                op.act_on(&mut rotated);
                rotated.approx_eq(lattice, tol)
            })
            .cloned()
            .collect()
    };
    debug!("Lattice point group has {} operations", ops.len());
    ops
}
