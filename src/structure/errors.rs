/* ************************************************************************ **
** This file is part of symcell, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

/// Errors raised when constructing structure types from raw data.
///
/// The searches themselves never fail once their inputs are built.
#[derive(Debug, Fail)]
pub enum StructureError {
    #[fail(display = "lattice is degenerate (determinant {})", det)]
    DegenerateLattice { det: f64 },

    #[fail(display = "expected {} {}, but got {}", expected, what, actual)]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[fail(display = "volume multiplier must be at least 1 (got {})", volume)]
    InvalidVolumeMultiplier { volume: i32 },
}
