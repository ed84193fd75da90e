/* ************************************************************************ **
** This file is part of symcell, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use symcell_array_types::{V3, M33};

pub(crate) fn translate_mut_n3_3(coords: &mut [V3], t: &V3)
{
    for row in coords {
        *row += t;
    }
}

// rows are positions, so the matrix goes on the right
pub(crate) fn transform_mut_n3_33(coords: &mut [V3], m: &M33)
{
    for row in coords {
        *row = &*row * m;
    }
}

/// Fold one fractional component into the unit interval.
///
/// `%` keeps the sign of the dividend, so negative inputs land in `(-1, 0]`
/// and need an extra step. Values just below zero snap to exactly zero,
/// while values just below one are left alone.
pub(crate) fn fold_into_cell(x: f64, prec: f64) -> f64
{
    let mut x = x % 1.0;
    if x < -prec {
        x += 1.0;
    }
    if x < 0.0 && x > -prec {
        x = 0.0;
    }
    x
}
