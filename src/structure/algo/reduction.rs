/* ************************************************************************ **
** This file is part of symcell, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Delaunay (Selling) reduction of a lattice basis.
//!
//! Citations:
//!
//! * B. N. Delaunay, "Neue Darstellung der geometrischen Kristallographie."
//!   Zeitschrift für Kristallographie 84 (1933): 109-149.
//!
//! * Patterson, A. L., and Love, W. E. "Remarks on the Delaunay reduction."
//!   Acta Crystallographica 10.2 (1957): 111-116.

use crate::Lattice;

use ordered_float::OrderedFloat;
use symcell_array_types::{V3, M3};

// A well-behaved input converges in a handful of sweeps.
const MAX_SWEEPS: usize = 1000;

/// Reduce a lattice to a basis of short, nearly orthogonal vectors.
///
/// The lattice is extended to a superbase `b0, b1, b2, b3 = -(b0 + b1 + b2)`
/// and given a single reduction sweep. The three shortest linearly independent
/// vectors among the superbase and its pairwise sums then form the result,
/// negated if necessary to be right-handed.
///
/// One sweep is not always enough to make the superbase obtuse; see
/// [`delaunay_reduce_converged`] for the variant that keeps sweeping.
///
/// The input is not modified.
///
/// [`delaunay_reduce_converged`]: fn.delaunay_reduce_converged.html
pub fn delaunay_reduce(lattice: &Lattice, prec: f64) -> Lattice
{
    let mut superbase = superbase(lattice);
    reduction_sweep(&mut superbase, prec);
    shortest_basis(lattice, superbase, prec)
}

/// Like [`delaunay_reduce`], but sweeps until the superbase is obtuse.
///
/// [`delaunay_reduce`]: fn.delaunay_reduce.html
pub fn delaunay_reduce_converged(lattice: &Lattice, prec: f64) -> Lattice
{
    let superbase = obtuse_superbase(lattice, prec);
    shortest_basis(lattice, superbase, prec)
}

fn superbase(lattice: &Lattice) -> [V3; 4]
{
    let [a, b, c] = *lattice.vectors();
    [a, b, c, -(a + b + c)]
}

fn shortest_basis(lattice: &Lattice, superbase: [V3; 4], prec: f64) -> Lattice
{
    let [b0, b1, b2, b3] = superbase;

    let mut pool = vec![b0, b1, b2, b3, b0 + b1, b1 + b2, b2 + b0];
    // (stable, so ties keep their order in the pool)
    pool.sort_by_key(|v| OrderedFloat(v.norm()));

    let (a, b) = (pool[0], pool[1]);
    let c = match pool[2..].iter().find(|&c| M3([a, b, *c]).det().abs() > prec) {
        Some(&c) => c,
        None => {
            warn!("Delaunay reduction found no independent third vector; returning the input");
            return lattice.clone();
        },
    };

    let mut matrix = M3([a, b, c]);
    if matrix.det() < -prec {
        matrix = matrix.map(|x| -x);
    }
    trace!("Reduced lattice: {:?}", matrix);
    Lattice::new_unchecked(&matrix)
}

/// Build the superbase and sweep until every pairwise inner product
/// is below `prec`.
fn obtuse_superbase(lattice: &Lattice, prec: f64) -> [V3; 4]
{
    let mut superbase = superbase(lattice);
    for sweep in 0..MAX_SWEEPS {
        if !reduction_sweep(&mut superbase, prec) {
            debug!("Delaunay reduction converged after {} sweep(s)", sweep + 1);
            return superbase;
        }
    }
    warn!("Delaunay reduction did not converge in {} sweeps", MAX_SWEEPS);
    superbase
}

/// One pass over the superbase. Returns whether anything changed.
///
/// For each `i`, at the first `j` with `bi · bj >= prec`, `bi` is added to the
/// two vectors other than `bi` and `bj`, and then negated.
fn reduction_sweep(superbase: &mut [V3; 4], prec: f64) -> bool
{
    let mut changed = false;
    for i in 0..4 {
        let partner = (0..4).filter(|&j| j != i).find(|&j| {
            V3::dot(&superbase[i], &superbase[j]) >= prec
        });
        if let Some(j) = partner {
            let bi = superbase[i];
            for k in (0..4).filter(|&k| k != i && k != j) {
                superbase[k] += bi;
            }
            superbase[i] = -bi;
            changed = true;
        }
    }
    changed
}
