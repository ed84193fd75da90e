/* ************************************************************************ **
** This file is part of symcell, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::Lattice;

use symcell_array_types::V3;

/// Wrapper type for coordinates used as input to some APIs.
///
/// This allows a function to support either cartesian coordinates,
/// or fractional coordinates with respect to some lattice.
#[derive(Debug, Clone, PartialEq)]
pub enum Coords {
    Carts(Vec<V3>),
    Fracs(Vec<V3>),
}

impl Coords {
    pub fn len(&self) -> usize
    { match *self {
        Coords::Carts(ref c) => c.len(),
        Coords::Fracs(ref c) => c.len(),
    }}

    pub fn is_empty(&self) -> bool
    { self.len() == 0 }
}

// conversions
impl Coords {
    pub fn into_carts(self, lattice: &Lattice) -> Vec<V3>
    { match self {
        Coords::Carts(c) => c,
        Coords::Fracs(c) => c.iter().map(|v| v * lattice).collect(),
    }}

    pub fn into_fracs(self, lattice: &Lattice) -> Vec<V3>
    { match self {
        Coords::Carts(c) => c.iter().map(|v| v / lattice).collect(),
        Coords::Fracs(c) => c,
    }}
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use crate::Lattice;
    use crate::Coords::{Fracs, Carts};
    use symcell_array_types::V3;

    // make sure the library correctly chooses whether to use the
    // regular matrix, the inverse matrix, or no matrix
    #[test]
    fn div_vs_mul() {
        let x = |mag| vec![V3([mag, 0.0, 0.0])];
        let lattice = Lattice::cubic(2.0);

        assert_eq!(x(1.0), Fracs(x(1.0)).into_fracs(&lattice));
        assert_eq!(x(2.0), Fracs(x(1.0)).into_carts(&lattice));
        assert_eq!(x(0.5), Carts(x(1.0)).into_fracs(&lattice));
        assert_eq!(x(1.0), Carts(x(1.0)).into_carts(&lattice));
        assert_eq!(Carts(x(1.0)).len(), 1);
        assert!(Fracs(vec![]).is_empty());
    }
}
