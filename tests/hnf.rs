/* ************************************************************************ **
** This file is part of symcell, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

#[macro_use] extern crate symcell_assert_close;
extern crate symcell;
extern crate env_logger;

use symcell::{Lattice, StructureError, enumerate_hnfs, supercell_lattices};

#[test]
fn counts_and_shape() {
    let _ = env_logger::try_init();
    assert_eq!(enumerate_hnfs(2).unwrap().len(), 7);
    assert_eq!(enumerate_hnfs(6).unwrap().len(), 93);
    for hnf in enumerate_hnfs(4).unwrap() {
        let m = hnf.matrix();
        assert_eq!((m[0][1], m[0][2], m[1][2]), (0, 0, 0));
        assert!(hnf.entries().iter().all(|&x| x >= 0));
    }
}

#[test]
fn supercells_scale_volume() {
    let _ = env_logger::try_init();
    let lattice = Lattice::cubic(2.0);
    let supercells = supercell_lattices(&lattice, 3).unwrap();
    assert_eq!(supercells.len(), enumerate_hnfs(3).unwrap().len());
    for supercell in &supercells {
        assert_close!(supercell.volume(), 3.0 * lattice.volume());
    }

    match supercell_lattices(&lattice, 0) {
        Err(StructureError::InvalidVolumeMultiplier { volume: 0 }) => {},
        other => panic!("unexpected: {:?}", other.map(|v| v.len())),
    }
}
