/* ************************************************************************ **
** This file is part of symcell, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

#[macro_use] extern crate symcell_assert_close;
extern crate symcell;
extern crate symcell_array_types;
extern crate env_logger;

use symcell::{Cell, Coords, Lattice, Element, PointOp, SpaceOp, Settings, YamlRead};
use symcell::{analyze, delaunay_reduce, lattice_point_group, space_group};
use symcell_array_types::V3;

use std::fs::File;

fn init_logger() {
    let _ = env_logger::try_init();
}

fn rocksalt(a: f64) -> Cell<Element> {
    let na = [[0.0, 0.0, 0.0], [0.0, 0.5, 0.5], [0.5, 0.0, 0.5], [0.5, 0.5, 0.0]];
    let fracs = {
        na.iter().map(|&v| V3(v))
            .chain(na.iter().map(|&v| V3(v) + V3([0.5, 0.5, 0.5])))
            .collect()
    };
    let species = vec![Element::SODIUM; 4].into_iter().chain(vec![Element::CHLORINE; 4]);
    Cell::new(Lattice::cubic(a), Coords::Fracs(fracs), species).unwrap()
}

#[test]
fn rocksalt_from_settings_file() {
    init_logger();
    let settings = Settings::from_reader(File::open("tests/resources/settings.yaml").unwrap()).unwrap();
    assert_eq!(settings.symprec, 1e-4);

    let cell = rocksalt(5.64);
    let analysis = analyze(&cell, &settings);
    assert_eq!(analysis.point_ops.len(), 48);
    // Fm-3m in the conventional cell: 48 rotations times 4 centering translations
    assert_eq!(analysis.space_ops.len(), 192);
    assert!(analysis.space_ops.iter().any(|op| op.rotation == PointOp::inversion()));
    assert_close!(analysis.reduced_lattice.volume(), cell.lattice().volume());
}

#[test]
fn species_labels_can_be_strings() {
    init_logger();
    let cell = Cell::from_flat(
        &[3.0, 0.0, 0.0, 0.0, 3.0, 0.0, 0.0, 0.0, 5.0],
        &[0.0, 0.0, 0.0, 0.5, 0.5, 0.5],
        vec!["Cs".to_string(), "Cl".to_string()],
    ).unwrap();
    let ops = space_group(&cell, 1e-5);
    // tetragonal CsCl-like: every lattice operation survives
    assert_eq!(ops.len(), lattice_point_group(cell.lattice(), 1e-5).len());
    assert_eq!(ops.len(), 16);
    assert_eq!(ops[0], SpaceOp::eye());
}

#[test]
fn reduced_cell_is_equivalent() {
    init_logger();
    let lattice = Lattice::from_flat(&[
        4.693, 0.0, 0.0,
        -0.0577, 4.93566, 0.0,
        0.05647, -4.93566, 5.678,
    ]).unwrap();
    let reduced = delaunay_reduce(&lattice, 1e-5);
    assert_close!(reduced.volume(), lattice.volume());
    assert!(delaunay_reduce(&reduced, 1e-5).approx_eq(&reduced, 1e-5));

    let ops = lattice_point_group(&reduced, 1e-5);
    assert_eq!(ops[0], PointOp::eye());
    assert!(ops.contains(&PointOp::inversion()));
}
