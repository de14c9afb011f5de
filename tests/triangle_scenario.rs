//! Worked scenario: the filled triangle.
//!
//! Simplices in filtration order `{0},{1},{2},{0,1},{0,2},{1,2},{0,1,2}`
//! (indices 0–6). Both reduction algorithms, over both column stores,
//! primal and dualized, must produce the pairing `{(1,3),(2,4),(5,6)}`
//! with index 0 essential: the trivial homology of a filled triangle
//! (β₀ = 1, β₁ = 0, β₂ = 0).

use pers_matrix::diagram::make_persistence_diagrams;
use pers_matrix::filtration::{VecFiltration, make_boundary_matrix};
use pers_matrix::io::load_boundary_matrix;
use pers_matrix::matrix::{
    BTreeColumnStorage, BoundaryMatrix, ColumnStorage, VecColumnStorage, dualize,
};
use pers_matrix::reduction::{
    PersistencePairing, ReductionAlgorithm, StandardReduction, TwistReduction,
    compute_persistence_pairs,
};

fn triangle_columns() -> Vec<Vec<usize>> {
    vec![
        vec![],
        vec![],
        vec![],
        vec![0, 1],
        vec![0, 2],
        vec![1, 2],
        vec![3, 4, 5],
    ]
}

fn assert_triangle_pairing(pairing: &PersistencePairing) {
    assert_eq!(pairing.pairs(), &[(1, 3), (2, 4), (5, 6)]);
    assert_eq!(pairing.unpaired(), &[0]);
}

fn check_all_variants<S: ColumnStorage>() {
    let matrix: BoundaryMatrix<S> = BoundaryMatrix::from_columns(&triangle_columns()).unwrap();

    let mut primal = matrix.clone();
    assert_triangle_pairing(
        &compute_persistence_pairs::<StandardReduction, _>(&mut primal).unwrap(),
    );

    let mut primal = matrix.clone();
    assert_triangle_pairing(&compute_persistence_pairs::<TwistReduction, _>(&mut primal).unwrap());

    let mut dual = dualize(&matrix).unwrap();
    assert_triangle_pairing(&compute_persistence_pairs::<StandardReduction, _>(&mut dual).unwrap());

    let mut dual = dualize(&matrix).unwrap();
    assert_triangle_pairing(&compute_persistence_pairs::<TwistReduction, _>(&mut dual).unwrap());
}

#[test]
fn pairing_over_vec_storage() {
    check_all_variants::<VecColumnStorage>();
}

#[test]
fn pairing_over_btree_storage() {
    check_all_variants::<BTreeColumnStorage>();
}

#[test]
fn fixture_file_matches_inline_matrix() {
    let loaded: BoundaryMatrix<VecColumnStorage> =
        load_boundary_matrix("tests/data/triangle.txt").unwrap();
    let inline: BoundaryMatrix<VecColumnStorage> =
        BoundaryMatrix::from_columns(&triangle_columns()).unwrap();
    assert_eq!(loaded, inline);

    let mut loaded = loaded;
    assert_triangle_pairing(&compute_persistence_pairs::<TwistReduction, _>(&mut loaded).unwrap());
}

fn triangle_filtration(values: [f64; 7]) -> VecFiltration<f64> {
    let mut f = VecFiltration::new();
    let boundaries: [&[usize]; 7] = [&[], &[], &[], &[0, 1], &[0, 2], &[1, 2], &[3, 4, 5]];
    for (i, boundary) in boundaries.iter().enumerate() {
        let dimension = if boundary.is_empty() {
            0
        } else {
            boundary.len() - 1
        };
        f.push(dimension, values[i], boundary.to_vec()).unwrap();
    }
    f
}

#[test]
fn diagrams_with_distinct_filtration_values() {
    let f = triangle_filtration([0.0, 0.1, 0.2, 1.0, 1.1, 1.2, 2.0]);
    let mut matrix: BoundaryMatrix = make_boundary_matrix(&f).unwrap();
    let pairing = compute_persistence_pairs::<StandardReduction, _>(&mut matrix).unwrap();
    let diagrams = make_persistence_diagrams(&pairing, &f).unwrap();

    assert_eq!(diagrams.len(), 3);

    // Dimension 0: two merges plus the essential component born first.
    let d0 = &diagrams[0];
    assert_eq!(d0.len(), 3);
    assert_eq!(d0.betti(), 1);
    let finite: Vec<_> = d0.points().iter().filter(|p| !p.is_unpaired()).collect();
    assert_eq!(finite.len(), 2);
    assert_eq!((finite[0].x(), finite[0].y()), (0.1, 1.0));
    assert_eq!((finite[1].x(), finite[1].y()), (0.2, 1.1));
    let essential: Vec<_> = d0.points().iter().filter(|p| p.is_unpaired()).collect();
    assert_eq!(essential[0].x(), 0.0);

    // Dimension 1: the cycle closed by edge 5, filled by face 6.
    let d1 = &diagrams[1];
    assert_eq!(d1.len(), 1);
    assert_eq!((d1.points()[0].x(), d1.points()[0].y()), (1.2, 2.0));
    assert_eq!(d1.betti(), 0);

    // Dimension 2: empty.
    assert!(diagrams[2].is_empty());
    assert_eq!(diagrams[2].betti(), 0);
}

#[test]
fn diagrams_with_uniform_values_deduplicate_to_one_finite_point() {
    // All vertices at 0, all edges at 1, the face at 2: both dimension-0
    // merges map to the same point (0, 1).
    let f = triangle_filtration([0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 2.0]);
    let mut matrix: BoundaryMatrix = make_boundary_matrix(&f).unwrap();
    let pairing = compute_persistence_pairs::<TwistReduction, _>(&mut matrix).unwrap();
    let diagrams = make_persistence_diagrams(&pairing, &f).unwrap();

    let mut d0 = diagrams[0].clone();
    assert_eq!(d0.len(), 3);
    d0.remove_duplicates();
    assert_eq!(d0.len(), 2);
    let finite: Vec<_> = d0.points().iter().filter(|p| !p.is_unpaired()).collect();
    assert_eq!(finite.len(), 1);
    assert_eq!((finite[0].x(), finite[0].y()), (0.0, 1.0));
    assert_eq!(d0.betti(), 1);

    // The dimension-1 cycle is born and filled at distinct values here,
    // but with edge and face at the same value it would sit on the
    // diagonal and vanish under remove_diagonal.
    let g = triangle_filtration([0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0]);
    let mut matrix: BoundaryMatrix = make_boundary_matrix(&g).unwrap();
    let pairing = compute_persistence_pairs::<TwistReduction, _>(&mut matrix).unwrap();
    let diagrams = make_persistence_diagrams(&pairing, &g).unwrap();
    let mut d1 = diagrams[1].clone();
    assert_eq!(d1.len(), 1);
    d1.remove_diagonal();
    assert!(d1.is_empty());
}

#[test]
fn reduction_respects_explicit_cloning() {
    // Reduction consumes its input; a clone taken beforehand is untouched.
    let original: BoundaryMatrix = BoundaryMatrix::from_columns(&triangle_columns()).unwrap();
    let mut working = original.clone();
    let _ = compute_persistence_pairs::<StandardReduction, _>(&mut working).unwrap();
    assert_eq!(original.column(5).unwrap(), vec![1, 2]);
    assert_eq!(working.column(5).unwrap(), Vec::<usize>::new());
}

#[test]
fn algorithms_accept_trait_object_free_generic_dispatch() {
    // The driver works for any ReductionAlgorithm implementor.
    fn run<A: ReductionAlgorithm>(columns: &[Vec<usize>]) -> PersistencePairing {
        let mut m: BoundaryMatrix = BoundaryMatrix::from_columns(columns).unwrap();
        compute_persistence_pairs::<A, _>(&mut m).unwrap()
    }
    assert_eq!(
        run::<StandardReduction>(&triangle_columns()),
        run::<TwistReduction>(&triangle_columns())
    );
}
