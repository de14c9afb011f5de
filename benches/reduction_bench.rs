use criterion::{
    BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main,
};

use std::collections::HashMap;

use pers_matrix::matrix::BoundaryMatrix;
use pers_matrix::reduction::{StandardReduction, TwistReduction, compute_persistence_pairs};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Random filtered flag 2-complex: vertices at 0, edges kept with
/// `edge_probability` at a random birth, triangles wherever all three
/// edges exist.
fn build_flag_complex(num_vertices: usize, edge_probability: f64, seed: u64) -> BoundaryMatrix {
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut simplices: Vec<(u32, usize, Vec<usize>)> = Vec::new();
    for v in 0..num_vertices {
        simplices.push((0, 0, vec![v]));
    }

    let mut births: HashMap<(usize, usize), u32> = HashMap::new();
    for i in 0..num_vertices {
        for j in (i + 1)..num_vertices {
            if rng.gen_bool(edge_probability) {
                let birth = rng.gen_range(1..64u32);
                births.insert((i, j), birth);
                simplices.push((birth, 1, vec![i, j]));
            }
        }
    }
    for i in 0..num_vertices {
        for j in (i + 1)..num_vertices {
            for k in (j + 1)..num_vertices {
                if let (Some(&a), Some(&b), Some(&c)) = (
                    births.get(&(i, j)),
                    births.get(&(i, k)),
                    births.get(&(j, k)),
                ) {
                    simplices.push((a.max(b).max(c), 2, vec![i, j, k]));
                }
            }
        }
    }

    simplices.sort();
    let index: HashMap<Vec<usize>, usize> = simplices
        .iter()
        .enumerate()
        .map(|(pos, s)| (s.2.clone(), pos))
        .collect();

    let columns: Vec<Vec<usize>> = simplices
        .iter()
        .map(|(_, dimension, vertices)| {
            if *dimension == 0 {
                return Vec::new();
            }
            let mut boundary: Vec<usize> = (0..vertices.len())
                .map(|omit| {
                    let facet: Vec<usize> = vertices
                        .iter()
                        .enumerate()
                        .filter(|(position, _)| *position != omit)
                        .map(|(_, &v)| v)
                        .collect();
                    index[&facet]
                })
                .collect();
            boundary.sort_unstable();
            boundary
        })
        .collect();

    BoundaryMatrix::from_columns(&columns).expect("generated complex must be valid")
}

fn bench_reduction(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduction");

    for &num_vertices in &[16usize, 32, 48] {
        let matrix = build_flag_complex(num_vertices, 0.4, 42);

        group.bench_with_input(
            BenchmarkId::new("standard", num_vertices),
            &matrix,
            |b, m| {
                b.iter_batched(
                    || m.clone(),
                    |mut working| {
                        black_box(
                            compute_persistence_pairs::<StandardReduction, _>(&mut working)
                                .unwrap(),
                        )
                    },
                    BatchSize::SmallInput,
                );
            },
        );

        group.bench_with_input(BenchmarkId::new("twist", num_vertices), &matrix, |b, m| {
            b.iter_batched(
                || m.clone(),
                |mut working| {
                    black_box(
                        compute_persistence_pairs::<TwistReduction, _>(&mut working).unwrap(),
                    )
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_reduction);
criterion_main!(benches);
