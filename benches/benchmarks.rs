use bmesh::{Mesh, VH};
use criterion::{Criterion, criterion_group, criterion_main};
use glam::{Vec3, vec3};
use std::hint::black_box;

// Add a quad grid of n x n faces in the XY plane, starting at x = x0.
// Returns the vertices row by row.
fn add_grid(mesh: &mut Mesh, n: usize, x0: f32) -> Vec<VH> {
    let verts: Vec<VH> = (0..=n)
        .flat_map(|j| (0..=n).map(move |i| vec3(x0 + i as f32, j as f32, 0.0)))
        .map(|p| mesh.add_vertex(p))
        .collect();
    let at = |i: usize, j: usize| verts[j * (n + 1) + i];
    for j in 0..n {
        for i in 0..n {
            mesh.add_quad_face(at(i, j), at(i + 1, j), at(i + 1, j + 1), at(i, j + 1))
                .unwrap();
        }
    }
    verts
}

fn grid(n: usize) -> Mesh {
    let mut mesh = Mesh::with_capacity((n + 1) * (n + 1), 2 * n * (n + 1), n * n);
    add_grid(&mut mesh, n, 0.0);
    mesh
}

// Construction Benchmarks
fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    group.bench_function("unit_box_batch", |b| {
        b.iter(|| {
            for _i in 0..100 {
                let mesh = Mesh::unit_box().unwrap();
                black_box(mesh);
            }
        });
    });

    group.bench_function("tetrahedron_batch", |b| {
        b.iter(|| {
            for i in 0..100 {
                let mesh = Mesh::tetrahedron(black_box(1.0 + i as f32 * 0.01)).unwrap();
                black_box(mesh);
            }
        });
    });

    group.bench_function("grid_64", |b| {
        b.iter(|| black_box(grid(black_box(64))));
    });

    // Adding every face a second time only hits the duplicate lookup.
    let base = grid(32);
    let faces: Vec<Vec<VH>> = base
        .faces()
        .map(|f| base.face_vertices(f).unwrap())
        .collect();
    group.bench_function("existing_face_grid_32", |b| {
        b.iter(|| {
            let mut mesh = base.clone();
            for verts in &faces {
                black_box(mesh.add_face(verts).unwrap());
            }
        });
    });

    group.finish();
}

// Edit operator Benchmarks
fn bench_operators(c: &mut Criterion) {
    let mut group = c.benchmark_group("operators");

    let base = grid(32);

    group.bench_function("split_all_edges_grid_32", |b| {
        b.iter(|| {
            let mut mesh = base.clone();
            let edges: Vec<_> = mesh.edges().collect();
            for e in edges {
                let (a, _) = mesh.edge_vertices(e).unwrap();
                black_box(mesh.split_edge(e, a, None).unwrap());
            }
            black_box(mesh);
        });
    });

    group.bench_function("extrude_all_faces_grid_32", |b| {
        b.iter(|| {
            let mut mesh = base.clone();
            let faces: Vec<_> = mesh.faces().collect();
            for f in faces {
                black_box(mesh.extrude_face(f, Vec3::Z, false).unwrap());
            }
            black_box(mesh);
        });
    });

    group.bench_function("split_all_faces_grid_32", |b| {
        b.iter(|| {
            let mut mesh = base.clone();
            let faces: Vec<_> = mesh.faces().collect();
            for f in faces {
                let loops = mesh.face_loops(f).unwrap();
                black_box(mesh.split_face(f, loops[0], loops[2]).unwrap());
            }
            black_box(mesh);
        });
    });

    // Two grids whose seam columns coincide, zipped together by splicing
    // the seam vertices. Every splice after the first also splices an edge.
    let n = 32;
    let mut pair = Mesh::new();
    let left = add_grid(&mut pair, n, 0.0);
    let right = add_grid(&mut pair, n, n as f32);
    let seam: Vec<(VH, VH)> = (0..=n)
        .map(|j| (left[j * (n + 1) + n], right[j * (n + 1)]))
        .collect();
    group.bench_function("zip_grids_32", |b| {
        b.iter(|| {
            let mut mesh = pair.clone();
            for (keep, kill) in &seam {
                black_box(mesh.splice_vertices(*keep, *kill).unwrap());
            }
            black_box(mesh);
        });
    });

    group.bench_function("remove_all_vertices_grid_32", |b| {
        b.iter(|| {
            let mut mesh = base.clone();
            let verts: Vec<_> = mesh.vertices().collect();
            for v in verts {
                mesh.remove_vertex(v).unwrap();
            }
            black_box(mesh);
        });
    });

    group.finish();
}

// Validation Benchmarks
fn bench_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("validation");

    let mesh = grid(64);

    group.bench_function("check_topology_grid_64", |b| {
        b.iter(|| black_box(&mesh).check_topology().unwrap());
    });

    group.bench_function("vertex_iteration", |b| {
        b.iter(|| {
            let count: usize = mesh.vertices().map(|v| mesh.vv_iter(v).count()).sum();
            black_box(count);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_construction,
    bench_operators,
    bench_validation
);
criterion_main!(benches);
