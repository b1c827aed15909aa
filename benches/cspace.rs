use std::hint::black_box;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};

use cspace::{OccState, Plan};

#[derive(Clone, Copy)]
enum ObstaclePattern {
    Empty,
    SingleCenter,
    Sparse(u32),
    Dense(u32),
}

fn plan_with_obstacles(size: u32, scale: f32, max_radius: f32, pattern: ObstaclePattern) -> Plan {
    let mut plan = Plan::new(0.25, max_radius, 1.0, 0.5).expect("valid radii");
    plan.set_grid(size, size, 0.0, 0.0, scale).expect("valid grid");

    let mut states = vec![OccState::Free; (size * size) as usize];
    match pattern {
        ObstaclePattern::Empty => {}
        ObstaclePattern::SingleCenter => {
            states[(size / 2 * size + size / 2) as usize] = OccState::Occupied;
        }
        ObstaclePattern::Sparse(step) | ObstaclePattern::Dense(step) => {
            let step = step.max(1) as usize;
            for y in (0..size as usize).step_by(step) {
                for x in (0..size as usize).step_by(step) {
                    states[y * size as usize + x] = OccState::Occupied;
                }
            }
        }
    }
    plan.set_occupancy(&states).expect("matching size");
    plan.init();
    plan
}

fn bench_static_cspace(c: &mut Criterion) {
    let cases = [
        ("empty_256", 256, ObstaclePattern::Empty),
        ("single_center_64", 64, ObstaclePattern::SingleCenter),
        ("sparse_256", 256, ObstaclePattern::Sparse(32)),
        ("dense_256", 256, ObstaclePattern::Dense(4)),
        ("sparse_512", 512, ObstaclePattern::Sparse(64)),
    ];

    let mut group = c.benchmark_group("static_cspace");
    for (name, size, pattern) in cases {
        let plan = plan_with_obstacles(size, 0.05, 0.5, pattern);
        group.bench_function(name, |b| {
            b.iter_batched(
                || plan.clone(),
                |mut p| {
                    p.build_static_cspace();
                    black_box(&p);
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();

    let mut group = c.benchmark_group("static_cspace_radius");
    for radius in [0.1, 0.5, 1.0] {
        let plan = plan_with_obstacles(256, 0.05, radius, ObstaclePattern::Sparse(16));
        group.bench_function(format!("radius_{radius}"), |b| {
            b.iter_batched(
                || plan.clone(),
                |mut p| {
                    p.build_static_cspace();
                    black_box(&p);
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_static_cspace);
criterion_main!(benches);
