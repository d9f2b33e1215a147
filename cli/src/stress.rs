//! Vector arithmetic stress harness.
//!
//! Shares nothing with the render pipeline: it copies the mesh positions, then repeatedly
//! adds, subtracts, multiplies and divides them by per-vertex random vectors.

use std::time::Instant;

use rand::Rng;
use raster::math::Vec4;
use raster::render::Mesh;
use rayon::prelude::*;

/// Number of arithmetic rounds applied to every vertex.
pub const LOAD_FACTOR: usize = 1000;

/// Per-vertex random operands, each component in [0, 1).
struct Operands {
    add: Vec4,
    sub: Vec4,
    mul: Vec4,
    div: Vec4,
}

/// Runs [`LOAD_FACTOR`] rounds over the mesh positions with a thread-local RNG.
pub fn run(mesh: &Mesh) -> Vec<Vec4> {
    run_with(mesh, &mut rand::thread_rng(), LOAD_FACTOR)
}

pub fn run_with<R: Rng>(mesh: &Mesh, rng: &mut R, rounds: usize) -> Vec<Vec4> {
    log::info!("stress: initializing {} vertices", mesh.vertex_count());
    let mut vertices: Vec<Vec4> = mesh.positions().iter().map(|p| p.as_point4()).collect();
    let mut random = || Vec4::new(rng.r#gen(), rng.r#gen(), rng.r#gen(), rng.r#gen());
    let operands: Vec<Operands> = (0..vertices.len())
        .map(|_| Operands { add: random(), sub: random(), mul: random(), div: random() })
        .collect();

    let started = Instant::now();
    vertices.par_iter_mut().zip(operands.par_iter()).for_each(|(v, op)| {
        for _ in 0..rounds {
            *v = crunch(*v, op);
        }
    });
    log::info!(
        "stress: {} rounds over {} vertices took {:.3}s",
        rounds,
        vertices.len(),
        started.elapsed().as_secs_f64()
    );
    vertices
}

fn crunch(v: Vec4, op: &Operands) -> Vec4 {
    let v = ((v + op.add) - op.sub) * op.mul;
    if op.div == Vec4::ZERO { v } else { v / op.div }
}
