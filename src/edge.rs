// Connecting lines between nearby particles. Edges are derived data: the whole
// set is rebuilt from current positions every frame and nothing carries over.
//
// Cost: the pairwise scan evaluates n(n-1)/2 distances (4,950 for 100
// particles). The bucketed scan hashes particles into cubic cells one
// threshold wide and only compares neighbouring cells, which pays off once the
// field is a few hundred particles or more.

use crate::particle::Particle;
use std::collections::HashMap;
use vecmath::{vec3_len, vec3_sub};

/// Unordered pair of particle indices, always stored with `a < b`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

pub fn distance(p: &Particle, q: &Particle) -> f64 {
    vec3_len(vec3_sub(p.pos, q.pos))
}

/// Clears `out` and fills it with every pair closer than `threshold`, ordered by (a, b).
pub fn connect_pairwise(particles: &[Particle], threshold: f64, out: &mut Vec<Edge>) {
    out.clear();
    for i in 0..particles.len() {
        for j in i + 1..particles.len() {
            if distance(&particles[i], &particles[j]) < threshold {
                out.push(Edge { a: i, b: j });
            }
        }
    }
}

type Cell = (i64, i64, i64);

fn cell_of(p: &Particle, size: f64) -> Cell {
    (
        (p.pos[0] / size).floor() as i64,
        (p.pos[1] / size).floor() as i64,
        (p.pos[2] / size).floor() as i64,
    )
}

/// Same output as `connect_pairwise`, using a uniform grid with cell size `threshold`.
pub fn connect_bucketed(particles: &[Particle], threshold: f64, out: &mut Vec<Edge>) {
    out.clear();
    let mut grid: HashMap<Cell, Vec<usize>> = HashMap::new();
    for (i, p) in particles.iter().enumerate() {
        grid.entry(cell_of(p, threshold)).or_insert_with(Vec::new).push(i);
    }

    for (i, p) in particles.iter().enumerate() {
        let (cx, cy, cz) = cell_of(p, threshold);
        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    let bucket = match grid.get(&(cx + dx, cy + dy, cz + dz)) {
                        Some(bucket) => bucket,
                        None => continue,
                    };
                    for &j in bucket {
                        if j > i && distance(p, &particles[j]) < threshold {
                            out.push(Edge { a: i, b: j });
                        }
                    }
                }
            }
        }
    }
    out.sort_unstable();
}
