// The hero section's simulation state: a fixed set of particles, the edges
// derived from them, and the scene spin. Owns no browser resources, so it can
// be stepped and inspected outside of a page.

use crate::config::FieldConfig;
use crate::edge::{self, Edge};
use crate::error::Result;
use crate::particle::Particle;
use rand::Rng;

pub struct ParticleField {
    config: FieldConfig,
    particles: Vec<Particle>,
    edges: Vec<Edge>,
    rotation_y: f64,
    frame: u64,
}

impl ParticleField {
    pub fn new<R: Rng>(config: FieldConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let particles = (0..config.count)
            .map(|_| Particle::random(&mut *rng, config.spread, config.max_speed, config.velocity_model))
            .collect();
        Ok(ParticleField::assemble(config, particles))
    }

    /// Field with explicit starting particles. `config.count` is ignored.
    pub fn from_particles(config: FieldConfig, particles: Vec<Particle>) -> Result<Self> {
        config.validate()?;
        Ok(ParticleField::assemble(config, particles))
    }

    fn assemble(config: FieldConfig, particles: Vec<Particle>) -> Self {
        let mut field = ParticleField {
            config,
            particles,
            edges: Vec::new(),
            rotation_y: 0.0,
            frame: 0,
        };
        field.rebuild_edges();
        field
    }

    /// One animation frame: move and bounce every particle, rebuild edges, spin the scene.
    pub fn step(&mut self) {
        let bounds = self.config.bounds;
        let model = self.config.velocity_model;
        for particle in &mut self.particles {
            particle.advance(&bounds, model);
        }
        self.rebuild_edges();
        self.rotation_y += self.config.rotation_per_frame;
        self.frame += 1;
    }

    fn rebuild_edges(&mut self) {
        if self.particles.len() > self.config.bucketed_scan_above {
            edge::connect_bucketed(&self.particles, self.config.threshold, &mut self.edges);
        } else {
            edge::connect_pairwise(&self.particles, self.config.threshold, &mut self.edges);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn rotation_y(&self) -> f64 {
        self.rotation_y
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    // xyz per particle, for the point buffer
    pub fn write_point_vertices(&self, out: &mut Vec<f32>) {
        out.clear();
        out.reserve(self.particles.len() * 3);
        for p in &self.particles {
            out.extend(p.pos.iter().map(|c| *c as f32));
        }
    }

    // Two xyz endpoints per edge, for drawing with LINES
    pub fn write_line_vertices(&self, out: &mut Vec<f32>) {
        out.clear();
        out.reserve(self.edges.len() * 6);
        for e in &self.edges {
            let a = &self.particles[e.a].pos;
            let b = &self.particles[e.b].pos;
            out.extend(a.iter().chain(b.iter()).map(|c| *c as f32));
        }
    }
}
