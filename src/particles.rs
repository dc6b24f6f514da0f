//! Short-lived sparks emitted when something is eaten.

use macroquad::prelude::{Color, Vec2, vec2};

use crate::rng::RandomSource;

pub const PARTICLE_LIFE: u32 = 30;
pub const GRAVITY: f32 = 0.1;
const MAX_SPEED: f32 = 3.0;
const MIN_SIZE: f32 = 2.0;
const MAX_SIZE: f32 = 5.0;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub color: Color,
    pub life: u32,
    pub max_life: u32,
    pub size: f32,
}

impl Particle {
    /// Advances one tick. Returns false once the particle has burnt out.
    pub fn update(&mut self) -> bool {
        self.position += self.velocity;
        self.velocity.y += GRAVITY;
        self.life = self.life.saturating_sub(1);
        self.life > 0
    }

    /// Remaining life as a fraction, for fading out.
    pub fn alpha(&self) -> f32 {
        self.life as f32 / self.max_life as f32
    }
}

#[derive(Debug, Default)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn emit<R: RandomSource + ?Sized>(
        &mut self,
        position: Vec2,
        color: Color,
        count: usize,
        rng: &mut R,
    ) {
        self.particles.reserve(count);
        for _ in 0..count {
            let velocity = vec2(
                rng.range_f32(-MAX_SPEED, MAX_SPEED),
                rng.range_f32(-MAX_SPEED, MAX_SPEED),
            );
            self.particles.push(Particle {
                position,
                velocity,
                color,
                life: PARTICLE_LIFE,
                max_life: PARTICLE_LIFE,
                size: rng.range_f32(MIN_SIZE, MAX_SIZE),
            });
        }
    }

    pub fn tick(&mut self) {
        self.particles.retain_mut(Particle::update);
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}
