use crate::color::{ACCENTS, Rgb};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;
use std::time::Duration;

pub const PARTICLE_COUNT: usize = 50;
pub const MAX_SPEED: f64 = 0.002; // normalized units per reference frame
pub const MIN_RADIUS: f64 = 1.0;
pub const RADIUS_RANGE: f64 = 2.0;
pub const RECOLOR_PROBABILITY: f64 = 0.01;
pub const PARTICLE_ALPHA: f64 = 0.6;

/// Frame length the particle speeds are expressed against.
pub const REFERENCE_FRAME: Duration = Duration::from_micros(16_667);

/// A decorative dot. Position is normalized to the unit square.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: Rgb,
    pub speed: f64,
    pub angle: f64,
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            x: rng.random(),
            y: rng.random(),
            radius: MIN_RADIUS + rng.random::<f64>() * RADIUS_RANGE,
            color: random_accent(rng),
            speed: rng.random::<f64>() * MAX_SPEED,
            angle: rng.random::<f64>() * 2.0 * PI,
        }
    }

    /// Moves the particle `frames` reference frames along its heading, then
    /// bounces the heading off whichever edges it has crossed. The position
    /// itself is left outside the square until later steps bring it back.
    ///
    /// A heading that already points back inside is kept, so a particle
    /// pushed far out by a long frame keeps returning instead of flipping
    /// every step.
    pub fn advance(&mut self, frames: f64) {
        self.x += self.angle.cos() * self.speed * frames;
        self.y += self.angle.sin() * self.speed * frames;

        if heading_out(self.x, self.angle.cos()) {
            self.angle = PI - self.angle;
        }
        if heading_out(self.y, self.angle.sin()) {
            self.angle = -self.angle;
        }
    }
}

fn heading_out(position: f64, velocity: f64) -> bool {
    (position < 0.0 && velocity < 0.0) || (position > 1.0 && velocity > 0.0)
}

fn random_accent<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    ACCENTS[rng.random_range(0..ACCENTS.len())]
}

pub fn should_recolor<R: Rng + ?Sized>(rng: &mut R) -> bool {
    rng.random_bool(RECOLOR_PROBABILITY)
}

/// The backdrop simulation. The host calls [`ParticleField::tick`] once per
/// redraw and repaints unconditionally afterwards.
pub struct ParticleField<R = StdRng> {
    particles: Vec<Particle>,
    rng: R,
}

impl ParticleField<StdRng> {
    pub fn new(count: usize) -> Self {
        Self::with_rng(count, StdRng::from_os_rng())
    }

    pub fn seeded(count: usize, seed: u64) -> Self {
        Self::with_rng(count, StdRng::seed_from_u64(seed))
    }
}

impl Default for ParticleField<StdRng> {
    fn default() -> Self {
        Self::new(PARTICLE_COUNT)
    }
}

impl<R: Rng> ParticleField<R> {
    pub fn with_rng(count: usize, mut rng: R) -> Self {
        let particles = (0..count).map(|_| Particle::random(&mut rng)).collect();
        Self { particles, rng }
    }

    pub fn from_particles(particles: Vec<Particle>, rng: R) -> Self {
        Self { particles, rng }
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

    pub fn tick(&mut self, dt: Duration) {
        let frames = dt.as_secs_f64() / REFERENCE_FRAME.as_secs_f64();

        for particle in &mut self.particles {
            particle.advance(frames);
            if should_recolor(&mut self.rng) {
                particle.color = random_accent(&mut self.rng);
            }
        }
    }

    /// Grows or shrinks the batch, keeping the surviving particles in place.
    pub fn resize(&mut self, count: usize) {
        if count < self.particles.len() {
            self.particles.truncate(count);
        } else {
            let missing = count - self.particles.len();
            for _ in 0..missing {
                let particle = Particle::random(&mut self.rng);
                self.particles.push(particle);
            }
        }
    }
}
