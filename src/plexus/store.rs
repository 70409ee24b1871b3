use glam::Vec3;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
}

impl Particle {
    pub fn new(position: Vec3, velocity: Vec3) -> Self {
        Self { position, velocity }
    }

    pub fn at_rest(position: Vec3) -> Self {
        Self::new(position, Vec3::ZERO)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleStore {
    particles: Vec<Particle>,
    boundary: f32,
}

impl ParticleStore {
    pub fn random<R: Rng + ?Sized>(count: usize, boundary: f32, max_speed: f32, rng: &mut R) -> Self {
        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            let position = Vec3::new(
                sample_symmetric(rng, boundary),
                sample_symmetric(rng, boundary),
                sample_symmetric(rng, boundary),
            );
            let velocity = Vec3::new(
                sample_symmetric(rng, max_speed),
                sample_symmetric(rng, max_speed),
                sample_symmetric(rng, max_speed),
            );
            particles.push(Particle::new(position, velocity));
        }

        Self {
            particles,
            boundary,
        }
    }

    pub fn from_particles(particles: Vec<Particle>, boundary: f32) -> Self {
        Self {
            particles,
            boundary,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn boundary(&self) -> f32 {
        self.boundary
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub(super) fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn positions(&self) -> impl ExactSizeIterator<Item = Vec3> + '_ {
        self.particles.iter().map(|particle| particle.position)
    }

    pub fn within_bounds(&self) -> bool {
        self.particles
            .iter()
            .all(|particle| particle.position.abs().max_element() <= self.boundary)
    }
}

fn sample_symmetric<R: Rng + ?Sized>(rng: &mut R, extent: f32) -> f32 {
    if extent > 0.0 {
        rng.gen_range(-extent..extent)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn random_store_starts_inside_the_box() {
        let mut rng = SmallRng::seed_from_u64(7);
        let store = ParticleStore::random(500, 400.0, 0.5, &mut rng);

        assert_eq!(store.len(), 500);
        assert!(store.within_bounds());
        assert!(
            store
                .particles()
                .iter()
                .all(|particle| particle.velocity.abs().max_element() <= 0.5)
        );
    }

    #[test]
    fn same_seed_reproduces_the_store() {
        let a = ParticleStore::random(32, 400.0, 0.5, &mut SmallRng::seed_from_u64(11));
        let b = ParticleStore::random(32, 400.0, 0.5, &mut SmallRng::seed_from_u64(11));
        assert_eq!(a, b);
    }

    #[test]
    fn entropy_seeded_runs_differ() {
        let a = ParticleStore::random(32, 400.0, 0.5, &mut SmallRng::from_entropy());
        let b = ParticleStore::random(32, 400.0, 0.5, &mut SmallRng::from_entropy());
        assert_ne!(a, b);
    }

    #[test]
    fn zero_speed_yields_resting_particles() {
        let store = ParticleStore::random(8, 10.0, 0.0, &mut SmallRng::seed_from_u64(1));
        assert!(
            store
                .particles()
                .iter()
                .all(|particle| particle.velocity == Vec3::ZERO)
        );
    }
}
