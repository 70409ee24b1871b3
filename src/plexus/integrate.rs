use glam::Vec3;

use super::store::Particle;

// Positions are not clamped; an axis may overshoot by one step before it reflects.
pub fn integrate(particle: &mut Particle, boundary: f32) {
    particle.position += particle.velocity;

    let outside = particle.position.abs().cmpgt(Vec3::splat(boundary));
    if outside.any() {
        particle.velocity = Vec3::select(outside, -particle.velocity, particle.velocity);
    }
}

pub fn integrate_all(particles: &mut [Particle], boundary: f32) {
    for particle in particles {
        integrate(particle, boundary);
    }
}
