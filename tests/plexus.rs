use glam::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use plexus_view::config::{PlexusConfig, ViewConfig};
use plexus_view::plexus::{
    PairScan, Particle, ParticleStore, Plexus, integrate, near_pairs_all, near_pairs_grid,
};

fn still(positions: &[Vec3], boundary: f32) -> ParticleStore {
    ParticleStore::from_particles(
        positions.iter().copied().map(Particle::at_rest).collect(),
        boundary,
    )
}

#[test]
fn four_particles_produce_one_segment() {
    let store = still(
        &[
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(50.0, 0.0, 0.0),
            Vec3::new(500.0, 0.0, 0.0),
            Vec3::new(-500.0, 0.0, 0.0),
        ],
        600.0,
    );
    let mut plexus = Plexus::with_store(store, 200.0, PairScan::AllPairs);

    let edges = plexus.tick();
    assert_eq!(edges.pairs(), &[(0, 1)]);
    assert_eq!(
        edges.vertices(),
        &[Vec3::new(0.0, 0.0, 0.0), Vec3::new(50.0, 0.0, 0.0)]
    );
}

#[test]
fn pair_at_exactly_the_threshold_is_not_linked() {
    let store = still(&[Vec3::ZERO, Vec3::new(200.0, 0.0, 0.0)], 400.0);
    let mut plexus = Plexus::with_store(store, 200.0, PairScan::AllPairs);
    assert!(plexus.tick().is_empty());
}

#[test]
fn crossing_the_boundary_reflects_and_returns() {
    let mut particle = Particle::new(Vec3::new(399.0, 0.0, 0.0), Vec3::new(5.0, 0.0, 0.0));

    integrate(&mut particle, 400.0);
    assert_eq!(particle.position, Vec3::new(404.0, 0.0, 0.0));
    assert_eq!(particle.velocity, Vec3::new(-5.0, 0.0, 0.0));

    integrate(&mut particle, 400.0);
    assert_eq!(particle.position, Vec3::new(399.0, 0.0, 0.0));
    assert_eq!(particle.velocity, Vec3::new(-5.0, 0.0, 0.0));
}

#[test]
fn inward_particles_never_flip() {
    let mut rng = SmallRng::seed_from_u64(3);
    for _ in 0..200 {
        let position = Vec3::new(
            rng.gen_range(-390.0..390.0),
            rng.gen_range(-390.0..390.0),
            rng.gen_range(-390.0..390.0),
        );
        let velocity = Vec3::new(
            rng.gen_range(-5.0..5.0),
            rng.gen_range(-5.0..5.0),
            rng.gen_range(-5.0..5.0),
        );
        let mut particle = Particle::new(position, velocity);
        integrate(&mut particle, 400.0);
        assert_eq!(particle.velocity, velocity);
    }
}

#[test]
fn edges_do_not_accumulate_across_frames() {
    let config = PlexusConfig {
        particle_count: 80,
        seed: Some(21),
        max_speed: 4.0,
        ..PlexusConfig::default()
    };
    let mut plexus = Plexus::new(&config);

    const FRAMES: u64 = 60;
    for _ in 0..FRAMES {
        plexus.tick();
    }

    let positions = plexus.store().positions().collect::<Vec<_>>();
    let expected = near_pairs_all(&positions, plexus.link_threshold());
    assert_eq!(plexus.frame(), FRAMES);
    assert_eq!(plexus.edges().pairs(), expected.as_slice());
    assert_eq!(plexus.edges().vertices().len(), expected.len() * 2);
    assert!(plexus.store().particles().iter().all(|particle| {
        particle.position.abs().max_element() <= config.boundary + config.max_speed
    }));
}

#[test]
fn relinking_without_motion_is_idempotent() {
    let config = PlexusConfig {
        particle_count: 50,
        seed: Some(5),
        ..PlexusConfig::default()
    };
    let mut plexus = Plexus::new(&config);

    let first = plexus.relink().clone();
    let second = plexus.relink().clone();
    assert_eq!(first.pairs(), second.pairs());
    assert_eq!(first.vertices(), second.vertices());
    assert_eq!(second.frame(), first.frame() + 1);
}

#[test]
fn grid_scan_matches_all_pairs_in_a_running_plexus() {
    let config = PlexusConfig {
        particle_count: 150,
        seed: Some(9),
        max_speed: 3.0,
        ..PlexusConfig::default()
    };
    let mut all_pairs = Plexus::new(&config);
    let mut grid = Plexus::new(&PlexusConfig {
        scan: PairScan::Grid,
        ..config.clone()
    });

    for _ in 0..30 {
        let expected = all_pairs.tick().clone();
        let actual = grid.tick();
        assert_eq!(actual.pairs(), expected.pairs());
        assert_eq!(actual.vertices(), expected.vertices());
    }

    let positions = grid.store().positions().collect::<Vec<_>>();
    assert_eq!(
        near_pairs_grid(&positions, 200.0),
        near_pairs_all(&positions, 200.0)
    );
}

#[test]
fn stale_edges_release_their_storage() {
    let store = ParticleStore::from_particles(
        vec![
            Particle::new(Vec3::ZERO, Vec3::new(-50.0, 0.0, 0.0)),
            Particle::new(Vec3::new(10.0, 0.0, 0.0), Vec3::new(50.0, 0.0, 0.0)),
        ],
        1000.0,
    );
    let mut plexus = Plexus::with_store(store, 200.0, PairScan::AllPairs);

    assert_eq!(plexus.tick().segment_count(), 1);
    assert!(plexus.edges().retained_bytes() > 0);

    let edges = plexus.tick();
    assert!(edges.is_empty());
    assert_eq!(edges.retained_bytes(), 0);
}

#[test]
fn grid_scan_survives_a_vanishing_threshold() {
    let config = ViewConfig {
        plexus: PlexusConfig {
            particle_count: 40,
            link_threshold: 1e-8,
            scan: PairScan::Grid,
            seed: Some(2),
            ..PlexusConfig::default()
        },
        ..ViewConfig::default()
    };
    assert_eq!(config.validate(), Ok(()));

    let mut plexus = Plexus::new(&config.plexus);
    for _ in 0..3 {
        assert!(plexus.tick().is_empty());
    }
    assert_eq!(
        near_pairs_grid(&[Vec3::new(399.0, 0.0, 0.0), Vec3::new(-399.0, 0.0, 0.0)], 1e-8),
        Vec::new()
    );
}
