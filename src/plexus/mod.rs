mod camera;
mod grid;
mod integrate;
mod proximity;
mod store;
mod topology;

use glam::Vec3;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::{info, trace};

use crate::config::PlexusConfig;

pub use camera::{Projected, SceneCamera};
pub use integrate::{integrate, integrate_all};
pub use proximity::{PairScan, is_near, near_pairs_all, near_pairs_grid};
pub use store::{Particle, ParticleStore};
pub use topology::EdgeBuffer;

pub struct Plexus {
    store: ParticleStore,
    link_threshold: f32,
    scan: PairScan,
    positions: Vec<Vec3>,
    edges: EdgeBuffer,
    frame: u64,
}

impl Plexus {
    pub fn new(config: &PlexusConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        let store = ParticleStore::random(
            config.particle_count,
            config.boundary,
            config.max_speed,
            &mut rng,
        );

        info!(
            particles = store.len(),
            boundary = config.boundary,
            link_threshold = config.link_threshold,
            scan = config.scan.label(),
            "particle plexus initialised"
        );

        Self::with_store(store, config.link_threshold, config.scan)
    }

    pub fn with_store(store: ParticleStore, link_threshold: f32, scan: PairScan) -> Self {
        Self {
            positions: Vec::with_capacity(store.len()),
            store,
            link_threshold,
            scan,
            edges: EdgeBuffer::default(),
            frame: 0,
        }
    }

    pub fn store(&self) -> &ParticleStore {
        &self.store
    }

    pub fn edges(&self) -> &EdgeBuffer {
        &self.edges
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn link_threshold(&self) -> f32 {
        self.link_threshold
    }

    pub fn scan(&self) -> PairScan {
        self.scan
    }

    pub fn set_scan(&mut self, scan: PairScan) {
        self.scan = scan;
    }

    pub fn tick(&mut self) -> &EdgeBuffer {
        let boundary = self.store.boundary();
        integrate_all(self.store.particles_mut(), boundary);
        self.relink()
    }

    pub fn relink(&mut self) -> &EdgeBuffer {
        self.frame = self.frame.wrapping_add(1);

        self.positions.clear();
        self.positions.extend(self.store.positions());
        let pairs = self.scan.near_pairs(&self.positions, self.link_threshold);
        self.edges = EdgeBuffer::build(self.frame, pairs, &self.positions);

        trace!(
            frame = self.frame,
            segments = self.edges.segment_count(),
            "rebuilt plexus links"
        );
        &self.edges
    }
}
