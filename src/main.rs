use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use tracing::{error, info, warn};

use plexus_view::app::PlexusApp;
use plexus_view::config::ViewConfig;
use plexus_view::plexus::PairScan;
use plexus_view::skills::{SkillGraph, default_skill_nodes, load_skill_table};
use plexus_view::style::Theme;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// JSON view configuration; built-in defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
    /// JSON skill table; the built-in table is used when omitted.
    #[arg(long)]
    skills: Option<PathBuf>,
    #[arg(long)]
    particles: Option<usize>,
    /// Seed for particle placement; entropy is used when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Scan for near pairs with a uniform grid instead of all pairs.
    #[arg(long)]
    grid: bool,
    #[arg(long)]
    light: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = load_config(&args)?;
    let skills = load_skills(&args)?;

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1440.0, 920.0]),
        ..Default::default()
    };

    info!("starting plexus-view");
    eframe::run_native(
        "plexus-view",
        options,
        Box::new(move |cc| Ok(Box::new(PlexusApp::new(cc, config, skills)))),
    )
    .map_err(|error| {
        error!(%error, "rendering surface unavailable");
        anyhow!("failed to open the rendering surface: {error}")
    })
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn load_config(args: &Args) -> Result<ViewConfig> {
    let mut config = match &args.config {
        Some(path) => ViewConfig::load(path)?,
        None => ViewConfig::default(),
    };

    if let Some(particles) = args.particles {
        config.plexus.particle_count = particles;
    }
    if let Some(seed) = args.seed {
        config.plexus.seed = Some(seed);
    }
    if args.grid {
        config.plexus.scan = PairScan::Grid;
    }
    if args.light {
        config.style.theme = Theme::Light;
    }

    config.validate().context("invalid view configuration")?;
    Ok(config)
}

fn load_skills(args: &Args) -> Result<SkillGraph> {
    let nodes = match &args.skills {
        Some(path) => load_skill_table(path)?,
        None => default_skill_nodes(),
    };

    let graph = SkillGraph::new(nodes);
    if !graph.unresolved().is_empty() {
        warn!(
            count = graph.unresolved().len(),
            "skill table has links to unknown nodes"
        );
    }
    Ok(graph)
}
