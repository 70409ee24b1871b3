use eframe::egui::{self, Color32, Context, Pos2, TouchId};
use tracing::error;

use crate::config::{ConfigError, ViewConfig};
use crate::input::{InputAdapter, InputEvent, SurfaceError, Viewport};
use crate::plexus::{Plexus, SceneCamera};
use crate::skills::{GraphThresholds, Pull, SkillGraph};
use crate::style::{FrameStyle, Theme};

mod graph;
mod render_utils;
mod scene;
mod ui;

use graph::interaction::collect_window_inputs;
use ui::FrameStats;

pub struct PlexusApp {
    state: AppState,
}

enum AppState {
    Ready(Box<ViewModel>),
    Halted(String),
}

struct ViewModel {
    plexus: Plexus,
    camera: SceneCamera,
    scene_input: InputAdapter,
    skills: SkillGraph,
    graph_input: InputAdapter,
    graph_layout: Vec<Pos2>,
    thresholds: GraphThresholds,
    pull: Pull,
    theme: Theme,
    accent: Color32,
    touches: Vec<(TouchId, Pos2)>,
    show_graph: bool,
    tilt_enabled: bool,
    tilt_gamma: f32,
    tilt_beta: f32,
    show_stats: bool,
    stats_show_fps: bool,
    stats_show_frame_time: bool,
    stats_show_links: bool,
    frame_stats: FrameStats,
    link_count: usize,
    highlighted_links: usize,
    focused_nodes: usize,
}

impl PlexusApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: ViewConfig, skills: SkillGraph) -> Self {
        Self {
            state: AppState::start(cc.gl.as_ref(), &config, skills),
        }
    }
}

impl AppState {
    fn start<G>(gl: Option<&G>, config: &ViewConfig, skills: SkillGraph) -> Self {
        if gl.is_none() {
            return Self::halt(SurfaceError::Unavailable(
                "no OpenGL context was created".to_owned(),
            ));
        }

        match ViewModel::new(config, skills) {
            Ok(model) => Self::Ready(Box::new(model)),
            Err(error) => Self::halt(error),
        }
    }

    fn halt(reason: impl std::fmt::Display) -> Self {
        error!(%reason, "rendering halted");
        Self::Halted(reason.to_string())
    }
}

impl eframe::App for PlexusApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        match &mut self.state {
            AppState::Halted(reason) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.heading("Rendering halted");
                    ui.add_space(6.0);
                    ui.label(reason.as_str());
                });
            }
            AppState::Ready(model) => {
                model.show(ctx);
                ctx.request_repaint();
            }
        }
    }
}

impl ViewModel {
    fn new(config: &ViewConfig, skills: SkillGraph) -> Result<Self, ConfigError> {
        let accent = config.style.accent_color()?;

        Ok(Self {
            plexus: Plexus::new(&config.plexus),
            camera: SceneCamera::new(&config.camera),
            scene_input: InputAdapter::new(Viewport::default()),
            skills,
            graph_input: InputAdapter::new(Viewport::default()),
            graph_layout: Vec::new(),
            thresholds: GraphThresholds::from(&config.graph),
            pull: Pull::from(&config.graph),
            theme: config.style.theme,
            accent,
            touches: Vec::new(),
            show_graph: true,
            tilt_enabled: false,
            tilt_gamma: 0.0,
            tilt_beta: 45.0,
            show_stats: true,
            stats_show_fps: true,
            stats_show_frame_time: true,
            stats_show_links: true,
            frame_stats: FrameStats::default(),
            link_count: 0,
            highlighted_links: 0,
            focused_nodes: 0,
        })
    }

    fn show(&mut self, ctx: &Context) {
        self.record_frame(ctx);

        let events = ctx.input(|input| input.events.clone());
        let window_inputs = collect_window_inputs(&events, &mut self.touches);

        let mut tilt = None;
        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| tilt = self.draw_header(ui));

        if let Some(event) = tilt {
            self.scene_input.apply(event.clone());
            self.graph_input.apply(event);
        }

        let style = FrameStyle::new(self.theme, self.accent);

        if self.show_graph {
            egui::SidePanel::right("skill_graph")
                .resizable(true)
                .default_width(440.0)
                .show(ctx, |ui| self.draw_skill_graph(ui, &window_inputs, &style));
        } else {
            self.graph_input.apply(InputEvent::PointerLeave);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| self.draw_scene(ui, &window_inputs, &style));
    }
}

#[cfg(test)]
mod tests {
    use crate::skills::default_skill_nodes;

    use super::*;

    fn skills() -> SkillGraph {
        SkillGraph::new(default_skill_nodes())
    }

    #[test]
    fn missing_gl_context_halts_before_any_frame() {
        let state = AppState::start(None::<&()>, &ViewConfig::default(), skills());

        let AppState::Halted(reason) = state else {
            panic!("expected the app to halt without a GL context");
        };
        assert!(reason.contains("render context unavailable"));
    }

    #[test]
    fn live_context_starts_a_fresh_plexus() {
        let state = AppState::start(Some(&()), &ViewConfig::default(), skills());

        let AppState::Ready(model) = state else {
            panic!("expected a ready view model");
        };
        assert_eq!(model.plexus.frame(), 0);
        assert!(model.plexus.edges().is_empty());
        assert_eq!(model.skills.len(), 15);
    }

    #[test]
    fn bad_accent_halts_instead_of_drawing() {
        let mut config = ViewConfig::default();
        config.style.accent = "teal".to_owned();

        let state = AppState::start(Some(&()), &config, skills());
        assert!(matches!(state, AppState::Halted(reason) if reason.contains("teal")));
    }
}
