use eframe::egui::{Pos2, Rect, Sense, Stroke, Ui, pos2};
use glam::{Vec2 as GlamVec2, Vec3};
use tracing::debug;

use crate::input::{InputEvent, Viewport};
use crate::plexus::{Projected, SceneCamera};
use crate::style::FrameStyle;

use super::ViewModel;
use super::graph::interaction::{OutsideRect, WindowInput, surface_event};
use super::render_utils::{circle_visible, draw_radial_background, segment_visible};

const LINK_WIDTH: f32 = 1.0;
const MIN_POINT_RADIUS: f32 = 0.6;
const MAX_POINT_RADIUS: f32 = 8.0;

struct SceneProjector<'a> {
    camera: &'a SceneCamera,
    view_projection: glam::Mat4,
    size: GlamVec2,
    origin: Pos2,
}

impl<'a> SceneProjector<'a> {
    fn new(camera: &'a SceneCamera, rect: Rect) -> Self {
        let size = GlamVec2::new(rect.width(), rect.height());
        Self {
            camera,
            view_projection: camera.view_projection(size.x / size.y),
            size,
            origin: rect.min,
        }
    }

    fn project(&self, point: Vec3) -> Option<(Pos2, Projected)> {
        let projected = self.camera.project(&self.view_projection, point, self.size)?;
        let screen = pos2(
            self.origin.x + projected.screen.x,
            self.origin.y + projected.screen.y,
        );
        Some((screen, projected))
    }
}

impl ViewModel {
    pub(in crate::app) fn draw_scene(
        &mut self,
        ui: &mut Ui,
        window_inputs: &[WindowInput],
        style: &FrameStyle,
    ) {
        let (rect, _response) = ui.allocate_exact_size(ui.available_size(), Sense::hover());
        let viewport = match Viewport::new(rect.width(), rect.height()) {
            Ok(viewport) => viewport,
            Err(error) => {
                debug!(%error, "skipping scene frame");
                return;
            }
        };

        if viewport != self.scene_input.viewport() {
            self.scene_input.apply(InputEvent::Resize {
                width: viewport.width(),
                height: viewport.height(),
            });
        }
        for input in window_inputs {
            self.scene_input
                .apply(surface_event(input, rect, OutsideRect::Clamp));
        }

        self.plexus.tick();

        let normalized = self
            .scene_input
            .normalized()
            .map(|point| GlamVec2::new(point.x, point.y));
        let target = self.camera.target_for(normalized);
        self.camera.ease_toward(target);

        let painter = ui.painter_at(rect);
        let (inner, outer) = style.background();
        draw_radial_background(&painter, rect, inner, outer);

        let projector = SceneProjector::new(&self.camera, rect);
        let link_stroke = Stroke::new(LINK_WIDTH, style.link_color());
        for [start, end] in self.plexus.edges().segments() {
            let (Some((a, _)), Some((b, _))) = (projector.project(start), projector.project(end))
            else {
                continue;
            };
            if segment_visible(rect, a, b) {
                painter.line_segment([a, b], link_stroke);
            }
        }

        let point_color = style.particle_color();
        for position in self.plexus.store().positions() {
            let Some((center, projected)) = projector.project(position) else {
                continue;
            };
            let radius = (projected.point_size * 0.5).clamp(MIN_POINT_RADIUS, MAX_POINT_RADIUS);
            if circle_visible(rect, center, radius) {
                painter.circle_filled(center, radius, point_color);
            }
        }

        self.link_count = self.plexus.edges().segment_count();
    }
}
