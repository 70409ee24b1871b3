use eframe::egui::{Align2, FontId, Sense, Stroke, Ui, vec2};
use tracing::debug;

use crate::input::{InputEvent, Viewport};
use crate::skills::graph_frame;
use crate::style::FrameStyle;

use super::super::ViewModel;
use super::interaction::{OutsideRect, WindowInput, surface_event};

impl ViewModel {
    pub(in crate::app) fn draw_skill_graph(
        &mut self,
        ui: &mut Ui,
        window_inputs: &[WindowInput],
        style: &FrameStyle,
    ) {
        ui.heading("Skill graph");
        ui.add_space(4.0);

        let (rect, _response) = ui.allocate_exact_size(ui.available_size(), Sense::hover());
        let viewport = match Viewport::new(rect.width(), rect.height()) {
            Ok(viewport) => viewport,
            Err(error) => {
                debug!(%error, "skipping skill graph frame");
                return;
            }
        };

        if viewport != self.graph_input.viewport() {
            self.graph_input.apply(InputEvent::Resize {
                width: viewport.width(),
                height: viewport.height(),
            });
        }
        for input in window_inputs {
            self.graph_input
                .apply(surface_event(input, rect, OutsideRect::Leave));
        }

        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, style.background().1);

        let frame = graph_frame(
            &self.skills,
            self.graph_input.viewport(),
            self.graph_input.reference(),
            self.thresholds,
            self.pull,
            style,
            &mut self.graph_layout,
        );

        let origin = rect.min.to_vec2();
        for link in &frame.links {
            painter.line_segment(
                [link.from + origin, link.to + origin],
                Stroke::new(link.width, link.color),
            );
        }

        for node in &frame.nodes {
            let center = node.center + origin;
            painter.circle_filled(center, node.radius, node.fill);

            let label_pos = node.label_pos + origin;
            let font = FontId::proportional(node.label_size);
            painter.text(
                label_pos,
                Align2::CENTER_BOTTOM,
                node.label,
                font.clone(),
                node.label_color,
            );
            if node.bold {
                painter.text(
                    label_pos + vec2(0.6, 0.0),
                    Align2::CENTER_BOTTOM,
                    node.label,
                    font,
                    node.label_color,
                );
            }
        }

        self.highlighted_links = frame.highlighted_links();
        self.focused_nodes = frame.focused_nodes();
    }
}
