use eframe::egui::{Color32, Painter, Pos2, Rect};

const BACKGROUND_BANDS: usize = 28;

pub(super) fn draw_radial_background(painter: &Painter, rect: Rect, inner: Color32, outer: Color32) {
    painter.rect_filled(rect, 0.0, outer);

    let max_radius = rect.size().length() * 0.5;
    for band in 0..BACKGROUND_BANDS {
        let t = band as f32 / BACKGROUND_BANDS as f32;
        painter.circle_filled(
            rect.center(),
            max_radius * (1.0 - t),
            outer.lerp_to_gamma(inner, t),
        );
    }
}

pub(super) fn circle_visible(rect: Rect, center: Pos2, radius: f32) -> bool {
    rect.expand(radius).contains(center)
}

pub(super) fn segment_visible(rect: Rect, start: Pos2, end: Pos2) -> bool {
    Rect::from_two_pos(start, end).intersects(rect)
}
