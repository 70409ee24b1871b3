use eframe::egui::{Pos2, Vec2, pos2, vec2};
use thiserror::Error;
use tracing::{debug, warn};

const ORIENTATION_RANGE: f32 = 20.0;
const ORIENTATION_BETA_REST: f32 = 45.0;

#[derive(Debug, Error, PartialEq)]
pub enum SurfaceError {
    #[error("surface dimensions {width}x{height} are not drawable")]
    Degenerate { width: f32, height: f32 },
    #[error("render context unavailable: {0}")]
    Unavailable(String),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    width: f32,
    height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Result<Self, SurfaceError> {
        if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
            Ok(Self { width, height })
        } else {
            Err(SurfaceError::Degenerate { width, height })
        }
    }

    pub fn width(self) -> f32 {
        self.width
    }

    pub fn height(self) -> f32 {
        self.height
    }

    pub fn size(self) -> Vec2 {
        vec2(self.width, self.height)
    }

    pub fn percent_to_pixels(self, x_percent: f32, y_percent: f32) -> Pos2 {
        pos2(
            x_percent * self.width / 100.0,
            y_percent * self.height / 100.0,
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReferencePoint {
    pos: Pos2,
}

impl ReferencePoint {
    pub const FAR: Self = Self {
        pos: pos2(-1000.0, -1000.0),
    };

    pub fn at(pos: Pos2) -> Self {
        if pos.x.is_finite() && pos.y.is_finite() {
            Self { pos }
        } else {
            Self::FAR
        }
    }

    pub fn pos(self) -> Pos2 {
        self.pos
    }

    pub fn is_far(self) -> bool {
        self == Self::FAR
    }

    pub fn distance_to(self, point: Pos2) -> f32 {
        let distance = self.pos.distance(point);
        if distance.is_finite() {
            distance
        } else {
            f32::INFINITY
        }
    }
}

impl Default for ReferencePoint {
    fn default() -> Self {
        Self::FAR
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    PointerMove(Pos2),
    Touch(Vec<Pos2>),
    Orientation { gamma: f32, beta: f32 },
    PointerLeave,
    Resize { width: f32, height: f32 },
}

#[derive(Clone, Debug)]
pub struct InputAdapter {
    viewport: Viewport,
    reference: ReferencePoint,
}

impl InputAdapter {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            reference: ReferencePoint::FAR,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn reference(&self) -> ReferencePoint {
        self.reference
    }

    pub fn apply(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::PointerMove(pos) => self.set_reference(pos),
            InputEvent::Touch(touches) => match touches.first() {
                Some(&first) => self.set_reference(first),
                None => self.reset(),
            },
            InputEvent::Orientation { gamma, beta } => {
                let Some(normalized) = orientation_to_normalized(gamma, beta) else {
                    debug!(gamma, beta, "ignoring non-finite orientation reading");
                    return self.reset();
                };
                let pos = self.normalized_to_pixels(normalized);
                self.set_reference(pos)
            }
            InputEvent::PointerLeave => self.reset(),
            InputEvent::Resize { width, height } => match Viewport::new(width, height) {
                Ok(viewport) if viewport != self.viewport => {
                    debug!(width, height, "viewport resized");
                    self.viewport = viewport;
                    true
                }
                Ok(_) => false,
                Err(error) => {
                    warn!(%error, "ignoring resize");
                    false
                }
            },
        }
    }

    pub fn normalized(&self) -> Option<Vec2> {
        if self.reference.is_far() {
            return None;
        }

        let pos = self.reference.pos();
        Some(vec2(
            (pos.x / self.viewport.width) * 2.0 - 1.0,
            -((pos.y / self.viewport.height) * 2.0 - 1.0),
        ))
    }

    fn normalized_to_pixels(&self, normalized: Vec2) -> Pos2 {
        pos2(
            (normalized.x + 1.0) * 0.5 * self.viewport.width,
            (1.0 - normalized.y) * 0.5 * self.viewport.height,
        )
    }

    fn set_reference(&mut self, pos: Pos2) -> bool {
        if !pos.x.is_finite() || !pos.y.is_finite() {
            debug!(?pos, "non-finite pointer position treated as away");
        }
        let next = ReferencePoint::at(pos);
        let changed = next != self.reference;
        self.reference = next;
        changed
    }

    fn reset(&mut self) -> bool {
        let changed = !self.reference.is_far();
        self.reference = ReferencePoint::FAR;
        changed
    }
}

pub fn orientation_to_normalized(gamma: f32, beta: f32) -> Option<Vec2> {
    if !gamma.is_finite() || !beta.is_finite() {
        return None;
    }

    let x = gamma.clamp(-ORIENTATION_RANGE, ORIENTATION_RANGE);
    let y = (beta - ORIENTATION_BETA_REST).clamp(-ORIENTATION_RANGE, ORIENTATION_RANGE);
    Some(vec2(x / ORIENTATION_RANGE, -y / ORIENTATION_RANGE))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adapter() -> InputAdapter {
        InputAdapter::new(Viewport::new(1000.0, 800.0).expect("valid viewport"))
    }

    #[test]
    fn starts_far_away() {
        let adapter = adapter();
        assert!(adapter.reference().is_far());
        assert_eq!(adapter.normalized(), None);
    }

    #[test]
    fn degenerate_viewport_is_rejected() {
        assert!(Viewport::new(0.0, 10.0).is_err());
        assert!(Viewport::new(f32::NAN, 10.0).is_err());
        assert!(Viewport::new(10.0, f32::INFINITY).is_err());
    }

    #[test]
    fn orientation_is_clamped() {
        assert_eq!(orientation_to_normalized(90.0, 45.0), Some(vec2(1.0, 0.0)));
        assert_eq!(orientation_to_normalized(-5.0, 0.0), Some(vec2(-0.25, 1.0)));
        assert_eq!(orientation_to_normalized(f32::NAN, 0.0), None);
    }

    #[test]
    fn pointer_center_normalizes_to_origin() {
        let mut adapter = adapter();
        assert!(adapter.apply(InputEvent::PointerMove(pos2(500.0, 400.0))));
        assert_eq!(adapter.normalized(), Some(vec2(0.0, 0.0)));
    }
}
