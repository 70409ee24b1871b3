use eframe::egui::Color32;
use serde::Deserialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameStyle {
    pub theme: Theme,
    pub accent: Color32,
}

impl FrameStyle {
    pub fn new(theme: Theme, accent: Color32) -> Self {
        Self { theme, accent }
    }

    pub fn particle_color(&self) -> Color32 {
        match self.theme {
            Theme::Dark => with_opacity(Color32::WHITE, 0.9),
            Theme::Light => with_opacity(Color32::from_rgb(0x00, 0x66, 0xff), 0.3),
        }
    }

    pub fn link_color(&self) -> Color32 {
        match self.theme {
            Theme::Dark => with_opacity(Color32::WHITE, 0.15),
            Theme::Light => with_opacity(Color32::from_rgb(0x00, 0x66, 0xff), 0.15),
        }
    }

    pub fn background(&self) -> (Color32, Color32) {
        match self.theme {
            Theme::Dark => (
                Color32::from_rgb(0x0a, 0x15, 0x1a),
                Color32::from_rgb(0x05, 0x05, 0x05),
            ),
            Theme::Light => (
                Color32::from_rgb(0xff, 0xff, 0xff),
                Color32::from_rgb(0xe0, 0xe0, 0xe0),
            ),
        }
    }

    pub fn neutral(&self) -> Color32 {
        match self.theme {
            Theme::Dark => Color32::WHITE,
            Theme::Light => Color32::BLACK,
        }
    }

    pub fn text(&self) -> Color32 {
        self.neutral()
    }
}

pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
    let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

pub fn parse_hex_color(value: &str) -> Option<Color32> {
    let hex = value.trim().strip_prefix('#')?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |offset: usize| u8::from_str_radix(&hex[offset..offset + 2], 16).ok();
    Some(Color32::from_rgb(channel(0)?, channel(2)?, channel(4)?))
}
