use std::collections::VecDeque;

use eframe::egui::Context;

use super::super::ViewModel;

const STATS_WINDOW: usize = 120;

#[derive(Clone, Copy, Debug, PartialEq)]
struct FrameSample {
    seconds: f32,
    links: usize,
}

#[derive(Debug, Default)]
pub(in crate::app) struct FrameStats {
    samples: VecDeque<FrameSample>,
}

impl FrameStats {
    pub(in crate::app) fn record(&mut self, seconds: f32, links: usize) {
        if !(seconds.is_finite() && seconds > f32::EPSILON) {
            return;
        }
        if self.samples.len() == STATS_WINDOW {
            self.samples.pop_front();
        }
        self.samples.push_back(FrameSample { seconds, links });
    }

    fn latest_fps(&self) -> Option<f32> {
        self.samples.back().map(|sample| 1.0 / sample.seconds)
    }

    fn mean_frame_ms(&self) -> Option<f32> {
        let total: f32 = self.samples.iter().map(|sample| sample.seconds).sum();
        (!self.samples.is_empty()).then(|| total * 1000.0 / self.samples.len() as f32)
    }

    fn mean_links(&self) -> Option<f32> {
        let total: usize = self.samples.iter().map(|sample| sample.links).sum();
        (!self.samples.is_empty()).then(|| total as f32 / self.samples.len() as f32)
    }
}

impl ViewModel {
    pub(in crate::app) fn record_frame(&mut self, ctx: &Context) {
        let seconds = ctx.input(|input| input.stable_dt);
        self.frame_stats.record(seconds, self.link_count);
    }

    pub(in crate::app) fn stats_text(&self) -> String {
        let mut parts = vec![format!(
            "{} particles, {} links",
            self.plexus.store().len(),
            self.link_count
        )];

        if self.show_stats {
            let stats = &self.frame_stats;
            if self.stats_show_fps
                && let Some(fps) = stats.latest_fps()
            {
                parts.push(format!("{fps:.0} fps"));
            }
            if self.stats_show_frame_time
                && let Some(ms) = stats.mean_frame_ms()
            {
                parts.push(format!("{ms:.1} ms/frame"));
            }
            if self.stats_show_links
                && let Some(links) = stats.mean_links()
            {
                parts.push(format!("{links:.1} links/frame"));
            }
        }

        if self.show_graph {
            parts.push(format!(
                "{} focused, {} lit",
                self.focused_nodes, self.highlighted_links
            ));
        }

        parts.join(" | ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_keeps_only_recent_frames() {
        let mut stats = FrameStats::default();
        for links in 0..STATS_WINDOW + 10 {
            stats.record(0.02, links);
        }

        assert_eq!(stats.samples.len(), STATS_WINDOW);
        assert_eq!(stats.samples.front().map(|sample| sample.links), Some(10));
        assert_eq!(stats.latest_fps(), Some(1.0 / 0.02));
    }

    #[test]
    fn empty_or_zero_length_frames_report_nothing() {
        let mut stats = FrameStats::default();
        stats.record(0.0, 5);
        stats.record(f32::NAN, 5);

        assert_eq!(stats.latest_fps(), None);
        assert_eq!(stats.mean_frame_ms(), None);
        assert_eq!(stats.mean_links(), None);
    }

    #[test]
    fn link_average_tracks_the_plexus() {
        let mut stats = FrameStats::default();
        stats.record(0.016, 10);
        stats.record(0.016, 20);
        stats.record(0.016, 30);

        assert_eq!(stats.mean_links(), Some(20.0));
    }
}
