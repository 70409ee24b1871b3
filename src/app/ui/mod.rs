mod controls;
mod stats;

pub(in crate::app) use stats::FrameStats;
