pub mod app;
pub mod config;
pub mod input;
pub mod plexus;
pub mod skills;
pub mod style;
