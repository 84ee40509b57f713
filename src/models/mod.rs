mod config;
mod pairs;
mod reference;

pub use config::AppConfig;
pub use pairs::{CuratedPair, CURATED_PAIRS};
pub use reference::{CommandCategory, PlotCommand, PLOT_REFERENCE};
