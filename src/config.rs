//! Application-level configuration constants.

use crate::color::Rgb;
use crate::model::{Player, ReferenceRegion};

// Backend
pub const API_BASE_URL: &str = match option_env!("HEATMAP_API_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};
pub const AVG_ENDPOINT: &str = "/avg";

// Logging
pub const LOG_LEVEL: log::Level = log::Level::Info;

// Canvas size, margins included
pub const CANVAS_WIDTH: f64 = 450.0;
pub const CANVAS_HEIGHT: f64 = 500.0;
pub const MARGIN_TOP: f64 = 40.0;
pub const MARGIN_RIGHT: f64 = 45.0;
pub const MARGIN_BOTTOM: f64 = 0.0;
pub const MARGIN_LEFT: f64 = 45.0;

// Spatial domains (plate-relative feet)
pub const X_DOMAIN: (f64, f64) = (-1.5, 1.5);
pub const Z_DOMAIN: (f64, f64) = (0.3, 5.0);

// Expected backend resolution, used for cell sizing
pub const SAMPLE_STEPS: f64 = 50.0;

pub const STRIKE_ZONE: ReferenceRegion = ReferenceRegion {
    x_min: -0.71,
    x_max: 0.71,
    z_min: 1.5,
    z_max: 3.5,
};

// Legend
pub const LEGEND_WIDTH: f64 = 20.0;
pub const LEGEND_HEIGHT: f64 = 200.0;
pub const LEGEND_GAP: f64 = 30.0;
pub const LEGEND_TITLE: &str = "AVG";
pub const LEGEND_TICKS: usize = 5;

// Color ramp, low to high
pub const RAMP_COLORS: [Rgb; 5] = [Rgb::BLUE, Rgb::GREEN, Rgb::YELLOW, Rgb::ORANGE, Rgb::RED];

// Tooltip
pub const TOOLTIP_OFFSET: f64 = 10.0;
pub const TOOLTIP_PREFIX: &str = "AVG";

pub const PLAYERS: [Player; 3] = [
    Player::new("ohtani", "shohei"),
    Player::new("rizzo", "anthony"),
    Player::new("russell", "addison"),
];
