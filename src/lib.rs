//! Strike-zone batting-average heatmaps.
//!
//! The library half holds everything that does not need a browser: the
//! wire model, scales, the color ramp, scene building for the heatmap and
//! the hover-label state. `loader` is the only module that talks to the
//! network.

pub mod color;
pub mod config;
pub mod error;
pub mod heatmap;
pub mod loader;
pub mod model;
pub mod scale;
pub mod tooltip;
pub mod utils;

pub use color::{ColorRamp, Rgb};
pub use error::HeatmapError;
pub use heatmap::{Cell, HeatmapCanvas, HeatmapScene, Layout, Legend, Rect};
pub use loader::load_grid;
pub use model::{Grid, Player, ReferenceRegion, SamplePoint};
pub use tooltip::{Tooltip, TooltipAction};
