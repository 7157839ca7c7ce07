//! Grid renderer: turns a [`Grid`] into a drawable heatmap scene.
//!
//! The scene is plain data (rectangles, colors, tick labels) in canvas
//! units. The Yew view walks it to emit SVG, and tests inspect it directly.
//!
//! # Layout
//! The plot area is `canvas - margins` (360 x 460 by default) and is
//! anchored at the canvas origin. The margins leave room on the right for
//! the legend and on top for its title.

use crate::color::{ColorRamp, Rgb};
use crate::config::{
    CANVAS_HEIGHT, CANVAS_WIDTH, LEGEND_GAP, LEGEND_HEIGHT, LEGEND_TICKS, LEGEND_TITLE,
    LEGEND_WIDTH, MARGIN_BOTTOM, MARGIN_LEFT, MARGIN_RIGHT, MARGIN_TOP, RAMP_COLORS, SAMPLE_STEPS,
    STRIKE_ZONE, X_DOMAIN, Z_DOMAIN,
};
use crate::model::{Grid, ReferenceRegion, SamplePoint};
use crate::scale::LinearScale;
use crate::utils::format_avg;
use log::{debug, warn};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Size of one chart, margins included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            margin: Margin {
                top: MARGIN_TOP,
                right: MARGIN_RIGHT,
                bottom: MARGIN_BOTTOM,
                left: MARGIN_LEFT,
            },
        }
    }
}

impl Layout {
    pub fn plot_width(&self) -> f64 {
        self.width - self.margin.left - self.margin.right
    }

    pub fn plot_height(&self) -> f64 {
        self.height - self.margin.top - self.margin.bottom
    }
}

/// Axis-aligned rectangle in canvas units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Spatial mapping shared by every chart.
///
/// The domains are constants, not derived from data, so heatmaps for
/// different players line up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scales {
    pub x: LinearScale,
    pub z: LinearScale,
}

impl Scales {
    pub fn new(layout: &Layout) -> Self {
        Self {
            x: LinearScale::new(X_DOMAIN, (0.0, layout.plot_width())),
            z: LinearScale::new(Z_DOMAIN, (layout.plot_height(), 0.0)),
        }
    }

    /// Pixel position of a sample point.
    pub fn position(&self, x: f64, z: f64) -> (f64, f64) {
        (self.x.map(x), self.z.map(z))
    }

    /// Width and height of one cell: the pixel span of a single sampling
    /// step in each axis.
    ///
    /// This assumes the backend samples each domain in `SAMPLE_STEPS`
    /// steps; a grid with a different resolution will leave gaps or
    /// overlaps.
    pub fn cell_size(&self) -> (f64, f64) {
        let x_step = (X_DOMAIN.1 - X_DOMAIN.0) / SAMPLE_STEPS;
        let z_step = (Z_DOMAIN.1 - Z_DOMAIN.0) / SAMPLE_STEPS;
        (self.x.span_of(x_step), self.z.span_of(z_step))
    }

    /// Canvas rectangle covering a region given in sample coordinates.
    pub fn region(&self, region: &ReferenceRegion) -> Rect {
        let left = self.x.map(region.x_min);
        let right = self.x.map(region.x_max);
        let top = self.z.map(region.z_max);
        let bottom = self.z.map(region.z_min);
        Rect {
            x: left,
            y: top,
            width: right - left,
            height: bottom - top,
        }
    }
}

/// One filled heatmap cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub key: String,
    pub rect: Rect,
    pub fill: Rgb,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub y: f64,
    pub label: String,
}

/// Vertical color bar with its value axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub bar: Rect,
    /// Offset percentage (0 = bottom) and color.
    pub gradient: Vec<(f64, Rgb)>,
    pub domain: (f64, f64),
    pub ticks: Vec<Tick>,
    /// Horizontal position of the tick axis, on the right edge of the bar.
    pub axis_x: f64,
    pub title: &'static str,
    pub title_x: f64,
    pub title_y: f64,
}

impl Legend {
    fn new(layout: &Layout, ramp: &ColorRamp) -> Self {
        let bar = Rect {
            x: layout.plot_width() + LEGEND_GAP,
            y: layout.margin.top,
            width: LEGEND_WIDTH,
            height: LEGEND_HEIGHT,
        };
        let domain = (ramp.min(), ramp.max());
        let scale = LinearScale::new(domain, (bar.y + bar.height, bar.y));
        let ticks = scale
            .ticks(LEGEND_TICKS)
            .into_iter()
            .map(|value| Tick {
                value,
                y: scale.map(value),
                label: format_avg(value),
            })
            .collect();

        Self {
            bar,
            gradient: ramp.gradient(),
            domain,
            ticks,
            axis_x: bar.x + bar.width,
            title: LEGEND_TITLE,
            title_x: bar.x + bar.width / 2.0,
            title_y: bar.y - 10.0,
        }
    }
}

/// Everything drawn for one non-empty grid.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapScene {
    pub cells: Vec<Cell>,
    /// Strike-zone outline; never intercepts pointer events.
    pub overlay: Rect,
    pub legend: Legend,
    /// Frame around the whole canvas.
    pub border: Rect,
    pub ramp: ColorRamp,
}

impl HeatmapScene {
    /// Build the scene for `points`, or `None` when nothing is drawable.
    ///
    /// Points with a non-finite value are skipped. Points whose `(x, z)`
    /// key was already seen are dropped so every cell key is unique.
    pub fn build(layout: &Layout, points: &[SamplePoint]) -> Option<Self> {
        let mut seen = HashSet::with_capacity(points.len());
        let mut drawable = Vec::with_capacity(points.len());
        let mut skipped = 0usize;

        for point in points {
            if !point.value.is_finite() {
                skipped += 1;
                continue;
            }
            let key = point.key();
            if !seen.insert(key.clone()) {
                warn!("Duplicate sample at {}, keeping the first one", key);
                continue;
            }
            drawable.push((key, *point));
        }
        if skipped > 0 {
            warn!("Skipped {} samples without a finite value", skipped);
        }
        if drawable.is_empty() {
            return None;
        }

        let (min, max) = drawable
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (_, p)| {
                (lo.min(p.value), hi.max(p.value))
            });
        let ramp = ColorRamp::new(min, max, RAMP_COLORS);
        let scales = Scales::new(layout);
        let (width, height) = scales.cell_size();

        let cells: Vec<Cell> = drawable
            .into_iter()
            .map(|(key, p)| {
                let (x, y) = scales.position(p.x, p.z);
                Cell {
                    key,
                    rect: Rect {
                        x,
                        y,
                        width,
                        height,
                    },
                    fill: ramp.color(p.value),
                    value: p.value,
                }
            })
            .collect();

        debug!(
            "Built heatmap scene: {} cells, values {} to {}",
            cells.len(),
            format_avg(min),
            format_avg(max)
        );

        Some(Self {
            cells,
            overlay: scales.region(&STRIKE_ZONE),
            legend: Legend::new(layout, &ramp),
            border: Rect {
                x: 0.0,
                y: 0.0,
                width: layout.width,
                height: layout.height,
            },
            ramp,
        })
    }
}

/// Retained drawing surface for one chart.
///
/// [`render`](Self::render) is the only way content changes: it clears the
/// surface and redraws from the given grid.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HeatmapCanvas {
    layout: Layout,
    scene: Option<HeatmapScene>,
}

impl HeatmapCanvas {
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            scene: None,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn clear(&mut self) {
        self.scene = None;
    }

    /// Clear, then draw `grid` if it has anything drawable.
    pub fn render(&mut self, grid: Option<&Grid>) {
        self.clear();
        if let Some(grid) = grid.filter(|g| !g.is_empty()) {
            self.scene = HeatmapScene::build(&self.layout, grid.points());
        }
    }

    pub fn scene(&self) -> Option<&HeatmapScene> {
        self.scene.as_ref()
    }

    pub fn cells(&self) -> &[Cell] {
        self.scene
            .as_ref()
            .map(|s| s.cells.as_slice())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.scene.is_none()
    }
}
