//! Data types shared by the loader and the renderer.

use serde::Deserialize;
use std::rc::Rc;

/// One cell of a probability grid.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SamplePoint {
    /// Horizontal plate position, roughly [-1.5, 1.5].
    pub x: f64,
    /// Height above ground, roughly [0.3, 5.0].
    pub z: f64,
    #[serde(rename = "avg")]
    pub value: f64,
}

impl SamplePoint {
    pub fn new(x: f64, z: f64, value: f64) -> Self {
        Self { x, z, value }
    }

    /// Join key for the cell drawn from this point.
    pub fn key(&self) -> String {
        format!("{}:{}", self.x, self.z)
    }
}

/// All sample points returned for one player.
///
/// Cloning is cheap; the points are shared and never mutated. A new fetch
/// produces a new `Grid` that replaces the old one wholesale.
#[derive(Debug, Clone, Default)]
pub struct Grid {
    points: Rc<Vec<SamplePoint>>,
}

/// Clones of one fetched grid compare equal without walking the points.
impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.points, &other.points) || self.points == other.points
    }
}

impl Grid {
    pub fn new(points: Vec<SamplePoint>) -> Self {
        Self {
            points: Rc::new(points),
        }
    }

    pub fn points(&self) -> &[SamplePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl From<Vec<SamplePoint>> for Grid {
    fn from(points: Vec<SamplePoint>) -> Self {
        Self::new(points)
    }
}

/// Body of a `GET /avg` response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvgResponse {
    pub prob_grid: Vec<SamplePoint>,
}

/// Fixed axis-aligned rectangle in sample coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceRegion {
    pub x_min: f64,
    pub x_max: f64,
    pub z_min: f64,
    pub z_max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Player {
    pub last: &'static str,
    pub first: &'static str,
}

impl Player {
    pub const fn new(last: &'static str, first: &'static str) -> Self {
        Self { last, first }
    }

    /// "Shohei Ohtani" style name for headings.
    pub fn display_name(&self) -> String {
        format!(
            "{} {}",
            crate::utils::capitalize(self.first),
            crate::utils::capitalize(self.last)
        )
    }
}
