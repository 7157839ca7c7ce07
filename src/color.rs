//! RGB colors and the five-stop value ramp.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
    pub const GREEN: Rgb = Rgb::new(0, 128, 0);
    pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
    pub const ORANGE: Rgb = Rgb::new(255, 165, 0);
    pub const RED: Rgb = Rgb::new(255, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channel-wise linear blend, `t = 0` is `self` and `t = 1` is `other`.
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

/// CSS functional notation, usable directly as an SVG `fill`.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Piecewise-linear mapping from a value to a color.
///
/// Stops sit at the minimum, the quartiles of the span and the maximum, so
/// the middle color always marks the midpoint of the data. Values outside
/// `[min, max]` are clamped to the end colors.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorRamp {
    stops: [(f64, Rgb); 5],
}

impl ColorRamp {
    pub fn new(min: f64, max: f64, colors: [Rgb; 5]) -> Self {
        // Blended rather than `min + span * t` so extreme finite bounds
        // can't overflow the span.
        let at = |t: f64| min * (1.0 - t) + max * t;
        let anchor = [min, at(0.25), at(0.5), at(0.75), max];
        Self {
            stops: std::array::from_fn(|i| (anchor[i], colors[i])),
        }
    }

    pub fn stops(&self) -> &[(f64, Rgb); 5] {
        &self.stops
    }

    pub fn min(&self) -> f64 {
        self.stops[0].0
    }

    pub fn max(&self) -> f64 {
        self.stops[4].0
    }

    /// True when every stop sits on the same value.
    pub fn is_degenerate(&self) -> bool {
        self.max() == self.min()
    }

    /// Where `value` falls along the ramp, from `0.0` (first color) to
    /// `4.0` (last color). Non-decreasing in `value`.
    ///
    /// A degenerate ramp puts every value on the middle stop.
    pub fn position(&self, value: f64) -> f64 {
        let last = (self.stops.len() - 1) as f64;
        if self.is_degenerate() {
            return last / 2.0;
        }
        if value <= self.min() {
            return 0.0;
        }
        if value >= self.max() {
            return last;
        }
        for (i, pair) in self.stops.windows(2).enumerate() {
            let (lo, hi) = (pair[0].0, pair[1].0);
            if value <= hi {
                let t = if hi > lo { (value - lo) / (hi - lo) } else { 1.0 };
                return i as f64 + t;
            }
        }
        last
    }

    pub fn color(&self, value: f64) -> Rgb {
        let position = self.position(value);
        let i = (position.floor() as usize).min(self.stops.len() - 2);
        let t = position - i as f64;
        self.stops[i].1.lerp(self.stops[i + 1].1, t)
    }

    /// Gradient stops for the legend bar: offset percentage and color,
    /// bottom (minimum) first.
    pub fn gradient(&self) -> Vec<(f64, Rgb)> {
        let last = (self.stops.len() - 1) as f64;
        self.stops
            .iter()
            .enumerate()
            .map(|(i, &(value, _))| (i as f64 / last * 100.0, self.color(value)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RAMP_COLORS;

    fn ramp(min: f64, max: f64) -> ColorRamp {
        ColorRamp::new(min, max, RAMP_COLORS)
    }

    #[test]
    fn anchors_at_quartiles() {
        let r = ramp(0.2, 0.4);
        let values: Vec<f64> = r.stops().iter().map(|s| s.0).collect();
        let expected = [0.2, 0.25, 0.3, 0.35, 0.4];
        for (a, b) in values.iter().zip(expected) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn stop_values_get_stop_colors() {
        let r = ramp(0.2, 0.4);
        assert_eq!(r.color(0.2), Rgb::BLUE);
        assert_eq!(r.color(0.3), Rgb::YELLOW);
        assert_eq!(r.color(0.4), Rgb::RED);
    }

    #[test]
    fn blends_between_stops() {
        let r = ramp(0.0, 1.0);
        // halfway between yellow (0.5) and orange (0.75)
        assert_eq!(r.color(0.625), Rgb::new(255, 210, 0));
    }

    #[test]
    fn clamps_outside_domain() {
        let r = ramp(0.2, 0.4);
        assert_eq!(r.color(-3.0), Rgb::BLUE);
        assert_eq!(r.color(9.0), Rgb::RED);
    }

    #[test]
    fn position_is_monotonic() {
        let r = ramp(0.113, 0.487);
        let mut previous = f64::NEG_INFINITY;
        for i in 0..=1000 {
            let v = 0.113 + (0.487 - 0.113) * i as f64 / 1000.0;
            let p = r.position(v);
            assert!(p >= previous, "position dropped at {v}");
            previous = p;
        }
        assert_eq!(r.position(0.487), 4.0);
    }

    #[test]
    fn degenerate_ramp_uses_one_color() {
        let r = ramp(0.25, 0.25);
        assert!(r.is_degenerate());
        assert_eq!(r.color(0.25), Rgb::YELLOW);
        assert_eq!(r.color(0.0), r.color(1.0));
        assert!(r.gradient().iter().all(|&(_, c)| c == Rgb::YELLOW));
    }

    #[test]
    fn extreme_bounds_stay_finite() {
        let r = ramp(-f64::MAX, f64::MAX);
        assert!(r.stops().iter().all(|s| s.0.is_finite()));
        assert_eq!(r.stops()[2].0, 0.0);
        assert_eq!(r.color(0.0), Rgb::YELLOW);
        assert_eq!(r.color(-f64::MAX), Rgb::BLUE);
        assert_eq!(r.color(f64::MAX), Rgb::RED);
    }

    #[test]
    fn gradient_offsets() {
        let offsets: Vec<f64> = ramp(0.0, 1.0).gradient().iter().map(|g| g.0).collect();
        assert_eq!(offsets, vec![0.0, 25.0, 50.0, 75.0, 100.0]);
    }

    #[test]
    fn css_notation() {
        assert_eq!(Rgb::ORANGE.to_string(), "rgb(255, 165, 0)");
    }
}
