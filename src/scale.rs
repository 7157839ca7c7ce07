//! Linear scales and tick generation for the heatmap axes and legend.

/// Continuous linear mapping from a data domain to a pixel range.
///
/// The range may be inverted (`range.0 > range.1`), which is how the
/// vertical axis puts larger values at the top of the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Map a domain value to the range. Values outside the domain are
    /// extrapolated, not clamped.
    ///
    /// A collapsed domain maps everything to the middle of the range.
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span == 0.0 {
            0.5
        } else if span.is_finite() {
            (value - d0) / span
        } else {
            // halve first so domains spanning most of f64 don't overflow
            (value / 2.0 - d0 / 2.0) / (d1 / 2.0 - d0 / 2.0)
        };
        r0 + t * (r1 - r0)
    }

    /// Pixel distance covered by `delta` domain units.
    pub fn span_of(&self, delta: f64) -> f64 {
        (self.map(self.domain.0 + delta) - self.map(self.domain.0)).abs()
    }

    /// Roughly `count` evenly spaced, human-friendly values inside the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, count)
    }
}

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Returns `(first, last, increment)` as integer tick indices. A negative
/// increment means ticks are `i / -increment`, which keeps fractional steps
/// exact.
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = stop / count - start / count;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    if power < 0.0 {
        let inc = 10f64.powf(-power) / factor;
        let mut i1 = (start * inc).round();
        let mut i2 = (stop * inc).round();
        if i1 / inc < start {
            i1 += 1.0;
        }
        if i2 / inc > stop {
            i2 -= 1.0;
        }
        (i1, i2, -inc)
    } else {
        let inc = 10f64.powf(power) * factor;
        let mut i1 = (start / inc).round();
        let mut i2 = (stop / inc).round();
        if i1 * inc < start {
            i1 += 1.0;
        }
        if i2 * inc > stop {
            i2 -= 1.0;
        }
        (i1, i2, inc)
    }
}

/// Nice tick values between `start` and `stop` (inclusive), ascending when
/// `start <= stop` and descending otherwise.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let (i1, i2, inc) = tick_spec(lo, hi, count as f64);
    if i2 < i1 {
        return Vec::new();
    }

    let n = (i2 - i1) as usize + 1;
    let mut out: Vec<f64> = (0..n)
        .map(|k| {
            let i = i1 + k as f64;
            if inc < 0.0 {
                i / -inc
            } else {
                i * inc
            }
        })
        .collect();
    if reverse {
        out.reverse();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_endpoints_and_midpoint() {
        let x = LinearScale::new((-1.5, 1.5), (0.0, 360.0));
        assert_eq!(x.map(-1.5), 0.0);
        assert_eq!(x.map(1.5), 360.0);
        assert_eq!(x.map(0.0), 180.0);
    }

    #[test]
    fn inverted_range_puts_high_values_on_top() {
        let z = LinearScale::new((0.3, 5.0), (460.0, 0.0));
        assert!((z.map(0.3) - 460.0).abs() < 1e-9);
        assert!(z.map(5.0).abs() < 1e-9);
        assert!(z.map(3.0) < z.map(2.0));
    }

    #[test]
    fn collapsed_domain_maps_to_range_middle() {
        let s = LinearScale::new((0.25, 0.25), (240.0, 40.0));
        assert_eq!(s.map(0.25), 140.0);
        assert_eq!(s.map(10.0), 140.0);
    }

    #[test]
    fn span_of_ignores_direction() {
        let z = LinearScale::new((0.3, 5.0), (460.0, 0.0));
        assert!((z.span_of(4.7 / 50.0) - 9.2).abs() < 1e-9);
    }

    #[test]
    fn ticks_use_nice_steps() {
        let t = ticks(0.2, 0.4, 5);
        let expected = [0.2, 0.25, 0.3, 0.35, 0.4];
        assert_eq!(t.len(), expected.len());
        for (a, b) in t.iter().zip(expected) {
            assert!((a - b).abs() < 1e-12, "{a} != {b}");
        }
    }

    #[test]
    fn ticks_skip_values_outside_domain() {
        let t = ticks(0.213, 0.387, 5);
        assert!(t.iter().all(|v| (0.213..=0.387).contains(v)));
        assert_eq!(t.len(), 3); // 0.25, 0.30, 0.35
    }

    #[test]
    fn ticks_for_integer_domain() {
        assert_eq!(ticks(0.0, 10.0, 5), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    }

    #[test]
    fn huge_domains_do_not_overflow() {
        let t = ticks(-f64::MAX, f64::MAX, 5);
        assert_eq!(t.len(), 3);
        assert!(t.iter().all(|v| v.is_finite()));
        assert_eq!(t[1], 0.0);

        let s = LinearScale::new((-f64::MAX, f64::MAX), (240.0, 40.0));
        assert_eq!(s.map(0.0), 140.0);
        assert_eq!(s.map(f64::MAX), 40.0);
    }

    #[test]
    fn ticks_degenerate_and_reversed() {
        assert_eq!(ticks(0.3, 0.3, 5), vec![0.3]);
        assert!(ticks(0.0, 1.0, 0).is_empty());
        assert!(ticks(f64::NAN, 1.0, 5).is_empty());
        assert_eq!(ticks(10.0, 0.0, 5), vec![10.0, 8.0, 6.0, 4.0, 2.0, 0.0]);
    }
}
