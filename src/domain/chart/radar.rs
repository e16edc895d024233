use std::f64::consts::{FRAC_PI_2, TAU};

/// Number of factor axes on the radar
pub const AXES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Pure geometry for the five-axis factor radar. Axes sit at 72° intervals
/// starting at the top (−90°); a score's vertex lies at (score/100)·radius
/// from center. Scores above 100 are not clamped and land outside the outer
/// ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarGeometry {
    pub size: f64,
    pub radius: f64,
    pub levels: usize,
}

impl Default for RadarGeometry {
    fn default() -> Self {
        Self { size: 400.0, radius: 140.0, levels: 5 }
    }
}

impl RadarGeometry {
    pub fn center(&self) -> Point {
        Point { x: self.size / 2.0, y: self.size / 2.0 }
    }

    fn angle(&self, axis: usize) -> f64 {
        axis as f64 * (TAU / AXES as f64) - FRAC_PI_2
    }

    /// Vertex for one axis; the score is a 0-100 value, total over all f64s
    pub fn vertex(&self, axis: usize, score: f64) -> Point {
        let angle = self.angle(axis);
        let r = (score / 100.0) * self.radius;
        let center = self.center();
        Point { x: center.x + r * angle.cos(), y: center.y + r * angle.sin() }
    }

    /// Outer end of an axis line
    pub fn axis_end(&self, axis: usize) -> Point {
        self.vertex(axis, 100.0)
    }

    /// Radius of grid ring `level` (0-based), from 1/levels to the full radius
    pub fn ring_radius(&self, level: usize) -> f64 {
        ((level + 1) as f64 / self.levels as f64) * self.radius
    }

    /// Score value labelled on grid ring `level`
    pub fn ring_value(&self, level: usize) -> f64 {
        ((level + 1) as f64 / self.levels as f64) * 100.0
    }

    /// Anchor point for the axis label, just outside the outer ring
    pub fn label_position(&self, axis: usize) -> Point {
        let angle = self.angle(axis);
        let label_radius = self.radius + 35.0;
        let center = self.center();
        Point {
            x: center.x + label_radius * angle.cos(),
            y: center.y + label_radius * angle.sin(),
        }
    }

    /// SVG text-anchor for the axis label, matching which side of the chart
    /// the axis leans toward
    pub fn label_anchor(&self, axis: usize) -> &'static str {
        let angle = self.angle(axis);
        if angle > FRAC_PI_2 || angle < -FRAC_PI_2 {
            "end"
        } else if angle == 0.0 {
            "middle"
        } else {
            "start"
        }
    }

    /// `points` attribute for the closed data polygon
    pub fn polygon_points(&self, scores: &[f64; AXES]) -> String {
        scores
            .iter()
            .enumerate()
            .map(|(axis, score)| {
                let p = self.vertex(axis, *score);
                format!("{},{}", p.x, p.y)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
