use super::surface::Point;
use serde::Serialize;
use std::f64::consts::TAU;

/// Number of concentric grid rings (20% steps).
pub const GRID_RINGS: u32 = 5;

/// Distance between the outer ring and the label anchors, in pixels.
pub const LABEL_OFFSET: f64 = 20.0;

/// Share of the smaller surface dimension used as chart radius; the rest
/// is margin for labels.
pub const RADIUS_DIVISOR: f64 = 3.0;

/// Placement of one entry around the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Axis {
    pub angle: f64,
    pub spoke_end: Point,
    pub score_point: Point,
    pub label_anchor: Point,
}

/// Pixel layout of a radar chart for a given surface size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarGeometry {
    pub center: Point,
    pub radius: f64,
    /// `2π / n`, or `0.0` when there are no entries.
    pub angle_step: f64,
    pub axes: Vec<Axis>,
}

impl RadarGeometry {
    /// Lays out `scores` (one per spoke, in order) on a `width` × `height`
    /// surface. Returns `None` when either dimension is zero.
    ///
    /// Scores above 100 are clamped so no point lands outside the chart.
    pub fn compute(scores: &[u8], width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }

        let width = f64::from(width);
        let height = f64::from(height);
        let center = Point::new(width / 2.0, height / 2.0);
        let radius = width.min(height) / RADIUS_DIVISOR;

        if scores.is_empty() {
            return Some(Self {
                center,
                radius,
                angle_step: 0.0,
                axes: Vec::new(),
            });
        }

        #[allow(clippy::cast_precision_loss)]
        let angle_step = TAU / scores.len() as f64;

        let axes = scores
            .iter()
            .enumerate()
            .map(|(index, score)| {
                #[allow(clippy::cast_precision_loss)]
                let angle = index as f64 * angle_step;
                let level = f64::from((*score).min(100)) / 100.0;
                Axis {
                    angle,
                    spoke_end: center.offset_polar(angle, radius),
                    score_point: center.offset_polar(angle, radius * level),
                    label_anchor: center.offset_polar(angle, radius + LABEL_OFFSET),
                }
            })
            .collect();

        Some(Self {
            center,
            radius,
            angle_step,
            axes,
        })
    }

    pub fn grid_radii(&self) -> impl Iterator<Item = f64> + '_ {
        (1..=GRID_RINGS).map(|ring| self.radius * (f64::from(ring) / f64::from(GRID_RINGS)))
    }

    pub fn score_points(&self) -> Vec<Point> {
        self.axes.iter().map(|axis| axis.score_point).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(diff < 1e-9, "expected {expected}, got {actual}, diff {diff}");
    }

    #[test]
    fn two_entries_on_800_by_600() {
        let geometry = RadarGeometry::compute(&[90, 85], 800, 600).expect("non-zero surface");

        assert_close(geometry.center.x, 400.0);
        assert_close(geometry.center.y, 300.0);
        assert_close(geometry.radius, 200.0);
        assert_close(geometry.angle_step, PI);

        let first = geometry.axes[0].score_point;
        assert_close(first.x, 580.0);
        assert_close(first.y, 300.0);

        let second = geometry.axes[1].score_point;
        assert_close(second.x, 230.0);
        assert_close(second.y, 300.0);
    }

    #[test]
    fn angles_are_evenly_spaced_from_east() {
        for n in 1..=8_usize {
            let scores = vec![50; n];
            let geometry = RadarGeometry::compute(&scores, 300, 300).expect("non-zero surface");
            assert_eq!(geometry.axes.len(), n);
            for (index, axis) in geometry.axes.iter().enumerate() {
                #[allow(clippy::cast_precision_loss)]
                let expected = index as f64 * (2.0 * PI / n as f64);
                assert_close(axis.angle, expected);
                assert_close(axis.spoke_end.distance_to(geometry.center), geometry.radius);
            }
        }
    }

    #[test]
    fn label_anchor_sits_outside_the_ring() {
        let geometry = RadarGeometry::compute(&[10, 20, 30], 600, 900).expect("non-zero surface");
        assert_close(geometry.radius, 200.0);
        for axis in &geometry.axes {
            assert_close(axis.label_anchor.distance_to(geometry.center), 220.0);
        }
    }

    #[test]
    fn higher_score_lands_further_out() {
        let geometry = RadarGeometry::compute(&[40, 75, 10], 500, 400).expect("non-zero surface");
        let distances: Vec<f64> = geometry
            .axes
            .iter()
            .map(|axis| axis.score_point.distance_to(geometry.center))
            .collect();

        assert!(distances[2] < distances[0]);
        assert!(distances[0] < distances[1]);
    }

    #[test]
    fn zero_dimension_yields_no_geometry() {
        assert!(RadarGeometry::compute(&[50], 0, 0).is_none());
        assert!(RadarGeometry::compute(&[50], 100, 0).is_none());
        assert!(RadarGeometry::compute(&[50], 0, 100).is_none());
    }

    #[test]
    fn empty_scores_still_size_the_chart() {
        let geometry = RadarGeometry::compute(&[], 90, 90).expect("non-zero surface");
        assert!(geometry.axes.is_empty());
        assert_close(geometry.angle_step, 0.0);
        assert_close(geometry.radius, 30.0);

        let radii: Vec<f64> = geometry.grid_radii().collect();
        assert_eq!(radii.len(), 5);
        assert_close(radii[0], 6.0);
        assert_close(radii[4], 30.0);
    }

    #[test]
    fn out_of_range_score_is_clamped_to_the_rim() {
        let geometry = RadarGeometry::compute(&[250], 300, 300).expect("non-zero surface");
        let point = geometry.axes[0].score_point;
        assert_close(point.distance_to(geometry.center), geometry.radius);
    }
}
