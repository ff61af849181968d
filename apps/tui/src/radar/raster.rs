//! Pixel coverage for filled shapes, for surfaces that can only plot points.

use super::surface::Point;

/// Centers of the pixels inside `polygon` (even-odd rule, sampled at pixel
/// centers). Fewer than three vertices enclose no area.
pub fn polygon_pixels(polygon: &[Point]) -> Vec<Point> {
    if polygon.len() < 3 {
        return Vec::new();
    }

    let (min_y, max_y) = polygon
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), point| {
            (lo.min(point.y), hi.max(point.y))
        });

    let mut pixels = Vec::new();
    let mut crossings = Vec::with_capacity(polygon.len());

    let mut row = min_y.floor();
    while row < max_y {
        let sample_y = row + 0.5;
        crossings.clear();

        for (index, start) in polygon.iter().enumerate() {
            let end = polygon[(index + 1) % polygon.len()];
            if (start.y <= sample_y) != (end.y <= sample_y) {
                let t = (sample_y - start.y) / (end.y - start.y);
                crossings.push(t.mul_add(end.x - start.x, start.x));
            }
        }
        crossings.sort_by(f64::total_cmp);

        for span in crossings.chunks_exact(2) {
            let mut column = (span[0] - 0.5).ceil();
            while column + 0.5 <= span[1] {
                pixels.push(Point::new(column + 0.5, sample_y));
                column += 1.0;
            }
        }

        row += 1.0;
    }

    pixels
}

/// Centers of the pixels within `radius` of `center`.
pub fn disk_pixels(center: Point, radius: f64) -> Vec<Point> {
    if radius <= 0.0 {
        return vec![center];
    }

    let mut pixels = Vec::new();
    let mut row = (center.y - radius).floor();
    while row <= (center.y + radius).ceil() {
        let mut column = (center.x - radius).floor();
        while column <= (center.x + radius).ceil() {
            let pixel = Point::new(column + 0.5, row + 0.5);
            if pixel.distance_to(center) <= radius {
                pixels.push(pixel);
            }
            column += 1.0;
        }
        row += 1.0;
    }

    if pixels.is_empty() {
        pixels.push(center);
    }
    pixels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_aligned_square_covers_its_area() {
        let square = [
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 4.0),
            Point::new(0.0, 4.0),
        ];
        let pixels = polygon_pixels(&square);

        assert_eq!(pixels.len(), 16);
        assert!(pixels
            .iter()
            .all(|p| p.x > 0.0 && p.x < 4.0 && p.y > 0.0 && p.y < 4.0));
    }

    #[test]
    fn triangle_covers_about_half_its_box() {
        let triangle = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(0.0, 10.0),
        ];
        let pixels = polygon_pixels(&triangle);

        assert!((40..=60).contains(&pixels.len()), "got {}", pixels.len());
        assert!(pixels.iter().all(|p| p.x + p.y <= 10.0));
    }

    #[test]
    fn degenerate_polygons_cover_nothing() {
        assert!(polygon_pixels(&[]).is_empty());
        assert!(polygon_pixels(&[Point::new(1.0, 1.0)]).is_empty());
        assert!(polygon_pixels(&[Point::new(1.0, 1.0), Point::new(5.0, 5.0)]).is_empty());
    }

    #[test]
    fn disk_stays_within_radius() {
        let center = Point::new(10.0, 10.0);
        let pixels = disk_pixels(center, 4.0);

        assert!(pixels.len() > 40);
        assert!(pixels.iter().all(|p| p.distance_to(center) <= 4.0));
    }

    #[test]
    fn tiny_disk_still_marks_its_center() {
        let center = Point::new(3.2, 7.9);
        assert_eq!(disk_pixels(center, 0.0), vec![center]);
        assert!(!disk_pixels(center, 0.1).is_empty());
    }
}
