//! Quadratic Bézier arcs between segment endpoints.

use super::LatLng;

/// Number of parameter steps per arc. An arc has `CURVE_SAMPLES + 1` points.
pub const CURVE_SAMPLES: usize = 30;

/// How far the control point is lifted north, relative to the endpoint
/// distance.
const CONTROL_LIFT: f64 = 0.15;

/// Samples a quadratic Bézier arc from `start` to `end`.
///
/// The control point sits above the midpoint at
/// `mid_lat + distance * 0.15`, so every arc bows northwards. The result has
/// [`CURVE_SAMPLES`]` + 1` points sampled at `t = i / CURVE_SAMPLES`; the first
/// is exactly `start` and the last exactly `end`. Identical endpoints yield a
/// degenerate arc of identical points.
pub fn curve_points(start: LatLng, end: LatLng) -> Vec<LatLng> {
    if start == end {
        return vec![start; CURVE_SAMPLES + 1];
    }

    let mid_lat = (start.lat + end.lat) / 2.0;
    let mid_lng = (start.lng + end.lng) / 2.0;
    let control = LatLng::new(mid_lat + start.planar_distance(&end) * CONTROL_LIFT, mid_lng);

    let mut points: Vec<LatLng> = (0..=CURVE_SAMPLES)
        .map(|i| {
            let t = i as f64 / CURVE_SAMPLES as f64;
            let u = 1.0 - t;
            let (a, b, c) = (u * u, 2.0 * u * t, t * t);
            LatLng::new(
                a * start.lat + b * control.lat + c * end.lat,
                a * start.lng + b * control.lng + c * end.lng,
            )
        })
        .collect();

    // Pin the endpoints so they never drift by rounding.
    points[0] = start;
    points[CURVE_SAMPLES] = end;
    points
}

/// The point used to anchor a segment's transport marker: the middle sample
/// of the arc.
pub fn curve_midpoint(points: &[LatLng]) -> Option<LatLng> {
    points.get(points.len() / 2).copied()
}
