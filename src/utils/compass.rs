//! Conversion from numeric bearings to 16-point compass labels.

/// The 16 compass points, clockwise from north.
pub const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Width in degrees of the arc each compass point covers.
pub const COMPASS_SEGMENT_DEGREES: f64 = 22.5;

/// Converts a bearing in degrees into a compass label such as `"NNE"`.
///
/// Each label owns a 22.5° arc centered on its own heading. Bearings
/// sitting exactly on an arc boundary (11.25°, 33.75°, ...) round half
/// away from zero, i.e. they go to the clockwise neighbour. Values
/// outside `[0, 360)` wrap around.
pub fn compass_label(bearing: f64) -> &'static str {
    let index = (bearing / COMPASS_SEGMENT_DEGREES).round() as i64;
    COMPASS_POINTS[index.rem_euclid(16) as usize]
}
