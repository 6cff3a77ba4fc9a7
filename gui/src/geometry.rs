use embedded_graphics::prelude::Point;

/// Four corners of a hand shape, listed in winding order:
///
/// ```text
///  p0 +------length------+ p1
///     |                  |
///     * pivot            width
///     |                  |
///  p3 +------------------+ p2
/// ```
///
/// `p0` and `p3` are the inner (pivot-side) corners.
pub type Quad = [Point; 4];

/// Calculate the un-rotated rectangle of a hand, relative to its pivot.
///
/// The pivot sits on the centre of the left edge, the hand extends `length`
/// along +x and `width` is split evenly above and below the x-axis.
pub fn local_rectangle(length: u32, width: u32) -> Quad {
    let length = i32::try_from(length).unwrap_or(i32::MAX);
    let half_width = (width / 2) as i32;

    let points = [
        Point::new(0, half_width),
        Point::new(length, half_width),
        Point::new(length, -half_width),
        Point::new(0, -half_width),
    ];
    log::trace!("local rectangle {}x{}: {:?}", length, width, points);

    points
}

/// Rotate a set of points around (0,0) by `angle` degrees.
///
/// Positive angles turn clockwise on a y-down screen. Results are truncated
/// toward zero, so callers must always rotate from the original points instead
/// of feeding a rotated set back in.
pub fn rotate<const N: usize>(points: &[Point; N], angle: i32) -> [Point; N] {
    let (sin, cos) = sin_cos_degrees(angle);

    // x' = x * cos - y * sin
    // y' = x * sin + y * cos
    let rotated = points.map(|Point { x, y }| {
        let (x, y) = (f64::from(x), f64::from(y));
        Point::new((x * cos - y * sin) as i32, (x * sin + y * cos) as i32)
    });
    log::trace!("rotated {}º: {:?}", angle, rotated);

    rotated
}

/// Join the inner corners of two hands into the shape filling the gap at the pivot.
pub fn endcap(hour_points: &Quad, minute_points: &Quad) -> Quad {
    let [hour_p0, _, _, hour_p3] = *hour_points;
    let [minute_p0, _, _, minute_p3] = *minute_points;
    [hour_p0, minute_p0, hour_p3, minute_p3]
}

// Quarter turns are exact so that they round-trip through truncation.
fn sin_cos_degrees(angle: i32) -> (f64, f64) {
    match angle.rem_euclid(360) {
        0 => (0.0, 1.0),
        90 => (1.0, 0.0),
        180 => (0.0, -1.0),
        270 => (-1.0, 0.0),
        degrees => f64::from(degrees).to_radians().sin_cos(),
    }
}
