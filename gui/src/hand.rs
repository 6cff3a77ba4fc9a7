use embedded_graphics::{
    prelude::{DrawTarget, PixelColor, Point},
    Drawable,
};

use crate::{
    geometry::{local_rectangle, rotate, Quad},
    polygon::Polygon,
};

/// The hand of a clock.
///
/// A rectangle of `length` by `width` pixels turned clockwise by `angle`
/// degrees around `pivot`:
///
/// ```text
///     +------length-----+
///     |                 | width
/// - - * pivot - - - - - + - - - angle
///     |                 |         v
///     +-----------------+
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockHand<C> {
    angle: i32,
    initial_points: Quad,
    polygon: Polygon<C>,
}

impl<C: PixelColor> ClockHand<C> {
    pub fn new(pivot: Point, length: u32, width: u32, angle: i32, color: C) -> Self {
        let initial_points = local_rectangle(length, width);
        let polygon = Polygon::new(rotate(&initial_points, angle), pivot, color);

        Self {
            angle,
            initial_points,
            polygon,
        }
    }

    pub fn angle(&self) -> i32 {
        self.angle
    }

    /// Turn the hand to `angle`, always starting from the un-rotated shape.
    pub fn set_angle(&mut self, angle: i32) {
        self.angle = angle;
        self.polygon.set_points(rotate(&self.initial_points, angle));
    }

    /// Rotated points, relative to the pivot.
    pub fn points(&self) -> &Quad {
        self.polygon.points()
    }

    pub fn pivot(&self) -> Point {
        self.polygon.pivot()
    }
}

impl<C: PixelColor> Drawable for ClockHand<C> {
    type Color = C;
    type Output = ();

    fn draw<D>(&self, target: &mut D) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        self.polygon.draw(target)
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::pixelcolor::BinaryColor;

    use super::*;

    fn hand(angle: i32) -> ClockHand<BinaryColor> {
        ClockHand::new(Point::new(120, 64), 60, 20, angle, BinaryColor::On)
    }

    #[test]
    fn new_rotates_initial_shape() {
        let hand = hand(90);

        assert_eq!(hand.angle(), 90);
        assert_eq!(hand.pivot(), Point::new(120, 64));
        assert_eq!(hand.points(), &rotate(&local_rectangle(60, 20), 90));
    }

    #[test]
    fn zero_angle_keeps_local_rectangle() {
        assert_eq!(hand(0).points(), &local_rectangle(60, 20));
    }

    #[test]
    fn set_angle_is_idempotent() {
        let mut once = hand(0);
        once.set_angle(30);

        let mut twice = hand(0);
        twice.set_angle(30);
        twice.set_angle(30);

        assert_eq!(once.points(), twice.points());
        assert_eq!(twice.angle(), 30);
    }

    #[test]
    fn set_angle_does_not_accumulate() {
        let mut stepped = hand(0);
        for angle in (0..=60).step_by(7) {
            stepped.set_angle(angle);
        }
        stepped.set_angle(60);

        assert_eq!(stepped.points(), hand(60).points());
    }

    #[test]
    fn set_angle_back_restores_shape() {
        let mut hand = hand(0);

        hand.set_angle(33);
        hand.set_angle(0);

        assert_eq!(hand.points(), &local_rectangle(60, 20));
    }
}
