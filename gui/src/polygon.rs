use embedded_graphics::{
    prelude::{DrawTarget, PixelColor, Point, Primitive},
    primitives::{PrimitiveStyleBuilder, Triangle},
    Drawable,
};

use crate::geometry::Quad;

/// A filled four-sided shape that keeps its points until they are replaced.
///
/// Points are relative to `pivot`, which places the shape on the display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polygon<C> {
    points: Quad,
    pivot: Point,
    color: C,
}

impl<C: PixelColor> Polygon<C> {
    pub fn new(points: Quad, pivot: Point, color: C) -> Self {
        Self {
            points,
            pivot,
            color,
        }
    }

    pub fn set_points(&mut self, points: Quad) {
        self.points = points;
    }

    pub fn points(&self) -> &Quad {
        &self.points
    }

    pub fn pivot(&self) -> Point {
        self.pivot
    }

    pub fn color(&self) -> C {
        self.color
    }

    /// Points translated to display coordinates.
    pub fn world_points(&self) -> Quad {
        self.points.map(|point| point + self.pivot)
    }
}

impl<C: PixelColor> Drawable for Polygon<C> {
    type Color = C;
    type Output = ();

    fn draw<D>(&self, target: &mut D) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        let style = PrimitiveStyleBuilder::new().fill_color(self.color).build();
        let [p0, p1, p2, p3] = self.world_points();

        // Hands and endcaps are always convex, a fan of two triangles covers them
        Triangle::new(p0, p1, p2).into_styled(style).draw(target)?;
        Triangle::new(p0, p2, p3).into_styled(style).draw(target)
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::{pixelcolor::BinaryColor, prelude::Size};

    use super::*;
    use crate::{display::FrameBuffer, geometry::local_rectangle};

    #[test]
    fn set_points_replaces_points() {
        let mut polygon = Polygon::new(local_rectangle(10, 4), Point::new(5, 5), BinaryColor::On);
        let replacement = local_rectangle(3, 2);

        polygon.set_points(replacement);

        assert_eq!(polygon.points(), &replacement);
        assert_eq!(polygon.pivot(), Point::new(5, 5));
        assert_eq!(polygon.color(), BinaryColor::On);
    }

    #[test]
    fn world_points_are_offset_by_pivot() {
        let polygon = Polygon::new(local_rectangle(10, 4), Point::new(20, 30), BinaryColor::On);

        assert_eq!(
            polygon.world_points(),
            [
                Point::new(20, 32),
                Point::new(30, 32),
                Point::new(30, 28),
                Point::new(20, 28),
            ]
        );
    }

    #[test]
    fn draw_fills_inside_at_pivot() {
        let mut display: FrameBuffer<BinaryColor> = FrameBuffer::new(Size::new(64, 64));
        let polygon = Polygon::new(local_rectangle(30, 10), Point::new(16, 32), BinaryColor::On);

        polygon.draw(&mut display).unwrap();

        assert_eq!(display.get_pixel(Point::new(30, 32)), BinaryColor::On);
        assert_eq!(display.get_pixel(Point::new(40, 30)), BinaryColor::On);
        assert_eq!(display.get_pixel(Point::new(30, 10)), BinaryColor::Off);
        assert_eq!(display.get_pixel(Point::new(10, 32)), BinaryColor::Off);
        assert_eq!(display.get_pixel(Point::new(55, 32)), BinaryColor::Off);
    }
}
