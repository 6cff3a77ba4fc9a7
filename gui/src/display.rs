use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::{DrawTarget, OriginDimensions, PixelColor, Point, Size},
    Pixel,
};

/// An in-memory display, used to render a clock without any panel attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer<C> {
    size: Size,
    pixels: Vec<C>,
}

impl<C: PixelColor> FrameBuffer<C> {
    /// Creates a buffer where every pixel is `background`.
    pub fn with_background(size: Size, background: C) -> Self {
        let pixel_count = size.width as usize * size.height as usize;

        Self {
            size,
            pixels: vec![background; pixel_count],
        }
    }

    /// Returns the color at `point`, or `None` outside of the buffer.
    pub fn pixel(&self, point: Point) -> Option<C> {
        self.index_of(point)
            .and_then(|index| self.pixels.get(index).copied())
    }

    /// Returns the color at `point`.
    ///
    /// # Panics
    ///
    /// Panics if `point` is outside of the buffer.
    pub fn get_pixel(&self, point: Point) -> C {
        self.pixel(point)
            .unwrap_or_else(|| panic!("point {:?} is outside of the frame buffer", point))
    }

    /// Number of pixels currently set to `color`.
    pub fn count(&self, color: C) -> usize {
        self.pixels.iter().filter(|pixel| **pixel == color).count()
    }

    fn index_of(&self, point: Point) -> Option<usize> {
        let (x, y) = <(u32, u32)>::try_from(point).ok()?;

        (x < self.size.width && y < self.size.height)
            .then(|| x as usize + y as usize * self.size.width as usize)
    }
}

impl<C> FrameBuffer<C>
where
    C: PixelColor + From<BinaryColor>,
{
    /// Creates a buffer filled with `C::from(BinaryColor::Off)`.
    pub fn new(size: Size) -> Self {
        Self::with_background(size, C::from(BinaryColor::Off))
    }
}

impl<C: PixelColor> DrawTarget for FrameBuffer<C> {
    type Color = C;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some(index) = self.index_of(point) {
                self.pixels[index] = color;
            }
        }

        Ok(())
    }
}

impl<C> OriginDimensions for FrameBuffer<C> {
    fn size(&self) -> Size {
        self.size
    }
}
