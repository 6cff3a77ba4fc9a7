use embedded_graphics::prelude::{DrawTarget, PixelColor};
use std::fmt::Debug;
use thiserror::Error;

pub fn clear<Display, C>(display: &mut Display, color: C) -> Result<(), DrawError>
where
    C: PixelColor,
    Display: DrawTarget<Color = C>,
    Display::Error: Debug,
{
    display
        .clear(color)
        .map_err(|err| DrawError::DrawFailed(format!("Failed to clear display: {:?}", err)))
}

#[derive(Debug, Error)]
pub enum DrawError {
    #[error("Draw failed: {0}")]
    DrawFailed(String),
}

