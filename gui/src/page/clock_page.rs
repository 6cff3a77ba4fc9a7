use chrono::NaiveTime;
use embedded_graphics::{
    prelude::{DrawTarget, Point},
    Drawable,
};
use epd_waveshare::color::Color;
use std::fmt::Debug;

use crate::{
    clock::Clock,
    config::ClockConfig,
    draw::{clear, DrawError},
    time::clock_fields,
    Black, White,
};

pub struct ClockPage {
    clock: Clock<Color>,
}

impl ClockPage {
    pub fn new(center: Point, time: NaiveTime) -> Self {
        Self::with_config(center, time, ClockConfig::default())
    }

    pub fn with_config(center: Point, time: NaiveTime, config: ClockConfig) -> Self {
        let (hours, minutes) = clock_fields(time);

        Self {
            clock: Clock::with_config(center, hours, minutes, Black, config),
        }
    }

    pub fn clock(&self) -> &Clock<Color> {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut Clock<Color> {
        &mut self.clock
    }

    pub fn set_time(&mut self, time: NaiveTime) {
        self.clock.set_time(time);
    }

    pub fn draw<Display>(&self, display: &mut Display) -> Result<(), DrawError>
    where
        Display: DrawTarget<Color = Color>,
        Display::Error: Debug,
    {
        // Clear the display
        clear(display, White)?;

        // Draw the clock
        self.clock
            .draw(display)
            .map_err(|err| DrawError::DrawFailed(format!("{:?}", err)))?;

        Ok(())
    }
}
