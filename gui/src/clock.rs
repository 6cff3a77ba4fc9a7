use chrono::NaiveTime;
use embedded_graphics::{
    prelude::{DrawTarget, PixelColor, Point},
    Drawable,
};
use thiserror::Error;

use crate::{
    config::ClockConfig,
    geometry::endcap,
    hand::ClockHand,
    polygon::Polygon,
    time::{clock_fields, hours_to_degrees, minutes_to_degrees},
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClockError {
    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: i32 },
}

/// A minimalist analog clock.
///
/// Two [`ClockHand`]s sharing one pivot, plus an endcap joining the inner
/// corners of both hands neatly in the centre.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clock<C> {
    hours: i32,
    minutes: i32,
    hour_hand: ClockHand<C>,
    minute_hand: ClockHand<C>,
    endcap: Polygon<C>,
}

impl<C: PixelColor> Clock<C> {
    pub fn new(pivot: Point, hours: i32, minutes: i32, color: C) -> Self {
        Self::with_config(pivot, hours, minutes, color, ClockConfig::default())
    }

    pub fn with_config(
        pivot: Point,
        hours: i32,
        minutes: i32,
        color: C,
        config: ClockConfig,
    ) -> Self {
        let (hour_length, hour_width) = config.hour_hand_size();
        let (minute_length, minute_width) = config.minute_hand_size();

        let hour_hand = ClockHand::new(
            pivot,
            hour_length,
            hour_width,
            hours_to_degrees(hours),
            color,
        );
        let minute_hand = ClockHand::new(
            pivot,
            minute_length,
            minute_width,
            minutes_to_degrees(minutes),
            color,
        );
        let endcap = Polygon::new(
            endcap(hour_hand.points(), minute_hand.points()),
            pivot,
            color,
        );

        Self {
            hours,
            minutes,
            hour_hand,
            minute_hand,
            endcap,
        }
    }

    pub fn from_time(pivot: Point, time: NaiveTime, color: C) -> Self {
        let (hours, minutes) = clock_fields(time);
        Self::new(pivot, hours, minutes, color)
    }

    pub fn hours(&self) -> i32 {
        self.hours
    }

    pub fn minutes(&self) -> i32 {
        self.minutes
    }

    pub fn hour_hand(&self) -> &ClockHand<C> {
        &self.hour_hand
    }

    pub fn minute_hand(&self) -> &ClockHand<C> {
        &self.minute_hand
    }

    pub fn endcap(&self) -> &Polygon<C> {
        &self.endcap
    }

    /// Any value is accepted; the hand wraps around the dial.
    pub fn set_hours(&mut self, hours: i32) {
        log::debug!("clock hours: {}", hours);
        self.hours = hours;
        self.hour_hand.set_angle(hours_to_degrees(hours));
        self.update_endcap();
    }

    /// Any value is accepted; the hand wraps around the dial.
    pub fn set_minutes(&mut self, minutes: i32) {
        log::debug!("clock minutes: {}", minutes);
        self.minutes = minutes;
        self.minute_hand.set_angle(minutes_to_degrees(minutes));
        self.update_endcap();
    }

    pub fn try_set_hours(&mut self, hours: i32) -> Result<(), ClockError> {
        if !(0..24).contains(&hours) {
            return Err(ClockError::OutOfRange {
                field: "hours",
                value: hours,
            });
        }
        self.set_hours(hours);
        Ok(())
    }

    pub fn try_set_minutes(&mut self, minutes: i32) -> Result<(), ClockError> {
        if !(0..60).contains(&minutes) {
            return Err(ClockError::OutOfRange {
                field: "minutes",
                value: minutes,
            });
        }
        self.set_minutes(minutes);
        Ok(())
    }

    pub fn add_hours(&mut self, delta: i32) {
        self.set_hours(self.hours.wrapping_add(delta));
    }

    pub fn add_minutes(&mut self, delta: i32) {
        self.set_minutes(self.minutes.wrapping_add(delta));
    }

    pub fn set_time(&mut self, time: NaiveTime) {
        let (hours, minutes) = clock_fields(time);
        self.set_hours(hours);
        self.set_minutes(minutes);
    }

    fn update_endcap(&mut self) {
        self.endcap
            .set_points(endcap(self.hour_hand.points(), self.minute_hand.points()));
    }
}

impl<C: PixelColor> Drawable for Clock<C> {
    type Color = C;
    type Output = ();

    fn draw<D>(&self, target: &mut D) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        self.hour_hand.draw(target)?;
        self.minute_hand.draw(target)?;
        self.endcap.draw(target)
    }
}
