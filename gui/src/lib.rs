pub mod clock;
pub mod config;
pub mod display;
pub mod draw;
pub mod geometry;
pub mod hand;
pub mod page;
pub mod polygon;
pub mod time;

pub use clock::{Clock, ClockError};
pub use config::ClockConfig;
pub use hand::ClockHand;

pub use epd_waveshare::color::Color::{Black as White, White as Black};
