use chrono::Utc;
use clock_gui::{page::clock_page::ClockPage, ClockConfig};
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{BinaryColorTheme, OutputSettingsBuilder, SimulatorDisplay};
use epd_waveshare::{
    color::Color::{self},
    epd2in9_v2::{HEIGHT, WIDTH},
};

fn main() -> anyhow::Result<()> {
    let size = Size::new(HEIGHT, WIDTH);
    let mut display: SimulatorDisplay<Color> = SimulatorDisplay::new(size);

    let output_settings = OutputSettingsBuilder::new()
        .theme(BinaryColorTheme::Inverted)
        .scale(1)
        .pixel_spacing(0)
        .build();

    let now = Utc::now().with_timezone(&chrono_tz::Asia::Taipei).time();

    // Hands must fit in half of the panel height
    let config = ClockConfig::default().unit(size.height / 10);
    let center = Point::new(size.width as i32 / 2, size.height as i32 / 2);
    let page = ClockPage::with_config(center, now, config);

    page.draw(&mut display)?;

    let output_image = display.to_rgb_output_image(&output_settings);

    let path = std::env::args_os().nth(1).unwrap_or("output.png".into());
    output_image.save_png(path)?;

    Ok(())
}
