use chrono::Local;
use clock_gui::{page::clock_page::ClockPage, ClockConfig};
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{
    sdl2::Keycode, BinaryColorTheme, OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent,
    Window,
};
use epd_waveshare::{
    color::Color::{self},
    epd2in9_v2::{HEIGHT, WIDTH},
};

// The 2.9" panel is mounted in landscape
const SIZE: Size = Size::new(HEIGHT, WIDTH);

fn main() -> anyhow::Result<()> {
    let mut display: SimulatorDisplay<Color> = SimulatorDisplay::new(SIZE);

    let output_settings = OutputSettingsBuilder::new()
        .theme(BinaryColorTheme::Inverted)
        .scale(2)
        .pixel_spacing(0)
        .build();
    let mut window = Window::new("Clock", &output_settings);

    let center = Point::new(SIZE.width as i32 / 2, SIZE.height as i32 / 2);
    let config = ClockConfig::default().unit(SIZE.height / 10);
    let mut page = ClockPage::with_config(center, Local::now().time(), config);

    'running: loop {
        page.draw(&mut display)?;

        window.update(&display);

        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::KeyDown { keycode, .. } => {
                    match keycode {
                        Keycode::Up => page.clock_mut().add_hours(1),
                        Keycode::Down => page.clock_mut().add_hours(-1),
                        Keycode::Right => page.clock_mut().add_minutes(5),
                        Keycode::Left => page.clock_mut().add_minutes(-5),
                        Keycode::N => page.set_time(Local::now().time()),
                        _ => {}
                    }
                }
                _ => {}
            }
        }
    }

    Ok(())
}
