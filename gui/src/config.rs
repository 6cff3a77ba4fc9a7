/// Dimensions of the clock hands.
///
/// Lengths and width are expressed in units; `unit` is the size of one unit
/// in display pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockConfig {
    pub unit: u32,
    pub hour_length: u32,
    pub minute_length: u32,
    pub hand_width: u32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        ClockConfig {
            unit: 20,
            hour_length: 3,
            minute_length: 4,
            hand_width: 1,
        }
    }
}

impl ClockConfig {
    pub fn unit(mut self, unit: u32) -> Self {
        self.unit = unit;
        self
    }

    /// `(length, width)` of the hour hand, in pixels.
    pub fn hour_hand_size(&self) -> (u32, u32) {
        (self.pixels(self.hour_length), self.pixels(self.hand_width))
    }

    /// `(length, width)` of the minute hand, in pixels.
    pub fn minute_hand_size(&self) -> (u32, u32) {
        (self.pixels(self.minute_length), self.pixels(self.hand_width))
    }

    fn pixels(&self, units: u32) -> u32 {
        units.saturating_mul(self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sizes() {
        let config = ClockConfig::default();

        assert_eq!(config.hour_hand_size(), (60, 20));
        assert_eq!(config.minute_hand_size(), (80, 20));
    }

    #[test]
    fn unit_scales_every_hand() {
        let config = ClockConfig::default().unit(4);

        assert_eq!(config.hour_hand_size(), (12, 4));
        assert_eq!(config.minute_hand_size(), (16, 4));
    }
}
