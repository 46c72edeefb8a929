// src/services/time_source.rs
//
// Where the clock reads its time from

use chrono::{Local, Timelike};

/// One reading of the wall clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockReading {
    /// "HHMM", 24-hour, zero padded
    pub time: String,
    /// Legacy AM/PM text, always empty for the 24-hour display
    pub ampm: String,
}

impl ClockReading {
    pub fn from_hours_minutes(hours: u32, minutes: u32) -> Self {
        Self {
            time: format!("{:02}{:02}", hours, minutes),
            ampm: String::new(),
        }
    }
}

pub trait TimeSource {
    fn read(&self) -> ClockReading;
}

/// Local wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemTime;

impl TimeSource for SystemTime {
    fn read(&self) -> ClockReading {
        let now = Local::now();
        ClockReading::from_hours_minutes(now.hour(), now.minute())
    }
}

/// A frozen time, for demos and recordings.
#[derive(Debug, Clone, Copy)]
pub struct FixedTime {
    pub hours: u32,
    pub minutes: u32,
}

impl TimeSource for FixedTime {
    fn read(&self) -> ClockReading {
        ClockReading::from_hours_minutes(self.hours, self.minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_padding() {
        assert_eq!(ClockReading::from_hours_minutes(9, 5).time, "0905");
        assert_eq!(ClockReading::from_hours_minutes(0, 0).time, "0000");
        assert_eq!(ClockReading::from_hours_minutes(23, 59).time, "2359");
    }

    #[test]
    fn test_ampm_is_empty() {
        let reading = FixedTime { hours: 13, minutes: 30 }.read();
        assert_eq!(reading.time, "1330");
        assert!(reading.ampm.is_empty());
    }

    #[test]
    fn test_system_time_shape() {
        let reading = SystemTime.read();
        assert_eq!(reading.time.len(), 4);
        assert!(reading.time.chars().all(|c| c.is_ascii_digit()));
        let hours: u32 = reading.time[..2].parse().unwrap();
        let minutes: u32 = reading.time[2..].parse().unwrap();
        assert!(hours < 24 && minutes < 60);
    }
}
