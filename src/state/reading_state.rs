//! Derived Display Values - Current Reading and Trend

/// Direction of the latest temperature movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Rising,
    Falling,
    Flat,
}

impl Trend {
    /// Compare the two most recent arrivals, previous first
    pub fn between(previous: f64, latest: f64) -> Self {
        if latest > previous {
            Trend::Rising
        } else if latest < previous {
            Trend::Falling
        } else {
            Trend::Flat
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Trend::Rising => "Rising",
            Trend::Falling => "Falling",
            Trend::Flat => "Flat",
        }
    }
}

/// Latest observed temperature, independent of the buffers.
///
/// Keeps its value across a buffer clear so the header reading does not
/// blank out when the operator empties the chart.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrentReading {
    temperature: f64,
}

impl CurrentReading {
    /// Record the temperature of a newly decoded sample
    pub fn observe(&mut self, temperature: f64) {
        self.temperature = temperature;
    }

    /// Display value, rounded to one decimal place; 0.0 before any sample
    pub fn value(&self) -> f64 {
        (self.temperature * 10.0).round() / 10.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_directions() {
        assert_eq!(Trend::between(20.0, 20.5), Trend::Rising);
        assert_eq!(Trend::between(20.5, 20.0), Trend::Falling);
        assert_eq!(Trend::between(20.0, 20.0), Trend::Flat);
    }

    #[test]
    fn test_reading_defaults_to_zero() {
        assert_eq!(CurrentReading::default().value(), 0.0);
    }

    #[test]
    fn test_reading_rounds_to_one_decimal() {
        let mut reading = CurrentReading::default();
        reading.observe(21.37);
        assert_eq!(reading.value(), 21.4);
        reading.observe(21.34);
        assert_eq!(reading.value(), 21.3);
    }
}
