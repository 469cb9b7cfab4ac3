//! ChartState - Rolling Window Feeding the Temperature Chart

use crate::constants::CHART_WINDOW_CAPACITY;
use crate::domain::sample::TemperatureSample;
use crate::helpers::BoundedDeque;
use crate::utils::format::format_time_ms;
use chrono::Local;

/// One chart-facing point derived from a sample
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    /// Zero-padded `HH:MM:SS.mmm` label, local time
    pub time_label: String,
    pub temperature: f64,
}

/// Sliding window of the most recent samples, in arrival order.
///
/// Holds at most [`CHART_WINDOW_CAPACITY`] points; once full, the oldest is
/// evicted unconditionally on every push.
#[derive(Debug, Clone)]
pub struct ChartState {
    window: BoundedDeque<ChartPoint>,
}

impl ChartState {
    pub fn new() -> Self {
        Self {
            window: BoundedDeque::new(CHART_WINDOW_CAPACITY),
        }
    }

    /// Append a point derived from `sample`, evicting the oldest past capacity
    pub fn push(&mut self, sample: &TemperatureSample) {
        let local = sample.timestamp.with_timezone(&Local);
        self.window.push(ChartPoint {
            time_label: format_time_ms(&local),
            temperature: sample.temperature,
        });
    }

    /// Empty the window unconditionally
    pub fn clear(&mut self) {
        self.window.clear();
    }

    /// Read-only view of the window in arrival order
    pub fn points(&self) -> impl Iterator<Item = &ChartPoint> {
        self.window.iter()
    }

    /// Copy-out snapshot for the rendering layer
    pub fn snapshot(&self) -> Vec<ChartPoint> {
        self.window.to_vec()
    }

    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// The two most recently arrived points, previous first.
    ///
    /// Arrival order here is what makes the trend sign correct; the reading
    /// log cannot be used for this because its ordering is reversed.
    pub fn latest_pair(&self) -> Option<(&ChartPoint, &ChartPoint)> {
        let n = self.window.len();
        if n < 2 {
            return None;
        }
        match (self.window.get(n - 2), self.window.get(n - 1)) {
            (Some(previous), Some(latest)) => Some((previous, latest)),
            _ => None,
        }
    }
}

impl Default for ChartState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(temperature: f64, millis: u32) -> TemperatureSample {
        TemperatureSample::decode(&format!(
            r#"{{"temperature":{temperature},"timestamp":"2026-08-04T10:15:42.{millis:03}Z"}}"#
        ))
        .expect("decode")
    }

    #[test]
    fn test_push_derives_padded_label() {
        let mut chart = ChartState::new();
        chart.push(&sample(21.5, 7));

        let points = chart.snapshot();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].temperature, 21.5);

        let label = &points[0].time_label;
        assert_eq!(label.len(), 12);
        assert_eq!(&label[2..3], ":");
        assert_eq!(&label[5..6], ":");
        assert!(label.ends_with(".007"));
    }

    #[test]
    fn test_window_bound_holds_after_every_push() {
        let mut chart = ChartState::new();
        for n in 0..200 {
            chart.push(&sample(n as f64, (n % 1000) as u32));
            assert!(chart.len() <= CHART_WINDOW_CAPACITY);
        }
    }

    #[test]
    fn test_overflow_keeps_most_recent_in_arrival_order() {
        let mut chart = ChartState::new();
        for n in 0..130 {
            chart.push(&sample(n as f64, 0));
        }

        assert_eq!(chart.len(), CHART_WINDOW_CAPACITY);
        // First surviving point is the 11th pushed sample (index 10).
        let first = chart.points().next().expect("first point");
        assert_eq!(first.temperature, 10.0);
        let last = chart.snapshot().pop().expect("last point");
        assert_eq!(last.temperature, 129.0);
    }

    #[test]
    fn test_latest_pair_is_arrival_ordered() {
        let mut chart = ChartState::new();
        assert!(chart.latest_pair().is_none());

        chart.push(&sample(20.0, 0));
        assert!(chart.latest_pair().is_none());

        chart.push(&sample(20.5, 100));
        let (previous, latest) = chart.latest_pair().expect("pair");
        assert_eq!(previous.temperature, 20.0);
        assert_eq!(latest.temperature, 20.5);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut chart = ChartState::new();
        chart.push(&sample(21.0, 0));
        chart.clear();
        assert!(chart.is_empty());
        chart.clear();
        assert!(chart.is_empty());
    }
}
