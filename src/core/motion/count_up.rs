//! Animated numeric counter.

use super::easing::ease_out_cubic;

/// Counts from `start` to `end` with an ease-out-cubic curve.
///
/// A counter runs at most once per mount: [`CountUp::trigger`] only
/// succeeds the first time, so a second visibility event is a no-op.
#[derive(Debug, Clone)]
pub struct CountUp {
    start: f64,
    end: f64,
    duration_ms: f64,
    delay_ms: f64,
    decimals: usize,
    prefix: String,
    suffix: String,
    triggered_at: Option<f64>,
}

impl CountUp {
    pub fn new(end: f64) -> Self {
        Self {
            start: 0.0,
            end,
            duration_ms: super::COUNT_UP_DURATION_MS,
            delay_ms: 0.0,
            decimals: 0,
            prefix: String::new(),
            suffix: String::new(),
            triggered_at: None,
        }
    }

    pub fn starting_at(mut self, start: f64) -> Self {
        self.start = start;
        self
    }

    pub fn duration_ms(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms.max(0.0);
        self
    }

    pub fn delay_ms(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms.max(0.0);
        self
    }

    pub fn decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Start the animation. Returns false if it already ran.
    pub fn trigger(&mut self, now_ms: f64) -> bool {
        if self.triggered_at.is_some() {
            return false;
        }
        self.triggered_at = Some(now_ms);
        true
    }

    pub fn value_at(&self, now_ms: f64) -> f64 {
        let Some(triggered) = self.triggered_at else {
            return self.start;
        };
        let elapsed = now_ms - triggered - self.delay_ms;
        if elapsed <= 0.0 {
            return self.start;
        }
        if self.duration_ms == 0.0 || elapsed >= self.duration_ms {
            return self.end;
        }
        let progress = ease_out_cubic(elapsed / self.duration_ms);
        self.start + (self.end - self.start) * progress
    }

    /// Whether the value has reached `end`
    pub fn is_finished(&self, now_ms: f64) -> bool {
        match self.triggered_at {
            Some(t) => now_ms - t - self.delay_ms >= self.duration_ms,
            None => false,
        }
    }

    /// Display text at a point in time
    pub fn format_at(&self, now_ms: f64) -> String {
        self.format_value(self.value_at(now_ms))
    }

    pub fn format_value(&self, value: f64) -> String {
        format!(
            "{}{:.*}{}",
            self.prefix, self.decimals, value, self.suffix
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_shows_start() {
        let counter = CountUp::new(100.0).starting_at(10.0);
        assert_eq!(counter.value_at(5000.0), 10.0);
    }

    #[test]
    fn test_second_trigger_is_suppressed() {
        let mut counter = CountUp::new(500.0).duration_ms(1000.0);
        assert!(counter.trigger(0.0));
        assert!(!counter.trigger(400.0));
        // Timeline still measured from the first trigger
        assert_eq!(counter.value_at(1000.0), 500.0);
    }

    #[test]
    fn test_ease_out_cubic_progress() {
        let mut counter = CountUp::new(100.0).duration_ms(1000.0);
        counter.trigger(0.0);
        assert!((counter.value_at(500.0) - 87.5).abs() < 1e-9);
        assert!(!counter.is_finished(999.0));
        assert!(counter.is_finished(1000.0));
    }

    #[test]
    fn test_delay_holds_start() {
        let mut counter = CountUp::new(50.0).delay_ms(300.0).duration_ms(100.0);
        counter.trigger(0.0);
        assert_eq!(counter.value_at(299.0), 0.0);
        assert_eq!(counter.value_at(400.0), 50.0);
    }

    #[test]
    fn test_zero_duration_is_instant() {
        let mut counter = CountUp::new(7.0).duration_ms(0.0);
        counter.trigger(10.0);
        assert_eq!(counter.value_at(10.5), 7.0);
    }

    #[test]
    fn test_formatting() {
        let mut counter = CountUp::new(98.6)
            .decimals(1)
            .prefix("~")
            .suffix("%")
            .duration_ms(10.0);
        counter.trigger(0.0);
        assert_eq!(counter.format_at(20.0), "~98.6%");
        assert_eq!(CountUp::new(5000.0).suffix("+").format_value(5000.0), "5000+");
    }
}
