//! Character-by-character text reveal.

/// Result of advancing a typewriter to a point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterStep {
    /// Number of characters now visible
    pub shown: usize,
    /// True only on the step where the last character appeared
    pub just_completed: bool,
}

/// Reveals a string one character per interval after an initial delay.
/// Completion is reported exactly once.
#[derive(Debug, Clone)]
pub struct Typewriter {
    chars: Vec<char>,
    delay_ms: f64,
    interval_ms: f64,
    started_at: Option<f64>,
    shown: usize,
    completed: bool,
}

impl Typewriter {
    pub fn new(text: &str, delay_ms: f64, interval_ms: f64) -> Self {
        Self {
            chars: text.chars().collect(),
            delay_ms: delay_ms.max(0.0),
            interval_ms: interval_ms.max(0.0),
            started_at: None,
            shown: 0,
            completed: false,
        }
    }

    /// Begin typing. Later calls are ignored.
    pub fn start(&mut self, now_ms: f64) -> bool {
        if self.started_at.is_some() {
            return false;
        }
        self.started_at = Some(now_ms);
        true
    }

    pub fn advance(&mut self, now_ms: f64) -> TypewriterStep {
        let Some(started) = self.started_at else {
            return TypewriterStep {
                shown: 0,
                just_completed: false,
            };
        };

        let elapsed = now_ms - started - self.delay_ms;
        if elapsed >= 0.0 {
            let target = if self.interval_ms == 0.0 {
                self.chars.len()
            } else {
                ((elapsed / self.interval_ms).floor() as usize).min(self.chars.len())
            };
            self.shown = self.shown.max(target);
        }

        let done = elapsed >= 0.0 && self.shown == self.chars.len();
        let just_completed = done && !self.completed;
        if just_completed {
            self.completed = true;
        }

        TypewriterStep {
            shown: self.shown,
            just_completed,
        }
    }

    /// Currently visible prefix
    pub fn text(&self) -> String {
        self.chars[..self.shown].iter().collect()
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_before_start() {
        let mut tw = Typewriter::new("abc", 0.0, 50.0);
        assert_eq!(tw.advance(1000.0).shown, 0);
        assert!(!tw.is_complete());
    }

    #[test]
    fn test_reveals_after_delay_at_interval() {
        let mut tw = Typewriter::new("hello", 200.0, 50.0);
        tw.start(0.0);
        assert_eq!(tw.advance(150.0).shown, 0);
        assert_eq!(tw.advance(250.0).shown, 1);
        assert_eq!(tw.text(), "h");
        assert_eq!(tw.advance(320.0).shown, 2);
        assert_eq!(tw.text(), "he");
    }

    #[test]
    fn test_completion_fires_once() {
        let mut tw = Typewriter::new("hi", 0.0, 10.0);
        tw.start(0.0);
        let mut completions = 0;
        for t in 0..20 {
            if tw.advance(t as f64 * 5.0).just_completed {
                completions += 1;
            }
        }
        assert_eq!(completions, 1);
        assert_eq!(tw.text(), "hi");
    }

    #[test]
    fn test_multibyte_text() {
        let mut tw = Typewriter::new("héllo ✓", 0.0, 1.0);
        tw.start(0.0);
        tw.advance(2.0);
        assert_eq!(tw.text(), "hé");
        tw.advance(100.0);
        assert_eq!(tw.text(), "héllo ✓");
    }

    #[test]
    fn test_zero_interval_is_instant() {
        let mut tw = Typewriter::new("instant", 0.0, 0.0);
        tw.start(5.0);
        let step = tw.advance(5.0);
        assert_eq!(step.shown, 7);
        assert!(step.just_completed);
    }

    #[test]
    fn test_empty_text_completes() {
        let mut tw = Typewriter::new("", 100.0, 50.0);
        tw.start(0.0);
        assert!(!tw.advance(50.0).just_completed);
        assert!(tw.advance(100.0).just_completed);
    }

    #[test]
    fn test_restart_is_ignored() {
        let mut tw = Typewriter::new("abc", 0.0, 10.0);
        assert!(tw.start(0.0));
        assert!(!tw.start(1000.0));
        assert_eq!(tw.advance(20.0).shown, 2);
    }
}
