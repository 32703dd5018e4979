//! Viewport visibility tracking for reveal animations.
//!
//! The browser binding feeds raw intersection changes into
//! [`VisibilityState`], which owns the trigger-once latch. When the
//! platform has no intersection capability the state is created already
//! visible so content is never left hidden.

/// Options for a single observed element
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityOptions {
    /// Fraction of the element that must intersect, 0.0..=1.0
    pub threshold: f64,
    /// Latch to visible after the first intersection
    pub trigger_once: bool,
    /// CSS margin applied to the root box, e.g. `"0px 0px -50px 0px"`
    pub root_margin: String,
}

impl Default for VisibilityOptions {
    fn default() -> Self {
        Self {
            threshold: super::DEFAULT_THRESHOLD,
            trigger_once: true,
            root_margin: "0px".to_string(),
        }
    }
}

impl VisibilityOptions {
    /// Options with a uniform negative margin, the usual way reveals are
    /// delayed until an element is well inside the viewport.
    pub fn with_margin(margin_px: i32) -> Self {
        Self {
            root_margin: format!("{margin_px}px"),
            ..Default::default()
        }
    }

    pub fn repeating(mut self) -> Self {
        self.trigger_once = false;
        self
    }

    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold.clamp(0.0, 1.0);
        self
    }
}

/// Per-element visibility signal
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityState {
    has_entered: bool,
    visible: bool,
    trigger_once: bool,
}

impl VisibilityState {
    pub fn new(trigger_once: bool) -> Self {
        Self {
            has_entered: false,
            visible: false,
            trigger_once,
        }
    }

    /// State used when intersection observation is unavailable
    pub fn always_visible() -> Self {
        Self {
            has_entered: true,
            visible: true,
            trigger_once: true,
        }
    }

    /// Apply an intersection change. Returns true when the reported
    /// visibility changed.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        let before = self.is_visible();
        if is_intersecting {
            self.has_entered = true;
        }
        self.visible = is_intersecting;
        before != self.is_visible()
    }

    /// Whether the element counts as visible right now
    pub fn is_visible(&self) -> bool {
        if self.trigger_once {
            self.has_entered
        } else {
            self.visible
        }
    }

    pub fn has_entered(&self) -> bool {
        self.has_entered
    }

    /// Once latched, further intersection changes are irrelevant and the
    /// observer can be disconnected.
    pub fn is_settled(&self) -> bool {
        self.trigger_once && self.has_entered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_once_latches() {
        let mut state = VisibilityState::new(true);
        assert!(!state.is_visible());

        assert!(state.observe(true));
        assert!(state.is_visible());

        // Scrolling away must not revert
        assert!(!state.observe(false));
        assert!(state.is_visible());
        assert!(state.is_settled());
    }

    #[test]
    fn test_repeating_toggles() {
        let mut state = VisibilityState::new(false);
        assert!(state.observe(true));
        assert!(state.is_visible());
        assert!(state.observe(false));
        assert!(!state.is_visible());
        assert!(state.has_entered());
        assert!(!state.is_settled());
    }

    #[test]
    fn test_initial_non_intersection_is_not_a_change() {
        let mut state = VisibilityState::new(true);
        assert!(!state.observe(false));
        assert!(!state.has_entered());
    }

    #[test]
    fn test_always_visible_fallback() {
        let mut state = VisibilityState::always_visible();
        assert!(state.is_visible());
        state.observe(false);
        assert!(state.is_visible());
    }

    #[test]
    fn test_options_builders() {
        let opts = VisibilityOptions::with_margin(-50).repeating().threshold(2.0);
        assert_eq!(opts.root_margin, "-50px");
        assert!(!opts.trigger_once);
        assert_eq!(opts.threshold, 1.0);
    }
}
