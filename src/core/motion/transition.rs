//! Page transition controller.
//!
//! A small state machine per navigation: `Exiting` the outgoing view,
//! then `Entering` the incoming one, then `Steady`. Only one view is
//! mounted at any time. Every scheduled phase end carries a generation
//! number; a timer whose generation is no longer current is stale and is
//! ignored, which is how rapid navigation cancels in-flight animations.

use super::easing::Easing;
use super::entrance::MotionStyle;
use crate::core::routes::RouteKey;

/// Visual preset for page transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionVariant {
    /// Fade with a small vertical shift and scale
    #[default]
    Lift,
    Slide,
    Fade,
    Scale,
}

/// Styles and timings of one variant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariantTiming {
    pub initial: MotionStyle,
    pub exit: MotionStyle,
    pub enter_ms: f64,
    pub exit_ms: f64,
    pub enter_easing: Easing,
    pub exit_easing: Easing,
}

impl TransitionVariant {
    pub fn timing(&self) -> VariantTiming {
        let style = |opacity, x, y, scale| MotionStyle {
            opacity,
            x,
            y,
            scale,
        };
        match self {
            TransitionVariant::Lift => VariantTiming {
                initial: style(0.0, 0.0, 20.0, 0.98),
                exit: style(0.0, 0.0, -20.0, 0.98),
                enter_ms: 500.0,
                exit_ms: 300.0,
                enter_easing: Easing::EaseOut,
                exit_easing: Easing::EaseInOut,
            },
            TransitionVariant::Slide => VariantTiming {
                initial: style(0.0, 100.0, 0.0, 1.0),
                exit: style(0.0, -100.0, 0.0, 1.0),
                enter_ms: 500.0,
                exit_ms: 300.0,
                enter_easing: Easing::EaseOut,
                exit_easing: Easing::EaseInOut,
            },
            TransitionVariant::Fade => VariantTiming {
                initial: style(0.0, 0.0, 0.0, 1.0),
                exit: style(0.0, 0.0, 0.0, 1.0),
                enter_ms: 600.0,
                exit_ms: 400.0,
                enter_easing: Easing::EaseOut,
                exit_easing: Easing::EaseIn,
            },
            TransitionVariant::Scale => VariantTiming {
                initial: style(0.0, 0.0, 0.0, 0.95),
                exit: style(0.0, 0.0, 0.0, 1.05),
                enter_ms: 500.0,
                exit_ms: 300.0,
                enter_easing: Easing::EaseOut,
                exit_easing: Easing::EaseInOut,
            },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TransitionVariant::Lift => "lift",
            TransitionVariant::Slide => "slide",
            TransitionVariant::Fade => "fade",
            TransitionVariant::Scale => "scale",
        }
    }

    /// Keyframes and classes for the enter/exit animations of this variant
    pub fn stylesheet(&self) -> String {
        let t = self.timing();
        let name = self.name();
        format!(
            "@keyframes page-{name}-enter {{ from {{ {initial} }} to {{ {identity} }} }}\n\
             @keyframes page-{name}-exit {{ from {{ {identity} }} to {{ {exit} }} }}\n\
             .page-{name}-entering {{ animation: page-{name}-enter {enter}ms {enter_ease} both; }}\n\
             .page-{name}-exiting {{ animation: page-{name}-exit {exit_ms}ms {exit_ease} both; pointer-events: none; }}\n",
            initial = t.initial.css(),
            identity = MotionStyle::IDENTITY.css(),
            exit = t.exit.css(),
            enter = t.enter_ms,
            enter_ease = t.enter_easing.css(),
            exit_ms = t.exit_ms,
            exit_ease = t.exit_easing.css(),
        )
    }
}

/// Current phase of the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionPhase {
    Entering(RouteKey),
    Steady,
    Exiting(RouteKey),
}

/// Request to call [`PageTransitionController::on_timer`] at `at_ms`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseTimer {
    pub generation: u64,
    pub at_ms: f64,
    pub delay_ms: f64,
}

#[derive(Debug, Clone)]
pub struct PageTransitionController {
    variant: TransitionVariant,
    mounted: RouteKey,
    target: RouteKey,
    phase: TransitionPhase,
    generation: u64,
}

impl PageTransitionController {
    /// Mount the first route and start its enter animation
    pub fn new(
        initial: RouteKey,
        variant: TransitionVariant,
        now_ms: f64,
    ) -> (Self, PhaseTimer) {
        let mut ctrl = Self {
            variant,
            mounted: initial.clone(),
            target: initial.clone(),
            phase: TransitionPhase::Steady,
            generation: 0,
        };
        let timer = ctrl.begin_enter(now_ms);
        (ctrl, timer)
    }

    pub fn variant(&self) -> TransitionVariant {
        self.variant
    }

    /// Route whose view is mounted right now
    pub fn mounted(&self) -> &RouteKey {
        &self.mounted
    }

    /// Route the controller is heading for
    pub fn target(&self) -> &RouteKey {
        &self.target
    }

    pub fn phase(&self) -> &TransitionPhase {
        &self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// CSS class for the mounted view in the current phase
    pub fn phase_class(&self) -> String {
        let name = self.variant.name();
        match self.phase {
            TransitionPhase::Entering(_) => format!("page-{name}-entering"),
            TransitionPhase::Exiting(_) => format!("page-{name}-exiting"),
            TransitionPhase::Steady => String::new(),
        }
    }

    /// React to a route key change
    pub fn navigate(&mut self, route: RouteKey, now_ms: f64) -> Option<PhaseTimer> {
        if route == self.target {
            return None;
        }
        self.target = route;

        let exiting = matches!(self.phase, TransitionPhase::Exiting(_));
        if exiting && self.target == self.mounted {
            // Navigated back to the view that is still on screen
            Some(self.begin_enter(now_ms))
        } else {
            Some(self.begin_exit(now_ms))
        }
    }

    /// Handle a phase timer firing. Stale timers are ignored.
    pub fn on_timer(&mut self, generation: u64, now_ms: f64) -> Option<PhaseTimer> {
        if generation != self.generation {
            return None;
        }
        match self.phase {
            TransitionPhase::Exiting(_) => {
                self.mounted = self.target.clone();
                Some(self.begin_enter(now_ms))
            }
            TransitionPhase::Entering(_) => {
                self.phase = TransitionPhase::Steady;
                None
            }
            TransitionPhase::Steady => None,
        }
    }

    fn begin_exit(&mut self, now_ms: f64) -> PhaseTimer {
        self.generation += 1;
        self.phase = TransitionPhase::Exiting(self.mounted.clone());
        let delay_ms = self.variant.timing().exit_ms;
        PhaseTimer {
            generation: self.generation,
            at_ms: now_ms + delay_ms,
            delay_ms,
        }
    }

    fn begin_enter(&mut self, now_ms: f64) -> PhaseTimer {
        self.generation += 1;
        self.phase = TransitionPhase::Entering(self.mounted.clone());
        let delay_ms = self.variant.timing().enter_ms;
        PhaseTimer {
            generation: self.generation,
            at_ms: now_ms + delay_ms,
            delay_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> RouteKey {
        RouteKey::from(s)
    }

    fn settled(route: &str) -> PageTransitionController {
        let (mut ctrl, timer) = PageTransitionController::new(key(route), TransitionVariant::Lift, 0.0);
        assert!(ctrl.on_timer(timer.generation, timer.at_ms).is_none());
        assert_eq!(ctrl.phase(), &TransitionPhase::Steady);
        ctrl
    }

    #[test]
    fn test_initial_mount_enters() {
        let (ctrl, timer) = PageTransitionController::new(key("/"), TransitionVariant::Lift, 10.0);
        assert_eq!(ctrl.phase(), &TransitionPhase::Entering(key("/")));
        assert_eq!(timer.at_ms, 510.0);
    }

    #[test]
    fn test_full_navigation_cycle() {
        let mut ctrl = settled("/");

        let exit = ctrl.navigate(key("/about"), 1000.0).unwrap();
        assert_eq!(ctrl.phase(), &TransitionPhase::Exiting(key("/")));
        // Old view stays mounted until the exit finishes
        assert_eq!(ctrl.mounted(), &key("/"));
        assert_eq!(exit.at_ms, 1300.0);

        let enter = ctrl.on_timer(exit.generation, exit.at_ms).unwrap();
        assert_eq!(ctrl.mounted(), &key("/about"));
        assert_eq!(ctrl.phase(), &TransitionPhase::Entering(key("/about")));
        assert_eq!(enter.at_ms, 1800.0);

        assert!(ctrl.on_timer(enter.generation, enter.at_ms).is_none());
        assert_eq!(ctrl.phase(), &TransitionPhase::Steady);
    }

    #[test]
    fn test_rapid_navigation_skips_intermediate_route() {
        let mut ctrl = settled("/a");

        let to_b = ctrl.navigate(key("/b"), 0.0).unwrap();
        let to_c = ctrl.navigate(key("/c"), 100.0).unwrap();
        assert_ne!(to_b.generation, to_c.generation);

        // The first exit timer is stale
        assert!(ctrl.on_timer(to_b.generation, to_b.at_ms).is_none());
        assert_eq!(ctrl.mounted(), &key("/a"));

        let enter_c = ctrl.on_timer(to_c.generation, to_c.at_ms).unwrap();
        assert_eq!(ctrl.mounted(), &key("/c"));
        ctrl.on_timer(enter_c.generation, enter_c.at_ms);
        assert_eq!(ctrl.phase(), &TransitionPhase::Steady);
        assert_eq!(ctrl.mounted(), &key("/c"));
    }

    #[test]
    fn test_navigation_during_enter_cancels_it() {
        let mut ctrl = settled("/a");
        let exit = ctrl.navigate(key("/b"), 0.0).unwrap();
        let enter_b = ctrl.on_timer(exit.generation, exit.at_ms).unwrap();
        assert_eq!(ctrl.mounted(), &key("/b"));

        let exit_b = ctrl.navigate(key("/c"), 350.0).unwrap();
        // B's enter never completes
        assert!(ctrl.on_timer(enter_b.generation, enter_b.at_ms).is_none());
        assert_eq!(ctrl.phase(), &TransitionPhase::Exiting(key("/b")));

        ctrl.on_timer(exit_b.generation, exit_b.at_ms);
        assert_eq!(ctrl.mounted(), &key("/c"));
    }

    #[test]
    fn test_navigating_back_during_exit_re_enters() {
        let mut ctrl = settled("/a");
        ctrl.navigate(key("/b"), 0.0).unwrap();
        let back = ctrl.navigate(key("/a"), 50.0).unwrap();
        assert_eq!(ctrl.phase(), &TransitionPhase::Entering(key("/a")));
        assert_eq!(ctrl.mounted(), &key("/a"));
        ctrl.on_timer(back.generation, back.at_ms);
        assert_eq!(ctrl.phase(), &TransitionPhase::Steady);
    }

    #[test]
    fn test_same_route_is_noop() {
        let mut ctrl = settled("/a");
        let generation = ctrl.generation();
        assert!(ctrl.navigate(key("/a"), 5.0).is_none());
        assert_eq!(ctrl.generation(), generation);
    }

    #[test]
    fn test_phase_classes_and_stylesheet() {
        let (ctrl, _) = PageTransitionController::new(key("/"), TransitionVariant::Fade, 0.0);
        assert_eq!(ctrl.phase_class(), "page-fade-entering");
        let css = TransitionVariant::Fade.stylesheet();
        assert!(css.contains("@keyframes page-fade-enter"));
        assert!(css.contains("600ms"));
        assert!(css.contains(".page-fade-exiting"));
    }
}
