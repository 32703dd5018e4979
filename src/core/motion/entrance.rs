//! Entrance primitives: fade, slide, scale, staggered groups and word reveal.
//!
//! An entrance is a pure function of its visibility trigger: hidden style
//! before the trigger, identity style after it. Interpolation between the
//! two is left to a CSS transition built from the same spec, so nothing
//! here runs per frame.

use super::easing::Easing;
use super::visibility::VisibilityState;

/// Direction of an offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
    None,
}

impl Direction {
    /// Starting offset for an element that travels *in* this direction.
    pub fn travel_offset(&self, distance: f64) -> (f64, f64) {
        match self {
            Direction::Up => (0.0, distance),
            Direction::Down => (0.0, -distance),
            Direction::Left => (distance, 0.0),
            Direction::Right => (-distance, 0.0),
            Direction::None => (0.0, 0.0),
        }
    }

    /// Starting offset for an element that arrives *from* this side.
    pub fn origin_offset(&self, distance: f64) -> (f64, f64) {
        match self {
            Direction::Up => (0.0, distance),
            Direction::Down => (0.0, -distance),
            Direction::Left => (-distance, 0.0),
            Direction::Right => (distance, 0.0),
            Direction::None => (0.0, 0.0),
        }
    }
}

/// Visual properties an animation drives
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionStyle {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl MotionStyle {
    pub const IDENTITY: MotionStyle = MotionStyle {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    pub fn css(&self) -> String {
        format!(
            "opacity: {}; transform: translate3d({}px, {}px, 0) scale({});",
            self.opacity, self.x, self.y, self.scale
        )
    }
}

/// What an entrance animates from
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntranceKind {
    Fade { direction: Direction, distance: f64 },
    Slide { direction: Direction, distance: f64 },
    Scale { from: f64 },
}

/// Parameters of one entrance animation. Durations and delays are in
/// seconds and may be zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntranceSpec {
    pub kind: EntranceKind,
    pub duration: f64,
    pub delay: f64,
    pub easing: Easing,
}

impl EntranceSpec {
    pub fn fade(direction: Direction) -> Self {
        Self {
            kind: EntranceKind::Fade {
                direction,
                distance: super::FADE_DISTANCE,
            },
            duration: super::FADE_DURATION,
            delay: 0.0,
            easing: Easing::Entrance,
        }
    }

    pub fn slide(direction: Direction) -> Self {
        Self {
            kind: EntranceKind::Slide {
                direction,
                distance: super::SLIDE_DISTANCE,
            },
            duration: super::SLIDE_DURATION,
            delay: 0.0,
            easing: Easing::EaseOut,
        }
    }

    pub fn scale() -> Self {
        Self {
            kind: EntranceKind::Scale {
                from: super::SCALE_FROM,
            },
            duration: super::SCALE_DURATION,
            delay: 0.0,
            easing: Easing::EaseOut,
        }
    }

    /// Child of a staggered group
    pub fn stagger_item(direction: Direction) -> Self {
        Self {
            kind: EntranceKind::Slide {
                direction,
                distance: super::FADE_DISTANCE,
            },
            duration: super::STAGGER_ITEM_DURATION,
            delay: 0.0,
            easing: Easing::EaseOut,
        }
    }

    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration.max(0.0);
        self
    }

    pub fn hidden_style(&self) -> MotionStyle {
        match self.kind {
            EntranceKind::Fade {
                direction,
                distance,
            } => {
                let (x, y) = direction.travel_offset(distance);
                MotionStyle {
                    opacity: 0.0,
                    x,
                    y,
                    scale: 1.0,
                }
            }
            EntranceKind::Slide {
                direction,
                distance,
            } => {
                let (x, y) = direction.origin_offset(distance);
                MotionStyle {
                    opacity: 0.0,
                    x,
                    y,
                    scale: 1.0,
                }
            }
            EntranceKind::Scale { from } => MotionStyle {
                opacity: 0.0,
                x: 0.0,
                y: 0.0,
                scale: from,
            },
        }
    }

    /// CSS transition declaration covering opacity and transform
    pub fn transition_css(&self) -> String {
        let easing = self.easing.css();
        format!(
            "transition: opacity {d}s {e} {delay}s, transform {d}s {e} {delay}s;",
            d = self.duration,
            e = easing,
            delay = self.delay
        )
    }
}

/// An entrance bound to its visibility trigger
#[derive(Debug, Clone, PartialEq)]
pub struct Reveal {
    spec: EntranceSpec,
    visibility: VisibilityState,
}

impl Reveal {
    pub fn new(spec: EntranceSpec, trigger_once: bool) -> Self {
        Self {
            spec,
            visibility: VisibilityState::new(trigger_once),
        }
    }

    /// Feed an intersection change
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        self.visibility.observe(is_intersecting)
    }

    /// Target style for the current trigger state
    pub fn style(&self) -> MotionStyle {
        style_for(&self.spec, self.visibility.is_visible())
    }

    pub fn is_revealed(&self) -> bool {
        self.visibility.is_visible()
    }

    /// Inline style for the current trigger state
    pub fn css(&self) -> String {
        inline_style(&self.spec, self.is_revealed())
    }
}

/// Target style for a spec given whether its trigger has fired
pub fn style_for(spec: &EntranceSpec, visible: bool) -> MotionStyle {
    if visible {
        MotionStyle::IDENTITY
    } else {
        spec.hidden_style()
    }
}

/// Inline style for a spec: target values plus the transition that gets there
pub fn inline_style(spec: &EntranceSpec, visible: bool) -> String {
    format!("{} {}", style_for(spec, visible).css(), spec.transition_css())
}

/// Timing of a staggered group of children
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaggerGroup {
    /// Delay between consecutive children, seconds
    pub increment: f64,
    /// Delay before the first child, seconds
    pub delay_children: f64,
}

impl Default for StaggerGroup {
    fn default() -> Self {
        Self {
            increment: super::STAGGER_INCREMENT,
            delay_children: 0.0,
        }
    }
}

impl StaggerGroup {
    pub fn new(increment: f64) -> Self {
        Self {
            increment: increment.max(0.0),
            delay_children: 0.0,
        }
    }

    /// Start offset of child `index` after the group becomes visible
    pub fn child_delay(&self, index: usize) -> f64 {
        self.delay_children + index as f64 * self.increment
    }

    pub fn child_spec(&self, index: usize, base: EntranceSpec) -> EntranceSpec {
        base.with_delay(base.delay + self.child_delay(index))
    }
}

/// Split text into words, each with its reveal delay
pub fn word_delays(text: &str, base_delay: f64) -> Vec<(String, f64)> {
    text.split_whitespace()
        .enumerate()
        .map(|(i, word)| {
            (
                word.to_string(),
                base_delay + i as f64 * super::WORD_REVEAL_STEP,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Trigger-once behaviour
    // ========================================================================

    #[test]
    fn test_reveal_converges_and_stays() {
        for spec in [
            EntranceSpec::fade(Direction::Up),
            EntranceSpec::slide(Direction::Left),
            EntranceSpec::scale(),
        ] {
            let mut reveal = Reveal::new(spec, true);
            assert_eq!(reveal.style().opacity, 0.0);

            reveal.observe(true);
            assert_eq!(reveal.style(), MotionStyle::IDENTITY);

            reveal.observe(false);
            reveal.observe(false);
            assert_eq!(reveal.style().opacity, 1.0);
        }
    }

    #[test]
    fn test_repeating_reveal_hides_again() {
        let mut reveal = Reveal::new(EntranceSpec::fade(Direction::Up), false);
        reveal.observe(true);
        assert!(reveal.is_revealed());
        reveal.observe(false);
        assert!(!reveal.is_revealed());
        assert_eq!(reveal.style().opacity, 0.0);
    }

    // ========================================================================
    // Offsets
    // ========================================================================

    #[test]
    fn test_fade_offsets() {
        let up = EntranceSpec::fade(Direction::Up).hidden_style();
        assert_eq!((up.x, up.y), (0.0, 30.0));
        let left = EntranceSpec::fade(Direction::Left).hidden_style();
        assert_eq!((left.x, left.y), (30.0, 0.0));
        let none = EntranceSpec::fade(Direction::None).hidden_style();
        assert_eq!((none.x, none.y), (0.0, 0.0));
    }

    #[test]
    fn test_slide_comes_from_its_side() {
        let left = EntranceSpec::slide(Direction::Left).hidden_style();
        assert_eq!(left.x, -100.0);
        let right = EntranceSpec::slide(Direction::Right).hidden_style();
        assert_eq!(right.x, 100.0);
    }

    #[test]
    fn test_scale_starts_small() {
        let style = EntranceSpec::scale().hidden_style();
        assert_eq!(style.scale, 0.8);
        assert_eq!(style.opacity, 0.0);
    }

    #[test]
    fn test_zero_timing_is_accepted() {
        let spec = EntranceSpec::fade(Direction::Up)
            .with_duration(0.0)
            .with_delay(0.0);
        assert!(spec.transition_css().contains("opacity 0s"));
    }

    #[test]
    fn test_negative_timing_is_clamped() {
        let spec = EntranceSpec::scale().with_delay(-1.0).with_duration(-2.0);
        assert_eq!(spec.delay, 0.0);
        assert_eq!(spec.duration, 0.0);
    }

    // ========================================================================
    // Stagger
    // ========================================================================

    #[test]
    fn test_stagger_preserves_dom_order() {
        let group = StaggerGroup::new(0.15);
        let delays: Vec<f64> = (0..5).map(|i| group.child_delay(i)).collect();
        assert_eq!(delays[0], 0.0);
        assert!(delays.windows(2).all(|w| w[0] < w[1]));
        assert!((delays[4] - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_stagger_child_spec_adds_to_base_delay() {
        let group = StaggerGroup {
            increment: 0.1,
            delay_children: 0.2,
        };
        let spec = group.child_spec(3, EntranceSpec::stagger_item(Direction::Up).with_delay(0.5));
        assert!((spec.delay - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_word_delays() {
        let words = word_delays("Learn  from experts", 0.2);
        assert_eq!(words.len(), 3);
        assert_eq!(words[0].0, "Learn");
        assert!((words[2].1 - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_inline_style_contains_target_and_transition() {
        let spec = EntranceSpec::fade(Direction::Up);
        let shown = inline_style(&spec, true);
        assert!(shown.starts_with("opacity: 1;"));
        assert!(shown.contains("transition:"));
    }
}
