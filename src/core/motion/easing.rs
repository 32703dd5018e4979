//! Easing curves shared by the motion primitives.
//!
//! Entrance and page animations are rendered through CSS transitions, so a
//! curve only needs its CSS form. Count-up samples [`ease_out_cubic`] per
//! frame instead.

/// Timing curve for a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Fixed cubic curve used by every entrance animation
    Entrance,
    EaseOut,
    EaseIn,
    EaseInOut,
}

/// Control points of the entrance curve.
pub const ENTRANCE_BEZIER: (f64, f64, f64, f64) = (0.25, 0.46, 0.45, 0.94);

impl Easing {
    /// CSS `transition-timing-function` value
    pub fn css(&self) -> String {
        match self {
            Easing::Entrance => {
                let (x1, y1, x2, y2) = ENTRANCE_BEZIER;
                format!("cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
            Easing::EaseOut => "ease-out".to_string(),
            Easing::EaseIn => "ease-in".to_string(),
            Easing::EaseInOut => "ease-in-out".to_string(),
        }
    }
}

/// `1 - (1 - t)^3`, with `t` clamped to [0, 1]
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_out_cubic_endpoints_and_clamp() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(-3.0), 0.0);
        assert_eq!(ease_out_cubic(4.0), 1.0);
    }

    #[test]
    fn test_ease_out_cubic_midpoint() {
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
    }

    #[test]
    fn test_entrance_css() {
        assert_eq!(
            Easing::Entrance.css(),
            "cubic-bezier(0.25, 0.46, 0.45, 0.94)"
        );
        assert_eq!(Easing::EaseInOut.css(), "ease-in-out");
    }
}
