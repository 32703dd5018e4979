//! Scroll progress derivations.
//!
//! All functions here are pure; every tracker recomputes from the same
//! read-only platform metrics rather than sharing state.

/// Platform scroll metrics at one instant
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub fn fraction(&self) -> f64 {
        scroll_fraction(self.scroll_top, self.document_height, self.viewport_height)
    }
}

/// Fraction of the document scrolled, always within [0, 1].
///
/// A document that does not scroll reports 0.
pub fn scroll_fraction(scroll_top: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if !(scrollable > 0.0) || !scroll_top.is_finite() {
        return 0.0;
    }
    (scroll_top / scrollable).clamp(0.0, 1.0)
}

/// Back-to-top button state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackToTop {
    pub visible: bool,
    pub fraction: f64,
}

impl BackToTop {
    pub fn compute(metrics: ScrollMetrics, threshold: f64) -> Self {
        Self {
            visible: metrics.scroll_top > threshold,
            fraction: metrics.fraction(),
        }
    }
}

/// Progress ring geometry for a circular indicator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressRing {
    pub circumference: f64,
}

impl ProgressRing {
    pub fn with_radius(radius: f64) -> Self {
        Self {
            circumference: 2.0 * std::f64::consts::PI * radius,
        }
    }

    /// `stroke-dashoffset` for a fraction
    pub fn dash_offset(&self, fraction: f64) -> f64 {
        self.circumference * (1.0 - fraction.clamp(0.0, 1.0))
    }
}

/// Whole percentage label for a fraction
pub fn percent_label(fraction: f64) -> String {
    format!("{}%", (fraction.clamp(0.0, 1.0) * 100.0).round() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_basic() {
        assert_eq!(scroll_fraction(0.0, 2000.0, 1000.0), 0.0);
        assert_eq!(scroll_fraction(500.0, 2000.0, 1000.0), 0.5);
        assert_eq!(scroll_fraction(1000.0, 2000.0, 1000.0), 1.0);
    }

    #[test]
    fn test_fraction_not_scrollable() {
        assert_eq!(scroll_fraction(0.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_fraction(100.0, 600.0, 800.0), 0.0);
        assert!(!scroll_fraction(0.0, 0.0, 0.0).is_nan());
    }

    #[test]
    fn test_fraction_is_clamped() {
        // overscroll bounce on touch devices
        assert_eq!(scroll_fraction(-40.0, 2000.0, 1000.0), 0.0);
        assert_eq!(scroll_fraction(1200.0, 2000.0, 1000.0), 1.0);
        assert_eq!(scroll_fraction(f64::NAN, 2000.0, 1000.0), 0.0);
    }

    #[test]
    fn test_fraction_is_idempotent() {
        let m = ScrollMetrics {
            scroll_top: 321.0,
            document_height: 5000.0,
            viewport_height: 900.0,
        };
        assert_eq!(m.fraction(), m.fraction());
    }

    #[test]
    fn test_back_to_top_threshold() {
        let at = |top| ScrollMetrics {
            scroll_top: top,
            document_height: 3000.0,
            viewport_height: 1000.0,
        };
        assert!(!BackToTop::compute(at(400.0), 400.0).visible);
        let state = BackToTop::compute(at(401.0), 400.0);
        assert!(state.visible);
        assert_eq!(state.fraction, at(401.0).fraction());
    }

    #[test]
    fn test_ring_offsets() {
        let ring = ProgressRing::with_radius(22.0);
        assert_eq!(ring.dash_offset(0.0), ring.circumference);
        assert_eq!(ring.dash_offset(1.0), 0.0);
        assert!((ring.dash_offset(0.5) - ring.circumference / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_percent_label() {
        assert_eq!(percent_label(0.0), "0%");
        assert_eq!(percent_label(0.456), "46%");
        assert_eq!(percent_label(2.0), "100%");
    }
}
