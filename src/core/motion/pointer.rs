//! Pointer and scroll driven offsets: magnetic hover and parallax.

/// Axis-aligned element box in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Translation applied to a magnetic element
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerOffset {
    pub dx: f64,
    pub dy: f64,
}

impl PointerOffset {
    pub const ZERO: PointerOffset = PointerOffset { dx: 0.0, dy: 0.0 };

    pub fn css(&self) -> String {
        format!("transform: translate({}px, {}px);", self.dx, self.dy)
    }
}

/// Magnetic hover state for one element.
///
/// Every move recomputes from the absolute pointer position, so the
/// offset never accumulates drift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Magnetic {
    strength: f64,
    /// Only attract while the pointer is within this distance of the centre
    radius: Option<f64>,
    offset: PointerOffset,
}

impl Magnetic {
    pub fn new(strength: f64) -> Self {
        Self {
            strength,
            radius: None,
            offset: PointerOffset::ZERO,
        }
    }

    /// Window-level variant that lets go outside `radius`
    pub fn with_radius(strength: f64, radius: f64) -> Self {
        Self {
            radius: Some(radius),
            ..Self::new(strength)
        }
    }

    pub fn pointer_move(&mut self, pointer: (f64, f64), element: Rect) -> PointerOffset {
        let (cx, cy) = element.center();
        let (dx, dy) = (pointer.0 - cx, pointer.1 - cy);

        let in_range = match self.radius {
            Some(r) => (dx * dx + dy * dy).sqrt() < r,
            None => true,
        };

        self.offset = if in_range {
            PointerOffset {
                dx: dx * self.strength,
                dy: dy * self.strength,
            }
        } else {
            PointerOffset::ZERO
        };
        self.offset
    }

    pub fn pointer_leave(&mut self) -> PointerOffset {
        self.offset = PointerOffset::ZERO;
        self.offset
    }

    pub fn offset(&self) -> PointerOffset {
        self.offset
    }
}

/// Vertical parallax offset for an element.
///
/// Stateless: depends only on the current scroll position and layout.
pub fn parallax_offset(scroll_y: f64, element_top: f64, viewport_height: f64, speed: f64) -> f64 {
    (scroll_y - element_top + viewport_height) * speed * super::PARALLAX_FACTOR
}

/// Parallax offset from the viewport rect of the element's untransformed
/// wrapper. The wrapper must not carry the offset itself, otherwise the
/// measured top drifts with every applied frame.
pub fn parallax_from_rect(metrics: super::ScrollMetrics, wrapper_top: f64, speed: f64) -> f64 {
    parallax_offset(
        metrics.scroll_top,
        wrapper_top + metrics.scroll_top,
        metrics.viewport_height,
        speed,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOX: Rect = Rect {
        left: 100.0,
        top: 200.0,
        width: 80.0,
        height: 40.0,
    };

    #[test]
    fn test_magnetic_offset_is_exact() {
        let mut m = Magnetic::new(0.3);
        let offset = m.pointer_move((150.0, 210.0), BOX);
        // centre is (140, 220)
        assert_eq!(offset.dx, (150.0 - 140.0) * 0.3);
        assert_eq!(offset.dy, (210.0 - 220.0) * 0.3);
    }

    #[test]
    fn test_magnetic_leave_resets() {
        let mut m = Magnetic::new(0.5);
        m.pointer_move((0.0, 0.0), BOX);
        assert_eq!(m.pointer_leave(), PointerOffset::ZERO);
        assert_eq!(m.offset(), PointerOffset::ZERO);
    }

    #[test]
    fn test_magnetic_has_no_drift() {
        let mut m = Magnetic::new(0.3);
        for _ in 0..100 {
            m.pointer_move((170.0, 240.0), BOX);
        }
        assert_eq!(m.offset(), PointerOffset { dx: 30.0 * 0.3, dy: 20.0 * 0.3 });
    }

    #[test]
    fn test_magnetic_radius() {
        let mut m = Magnetic::with_radius(0.3, 150.0);
        let near = m.pointer_move((240.0, 220.0), BOX);
        assert_eq!(near.dx, 100.0 * 0.3);
        let far = m.pointer_move((400.0, 220.0), BOX);
        assert_eq!(far, PointerOffset::ZERO);
    }

    #[test]
    fn test_parallax_is_stateless() {
        let a = parallax_offset(500.0, 800.0, 900.0, 0.5);
        let b = parallax_offset(500.0, 800.0, 900.0, 0.5);
        assert_eq!(a, b);
        assert!((a - 30.0).abs() < 1e-9);
        assert_eq!(parallax_offset(500.0, 800.0, 900.0, 0.0), 0.0);
    }

    #[test]
    fn test_parallax_from_wrapper_is_repeatable() {
        // Wrapper sits at document top 800; its viewport rect top is 800 - scroll
        let layout_top = 800.0;
        for scroll in [0.0, 250.0, 500.0, 1200.0] {
            let metrics = crate::core::motion::ScrollMetrics {
                scroll_top: scroll,
                document_height: 4000.0,
                viewport_height: 900.0,
            };
            let first = parallax_from_rect(metrics, layout_top - scroll, 0.5);
            let again = parallax_from_rect(metrics, layout_top - scroll, 0.5);
            assert_eq!(first, again);
            assert_eq!(first, parallax_offset(scroll, layout_top, 900.0, 0.5));
        }
    }
}
