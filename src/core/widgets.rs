//! Small stateful widgets: testimonial carousel and FAQ accordion

/// Advance interval of the testimonial carousel
pub const CAROUSEL_INTERVAL_MS: u32 = 5000;

/// Wrapping slide index plus the direction of the last move, which
/// decides whether the next slide comes in from the left or right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
    direction: i8,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len,
            direction: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn direction(&self) -> i8 {
        self.direction
    }

    pub fn next(&mut self) {
        self.paginate(1);
    }

    pub fn prev(&mut self) {
        self.paginate(-1);
    }

    /// Jump to a dot; direction follows the relative position
    pub fn go_to(&mut self, index: usize) {
        if self.len == 0 || index >= self.len || index == self.index {
            return;
        }
        self.direction = if index > self.index { 1 } else { -1 };
        self.index = index;
    }

    fn paginate(&mut self, step: i8) {
        if self.len == 0 {
            return;
        }
        self.direction = step;
        self.index = if step > 0 {
            (self.index + 1) % self.len
        } else {
            (self.index + self.len - 1) % self.len
        };
    }
}

/// At most one open item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn toggle(&mut self, index: usize) {
        self.open = if self.is_open(index) { None } else { Some(index) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carousel_wraps_both_ways() {
        let mut c = Carousel::new(4);
        c.prev();
        assert_eq!(c.index(), 3);
        assert_eq!(c.direction(), -1);
        c.next();
        assert_eq!(c.index(), 0);
        assert_eq!(c.direction(), 1);
    }

    #[test]
    fn test_carousel_go_to() {
        let mut c = Carousel::new(4);
        c.go_to(2);
        assert_eq!((c.index(), c.direction()), (2, 1));
        c.go_to(1);
        assert_eq!((c.index(), c.direction()), (1, -1));
        c.go_to(9);
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let mut c = Carousel::new(0);
        c.next();
        c.prev();
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_accordion_single_open() {
        let mut a = Accordion::default();
        a.toggle(1);
        assert!(a.is_open(1));
        a.toggle(3);
        assert!(!a.is_open(1));
        assert!(a.is_open(3));
        a.toggle(3);
        assert!(!a.is_open(3));
    }
}
