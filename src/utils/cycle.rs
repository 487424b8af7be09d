/// Wrap-around position over `len` items. An empty cycle stays at 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cycle {
    index: usize,
    len: usize,
}

impl Cycle {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn next(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self { index: (self.index + 1) % self.len, ..self }
    }

    pub fn prev(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self { index: (self.index + self.len - 1) % self.len, ..self }
    }

    /// Out-of-range targets are ignored.
    pub fn go_to(self, index: usize) -> Self {
        if index < self.len {
            Self { index, ..self }
        } else {
            self
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    Next,
    Prev,
}

/// A leftward swipe (finger moving toward smaller x) advances.
pub fn swipe_direction(start_x: i32, end_x: i32, threshold: i32) -> Option<SwipeDirection> {
    let delta = end_x - start_x;
    if delta <= -threshold {
        Some(SwipeDirection::Next)
    } else if delta >= threshold {
        Some(SwipeDirection::Prev)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_both_ways() {
        let c = Cycle::new(3);
        assert_eq!(c.next().next().next().index(), 0);
        assert_eq!(c.prev().index(), 2);
        assert_eq!(c.prev().prev().prev().index(), 0);
    }

    #[test]
    fn go_to_ignores_out_of_range() {
        let c = Cycle::new(4).go_to(2);
        assert_eq!(c.index(), 2);
        assert_eq!(c.go_to(9).index(), 2);
    }

    #[test]
    fn empty_cycle_is_inert() {
        let c = Cycle::new(0);
        assert_eq!(c.len(), 0);
        assert_eq!(c.next().index(), 0);
        assert_eq!(c.prev().index(), 0);
        assert_eq!(c.go_to(0).index(), 0);
    }

    #[test]
    fn swipe_needs_threshold() {
        assert_eq!(swipe_direction(300, 200, 50), Some(SwipeDirection::Next));
        assert_eq!(swipe_direction(200, 300, 50), Some(SwipeDirection::Prev));
        assert_eq!(swipe_direction(200, 230, 50), None);
        assert_eq!(swipe_direction(200, 150, 50), Some(SwipeDirection::Next));
    }
}
