//! Carousel ids and the per-carousel slide state machine

/// Characters dropped when building a carousel id
const STRIPPED_CHARS: &[char] = &['\'', '"', '(', ')', ',', '.', '!', '?', ':', ';'];

/// Build the DOM id for a description's carousel.
///
/// Distinct descriptions can collide (e.g. "Old Town" and "Old Town!"); the
/// later carousel then shares the earlier one's bindings on the page.
pub fn carousel_id(description: &str) -> String {
    let mut id = String::with_capacity(description.len() + 9);
    for c in description.to_lowercase().chars() {
        match c {
            ' ' => id.push('-'),
            '&' => id.push_str("and"),
            c if STRIPPED_CHARS.contains(&c) => {}
            c => id.push(c),
        }
    }
    id.push_str("-carousel");
    id
}

/// Slide position of one carousel, matching the generated page script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    current: usize,
    total: usize,
}

impl CarouselState {
    pub fn new(total: usize) -> Self {
        Self { current: 0, total }
    }

    #[allow(dead_code)]
    pub fn current(&self) -> usize {
        self.current
    }

    #[allow(dead_code)]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Step forward or back, wrapping at both ends
    #[allow(dead_code)]
    pub fn move_by(&mut self, delta: isize) {
        if self.total == 0 {
            return;
        }
        let total = self.total as isize;
        self.current = (self.current as isize + delta).rem_euclid(total) as usize;
    }

    /// Set the index directly; callers supply valid indices
    #[allow(dead_code)]
    pub fn jump_to(&mut self, index: usize) {
        self.current = index;
    }

    pub fn counter_text(&self) -> String {
        format!("{} / {}", self.current + 1, self.total)
    }

    /// Horizontal offset of the slide strip, in percent
    #[allow(dead_code)]
    pub fn translate_percent(&self) -> isize {
        -(self.current as isize) * 100
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carousel_id() {
        assert_eq!(
            carousel_id("Sunset Point (Evening)!"),
            "sunset-point-evening-carousel"
        );
        assert_eq!(carousel_id("Fish & Chips"), "fish-and-chips-carousel");
        assert_eq!(
            carousel_id("St. Mark's \"Basilica\": Venice; Italy, Europe?"),
            "st-marks-basilica-venice-italy-europe-carousel"
        );
    }

    #[test]
    fn test_carousel_id_keeps_other_characters() {
        assert_eq!(carousel_id("Café-Bar #2"), "café-bar-#2-carousel");
    }

    #[test]
    fn test_carousel_id_collision_passes_through() {
        assert_eq!(carousel_id("Old Town"), carousel_id("Old Town!"));
        assert_eq!(carousel_id("old town"), carousel_id("OLD TOWN"));
    }

    #[test]
    fn test_initial_state() {
        let state = CarouselState::new(4);
        assert_eq!(state.current(), 0);
        assert_eq!(state.total(), 4);
        assert_eq!(state.counter_text(), "1 / 4");
        assert_eq!(state.translate_percent(), 0);
    }

    #[test]
    fn test_move_wraps_backwards() {
        let mut state = CarouselState::new(3);
        state.move_by(-1);
        assert_eq!(state.current(), 2);
        assert_eq!(state.counter_text(), "3 / 3");
        assert_eq!(state.translate_percent(), -200);
    }

    #[test]
    fn test_move_wraps_forwards() {
        let mut state = CarouselState::new(3);
        state.jump_to(2);
        state.move_by(1);
        assert_eq!(state.current(), 0);

        state.move_by(1);
        state.move_by(1);
        assert_eq!(state.current(), 2);
    }

    #[test]
    fn test_jump_to() {
        let mut state = CarouselState::new(5);
        state.jump_to(3);
        assert_eq!(state.counter_text(), "4 / 5");
        assert_eq!(state.translate_percent(), -300);
    }

    #[test]
    fn test_move_on_empty_carousel_is_noop() {
        let mut state = CarouselState::new(0);
        state.move_by(1);
        assert_eq!(state.current(), 0);
    }
}
