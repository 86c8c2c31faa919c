//! Horizontal swipe navigation across an ordered list of routes.

/// Which neighbour of the current route to move to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

#[derive(Debug, Clone)]
pub struct SwipeNavigator<R> {
    routes: Vec<R>,
    threshold: f64,
    start: Option<(f64, f64)>,
}

impl<R: PartialEq + Clone> SwipeNavigator<R> {
    pub const DEFAULT_THRESHOLD: f64 = 50.0;

    pub fn new(routes: Vec<R>, threshold: f64) -> Self {
        Self {
            routes,
            threshold,
            start: None,
        }
    }

    pub fn routes(&self) -> &[R] {
        &self.routes
    }

    pub fn is_active(&self) -> bool {
        self.start.is_some()
    }

    /// Position of `current` in the route list, if it is part of it.
    pub fn current_index(&self, current: &R) -> Option<usize> {
        self.routes.iter().position(|r| r == current)
    }

    /// Record the start of a swipe. Overwrites any unterminated swipe.
    pub fn on_gesture_start(&mut self, x: f64, y: f64) {
        self.start = Some((x, y));
    }

    /// Finish the swipe and return the route to navigate to, if any.
    ///
    /// Only a predominantly horizontal drag longer than the threshold counts.
    /// A rightward swipe goes back, a leftward one goes forward; swipes past
    /// either end of the list, or from a route outside it, are absorbed.
    pub fn on_gesture_end(&mut self, x: f64, y: f64, current: &R) -> Option<R> {
        let (start_x, start_y) = self.start.take()?;
        let delta_x = x - start_x;
        let delta_y = y - start_y;

        if delta_x.abs() <= delta_y.abs() || delta_x.abs() <= self.threshold {
            return None;
        }

        let direction = if delta_x > 0.0 {
            Direction::Previous
        } else {
            Direction::Next
        };
        self.step(current, direction)
    }

    /// Neighbour of `current` in `direction`, honouring the list boundaries.
    pub fn step(&self, current: &R, direction: Direction) -> Option<R> {
        let index = self.current_index(current)?;
        let target = match direction {
            Direction::Previous => index.checked_sub(1)?,
            Direction::Next => index + 1,
        };
        self.routes.get(target).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn navigator() -> SwipeNavigator<&'static str> {
        SwipeNavigator::new(vec!["a", "b", "c"], SwipeNavigator::<&str>::DEFAULT_THRESHOLD)
    }

    fn swipe(
        nav: &mut SwipeNavigator<&'static str>,
        dx: f64,
        dy: f64,
        current: &'static str,
    ) -> Option<&'static str> {
        nav.on_gesture_start(200.0, 100.0);
        nav.on_gesture_end(200.0 + dx, 100.0 + dy, &current)
    }

    #[test]
    fn test_swipe_left_goes_forward() {
        let mut nav = navigator();
        assert_eq!(swipe(&mut nav, -80.0, 10.0, "b"), Some("c"));
    }

    #[test]
    fn test_swipe_right_goes_back() {
        let mut nav = navigator();
        assert_eq!(swipe(&mut nav, 80.0, -10.0, "b"), Some("a"));
    }

    #[test]
    fn test_boundaries_absorb_swipes() {
        let mut nav = navigator();
        assert_eq!(swipe(&mut nav, 80.0, 0.0, "a"), None);
        assert_eq!(swipe(&mut nav, -80.0, 0.0, "c"), None);
    }

    #[test]
    fn test_short_or_vertical_swipes_ignored() {
        let mut nav = navigator();
        assert_eq!(swipe(&mut nav, -50.0, 0.0, "b"), None);
        assert_eq!(swipe(&mut nav, -80.0, 90.0, "b"), None);
        assert_eq!(swipe(&mut nav, -80.0, -80.0, "b"), None);
    }

    #[test]
    fn test_unknown_route_is_noop() {
        let mut nav = navigator();
        assert_eq!(nav.current_index(&"z"), None);
        assert_eq!(swipe(&mut nav, -80.0, 0.0, "z"), None);
        assert_eq!(swipe(&mut nav, 80.0, 0.0, "z"), None);
    }

    #[test]
    fn test_end_without_start_is_noop() {
        let mut nav = navigator();
        assert_eq!(nav.on_gesture_end(0.0, 0.0, &"b"), None);
        assert_eq!(swipe(&mut nav, -80.0, 0.0, "b"), Some("c"));
        assert!(!nav.is_active());
        assert_eq!(nav.on_gesture_end(-500.0, 0.0, &"b"), None);
    }

    #[test]
    fn test_step_matches_swipe_boundaries() {
        let nav = navigator();
        assert_eq!(nav.step(&"a", Direction::Previous), None);
        assert_eq!(nav.step(&"a", Direction::Next), Some("b"));
        assert_eq!(nav.step(&"c", Direction::Next), None);
    }
}
