//! Per-gesture bookkeeping for titlebar presses.

use super::surface::Point;

/// How a titlebar gesture has been classified so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureClass {
    Unclassified,
    Click,
    WindowDrag,
}

/// One pointer-down-to-pointer-up sequence that started inside the band.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerGesture {
    origin: Point,
    current: Point,
    displacement: f64,
    class: GestureClass,
}

impl PointerGesture {
    /// Start tracking a gesture at `origin`.
    pub fn begin(origin: Point) -> Self {
        Self {
            origin,
            current: origin,
            displacement: 0.0,
            class: GestureClass::Unclassified,
        }
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn current(&self) -> Point {
        self.current
    }

    /// Distance of the current location from the origin.
    pub fn displacement(&self) -> f64 {
        self.displacement
    }

    pub fn class(&self) -> GestureClass {
        self.class
    }

    pub fn is_window_drag(&self) -> bool {
        self.class == GestureClass::WindowDrag
    }

    /// Record a new pointer location and return the updated displacement.
    pub fn track(&mut self, location: Point) -> f64 {
        self.current = location;
        self.displacement = self.origin.distance_to(location);
        self.displacement
    }

    /// Promote to a window drag if the displacement exceeds `threshold`.
    ///
    /// Returns true only on the call that performs the promotion. Once
    /// promoted the gesture never changes class again.
    pub fn promote_if_beyond(&mut self, threshold: f64) -> bool {
        if self.class == GestureClass::Unclassified && self.displacement > threshold {
            self.class = GestureClass::WindowDrag;
            true
        } else {
            false
        }
    }

    /// Settle the gesture on release. Unpromoted gestures become clicks.
    pub fn finish(&mut self) -> GestureClass {
        if self.class == GestureClass::Unclassified {
            self.class = GestureClass::Click;
        }
        self.class
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_displacement_is_euclidean() {
        let mut gesture = PointerGesture::begin(Point::new(10.0, 10.0));
        assert_eq!(gesture.track(Point::new(13.0, 14.0)), 5.0);
        assert_eq!(gesture.current(), Point::new(13.0, 14.0));
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let mut gesture = PointerGesture::begin(Point::new(0.0, 0.0));
        gesture.track(Point::new(5.0, 0.0));
        assert!(!gesture.promote_if_beyond(5.0));
        gesture.track(Point::new(5.1, 0.0));
        assert!(gesture.promote_if_beyond(5.0));
    }

    #[test]
    fn test_promotion_is_reported_once_and_sticks() {
        let mut gesture = PointerGesture::begin(Point::new(0.0, 0.0));
        gesture.track(Point::new(0.0, 9.0));
        assert!(gesture.promote_if_beyond(5.0));

        gesture.track(Point::new(0.0, 1.0));
        assert!(!gesture.promote_if_beyond(5.0));
        assert!(gesture.is_window_drag());
        assert_eq!(gesture.finish(), GestureClass::WindowDrag);
    }

    #[test]
    fn test_finish_without_promotion_is_click() {
        let mut gesture = PointerGesture::begin(Point::new(0.0, 0.0));
        gesture.track(Point::new(1.0, 1.0));
        assert_eq!(gesture.finish(), GestureClass::Click);
    }
}
