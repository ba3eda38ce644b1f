//! Click/drag disambiguation for presses on the titlebar band.
//!
//! The down event of a titlebar press is forwarded to the content right
//! away, so a plain click only needs its matching up forwarded on release.
//! Once the pointer travels beyond the threshold the gesture becomes a
//! window drag for good: moves go to the window and the up is withheld,
//! since the content already saw the down.
//!
//! ```text
//! Idle ──down outside band──▶ PassThrough ──up──▶ Idle
//!   │
//!   └──down inside band──▶ TitlebarCandidate ──up──▶ Idle (click)
//!                               │
//!                               └──move > threshold──▶ WindowDrag ──up──▶ Idle
//! ```

use tracing::{debug, trace};

use super::band::TitlebarBand;
use super::gesture::{GestureClass, PointerGesture};
use super::surface::{ContentSurface, Point, PointerEvent, PointerPhase, WindowMover};
use crate::model::constants::DRAG_THRESHOLD;

/// Observable classifier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifierState {
    /// No gesture in progress.
    Idle,
    /// A gesture that started outside the band; everything is forwarded.
    PassThrough,
    /// A titlebar press that has not moved beyond the threshold.
    TitlebarCandidate,
    /// A titlebar press that is moving the window.
    WindowDrag,
}

/// How a finished gesture was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    PassThrough,
    Click,
    WindowDrag,
}

/// What the classifier did with one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Delivered to the content surface unmodified.
    Forwarded,
    /// First move beyond the threshold; the window was asked to move.
    DragStarted,
    /// A later move of a window drag; the window was asked to move.
    WindowMoved,
    /// The gesture ended. The up was forwarded unless the outcome is a window drag.
    Completed(GestureOutcome),
}

impl Disposition {
    /// Returns true if the event reached the content surface.
    pub fn was_forwarded(&self) -> bool {
        match self {
            Disposition::Forwarded => true,
            Disposition::DragStarted | Disposition::WindowMoved => false,
            Disposition::Completed(outcome) => *outcome != GestureOutcome::WindowDrag,
        }
    }
}

#[derive(Debug)]
enum Tracking {
    Idle,
    PassThrough,
    Titlebar(PointerGesture),
}

/// Single-pointer state machine for one content surface.
#[derive(Debug)]
pub struct DragClassifier {
    band: TitlebarBand,
    threshold: f64,
    tracking: Tracking,
}

impl DragClassifier {
    pub fn new(band: TitlebarBand) -> Self {
        Self {
            band,
            threshold: DRAG_THRESHOLD,
            tracking: Tracking::Idle,
        }
    }

    /// Override the drag threshold. Negative or non-finite values are ignored.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        if threshold.is_finite() && threshold >= 0.0 {
            self.threshold = threshold;
        }
        self
    }

    pub fn band(&self) -> TitlebarBand {
        self.band
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn state(&self) -> ClassifierState {
        match &self.tracking {
            Tracking::Idle => ClassifierState::Idle,
            Tracking::PassThrough => ClassifierState::PassThrough,
            Tracking::Titlebar(gesture) if gesture.is_window_drag() => ClassifierState::WindowDrag,
            Tracking::Titlebar(_) => ClassifierState::TitlebarCandidate,
        }
    }

    /// The titlebar gesture in progress, if any.
    pub fn gesture(&self) -> Option<&PointerGesture> {
        match &self.tracking {
            Tracking::Titlebar(gesture) => Some(gesture),
            _ => None,
        }
    }

    /// Drop any gesture in progress without emitting events.
    pub fn reset(&mut self) {
        self.tracking = Tracking::Idle;
    }

    /// Route one pointer event.
    ///
    /// `window_height` is the current height of the window in points; it
    /// is only consulted for down events.
    pub fn handle<S, W>(
        &mut self,
        event: &PointerEvent,
        window_height: f64,
        surface: &mut S,
        window: &mut W,
    ) -> Disposition
    where
        S: ContentSurface + ?Sized,
        W: WindowMover + ?Sized,
    {
        match event.phase {
            PointerPhase::Down => self.pointer_down(event, window_height, surface),
            PointerPhase::Moved => self.pointer_moved(event, surface, window),
            PointerPhase::Up => self.pointer_up(event, surface),
        }
    }

    fn pointer_down<S>(
        &mut self,
        event: &PointerEvent,
        window_height: f64,
        surface: &mut S,
    ) -> Disposition
    where
        S: ContentSurface + ?Sized,
    {
        if !matches!(self.tracking, Tracking::Idle) {
            debug!(state = ?self.state(), "pointer down during active gesture, restarting");
        }

        if self.band.contains(event.location.y, window_height) {
            trace!(x = event.location.x, y = event.location.y, "titlebar press");
            self.tracking = Tracking::Titlebar(PointerGesture::begin(event.location));
        } else {
            self.tracking = Tracking::PassThrough;
        }

        surface.forward(event);
        Disposition::Forwarded
    }

    fn pointer_moved<S, W>(
        &mut self,
        event: &PointerEvent,
        surface: &mut S,
        window: &mut W,
    ) -> Disposition
    where
        S: ContentSurface + ?Sized,
        W: WindowMover + ?Sized,
    {
        let gesture = match &mut self.tracking {
            Tracking::Titlebar(gesture) => gesture,
            Tracking::Idle | Tracking::PassThrough => {
                surface.forward(event);
                return Disposition::Forwarded;
            }
        };

        if gesture.is_window_drag() {
            gesture.track(event.location);
            move_window(window, event, gesture.origin());
            return Disposition::WindowMoved;
        }

        let displacement = gesture.track(event.location);
        if gesture.promote_if_beyond(self.threshold) {
            debug!(displacement, "titlebar press became a window drag");
            move_window(window, event, gesture.origin());
            Disposition::DragStarted
        } else {
            surface.forward(event);
            Disposition::Forwarded
        }
    }

    fn pointer_up<S>(&mut self, event: &PointerEvent, surface: &mut S) -> Disposition
    where
        S: ContentSurface + ?Sized,
    {
        match std::mem::replace(&mut self.tracking, Tracking::Idle) {
            Tracking::Idle => {
                surface.forward(event);
                Disposition::Forwarded
            }
            Tracking::PassThrough => {
                surface.forward(event);
                Disposition::Completed(GestureOutcome::PassThrough)
            }
            Tracking::Titlebar(mut gesture) => match gesture.finish() {
                GestureClass::WindowDrag => {
                    debug!("window drag finished, release withheld from content");
                    Disposition::Completed(GestureOutcome::WindowDrag)
                }
                _ => {
                    surface.forward(event);
                    Disposition::Completed(GestureOutcome::Click)
                }
            },
        }
    }
}

/// Best-effort window move; failures do not affect classification.
fn move_window<W>(window: &mut W, event: &PointerEvent, anchor: Point)
where
    W: WindowMover + ?Sized,
{
    if let Err(err) = window.move_window(event, anchor) {
        debug!(%err, "window move skipped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShellError;

    #[derive(Default)]
    struct Surface(Vec<PointerPhase>);

    impl ContentSurface for Surface {
        fn forward(&mut self, event: &PointerEvent) {
            self.0.push(event.phase);
        }
    }

    #[derive(Default)]
    struct Window(usize);

    impl WindowMover for Window {
        fn move_window(&mut self, _event: &PointerEvent, _anchor: Point) -> Result<(), ShellError> {
            self.0 += 1;
            Ok(())
        }
    }

    fn classifier() -> DragClassifier {
        DragClassifier::new(TitlebarBand::new(60.0))
    }

    #[test]
    fn test_starts_idle() {
        let c = classifier();
        assert_eq!(c.state(), ClassifierState::Idle);
        assert!(c.gesture().is_none());
        assert_eq!(c.threshold(), DRAG_THRESHOLD);
    }

    #[test]
    fn test_down_inside_band_is_candidate_and_forwarded() {
        let mut c = classifier();
        let (mut s, mut w) = (Surface::default(), Window::default());

        let d = c.handle(&PointerEvent::down(100.0, 750.0), 800.0, &mut s, &mut w);

        assert_eq!(d, Disposition::Forwarded);
        assert_eq!(c.state(), ClassifierState::TitlebarCandidate);
        assert_eq!(s.0, vec![PointerPhase::Down]);
    }

    #[test]
    fn test_down_outside_band_is_pass_through() {
        let mut c = classifier();
        let (mut s, mut w) = (Surface::default(), Window::default());

        c.handle(&PointerEvent::down(100.0, 300.0), 800.0, &mut s, &mut w);
        assert_eq!(c.state(), ClassifierState::PassThrough);
        assert!(c.gesture().is_none());
    }

    #[test]
    fn test_small_move_is_forwarded() {
        let mut c = classifier();
        let (mut s, mut w) = (Surface::default(), Window::default());

        c.handle(&PointerEvent::down(100.0, 750.0), 800.0, &mut s, &mut w);
        let d = c.handle(&PointerEvent::moved(103.0, 754.0), 800.0, &mut s, &mut w);

        assert_eq!(d, Disposition::Forwarded);
        assert_eq!(c.state(), ClassifierState::TitlebarCandidate);
        assert_eq!(w.0, 0);
    }

    #[test]
    fn test_crossing_reports_drag_started_once() {
        let mut c = classifier();
        let (mut s, mut w) = (Surface::default(), Window::default());

        c.handle(&PointerEvent::down(100.0, 750.0), 800.0, &mut s, &mut w);
        let first = c.handle(&PointerEvent::moved(100.0, 744.0), 800.0, &mut s, &mut w);
        let second = c.handle(&PointerEvent::moved(100.0, 740.0), 800.0, &mut s, &mut w);

        assert_eq!(first, Disposition::DragStarted);
        assert_eq!(second, Disposition::WindowMoved);
        assert_eq!(w.0, 2);
    }

    #[test]
    fn test_idle_move_and_up_are_forwarded() {
        let mut c = classifier();
        let (mut s, mut w) = (Surface::default(), Window::default());

        assert_eq!(
            c.handle(&PointerEvent::moved(1.0, 1.0), 800.0, &mut s, &mut w),
            Disposition::Forwarded
        );
        assert_eq!(
            c.handle(&PointerEvent::up(1.0, 1.0), 800.0, &mut s, &mut w),
            Disposition::Forwarded
        );
        assert_eq!(s.0, vec![PointerPhase::Moved, PointerPhase::Up]);
        assert_eq!(c.state(), ClassifierState::Idle);
    }

    #[test]
    fn test_reset_drops_gesture() {
        let mut c = classifier();
        let (mut s, mut w) = (Surface::default(), Window::default());

        c.handle(&PointerEvent::down(0.0, 790.0), 800.0, &mut s, &mut w);
        c.reset();
        assert_eq!(c.state(), ClassifierState::Idle);
    }

    #[test]
    fn test_invalid_threshold_is_ignored() {
        let c = classifier().with_threshold(-3.0);
        assert_eq!(c.threshold(), DRAG_THRESHOLD);
        let c = classifier().with_threshold(12.0);
        assert_eq!(c.threshold(), 12.0);
    }

    #[test]
    fn test_was_forwarded() {
        assert!(Disposition::Forwarded.was_forwarded());
        assert!(!Disposition::DragStarted.was_forwarded());
        assert!(!Disposition::WindowMoved.was_forwarded());
        assert!(Disposition::Completed(GestureOutcome::Click).was_forwarded());
        assert!(Disposition::Completed(GestureOutcome::PassThrough).was_forwarded());
        assert!(!Disposition::Completed(GestureOutcome::WindowDrag).was_forwarded());
    }
}
