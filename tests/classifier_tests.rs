//! Titlebar click/drag classification against recording collaborators.

use sitewrap::titlebar::{
    drag_origin, ClassifierState, ContentSurface, Disposition, DragClassifier, GestureOutcome,
    Point, PointerEvent, PointerPhase, TitlebarBand, WindowMover,
};
use sitewrap::ShellError;

const WINDOW_HEIGHT: f64 = 800.0;

#[derive(Default)]
struct RecordingSurface {
    events: Vec<PointerEvent>,
}

impl RecordingSurface {
    fn phases(&self) -> Vec<PointerPhase> {
        self.events.iter().map(|e| e.phase).collect()
    }
}

impl ContentSurface for RecordingSurface {
    fn forward(&mut self, event: &PointerEvent) {
        self.events.push(*event);
    }
}

#[derive(Default)]
struct RecordingWindow {
    moves: Vec<(Point, Point)>,
    detached: bool,
}

impl WindowMover for RecordingWindow {
    fn move_window(&mut self, event: &PointerEvent, anchor: Point) -> Result<(), ShellError> {
        if self.detached {
            return Err(ShellError::NoWindow);
        }
        self.moves.push((event.location, anchor));
        Ok(())
    }
}

struct Harness {
    classifier: DragClassifier,
    surface: RecordingSurface,
    window: RecordingWindow,
}

impl Harness {
    fn new(band: f64) -> Self {
        Self {
            classifier: DragClassifier::new(TitlebarBand::new(band)),
            surface: RecordingSurface::default(),
            window: RecordingWindow::default(),
        }
    }

    fn send(&mut self, event: PointerEvent) -> Disposition {
        self.classifier
            .handle(&event, WINDOW_HEIGHT, &mut self.surface, &mut self.window)
    }
}

#[test]
fn drag_beyond_threshold_moves_window_and_withholds_up() {
    let mut h = Harness::new(60.0);

    assert_eq!(h.send(PointerEvent::down(100.0, 750.0)), Disposition::Forwarded);
    assert_eq!(h.classifier.state(), ClassifierState::TitlebarCandidate);

    assert_eq!(h.send(PointerEvent::moved(100.0, 744.0)), Disposition::DragStarted);
    assert_eq!(h.classifier.state(), ClassifierState::WindowDrag);

    assert_eq!(
        h.send(PointerEvent::up(100.0, 744.0)),
        Disposition::Completed(GestureOutcome::WindowDrag)
    );
    assert_eq!(h.classifier.state(), ClassifierState::Idle);

    assert_eq!(h.surface.phases(), vec![PointerPhase::Down]);
    assert_eq!(h.window.moves.len(), 1);
}

#[test]
fn short_press_is_a_click_and_forwards_both_ends() {
    let mut h = Harness::new(60.0);

    h.send(PointerEvent::down(100.0, 750.0));
    let done = h.send(PointerEvent::up(100.0, 748.0));

    assert_eq!(done, Disposition::Completed(GestureOutcome::Click));
    assert!(done.was_forwarded());
    assert_eq!(h.surface.phases(), vec![PointerPhase::Down, PointerPhase::Up]);
    assert!(h.window.moves.is_empty());
}

#[test]
fn threshold_is_exclusive() {
    let mut h = Harness::new(60.0);

    h.send(PointerEvent::down(100.0, 750.0));
    assert_eq!(h.send(PointerEvent::moved(105.0, 750.0)), Disposition::Forwarded);
    assert_eq!(h.classifier.state(), ClassifierState::TitlebarCandidate);
    assert_eq!(
        h.send(PointerEvent::up(105.0, 750.0)),
        Disposition::Completed(GestureOutcome::Click)
    );
}

#[test]
fn lower_band_edge_counts_as_titlebar() {
    let mut h = Harness::new(60.0);
    h.send(PointerEvent::down(10.0, 740.0));
    assert_eq!(h.classifier.state(), ClassifierState::TitlebarCandidate);
}

#[test]
fn press_below_band_passes_everything_through() {
    let mut h = Harness::new(60.0);

    let down = PointerEvent::down(100.0, 400.0);
    let moved = PointerEvent::moved(300.0, 100.0);
    let up = PointerEvent::up(300.0, 100.0);

    h.send(down);
    assert_eq!(h.classifier.state(), ClassifierState::PassThrough);
    assert_eq!(h.send(moved), Disposition::Forwarded);
    assert_eq!(h.send(up), Disposition::Completed(GestureOutcome::PassThrough));

    assert_eq!(h.surface.events, vec![down, moved, up]);
    assert!(h.window.moves.is_empty());
    assert_eq!(h.classifier.state(), ClassifierState::Idle);
}

#[test]
fn window_drag_never_reverts_to_click() {
    let mut h = Harness::new(60.0);

    h.send(PointerEvent::down(100.0, 750.0));
    h.send(PointerEvent::moved(120.0, 750.0));
    // Back to the origin: still a drag
    assert_eq!(h.send(PointerEvent::moved(100.0, 750.0)), Disposition::WindowMoved);
    assert_eq!(h.classifier.state(), ClassifierState::WindowDrag);
    assert_eq!(
        h.send(PointerEvent::up(100.0, 750.0)),
        Disposition::Completed(GestureOutcome::WindowDrag)
    );
    assert_eq!(h.surface.phases(), vec![PointerPhase::Down]);
}

#[test]
fn window_moves_keep_the_grab_point_as_anchor() {
    let mut h = Harness::new(60.0);

    h.send(PointerEvent::down(100.0, 750.0));
    h.send(PointerEvent::moved(110.0, 750.0));
    h.send(PointerEvent::moved(130.0, 760.0));

    let anchors: Vec<Point> = h.window.moves.iter().map(|(_, anchor)| *anchor).collect();
    assert_eq!(anchors, vec![Point::new(100.0, 750.0); 2]);
    assert_eq!(h.window.moves[1].0, Point::new(130.0, 760.0));
}

/// A window on a screen: events arrive in window space, moves are placed
/// from the screen pointer the way `NSEvent.mouseLocation` would report it.
struct ScreenWindow {
    origin: Point,
    pointer: Point,
}

impl ScreenWindow {
    fn to_window(&self, screen: Point) -> Point {
        Point::new(screen.x - self.origin.x, screen.y - self.origin.y)
    }
}

impl WindowMover for ScreenWindow {
    fn move_window(&mut self, _event: &PointerEvent, anchor: Point) -> Result<(), ShellError> {
        self.origin = drag_origin(self.pointer, anchor);
        Ok(())
    }
}

fn drag_to(
    classifier: &mut DragClassifier,
    surface: &mut RecordingSurface,
    window: &mut ScreenWindow,
    screen: Point,
) {
    window.pointer = screen;
    let local = window.to_window(screen);
    classifier.handle(&PointerEvent::moved(local.x, local.y), WINDOW_HEIGHT, surface, window);
}

#[test]
fn dragged_window_keeps_grab_point_under_pointer() {
    let mut classifier = DragClassifier::new(TitlebarBand::new(60.0));
    let mut surface = RecordingSurface::default();
    let mut window = ScreenWindow {
        origin: Point::new(200.0, 100.0),
        pointer: Point::new(300.0, 850.0),
    };

    classifier.handle(&PointerEvent::down(100.0, 750.0), WINDOW_HEIGHT, &mut surface, &mut window);

    // Sub-threshold travel leaves the window where it is
    drag_to(&mut classifier, &mut surface, &mut window, Point::new(302.0, 851.0));
    drag_to(&mut classifier, &mut surface, &mut window, Point::new(304.0, 852.0));
    assert_eq!(window.origin, Point::new(200.0, 100.0));

    // The first real move catches up all of it
    drag_to(&mut classifier, &mut surface, &mut window, Point::new(310.0, 853.0));
    assert_eq!(classifier.state(), ClassifierState::WindowDrag);
    assert_eq!(window.origin, Point::new(210.0, 103.0));
    assert_eq!(window.to_window(window.pointer), Point::new(100.0, 750.0));

    // Later moves arrive relative to the shifted window
    drag_to(&mut classifier, &mut surface, &mut window, Point::new(340.0, 820.0));
    assert_eq!(window.origin, Point::new(240.0, 70.0));
    assert_eq!(window.to_window(window.pointer), Point::new(100.0, 750.0));
}

#[test]
fn state_resets_between_gestures() {
    let mut h = Harness::new(60.0);

    h.send(PointerEvent::down(100.0, 750.0));
    h.send(PointerEvent::moved(100.0, 700.0));
    h.send(PointerEvent::up(100.0, 700.0));

    // A fresh short press is a click again
    h.send(PointerEvent::down(50.0, 790.0));
    assert_eq!(h.classifier.state(), ClassifierState::TitlebarCandidate);
    assert_eq!(
        h.send(PointerEvent::up(51.0, 790.0)),
        Disposition::Completed(GestureOutcome::Click)
    );
}

#[test]
fn failed_window_move_does_not_change_classification() {
    let mut h = Harness::new(60.0);
    h.window.detached = true;

    h.send(PointerEvent::down(100.0, 750.0));
    assert_eq!(h.send(PointerEvent::moved(100.0, 730.0)), Disposition::DragStarted);
    assert_eq!(h.classifier.state(), ClassifierState::WindowDrag);
    assert_eq!(
        h.send(PointerEvent::up(100.0, 730.0)),
        Disposition::Completed(GestureOutcome::WindowDrag)
    );
    assert!(h.window.moves.is_empty());
}

#[test]
fn down_during_gesture_restarts_classification() {
    let mut h = Harness::new(60.0);

    h.send(PointerEvent::down(100.0, 750.0));
    h.send(PointerEvent::moved(100.0, 700.0));
    assert_eq!(h.classifier.state(), ClassifierState::WindowDrag);

    h.send(PointerEvent::down(100.0, 200.0));
    assert_eq!(h.classifier.state(), ClassifierState::PassThrough);
}

#[test]
fn zero_height_band_only_catches_top_edge() {
    let mut h = Harness::new(0.0);
    h.send(PointerEvent::down(0.0, 799.0));
    assert_eq!(h.classifier.state(), ClassifierState::PassThrough);
}

#[test]
fn custom_threshold_is_respected() {
    let mut h = Harness::new(60.0);
    h.classifier = DragClassifier::new(TitlebarBand::new(60.0)).with_threshold(20.0);

    h.send(PointerEvent::down(100.0, 750.0));
    assert_eq!(h.send(PointerEvent::moved(110.0, 750.0)), Disposition::Forwarded);
    assert_eq!(h.send(PointerEvent::moved(125.0, 750.0)), Disposition::DragStarted);
}
