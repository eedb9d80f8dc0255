use ovalkit_control::{AffineTransform, Ellipse, EllipseControl, Handle, Oval};
use ovalkit_core::{ControlError, Error, Point};

/// A host-side filter representation that stores its oval in normalized
/// image coordinates plus an image size.
struct VignetteRep {
    image_width: f64,
    image_height: f64,
    norm_center: (f64, f64),
    norm_radius: (f64, f64),
}

impl Oval for VignetteRep {
    fn center(&self) -> Point {
        Point::new(
            self.norm_center.0 * self.image_width,
            self.norm_center.1 * self.image_height,
        )
    }

    fn radius_x(&self) -> f64 {
        self.norm_radius.0 * self.image_width
    }

    fn radius_y(&self) -> f64 {
        self.norm_radius.1 * self.image_height
    }

    fn set_center(&mut self, center: Point) {
        self.norm_center = (center.x / self.image_width, center.y / self.image_height);
    }

    fn set_radius_x(&mut self, rx: f64) {
        self.norm_radius.0 = rx / self.image_width;
    }

    fn set_radius_y(&mut self, ry: f64) {
        self.norm_radius.1 = ry / self.image_height;
    }
}

fn identity_control() -> EllipseControl {
    let mut control = EllipseControl::default();
    control.set_screen_to_image(AffineTransform::identity());
    control
}

#[test]
fn test_full_gesture_on_center_handle() {
    let mut control = identity_control();
    let mut oval = Ellipse::new(Point::new(100.0, 100.0), 50.0, 50.0);
    control.fill_handles(oval.center, oval.rx, oval.ry);

    let handle = control.close_handle(110.0, 105.0).unwrap();
    assert_eq!(handle, Handle::Center);

    control.action_down(110.0, 105.0, &oval).unwrap();
    assert!(control.is_dragging());
    control.action_move(handle, 120.0, 115.0, &mut oval).unwrap();
    control.action_move(handle, 130.0, 125.0, &mut oval).unwrap();
    control.action_up();

    assert!(!control.is_dragging());
    assert_eq!(oval.center, Point::new(120.0, 120.0));
}

#[test]
fn test_move_after_up_is_rejected() {
    let mut control = identity_control();
    let mut oval = Ellipse::new(Point::new(0.0, 0.0), 10.0, 10.0);

    control.action_down(0.0, 0.0, &oval).unwrap();
    control.action_up();

    let result = control.action_move(Handle::Center, 5.0, 5.0, &mut oval);
    assert!(matches!(
        result,
        Err(Error::Control(ControlError::NoActiveDrag))
    ));
    assert_eq!(oval.center, Point::new(0.0, 0.0));
}

#[test]
fn test_second_touch_down_restarts_session() {
    let mut control = identity_control();
    let mut oval = Ellipse::new(Point::new(0.0, 0.0), 10.0, 10.0);

    control.action_down(0.0, 0.0, &oval).unwrap();
    control.action_down(5.0, 5.0, &oval).unwrap();
    assert_eq!(
        control.drag_session().map(|s| s.anchor()),
        Some(Point::new(5.0, 5.0))
    );

    control.action_move(Handle::Center, 15.0, 5.0, &mut oval).unwrap();
    assert_eq!(oval.center, Point::new(10.0, 0.0));
}

#[test]
fn test_drag_through_zoomed_view() {
    // image shown at 2x, shifted by (40, 20) in the view
    let image_to_screen =
        AffineTransform::scale(2.0, 2.0).then(&AffineTransform::translate(40.0, 20.0));
    let mut control = EllipseControl::default();
    control.set_image_to_screen(&image_to_screen).unwrap();

    let mut oval = Ellipse::new(Point::new(100.0, 100.0), 200.0, 300.0);
    // north handle of the image-space ellipse is at (100, -200); anchor
    // halfway out at image y = 50 -> screen y = 120
    control.action_down(240.0, 120.0, &oval).unwrap();
    // image y = 20 -> screen y = 60
    control.action_move(Handle::North, 240.0, 60.0, &mut oval).unwrap();

    assert!((oval.ry - 330.0).abs() < 1e-9);
    assert_eq!(oval.rx, 200.0);
}

#[test]
fn test_host_oval_is_mutated_in_place() {
    let mut control = identity_control();
    let mut rep = VignetteRep {
        image_width: 1000.0,
        image_height: 500.0,
        norm_center: (0.5, 0.5),
        norm_radius: (0.2, 0.4),
    };
    assert_eq!(rep.center(), Point::new(500.0, 250.0));

    // grab the east edge exactly
    control.action_down(700.0, 250.0, &rep).unwrap();
    control.action_move(Handle::East, 800.0, 250.0, &mut rep).unwrap();

    assert!((rep.radius_x() - 300.0).abs() < 1e-9);
    assert!((rep.norm_radius.0 - 0.3).abs() < 1e-12);
    assert!((rep.radius_y() - 200.0).abs() < 1e-9);
}

#[test]
fn test_display_state_is_independent_of_dragged_oval() {
    let mut control = identity_control();
    control.set_center(10.0, 10.0);
    control.set_radius(5.0, 5.0);

    let mut oval = Ellipse::new(Point::new(10.0, 10.0), 5.0, 5.0);
    control.action_down(10.0, 10.0, &oval).unwrap();
    control.action_move(Handle::Center, 50.0, 50.0, &mut oval).unwrap();

    assert_eq!(oval.center, Point::new(50.0, 50.0));
    assert_eq!(control.center(), Some(Point::new(10.0, 10.0)));

    // the host pushes the new geometry back for display
    control.set_center(oval.center.x, oval.center.y);
    let overlay = control.overlay().unwrap();
    assert_eq!(overlay.center_dot.center, Point::new(50.0, 50.0));
}
