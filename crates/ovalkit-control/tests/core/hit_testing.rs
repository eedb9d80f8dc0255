use ovalkit_control::{EllipseControl, Handle, HandleSet};
use ovalkit_core::Point;
use ovalkit_settings::ControlConfig;

fn control_at(cx: f64, cy: f64, rx: f64, ry: f64) -> EllipseControl {
    let mut control = EllipseControl::default();
    control.set_center(cx, cy);
    control.set_radius(rx, ry);
    control.refresh_handles();
    control
}

#[test]
fn test_touch_on_every_handle_selects_it() {
    let control = control_at(400.0, 300.0, 200.0, 150.0);
    let handles = *control.handles().unwrap();

    for (handle, p) in handles.iter() {
        assert_eq!(
            control.close_handle(p.x, p.y),
            Some(handle),
            "touch on {} picked the wrong handle",
            handle
        );
    }
}

#[test]
fn test_far_touch_selects_nothing() {
    let control = control_at(400.0, 300.0, 200.0, 150.0);
    assert_eq!(control.close_handle(2000.0, 2000.0), None);
    // halfway between center and east handle is 100px from both
    assert_eq!(control.close_handle(500.0, 300.0), None);
}

#[test]
fn test_near_touch_picks_nearest() {
    let control = control_at(400.0, 300.0, 200.0, 150.0);
    assert_eq!(control.close_handle(590.0, 310.0), Some(Handle::East));
    assert_eq!(control.close_handle(400.0, 160.0), Some(Handle::North));
    assert_eq!(control.close_handle(410.0, 290.0), Some(Handle::Center));
}

#[test]
fn test_threshold_comes_from_config() {
    let config = ControlConfig::default().with_min_touch_dist(20.0);
    let mut control = EllipseControl::new(config);
    control.set_center(0.0, 0.0);
    control.set_radius(500.0, 500.0);
    control.refresh_handles();

    assert_eq!(control.close_handle(0.0, 19.0), Some(Handle::Center));
    // exactly on the radius does not count
    assert_eq!(control.close_handle(0.0, 20.0), None);
    assert_eq!(control.close_handle(0.0, 30.0), None);
}

#[test]
fn test_fill_handles_is_idempotent() {
    let mut control = EllipseControl::default();
    let first = *control.fill_handles(Point::new(12.5, 7.25), 33.0, 44.0);
    let second = *control.fill_handles(Point::new(12.5, 7.25), 33.0, 44.0);
    assert_eq!(first, second);
    assert_eq!(first, HandleSet::fill(Point::new(12.5, 7.25), 33.0, 44.0));
}

#[test]
fn test_handles_follow_latest_fill() {
    let mut control = EllipseControl::default();
    control.fill_handles(Point::new(0.0, 0.0), 100.0, 100.0);
    assert_eq!(control.close_handle(100.0, 0.0), Some(Handle::East));

    control.fill_handles(Point::new(1000.0, 1000.0), 100.0, 100.0);
    assert_eq!(control.close_handle(100.0, 0.0), None);
    assert_eq!(control.close_handle(1100.0, 1000.0), Some(Handle::East));
}
