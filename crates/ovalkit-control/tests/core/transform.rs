use ovalkit_control::AffineTransform;
use ovalkit_core::Point;

#[test]
fn test_fit_center_roundtrip_through_inverse() {
    let image_to_screen = AffineTransform::fit_center(4000.0, 3000.0, 1080.0, 1920.0);
    let screen_to_image = image_to_screen.invert().unwrap();

    let corner = image_to_screen.map_point(Point::new(4000.0, 3000.0));
    assert!((corner.x - 1080.0).abs() < 1e-9);

    let back = screen_to_image.map_point(corner);
    assert!((back.x - 4000.0).abs() < 1e-6);
    assert!((back.y - 3000.0).abs() < 1e-6);
}

#[test]
fn test_portrait_view_letterboxes_vertically() {
    let t = AffineTransform::fit_center(4000.0, 3000.0, 1080.0, 1920.0);
    let top_left = t.map_point(Point::new(0.0, 0.0));
    // 3000 * 0.27 = 810 tall, centered in 1920
    assert!((top_left.x - 0.0).abs() < 1e-9);
    assert!((top_left.y - 555.0).abs() < 1e-9);
}

#[test]
fn test_rotation_inverse() {
    let (s, c) = 30f64.to_radians().sin_cos();
    let rotate = AffineTransform::new(c, -s, 0.0, s, c, 0.0);
    let t = rotate.then(&AffineTransform::translate(100.0, 50.0));

    assert!((t.determinant() - 1.0).abs() < 1e-12);

    let p = Point::new(-20.0, 75.0);
    let q = t.invert().unwrap().map_point(t.map_point(p));
    assert!((q.x - p.x).abs() < 1e-9);
    assert!((q.y - p.y).abs() < 1e-9);
}

#[test]
fn test_transform_serde() {
    let t = AffineTransform::translate(3.0, 4.0);
    let json = serde_json::to_string(&t).unwrap();
    let back: AffineTransform = serde_json::from_str(&json).unwrap();
    assert_eq!(back, t);
}
