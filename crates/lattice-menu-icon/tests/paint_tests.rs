//! Integration tests that rasterize the icon with the software renderer.

use std::time::{Duration, Instant};

use lattice_menu_icon::render::{Color, LineRenderer, Point, Size, SoftwareRenderer};
use lattice_menu_icon::{AnimatedMenuIcon, Dp, MenuIconConfig};

fn paint(icon: &mut AnimatedMenuIcon, now: Instant) -> SoftwareRenderer {
    let size = icon.size_px() as u32;
    let mut renderer = SoftwareRenderer::new(size, size).unwrap();
    renderer.begin_frame(Color::WHITE, Size::square(icon.size_px()));
    icon.paint(&mut renderer, Point::ZERO, now);
    renderer.end_frame();
    renderer
}

fn icon_96() -> AnimatedMenuIcon {
    AnimatedMenuIcon::new(
        MenuIconConfig::new()
            .with_size(Dp(96.0))
            .with_foreground(Color::BLACK),
    )
}

#[test]
fn test_closed_icon_pixels() {
    // 96px: thickness 8, bars at y 28, 48, 68 from x 16 to 80.
    let mut icon = icon_96();
    let renderer = paint(&mut icon, Instant::now());

    for y in [28, 48, 68] {
        assert_eq!(renderer.pixel(48, y), Some(Color::BLACK), "bar at y {y}");
    }
    // Gaps between bars and the margins stay clear.
    assert_eq!(renderer.pixel(48, 38), Some(Color::WHITE));
    assert_eq!(renderer.pixel(48, 58), Some(Color::WHITE));
    assert_eq!(renderer.pixel(5, 48), Some(Color::WHITE));
    assert_eq!(renderer.pixel(48, 5), Some(Color::WHITE));
}

#[test]
fn test_open_icon_pixels() {
    let mut icon = icon_96();
    let start = Instant::now();
    icon.set_menu_opened(true, start);
    let renderer = paint(&mut icon, start + Duration::from_millis(300));

    // The diagonals cross at the centre.
    assert_eq!(renderer.pixel(48, 48), Some(Color::BLACK));
    assert_eq!(renderer.pixel(30, 30), Some(Color::BLACK));
    assert_eq!(renderer.pixel(65, 30), Some(Color::BLACK));
    // Where the closed bars used to be, off the diagonals, is now clear.
    assert_eq!(renderer.pixel(20, 48), Some(Color::WHITE));
    assert_eq!(renderer.pixel(48, 28), Some(Color::WHITE));
}

#[test]
fn test_png_snapshot_written() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("closed.png");

    let mut icon = icon_96();
    paint(&mut icon, Instant::now()).save_png(&path).unwrap();

    let image = image_size(&path);
    assert_eq!(image, (96, 96));
}

fn image_size(path: &std::path::Path) -> (u32, u32) {
    let bytes = std::fs::read(path).unwrap();
    assert_eq!(&bytes[1..4], b"PNG");
    // IHDR width and height, big-endian.
    let width = u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
    let height = u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]);
    (width, height)
}
