use silk::layout::{Point, WEB_CENTER, WEB_SIZE};

pub mod model;
pub mod view;

pub use model::WebState;
pub use view::draw;

pub const CANVAS_SIZE: i32 = 380; // room around the 300px web for badge glow
pub const ICON_SIZE: i32 = 64;
pub const ICON_FRACTION: f64 = 25.0 / 40.0; // icon size relative to the badge
pub const BADGE_INNER_ALPHA: f64 = 0.9;
pub const BADGE_OUTER_ALPHA: f64 = 0.6;
pub const GLOW_ALPHA: f64 = 0.8;
pub const WEB_ART_RADIUS: f64 = 165.0;
pub const WEB_RINGS: usize = 5;
pub const WEB_ALPHA: f64 = 0.8;
pub const WEB_FADE_START: f64 = 0.7;
pub const CENTER_DOT: Point = Point::new(WEB_CENTER.x, WEB_CENTER.y + 15.0);
pub const CENTER_DOT_RADIUS: f64 = 15.0;
pub const CENTER_DOT_ALPHA: f64 = 0.3;
pub const CENTER_GLOW_BLUR: f64 = 20.0;
pub const CENTER_GLOW_SPREAD: f64 = 5.0;

/// Top-left corner of the web inside a drawing area of the given size.
pub fn web_origin(width: f64, height: f64) -> Point {
    Point::new((width - WEB_SIZE) / 2.0, (height - WEB_SIZE) / 2.0)
}

pub fn to_web_coords(point: Point, width: f64, height: f64) -> Point {
    let origin = web_origin(width, height);
    Point::new(point.x - origin.x, point.y - origin.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use silk::layout::{Layout, SlotGeometry};

    #[test]
    fn test_canvas_click_maps_to_slot() {
        let size = CANVAS_SIZE as f64;
        let slot = SlotGeometry::calculate(3).center;
        let origin = web_origin(size, size);
        let click = Point::new(slot.x + origin.x, slot.y + origin.y);

        let local = to_web_coords(click, size, size);
        assert_eq!(Layout::default().hit_test(local), Some(3));
    }

    #[test]
    fn test_web_is_centered() {
        assert_eq!(web_origin(400.0, 500.0), Point::new(50.0, 100.0));
    }
}
