use crate::app::SelectedItem;
use crate::color::{LEG_COLORS, Rgb};
use std::f64::consts::PI;

pub const SLOT_COUNT: usize = 8;
pub const WEB_SIZE: f64 = 300.0;
pub const WEB_CENTER: Point = Point::new(WEB_SIZE / 2.0, WEB_SIZE / 2.0);
pub const WEB_RADIUS: f64 = 120.0; // slot orbital radius
pub const BADGE_RADIUS: f64 = 20.0;
pub const GLOW_BLUR: f64 = 15.0;
pub const GLOW_SPREAD: f64 = 3.0;
pub const ANGLE_STEP: f64 = 2.0 * PI / SLOT_COUNT as f64;

/// Hand-tuned nudges that line each badge up with a leg of the web artwork.
const CORRECTIONS: [(f64, f64); SLOT_COUNT] = [
    (-55.0, -90.0),
    (5.0, -14.0),
    (45.0, -20.0),
    (35.0, 10.0),
    (33.0, 60.0),
    (35.0, 0.0),
    (-18.0, 2.0),
    (-55.0, -30.0),
];

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotGeometry {
    pub center: Point,
    pub radius: f64,
}

impl SlotGeometry {
    pub fn angle(index: usize) -> f64 {
        index as f64 * ANGLE_STEP
    }

    pub fn calculate(index: usize) -> Self {
        let angle = Self::angle(index);
        let (dx, dy) = CORRECTIONS[index % SLOT_COUNT];

        Self {
            center: Point::new(
                WEB_CENTER.x + WEB_RADIUS * angle.cos() + dx,
                WEB_CENTER.y + WEB_RADIUS * angle.sin() + dy,
            ),
            radius: BADGE_RADIUS,
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        self.center.distance(point) <= self.radius
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SlotContent {
    Filled(SelectedItem),
    Empty { color: Rgb },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    pub index: usize,
    pub geometry: SlotGeometry,
    pub content: SlotContent,
}

impl Slot {
    pub fn item(&self) -> Option<&SelectedItem> {
        match &self.content {
            SlotContent::Filled(item) => Some(item),
            SlotContent::Empty { .. } => None,
        }
    }

    pub fn is_filled(&self) -> bool {
        self.item().is_some()
    }

    /// Base colour of the badge: the app's accent, or the leg colour when empty.
    pub fn color(&self) -> Rgb {
        match &self.content {
            SlotContent::Filled(item) => item.color,
            SlotContent::Empty { color } => *color,
        }
    }
}

/// The eight badges around the web. Items fill slots in list order; anything
/// past the eighth item is not placed.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    slots: Vec<Slot>,
}

impl Layout {
    pub fn new(items: &[SelectedItem]) -> Self {
        let slots = (0..SLOT_COUNT)
            .map(|i| Slot {
                index: i,
                geometry: SlotGeometry::calculate(i),
                content: items
                    .get(i)
                    .cloned()
                    .map(SlotContent::Filled)
                    .unwrap_or(SlotContent::Empty {
                        color: LEG_COLORS[i],
                    }),
            })
            .collect();

        Self { slots }
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_filled()).count()
    }

    /// Index of the badge under `point` (web coordinates), nearest first.
    pub fn hit_test(&self, point: Point) -> Option<usize> {
        self.slots
            .iter()
            .filter(|s| s.geometry.contains(point))
            .min_by(|a, b| {
                a.geometry
                    .center
                    .distance(point)
                    .total_cmp(&b.geometry.center.distance(point))
            })
            .map(|s| s.index)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(&[])
    }
}
