//! Integer rectangle arithmetic for carving a terminal region into child regions.
//!
//! Every function here is pure. Results that would have no width or no height are reported as
//! `None` instead of a degenerate rectangle, so callers never have to re-check dimensions.
use crate::error::Result;
use crate::error::check_range;
use crate::numbers;
use ratatui::layout::Rect;

/// A point on the terminal grid. Also used as a size `(width, height)` and as a ratio.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

/// An axis-aligned region between two corners. `min` is inclusive, `max` exclusive.
///
/// An `Area` always covers at least one cell: `min.x < max.x` and `min.y < max.y`, and its width
/// and height fit in an `i32`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Area {
    min: Point,
    max: Point,
}

impl Area {
    /// Returns `None` unless `max` lies strictly right of and below `min`. Corners too far apart
    /// for the width or height to fit in an `i32` also yield `None`.
    pub fn new(min: Point, max: Point) -> Option<Self> {
        let width = max.x.checked_sub(min.x)?;
        let height = max.y.checked_sub(min.y)?;
        (width > 0 && height > 0).then_some(Self { min, max })
    }

    pub const fn min(&self) -> Point {
        self.min
    }

    pub const fn max(&self) -> Point {
        self.max
    }

    pub fn width(&self) -> i32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> i32 {
        self.max.y - self.min.y
    }

    /// Converts a ratatui [`Rect`]. Empty rects have no area.
    pub fn from_rect(rect: Rect) -> Option<Self> {
        let min = Point::new(i32::from(rect.x), i32::from(rect.y));
        let max = min.offset(i32::from(rect.width), i32::from(rect.height));
        Self::new(min, max)
    }

    /// Converts to a ratatui [`Rect`], or `None` when a corner lies outside the `u16` grid.
    pub fn to_rect(&self) -> Option<Rect> {
        let x = u16::try_from(self.min.x).ok()?;
        let y = u16::try_from(self.min.y).ok()?;
        u16::try_from(self.max.x).ok()?;
        u16::try_from(self.max.y).ok()?;
        let width = u16::try_from(self.width()).ok()?;
        let height = u16::try_from(self.height()).ok()?;
        Some(Rect::new(x, y, width, height))
    }
}

/// Returns the `(width, height)` of the area.
pub fn size(area: Area) -> Point {
    Point::new(area.width(), area.height())
}

/// Returns an area anchored at the origin with the given size.
///
/// Negative components are rejected; a zero component yields `None`.
pub fn from_size(size: Point) -> Result<Option<Area>> {
    check_range("size.x", size.x, 0, None, "0 <= size.x")?;
    check_range("size.y", size.y, 0, None, "0 <= size.y")?;
    Ok(Area::new(Point::ZERO, size))
}

/// Splits the area into a top and bottom part at `height_perc` percent of its height.
///
/// The top part gets `floor(height * height_perc / 100)` rows and the bottom part the rest.
/// A part without rows is `None`.
pub fn hsplit(area: Area, height_perc: i32) -> Result<(Option<Area>, Option<Area>)> {
    check_range(
        "height_perc",
        height_perc,
        0,
        Some(100),
        "0 <= height_perc <= 100",
    )?;
    let split_y = area
        .min
        .y
        .saturating_add(percent_of(area.height(), height_perc));
    let top = Area::new(area.min, Point::new(area.max.x, split_y));
    let bottom = Area::new(Point::new(area.min.x, split_y), area.max);
    Ok((top, bottom))
}

/// Splits the area into a left and right part at `width_perc` percent of its width.
///
/// The left part gets `floor(width * width_perc / 100)` columns and the right part the rest.
/// A part without columns is `None`.
pub fn vsplit(area: Area, width_perc: i32) -> Result<(Option<Area>, Option<Area>)> {
    check_range(
        "width_perc",
        width_perc,
        0,
        Some(100),
        "0 <= width_perc <= 100",
    )?;
    let split_x = area
        .min
        .x
        .saturating_add(percent_of(area.width(), width_perc));
    let left = Area::new(area.min, Point::new(split_x, area.max.y));
    let right = Area::new(Point::new(split_x, area.min.y), area.max);
    Ok((left, right))
}

/// Removes a one-cell border from every side. Areas narrower or shorter than three cells have
/// no interior.
pub fn exclude_border(area: Area) -> Option<Area> {
    Area::new(area.min.offset(1, 1), area.max.offset(-1, -1))
}

/// Returns the largest area with the given aspect ratio that fits inside `area`, anchored at
/// its top-left corner.
///
/// The ratio is reduced to lowest terms first. A ratio with a zero component, a ratio whose
/// reduced form does not fit in `i32`, or an area too small to hold a single ratio step, yields
/// `None`.
pub fn with_ratio(area: Area, ratio: Point) -> Option<Area> {
    let ratio = numbers::simplify_ratio(ratio)?;
    if ratio.x == 0 || ratio.y == 0 {
        return None;
    }
    let scale = (area.width() / ratio.x).min(area.height() / ratio.y);
    Area::new(area.min, area.min.offset(ratio.x * scale, ratio.y * scale))
}

/// Shrinks each side of the area by the given number of cells.
///
/// A side never moves past the opposite side, so shrinking more than the area holds yields
/// `None` instead of an inverted rectangle.
pub fn shrink(area: Area, top: i32, right: i32, bottom: i32, left: i32) -> Result<Option<Area>> {
    for (name, value, expected) in [
        ("top", top, "0 <= top"),
        ("right", right, "0 <= right"),
        ("bottom", bottom, "0 <= bottom"),
        ("left", left, "0 <= left"),
    ] {
        check_range(name, value, 0, None, expected)?;
    }

    let min_x = area.min.x.saturating_add(left).min(area.max.x);
    let max_x = area.max.x.saturating_sub(right).max(min_x);
    let min_y = area.min.y.saturating_add(top).min(area.max.y);
    let max_y = area.max.y.saturating_sub(bottom).max(min_y);
    Ok(Area::new(Point::new(min_x, min_y), Point::new(max_x, max_y)))
}

/// Like [`shrink`], but each side is given as a percentage of the matching dimension.
///
/// `top`/`bottom` are percentages of the height and `right`/`left` of the width. Each is
/// truncated to whole cells.
pub fn shrink_percent(
    area: Area,
    top: i32,
    right: i32,
    bottom: i32,
    left: i32,
) -> Result<Option<Area>> {
    for (name, value, expected) in [
        ("top", top, "0 <= top <= 100"),
        ("right", right, "0 <= right <= 100"),
        ("bottom", bottom, "0 <= bottom <= 100"),
        ("left", left, "0 <= left <= 100"),
    ] {
        check_range(name, value, 0, Some(100), expected)?;
    }

    let (w, h) = (area.width(), area.height());
    shrink(
        area,
        percent_of(h, top),
        percent_of(w, right),
        percent_of(h, bottom),
        percent_of(w, left),
    )
}

// `perc` is within 0..=100, so the result never exceeds `dim`.
fn percent_of(dim: i32, perc: i32) -> i32 {
    (i64::from(dim) * i64::from(perc) / 100) as i32
}
