//! Initial window geometry and desktop-area clamping.

use crate::{
    config::PlacementConfig,
    model::{DesktopViewport, Point, Size},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowPlacement {
    pub position: Point,
    pub size: Size,
}

/// Computes the geometry of a newly opened window.
///
/// The size is the preferred size shrunk to fit the desktop (minus side margins and the theme's
/// dock reserve). The window is centered, nudged slightly above center vertically, and cascaded by
/// `open_count` steps so successive windows do not stack exactly.
pub fn initial_placement(
    area: DesktopViewport,
    dock_reserve: i32,
    preferred: Size,
    open_count: usize,
    config: &PlacementConfig,
) -> WindowPlacement {
    let max_width = area.width.saturating_sub(config.margin.saturating_mul(2));
    let max_height = area.height.saturating_sub(dock_reserve);

    let width = preferred.width.min(max_width).max(0);
    let height = preferred.height.min(max_height).max(0);

    let cascade = i32::try_from(open_count)
        .unwrap_or(i32::MAX)
        .saturating_mul(config.cascade_step);
    let x = (area.width.saturating_sub(width) / 2).max(0).saturating_add(cascade);
    let y = (f64::from(max_height.saturating_sub(height)) / 2.0 * 0.9)
        .floor()
        .max(0.0) as i32;
    let y = y.saturating_add(cascade);

    WindowPlacement {
        position: Point::new(x, y),
        size: Size::new(width, height),
    }
}

/// Clamps a window origin so the window stays inside the desktop area.
///
/// Windows larger than the area are pinned to the top-left corner.
pub fn clamp_to_area(position: Point, size: Size, area: DesktopViewport) -> Point {
    let max_x = area.width.saturating_sub(size.width).max(0);
    let max_y = area.height.saturating_sub(size.height).max(0);
    Point::new(position.x.clamp(0, max_x), position.y.clamp(0, max_y))
}
