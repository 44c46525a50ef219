//! Window registry: the single source of truth for open windows, stacking and focus.
//!
//! Every operation addressed to an id without a window is a silent no-op so stale references from
//! timers or delegated callbacks can never fail.

use desktop_app_contract::ApplicationId;

use crate::{
    config::PlacementConfig,
    model::{DesktopViewport, OpenWindowRequest, WindowRecord, WindowRect},
    placement::initial_placement,
    stacking::ZIndexCounter,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRegistry {
    windows: Vec<WindowRecord>,
    active: Option<ApplicationId>,
    z_counter: ZIndexCounter,
}

impl Default for WindowRegistry {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_INITIAL_Z_INDEX)
    }
}

impl WindowRegistry {
    pub fn new(initial_z_index: u32) -> Self {
        Self {
            windows: Vec::new(),
            active: None,
            z_counter: ZIndexCounter::new(initial_z_index),
        }
    }

    /// All open windows in insertion order.
    pub fn windows(&self) -> &[WindowRecord] {
        &self.windows
    }

    pub fn get(&self, id: ApplicationId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == id)
    }

    pub fn contains(&self, id: ApplicationId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn active_window_id(&self) -> Option<ApplicationId> {
        self.active
    }

    /// Z-index the next open or focus will receive.
    pub fn next_z_index(&self) -> u32 {
        self.z_counter.peek()
    }

    /// Opens a window for `request.app_id`.
    ///
    /// When the application already has a window it is restored if minimized and focused instead;
    /// its geometry is left untouched.
    pub fn open(
        &mut self,
        request: OpenWindowRequest,
        area: DesktopViewport,
        dock_reserve: i32,
        config: &PlacementConfig,
    ) -> &WindowRecord {
        let id = request.app_id;
        if let Some(index) = self.index_of(id) {
            self.windows[index].minimized = false;
            self.focus(id);
            return &self.windows[index];
        }

        let placement = initial_placement(
            area,
            dock_reserve,
            request.preferred_size,
            self.windows.len(),
            config,
        );
        let record = WindowRecord {
            id,
            title: request.title,
            variant: request.variant,
            minimized: false,
            maximized: false,
            z_index: self.z_counter.allocate(),
            position: placement.position,
            size: placement.size,
        };
        self.windows.push(record);
        self.active = Some(id);
        let last = self.windows.len() - 1;
        &self.windows[last]
    }

    /// Removes the window. Focus is not handed to another window.
    pub fn close(&mut self, id: ApplicationId) -> bool {
        let before = self.windows.len();
        self.windows.retain(|w| w.id != id);
        if self.active == Some(id) {
            self.active = None;
        }
        self.windows.len() != before
    }

    pub fn toggle_minimize(&mut self, id: ApplicationId) -> bool {
        match self.get_mut(id) {
            Some(window) => {
                window.minimized = !window.minimized;
                true
            }
            None => false,
        }
    }

    /// Flips maximize and brings the window to the front.
    pub fn toggle_maximize(&mut self, id: ApplicationId) -> bool {
        let Some(window) = self.get_mut(id) else {
            return false;
        };
        window.maximized = !window.maximized;
        self.focus(id);
        true
    }

    /// Stores a new origin. While maximized the value is kept but only shows after restore.
    pub fn update_position(&mut self, id: ApplicationId, x: i32, y: i32) -> bool {
        match self.get_mut(id) {
            Some(window) => {
                window.position = crate::model::Point::new(x, y);
                true
            }
            None => false,
        }
    }

    /// Makes `id` the active window and raises it above every other window.
    pub fn focus(&mut self, id: ApplicationId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        self.windows[index].z_index = self.z_counter.allocate();
        self.active = Some(id);
        true
    }

    /// Drops every window and the active reference. The z counter keeps counting.
    pub fn clear(&mut self) {
        self.windows.clear();
        self.active = None;
    }

    /// Visible windows, back to front.
    pub fn render_order(&self) -> Vec<&WindowRecord> {
        let mut visible: Vec<&WindowRecord> =
            self.windows.iter().filter(|w| !w.minimized).collect();
        visible.sort_by_key(|w| w.z_index);
        visible
    }

    /// Topmost window regardless of minimize state.
    pub fn topmost(&self) -> Option<&WindowRecord> {
        self.windows.iter().max_by_key(|w| w.z_index)
    }

    /// Geometry the window is drawn with.
    pub fn effective_rect(
        &self,
        id: ApplicationId,
        area: DesktopViewport,
        is_mobile: bool,
    ) -> Option<WindowRect> {
        self.get(id)
            .map(|window| effective_rect(window, area, is_mobile))
    }

    fn index_of(&self, id: ApplicationId) -> Option<usize> {
        self.windows.iter().position(|w| w.id == id)
    }

    fn get_mut(&mut self, id: ApplicationId) -> Option<&mut WindowRecord> {
        self.windows.iter_mut().find(|w| w.id == id)
    }
}

/// Maximized and forced-full windows cover the whole desktop; others use their stored geometry.
pub fn effective_rect(window: &WindowRecord, area: DesktopViewport, is_mobile: bool) -> WindowRect {
    if window.maximized || window.forced_full(is_mobile) {
        area.full_rect()
    } else {
        window.stored_rect()
    }
}
