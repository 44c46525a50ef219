use desktop_app_contract::{AppCatalog, ApplicationId, Theme, WindowVariant};
use serde::{Deserialize, Serialize};

use crate::{
    apps,
    config::DesktopConfig,
    session::SessionState,
    window_manager::WindowRegistry,
};

/// Fallback desktop width used before the first viewport measurement.
pub const DEFAULT_DESKTOP_WIDTH: i32 = 1024;
/// Fallback desktop height used before the first viewport measurement.
pub const DEFAULT_DESKTOP_HEIGHT: i32 = 768;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn from_parts(position: Point, size: Size) -> Self {
        Self {
            x: position.x,
            y: position.y,
            w: size.width,
            h: size.height,
        }
    }
}

/// Available desktop area, excluding the top bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopViewport {
    pub width: i32,
    pub height: i32,
}

impl DesktopViewport {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// The full desktop area in desktop-local coordinates.
    pub fn full_rect(self) -> WindowRect {
        WindowRect {
            x: 0,
            y: 0,
            w: self.width.max(0),
            h: self.height.max(0),
        }
    }
}

impl Default for DesktopViewport {
    fn default() -> Self {
        Self::new(DEFAULT_DESKTOP_WIDTH, DEFAULT_DESKTOP_HEIGHT)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: ApplicationId,
    pub title: String,
    pub variant: WindowVariant,
    pub minimized: bool,
    pub maximized: bool,
    pub z_index: u32,
    pub position: Point,
    pub size: Size,
}

impl WindowRecord {
    /// Stored geometry, ignoring maximize/forced-full derivation.
    pub fn stored_rect(&self) -> WindowRect {
        WindowRect::from_parts(self.position, self.size)
    }

    /// Whether this window is laid out over the whole desktop on narrow viewports.
    pub fn forced_full(&self, is_mobile: bool) -> bool {
        is_mobile && self.variant != WindowVariant::Dialog
    }

    /// Whether the window can be dragged in its current mode.
    pub fn draggable(&self, is_mobile: bool) -> bool {
        !self.maximized && !self.forced_full(is_mobile)
    }
}

/// Request to open an application window, built from a catalog descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenWindowRequest {
    pub app_id: ApplicationId,
    pub title: String,
    pub preferred_size: Size,
    pub variant: WindowVariant,
}

impl OpenWindowRequest {
    pub fn from_catalog(catalog: &AppCatalog, app_id: ApplicationId, variant: WindowVariant) -> Self {
        let descriptor = catalog.descriptor_or_fallback(app_id);
        Self {
            app_id,
            title: descriptor.title.to_string(),
            preferred_size: Size::new(descriptor.default_width, descriptor.default_height),
            variant,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TopMenu {
    System,
    File,
    Edit,
    View,
    Go,
    Window,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub id: u64,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LauncherState {
    pub open: bool,
    pub query: String,
}

/// Shell-level UI state that sits next to the window registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellState {
    pub viewport: DesktopViewport,
    pub is_mobile: bool,
    pub launcher: LauncherState,
    pub active_menu: Option<TopMenu>,
    pub toast: Option<Toast>,
    pub next_toast_id: u64,
    pub sassy_cursor: usize,
    pub wallpaper_url: Option<String>,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            viewport: DesktopViewport::default(),
            is_mobile: false,
            launcher: LauncherState::default(),
            active_menu: None,
            toast: None,
            next_toast_id: 1,
            sassy_cursor: 0,
            wallpaper_url: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DesktopState {
    pub session: SessionState,
    pub windows: WindowRegistry,
    pub shell: ShellState,
    pub boot: Option<crate::boot::BootSequence>,
    pub catalog: AppCatalog,
    pub config: DesktopConfig,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self::with_config(DesktopConfig::default())
    }
}

impl DesktopState {
    pub fn with_config(config: DesktopConfig) -> Self {
        Self {
            session: SessionState::default(),
            windows: WindowRegistry::new(config.initial_z_index),
            shell: ShellState::default(),
            boot: None,
            catalog: apps::builtin_catalog(),
            config,
        }
    }

    /// Active theme, present while booting or on the desktop.
    pub fn theme(&self) -> Option<Theme> {
        self.session.theme()
    }

    pub fn active_window_id(&self) -> Option<ApplicationId> {
        self.windows.active_window_id()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub window_id: ApplicationId,
    /// Pointer position relative to the window origin at grab time.
    pub grab_offset: Point,
    /// Client-space origin of the desktop area.
    pub desktop_origin: Point,
    /// Desktop-relative preview position while the pointer moves.
    pub preview: Point,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
}
