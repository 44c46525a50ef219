//! Per-theme layout and chrome parameters.
//!
//! Components ask the active [`ThemeStrategy`] for measurements and flags instead of branching on
//! [`Theme`] themselves, which keeps the registry and session machine theme-agnostic.

use desktop_app_contract::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconColumn {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlsSide {
    Leading,
    Trailing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootStyle {
    /// Logo with a filling progress bar.
    ProgressBar,
    /// Scrolling init-system log.
    LogScroll,
    /// BIOS text followed by a password prompt.
    TerminalLock,
}

/// How top-bar and dock clocks render the time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockFormat {
    /// `Mon 9:41 AM`
    WeekdayTwelveHour,
    /// `09:41`
    TwentyFourHour,
    /// `09:41 AM`
    TwelveHour,
}

pub trait ThemeStrategy: Sync {
    fn theme(&self) -> Theme;

    /// Vertical space reserved for the dock or panel when sizing new windows.
    fn dock_reserve(&self) -> i32;

    /// Stable token used for `data-theme` attributes.
    fn css_id(&self) -> &'static str {
        self.theme().as_str()
    }

    fn shows_menu_bar(&self) -> bool;

    /// Whether the top bar carries the system menu and the application menus.
    fn has_system_menus(&self) -> bool {
        false
    }

    fn shows_power_button(&self) -> bool {
        false
    }

    fn icon_column(&self) -> IconColumn;

    fn controls_side(&self) -> ControlsSide;

    fn window_corner_radius(&self) -> i32;

    /// Whether the dock carries its own clock (themes without a top bar).
    fn dock_clock(&self) -> bool;

    fn boot_style(&self) -> BootStyle;

    fn clock_format(&self) -> ClockFormat;

    fn default_wallpaper(&self) -> Option<&'static str> {
        None
    }
}

struct MacosTheme;

impl ThemeStrategy for MacosTheme {
    fn theme(&self) -> Theme {
        Theme::Macos
    }

    fn dock_reserve(&self) -> i32 {
        120
    }

    fn shows_menu_bar(&self) -> bool {
        true
    }

    fn icon_column(&self) -> IconColumn {
        IconColumn::Right
    }

    fn controls_side(&self) -> ControlsSide {
        ControlsSide::Leading
    }

    fn window_corner_radius(&self) -> i32 {
        12
    }

    fn dock_clock(&self) -> bool {
        false
    }

    fn boot_style(&self) -> BootStyle {
        BootStyle::ProgressBar
    }

    fn clock_format(&self) -> ClockFormat {
        ClockFormat::WeekdayTwelveHour
    }

    fn has_system_menus(&self) -> bool {
        true
    }

    fn default_wallpaper(&self) -> Option<&'static str> {
        Some("/wallpapers/big-sur-layers.jpg")
    }
}

struct LinuxTheme;

impl ThemeStrategy for LinuxTheme {
    fn theme(&self) -> Theme {
        Theme::Linux
    }

    fn dock_reserve(&self) -> i32 {
        50
    }

    fn shows_menu_bar(&self) -> bool {
        false
    }

    fn icon_column(&self) -> IconColumn {
        IconColumn::Left
    }

    fn controls_side(&self) -> ControlsSide {
        ControlsSide::Trailing
    }

    fn window_corner_radius(&self) -> i32 {
        0
    }

    fn dock_clock(&self) -> bool {
        true
    }

    fn boot_style(&self) -> BootStyle {
        BootStyle::LogScroll
    }

    fn clock_format(&self) -> ClockFormat {
        ClockFormat::TwentyFourHour
    }
}

struct RetroTheme;

impl ThemeStrategy for RetroTheme {
    fn theme(&self) -> Theme {
        Theme::Retro
    }

    fn dock_reserve(&self) -> i32 {
        120
    }

    fn shows_menu_bar(&self) -> bool {
        true
    }

    fn icon_column(&self) -> IconColumn {
        IconColumn::Left
    }

    fn controls_side(&self) -> ControlsSide {
        ControlsSide::Leading
    }

    fn window_corner_radius(&self) -> i32 {
        12
    }

    fn dock_clock(&self) -> bool {
        false
    }

    fn boot_style(&self) -> BootStyle {
        BootStyle::TerminalLock
    }

    fn clock_format(&self) -> ClockFormat {
        ClockFormat::TwelveHour
    }

    fn shows_power_button(&self) -> bool {
        true
    }
}

static MACOS: MacosTheme = MacosTheme;
static LINUX: LinuxTheme = LinuxTheme;
static RETRO: RetroTheme = RetroTheme;

pub fn theme_strategy(theme: Theme) -> &'static dyn ThemeStrategy {
    match theme {
        Theme::Macos => &MACOS,
        Theme::Linux => &LINUX,
        Theme::Retro => &RETRO,
    }
}
