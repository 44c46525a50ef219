//! Shared contract types between the desktop session runtime and the content panels it hosts.
//!
//! The runtime owns window lifecycle, stacking and the session machine. Content panels only see
//! the closed set of [`ApplicationId`] values, the active [`Theme`], and an [`AppHost`] handle for
//! asking the runtime to open, close or focus windows.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::{fmt, str::FromStr};

use leptos::{Callable, Callback, View};
use serde::{Deserialize, Serialize};

/// Stable identifier for an application in the desktop catalog.
///
/// The set is closed; at most one window per identifier can be open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationId {
    /// Profile / about panel.
    About,
    /// Project showcase panel.
    Projects,
    /// Contact panel.
    Contact,
    /// Appearance settings panel.
    Settings,
    /// Simulated terminal.
    Terminal,
    /// "About This Mac" system dialog.
    AboutMac,
}

impl ApplicationId {
    /// Every identifier, in catalog order.
    pub const ALL: [ApplicationId; 6] = [
        Self::About,
        Self::Projects,
        Self::Contact,
        Self::Settings,
        Self::Terminal,
        Self::AboutMac,
    ];

    /// Returns the canonical string form of the identifier.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Projects => "projects",
            Self::Contact => "contact",
            Self::Settings => "settings",
            Self::Terminal => "terminal",
            Self::AboutMac => "about_mac",
        }
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationId {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == raw.trim())
            .ok_or_else(|| format!("unknown application id `{raw}`"))
    }
}

/// Visual skin applied uniformly to the shell and its windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Glassy desktop with a top menu bar and a floating dock.
    Macos,
    /// Minimal terminal-flavoured desktop with a bottom panel.
    Linux,
    /// Hand-drawn paper desktop.
    Retro,
}

impl Theme {
    /// Every theme, in boot-selector order.
    pub const ALL: [Theme; 3] = [Self::Retro, Self::Macos, Self::Linux];

    /// Returns the stable string token for the theme.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Macos => "macos",
            Self::Linux => "linux",
            Self::Retro => "retro",
        }
    }

    /// Returns the human-readable label shown by the boot selector.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Macos => "macOS",
            Self::Linux => "Linux",
            Self::Retro => "Retro",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "macos" => Ok(Self::Macos),
            "linux" => Ok(Self::Linux),
            "retro" => Ok(Self::Retro),
            other => Err(format!("unknown theme `{other}`")),
        }
    }
}

/// Window chrome variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowVariant {
    /// Regular application window with minimize and maximize controls.
    #[default]
    Default,
    /// Modal-like window without minimize and maximize controls.
    Dialog,
}

impl WindowVariant {
    /// Returns whether the variant shows minimize/maximize affordances.
    pub const fn has_size_controls(self) -> bool {
        matches!(self, Self::Default)
    }
}

/// Preferred width used when a catalog entry is missing.
pub const FALLBACK_WINDOW_WIDTH: i32 = 600;
/// Preferred height used when a catalog entry is missing.
pub const FALLBACK_WINDOW_HEIGHT: i32 = 500;

/// Static description of an application offered by the desktop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AppDescriptor {
    /// Application identifier.
    pub app_id: ApplicationId,
    /// Window and launcher title.
    pub title: &'static str,
    /// Preferred window width before placement clamping.
    pub default_width: i32,
    /// Preferred window height before placement clamping.
    pub default_height: i32,
    /// Whether the app gets a desktop icon and a dock entry.
    pub show_on_desktop: bool,
}

impl AppDescriptor {
    /// Descriptor used for identifiers missing from a catalog.
    pub const fn fallback(app_id: ApplicationId) -> Self {
        Self {
            app_id,
            title: app_id.as_str(),
            default_width: FALLBACK_WINDOW_WIDTH,
            default_height: FALLBACK_WINDOW_HEIGHT,
            show_on_desktop: false,
        }
    }
}

/// Immutable application catalog supplied to the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppCatalog {
    entries: &'static [AppDescriptor],
}

impl AppCatalog {
    /// Wraps a static descriptor table.
    pub const fn new(entries: &'static [AppDescriptor]) -> Self {
        Self { entries }
    }

    /// Returns every descriptor in catalog order.
    pub fn descriptors(&self) -> &'static [AppDescriptor] {
        self.entries
    }

    /// Looks up the descriptor for `app_id`.
    pub fn descriptor(&self, app_id: ApplicationId) -> Option<&'static AppDescriptor> {
        self.entries.iter().find(|entry| entry.app_id == app_id)
    }

    /// Looks up the descriptor for `app_id`, falling back to default sizing when absent.
    pub fn descriptor_or_fallback(&self, app_id: ApplicationId) -> AppDescriptor {
        self.descriptor(app_id)
            .copied()
            .unwrap_or_else(|| AppDescriptor::fallback(app_id))
    }

    /// Descriptors that get desktop icons and dock entries.
    pub fn desktop_entries(&self) -> impl Iterator<Item = &'static AppDescriptor> {
        self.entries.iter().filter(|entry| entry.show_on_desktop)
    }
}

/// Requests content panels may send to the desktop runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppRequest {
    /// Open (or restore and focus) an application window.
    Open {
        /// Application to open.
        app_id: ApplicationId,
        /// Chrome variant for a newly created window.
        variant: WindowVariant,
    },
    /// Close an application window.
    Close {
        /// Application whose window should close.
        app_id: ApplicationId,
    },
    /// Focus an application window.
    Focus {
        /// Application whose window should be raised.
        app_id: ApplicationId,
    },
    /// Switch the live desktop theme.
    SetTheme {
        /// New theme.
        theme: Theme,
    },
    /// Replace the desktop wallpaper image.
    SetWallpaper {
        /// Wallpaper image URL; `None` restores the theme default.
        url: Option<String>,
    },
}

#[derive(Clone, Copy)]
/// Runtime handle given to content panels.
pub struct AppHost {
    sender: Callback<AppRequest>,
}

impl AppHost {
    /// Creates a host handle that forwards requests to `sender`.
    pub fn new(sender: Callback<AppRequest>) -> Self {
        Self { sender }
    }

    /// Sends a raw request to the runtime.
    pub fn request(&self, request: AppRequest) {
        self.sender.call(request);
    }

    /// Opens `app_id` as a regular window.
    pub fn open(&self, app_id: ApplicationId) {
        self.request(AppRequest::Open {
            app_id,
            variant: WindowVariant::Default,
        });
    }

    /// Closes the window for `app_id`.
    pub fn close(&self, app_id: ApplicationId) {
        self.request(AppRequest::Close { app_id });
    }

    /// Focuses the window for `app_id`.
    pub fn focus(&self, app_id: ApplicationId) {
        self.request(AppRequest::Focus { app_id });
    }

    /// Switches the live theme.
    pub fn set_theme(&self, theme: Theme) {
        self.request(AppRequest::SetTheme { theme });
    }

    /// Replaces the wallpaper.
    pub fn set_wallpaper(&self, url: Option<String>) {
        self.request(AppRequest::SetWallpaper { url });
    }
}

/// DOM id of the text field that takes keyboard focus when `app_id`'s window is raised.
///
/// Content without a text field simply omits it.
pub fn window_primary_input_dom_id(app_id: ApplicationId) -> String {
    format!("window-input-{}", app_id.as_str())
}

#[derive(Clone, Copy)]
/// Per-window context passed to [`ContentProvider::render_content`].
pub struct ContentContext {
    /// Whether the shell is currently laid out for a narrow viewport.
    pub is_mobile: bool,
    /// Runtime request handle.
    pub host: AppHost,
}

/// Renders the body of an application window.
///
/// Called once per visible window per theme; the runtime never inspects the returned view.
pub trait ContentProvider {
    /// Renders content for `app_id` under `theme`.
    fn render_content(&self, app_id: ApplicationId, theme: Theme, context: ContentContext)
        -> View;
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: [AppDescriptor; 1] = [AppDescriptor {
        app_id: ApplicationId::About,
        title: "About Me",
        default_width: 700,
        default_height: 450,
        show_on_desktop: true,
    }];

    #[test]
    fn application_id_round_trips_through_its_token() {
        for id in ApplicationId::ALL {
            assert_eq!(id.as_str().parse::<ApplicationId>(), Ok(id));
        }
        assert!("calculator".parse::<ApplicationId>().is_err());
    }

    #[test]
    fn theme_parses_known_tokens_only() {
        assert_eq!("linux".parse::<Theme>(), Ok(Theme::Linux));
        assert_eq!(" retro ".parse::<Theme>(), Ok(Theme::Retro));
        assert!("windows".parse::<Theme>().is_err());
    }

    #[test]
    fn catalog_falls_back_to_default_sizing_for_missing_entries() {
        let catalog = AppCatalog::new(&CATALOG);
        assert_eq!(
            catalog.descriptor(ApplicationId::About).map(|d| d.title),
            Some("About Me")
        );

        let fallback = catalog.descriptor_or_fallback(ApplicationId::Terminal);
        assert_eq!(fallback.default_width, FALLBACK_WINDOW_WIDTH);
        assert_eq!(fallback.default_height, FALLBACK_WINDOW_HEIGHT);
        assert!(!fallback.show_on_desktop);
    }

    #[test]
    fn primary_input_ids_are_distinct_per_application() {
        assert_eq!(
            window_primary_input_dom_id(ApplicationId::Terminal),
            "window-input-terminal"
        );
        let mut ids: Vec<String> = ApplicationId::ALL
            .into_iter()
            .map(window_primary_input_dom_id)
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), ApplicationId::ALL.len());
    }

    #[test]
    fn dialog_variant_hides_size_controls() {
        assert!(WindowVariant::Default.has_size_controls());
        assert!(!WindowVariant::Dialog.has_size_controls());
    }
}
