//! Shell policy: menus, keyboard shortcuts, launcher search and drag translation.
//!
//! Everything here is pure so the reducer and the components can share it.

use desktop_app_contract::{AppCatalog, AppDescriptor};

use crate::model::{Point, TopMenu};

/// Top-bar menu contents, in display order.
pub const TOP_BAR_MENUS: [(TopMenu, &[&str]); 6] = [
    (
        TopMenu::File,
        &[
            "New Window",
            "New Tab",
            "Open...",
            "Open Recent",
            "Close Window",
            "Save",
            "Print...",
        ],
    ),
    (
        TopMenu::Edit,
        &["Undo", "Redo", "Cut", "Copy", "Paste", "Select All"],
    ),
    (
        TopMenu::View,
        &["As Icons", "As List", "As Columns", "Enter Full Screen"],
    ),
    (
        TopMenu::Go,
        &[
            "Back",
            "Forward",
            "Enclosing Folder",
            "Recents",
            "Documents",
            "Desktop",
            "Downloads",
        ],
    ),
    (
        TopMenu::Window,
        &[
            "Minimize",
            "Zoom",
            "Move Window to Left Side of Screen",
            "Move Window to Right Side of Screen",
            "Cycle Through Windows",
        ],
    ),
    (TopMenu::Help, &["Search", "macOS Help", "What's New"]),
];

pub const SASSY_MESSAGES: [&str; 12] = [
    "Hey, you know I'm not real macOS, right?",
    "Hah! Still clicking? I told you, fake OS.",
    "Click all you want, I'm just a website.",
    "404: Real functionality not found.",
    "Nice try, Steve Jobs would be proud.",
    "I'm flattered you think this works.",
    "Functionality.exe has left the chat.",
    "Stop poking me!",
    "Are you looking for bugs or features?",
    "This is just a CSS trick, relax.",
    "You found the secret: Disappointment.",
    "Maybe try the terminal?",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    AboutThisMac,
    SystemSettings,
    Sleep,
    Restart,
    LogOut,
    NewWindow,
    /// Any menu item without a real implementation.
    Unsupported,
}

impl MenuAction {
    /// Maps a top-bar menu label to its action.
    pub fn from_label(label: &str) -> Self {
        match label {
            "New Window" => Self::NewWindow,
            _ => Self::Unsupported,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemMenuEntry {
    Item {
        label: &'static str,
        action: MenuAction,
    },
    Separator,
}

pub const SYSTEM_MENU: [SystemMenuEntry; 7] = [
    SystemMenuEntry::Item {
        label: "About This Mac",
        action: MenuAction::AboutThisMac,
    },
    SystemMenuEntry::Separator,
    SystemMenuEntry::Item {
        label: "System Settings...",
        action: MenuAction::SystemSettings,
    },
    SystemMenuEntry::Separator,
    SystemMenuEntry::Item {
        label: "Sleep",
        action: MenuAction::Sleep,
    },
    SystemMenuEntry::Item {
        label: "Restart...",
        action: MenuAction::Restart,
    },
    SystemMenuEntry::Item {
        label: "Log Out...",
        action: MenuAction::LogOut,
    },
];

impl TopMenu {
    pub const fn label(self) -> &'static str {
        match self {
            Self::System => "System",
            Self::File => "File",
            Self::Edit => "Edit",
            Self::View => "View",
            Self::Go => "Go",
            Self::Window => "Window",
            Self::Help => "Help",
        }
    }

    /// DOM id of the dropdown for this menu.
    pub const fn dom_id(self) -> &'static str {
        match self {
            Self::System => "menu-system",
            Self::File => "menu-file",
            Self::Edit => "menu-edit",
            Self::View => "menu-view",
            Self::Go => "menu-go",
            Self::Window => "menu-window",
            Self::Help => "menu-help",
        }
    }
}

/// Dropdown entries for a top-bar menu.
pub fn menu_entries(menu: TopMenu) -> Vec<SystemMenuEntry> {
    if menu == TopMenu::System {
        return SYSTEM_MENU.to_vec();
    }
    TOP_BAR_MENUS
        .iter()
        .find(|(candidate, _)| *candidate == menu)
        .map(|(_, labels)| {
            labels
                .iter()
                .map(|label| SystemMenuEntry::Item {
                    label: *label,
                    action: MenuAction::from_label(label),
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Returns the sassy message at `cursor` and the cursor for the next one.
pub fn next_sassy_message(cursor: usize) -> (&'static str, usize) {
    let index = cursor % SASSY_MESSAGES.len();
    (SASSY_MESSAGES[index], (index + 1) % SASSY_MESSAGES.len())
}

pub fn is_mobile_width(width: i32, breakpoint: i32) -> bool {
    width < breakpoint
}

/// `Cmd+K` / `Ctrl+K`.
pub fn is_launcher_shortcut(key: &str, ctrl: bool, meta: bool, alt: bool) -> bool {
    (ctrl || meta) && !alt && key.eq_ignore_ascii_case("k")
}

/// Launcher matches: case-insensitive title substring. An empty query lists nothing.
pub fn filter_launcher(catalog: &AppCatalog, query: &str) -> Vec<&'static AppDescriptor> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    catalog
        .descriptors()
        .iter()
        .filter(|descriptor| descriptor.title.to_lowercase().contains(&needle))
        .collect()
}

/// Converts a pointer position to the desktop-relative origin of the dragged window.
///
/// The result is clamped to be non-negative; callers clamp the far edges against the area.
pub fn desktop_relative_position(client: Point, grab_offset: Point, desktop_origin: Point) -> Point {
    Point::new(
        (client.x - grab_offset.x - desktop_origin.x).max(0),
        (client.y - grab_offset.y - desktop_origin.y).max(0),
    )
}
