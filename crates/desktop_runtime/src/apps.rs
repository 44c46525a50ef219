//! Built-in application catalog and the default content provider.

mod placeholders;

use desktop_app_contract::{
    AppCatalog, AppDescriptor, ApplicationId, ContentContext, ContentProvider, Theme,
};
use leptos::View;

const BUILTIN_APPS: [AppDescriptor; 6] = [
    AppDescriptor {
        app_id: ApplicationId::About,
        title: "About Me",
        default_width: 700,
        default_height: 450,
        show_on_desktop: true,
    },
    AppDescriptor {
        app_id: ApplicationId::Projects,
        title: "Projects",
        default_width: 800,
        default_height: 600,
        show_on_desktop: true,
    },
    AppDescriptor {
        app_id: ApplicationId::Contact,
        title: "Contact",
        default_width: 500,
        default_height: 400,
        show_on_desktop: true,
    },
    AppDescriptor {
        app_id: ApplicationId::Settings,
        title: "Settings",
        default_width: 600,
        default_height: 400,
        show_on_desktop: true,
    },
    AppDescriptor {
        app_id: ApplicationId::Terminal,
        title: "Terminal",
        default_width: 600,
        default_height: 400,
        show_on_desktop: true,
    },
    AppDescriptor {
        app_id: ApplicationId::AboutMac,
        title: "About This Mac",
        default_width: 320,
        default_height: 400,
        show_on_desktop: false,
    },
];

pub const fn builtin_catalog() -> AppCatalog {
    AppCatalog::new(&BUILTIN_APPS)
}

/// Content provider used when the embedding site does not supply its own panels.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinContent;

impl ContentProvider for BuiltinContent {
    fn render_content(&self, app_id: ApplicationId, theme: Theme, context: ContentContext) -> View {
        match app_id {
            ApplicationId::About => placeholders::about_panel(theme, context),
            ApplicationId::Projects => placeholders::projects_panel(),
            ApplicationId::Contact => placeholders::contact_panel(),
            ApplicationId::Settings => placeholders::settings_panel(theme, context),
            ApplicationId::Terminal => placeholders::terminal_panel(context),
            ApplicationId::AboutMac => placeholders::about_mac_panel(),
        }
    }
}
