use super::{
    a11y::{focus_first_menu_item, handle_menu_roving_keydown},
    *,
};
use crate::{
    icons::IconName,
    model::TopMenu,
    shell::{menu_entries, SystemMenuEntry, TOP_BAR_MENUS},
};

/// Top-bar label for desktops without application menus.
const BRAND_LABEL: &str = "OpenBio Dev Hub";
/// Menu-bar application name when no window is active.
const IDLE_APP_NAME: &str = "Finder";

#[component]
pub(super) fn MenuBar(theme: Memo<Theme>) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let active_menu = create_memo(move |_| state.with(|desktop| desktop.shell.active_menu));
    let active_app = create_memo(move |_| {
        state.with(|desktop| {
            desktop
                .active_window_id()
                .and_then(|id| desktop.windows.get(id))
                .map_or_else(|| IDLE_APP_NAME.to_string(), |window| window.title.clone())
        })
    });

    create_effect(move |previous: Option<Option<TopMenu>>| {
        let current = active_menu.get();
        if let Some(menu) = current {
            if previous.flatten() != Some(menu) {
                request_animation_frame(move || {
                    let _ = focus_first_menu_item(menu.dom_id());
                });
            }
        }
        current
    });

    let leading = move || {
        if theme_strategy(theme.get()).has_system_menus() {
            let app_menus = TOP_BAR_MENUS
                .iter()
                .map(|(menu, _)| {
                    view! { <TopMenuButton menu=*menu label=menu.label() active_menu=active_menu /> }
                })
                .collect_view();
            view! {
                <TopMenuButton menu=TopMenu::System label="\u{f8ff}" active_menu=active_menu />
                <span class="menu-bar-app">{move || active_app.get()}</span>
                {app_menus}
            }
            .into_view()
        } else {
            view! { <span class="menu-bar-brand">{BRAND_LABEL}</span> }.into_view()
        }
    };
    let search_button = move || {
        theme_strategy(theme.get()).has_system_menus().then(|| {
            view! {
                <button
                    type="button"
                    class="menu-bar-icon"
                    aria-label="Spotlight Search"
                    on:click=move |_| runtime.dispatch_action(DesktopAction::ToggleLauncher)
                >
                    <ShellIcon icon=IconName::Launcher />
                </button>
            }
        })
    };
    let power_button = move || {
        theme_strategy(theme.get()).shows_power_button().then(|| {
            view! {
                <button
                    type="button"
                    class="menu-bar-power"
                    aria-label="Shut down"
                    on:click=move |_| runtime.dispatch_action(DesktopAction::RequestShutdown)
                >
                    "\u{23fb}"
                </button>
            }
        })
    };

    view! {
        <header class="menu-bar" role="menubar" data-ui-kind="menu-bar">
            <div class="menu-bar-leading">{leading}</div>
            <div class="menu-bar-trailing">
                {search_button}
                <Clock theme=theme />
                {power_button}
            </div>
        </header>
    }
}

#[component]
fn TopMenuButton(
    menu: TopMenu,
    label: &'static str,
    active_menu: Memo<Option<TopMenu>>,
) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let is_open = move || active_menu.get() == Some(menu);

    view! {
        <div class="menu-bar-item">
            <button
                type="button"
                class="menu-bar-button"
                aria-haspopup="menu"
                aria-expanded=move || is_open().to_string()
                aria-controls=menu.dom_id()
                on:click=move |_| runtime.dispatch_action(DesktopAction::ToggleMenu { menu })
            >
                {label}
            </button>
            <Show when=is_open fallback=|| ()>
                <div
                    id=menu.dom_id()
                    class="menu-dropdown"
                    role="menu"
                    aria-label=menu.label()
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        let _ = handle_menu_roving_keydown(&ev, menu.dom_id());
                    }
                >
                    {menu_entries(menu)
                        .into_iter()
                        .map(|entry| match entry {
                            SystemMenuEntry::Separator => {
                                view! { <div class="menu-separator" role="separator"></div> }
                                    .into_view()
                            }
                            SystemMenuEntry::Item { label, action } => {
                                view! {
                                    <button
                                        type="button"
                                        role="menuitem"
                                        class="menu-item"
                                        on:click=move |ev: web_sys::MouseEvent| {
                                            stop_mouse_event(&ev);
                                            runtime
                                                .dispatch_action(DesktopAction::RunMenuAction {
                                                    action,
                                                });
                                        }
                                    >
                                        {label}
                                    </button>
                                }
                                    .into_view()
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[component]
pub(super) fn Dock(theme: Memo<Theme>) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let catalog = state.with_untracked(|desktop| desktop.catalog);

    let items = catalog
        .desktop_entries()
        .map(|entry| {
            let app_id = entry.app_id;
            let running = move || state.with(|desktop| desktop.windows.contains(app_id));
            let minimized = move || {
                state.with(|desktop| desktop.windows.get(app_id).is_some_and(|w| w.minimized))
            };
            view! {
                <button
                    type="button"
                    class="dock-item"
                    class:running=running
                    class:minimized=minimized
                    aria-label=entry.title
                    title=entry.title
                    on:click=move |_| open_app(runtime, app_id)
                >
                    <ShellIcon icon=app_icon(app_id) size=IconSize::Lg />
                    <span class="dock-indicator" aria-hidden="true"></span>
                </button>
            }
        })
        .collect_view();

    let menu_button = move || {
        (!theme_strategy(theme.get()).shows_menu_bar()).then(|| {
            view! {
                <button
                    type="button"
                    class="dock-menu"
                    on:click=move |_| runtime.dispatch_action(DesktopAction::ToggleLauncher)
                >
                    "Menu"
                </button>
            }
        })
    };
    let clock = move || {
        theme_strategy(theme.get())
            .dock_clock()
            .then(|| view! { <Clock theme=theme /> })
    };

    view! {
        <footer class="dock" data-ui-kind="dock">
            {menu_button}
            <nav class="dock-items" aria-label="Dock">{items}</nav>
            {clock}
        </footer>
    }
}
