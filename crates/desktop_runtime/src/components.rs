//! Desktop shell UI composition and interaction surfaces.

mod a11y;
mod boot_screens;
mod chrome;
mod launcher;
mod overlays;
mod window;

use std::time::Duration;

use desktop_app_contract::{ApplicationId, Theme, WindowVariant};
use leptos::*;

use self::{
    boot_screens::{BootScreen, ThemeSelector},
    chrome::{Dock, MenuBar},
    launcher::Launcher,
    overlays::{PowerOffOverlay, SleepOverlay, ToastBanner},
    window::DesktopWindow,
};
use crate::{
    host::DESKTOP_AREA_ID,
    icons::{app_icon, IconSize, ShellIcon},
    model::Point,
    reducer::DesktopAction,
    session::{DesktopMode, SessionState},
    shell::is_launcher_shortcut,
    theme::{theme_strategy, ClockFormat, IconColumn},
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Selection,
    Booting,
    Desktop,
}

impl From<SessionState> for Stage {
    fn from(session: SessionState) -> Self {
        match session {
            SessionState::Selection => Self::Selection,
            SessionState::Booting { .. } => Self::Booting,
            SessionState::Desktop { .. } => Self::Desktop,
        }
    }
}

#[component]
/// Renders the theme selector, the boot screen or the desktop for the current session.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let stage = create_memo(move |_| Stage::from(state.with(|desktop| desktop.session)));
    let theme_id = create_memo(move |_| {
        state.with(|desktop| desktop.theme().map_or("selection", Theme::as_str))
    });

    let keydown_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() {
            return;
        }
        let session = runtime.state.with_untracked(|desktop| desktop.session);
        match session.desktop_mode() {
            Some(DesktopMode::Normal) => {}
            Some(DesktopMode::Asleep | DesktopMode::PoweredOff) => {
                runtime.dispatch_action(DesktopAction::Interact);
                return;
            }
            None => return,
        }

        if is_launcher_shortcut(&ev.key(), ev.ctrl_key(), ev.meta_key(), ev.alt_key()) {
            ev.prevent_default();
            runtime.dispatch_action(DesktopAction::ToggleLauncher);
        } else if ev.key() == "Escape" {
            let has_overlay = runtime.state.with_untracked(|desktop| {
                desktop.shell.launcher.open || desktop.shell.active_menu.is_some()
            });
            if has_overlay {
                ev.prevent_default();
                runtime.dispatch_action(DesktopAction::DismissOverlays);
            }
        }
    });
    on_cleanup(move || keydown_listener.remove());

    let resize_listener = window_event_listener(ev::resize, move |_| measure_viewport(runtime));
    on_cleanup(move || resize_listener.remove());

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            data-ui-kind="desktop-root"
            data-theme=move || theme_id.get()
        >
            {move || match stage.get() {
                Stage::Selection => view! { <ThemeSelector /> }.into_view(),
                Stage::Booting => view! { <BootScreen /> }.into_view(),
                Stage::Desktop => view! { <Desktop /> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn Desktop() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let theme = create_memo(move |_| state.with(|desktop| desktop.theme().unwrap_or(Theme::Macos)));
    let mode = create_memo(move |_| state.with(|desktop| desktop.session.desktop_mode()));
    let powered_on = create_memo(move |_| state.with(|desktop| desktop.session.has_powered_off()));
    let launcher_open = create_memo(move |_| state.with(|desktop| desktop.shell.launcher.open));
    let window_ids = create_memo(move |_| {
        state.with(|desktop| {
            desktop
                .windows
                .render_order()
                .into_iter()
                .map(|window| window.id)
                .collect::<Vec<_>>()
        })
    });
    let background = create_memo(move |_| {
        state.with(|desktop| {
            desktop
                .shell
                .wallpaper_url
                .clone()
                .or_else(|| theme_strategy(theme.get()).default_wallpaper().map(str::to_string))
        })
    });

    request_animation_frame(move || measure_viewport(runtime));

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        if runtime.interaction.with_untracked(|ui| ui.dragging.is_some()) {
            runtime.dispatch_action(DesktopAction::UpdateMove {
                pointer: pointer_point(&ev),
            });
        }
    };
    let on_pointer_up = move |ev: web_sys::PointerEvent| {
        if runtime.interaction.with_untracked(|ui| ui.dragging.is_some()) {
            runtime.dispatch_action(DesktopAction::EndMove {
                pointer: pointer_point(&ev),
            });
        }
    };
    let on_pointer_cancel = move |_: web_sys::PointerEvent| {
        if runtime.interaction.with_untracked(|ui| ui.dragging.is_some()) {
            runtime.dispatch_action(DesktopAction::CancelMove);
        }
    };

    let icon_column = move || match theme_strategy(theme.get()).icon_column() {
        IconColumn::Left => "left",
        IconColumn::Right => "right",
    };
    let wallpaper_style = move || {
        background
            .get()
            .map(|url| format!("background-image:url('{url}');"))
            .unwrap_or_default()
    };

    view! {
        <div
            class="desktop"
            data-ui-kind="desktop"
            data-mode=move || match mode.get() {
                Some(DesktopMode::Asleep) => "asleep",
                Some(DesktopMode::PoweredOff) => "powered-off",
                _ => "normal",
            }
            data-powered-on=move || powered_on.get().to_string()
            data-icon-column=icon_column
            style=wallpaper_style
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointercancel=on_pointer_cancel
        >
            {move || {
                theme_strategy(theme.get())
                    .shows_menu_bar()
                    .then(|| view! { <MenuBar theme=theme /> })
            }}
            <div
                id=DESKTOP_AREA_ID
                class="desktop-area"
                on:mousedown=move |_| runtime.dispatch_action(DesktopAction::DismissOverlays)
            >
                <DesktopIcons />
                <div class="desktop-window-layer" data-ui-kind="window-layer">
                    <For each=move || window_ids.get() key=|app_id| *app_id let:app_id>
                        <DesktopWindow app_id=app_id theme=theme />
                    </For>
                </div>
            </div>
            <Dock theme=theme />
            <Show when=move || launcher_open.get() fallback=|| ()>
                <Launcher />
            </Show>
            <ToastBanner />
            <Show when=move || mode.get() == Some(DesktopMode::Asleep) fallback=|| ()>
                <SleepOverlay />
            </Show>
            <Show when=move || mode.get() == Some(DesktopMode::PoweredOff) fallback=|| ()>
                <PowerOffOverlay />
            </Show>
        </div>
    }
}

#[component]
fn DesktopIcons() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let catalog = runtime.state.with_untracked(|desktop| desktop.catalog);

    let icons = catalog
        .desktop_entries()
        .map(|entry| {
            let app_id = entry.app_id;
            view! {
                <button
                    type="button"
                    class="desktop-icon"
                    data-app=app_id.as_str()
                    on:click=move |_| open_app(runtime, app_id)
                >
                    <ShellIcon icon=app_icon(app_id) size=IconSize::Lg />
                    <span class="desktop-icon-label">{entry.title}</span>
                </button>
            }
        })
        .collect_view();

    view! { <nav class="desktop-icons" aria-label="Desktop">{icons}</nav> }
}

#[component]
fn Clock(theme: Memo<Theme>) -> impl IntoView {
    let now = create_rw_signal(ClockSnapshot::now());
    if let Ok(interval) =
        set_interval_with_handle(move || now.set(ClockSnapshot::now()), Duration::from_secs(1))
    {
        on_cleanup(move || interval.clear());
    }

    view! {
        <time class="shell-clock">
            {move || format_clock(now.get(), theme_strategy(theme.get()).clock_format())}
        </time>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ClockSnapshot {
    /// 0 = Sunday.
    weekday: u32,
    hour: u32,
    minute: u32,
}

impl ClockSnapshot {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                weekday: date.get_day(),
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self {
                weekday: 4,
                hour: 0,
                minute: 0,
            }
        }
    }
}

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

fn format_clock(snapshot: ClockSnapshot, format: ClockFormat) -> String {
    let twelve_hour = match snapshot.hour % 12 {
        0 => 12,
        hour => hour,
    };
    let suffix = if snapshot.hour >= 12 { "PM" } else { "AM" };
    match format {
        ClockFormat::TwentyFourHour => format!("{:02}:{:02}", snapshot.hour, snapshot.minute),
        ClockFormat::TwelveHour => format!("{:02}:{:02} {suffix}", twelve_hour, snapshot.minute),
        ClockFormat::WeekdayTwelveHour => {
            let weekday = WEEKDAYS[(snapshot.weekday % 7) as usize];
            format!("{weekday} {twelve_hour}:{:02} {suffix}", snapshot.minute)
        }
    }
}

pub(crate) fn measure_viewport(runtime: DesktopRuntimeContext) {
    let measurement = runtime.host.get_value().measure_desktop();
    runtime.dispatch_action(DesktopAction::ViewportResized {
        viewport: measurement.viewport,
        window_width: measurement.window_width,
    });
}

fn open_app(runtime: DesktopRuntimeContext, app_id: ApplicationId) {
    runtime.dispatch_action(DesktopAction::OpenApp {
        app_id,
        variant: WindowVariant::Default,
    });
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_point(ev: &web_sys::PointerEvent) -> Point {
    Point::new(ev.client_x(), ev.client_y())
}
