use desktop_app_contract::ContentContext;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use super::*;
use crate::{
    host::window_dom_id,
    icons::IconName,
    model::WindowRect,
    theme::ControlsSide,
};

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn window_style(rect: WindowRect, z_index: u32, corner_radius: i32) -> String {
    format!(
        "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};border-radius:{}px;",
        rect.x, rect.y, rect.w, rect.h, z_index, corner_radius
    )
}

#[component]
pub(super) fn DesktopWindow(app_id: ApplicationId, theme: Memo<Theme>) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let (title, variant) = state.with_untracked(|desktop| {
        desktop
            .windows
            .get(app_id)
            .map(|window| (window.title.clone(), window.variant))
            .unwrap_or_else(|| (app_id.as_str().to_string(), WindowVariant::Default))
    });
    let has_size_controls = variant.has_size_controls();

    let is_mobile = create_memo(move |_| state.with(|desktop| desktop.shell.is_mobile));
    let is_active =
        create_memo(move |_| state.with(|desktop| desktop.active_window_id() == Some(app_id)));
    let maximized = create_memo(move |_| {
        state.with(|desktop| desktop.windows.get(app_id).is_some_and(|window| window.maximized))
    });
    let z_index = create_memo(move |_| {
        state.with(|desktop| desktop.windows.get(app_id).map_or(0, |window| window.z_index))
    });
    let rect = create_memo(move |_| {
        let preview = runtime.interaction.with(|ui| {
            ui.dragging
                .as_ref()
                .filter(|drag| drag.window_id == app_id)
                .map(|drag| drag.preview)
        });
        state.with(|desktop| {
            desktop
                .windows
                .effective_rect(app_id, desktop.shell.viewport, desktop.shell.is_mobile)
                .map(|rect| match preview {
                    Some(position) => WindowRect {
                        x: position.x,
                        y: position.y,
                        ..rect
                    },
                    None => rect,
                })
        })
    });

    let style = move || {
        rect.get()
            .map(|rect| {
                window_style(
                    rect,
                    z_index.get(),
                    theme_strategy(theme.get()).window_corner_radius(),
                )
            })
            .unwrap_or_default()
    };
    let class = move || {
        let mut class = String::from("desktop-window");
        if is_active.get() {
            class.push_str(" active");
        }
        if maximized.get() {
            class.push_str(" maximized");
        }
        if !has_size_controls {
            class.push_str(" dialog");
        }
        class
    };

    let focus = move |_: web_sys::PointerEvent| {
        runtime.dispatch_action(DesktopAction::FocusWindow { app_id });
    };
    let begin_move = move |ev: web_sys::PointerEvent| {
        if ev.pointer_type() == "mouse" && ev.button() != 0 {
            return;
        }
        if ev.pointer_type() != "mouse" && !ev.is_primary() {
            return;
        }
        let draggable = state.with_untracked(|desktop| {
            desktop
                .windows
                .get(app_id)
                .is_some_and(|window| window.draggable(desktop.shell.is_mobile))
        });
        if !draggable {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        runtime.dispatch_action(DesktopAction::BeginMove {
            app_id,
            pointer: pointer_point(&ev),
            desktop_origin: runtime.host.get_value().measure_desktop().origin,
        });
    };
    let titlebar_double_click = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        if has_size_controls {
            runtime.dispatch_action(DesktopAction::ToggleMaximize { app_id });
        }
    };

    let controls = move || {
        let mut buttons = vec![control_button(
            runtime,
            "window-control close",
            "Close window",
            IconName::Dismiss,
            DesktopAction::CloseWindow { app_id },
        )];
        if has_size_controls {
            buttons.push(control_button(
                runtime,
                "window-control minimize",
                "Minimize window",
                IconName::WindowMinimize,
                DesktopAction::ToggleMinimize { app_id },
            ));
            let (label, icon) = if maximized.get() {
                ("Restore window", IconName::WindowRestore)
            } else {
                ("Maximize window", IconName::WindowMaximize)
            };
            buttons.push(control_button(
                runtime,
                "window-control maximize",
                label,
                icon,
                DesktopAction::ToggleMaximize { app_id },
            ));
        }
        let side = theme_strategy(theme.get()).controls_side();
        if side == ControlsSide::Trailing {
            buttons.rotate_left(1);
        }
        view! {
            <div
                class="window-controls"
                data-side=match side {
                    ControlsSide::Leading => "leading",
                    ControlsSide::Trailing => "trailing",
                }
            >
                {buttons}
            </div>
        }
    };

    let content = move || {
        let context = ContentContext {
            is_mobile: is_mobile.get(),
            host: runtime.app_host(),
        };
        let theme = theme.get();
        runtime
            .content
            .with_value(|provider| provider.render_content(app_id, theme, context))
    };

    view! {
        <section
            id=window_dom_id(app_id)
            class=class
            style=style
            tabindex="-1"
            role="dialog"
            aria-label=title.clone()
            data-app=app_id.as_str()
            on:pointerdown=focus
        >
            <header
                class="window-titlebar"
                on:pointerdown=begin_move
                on:dblclick=titlebar_double_click
            >
                {controls}
                <span class="window-title">{title}</span>
            </header>
            <div class="window-body">{content}</div>
        </section>
    }
}

fn control_button(
    runtime: DesktopRuntimeContext,
    class: &'static str,
    label: &'static str,
    icon: IconName,
    action: DesktopAction,
) -> View {
    view! {
        <button
            type="button"
            class=class
            aria-label=label
            on:pointerdown=move |ev: web_sys::PointerEvent| {
                ev.prevent_default();
                ev.stop_propagation();
            }
            on:click=move |ev: web_sys::MouseEvent| {
                stop_mouse_event(&ev);
                runtime.dispatch_action(action.clone());
            }
        >
            <ShellIcon icon=icon size=IconSize::Xs />
        </button>
    }
    .into_view()
}
