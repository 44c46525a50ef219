use super::*;
use crate::icons::IconName;

#[component]
pub(super) fn ToastBanner() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let toast = create_memo(move |_| runtime.state.with(|desktop| desktop.shell.toast.clone()));

    view! {
        <div class="toast-region" role="status" aria-live="polite">
            {move || {
                toast
                    .get()
                    .map(|toast| {
                        let toast_id = toast.id;
                        view! {
                            <div class="toast" data-toast-id=toast_id>
                                <span class="toast-message">{toast.message}</span>
                                <button
                                    type="button"
                                    class="toast-dismiss"
                                    aria-label="Dismiss"
                                    on:click=move |_| {
                                        runtime
                                            .dispatch_action(DesktopAction::DismissToast {
                                                toast_id,
                                            })
                                    }
                                >
                                    <ShellIcon icon=IconName::Dismiss size=IconSize::Xs />
                                </button>
                            </div>
                        }
                    })
            }}
        </div>
    }
}

#[component]
pub(super) fn SleepOverlay() -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <div
            class="sleep-overlay"
            data-ui-kind="sleep-overlay"
            on:click=move |ev: web_sys::MouseEvent| {
                stop_mouse_event(&ev);
                runtime.dispatch_action(DesktopAction::Interact);
            }
        >
            <p class="sleep-hint">"Click to wake"</p>
        </div>
    }
}

#[component]
pub(super) fn PowerOffOverlay() -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <div
            class="power-off-overlay"
            data-ui-kind="power-off-overlay"
            on:click=move |ev: web_sys::MouseEvent| {
                stop_mouse_event(&ev);
                runtime.dispatch_action(DesktopAction::Interact);
            }
        >
            <p class="no-signal">"NO SIGNAL"</p>
            <p class="power-hint">"Touch to Power On"</p>
        </div>
    }
}
