use super::*;
use crate::{host::LAUNCHER_INPUT_ID, icons::IconName, shell::filter_launcher};

#[component]
pub(super) fn Launcher() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let catalog = state.with_untracked(|desktop| desktop.catalog);
    let query = create_memo(move |_| state.with(|desktop| desktop.shell.launcher.query.clone()));
    let results = create_memo(move |_| {
        query.with(|query| {
            filter_launcher(&catalog, query)
                .into_iter()
                .map(|descriptor| (descriptor.app_id, descriptor.title))
                .collect::<Vec<_>>()
        })
    });

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        ev.prevent_default();
        if let Some((app_id, _)) = results.with_untracked(|results| results.first().copied()) {
            runtime.dispatch_action(DesktopAction::LaunchFromLauncher { app_id });
        }
    };

    view! {
        <div
            class="launcher-backdrop"
            data-ui-kind="launcher"
            on:mousedown=move |_| runtime.dispatch_action(DesktopAction::CloseLauncher)
        >
            <div
                class="launcher-panel"
                role="dialog"
                aria-label="Search"
                on:mousedown=|ev: web_sys::MouseEvent| ev.stop_propagation()
            >
                <div class="launcher-search">
                    <ShellIcon icon=IconName::Launcher />
                    <input
                        id=LAUNCHER_INPUT_ID
                        class="launcher-input"
                        type="text"
                        placeholder="Search apps"
                        autocomplete="off"
                        spellcheck="false"
                        prop:value=move || query.get()
                        on:input=move |ev| {
                            runtime
                                .dispatch_action(DesktopAction::SetLauncherQuery {
                                    query: event_target_value(&ev),
                                });
                        }
                        on:keydown=on_keydown
                    />
                </div>
                <Show when=move || !results.with(Vec::is_empty) fallback=|| ()>
                    <ul class="launcher-results" role="listbox">
                        <For each=move || results.get() key=|(app_id, _)| *app_id let:result>
                            <li role="option">
                                <button
                                    type="button"
                                    class="launcher-result"
                                    on:click=move |_| {
                                        runtime
                                            .dispatch_action(DesktopAction::LaunchFromLauncher {
                                                app_id: result.0,
                                            });
                                    }
                                >
                                    <ShellIcon icon=app_icon(result.0) />
                                    <span>{result.1}</span>
                                </button>
                            </li>
                        </For>
                    </ul>
                </Show>
            </div>
        </div>
    }
}
