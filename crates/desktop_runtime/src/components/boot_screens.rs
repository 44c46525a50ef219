use super::*;
use crate::{
    boot::{BootSequence, LOCK_PROMPT},
    host::LOCK_INPUT_ID,
    theme::BootStyle,
};

#[component]
pub(super) fn ThemeSelector() -> impl IntoView {
    let runtime = use_desktop_runtime();

    let choices = Theme::ALL
        .iter()
        .map(|theme| {
            let theme = *theme;
            view! {
                <button
                    type="button"
                    class="theme-choice"
                    data-theme=theme.as_str()
                    on:click=move |_| runtime.dispatch_action(DesktopAction::SelectTheme { theme })
                >
                    {theme.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <main class="theme-selector" data-ui-kind="theme-selector">
            <h1>"Choose your desktop"</h1>
            <div class="theme-choices">{choices}</div>
        </main>
    }
}

#[component]
pub(super) fn BootScreen() -> impl IntoView {
    let state = use_desktop_runtime().state;
    let style = create_memo(move |_| {
        state.with(|desktop| desktop.boot.as_ref().map(BootSequence::style))
    });

    move || match style.get() {
        Some(BootStyle::ProgressBar) => view! { <ProgressScreen /> }.into_view(),
        Some(BootStyle::LogScroll) => view! { <LogScreen /> }.into_view(),
        Some(BootStyle::TerminalLock) => view! { <LockScreen /> }.into_view(),
        None => ().into_view(),
    }
}

#[component]
fn ProgressScreen() -> impl IntoView {
    let state = use_desktop_runtime().state;
    let percent = create_memo(move |_| {
        state.with(|desktop| match &desktop.boot {
            Some(BootSequence::Progress(boot)) => boot.percent(),
            _ => 100,
        })
    });

    view! {
        <div class="boot-screen boot-progress" data-ui-kind="boot-progress">
            <div class="boot-logo" aria-hidden="true"></div>
            <div
                class="boot-progress-track"
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow=move || percent.get()
            >
                <div
                    class="boot-progress-fill"
                    style=move || format!("width:{}%;", percent.get())
                ></div>
            </div>
        </div>
    }
}

#[component]
fn LogScreen() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let lines = create_memo(move |_| {
        runtime.state.with(|desktop| match &desktop.boot {
            Some(BootSequence::Log(boot)) => boot.lines().to_vec(),
            _ => Vec::new(),
        })
    });

    view! {
        <div
            class="boot-screen boot-log"
            data-ui-kind="boot-log"
            on:click=move |_| runtime.dispatch_action(DesktopAction::SkipBoot)
        >
            <pre class="boot-log-lines">
                {move || {
                    lines
                        .get()
                        .into_iter()
                        .map(|line| view! { <div class="boot-log-line">{line}</div> })
                        .collect_view()
                }}
            </pre>
            <p class="boot-skip-hint">"Click to skip"</p>
        </div>
    }
}

#[component]
fn LockScreen() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let history = create_memo(move |_| {
        state.with(|desktop| match &desktop.boot {
            Some(BootSequence::Lock(lock)) => lock.history().to_vec(),
            _ => Vec::new(),
        })
    });
    let accepts_input = create_memo(move |_| {
        state.with(|desktop| {
            matches!(&desktop.boot, Some(BootSequence::Lock(lock)) if lock.accepts_input())
        })
    });
    let draft = create_rw_signal(String::new());

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        ev.prevent_default();
        let command = draft.get_untracked();
        draft.set(String::new());
        runtime.dispatch_action(DesktopAction::SubmitLockCommand { command });
    };

    view! {
        <div class="boot-screen boot-lock" data-ui-kind="boot-lock">
            <div class="boot-lock-history">
                <For
                    each=move || history.get().into_iter().enumerate()
                    key=|(index, line)| (*index, line.clone())
                    let:entry
                >
                    <div class="boot-lock-line">{entry.1}</div>
                </For>
            </div>
            <Show when=move || accepts_input.get() fallback=|| ()>
                <label class="boot-lock-prompt">
                    <span>{LOCK_PROMPT}</span>
                    <input
                        id=LOCK_INPUT_ID
                        class="boot-lock-input"
                        type="text"
                        autocomplete="off"
                        spellcheck="false"
                        prop:value=move || draft.get()
                        on:input=move |ev| draft.set(event_target_value(&ev))
                        on:keydown=on_keydown
                    />
                </label>
            </Show>
        </div>
    }
}
