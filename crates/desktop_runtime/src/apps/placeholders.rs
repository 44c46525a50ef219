//! Placeholder panels shipped with the runtime so the shell is usable without external content.

use desktop_app_contract::{window_primary_input_dom_id, ApplicationId, ContentContext, Theme};
use leptos::*;

const WALLPAPERS: [(&str, &str); 4] = [
    ("Big Sur", "/wallpapers/big-sur-layers.jpg"),
    ("Monterey", "/wallpapers/monterey.jpg"),
    ("Ventura", "/wallpapers/ventura.jpg"),
    ("Sonoma", "/wallpapers/sonoma.jpg"),
];

pub(super) fn about_panel(theme: Theme, context: ContentContext) -> View {
    let layout = if context.is_mobile { "stacked" } else { "split" };
    view! {
        <div class="app-shell app-about" data-layout=layout data-theme=theme.as_str()>
            <h2>"Hello, guest."</h2>
            <p>"This desktop is a simulation. Open the other icons to look around."</p>
        </div>
    }
    .into_view()
}

pub(super) fn projects_panel() -> View {
    view! {
        <div class="app-shell app-projects">
            <p>"No projects have been published yet."</p>
        </div>
    }
    .into_view()
}

pub(super) fn contact_panel() -> View {
    view! {
        <div class="app-shell app-contact">
            <p>"Reach out through the links on the main site."</p>
        </div>
    }
    .into_view()
}

pub(super) fn about_mac_panel() -> View {
    view! {
        <div class="app-shell app-about-mac">
            <h2>"macOS"</h2>
            <p>"Version 14.0 (simulated)"</p>
            <p>"Memory: 65536K"</p>
        </div>
    }
    .into_view()
}

pub(super) fn settings_panel(theme: Theme, context: ContentContext) -> View {
    let host = context.host;
    let themes = Theme::ALL
        .into_iter()
        .map(|option| {
            let class = if option == theme {
                "app-action selected"
            } else {
                "app-action"
            };
            view! {
                <button type="button" class=class on:click=move |_| host.set_theme(option)>
                    {option.label()}
                </button>
            }
        })
        .collect_view();
    let wallpapers = (theme == Theme::Macos).then(|| {
        let buttons = WALLPAPERS
            .into_iter()
            .map(|(name, url)| {
                view! {
                    <button
                        type="button"
                        class="app-action"
                        on:click=move |_| host.set_wallpaper(Some(url.to_string()))
                    >
                        {name}
                    </button>
                }
            })
            .collect_view();
        view! {
            <section>
                <h3>"Wallpaper"</h3>
                <div class="app-toolbar">{buttons}</div>
            </section>
        }
    });

    view! {
        <div class="app-shell app-settings">
            <section>
                <h3>"Theme"</h3>
                <div class="app-toolbar">{themes}</div>
            </section>
            {wallpapers}
        </div>
    }
    .into_view()
}

/// Maps the names accepted by `open` to applications.
pub(super) fn app_alias(name: &str) -> Option<ApplicationId> {
    match name.to_ascii_lowercase().as_str() {
        "contact" | "mail" => Some(ApplicationId::Contact),
        "projects" | "work" => Some(ApplicationId::Projects),
        "about" | "me" => Some(ApplicationId::About),
        "settings" | "config" => Some(ApplicationId::Settings),
        "mac" => Some(ApplicationId::AboutMac),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum TerminalReply {
    Lines(Vec<String>),
    Clear,
    Launch(ApplicationId, String),
}

fn run_terminal_command(line: &str) -> TerminalReply {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return TerminalReply::Lines(Vec::new());
    };
    match command {
        "help" => TerminalReply::Lines(vec![
            "open [app] - Launch app".to_string(),
            "clear      - Clear screen".to_string(),
        ]),
        "clear" => TerminalReply::Clear,
        "open" => match words.next() {
            None => TerminalReply::Lines(vec![
                "usage: open [app_name] (e.g., open contact)".to_string()
            ]),
            Some(name) => match app_alias(name) {
                Some(app_id) => TerminalReply::Launch(app_id, format!("Launching {name}...")),
                None => TerminalReply::Lines(vec![format!(
                    "open: application not found: {name}"
                )]),
            },
        },
        other => TerminalReply::Lines(vec![format!("command not found: {other}")]),
    }
}

pub(super) fn terminal_panel(context: ContentContext) -> View {
    view! { <TerminalPanel context=context /> }.into_view()
}

#[component]
fn TerminalPanel(context: ContentContext) -> impl IntoView {
    let history = create_rw_signal(vec![
        "Type \"help\" for a list of available commands.".to_string()
    ]);
    let input = create_rw_signal(String::new());

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        let line = input.get_untracked();
        input.set(String::new());
        let reply = run_terminal_command(line.trim());
        let launch = match &reply {
            TerminalReply::Launch(app_id, _) => Some(*app_id),
            _ => None,
        };
        history.update(|lines| {
            lines.push(format!("guest@openbio:~$ {line}"));
            match reply {
                TerminalReply::Lines(output) => lines.extend(output),
                TerminalReply::Clear => lines.clear(),
                TerminalReply::Launch(_, message) => lines.push(message),
            }
        });
        if let Some(app_id) = launch {
            context.host.open(app_id);
        }
    };

    view! {
        <div class="app-shell app-terminal">
            <For
                each=move || history.get().into_iter().enumerate()
                key=|(index, line)| (*index, line.clone())
                let:entry
            >
                <div class="app-terminal-line">{entry.1}</div>
            </For>
            <div class="app-terminal-prompt">
                <span>"guest@openbio:~$"</span>
                <input
                    id=window_primary_input_dom_id(ApplicationId::Terminal)
                    type="text"
                    spellcheck="false"
                    autocomplete="off"
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
            </div>
        </div>
    }
}
