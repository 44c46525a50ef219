//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, the runtime effect queue and the host
//! bootstrap wiring. UI composition stays in [`crate::components`].
#![allow(clippy::clone_on_copy)]

use std::rc::Rc;

use desktop_app_contract::{AppHost, AppRequest, ContentProvider};
use leptos::*;

use crate::{
    apps::BuiltinContent,
    config::DesktopConfig,
    effect_executor,
    host::DesktopHostContext,
    model::{DesktopState, InteractionState},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host bundle executing runtime side effects and layout queries.
    pub host: StoredValue<DesktopHostContext>,
    /// Content provider rendering window bodies.
    pub content: StoredValue<Rc<dyn ContentProvider>>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive pointer/drag interaction state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of runtime effects emitted by the reducer and processed by the executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Request handle handed to window content.
    pub fn app_host(&self) -> AppHost {
        let dispatch = self.dispatch;
        AppHost::new(Callback::new(move |request: AppRequest| {
            dispatch.call(DesktopAction::HandleAppRequest { request });
        }))
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
pub fn DesktopProvider(
    /// Runtime constants; defaults when omitted.
    #[prop(optional)]
    config: Option<DesktopConfig>,
    /// Window content; the built-in placeholder panels when omitted.
    #[prop(optional)]
    content: Option<Rc<dyn ContentProvider>>,
    children: Children,
) -> impl IntoView {
    let config = match config {
        Some(config) => match config.validate() {
            Ok(()) => config,
            Err(err) => {
                logging::warn!("ignoring desktop config: {err}");
                DesktopConfig::default()
            }
        },
        None => DesktopConfig::default(),
    };
    let content: Rc<dyn ContentProvider> = content.unwrap_or_else(|| Rc::new(BuiltinContent));

    let host = store_value(DesktopHostContext::new());
    let content = store_value(content);
    let state = create_rw_signal(DesktopState::with_config(config));
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut ui = interaction.get_untracked();
        let previous_desktop = desktop.clone();
        let previous_ui = ui.clone();

        match reduce_desktop(&mut desktop, &mut ui, action) {
            Ok(new_effects) => {
                if desktop != previous_desktop {
                    state.set(desktop);
                }
                if ui != previous_ui {
                    interaction.set(ui);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("desktop reducer error: {err}"),
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        content,
        state,
        interaction,
        effects,
        dispatch,
    };

    provide_context(runtime.clone());

    effect_executor::install(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
