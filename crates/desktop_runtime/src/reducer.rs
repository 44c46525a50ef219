//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use desktop_app_contract::{AppRequest, ApplicationId, Theme, WindowVariant};
use thiserror::Error;

use crate::{
    boot::{BootSequence, BootStep, LockOutcome},
    model::{
        DesktopState, DesktopViewport, DragSession, InteractionState, OpenWindowRequest, Point,
        ShellState, Toast, TopMenu,
    },
    placement::clamp_to_area,
    session::{SessionError, SessionEvent, SessionSideEffect, SessionState},
    shell::{self, MenuAction},
    theme::{theme_strategy, ThemeStrategy},
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Pick a theme on the selection screen and start booting it.
    SelectTheme { theme: Theme },
    /// Advance the running boot screen by one tick.
    BootTick,
    /// Boot finished; enter the desktop.
    BootComplete,
    /// Click on a skippable boot screen.
    SkipBoot,
    /// Command typed at the terminal lock prompt.
    SubmitLockCommand { command: String },
    LogOut,
    RequestSleep,
    RequestShutdown,
    /// Click or key press on the desktop, sleep overlay or standby screen.
    Interact,
    /// Open an application, or restore and focus its existing window.
    OpenApp {
        app_id: ApplicationId,
        variant: WindowVariant,
    },
    CloseWindow { app_id: ApplicationId },
    ToggleMinimize { app_id: ApplicationId },
    ToggleMaximize { app_id: ApplicationId },
    /// Raise a window and give it the next z-index.
    ///
    /// A window that is already active and topmost keeps its z-index and emits no effect, so the
    /// pointer-down on every click inside the front window does not grow the counter.
    FocusWindow { app_id: ApplicationId },
    /// Store a desktop-relative window origin.
    UpdatePosition {
        app_id: ApplicationId,
        position: Point,
    },
    /// Pointer-down on a title bar.
    BeginMove {
        app_id: ApplicationId,
        /// Pointer position in client coordinates.
        pointer: Point,
        /// Client-space origin of the desktop area.
        desktop_origin: Point,
    },
    UpdateMove { pointer: Point },
    /// Pointer released; commits the drag.
    EndMove { pointer: Point },
    /// Pointer capture lost; discards the drag.
    CancelMove,
    /// Desktop area or browser window resized.
    ViewportResized {
        viewport: DesktopViewport,
        window_width: i32,
    },
    ToggleLauncher,
    CloseLauncher,
    SetLauncherQuery { query: String },
    /// Open an app picked in the launcher and dismiss it.
    LaunchFromLauncher { app_id: ApplicationId },
    ToggleMenu { menu: TopMenu },
    CloseMenus,
    /// Click on the bare desktop: closes menus and the launcher.
    DismissOverlays,
    RunMenuAction { action: MenuAction },
    /// Expire a toast. Ignored when a newer toast replaced it.
    DismissToast { toast_id: u64 },
    /// Switch the live desktop theme without rebooting.
    SetTheme { theme: Theme },
    /// Replace the wallpaper; `None` restores the theme default.
    SetWallpaper { url: Option<String> },
    /// Request sent by window content through its host handle.
    HandleAppRequest { request: AppRequest },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the host to execute.
pub enum RuntimeEffect {
    StartBootTicker { interval_ms: u32 },
    StopBootTicker,
    /// Deliver [`DesktopAction::BootComplete`] after a delay.
    CompleteBootAfter { delay_ms: u32 },
    /// Cancel boot ticks and a pending completion.
    CancelBootTasks,
    /// Cancel every scheduled task (session replaced).
    CancelAllTasks,
    ScheduleToastDismiss { toast_id: u64, after_ms: u32 },
    FocusLauncherInput,
    FocusLockInput,
    /// Move keyboard focus into a window.
    FocusWindowInput(ApplicationId),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions the current session does not accept.
pub enum ReducerError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("desktop is not accepting input in state {0}")]
    DesktopNotInteractive(SessionState),
    #[error("no boot sequence is running")]
    NotBooting,
}

/// Applies a [`DesktopAction`] to the desktop runtime state and collects resulting side effects.
///
/// Operations naming a window that is not open are silent no-ops.
///
/// # Errors
///
/// Returns [`ReducerError::Session`] for rejected session events,
/// [`ReducerError::DesktopNotInteractive`] for window and shell input while the desktop is not
/// in normal mode, and [`ReducerError::NotBooting`] for boot input outside a boot screen.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::SelectTheme { theme } => {
            apply_session_event(state, interaction, SessionEvent::ThemeChosen(theme))?;
            let boot = BootSequence::new(theme_strategy(theme).boot_style(), &state.config.boot);
            effects.push(RuntimeEffect::StartBootTicker {
                interval_ms: boot.tick_interval_ms(&state.config.boot),
            });
            state.boot = Some(boot);
        }
        DesktopAction::BootTick => {
            let boot = state.boot.as_mut().ok_or(ReducerError::NotBooting)?;
            match boot.tick() {
                BootStep::Continue => {}
                BootStep::Finished { delay_ms } => {
                    effects.push(RuntimeEffect::StopBootTicker);
                    effects.push(RuntimeEffect::CompleteBootAfter { delay_ms });
                }
                BootStep::AwaitInput => {
                    effects.push(RuntimeEffect::StopBootTicker);
                    effects.push(RuntimeEffect::FocusLockInput);
                }
            }
        }
        DesktopAction::BootComplete => {
            apply_session_event(state, interaction, SessionEvent::BootComplete)?;
            state.boot = None;
            effects.push(RuntimeEffect::CancelBootTasks);
        }
        DesktopAction::SkipBoot => {
            let boot = state.boot.as_ref().ok_or(ReducerError::NotBooting)?;
            if boot.skippable() {
                return reduce_desktop(state, interaction, DesktopAction::BootComplete);
            }
        }
        DesktopAction::SubmitLockCommand { command } => {
            let Some(BootSequence::Lock(lock)) = state.boot.as_mut() else {
                return Err(ReducerError::NotBooting);
            };
            match lock.submit(&command) {
                LockOutcome::Unlocked { delay_ms } => {
                    effects.push(RuntimeEffect::CompleteBootAfter { delay_ms });
                }
                LockOutcome::Hint
                | LockOutcome::Rejected
                | LockOutcome::Cleared
                | LockOutcome::Ignored => {}
            }
        }
        DesktopAction::LogOut => {
            apply_session_event(state, interaction, SessionEvent::LogOut)?;
            effects.push(RuntimeEffect::CancelAllTasks);
        }
        DesktopAction::RequestSleep => {
            apply_session_event(state, interaction, SessionEvent::SleepRequested)?;
        }
        DesktopAction::RequestShutdown => {
            apply_session_event(state, interaction, SessionEvent::ShutdownRequested)?;
            close_transient_ui(&mut state.shell, interaction);
        }
        DesktopAction::Interact => {
            apply_session_event(state, interaction, SessionEvent::Interaction)?;
        }
        DesktopAction::OpenApp { app_id, variant } => {
            ensure_interactive(state)?;
            open_app(state, app_id, variant, &mut effects);
        }
        DesktopAction::CloseWindow { app_id } => {
            ensure_interactive(state)?;
            if state.windows.close(app_id) {
                drop_drag_for(interaction, app_id);
            }
        }
        DesktopAction::ToggleMinimize { app_id } => {
            ensure_interactive(state)?;
            if state.windows.toggle_minimize(app_id) {
                drop_drag_for(interaction, app_id);
            }
        }
        DesktopAction::ToggleMaximize { app_id } => {
            ensure_interactive(state)?;
            if state.windows.toggle_maximize(app_id) {
                drop_drag_for(interaction, app_id);
                effects.push(RuntimeEffect::FocusWindowInput(app_id));
            }
        }
        DesktopAction::FocusWindow { app_id } => {
            ensure_interactive(state)?;
            let already_active = state.windows.active_window_id() == Some(app_id)
                && state.windows.topmost().map(|w| w.id) == Some(app_id);
            if !already_active && state.windows.focus(app_id) {
                effects.push(RuntimeEffect::FocusWindowInput(app_id));
            }
        }
        DesktopAction::UpdatePosition { app_id, position } => {
            ensure_interactive(state)?;
            state.windows.update_position(app_id, position.x, position.y);
        }
        DesktopAction::BeginMove {
            app_id,
            pointer,
            desktop_origin,
        } => {
            ensure_interactive(state)?;
            let is_mobile = state.shell.is_mobile;
            let Some(window) = state.windows.get(app_id) else {
                return Ok(effects);
            };
            if !window.draggable(is_mobile) {
                return Ok(effects);
            }
            let grab_offset = Point::new(
                pointer.x - desktop_origin.x - window.position.x,
                pointer.y - desktop_origin.y - window.position.y,
            );
            interaction.dragging = Some(DragSession {
                window_id: app_id,
                grab_offset,
                desktop_origin,
                preview: window.position,
            });
        }
        DesktopAction::UpdateMove { pointer } => {
            let viewport = state.shell.viewport;
            if let Some(session) = interaction.dragging.as_mut() {
                if let Some(window) = state.windows.get(session.window_id) {
                    let relative = shell::desktop_relative_position(
                        pointer,
                        session.grab_offset,
                        session.desktop_origin,
                    );
                    session.preview = clamp_to_area(relative, window.size, viewport);
                }
            }
        }
        DesktopAction::EndMove { pointer } => {
            if let Some(session) = interaction.dragging.take() {
                if state.session.is_interactive() {
                    if let Some(window) = state.windows.get(session.window_id) {
                        let relative = shell::desktop_relative_position(
                            pointer,
                            session.grab_offset,
                            session.desktop_origin,
                        );
                        let position = clamp_to_area(relative, window.size, state.shell.viewport);
                        state
                            .windows
                            .update_position(session.window_id, position.x, position.y);
                    }
                }
            }
        }
        DesktopAction::CancelMove => {
            interaction.dragging = None;
        }
        DesktopAction::ViewportResized {
            viewport,
            window_width,
        } => {
            state.shell.viewport = viewport;
            state.shell.is_mobile =
                shell::is_mobile_width(window_width, state.config.mobile_breakpoint_px);
            if state.shell.is_mobile {
                let forced = interaction
                    .dragging
                    .as_ref()
                    .and_then(|session| state.windows.get(session.window_id))
                    .is_some_and(|window| !window.draggable(true));
                if forced {
                    interaction.dragging = None;
                }
            }
        }
        DesktopAction::ToggleLauncher => {
            ensure_interactive(state)?;
            let launcher = &mut state.shell.launcher;
            launcher.open = !launcher.open;
            if launcher.open {
                effects.push(RuntimeEffect::FocusLauncherInput);
            }
        }
        DesktopAction::CloseLauncher => {
            state.shell.launcher.open = false;
        }
        DesktopAction::SetLauncherQuery { query } => {
            state.shell.launcher.query = query;
        }
        DesktopAction::LaunchFromLauncher { app_id } => {
            ensure_interactive(state)?;
            state.shell.launcher.open = false;
            state.shell.launcher.query.clear();
            open_app(state, app_id, WindowVariant::Default, &mut effects);
        }
        DesktopAction::ToggleMenu { menu } => {
            ensure_interactive(state)?;
            state.shell.active_menu = if state.shell.active_menu == Some(menu) {
                None
            } else {
                Some(menu)
            };
        }
        DesktopAction::CloseMenus => {
            state.shell.active_menu = None;
        }
        DesktopAction::DismissOverlays => {
            state.shell.active_menu = None;
            state.shell.launcher.open = false;
        }
        DesktopAction::RunMenuAction { action } => {
            ensure_interactive(state)?;
            state.shell.active_menu = None;
            effects.extend(run_menu_action(state, interaction, action)?);
        }
        DesktopAction::DismissToast { toast_id } => {
            if state.shell.toast.as_ref().map(|toast| toast.id) == Some(toast_id) {
                state.shell.toast = None;
            }
        }
        DesktopAction::SetTheme { theme } => {
            if !matches!(state.session, SessionState::Desktop { .. }) {
                return Err(ReducerError::DesktopNotInteractive(state.session));
            }
            state.session = state.session.with_theme(theme);
        }
        DesktopAction::SetWallpaper { url } => {
            ensure_interactive(state)?;
            state.shell.wallpaper_url = url;
        }
        DesktopAction::HandleAppRequest { request } => {
            let action = match request {
                AppRequest::Open { app_id, variant } => DesktopAction::OpenApp { app_id, variant },
                AppRequest::Close { app_id } => DesktopAction::CloseWindow { app_id },
                AppRequest::Focus { app_id } => DesktopAction::FocusWindow { app_id },
                AppRequest::SetTheme { theme } => DesktopAction::SetTheme { theme },
                AppRequest::SetWallpaper { url } => DesktopAction::SetWallpaper { url },
            };
            effects.extend(reduce_desktop(state, interaction, action)?);
        }
    }

    Ok(effects)
}

/// Strategy for the active theme; the selection screen uses the macOS defaults.
pub fn active_theme_strategy(state: &DesktopState) -> &'static dyn ThemeStrategy {
    theme_strategy(state.theme().unwrap_or(Theme::Macos))
}

fn ensure_interactive(state: &DesktopState) -> Result<(), ReducerError> {
    if state.session.is_interactive() {
        Ok(())
    } else {
        Err(ReducerError::DesktopNotInteractive(state.session))
    }
}

fn apply_session_event(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    event: SessionEvent,
) -> Result<(), ReducerError> {
    let transition = state.session.transition(event)?;
    state.session = transition.next;
    match transition.effect {
        Some(SessionSideEffect::SuspendInput) => {
            close_transient_ui(&mut state.shell, interaction);
        }
        Some(SessionSideEffect::ClearSession) => {
            state.windows.clear();
            state.boot = None;
            let viewport = state.shell.viewport;
            let is_mobile = state.shell.is_mobile;
            let next_toast_id = state.shell.next_toast_id;
            state.shell = ShellState {
                viewport,
                is_mobile,
                next_toast_id,
                ..ShellState::default()
            };
            interaction.dragging = None;
        }
        Some(SessionSideEffect::StoreTheme(_))
        | Some(SessionSideEffect::ResumeInput)
        | Some(SessionSideEffect::MarkPoweredOff)
        | None => {}
    }
    Ok(())
}

fn close_transient_ui(shell: &mut ShellState, interaction: &mut InteractionState) {
    shell.active_menu = None;
    shell.launcher.open = false;
    interaction.dragging = None;
}

fn open_app(
    state: &mut DesktopState,
    app_id: ApplicationId,
    variant: WindowVariant,
    effects: &mut Vec<RuntimeEffect>,
) {
    let request = OpenWindowRequest::from_catalog(&state.catalog, app_id, variant);
    let dock_reserve = active_theme_strategy(state).dock_reserve();
    state.windows.open(
        request,
        state.shell.viewport,
        dock_reserve,
        &state.config.placement,
    );
    effects.push(RuntimeEffect::FocusWindowInput(app_id));
}

fn run_menu_action(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: MenuAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        MenuAction::AboutThisMac => {
            open_app(state, ApplicationId::AboutMac, WindowVariant::Dialog, &mut effects);
        }
        MenuAction::SystemSettings => {
            open_app(state, ApplicationId::Settings, WindowVariant::Default, &mut effects);
        }
        MenuAction::NewWindow => {
            open_app(state, ApplicationId::Terminal, WindowVariant::Default, &mut effects);
        }
        MenuAction::Sleep => {
            return reduce_desktop(state, interaction, DesktopAction::RequestSleep);
        }
        MenuAction::Restart | MenuAction::LogOut => {
            return reduce_desktop(state, interaction, DesktopAction::LogOut);
        }
        MenuAction::Unsupported => {
            let (message, cursor) = shell::next_sassy_message(state.shell.sassy_cursor);
            let toast_id = state.shell.next_toast_id;
            state.shell.sassy_cursor = cursor;
            state.shell.next_toast_id = toast_id.saturating_add(1);
            state.shell.toast = Some(Toast {
                id: toast_id,
                message: message.to_string(),
            });
            effects.push(RuntimeEffect::ScheduleToastDismiss {
                toast_id,
                after_ms: state.config.toast_duration_ms,
            });
        }
    }
    Ok(effects)
}

fn drop_drag_for(interaction: &mut InteractionState, app_id: ApplicationId) {
    if interaction
        .dragging
        .as_ref()
        .is_some_and(|session| session.window_id == app_id)
    {
        interaction.dragging = None;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        boot::{BOOT_LOG_LINES, LOCK_PASSWORD},
        model::Size,
        session::DesktopMode,
        shell::SASSY_MESSAGES,
    };

    fn reduce(
        state: &mut DesktopState,
        interaction: &mut InteractionState,
        action: DesktopAction,
    ) -> Vec<RuntimeEffect> {
        reduce_desktop(state, interaction, action).expect("reduce")
    }

    fn desktop(theme: Theme) -> (DesktopState, InteractionState) {
        let mut state = DesktopState::default();
        state.shell.viewport = DesktopViewport::new(1200, 800);
        state.session = SessionState::Desktop {
            theme,
            mode: DesktopMode::Normal,
            has_powered_off: false,
        };
        (state, InteractionState::default())
    }

    fn open(state: &mut DesktopState, interaction: &mut InteractionState, app_id: ApplicationId) {
        reduce(
            state,
            interaction,
            DesktopAction::OpenApp {
                app_id,
                variant: WindowVariant::Default,
            },
        );
    }

    #[test]
    fn selecting_a_theme_starts_its_boot_screen() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::SelectTheme {
                theme: Theme::Linux,
            },
        );

        assert_eq!(state.session, SessionState::Booting { theme: Theme::Linux });
        assert_eq!(
            effects,
            vec![RuntimeEffect::StartBootTicker { interval_ms: 50 }]
        );
        assert!(matches!(state.boot, Some(BootSequence::Log(_))));
    }

    #[test]
    fn linux_boot_ticks_to_completion_and_enters_desktop() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::SelectTheme {
                theme: Theme::Linux,
            },
        );

        let mut last = Vec::new();
        for _ in 0..=BOOT_LOG_LINES.len() {
            last = reduce(&mut state, &mut interaction, DesktopAction::BootTick);
        }
        assert_eq!(
            last,
            vec![
                RuntimeEffect::StopBootTicker,
                RuntimeEffect::CompleteBootAfter { delay_ms: 800 }
            ]
        );

        let effects = reduce(&mut state, &mut interaction, DesktopAction::BootComplete);
        assert_eq!(effects, vec![RuntimeEffect::CancelBootTasks]);
        assert!(state.session.is_interactive());
        assert_eq!(state.boot, None);
    }

    #[test]
    fn skip_only_applies_to_skippable_boot_screens() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::SelectTheme {
                theme: Theme::Macos,
            },
        );
        assert!(reduce(&mut state, &mut interaction, DesktopAction::SkipBoot).is_empty());
        assert_eq!(state.session, SessionState::Booting { theme: Theme::Macos });

        let mut state = DesktopState::default();
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::SelectTheme {
                theme: Theme::Linux,
            },
        );
        reduce(&mut state, &mut interaction, DesktopAction::SkipBoot);
        assert!(state.session.is_interactive());
    }

    #[test]
    fn retro_lock_unlocks_with_the_password() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::SelectTheme {
                theme: Theme::Retro,
            },
        );

        let mut effects = Vec::new();
        while effects.is_empty() {
            effects = reduce(&mut state, &mut interaction, DesktopAction::BootTick);
        }
        assert_eq!(
            effects,
            vec![RuntimeEffect::StopBootTicker, RuntimeEffect::FocusLockInput]
        );

        let denied = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::SubmitLockCommand {
                command: "letmein".to_string(),
            },
        );
        assert!(denied.is_empty());

        let granted = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::SubmitLockCommand {
                command: LOCK_PASSWORD.to_string(),
            },
        );
        assert_eq!(
            granted,
            vec![RuntimeEffect::CompleteBootAfter { delay_ms: 1500 }]
        );
    }

    #[test]
    fn boot_input_outside_boot_is_rejected() {
        let (mut state, mut interaction) = desktop(Theme::Macos);
        assert_eq!(
            reduce_desktop(&mut state, &mut interaction, DesktopAction::BootTick),
            Err(ReducerError::NotBooting)
        );
        assert!(matches!(
            reduce_desktop(&mut state, &mut interaction, DesktopAction::BootComplete),
            Err(ReducerError::Session(SessionError::InvalidTransition { .. }))
        ));
    }

    #[test]
    fn open_places_window_with_theme_dock_reserve() {
        let (mut state, mut interaction) = desktop(Theme::Linux);

        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::OpenApp {
                app_id: ApplicationId::About,
                variant: WindowVariant::Default,
            },
        );

        let window = state.windows.get(ApplicationId::About).expect("window");
        assert_eq!(window.size, Size::new(700, 450));
        assert_eq!(window.position, Point::new(250, 135));
        assert_eq!(window.z_index, 10);
        assert_eq!(
            effects,
            vec![RuntimeEffect::FocusWindowInput(ApplicationId::About)]
        );
    }

    #[test]
    fn focus_input_effect_is_only_sent_when_a_window_is_raised() {
        let (mut state, mut interaction) = desktop(Theme::Macos);
        open(&mut state, &mut interaction, ApplicationId::Terminal);
        open(&mut state, &mut interaction, ApplicationId::About);
        let focus = |app_id| DesktopAction::FocusWindow { app_id };

        assert_eq!(
            reduce(&mut state, &mut interaction, focus(ApplicationId::Terminal)),
            vec![RuntimeEffect::FocusWindowInput(ApplicationId::Terminal)]
        );
        let z = state.windows.get(ApplicationId::Terminal).map(|w| w.z_index);

        assert!(reduce(&mut state, &mut interaction, focus(ApplicationId::Terminal)).is_empty());
        assert_eq!(
            state.windows.get(ApplicationId::Terminal).map(|w| w.z_index),
            z
        );
        assert!(reduce(&mut state, &mut interaction, focus(ApplicationId::Contact)).is_empty());
    }

    #[test]
    fn window_input_is_rejected_while_asleep() {
        let (mut state, mut interaction) = desktop(Theme::Macos);
        reduce(&mut state, &mut interaction, DesktopAction::RequestSleep);

        let result = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::OpenApp {
                app_id: ApplicationId::About,
                variant: WindowVariant::Default,
            },
        );
        assert!(matches!(
            result,
            Err(ReducerError::DesktopNotInteractive(_))
        ));
        assert!(state.windows.is_empty());

        reduce(&mut state, &mut interaction, DesktopAction::Interact);
        assert!(state.session.is_interactive());
    }

    #[test]
    fn unknown_window_operations_are_silent() {
        let (mut state, mut interaction) = desktop(Theme::Macos);
        let before = state.clone();

        for action in [
            DesktopAction::CloseWindow {
                app_id: ApplicationId::Contact,
            },
            DesktopAction::ToggleMinimize {
                app_id: ApplicationId::Contact,
            },
            DesktopAction::ToggleMaximize {
                app_id: ApplicationId::Contact,
            },
            DesktopAction::FocusWindow {
                app_id: ApplicationId::Contact,
            },
        ] {
            assert!(reduce(&mut state, &mut interaction, action).is_empty());
        }
        assert_eq!(state, before);
    }

    #[test]
    fn drag_commits_desktop_relative_clamped_position() {
        let (mut state, mut interaction) = desktop(Theme::Macos);
        open(&mut state, &mut interaction, ApplicationId::Contact);
        let start = state.windows.get(ApplicationId::Contact).expect("window").position;
        let origin = Point::new(0, 28);

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                app_id: ApplicationId::Contact,
                pointer: Point::new(start.x + 30, start.y + 28 + 10),
                desktop_origin: origin,
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: Point::new(start.x + 130, start.y + 28 + 60),
            },
        );
        assert_eq!(
            interaction.dragging.as_ref().map(|drag| drag.preview),
            Some(start.offset(100, 50))
        );

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::EndMove {
                pointer: Point::new(-500, -500),
            },
        );
        assert_eq!(interaction.dragging, None);
        assert_eq!(
            state.windows.get(ApplicationId::Contact).map(|w| w.position),
            Some(Point::new(0, 0))
        );
    }

    #[test]
    fn maximized_and_mobile_windows_do_not_start_drags() {
        let (mut state, mut interaction) = desktop(Theme::Macos);
        open(&mut state, &mut interaction, ApplicationId::Terminal);
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize {
                app_id: ApplicationId::Terminal,
            },
        );
        let begin = DesktopAction::BeginMove {
            app_id: ApplicationId::Terminal,
            pointer: Point::new(400, 200),
            desktop_origin: Point::new(0, 28),
        };
        reduce(&mut state, &mut interaction, begin.clone());
        assert_eq!(interaction.dragging, None);

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize {
                app_id: ApplicationId::Terminal,
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ViewportResized {
                viewport: DesktopViewport::new(400, 700),
                window_width: 400,
            },
        );
        assert!(state.shell.is_mobile);
        reduce(&mut state, &mut interaction, begin);
        assert_eq!(interaction.dragging, None);
    }

    #[test]
    fn launcher_toggles_and_launches() {
        let (mut state, mut interaction) = desktop(Theme::Macos);

        let effects = reduce(&mut state, &mut interaction, DesktopAction::ToggleLauncher);
        assert!(state.shell.launcher.open);
        assert_eq!(effects, vec![RuntimeEffect::FocusLauncherInput]);

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::SetLauncherQuery {
                query: "term".to_string(),
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::LaunchFromLauncher {
                app_id: ApplicationId::Terminal,
            },
        );
        assert!(!state.shell.launcher.open);
        assert_eq!(state.shell.launcher.query, "");
        assert_eq!(state.active_window_id(), Some(ApplicationId::Terminal));

        reduce(&mut state, &mut interaction, DesktopAction::ToggleLauncher);
        reduce(&mut state, &mut interaction, DesktopAction::CloseLauncher);
        assert!(!state.shell.launcher.open);
    }

    #[test]
    fn only_one_menu_is_open_and_desktop_click_closes_it() {
        let (mut state, mut interaction) = desktop(Theme::Macos);

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMenu {
                menu: TopMenu::File,
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMenu {
                menu: TopMenu::Edit,
            },
        );
        assert_eq!(state.shell.active_menu, Some(TopMenu::Edit));

        reduce(&mut state, &mut interaction, DesktopAction::DismissOverlays);
        assert_eq!(state.shell.active_menu, None);
    }

    #[test]
    fn about_this_mac_opens_as_dialog() {
        let (mut state, mut interaction) = desktop(Theme::Macos);
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::RunMenuAction {
                action: MenuAction::AboutThisMac,
            },
        );

        let window = state.windows.get(ApplicationId::AboutMac).expect("dialog");
        assert_eq!(window.variant, WindowVariant::Dialog);
        assert_eq!(window.size, Size::new(320, 400));
    }

    #[test]
    fn unsupported_menu_items_show_rotating_toasts() {
        let (mut state, mut interaction) = desktop(Theme::Macos);
        let unsupported = DesktopAction::RunMenuAction {
            action: MenuAction::Unsupported,
        };

        let first = reduce(&mut state, &mut interaction, unsupported.clone());
        assert_eq!(
            first,
            vec![RuntimeEffect::ScheduleToastDismiss {
                toast_id: 1,
                after_ms: 3000
            }]
        );
        reduce(&mut state, &mut interaction, unsupported);
        assert_eq!(
            state.shell.toast,
            Some(Toast {
                id: 2,
                message: SASSY_MESSAGES[1].to_string()
            })
        );

        // The first timer fires late and must not hide the newer toast.
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::DismissToast { toast_id: 1 },
        );
        assert!(state.shell.toast.is_some());
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::DismissToast { toast_id: 2 },
        );
        assert_eq!(state.shell.toast, None);
    }

    #[test]
    fn restart_logs_out_and_clears_windows() {
        let (mut state, mut interaction) = desktop(Theme::Macos);
        open(&mut state, &mut interaction, ApplicationId::About);
        open(&mut state, &mut interaction, ApplicationId::Projects);
        let next_z = state.windows.next_z_index();

        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::RunMenuAction {
                action: MenuAction::Restart,
            },
        );

        assert_eq!(effects, vec![RuntimeEffect::CancelAllTasks]);
        assert_eq!(state.session, SessionState::Selection);
        assert!(state.windows.is_empty());
        assert_eq!(state.active_window_id(), None);
        assert_eq!(state.windows.next_z_index(), next_z);
    }

    #[test]
    fn app_requests_route_to_registry_and_theme() {
        let (mut state, mut interaction) = desktop(Theme::Macos);

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::HandleAppRequest {
                request: AppRequest::Open {
                    app_id: ApplicationId::Settings,
                    variant: WindowVariant::Default,
                },
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::HandleAppRequest {
                request: AppRequest::SetTheme {
                    theme: Theme::Retro,
                },
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::HandleAppRequest {
                request: AppRequest::SetWallpaper {
                    url: Some("/wallpapers/sonoma.jpg".to_string()),
                },
            },
        );

        assert!(state.windows.contains(ApplicationId::Settings));
        assert_eq!(state.theme(), Some(Theme::Retro));
        assert_eq!(
            state.shell.wallpaper_url.as_deref(),
            Some("/wallpapers/sonoma.jpg")
        );
    }

    #[test]
    fn shutdown_then_interaction_powers_back_on() {
        let (mut state, mut interaction) = desktop(Theme::Retro);
        reduce(&mut state, &mut interaction, DesktopAction::RequestShutdown);
        assert_eq!(state.session.desktop_mode(), Some(DesktopMode::PoweredOff));

        reduce(&mut state, &mut interaction, DesktopAction::Interact);
        assert!(state.session.is_interactive());
        assert!(state.session.has_powered_off());
    }
}
