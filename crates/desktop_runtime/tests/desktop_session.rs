use desktop_app_contract::{AppRequest, ApplicationId, Theme, WindowVariant};
use desktop_runtime::{
    boot::LOCK_PASSWORD,
    reduce_desktop,
    session::SessionError,
    DesktopAction, DesktopMode, DesktopState, DesktopViewport, InteractionState, Point,
    ReducerError, RuntimeEffect, SessionState, Size, WindowRect,
};
use pretty_assertions::assert_eq;

struct Harness {
    state: DesktopState,
    interaction: InteractionState,
}

impl Harness {
    fn new() -> Self {
        let mut harness = Self {
            state: DesktopState::default(),
            interaction: InteractionState::default(),
        };
        harness.send(DesktopAction::ViewportResized {
            viewport: DesktopViewport::new(1200, 800),
            window_width: 1200,
        });
        harness
    }

    fn try_send(&mut self, action: DesktopAction) -> Result<Vec<RuntimeEffect>, ReducerError> {
        reduce_desktop(&mut self.state, &mut self.interaction, action)
    }

    fn send(&mut self, action: DesktopAction) -> Vec<RuntimeEffect> {
        self.try_send(action).expect("action accepted")
    }

    /// Ticks the boot screen until the host would stop the ticker.
    fn tick_until_stopped(&mut self) -> (usize, Vec<RuntimeEffect>) {
        for tick in 1..=1_000 {
            let effects = self.send(DesktopAction::BootTick);
            if !effects.is_empty() {
                return (tick, effects);
            }
        }
        panic!("boot ticker never stopped");
    }

    fn boot(theme: Theme) -> Self {
        let mut harness = Self::new();
        harness.send(DesktopAction::SelectTheme { theme });
        let (_, effects) = harness.tick_until_stopped();
        if effects.contains(&RuntimeEffect::FocusLockInput) {
            harness.send(DesktopAction::SubmitLockCommand {
                command: LOCK_PASSWORD.to_string(),
            });
        }
        harness.send(DesktopAction::BootComplete);
        harness
    }

    fn open(&mut self, app_id: ApplicationId) -> Vec<RuntimeEffect> {
        self.send(DesktopAction::OpenApp {
            app_id,
            variant: WindowVariant::Default,
        })
    }

    fn z(&self, app_id: ApplicationId) -> u32 {
        self.state.windows.get(app_id).expect("window open").z_index
    }
}

fn normal(theme: Theme) -> SessionState {
    SessionState::Desktop {
        theme,
        mode: DesktopMode::Normal,
        has_powered_off: false,
    }
}

#[test]
fn macos_boot_fills_the_progress_bar_then_settles() {
    let mut harness = Harness::new();
    let effects = harness.send(DesktopAction::SelectTheme {
        theme: Theme::Macos,
    });
    assert_eq!(effects, vec![RuntimeEffect::StartBootTicker { interval_ms: 30 }]);

    let (ticks, effects) = harness.tick_until_stopped();
    assert_eq!(ticks, 84);
    assert_eq!(
        effects,
        vec![
            RuntimeEffect::StopBootTicker,
            RuntimeEffect::CompleteBootAfter { delay_ms: 500 },
        ]
    );

    assert_eq!(
        harness.send(DesktopAction::BootComplete),
        vec![RuntimeEffect::CancelBootTasks]
    );
    assert_eq!(harness.state.session, normal(Theme::Macos));
    assert_eq!(harness.state.boot, None);
}

#[test]
fn retro_boot_waits_for_the_password() {
    let mut harness = Harness::new();
    assert_eq!(
        harness.send(DesktopAction::SelectTheme {
            theme: Theme::Retro,
        }),
        vec![RuntimeEffect::StartBootTicker { interval_ms: 200 }]
    );
    let (_, effects) = harness.tick_until_stopped();
    assert_eq!(
        effects,
        vec![RuntimeEffect::StopBootTicker, RuntimeEffect::FocusLockInput]
    );

    assert!(harness
        .send(DesktopAction::SubmitLockCommand {
            command: "letmein".to_string(),
        })
        .is_empty());
    assert_eq!(
        harness.send(DesktopAction::SubmitLockCommand {
            command: format!("  {LOCK_PASSWORD} "),
        }),
        vec![RuntimeEffect::CompleteBootAfter { delay_ms: 1500 }]
    );
    harness.send(DesktopAction::BootComplete);
    assert_eq!(harness.state.session, normal(Theme::Retro));
}

#[test]
fn every_theme_reaches_a_normal_desktop() {
    for theme in Theme::ALL {
        let harness = Harness::boot(theme);
        assert_eq!(harness.state.session, normal(theme), "{theme}");
        assert!(harness.state.windows.is_empty());
    }
}

#[test]
fn first_window_is_centered_above_the_dock_and_active() {
    let mut harness = Harness::boot(Theme::Macos);
    let effects = harness.open(ApplicationId::About);

    assert_eq!(
        effects,
        vec![RuntimeEffect::FocusWindowInput(ApplicationId::About)]
    );
    let window = harness.state.windows.get(ApplicationId::About).expect("open");
    assert!(window.size.width <= 1160 && window.size.height <= 680);
    assert_eq!(window.position, Point::new(250, 103));
    assert_eq!(window.z_index, 10);
    assert_eq!(harness.state.active_window_id(), Some(ApplicationId::About));
}

#[test]
fn reopening_brings_the_window_forward_without_duplicating_it() {
    let mut harness = Harness::boot(Theme::Macos);
    harness.open(ApplicationId::About);
    harness.open(ApplicationId::Projects);
    let about_position = harness.state.windows.get(ApplicationId::About).map(|w| w.position);
    harness.open(ApplicationId::About);

    assert_eq!(harness.state.windows.len(), 2);
    assert!(harness.z(ApplicationId::About) > harness.z(ApplicationId::Projects));
    assert_eq!(
        harness.state.windows.get(ApplicationId::About).map(|w| w.position),
        about_position
    );
    assert_eq!(harness.state.active_window_id(), Some(ApplicationId::About));
}

#[test]
fn z_order_stays_unique_across_focus_changes() {
    let mut harness = Harness::boot(Theme::Linux);
    for app_id in [
        ApplicationId::About,
        ApplicationId::Projects,
        ApplicationId::Contact,
    ] {
        harness.open(app_id);
    }
    harness.send(DesktopAction::FocusWindow {
        app_id: ApplicationId::About,
    });
    harness.send(DesktopAction::FocusWindow {
        app_id: ApplicationId::Projects,
    });

    let mut z_values: Vec<u32> = harness
        .state
        .windows
        .windows()
        .iter()
        .map(|window| window.z_index)
        .collect();
    z_values.sort_unstable();
    z_values.dedup();
    assert_eq!(z_values.len(), 3);
    assert_eq!(
        harness.state.windows.topmost().map(|window| window.id),
        Some(ApplicationId::Projects)
    );
}

#[test]
fn minimize_round_trip_restores_the_same_geometry() {
    let mut harness = Harness::boot(Theme::Macos);
    harness.open(ApplicationId::Contact);
    let before = harness.state.windows.get(ApplicationId::Contact).cloned();

    harness.send(DesktopAction::ToggleMinimize {
        app_id: ApplicationId::Contact,
    });
    assert!(harness.state.windows.render_order().is_empty());

    harness.open(ApplicationId::Contact);
    let after = harness.state.windows.get(ApplicationId::Contact).cloned();
    assert_eq!(
        after.as_ref().map(|w| (w.position, w.size, w.minimized)),
        before.as_ref().map(|w| (w.position, w.size, w.minimized))
    );
}

#[test]
fn maximize_fills_the_area_and_restore_keeps_the_stored_rect() {
    let mut harness = Harness::boot(Theme::Macos);
    harness.open(ApplicationId::Projects);
    let stored = harness
        .state
        .windows
        .get(ApplicationId::Projects)
        .map(|window| window.stored_rect());

    harness.send(DesktopAction::ToggleMaximize {
        app_id: ApplicationId::Projects,
    });
    let viewport = harness.state.shell.viewport;
    assert_eq!(
        harness
            .state
            .windows
            .effective_rect(ApplicationId::Projects, viewport, false),
        Some(WindowRect {
            x: 0,
            y: 0,
            w: 1200,
            h: 800,
        })
    );

    harness.send(DesktopAction::ToggleMaximize {
        app_id: ApplicationId::Projects,
    });
    assert_eq!(
        harness
            .state
            .windows
            .effective_rect(ApplicationId::Projects, viewport, false),
        stored
    );
}

#[test]
fn closing_the_active_window_leaves_nothing_focused() {
    let mut harness = Harness::boot(Theme::Retro);
    harness.open(ApplicationId::About);
    harness.open(ApplicationId::Terminal);
    harness.send(DesktopAction::CloseWindow {
        app_id: ApplicationId::Terminal,
    });

    assert_eq!(harness.state.active_window_id(), None);
    assert!(harness.state.windows.contains(ApplicationId::About));
    assert!(harness
        .send(DesktopAction::CloseWindow {
            app_id: ApplicationId::Terminal,
        })
        .is_empty());
}

#[test]
fn dragging_a_window_commits_a_clamped_position() {
    let mut harness = Harness::boot(Theme::Macos);
    harness.open(ApplicationId::About);
    harness.send(DesktopAction::BeginMove {
        app_id: ApplicationId::About,
        pointer: Point::new(300, 140),
        desktop_origin: Point::new(0, 30),
    });
    harness.send(DesktopAction::UpdateMove {
        pointer: Point::new(2_000, 2_000),
    });
    harness.send(DesktopAction::EndMove {
        pointer: Point::new(2_000, 2_000),
    });

    let window = harness.state.windows.get(ApplicationId::About).expect("open");
    assert_eq!(window.size, Size::new(700, 450));
    assert_eq!(window.position, Point::new(500, 350));
    assert_eq!(harness.interaction.dragging, None);
}

#[test]
fn sleep_blocks_window_input_until_woken() {
    let mut harness = Harness::boot(Theme::Macos);
    harness.open(ApplicationId::About);
    harness.send(DesktopAction::ToggleMenu {
        menu: desktop_runtime::TopMenu::File,
    });
    harness.send(DesktopAction::RequestSleep);

    assert_eq!(harness.state.shell.active_menu, None);
    assert!(matches!(
        harness.try_send(DesktopAction::CloseWindow {
            app_id: ApplicationId::About,
        }),
        Err(ReducerError::DesktopNotInteractive(_))
    ));

    harness.send(DesktopAction::Interact);
    assert_eq!(harness.state.session, normal(Theme::Macos));
    assert!(harness.state.windows.contains(ApplicationId::About));
}

#[test]
fn power_on_after_shutdown_remembers_it() {
    let mut harness = Harness::boot(Theme::Retro);
    harness.send(DesktopAction::RequestShutdown);
    assert_eq!(
        harness.state.session.desktop_mode(),
        Some(DesktopMode::PoweredOff)
    );

    harness.send(DesktopAction::Interact);
    assert_eq!(
        harness.state.session,
        SessionState::Desktop {
            theme: Theme::Retro,
            mode: DesktopMode::Normal,
            has_powered_off: true,
        }
    );
}

#[test]
fn logging_out_returns_to_selection_with_an_empty_registry() {
    let mut harness = Harness::boot(Theme::Linux);
    harness.open(ApplicationId::About);
    harness.open(ApplicationId::Settings);
    harness.send(DesktopAction::ToggleLauncher);

    assert_eq!(
        harness.send(DesktopAction::LogOut),
        vec![RuntimeEffect::CancelAllTasks]
    );
    assert_eq!(harness.state.session, SessionState::Selection);
    assert!(harness.state.windows.is_empty());
    assert!(!harness.state.shell.launcher.open);
    assert_eq!(harness.state.shell.viewport, DesktopViewport::new(1200, 800));
}

#[test]
fn stale_boot_completion_is_rejected_after_log_out() {
    let mut harness = Harness::boot(Theme::Macos);
    harness.send(DesktopAction::LogOut);

    assert!(matches!(
        harness.try_send(DesktopAction::BootComplete),
        Err(ReducerError::Session(SessionError::InvalidTransition { .. }))
    ));
    assert_eq!(harness.state.session, SessionState::Selection);
}

#[test]
fn app_requests_route_through_the_reducer() {
    let mut harness = Harness::boot(Theme::Macos);
    harness.send(DesktopAction::HandleAppRequest {
        request: AppRequest::Open {
            app_id: ApplicationId::Settings,
            variant: WindowVariant::Default,
        },
    });
    harness.send(DesktopAction::HandleAppRequest {
        request: AppRequest::SetTheme {
            theme: Theme::Linux,
        },
    });

    assert!(harness.state.windows.contains(ApplicationId::Settings));
    assert_eq!(harness.state.theme(), Some(Theme::Linux));
}
