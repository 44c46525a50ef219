//! Session lifecycle: theme selection, boot, and the desktop power modes.

use std::fmt;

use desktop_app_contract::Theme;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DesktopMode {
    Normal,
    Asleep,
    PoweredOff,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SessionState {
    #[default]
    Selection,
    Booting {
        theme: Theme,
    },
    Desktop {
        theme: Theme,
        mode: DesktopMode,
        /// Set once the desktop has come back from standby; drives the power-on animation.
        has_powered_off: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    ThemeChosen(Theme),
    BootComplete,
    SleepRequested,
    ShutdownRequested,
    /// Any click or key press on the desktop surface.
    Interaction,
    LogOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionSideEffect {
    StoreTheme(Theme),
    SuspendInput,
    ResumeInput,
    MarkPoweredOff,
    /// Destroy every window and forget the theme.
    ClearSession,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTransition {
    pub next: SessionState,
    pub effect: Option<SessionSideEffect>,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error("session event {event:?} is not valid in state {from}")]
    InvalidTransition {
        from: SessionState,
        event: SessionEvent,
    },
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Selection => f.write_str("selection"),
            Self::Booting { theme } => write!(f, "booting({theme})"),
            Self::Desktop { theme, mode, .. } => {
                let mode = match mode {
                    DesktopMode::Normal => "normal",
                    DesktopMode::Asleep => "asleep",
                    DesktopMode::PoweredOff => "powered_off",
                };
                write!(f, "desktop({theme}, {mode})")
            }
        }
    }
}

impl SessionState {
    pub fn theme(&self) -> Option<Theme> {
        match self {
            Self::Selection => None,
            Self::Booting { theme } | Self::Desktop { theme, .. } => Some(*theme),
        }
    }

    pub fn desktop_mode(&self) -> Option<DesktopMode> {
        match self {
            Self::Desktop { mode, .. } => Some(*mode),
            _ => None,
        }
    }

    /// Whether the window registry accepts user input.
    pub fn is_interactive(&self) -> bool {
        self.desktop_mode() == Some(DesktopMode::Normal)
    }

    pub fn has_powered_off(&self) -> bool {
        matches!(
            self,
            Self::Desktop {
                has_powered_off: true,
                ..
            }
        )
    }

    /// Computes the state that follows `event`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidTransition`] for any event the current state does not accept.
    pub fn transition(&self, event: SessionEvent) -> Result<SessionTransition, SessionError> {
        use DesktopMode::{Asleep, Normal, PoweredOff};

        let invalid = || SessionError::InvalidTransition { from: *self, event };

        let (next, effect) = match (*self, event) {
            (Self::Selection, SessionEvent::ThemeChosen(theme)) => (
                Self::Booting { theme },
                Some(SessionSideEffect::StoreTheme(theme)),
            ),
            (Self::Booting { theme }, SessionEvent::BootComplete) => (
                Self::Desktop {
                    theme,
                    mode: Normal,
                    has_powered_off: false,
                },
                None,
            ),
            (Self::Desktop { .. }, SessionEvent::LogOut) => {
                (Self::Selection, Some(SessionSideEffect::ClearSession))
            }
            (
                Self::Desktop {
                    theme,
                    mode,
                    has_powered_off,
                },
                event,
            ) => match (mode, event) {
                (Normal, SessionEvent::SleepRequested) => (
                    Self::Desktop {
                        theme,
                        mode: Asleep,
                        has_powered_off,
                    },
                    Some(SessionSideEffect::SuspendInput),
                ),
                (Asleep, SessionEvent::Interaction) => (
                    Self::Desktop {
                        theme,
                        mode: Normal,
                        has_powered_off,
                    },
                    Some(SessionSideEffect::ResumeInput),
                ),
                (Normal, SessionEvent::ShutdownRequested) => (
                    Self::Desktop {
                        theme,
                        mode: PoweredOff,
                        has_powered_off,
                    },
                    None,
                ),
                (PoweredOff, SessionEvent::Interaction) => (
                    Self::Desktop {
                        theme,
                        mode: Normal,
                        has_powered_off: true,
                    },
                    Some(SessionSideEffect::MarkPoweredOff),
                ),
                (Normal, SessionEvent::Interaction) => (*self, None),
                _ => return Err(invalid()),
            },
            _ => return Err(invalid()),
        };

        Ok(SessionTransition { next, effect })
    }

    /// Swaps the live theme while keeping the rest of the state.
    pub fn with_theme(self, theme: Theme) -> Self {
        match self {
            Self::Selection => Self::Selection,
            Self::Booting { .. } => Self::Booting { theme },
            Self::Desktop {
                mode,
                has_powered_off,
                ..
            } => Self::Desktop {
                theme,
                mode,
                has_powered_off,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn desktop(mode: DesktopMode, has_powered_off: bool) -> SessionState {
        SessionState::Desktop {
            theme: Theme::Macos,
            mode,
            has_powered_off,
        }
    }

    fn step(state: SessionState, event: SessionEvent) -> SessionTransition {
        state.transition(event).expect("valid transition")
    }

    #[test]
    fn selection_boot_desktop_path() {
        let booting = step(SessionState::Selection, SessionEvent::ThemeChosen(Theme::Macos));
        assert_eq!(booting.next, SessionState::Booting { theme: Theme::Macos });
        assert_eq!(
            booting.effect,
            Some(SessionSideEffect::StoreTheme(Theme::Macos))
        );

        let ready = step(booting.next, SessionEvent::BootComplete);
        assert_eq!(ready.next, desktop(DesktopMode::Normal, false));
        assert!(ready.next.is_interactive());
    }

    #[test]
    fn sleep_and_wake() {
        let asleep = step(desktop(DesktopMode::Normal, false), SessionEvent::SleepRequested);
        assert_eq!(asleep.next, desktop(DesktopMode::Asleep, false));
        assert_eq!(asleep.effect, Some(SessionSideEffect::SuspendInput));
        assert!(!asleep.next.is_interactive());

        let awake = step(asleep.next, SessionEvent::Interaction);
        assert_eq!(awake.next, desktop(DesktopMode::Normal, false));
        assert_eq!(awake.effect, Some(SessionSideEffect::ResumeInput));
    }

    #[test]
    fn power_cycle_marks_has_powered_off() {
        let off = step(desktop(DesktopMode::Normal, false), SessionEvent::ShutdownRequested);
        assert_eq!(off.next, desktop(DesktopMode::PoweredOff, false));
        assert!(!off.next.has_powered_off());

        let on = step(off.next, SessionEvent::Interaction);
        assert_eq!(on.next, desktop(DesktopMode::Normal, true));
        assert_eq!(on.effect, Some(SessionSideEffect::MarkPoweredOff));

        // The marker survives later sleep cycles.
        let asleep = step(on.next, SessionEvent::SleepRequested);
        assert!(asleep.next.has_powered_off());
    }

    #[test]
    fn log_out_from_any_desktop_mode_returns_to_selection() {
        for mode in [DesktopMode::Normal, DesktopMode::Asleep, DesktopMode::PoweredOff] {
            let out = step(desktop(mode, true), SessionEvent::LogOut);
            assert_eq!(out.next, SessionState::Selection);
            assert_eq!(out.effect, Some(SessionSideEffect::ClearSession));
            assert_eq!(out.next.theme(), None);
        }
    }

    #[test]
    fn interaction_on_normal_desktop_changes_nothing() {
        let state = desktop(DesktopMode::Normal, false);
        let same = step(state, SessionEvent::Interaction);
        assert_eq!(same.next, state);
        assert_eq!(same.effect, None);
    }

    #[test]
    fn invalid_events_are_rejected() {
        let cases = [
            (SessionState::Selection, SessionEvent::BootComplete),
            (SessionState::Selection, SessionEvent::LogOut),
            (SessionState::Booting { theme: Theme::Linux }, SessionEvent::LogOut),
            (
                SessionState::Booting { theme: Theme::Linux },
                SessionEvent::ThemeChosen(Theme::Retro),
            ),
            (desktop(DesktopMode::Normal, false), SessionEvent::BootComplete),
            (desktop(DesktopMode::Asleep, false), SessionEvent::SleepRequested),
            (desktop(DesktopMode::Asleep, false), SessionEvent::ShutdownRequested),
            (desktop(DesktopMode::PoweredOff, false), SessionEvent::SleepRequested),
        ];

        for (state, event) in cases {
            assert_eq!(
                state.transition(event),
                Err(SessionError::InvalidTransition { from: state, event }),
                "{state} should reject {event:?}"
            );
        }
    }

    #[test]
    fn with_theme_keeps_mode_and_marker() {
        let state = desktop(DesktopMode::Asleep, true).with_theme(Theme::Retro);
        assert_eq!(
            state,
            SessionState::Desktop {
                theme: Theme::Retro,
                mode: DesktopMode::Asleep,
                has_powered_off: true,
            }
        );
        assert_eq!(SessionState::Selection.with_theme(Theme::Linux), SessionState::Selection);
    }
}
