//! Per-theme boot screens.
//!
//! A [`BootSequence`] is pure state advanced by ticks from a host interval. When a sequence
//! finishes it reports how long the host should wait before delivering `BootComplete`.

use crate::{config::BootTiming, theme::BootStyle};

pub const BOOT_LOG_LINES: [&str; 20] = [
    "[  OK  ] Started Network Manager.",
    "[  OK  ] Reached target Network.",
    "[  OK  ] Started D-Bus System Message Bus.",
    "[  OK  ] Started User Login Management.",
    "         Starting Network Name Resolution...",
    "[  OK  ] Started Network Name Resolution.",
    "[  OK  ] Reached target Host and Network Name Lookups.",
    "[  OK  ] Started WPA Supplicant.",
    "[  OK  ] Started Update UTMP about System Runlevel Changes.",
    "         Starting Graphics System...",
    "[  OK  ] Found device /dev/dri/card0.",
    "[  OK  ] Started Display Manager.",
    "         Mounting /home/guest...",
    "[  OK  ] Mounted /home/guest.",
    "[  OK  ] Reached target Graphical Interface.",
    "         Starting OpenBio OS v1.0.0...",
    "[  OK  ] Initialized Virtual File System.",
    "[  OK  ] Loaded Kernel Module: openbio_core.",
    "[  OK  ] Loaded Kernel Module: react_renderer.",
    "         Welcome to OpenBio Dev Hub.",
];

pub const BIOS_LINES: [&str; 13] = [
    "BIOS Date 01/15/24 14:23:55 Ver: 1.0.2",
    "CPU: BioHub-Core-X4 @ 4.20GHz",
    "Memory Test: 65536K OK",
    "Detecting Primary Master ... BIOHUB_DRIVE_01",
    "Detecting Primary Slave ... None",
    "Loading kernel modules...",
    "[OK] Mounted root filesystem.",
    "[OK] Started Network Manager.",
    "[OK] Started Secure Gateway.",
    " ",
    "Welcome to BioHub Dev Environment v1.0",
    "Login required to access the mainframe.",
    " ",
];

pub const LOCK_PROMPT: &str = "guest@biohub-gateway:~$";
pub const LOCK_PASSWORD: &str = "awesome";
pub const LOCK_GRANTED: &str = "Access Granted. Initializing GUI Environment...";
pub const LOCK_HINT: &str = "HINT: The password is 'awesome'.";

/// Result of advancing a boot sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootStep {
    /// Keep ticking.
    Continue,
    /// Stop the ticker; the session may complete after `delay_ms`.
    Finished { delay_ms: u32 },
    /// Stop the ticker and wait for user input.
    AwaitInput,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressBoot {
    ticks: u32,
    total_ticks: u32,
    settle_ms: u32,
}

impl ProgressBoot {
    fn new(timing: &BootTiming) -> Self {
        let tick = timing.progress_tick_ms.max(1);
        Self {
            ticks: 0,
            total_ticks: timing.progress_duration_ms.div_ceil(tick).max(1),
            settle_ms: timing.progress_settle_ms,
        }
    }

    /// Fill level in whole percent.
    pub fn percent(&self) -> u32 {
        (self.ticks.saturating_mul(100) / self.total_ticks).min(100)
    }

    fn tick(&mut self) -> BootStep {
        if self.ticks >= self.total_ticks {
            return BootStep::Finished {
                delay_ms: self.settle_ms,
            };
        }
        self.ticks += 1;
        if self.ticks >= self.total_ticks {
            BootStep::Finished {
                delay_ms: self.settle_ms,
            }
        } else {
            BootStep::Continue
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogBoot {
    lines: Vec<String>,
    settle_ms: u32,
}

impl LogBoot {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    fn tick(&mut self) -> BootStep {
        let index = self.lines.len();
        match BOOT_LOG_LINES.get(index) {
            Some(line) => {
                self.lines.push(format!("[{}] {line}", log_timestamp(index)));
                BootStep::Continue
            }
            None => BootStep::Finished {
                delay_ms: self.settle_ms,
            },
        }
    }
}

/// Seconds-since-boot column for a log line, right-aligned to seven characters.
///
/// Jitter is derived from the line index so screens are reproducible.
pub fn log_timestamp(index: usize) -> String {
    let jitter = ((index * 37 + 11) % 200) as f64 / 100.0;
    let seconds = jitter + index as f64 * 0.1;
    format!("{seconds:>7.4}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockBoot {
    history: Vec<String>,
    revealed: usize,
    unlocking: bool,
    unlock_delay_ms: u32,
}

/// Outcome of a command typed at the lock prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockOutcome {
    Rejected,
    Hint,
    Cleared,
    Unlocked { delay_ms: u32 },
    /// Input arrived before the prompt was shown or after unlocking.
    Ignored,
}

impl LockBoot {
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Whether the password prompt is visible.
    pub fn accepts_input(&self) -> bool {
        self.revealed >= BIOS_LINES.len() && !self.unlocking
    }

    pub fn is_unlocking(&self) -> bool {
        self.unlocking
    }

    fn tick(&mut self) -> BootStep {
        match BIOS_LINES.get(self.revealed) {
            Some(line) => {
                self.history.push((*line).to_string());
                self.revealed += 1;
                if self.revealed == BIOS_LINES.len() {
                    BootStep::AwaitInput
                } else {
                    BootStep::Continue
                }
            }
            None => BootStep::AwaitInput,
        }
    }

    pub fn submit(&mut self, raw: &str) -> LockOutcome {
        if !self.accepts_input() {
            return LockOutcome::Ignored;
        }

        let command = raw.trim();
        if command == "clear" {
            self.history.clear();
            return LockOutcome::Cleared;
        }

        self.history.push(format!("{LOCK_PROMPT} {command}"));
        match command {
            LOCK_PASSWORD => {
                self.history.push(LOCK_GRANTED.to_string());
                self.unlocking = true;
                LockOutcome::Unlocked {
                    delay_ms: self.unlock_delay_ms,
                }
            }
            "help" => {
                self.history.push(LOCK_HINT.to_string());
                LockOutcome::Hint
            }
            _ => {
                self.history
                    .push(format!("Access Denied: '{command}'. Type 'help' for hint."));
                LockOutcome::Rejected
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootSequence {
    Progress(ProgressBoot),
    Log(LogBoot),
    Lock(LockBoot),
}

impl BootSequence {
    pub fn new(style: BootStyle, timing: &BootTiming) -> Self {
        match style {
            BootStyle::ProgressBar => Self::Progress(ProgressBoot::new(timing)),
            BootStyle::LogScroll => Self::Log(LogBoot {
                lines: Vec::with_capacity(BOOT_LOG_LINES.len()),
                settle_ms: timing.log_settle_ms,
            }),
            BootStyle::TerminalLock => Self::Lock(LockBoot {
                history: Vec::new(),
                revealed: 0,
                unlocking: false,
                unlock_delay_ms: timing.unlock_delay_ms,
            }),
        }
    }

    pub fn style(&self) -> BootStyle {
        match self {
            Self::Progress(_) => BootStyle::ProgressBar,
            Self::Log(_) => BootStyle::LogScroll,
            Self::Lock(_) => BootStyle::TerminalLock,
        }
    }

    pub fn tick_interval_ms(&self, timing: &BootTiming) -> u32 {
        match self {
            Self::Progress(_) => timing.progress_tick_ms,
            Self::Log(_) => timing.log_line_ms,
            Self::Lock(_) => timing.lock_line_ms,
        }
    }

    pub fn tick(&mut self) -> BootStep {
        match self {
            Self::Progress(boot) => boot.tick(),
            Self::Log(boot) => boot.tick(),
            Self::Lock(boot) => boot.tick(),
        }
    }

    /// Whether a click on the boot screen jumps straight to the desktop.
    pub fn skippable(&self) -> bool {
        matches!(self, Self::Log(_))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn run_until_stopped(boot: &mut BootSequence, limit: usize) -> (usize, BootStep) {
        for tick in 1..=limit {
            let step = boot.tick();
            if step != BootStep::Continue {
                return (tick, step);
            }
        }
        panic!("boot did not stop within {limit} ticks");
    }

    #[test]
    fn progress_bar_fills_then_settles() {
        let timing = BootTiming::default();
        let mut boot = BootSequence::new(BootStyle::ProgressBar, &timing);

        let (ticks, step) = run_until_stopped(&mut boot, 200);
        // 2500 ms at 30 ms per tick.
        assert_eq!(ticks, 84);
        assert_eq!(step, BootStep::Finished { delay_ms: 500 });
        let BootSequence::Progress(progress) = &boot else {
            panic!("expected progress boot");
        };
        assert_eq!(progress.percent(), 100);
    }

    #[test]
    fn log_scroll_prints_every_line_before_finishing() {
        let timing = BootTiming::default();
        let mut boot = BootSequence::new(BootStyle::LogScroll, &timing);

        let (ticks, step) = run_until_stopped(&mut boot, 100);
        assert_eq!(ticks, BOOT_LOG_LINES.len() + 1);
        assert_eq!(step, BootStep::Finished { delay_ms: 800 });

        let BootSequence::Log(log) = &boot else {
            panic!("expected log boot");
        };
        assert_eq!(log.lines().len(), BOOT_LOG_LINES.len());
        assert!(log.lines()[0].ends_with("Started Network Manager."));
        assert!(boot.skippable());
    }

    #[test]
    fn log_timestamps_are_stable_and_padded() {
        assert_eq!(log_timestamp(3), log_timestamp(3));
        assert_eq!(log_timestamp(0).len(), 7);
        assert_eq!(log_timestamp(19).len(), 7);
    }

    fn unlocked_prompt() -> LockBoot {
        let mut boot = BootSequence::new(BootStyle::TerminalLock, &BootTiming::default());
        let (ticks, step) = run_until_stopped(&mut boot, 100);
        assert_eq!(ticks, BIOS_LINES.len());
        assert_eq!(step, BootStep::AwaitInput);
        match boot {
            BootSequence::Lock(lock) => lock,
            _ => panic!("expected lock boot"),
        }
    }

    #[test]
    fn lock_ignores_input_until_bios_finishes() {
        let BootSequence::Lock(mut lock) =
            BootSequence::new(BootStyle::TerminalLock, &BootTiming::default())
        else {
            panic!("expected lock boot");
        };
        assert_eq!(lock.submit(LOCK_PASSWORD), LockOutcome::Ignored);
        assert!(lock.history().is_empty());
    }

    #[test]
    fn lock_commands() {
        let mut lock = unlocked_prompt();
        assert!(lock.accepts_input());

        assert_eq!(lock.submit("help"), LockOutcome::Hint);
        assert_eq!(lock.history().last().map(String::as_str), Some(LOCK_HINT));

        assert_eq!(lock.submit("  root "), LockOutcome::Rejected);
        assert_eq!(
            lock.history().last().map(String::as_str),
            Some("Access Denied: 'root'. Type 'help' for hint.")
        );

        assert_eq!(lock.submit("clear"), LockOutcome::Cleared);
        assert!(lock.history().is_empty());

        assert_eq!(
            lock.submit("awesome"),
            LockOutcome::Unlocked { delay_ms: 1500 }
        );
        assert_eq!(
            lock.history(),
            &[
                format!("{LOCK_PROMPT} awesome"),
                LOCK_GRANTED.to_string()
            ]
        );
        assert!(lock.is_unlocking());
        assert_eq!(lock.submit("awesome"), LockOutcome::Ignored);
    }
}
