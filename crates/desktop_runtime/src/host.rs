//! Host-side runtime helpers for executing reducer effects and querying browser layout.
//!
//! Every timer the runtime schedules lives in a [`TaskScope`] owned by the host context, so a log
//! out or a replaced toast cancels stale callbacks before they can fire.

mod host_ui;

use std::{cell::RefCell, rc::Rc, time::Duration};

use desktop_app_contract::ApplicationId;
use leptos::{logging, set_interval_with_handle, set_timeout_with_handle, Callable, Callback};

use crate::{
    model::{DesktopViewport, Point},
    reducer::{DesktopAction, RuntimeEffect},
    runtime_context::DesktopRuntimeContext,
    timers::{TaskScope, TaskSlot},
};

/// DOM id of the element that bounds the window layer.
pub const DESKTOP_AREA_ID: &str = "desktop-area";
pub const LAUNCHER_INPUT_ID: &str = "launcher-search-input";
pub const LOCK_INPUT_ID: &str = "boot-lock-input";

/// DOM id of the window element for `app_id`.
pub fn window_dom_id(app_id: ApplicationId) -> String {
    format!("window-{}", app_id.as_str())
}

/// Browser measurement of the desktop area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesktopMeasurement {
    pub viewport: DesktopViewport,
    /// Client-space origin of the desktop area.
    pub origin: Point,
    /// Full browser window width, used for the mobile breakpoint.
    pub window_width: i32,
}

#[derive(Clone, Default)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    tasks: Rc<RefCell<TaskScope>>,
}

impl DesktopHostContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::StartBootTicker { interval_ms } => {
                self.start_boot_ticker(runtime.dispatch, interval_ms);
            }
            RuntimeEffect::StopBootTicker => {
                self.tasks.borrow_mut().cancel(TaskSlot::BootTicker);
            }
            RuntimeEffect::CompleteBootAfter { delay_ms } => {
                self.schedule(
                    TaskSlot::BootCompletion,
                    runtime.dispatch,
                    DesktopAction::BootComplete,
                    delay_ms,
                );
            }
            RuntimeEffect::CancelBootTasks => {
                let mut tasks = self.tasks.borrow_mut();
                tasks.cancel(TaskSlot::BootTicker);
                tasks.cancel(TaskSlot::BootCompletion);
            }
            RuntimeEffect::CancelAllTasks => self.tasks.borrow_mut().cancel_all(),
            RuntimeEffect::ScheduleToastDismiss { toast_id, after_ms } => {
                self.schedule(
                    TaskSlot::ToastDismiss,
                    runtime.dispatch,
                    DesktopAction::DismissToast { toast_id },
                    after_ms,
                );
            }
            RuntimeEffect::FocusLauncherInput => {
                host_ui::focus_deferred(LAUNCHER_INPUT_ID.to_string());
            }
            RuntimeEffect::FocusLockInput => host_ui::focus_deferred(LOCK_INPUT_ID.to_string()),
            RuntimeEffect::FocusWindowInput(app_id) => host_ui::focus_window_input(app_id),
        }
    }

    /// Measures the desktop area; falls back to the browser window before it is mounted.
    pub fn measure_desktop(&self) -> DesktopMeasurement {
        host_ui::measure_desktop(DESKTOP_AREA_ID)
    }

    fn start_boot_ticker(&self, dispatch: Callback<DesktopAction>, interval_ms: u32) {
        match set_interval_with_handle(
            move || dispatch.call(DesktopAction::BootTick),
            Duration::from_millis(u64::from(interval_ms)),
        ) {
            Ok(handle) => self.tasks.borrow_mut().replace(TaskSlot::BootTicker, handle),
            Err(err) => logging::warn!("boot ticker could not be scheduled: {err:?}"),
        }
    }

    fn schedule(
        &self,
        slot: TaskSlot,
        dispatch: Callback<DesktopAction>,
        action: DesktopAction,
        delay_ms: u32,
    ) {
        match set_timeout_with_handle(
            move || dispatch.call(action),
            Duration::from_millis(u64::from(delay_ms)),
        ) {
            Ok(handle) => self.tasks.borrow_mut().replace(slot, handle),
            Err(err) => logging::warn!("{slot:?} timer could not be scheduled: {err:?}"),
        }
    }
}
