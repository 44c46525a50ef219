#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use desktop_app_contract::ApplicationId;
#[cfg(target_arch = "wasm32")]
use desktop_app_contract::window_primary_input_dom_id;

#[cfg(target_arch = "wasm32")]
use super::window_dom_id;
use super::DesktopMeasurement;
use crate::model::{DesktopViewport, Point, DEFAULT_DESKTOP_HEIGHT, DEFAULT_DESKTOP_WIDTH};

/// Focuses the element with `id` on the next task, after the render that creates it.
pub(super) fn focus_deferred(id: String) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let callback = Closure::once_into_js(move || {
            let Some(element) = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.get_element_by_id(&id))
            else {
                return;
            };
            if let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() {
                let _ = element.focus();
            }
        });
        let _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = id;
}

/// Moves focus into a raised window's primary text field on the next task.
///
/// Runs after the pointer's own default focus, and leaves focus alone when that already landed
/// inside the window (a click on an input or button of a background window).
pub(super) fn focus_window_input(app_id: ApplicationId) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let callback = Closure::once_into_js(move || {
            let Some(document) = web_sys::window().and_then(|window| window.document()) else {
                return;
            };
            let focus_inside = document
                .get_element_by_id(&window_dom_id(app_id))
                .zip(document.active_element())
                .is_some_and(|(frame, active)| {
                    let active: &web_sys::Node = &active;
                    frame.contains(Some(active))
                });
            if focus_inside {
                return;
            }
            let Some(input) = document.get_element_by_id(&window_primary_input_dom_id(app_id))
            else {
                return;
            };
            if let Ok(input) = input.dyn_into::<web_sys::HtmlElement>() {
                let _ = input.focus();
            }
        });
        let _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = app_id;
}

pub(super) fn measure_desktop(area_id: &str) -> DesktopMeasurement {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let window_width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(DEFAULT_DESKTOP_WIDTH);
            let window_height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(DEFAULT_DESKTOP_HEIGHT);

            let area = window
                .document()
                .and_then(|document| document.get_element_by_id(area_id))
                .map(|element| element.get_bounding_client_rect());

            return match area {
                Some(rect) => DesktopMeasurement {
                    viewport: DesktopViewport::new(
                        rect.width().round() as i32,
                        rect.height().round() as i32,
                    ),
                    origin: Point::new(rect.left().round() as i32, rect.top().round() as i32),
                    window_width,
                },
                None => DesktopMeasurement {
                    viewport: DesktopViewport::new(window_width, window_height),
                    origin: Point::default(),
                    window_width,
                },
            };
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = area_id;

    DesktopMeasurement {
        viewport: DesktopViewport::new(DEFAULT_DESKTOP_WIDTH, DEFAULT_DESKTOP_HEIGHT),
        origin: Point::default(),
        window_width: DEFAULT_DESKTOP_WIDTH,
    }
}
