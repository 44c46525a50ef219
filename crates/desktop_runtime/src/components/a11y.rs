//! Keyboard focus helpers for the top-bar dropdown menus.

use wasm_bindgen::JsCast;

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|window| window.document())
}

fn menu_items(menu_id: &str) -> Vec<web_sys::HtmlElement> {
    let Some(menu) = document().and_then(|document| document.get_element_by_id(menu_id)) else {
        return Vec::new();
    };
    let Ok(nodes) = menu.query_selector_all(r#"[role="menuitem"]"#) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .filter(|item| item.get_attribute("aria-disabled").as_deref() != Some("true"))
        .collect()
}

fn focused_index(items: &[web_sys::HtmlElement]) -> Option<usize> {
    let active = document()?.active_element()?;
    items.iter().position(|item| {
        let item: &web_sys::Element = item.as_ref();
        item == &active
    })
}

/// Index reached by moving `delta` steps from `current`, wrapping at both ends.
fn wrapped_index(current: Option<usize>, delta: i32, len: usize) -> usize {
    match current {
        None if delta < 0 => len - 1,
        None => 0,
        Some(index) => (index as i32 + delta).rem_euclid(len as i32) as usize,
    }
}

/// Focuses the first item of an open menu.
pub(super) fn focus_first_menu_item(menu_id: &str) -> bool {
    match menu_items(menu_id).first() {
        Some(item) => item.focus().is_ok(),
        None => false,
    }
}

/// Arrow/Home/End navigation inside an open menu. Returns whether the key was consumed.
pub(super) fn handle_menu_roving_keydown(ev: &web_sys::KeyboardEvent, menu_id: &str) -> bool {
    let items = menu_items(menu_id);
    if items.is_empty() {
        return false;
    }

    let target = match ev.key().as_str() {
        "ArrowDown" => wrapped_index(focused_index(&items), 1, items.len()),
        "ArrowUp" => wrapped_index(focused_index(&items), -1, items.len()),
        "Home" => 0,
        "End" => items.len() - 1,
        _ => return false,
    };

    ev.prevent_default();
    ev.stop_propagation();
    let _ = items[target].focus();
    true
}
