use super::theme_state::ThemeMode;

/// Adds or removes `marker_class` on `document.documentElement`.
pub fn apply_root_marker(marker_class: &str, is_dark: bool) {
    let mode = ThemeMode::from_is_dark(is_dark);

    #[cfg(target_arch = "wasm32")]
    {
        let root = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element());

        let Some(root) = root else {
            log::warn!("No document root available, skipping {} theme marker", mode.label());
            return;
        };

        if let Err(err) = root.class_list().toggle_with_force(marker_class, is_dark) {
            log::error!("Failed to update root theme marker: {}", describe_js_error(err));
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    log::debug!("Root theme marker '{}' {} ({} mode)", marker_class, if is_dark { "set" } else { "cleared" }, mode.label());
}

#[cfg(target_arch = "wasm32")]
fn describe_js_error(err: wasm_bindgen::JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
