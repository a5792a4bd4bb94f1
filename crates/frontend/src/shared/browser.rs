//! Small wrappers over browser APIs used by the screens.

use wasm_bindgen::JsCast;
use web_sys::{Event, File, HtmlInputElement, Url};

/// Native confirmation dialog. Anything but an explicit "OK" is a no.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn viewport_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

/// First file chosen in the `<input type="file">` that fired `ev`.
pub fn selected_file(ev: &Event) -> Option<File> {
    let input = ev.target()?.dyn_into::<HtmlInputElement>().ok()?;
    input.files()?.get(0)
}

/// Object URL for previewing a local file; release it with [`revoke_preview`].
pub fn preview_url(file: &File) -> Option<String> {
    Url::create_object_url_with_blob(file).ok()
}

pub fn revoke_preview(url: &str) {
    if url.starts_with("blob:") {
        let _ = Url::revoke_object_url(url);
    }
}
