use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Bearer token stored under `key` by the login flow. Blank values count as absent.
pub fn get_access_token(key: &str) -> Option<String> {
    get_local_storage()?
        .get_item(key)
        .ok()?
        .filter(|token| !token.trim().is_empty())
}
