//! Token persistence and the hop into the webmail app.

use web_sys::window;

/// Local-storage key the webmail app reads the token from.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Persist the session token. Storage can be unavailable (private
/// browsing); login still proceeds to the mail app in that case.
pub fn store_token(token: &str) {
    if let Ok(Some(storage)) = window().unwrap().local_storage() {
        let _ = storage.set_item(TOKEN_STORAGE_KEY, token);
    }
}

/// Leave this client for the webmail app.
pub fn redirect_to_mail() {
    let _ = window().unwrap().location().set_href("/mail");
}
