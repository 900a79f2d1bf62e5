use contracts::system::auth::Session;
use web_sys::window;

const SESSION_KEY: &str = "wms_session";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Session written by the sign-in portal, if any
pub fn load_session() -> Option<Session> {
    let raw = get_local_storage()?.get_item(SESSION_KEY).ok()??;
    decode_session(&raw)
}

pub fn save_session(session: &Session) {
    if let (Some(storage), Ok(raw)) = (get_local_storage(), serde_json::to_string(session)) {
        let _ = storage.set_item(SESSION_KEY, &raw);
    }
}

pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}

/// Unreadable or incomplete sessions are treated as signed out.
pub fn decode_session(raw: &str) -> Option<Session> {
    match serde_json::from_str::<Session>(raw) {
        Ok(session) if !session.access_token.is_empty() => Some(session),
        Ok(_) => None,
        Err(e) => {
            log::warn!("discarding stored session: {}", e);
            None
        }
    }
}
