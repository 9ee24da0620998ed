use serde::Deserialize;

/// Installs a window-level key listener and forwards the relevant presses.
///
/// Ctrl/Cmd+K is swallowed here so the browser does not claim it.
pub const KEY_LISTENER_JS: &str = r#"
window.addEventListener('keydown', (e) => {
    const mod = e.ctrlKey || e.metaKey;
    if (e.key === 'Escape' || (mod && e.key.toLowerCase() === 'k')) {
        if (mod) e.preventDefault();
        dioxus.send({ key: e.key, ctrl: e.ctrlKey, meta: e.metaKey });
    }
});
"#;

pub const SCROLL_TOP_JS: &str = "window.scrollTo({ top: 0, behavior: 'smooth' }); return true;";

/// A key press as reported by the listener.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct KeyPress {
    pub key: String,
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub meta: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    CloseModal,
    FocusSearch,
}

impl Shortcut {
    pub fn from_press(press: &KeyPress) -> Option<Self> {
        if press.key == "Escape" {
            return Some(Shortcut::CloseModal);
        }
        if (press.ctrl || press.meta) && press.key.eq_ignore_ascii_case("k") {
            return Some(Shortcut::FocusSearch);
        }
        None
    }
}
