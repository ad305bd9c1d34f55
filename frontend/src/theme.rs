//! Browser glue for the theme preference: localStorage on one side, the
//! `data-theme` attribute on the document element on the other.

use portfolio_shared::theme::Theme;
use web_sys::window;

const STORAGE_KEY: &str = "theme";
const THEME_ATTRIBUTE: &str = "data-theme";

/// Apply the stored preference (dark when absent) to the document element.
/// Called once at startup; does not write the preference back.
pub fn init_theme() {
    set_document_theme(preferred_theme());
}

/// The preference currently held in storage, dark when absent or unreadable.
pub fn preferred_theme() -> Theme {
    let stored = window()
        .and_then(|win| win.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());
    Theme::from_preference(stored.as_deref())
}

/// The theme currently applied to the document, read back from the
/// `data-theme` attribute.
pub fn current_theme() -> Theme {
    let attr = window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.document_element())
        .and_then(|el| el.get_attribute(THEME_ATTRIBUTE));
    Theme::from_preference(attr.as_deref())
}

/// Flip the applied theme, updating the document attribute and the stored
/// preference together so the two never diverge. Returns the new theme.
pub fn toggle_theme() -> Theme {
    let next = current_theme().toggled();
    set_document_theme(next);
    persist_preference(next);
    next
}

fn set_document_theme(theme: Theme) {
    if let Some(root) = window().and_then(|win| win.document()).and_then(|doc| doc.document_element())
    {
        let _ = root.set_attribute(THEME_ATTRIBUTE, theme.as_str());
    }
}

fn persist_preference(theme: Theme) {
    // A missing or locked-down storage area is a silent no-op.
    if let Some(storage) = window().and_then(|win| win.local_storage().ok().flatten()) {
        let _ = storage.set_item(STORAGE_KEY, theme.as_str());
    }
}
