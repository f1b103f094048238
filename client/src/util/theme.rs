//! Apply a palette to the document as CSS custom properties.
//!
//! Requires a browser environment; SSR paths no-op and the stylesheet
//! defaults stay in effect until hydration.

use content::theme::ThemeColors;

/// Set `--primary`, `--secondary`, ... on `<html>` from `theme`.
pub fn apply(theme: &ThemeColors) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast as _;

        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            return;
        };
        let style = root.style();
        for (name, value) in theme.css_variables() {
            if style.set_property(&name, &value).is_err() {
                log::warn!("could not set {name}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}
