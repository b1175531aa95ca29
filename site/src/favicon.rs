//! browser tab icon side effect.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlLinkElement};

use shared::AssetConfig;

/// applies the configured tab icon once at mount. a no-op when no browser
/// document exists (non-web host) or when neither asset url is configured.
pub fn apply(assets: &AssetConfig) {
    let Some(href) = assets.favicon_href() else {
        return;
    };
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        ensure_icon_link(&document, href);
    }
}

/// post-condition: exactly one `link[rel='icon']` element exists in the
/// document head and its href is `href`. safe to call repeatedly; a second
/// call updates the existing element instead of appending another.
pub fn ensure_icon_link(document: &Document, href: &str) {
    let existing = document
        .query_selector("link[rel='icon']")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlLinkElement>().ok());

    let link = match existing {
        Some(link) => Some(link),
        None => {
            let created = document
                .create_element("link")
                .ok()
                .and_then(|el| el.dyn_into::<HtmlLinkElement>().ok());
            if let (Some(head), Some(link)) = (document.head(), created.as_ref()) {
                let _ = head.append_child(link);
            }
            created
        }
    };

    if let Some(link) = link {
        link.set_rel("icon");
        link.set_href(href);
    }
}
