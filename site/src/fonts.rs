//! display font acquisition via the css font loading api.

use leptos::prelude::*;
use wasm_bindgen_futures::JsFuture;

use shared::Readiness;

/// the one face the screen uses; loaded before anything renders.
pub const DISPLAY_FONT: &str = "700 1em 'JetBrains Mono'";

/// kicks off the asynchronous font load and flips readiness to Ready once the
/// browser reports the face available. invoked once per mount. a load that
/// rejects or never settles leaves readiness at Loading, which keeps the
/// screen blank rather than flashing a fallback face.
pub fn load_display_font(set_readiness: WriteSignal<Readiness>) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let fonts = document.fonts();
    leptos::task::spawn_local(async move {
        let promise: js_sys::Promise = fonts.load(DISPLAY_FONT);
        if JsFuture::from(promise).await.is_ok() {
            mark_ready(set_readiness);
        }
    });
}

/// the single state transition: Loading -> Ready. no other transition exists.
fn mark_ready(set_readiness: WriteSignal<Readiness>) {
    set_readiness.set(Readiness::Ready);
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_successful_load_flips_readiness() {
        let (readiness, set_readiness) = signal(Readiness::Loading);
        assert_eq!(readiness.get_untracked(), Readiness::Loading);
        mark_ready(set_readiness);
        assert_eq!(readiness.get_untracked(), Readiness::Ready);
    }
}
