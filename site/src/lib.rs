//! ==============================================================================
//! lib.rs - Storage Layer Security informational site
//! ==============================================================================
//!
//! purpose:
//!     leptos wasm single screen for the sls protocol: branded header with two
//!     external links, a divider, and the long scrollable protocol document.
//!     everything rendered is a pure function of the static content, the asset
//!     configuration, the viewport breakpoint, and the font readiness flag.
//!
//! architecture:
//!     - leptos csr (client-side rendering)
//!     - compiled to wasm, runs in browser
//!     - no backend; the document is embedded static data
//!     - asset urls baked in at build time (SLS_LOGO_URL / SLS_FAVICON_URL)
//!
//! ==============================================================================

use leptos::ev;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use wasm_bindgen::prelude::*;

use shared::{AssetConfig, Breakpoint, Readiness, BREAKPOINT_PX};

mod components;
mod content;
mod favicon;
mod fonts;

use components::{DocumentBody, Header};

// ==============================================================================
// main entry point
// ==============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(|| view! { <App assets=AssetConfig::from_build_env() /> });
}

// ==============================================================================
// app component
// ==============================================================================

#[component]
fn App(assets: AssetConfig) -> impl IntoView {
    provide_meta_context();

    // viewport width, observed continuously; the breakpoint derives from it
    let (width, set_width) = signal(viewport_width());
    let breakpoint = Memo::new(move |_| Breakpoint::from_width(width.get()));

    let resize = window_event_listener(ev::resize, move |_| {
        set_width.set(viewport_width());
    });
    on_cleanup(move || resize.remove());

    // one-shot side effects at mount
    favicon::apply(&assets);

    let (readiness, set_readiness) = signal(Readiness::Loading);
    fonts::load_display_font(set_readiness);

    // blank until the display font resolves; no fallback face, no flash
    view! {
        <Title text="Storage Layer Security" />
        <Show when=move || readiness.get() == Readiness::Ready>
            <Header assets=assets breakpoint=breakpoint />
            <div class="divider"></div>
            <DocumentBody assets=assets breakpoint=breakpoint />
        </Show>
    }
}

/// current window width in css pixels. outside a browser (or if the host
/// reports nothing usable) the default-layout width applies.
fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(BREAKPOINT_PX)
}
