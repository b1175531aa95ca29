//! Header component: logo, brand label, and the two external links.

use leptos::prelude::*;

use shared::{
    AssetConfig, Breakpoint, HeaderLink, BACKGROUND, FONT_FAMILY, HEADER_LINKS, LINK_LABEL_PX,
    TEXT,
};

#[component]
pub fn Header(assets: AssetConfig, breakpoint: Memo<Breakpoint>) -> impl IntoView {
    view! {
        <header style=move || header_style(breakpoint.get())>
            <div style="display:flex;flex-direction:row;align-items:center;gap:12px;">
                {assets.logo_url.map(|url| view! {
                    <img
                        src=url
                        alt="SLS logo"
                        style=move || header_logo_style(breakpoint.get())
                    />
                })}
                <span style=move || brand_style(breakpoint.get())>
                    "Storage Layer Security"
                </span>
            </div>
            <nav style=move || links_row_style(breakpoint.get())>
                {HEADER_LINKS
                    .iter()
                    .map(|link| view! { <NavLink link=*link /> })
                    .collect_view()}
            </nav>
        </header>
    }
}

/// one pressable header link. activation asks the host to open the url in a
/// new context and discards the outcome; rapid presses may issue several
/// requests, none of which block or mutate component state.
#[component]
fn NavLink(link: HeaderLink) -> impl IntoView {
    let open = move |_| {
        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url_and_target(link.url, "_blank");
        }
    };
    view! {
        <button class="nav-link" style=nav_link_style() on:click=open>
            {link.label}
        </button>
    }
}

// ==============================================================================
// inline style builders
// ==============================================================================

/// row with links pushed right by default; stacked and left-aligned when small.
pub(crate) fn header_style(breakpoint: Breakpoint) -> String {
    if breakpoint.is_small() {
        "display:flex;flex-direction:column;align-items:flex-start;gap:8px;\
         padding:14px 20px;"
            .to_string()
    } else {
        "display:flex;flex-direction:row;align-items:center;\
         justify-content:space-between;padding:14px 20px;"
            .to_string()
    }
}

pub(crate) fn brand_style(breakpoint: Breakpoint) -> String {
    format!(
        "font-family:{FONT_FAMILY};font-weight:700;color:{TEXT};font-size:{}px;",
        breakpoint.brand_px()
    )
}

fn header_logo_style(breakpoint: Breakpoint) -> String {
    let (w, h) = breakpoint.header_logo_px();
    format!("width:{w}px;height:{h}px;object-fit:contain;")
}

fn links_row_style(breakpoint: Breakpoint) -> String {
    let mut style = String::from("display:flex;flex-direction:row;gap:10px;flex-wrap:wrap;");
    if breakpoint.is_small() {
        style.push_str("align-self:stretch;");
    }
    style
}

fn nav_link_style() -> String {
    format!(
        "background:{TEXT};color:{BACKGROUND};padding:8px 12px;\
         font-family:{FONT_FAMILY};font-weight:700;font-size:{LINK_LABEL_PX}px;"
    )
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_layout_switches_at_breakpoint() {
        let default = header_style(Breakpoint::Default);
        assert!(default.contains("flex-direction:row"));
        assert!(default.contains("justify-content:space-between"));

        let small = header_style(Breakpoint::Small);
        assert!(small.contains("flex-direction:column"));
        assert!(small.contains("align-items:flex-start"));
    }

    #[test]
    fn test_brand_shrinks_when_small() {
        assert!(brand_style(Breakpoint::Default).contains("font-size:18px"));
        assert!(brand_style(Breakpoint::Small).contains("font-size:16px"));
    }

    #[test]
    fn test_header_logo_dimensions() {
        assert!(header_logo_style(Breakpoint::Default).contains("width:40px;height:40px"));
        assert!(header_logo_style(Breakpoint::Small).contains("width:32px;height:32px"));
    }

    #[test]
    fn test_links_row_stretches_when_small() {
        assert!(!links_row_style(Breakpoint::Default).contains("align-self:stretch"));
        assert!(links_row_style(Breakpoint::Small).contains("align-self:stretch"));
    }
}
