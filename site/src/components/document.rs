//! Document body: the scrollable sls document rendered from static blocks.

use leptos::prelude::*;

use shared::{
    AssetConfig, Breakpoint, ContentBlock, HeadingLevel, BLOCK_GAP_PX, FONT_FAMILY,
    PARAGRAPH_LINE_PX, PARAGRAPH_PX, TEXT,
};

use crate::content;

#[component]
pub fn DocumentBody(assets: AssetConfig, breakpoint: Memo<Breakpoint>) -> impl IntoView {
    view! {
        <main class="content" style=content_style()>
            {assets.logo_url.map(|url| view! {
                <div style="width:100%;display:flex;justify-content:center;margin-bottom:12px;">
                    <img
                        src=url
                        alt="SLS logo"
                        style=move || hero_logo_style(breakpoint.get())
                    />
                </div>
            })}
            {content::DOCUMENT
                .iter()
                .map(|block| view! { <Block block=*block breakpoint=breakpoint /> })
                .collect_view()}
        </main>
    }
}

#[component]
fn Block(block: ContentBlock, breakpoint: Memo<Breakpoint>) -> impl IntoView {
    match block {
        ContentBlock::Heading { level, text } => {
            let style = move || heading_style(level, breakpoint.get());
            match level {
                HeadingLevel::H1 => view! { <h1 style=style>{text}</h1> }.into_any(),
                HeadingLevel::H2 => view! { <h2 style=style>{text}</h2> }.into_any(),
                HeadingLevel::H3 => view! { <h3 style=style>{text}</h3> }.into_any(),
                HeadingLevel::H4 => view! { <h4 style=style>{text}</h4> }.into_any(),
            }
        }
        ContentBlock::Paragraph { text } => {
            view! { <p style=paragraph_style()>{text}</p> }.into_any()
        }
    }
}

// ==============================================================================
// inline style builders
// ==============================================================================

fn content_style() -> String {
    format!("display:flex;flex-direction:column;gap:{BLOCK_GAP_PX}px;padding:24px 20px;")
}

fn hero_logo_style(breakpoint: Breakpoint) -> String {
    let (w, h) = breakpoint.hero_logo_px();
    format!("width:{w}px;height:{h}px;object-fit:contain;")
}

pub(crate) fn heading_style(level: HeadingLevel, breakpoint: Breakpoint) -> String {
    let (top, bottom) = level.margin_px();
    format!(
        "margin:{top}px 0 {bottom}px;font-family:{FONT_FAMILY};font-weight:700;\
         color:{TEXT};font-size:{}px;",
        level.font_px(breakpoint)
    )
}

pub(crate) fn paragraph_style() -> String {
    format!(
        "margin:0;font-family:{FONT_FAMILY};font-weight:700;color:{TEXT};\
         font-size:{PARAGRAPH_PX}px;line-height:{PARAGRAPH_LINE_PX}px;"
    )
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_style_tracks_breakpoint() {
        assert!(heading_style(HeadingLevel::H1, Breakpoint::Default).contains("font-size:28px"));
        assert!(heading_style(HeadingLevel::H1, Breakpoint::Small).contains("font-size:24px"));
        assert!(heading_style(HeadingLevel::H4, Breakpoint::Small).contains("font-size:15px"));
    }

    #[test]
    fn test_heading_margins() {
        assert!(heading_style(HeadingLevel::H1, Breakpoint::Default).contains("margin:0px 0 8px"));
        assert!(heading_style(HeadingLevel::H2, Breakpoint::Default).contains("margin:16px 0 0px"));
    }

    #[test]
    fn test_paragraph_style_breakpoint_invariant() {
        let style = paragraph_style();
        assert!(style.contains("font-size:14px"));
        assert!(style.contains("line-height:22px"));
    }
}
