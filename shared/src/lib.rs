//! ==============================================================================
//! lib.rs - shared types for the storage layer security site
//! ==============================================================================
//!
//! purpose:
//!     defines the data model behind the sls informational screen: the document
//!     content blocks, the fixed header links, the responsive breakpoint and
//!     type scale, the build-time asset configuration, and the font readiness
//!     state machine.
//!
//! relationships:
//!     - used by: site (renders every type defined here)
//!     - used by: native tests (everything in this crate is dom-free)
//!
//! design rationale:
//!     the site's rendering is a pure function of the values in this crate plus
//!     the viewport width and the font-ready flag. keeping the model in a plain
//!     crate means the layout and configuration rules are testable off-browser,
//!     and the wasm crate holds only the dom plumbing.
//!
//! ==============================================================================

use serde::Serialize;

// ==============================================================================
// document content model
// ==============================================================================

/// heading depth within the document. h1 is the document title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
}

impl HeadingLevel {
    /// numeric depth, 1..=4.
    pub const fn depth(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
            HeadingLevel::H4 => 4,
        }
    }

    /// font size in px for this level at the given breakpoint.
    pub const fn font_px(self, breakpoint: Breakpoint) -> u32 {
        match (self, breakpoint) {
            (HeadingLevel::H1, Breakpoint::Default) => 28,
            (HeadingLevel::H1, Breakpoint::Small) => 24,
            (HeadingLevel::H2, Breakpoint::Default) => 22,
            (HeadingLevel::H2, Breakpoint::Small) => 20,
            (HeadingLevel::H3, Breakpoint::Default) => 18,
            (HeadingLevel::H3, Breakpoint::Small) => 16,
            (HeadingLevel::H4, Breakpoint::Default) => 16,
            (HeadingLevel::H4, Breakpoint::Small) => 15,
        }
    }

    /// vertical margin (top, bottom) in px. h1 carries space below the title,
    /// deeper levels carry space above their section.
    pub const fn margin_px(self) -> (u32, u32) {
        match self {
            HeadingLevel::H1 => (0, 8),
            HeadingLevel::H2 => (16, 0),
            HeadingLevel::H3 => (14, 0),
            HeadingLevel::H4 => (12, 0),
        }
    }
}

/// one unit of document content. the document is a flat ordered sequence of
/// these; order is render order and is significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ContentBlock {
    Heading {
        level: HeadingLevel,
        text: &'static str,
    },
    Paragraph {
        text: &'static str,
    },
}

impl ContentBlock {
    pub const fn h1(text: &'static str) -> Self {
        ContentBlock::Heading { level: HeadingLevel::H1, text }
    }

    pub const fn h2(text: &'static str) -> Self {
        ContentBlock::Heading { level: HeadingLevel::H2, text }
    }

    pub const fn h3(text: &'static str) -> Self {
        ContentBlock::Heading { level: HeadingLevel::H3, text }
    }

    pub const fn h4(text: &'static str) -> Self {
        ContentBlock::Heading { level: HeadingLevel::H4, text }
    }

    pub const fn p(text: &'static str) -> Self {
        ContentBlock::Paragraph { text }
    }

    /// raw text of the block, whatever its kind.
    pub const fn text(&self) -> &'static str {
        match *self {
            ContentBlock::Heading { text, .. } => text,
            ContentBlock::Paragraph { text } => text,
        }
    }
}

// ==============================================================================
// header links
// ==============================================================================

/// a pressable header control that opens a fixed external url.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeaderLink {
    pub label: &'static str,
    pub url: &'static str,
}

/// the two header links, in display order. activation is fire-and-forget: the
/// host opens the url externally and no outcome is surfaced.
pub const HEADER_LINKS: [HeaderLink; 2] = [
    HeaderLink {
        label: "Marketplace",
        url: "https://marketplace.slsprotocol.com",
    },
    HeaderLink {
        label: "Sign In",
        url: "https://dashboard.slsprotocol.com",
    },
];

// ==============================================================================
// breakpoint and type scale
// ==============================================================================

/// viewport width below which the small layout variant applies.
pub const BREAKPOINT_PX: f64 = 480.0;

/// layout variant derived from the current viewport width. a pure function of
/// width; recomputed on every resize notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Breakpoint {
    /// width < 480: vertical header, reduced heading sizes.
    Small,
    /// width >= 480: horizontal header, full heading sizes.
    Default,
}

impl Breakpoint {
    /// exactly 480 is Default; anything strictly below is Small.
    pub fn from_width(width: f64) -> Self {
        if width < BREAKPOINT_PX {
            Breakpoint::Small
        } else {
            Breakpoint::Default
        }
    }

    pub const fn is_small(self) -> bool {
        matches!(self, Breakpoint::Small)
    }

    /// brand label size in px.
    pub const fn brand_px(self) -> u32 {
        match self {
            Breakpoint::Default => 18,
            Breakpoint::Small => 16,
        }
    }

    /// header logo square dimensions (width, height) in px.
    pub const fn header_logo_px(self) -> (u32, u32) {
        match self {
            Breakpoint::Default => (40, 40),
            Breakpoint::Small => (32, 32),
        }
    }

    /// hero logo dimensions (width, height) in px.
    pub const fn hero_logo_px(self) -> (u32, u32) {
        match self {
            Breakpoint::Default => (320, 140),
            Breakpoint::Small => (220, 96),
        }
    }
}

/// paragraph text size in px; invariant across breakpoints.
pub const PARAGRAPH_PX: u32 = 14;

/// paragraph line height in px.
pub const PARAGRAPH_LINE_PX: u32 = 22;

/// header link label size in px.
pub const LINK_LABEL_PX: u32 = 14;

/// vertical gap between content blocks in px.
pub const BLOCK_GAP_PX: u32 = 12;

// ==============================================================================
// palette and display font
// ==============================================================================

pub const BACKGROUND: &str = "#fdfaf8";
pub const TEXT: &str = "#093c58";
pub const DIVIDER: &str = "#e6ddd6";

/// the single display font family; everything on the screen uses its bold cut.
pub const FONT_FAMILY: &str = "'JetBrains Mono', monospace";

// ==============================================================================
// asset configuration
// ==============================================================================

/// optional asset urls baked in at build time. an absent value suppresses the
/// dependent visual element entirely; absence is a valid state, not an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AssetConfig {
    /// header and hero logo imagery; doubles as the favicon fallback.
    pub logo_url: Option<&'static str>,
    /// browser tab icon; overrides the logo as favicon when both are set.
    pub favicon_url: Option<&'static str>,
}

impl AssetConfig {
    /// reads `SLS_LOGO_URL` and `SLS_FAVICON_URL` from the build environment.
    pub const fn from_build_env() -> Self {
        AssetConfig {
            logo_url: option_env!("SLS_LOGO_URL"),
            favicon_url: option_env!("SLS_FAVICON_URL"),
        }
    }

    pub const fn has_logo(&self) -> bool {
        self.logo_url.is_some()
    }

    /// the url the tab icon should point at: favicon first, logo as fallback,
    /// none when neither is configured (in which case the icon is untouched).
    pub const fn favicon_href(&self) -> Option<&'static str> {
        match self.favicon_url {
            Some(url) => Some(url),
            None => self.logo_url,
        }
    }
}

// ==============================================================================
// font readiness
// ==============================================================================

/// readiness of the display font. the screen renders nothing while Loading so
/// the user never sees a fallback face flash in. the only transition is
/// Loading -> Ready on successful acquisition; a load that never resolves
/// leaves the screen blank indefinitely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Readiness {
    #[default]
    Loading,
    Ready,
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_boundary() {
        assert_eq!(Breakpoint::from_width(479.99), Breakpoint::Small);
        assert_eq!(Breakpoint::from_width(480.0), Breakpoint::Default);
        assert_eq!(Breakpoint::from_width(0.0), Breakpoint::Small);
        assert_eq!(Breakpoint::from_width(1920.0), Breakpoint::Default);
    }

    #[test]
    fn test_heading_type_scale() {
        let cases = [
            (HeadingLevel::H1, 28, 24),
            (HeadingLevel::H2, 22, 20),
            (HeadingLevel::H3, 18, 16),
            (HeadingLevel::H4, 16, 15),
        ];
        for (level, default_px, small_px) in cases {
            assert_eq!(level.font_px(Breakpoint::Default), default_px);
            assert_eq!(level.font_px(Breakpoint::Small), small_px);
        }
    }

    #[test]
    fn test_brand_and_logo_scale() {
        assert_eq!(Breakpoint::Default.brand_px(), 18);
        assert_eq!(Breakpoint::Small.brand_px(), 16);
        assert_eq!(Breakpoint::Default.header_logo_px(), (40, 40));
        assert_eq!(Breakpoint::Small.header_logo_px(), (32, 32));
        assert_eq!(Breakpoint::Default.hero_logo_px(), (320, 140));
        assert_eq!(Breakpoint::Small.hero_logo_px(), (220, 96));
    }

    #[test]
    fn test_header_links_fixed() {
        assert_eq!(HEADER_LINKS[0].label, "Marketplace");
        assert_eq!(HEADER_LINKS[0].url, "https://marketplace.slsprotocol.com");
        assert_eq!(HEADER_LINKS[1].label, "Sign In");
        assert_eq!(HEADER_LINKS[1].url, "https://dashboard.slsprotocol.com");
    }

    #[test]
    fn test_favicon_precedence() {
        let none = AssetConfig::default();
        assert_eq!(none.favicon_href(), None);
        assert!(!none.has_logo());

        let logo_only = AssetConfig {
            logo_url: Some("https://cdn.example/logo.png"),
            favicon_url: None,
        };
        assert_eq!(logo_only.favicon_href(), Some("https://cdn.example/logo.png"));
        assert!(logo_only.has_logo());

        let both = AssetConfig {
            logo_url: Some("https://cdn.example/logo.png"),
            favicon_url: Some("https://cdn.example/favicon.ico"),
        };
        assert_eq!(both.favicon_href(), Some("https://cdn.example/favicon.ico"));
    }

    #[test]
    fn test_readiness_starts_loading() {
        assert_eq!(Readiness::default(), Readiness::Loading);
    }

    #[test]
    fn test_content_block_serialization() {
        let block = ContentBlock::h2("Data Packaging & Encryption");
        let json = serde_json::to_string(&block).unwrap();
        assert!(json.contains("\"Heading\""));
        assert!(json.contains("\"H2\""));
        assert_eq!(block.text(), "Data Packaging & Encryption");
    }
}
