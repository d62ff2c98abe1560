//! Brand swatches from the computed colors of structural page regions.

use std::sync::LazyLock;

use brandscope_core::HexColor;
use regex::Regex;

use crate::render::{ComputedStyle, RenderedPage};

static RGBA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*rgba?\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)\s*(?:,\s*([0-9]*\.?[0-9]+)\s*)?\)\s*$")
        .expect("valid rgba regex")
});

/// Selector groups queried for color, in swatch priority order: header,
/// call to action, accent, page body.
pub const COLOR_SELECTORS: [&str; 4] = [
    "header, .header, nav",
    r#"button, .btn, .button, [class*="primary"]"#,
    r#".cta, [class*="accent"], [class*="highlight"]"#,
    "body",
];

/// A parsed CSS `rgb()` / `rgba()` value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f64,
}

impl Rgba {
    #[must_use]
    pub fn is_transparent(&self) -> bool {
        self.alpha <= 0.0
    }

    #[must_use]
    pub fn to_hex(&self) -> HexColor {
        HexColor::from_rgb(self.r, self.g, self.b)
    }
}

/// Parses the `rgb(r, g, b)` / `rgba(r, g, b, a)` form browsers report for
/// computed colors. Channels above 255 are rejected.
#[must_use]
pub fn parse_rgba(raw: &str) -> Option<Rgba> {
    let caps = RGBA_RE.captures(raw)?;
    let channel = |i: usize| caps.get(i)?.as_str().parse::<u8>().ok();
    let alpha = match caps.get(4) {
        Some(m) => m.as_str().parse::<f64>().ok()?,
        None => 1.0,
    };
    Some(Rgba {
        r: channel(1)?,
        g: channel(2)?,
        b: channel(3)?,
        alpha,
    })
}

/// Up to three swatches in selector priority order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrandColors {
    pub primary: Option<HexColor>,
    pub secondary: Option<HexColor>,
    pub accent: Option<HexColor>,
}

impl BrandColors {
    fn from_swatches(swatches: Vec<HexColor>) -> Self {
        let mut swatches = swatches.into_iter();
        Self {
            primary: swatches.next(),
            secondary: swatches.next(),
            accent: swatches.next(),
        }
    }
}

/// The color a region visibly carries: its background unless that is fully
/// transparent, otherwise its text color. Transparent or malformed results
/// carry no signal.
#[must_use]
pub fn effective_color(style: &ComputedStyle) -> Option<HexColor> {
    let background_is_transparent =
        parse_rgba(&style.background_color).is_some_and(|c| c.is_transparent());
    let raw = if background_is_transparent {
        &style.color
    } else {
        &style.background_color
    };

    parse_rgba(raw)
        .filter(|c| !c.is_transparent())
        .map(|c| c.to_hex())
}

/// Queries every selector group and assigns the surviving swatches to
/// primary, secondary and accent. A failed query only drops its own group.
pub async fn extract_colors<P: RenderedPage>(page: &P) -> BrandColors {
    let mut swatches = Vec::with_capacity(COLOR_SELECTORS.len());

    for selector in COLOR_SELECTORS {
        match page.computed_style(selector).await {
            Ok(Some(style)) => match effective_color(&style) {
                Some(hex) => swatches.push(hex),
                None => tracing::debug!(
                    selector,
                    background = %style.background_color,
                    color = %style.color,
                    "no usable color"
                ),
            },
            Ok(None) => tracing::debug!(selector, "no element for color selector"),
            Err(e) => tracing::warn!(selector, error = %e, "color query failed"),
        }
    }

    BrandColors::from_swatches(swatches)
}
