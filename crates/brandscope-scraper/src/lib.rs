//! Brand profile extraction from a rendered client website.
//!
//! One call to [`scrape_brand`] renders the page, runs every extraction stage
//! against the same render session, and always returns a complete
//! [`brandscope_core::BrandProfile`]. Only a render failure is reported to the
//! caller, paired with the fallback profile.

pub mod assets;
pub mod color;
pub mod error;
pub mod fonts;
pub mod language;
pub mod pipeline;
pub mod render;
pub mod style;
pub mod text;

pub use assets::{locate_assets, BrandAssets};
pub use color::{extract_colors, parse_rgba, BrandColors, Rgba};
pub use error::RenderError;
pub use fonts::{extract_fonts, normalize_font_families, web_font_families};
pub use language::detect_language;
pub use pipeline::{scrape_brand, BrandScrape};
pub use render::{ChromiumRenderer, ComputedStyle, RenderOptions, RenderedPage, Renderer};
pub use style::analyze_style;
pub use text::visible_text;
