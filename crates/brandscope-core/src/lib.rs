//! Shared types for brandscope: the brand profile data model, the template
//! catalog, environment configuration, and default landing-page copy.

pub mod app_config;
pub mod config;
pub mod error;
pub mod profile;
pub mod sections;
pub mod store;
pub mod template;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{ConfigError, StoreError};
pub use profile::{
    BrandProfile, Formality, HexColor, Language, StyleNotes, Tone, FALLBACK_FONT_FAMILIES,
};
pub use sections::{
    apply_field_updates, load_default_sections, personalize_sections, rewritable_fields,
    CopyField,
};
pub use store::ProfileStore;
pub use template::{select_template, ParseTemplateKeyError, Template, TemplateKey};
