//! Data model for the kiosk page content.
//!
//! Content is data, not code: slides, tabs, services, stats, and the
//! application form are all described by these types, loaded from a TOML
//! content file or from the built-in demo content.

pub mod form;
pub mod site;

pub use form::{ApplicationForm, FieldKind, FieldSpec, FormStep, Submission};
pub use site::{AboutTab, NavItem, SectionId, Service, SiteContent, Slide, Stat};
