//! Schema types for the page-section content domains.
//!
//! DESIGN
//! ======
//! Every struct is `#[serde(default)]`: a stored value missing fields (an
//! older shape) is completed from the compiled-in default, while a value with
//! a wrong JSON type fails to decode and the store falls back to the default
//! as a whole. Field names serialize in camelCase, matching the persisted
//! layout.
//!
//! Blog posts, section order, and theme colors carry behavior beyond plain
//! fields and live in [`crate::blog`], [`crate::sections`], and
//! [`crate::theme`].

mod about;
mod contact;
mod footer;
mod home;
mod portfolio;
mod services;

#[cfg(test)]
#[path = "schema_test.rs"]
mod schema_test;

pub use about::{AboutContent, AboutStats};
pub use contact::{ContactContent, ContactInfo, ResponseGuarantee};
pub use footer::{FooterContactInfo, FooterContent, FooterLegal, FooterSections, FooterStyling, SocialLinks};
pub use home::{Badge, CtaButtons, Headline, HeroStats, HomeContent};
pub use portfolio::{FeaturedCase, PortfolioContent, PortfolioStats};
pub use services::{ServiceItem, ServicesContent};
