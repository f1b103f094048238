//! Content domain registry.
//!
//! DESIGN
//! ======
//! Each domain maps 1:1 to a storage key and to exactly one schema type
//! implementing [`Content`]. The keys are the site's persisted layout and
//! must not change without a migration.

#[cfg(test)]
#[path = "domain_test.rs"]
mod domain_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::schema::{
    AboutContent, ContactContent, FooterContent, HomeContent, PortfolioContent, ServicesContent,
};
use crate::{blog::BlogPosts, sections::SectionOrder, theme::ThemeColors};

/// A named, independently persisted unit of editable site content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContentDomain {
    Home,
    Services,
    Portfolio,
    About,
    Contact,
    Footer,
    Theme,
    BlogPosts,
    SectionOrder,
}

impl ContentDomain {
    /// Every domain, in admin navigation order.
    pub const ALL: [ContentDomain; 9] = [
        Self::Home,
        Self::Services,
        Self::Portfolio,
        Self::About,
        Self::Contact,
        Self::BlogPosts,
        Self::Footer,
        Self::Theme,
        Self::SectionOrder,
    ];

    /// `localStorage` key holding this domain's JSON value.
    #[must_use]
    pub fn storage_key(self) -> &'static str {
        match self {
            Self::Home => "homeContent",
            Self::Services => "servicesContent",
            Self::Portfolio => "portfolioContent",
            Self::About => "aboutContent",
            Self::Contact => "contactContent",
            Self::Footer => "footerContent",
            Self::Theme => "themeColors",
            Self::BlogPosts => "blogPosts",
            Self::SectionOrder => "sectionOrder",
        }
    }

    /// Reverse lookup from a storage key.
    #[must_use]
    pub fn from_storage_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|domain| domain.storage_key() == key)
    }

    /// Operator-facing name used in the admin console.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home Section",
            Self::Services => "Services",
            Self::Portfolio => "Portfolio",
            Self::About => "About",
            Self::Contact => "Contact",
            Self::Footer => "Footer",
            Self::Theme => "Theme",
            Self::BlogPosts => "Blog",
            Self::SectionOrder => "Sections",
        }
    }

    /// One-line summary shown on the dashboard card.
    #[must_use]
    pub fn summary(self) -> &'static str {
        match self {
            Self::Home => "Edit hero content, headlines, and statistics",
            Self::Services => "Manage service offerings and features",
            Self::Portfolio => "Update case studies and client work",
            Self::About => "Edit company info and team details",
            Self::Contact => "Update contact information and form",
            Self::Footer => "Edit footer links, legal text, and styling",
            Self::Theme => "Customize the site color palette",
            Self::BlogPosts => "Manage blog posts and content",
            Self::SectionOrder => "Reorder and show/hide homepage sections",
        }
    }

    /// Route of the editor screen for this domain.
    #[must_use]
    pub fn admin_path(self) -> &'static str {
        match self {
            Self::Home => "/admin/home",
            Self::Services => "/admin/services",
            Self::Portfolio => "/admin/portfolio",
            Self::About => "/admin/about",
            Self::Contact => "/admin/contact",
            Self::Footer => "/admin/footer",
            Self::Theme => "/admin/theme",
            Self::BlogPosts => "/admin/blog",
            Self::SectionOrder => "/admin/sections",
        }
    }

    /// Compiled-in default of this domain as a JSON value.
    #[must_use]
    pub fn default_json(self) -> serde_json::Value {
        match self {
            Self::Home => default_json::<HomeContent>(),
            Self::Services => default_json::<ServicesContent>(),
            Self::Portfolio => default_json::<PortfolioContent>(),
            Self::About => default_json::<AboutContent>(),
            Self::Contact => default_json::<ContactContent>(),
            Self::Footer => default_json::<FooterContent>(),
            Self::Theme => default_json::<ThemeColors>(),
            Self::BlogPosts => default_json::<BlogPosts>(),
            Self::SectionOrder => default_json::<SectionOrder>(),
        }
    }
}

fn default_json<T: Content>() -> serde_json::Value {
    serde_json::to_value(T::default()).unwrap_or(serde_json::Value::Null)
}

/// A schema type bound to one [`ContentDomain`].
///
/// `Default::default()` is the domain's compiled-in default: the value shown
/// before anything was saved and the target of every reset.
pub trait Content:
    Serialize + DeserializeOwned + Default + Clone + PartialEq + std::fmt::Debug + Send + Sync + 'static
{
    const DOMAIN: ContentDomain;
}
