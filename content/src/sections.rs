//! Section order controller for the public page.
//!
//! DESIGN
//! ======
//! The stored list is an ordered, enable-flagged set of section entries.
//! List order is render order; `enabled = false` hides an entry without
//! removing it. Component names resolve through a closed [`SectionKind`]
//! enum; names that do not resolve are kept as [`ComponentRef::Unknown`] so
//! they survive a load/save round trip, and are skipped when composing the
//! page.

#[cfg(test)]
#[path = "sections_test.rs"]
mod sections_test;

use serde::{Deserialize, Serialize};

use crate::domain::{Content, ContentDomain};

/// Display sections that can be placed on the public page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Hero,
    Services,
    Portfolio,
    About,
    Blog,
    Contact,
}

impl SectionKind {
    pub const ALL: [SectionKind; 6] =
        [Self::Hero, Self::Services, Self::Portfolio, Self::About, Self::Blog, Self::Contact];

    /// Persisted component name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Hero => "Hero",
            Self::Services => "Services",
            Self::Portfolio => "Portfolio",
            Self::About => "About",
            Self::Blog => "Blog",
            Self::Contact => "Contact",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Page anchor used by the header navigation.
    #[must_use]
    pub fn anchor(self) -> &'static str {
        match self {
            Self::Hero => "home",
            Self::Services => "services",
            Self::Portfolio => "portfolio",
            Self::About => "about",
            Self::Blog => "blog",
            Self::Contact => "contact",
        }
    }
}

/// Component reference as stored: a known section or an unrecognized name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ComponentRef {
    Known(SectionKind),
    Unknown(String),
}

impl From<String> for ComponentRef {
    fn from(name: String) -> Self {
        match SectionKind::from_name(&name) {
            Some(kind) => Self::Known(kind),
            None => Self::Unknown(name),
        }
    }
}

impl From<ComponentRef> for String {
    fn from(component: ComponentRef) -> Self {
        match component {
            ComponentRef::Known(kind) => kind.name().to_owned(),
            ComponentRef::Unknown(name) => name,
        }
    }
}

impl From<SectionKind> for ComponentRef {
    fn from(kind: SectionKind) -> Self {
        Self::Known(kind)
    }
}

/// One entry of the section order list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionItem {
    pub id: String,
    pub name: String,
    pub component: ComponentRef,
    pub enabled: bool,
}

impl SectionItem {
    #[must_use]
    pub fn new(id: &str, name: &str, kind: SectionKind) -> Self {
        Self { id: id.to_owned(), name: name.to_owned(), component: kind.into(), enabled: true }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Ordered section list persisted under [`ContentDomain::SectionOrder`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionOrder(pub Vec<SectionItem>);

impl Default for SectionOrder {
    fn default() -> Self {
        Self(vec![
            SectionItem::new("hero", "Hero Section", SectionKind::Hero),
            SectionItem::new("services", "Services", SectionKind::Services),
            SectionItem::new("portfolio", "Portfolio", SectionKind::Portfolio),
            SectionItem::new("about", "About", SectionKind::About),
            SectionItem::new("blog", "Blog", SectionKind::Blog),
            SectionItem::new("contact", "Contact", SectionKind::Contact),
        ])
    }
}

impl Content for SectionOrder {
    const DOMAIN: ContentDomain = ContentDomain::SectionOrder;
}

impl SectionOrder {
    #[must_use]
    pub fn items(&self) -> &[SectionItem] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Swap the entry at `index` with its neighbor in `direction`.
    ///
    /// Returns `false` (list unchanged) at the list boundaries or for an
    /// out-of-range index.
    pub fn move_item(&mut self, index: usize, direction: Direction) -> bool {
        let target = match direction {
            Direction::Up => index.checked_sub(1),
            Direction::Down => index.checked_add(1),
        };
        match target {
            Some(target) if index < self.0.len() && target < self.0.len() => {
                self.0.swap(index, target);
                true
            }
            _ => false,
        }
    }

    /// Flip `enabled` on one entry. Returns false when `index` is out of range.
    pub fn toggle(&mut self, index: usize) -> bool {
        match self.0.get_mut(index) {
            Some(item) => {
                item.enabled = !item.enabled;
                true
            }
            None => false,
        }
    }

    /// Enabled sections in render order. Unknown component names are skipped.
    #[must_use]
    pub fn resolve(&self) -> Vec<SectionKind> {
        self.0
            .iter()
            .filter(|item| item.enabled)
            .filter_map(|item| match &item.component {
                ComponentRef::Known(kind) => Some(*kind),
                ComponentRef::Unknown(name) => {
                    log::warn!("skipping section {} with unknown component {name:?}", item.id);
                    None
                }
            })
            .collect()
    }
}
