//! List-valued fields and their minimum cardinality rules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Several display sections break when a list is empty (a services grid with
//! no cards, a footer column with no links). The "keep at least N" rule of
//! every editable list is declared once in [`rules`] and enforced by
//! [`ListField::remove`], not by individual screens.

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;

use crate::error::EditError;
use crate::lens::Lens;

/// A `Vec<A>` inside an `S`, with its cardinality rule and the entry appended
/// by "add".
pub struct ListField<S, A> {
    name: &'static str,
    lens: Lens<S, Vec<A>>,
    min_len: usize,
    placeholder: fn(&S) -> A,
}

impl<S, A> Clone for ListField<S, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, A> Copy for ListField<S, A> {}

impl<S, A> std::fmt::Debug for ListField<S, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListField")
            .field("name", &self.name)
            .field("min_len", &self.min_len)
            .finish_non_exhaustive()
    }
}

impl<S, A> ListField<S, A> {
    pub const fn new(name: &'static str, lens: Lens<S, Vec<A>>, min_len: usize, placeholder: fn(&S) -> A) -> Self {
        Self { name, lens, min_len, placeholder }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn min_len(&self) -> usize {
        self.min_len
    }

    pub fn items<'a>(&self, target: &'a S) -> &'a [A] {
        self.lens.get(target)
    }

    /// Whether one entry can be removed without breaking the minimum.
    pub fn can_remove(&self, target: &S) -> bool {
        self.lens.get(target).len() > self.min_len
    }

    /// Append the placeholder entry.
    pub fn add(&self, target: &mut S) {
        let item = (self.placeholder)(target);
        self.lens.get_mut(target).push(item);
    }

    /// Delete the entry at `index`.
    ///
    /// # Errors
    ///
    /// [`EditError::IndexOutOfRange`] for a bad index, and
    /// [`EditError::BelowMinimum`] when the list is already at its minimum.
    pub fn remove(&self, target: &mut S, index: usize) -> Result<A, EditError> {
        let items = self.lens.get_mut(target);
        if index >= items.len() {
            return Err(EditError::IndexOutOfRange { index, len: items.len() });
        }
        if items.len() <= self.min_len {
            return Err(EditError::BelowMinimum { field: self.name, min: self.min_len });
        }
        Ok(items.remove(index))
    }

    /// Replace the entry at `index`, leaving the others untouched.
    ///
    /// # Errors
    ///
    /// [`EditError::IndexOutOfRange`] for a bad index.
    pub fn update(&self, target: &mut S, index: usize, value: A) -> Result<(), EditError> {
        let items = self.lens.get_mut(target);
        let len = items.len();
        let slot = items.get_mut(index).ok_or(EditError::IndexOutOfRange { index, len })?;
        *slot = value;
        Ok(())
    }
}

/// Every editable list and its rule.
pub mod rules {
    use super::ListField;
    use crate::lens;
    use crate::schema::{FooterContent, PortfolioContent, ServiceItem, ServicesContent};

    /// Service cards. At least one.
    #[must_use]
    pub fn service_entries() -> ListField<ServicesContent, ServiceItem> {
        ListField::new("services", lens!(ServicesContent, services), 1, |content| {
            ServiceItem::placeholder(next_numeric_id(content.services.iter().map(|s| s.id.as_str())))
        })
    }

    /// Feature bullets of one service card. At least one.
    #[must_use]
    pub fn service_features() -> ListField<ServiceItem, String> {
        ListField::new("features", lens!(ServiceItem, features), 1, |_| "New Feature".to_owned())
    }

    /// Portfolio client names. At least one.
    #[must_use]
    pub fn portfolio_clients() -> ListField<PortfolioContent, String> {
        ListField::new("clients", lens!(PortfolioContent, clients), 1, |_| "New Client".to_owned())
    }

    /// Footer link columns.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum FooterColumn {
        Services,
        Company,
        Resources,
    }

    impl FooterColumn {
        pub const ALL: [FooterColumn; 3] = [Self::Services, Self::Company, Self::Resources];

        #[must_use]
        pub fn title(self) -> &'static str {
            match self {
                Self::Services => "Services",
                Self::Company => "Company",
                Self::Resources => "Resources",
            }
        }
    }

    /// Links of one footer column. At least one per column.
    #[must_use]
    pub fn footer_column(column: FooterColumn) -> ListField<FooterContent, String> {
        let placeholder: fn(&FooterContent) -> String = |_| "New Item".to_owned();
        match column {
            FooterColumn::Services => {
                ListField::new("services", lens!(FooterContent, sections.services), 1, placeholder)
            }
            FooterColumn::Company => ListField::new("company", lens!(FooterContent, sections.company), 1, placeholder),
            FooterColumn::Resources => {
                ListField::new("resources", lens!(FooterContent, sections.resources), 1, placeholder)
            }
        }
    }

    /// One past the largest numeric id in use (`"1"` for none).
    pub(crate) fn next_numeric_id<'a>(ids: impl Iterator<Item = &'a str>) -> String {
        let max = ids.filter_map(|id| id.parse::<u64>().ok()).max().unwrap_or(0);
        (max + 1).to_string()
    }
}
