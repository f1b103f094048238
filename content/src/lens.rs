//! Typed field paths into content schemas.
//!
//! A [`Lens`] is a pair of plain function pointers, so it is `Copy`,
//! `'static`, and can be handed to generic form widgets. Build one with
//! [`lens!`](crate::lens!) to get compile-time checked paths:
//!
//! ```
//! use content::{lens, schema::HomeContent};
//!
//! let roi = lens!(HomeContent, stats.roi);
//! let mut home = HomeContent::default();
//! roi.set(&mut home, "900%".to_owned());
//! assert_eq!(roi.get(&home), "900%");
//! ```

#[cfg(test)]
#[path = "lens_test.rs"]
mod lens_test;

/// Getter/setter pair addressing an `A` inside an `S`.
pub struct Lens<S, A> {
    get: fn(&S) -> &A,
    get_mut: fn(&mut S) -> &mut A,
}

impl<S, A> Lens<S, A> {
    pub const fn new(get: fn(&S) -> &A, get_mut: fn(&mut S) -> &mut A) -> Self {
        Self { get, get_mut }
    }

    pub fn get<'a>(&self, source: &'a S) -> &'a A {
        (self.get)(source)
    }

    pub fn get_mut<'a>(&self, source: &'a mut S) -> &'a mut A {
        (self.get_mut)(source)
    }

    pub fn set(&self, source: &mut S, value: A) {
        *(self.get_mut)(source) = value;
    }
}

impl<S, A> Clone for Lens<S, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, A> Copy for Lens<S, A> {}

impl<S, A> std::fmt::Debug for Lens<S, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lens").finish_non_exhaustive()
    }
}

/// Build a [`Lens`] from a type and a dotted field path.
#[macro_export]
macro_rules! lens {
    ($ty:ty, $($path:ident).+) => {
        $crate::lens::Lens::<$ty, _>::new(|s: &$ty| &s.$($path).+, |s: &mut $ty| &mut s.$($path).+)
    };
}
