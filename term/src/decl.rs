// Copyright 2022-2023 VMware, Inc.
// SPDX-License-Identifier: BSD-2-Clause

//! Named, sorted symbol declarations.
//!
//! Symbols are assumed to be globally unique within a proof context; the
//! library performs no deduplication or namespacing.

use std::fmt;
use std::marker::PhantomData;

use crate::sorts::{Sort, Sorted};

/// A declaration carrying an explicit runtime sort.
#[derive(Debug, Clone)]
pub struct UnsafeDecl {
    symbol: String,
    sort: &'static Sort,
}

impl UnsafeDecl {
    /// Declare `symbol` with the given sort. Use globally unique symbols!
    pub fn new(symbol: impl Into<String>, sort: &'static Sort) -> Self {
        UnsafeDecl {
            symbol: symbol.into(),
            sort,
        }
    }

    /// The declared symbol.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The declared sort.
    pub fn sort(&self) -> &'static Sort {
        self.sort
    }
}

impl PartialEq for UnsafeDecl {
    /// Equality is by symbol and sort identity.
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol && std::ptr::eq(self.sort, other.sort)
    }
}

impl Eq for UnsafeDecl {}

impl fmt::Display for UnsafeDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.symbol, self.sort)
    }
}

/// A declaration whose sort is derived from its static sort type `T`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decl<T: Sorted> {
    decl: UnsafeDecl,
    _sort: PhantomData<T>,
}

impl<T: Sorted> Decl<T> {
    /// Declare `symbol` at the sort of `T`. Use globally unique symbols!
    pub fn new(symbol: impl Into<String>) -> Self {
        Decl {
            decl: UnsafeDecl::new(symbol, T::sort()),
            _sort: PhantomData,
        }
    }

    /// The declared symbol.
    pub fn symbol(&self) -> &str {
        self.decl.symbol()
    }

    /// The declared sort, always `T::sort()`.
    pub fn sort(&self) -> &'static Sort {
        self.decl.sort()
    }

    /// View this declaration without its static sort.
    pub fn as_unsafe(&self) -> &UnsafeDecl {
        &self.decl
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorts::{bv_sort, int_sort, Bv, Int};

    #[test]
    fn decl_equality_is_symbol_and_sort_identity() {
        let x = UnsafeDecl::new("x", int_sort());
        let x2 = UnsafeDecl::new("x", int_sort());
        let y = UnsafeDecl::new("y", int_sort());
        let x_bv = UnsafeDecl::new("x", bv_sort(true, 32));
        assert_eq!(x, x2);
        assert_ne!(x, y);
        assert_ne!(x, x_bv);
    }

    #[test]
    fn typed_decl_sort_is_inferred() {
        let d = Decl::<Bv<i64>>::new("v");
        assert!(std::ptr::eq(d.sort(), bv_sort(true, 64)));
        assert_eq!(d.as_unsafe(), &UnsafeDecl::new("v", bv_sort(true, 64)));
        let i = Decl::<Int>::new("n");
        assert!(std::ptr::eq(i.sort(), int_sort()));
    }
}
