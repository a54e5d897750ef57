// Copyright 2022-2023 VMware, Inc.
// SPDX-License-Identifier: BSD-2-Clause

//! S-expressions, the textual form of SMT-LIB terms and commands.

use serde::Serialize;
use std::fmt;

use term::sorts::Sort;

/// An atom in an s-expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Atom {
    /// An unsigned numeral.
    I(u128),
    /// A symbol or keyword.
    S(String),
}

/// An s-expression: an atom or a parenthesized list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Sexp {
    /// A bare atom.
    Atom(Atom),
    /// A parenthesized list of s-expressions.
    List(Vec<Sexp>),
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Atom::I(i) => write!(f, "{i}"),
            Atom::S(s) => write!(f, "{s}"),
        }
    }
}

impl fmt::Display for Sexp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sexp::Atom(atom) => write!(f, "{atom}"),
            Sexp::List(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, ")")
            }
        }
    }
}

/// A symbol atom.
pub fn atom_s(s: impl ToString) -> Sexp {
    Sexp::Atom(Atom::S(s.to_string()))
}

/// A numeral atom.
pub fn atom_i(i: impl Into<u128>) -> Sexp {
    Sexp::Atom(Atom::I(i.into()))
}

/// A list `(head args...)`.
pub fn app(head: &str, args: impl IntoIterator<Item = Sexp>) -> Sexp {
    let mut items = vec![atom_s(head)];
    items.extend(args);
    Sexp::List(items)
}

/// A list of the given s-expressions.
pub fn sexp_l(items: impl IntoIterator<Item = Sexp>) -> Sexp {
    Sexp::List(items.into_iter().collect())
}

/// A signed numeral; SMT-LIB has no negative numerals, so negative values
/// render as `(- n)`.
pub fn atom_int(i: i128) -> Sexp {
    if i >= 0 {
        atom_i(i.unsigned_abs())
    } else {
        app("-", [atom_i(i.unsigned_abs())])
    }
}

/// Render a sort in SMT-LIB concrete syntax. Bit-vector signedness is an
/// attribute of operators, not sorts, so both signednesses of a width render
/// to the same `(_ BitVec n)`.
pub fn sort_sexp(sort: &Sort) -> Sexp {
    if sort.is_bool() {
        atom_s("Bool")
    } else if sort.is_int() {
        atom_s("Int")
    } else if sort.is_real() {
        atom_s("Real")
    } else if sort.is_bv() {
        sexp_l([atom_s("_"), atom_s("BitVec"), atom_i(sort.bv_size() as u64)])
    } else if sort.is_array() {
        app("Array", [sort_sexp(sort.sorts(0)), sort_sexp(sort.sorts(1))])
    } else if sort.is_tuple() {
        app(
            "Tuple",
            (0..sort.sorts_size()).map(|i| sort_sexp(sort.sorts(i))),
        )
    } else {
        // function sorts only appear in declare-fun, which renders argument
        // and result sorts itself
        panic!("function sorts have no standalone rendering")
    }
}
