// Copyright 2022-2023 VMware, Inc.
// SPDX-License-Identifier: BSD-2-Clause

//! A statically-sorted SMT term library.
//!
//! Terms are immutable, reference-counted DAG nodes tagged by
//! [`ExprKind`](expr::ExprKind), each carrying its result
//! [`Sort`](sorts::Sort). The library offers two parallel surfaces: a typed
//! one, where [`Term<T>`](terms::Term) tracks the sort of a term at the type
//! level and the builder layer rejects ill-sorted combinations at compile
//! time, and an untyped one, where [`UnsafeTerm`](terms::UnsafeTerm) carries
//! only a runtime sort and the caller is responsible for well-sortedness.
//!
//! This crate builds formulas; it does not solve them. Deciding
//! satisfiability is delegated to a backend implementing the protocol in the
//! `solver` crate, which walks the term DAG through each node's encoding
//! hook.

// configure clippy
#![allow(clippy::needless_return)]
#![allow(clippy::large_enum_variant)]
#![allow(clippy::upper_case_acronyms)]
#![allow(clippy::type_complexity)]
// documentation-related lints (only checked when running rustdoc)
#![warn(missing_docs)]
#![allow(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod decl;
pub mod expr;
pub mod ops;
pub mod sorts;
pub mod terms;

pub use decl::{Decl, UnsafeDecl};
pub use ops::{ArithSort, Operand};
pub use expr::{Expr, ExprKind, Opcode, Scalar};
pub use sorts::{Array, Bool, Bv, Func, Int, Real, Sort, Sorted};
pub use terms::{
    any, apply, const_array, constant, distinct, implies, literal, select, store, IntoTerm, Term,
    UnsafeTerm,
};
