// Copyright 2022-2023 VMware, Inc.
// SPDX-License-Identifier: BSD-2-Clause

//! The solver-encoding protocol and a reference backend.
//!
//! A backend implements [`Solver`](imp::Solver) by providing one encoding
//! hook per expression node kind; the protocol's provided methods walk the
//! term DAG, dispatch each node to its hook, and account encoding
//! [`Stats`](stats::Stats). The assertion stack (`push`/`pop`/`reset`) and
//! satisfiability checks are likewise backend hooks behind a common surface.
//!
//! [`EnumBackend`](backends::EnumBackend) is the in-process reference
//! backend: it renders assertions to SMT-LIB s-expressions and decides small
//! finite-domain formulas by bounded enumeration.

// configure clippy
#![allow(clippy::needless_return)]
#![allow(clippy::large_enum_variant)]
#![allow(clippy::upper_case_acronyms)]
#![allow(clippy::type_complexity)]
// documentation-related lints (only checked when running rustdoc)
#![warn(missing_docs)]
#![allow(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod backends;
pub mod eval;
pub mod imp;
pub mod logic;
pub mod sexp;
pub mod stats;

pub use backends::EnumBackend;
pub use imp::{CheckResult, EncodeError, Solver};
pub use logic::Logic;
pub use stats::Stats;
