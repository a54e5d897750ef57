// Copyright 2022-2023 VMware, Inc.
// SPDX-License-Identifier: BSD-2-Clause

//! The backend protocol: one encoding hook per expression node kind, an
//! assertion stack, and satisfiability checks.
//!
//! The protocol splits into required hooks, which a backend implements, and
//! provided methods, which drive them. [`Solver::encode`] dispatches a
//! single node to its hook and accounts [`Stats`]; hooks recurse into their
//! operands by calling `encode` back, so the walk follows the DAG without
//! the protocol prescribing an evaluation order beyond parent-after-child.

use serde::Serialize;
use thiserror::Error;

use term::expr::{Expr, Opcode, Scalar};
use term::sorts::{Bool, Sort};
use term::terms::IntoTerm;
use term::{UnsafeDecl, UnsafeTerm};

use crate::stats::Stats;

/// Error from encoding a term for a backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The backend has no encoding for this operator at the sort it was
    /// applied at.
    #[error("operator {0} is not supported by this backend")]
    Opcode(Opcode),
    /// The backend cannot encode this construct at all.
    #[error("unsupported: {0}")]
    Unsupported(&'static str),
}

/// Verdict of a satisfiability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CheckResult {
    /// Some assignment satisfies every asserted formula.
    Sat,
    /// No assignment satisfies every asserted formula.
    Unsat,
    /// The backend could not decide.
    Unknown,
}

/// A solver backend.
///
/// Implementors provide the `encode_*` hooks plus the stack and check
/// operations; `encode` and `add` are derived. Hooks encode their own
/// operands by calling [`Solver::encode`] back on them.
pub trait Solver {
    /// Encoding statistics accumulated so far.
    fn stats(&self) -> &Stats;

    /// Mutable access to the statistics, used by `encode`.
    fn stats_mut(&mut self) -> &mut Stats;

    /// Encode a primitive literal of the given sort. Bit-vector payloads
    /// wider than the sort are truncated.
    fn encode_literal(&mut self, sort: &'static Sort, value: Scalar) -> Result<(), EncodeError>;

    /// Encode a free constant.
    fn encode_constant(&mut self, decl: &UnsafeDecl) -> Result<(), EncodeError>;

    /// Encode an uninterpreted function application.
    fn encode_func_app(
        &mut self,
        decl: &UnsafeDecl,
        args: &[UnsafeTerm],
    ) -> Result<(), EncodeError>;

    /// Encode an array mapping every index to `init`.
    fn encode_const_array(
        &mut self,
        sort: &'static Sort,
        init: &UnsafeTerm,
    ) -> Result<(), EncodeError>;

    /// Encode an array read.
    fn encode_array_select(
        &mut self,
        array: &UnsafeTerm,
        index: &UnsafeTerm,
    ) -> Result<(), EncodeError>;

    /// Encode a functional array update.
    fn encode_array_store(
        &mut self,
        array: &UnsafeTerm,
        index: &UnsafeTerm,
        value: &UnsafeTerm,
    ) -> Result<(), EncodeError>;

    /// Encode an applied unary operator.
    fn encode_unary(
        &mut self,
        op: Opcode,
        sort: &'static Sort,
        arg: &UnsafeTerm,
    ) -> Result<(), EncodeError>;

    /// Encode an applied binary operator.
    fn encode_binary(
        &mut self,
        op: Opcode,
        sort: &'static Sort,
        larg: &UnsafeTerm,
        rarg: &UnsafeTerm,
    ) -> Result<(), EncodeError>;

    /// Encode an applied n-ary operator; `args` is never empty.
    fn encode_nary(
        &mut self,
        op: Opcode,
        sort: &'static Sort,
        args: &[UnsafeTerm],
    ) -> Result<(), EncodeError>;

    /// Record the most recently encoded term as an assertion in the current
    /// stack frame. Called by [`Solver::add`] after a successful encoding.
    fn assert_encoded(&mut self, term: &UnsafeTerm);

    /// Open a new assertion frame.
    fn push(&mut self);

    /// Discard the current assertion frame.
    ///
    /// Panics when called on the base frame; matching `push`/`pop` pairs are
    /// the caller's responsibility.
    fn pop(&mut self);

    /// Discard every assertion, including the base frame's, leaving a
    /// single empty frame. Statistics are cumulative and survive a reset.
    fn reset(&mut self);

    /// Decide the conjunction of every assertion on the stack.
    fn check(&mut self) -> CheckResult;

    /// Encode one node: dispatch to the hook for its kind and account the
    /// statistics for the visit.
    fn encode(&mut self, term: &UnsafeTerm) -> Result<(), EncodeError>
    where
        Self: Sized,
    {
        match term.expr() {
            Expr::Literal { sort, value } => self.encode_literal(*sort, *value),
            Expr::Constant { decl } => {
                self.stats_mut().constants += 1;
                self.encode_constant(decl)
            }
            Expr::Unary { op, sort, arg } => {
                self.stats_mut().unary_ops += 1;
                self.stats_mut().record_op(*op);
                self.encode_unary(*op, *sort, arg)
            }
            Expr::Binary {
                op,
                sort,
                larg,
                rarg,
            } => {
                self.stats_mut().binary_ops += 1;
                self.stats_mut().record_op(*op);
                self.encode_binary(*op, *sort, larg, rarg)
            }
            Expr::Nary { op, sort, args } => {
                self.stats_mut().nary_ops += 1;
                self.stats_mut().record_op(*op);
                self.encode_nary(*op, *sort, args)
            }
            Expr::ConstArray { sort, init } => self.encode_const_array(*sort, init),
            Expr::ArraySelect { array, index } => {
                self.stats_mut().array_selects += 1;
                self.encode_array_select(array, index)
            }
            Expr::ArrayStore {
                array,
                index,
                value,
            } => {
                self.stats_mut().array_stores += 1;
                self.encode_array_store(array, index, value)
            }
            Expr::FuncApp { decl, args } => {
                self.stats_mut().func_apps += 1;
                self.encode_func_app(decl, args)
            }
        }
    }

    /// Assert a boolean term in the current frame: encode it, then hand it
    /// to [`Solver::assert_encoded`]. Only statically boolean terms are
    /// accepted; untyped terms go through [`Solver::unsafe_add`].
    fn add(&mut self, term: impl IntoTerm<Bool>) -> Result<(), EncodeError>
    where
        Self: Sized,
    {
        let term: UnsafeTerm = term.into_term().into();
        self.encode(&term)?;
        self.assert_encoded(&term);
        Ok(())
    }

    /// Assert an untyped term without checking its sort. The term must be
    /// boolean; this is a precondition on the caller, verified only in
    /// debug builds.
    fn unsafe_add(&mut self, term: &UnsafeTerm) -> Result<(), EncodeError>
    where
        Self: Sized,
    {
        debug_assert!(term.sort().is_bool(), "asserted terms must be boolean");
        self.encode(term)?;
        self.assert_encoded(term);
        Ok(())
    }
}
