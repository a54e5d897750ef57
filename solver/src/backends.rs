// Copyright 2022-2023 VMware, Inc.
// SPDX-License-Identifier: BSD-2-Clause

//! The in-process reference backend.
//!
//! [`EnumBackend`] renders every asserted term to an SMT-LIB s-expression
//! and decides satisfiability by bounded enumeration. It is complete only
//! over finite domains: a check involving uninterpreted functions, infinite
//! sorts, or a search space beyond the budget answers `Unknown` rather than
//! guessing. Within those limits its `Unsat` answers are exhaustive and its
//! `Sat` answers come with a witness found by evaluation.

use std::collections::{BTreeMap, HashSet};

use itertools::Itertools;
use log::debug;

use term::expr::{Expr, Opcode, Scalar};
use term::sorts::Sort;
use term::UnsafeTerm;

use crate::eval::{eval, Env, Value};
use crate::imp::{CheckResult, EncodeError, Solver};
use crate::logic::Logic;
use crate::sexp::{app, atom_i, atom_int, atom_s, sexp_l, sort_sexp, Sexp};
use crate::stats::Stats;

/// Cap on the number of assignments a single check may enumerate.
pub const DEFAULT_BUDGET: u64 = 1 << 20;

#[derive(Debug, Clone)]
struct Assertion {
    term: UnsafeTerm,
    sexp: Sexp,
}

/// A backend that renders assertions to SMT-LIB and decides small
/// finite-domain formulas by enumeration.
#[derive(Debug, Clone)]
pub struct EnumBackend {
    logic: Option<Logic>,
    frames: Vec<Vec<Assertion>>,
    pending: Vec<Sexp>,
    budget: u64,
    stats: Stats,
}

impl EnumBackend {
    /// A backend with no declared logic and the default budget.
    pub fn new() -> Self {
        EnumBackend {
            logic: None,
            frames: vec![Vec::new()],
            pending: Vec::new(),
            budget: DEFAULT_BUDGET,
            stats: Stats::default(),
        }
    }

    /// A backend that will emit `(set-logic ...)` in its script.
    pub fn with_logic(logic: Logic) -> Self {
        EnumBackend {
            logic: Some(logic),
            ..EnumBackend::new()
        }
    }

    /// Set the enumeration budget.
    pub fn budget(&mut self, budget: u64) -> &mut Self {
        self.budget = budget;
        return self;
    }

    /// The declared logic, if any.
    pub fn logic(&self) -> Option<Logic> {
        self.logic
    }

    /// The rendering of the most recently asserted term.
    pub fn last_sexp(&self) -> Option<&Sexp> {
        self.frames.iter().flatten().map(|a| &a.sexp).last()
    }

    /// The full SMT-LIB script for the current assertion stack: the logic,
    /// declarations for every free symbol, the assertions, and `(check-sat)`.
    pub fn script(&self) -> String {
        let mut lines = Vec::new();
        if let Some(logic) = self.logic {
            lines.push(app("set-logic", [atom_s(logic.acronym())]).to_string());
        }
        let (decls, _) = self.free_symbols();
        for (symbol, sort) in decls {
            if sort.is_func() {
                let arity = sort.sorts_size() - 1;
                lines.push(
                    sexp_l([
                        atom_s("declare-fun"),
                        atom_s(symbol),
                        sexp_l((0..arity).map(|i| sort_sexp(sort.sorts(i)))),
                        sort_sexp(sort.sorts(arity)),
                    ])
                    .to_string(),
                );
            } else {
                lines.push(app("declare-const", [atom_s(symbol), sort_sexp(sort)]).to_string());
            }
        }
        for assertion in self.frames.iter().flatten() {
            lines.push(app("assert", [assertion.sexp.clone()]).to_string());
        }
        lines.push("(check-sat)".to_string());
        lines.join("\n")
    }

    fn top_frame(&mut self) -> &mut Vec<Assertion> {
        // the stack always holds at least the base frame
        self.frames.last_mut().unwrap()
    }

    fn pop_sexp(&mut self) -> Sexp {
        self.pending.pop().unwrap()
    }

    fn pop_args(&mut self, arity: usize) -> Vec<Sexp> {
        let split = self.pending.len() - arity;
        self.pending.split_off(split)
    }

    /// Every free symbol reachable from the assertion stack, plus whether
    /// any uninterpreted function is applied.
    fn free_symbols(&self) -> (BTreeMap<String, &'static Sort>, bool) {
        let mut symbols = BTreeMap::new();
        let mut has_func = false;
        let mut visited = HashSet::new();
        let mut work: Vec<UnsafeTerm> = self
            .frames
            .iter()
            .flatten()
            .map(|a| a.term.clone())
            .collect();
        while let Some(term) = work.pop() {
            if !visited.insert(term.addr()) {
                continue;
            }
            match term.expr() {
                Expr::Literal { .. } => (),
                Expr::Constant { decl } => {
                    symbols.insert(decl.symbol().to_string(), decl.sort());
                }
                Expr::Unary { arg, .. } => work.push(arg.clone()),
                Expr::Binary { larg, rarg, .. } => {
                    work.push(larg.clone());
                    work.push(rarg.clone());
                }
                Expr::Nary { args, .. } => work.extend(args.iter().cloned()),
                Expr::ConstArray { init, .. } => work.push(init.clone()),
                Expr::ArraySelect { array, index } => {
                    work.push(array.clone());
                    work.push(index.clone());
                }
                Expr::ArrayStore {
                    array,
                    index,
                    value,
                } => {
                    work.push(array.clone());
                    work.push(index.clone());
                    work.push(value.clone());
                }
                Expr::FuncApp { decl, args } => {
                    has_func = true;
                    symbols.insert(decl.symbol().to_string(), decl.sort());
                    work.extend(args.iter().cloned());
                }
            }
        }
        (symbols, has_func)
    }
}

impl Default for EnumBackend {
    fn default() -> Self {
        EnumBackend::new()
    }
}

fn mask(width: usize) -> u64 {
    if width >= 64 {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

/// The SMT-LIB operator for `op` applied at the given operand sort. The
/// operand sort, not the result sort, picks the operator family, and for
/// bit-vectors its signedness picks between the signed and unsigned forms.
fn op_name(op: Opcode, sort: &Sort) -> Result<&'static str, EncodeError> {
    if sort.is_bv() {
        let signed = sort.is_signed();
        let name = match op {
            Opcode::Not => "bvnot",
            Opcode::And => "bvand",
            Opcode::Or => "bvor",
            Opcode::Xor => "bvxor",
            Opcode::Add => "bvadd",
            Opcode::Sub => "bvsub",
            Opcode::Mul => "bvmul",
            Opcode::Quo => {
                if signed {
                    "bvsdiv"
                } else {
                    "bvudiv"
                }
            }
            Opcode::Rem => {
                if signed {
                    "bvsrem"
                } else {
                    "bvurem"
                }
            }
            Opcode::Lss => {
                if signed {
                    "bvslt"
                } else {
                    "bvult"
                }
            }
            Opcode::Gtr => {
                if signed {
                    "bvsgt"
                } else {
                    "bvugt"
                }
            }
            Opcode::Leq => {
                if signed {
                    "bvsle"
                } else {
                    "bvule"
                }
            }
            Opcode::Geq => {
                if signed {
                    "bvsge"
                } else {
                    "bvuge"
                }
            }
            Opcode::Eql => "=",
            Opcode::Neq => "distinct",
            _ => return Err(EncodeError::Opcode(op)),
        };
        return Ok(name);
    }
    if sort.is_bool() {
        let name = match op {
            Opcode::Lnot => "not",
            Opcode::Land => "and",
            Opcode::Lor => "or",
            Opcode::Xor => "xor",
            Opcode::Imp => "=>",
            Opcode::Eql => "=",
            Opcode::Neq => "distinct",
            _ => return Err(EncodeError::Opcode(op)),
        };
        return Ok(name);
    }
    if sort.is_int() || sort.is_real() {
        let name = match op {
            Opcode::Sub => "-",
            Opcode::Add => "+",
            Opcode::Mul => "*",
            Opcode::Quo => {
                if sort.is_int() {
                    "div"
                } else {
                    "/"
                }
            }
            Opcode::Rem if sort.is_int() => "mod",
            Opcode::Lss => "<",
            Opcode::Gtr => ">",
            Opcode::Leq => "<=",
            Opcode::Geq => ">=",
            Opcode::Eql => "=",
            Opcode::Neq => "distinct",
            _ => return Err(EncodeError::Opcode(op)),
        };
        return Ok(name);
    }
    // arrays and tuples only admit equality
    match op {
        Opcode::Eql => Ok("="),
        Opcode::Neq => Ok("distinct"),
        _ => Err(EncodeError::Opcode(op)),
    }
}

fn literal_sexp(sort: &Sort, value: Scalar) -> Result<Sexp, EncodeError> {
    if sort.is_bool() {
        match value.as_bool() {
            Some(b) => Ok(atom_s(b)),
            None => Err(EncodeError::Unsupported(
                "boolean literal with a numeric payload",
            )),
        }
    } else if sort.is_bv() {
        let bits = value.as_i128() as u64 & mask(sort.bv_size());
        Ok(sexp_l([
            atom_s("_"),
            atom_s(format!("bv{bits}")),
            atom_i(sort.bv_size() as u64),
        ]))
    } else if sort.is_int() || sort.is_real() {
        Ok(atom_int(value.as_i128()))
    } else {
        Err(EncodeError::Unsupported("literal at a non-primitive sort"))
    }
}

/// Size of the value domain of `sort`, or `None` when it is not finitely
/// enumerable here.
fn domain_size(sort: &Sort) -> Option<u64> {
    if sort.is_bool() {
        Some(2)
    } else if sort.is_bv() && sort.bv_size() < 64 {
        Some(1u64 << sort.bv_size())
    } else {
        None
    }
}

fn domain(sort: &Sort) -> Vec<Value> {
    if sort.is_bool() {
        vec![Value::Bool(false), Value::Bool(true)]
    } else {
        let width = sort.bv_size();
        let signed = sort.is_signed();
        (0..1u64 << width)
            .map(|bits| Value::Bv {
                bits,
                width,
                signed,
            })
            .collect()
    }
}

impl Solver for EnumBackend {
    fn stats(&self) -> &Stats {
        &self.stats
    }

    fn stats_mut(&mut self) -> &mut Stats {
        &mut self.stats
    }

    fn encode_literal(&mut self, sort: &'static Sort, value: Scalar) -> Result<(), EncodeError> {
        let sexp = literal_sexp(sort, value)?;
        self.pending.push(sexp);
        Ok(())
    }

    fn encode_constant(&mut self, decl: &term::UnsafeDecl) -> Result<(), EncodeError> {
        self.pending.push(atom_s(decl.symbol()));
        Ok(())
    }

    fn encode_func_app(
        &mut self,
        decl: &term::UnsafeDecl,
        args: &[UnsafeTerm],
    ) -> Result<(), EncodeError> {
        for arg in args {
            self.encode(arg)?;
        }
        let args = self.pop_args(args.len());
        self.pending.push(app(decl.symbol(), args));
        Ok(())
    }

    fn encode_const_array(
        &mut self,
        sort: &'static Sort,
        init: &UnsafeTerm,
    ) -> Result<(), EncodeError> {
        self.encode(init)?;
        let init = self.pop_sexp();
        self.pending.push(sexp_l([
            sexp_l([atom_s("as"), atom_s("const"), sort_sexp(sort)]),
            init,
        ]));
        Ok(())
    }

    fn encode_array_select(
        &mut self,
        array: &UnsafeTerm,
        index: &UnsafeTerm,
    ) -> Result<(), EncodeError> {
        self.encode(array)?;
        self.encode(index)?;
        let args = self.pop_args(2);
        self.pending.push(app("select", args));
        Ok(())
    }

    fn encode_array_store(
        &mut self,
        array: &UnsafeTerm,
        index: &UnsafeTerm,
        value: &UnsafeTerm,
    ) -> Result<(), EncodeError> {
        self.encode(array)?;
        self.encode(index)?;
        self.encode(value)?;
        let args = self.pop_args(3);
        self.pending.push(app("store", args));
        Ok(())
    }

    fn encode_unary(
        &mut self,
        op: Opcode,
        sort: &'static Sort,
        arg: &UnsafeTerm,
    ) -> Result<(), EncodeError> {
        // negation is bvneg, not binary bvsub
        let name = if sort.is_bv() && op == Opcode::Sub {
            "bvneg"
        } else {
            op_name(op, sort)?
        };
        self.encode(arg)?;
        let arg = self.pop_sexp();
        self.pending.push(app(name, [arg]));
        Ok(())
    }

    fn encode_binary(
        &mut self,
        op: Opcode,
        _sort: &'static Sort,
        larg: &UnsafeTerm,
        rarg: &UnsafeTerm,
    ) -> Result<(), EncodeError> {
        let name = op_name(op, larg.sort())?;
        self.encode(larg)?;
        self.encode(rarg)?;
        let args = self.pop_args(2);
        self.pending.push(app(name, args));
        Ok(())
    }

    fn encode_nary(
        &mut self,
        op: Opcode,
        _sort: &'static Sort,
        args: &[UnsafeTerm],
    ) -> Result<(), EncodeError> {
        let name = op_name(op, args[0].sort())?;
        for arg in args {
            self.encode(arg)?;
        }
        let args = self.pop_args(args.len());
        self.pending.push(app(name, args));
        Ok(())
    }

    fn assert_encoded(&mut self, term: &UnsafeTerm) {
        let sexp = self.pop_sexp();
        debug!("assert {sexp}");
        let term = term.clone();
        self.top_frame().push(Assertion { term, sexp });
    }

    fn push(&mut self) {
        self.frames.push(Vec::new());
    }

    fn pop(&mut self) {
        assert!(self.frames.len() > 1, "cannot pop the base frame");
        self.frames.pop();
    }

    fn reset(&mut self) {
        self.frames.clear();
        self.frames.push(Vec::new());
        self.pending.clear();
    }

    fn check(&mut self) -> CheckResult {
        let assertions: Vec<UnsafeTerm> = self
            .frames
            .iter()
            .flatten()
            .map(|a| a.term.clone())
            .collect();
        if assertions.is_empty() {
            return CheckResult::Sat;
        }
        let (symbols, has_func) = self.free_symbols();
        if has_func {
            return CheckResult::Unknown;
        }
        let mut total: u128 = 1;
        for sort in symbols.values() {
            match domain_size(sort) {
                Some(size) => total *= size as u128,
                None => return CheckResult::Unknown,
            }
            if total > self.budget as u128 {
                return CheckResult::Unknown;
            }
        }
        debug!(
            "checking {} assertions over {} symbols, {total} assignments",
            assertions.len(),
            symbols.len()
        );
        let satisfied = |env: &Env| -> Result<bool, crate::eval::EvalError> {
            for assertion in &assertions {
                match eval(assertion, env)? {
                    Value::Bool(true) => continue,
                    _ => return Ok(false),
                }
            }
            Ok(true)
        };
        if symbols.is_empty() {
            return match satisfied(&Env::new()) {
                Ok(true) => CheckResult::Sat,
                Ok(false) => CheckResult::Unsat,
                Err(_) => CheckResult::Unknown,
            };
        }
        let vars: Vec<(&String, Vec<Value>)> = symbols
            .iter()
            .map(|(symbol, sort)| (symbol, domain(sort)))
            .collect();
        for assignment in vars
            .iter()
            .map(|(_, values)| values.iter())
            .multi_cartesian_product()
        {
            let env: Env = vars
                .iter()
                .zip(&assignment)
                .map(|((symbol, _), value)| ((*symbol).clone(), (*value).clone()))
                .collect();
            match satisfied(&env) {
                Ok(true) => return CheckResult::Sat,
                Ok(false) => continue,
                Err(_) => return CheckResult::Unknown,
            }
        }
        // every assignment over every finite domain falsified something
        CheckResult::Unsat
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use term::sorts::{Bool, Bv, Func, Int};
    use term::terms::{any, apply, implies, literal};
    use term::{Decl, Term};

    use test_log::test;

    fn backend() -> EnumBackend {
        let _ = pretty_env_logger::try_init();
        EnumBackend::new()
    }

    #[test]
    fn trivial_checks() {
        let mut solver = backend();
        assert_eq!(solver.check(), CheckResult::Sat);
        solver.add(literal::<Bool, _>(true)).unwrap();
        assert_eq!(solver.check(), CheckResult::Sat);
        solver.add(literal::<Bool, _>(false)).unwrap();
        assert_eq!(solver.check(), CheckResult::Unsat);
    }

    #[test]
    fn propositional_reasoning() {
        let mut solver = backend();
        let p: Term<Bool> = any("bk!p");
        let q: Term<Bool> = any("bk!q");
        solver.add(implies(&p, &q)).unwrap();
        solver.add(p.clone()).unwrap();
        assert_eq!(solver.check(), CheckResult::Sat);
        solver.add(!&q).unwrap();
        // p, p => q, !q has no model
        assert_eq!(solver.check(), CheckResult::Unsat);
    }

    #[test]
    fn bitvector_reasoning() {
        let mut solver = backend();
        let x: Term<Bv<u8>> = any("bk!x");
        solver.add((&x & 0x0fu8).equals(0x0au8)).unwrap();
        solver.add(x.gt(0xa0u8)).unwrap();
        assert_eq!(solver.check(), CheckResult::Sat);
        solver.add(x.lt(0x10u8)).unwrap();
        assert_eq!(solver.check(), CheckResult::Unsat);
    }

    #[test]
    fn signed_comparison_semantics() {
        let mut solver = backend();
        let x: Term<Bv<i8>> = any("bk!sx");
        // satisfiable only because comparison is signed
        solver.add(x.lt(-5i8)).unwrap();
        solver.add(x.not_equals(i8::MIN)).unwrap();
        assert_eq!(solver.check(), CheckResult::Sat);
    }

    #[test]
    fn push_pop_isolate_frames() {
        let mut solver = backend();
        let p: Term<Bool> = any("bk!fp");
        solver.add(p.clone()).unwrap();
        solver.push();
        solver.add(!&p).unwrap();
        assert_eq!(solver.check(), CheckResult::Unsat);
        solver.pop();
        assert_eq!(solver.check(), CheckResult::Sat);
    }

    #[test]
    #[should_panic]
    fn popping_the_base_frame_panics() {
        let mut solver = backend();
        solver.pop();
    }

    #[test]
    fn reset_clears_every_frame() {
        let mut solver = backend();
        let p: Term<Bool> = any("bk!rp");
        solver.add(p.clone()).unwrap();
        solver.push();
        solver.add(!&p).unwrap();
        assert_eq!(solver.check(), CheckResult::Unsat);
        solver.reset();
        assert_eq!(solver.check(), CheckResult::Sat);
        solver.add(p).unwrap();
        assert_eq!(solver.check(), CheckResult::Sat);
    }

    #[test]
    fn signedness_picks_the_operator_name() {
        let mut solver = backend();
        let s: Term<Bv<i8>> = any("bk!s");
        solver.add(s.lt(0i8)).unwrap();
        assert_eq!(
            solver.last_sexp().unwrap().to_string(),
            "(bvslt bk!s (_ bv0 8))"
        );
        let u: Term<Bv<u8>> = any("bk!u");
        solver.add(u.lt(1u8)).unwrap();
        assert_eq!(
            solver.last_sexp().unwrap().to_string(),
            "(bvult bk!u (_ bv1 8))"
        );
    }

    #[test]
    fn scripts_declare_symbols() {
        let mut solver = EnumBackend::with_logic(Logic::QfBv);
        let x: Term<Bv<u8>> = any("bk!sc");
        solver.add(x.equals(7u8)).unwrap();
        let script = solver.script();
        assert!(script.contains("(set-logic QF_BV)"));
        assert!(script.contains("(declare-const bk!sc (_ BitVec 8))"));
        assert!(script.contains("(assert (= bk!sc (_ bv7 8)))"));
        assert!(script.ends_with("(check-sat)"));
    }

    #[test]
    fn function_applications_are_unknown() {
        let mut solver = backend();
        let f = Decl::<Func<(Bool,), Bool>>::new("bk!f");
        let p: Term<Bool> = any("bk!fa");
        solver.add(apply(&f, p)).unwrap();
        assert_eq!(solver.check(), CheckResult::Unknown);
        // but the application still renders
        assert_eq!(solver.last_sexp().unwrap().to_string(), "(bk!f bk!fa)");
    }

    #[test]
    fn infinite_sorts_are_unknown() {
        let mut solver = backend();
        let n: Term<Int> = any("bk!n");
        solver.add(n.gt(0i64)).unwrap();
        assert_eq!(solver.check(), CheckResult::Unknown);
    }

    #[test]
    fn budget_overrun_is_unknown() {
        let mut solver = backend();
        solver.budget(16);
        let x: Term<Bv<u8>> = any("bk!bx");
        solver.add(x.equals(0u8)).unwrap();
        assert_eq!(solver.check(), CheckResult::Unknown);
        solver.budget(256);
        assert_eq!(solver.check(), CheckResult::Sat);
    }

    #[test]
    fn add_takes_any_boolean_form() {
        // owned terms, borrowed terms, and raw booleans all promote;
        // non-boolean terms are rejected by the type system, not at runtime
        let mut solver = backend();
        let p: Term<Bool> = any("bk!tb");
        solver.add(&p).unwrap();
        solver.add(p.clone()).unwrap();
        solver.add(true).unwrap();
        assert_eq!(solver.check(), CheckResult::Sat);
    }

    #[test]
    fn stats_account_encoded_nodes() {
        let mut solver = backend();
        let p: Term<Bool> = any("bk!stp");
        let q: Term<Bool> = any("bk!stq");
        solver.add(p.implies(&q)).unwrap();
        solver.add(term::distinct(&[p.clone(), q])).unwrap();
        let stats = solver.stats();
        assert_eq!(stats.constants, 4);
        assert_eq!(stats.binary_ops, 1);
        assert_eq!(stats.implications, 1);
        assert_eq!(stats.nary_ops, 1);
        assert_eq!(stats.disequalities, 1);
    }

    #[test]
    fn literal_round_trips() {
        // ground round trips need no enumeration, so every width fits
        macro_rules! round_trip {
            ($solver:expr, $ty:ty, $value:expr) => {
                $solver
                    .add(literal::<Bv<$ty>, _>($value).equals($value))
                    .unwrap();
                $solver.push();
                $solver
                    .add(literal::<Bv<$ty>, _>($value).not_equals($value))
                    .unwrap();
                assert_eq!($solver.check(), CheckResult::Unsat);
                $solver.pop();
            };
        }
        let mut solver = backend();
        solver.add(literal::<Bool, _>(true).equals(true)).unwrap();
        round_trip!(solver, u8, 0xabu8);
        round_trip!(solver, i8, -3i8);
        round_trip!(solver, u16, 0xbeefu16);
        round_trip!(solver, i16, i16::MIN);
        round_trip!(solver, u32, 0xdead_beefu32);
        round_trip!(solver, i32, -1i32);
        round_trip!(solver, u64, u64::MAX);
        round_trip!(solver, i64, i64::MIN);
        assert_eq!(solver.check(), CheckResult::Sat);
    }

    #[test]
    fn equal_declarations_are_the_same_variable() {
        let mut solver = backend();
        let a: Term<Bv<u8>> = term::constant(&Decl::new("bk!same"));
        let b: Term<Bv<u8>> = term::constant(&Decl::new("bk!same"));
        solver.add(a.not_equals(&b)).unwrap();
        assert_eq!(solver.check(), CheckResult::Unsat);
        solver.reset();
        let c: Term<Bv<u8>> = any("bk!other");
        solver.add(a.not_equals(&c)).unwrap();
        assert_eq!(solver.check(), CheckResult::Sat);
    }

    #[test]
    fn distinct_semantics() {
        let mut solver = backend();
        let terms: Vec<Term<Bv<u8>>> =
            vec![any("bk!d1"), any("bk!d2"), literal::<Bv<u8>, _>(0u8)];
        solver.add(term::distinct(&terms)).unwrap();
        assert_eq!(solver.check(), CheckResult::Sat);
        solver.push();
        solver.add(terms[0].equals(&terms[1])).unwrap();
        assert_eq!(solver.check(), CheckResult::Unsat);
        solver.pop();
        assert_eq!(solver.check(), CheckResult::Sat);
    }

    #[test]
    fn select_store_law_over_free_symbols() {
        let mut solver = backend();
        let a = term::const_array::<Bv<u8>, Bv<u8>>(literal::<Bv<u8>, _>(0u8));
        let i: Term<Bv<u8>> = any("bk!ai");
        let v: Term<Bv<u8>> = any("bk!av");
        let read_back = a.store(&i, &v).select(&i);
        solver.add(read_back.not_equals(&v)).unwrap();
        assert_eq!(solver.check(), CheckResult::Unsat);
    }

    #[test]
    fn stores_elsewhere_leave_other_indices_unconstrained() {
        // reading a stored array at an index distinct from the store's
        // constrains nothing: both polarities have a model
        let mut solver = backend();
        let default: Term<Bv<u8>> = any("bk!ed");
        let j: Term<Bv<u8>> = any("bk!ej");
        let a = term::const_array::<Bv<u8>, Bv<u8>>(&default);
        let v = literal::<Bv<u8>, _>(7u8);
        let read = a.store(0u8, &v).select(&j);
        solver.add(j.not_equals(0u8)).unwrap();
        solver.push();
        solver.add(read.equals(&v)).unwrap();
        assert_eq!(solver.check(), CheckResult::Sat);
        solver.pop();
        solver.add(read.not_equals(&v)).unwrap();
        assert_eq!(solver.check(), CheckResult::Sat);
    }

    #[test]
    fn unsafe_add_has_no_sort_guard() {
        let mut solver = backend();
        let p: Term<Bool> = any("bk!up");
        solver.unsafe_add(&p.to_unsafe()).unwrap();
        assert_eq!(solver.check(), CheckResult::Sat);
    }

    #[test]
    fn unsupported_operator_reports_its_opcode() {
        let mut solver = backend();
        let p: Term<Bool> = any("bk!bad");
        // remainder has no boolean encoding
        let bad = term::UnsafeTerm::binary(
            term::sorts::bool_sort(),
            Opcode::Rem,
            p.to_unsafe(),
            p.to_unsafe(),
        );
        assert_eq!(
            solver.unsafe_add(&bad).unwrap_err(),
            EncodeError::Opcode(Opcode::Rem)
        );
    }
}
