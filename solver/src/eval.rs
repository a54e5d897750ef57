// Copyright 2022-2023 VMware, Inc.
// SPDX-License-Identifier: BSD-2-Clause

//! Evaluation of ground terms under an assignment to their free constants.
//!
//! Values mirror the evaluable sorts: booleans, mathematical integers
//! (approximated by `i128`, with overflow reported rather than wrapped),
//! bit-vectors as raw bits plus width and signedness, and arrays as a
//! default value plus a normalized map of updates. Normalization removes
//! updates that re-store the default, so structural value equality is
//! semantic array equality.

use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

use term::expr::{Expr, Opcode, Scalar};
use term::sorts::Sort;
use term::UnsafeTerm;

/// An assignment of values to constant symbols.
pub type Env = HashMap<String, Value>;

/// A ground value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Value {
    /// A boolean.
    Bool(bool),
    /// A mathematical integer or real (reals are restricted to integers
    /// here; evaluation is a testing aid, not a decision procedure).
    Int(i128),
    /// A bit-vector: raw bits, width, and whether comparisons are signed.
    Bv {
        /// The bits, zero-extended to 64; bits above `width` are zero.
        bits: u64,
        /// Width in bits, at most 64.
        width: usize,
        /// Signedness, for comparisons and division.
        signed: bool,
    },
    /// An array: a default plus updates that differ from it.
    Array {
        /// Value at every index without an update.
        default: Box<Value>,
        /// Index-to-value updates; never maps an index to the default.
        updates: BTreeMap<Value, Value>,
    },
}

impl Value {
    /// A bit-vector value with the bits truncated to `width`.
    pub fn bv(bits: i128, width: usize, signed: bool) -> Value {
        Value::Bv {
            bits: bits as u64 & mask(width),
            width,
            signed,
        }
    }

    /// The numeric magnitude: the integer itself, or the bit-vector's value
    /// under its signedness.
    fn numeric(&self) -> Result<i128, EvalError> {
        match self {
            Value::Int(i) => Ok(*i),
            Value::Bv {
                bits,
                width,
                signed,
            } => {
                let raw = *bits as i128;
                if *signed && *width < 64 && bits >> (width - 1) & 1 == 1 {
                    Ok(raw - (1i128 << width))
                } else if *signed && *width == 64 {
                    Ok(*bits as i64 as i128)
                } else {
                    Ok(raw)
                }
            }
            _ => Err(EvalError::SortMismatch("expected a numeric value")),
        }
    }

    fn truth(&self) -> Result<bool, EvalError> {
        match self {
            Value::Bool(b) => Ok(*b),
            _ => Err(EvalError::SortMismatch("expected a boolean value")),
        }
    }
}

fn mask(width: usize) -> u64 {
    if width >= 64 {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

/// Error from evaluating a term.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A constant has no value in the environment.
    #[error("unbound symbol {0:?}")]
    Unbound(String),
    /// Uninterpreted functions have no evaluation.
    #[error("uninterpreted function {0:?} cannot be evaluated")]
    Uninterpreted(String),
    /// An operand had the wrong shape for its operator.
    #[error("sort mismatch: {0}")]
    SortMismatch(&'static str),
    /// Integer division or remainder by zero.
    #[error("division by zero")]
    DivisionByZero,
    /// Mathematical integer arithmetic exceeded the evaluator's range.
    #[error("arithmetic overflow")]
    Overflow,
    /// The operator has no evaluation at the sort it was applied at.
    #[error("operator {0} cannot be evaluated here")]
    Opcode(Opcode),
}

fn scalar_value(sort: &Sort, value: Scalar) -> Result<Value, EvalError> {
    if sort.is_bool() {
        value
            .as_bool()
            .map(Value::Bool)
            .ok_or(EvalError::SortMismatch("boolean literal"))
    } else if sort.is_bv() {
        Ok(Value::bv(value.as_i128(), sort.bv_size(), sort.is_signed()))
    } else if sort.is_int() || sort.is_real() {
        match value {
            Scalar::Bool(_) => Err(EvalError::SortMismatch("numeric literal")),
            _ => Ok(Value::Int(value.as_i128())),
        }
    } else {
        Err(EvalError::SortMismatch("literal at a non-primitive sort"))
    }
}

/// Evaluate a ground term under `env`.
pub fn eval(term: &UnsafeTerm, env: &Env) -> Result<Value, EvalError> {
    match term.expr() {
        Expr::Literal { sort, value } => scalar_value(sort, *value),
        Expr::Constant { decl } => env
            .get(decl.symbol())
            .cloned()
            .ok_or_else(|| EvalError::Unbound(decl.symbol().to_string())),
        Expr::FuncApp { decl, .. } => Err(EvalError::Uninterpreted(decl.symbol().to_string())),
        Expr::ConstArray { init, .. } => Ok(Value::Array {
            default: Box::new(eval(init, env)?),
            updates: BTreeMap::new(),
        }),
        Expr::ArraySelect { array, index } => match eval(array, env)? {
            Value::Array { default, updates } => {
                let index = eval(index, env)?;
                Ok(updates.get(&index).cloned().unwrap_or(*default))
            }
            _ => Err(EvalError::SortMismatch("select on a non-array")),
        },
        Expr::ArrayStore {
            array,
            index,
            value,
        } => match eval(array, env)? {
            Value::Array {
                default,
                mut updates,
            } => {
                let index = eval(index, env)?;
                let value = eval(value, env)?;
                // keep arrays normalized so Eql stays semantic
                if value == *default {
                    updates.remove(&index);
                } else {
                    updates.insert(index, value);
                }
                Ok(Value::Array { default, updates })
            }
            _ => Err(EvalError::SortMismatch("store on a non-array")),
        },
        Expr::Unary { op, arg, .. } => {
            let arg = eval(arg, env)?;
            match (op, arg) {
                (Opcode::Lnot, arg) => Ok(Value::Bool(!arg.truth()?)),
                (
                    Opcode::Not,
                    Value::Bv {
                        bits,
                        width,
                        signed,
                    },
                ) => Ok(Value::Bv {
                    bits: !bits & mask(width),
                    width,
                    signed,
                }),
                (
                    Opcode::Sub,
                    Value::Bv {
                        bits,
                        width,
                        signed,
                    },
                ) => Ok(Value::bv((bits as i128).wrapping_neg(), width, signed)),
                (Opcode::Sub, Value::Int(i)) => {
                    i.checked_neg().map(Value::Int).ok_or(EvalError::Overflow)
                }
                (op, _) => Err(EvalError::Opcode(*op)),
            }
        }
        Expr::Binary {
            op, larg, rarg, ..
        } => {
            let l = eval(larg, env)?;
            let r = eval(rarg, env)?;
            binary(*op, l, r)
        }
        Expr::Nary { op, args, .. } => {
            let values = args
                .iter()
                .map(|arg| eval(arg, env))
                .collect::<Result<Vec<_>, _>>()?;
            if *op == Opcode::Neq {
                // n-ary disequality means pairwise distinctness
                for (i, l) in values.iter().enumerate() {
                    for r in &values[i + 1..] {
                        if l == r {
                            return Ok(Value::Bool(false));
                        }
                    }
                }
                return Ok(Value::Bool(true));
            }
            let mut values = values.into_iter();
            let first = values.next().ok_or(EvalError::SortMismatch(
                "n-ary operator without operands",
            ))?;
            values.try_fold(first, |acc, value| binary(*op, acc, value))
        }
    }
}

fn binary(op: Opcode, l: Value, r: Value) -> Result<Value, EvalError> {
    match op {
        Opcode::Land => Ok(Value::Bool(l.truth()? && r.truth()?)),
        Opcode::Lor => Ok(Value::Bool(l.truth()? || r.truth()?)),
        Opcode::Imp => Ok(Value::Bool(!l.truth()? || r.truth()?)),
        Opcode::Eql => Ok(Value::Bool(l == r)),
        Opcode::Neq => Ok(Value::Bool(l != r)),
        Opcode::Lss => Ok(Value::Bool(l.numeric()? < r.numeric()?)),
        Opcode::Leq => Ok(Value::Bool(l.numeric()? <= r.numeric()?)),
        Opcode::Gtr => Ok(Value::Bool(l.numeric()? > r.numeric()?)),
        Opcode::Geq => Ok(Value::Bool(l.numeric()? >= r.numeric()?)),
        Opcode::Xor => match (&l, &r) {
            (Value::Bool(a), Value::Bool(b)) => Ok(Value::Bool(a != b)),
            _ => bv_bits(op, l, r),
        },
        Opcode::And | Opcode::Or => bv_bits(op, l, r),
        Opcode::Add | Opcode::Sub | Opcode::Mul | Opcode::Quo | Opcode::Rem => match &l {
            Value::Bv { width, signed, .. } => {
                let (width, signed) = (*width, *signed);
                let a = l.numeric()?;
                let b = r.numeric()?;
                let result = match op {
                    Opcode::Add => a.wrapping_add(b),
                    Opcode::Sub => a.wrapping_sub(b),
                    Opcode::Mul => a.wrapping_mul(b),
                    Opcode::Quo | Opcode::Rem => {
                        if b == 0 {
                            return Err(EvalError::DivisionByZero);
                        }
                        if op == Opcode::Quo {
                            a / b
                        } else {
                            a % b
                        }
                    }
                    _ => unreachable!(),
                };
                Ok(Value::bv(result, width, signed))
            }
            Value::Int(_) => {
                let a = l.numeric()?;
                let b = r.numeric()?;
                let result = match op {
                    Opcode::Add => a.checked_add(b),
                    Opcode::Sub => a.checked_sub(b),
                    Opcode::Mul => a.checked_mul(b),
                    Opcode::Quo | Opcode::Rem => {
                        if b == 0 {
                            return Err(EvalError::DivisionByZero);
                        }
                        if op == Opcode::Quo {
                            a.checked_div(b)
                        } else {
                            a.checked_rem(b)
                        }
                    }
                    _ => unreachable!(),
                };
                result.map(Value::Int).ok_or(EvalError::Overflow)
            }
            _ => Err(EvalError::SortMismatch("arithmetic on a non-numeric value")),
        },
        _ => Err(EvalError::Opcode(op)),
    }
}

fn bv_bits(op: Opcode, l: Value, r: Value) -> Result<Value, EvalError> {
    match (l, r) {
        (
            Value::Bv {
                bits: a,
                width,
                signed,
            },
            Value::Bv { bits: b, .. },
        ) => {
            let bits = match op {
                Opcode::And => a & b,
                Opcode::Or => a | b,
                Opcode::Xor => a ^ b,
                _ => return Err(EvalError::Opcode(op)),
            };
            Ok(Value::Bv {
                bits: bits & mask(width),
                width,
                signed,
            })
        }
        _ => Err(EvalError::SortMismatch("bitwise operator on a non-bit-vector")),
    }
}
