// Copyright 2022-2023 VMware, Inc.
// SPDX-License-Identifier: BSD-2-Clause

//! Expression nodes: the closed set of DAG node kinds, their operator tags,
//! and primitive literal payloads.
//!
//! Nodes are immutable once built and reachable only through shared term
//! handles, so the expression graph is a DAG by construction: a node can
//! only reference terms that already exist, which rules out cycles.

use serde::Serialize;
use std::fmt;

use crate::decl::UnsafeDecl;
use crate::sorts::{bool_sort, Sort};
use crate::terms::UnsafeTerm;

/// Operator tag for unary, binary, and n-ary nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Opcode {
    /// Logical negation `!`
    Lnot,
    /// Bitwise complement `~`
    Not,
    /// Negation or subtraction `-`
    Sub,
    /// Bitwise and `&`
    And,
    /// Bitwise or `|`
    Or,
    /// Bitwise xor `^`
    Xor,
    /// Conjunction `&&`
    Land,
    /// Disjunction `||`
    Lor,
    /// Logical implication
    Imp,
    /// Equality `==`
    Eql,
    /// Addition `+`
    Add,
    /// Multiplication `*`
    Mul,
    /// Division `/`
    Quo,
    /// Remainder `%`
    Rem,
    /// Less-than `<`
    Lss,
    /// Greater-than `>`
    Gtr,
    /// Disequality `!=`; as an n-ary operator, pairwise distinctness
    Neq,
    /// Less-or-equal `<=`
    Leq,
    /// Greater-or-equal `>=`
    Geq,
}

impl Opcode {
    /// Operators that always yield a boolean result.
    pub fn is_relational(self) -> bool {
        matches!(
            self,
            Opcode::Eql | Opcode::Neq | Opcode::Lss | Opcode::Gtr | Opcode::Leq | Opcode::Geq
        )
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Opcode::Lnot => "!",
            Opcode::Not => "~",
            Opcode::Sub => "-",
            Opcode::And => "&",
            Opcode::Or => "|",
            Opcode::Xor => "^",
            Opcode::Land => "&&",
            Opcode::Lor => "||",
            Opcode::Imp => "=>",
            Opcode::Eql => "==",
            Opcode::Add => "+",
            Opcode::Mul => "*",
            Opcode::Quo => "/",
            Opcode::Rem => "%",
            Opcode::Lss => "<",
            Opcode::Gtr => ">",
            Opcode::Neq => "!=",
            Opcode::Leq => "<=",
            Opcode::Geq => ">=",
        };
        write!(f, "{symbol}")
    }
}

/// The kind tag of an expression node.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ExprKind {
    Literal,
    Unary,
    Binary,
    Nary,
    ConstArray,
    ArraySelect,
    ArrayStore,
    Constant,
    FuncApp,
}

/// A primitive literal payload.
///
/// The payload type is independent of the literal's sort: an integer scalar
/// may serve as an `Int`, `Real`, or bit-vector literal, in which case it is
/// truncated to the declared width when encoded.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Scalar {
    Bool(bool),
    I8(i8),
    U8(u8),
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
}

impl Scalar {
    /// The payload widened to a signed 128-bit integer; `true` is 1.
    pub fn as_i128(self) -> i128 {
        match self {
            Scalar::Bool(b) => b as i128,
            Scalar::I8(v) => v as i128,
            Scalar::U8(v) => v as i128,
            Scalar::I16(v) => v as i128,
            Scalar::U16(v) => v as i128,
            Scalar::I32(v) => v as i128,
            Scalar::U32(v) => v as i128,
            Scalar::I64(v) => v as i128,
            Scalar::U64(v) => v as i128,
        }
    }

    /// The boolean payload, if this is a boolean scalar.
    pub fn as_bool(self) -> Option<bool> {
        match self {
            Scalar::Bool(b) => Some(b),
            _ => None,
        }
    }
}

macro_rules! scalar_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {$(
        impl From<$ty> for Scalar {
            fn from(value: $ty) -> Self {
                Scalar::$variant(value)
            }
        }
    )*};
}

scalar_from! {
    bool => Bool,
    i8 => I8,
    u8 => U8,
    i16 => I16,
    u16 => U16,
    i32 => I32,
    u32 => U32,
    i64 => I64,
    u64 => U64,
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{b}"),
            _ => write!(f, "{}", self.as_i128()),
        }
    }
}

/// An expression node: one of the nine closed node kinds.
///
/// Operands are held as shared term handles, so the same child node may be
/// referenced by multiple parents. Where the original sort is not derivable
/// from the operands alone, the node stores it explicitly.
#[allow(missing_docs)]
#[derive(Debug)]
pub enum Expr {
    /// A primitive literal of the given sort.
    Literal { sort: &'static Sort, value: Scalar },
    /// A free constant wrapping its declaration.
    Constant { decl: UnsafeDecl },
    /// An applied unary operator.
    Unary {
        op: Opcode,
        sort: &'static Sort,
        arg: UnsafeTerm,
    },
    /// An applied binary operator.
    Binary {
        op: Opcode,
        sort: &'static Sort,
        larg: UnsafeTerm,
        rarg: UnsafeTerm,
    },
    /// An applied n-ary operator; never has zero operands.
    Nary {
        op: Opcode,
        sort: &'static Sort,
        args: Vec<UnsafeTerm>,
    },
    /// An array mapping every index to `init`.
    ConstArray {
        sort: &'static Sort,
        init: UnsafeTerm,
    },
    /// A read of `array` at `index`.
    ArraySelect { array: UnsafeTerm, index: UnsafeTerm },
    /// A functional update of `array` at `index` with `value`.
    ArrayStore {
        array: UnsafeTerm,
        index: UnsafeTerm,
        value: UnsafeTerm,
    },
    /// An application of the function declared by `decl` to `args`.
    FuncApp {
        decl: UnsafeDecl,
        args: Vec<UnsafeTerm>,
    },
}

impl Expr {
    /// The kind tag of this node.
    pub fn kind(&self) -> ExprKind {
        match self {
            Expr::Literal { .. } => ExprKind::Literal,
            Expr::Constant { .. } => ExprKind::Constant,
            Expr::Unary { .. } => ExprKind::Unary,
            Expr::Binary { .. } => ExprKind::Binary,
            Expr::Nary { .. } => ExprKind::Nary,
            Expr::ConstArray { .. } => ExprKind::ConstArray,
            Expr::ArraySelect { .. } => ExprKind::ArraySelect,
            Expr::ArrayStore { .. } => ExprKind::ArrayStore,
            Expr::FuncApp { .. } => ExprKind::FuncApp,
        }
    }

    /// The result sort of this node.
    ///
    /// Select, store, constant, and function application derive their sort
    /// from their operands and declarations; the remaining kinds store it.
    pub fn sort(&self) -> &'static Sort {
        match self {
            Expr::Literal { sort, .. } => *sort,
            Expr::Constant { decl } => decl.sort(),
            Expr::Unary { sort, .. } => *sort,
            Expr::Binary { sort, .. } => *sort,
            Expr::Nary { sort, .. } => *sort,
            Expr::ConstArray { sort, .. } => *sort,
            Expr::ArraySelect { array, .. } => array.sort().sorts(1),
            Expr::ArrayStore { array, .. } => array.sort(),
            Expr::FuncApp { decl, args } => decl.sort().sorts(args.len()),
        }
    }

    /// A distinct (e.g. pairwise-disequality) node is an n-ary [`Opcode::Neq`]
    /// whose result sort is boolean.
    pub fn is_distinct(&self) -> bool {
        matches!(
            self,
            Expr::Nary {
                op: Opcode::Neq,
                sort,
                ..
            } if std::ptr::eq(*sort, bool_sort())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorts::{int_sort, Array, Int, Sorted};
    use crate::terms::UnsafeTerm;

    #[test]
    fn derived_sorts() {
        let array_sort = Array::<Int, Int>::sort();
        let zero = UnsafeTerm::literal(int_sort(), Scalar::I64(0));
        let arr = UnsafeTerm::const_array(array_sort, zero.clone());
        let sel = UnsafeTerm::select(arr.clone(), zero.clone());
        assert!(std::ptr::eq(sel.sort(), int_sort()));
        let st = UnsafeTerm::store(arr, zero.clone(), zero);
        assert!(std::ptr::eq(st.sort(), array_sort));
        assert_eq!(st.kind(), ExprKind::ArrayStore);
    }

    #[test]
    fn scalar_widening() {
        assert_eq!(Scalar::I8(-1).as_i128(), -1);
        assert_eq!(Scalar::U64(u64::MAX).as_i128(), u64::MAX as i128);
        assert_eq!(Scalar::Bool(true).as_i128(), 1);
        assert_eq!(Scalar::Bool(false).as_bool(), Some(false));
        assert_eq!(Scalar::U8(3).as_bool(), None);
    }
}
