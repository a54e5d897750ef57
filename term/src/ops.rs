// Copyright 2022-2023 VMware, Inc.
// SPDX-License-Identifier: BSD-2-Clause

//! Operator overloads and relational methods over term handles.
//!
//! The typed surface overloads the standard arithmetic and bitwise operator
//! traits on `Term<T>`, accepting anything [`IntoTerm<T>`] on the right so
//! primitive values promote to literals. `&&` and `||` cannot be overloaded
//! in Rust, so conjunction and disjunction ride on `&` and `|` for boolean
//! terms, and relational operators become methods (`lt`, `le`, ...), since
//! the comparison traits must return `bool`.
//!
//! The untyped surface accepts any [`Operand`] (a term or a primitive value)
//! on either side; a primitive value is promoted to a literal of the *other*
//! operand's sort.

use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Rem, Sub};

use crate::expr::{Expr, Opcode, Scalar};
use crate::sorts::{bool_sort, Bool, Bv, BvScalar, Int, Real, Sorted};
use crate::terms::{literal, IntoTerm, Term, UnsafeTerm};

/// Sorts admitting arithmetic and order comparisons: `Int`, `Real`, and
/// every bit-vector sort.
pub trait ArithSort: Sorted {}

impl ArithSort for Int {}
impl ArithSort for Real {}
impl<U: BvScalar> ArithSort for Bv<U> {}

fn binop<T: Sorted>(op: Opcode, larg: UnsafeTerm, rarg: UnsafeTerm) -> Term<T> {
    Term::wrap(Expr::Binary {
        op,
        sort: T::sort(),
        larg,
        rarg,
    })
}

fn unop<T: Sorted>(op: Opcode, arg: UnsafeTerm) -> Term<T> {
    Term::wrap(Expr::Unary {
        op,
        sort: T::sort(),
        arg,
    })
}

// Binary operator with a term on the left. The right-hand side may be a
// term, a borrowed term, or a primitive value.
macro_rules! term_binop {
    ($trait:ident, $method:ident, $op:ident, $bound:ident) => {
        impl<T: $bound, V: IntoTerm<T>> $trait<V> for Term<T> {
            type Output = Term<T>;
            fn $method(self, rhs: V) -> Term<T> {
                binop(Opcode::$op, self.into(), rhs.into_term().into())
            }
        }

        impl<T: $bound, V: IntoTerm<T>> $trait<V> for &Term<T> {
            type Output = Term<T>;
            fn $method(self, rhs: V) -> Term<T> {
                binop(Opcode::$op, self.into(), rhs.into_term().into())
            }
        }
    };
}

term_binop!(Add, add, Add, ArithSort);
term_binop!(Sub, sub, Sub, ArithSort);
term_binop!(Mul, mul, Mul, ArithSort);
term_binop!(Div, div, Quo, ArithSort);
term_binop!(Rem, rem, Rem, ArithSort);

// Bitwise operators are restricted to bit-vector terms.
macro_rules! bv_binop {
    ($trait:ident, $method:ident, $op:ident) => {
        impl<U: BvScalar, V: IntoTerm<Bv<U>>> $trait<V> for Term<Bv<U>> {
            type Output = Term<Bv<U>>;
            fn $method(self, rhs: V) -> Term<Bv<U>> {
                binop(Opcode::$op, self.into(), rhs.into_term().into())
            }
        }

        impl<U: BvScalar, V: IntoTerm<Bv<U>>> $trait<V> for &Term<Bv<U>> {
            type Output = Term<Bv<U>>;
            fn $method(self, rhs: V) -> Term<Bv<U>> {
                binop(Opcode::$op, self.into(), rhs.into_term().into())
            }
        }
    };
}

bv_binop!(BitAnd, bitand, And);
bv_binop!(BitOr, bitor, Or);
bv_binop!(BitXor, bitxor, Xor);

// On boolean terms `&` and `|` stand for conjunction and disjunction.
macro_rules! bool_binop {
    ($trait:ident, $method:ident, $op:ident) => {
        impl<V: IntoTerm<Bool>> $trait<V> for Term<Bool> {
            type Output = Term<Bool>;
            fn $method(self, rhs: V) -> Term<Bool> {
                binop(Opcode::$op, self.into(), rhs.into_term().into())
            }
        }

        impl<V: IntoTerm<Bool>> $trait<V> for &Term<Bool> {
            type Output = Term<Bool>;
            fn $method(self, rhs: V) -> Term<Bool> {
                binop(Opcode::$op, self.into(), rhs.into_term().into())
            }
        }

        impl $trait<Term<Bool>> for bool {
            type Output = Term<Bool>;
            fn $method(self, rhs: Term<Bool>) -> Term<Bool> {
                binop(Opcode::$op, literal::<Bool, bool>(self).into(), rhs.into())
            }
        }

        impl $trait<&Term<Bool>> for bool {
            type Output = Term<Bool>;
            fn $method(self, rhs: &Term<Bool>) -> Term<Bool> {
                binop(Opcode::$op, literal::<Bool, bool>(self).into(), rhs.into())
            }
        }
    };
}

bool_binop!(BitAnd, bitand, Land);
bool_binop!(BitOr, bitor, Lor);
bool_binop!(BitXor, bitxor, Xor);

// Operator impls with a primitive value on the left. Coherence requires a
// concrete Self type here, so these are spelled out per scalar type.
macro_rules! scalar_lhs_impl {
    ($ty:ty, $sort:ty, $trait:ident, $method:ident, $op:ident) => {
        impl $trait<Term<$sort>> for $ty {
            type Output = Term<$sort>;
            fn $method(self, rhs: Term<$sort>) -> Term<$sort> {
                binop(Opcode::$op, literal::<$sort, $ty>(self).into(), rhs.into())
            }
        }

        impl $trait<&Term<$sort>> for $ty {
            type Output = Term<$sort>;
            fn $method(self, rhs: &Term<$sort>) -> Term<$sort> {
                binop(Opcode::$op, literal::<$sort, $ty>(self).into(), rhs.into())
            }
        }
    };
}

macro_rules! scalar_lhs_arith {
    ($ty:ty, $trait:ident, $method:ident, $op:ident) => {
        scalar_lhs_impl!($ty, Int, $trait, $method, $op);
        scalar_lhs_impl!($ty, Real, $trait, $method, $op);
        scalar_lhs_impl!($ty, Bv<$ty>, $trait, $method, $op);
    };
}

macro_rules! scalar_lhs {
    ($($ty:ty),* $(,)?) => {$(
        scalar_lhs_arith!($ty, Add, add, Add);
        scalar_lhs_arith!($ty, Sub, sub, Sub);
        scalar_lhs_arith!($ty, Mul, mul, Mul);
        scalar_lhs_arith!($ty, Div, div, Quo);
        scalar_lhs_arith!($ty, Rem, rem, Rem);
        scalar_lhs_impl!($ty, Bv<$ty>, BitAnd, bitand, And);
        scalar_lhs_impl!($ty, Bv<$ty>, BitOr, bitor, Or);
        scalar_lhs_impl!($ty, Bv<$ty>, BitXor, bitxor, Xor);
    )*};
}

scalar_lhs!(i8, u8, i16, u16, i32, u32, i64, u64);

impl<T: ArithSort> Neg for Term<T> {
    type Output = Term<T>;
    fn neg(self) -> Term<T> {
        unop(Opcode::Sub, self.into())
    }
}

impl<T: ArithSort> Neg for &Term<T> {
    type Output = Term<T>;
    fn neg(self) -> Term<T> {
        unop(Opcode::Sub, self.into())
    }
}

impl Not for Term<Bool> {
    type Output = Term<Bool>;
    fn not(self) -> Term<Bool> {
        unop(Opcode::Lnot, self.into())
    }
}

impl Not for &Term<Bool> {
    type Output = Term<Bool>;
    fn not(self) -> Term<Bool> {
        unop(Opcode::Lnot, self.into())
    }
}

impl<U: BvScalar> Not for Term<Bv<U>> {
    type Output = Term<Bv<U>>;
    fn not(self) -> Term<Bv<U>> {
        unop(Opcode::Not, self.into())
    }
}

impl<U: BvScalar> Not for &Term<Bv<U>> {
    type Output = Term<Bv<U>>;
    fn not(self) -> Term<Bv<U>> {
        unop(Opcode::Not, self.into())
    }
}

impl<T: Sorted> Term<T> {
    /// `self == other`, at any sort.
    pub fn equals(&self, other: impl IntoTerm<T>) -> Term<Bool> {
        binop(Opcode::Eql, self.into(), other.into_term().into())
    }

    /// `self != other`, at any sort.
    pub fn not_equals(&self, other: impl IntoTerm<T>) -> Term<Bool> {
        binop(Opcode::Neq, self.into(), other.into_term().into())
    }
}

impl<T: ArithSort> Term<T> {
    /// `self < other`.
    pub fn lt(&self, other: impl IntoTerm<T>) -> Term<Bool> {
        binop(Opcode::Lss, self.into(), other.into_term().into())
    }

    /// `self <= other`.
    pub fn le(&self, other: impl IntoTerm<T>) -> Term<Bool> {
        binop(Opcode::Leq, self.into(), other.into_term().into())
    }

    /// `self > other`.
    pub fn gt(&self, other: impl IntoTerm<T>) -> Term<Bool> {
        binop(Opcode::Gtr, self.into(), other.into_term().into())
    }

    /// `self >= other`.
    pub fn ge(&self, other: impl IntoTerm<T>) -> Term<Bool> {
        binop(Opcode::Geq, self.into(), other.into_term().into())
    }
}

impl Term<Bool> {
    /// Conjunction; equivalent to `self & other`.
    pub fn and(&self, other: impl IntoTerm<Bool>) -> Term<Bool> {
        binop(Opcode::Land, self.into(), other.into_term().into())
    }

    /// Disjunction; equivalent to `self | other`.
    pub fn or(&self, other: impl IntoTerm<Bool>) -> Term<Bool> {
        binop(Opcode::Lor, self.into(), other.into_term().into())
    }

    /// Implication, kept as a binary node rather than expanded.
    pub fn implies(&self, other: impl IntoTerm<Bool>) -> Term<Bool> {
        binop(Opcode::Imp, self.into(), other.into_term().into())
    }
}

/// An operand of an untyped operator application: either a term or a
/// primitive value awaiting promotion.
#[derive(Debug, Clone)]
pub enum Operand {
    /// An untyped term.
    Term(UnsafeTerm),
    /// A primitive value; promoted to a literal of the other operand's sort.
    Scalar(Scalar),
}

impl From<UnsafeTerm> for Operand {
    fn from(term: UnsafeTerm) -> Self {
        Operand::Term(term)
    }
}

impl From<&UnsafeTerm> for Operand {
    fn from(term: &UnsafeTerm) -> Self {
        Operand::Term(term.clone())
    }
}

macro_rules! operand_from_scalar {
    ($($ty:ty),* $(,)?) => {$(
        impl From<$ty> for Operand {
            fn from(value: $ty) -> Self {
                Operand::Scalar(value.into())
            }
        }
    )*};
}

operand_from_scalar!(bool, i8, u8, i16, u16, i32, u32, i64, u64);

// Resolve two operands into terms, promoting a scalar to a literal of the
// other operand's sort. At least one operand must already be a term.
fn resolve(larg: Operand, rarg: Operand) -> (UnsafeTerm, UnsafeTerm) {
    match (larg, rarg) {
        (Operand::Term(l), Operand::Term(r)) => (l, r),
        (Operand::Term(l), Operand::Scalar(s)) => {
            let r = UnsafeTerm::literal(l.sort(), s);
            (l, r)
        }
        (Operand::Scalar(s), Operand::Term(r)) => {
            let l = UnsafeTerm::literal(r.sort(), s);
            (l, r)
        }
        (Operand::Scalar(_), Operand::Scalar(_)) => {
            panic!("at least one operand must be a term")
        }
    }
}

fn unsafe_binop(op: Opcode, larg: Operand, rarg: Operand) -> UnsafeTerm {
    let (l, r) = resolve(larg, rarg);
    let sort = if op.is_relational() || matches!(op, Opcode::Land | Opcode::Lor | Opcode::Imp) {
        bool_sort()
    } else {
        l.sort()
    };
    UnsafeTerm::binary(sort, op, l, r)
}

// `&` and `|` on untyped terms pick the logical or bitwise operator by the
// runtime sort of the operands.
fn unsafe_bitop(bit: Opcode, logic: Opcode, larg: Operand, rarg: Operand) -> UnsafeTerm {
    let (l, r) = resolve(larg, rarg);
    let op = if l.sort().is_bool() { logic } else { bit };
    let sort = l.sort();
    UnsafeTerm::binary(sort, op, l, r)
}

macro_rules! unsafe_arith {
    ($trait:ident, $method:ident, $op:ident) => {
        impl<V: Into<Operand>> $trait<V> for UnsafeTerm {
            type Output = UnsafeTerm;
            fn $method(self, rhs: V) -> UnsafeTerm {
                unsafe_binop(Opcode::$op, self.into(), rhs.into())
            }
        }

        impl<V: Into<Operand>> $trait<V> for &UnsafeTerm {
            type Output = UnsafeTerm;
            fn $method(self, rhs: V) -> UnsafeTerm {
                unsafe_binop(Opcode::$op, self.into(), rhs.into())
            }
        }
    };
}

unsafe_arith!(Add, add, Add);
unsafe_arith!(Sub, sub, Sub);
unsafe_arith!(Mul, mul, Mul);
unsafe_arith!(Div, div, Quo);
unsafe_arith!(Rem, rem, Rem);
unsafe_arith!(BitXor, bitxor, Xor);

macro_rules! unsafe_bit {
    ($trait:ident, $method:ident, $bit:ident, $logic:ident) => {
        impl<V: Into<Operand>> $trait<V> for UnsafeTerm {
            type Output = UnsafeTerm;
            fn $method(self, rhs: V) -> UnsafeTerm {
                unsafe_bitop(Opcode::$bit, Opcode::$logic, self.into(), rhs.into())
            }
        }

        impl<V: Into<Operand>> $trait<V> for &UnsafeTerm {
            type Output = UnsafeTerm;
            fn $method(self, rhs: V) -> UnsafeTerm {
                unsafe_bitop(Opcode::$bit, Opcode::$logic, self.into(), rhs.into())
            }
        }
    };
}

unsafe_bit!(BitAnd, bitand, And, Land);
unsafe_bit!(BitOr, bitor, Or, Lor);

macro_rules! unsafe_scalar_lhs_impl {
    ($ty:ty, $trait:ident, $method:ident, $op:ident) => {
        impl $trait<UnsafeTerm> for $ty {
            type Output = UnsafeTerm;
            fn $method(self, rhs: UnsafeTerm) -> UnsafeTerm {
                unsafe_binop(Opcode::$op, self.into(), rhs.into())
            }
        }

        impl $trait<&UnsafeTerm> for $ty {
            type Output = UnsafeTerm;
            fn $method(self, rhs: &UnsafeTerm) -> UnsafeTerm {
                unsafe_binop(Opcode::$op, self.into(), rhs.into())
            }
        }
    };
}

macro_rules! unsafe_scalar_lhs {
    ($($ty:ty),* $(,)?) => {$(
        unsafe_scalar_lhs_impl!($ty, Add, add, Add);
        unsafe_scalar_lhs_impl!($ty, Sub, sub, Sub);
        unsafe_scalar_lhs_impl!($ty, Mul, mul, Mul);
        unsafe_scalar_lhs_impl!($ty, Div, div, Quo);
        unsafe_scalar_lhs_impl!($ty, Rem, rem, Rem);
        unsafe_scalar_lhs_impl!($ty, BitAnd, bitand, And);
        unsafe_scalar_lhs_impl!($ty, BitOr, bitor, Or);
        unsafe_scalar_lhs_impl!($ty, BitXor, bitxor, Xor);
    )*};
}

unsafe_scalar_lhs!(i8, u8, i16, u16, i32, u32, i64, u64);

impl BitAnd<UnsafeTerm> for bool {
    type Output = UnsafeTerm;
    fn bitand(self, rhs: UnsafeTerm) -> UnsafeTerm {
        unsafe_bitop(Opcode::And, Opcode::Land, self.into(), rhs.into())
    }
}

impl BitOr<UnsafeTerm> for bool {
    type Output = UnsafeTerm;
    fn bitor(self, rhs: UnsafeTerm) -> UnsafeTerm {
        unsafe_bitop(Opcode::Or, Opcode::Lor, self.into(), rhs.into())
    }
}

impl Neg for UnsafeTerm {
    type Output = UnsafeTerm;
    fn neg(self) -> UnsafeTerm {
        let sort = self.sort();
        UnsafeTerm::unary(sort, Opcode::Sub, self)
    }
}

impl Neg for &UnsafeTerm {
    type Output = UnsafeTerm;
    fn neg(self) -> UnsafeTerm {
        -self.clone()
    }
}

impl Not for UnsafeTerm {
    /// Logical negation on boolean terms, bitwise complement otherwise.
    type Output = UnsafeTerm;
    fn not(self) -> UnsafeTerm {
        let sort = self.sort();
        let op = if sort.is_bool() {
            Opcode::Lnot
        } else {
            Opcode::Not
        };
        UnsafeTerm::unary(sort, op, self)
    }
}

impl Not for &UnsafeTerm {
    type Output = UnsafeTerm;
    fn not(self) -> UnsafeTerm {
        !self.clone()
    }
}

impl UnsafeTerm {
    /// `self == other`.
    pub fn equals(&self, other: impl Into<Operand>) -> UnsafeTerm {
        unsafe_binop(Opcode::Eql, self.into(), other.into())
    }

    /// `self != other`.
    pub fn not_equals(&self, other: impl Into<Operand>) -> UnsafeTerm {
        unsafe_binop(Opcode::Neq, self.into(), other.into())
    }

    /// `self < other`.
    pub fn lt(&self, other: impl Into<Operand>) -> UnsafeTerm {
        unsafe_binop(Opcode::Lss, self.into(), other.into())
    }

    /// `self <= other`.
    pub fn le(&self, other: impl Into<Operand>) -> UnsafeTerm {
        unsafe_binop(Opcode::Leq, self.into(), other.into())
    }

    /// `self > other`.
    pub fn gt(&self, other: impl Into<Operand>) -> UnsafeTerm {
        unsafe_binop(Opcode::Gtr, self.into(), other.into())
    }

    /// `self >= other`.
    pub fn ge(&self, other: impl Into<Operand>) -> UnsafeTerm {
        unsafe_binop(Opcode::Geq, self.into(), other.into())
    }

    /// Conjunction; operands must be boolean.
    pub fn and(&self, other: impl Into<Operand>) -> UnsafeTerm {
        unsafe_binop(Opcode::Land, self.into(), other.into())
    }

    /// Disjunction; operands must be boolean.
    pub fn or(&self, other: impl Into<Operand>) -> UnsafeTerm {
        unsafe_binop(Opcode::Lor, self.into(), other.into())
    }

    /// Implication; operands must be boolean.
    pub fn imp(&self, other: impl Into<Operand>) -> UnsafeTerm {
        unsafe_binop(Opcode::Imp, self.into(), other.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decl::UnsafeDecl;
    use crate::expr::ExprKind;
    use crate::sorts::{bv_sort, int_sort};
    use crate::terms::any;

    fn binary_op<T: Sorted>(term: &Term<T>) -> Opcode {
        match term.expr() {
            Expr::Binary { op, .. } => *op,
            e => panic!("expected a binary node, got {:?}", e.kind()),
        }
    }

    #[test]
    fn arithmetic_on_typed_terms() {
        let x: Term<Int> = any("op!x");
        let y: Term<Int> = any("op!y");
        let t = &x + &y;
        assert_eq!(binary_op(&t), Opcode::Add);
        assert!(std::ptr::eq(t.sort(), int_sort()));
        assert_eq!(binary_op(&(&x - 1i64)), Opcode::Sub);
        assert_eq!(binary_op(&(2i64 * &x)), Opcode::Mul);
        assert_eq!(binary_op(&(&x / &y)), Opcode::Quo);
        assert_eq!(binary_op(&(&x % 7i64)), Opcode::Rem);
    }

    #[test]
    fn scalar_operands_promote_to_literals() {
        let x: Term<Int> = any("pr!x");
        let t = &x + 3i64;
        match t.expr() {
            Expr::Binary { rarg, .. } => {
                assert_eq!(rarg.kind(), ExprKind::Literal);
                assert!(std::ptr::eq(rarg.sort(), int_sort()));
            }
            _ => panic!("expected a binary node"),
        }
        let t = 3i64 + &x;
        match t.expr() {
            Expr::Binary { larg, .. } => assert_eq!(larg.kind(), ExprKind::Literal),
            _ => panic!("expected a binary node"),
        }
    }

    #[test]
    fn boolean_connectives() {
        let p: Term<Bool> = any("bc!p");
        let q: Term<Bool> = any("bc!q");
        assert_eq!(binary_op(&(&p & &q)), Opcode::Land);
        assert_eq!(binary_op(&(&p | true)), Opcode::Lor);
        assert_eq!(binary_op(&(false & &q)), Opcode::Land);
        assert_eq!(binary_op(&(&p ^ &q)), Opcode::Xor);
        assert_eq!(binary_op(&p.implies(&q)), Opcode::Imp);
        match (!&p).expr() {
            Expr::Unary { op, .. } => assert_eq!(*op, Opcode::Lnot),
            _ => panic!("expected a unary node"),
        }
    }

    #[test]
    fn bitvector_operators() {
        let x: Term<Bv<u8>> = any("bv!x");
        let y: Term<Bv<u8>> = any("bv!y");
        assert_eq!(binary_op(&(&x & &y)), Opcode::And);
        assert_eq!(binary_op(&(&x | 0xf0u8)), Opcode::Or);
        assert_eq!(binary_op(&(0x0fu8 ^ &y)), Opcode::Xor);
        assert_eq!(binary_op(&(&x + &y)), Opcode::Add);
        match (!&x).expr() {
            Expr::Unary { op, sort, .. } => {
                assert_eq!(*op, Opcode::Not);
                assert!(std::ptr::eq(*sort, bv_sort(false, 8)));
            }
            _ => panic!("expected a unary node"),
        }
        match (-&x).expr() {
            Expr::Unary { op, .. } => assert_eq!(*op, Opcode::Sub),
            _ => panic!("expected a unary node"),
        }
    }

    #[test]
    fn relational_methods_yield_booleans() {
        let x: Term<Bv<i32>> = any("rel!x");
        let lt = x.lt(0i32);
        assert_eq!(binary_op(&lt), Opcode::Lss);
        assert!(lt.sort().is_bool());
        assert_eq!(binary_op(&x.le(&x)), Opcode::Leq);
        assert_eq!(binary_op(&x.gt(1i32)), Opcode::Gtr);
        assert_eq!(binary_op(&x.ge(1i32)), Opcode::Geq);
        assert_eq!(binary_op(&x.equals(&x)), Opcode::Eql);
        assert_eq!(binary_op(&x.not_equals(2i32)), Opcode::Neq);
    }

    #[test]
    fn equality_works_at_any_sort() {
        use crate::sorts::Array;
        let a: Term<Array<Int, Int>> = any("eq!a");
        let b: Term<Array<Int, Int>> = any("eq!b");
        let eq = a.equals(&b);
        assert!(eq.sort().is_bool());
    }

    #[test]
    fn unsafe_promotion_uses_the_other_operands_sort() {
        let x = UnsafeTerm::constant(&UnsafeDecl::new("up!x", bv_sort(true, 16)));
        let t = &x + 1i64;
        match t.expr() {
            Expr::Binary { op, rarg, .. } => {
                assert_eq!(*op, Opcode::Add);
                assert!(std::ptr::eq(rarg.sort(), bv_sort(true, 16)));
            }
            _ => panic!("expected a binary node"),
        }
        let rel = x.lt(0i64);
        assert!(rel.sort().is_bool());
    }

    #[test]
    fn unsafe_bit_operators_dispatch_on_sort() {
        let p = UnsafeTerm::constant(&UnsafeDecl::new("ub!p", crate::sorts::bool_sort()));
        let x = UnsafeTerm::constant(&UnsafeDecl::new("ub!x", bv_sort(false, 8)));
        match (&p & &p).expr() {
            Expr::Binary { op, .. } => assert_eq!(*op, Opcode::Land),
            _ => panic!("expected a binary node"),
        }
        match (&x & &x).expr() {
            Expr::Binary { op, .. } => assert_eq!(*op, Opcode::And),
            _ => panic!("expected a binary node"),
        }
        match (!&p).expr() {
            Expr::Unary { op, .. } => assert_eq!(*op, Opcode::Lnot),
            _ => panic!("expected a unary node"),
        }
        match (!&x).expr() {
            Expr::Unary { op, .. } => assert_eq!(*op, Opcode::Not),
            _ => panic!("expected a unary node"),
        }
    }

    #[test]
    #[should_panic]
    fn two_scalar_operands_are_rejected() {
        let _ = unsafe_binop(Opcode::Add, 1i64.into(), 2i64.into());
    }
}
