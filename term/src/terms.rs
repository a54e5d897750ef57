// Copyright 2022-2023 VMware, Inc.
// SPDX-License-Identifier: BSD-2-Clause

//! Term handles and the builder layer.
//!
//! A term handle is a reference-counted, read-only view of an expression
//! node; the node lives as long as some handle or parent node references it.
//! [`Term<T>`] tracks the sort statically, [`UnsafeTerm`] carries it at
//! runtime only. The two convert freely in one direction (typed to untyped)
//! and fallibly in the other ([`UnsafeTerm::downcast`]).
//!
//! Typed builders enforce sort and arity compatibility through the type
//! system. The unsafe builders compute the result sort and nothing else;
//! mis-sorted use is the caller's responsibility and surfaces, if at all,
//! when a backend rejects the encoding.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::decl::{Decl, UnsafeDecl};
use crate::expr::{Expr, ExprKind, Opcode, Scalar};
use crate::sorts::{bool_sort, Array, Bool, Bv, BvScalar, Func, Int, Real, Sort, SortSeq, Sorted};

/// A shared, runtime-sorted, potentially not well-sorted term.
#[derive(Clone)]
pub struct UnsafeTerm {
    expr: Arc<Expr>,
}

impl UnsafeTerm {
    pub(crate) fn new(expr: Expr) -> Self {
        UnsafeTerm {
            expr: Arc::new(expr),
        }
    }

    /// The underlying expression node.
    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    /// The node's kind tag.
    pub fn kind(&self) -> ExprKind {
        self.expr.kind()
    }

    /// The node's result sort.
    pub fn sort(&self) -> &'static Sort {
        self.expr.sort()
    }

    /// Address of the underlying node, stable for the node's lifetime.
    /// Useful for observing DAG sharing.
    pub fn addr(&self) -> usize {
        Arc::as_ptr(&self.expr) as usize
    }

    /// Recover a statically-sorted handle. Fails (returns `None`) when the
    /// runtime sort of the node differs from `T::sort()`.
    pub fn downcast<T: Sorted>(&self) -> Option<Term<T>> {
        if self.sort() == T::sort() {
            Some(Term {
                expr: self.expr.clone(),
                _sort: PhantomData,
            })
        } else {
            None
        }
    }

    /// A literal of the given sort. The payload is kept as passed; backends
    /// truncate bit-vector payloads to the sort's width.
    pub fn literal(sort: &'static Sort, value: Scalar) -> UnsafeTerm {
        UnsafeTerm::new(Expr::Literal { sort, value })
    }

    /// A free constant for `decl`.
    pub fn constant(decl: &UnsafeDecl) -> UnsafeTerm {
        UnsafeTerm::new(Expr::Constant { decl: decl.clone() })
    }

    /// Apply the function declared by `decl`. The result sort is read off
    /// the declaration at the argument count; arity or sort mismatches are
    /// the caller's responsibility.
    pub fn apply(decl: &UnsafeDecl, args: Vec<UnsafeTerm>) -> UnsafeTerm {
        assert!(!args.is_empty(), "function applications need arguments");
        UnsafeTerm::new(Expr::FuncApp {
            decl: decl.clone(),
            args,
        })
    }

    /// An applied unary operator with an explicit result sort.
    pub fn unary(sort: &'static Sort, op: Opcode, arg: UnsafeTerm) -> UnsafeTerm {
        UnsafeTerm::new(Expr::Unary { op, sort, arg })
    }

    /// An applied binary operator with an explicit result sort.
    pub fn binary(
        sort: &'static Sort,
        op: Opcode,
        larg: UnsafeTerm,
        rarg: UnsafeTerm,
    ) -> UnsafeTerm {
        UnsafeTerm::new(Expr::Binary {
            op,
            sort,
            larg,
            rarg,
        })
    }

    /// An applied n-ary operator with an explicit result sort.
    ///
    /// Panics when `args` is empty; an empty operand list is a programming
    /// error.
    pub fn nary(sort: &'static Sort, op: Opcode, args: Vec<UnsafeTerm>) -> UnsafeTerm {
        assert!(!args.is_empty(), "n-ary operators need operands");
        UnsafeTerm::new(Expr::Nary { op, sort, args })
    }

    /// An array of the given array sort mapping every index to `init`.
    pub fn const_array(sort: &'static Sort, init: UnsafeTerm) -> UnsafeTerm {
        UnsafeTerm::new(Expr::ConstArray { sort, init })
    }

    /// A read of `array` at `index`; the result sort is the array's range.
    pub fn select(array: UnsafeTerm, index: UnsafeTerm) -> UnsafeTerm {
        UnsafeTerm::new(Expr::ArraySelect { array, index })
    }

    /// A functional update of `array`; the source array term is unchanged.
    pub fn store(array: UnsafeTerm, index: UnsafeTerm, value: UnsafeTerm) -> UnsafeTerm {
        UnsafeTerm::new(Expr::ArrayStore {
            array,
            index,
            value,
        })
    }

    /// True iff all operands are pairwise distinct, built as an n-ary
    /// disequality node.
    ///
    /// Panics when fewer than two terms are given.
    pub fn distinct(terms: Vec<UnsafeTerm>) -> UnsafeTerm {
        assert!(terms.len() >= 2, "distinct needs at least two terms");
        UnsafeTerm::nary(bool_sort(), Opcode::Neq, terms)
    }

    /// Logical implication, built as a binary IMP node (not expanded into
    /// `!larg || rarg`, so backends see the implication directly).
    pub fn implies(larg: UnsafeTerm, rarg: UnsafeTerm) -> UnsafeTerm {
        UnsafeTerm::binary(bool_sort(), Opcode::Imp, larg, rarg)
    }
}

impl fmt::Debug for UnsafeTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UnsafeTerm({:?}: {})", self.kind(), self.sort())
    }
}

/// A shared, well-sorted term whose sort is the static type `T`.
pub struct Term<T: Sorted> {
    expr: Arc<Expr>,
    _sort: PhantomData<T>,
}

impl<T: Sorted> Clone for Term<T> {
    fn clone(&self) -> Self {
        Term {
            expr: self.expr.clone(),
            _sort: PhantomData,
        }
    }
}

impl<T: Sorted> Term<T> {
    pub(crate) fn wrap(expr: Expr) -> Self {
        Term {
            expr: Arc::new(expr),
            _sort: PhantomData,
        }
    }

    /// The underlying expression node.
    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    /// The node's kind tag.
    pub fn kind(&self) -> ExprKind {
        self.expr.kind()
    }

    /// The node's sort; always identical to `T::sort()`.
    pub fn sort(&self) -> &'static Sort {
        T::sort()
    }

    /// Address of the underlying node, stable for the node's lifetime.
    pub fn addr(&self) -> usize {
        Arc::as_ptr(&self.expr) as usize
    }

    /// Forget the static sort.
    pub fn to_unsafe(&self) -> UnsafeTerm {
        UnsafeTerm {
            expr: self.expr.clone(),
        }
    }
}

impl<T: Sorted> From<Term<T>> for UnsafeTerm {
    fn from(term: Term<T>) -> Self {
        UnsafeTerm { expr: term.expr }
    }
}

impl<T: Sorted> From<&Term<T>> for UnsafeTerm {
    fn from(term: &Term<T>) -> Self {
        term.to_unsafe()
    }
}

impl<T: Sorted> fmt::Debug for Term<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Term({:?}: {})", self.kind(), self.sort())
    }
}

/// A primitive value admissible as a literal of the static sort `T`.
pub trait LiteralValue<T: Sorted> {
    /// The literal payload.
    fn scalar(self) -> Scalar;
}

impl LiteralValue<Bool> for bool {
    fn scalar(self) -> Scalar {
        Scalar::Bool(self)
    }
}

impl<U: BvScalar> LiteralValue<Int> for U {
    fn scalar(self) -> Scalar {
        BvScalar::scalar(self)
    }
}

impl<U: BvScalar> LiteralValue<Real> for U {
    fn scalar(self) -> Scalar {
        BvScalar::scalar(self)
    }
}

impl<U: BvScalar> LiteralValue<Bv<U>> for U {
    fn scalar(self) -> Scalar {
        BvScalar::scalar(self)
    }
}

/// Anything convertible to a `Term<T>`: a term, a borrowed term, or a
/// primitive value promoted to a literal. This is what lets operators mix
/// terms and scalars on either side.
pub trait IntoTerm<T: Sorted> {
    /// Convert into a term of sort `T`.
    fn into_term(self) -> Term<T>;
}

impl<T: Sorted> IntoTerm<T> for Term<T> {
    fn into_term(self) -> Term<T> {
        self
    }
}

impl<T: Sorted> IntoTerm<T> for &Term<T> {
    fn into_term(self) -> Term<T> {
        self.clone()
    }
}

impl IntoTerm<Bool> for bool {
    fn into_term(self) -> Term<Bool> {
        literal(self)
    }
}

macro_rules! scalar_into_term {
    ($($ty:ty),* $(,)?) => {$(
        impl IntoTerm<Int> for $ty {
            fn into_term(self) -> Term<Int> {
                literal(self)
            }
        }

        impl IntoTerm<Real> for $ty {
            fn into_term(self) -> Term<Real> {
                literal(self)
            }
        }

        impl IntoTerm<Bv<$ty>> for $ty {
            fn into_term(self) -> Term<Bv<$ty>> {
                literal(self)
            }
        }
    )*};
}

scalar_into_term!(i8, u8, i16, u16, i32, u32, i64, u64);

/// A literal term of sort `T`.
pub fn literal<T: Sorted, V: LiteralValue<T>>(value: V) -> Term<T> {
    Term::wrap(Expr::Literal {
        sort: T::sort(),
        value: value.scalar(),
    })
}

/// A free constant for a typed declaration.
pub fn constant<T: Sorted>(decl: &Decl<T>) -> Term<T> {
    Term::wrap(Expr::Constant {
        decl: decl.as_unsafe().clone(),
    })
}

/// A fresh free constant named `symbol`. Use globally unique symbols!
pub fn any<T: Sorted>(symbol: &str) -> Term<T> {
    constant(&Decl::<T>::new(symbol))
}

/// The arguments of a typed function application: a tuple of terms whose
/// sorts match the function's argument sorts.
pub trait ApplyArgs<Args: SortSeq> {
    /// The argument terms, in order, without their static sorts.
    fn into_terms(self) -> Vec<UnsafeTerm>;
}

impl<A: Sorted> ApplyArgs<(A,)> for Term<A> {
    fn into_terms(self) -> Vec<UnsafeTerm> {
        vec![self.into()]
    }
}

impl<A: Sorted> ApplyArgs<(A,)> for (Term<A>,) {
    fn into_terms(self) -> Vec<UnsafeTerm> {
        vec![self.0.into()]
    }
}

impl<A: Sorted, B: Sorted> ApplyArgs<(A, B)> for (Term<A>, Term<B>) {
    fn into_terms(self) -> Vec<UnsafeTerm> {
        vec![self.0.into(), self.1.into()]
    }
}

impl<A: Sorted, B: Sorted, C: Sorted> ApplyArgs<(A, B, C)> for (Term<A>, Term<B>, Term<C>) {
    fn into_terms(self) -> Vec<UnsafeTerm> {
        vec![self.0.into(), self.1.into(), self.2.into()]
    }
}

impl<A: Sorted, B: Sorted, C: Sorted, D: Sorted> ApplyArgs<(A, B, C, D)>
    for (Term<A>, Term<B>, Term<C>, Term<D>)
{
    fn into_terms(self) -> Vec<UnsafeTerm> {
        vec![self.0.into(), self.1.into(), self.2.into(), self.3.into()]
    }
}

/// Apply an uninterpreted function to sort-matching arguments. A single
/// argument may be passed bare; multiple arguments as a tuple.
pub fn apply<Args, R, A>(decl: &Decl<Func<Args, R>>, args: A) -> Term<R>
where
    Args: SortSeq,
    R: Sorted,
    A: ApplyArgs<Args>,
{
    Term::wrap(Expr::FuncApp {
        decl: decl.as_unsafe().clone(),
        args: args.into_terms(),
    })
}

/// True iff all terms are pairwise distinct.
///
/// Panics when fewer than two terms are given.
pub fn distinct<T: Sorted>(terms: &[Term<T>]) -> Term<Bool> {
    assert!(terms.len() >= 2, "distinct needs at least two terms");
    Term::wrap(Expr::Nary {
        op: Opcode::Neq,
        sort: bool_sort(),
        args: terms.iter().map(UnsafeTerm::from).collect(),
    })
}

/// Logical implication as a binary IMP node.
pub fn implies(larg: impl IntoTerm<Bool>, rarg: impl IntoTerm<Bool>) -> Term<Bool> {
    Term::wrap(Expr::Binary {
        op: Opcode::Imp,
        sort: bool_sort(),
        larg: larg.into_term().into(),
        rarg: rarg.into_term().into(),
    })
}

/// An array mapping every index to `init`.
pub fn const_array<D: Sorted, R: Sorted>(init: impl IntoTerm<R>) -> Term<Array<D, R>> {
    Term::wrap(Expr::ConstArray {
        sort: Array::<D, R>::sort(),
        init: init.into_term().into(),
    })
}

/// A read of `array` at `index`.
pub fn select<D: Sorted, R: Sorted>(
    array: &Term<Array<D, R>>,
    index: impl IntoTerm<D>,
) -> Term<R> {
    Term::wrap(Expr::ArraySelect {
        array: array.into(),
        index: index.into_term().into(),
    })
}

/// A functional update of `array` at `index` with `value`; the source array
/// term is unchanged.
pub fn store<D: Sorted, R: Sorted>(
    array: &Term<Array<D, R>>,
    index: impl IntoTerm<D>,
    value: impl IntoTerm<R>,
) -> Term<Array<D, R>> {
    Term::wrap(Expr::ArrayStore {
        array: array.into(),
        index: index.into_term().into(),
        value: value.into_term().into(),
    })
}

impl<D: Sorted, R: Sorted> Term<Array<D, R>> {
    /// A read of this array at `index`.
    pub fn select(&self, index: impl IntoTerm<D>) -> Term<R> {
        select(self, index)
    }

    /// A functional update of this array at `index` with `value`.
    pub fn store(&self, index: impl IntoTerm<D>, value: impl IntoTerm<R>) -> Term<Array<D, R>> {
        store(self, index, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorts::{bv_sort, int_sort};

    #[test]
    fn downcast_checks_the_runtime_sort() {
        let x: Term<Bv<u8>> = any("dc!x");
        let u = x.to_unsafe();
        assert!(u.downcast::<Bv<u8>>().is_some());
        assert!(u.downcast::<Bv<i8>>().is_none());
        assert!(u.downcast::<Int>().is_none());
    }

    #[test]
    fn handles_share_nodes() {
        let x: Term<Int> = any("sh!x");
        let y = x.clone();
        assert_eq!(x.addr(), y.addr());
        let sum = &x + &y;
        match sum.expr() {
            Expr::Binary { larg, rarg, .. } => {
                // both operands are the same node, so the graph is a DAG
                assert_eq!(larg.addr(), rarg.addr());
                assert_eq!(larg.addr(), x.addr());
            }
            _ => panic!("expected a binary node"),
        }
    }

    #[test]
    fn implies_is_a_binary_imp_node() {
        let p: Term<Bool> = any("imp!p");
        let q: Term<Bool> = any("imp!q");
        let t = implies(&p, &q);
        match t.expr() {
            Expr::Binary { op, sort, .. } => {
                assert_eq!(*op, Opcode::Imp);
                assert!(sort.is_bool());
            }
            _ => panic!("expected a binary node"),
        }
    }

    #[test]
    fn distinct_is_an_nary_neq_node() {
        let terms: Vec<Term<Int>> = vec![any("d!a"), any("d!b"), any("d!c")];
        let d = distinct(&terms);
        assert!(d.expr().is_distinct());
        match d.expr() {
            Expr::Nary { op, args, .. } => {
                assert_eq!(*op, Opcode::Neq);
                assert_eq!(args.len(), 3);
            }
            _ => panic!("expected an n-ary node"),
        }
    }

    #[test]
    #[should_panic]
    fn distinct_needs_two_terms() {
        let terms: Vec<Term<Int>> = vec![any("d!only")];
        let _ = distinct(&terms);
    }

    #[test]
    fn apply_takes_sorted_tuples() {
        let f = Decl::<Func<(Int, Int), Bool>>::new("ap!f");
        let x: Term<Int> = any("ap!x");
        let t = apply(&f, (x.clone(), x));
        assert!(t.sort().is_bool());
        match t.expr() {
            Expr::FuncApp { decl, args } => {
                assert_eq!(decl.symbol(), "ap!f");
                assert_eq!(args.len(), 2);
            }
            _ => panic!("expected a function application"),
        }
    }

    #[test]
    fn unsafe_builders_compute_result_sorts() {
        let x = UnsafeTerm::constant(&UnsafeDecl::new("ub!x", bv_sort(false, 16)));
        let lit = UnsafeTerm::literal(bv_sort(false, 16), Scalar::U16(3));
        let band = UnsafeTerm::binary(x.sort(), Opcode::And, x.clone(), lit);
        assert!(std::ptr::eq(band.sort(), bv_sort(false, 16)));
        let rel = UnsafeTerm::binary(bool_sort(), Opcode::Leq, band, x);
        assert!(rel.sort().is_bool());
    }

    #[test]
    fn const_array_and_accessors() {
        let a = const_array::<Int, Int>(literal::<Int, _>(0i64));
        let b = a.store(1i64, 2i64);
        let r = b.select(1i64);
        assert!(std::ptr::eq(r.sort(), int_sort()));
    }
}
