// Copyright 2022-2023 VMware, Inc.
// SPDX-License-Identifier: BSD-2-Clause

//! The sort algebra: structural SMT sort descriptors, the process-wide
//! canonical registry, and the mapping from static sort types to their
//! runtime [`Sort`].
//!
//! Sorts are interned: every constructor returns a `&'static Sort` drawn
//! from a global registry keyed by sort shape, so the pointer-identity fast
//! path in [`Sort::eq`] is the common case. Identity is an optimization over
//! structural equality, never required for correctness. Terms only ever
//! reference sorts, they never own them.

use lazy_static::lazy_static;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::sync::Mutex;

use crate::expr::Scalar;

/// An SMT sort descriptor.
///
/// Exactly one of the bool/int/real/bv/array/func/tuple classifications is
/// meaningful for a given sort. Array sorts carry their domain and range as
/// nested sorts, function sorts carry their argument sorts followed by the
/// result sort, and tuple sorts carry their component sorts.
#[derive(Debug, Serialize)]
pub struct Sort {
    is_bool: bool,
    is_int: bool,
    is_real: bool,
    is_bv: bool,
    is_signed: bool,
    bv_size: usize,
    is_array: bool,
    is_func: bool,
    is_tuple: bool,
    sorts: Vec<&'static Sort>,
}

impl Sort {
    fn primitive(
        is_bool: bool,
        is_int: bool,
        is_real: bool,
        is_bv: bool,
        is_signed: bool,
        bv_size: usize,
    ) -> Self {
        Sort {
            is_bool,
            is_int,
            is_real,
            is_bv,
            is_signed,
            bv_size,
            is_array: false,
            is_func: false,
            is_tuple: false,
            sorts: vec![],
        }
    }

    fn composite(is_func: bool, is_array: bool, is_tuple: bool, sorts: Vec<&'static Sort>) -> Self {
        Sort {
            is_bool: false,
            is_int: false,
            is_real: false,
            is_bv: false,
            is_signed: false,
            bv_size: 0,
            is_func,
            is_array,
            is_tuple,
            sorts,
        }
    }

    /// Is this the boolean sort?
    pub fn is_bool(&self) -> bool {
        self.is_bool
    }

    /// Is this the mathematical integer sort?
    pub fn is_int(&self) -> bool {
        self.is_int
    }

    /// Is this the real sort?
    pub fn is_real(&self) -> bool {
        self.is_real
    }

    /// Is this a fixed-size bit-vector sort?
    pub fn is_bv(&self) -> bool {
        self.is_bv
    }

    /// For bit-vector sorts, whether comparisons are signed.
    pub fn is_signed(&self) -> bool {
        self.is_signed
    }

    /// For bit-vector sorts, the width in bits.
    pub fn bv_size(&self) -> usize {
        self.bv_size
    }

    /// Is this a McCarthy array sort?
    pub fn is_array(&self) -> bool {
        self.is_array
    }

    /// Is this an uninterpreted function sort?
    pub fn is_func(&self) -> bool {
        self.is_func
    }

    /// Is this a tuple sort?
    pub fn is_tuple(&self) -> bool {
        self.is_tuple
    }

    /// The i-th nested sort: domain/range for arrays, argument sorts
    /// followed by the result sort for functions, components for tuples.
    ///
    /// Panics when `index >= sorts_size()`; an out-of-range index is a
    /// programming error, not a recoverable condition.
    pub fn sorts(&self, index: usize) -> &'static Sort {
        self.sorts[index]
    }

    /// Number of nested sorts.
    pub fn sorts_size(&self) -> usize {
        self.sorts.len()
    }
}

impl PartialEq for Sort {
    fn eq(&self, other: &Self) -> bool {
        // Interning makes the identity fast path the common case.
        std::ptr::eq(self, other)
            || (self.is_bool == other.is_bool
                && self.is_int == other.is_int
                && self.is_real == other.is_real
                && self.is_bv == other.is_bv
                && self.is_signed == other.is_signed
                && self.bv_size == other.bv_size
                && self.is_array == other.is_array
                && self.is_func == other.is_func
                && self.is_tuple == other.is_tuple
                && self.sorts == other.sorts)
    }
}

impl Eq for Sort {}

impl Hash for Sort {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.is_bool.hash(state);
        self.is_int.hash(state);
        self.is_real.hash(state);
        self.is_bv.hash(state);
        self.is_signed.hash(state);
        self.bv_size.hash(state);
        self.is_array.hash(state);
        self.is_func.hash(state);
        self.is_tuple.hash(state);
        for s in &self.sorts {
            s.hash(state);
        }
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_bool {
            write!(f, "Bool")
        } else if self.is_int {
            write!(f, "Int")
        } else if self.is_real {
            write!(f, "Real")
        } else if self.is_bv {
            let prefix = if self.is_signed { "s" } else { "u" };
            write!(f, "(_ BitVec {}{})", prefix, self.bv_size)
        } else if self.is_array {
            write!(f, "(Array {} {})", self.sorts(0), self.sorts(1))
        } else {
            let head = if self.is_func { "Func" } else { "Tuple" };
            write!(f, "({head}")?;
            for s in &self.sorts {
                write!(f, " {s}")?;
            }
            write!(f, ")")
        }
    }
}

lazy_static! {
    static ref REGISTRY: Mutex<HashSet<&'static Sort>> = Mutex::new(HashSet::new());
}

/// Return the canonical registry entry for `sort`, leaking a new allocation
/// only on first sight of this shape.
fn intern(sort: Sort) -> &'static Sort {
    let mut registry = REGISTRY.lock().unwrap();
    if let Some(&existing) = registry.get(&sort) {
        return existing;
    }
    let leaked: &'static Sort = Box::leak(Box::new(sort));
    registry.insert(leaked);
    leaked
}

/// The boolean sort.
pub fn bool_sort() -> &'static Sort {
    intern(Sort::primitive(true, false, false, false, false, 0))
}

/// The mathematical integer sort.
pub fn int_sort() -> &'static Sort {
    intern(Sort::primitive(false, true, false, false, false, 0))
}

/// The real sort.
pub fn real_sort() -> &'static Sort {
    intern(Sort::primitive(false, false, true, false, false, 0))
}

/// The bit-vector sort of the given signedness and width.
pub fn bv_sort(is_signed: bool, size: usize) -> &'static Sort {
    assert!(size > 0, "bit-vector sorts must have a positive width");
    intern(Sort::primitive(false, false, false, true, is_signed, size))
}

/// The array sort with the given domain and range.
pub fn array_sort(domain: &'static Sort, range: &'static Sort) -> &'static Sort {
    intern(Sort::composite(false, true, false, vec![domain, range]))
}

/// The function sort over `sorts`, which lists the argument sorts followed
/// by the result sort. The result sort of an arity-n function is therefore
/// retrievable as `sorts(n)`.
pub fn func_sort(sorts: &[&'static Sort]) -> &'static Sort {
    assert!(
        sorts.len() >= 2,
        "function sorts need at least one argument and a result"
    );
    intern(Sort::composite(true, false, false, sorts.to_vec()))
}

/// The tuple sort over the given component sorts.
pub fn tuple_sort(sorts: &[&'static Sort]) -> &'static Sort {
    intern(Sort::composite(false, false, true, sorts.to_vec()))
}

/// A static sort type: a phantom type from which the canonical runtime
/// [`Sort`] can be derived. This is what makes `Term<T>` statically sorted.
pub trait Sorted: 'static {
    /// The canonical, process-wide `Sort` for this type.
    fn sort() -> &'static Sort;
}

/// The static boolean sort.
pub enum Bool {}

/// The static mathematical integer sort.
pub enum Int {}

/// The static real sort.
pub enum Real {}

/// A fixed-size bit-vector sort whose signedness and width are those of the
/// Rust integer scalar `T`, e.g. `Bv<u8>` is the unsigned 8-bit sort.
pub struct Bv<T: BvScalar> {
    _scalar: PhantomData<T>,
}

/// A McCarthy array sort with domain `D` and range `R`.
pub struct Array<D: Sorted, R: Sorted> {
    _sorts: PhantomData<(D, R)>,
}

/// An uninterpreted function sort with argument sorts `Args` (a tuple of
/// static sorts, arity 1 to 4) and result sort `R`.
pub struct Func<Args: SortSeq, R: Sorted> {
    _sorts: PhantomData<(Args, R)>,
}

impl Sorted for Bool {
    fn sort() -> &'static Sort {
        bool_sort()
    }
}

impl Sorted for Int {
    fn sort() -> &'static Sort {
        int_sort()
    }
}

impl Sorted for Real {
    fn sort() -> &'static Sort {
        real_sort()
    }
}

impl<T: BvScalar> Sorted for Bv<T> {
    fn sort() -> &'static Sort {
        bv_sort(T::SIGNED, T::BITS)
    }
}

impl<D: Sorted, R: Sorted> Sorted for Array<D, R> {
    fn sort() -> &'static Sort {
        array_sort(D::sort(), R::sort())
    }
}

impl<Args: SortSeq, R: Sorted> Sorted for Func<Args, R> {
    fn sort() -> &'static Sort {
        let mut sorts = Args::sorts();
        sorts.push(R::sort());
        func_sort(&sorts)
    }
}

/// A sequence of static sorts, used for function argument lists.
pub trait SortSeq: 'static {
    /// The runtime sorts of the sequence, in order.
    fn sorts() -> Vec<&'static Sort>;
}

impl<A: Sorted> SortSeq for (A,) {
    fn sorts() -> Vec<&'static Sort> {
        vec![A::sort()]
    }
}

impl<A: Sorted, B: Sorted> SortSeq for (A, B) {
    fn sorts() -> Vec<&'static Sort> {
        vec![A::sort(), B::sort()]
    }
}

impl<A: Sorted, B: Sorted, C: Sorted> SortSeq for (A, B, C) {
    fn sorts() -> Vec<&'static Sort> {
        vec![A::sort(), B::sort(), C::sort()]
    }
}

impl<A: Sorted, B: Sorted, C: Sorted, D: Sorted> SortSeq for (A, B, C, D) {
    fn sorts() -> Vec<&'static Sort> {
        vec![A::sort(), B::sort(), C::sort(), D::sort()]
    }
}

/// A Rust integer scalar usable as the representation of a bit-vector sort.
pub trait BvScalar: Copy + 'static {
    /// Whether the scalar (and thus the bit-vector sort) is signed.
    const SIGNED: bool;
    /// Width of the scalar in bits.
    const BITS: usize;

    /// The literal payload for this scalar value.
    fn scalar(self) -> Scalar;
}

macro_rules! bv_scalar {
    ($($ty:ty => $variant:ident, $signed:expr;)*) => {$(
        impl BvScalar for $ty {
            const SIGNED: bool = $signed;
            const BITS: usize = <$ty>::BITS as usize;

            fn scalar(self) -> Scalar {
                Scalar::$variant(self)
            }
        }
    )*};
}

bv_scalar! {
    i8 => I8, true;
    u8 => U8, false;
    i16 => I16, true;
    u16 => U16, false;
    i32 => I32, true;
    u32 => U32, false;
    i64 => I64, true;
    u64 => U64, false;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_sorts_are_singletons() {
        assert!(std::ptr::eq(bool_sort(), bool_sort()));
        assert!(std::ptr::eq(int_sort(), Int::sort()));
        assert!(std::ptr::eq(bv_sort(false, 32), Bv::<u32>::sort()));
        assert!(!std::ptr::eq(bv_sort(true, 32), bv_sort(false, 32)));
    }

    #[test]
    fn composite_sorts_are_interned() {
        let a = array_sort(int_sort(), real_sort());
        let b = Array::<Int, Real>::sort();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a, b);
        assert!(a.is_array());
        assert!(std::ptr::eq(a.sorts(0), int_sort()));
        assert!(std::ptr::eq(a.sorts(1), real_sort()));
    }

    #[test]
    fn structural_equality_ignores_identity() {
        // Equality must hold even for a sort that bypassed the registry.
        let loose = Sort::composite(false, true, false, vec![int_sort(), int_sort()]);
        let interned = array_sort(int_sort(), int_sort());
        assert!(!std::ptr::eq(&loose, interned));
        assert_eq!(&loose, interned);
    }

    #[test]
    fn func_sort_result_convention() {
        let f = Func::<(Int, Real), Bool>::sort();
        assert!(f.is_func());
        assert_eq!(f.sorts_size(), 3);
        assert!(std::ptr::eq(f.sorts(2), bool_sort()));
    }

    #[test]
    #[should_panic]
    fn nested_sort_index_out_of_range() {
        let _ = bool_sort().sorts(0);
    }

    #[test]
    fn bv_scalar_mapping() {
        assert!(Bv::<i16>::sort().is_signed());
        assert_eq!(Bv::<i16>::sort().bv_size(), 16);
        assert!(!Bv::<u64>::sort().is_signed());
        assert_eq!(Bv::<u64>::sort().bv_size(), 64);
    }
}
