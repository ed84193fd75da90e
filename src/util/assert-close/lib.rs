/* ************************************************************************ **
** This file is part of symcell, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Approximate equality for floating point data.
//!
//! Every tolerance test in the symmetry code goes through [`CheckClose`],
//! which uses a combined absolute-or-relative rule.

extern crate failure;

use std::fmt;

pub const DEFAULT_NONZERO_TOL: f64 = 1e-9;

/// Panic if two values are not approximately equal.
///
/// Accepts optional `rel=` and `abs=` tolerances before the operands,
/// followed optionally by a format string and arguments.
#[macro_export]
macro_rules! assert_close {
    ($($t:tt)*) => {
        $crate::__assert_close_impl!{@parsing [$($t)*] [[@rel $crate::DEFAULT_NONZERO_TOL] [@abs 0.0]]}
    };
}

#[macro_export]
macro_rules! debug_assert_close {
    ($($t:tt)*) => {{
        #[cfg(debug_assertions)] {
            $crate::assert_close!{$($t)*}
        }
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __assert_close_impl {
    (@parsing [rel=$tol:expr, $($rest:tt)*] [$($assignment:tt)*]) => {
        $crate::__assert_close_impl!(@parsing [$($rest)*] [$($assignment)* [@rel $tol]]);
    };
    (@parsing [abs=$tol:expr, $($rest:tt)*] [$($assignment:tt)*]) => {
        $crate::__assert_close_impl!(@parsing [$($rest)*] [$($assignment)* [@abs $tol]]);
    };
    (@parsing [$a:expr, $b:expr $(,)*] $assignments:tt) => {
        $crate::__assert_close_impl!(@expand $assignments [@comp $a, $b] [@fmt "not nearly equal!"])
    };
    (@parsing [$a:expr, $b:expr, $($fmt:tt)+] $assignments:tt) => {
        $crate::__assert_close_impl!(@expand $assignments [@comp $a, $b] [@fmt $($fmt)+])
    };
    (@expand [$($assignment:tt)*] [@comp $a:expr, $b:expr] [@fmt $($fmt:tt)+] ) => {
        #[allow(unused_mut)]
        #[allow(unused_assignments)]
        {
            let a = $a;
            let b = $b;

            let mut abs: f64;
            let mut rel: f64;
            $(
                $crate::__assert_close_impl!{@stmt::assign [abs, rel] $assignment}
            )*

            $crate::__check_or_panic(&a, &b, $crate::Tolerances { abs, rel }, format_args!($($fmt)+));
        }
    };
    (@stmt::assign [$abs:ident, $rel:ident] [@abs $tol:expr]) => { $abs = $tol; };
    (@stmt::assign [$abs:ident, $rel:ident] [@rel $tol:expr]) => { $rel = $tol; };
}

#[doc(hidden)]
#[track_caller]
pub fn __check_or_panic<T>(a: &T, b: &T, tol: Tolerances, msg: fmt::Arguments<'_>)
where
    T: CheckClose + fmt::Debug,
    T::Scalar: fmt::Debug,
{
    if let Err(e) = a.check_close(b, tol) {
        panic!(
            "{} (tolerances: rel={}, abs={})\n left: {:?}\nright: {:?}\n{}",
            msg, tol.rel, tol.abs, a, b, e,
        );
    }
}

/// The scalar comparison rule.
///
/// Two values are close when they are identical, or when their difference
/// does not exceed the absolute tolerance, or when it does not exceed the
/// relative tolerance scaled by the larger magnitude.
#[inline]
pub fn is_close(a: f64, b: f64, Tolerances { abs, rel }: Tolerances) -> bool {
    debug_assert!(rel >= 0.0);
    debug_assert!(abs >= 0.0);

    // catches infinities of the same sign
    if a == b { return true; }

    if a.is_infinite() || b.is_infinite() { return false; }

    let diff = (a - b).abs();
    diff <= abs || diff <= rel * a.abs().max(b.abs())
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tolerances<T = f64> {
    pub abs: T,
    pub rel: T
}

impl Tolerances {
    /// Use the same value as both the absolute and relative tolerance.
    ///
    /// This is the form used for every geometric comparison in the workspace.
    #[inline(always)]
    pub fn abs_or_rel(tol: f64) -> Self
    { Tolerances { abs: tol, rel: tol } }
}

#[derive(Debug)]
pub struct CheckCloseError<T = f64> {
    pub values: (T, T),
    pub tol: Tolerances<T>,
}

impl<T: fmt::Debug + Send + Sync + 'static> failure::Fail for CheckCloseError<T> {
    fn name(&self) -> Option<&str> {
        Some(concat!(module_path!(), "::", "CheckCloseError"))
    }
}

impl<T: fmt::Debug> fmt::Display for CheckCloseError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (ref left, ref right) = self.values;
        write!(f, "failed at:
  left: {:?}
 right: {:?}
   tol: {:?}", left, right, self.tol)
    }
}

pub trait CheckClose<Rhs: ?Sized = Self> {
    type Scalar;

    /// Test that all values of self and other are close, reporting the first failure.
    fn check_close(&self, other: &Rhs, tol: Tolerances) -> Result<(), CheckCloseError<Self::Scalar>>;

    #[inline]
    fn is_close(&self, other: &Rhs, tol: Tolerances) -> bool
    { self.check_close(other, tol).is_ok() }
}

impl CheckClose for f64 {
    type Scalar = f64;

    #[inline]
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError<f64>>
    {
        match is_close(*self, *other, tol) {
            true => Ok(()),
            false => Err(CheckCloseError { values: (*self, *other), tol }),
        }
    }
}

impl<'a, T: ?Sized + CheckClose> CheckClose for &'a T {
    type Scalar = T::Scalar;

    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError<Self::Scalar>>
    { CheckClose::check_close(*self, *other, tol) }
}

impl<T: CheckClose> CheckClose for [T] {
    type Scalar = T::Scalar;

    /// Slices of unequal length are a programming error, and panic.
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError<Self::Scalar>>
    {
        assert_eq!(self.len(), other.len());
        self.iter().zip(other)
            .map(|(a, b)| a.check_close(b, tol))
            .collect()
    }
}

impl<T: CheckClose> CheckClose for Vec<T> {
    type Scalar = T::Scalar;

    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError<Self::Scalar>>
    { self[..].check_close(&other[..], tol) }
}

impl<T: CheckClose, const N: usize> CheckClose for [T; N] {
    type Scalar = T::Scalar;

    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError<Self::Scalar>>
    { self[..].check_close(&other[..], tol) }
}
