/* ************************************************************************ **
** This file is part of symcell, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

// Traits exposed in public interfaces, implemented on a finite set of
// primitive types rather than behind open-ended generic bounds.

use std::ops::{Add, Sub, Mul, Div, Neg};
use num_traits::{Zero, One};

/// Scalars with addition, subtraction and multiplication.
///
/// Implemented for `f64`, `i32` and `i64`. Sealed.
pub trait Ring
    : Copy + PartialEq + Zero + One
    + Add<Output=Self> + Sub<Output=Self> + Mul<Output=Self> + Neg<Output=Self>
    + private::Sealed
{ }

/// Scalars that can also be divided.
///
/// Currently just `f64`.
pub trait Field: Ring + Div<Output=Self> { }

mod private {
    pub trait Sealed { }
}

macro_rules! impl_ring {
    ($($T:ty)*) => {$(
        impl private::Sealed for $T { }
        impl Ring for $T { }
    )*};
}

impl_ring!{ f64 i32 i64 }

impl Field for f64 { }
