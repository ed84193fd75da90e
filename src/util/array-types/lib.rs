/* ************************************************************************ **
** This file is part of symcell, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Fixed-size `V3` and `M33` types for row-centric linear algebra.
//!
//! Vectors are row vectors and matrices are containers of rows, so the usual
//! way to transform a list of positions is `v * &matrix`.

extern crate num_traits;
extern crate symcell_assert_close;
#[cfg(feature = "serde")]
extern crate serde;

mod types;
mod traits;
mod ops;
mod methods_v;
mod methods_m;

pub use crate::types::{V3, M3, M33};
pub use crate::traits::{Ring, Field};
pub use crate::methods_v::dot;
pub use crate::methods_m::inv;

/// Free functions for building matrices.
pub mod mat {
    pub use crate::methods_m::{from_array, eye, inv};
}
