/* ************************************************************************ **
** This file is part of symcell, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

pub(crate) mod reduction;
pub(crate) mod point_group;
pub(crate) mod space_group;
pub(crate) mod hnf;

#[cfg(test)]
mod tests;
