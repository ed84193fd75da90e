/* ************************************************************************ **
** This file is part of symcell, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Small number-theoretic helpers for supercell enumeration.

extern crate num_integer;
extern crate num_traits;

use num_integer::Integer;
use num_traits::PrimInt;

/// Prime factorization as `(prime, exponent)` pairs in ascending order of prime.
///
/// Factors of two are stripped by halving; the rest are found by trial
/// division over odd candidates up to the square root of what remains.
///
/// # Panics
///
/// Panics if `n < 1`.
pub fn factorize<X>(n: X) -> Vec<(X, u32)>
where
    X: PrimInt + Integer,
{
    assert!(n >= X::one(), "cannot factorize a non-positive integer");

    let two = X::one() + X::one();
    let mut out = vec![];
    let mut rest = n;

    let mut exp = 0;
    while rest.is_even() {
        rest = rest >> 1;
        exp += 1;
    }
    if exp > 0 {
        out.push((two, exp));
    }

    let mut d = two + X::one();
    while rest > X::one() {
        if d > rest / d {
            // whatever is left is prime
            out.push((rest, 1));
            break;
        }
        let mut exp = 0;
        while rest.is_multiple_of(&d) {
            rest = rest / d;
            exp += 1;
        }
        if exp > 0 {
            out.push((d, exp));
        }
        d = d + two;
    }
    out
}

/// All positive divisors of `n`.
///
/// The order is deterministic: starting from `[1]`, each prime power `p^k`
/// (in ascending order of `p`, then `k`) appends its products with every
/// divisor found before `p` was considered. For `12` this gives
/// `[1, 2, 4, 3, 6, 12]`.
///
/// # Panics
///
/// Panics if `n < 1`.
pub fn divisors<X>(n: X) -> Vec<X>
where
    X: PrimInt + Integer,
{
    let mut out = vec![X::one()];
    for (p, exp) in factorize(n) {
        let base_len = out.len();
        let mut power = X::one();
        for _ in 0..exp {
            power = power * p;
            for j in 0..base_len {
                let value = out[j] * power;
                out.push(value);
            }
        }
    }
    out
}
