//! Result capacities of polynomial operations.
//!
//! Every operation's output capacity is a function of its operand
//! capacities alone, never of the actual degrees, so it is known at compile
//! time. Operations that change capacity take the output capacity as a const
//! parameter and check it against these functions in a `const` block; a
//! mismatch fails the build.

/// Capacity of `a + b` and `a - b`: `max(n1, n2)`.
#[must_use]
pub const fn sum(n1: usize, n2: usize) -> usize {
    if n1 > n2 {
        n1
    } else {
        n2
    }
}

/// Capacity of `a · b`: `n1 + n2 - 1`, or 0 when both are empty.
#[must_use]
pub const fn product(n1: usize, n2: usize) -> usize {
    (n1 + n2).saturating_sub(1)
}

/// Capacity of the quotient `a / b`: `max(n1 - n2 + 1, 1)`.
#[must_use]
pub const fn quotient(n1: usize, n2: usize) -> usize {
    if n1 >= n2 {
        n1 - n2 + 1
    } else {
        1
    }
}

/// Capacity of the remainder `a % b`: `min(n1, n2)`.
#[must_use]
pub const fn remainder(n1: usize, n2: usize) -> usize {
    if n1 < n2 {
        n1
    } else {
        n2
    }
}

/// Capacity of `a^e`: `n · e`, but at least 1 so that `a^0 = 1` fits.
#[must_use]
pub const fn power(n: usize, e: usize) -> usize {
    sum(n * e, 1)
}

/// Capacity of `a + c` and `a - c` for a scalar `c`: `max(n, 1)`.
#[must_use]
pub const fn scalar(n: usize) -> usize {
    sum(n, 1)
}
