// src/analytics/vectorize.rs
//! Element-wise lifting of the scalar closed forms to arrays
//!
//! Every array function here is the scalar function applied independently
//! at each index: `out[i] = f(a[i], b[i], ...)`. There is no interaction
//! between elements, so the array result is identical, bit for bit, to a
//! loop of scalar calls. All inputs must have the same length.

use ndarray::{Array1, ArrayView1};

use super::closed_forms;
use crate::error::validation::validate_same_len;
use crate::error::SdeResult;

/// Check that every length matches the first one
///
/// `names[i]` labels `lens[i]` in the error.
pub fn check_lengths(names: &[&str], lens: &[usize]) -> SdeResult<usize> {
    let expected = lens.first().copied().unwrap_or(0);
    for (&name, &len) in names.iter().zip(lens).skip(1) {
        validate_same_len(name, expected, len)?;
    }
    Ok(expected)
}

/// Apply a unary scalar function element-wise
pub fn lift1<A, F>(f: F, a: ArrayView1<'_, A>) -> Array1<f64>
where
    A: Copy,
    F: Fn(A) -> f64,
{
    a.mapv(f)
}

// `$named` takes the argument names used in length errors, `$name` labels
// them by position.
macro_rules! lift_n {
    ($(#[$meta:meta])* $name:ident, $named:ident, $n:literal;
     $first:ident: $First:ident $(, $arg:ident: $Arg:ident)+) => {
        $(#[$meta])*
        pub fn $name<$First, $($Arg,)+ F>(
            f: F,
            $first: ArrayView1<'_, $First>,
            $($arg: ArrayView1<'_, $Arg>,)+
        ) -> SdeResult<Array1<f64>>
        where
            $First: Copy,
            $($Arg: Copy,)+
            F: Fn($First, $($Arg),+) -> f64,
        {
            $named(
                [stringify!($first), $(stringify!($arg)),+],
                f,
                $first,
                $($arg,)+
            )
        }

        /// Same as the positional version, with named inputs for errors
        pub fn $named<$First, $($Arg,)+ F>(
            names: [&str; $n],
            f: F,
            $first: ArrayView1<'_, $First>,
            $($arg: ArrayView1<'_, $Arg>,)+
        ) -> SdeResult<Array1<f64>>
        where
            $First: Copy,
            $($Arg: Copy,)+
            F: Fn($First, $($Arg),+) -> f64,
        {
            let n = check_lengths(&names, &[$first.len(), $($arg.len()),+])?;
            Ok(Array1::from_shape_fn(n, |i| f($first[i], $($arg[i]),+)))
        }
    };
}

lift_n!(
    /// Apply a binary scalar function element-wise
    lift2, lift2_named, 2; a: A, b: B
);
lift_n!(
    /// Apply a four-argument scalar function element-wise
    lift4, lift4_named, 4; a: A, b: B, c: C, d: D
);
lift_n!(
    /// Apply a five-argument scalar function element-wise
    lift5, lift5_named, 5; a: A, b: B, c: C, d: D, e: E
);
lift_n!(
    /// Apply a six-argument scalar function element-wise
    lift6, lift6_named, 6; a: A, b: B, c: C, d: D, e: E, g: G
);

pub fn ncdf_vec(x: ArrayView1<'_, f64>) -> Array1<f64> {
    lift1(closed_forms::ncdf, x)
}

pub fn bs_time_value_vec(
    fwd: ArrayView1<'_, f64>,
    strike: ArrayView1<'_, f64>,
    volatility: ArrayView1<'_, f64>,
    maturity: ArrayView1<'_, f64>,
) -> SdeResult<Array1<f64>> {
    lift4_named(
        ["fwd", "strike", "volatility", "maturity"],
        closed_forms::bs_time_value,
        fwd,
        strike,
        volatility,
        maturity,
    )
}

pub fn bs_price_vec(
    fwd: ArrayView1<'_, f64>,
    strike: ArrayView1<'_, f64>,
    volatility: ArrayView1<'_, f64>,
    maturity: ArrayView1<'_, f64>,
    is_call: ArrayView1<'_, bool>,
) -> SdeResult<Array1<f64>> {
    lift5_named(
        ["fwd", "strike", "volatility", "maturity", "is_call"],
        closed_forms::bs_price,
        fwd,
        strike,
        volatility,
        maturity,
        is_call,
    )
}

pub fn bs_discounted_price_vec(
    spot: ArrayView1<'_, f64>,
    strike: ArrayView1<'_, f64>,
    volatility: ArrayView1<'_, f64>,
    maturity: ArrayView1<'_, f64>,
    rate: ArrayView1<'_, f64>,
    is_call: ArrayView1<'_, bool>,
) -> SdeResult<Array1<f64>> {
    lift6_named(
        ["spot", "strike", "volatility", "maturity", "rate", "is_call"],
        closed_forms::bs_discounted_price,
        spot,
        strike,
        volatility,
        maturity,
        rate,
        is_call,
    )
}

pub fn vanilla_discounted_payoff_vec(
    spot: ArrayView1<'_, f64>,
    strike: ArrayView1<'_, f64>,
    maturity: ArrayView1<'_, f64>,
    rate: ArrayView1<'_, f64>,
    is_call: ArrayView1<'_, bool>,
) -> SdeResult<Array1<f64>> {
    lift5_named(
        ["spot", "strike", "maturity", "rate", "is_call"],
        closed_forms::vanilla_discounted_payoff,
        spot,
        strike,
        maturity,
        rate,
        is_call,
    )
}
