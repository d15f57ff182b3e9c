use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::{Env, U256};
use yield_types::Error;

/// Multiply and divide with 256-bit intermediate precision (rounds down)
/// Returns (a * b) / denominator for non-negative operands
pub fn mul_div(env: &Env, a: i128, b: i128, denominator: i128) -> Result<i128, Error> {
    if a < 0 || b < 0 || denominator <= 0 {
        return Err(Error::ArithmeticOverflowOrUnderflow);
    }

    // Fast path: the product fits in i128
    if let Some(result) = a.fixed_mul_floor(b, denominator) {
        return Ok(result);
    }

    let product = U256::from_u128(env, a as u128).mul(&U256::from_u128(env, b as u128));
    let result = product.div(&U256::from_u128(env, denominator as u128));

    result
        .to_u128()
        .and_then(|value| i128::try_from(value).ok())
        .ok_or(Error::ArithmeticOverflowOrUnderflow)
}

/// Integer square root (Babylonian method), rounds down
pub fn isqrt(n: u128) -> u128 {
    if n == 0 {
        return 0;
    }
    let mut x = n;
    // ceil(n / 2) without overflowing at u128::MAX
    let mut y = (x >> 1) + (x & 1);
    while y < x {
        x = y;
        y = (y + n / y) >> 1;
    }
    x
}
