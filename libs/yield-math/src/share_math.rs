use crate::full_math::mul_div;
use soroban_sdk::Env;
use yield_types::Error;

/// Vault shares minted for `assets` at the current share price.
///
/// An empty vault mints 1:1. A vault with outstanding shares and a zero
/// valuation has no usable price.
pub fn shares_for_assets(
    env: &Env,
    assets: i128,
    total_shares: i128,
    total_assets: i128,
) -> Result<i128, Error> {
    if total_shares == 0 {
        return Ok(assets);
    }
    if total_assets <= 0 {
        return Err(Error::ValuationUnavailable);
    }
    mul_div(env, assets, total_shares, total_assets)
}

/// Assets redeemed by `shares` at the current share price (rounds down)
pub fn assets_for_shares(
    env: &Env,
    shares: i128,
    total_shares: i128,
    total_assets: i128,
) -> Result<i128, Error> {
    if total_shares == 0 {
        return Ok(0);
    }
    if total_assets < 0 {
        return Err(Error::ValuationUnavailable);
    }
    mul_div(env, shares, total_assets, total_shares)
}
