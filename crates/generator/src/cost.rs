//! Cost derivation from token counts and per-million-token prices.

/// Cost in USD for one request.
///
/// `cost = (input/1e6) * input_price + (output/1e6) * output_price`. Pure and
/// unrounded; callers format for display.
pub fn cost_usd(
    input_tokens: u64,
    output_tokens: u64,
    input_price_per_million: f64,
    output_price_per_million: f64,
) -> f64 {
    (input_tokens as f64 / 1_000_000.0) * input_price_per_million
        + (output_tokens as f64 / 1_000_000.0) * output_price_per_million
}
