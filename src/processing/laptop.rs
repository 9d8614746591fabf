//! Laptop price prediction.

use crate::artifacts::laptop::{LaptopPipeline, UnknownCategory};
use crate::domain::laptop::{LaptopQuery, parse_resolution};

/// Pixel density of a display. Defined as 0 when the screen size is not
/// positive; a malformed resolution contributes 0x0 pixels.
pub fn pixels_per_inch(resolution: &str, screen_size_in: f32) -> f32 {
    let (width, height) = parse_resolution(resolution);
    if screen_size_in > 0.0 {
        (width as f32).hypot(height as f32) / screen_size_in
    } else {
        log::warn!("Screen size must be positive to compute pixel density; using 0");
        0.0
    }
}

/// Estimated price in whole currency units. The pipeline predicts the log
/// of the price; the result is exponentiated and truncated.
pub fn predict_price(
    pipeline: &LaptopPipeline,
    query: &LaptopQuery,
) -> Result<u32, UnknownCategory> {
    let ppi = pixels_per_inch(&query.resolution, query.screen_size_in);
    let features = pipeline.encode(query, ppi)?;
    let price = pipeline.regressor.predict(&features).exp() as u32;
    log::info!(
        "Finished price prediction: company={}, type={}, price={price}",
        query.company,
        query.type_name
    );
    Ok(price)
}
