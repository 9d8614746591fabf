//! Laptop configuration as entered on the price-prediction form.

/// One laptop configuration. Categorical fields hold the label selected
/// from the reference option lists; the pipeline encodes them one-hot.
#[derive(Debug, Clone)]
pub struct LaptopQuery {
    pub company: String,
    pub type_name: String,
    pub ram_gb: u32,
    pub weight_kg: f32,
    pub touchscreen: bool,
    pub ips: bool,
    pub screen_size_in: f32,
    pub resolution: String,
    pub cpu_brand: String,
    pub hdd_gb: u32,
    pub ssd_gb: u32,
    pub gpu_brand: String,
    pub os: String,
}

/// Parse a `WIDTHxHEIGHT` resolution string. Malformed input yields `(0, 0)`
/// rather than an error so the pixel-density computation can proceed.
pub fn parse_resolution(resolution: &str) -> (u32, u32) {
    let mut parts = resolution.trim().split('x');
    let width = parts.next().and_then(|v| v.trim().parse().ok());
    let height = parts.next().and_then(|v| v.trim().parse().ok());
    match (width, height, parts.next()) {
        (Some(width), Some(height), None) => (width, height),
        _ => (0, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_resolution;

    #[test]
    fn parses_well_formed_resolutions() {
        assert_eq!(parse_resolution("1920x1080"), (1920, 1080));
        assert_eq!(parse_resolution("2560x1600"), (2560, 1600));
    }

    #[test]
    fn malformed_resolutions_fall_back_to_zero() {
        assert_eq!(parse_resolution("widescreen"), (0, 0));
        assert_eq!(parse_resolution("1920x"), (0, 0));
        assert_eq!(parse_resolution("1920x1080x60"), (0, 0));
        assert_eq!(parse_resolution(""), (0, 0));
    }
}
