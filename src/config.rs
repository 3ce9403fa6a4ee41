/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Catalog API used when `DUMMYJSON_API_BASE_URL` is not set at build time
    pub const DEFAULT_API_BASE_URL: &'static str = "https://dummyjson.com";

    /// Artificial report generation delay in milliseconds
    pub const REPORT_DELAY_MS: u32 = 3_000;

    /// Base URL of the catalog API, fixed when the bundle is built.
    pub const fn api_base_url() -> &'static str {
        match option_env!("DUMMYJSON_API_BASE_URL") {
            Some(url) => url,
            None => Self::DEFAULT_API_BASE_URL,
        }
    }
}
