pub const LOG_LEVEL: &str = "info";

pub const API_HOST: &str = "api.mpdx.org";
pub const API_PORT: &str = "443";
