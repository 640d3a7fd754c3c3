// Package identity baked in at build time

pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// `name/version`, sent as User-Agent on outbound requests.
pub fn user_agent() -> String {
    format!("{}/{}", NAME, VERSION)
}
