#[cfg(debug_assertions)]
#[cfg_attr(not(feature = "backend-submit"), allow(dead_code))]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3000"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
#[cfg_attr(not(feature = "backend-submit"), allow(dead_code))]
pub fn get_backend_url() -> &'static str {
    ""  // Same origin as the site in production
}

/// How long the mocked submission waits before acknowledging.
pub const MOCK_SUBMIT_DELAY_MS: u32 = 1000;

/// How long a toast stays up before dismissing itself.
pub const TOAST_DISMISS_MS: u32 = 5000;
