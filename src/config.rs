#[cfg(debug_assertions)]
pub fn get_resolver_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_resolver_url() -> &'static str {
    ""  // Production URL
}

// The quote funnel is a separate app; we only hand this path through.
pub fn get_quote_funnel_path() -> &'static str {
    "/quote/start"
}
