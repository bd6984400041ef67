use log::Level;

/// How long the loading screen stays up before the page is shown.
pub const LOADING_DELAY_MS: u32 = 2500;

/// Vertical offset (px) past which the navigation bar switches to its
/// scrolled treatment.
pub const SCROLL_THRESHOLD: f64 = 50.0;

pub const CONTACT_URL: &str = "https://lin.ee/Lvs2HPsE";
pub const COMPANY_DETAILS_URL: &str = "/company02.html";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running under trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_links_are_absolute_or_rooted() {
        assert!(CONTACT_URL.starts_with("https://"));
        assert!(COMPANY_DETAILS_URL.starts_with('/'));
    }
}
