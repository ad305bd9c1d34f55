//! Compile-time site configuration.

/// Scroll offset (px) past which the header takes its condensed look.
pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;

/// Scroll offset (px) past which the scroll-to-top button is revealed.
pub const SCROLL_TOP_THRESHOLD: f64 = 400.0;

/// Visible-area ratio a section must reach before its nav link highlights.
pub const SCROLL_SPY_THRESHOLD: f64 = 0.5;

/// Destination mailbox for the contact form's mail-client handoff.
pub const CONTACT_EMAIL: &str = "dnyaneshtupe@email.com";

/// Ids of the page sections the header links to, in page order.
pub const SECTION_IDS: [&str; 5] = ["home", "about", "skills", "projects", "contact"];
