//! Page-wide tunables.

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding `"light"` or `"dark"`.
pub const THEME_STORAGE_KEY: &str = "theme";

// ── Navigation ──────────────────────────────────────────────────

/// Added to `scrollY` before testing section bounds, so a section counts as
/// current slightly before its top reaches the viewport edge.
pub const SCROLL_SPY_OFFSET_PX: f64 = 100.0;

/// Class of the navbar links. They scroll through their own click handler,
/// so the page-level anchor fallback leaves them alone.
pub const NAV_LINK_CLASS: &str = "nav-link";

/// Section the call-to-action button scrolls to.
pub const CTA_TARGET_SECTION: &str = "features";

// ── Contact form ────────────────────────────────────────────────

/// Simulated server round trip before the form reports success.
pub const SUBMIT_DELAY_MS: u32 = 2_000;

/// How long a toast notification stays visible.
pub const TOAST_DURATION_MS: u32 = 3_000;

pub const NAME_MIN_CHARS: usize = 2;
pub const MESSAGE_MIN_CHARS: usize = 10;

/// Border colour applied to an invalid field.
pub const ERROR_BORDER_COLOR: &str = "#e74c3c";

// ── Scroll reveal ───────────────────────────────────────────────

/// Fraction of a card that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Shrinks the bottom of the viewport so cards reveal a little late.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Class added to a card once it has been seen.
pub const REVEAL_CLASS: &str = "visible";
