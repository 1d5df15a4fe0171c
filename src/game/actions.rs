//! Semantic action IDs for Dragon Clicker click targets.
//!
//! Each constant names a distinct tappable action. Render code registers
//! them with the click-target registry; the mouse handler dispatches them
//! back as `InputEvent::Click`.

// ── Core actions ────────────────────────────────────────────────
pub const CLICK_DRAGON: u16 = 0;

// ── Tab navigation (base + tab index 0..5) ──────────────────────
pub const TAB_BASE: u16 = 10;

// ── Upgrade purchases ───────────────────────────────────────────
pub const UPGRADE_POWER: u16 = 100;
pub const UPGRADE_LEVEL: u16 = 101;
