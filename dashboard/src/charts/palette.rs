//! Dashboard colour palette.

/// Brand colour.
pub const PRIMARY: &str = "#6366f1";
/// Lighter brand colour, used for overlay text.
pub const PRIMARY_LIGHT: &str = "#818cf8";
/// Brand colour at 1/8 opacity, used under lines.
pub const PRIMARY_FILL: &str = "#6366f120";
/// Included / supported.
pub const SUCCESS: &str = "#22c55e";
/// Estimated / secondary measure.
pub const WARNING: &str = "#f59e0b";
/// Excluded / unsupported.
pub const DANGER: &str = "#ef4444";
/// Neutral.
pub const MUTED: &str = "#64748b";
