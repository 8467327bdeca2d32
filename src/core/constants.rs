// Shared layout and interaction constants used by the scene compositor.

// Responsive layout
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0; // viewports narrower than this use the mobile tables
pub const MOBILE_DECOR_SCALE_X: f32 = 0.4; // decorative offsets shrink on small screens
pub const MOBILE_DECOR_SCALE_Y: f32 = 0.5;

// Parallax tilt (degrees per unit of pointer signal)
pub const DECOR_TILT_STRENGTH: f32 = 15.0;
pub const PANEL_TILT_STRENGTH: f32 = 25.0;

// Depth push (pixels per unit of depth weight)
pub const DECOR_DEPTH_PX: f32 = 10.0;
pub const PANEL_DEPTH_PX: f32 = 15.0;

// Hero title drift opposite to the pointer
pub const HERO_DRIFT_PX: f32 = 15.0;

// Transitions
pub const TRANSITION_SECS: f32 = 0.8;
pub const TRANSITION_EASING: &str = "cubic-bezier(0.16, 1, 0.3, 1)";
pub const PANEL_STAGGER_MS: f32 = 30.0; // per unit of depth weight; the expanded panel has none

// Form and confirmation timing
pub const FORM_RESET_DELAY_MS: i32 = 5_000;
pub const COPY_RESET_DELAY_MS: i32 = 2_000;

// Filter sentinel shown first in the category bar
pub const ALL_CATEGORIES: &str = "All";
