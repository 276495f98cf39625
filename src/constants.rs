use std::f64::consts::PI;

/// Maximum slew rate, in rad/s
pub const MAX_SLEW_RATE_RAD_S: f64 = 1.515E-3;

/// Slew acceleration (and deceleration), in rad/s²
pub const SLEW_ACCEL_RAD_S2: f64 = 8.2E-6;

/// Dwell at the initial attitude before the slew begins, in seconds
pub const PRE_SLEW_DWELL_S: f64 = 140.0;

/// Settling dwell at the target attitude after the slew completes, in seconds
pub const POST_SLEW_DWELL_S: f64 = 160.0;

/// One arcsecond, in radians
pub const ARCSEC_TO_RAD: f64 = PI / 180.0 / 3600.0;

/// One radian, in arcseconds
pub const RAD_TO_ARCSEC: f64 = 1.0 / ARCSEC_TO_RAD;

/// Slew angles below this threshold are considered degenerate, in radians
pub const MIN_SLEW_ANGLE_RAD: f64 = 1.0E-9;
