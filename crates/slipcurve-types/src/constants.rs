// ─────────────────────────────────────────────────────────────────────
// Slipcurve — Constants
// © 2026 Slipcurve Contributors. License: MIT
// ─────────────────────────────────────────────────────────────────────
/// Synchronous speed of the reference machine [rpm] (50 Hz, 4 poles).
pub const SYNC_RPM: f64 = 1500.0;

/// Nameplate torque of the reference machine [N·m]. Datasheet per-unit
/// values are scaled by this to get absolute torque.
pub const NAMEPLATE_TORQUE_NM: f64 = 121.0;

/// Line-to-line supply voltage [V].
pub const LINE_VOLTAGE_V: f64 = 400.0;

/// Supply frequency [Hz].
pub const FREQUENCY_HZ: f64 = 50.0;

/// Number of stator phases.
pub const PHASE_COUNT: usize = 3;

/// Smallest impedance the configuration accepts [Ω]. Keeps the Thevenin
/// divide and the R2/s term away from the zero singularity.
pub const MIN_IMPEDANCE_OHM: f64 = 1e-6;

/// Default ratio of locked-rotor to running rotor resistance for the
/// slip-dependent R2(s) shape.
pub const DEFAULT_R2_HIGH_MULTIPLIER: f64 = 5.0;
