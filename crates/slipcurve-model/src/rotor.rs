// ─────────────────────────────────────────────────────────────────────
// Slipcurve — Rotor Resistance
// © 2026 Slipcurve Contributors. License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Slip-dependent rotor resistance.
//!
//! Deep-bar and double-cage rotors present a higher effective resistance
//! at high rotor frequency (high |slip|) than near synchronous speed.
//! That is modeled here phenomenologically by a saturating interpolation
//! between R2_low and R2_high, not derived from bar geometry.

use ndarray::Array1;
use slipcurve_types::config::R2ShapeParameters;
use slipcurve_types::state::{R2Curve, SlipDomain};

/// Effective rotor resistance at one slip value:
///
///   R2(s) = R2_low + (R2_high − R2_low) · |s|ⁿ / (|s|ⁿ + k)
///
/// Even in slip: the rotor frequency depends on |s|, and a signed power
/// would be undefined over the reals for s < 0 and fractional n. R2(0)
/// = R2_low, R2 → R2_high as |s| → ∞, non-decreasing in |s| throughout.
pub fn rotor_resistance(s: f64, r2_low: f64, r2_high: f64, n: f64, k: f64) -> f64 {
    let sn = s.abs().powf(n);
    r2_low + (r2_high - r2_low) * sn / (sn + k)
}

/// Sample R2(s) over a slip domain.
pub fn r2_curve(domain: &SlipDomain, r2_low: f64, shape: &R2ShapeParameters) -> R2Curve {
    let r2_high = shape.r2_high_multiplier * r2_low;
    let r2 = Array1::from_iter(
        domain
            .iter()
            .map(|s| rotor_resistance(s, r2_low, r2_high, shape.n, shape.k)),
    );
    R2Curve {
        slip: domain.values().clone(),
        r2,
    }
}
