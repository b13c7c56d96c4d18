// ─────────────────────────────────────────────────────────────────────
// Slipcurve — Thevenin Transform
// © 2026 Slipcurve Contributors. License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Thevenin equivalent of the stator/magnetizing branch.

use num_complex::Complex64;
use slipcurve_types::state::TheveninEquivalent;

/// Collapse the stator branch (R1 + jX1) and magnetizing branch (jXm)
/// into a Thevenin source and series impedance as seen from the rotor:
///
///   V_th = V_phase · jXm / (R1 + j(X1 + Xm))
///   Z_th = jXm · (R1 + jX1) / (R1 + j(X1 + Xm))
///
/// Closed-form, no branching. Degenerate inputs (all impedances zero)
/// propagate NaN; the configuration layer rejects them before this is
/// ever called.
pub fn compute_thevenin(r1: f64, x1: f64, xm: f64, v_phase: f64) -> TheveninEquivalent {
    let j = Complex64::i();
    let z_stator = Complex64::new(r1, x1);
    let z_mag = j * xm;
    let denom = Complex64::new(r1, x1 + xm);

    TheveninEquivalent {
        v_th: v_phase * z_mag / denom,
        z_th: z_mag * z_stator / denom,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const V_PHASE: f64 = 230.94010767585033; // 400 V line / √3

    #[test]
    fn test_reference_machine_values() {
        let th = compute_thevenin(0.08, 0.12, 30.0, V_PHASE);
        // Hand-computed from the closed form above.
        assert!((th.r_th() - 72.0 / 907.2208).abs() < 1e-9, "R_th = {}", th.r_th());
        assert!((th.x_th() - 108.624 / 907.2208).abs() < 1e-9, "X_th = {}", th.x_th());
        assert!((th.v_mag() - 230.0192).abs() < 1e-3, "|V_th| = {}", th.v_mag());
    }

    #[test]
    fn test_source_is_attenuated() {
        let th = compute_thevenin(0.08, 0.12, 30.0, V_PHASE);
        assert!(th.v_mag() < V_PHASE);
        assert!(th.v_mag() > 0.0);
    }

    #[test]
    fn test_large_xm_approaches_terminal_quantities() {
        // Xm → ∞: the magnetizing branch disappears and the Thevenin
        // equivalent degenerates to the bare stator branch.
        let th = compute_thevenin(0.08, 0.12, 1.0e9, V_PHASE);
        assert!((th.v_mag() - V_PHASE).abs() < 1e-3);
        assert!((th.r_th() - 0.08).abs() < 1e-6);
        assert!((th.x_th() - 0.12).abs() < 1e-6);
    }

    #[test]
    fn test_finite_for_positive_inputs() {
        for &xm in &[5.0, 30.0, 100.0] {
            for &r1 in &[0.01, 0.08, 0.2] {
                let th = compute_thevenin(r1, 0.12, xm, V_PHASE);
                assert!(th.r_th().is_finite());
                assert!(th.x_th().is_finite());
                assert!(th.v_mag().is_finite());
                assert!(th.r_th() > 0.0);
            }
        }
    }
}
