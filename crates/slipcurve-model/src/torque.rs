// ─────────────────────────────────────────────────────────────────────
// Slipcurve — Torque Equation
// © 2026 Slipcurve Contributors. License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Electromagnetic torque from the Thevenin-reduced equivalent circuit.

use ndarray::Array1;
use slipcurve_types::config::R2ShapeParameters;
use slipcurve_types::state::{PeakPoint, R2Curve, SlipDomain, TheveninEquivalent, TorqueCurve};

use crate::rotor;

/// Torque at a single slip sample for a given effective rotor resistance:
///
///   T(s) = q · |V_th|² · (R2/s) / (ω_sync · [(R_th + R2/s)² + (X_th + X2)²])
///
/// with q the phase count. s > 0 motors (positive torque), s < 0 brakes
/// (R2/s flips sign). The domain construction keeps s away from 0.
fn torque_at(
    thevenin: &TheveninEquivalent,
    r2_eff: f64,
    x2: f64,
    s: f64,
    omega_sync: f64,
    phases: usize,
) -> f64 {
    let r2_over_s = r2_eff / s;
    let numerator = phases as f64 * thevenin.v_mag().powi(2) * r2_over_s;
    let denominator = (thevenin.r_th() + r2_over_s).powi(2) + (thevenin.x_th() + x2).powi(2);
    numerator / (omega_sync * denominator)
}

/// Torque curve with a constant rotor resistance.
pub fn torque_constant_r2(
    thevenin: &TheveninEquivalent,
    r2: f64,
    x2: f64,
    domain: &SlipDomain,
    omega_sync: f64,
    phases: usize,
) -> TorqueCurve {
    let torque = Array1::from_iter(
        domain
            .iter()
            .map(|s| torque_at(thevenin, r2, x2, s, omega_sync, phases)),
    );
    TorqueCurve {
        slip: domain.values().clone(),
        torque,
    }
}

/// Torque curve with the slip-dependent R2(s), together with the
/// sampled resistance curve for the diagnostic panel.
pub fn torque_variable_r2(
    thevenin: &TheveninEquivalent,
    r2_low: f64,
    x2: f64,
    shape: &R2ShapeParameters,
    domain: &SlipDomain,
    omega_sync: f64,
    phases: usize,
) -> (TorqueCurve, R2Curve) {
    let r2_curve = rotor::r2_curve(domain, r2_low, shape);
    let torque = Array1::from_iter(
        domain
            .iter()
            .zip(r2_curve.r2.iter())
            .map(|(s, &r2_eff)| torque_at(thevenin, r2_eff, x2, s, omega_sync, phases)),
    );
    let curve = TorqueCurve {
        slip: domain.values().clone(),
        torque,
    };
    (curve, r2_curve)
}

/// Sampled maximum of a torque curve.
///
/// A discrete scan, not a continuous optimum: resolution is bounded by
/// the domain's sample density. Exact ties keep the first occurrence in
/// slip-ascending order. NaN samples are skipped rather than allowed to
/// poison the comparison. Returns None only for an empty curve.
pub fn find_peak(curve: &TorqueCurve) -> Option<PeakPoint> {
    let mut peak: Option<PeakPoint> = None;
    for (&s, &t) in curve.slip.iter().zip(curve.torque.iter()) {
        if t.is_nan() {
            continue;
        }
        match peak {
            Some(p) if t <= p.torque => {}
            _ => peak = Some(PeakPoint { slip: s, torque: t }),
        }
    }
    peak
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thevenin::compute_thevenin;
    use slipcurve_types::config::MachineParameters;

    fn reference_setup() -> (TheveninEquivalent, MachineParameters, SlipDomain) {
        let params = MachineParameters::default();
        let th = compute_thevenin(params.r1, params.x1, params.xm, params.v_phase());
        (th, params, SlipDomain::reference())
    }

    #[test]
    fn test_startup_torque_reference_machine() {
        // R1=0.08, R2=0.09, Xm=30, X1=0.12, X2=0.4, 400 V, 50 Hz, 3 phases.
        // Closed-form at s = 1 gives ≈ 152.2 N·m.
        let (th, params, domain) = reference_setup();
        let t = torque_constant_r2(
            &th,
            params.r2_low,
            params.x2,
            &domain,
            params.omega_sync(),
            params.phases,
        );
        // Nearest reference-domain sample to s = 1.0.
        let idx = t
            .slip
            .iter()
            .enumerate()
            .min_by(|a, b| {
                (a.1 - 1.0)
                    .abs()
                    .partial_cmp(&(b.1 - 1.0).abs())
                    .unwrap()
            })
            .map(|(i, _)| i)
            .unwrap();
        let t_start = t.torque[idx];
        assert!(
            (t_start - 152.2).abs() / 152.2 < 0.01,
            "start-up torque {t_start} not within 1% of 152.2"
        );
    }

    #[test]
    fn test_sign_convention() {
        let (th, params, domain) = reference_setup();
        let curve = torque_constant_r2(
            &th,
            params.r2_low,
            params.x2,
            &domain,
            params.omega_sync(),
            params.phases,
        );
        for (&s, &t) in curve.slip.iter().zip(curve.torque.iter()) {
            assert!(t.is_finite(), "non-finite torque at s = {s}");
            if s > 0.0 {
                assert!(t > 0.0, "motoring torque not positive at s = {s}");
            } else {
                assert!(t < 0.0, "braking torque not negative at s = {s}");
            }
        }
    }

    #[test]
    fn test_peak_slip_in_motoring_range() {
        let (th, params, domain) = reference_setup();
        let curve = torque_constant_r2(
            &th,
            params.r2_low,
            params.x2,
            &domain,
            params.omega_sync(),
            params.phases,
        );
        let peak = find_peak(&curve).unwrap();
        assert!(peak.slip > 0.0 && peak.slip < 1.0, "pull-out slip {}", peak.slip);
        // Analytic pull-out slip: R2 / sqrt(R_th² + (X_th + X2)²) ≈ 0.171.
        assert!((peak.slip - 0.171).abs() < 0.01, "pull-out slip {}", peak.slip);
    }

    #[test]
    fn test_peak_dominates_curve() {
        let (th, params, domain) = reference_setup();
        let curve = torque_constant_r2(
            &th,
            params.r2_low,
            params.x2,
            &domain,
            params.omega_sync(),
            params.phases,
        );
        let peak = find_peak(&curve).unwrap();
        for &t in curve.torque.iter() {
            assert!(peak.torque >= t);
        }
    }

    #[test]
    fn test_peak_tie_break_first_occurrence() {
        let curve = TorqueCurve {
            slip: Array1::from_vec(vec![0.1, 0.2, 0.3]),
            torque: Array1::from_vec(vec![5.0, 5.0, 1.0]),
        };
        let peak = find_peak(&curve).unwrap();
        assert!((peak.slip - 0.1).abs() < 1e-15);
    }

    #[test]
    fn test_peak_skips_nan_samples() {
        let curve = TorqueCurve {
            slip: Array1::from_vec(vec![0.1, 0.2, 0.3]),
            torque: Array1::from_vec(vec![1.0, f64::NAN, 2.0]),
        };
        let peak = find_peak(&curve).unwrap();
        assert!((peak.torque - 2.0).abs() < 1e-15);
    }

    #[test]
    fn test_peak_empty_curve() {
        let curve = TorqueCurve {
            slip: Array1::zeros(0),
            torque: Array1::zeros(0),
        };
        assert!(find_peak(&curve).is_none());
    }

    #[test]
    fn test_variable_r2_raises_startup_torque() {
        // Higher rotor resistance at s = 1 moves torque toward the peak,
        // the point of the deep-bar design.
        let (th, params, domain) = reference_setup();
        let shape = R2ShapeParameters::default();
        let constant = torque_constant_r2(
            &th,
            params.r2_low,
            params.x2,
            &domain,
            params.omega_sync(),
            params.phases,
        );
        let (variable, r2) = torque_variable_r2(
            &th,
            params.r2_low,
            params.x2,
            &shape,
            &domain,
            params.omega_sync(),
            params.phases,
        );
        let idx = domain
            .iter()
            .position(|s| (s - 1.0).abs() < 2e-3)
            .expect("domain covers s = 1");
        assert!(variable.torque[idx] > constant.torque[idx]);
        assert!(r2.r2[idx] > params.r2_low);
    }

    #[test]
    fn test_variable_r2_curve_lengths_match() {
        let (th, params, domain) = reference_setup();
        let shape = R2ShapeParameters::default();
        let (curve, r2) = torque_variable_r2(
            &th,
            params.r2_low,
            params.x2,
            &shape,
            &domain,
            params.omega_sync(),
            params.phases,
        );
        assert_eq!(curve.len(), domain.len());
        assert_eq!(r2.r2.len(), domain.len());
    }
}
