// ─────────────────────────────────────────────────────────────────────
// Slipcurve — Model Solution
// © 2026 Slipcurve Contributors. License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Full recompute: one call per parameter-change event.

use slipcurve_types::config::{MachineParameters, R2ShapeParameters};
use slipcurve_types::error::SlipcurveResult;
use slipcurve_types::state::{PeakPoint, R2Curve, SlipDomain, TheveninEquivalent, TorqueCurve};

use crate::thevenin::compute_thevenin;
use crate::torque::{find_peak, torque_constant_r2, torque_variable_r2};

/// Everything derived from one parameter set over one slip domain.
///
/// Plain data with no back-reference to the inputs; a renderer consumes
/// it without touching the model, and the model never retains it.
#[derive(Debug, Clone)]
pub struct ModelSolution {
    pub thevenin: TheveninEquivalent,
    /// Torque with constant R2.
    pub constant: TorqueCurve,
    /// Torque with slip-dependent R2(s).
    pub variable: TorqueCurve,
    /// The R2(s) samples behind `variable`.
    pub r2: R2Curve,
    /// Pull-out point of the constant-R2 curve.
    pub peak_constant: PeakPoint,
    /// Pull-out point of the variable-R2 curve.
    pub peak_variable: PeakPoint,
}

/// Evaluate the whole model for one snapshot of the parameters.
///
/// Stateless: identical inputs give identical output, so the control
/// surface may call this on every event without debouncing. Runs in
/// O(domain length).
pub fn solve(
    params: &MachineParameters,
    shape: &R2ShapeParameters,
    domain: &SlipDomain,
) -> SlipcurveResult<ModelSolution> {
    params.validate()?;
    shape.validate()?;

    let thevenin = compute_thevenin(params.r1, params.x1, params.xm, params.v_phase());
    let omega_sync = params.omega_sync();

    let constant = torque_constant_r2(
        &thevenin,
        params.r2_low,
        params.x2,
        domain,
        omega_sync,
        params.phases,
    );
    let (variable, r2) = torque_variable_r2(
        &thevenin,
        params.r2_low,
        params.x2,
        shape,
        domain,
        omega_sync,
        params.phases,
    );

    // The domain is non-empty by construction; validated parameters
    // produce no all-NaN curve.
    let peak_constant = find_peak(&constant).expect("non-empty curve");
    let peak_variable = find_peak(&variable).expect("non-empty curve");

    Ok(ModelSolution {
        thevenin,
        constant,
        variable,
        r2,
        peak_constant,
        peak_variable,
    })
}
