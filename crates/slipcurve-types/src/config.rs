// ─────────────────────────────────────────────────────────────────────
// Slipcurve — Config
// © 2026 Slipcurve Contributors. License: MIT
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_R2_HIGH_MULTIPLIER, FREQUENCY_HZ, LINE_VOLTAGE_V, MIN_IMPEDANCE_OHM, PHASE_COUNT,
};
use crate::error::{SlipcurveError, SlipcurveResult};

/// Per-phase equivalent-circuit parameters of the machine.
///
/// All impedances are referred to the stator side. The control surface
/// mutates a copy of this struct on every slider event and hands it to
/// the model; the struct itself carries no derived state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MachineParameters {
    /// Stator resistance [Ω].
    pub r1: f64,
    /// Stator leakage reactance [Ω].
    pub x1: f64,
    /// Magnetizing reactance [Ω].
    pub xm: f64,
    /// Rotor resistance at low slip [Ω].
    pub r2_low: f64,
    /// Rotor leakage reactance [Ω].
    pub x2: f64,
    /// Line-to-line supply voltage [V].
    #[serde(default = "default_v_line")]
    pub v_line: f64,
    /// Supply frequency [Hz].
    #[serde(default = "default_frequency")]
    pub frequency_hz: f64,
    /// Number of stator phases.
    #[serde(default = "default_phases")]
    pub phases: usize,
}

fn default_v_line() -> f64 {
    LINE_VOLTAGE_V
}
fn default_frequency() -> f64 {
    FREQUENCY_HZ
}
fn default_phases() -> usize {
    PHASE_COUNT
}

impl Default for MachineParameters {
    fn default() -> Self {
        MachineParameters {
            r1: 0.08,
            x1: 0.12,
            xm: 30.0,
            r2_low: 0.09,
            x2: 0.4,
            v_line: LINE_VOLTAGE_V,
            frequency_hz: FREQUENCY_HZ,
            phases: PHASE_COUNT,
        }
    }
}

impl MachineParameters {
    /// Load from a JSON file.
    pub fn from_file(path: &str) -> SlipcurveResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&contents)?;
        params.validate()?;
        Ok(params)
    }

    /// Line-to-neutral voltage [V].
    pub fn v_phase(&self) -> f64 {
        self.v_line / 3.0_f64.sqrt()
    }

    /// Electrical synchronous speed [rad/s].
    pub fn omega_sync(&self) -> f64 {
        2.0 * std::f64::consts::PI * self.frequency_hz
    }

    /// Reject parameter sets that would put a zero into a denominator.
    pub fn validate(&self) -> SlipcurveResult<()> {
        let checks = [
            ("R1", self.r1),
            ("X1", self.x1),
            ("Xm", self.xm),
            ("R2", self.r2_low),
            ("X2", self.x2),
            ("V_line", self.v_line),
            ("frequency", self.frequency_hz),
        ];
        for (name, value) in checks {
            if !value.is_finite() || value < MIN_IMPEDANCE_OHM {
                return Err(SlipcurveError::ConfigError(format!(
                    "{name} must be finite and >= {MIN_IMPEDANCE_OHM}, got {value}"
                )));
            }
        }
        if self.phases == 0 {
            return Err(SlipcurveError::ConfigError(
                "phase count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Snap every tunable field into its declared control range.
    pub fn clamp_to_controls(&mut self) {
        self.r1 = controls::R1.clamp(self.r1);
        self.x1 = controls::X1.clamp(self.x1);
        self.xm = controls::XM.clamp(self.xm);
        self.r2_low = controls::R2.clamp(self.r2_low);
        self.x2 = controls::X2.clamp(self.x2);
    }
}

/// Shape of the slip-dependent rotor resistance
/// R2(s) = R2_low + (R2_high − R2_low) · |s|ⁿ / (|s|ⁿ + k),
/// with R2_high = multiplier · R2_low.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct R2ShapeParameters {
    /// Shape exponent n > 0. Larger n makes the transition sharper.
    pub n: f64,
    /// Center constant k > 0. R2(s) reaches the midpoint at |s| = k^(1/n).
    pub k: f64,
    /// R2_high / R2_low ratio.
    #[serde(default = "default_multiplier")]
    pub r2_high_multiplier: f64,
}

fn default_multiplier() -> f64 {
    DEFAULT_R2_HIGH_MULTIPLIER
}

impl Default for R2ShapeParameters {
    fn default() -> Self {
        R2ShapeParameters {
            n: 2.9,
            k: 1.42,
            r2_high_multiplier: DEFAULT_R2_HIGH_MULTIPLIER,
        }
    }
}

impl R2ShapeParameters {
    pub fn validate(&self) -> SlipcurveResult<()> {
        if !(self.n.is_finite() && self.n > 0.0) {
            return Err(SlipcurveError::ConfigError(format!(
                "shape exponent n must be positive, got {}",
                self.n
            )));
        }
        if !(self.k.is_finite() && self.k > 0.0) {
            return Err(SlipcurveError::ConfigError(format!(
                "center constant k must be positive, got {}",
                self.k
            )));
        }
        if !(self.r2_high_multiplier.is_finite() && self.r2_high_multiplier >= 1.0) {
            return Err(SlipcurveError::ConfigError(format!(
                "R2_high multiplier must be >= 1, got {}",
                self.r2_high_multiplier
            )));
        }
        Ok(())
    }

    pub fn clamp_to_controls(&mut self) {
        self.n = controls::N_SHAPE.clamp(self.n);
        self.k = controls::K_CENTER.clamp(self.k);
    }
}

/// Declared bounds and step for one numeric control.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ControlRange {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        ControlRange { min, max, step }
    }

    /// Clamp a raw value into [min, max]. The lower bound is positive for
    /// every impedance control, so a clamped value can never divide by zero.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }

    /// Snap to the nearest step from the lower bound, then clamp.
    pub fn quantize(&self, value: f64) -> f64 {
        let steps = ((self.clamp(value) - self.min) / self.step).round();
        self.clamp(self.min + steps * self.step)
    }
}

/// Control ranges exposed by the parameter input surface.
pub mod controls {
    use super::ControlRange;

    pub const R1: ControlRange = ControlRange::new(0.01, 0.2, 0.005);
    pub const R2: ControlRange = ControlRange::new(0.01, 0.2, 0.005);
    pub const XM: ControlRange = ControlRange::new(5.0, 100.0, 1.0);
    pub const X1: ControlRange = ControlRange::new(0.01, 1.0, 0.01);
    pub const X2: ControlRange = ControlRange::new(0.01, 1.0, 0.01);
    pub const N_SHAPE: ControlRange = ControlRange::new(0.5, 5.0, 0.1);
    pub const K_CENTER: ControlRange = ControlRange::new(0.001, 2.0, 0.01);
}
