// ─────────────────────────────────────────────────────────────────────
// Slipcurve — State
// © 2026 Slipcurve Contributors. License: MIT
// ─────────────────────────────────────────────────────────────────────
use ndarray::Array1;
use num_complex::Complex64;

use crate::error::{SlipcurveError, SlipcurveResult};

/// Ordered slip samples covering braking through start-up.
///
/// s = 0 (synchronous speed) is excluded by construction: the negative
/// band stops at -s_edge and the positive band starts at +s_edge, so the
/// R2/s term in the torque equation never sees a zero denominator.
#[derive(Debug, Clone, PartialEq)]
pub struct SlipDomain {
    values: Array1<f64>,
}

impl SlipDomain {
    /// Edge of the exclusion band around s = 0.
    pub const S_EDGE: f64 = 1e-3;

    /// The reference domain: 500 samples on [-1, -0.001] followed by
    /// 1000 samples on [0.001, 2].
    pub fn reference() -> Self {
        Self::new(-1.0, 2.0, 500, 1000).expect("reference domain bounds are valid")
    }

    /// Build a domain spanning [s_min, -S_EDGE] ∪ [S_EDGE, s_max].
    ///
    /// `n_negative` may be zero for a motoring-only domain; `n_positive`
    /// must be at least 2.
    pub fn new(
        s_min: f64,
        s_max: f64,
        n_negative: usize,
        n_positive: usize,
    ) -> SlipcurveResult<Self> {
        if !(s_min < -Self::S_EDGE && s_max > Self::S_EDGE) {
            return Err(SlipcurveError::ConfigError(format!(
                "slip bounds must straddle the ±{} exclusion band, got [{s_min}, {s_max}]",
                Self::S_EDGE
            )));
        }
        if n_positive < 2 || (n_negative != 0 && n_negative < 2) {
            return Err(SlipcurveError::ConfigError(
                "slip domain needs at least 2 samples per band".to_string(),
            ));
        }

        let negative = if n_negative == 0 {
            Array1::zeros(0)
        } else {
            let mut band = Array1::linspace(s_min, -Self::S_EDGE, n_negative);
            // linspace reaches the endpoint via s_min + (n-1)·step, which
            // can land a ULP inside the exclusion band; pin it exactly.
            band[n_negative - 1] = -Self::S_EDGE;
            band
        };
        let positive = Array1::linspace(Self::S_EDGE, s_max, n_positive);

        let mut values = Vec::with_capacity(negative.len() + positive.len());
        values.extend(negative.iter().copied());
        values.extend(positive.iter().copied());
        Ok(SlipDomain {
            values: Array1::from_vec(values),
        })
    }

    pub fn values(&self) -> &Array1<f64> {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }
}

/// Thevenin equivalent of the stator and magnetizing branches as seen
/// from the rotor: a single source behind a single series impedance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TheveninEquivalent {
    /// Equivalent source voltage [V], complex relative to the terminal
    /// phase voltage taken as the phase reference.
    pub v_th: Complex64,
    /// Equivalent series impedance [Ω].
    pub z_th: Complex64,
}

impl TheveninEquivalent {
    pub fn r_th(&self) -> f64 {
        self.z_th.re
    }

    pub fn x_th(&self) -> f64 {
        self.z_th.im
    }

    /// Magnitude of the equivalent source voltage [V].
    pub fn v_mag(&self) -> f64 {
        self.v_th.norm()
    }
}

/// Electromagnetic torque sampled over a slip domain.
#[derive(Debug, Clone, PartialEq)]
pub struct TorqueCurve {
    pub slip: Array1<f64>,
    /// Torque [N·m], one entry per slip sample.
    pub torque: Array1<f64>,
}

impl TorqueCurve {
    pub fn len(&self) -> usize {
        self.slip.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slip.is_empty()
    }
}

/// Rotor resistance sampled over a slip domain, for the secondary panel.
#[derive(Debug, Clone, PartialEq)]
pub struct R2Curve {
    pub slip: Array1<f64>,
    /// Effective rotor resistance [Ω].
    pub r2: Array1<f64>,
}

/// The sampled maximum of a torque curve (pull-out point).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeakPoint {
    pub slip: f64,
    pub torque: f64,
}

/// One measured datasheet point, already converted to (slip, N·m).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExperimentalPoint {
    pub slip: f64,
    pub torque: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_domain_shape() {
        let domain = SlipDomain::reference();
        assert_eq!(domain.len(), 1500);
        assert!((domain.values()[0] - (-1.0)).abs() < 1e-12);
        assert!((domain.values()[1499] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_reference_domain_excludes_zero() {
        let domain = SlipDomain::reference();
        for s in domain.iter() {
            assert!(s.abs() >= SlipDomain::S_EDGE, "slip sample too close to 0: {s}");
        }
    }

    #[test]
    fn test_reference_domain_is_sorted() {
        let domain = SlipDomain::reference();
        let v = domain.values();
        for i in 1..v.len() {
            assert!(v[i] > v[i - 1], "domain not ascending at {i}");
        }
    }

    #[test]
    fn test_negative_band_ends_exactly_on_edge() {
        // The accumulated linspace endpoint must not drift inside the
        // exclusion band by rounding.
        for n_neg in [2, 7, 500, 501] {
            let domain = SlipDomain::new(-1.0, 2.0, n_neg, 10).unwrap();
            let last_negative = domain.values()[n_neg - 1];
            assert_eq!(last_negative, -SlipDomain::S_EDGE, "n_neg = {n_neg}");
        }
    }

    #[test]
    fn test_motoring_only_domain() {
        let domain = SlipDomain::new(-1.0, 2.0, 0, 100).unwrap();
        assert_eq!(domain.len(), 100);
        assert!(domain.iter().all(|s| s > 0.0));
    }

    #[test]
    fn test_rejects_bounds_inside_exclusion_band() {
        assert!(SlipDomain::new(-1e-4, 2.0, 10, 10).is_err());
        assert!(SlipDomain::new(-1.0, 5e-4, 10, 10).is_err());
    }

    #[test]
    fn test_thevenin_accessors() {
        let th = TheveninEquivalent {
            v_th: Complex64::new(3.0, 4.0),
            z_th: Complex64::new(0.08, 0.12),
        };
        assert!((th.v_mag() - 5.0).abs() < 1e-12);
        assert!((th.r_th() - 0.08).abs() < 1e-12);
        assert!((th.x_th() - 0.12).abs() < 1e-12);
    }
}
