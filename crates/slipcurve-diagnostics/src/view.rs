// ─────────────────────────────────────────────────────────────────────
// Slipcurve — Plot View-Model
// © 2026 Slipcurve Contributors. License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Headless view-model for the two stacked plot panels.
//!
//! Pure data: a renderer maps series and markers to its own primitives,
//! and the model stays testable with no graphics dependency. Rebuilt in
//! full from every `ModelSolution`, like the solution itself.

use slipcurve_model::solution::ModelSolution;
use slipcurve_types::state::{ExperimentalPoint, PeakPoint};

/// Slip axis range, displayed reversed: high slip on the left.
pub const SLIP_AXIS: (f64, f64) = (2.0, -1.0);

/// Fixed torque axis range [N·m].
pub const TORQUE_AXIS: (f64, f64) = (-150.0, 500.0);

/// One polyline on a panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSeries {
    pub label: String,
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

/// A vertical slip marker on the torque panel.
#[derive(Debug, Clone, PartialEq)]
pub struct SlipMarker {
    pub slip: f64,
    pub label: String,
}

/// View-model for the torque panel plus the R2(s) panel below it.
#[derive(Debug, Clone, PartialEq)]
pub struct TorquePlotView {
    /// Model curves and, when available, the measured overlay.
    pub torque_series: Vec<PlotSeries>,
    /// Secondary panel: effective rotor resistance vs slip.
    pub r2_series: PlotSeries,
    /// Synchronous-speed and start-up markers.
    pub markers: Vec<SlipMarker>,
    /// Crosshair position for the constant-R2 pull-out point.
    pub peak: PeakPoint,
    pub peak_label: String,
    pub slip_axis: (f64, f64),
    pub torque_axis: (f64, f64),
}

impl TorquePlotView {
    pub fn build(solution: &ModelSolution, overlay: Option<&[ExperimentalPoint]>) -> Self {
        let mut torque_series = vec![
            PlotSeries {
                label: "Torque vs. Slip".to_string(),
                xs: solution.constant.slip.to_vec(),
                ys: solution.constant.torque.to_vec(),
            },
            PlotSeries {
                label: "Torque with R2(s)".to_string(),
                xs: solution.variable.slip.to_vec(),
                ys: solution.variable.torque.to_vec(),
            },
        ];
        if let Some(points) = overlay {
            torque_series.push(PlotSeries {
                label: "Experimental (datasheet)".to_string(),
                xs: points.iter().map(|p| p.slip).collect(),
                ys: points.iter().map(|p| p.torque).collect(),
            });
        }

        let peak = solution.peak_constant;
        TorquePlotView {
            torque_series,
            r2_series: PlotSeries {
                label: "R2(s)".to_string(),
                xs: solution.r2.slip.to_vec(),
                ys: solution.r2.r2.to_vec(),
            },
            markers: vec![
                SlipMarker {
                    slip: 0.0,
                    label: "Synchronous speed (s=0)".to_string(),
                },
                SlipMarker {
                    slip: 1.0,
                    label: "Start-up torque (s=1)".to_string(),
                },
            ],
            peak,
            peak_label: format!(
                "Peak Torque ≈ {:.1} Nm\nat Slip ≈ {:.3}",
                peak.torque, peak.slip
            ),
            slip_axis: SLIP_AXIS,
            torque_axis: TORQUE_AXIS,
        }
    }
}
