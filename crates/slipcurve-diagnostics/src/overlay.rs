// ─────────────────────────────────────────────────────────────────────
// Slipcurve — Experimental Overlay Loader
// © 2026 Slipcurve Contributors. License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Datasheet torque-curve loader.
//!
//! The measured curve comes as a headerless two-column CSV of
//! (rotor speed [rpm], torque per unit of nameplate). Rows convert to
//! (slip, absolute torque) and sort by ascending slip. The overlay is
//! read once at startup, before the model runs; any failure here is
//! recoverable — the caller drops the overlay and the model continues.

use slipcurve_types::error::{SlipcurveError, SlipcurveResult};
use slipcurve_types::state::ExperimentalPoint;

/// Parse overlay rows from CSV text.
pub fn parse_overlay(
    contents: &str,
    sync_rpm: f64,
    nameplate_nm: f64,
) -> SlipcurveResult<Vec<ExperimentalPoint>> {
    let mut points = Vec::new();
    for (idx, raw) in contents.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let mut fields = line.split(',');
        let rpm = next_field(&mut fields, idx, "rpm")?;
        let per_unit = next_field(&mut fields, idx, "per-unit torque")?;
        if fields.next().is_some() {
            return Err(SlipcurveError::Overlay {
                line: idx + 1,
                message: "expected exactly two columns".to_string(),
            });
        }
        points.push(ExperimentalPoint {
            slip: (sync_rpm - rpm) / sync_rpm,
            torque: per_unit * nameplate_nm,
        });
    }
    points.sort_by(|a, b| a.slip.total_cmp(&b.slip));
    Ok(points)
}

fn next_field<'a>(
    fields: &mut impl Iterator<Item = &'a str>,
    idx: usize,
    name: &str,
) -> SlipcurveResult<f64> {
    let field = fields.next().ok_or_else(|| SlipcurveError::Overlay {
        line: idx + 1,
        message: format!("missing {name} column"),
    })?;
    field.trim().parse::<f64>().map_err(|e| SlipcurveError::Overlay {
        line: idx + 1,
        message: format!("bad {name} value {:?}: {e}", field.trim()),
    })
}

/// Load the overlay from a CSV file.
pub fn load_overlay(
    path: &str,
    sync_rpm: f64,
    nameplate_nm: f64,
) -> SlipcurveResult<Vec<ExperimentalPoint>> {
    let contents = std::fs::read_to_string(path)?;
    parse_overlay(&contents, sync_rpm, nameplate_nm)
}
