// ─────────────────────────────────────────────────────────────────────
// Slipcurve — Diagnostics
// © 2026 Slipcurve Contributors. License: MIT
// ─────────────────────────────────────────────────────────────────────
pub mod overlay;
pub mod view;
