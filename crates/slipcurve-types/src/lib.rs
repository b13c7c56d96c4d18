// ─────────────────────────────────────────────────────────────────────
// Slipcurve — Shared Types
// © 2026 Slipcurve Contributors. License: MIT
// ─────────────────────────────────────────────────────────────────────
pub mod config;
pub mod constants;
pub mod error;
pub mod state;
