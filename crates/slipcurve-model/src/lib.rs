//! Steady-state torque/slip model for the single-cage induction motor.
//!
//! The stator and magnetizing branches collapse into a Thevenin
//! equivalent; electromagnetic torque then follows from the rotor branch
//! alone, either with a constant rotor resistance or with a smooth
//! slip-dependent R2(s) that stands in for deep-bar behavior.

pub mod rotor;
pub mod solution;
pub mod thevenin;
pub mod torque;
