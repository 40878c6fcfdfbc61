//! Reusable UI building blocks, organised with Atomic Design layers.

pub mod atoms;
pub mod molecules;
