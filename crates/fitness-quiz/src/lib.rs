//! Fitness questionnaire scoring: answers in, a class shortlist, guidance
//! text and a printable plan out.

pub mod config;
pub mod error;
pub mod quiz;
pub mod telemetry;
