//! Algorithm implementations for growth tracking
//!
//! This module contains the growth percentile engine: age normalization,
//! reference table lookup, LMS percentile estimation and alert evaluation.

pub mod growth;
