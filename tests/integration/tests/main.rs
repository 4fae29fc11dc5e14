//! End-to-end tests for the trucode step.
//!
//! These tests drive the step against an in-process trusonafication service
//! and check the transition result, the shared state and the diagnostics.

mod common;
