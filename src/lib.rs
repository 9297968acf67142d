//! Symptom Triage - Interactive symptom questionnaire service
//!
//! This crate selects a question template from free-text symptoms, walks the
//! user through a question list that grows with follow-ups, and produces a
//! risk-scored report with self-care guidance.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
