//! Core business logic for Blinkbank.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `budget` - Budget period windows and spend-vs-limit progress
//! - `transaction` - Transaction records and the fixed category set
//! - `analytics` - Balances, totals, category breakdowns, savings rate
//! - `insights` - Rule-based insights behind a pluggable generator trait
//! - `banking` - Toy banking simulator with guarded balance updates

pub mod analytics;
pub mod banking;
pub mod budget;
pub mod insights;
pub mod transaction;
