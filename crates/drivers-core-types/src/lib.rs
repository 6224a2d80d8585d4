//! Core types shared across the driver registry facilities
//!
//! This crate provides foundational types used by both error handling
//! and logging facilities:
//!
//! - **Schema constants**: Canonical field keys and event names
//! - **Sensitive data**: `Sensitive<T>` marker for contact details that must not reach logs

pub mod schema;
pub mod sensitive;

pub use sensitive::Sensitive;
