// ABOUTME: Core types and constants for the VIRA VIDA progression engine
// ABOUTME: Foundation crate with error handling, constants, and domain models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # VIRA VIDA Core
//!
//! Foundation crate providing shared types and constants for the VIRA VIDA
//! progression engine. It is designed to change infrequently so the main
//! crate recompiles independently of it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Application-wide constants organized by domain
//! - **models**: Badges, levels, user progress, tips, chat, and health types

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models
pub mod models;
