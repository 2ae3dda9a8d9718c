// ABOUTME: Re-exports command modules for vira-cli
// ABOUTME: One module per area of the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod chat;
pub mod check;
pub mod content;
pub mod health;
pub mod progression;
