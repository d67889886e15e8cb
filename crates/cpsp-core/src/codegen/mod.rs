// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Code generation for cpsp.
//!
//! This module contains code generators for different target frameworks:
//! - **`cpp`**: C++ handler generation against the POCO Net framework
//!
//! Future modules may include:
//! - **`osp`**: Open Service Platform bundle handlers

pub mod cpp;

#[cfg(test)]
mod property_tests;
