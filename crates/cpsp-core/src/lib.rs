// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! cpsp compiler core.
//!
//! This crate contains the core compiler functionality:
//! - Page model (parsed template representation)
//! - Code generation (C++ handler header/implementation output)
//!
//! The template parser, file writing, and CLI live in sibling crates;
//! this crate only maps a page model to source text.

#![doc = include_str!("../../../README.md")]

pub mod codegen;
pub mod page;

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::codegen::cpp::{CppGenerator, generate_header, generate_impl};
    pub use crate::page::Page;
}
