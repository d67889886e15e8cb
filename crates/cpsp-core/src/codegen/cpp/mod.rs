// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! C++ code generation for cpsp.
//!
//! This module transforms a parsed [`Page`] into two C++ translation
//! units: a header declaring the request-handler class and its factory,
//! and an implementation defining the constructor and the
//! `handleRequest` body. The generated code targets the POCO Net
//! framework's HTTP server types.
//!
//! # Architecture
//!
//! Each artifact is a straight-line pipeline of emission steps. The only
//! branching is on the page's `page.*` options; there is no iteration
//! beyond namespace-segment splitting, and no backtracking. For a fixed
//! page, class name, and header file name the output is byte-identical
//! across runs — emission is a pure function of its inputs.
//!
//! # Example
//!
//! ```
//! use cpsp_core::codegen::cpp::generate_impl;
//! use cpsp_core::page::Page;
//!
//! let mut page = Page::new();
//! page.set("page.precondition", "request.getMethod() == \"GET\"");
//! let source = generate_impl(&page, "TimeHandler", "TimeHandler.h")?;
//! assert!(source.contains("if (!(request.getMethod() == \"GET\")) return;"));
//! # Ok::<(), cpsp_core::codegen::cpp::CodeGenError>(())
//! ```
//!
//! # Generated Code
//!
//! For a default page the implementation artifact has this shape:
//!
//! ```cpp
//! #include "TimeHandler.h"
//! #include "Poco/Net/HTTPServerRequest.h"
//! #include "Poco/Net/HTTPServerResponse.h"
//! #include "Poco/Net/HTMLForm.h"
//!
//!
//! void TimeHandler::handleRequest(Poco::Net::HTTPServerRequest& request, Poco::Net::HTTPServerResponse& response)
//! {
//!     response.setChunkedTransferEncoding(true);
//!     response.setContentType("text/html");
//!
//!     Poco::Net::HTMLForm form(request, request.stream());
//!     std::ostream& responseStream = response.send();
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`options`] — the `page.*` configuration surface and its resolved
//!   per-run snapshot
//! - [`hooks`] — extension points for derived compilers (session setup,
//!   factory body, manifest emission)
//! - `header` — header artifact emission
//! - `implementation` — implementation artifact emission
//! - `util` — include-guard and namespace helpers

mod header;
pub mod hooks;
mod implementation;
pub mod options;
mod util;

pub use hooks::{DefaultHooks, GeneratorHooks, HookContext};
pub use options::GenerationOptions;
pub use util::include_guard;

use crate::page::Page;
use ecow::EcoString;
use hooks::DEFAULT_HOOKS;
use std::fmt;
use thiserror::Error;

/// Errors that can occur during code generation.
///
/// Under normal input generation cannot fail: every property lookup has
/// a default and fragments pass through opaquely. The variants exist for
/// the buffer-write plumbing and for programming-error escapes.
#[derive(Debug, Error)]
pub enum CodeGenError {
    /// Internal code generation error.
    #[error("code generation error: {0}")]
    Internal(String),

    /// Formatting error while writing to the output buffer.
    #[error("formatting error: {0}")]
    Format(#[from] fmt::Error),
}

/// Result type for code generation operations.
pub type Result<T> = std::result::Result<T, CodeGenError>;

/// Generates the header artifact for a page.
///
/// `header_file` names the header being generated; its base name seeds
/// the include-guard token.
///
/// # Errors
///
/// Returns [`CodeGenError`] if writing to the output buffer fails.
///
/// # Example
///
/// ```
/// use cpsp_core::codegen::cpp::generate_header;
/// use cpsp_core::page::Page;
///
/// let page = Page::new();
/// let header = generate_header(&page, "TimeHandler", "TimeHandler.h")?;
/// assert!(header.starts_with("#ifndef TimeHandler_INCLUDED"));
/// # Ok::<(), cpsp_core::codegen::cpp::CodeGenError>(())
/// ```
pub fn generate_header(page: &Page, class_name: &str, header_file: &str) -> Result<String> {
    CppGenerator::new(page, class_name).generate_header(header_file)
}

/// Generates the implementation artifact for a page.
///
/// `header_file` is emitted as the first `#include` of the artifact.
///
/// # Errors
///
/// Returns [`CodeGenError`] if writing to the output buffer fails.
pub fn generate_impl(page: &Page, class_name: &str, header_file: &str) -> Result<String> {
    CppGenerator::new(page, class_name).generate_impl(header_file)
}

/// C++ code generator.
///
/// One generator is scoped to exactly one page and one target class
/// name. It borrows the page read-only and accumulates output in an
/// internal buffer; producing an artifact consumes the generator, so a
/// fresh one is built per artifact (both from the same page).
///
/// Derived compilers customize the reserved emission points by
/// constructing the generator via [`CppGenerator::with_hooks`].
pub struct CppGenerator<'a> {
    /// The page model being compiled.
    page: &'a Page,
    /// The target handler class name.
    class_name: EcoString,
    /// Extension points for the reserved emission steps.
    hooks: &'a dyn GeneratorHooks,
    /// Accumulated output text.
    output: String,
}

impl<'a> CppGenerator<'a> {
    /// Creates a generator for the given page and handler class name.
    #[must_use]
    pub fn new(page: &'a Page, class_name: &str) -> Self {
        Self {
            page,
            class_name: class_name.into(),
            hooks: &DEFAULT_HOOKS,
            output: String::new(),
        }
    }

    /// Creates a generator with custom extension hooks.
    #[must_use]
    pub fn with_hooks(page: &'a Page, class_name: &str, hooks: &'a dyn GeneratorHooks) -> Self {
        Self {
            page,
            class_name: class_name.into(),
            hooks,
            output: String::new(),
        }
    }

    /// Generates the header artifact and returns its text.
    ///
    /// # Errors
    ///
    /// Returns [`CodeGenError`] if writing to the output buffer fails.
    pub fn generate_header(mut self, header_file: &str) -> Result<String> {
        self.write_header(header_file)?;
        Ok(self.output)
    }

    /// Generates the implementation artifact and returns its text.
    ///
    /// # Errors
    ///
    /// Returns [`CodeGenError`] if writing to the output buffer fails.
    pub fn generate_impl(mut self, header_file: &str) -> Result<String> {
        self.write_impl(header_file)?;
        Ok(self.output)
    }
}
