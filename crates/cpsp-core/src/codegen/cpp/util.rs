// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Utility functions for C++ code generation: include-guard token
//! derivation and namespace open/close emission shared by both artifacts.

use super::options::GenerationOptions;
use super::{CppGenerator, Result};
use camino::Utf8Path;
use ecow::EcoString;
use std::fmt::Write;

/// Derives the include-guard token for a header file.
///
/// The token is the file's base name (directories and extension
/// stripped) suffixed with `_INCLUDED`, so the same header name always
/// yields the same guard wherever it lives.
///
/// # Examples
///
/// ```
/// use cpsp_core::codegen::cpp::include_guard;
///
/// assert_eq!(include_guard("TimeHandler.h"), "TimeHandler_INCLUDED");
/// assert_eq!(include_guard("web/pages/Index.h"), "Index_INCLUDED");
/// ```
#[must_use]
pub fn include_guard(header_file: &str) -> EcoString {
    let base = Utf8Path::new(header_file).file_stem().unwrap_or("");
    let mut guard = EcoString::from(base);
    guard.push_str("_INCLUDED");
    guard
}

/// Splits a namespace path on `:`, trimming whitespace and ignoring
/// empty segments. `A::B` and `A:B` both yield `["A", "B"]`.
pub(super) fn namespace_segments(path: &str) -> Vec<&str> {
    path.split(':')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}

impl CppGenerator<'_> {
    /// Opens the configured namespaces, one `namespace <seg> {` line per
    /// segment, followed by a blank separator. Emits nothing when no
    /// namespace is configured.
    pub(super) fn write_namespace_open(&mut self, options: &GenerationOptions) -> Result<()> {
        if let Some(path) = &options.namespace {
            for segment in namespace_segments(path) {
                writeln!(self.output, "namespace {segment} {{")?;
            }
            write!(self.output, "\n\n")?;
        }
        Ok(())
    }

    /// Closes the configured namespaces in reverse: one closing brace
    /// per segment on a single line, then a trailing comment naming the
    /// full path. Emits nothing when no namespace is configured.
    pub(super) fn write_namespace_close(&mut self, options: &GenerationOptions) -> Result<()> {
        if let Some(path) = &options.namespace {
            write!(self.output, "\n\n")?;
            for _ in namespace_segments(path) {
                write!(self.output, "}} ")?;
            }
            writeln!(self.output, "// namespace {path}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_strips_directories_and_extension() {
        assert_eq!(include_guard("TimeHandler.h"), "TimeHandler_INCLUDED");
        assert_eq!(include_guard("src/web/TimeHandler.h"), "TimeHandler_INCLUDED");
        assert_eq!(include_guard("TimeHandler"), "TimeHandler_INCLUDED");
    }

    #[test]
    fn segments_trim_and_drop_empties() {
        assert_eq!(namespace_segments("My:App"), ["My", "App"]);
        assert_eq!(namespace_segments("My::App"), ["My", "App"]);
        assert_eq!(namespace_segments(" My : App "), ["My", "App"]);
        assert_eq!(namespace_segments(""), Vec::<&str>::new());
        assert_eq!(namespace_segments(":::"), Vec::<&str>::new());
    }
}
