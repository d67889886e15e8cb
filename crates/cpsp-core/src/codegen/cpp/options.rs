// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! The `page.*` configuration surface honored by the C++ generator.
//!
//! [`GenerationOptions`] is a derived value, not stored state: each
//! emission call resolves a fresh snapshot from the page, so generation
//! stays a pure function of its inputs. Framework defaults live here as
//! explicit constants rather than process-wide lookups.

use crate::page::Page;
use ecow::EcoString;

/// Property keys recognized by the generator.
pub mod keys {
    /// Colon-separated namespace path wrapping all declarations.
    pub const NAMESPACE: &str = "page.namespace";
    /// Base type of the generated handler class.
    pub const BASE_CLASS: &str = "page.baseClass";
    /// Context type; implies a typed accessor member on the handler.
    pub const CONTEXT: &str = "page.context";
    /// Plain constructor-argument type, forwarded to the base class.
    pub const CTOR_ARG: &str = "page.ctorArg";
    /// Linkage annotation on the class declaration (e.g. a DLL export macro).
    pub const EXPORT: &str = "page.export";
    /// Response content type.
    pub const CONTENT_TYPE: &str = "page.contentType";
    /// Buffer the response body in memory before sending.
    pub const BUFFERED: &str = "page.buffered";
    /// Chunked transfer encoding toggle.
    pub const CHUNKED: &str = "page.chunked";
    /// Early-return guard expression for the handler body.
    pub const PRECONDITION: &str = "page.precondition";
    /// Form-parsing prologue toggle.
    pub const FORM: &str = "page.form";
    /// Custom multipart handler type for form parsing.
    pub const FORM_PART_HANDLER: &str = "page.formPartHandler";
}

/// Default base class of generated handlers.
pub const DEFAULT_BASE_CLASS: &str = "Poco::Net::HTTPRequestHandler";

/// Base class of generated handler factories.
pub const FACTORY_BASE_CLASS: &str = "Poco::Net::HTTPRequestHandlerFactory";

/// Default response content type.
pub const DEFAULT_CONTENT_TYPE: &str = "text/html";

/// Resolved per-run snapshot of the generation options.
///
/// Empty-string values for `namespace`, `context`, `ctorArg`, `export`
/// and `formPartHandler` are treated as unset. The precondition is
/// presence-driven: a present-but-empty value still emits the guard.
///
/// # Buffered vs. chunked
///
/// Buffered mode trades an extra copy for an exact content length;
/// `chunked` defaults to `!buffered` so callers set one flag in the
/// common case. Setting both `page.buffered` and `page.chunked` to true
/// is allowed but of limited use: the chunked-transfer statement and the
/// buffered copy are both emitted, and the content-length computation is
/// suppressed (it only appears when buffered and not chunked).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOptions {
    /// Response content-type literal.
    pub content_type: EcoString,
    /// Whether the response body is materialized in memory first.
    pub buffered: bool,
    /// Whether chunked transfer encoding is enabled.
    pub chunked: bool,
    /// Raw namespace path (`A:B` or `A::B`), if any.
    pub namespace: Option<EcoString>,
    /// Base type of the generated handler class.
    pub base_class: EcoString,
    /// Context type stored on the handler, if any.
    pub context_type: Option<EcoString>,
    /// Constructor-argument type forwarded to the base class, if any.
    pub ctor_arg: Option<EcoString>,
    /// Linkage annotation on the class declaration, if any.
    pub export: Option<EcoString>,
    /// Whether the form-parsing prologue is emitted.
    pub form: bool,
    /// Custom multipart handler type, if any.
    pub form_part_handler: Option<EcoString>,
    /// Early-return guard expression, if the key is present.
    pub precondition: Option<EcoString>,
}

impl GenerationOptions {
    /// Resolves a snapshot of the options from a page.
    #[must_use]
    pub fn from_page(page: &Page) -> Self {
        let buffered = page.get_bool(keys::BUFFERED, false);
        Self {
            content_type: page.get_or(keys::CONTENT_TYPE, DEFAULT_CONTENT_TYPE).into(),
            buffered,
            chunked: page.get_bool(keys::CHUNKED, !buffered),
            namespace: non_empty(page.get_or(keys::NAMESPACE, "")),
            base_class: page.get_or(keys::BASE_CLASS, DEFAULT_BASE_CLASS).into(),
            context_type: non_empty(page.get_or(keys::CONTEXT, "")),
            ctor_arg: non_empty(page.get_or(keys::CTOR_ARG, "")),
            export: non_empty(page.get_or(keys::EXPORT, "")),
            form: page.get_bool(keys::FORM, true),
            form_part_handler: non_empty(page.get_or(keys::FORM_PART_HANDLER, "")),
            precondition: page.get(keys::PRECONDITION).map(EcoString::from),
        }
    }

    /// The declared constructor-argument type, if any.
    ///
    /// The context type takes priority over a plain `ctorArg`; when both
    /// are set the constructor uses the context shape.
    #[must_use]
    pub fn constructor_arg_type(&self) -> Option<&EcoString> {
        self.context_type.as_ref().or(self.ctor_arg.as_ref())
    }
}

fn non_empty(value: &str) -> Option<EcoString> {
    if value.is_empty() {
        None
    } else {
        Some(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_for_empty_page() {
        let options = GenerationOptions::from_page(&Page::new());
        assert_eq!(options.content_type, DEFAULT_CONTENT_TYPE);
        assert_eq!(options.base_class, DEFAULT_BASE_CLASS);
        assert!(!options.buffered);
        assert!(options.chunked, "chunked defaults to !buffered");
        assert!(options.form);
        assert_eq!(options.namespace, None);
        assert_eq!(options.precondition, None);
    }

    #[test]
    fn chunked_follows_buffered_unless_set() {
        let mut page = Page::new();
        page.set(keys::BUFFERED, "true");
        let options = GenerationOptions::from_page(&page);
        assert!(options.buffered);
        assert!(!options.chunked);

        page.set(keys::CHUNKED, "true");
        let options = GenerationOptions::from_page(&page);
        assert!(options.buffered);
        assert!(options.chunked);
    }

    #[test]
    fn empty_string_is_unset() {
        let mut page = Page::new();
        page.set(keys::NAMESPACE, "");
        page.set(keys::CONTEXT, "");
        let options = GenerationOptions::from_page(&page);
        assert_eq!(options.namespace, None);
        assert_eq!(options.context_type, None);
    }

    #[test]
    fn precondition_is_presence_driven() {
        let mut page = Page::new();
        page.set(keys::PRECONDITION, "");
        let options = GenerationOptions::from_page(&page);
        assert_eq!(options.precondition.as_deref(), Some(""));
    }

    #[test]
    fn context_takes_priority_over_ctor_arg() {
        let mut page = Page::new();
        page.set(keys::CTOR_ARG, "int");
        let options = GenerationOptions::from_page(&page);
        assert_eq!(options.constructor_arg_type().map(EcoString::as_str), Some("int"));

        page.set(keys::CONTEXT, "AppContext*");
        let options = GenerationOptions::from_page(&page);
        assert_eq!(
            options.constructor_arg_type().map(EcoString::as_str),
            Some("AppContext*")
        );
    }
}
