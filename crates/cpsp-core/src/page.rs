// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Page model: the parsed representation of a server page template.
//!
//! A [`Page`] is produced by the upstream template parser and consumed,
//! read-only, by code generation. It has two halves:
//!
//! - **Properties**: `page.*` key/value settings collected from template
//!   directives. Lookups never fail — every accessor takes or implies a
//!   default, so an absent key is not an error.
//! - **Fragments**: four ordered blocks of already-rendered C++ text,
//!   accumulated in document order by the parser. The code generator
//!   copies them verbatim and never parses or validates them.
//!
//! # Lifecycle
//!
//! One `Page` is built per template-compilation run, stays immutable for
//! the lifetime of a generation run, and is discarded after both
//! artifacts have been produced.
//!
//! # Example
//!
//! ```
//! use cpsp_core::page::Page;
//!
//! let mut page = Page::new();
//! page.set("page.contentType", "application/json");
//! page.handler_mut().push_str("\tresponseStream << \"{}\";\n");
//!
//! assert_eq!(page.get_or("page.contentType", "text/html"), "application/json");
//! assert!(!page.has("page.buffered"));
//! ```

use ecow::EcoString;
use std::collections::BTreeMap;

/// A parsed server page: property settings plus source-text fragments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    /// `page.*` directive values keyed by dotted name.
    properties: BTreeMap<EcoString, EcoString>,
    /// Declarations destined for the generated header.
    header_decls: String,
    /// Declarations destined for the generated implementation file.
    impl_decls: String,
    /// Statements run before the handler body (e.g. parameter decoding).
    pre_handler: String,
    /// The user-authored handler body.
    handler: String,
}

impl Page {
    /// Creates an empty page with no properties and no fragments.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, replacing any previous value.
    pub fn set(&mut self, key: &str, value: &str) {
        self.properties.insert(key.into(), value.into());
    }

    /// Looks up a property value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(EcoString::as_str)
    }

    /// Looks up a property value, falling back to `default` when absent.
    #[must_use]
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Returns `true` if the property exists, regardless of its value.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Resolves a property to a boolean.
    ///
    /// Accepted literal forms (case-insensitive): `true`/`yes`/`on`/`1`
    /// and `false`/`no`/`off`/`0`. An absent key or an unrecognized
    /// value resolves to `default`.
    #[must_use]
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.get(key).and_then(parse_bool).unwrap_or(default)
    }

    /// Iterates over all properties in key order.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Header-declarations fragment.
    #[must_use]
    pub fn header_decls(&self) -> &str {
        &self.header_decls
    }

    /// Implementation-declarations fragment.
    #[must_use]
    pub fn impl_decls(&self) -> &str {
        &self.impl_decls
    }

    /// Pre-handler statements fragment.
    #[must_use]
    pub fn pre_handler(&self) -> &str {
        &self.pre_handler
    }

    /// Handler-body fragment.
    #[must_use]
    pub fn handler(&self) -> &str {
        &self.handler
    }

    /// Mutable access to the header-declarations fragment, for the parser.
    pub fn header_decls_mut(&mut self) -> &mut String {
        &mut self.header_decls
    }

    /// Mutable access to the implementation-declarations fragment.
    pub fn impl_decls_mut(&mut self) -> &mut String {
        &mut self.impl_decls
    }

    /// Mutable access to the pre-handler fragment.
    pub fn pre_handler_mut(&mut self) -> &mut String {
        &mut self.pre_handler
    }

    /// Mutable access to the handler-body fragment.
    pub fn handler_mut(&mut self) -> &mut String {
        &mut self.handler
    }
}

/// Parses a boolean property literal. Unrecognized forms yield `None` so
/// the caller's default applies.
fn parse_bool(value: &str) -> Option<bool> {
    const TRUTHY: [&str; 4] = ["true", "yes", "on", "1"];
    const FALSY: [&str; 4] = ["false", "no", "off", "0"];

    if TRUTHY.iter().any(|t| value.eq_ignore_ascii_case(t)) {
        Some(true)
    } else if FALSY.iter().any(|f| value.eq_ignore_ascii_case(f)) {
        Some(false)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_set_value() {
        let mut page = Page::new();
        page.set("page.namespace", "My:App");
        assert_eq!(page.get("page.namespace"), Some("My:App"));
        assert_eq!(page.get("page.baseClass"), None);
    }

    #[test]
    fn set_replaces_previous_value() {
        let mut page = Page::new();
        page.set("page.contentType", "text/plain");
        page.set("page.contentType", "text/xml");
        assert_eq!(page.get("page.contentType"), Some("text/xml"));
    }

    #[test]
    fn get_or_falls_back_when_absent() {
        let mut page = Page::new();
        page.set("page.export", "MYLIB_API");
        assert_eq!(page.get_or("page.export", ""), "MYLIB_API");
        assert_eq!(page.get_or("page.contentType", "text/html"), "text/html");
    }

    #[test]
    fn has_is_independent_of_value() {
        let mut page = Page::new();
        page.set("page.precondition", "");
        assert!(page.has("page.precondition"));
        assert!(!page.has("page.form"));
    }

    #[test]
    fn get_bool_literal_forms() {
        let mut page = Page::new();
        for truthy in ["true", "TRUE", "yes", "Yes", "on", "1"] {
            page.set("flag", truthy);
            assert!(page.get_bool("flag", false), "{truthy} should be true");
        }
        for falsy in ["false", "False", "no", "NO", "off", "0"] {
            page.set("flag", falsy);
            assert!(!page.get_bool("flag", true), "{falsy} should be false");
        }
    }

    #[test]
    fn get_bool_unrecognized_or_absent_uses_default() {
        let mut page = Page::new();
        page.set("flag", "maybe");
        assert!(page.get_bool("flag", true));
        assert!(!page.get_bool("flag", false));
        assert!(page.get_bool("missing", true));
        assert!(!page.get_bool("missing", false));
    }

    #[test]
    fn fragments_accumulate_in_order() {
        let mut page = Page::new();
        page.pre_handler_mut().push_str("\tstd::string name;\n");
        page.pre_handler_mut().push_str("\tname = form.get(\"name\");\n");
        assert_eq!(
            page.pre_handler(),
            "\tstd::string name;\n\tname = form.get(\"name\");\n"
        );
        assert_eq!(page.handler(), "");
    }

    #[test]
    fn properties_iterate_in_key_order() {
        let mut page = Page::new();
        page.set("page.namespace", "A");
        page.set("page.buffered", "true");
        let keys: Vec<&str> = page.properties().map(|(k, _)| k).collect();
        assert_eq!(keys, ["page.buffered", "page.namespace"]);
    }
}
