// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Property-based tests for C++ code generation.
//!
//! These tests verify the generator's contract over arbitrary page
//! models:
//!
//! 1. **Generation never fails or panics** — any property map and any
//!    fragment text produce complete artifacts
//! 2. **Emission is deterministic** — identical inputs yield
//!    byte-identical artifacts
//! 3. **Guard correctness** — the include-guard token brackets the
//!    header and derives from the file's base name alone
//! 4. **Namespace balance** — open lines and closing braces always match
//! 5. **Fragments pass through verbatim** — never reformatted or escaped

use proptest::prelude::*;

use crate::codegen::cpp::{generate_header, generate_impl};
use crate::page::Page;

// ============================================================================
// Generators
// ============================================================================

fn bool_literal() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "true", "false", "yes", "no", "on", "off", "1", "0", "maybe",
    ])
    .prop_map(str::to_string)
}

fn namespace_path() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_: ]{0,24}"
}

prop_compose! {
    fn arbitrary_page()(
        namespace in proptest::option::of(namespace_path()),
        buffered in proptest::option::of(bool_literal()),
        chunked in proptest::option::of(bool_literal()),
        form in proptest::option::of(bool_literal()),
        content_type in proptest::option::of("[a-z]{1,8}/[a-z]{1,8}"),
        context in proptest::option::of("[A-Za-z][A-Za-z0-9_]{0,10}\\*?"),
        ctor_arg in proptest::option::of("[A-Za-z][A-Za-z0-9_]{0,10}"),
        export in proptest::option::of("[A-Z_]{1,10}"),
        part_handler in proptest::option::of("[A-Z][A-Za-z0-9]{0,10}"),
        precondition in proptest::option::of("[A-Za-z0-9_(). =!]{0,24}"),
        header_decls in "\\PC{0,40}",
        impl_decls in "\\PC{0,40}",
        pre_handler in "\\PC{0,40}",
        handler in "\\PC{0,40}",
    ) -> Page {
        let mut page = Page::new();
        let keyed = [
            ("page.namespace", namespace),
            ("page.buffered", buffered),
            ("page.chunked", chunked),
            ("page.form", form),
            ("page.contentType", content_type),
            ("page.context", context),
            ("page.ctorArg", ctor_arg),
            ("page.export", export),
            ("page.formPartHandler", part_handler),
            ("page.precondition", precondition),
        ];
        for (key, value) in keyed {
            if let Some(value) = value {
                page.set(key, &value);
            }
        }
        page.header_decls_mut().push_str(&header_decls);
        page.impl_decls_mut().push_str(&impl_decls);
        page.pre_handler_mut().push_str(&pre_handler);
        page.handler_mut().push_str(&handler);
        page
    }
}

// ============================================================================
// Property tests
// ============================================================================

fn proptest_config() -> ProptestConfig {
    let default = ProptestConfig::default();
    ProptestConfig {
        cases: default.cases.max(512),
        ..default
    }
}

proptest! {
    #![proptest_config(proptest_config())]

    /// Property 1: generation always succeeds and produces output.
    #[test]
    fn generation_never_fails(page in arbitrary_page()) {
        let header = generate_header(&page, "PropHandler", "PropHandler.h");
        let source = generate_impl(&page, "PropHandler", "PropHandler.h");
        prop_assert!(header.is_ok());
        prop_assert!(source.is_ok());
        prop_assert!(!header.unwrap().is_empty());
        prop_assert!(!source.unwrap().is_empty());
    }

    /// Property 2: emission is a pure function of its inputs.
    #[test]
    fn generation_is_deterministic(page in arbitrary_page()) {
        let header_a = generate_header(&page, "PropHandler", "PropHandler.h").unwrap();
        let header_b = generate_header(&page, "PropHandler", "PropHandler.h").unwrap();
        prop_assert_eq!(header_a, header_b);

        let impl_a = generate_impl(&page, "PropHandler", "PropHandler.h").unwrap();
        let impl_b = generate_impl(&page, "PropHandler", "PropHandler.h").unwrap();
        prop_assert_eq!(impl_a, impl_b);
    }

    /// Property 3: the guard token opens and closes every header and is
    /// derived from the file's base name only.
    #[test]
    fn guard_brackets_header(
        page in arbitrary_page(),
        stem in "[A-Za-z][A-Za-z0-9]{0,12}",
        dir in proptest::option::of("[a-z]{1,8}"),
    ) {
        let header_file = match dir {
            Some(dir) => format!("{dir}/{stem}.h"),
            None => format!("{stem}.h"),
        };
        let header = generate_header(&page, "PropHandler", &header_file).unwrap();
        let guard = format!("{stem}_INCLUDED");
        let prefix = format!("#ifndef {guard}\n#define {guard}\n");
        let suffix = format!("#endif // {guard}\n");
        prop_assert!(header.starts_with(&prefix));
        prop_assert!(header.ends_with(&suffix));
    }

    /// Property 4: namespace open lines and closing braces balance, and
    /// an empty path emits no namespace lines at all.
    #[test]
    fn namespace_lines_balance(path in namespace_path()) {
        let mut page = Page::new();
        page.set("page.namespace", &path);
        let header = generate_header(&page, "PropHandler", "PropHandler.h").unwrap();

        let expected: Vec<&str> = path
            .split(':')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        let opens = header
            .lines()
            .filter(|l| l.starts_with("namespace "))
            .count();
        prop_assert_eq!(opens, expected.len());

        if !expected.is_empty() {
            let close = format!("{}// namespace {}", "} ".repeat(expected.len()), path);
            prop_assert!(
                header.lines().any(|l| l == close),
                "missing close line {:?} in:\n{}",
                close,
                header,
            );
        }
    }

    /// Property 5: fragment text is copied verbatim into the artifacts.
    #[test]
    fn fragments_pass_through_verbatim(
        header_decls in "\\PC{1,60}",
        handler in "\\PC{1,60}",
    ) {
        let mut page = Page::new();
        page.header_decls_mut().push_str(&header_decls);
        page.handler_mut().push_str(&handler);

        let header = generate_header(&page, "PropHandler", "PropHandler.h").unwrap();
        let source = generate_impl(&page, "PropHandler", "PropHandler.h").unwrap();
        prop_assert!(header.contains(&header_decls));
        prop_assert!(source.contains(&handler));
    }
}
