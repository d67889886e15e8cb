// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Extension points for derived page compilers.
//!
//! The fixed emission sequence reserves three steps that emit nothing by
//! default: session setup inside the handler body, the factory-method
//! body after the handler definition, and manifest registration after
//! the namespace close. Specialized compilers (e.g. a bundle compiler
//! that registers handlers in a service manifest) implement
//! [`GeneratorHooks`] and construct the generator with
//! [`CppGenerator::with_hooks`](super::CppGenerator::with_hooks) instead
//! of subclassing the orchestration.

use super::options::GenerationOptions;
use super::Result;
use crate::page::Page;
use std::fmt::Write;

/// Read-only context handed to each hook invocation.
pub struct HookContext<'a> {
    /// The page being compiled.
    pub page: &'a Page,
    /// The target handler class name.
    pub class_name: &'a str,
    /// The options snapshot resolved for this emission run.
    pub options: &'a GenerationOptions,
}

/// One overridable method per reserved emission step. All default to
/// emitting nothing.
pub trait GeneratorHooks {
    /// Session setup, emitted in the handler body between the
    /// precondition gate and the form-parsing prologue.
    ///
    /// # Errors
    ///
    /// Returns [`CodeGenError`](super::CodeGenError) if writing to the
    /// output buffer fails.
    fn write_session(&self, _ctx: &HookContext<'_>, _out: &mut String) -> Result<()> {
        Ok(())
    }

    /// Factory-method body, emitted after the handler method definition
    /// and before the namespace close. See [`factory_method_impl`] for
    /// the standard body.
    ///
    /// # Errors
    ///
    /// Returns [`CodeGenError`](super::CodeGenError) if writing to the
    /// output buffer fails.
    fn write_factory(&self, _ctx: &HookContext<'_>, _out: &mut String) -> Result<()> {
        Ok(())
    }

    /// Manifest registration, emitted after the namespace close at the
    /// very end of the implementation artifact.
    ///
    /// # Errors
    ///
    /// Returns [`CodeGenError`](super::CodeGenError) if writing to the
    /// output buffer fails.
    fn write_manifest(&self, _ctx: &HookContext<'_>, _out: &mut String) -> Result<()> {
        Ok(())
    }
}

/// The default hooks: every reserved step emits nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultHooks;

impl GeneratorHooks for DefaultHooks {}

pub(super) const DEFAULT_HOOKS: DefaultHooks = DefaultHooks;

/// Emits the standard factory-method definition returning a new handler
/// instance constructed with `arg` (pass `""` for default construction).
///
/// ```cpp
/// Poco::Net::HTTPRequestHandler* TimeHandlerFactory::createRequestHandler(const Poco::Net::HTTPServerRequest& request)
/// {
///     return new TimeHandler(context());
/// }
/// ```
///
/// # Errors
///
/// Returns [`CodeGenError`](super::CodeGenError) if writing to the
/// output buffer fails.
pub fn factory_method_impl(ctx: &HookContext<'_>, arg: &str, out: &mut String) -> Result<()> {
    writeln!(
        out,
        "Poco::Net::HTTPRequestHandler* {}Factory::createRequestHandler(const Poco::Net::HTTPServerRequest& request)",
        ctx.class_name
    )?;
    writeln!(out, "{{")?;
    writeln!(out, "\treturn new {}({arg});", ctx.class_name)?;
    writeln!(out, "}}")?;
    Ok(())
}
