// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Implementation artifact emission.
//!
//! The implementation defines the optional constructor and the
//! `handleRequest` body. The body follows a fixed sequence: response
//! setup, precondition gate, session hook, form-parsing prologue, the
//! pre-handler fragment, and finally the content step, which branches on
//! buffered vs. streaming mode:
//!
//! ```cpp
//! void TimeHandler::handleRequest(Poco::Net::HTTPServerRequest& request, Poco::Net::HTTPServerResponse& response)
//! {
//!     response.setChunkedTransferEncoding(true);
//!     response.setContentType("text/html");
//!
//!     Poco::Net::HTMLForm form(request, request.stream());
//!     std::ostream& responseStream = response.send();
//!     responseStream << "<html>...</html>";
//! }
//! ```
//!
//! In buffered mode the body writes into a `std::stringstream` instead;
//! the exact content length is computed (unless chunked transfer is
//! explicitly enabled) and the buffer is copied to the live response.

use super::hooks::HookContext;
use super::options::GenerationOptions;
use super::{CppGenerator, Result};
use std::fmt::Write;

impl CppGenerator<'_> {
    /// Writes the complete implementation artifact.
    pub(super) fn write_impl(&mut self, header_file: &str) -> Result<()> {
        let options = GenerationOptions::from_page(self.page);

        writeln!(self.output, "#include \"{header_file}\"")?;
        self.write_impl_includes(&options)?;
        write!(self.output, "\n\n")?;

        let decls = self.page.impl_decls();
        if !decls.is_empty() {
            write!(self.output, "{decls}\n\n")?;
        }

        self.write_namespace_open(&options)?;
        self.write_constructor(&options)?;
        self.write_handler(&options)?;
        {
            let ctx = HookContext {
                page: self.page,
                class_name: self.class_name.as_str(),
                options: &options,
            };
            self.hooks.write_factory(&ctx, &mut self.output)?;
        }
        self.write_namespace_close(&options)?;
        {
            let ctx = HookContext {
                page: self.page,
                class_name: self.class_name.as_str(),
                options: &options,
            };
            self.hooks.write_manifest(&ctx, &mut self.output)?;
        }
        Ok(())
    }

    fn write_impl_includes(&mut self, options: &GenerationOptions) -> Result<()> {
        writeln!(self.output, "#include \"Poco/Net/HTTPServerRequest.h\"")?;
        writeln!(self.output, "#include \"Poco/Net/HTTPServerResponse.h\"")?;
        writeln!(self.output, "#include \"Poco/Net/HTMLForm.h\"")?;
        if options.buffered {
            writeln!(self.output, "#include \"Poco/StreamCopier.h\"")?;
            writeln!(self.output, "#include <sstream>")?;
        }
        Ok(())
    }

    /// The constructor definition, present only when a context type or
    /// constructor-argument type is configured.
    ///
    /// A context type produces a member-initializing constructor with no
    /// base-class call; a plain `ctorArg` forwards the argument to the
    /// base-class constructor. The context shape wins when both are set.
    fn write_constructor(&mut self, options: &GenerationOptions) -> Result<()> {
        if let Some(context_type) = &options.context_type {
            writeln!(
                self.output,
                "{0}::{0}({context_type} context):",
                self.class_name
            )?;
            writeln!(self.output, "\t_context(context)")?;
            writeln!(self.output, "{{\n}}")?;
            write!(self.output, "\n\n")?;
        } else if let Some(arg_type) = &options.ctor_arg {
            writeln!(self.output, "{0}::{0}({arg_type} arg):", self.class_name)?;
            writeln!(self.output, "\t{}(arg)", options.base_class)?;
            writeln!(self.output, "{{\n}}")?;
            write!(self.output, "\n\n")?;
        }
        Ok(())
    }

    /// The `handleRequest` definition: the behavioral core of the
    /// generated handler.
    fn write_handler(&mut self, options: &GenerationOptions) -> Result<()> {
        writeln!(
            self.output,
            "void {}::handleRequest(Poco::Net::HTTPServerRequest& request, Poco::Net::HTTPServerResponse& response)",
            self.class_name
        )?;
        writeln!(self.output, "{{")?;
        self.write_response(options)?;
        if let Some(expr) = &options.precondition {
            write!(self.output, "\tif (!({expr})) return;\n\n")?;
        }
        {
            let ctx = HookContext {
                page: self.page,
                class_name: self.class_name.as_str(),
                options,
            };
            self.hooks.write_session(&ctx, &mut self.output)?;
        }
        self.write_form(options)?;
        write!(self.output, "{}", self.page.pre_handler())?;
        self.write_content(options)?;
        writeln!(self.output, "}}")?;
        Ok(())
    }

    fn write_response(&mut self, options: &GenerationOptions) -> Result<()> {
        if options.chunked {
            writeln!(self.output, "\tresponse.setChunkedTransferEncoding(true);")?;
        }
        writeln!(
            self.output,
            "\tresponse.setContentType(\"{}\");",
            options.content_type
        )?;
        writeln!(self.output)?;
        Ok(())
    }

    /// The form-parsing prologue. Fully skipped when `page.form` is
    /// false — no form-related local is declared at all.
    fn write_form(&mut self, options: &GenerationOptions) -> Result<()> {
        if !options.form {
            return Ok(());
        }
        if let Some(part_handler) = &options.form_part_handler {
            writeln!(self.output, "\t{part_handler} cpspPartHandler(*this);")?;
        }
        write!(
            self.output,
            "\tPoco::Net::HTMLForm form(request, request.stream()"
        )?;
        if options.form_part_handler.is_some() {
            write!(self.output, ", cpspPartHandler")?;
        }
        writeln!(self.output, ");")?;
        Ok(())
    }

    /// The content step. Buffered mode materializes the body in a
    /// string stream, computes the content length when chunked transfer
    /// is off, and copies the buffer to the live response; streaming
    /// mode binds `responseStream` to the live response directly.
    fn write_content(&mut self, options: &GenerationOptions) -> Result<()> {
        if options.buffered {
            writeln!(self.output, "\tstd::stringstream responseStream;")?;
            write!(self.output, "{}", self.page.handler())?;
            if !options.chunked {
                writeln!(
                    self.output,
                    "\tresponse.setContentLength(static_cast<int>(responseStream.tellp()));"
                )?;
            }
            writeln!(
                self.output,
                "\tPoco::StreamCopier::copyStream(responseStream, response.send());"
            )?;
        } else {
            writeln!(
                self.output,
                "\tstd::ostream& responseStream = response.send();"
            )?;
            write!(self.output, "{}", self.page.handler())?;
        }
        Ok(())
    }
}
