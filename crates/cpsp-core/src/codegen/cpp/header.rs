// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Header artifact emission.
//!
//! The header declares the handler class and its factory, bracketed by
//! an include guard and the configured namespaces:
//!
//! ```cpp
//! #ifndef TimeHandler_INCLUDED
//! #define TimeHandler_INCLUDED
//!
//!
//! #include "Poco/Net/HTTPRequestHandler.h"
//!
//!
//! namespace Sample {
//!
//!
//! class TimeHandler: public Poco::Net::HTTPRequestHandler
//! {
//! public:
//!     void handleRequest(Poco::Net::HTTPServerRequest& request, Poco::Net::HTTPServerResponse& response);
//! };
//!
//!
//! class TimeHandlerFactory: public Poco::Net::HTTPRequestHandlerFactory
//! {
//! public:
//!     Poco::Net::HTTPRequestHandler* createRequestHandler(const Poco::Net::HTTPServerRequest& request);
//! };
//!
//!
//! } // namespace Sample
//!
//!
//! #endif // TimeHandler_INCLUDED
//! ```

use super::options::{FACTORY_BASE_CLASS, GenerationOptions};
use super::util::include_guard;
use super::{CppGenerator, Result};
use std::fmt::Write;

impl CppGenerator<'_> {
    /// Writes the complete header artifact.
    pub(super) fn write_header(&mut self, header_file: &str) -> Result<()> {
        let options = GenerationOptions::from_page(self.page);

        self.write_guard_open(header_file)?;
        self.write_header_includes()?;
        write!(self.output, "\n\n")?;

        let decls = self.page.header_decls();
        if !decls.is_empty() {
            write!(self.output, "{decls}\n\n")?;
        }

        self.write_namespace_open(&options)?;
        self.write_handler_class(&options)?;
        self.write_factory_class()?;
        self.write_namespace_close(&options)?;
        self.write_guard_close(header_file)?;
        Ok(())
    }

    fn write_guard_open(&mut self, header_file: &str) -> Result<()> {
        let guard = include_guard(header_file);
        writeln!(self.output, "#ifndef {guard}")?;
        writeln!(self.output, "#define {guard}")?;
        write!(self.output, "\n\n")?;
        Ok(())
    }

    fn write_guard_close(&mut self, header_file: &str) -> Result<()> {
        let guard = include_guard(header_file);
        write!(self.output, "\n\n")?;
        writeln!(self.output, "#endif // {guard}")?;
        Ok(())
    }

    fn write_header_includes(&mut self) -> Result<()> {
        writeln!(self.output, "#include \"Poco/Net/HTTPRequestHandler.h\"")?;
        Ok(())
    }

    /// Declares the handler class: linkage annotation, base class,
    /// optional one-argument constructor, the `handleRequest` signature,
    /// and the context accessor/member when a context type is set.
    fn write_handler_class(&mut self, options: &GenerationOptions) -> Result<()> {
        let export = options
            .export
            .as_deref()
            .map_or_else(String::new, |e| format!("{e} "));

        writeln!(
            self.output,
            "class {export}{}: public {}",
            self.class_name, options.base_class
        )?;
        writeln!(self.output, "{{")?;
        writeln!(self.output, "public:")?;
        if let Some(arg_type) = options.constructor_arg_type() {
            writeln!(self.output, "\t{}({arg_type});", self.class_name)?;
            writeln!(self.output)?;
        }
        writeln!(
            self.output,
            "\tvoid handleRequest(Poco::Net::HTTPServerRequest& request, Poco::Net::HTTPServerResponse& response);"
        )?;
        self.write_handler_members(options)?;
        writeln!(self.output, "}};")?;
        Ok(())
    }

    /// The context accessor and backing member. This is the only
    /// member-generation branch.
    fn write_handler_members(&mut self, options: &GenerationOptions) -> Result<()> {
        if let Some(context_type) = &options.context_type {
            writeln!(self.output)?;
            writeln!(self.output, "protected:")?;
            writeln!(self.output, "\t{context_type} context() const")?;
            writeln!(self.output, "\t{{")?;
            writeln!(self.output, "\t\treturn _context;")?;
            writeln!(self.output, "\t}}")?;
            writeln!(self.output)?;
            writeln!(self.output, "private:")?;
            writeln!(self.output, "\t{context_type} _context;")?;
        }
        Ok(())
    }

    /// Declares the factory class with the single factory-method
    /// signature. The corresponding definition is left to the factory
    /// hook.
    fn write_factory_class(&mut self) -> Result<()> {
        write!(self.output, "\n\n")?;
        writeln!(
            self.output,
            "class {}Factory: public {FACTORY_BASE_CLASS}",
            self.class_name
        )?;
        writeln!(self.output, "{{")?;
        writeln!(self.output, "public:")?;
        writeln!(
            self.output,
            "\tPoco::Net::HTTPRequestHandler* createRequestHandler(const Poco::Net::HTTPServerRequest& request);"
        )?;
        writeln!(self.output, "}};")?;
        Ok(())
    }
}
