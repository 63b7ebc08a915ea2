//! Directive handling for LaTeX to Texinfo conversion
//!
//! This module maps commands like `\rSec1`, `\pnum`, `\tcode`, `\footnote`
//! and `\include` to Texinfo. Environments are in
//! [`environment`](super::environment).
//!
//! Note the asymmetry in how arguments are treated: inline wrappers such as
//! `\tcode{...}` copy their argument byte for byte, while section titles,
//! `\footnote` and `\terminal` convert theirs first.

use std::fmt::Write;

use super::context::{ConversionState, TexiConverter};
use super::environment::convert_environment;
use super::token::Token;
use crate::data::commands::{FIXED_MARKERS, IGNORED_COMMANDS, INLINE_WRAPPERS, SECTION_LEVELS};
use crate::utils::error::ConversionResult;

/// Convert a directive token, appending to `output`.
///
/// Commands without a rule are reported to the diagnostics registry and
/// produce nothing.
pub fn convert_directive(
    conv: &mut TexiConverter,
    state: &mut ConversionState,
    token: &Token,
    path: &str,
    output: &mut String,
) -> ConversionResult<()> {
    let name = token.text.as_str();
    let arg = token.first_arg().unwrap_or("");

    if let Some(heading) = SECTION_LEVELS.get(name) {
        return convert_section(conv, state, token, heading, path, output);
    }

    if let Some(wrapper) = INLINE_WRAPPERS.get(name) {
        let _ = write!(output, "@{}{{{}}}", wrapper, arg);
        return Ok(());
    }

    if let Some(marker) = FIXED_MARKERS.get(name) {
        output.push_str(marker);
        return Ok(());
    }

    if IGNORED_COMMANDS.contains(name) {
        return Ok(());
    }

    match name {
        "pnum" => {
            let _ = write!(output, "{}.", state.next_pnum());
        }

        "footnote" => {
            let body = conv.convert_fragment(arg, path, token.first_arg_line())?;
            let _ = write!(output, "@footnote{{{}}}", body);
        }

        "terminal" => {
            let body = conv.convert_fragment(arg, path, token.first_arg_line())?;
            output.push_str(&body);
        }

        "indextext" => {
            let _ = write!(output, "@cindex {}", arg);
        }

        "include" => convert_include(conv, token, path, output)?,

        "begin" | "end" => convert_environment(conv, token, path, output),

        _ => {
            conv.diagnostics
                .report_unrecognized(path, token.line, name, None);
        }
    }

    Ok(())
}

/// `\rSec<n>[anchor]{title}`
fn convert_section(
    conv: &mut TexiConverter,
    state: &mut ConversionState,
    token: &Token,
    heading: &str,
    path: &str,
    output: &mut String,
) -> ConversionResult<()> {
    let arg = token.first_arg().unwrap_or("");
    let title = conv.convert_fragment(arg, path, token.first_arg_line())?;

    output.push_str("@node\n");
    let _ = write!(output, "@{} {}", heading, title);
    if let Some(ref anchor) = token.bracket_arg {
        let _ = write!(output, "\n@anchor{{{}}}", anchor);
    }

    state.reset_pnum();
    Ok(())
}

/// `\include{name}`: inline the converted content of `<include dir>/name.tex`
fn convert_include(
    conv: &mut TexiConverter,
    token: &Token,
    path: &str,
    output: &mut String,
) -> ConversionResult<()> {
    let name = token.first_arg().unwrap_or("");
    if name == conv.options.xref_include {
        return Ok(());
    }

    let include_path = conv.options.include_path(name);
    match conv.resolver.read_file(&include_path) {
        Ok(source) => conv.convert_into(&source, &include_path, 1, output),
        Err(err) => {
            conv.diagnostics.report_io(
                path,
                Some(token.line),
                format!("cannot include '{}': {}", include_path, err),
            );
            Ok(())
        }
    }
}
