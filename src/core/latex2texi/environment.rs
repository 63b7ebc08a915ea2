//! Environment handling for LaTeX to Texinfo conversion
//!
//! `\begin{name}` and `\end{name}` become the Texinfo block commands listed
//! in [`ENVIRONMENTS`](crate::data::commands::ENVIRONMENTS). The body of an
//! environment is ordinary token stream; the tokenizer has already switched
//! modes for `codeblock` and the table environments.

use super::context::TexiConverter;
use super::token::Token;
use crate::data::commands::lookup_environment;

/// Convert `\begin{...}` or `\end{...}`
pub fn convert_environment(
    conv: &mut TexiConverter,
    token: &Token,
    path: &str,
    output: &mut String,
) {
    let opening = token.text == "begin";

    let Some(name) = token.first_arg() else {
        conv.diagnostics
            .report_unrecognized(path, token.line, &token.text, None);
        return;
    };

    match lookup_environment(name) {
        Some(env) => output.push_str(if opening { env.open } else { env.close }),
        None => {
            conv.diagnostics
                .report_unrecognized(path, token.line, &token.text, Some(name));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn convert(input: &str) -> String {
        TexiConverter::new().convert(input, "env.tex").unwrap()
    }

    #[test]
    fn test_document_is_silent() {
        assert_eq!(convert("\\begin{document}x\\end{document}"), "x");
    }

    #[test]
    fn test_lists() {
        assert_eq!(
            convert("\\begin{itemize}\n\\item a\n\\end{itemize}"),
            "@itemize @bullet\n@item a\n@end itemize"
        );
        assert_eq!(
            convert("\\begin{enumerate}\\end{enumerate}"),
            "@enumerate@end enumerate"
        );
    }

    #[test]
    fn test_codeblock_keeps_tilde() {
        assert_eq!(
            convert("\\begin{codeblock}\nx = ~y;\n\\end{codeblock}"),
            "@example\nx = ~y;\n@end example"
        );
    }

    #[test]
    fn test_bnf_variants() {
        for name in ["ncsimplebnf", "ncbnftab"] {
            let input = format!("\\begin{{{0}}}\\end{{{0}}}", name);
            assert_eq!(convert(&input), "@smallexample@end smallexample");
        }
    }

    #[test]
    fn test_table_columns() {
        let out = convert("\\begin{tokentable}{Alt}{tab}{A}{B}\nand & \\&\\&\n\\end{tokentable}");
        assert_eq!(
            out,
            "@multitable @columnfractions .25 .25 .25 .25\n@item \nand \n@tab  &&\n@end multitable"
        );
    }

    #[test]
    fn test_unknown_environment_reported_once() {
        let mut conv = TexiConverter::new();
        let out = conv
            .convert("\\begin{wide}x\\end{wide}\\begin{wide}", "env.tex")
            .unwrap();
        assert_eq!(out, "x");

        let messages: Vec<_> = conv.diagnostics().iter().map(|d| d.message.clone()).collect();
        assert_eq!(
            messages,
            vec![
                "unrecognized command '\\begin{wide}'".to_string(),
                "unrecognized command '\\end{wide}'".to_string(),
            ]
        );
    }

    #[test]
    fn test_begin_without_argument() {
        let mut conv = TexiConverter::new();
        assert_eq!(conv.convert("\\begin x", "env.tex").unwrap(), " x");
        assert_eq!(conv.diagnostics().len(), 1);
    }
}
