//! texi - LaTeX dialect → Texinfo converter

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, BufWriter, Write};
#[cfg(feature = "cli")]
use std::path::PathBuf;
#[cfg(feature = "cli")]
use texinfo_conv::{
    diagnostics::{format_diagnostics, Diagnostic},
    ConversionError, ConversionResult, TexiConverter, TexiOptions, Tokenizer,
};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "texi")]
#[command(version)]
#[command(about = "Convert C++ standard draft LaTeX sources to Texinfo", long_about = None)]
struct Cli {
    /// Input files, converted in order into one output
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Directory that \include{name} is resolved against
    #[arg(short = 'I', long, default_value = ".")]
    include_dir: PathBuf,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// \include argument naming the cross-reference list, which is never inlined
    #[arg(long, default_value = "xrefs")]
    xref_include: String,

    /// Print the token stream instead of converting
    #[arg(long)]
    tokens: bool,

    /// Quiet mode: suppress diagnostics on stderr
    #[arg(short, long)]
    quiet: bool,

    /// Strict mode: exit with error if any diagnostics were produced
    #[arg(long)]
    strict: bool,

    /// Disable colored diagnostics
    #[arg(long)]
    no_color: bool,
}

#[cfg(feature = "cli")]
fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let options = TexiOptions {
        include_dir: cli.include_dir.clone(),
        xref_include: cli.xref_include.clone(),
        ..TexiOptions::default()
    };
    let mut converter = TexiConverter::with_options(options);

    let mut out: Box<dyn Write> = match cli.output {
        Some(ref path) => Box::new(BufWriter::new(fs::File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let mut total_diagnostics = 0;
    let mut unreadable_inputs = 0;

    for input in &cli.inputs {
        let path = input.to_string_lossy();

        let converted = if cli.tokens {
            match converter.read_input(&path) {
                Some(source) => dump_tokens(&source, &path, &mut out).map(|()| true),
                None => Ok(false),
            }
        } else {
            converter.convert_file(&path, &mut out)
        };

        match converted {
            Ok(true) => {}
            Ok(false) => unreadable_inputs += 1,
            Err(err) => {
                // Malformed delimiters or a failed write abort the whole run
                out.flush()?;
                let pending = converter.diagnostics_mut().drain();
                print_diagnostics(&pending, &cli);
                abort(&err, &cli);
            }
        }

        let diagnostics = converter.diagnostics_mut().drain();
        total_diagnostics += diagnostics.len();
        print_diagnostics(&diagnostics, &cli);
    }

    out.flush()?;

    if let Some(ref path) = cli.output {
        if !cli.quiet {
            eprintln!("✓ Output written to: {}", path.display());
        }
    }

    if unreadable_inputs > 0 || (cli.strict && total_diagnostics > 0) {
        if cli.strict && total_diagnostics > 0 {
            eprintln!(
                "Error: {} diagnostic(s) in strict mode",
                total_diagnostics
            );
        }
        std::process::exit(1);
    }

    Ok(())
}

/// Write one line per token, like the converter sees them
#[cfg(feature = "cli")]
fn dump_tokens(source: &str, path: &str, out: &mut dyn Write) -> ConversionResult<()> {
    let mut lexer = Tokenizer::new(source);
    loop {
        let token = lexer.next_token().map_err(|e| e.in_file(path))?;
        writeln!(out, "{}", token)?;
        if token.is_eof() {
            return Ok(());
        }
    }
}

#[cfg(feature = "cli")]
fn print_diagnostics(diagnostics: &[Diagnostic], cli: &Cli) {
    if cli.quiet || diagnostics.is_empty() {
        return;
    }
    eprint!("{}", format_diagnostics(diagnostics, !cli.no_color));
}

#[cfg(feature = "cli")]
fn abort(err: &ConversionError, cli: &Cli) -> ! {
    if cli.no_color {
        eprintln!("error: {}", err);
    } else {
        eprintln!("\x1b[31merror: {}\x1b[0m", err);
    }
    std::process::exit(1);
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install texinfo-conv --features cli");
    eprintln!("  texi [OPTIONS] <INPUT>...");
}
