mod config;

use std::path::PathBuf;
use std::process;

use clap::{CommandFactory, Parser};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use tracing::info;
use tracing_subscriber::EnvFilter;

use rewriter::{
    ExternalFormatter, FileOutcome, FileResult, Formatter, Mode, Options, Passthrough,
    RewriteError, Summary,
};

use crate::config::Config;

#[derive(Parser)]
#[command(
    name = "gqlfmt",
    version,
    about = "Format GraphQL blocks embedded in .hurl files"
)]
struct Cli {
    /// Directory to scan recursively, or a single file to rewrite
    path: Option<PathBuf>,

    /// Report files that would change, without writing them
    #[arg(long)]
    check: bool,

    /// TOML configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Formatter program run on each query (default: biome)
    #[arg(long, value_name = "PROGRAM")]
    formatter: Option<String>,

    /// Only inline variables and reorder arguments
    #[arg(long, conflicts_with = "formatter")]
    no_format: bool,

    /// Extension of the files processed in directory mode (default: hurl)
    #[arg(long, value_name = "EXT")]
    extension: Option<String>,

    /// Disable colored diagnostics
    #[arg(long)]
    no_color: bool,

    /// Log each file and formatter run
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let Some(path) = cli.path.clone() else {
        println!("{}", Cli::command().render_usage());
        process::exit(1);
    };

    let mut config = match &cli.config {
        Some(config_path) => match Config::load(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("error: {}", e);
                process::exit(1);
            }
        },
        None => Config::default(),
    };
    if let Some(program) = cli.formatter {
        config.formatter.program = program;
    }
    if cli.no_format {
        config.formatter.enabled = false;
    }
    if let Some(extension) = cli.extension {
        config.extension = extension;
    }

    let formatter: Box<dyn Formatter> = if config.formatter.enabled {
        Box::new(ExternalFormatter::new(
            config.formatter.program,
            config.formatter.args,
        ))
    } else {
        Box::new(Passthrough)
    };
    let options = Options {
        extension: config.extension,
        mode: if cli.check { Mode::Check } else { Mode::Write },
    };

    let results = rewriter::process_path(&path, formatter.as_ref(), &options);

    let color_choice = if cli.no_color {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };
    report(&results, color_choice, options.mode);

    let summary = Summary::from_results(&results);
    print_summary(&summary, options.mode);

    let code = exit_code(&summary, options.mode);
    if code != 0 {
        process::exit(code);
    }
}

/// 1 when any file failed, or when check mode found a file to rewrite.
fn exit_code(summary: &Summary, mode: Mode) -> i32 {
    if summary.failed > 0 || (mode == Mode::Check && summary.changed > 0) {
        1
    } else {
        0
    }
}

fn init_logging(verbose: bool) {
    // RUST_LOG overrides; --verbose => debug; else info
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "gqlfmt=debug,rewriter=debug"
        } else {
            "gqlfmt=info,rewriter=info"
        })
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn report(results: &[FileResult], color_choice: ColorChoice, mode: Mode) {
    let writer = StandardStream::stderr(color_choice);
    let config = term::Config::default();
    let mut files = SimpleFiles::new();

    for result in results {
        let file_id = files.add(result.path.display().to_string(), result.source.clone());

        for warning in &result.warnings {
            let diagnostic = warning.to_diagnostic(file_id);
            let _ = term::emit_to_write_style(&mut writer.lock(), &config, &files, &diagnostic);
        }

        match &result.outcome {
            FileOutcome::Unchanged => {}
            FileOutcome::Changed => match mode {
                Mode::Check => eprintln!("would rewrite {}", result.path.display()),
                Mode::Write => info!(path = %result.path.display(), "rewrote"),
            },
            FileOutcome::Failed(RewriteError::Parse(error)) => {
                let diagnostic = error.to_diagnostic(file_id);
                let _ = term::emit_to_write_style(&mut writer.lock(), &config, &files, &diagnostic);
            }
            FileOutcome::Failed(error) => eprintln!("error: {}", error),
        }
    }
}

fn print_summary(summary: &Summary, mode: Mode) {
    let changed_label = match mode {
        Mode::Check => "to rewrite",
        Mode::Write => "rewritten",
    };
    eprintln!(
        "{} file(s): {} {}, {} failed; {} block(s), {} warning(s)",
        summary.files,
        summary.changed,
        changed_label,
        summary.failed,
        summary.blocks,
        summary.warnings
    );
}
