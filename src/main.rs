mod err;
mod run;
mod script;

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use miette::{IntoDiagnostic, Report, WrapErr};
use tracing::{info, Level};

use crate::err::{syntax_errors_to_report, Diags};
use crate::run::Kind;

const TEXT_DEMO: &str = r#"
new "b", "a";
print;
add "c";
add "c";
remove "a";
remove "z";
contains "b";
size;
print;
"#;

const ADDRESS_DEMO: &str = r#"
new ("Bob", "Main St", 12345), ("Alice", "Elm St", 54321);
add ("Bob", "Main St", 12345);
size;
print;
"#;

/// Build a set from a script of `new`, `add`, `remove`, `contains`, `size`, `slice` and `print` commands
///
/// Elements are `"text"` (with `\"` and `\\` escapes) or `("name", "street", zip)`.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Script to execute; runs a demo if omitted
    script: Option<PathBuf>,

    /// Element type held by the set
    #[arg(long, value_enum, default_value_t = Kind::Text)]
    kind: Kind,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> miette::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(match args.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        })
        .init();

    let src = match &args.script {
        Some(path) => std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Could not read {}", path.display()))?,
        None => match args.kind {
            Kind::Text => TEXT_DEMO,
            Kind::Address => ADDRESS_DEMO,
        }
        .to_owned(),
    };
    info!(kind = ?args.kind, script = ?args.script, "running");

    let stmts = match script::parse(&src).into_result() {
        Ok(stmts) => stmts,
        Err(syntax_errs) => {
            let mut diags = Vec::new();
            syntax_errors_to_report(syntax_errs, &mut |diag| diags.push(diag));
            return Err(Diags::new(src.clone(), diags).into());
        }
    };
    info!(statements = stmts.len(), "parsed");

    let mut stdout = std::io::stdout().lock();
    run::run(&stmts, args.kind, &mut stdout).map_err(|diag| Report::new(diag).with_source_code(src))
}
