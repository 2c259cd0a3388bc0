use std::io::BufRead;

use clap::Parser;
use log::info;

use biodivine_lib_truth_table::{
    ProcessingLimits, Session, SessionState, DEFAULT_MAX_VARIABLES, OPERATOR_REFERENCE,
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Print truth tables of Boolean expressions.")]
struct Cli {
    /// Expressions to process. When none are given, one expression is read per line of
    /// the standard input.
    #[arg(value_name = "EXPRESSION")]
    expressions: Vec<String>,

    /// Reject expressions with more variables than this.
    #[arg(long, value_name = "INT", default_value_t = DEFAULT_MAX_VARIABLES)]
    max_variables: usize,

    /// Also print the postfix form of each expression.
    #[arg(long)]
    postfix: bool,

    /// Enable debug output of the processing stages.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    let level = if args.verbose {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Warn
    };
    simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let mut session = Session::with_limits(ProcessingLimits::new(args.max_variables));
    info!("Limits: {:?}", session.limits());

    let mut failures = 0usize;
    if args.expressions.is_empty() {
        for line in std::io::stdin().lock().lines() {
            if !print_result(&mut session, &line?, args.postfix) {
                failures += 1;
            }
        }
    } else {
        for expression in &args.expressions {
            if !print_result(&mut session, expression, args.postfix) {
                failures += 1;
            }
        }
    }

    if failures > 0 {
        eprintln!();
        eprintln!("{}", OPERATOR_REFERENCE);
        std::process::exit(1);
    }
    Ok(())
}

/// Submit `input` to the `session` and print the outcome. Returns `false` if the input
/// was rejected.
fn print_result(session: &mut Session, input: &str, postfix: bool) -> bool {
    match session.submit(Some(input)) {
        SessionState::Idle => true,
        SessionState::Validated(table) => {
            println!("{}", input.trim());
            if postfix {
                let tokens: Vec<&str> = table.postfix().iter().map(|t| t.as_str()).collect();
                println!("postfix: {}", tokens.join(" "));
            }
            println!("{}", table);
            true
        }
        SessionState::Invalid(error) => {
            eprintln!("{}: {}", input.trim(), error);
            false
        }
    }
}
