use clap::Parser;
use std::process;

#[derive(Parser, Debug)]
#[command(
    name = "inputlang",
    version,
    about = "Switch the active input source on macOS",
    long_about = None
)]
struct Args {
    /// Input source identifier to switch to, e.g. com.apple.keylayout.US
    /// If not provided, the current input source will be displayed
    input_source: Option<String>,

    #[arg(short, long, help = "List the identifiers of all enabled input sources")]
    list: bool,

    #[arg(
        long,
        help = "Do nothing instead of failing when the identifier is not installed"
    )]
    lenient: bool,

    #[arg(short, long, help = "Enable verbose output for debugging")]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(args: &Args) -> inputlang::Result<()> {
    if args.list {
        for id in inputlang::input_source_ids()? {
            println!("{}", id);
        }
        return Ok(());
    }

    match &args.input_source {
        None => println!("{}", inputlang::current_input_source()?),
        Some(id) if args.lenient => inputlang::switch_input_language(id)?,
        Some(id) => inputlang::select_input_source(id)?,
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logger(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
