use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use seqgrep::RunConfig;

/// Grep FASTA/FASTQ records against a newline separated list of target
/// identifiers. Matching records (or, with --invert-match, the rest) are
/// written to stdout or to files derived from the output base path.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Newline separated file with target identifiers.
    #[arg(short = 'f', long = "file")]
    file: PathBuf,

    /// Input file(s), single end. `-` reads stdin.
    #[arg(short = 'i', long = "input", num_args = 1..)]
    input: Vec<PathBuf>,

    /// Input file(s), interleaved pairs.
    #[arg(short = 'I', long = "interleaved", num_args = 1..)]
    interleaved: Vec<PathBuf>,

    /// Input file(s), paired end: two files per pair, in order.
    #[arg(short = 'p', long = "paired", num_args = 1..)]
    paired: Vec<PathBuf>,

    /// Output base path. `-` writes stdout; otherwise per-mode suffixes and
    /// a `.fq`/`.fsa` extension are appended.
    #[arg(short = 'o', long = "output", default_value = "-")]
    output: PathBuf,

    /// Invert the sense of matching.
    #[arg(short = 'v', long = "invert-match")]
    invert: bool,

    /// Trailing inputs, treated as single end.
    #[arg(value_name = "FILE")]
    rest: Vec<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut single = cli.input;
    single.extend(cli.rest);
    if single.is_empty() && cli.interleaved.is_empty() && cli.paired.is_empty() {
        eprintln!("missing input");
        return ExitCode::FAILURE;
    }

    let cfg = RunConfig {
        target_file: cli.file,
        single,
        interleaved: cli.interleaved,
        paired: cli.paired,
        output: cli.output,
        invert: cli.invert,
    };
    match seqgrep::run(&cfg) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
