use clap::Parser;
use wfpatch::cli::{self, Args};
use wfpatch::core::{AppError, DefaultErrorReporter, ErrorReporter};

fn main() {
    let args = Args::parse();
    let verbose = args.verbose();

    let result = wfpatch::logging::init(verbose).and_then(|_| cli::run(args));
    if let Err(err) = result {
        DefaultErrorReporter::new().report_error(&AppError::from(err));
        std::process::exit(1);
    }
}
