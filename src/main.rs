//! Main entry point for the lsr CLI app

use std::io;
use std::process::ExitCode;

use lsr::cli;
use lsr::identity::IdentityCache;
use lsr::traverse::Traverser;

fn main() -> ExitCode {
    let args = cli::run();
    let options = args.to_options();
    let operands = args.operands();

    let mut ids = IdentityCache::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut traverser = Traverser::new(&options, &mut ids, &mut out);
    if traverser.run(&operands) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
