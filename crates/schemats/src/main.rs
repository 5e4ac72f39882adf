use clap::Parser;
use schemats::cli::Cli;

/// Reset SIGPIPE to default behavior so piping to `head` etc. doesn't panic.
#[cfg(unix)]
fn reset_sigpipe() {
    // SAFETY: libc::signal is a standard POSIX function; this only restores the
    // default disposition of SIGPIPE.
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn reset_sigpipe() {}

fn main() {
    reset_sigpipe();

    let cli = Cli::parse();
    schemats::logging::init(cli.verbose);

    if let Err(e) = cli.run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
