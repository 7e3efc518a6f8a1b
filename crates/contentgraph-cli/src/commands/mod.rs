pub mod dump;
pub mod filter;
pub mod loader;

/// Report `err` the way every command does and exit.
pub fn fail(err: impl std::fmt::Display) -> ! {
    eprintln!("error: {err}");
    std::process::exit(1);
}
