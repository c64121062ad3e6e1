//! evol-dna binary entry point

use dna_cli::output::print_error;

#[tokio::main]
async fn main() {
    if let Err(e) = dna_cli::run().await {
        // Reader went away (e.g. `| head`); nothing left to report.
        if e.is_broken_pipe() {
            return;
        }
        print_error(&e.to_string());
        if e.is_usage() {
            eprintln!("USAGE: evol-dna analyze <lifeform json dump>...");
        }
        std::process::exit(e.exit_code());
    }
}
