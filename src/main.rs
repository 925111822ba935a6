use std::process;

fn main() {
    if let Err(e) = gatetrack_lib::cli::run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
