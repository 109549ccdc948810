//! Binary entrypoint for fontmount-cli.

fn main() {
    if let Err(err) = fontmount_cli::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
