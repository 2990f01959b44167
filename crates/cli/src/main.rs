fn main() {
    if let Err(err) = refscope_cli::run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
