fn main() {
    if let Err(e) = methane_gradient::adapters::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
