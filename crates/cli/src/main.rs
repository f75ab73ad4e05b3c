use owo_colors::OwoColorize as _;

fn main() {
  if let Err(err) = rustbytes_cli::run() {
    anstream::eprintln!("{}", err.to_string().red());
    std::process::exit(1);
  }
}
