use clap::Parser;
use make_title::cli::{handle_make_title, Cli};
use make_title::logging;

fn main() {
    logging::init();
    let cli = Cli::parse();

    let result = handle_make_title(cli.words, cli.stdin, cli.date, cli.ascii, cli.json);

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
