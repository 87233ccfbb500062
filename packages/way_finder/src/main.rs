use std::io;
use way_finder::cli::run;

fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut input = stdin.lock();
    let mut output = stdout.lock();

    run(&mut input, &mut output).expect("Error running the map navigator!");
}
