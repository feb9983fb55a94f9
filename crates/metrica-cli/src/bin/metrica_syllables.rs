// metrica-syllables: Count metrical syllables of text from stdin.
//
// Reads lines from stdin and prints the syllable count of each,
// followed by the line itself:
//   11: Il sole scende dietro la collina
//
// Usage:
//   metrica-syllables [OPTIONS]
//
// Options:
//   -h, --help   Print help

use std::io::{self, BufRead, Write};

use metrica_it::MetricaHandle;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if metrica_cli::wants_help(&args) {
        println!("metrica-syllables: Count metrical syllables of text from stdin.");
        println!();
        println!("Usage: metrica-syllables [OPTIONS]");
        println!();
        println!("Reads lines from stdin. Prints for each line:");
        println!("  COUNT: line");
        println!();
        println!("Options:");
        println!("  -h, --help   Print this help");
        return;
    }
    if !args.is_empty() {
        metrica_cli::fatal(&format!("unknown argument: {}", args[0]));
    }

    let handle = MetricaHandle::new();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let count = handle.count_syllables(&line);
        let _ = writeln!(out, "{count}: {}", line.trim());
    }
}
