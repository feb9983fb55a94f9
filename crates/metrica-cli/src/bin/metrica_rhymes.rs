// metrica-rhymes: Detect the rhyme scheme of a poem from stdin.
//
// Reads a whole poem from stdin (one verse per line) and prints the
// scheme, the final sound of each verse, and the rhyme groups.
//
// Usage:
//   metrica-rhymes [OPTIONS]
//
// Options:
//   --json       Print the full rhyme analysis as JSON
//   -h, --help   Print help

use metrica_it::MetricaHandle;

fn main() {
    let mut args: Vec<String> = std::env::args().skip(1).collect();

    if metrica_cli::wants_help(&args) {
        println!("metrica-rhymes: Detect the rhyme scheme of a poem from stdin.");
        println!();
        println!("Usage: metrica-rhymes [OPTIONS]");
        println!();
        println!("Reads a whole poem from stdin, one verse per line.");
        println!();
        println!("Options:");
        println!("  --json       Print the full rhyme analysis as JSON");
        println!("  -h, --help   Print this help");
        return;
    }

    let as_json = metrica_cli::take_flag(&mut args, "--json", "-j");
    if !args.is_empty() {
        metrica_cli::fatal(&format!("unknown argument: {}", args[0]));
    }

    let input = metrica_cli::read_stdin();
    let handle = MetricaHandle::new();
    let analysis = handle.analyze_rhymes(&input);

    if as_json {
        match serde_json::to_string_pretty(&analysis) {
            Ok(json) => println!("{json}"),
            Err(e) => metrica_cli::fatal(&format!("serialization failed: {e}")),
        }
        return;
    }

    println!("scheme: {}", analysis.scheme);
    for (i, sound) in analysis.final_sounds.iter().enumerate() {
        let letter = analysis.scheme.chars().nth(i).unwrap_or('-');
        println!("  {} {}: {sound}", i + 1, letter);
    }
    for group in &analysis.groups {
        println!("group {}: {}", group.letter, group.sounds.join(", "));
    }
}
