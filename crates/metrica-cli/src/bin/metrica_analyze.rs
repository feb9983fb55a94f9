// metrica-analyze: Full metrical analysis of a poem from stdin.
//
// Reads a whole poem from stdin (one verse per line) and prints the
// per-verse syllable counts, the rhyme scheme, the recognized form and
// whether the poem satisfies its metric. With --form the poem is
// instead validated against the named form from the catalog.
//
// Usage:
//   metrica-analyze [OPTIONS]
//
// Options:
//   -t, --tolerance   Allow small per-verse deviations
//   -f, --form ID     Validate against a specific form (e.g. haiku)
//   --json            Print the analysis as JSON
//   -h, --help        Print help

use metrica_it::{AnalyzeOptions, MetricaHandle};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (form, mut args) = metrica_cli::parse_form(&args);

    if metrica_cli::wants_help(&args) {
        println!("metrica-analyze: Full metrical analysis of a poem from stdin.");
        println!();
        println!("Usage: metrica-analyze [OPTIONS]");
        println!();
        println!("Reads a whole poem from stdin, one verse per line.");
        println!();
        println!("Options:");
        println!("  -t, --tolerance   Allow small per-verse deviations");
        println!("  -f, --form ID     Validate against a specific form (e.g. haiku)");
        println!("  --json            Print the analysis as JSON");
        println!("  -h, --help        Print this help");
        return;
    }

    let tolerance = metrica_cli::take_flag(&mut args, "--tolerance", "-t");
    let as_json = metrica_cli::take_flag(&mut args, "--json", "-j");
    if !args.is_empty() {
        metrica_cli::fatal(&format!("unknown argument: {}", args[0]));
    }

    let input = metrica_cli::read_stdin();
    let handle = MetricaHandle::with_options(AnalyzeOptions { tolerance });

    if let Some(form_id) = form {
        let verdict = match handle.validate_as(&input, &form_id) {
            Ok(v) => v,
            Err(e) => metrica_cli::fatal(&e.to_string()),
        };
        if as_json {
            match serde_json::to_string_pretty(&verdict) {
                Ok(json) => println!("{json}"),
                Err(e) => metrica_cli::fatal(&format!("serialization failed: {e}")),
            }
            return;
        }
        print_verdict(&form_id, &verdict);
        return;
    }

    let analysis = match handle.analyze_poem(&input) {
        Ok(a) => a,
        Err(e) => metrica_cli::fatal(&e.to_string()),
    };

    if as_json {
        match serde_json::to_string_pretty(&analysis) {
            Ok(json) => println!("{json}"),
            Err(e) => metrica_cli::fatal(&format!("serialization failed: {e}")),
        }
        return;
    }

    for verse in &analysis.verses {
        println!("{:2}: {} ({})", verse.syllables, verse.text, verse.final_sound);
    }
    println!("total syllables: {}", analysis.total_syllables);
    println!("scheme: {}", analysis.rhyme_scheme);
    println!("form: {}", analysis.recognized_form.name());
    println!(
        "meets metric: {}",
        if analysis.meets_metric { "yes" } else { "no" }
    );
}

fn print_verdict(form_id: &str, verdict: &metrica_core::MetricVerdict) {
    match &verdict.details {
        Some(details) => println!("form: {} ({})", details.label, details.id),
        None => println!("form: {form_id} (not in catalog)"),
    }
    println!(
        "meets metric: {}",
        if verdict.meets_metric { "yes" } else { "no" }
    );
    if let Some(expected) = verdict.expected_verses {
        println!("expected verses: {expected}");
    }
    for mismatch in &verdict.syllable_mismatches {
        println!(
            "verse {}: {} syllables, expected {}",
            mismatch.position, mismatch.actual, mismatch.expected
        );
    }
    if let Some(scheme) = &verdict.expected_scheme {
        println!("expected scheme: {scheme}");
    }
}
