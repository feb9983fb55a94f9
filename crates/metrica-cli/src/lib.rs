// metrica-cli: shared utilities for CLI tools.

use std::io::Read;
use std::process;

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// Check for a boolean flag, removing it from the args.
pub fn take_flag(args: &mut Vec<String>, long: &str, short: &str) -> bool {
    let before = args.len();
    args.retain(|a| a != long && a != short);
    args.len() != before
}

/// Parse a `--form=ID` or `-f ID` argument from command line args.
///
/// Returns `(form_id, remaining_args)`.
pub fn parse_form(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut form = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--form=") {
            form = Some(val.to_string());
        } else if arg == "--form" || arg == "-f" {
            if i + 1 < args.len() {
                form = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {} requires a value", arg);
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (form, remaining)
}

/// Read all of stdin into a string.
pub fn read_stdin() -> String {
    let mut input = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut input) {
        fatal(&format!("failed to read stdin: {e}"));
    }
    input
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn take_flag_removes_both_spellings() {
        let mut a = args(&["--json", "--tolerance", "-t"]);
        assert!(take_flag(&mut a, "--tolerance", "-t"));
        assert_eq!(a, args(&["--json"]));
        assert!(!take_flag(&mut a, "--tolerance", "-t"));
    }

    #[test]
    fn parse_form_variants() {
        let (form, rest) = parse_form(&args(&["--form=haiku", "--json"]));
        assert_eq!(form.as_deref(), Some("haiku"));
        assert_eq!(rest, args(&["--json"]));

        let (form, rest) = parse_form(&args(&["-f", "sonetto"]));
        assert_eq!(form.as_deref(), Some("sonetto"));
        assert!(rest.is_empty());

        let (form, rest) = parse_form(&args(&["--json"]));
        assert!(form.is_none());
        assert_eq!(rest, args(&["--json"]));
    }
}
