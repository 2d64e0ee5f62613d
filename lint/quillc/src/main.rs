//! Quill stylesheet linter CLI.

use quillc::commands::{check_paths, list_rules, parse_check_options, print_tokens};

fn main() {
    quillc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "check" => {
            let options = match parse_check_options(&args[2..]) {
                Ok(options) => options,
                Err(message) => {
                    eprintln!("error: {message}");
                    eprintln!("Usage: quill check [paths...] [options]");
                    std::process::exit(1);
                }
            };
            std::process::exit(check_paths(&options));
        }
        "rules" => {
            list_rules();
        }
        "tokens" => {
            if args.len() < 3 {
                eprintln!("Usage: quill tokens <value>");
                eprintln!("Example: quill tokens \"1px solid rgb(0, 0, 0)\"");
                std::process::exit(1);
            }
            print_tokens(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("quill {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Quill stylesheet linter");
    println!();
    println!("Usage: quill <command> [options]");
    println!();
    println!("Commands:");
    println!("  check [paths...]     Lint .css files (default: current directory)");
    println!("  rules                List available rules");
    println!("  tokens <value>       Show the token tree of a declaration value");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Check options:");
    println!("  --config=<file>      Configuration file (default: .quillrc.json)");
    println!("  --format=<name>      Output format: terminal (default), json");
    println!("  --color=<mode>       Colors: auto (default), always, never");
    println!("  --no-parallel        Lint files sequentially");
    println!();
    println!("Exit codes:");
    println!("  0  no errors");
    println!("  1  configuration or file access problem");
    println!("  2  lint errors found");
    println!();
    println!("Examples:");
    println!("  quill check");
    println!("  quill check src/styles --format=json");
    println!("  quill tokens \"10px, 2em / 3\"");
}
