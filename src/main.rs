//! CLI entry point for retroplay
//!
//! Decodes Retrosheet event files or single play strings.

use std::path::PathBuf;
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = &args[1];

    match command.as_str() {
        "decode" => {
            let options = match DecodeOptions::parse(&args[2..]) {
                Ok(options) => options,
                Err(message) => {
                    eprintln!("Error: {}", message);
                    eprintln!();
                    print_usage();
                    process::exit(1);
                }
            };
            run_decode(options);
        }
        "play" => {
            if args.len() < 3 {
                eprintln!("Error: Missing play string");
                eprintln!();
                print_usage();
                process::exit(1);
            }
            run_play(&args[2]);
        }
        "--help" | "-h" => {
            print_usage();
        }
        _ => {
            eprintln!("Error: Unknown command '{}'", command);
            eprintln!();
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    println!("retroplay - Retrosheet play notation decoder");
    println!();
    println!("USAGE:");
    println!("    retroplay decode <file>... [--tables <tables.json>] [--out <dir>]");
    println!("    retroplay play <notation>");
    println!();
    println!("COMMANDS:");
    println!("    decode <file>...    Decode event files and print a summary report");
    println!("    play <notation>     Decode one play string and print it as JSON");
    println!("    --help, -h          Show this help message");
    println!();
    println!("OPTIONS:");
    println!("    --tables <file>    Load reference tables from a JSON file");
    println!("    --out <dir>        Write each decoded game to <dir>/<game id>.json");
    println!();
    println!("EXAMPLES:");
    println!("    retroplay decode 1986NYN.EVN 1986BOS.EVA --out games/");
    println!("    retroplay play 'S9/L9S.2-H;1-3'");
}

struct DecodeOptions {
    files: Vec<PathBuf>,
    tables: Option<PathBuf>,
    out: Option<PathBuf>,
}

impl DecodeOptions {
    fn parse(args: &[String]) -> Result<Self, String> {
        let mut options = DecodeOptions {
            files: Vec::new(),
            tables: None,
            out: None,
        };

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--tables" => {
                    let path = iter.next().ok_or("Missing value for --tables")?;
                    options.tables = Some(PathBuf::from(path));
                }
                "--out" => {
                    let path = iter.next().ok_or("Missing value for --out")?;
                    options.out = Some(PathBuf::from(path));
                }
                flag if flag.starts_with("--") => {
                    return Err(format!("Unknown option '{}'", flag));
                }
                file => options.files.push(PathBuf::from(file)),
            }
        }

        if options.files.is_empty() {
            return Err("Missing event file path".to_string());
        }
        Ok(options)
    }
}

fn run_decode(options: DecodeOptions) {
    let decoder = match retroplay::cli::load_decoder(options.tables.as_deref()) {
        Ok(decoder) => decoder,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            process::exit(1);
        }
    };

    if let Err(err) =
        retroplay::cli::decode::run_decode(&options.files, decoder, options.out.as_deref())
    {
        eprintln!("Error: Decoding failed");
        eprintln!("Reason: {:#}", err);
        process::exit(1);
    }
}

fn run_play(notation: &str) {
    match retroplay::cli::play::run_play(notation, &retroplay::Decoder::standard()) {
        Ok(output) => println!("{}", output),
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    }
}
