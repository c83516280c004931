use std::{
    env,
    fs::read_to_string,
    io::{self, BufRead, Write},
    process,
    time::Instant,
};

use monkey::{
    ast::ast::Program,
    display_error,
    lexer::lexer::tokenize,
    parser::parser::{parse, Parser},
};

const PROMPT: &str = ">> ";

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let show_tokens = args.iter().any(|arg| arg == "--tokens");
    let file_path = args.iter().find(|arg| !arg.starts_with("--"));

    match file_path {
        Some(path) => run_file(path, show_tokens),
        None => start_repl(show_tokens),
    }
}

fn run_file(file_path: &str, show_tokens: bool) {
    let file_name = file_path.rsplit('/').next().unwrap_or(file_path).to_string();

    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Failed to read {}: {}", file_path, err);
            process::exit(1);
        }
    };

    let start = Instant::now();

    if show_tokens {
        for token in tokenize(source.clone(), Some(file_name.clone())) {
            token.debug();
        }
        println!("Tokenized in {:?}", start.elapsed());
    }

    let parse_start = Instant::now();
    let (parser, program) = parse(source.clone(), Some(file_name));

    println!("Parsed in {:?}", parse_start.elapsed());

    if !report(&parser, &program, &source) {
        process::exit(1);
    }

    println!("Total time: {:?}", start.elapsed());
}

fn start_repl(show_tokens: bool) {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{}", PROMPT);
        if stdout.flush().is_err() {
            return;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => return,
            Ok(_) => {}
        }

        if show_tokens {
            for token in tokenize(line.clone(), None) {
                token.debug();
            }
        }

        let (parser, program) = parse(line.clone(), None);
        report(&parser, &program, &line);
    }
}

/// Prints the program, or the parser errors if there were any.
///
/// Returns whether the parse was clean.
fn report(parser: &Parser, program: &Program, source: &str) -> bool {
    if parser.diagnostics().is_empty() {
        println!("{}", program);
        return true;
    }

    println!("Woops! We ran into some monkey business here!");
    println!(" parser errors:");
    for message in parser.errors() {
        println!("\t{}", message);
    }

    for error in parser.diagnostics() {
        display_error(error, source);
    }

    false
}
