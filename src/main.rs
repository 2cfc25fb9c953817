use std::env;
use std::io;
use std::io::Write;
use std::process::exit;

use mimalloc::MiMalloc;
use sara::common::REPL_PROMPT;
use sara::{ReservedWords, SaraError, SaraResult, Scanner, SourceText, Token};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() {
    let words = ReservedWords::new();
    let args = env::args().collect::<Vec<String>>();

    let result = match args.len() {
        1 => repl(&words),
        2 => run_file(&words, &args[1]),
        _ => Err(SaraError::Usage),
    };
    if let Err(err) = result {
        eprintln!("{err}");
        exit(err.exit_code());
    }
}

fn repl(words: &ReservedWords) -> SaraResult<()> {
    let mut scanner = Scanner::new(words);
    let mut buf = String::new();
    loop {
        buf.clear();
        print!("{REPL_PROMPT}");
        io::stdout().flush()?;
        if io::stdin().read_line(&mut buf)? == 0 {
            return Ok(());
        }
        print_tokens(&scanner.scan(&mut SourceText::new(&buf)));
    }
}

fn run_file(words: &ReservedWords, path: &str) -> SaraResult<()> {
    let source = std::fs::read_to_string(path).map_err(|source| SaraError::Io {
        path: path.to_owned(),
        source,
    })?;
    let tokens = Scanner::new(words).scan(&mut SourceText::new(&source));
    print_tokens(&tokens);
    Ok(())
}

fn print_tokens(tokens: &[Token]) {
    for token in tokens {
        println!("{} {} {}", token.tag(), token.class_name(), token);
    }
}

