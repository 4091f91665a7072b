use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, LevelFilter};
use pl0c::{
    compile, display_error,
    lexer::lexer::tokenize_with_mode,
    options::{CompilerOptions, LexMode},
    CompiledProgram,
};
use simple_logger::SimpleLogger;

#[derive(ClapParser)]
#[command(name = "pl0c")]
#[command(about = "One-pass PL/0 compiler targeting a stack-machine P-code", long_about = None)]
struct Cli {
    /// Input file path
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Drop malformed lexemes instead of failing on them
    #[arg(long)]
    lenient: bool,

    /// Print the lexeme list before the assembly listing
    #[arg(long)]
    lexemes: bool,

    /// Print the token stream and stop
    #[arg(long)]
    tokens: bool,

    /// Do not print the symbol table
    #[arg(long = "no-symbols")]
    no_symbols: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    SimpleLogger::new().with_level(level).init()?;

    let source = fs::read_to_string(&cli.file)
        .with_context(|| format!("failed to read file '{}'", cli.file.display()))?;
    let file_name = file_name(&cli.file);

    let options = CompilerOptions {
        lex_mode: if cli.lenient {
            LexMode::Lenient
        } else {
            LexMode::Strict
        },
    };

    if cli.tokens {
        return match tokenize_with_mode(source.clone(), Some(file_name.clone()), options.lex_mode) {
            Ok(tokens) => {
                for token in &tokens {
                    println!(
                        "{:>5} {:>3} {:<18} {}",
                        token.span.start.0,
                        token.kind.code(),
                        token.kind.to_string(),
                        token.value
                    );
                }
                Ok(ExitCode::SUCCESS)
            }
            Err(error) => {
                display_error(&error, &source, &file_name);
                Ok(ExitCode::FAILURE)
            }
        };
    }

    match compile(source.clone(), Some(file_name.clone()), &options) {
        Ok(program) => {
            info!("compiled {}", file_name);
            print_program(&program, cli.lexemes, !cli.no_symbols);
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            display_error(&error, &source, &file_name);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn print_program(program: &CompiledProgram, lexemes: bool, symbols: bool) {
    if lexemes {
        println!("Lexeme List:");
        println!("{}", program.lexemes);
        println!();
    }

    println!("Assembly Code:");
    println!("{:>4} {:>3} {:>2} {:>5}", "LINE", "OP", "L", "M");
    for (line, instruction) in program.code.iter().enumerate() {
        println!(
            "{:>4} {:>3} {:>2} {:>5}",
            line,
            instruction.op.mnemonic(),
            instruction.level,
            instruction.operand
        );
    }

    if !symbols {
        return;
    }

    println!();
    println!("Symbol Table:");
    println!("KIND | NAME        | VALUE | LEVEL | ADDRESS | MARK");
    println!("---------------------------------------------------");
    for symbol in &program.symbols {
        println!(
            "{:>4} | {:>11} | {:>5} | {:>5} | {:>7} | {:>4}",
            symbol.kind.code(),
            symbol.name,
            symbol.value,
            symbol.level,
            symbol.address,
            symbol.mark as u8
        );
    }
}
