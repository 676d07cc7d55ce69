use gumdrop::Options;
use lox::{keyword::KEYWORDS, Report, Reporter, Token};
use rustyline::{error::ReadlineError, Editor};

use std::path::Path;

const HISTORY: &str = ".lox_history";

// sysexits.h
const EX_DATAERR: i32 = 65;
const EX_NOINPUT: i32 = 66;

#[derive(Debug, Options)]
struct Args {
    #[options(help = "print help message")]
    help: bool,

    #[options(help = "only report errors, don't print tokens")]
    quiet: bool,

    #[options(help = "print the reserved words and exit")]
    keywords: bool,

    #[options(free, help = "files to scan, starts a prompt if none are given")]
    files: Vec<String>,
}

fn main() {
    #[cfg(feature = "logging")]
    lox_log::init();

    let args = Args::parse_args_default_or_exit();

    if args.keywords {
        let mut keywords: Vec<_> = KEYWORDS.iter().collect();
        keywords.sort_by_key(|(spelling, _)| **spelling);
        for (spelling, kind) in keywords {
            println!("{spelling:8}{kind}");
        }
        return;
    }

    if args.files.is_empty() {
        repl(&args);
        return;
    }

    let mut status = 0;
    for file in args.files.iter() {
        let code = scan_file(&args, Path::new(file));
        if code != 0 {
            status = code;
        }
    }

    std::process::exit(status);
}

fn scan_file(args: &Args, path: &Path) -> i32 {
    let contents = match lox::read_source(path) {
        Ok(contents) => contents,
        Err(err) => {
            lox::error!("{:?}", err);
            eprintln!("{err}");
            return EX_NOINPUT;
        }
    };

    let mut reporter = Reporter::with_file(path.display().to_string());
    let tokens = lox::scan_with(&contents, &mut reporter);
    print_tokens(args, &tokens);

    if reporter.had_error() {
        EX_DATAERR
    } else {
        0
    }
}

fn repl(args: &Args) {
    let mut rl = Editor::<()>::new();
    if rl.load_history(HISTORY).is_err() {
        lox::info!("no history in {}", HISTORY);
    }

    let mut reporter = Reporter::new();
    loop {
        match rl.readline("-- ") {
            Ok(line) => {
                rl.add_history_entry(line.as_str());
                scan_line(args, &line, &mut reporter);
                reporter.reset();
            }

            Err(ReadlineError::Interrupted) => {}

            Err(ReadlineError::Eof) => {
                println!("bye!");
                break;
            }

            Err(e) => {
                eprintln!("err: {e}");
                break;
            }
        }
    }

    if let Err(e) = rl.save_history(HISTORY) {
        eprintln!("couldn't save history: {e}");
    }
}

fn scan_line(args: &Args, line: &str, reporter: &mut impl Report) {
    let tokens = lox::scan_with(line, reporter);
    print_tokens(args, &tokens);
}

fn print_tokens(args: &Args, tokens: &[Token]) {
    if args.quiet {
        return;
    }

    for token in tokens {
        println!("{token}");
    }
}
