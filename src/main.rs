use std::{env, fs::read_to_string, io, path::PathBuf, process};

use frontend::{
    parser::parser::{parse_source, AbsentPolicy, ParserConfig},
    render_error, repl,
};
use log::{Level, LevelFilter, Log, Metadata, Record};

/// Writes log records to stderr.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

struct Options {
    config: ParserConfig,
    verbose: bool,
    file: Option<PathBuf>,
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut options = Options {
        config: ParserConfig::default(),
        verbose: false,
        file: None,
    };

    for arg in args {
        match arg.as_str() {
            "--holes" => options.config.absent_policy = AbsentPolicy::KeepHoles,
            "-v" | "--verbose" => options.verbose = true,
            flag if flag.starts_with('-') => return Err(format!("unknown flag `{}`", flag)),
            path => {
                if options.file.is_some() {
                    return Err(String::from("only one input file may be given"));
                }
                options.file = Some(PathBuf::from(path));
            }
        }
    }

    Ok(options)
}

fn run_file(file: PathBuf, config: ParserConfig) -> i32 {
    let source = match read_to_string(&file) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read {}: {}", file.display(), error);
            return 1;
        }
    };

    let file_name = file.as_os_str().to_string_lossy().to_string();
    let (program, diagnostics) = parse_source(source.clone(), Some(file_name), config);

    if !diagnostics.is_empty() {
        for error in &diagnostics {
            eprintln!("{}", render_error(error, &source));
        }
        return 1;
    }

    for stmt in &program {
        println!("{}", stmt);
    }
    0
}

fn main() {
    let options = match parse_args(env::args().skip(1)) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("usage: frontend [--holes] [-v|--verbose] [file]");
            process::exit(2);
        }
    };

    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(if options.verbose {
            LevelFilter::Debug
        } else {
            Level::Warn.to_level_filter()
        });
    }

    let code = match options.file {
        Some(file) => run_file(file, options.config),
        None => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            match repl::start(stdin.lock(), &mut stdout, options.config) {
                Ok(()) => 0,
                Err(error) => {
                    eprintln!("{}", error);
                    1
                }
            }
        }
    };

    process::exit(code);
}
