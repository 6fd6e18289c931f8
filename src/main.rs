use std::io::{self, BufRead, BufWriter, IsTerminal};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use fogline::cli::{Cli, ColorMode};
use fogline::config::Config;
use fogline::{LineKind, LogError, Logger, Palette, parse_line};

fn main() -> ExitCode {
    // Reset SIGPIPE to default behavior so upstream writers get a clean
    // SIGPIPE signal instead of a BrokenPipeError when fogline exits early.
    reset_sigpipe();

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "fogline", &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    let config = match Config::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("fogline: {e}");
            return ExitCode::from(1);
        }
    };

    let palette = Palette::from_use_color(resolve_color_mode(config.color_mode));

    let stdout = io::stdout();
    let writer = BufWriter::new(stdout.lock());
    let logger = match Logger::from_config(&config.logging, palette, writer) {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("fogline: {e}");
            return ExitCode::from(1);
        }
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut buf = Vec::with_capacity(1024);
    loop {
        buf.clear();
        match input.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("fogline: read error: {e}");
                return ExitCode::from(2);
            }
        }

        // Bytes that are not UTF-8 are replaced rather than dropped.
        let line = String::from_utf8_lossy(trim_line_ending(&buf));
        let result = match parse_line(&line) {
            LineKind::Record(record) => logger.log(&record),
            LineKind::Raw => logger.write_raw(&line),
        };

        if let Err(e) = result {
            return exit_for_write_error(&e, "write");
        }
    }

    if let Err(e) = logger.flush() {
        return exit_for_write_error(&e, "flush");
    }

    ExitCode::SUCCESS
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn exit_for_write_error(e: &LogError, what: &str) -> ExitCode {
    if let LogError::Io(io_err) = e
        && io_err.kind() == io::ErrorKind::BrokenPipe
    {
        return ExitCode::SUCCESS;
    }
    eprintln!("fogline: {what} error: {e}");
    ExitCode::from(2)
}

fn resolve_color_mode(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some_and(|v| !v.is_empty()) {
                return true;
            }
            if std::env::var("TERM").is_ok_and(|v| v == "dumb") {
                return false;
            }
            io::stdout().is_terminal()
        }
    }
}

/// Reset SIGPIPE to the default (terminate) behavior.
///
/// By default, Rust ignores SIGPIPE to surface `BrokenPipe` I/O errors.
/// For a CLI filter like `fogline`, this causes the *upstream* writer to
/// receive a `BrokenPipeError` when `fogline` exits. Restoring `SIG_DFL`
/// lets the OS handle the signal normally.
#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn reset_sigpipe() {}
