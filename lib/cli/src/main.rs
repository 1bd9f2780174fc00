use std::io;
use std::io::{BufRead, Write};

use clap::Parser;
use log::{debug, info};
use simplelog::{ColorChoice, Config as LogConfig, LevelFilter, TermLogger, TerminalMode};

use stl_mitl_core::output::write_mitl;
use stl_mitl_core::pipeline::{translate, Config, DEFAULT_HORIZON};
use stl_mitl_core::rename::NamingScheme;
use stl_mitl_core::report::Transcript;

use crate::parsing::{read_line, read_token};

mod parsing;

/// Translate an STL formula into MITL and partition its temporal operators.
#[derive(Parser, Debug)]
#[command(author, version)]
struct Cli {
    /// STL formula (read from stdin if omitted).
    #[arg(long, value_name = "TEXT")]
    formula: Option<String>,

    /// Output file name, `.mitl` is appended if missing (read from stdin if omitted).
    #[arg(short, long, value_name = "NAME")]
    output: Option<String>,

    /// Time horizon of the synthesized signal.
    #[arg(long, value_name = "T", default_value_t = DEFAULT_HORIZON)]
    horizon: f64,

    /// Proposition naming scheme: `appearance` or `sorted`.
    #[arg(long, value_name = "SCHEME", default_value_t = NamingScheme::Appearance)]
    naming: NamingScheme,

    /// Do not list every signal sample.
    #[arg(long, action)]
    quiet_signal: bool,

    /// Log level.
    #[arg(long, value_name = "LEVEL", default_value = "warn", value_parser = parse_level)]
    log_level: LevelFilter,
}

fn parse_level(s: &str) -> Result<LevelFilter, String> {
    s.parse().map_err(|_| format!("bad log level '{}'", s))
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Cli::parse();
    TermLogger::init(args.log_level, LogConfig::default(), TerminalMode::Stderr, ColorChoice::Auto)?;
    info!("args = {:?}", args);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    run(args, &mut stdin.lock(), &mut stdout.lock(), &mut stderr.lock())
}

/// Runs one translation: prompts and the transcript go to `out`, the write failure to `err`.
fn run(args: Cli, input: &mut impl BufRead, out: &mut impl Write, err: &mut impl Write) -> color_eyre::Result<()> {
    let stl = match args.formula {
        Some(ref formula) => formula.clone(),
        None => {
            prompt(out, "Enter the STL formula: ")?;
            read_line(input)?
        }
    };

    let config = Config {
        horizon: args.horizon,
        naming: args.naming,
        ..Config::default()
    };
    debug!("config = {:?}", config);

    let translation = translate(&stl, &config);
    writeln!(out)?;
    write!(out, "{}", Transcript::new(&translation).show_samples(!args.quiet_signal))?;

    let name = match args.output {
        Some(ref name) => Some(name.clone()),
        None => {
            prompt(out, "\nStep 7: Enter the filename to save the MITL formula (e.g., output): ")?;
            read_token(input)?
        }
    };
    let Some(name) = name else {
        writeln!(err, "Error: No filename given")?;
        return Ok(());
    };

    match write_mitl(&translation.mitl, &name) {
        Ok(path) => writeln!(out, "MITL formula written to {}", path.display())?,
        Err(e) => {
            debug!("{}", e);
            writeln!(err, "Error: Unable to write to file {}", e.path().display())?;
        }
    }

    Ok(())
}

fn prompt(out: &mut impl Write, message: &str) -> io::Result<()> {
    write!(out, "{}", message)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io::Cursor;

    use test_log::test;

    use super::*;

    #[test]
    fn test_default_args() {
        let args = Cli::try_parse_from(["stl2mitl"]).unwrap();
        assert_eq!(args.formula, None);
        assert_eq!(args.output, None);
        assert_eq!(args.horizon, 30.0);
        assert_eq!(args.naming, NamingScheme::Appearance);
        assert!(!args.quiet_signal);
        assert_eq!(args.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_args() {
        let args = Cli::try_parse_from([
            "stl2mitl",
            "--formula",
            "G [0, 20] ((y < 2) U (z > 1))",
            "-o",
            "result",
            "--horizon",
            "12.5",
            "--naming",
            "sorted",
            "--quiet-signal",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.formula.as_deref(), Some("G [0, 20] ((y < 2) U (z > 1))"));
        assert_eq!(args.output.as_deref(), Some("result"));
        assert_eq!(args.horizon, 12.5);
        assert_eq!(args.naming, NamingScheme::Sorted);
        assert!(args.quiet_signal);
        assert_eq!(args.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_bad_args() {
        assert!(Cli::try_parse_from(["stl2mitl", "--naming", "random"]).is_err());
        assert!(Cli::try_parse_from(["stl2mitl", "--log-level", "loud"]).is_err());
    }

    fn run_captured(args: Cli, input: &str) -> color_eyre::Result<(String, String)> {
        let mut out = Vec::new();
        let mut err = Vec::new();
        run(args, &mut Cursor::new(input), &mut out, &mut err)?;
        Ok((String::from_utf8(out)?, String::from_utf8(err)?))
    }

    #[test]
    fn test_run_from_input() -> color_eyre::Result<()> {
        let dir = tempfile::tempdir()?;
        let name = dir.path().join("result");
        let input = format!("F [0, 5] (x > 0.3) ∧ G [0, 20] ((y < 2) U (z > 1))\n{}\n", name.display());
        let args = Cli::try_parse_from(["stl2mitl", "--quiet-signal"])?;
        let (out, err) = run_captured(args, &input)?;

        let path = dir.path().join("result.mitl");
        let written = fs::read_to_string(&path)?;
        assert!(written.starts_with("F [0, 5] (p1) ∧ G [0, 5] ((p2) U (p3)) ∧ G [6, 8] ((p2) U (p3))"));
        assert!(written.ends_with("G [16, 20] ((p2) U (p3))"));

        assert!(out.starts_with("Enter the STL formula: \nStep 1: Extracted atomic propositions:\n"));
        assert!(out.contains("\nStep 7: Enter the filename to save the MITL formula (e.g., output): "));
        assert!(out.ends_with(&format!("MITL formula written to {}\n", path.display())));
        assert_eq!(err, "");
        Ok(())
    }

    #[test]
    fn test_run_write_failure_is_reported() -> color_eyre::Result<()> {
        let dir = tempfile::tempdir()?;
        let name = dir.path().join("missing").join("result").to_string_lossy().into_owned();
        let args = Cli::try_parse_from([
            "stl2mitl",
            "--quiet-signal",
            "--formula",
            "y < 2",
            "--output",
            name.as_str(),
        ])?;
        let (out, err) = run_captured(args, "")?;
        assert!(!dir.path().join("missing").exists());
        assert!(!out.contains("MITL formula written to"));
        assert!(!out.contains("Step 7"));
        assert_eq!(err, format!("Error: Unable to write to file {}.mitl\n", name));
        Ok(())
    }

    #[test]
    fn test_run_without_filename() -> color_eyre::Result<()> {
        let args = Cli::try_parse_from(["stl2mitl", "--quiet-signal"])?;
        let (out, err) = run_captured(args, "y < 2\n")?;
        assert!(out.contains("MITL Formula (after partitioning): p1\n"));
        assert_eq!(err, "Error: No filename given\n");
        Ok(())
    }

    #[test]
    fn test_run_huge_horizon() -> color_eyre::Result<()> {
        let args = Cli::try_parse_from(["stl2mitl", "--formula", "G [0, 20] ((p2) U (p3))", "--horizon", "1e30"])?;
        let (out, _) = run_captured(args, "")?;
        assert!(out.contains("Step 3: Synthesized signal behavior:\n\nStep 4"));
        assert!(out.contains("MITL Formula (after partitioning): G [0, 20] ((p2) U (p3))\n"));
        Ok(())
    }
}
