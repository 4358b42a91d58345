//! CLI command handlers

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::generate;
use colored::Colorize;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, info};

use super::ConvertArgs;
use crate::config::Config;
use crate::playlist::{Conversion, Converter, ReadOptions};

/// Handle a conversion, echoing to stdout
pub fn convert(args: ConvertArgs, config: Config) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_convert(&args, &config, &mut out)?;
    Ok(())
}

/// Convert `args.input`, write the result and echo it to `out`
///
/// Returns the path the converted playlist was (or, on a dry run, would
/// have been) written to.
pub fn run_convert(args: &ConvertArgs, config: &Config, out: &mut impl Write) -> Result<PathBuf> {
    let input = args
        .input
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("No input playlist given (expected <file.m3u|file.pls>)"))?;

    let data = fs::read(input).with_context(|| format!("Failed to read {:?}", input))?;
    debug!("Read {} bytes from {}", data.len(), input.display());

    let converter = Converter::new(
        args.numbering.unwrap_or(config.pls_numbering),
        ReadOptions {
            keep_zero_length: args.keep_zero_length || config.keep_zero_length,
        },
    );
    let Conversion {
        source,
        target,
        output_path,
        content,
        track_count,
    } = converter.convert(input, &data)?;

    let output_path = args.output.clone().unwrap_or(output_path);

    if args.dry_run {
        info!("Dry run, not writing {}", output_path.display());
    } else {
        fs::write(&output_path, &content)
            .with_context(|| format!("Failed to write {:?}", output_path))?;
        info!("Wrote {}", output_path.display());
    }

    if config.echo && !args.quiet {
        writeln!(out, "{} file content:\n{}", output_path.display(), content)
            .context("Failed to echo converted playlist")?;
    }

    let summary = format!(
        "Converted {} track(s) from {} to {}: {}",
        track_count,
        source,
        target,
        output_path.display()
    );
    if args.dry_run {
        eprintln!("{} {}", "[DRY RUN]".yellow(), summary);
    } else {
        eprintln!("{}", summary.green());
    }

    Ok(output_path)
}

/// Handle the `completion` command
pub fn completion(shell: clap_complete::Shell) {
    let mut cmd = <super::Cli as CommandFactory>::command();
    generate(shell, &mut cmd, "plconv", &mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playlist::PlsNumbering;
    use std::path::Path;

    const M3U: &str = "#EXTM3U\n#EXTINF:123,My Song\nsong.mp3\n#EXTINF:45,Other\nother.mp3\n";

    fn args_for(input: &Path) -> ConvertArgs {
        ConvertArgs {
            input: Some(input.to_path_buf()),
            ..ConvertArgs::default()
        }
    }

    #[test]
    fn test_convert_writes_swapped_suffix() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("mix.m3u");
        fs::write(&input, M3U).unwrap();

        let mut out = Vec::new();
        let written = run_convert(&args_for(&input), &Config::default(), &mut out).unwrap();

        assert_eq!(written, dir.path().join("mix.pls"));
        let content = fs::read_to_string(&written).unwrap();
        assert!(content.starts_with("[playlist]\nFile2=song.mp3\n"));
        assert!(content.ends_with("NumberOfEntries=2\nVersion=2\n"));

        let echoed = String::from_utf8(out).unwrap();
        assert!(echoed.starts_with(&format!("{} file content:\n", written.display())));
        assert!(echoed.contains(&content));
    }

    #[test]
    fn test_convert_pls_back_to_m3u() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("radio.pls");
        fs::write(&input, "[playlist]\nFile1=a.mp3\nTitle1=A\nLength1=10\n").unwrap();

        let written = run_convert(&args_for(&input), &Config::default(), &mut io::sink()).unwrap();
        assert_eq!(
            fs::read_to_string(written).unwrap(),
            "#EXTM3U\n#EXTINF:10,A\na.mp3\nNumberOfEntries=1\nVersion=2\n"
        );
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("mix.m3u");
        fs::write(&input, M3U).unwrap();

        let args = ConvertArgs {
            dry_run: true,
            ..args_for(&input)
        };
        let mut out = Vec::new();
        let target = run_convert(&args, &Config::default(), &mut out).unwrap();

        assert!(!target.exists());
        assert!(String::from_utf8(out).unwrap().contains("Title2=Other"));
    }

    #[test]
    fn test_quiet_and_config_echo() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("mix.m3u");
        fs::write(&input, M3U).unwrap();

        let quiet = ConvertArgs {
            quiet: true,
            ..args_for(&input)
        };
        let mut out = Vec::new();
        run_convert(&quiet, &Config::default(), &mut out).unwrap();
        assert!(out.is_empty());

        let config = Config {
            echo: false,
            ..Config::default()
        };
        run_convert(&args_for(&input), &config, &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_flag_overrides_config_numbering() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("mix.m3u");
        fs::write(&input, M3U).unwrap();
        let output = dir.path().join("custom.pls");

        let config = Config {
            pls_numbering: PlsNumbering::Total,
            ..Config::default()
        };
        let args = ConvertArgs {
            output: Some(output.clone()),
            numbering: Some(PlsNumbering::Sequential),
            ..args_for(&input)
        };
        let written = run_convert(&args, &config, &mut io::sink()).unwrap();

        assert_eq!(written, output);
        let content = fs::read_to_string(&output).unwrap();
        assert!(content.contains("File1=song.mp3\n"));
        assert!(content.contains("File2=other.mp3\n"));
    }

    #[test]
    fn test_unsupported_suffix_fails() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("notes.txt");
        fs::write(&input, "hello").unwrap();

        let err = run_convert(&args_for(&input), &Config::default(), &mut io::sink()).unwrap_err();
        assert!(err.to_string().contains("Unsupported file format"));
    }

    #[test]
    fn test_missing_input_fails() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("missing.m3u");

        let err = run_convert(&args_for(&input), &Config::default(), &mut io::sink()).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_no_input_fails() {
        let err = run_convert(&ConvertArgs::default(), &Config::default(), &mut io::sink())
            .unwrap_err();
        assert!(err.to_string().contains("No input playlist"));
    }
}
