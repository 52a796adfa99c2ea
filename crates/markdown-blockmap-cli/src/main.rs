use anyhow::{Context, Result};
use markdown_blockmap_config::Config;
use markdown_blockmap_engine::{RangeUnit, io, outline, parse_document};
use std::io::Write;
use std::{env, path::PathBuf, process};

/// What to parse: a file, or stdin when no path (or `-`) is given.
#[derive(Debug, PartialEq, Eq)]
enum Input {
    File(PathBuf),
    Stdin,
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    input: Option<PathBuf>,
    source_maps: Option<bool>,
    range_unit: Option<RangeUnit>,
    write_config: bool,
}

impl Args {
    fn parse(args: &[String]) -> Result<Self, String> {
        let mut parsed = Args::default();
        for arg in args {
            match arg.as_str() {
                "--source-maps" => parsed.source_maps = Some(true),
                "--no-source-maps" => parsed.source_maps = Some(false),
                "--bytes" => parsed.range_unit = Some(RangeUnit::Bytes),
                "--characters" => parsed.range_unit = Some(RangeUnit::Characters),
                "--write-config" => parsed.write_config = true,
                "-" if parsed.input.is_none() => parsed.input = Some(PathBuf::from("-")),
                flag if flag.starts_with("--") => return Err(format!("unknown option {flag}")),
                path if parsed.input.is_none() => parsed.input = Some(PathBuf::from(path)),
                extra => return Err(format!("unexpected argument {extra}")),
            }
        }
        Ok(parsed)
    }

    fn input(&self) -> Input {
        match &self.input {
            Some(path) if path.as_os_str() != "-" => Input::File(path.clone()),
            _ => Input::Stdin,
        }
    }

    /// Command-line flags override the stored configuration.
    fn apply(&self, mut config: Config) -> Config {
        if let Some(source_maps) = self.source_maps {
            config.source_maps = source_maps;
        }
        if let Some(range_unit) = self.range_unit {
            config.range_unit = range_unit;
        }
        config
    }
}

fn usage(program: &str) {
    eprintln!(
        "Usage: {program} [--source-maps|--no-source-maps] [--bytes|--characters] [--write-config] [file|-]"
    );
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("markdown-blockmap");

    let cli = match Args::parse(args.get(1..).unwrap_or_default()) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("Error: {e}");
            usage(program);
            process::exit(1);
        }
    };

    let config_path = Config::config_path();
    let stored = match Config::load() {
        Ok(Some(config)) => {
            log::debug!("Loaded config from {}", config_path.display());
            config
        }
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };
    let config = cli.apply(stored);

    if cli.write_config {
        config
            .save()
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;
        log::info!("Saved config to {}", config_path.display());
    }

    let source = match cli.input() {
        Input::File(path) => io::read_source(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        Input::Stdin => io::read_from(std::io::stdin().lock()).context("Failed to read stdin")?,
    };

    let root = parse_document(&source);
    let text = outline(&source, &root, config.outline_options());

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .context("Failed to write outline")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Args, String> {
        let owned: Vec<String> = list.iter().map(|s| s.to_string()).collect();
        Args::parse(&owned)
    }

    #[test]
    fn no_arguments_reads_stdin() {
        let cli = args(&[]).unwrap();
        assert_eq!(cli, Args::default());
        assert_eq!(cli.input(), Input::Stdin);
    }

    #[test]
    fn dash_reads_stdin() {
        assert_eq!(args(&["-"]).unwrap().input(), Input::Stdin);
    }

    #[test]
    fn path_and_flags() {
        let cli = args(&["--no-source-maps", "doc.md", "--characters"]).unwrap();
        assert_eq!(cli.input(), Input::File(PathBuf::from("doc.md")));
        assert_eq!(cli.source_maps, Some(false));
        assert_eq!(cli.range_unit, Some(RangeUnit::Characters));
        assert!(!cli.write_config);
    }

    #[test]
    fn flags_override_config() {
        let stored = Config {
            source_maps: false,
            range_unit: RangeUnit::Characters,
        };
        let config = args(&["--source-maps"]).unwrap().apply(stored);
        assert!(config.source_maps);
        assert_eq!(config.range_unit, RangeUnit::Characters);
    }

    #[test]
    fn rejects_unknown_flag_and_second_path() {
        assert!(args(&["--verbose"]).is_err());
        assert!(args(&["a.md", "b.md"]).is_err());
    }
}
