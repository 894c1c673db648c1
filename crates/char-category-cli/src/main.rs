use anyhow::{Context, Result};
use char_category_config::Config;
use char_category_engine::{CharacterCategory, DefaultResource, FileResource};
use std::{env, path::PathBuf, process};

const USAGE: &str = "Usage: char-category [--config FILE] [--def FILE] [--dump] [--runs] [TEXT...]";

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    config: Option<PathBuf>,
    char_def: Option<PathBuf>,
    dump: bool,
    runs: bool,
    text: Vec<String>,
}

impl Args {
    fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self, String> {
        let mut parsed = Args::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    let value = args.next().ok_or("--config needs a file")?;
                    parsed.config = Some(PathBuf::from(value));
                }
                "--def" => {
                    let value = args.next().ok_or("--def needs a file")?;
                    parsed.char_def = Some(PathBuf::from(value));
                }
                "--dump" => parsed.dump = true,
                "--runs" => parsed.runs = true,
                "--" => {
                    parsed.text.extend(args.by_ref());
                }
                flag if flag.starts_with("--") => {
                    return Err(format!("unknown option {flag}"));
                }
                _ => parsed.text.push(arg),
            }
        }

        if !parsed.dump && parsed.text.is_empty() {
            return Err("nothing to do: give TEXT or --dump".to_string());
        }

        Ok(parsed)
    }
}

/// Picks the definition to load: `--def` wins over the config file, which
/// wins over the bundled default.
fn load_classifier(args: &Args) -> Result<CharacterCategory> {
    let mut char_def = args.char_def.clone();

    if char_def.is_none()
        && let Some(config_path) = &args.config
    {
        let config = Config::load_from_path(config_path)?
            .with_context(|| format!("config file {} not found", config_path.display()))?;
        log::info!("Loaded config from {}", config_path.display());
        char_def = config.char_def;
    }

    let classifier = match char_def {
        Some(path) => {
            log::info!("Loading character definition from {}", path.display());
            CharacterCategory::load(FileResource::new(&path))
                .with_context(|| format!("failed to load {}", path.display()))?
        }
        None => {
            log::info!("Using bundled character definition");
            CharacterCategory::load(DefaultResource)?
        }
    };

    Ok(classifier)
}

/// One line per character: code point, the character, its categories.
fn describe_chars(cc: &CharacterCategory, text: &str) -> Vec<String> {
    text.chars()
        .map(|c| {
            let tags: Vec<String> = cc.classify(c).iter().map(|t| t.to_string()).collect();
            format!("U+{:04X} {c:?} {}", c as u32, tags.join(","))
        })
        .collect()
}

/// Splits `text` into runs that each stay inside the first declared range
/// containing their first character. Characters no range covers form
/// single-character runs.
fn describe_runs(cc: &CharacterCategory, text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = text;

    while let Some(first) = rest.chars().next() {
        let (len, label) = match cc.ranges_containing(first).next() {
            Some(range) => (
                cc.longest_run_within_single_range(range, rest),
                range.to_string(),
            ),
            None => (first.len_utf8(), "DEFAULT".to_string()),
        };
        lines.push(format!("{:?} {label}", &rest[..len]));
        rest = &rest[len..];
    }

    lines
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args = match Args::parse(env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            process::exit(1);
        }
    };

    let cc = match load_classifier(&args) {
        Ok(cc) => cc,
        Err(e) => {
            log::error!("Loading character definition failed: {e:#}");
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    };

    if args.dump {
        print!("{}", cc.table());
    }

    for text in &args.text {
        let lines = if args.runs {
            describe_runs(&cc, text)
        } else {
            describe_chars(&cc, text)
        };
        for line in lines {
            println!("{line}");
        }
    }

    Ok(())
}
