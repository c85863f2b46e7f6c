use anyhow::{anyhow, bail, Context, Result};
use std::path::Path;

use scribe::core::config::load_config;
use scribe::core::export::ExportFormat;
use scribe::core::form::EpisodeForm;
use scribe::core::samples;
use scribe::{ContentTables, ScriptComposer};

const USAGE: &str = "usage:
  scribe generate <form.json|form.toml> [text|markdown|html]
  scribe samples [query]
  scribe samples --random
  scribe preview <index> [text|markdown|html]";

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = args.first().map(String::as_str);

    match command {
        Some("generate") => {
            let path = args.get(1).ok_or_else(|| anyhow!("missing form file\n{}", USAGE))?;
            let format = parse_format(args.get(2))?;
            let form = read_form(path)?;
            print_script(&form, format)
        }
        Some("samples") if args.get(1).map(String::as_str) == Some("--random") => {
            let (index, sample) = samples::random();
            log::info!("Picked sample {}: {}", index, sample.label());
            println!("{}", serde_json::to_string_pretty(&sample.to_form())?);
            Ok(())
        }
        Some("samples") => {
            let query = args.get(1).map(String::as_str).unwrap_or("");
            for summary in samples::search(query) {
                println!("{:>2}. {}", summary.index, summary.label);
            }
            Ok(())
        }
        Some("preview") => {
            let index: usize = args
                .get(1)
                .ok_or_else(|| anyhow!("missing sample index\n{}", USAGE))?
                .parse()
                .context("sample index must be a number")?;
            let sample = samples::get(index).ok_or_else(|| anyhow!("no sample at index {}", index))?;
            let format = parse_format(args.get(2))?;
            print_script(&sample.to_form(), format)
        }
        _ => {
            eprintln!("{}", USAGE);
            Ok(())
        }
    }
}

fn parse_format(arg: Option<&String>) -> Result<ExportFormat> {
    match arg {
        Some(raw) => Ok(raw.parse()?),
        None => Ok(ExportFormat::Text),
    }
}

fn read_form(path: &str) -> Result<EpisodeForm> {
    let content = std::fs::read_to_string(path).with_context(|| format!("reading {}", path))?;
    let form = if path.ends_with(".toml") {
        toml::from_str(&content)?
    } else {
        serde_json::from_str(&content)?
    };
    Ok(form)
}

fn content_tables() -> Result<ContentTables> {
    let config_path = std::env::var("SCRIBE_CONFIG").unwrap_or_else(|_| "scribe.toml".to_string());
    if !Path::new(&config_path).exists() {
        log::debug!("No config at {}, using built-in tables", config_path);
        return Ok(ContentTables::builtin());
    }
    let config = load_config(&config_path)?;
    Ok(ContentTables::from_config(&config))
}

fn print_script(form: &EpisodeForm, format: ExportFormat) -> Result<()> {
    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            for error in &errors.errors {
                eprintln!("  {}: {}", error.field, error.message);
            }
            bail!(errors);
        }
    };

    let tables = content_tables()?;
    let script = ScriptComposer::new(&tables).compose(&input)?;
    println!("{}", format.render(&script, &input.episode_title));
    Ok(())
}
