use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result, anyhow, bail};
use clap::{Args, Parser, Subcommand, ValueHint};
use serde_json::{Map, Value};

use crate::evaluation::ReportFormat;
use crate::ui::types::choices::{LearnerChoice, Lineup, UIChoice};

pub const DEFAULT_DATA_FILE: &str = "ClassificationData.json";

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Train and compare classic classifiers on small categorical datasets"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Evaluate a lineup of classifiers on every dataset of a file
    Run(RunArgs),
    /// Print the JSON schema of lineup files
    Schema,
    /// List the available learner kinds
    Learners,
}

#[derive(Debug, Args)]
pub struct RunArgs {
    /// JSON file holding the datasets
    #[arg(long, default_value = DEFAULT_DATA_FILE, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub data: PathBuf,

    /// JSON lineup file (omit for the default lineup)
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub lineup: Option<PathBuf>,

    /// Learner to evaluate, repeatable; replaces the lineup (e.g. k-nearest-neighbors:k=4)
    #[arg(long = "learner", value_name = "KIND[:KEY=VALUE,...]")]
    pub learners: Vec<String>,

    /// File to dump every prediction after completion
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub dump_file: Option<PathBuf>,

    /// Format for the dump file (csv, tsv, json)
    #[arg(long, value_name = "FORMAT")]
    pub dump_format: Option<String>,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            data: PathBuf::from(DEFAULT_DATA_FILE),
            lineup: None,
            learners: Vec::new(),
            dump_file: None,
            dump_format: None,
        }
    }
}

impl RunArgs {
    /// `--learner` entries win over `--lineup`; with neither, the default lineup.
    pub fn lineup(&self) -> Result<Lineup> {
        if !self.learners.is_empty() {
            let learners = self
                .learners
                .iter()
                .map(|raw| parse_learner(raw).with_context(|| format!("invalid learner '{raw}'")))
                .collect::<Result<Vec<_>>>()?;
            return Ok(Lineup::new(learners));
        }

        match &self.lineup {
            Some(path) => Lineup::load(path),
            None => Ok(Lineup::default()),
        }
    }

    pub fn report_format(&self) -> Result<ReportFormat> {
        match &self.dump_format {
            Some(fmt) => {
                parse_dump_format(fmt).with_context(|| format!("invalid dump format '{fmt}'"))
            }
            None => Ok(ReportFormat::default()),
        }
    }
}

/// Parses `KIND` or `KIND:KEY=VALUE,KEY=VALUE`.
pub fn parse_learner(raw: &str) -> Result<LearnerChoice> {
    let (kind, overrides) = match raw.split_once(':') {
        Some((kind, rest)) => {
            let overrides = rest
                .split(',')
                .filter(|s| !s.trim().is_empty())
                .map(parse_key_value)
                .collect::<Result<Vec<_>>>()?;
            (kind, overrides)
        }
        None => (raw, Vec::new()),
    };
    build_choice::<LearnerChoice>(kind, &overrides)
}

#[derive(Clone, Debug)]
struct KeyValue {
    key: String,
    value: Value,
}

fn build_choice<C>(kind_input: &str, overrides: &[KeyValue]) -> Result<C>
where
    C: UIChoice,
    C::Kind: FromStr,
    <C::Kind as FromStr>::Err: std::fmt::Display,
{
    let kind = parse_kind::<C::Kind>(kind_input)?;
    let mut params = C::default_params(kind);
    apply_overrides(&mut params, overrides)?;
    C::from_parts(kind, params)
}

fn parse_kind<T>(raw: &str) -> Result<T>
where
    T: FromStr,
    <T as FromStr>::Err: std::fmt::Display,
{
    let candidates = candidate_spellings(raw);
    for cand in candidates {
        if let Ok(parsed) = cand.parse::<T>() {
            return Ok(parsed);
        }
    }
    Err(anyhow!("could not parse value '{raw}'"))
}

fn candidate_spellings(input: &str) -> Vec<String> {
    let mut out = Vec::new();
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return out;
    }

    out.push(trimmed.to_string());
    out.push(trimmed.to_lowercase());
    out.push(kebab_from_token(trimmed));
    out.push(trimmed.to_lowercase().replace('_', "-"));
    out.sort();
    out.dedup();
    out
}

fn kebab_from_token(token: &str) -> String {
    let mut buf = String::new();
    for ch in token.chars() {
        if ch.is_uppercase() {
            if !buf.is_empty() && !buf.ends_with('-') {
                buf.push('-');
            }
            buf.extend(ch.to_lowercase());
        } else if ch == '_' || ch == ' ' {
            if !buf.ends_with('-') {
                buf.push('-');
            }
        } else {
            buf.push(ch);
        }
    }
    buf
}

fn parse_dump_format(input: &str) -> Result<ReportFormat> {
    match input.trim().to_lowercase().as_str() {
        "csv" => Ok(ReportFormat::Csv),
        "tsv" => Ok(ReportFormat::Tsv),
        "json" => Ok(ReportFormat::Json),
        other => Err(anyhow!("unknown format '{other}'")),
    }
}

fn apply_overrides(target: &mut Value, overrides: &[KeyValue]) -> Result<()> {
    for kv in overrides {
        set_path(target, &kv.key, kv.value.clone())
            .with_context(|| format!("failed to set '{}'", kv.key))?;
    }
    Ok(())
}

fn set_path(target: &mut Value, path: &str, new_value: Value) -> Result<()> {
    let segments: Vec<&str> = path.split('.').filter(|s| !s.is_empty()).collect();
    let Some((last, parents)) = segments.split_last() else {
        bail!("empty key is not allowed");
    };

    let mut current = target;
    for seg in parents {
        current = ensure_object(current)?
            .entry((*seg).to_string())
            .or_insert(Value::Null);
    }

    ensure_object(current)?.insert((*last).to_string(), new_value);
    Ok(())
}

fn ensure_object(value: &mut Value) -> Result<&mut Map<String, Value>> {
    if value.is_null() {
        *value = Value::Object(Map::new());
    }
    match value {
        Value::Object(map) => Ok(map),
        other => bail!("cannot set nested field on non-object value: {other:?}"),
    }
}

fn parse_key_value(raw: &str) -> Result<KeyValue> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("expected KEY=VALUE, got '{raw}'"))?;
    let key = key.trim();
    if key.is_empty() {
        bail!("key cannot be empty");
    }

    Ok(KeyValue {
        key: key.to_string(),
        value: parse_literal(value.trim()),
    })
}

fn parse_literal(raw: &str) -> Value {
    if raw.is_empty() {
        return Value::String(String::new());
    }
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
