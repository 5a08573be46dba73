use std::path::PathBuf;

use anyhow::Context;
use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;

#[derive(clap::Args)]
pub struct CheckArgs {
    /// Catalog file to validate
    pub catalog: PathBuf,
}

/// One problem found in the catalog payload.
#[derive(Debug, Serialize)]
pub struct Problem {
    /// Index of the offending entry, if the problem is entry-level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    pub message: String,
}

/// The full validation report.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub path: String,
    pub checked_at: String,
    pub item_count: usize,
    pub problems: Vec<Problem>,
}

pub fn run(args: CheckArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(&args.catalog)
        .with_context(|| format!("failed to read {}", args.catalog.display()))?;
    let payload: Value = serde_json::from_str(&content)
        .with_context(|| format!("{} is not valid JSON", args.catalog.display()))?;

    let report = check_payload(&payload, &args.catalog.display().to_string());

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text | OutputFormat::Tsv => {
            println!("Catalog: {}", report.path);
            println!("Items:   {}", report.item_count);
            if report.problems.is_empty() {
                println!("No problems found.");
            } else {
                println!("Problems ({}):", report.problems.len());
                for problem in &report.problems {
                    match problem.index {
                        Some(index) => println!("  [{index}] {}", problem.message),
                        None => println!("  {}", problem.message),
                    }
                }
            }
            if verbose {
                println!("Checked at {}", report.checked_at);
            }
        }
    }

    Ok(())
}

/// Validate the decoded payload against what the lenient loader will do with
/// it, so surprises surface before publishing instead of at render time.
pub fn check_payload(payload: &Value, path: &str) -> CheckReport {
    let mut problems = Vec::new();

    let entries = match payload {
        Value::Array(entries) => entries.as_slice(),
        _ => {
            problems.push(Problem {
                index: None,
                message: "payload is not an array; the loader treats it as an empty catalog"
                    .to_string(),
            });
            &[]
        }
    };

    for (index, entry) in entries.iter().enumerate() {
        let Value::Object(fields) = entry else {
            problems.push(Problem {
                index: Some(index),
                message: "entry is not an object; the loader skips it".to_string(),
            });
            continue;
        };

        match fields.get("pdf_url") {
            Some(Value::String(url)) if !url.is_empty() => {}
            _ => problems.push(Problem {
                index: Some(index),
                message: "no pdf_url; the card link and preview will be empty".to_string(),
            }),
        }

        if !matches!(fields.get("title"), Some(Value::String(t)) if !t.is_empty()) {
            problems.push(Problem {
                index: Some(index),
                message: "no title; a placeholder will be shown".to_string(),
            });
        }

        if let Some(tags) = fields.get("tags") {
            if !tags.is_array() {
                problems.push(Problem {
                    index: Some(index),
                    message: "tags is not an array; treated as empty".to_string(),
                });
            }
        }

        match fields.get("difficulty") {
            None => {}
            Some(Value::Number(n)) => {
                if !n.as_u64().is_some_and(|v| (1..=5).contains(&v)) {
                    problems.push(Problem {
                        index: Some(index),
                        message: format!("difficulty {n} outside the expected 1-5 range"),
                    });
                }
            }
            Some(Value::String(s)) => {
                if !s.parse::<u64>().is_ok_and(|v| (1..=5).contains(&v)) {
                    problems.push(Problem {
                        index: Some(index),
                        message: format!("difficulty {s:?} outside the expected 1-5 range"),
                    });
                }
            }
            Some(_) => problems.push(Problem {
                index: Some(index),
                message: "difficulty is neither a number nor a string; ignored".to_string(),
            }),
        }
    }

    CheckReport {
        path: path.to_string(),
        checked_at: chrono::Utc::now().to_rfc3339(),
        item_count: entries.len(),
        problems,
    }
}
