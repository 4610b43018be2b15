// SPDX-License-Identifier: GPL-3.0-only

mod config;
mod logging;
mod records;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use picker_types::{SelectedRecordFields, Selection, Work, size, tags};
use serde::Serialize;

use crate::config::Config;
use crate::records::Row;

/// Size and tag utilities for Media Picker catalog exports
#[derive(Parser)]
#[command(name = "media-picker")]
#[command(about = "Inspect size and tag columns of Media Picker catalog exports", long_about = None)]
struct Cli {
    /// TOML config file (defaults to $MEDIA_PICKER_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert size values
    #[command(subcommand)]
    Size(SizeCommand),
    /// Work with JSON tag columns
    #[command(subcommand)]
    Tags(TagsCommand),
    /// Preview the record submitted for a selection of an actor's works
    Select {
        /// JSON export of the works table
        #[arg(long)]
        file: PathBuf,
        /// Actor whose works are selected
        #[arg(long)]
        actor: String,
        /// Work id to select (repeatable); all of the actor's works when omitted
        #[arg(long = "work")]
        works: Vec<String>,
        /// Selection date as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

#[derive(Subcommand)]
enum SizeCommand {
    /// Print the byte count of a size value (e.g. "32GB")
    Parse { input: String },
    /// Print a size value in its largest whole unit (e.g. "1.5 GB")
    Format {
        input: String,
        /// Append the exact byte count
        #[arg(long)]
        exact: bool,
    },
    /// Print a size value in gigabytes
    Gb { input: String },
    /// Sum the size column of an export
    Total {
        #[arg(long)]
        file: PathBuf,
        /// Column holding the size (defaults to fields.size from config)
        #[arg(long)]
        field: Option<String>,
    },
}

#[derive(Subcommand)]
enum TagsCommand {
    /// Decode a JSON tag column into a JSON array
    Decode { wire: String },
    /// Encode tags into a JSON tag column
    Encode { tags: Vec<String> },
    /// Split delimited text into tags
    Split {
        text: String,
        #[arg(long, default_value = tags::DEFAULT_DELIMITER)]
        delimiter: String,
    },
    /// Show a JSON tag column as comma-separated text
    Join { wire: String },
    /// List every tag used in an export, sorted
    Unique {
        #[arg(long)]
        file: PathBuf,
        /// Column holding the tags (defaults to fields.tags from config)
        #[arg(long)]
        field: Option<String>,
    },
    /// Print the rows of an export that carry a tag
    Filter {
        #[arg(long)]
        file: PathBuf,
        #[arg(long)]
        tag: String,
        #[arg(long)]
        field: Option<String>,
    },
}

#[derive(Debug, Serialize)]
struct SizeTotalOutput {
    records: usize,
    bytes: f64,
    gb: f64,
    display: String,
}

#[derive(Debug, Serialize)]
struct SelectionOutput<'a> {
    table: &'a str,
    fields: SelectedRecordFields,
    works: usize,
    total: String,
    total_gb: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    logging::init(&config.logging);

    match cli.command {
        Commands::Size(command) => run_size(command, &config),
        Commands::Tags(command) => run_tags(command, &config),
        Commands::Select {
            file,
            actor,
            works,
            date,
        } => {
            let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());
            run_select(&file, &actor, &works, date, &config)
        }
    }
}

fn run_size(command: SizeCommand, config: &Config) -> Result<()> {
    match command {
        SizeCommand::Parse { input } => println!("{}", size::parse_to_bytes(&input)),
        SizeCommand::Format { input, exact } => {
            if exact {
                println!("{}", size::format_with_bytes(&input));
            } else {
                println!("{}", size::format(&input));
            }
        }
        SizeCommand::Gb { input } => println!("{}", size::to_gb(&input)),
        SizeCommand::Total { file, field } => {
            let field = field.as_deref().unwrap_or(&config.fields.size);
            let rows = records::load(&file)?;
            println!("{}", serde_json::to_string(&size_total(&rows, field))?);
        }
    }
    Ok(())
}

fn size_total(rows: &[Row], field: &str) -> SizeTotalOutput {
    let mut bytes = 0.0;
    for row in rows {
        match records::size_field(row, field) {
            Some(input) => bytes += size::parse_to_bytes(input),
            None => tracing::debug!(id = %row.id, field, "row has no size"),
        }
    }

    SizeTotalOutput {
        records: rows.len(),
        bytes,
        gb: size::to_gb(bytes),
        display: size::format_bytes(bytes),
    }
}

fn run_tags(command: TagsCommand, config: &Config) -> Result<()> {
    match command {
        TagsCommand::Decode { wire } => {
            println!("{}", serde_json::to_string(&tags::decode(Some(wire.as_str())))?);
        }
        TagsCommand::Encode { tags: list } => println!("{}", tags::encode(&list)),
        TagsCommand::Split { text, delimiter } => {
            let list = tags::parse_delimited(&text, &delimiter);
            println!("{}", serde_json::to_string(&list)?);
        }
        TagsCommand::Join { wire } => {
            println!("{}", tags::join_for_display(&tags::decode(Some(wire.as_str()))));
        }
        TagsCommand::Unique { file, field } => {
            let field = field.as_deref().unwrap_or(&config.fields.tags);
            let rows = records::load(&file)?;
            let unique = tags::unique_across(&rows, |row| records::text_field(row, field));
            tracing::info!(rows = rows.len(), tags = unique.len(), "collected tags");
            println!("{}", serde_json::to_string(&unique)?);
        }
        TagsCommand::Filter { file, tag, field } => {
            let field = field.as_deref().unwrap_or(&config.fields.tags);
            let rows = records::load(&file)?;
            let matched = tags::filter_by_tag(&rows, |row| records::text_field(row, field), &tag);
            tracing::info!(rows = rows.len(), matched = matched.len(), tag = %tag, "filtered rows");
            println!("{}", serde_json::to_string(&matched)?);
        }
    }
    Ok(())
}

fn run_select(
    file: &Path,
    actor: &str,
    work_ids: &[String],
    date: NaiveDate,
    config: &Config,
) -> Result<()> {
    let works: Vec<Work> = records::load_as(file)?;
    let selection = select_works(&works, actor, work_ids);

    if selection.is_empty() {
        bail!("no works of {actor} selected from {}", file.display());
    }

    let output = SelectionOutput {
        table: &config.tables.selected,
        fields: selection.to_fields(date),
        works: selection.len(),
        total: selection.total_display(),
        total_gb: selection.total_gb(),
    };
    let json = serde_json::to_string_pretty(&output).context("encode selection")?;
    println!("{json}");
    Ok(())
}

/// Pick the listed works of `actor`, or all of them when none are listed
fn select_works(works: &[Work], actor: &str, work_ids: &[String]) -> Selection {
    let mut selection = Selection::new(actor);

    for work in works.iter().filter(|work| work.features_actor(actor)) {
        if work_ids.is_empty() || work_ids.contains(&work.id) {
            selection.add(work);
        }
    }

    for id in work_ids {
        if !selection.contains(id) {
            tracing::warn!(id = %id, actor, "work not found for actor, skipped");
        }
    }

    selection
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(id: &str, size: serde_json::Value) -> Row {
        serde_json::from_value(json!({ "id": id, "fields": { "Size": size } })).expect("row")
    }

    fn work(id: &str, actors: &[&str], size: &str) -> Work {
        serde_json::from_value(json!({
            "id": id,
            "fields": { "Title": id, "Actors": actors, "Size": size }
        }))
        .expect("work")
    }

    fn ids(selection: &Selection) -> Vec<&str> {
        selection.works().iter().map(|work| work.id.as_str()).collect()
    }

    #[test]
    fn size_total_mixes_numbers_and_text() {
        let rows = vec![
            row("rec1", json!(1_073_741_824u64)),
            row("rec2", json!("1.5GB")),
            row("rec3", json!(null)),
            row("rec4", json!("junk")),
        ];

        let total = size_total(&rows, "Size");
        assert_eq!(total.records, 4);
        assert_eq!(total.bytes, 2_684_354_560.0);
        assert_eq!(total.gb, 2.5);
        assert_eq!(total.display, "2.5 GB");

        let empty = size_total(&rows, "Missing");
        assert_eq!(empty.bytes, 0.0);
        assert_eq!(empty.display, "0 B");
    }

    #[test]
    fn select_takes_only_exact_actor_matches() {
        let works = vec![
            work("recW1", &["Lin"], "1GB"),
            work("recW2", &["Lina"], "2GB"),
            work("recW3", &["Mei", "Lin"], "3GB"),
        ];

        let selection = select_works(&works, "Lin", &[]);
        assert_eq!(ids(&selection), ["recW1", "recW3"]);
        assert_eq!(selection.total_display(), "4 GB");
    }

    #[test]
    fn select_skips_unknown_work_ids() {
        let works = vec![
            work("recW1", &["Lin"], "1GB"),
            work("recW2", &["Lina"], "2GB"),
            work("recW3", &["Lin"], "3GB"),
        ];
        let wanted = ["recW3", "recW2", "recMissing"].map(String::from);

        let selection = select_works(&works, "Lin", &wanted);
        assert_eq!(ids(&selection), ["recW3"]);

        let none = select_works(&works, "Hao", &[]);
        assert!(none.is_empty());
    }
}
