//! CLI entry point.
//!
//! # Responsibility
//! - Apply one drag-and-drop move to a JSON content order.
//! - Print block coordinates the way drop targets report them.
//! - Classify a property type/name change against a set of cards.

use carddetail_core::{
    classify_change, default_log_level, init_logging, rearrange, BlockId, Card, ContentOrder,
    Coordinate, MoveIntent, MoveRequest, PlacedBlock, PropertyChange, PropertyTemplate,
    PropertyType,
};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;

/// Card content layout tool
#[derive(Parser)]
#[command(name = "carddetail")]
#[command(version, about = "Rearrange card content orders")]
struct Cli {
    /// Log level (trace|debug|info|warn|error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Move one block and print the resulting order as JSON
    Move {
        /// Current content order, e.g. '[["a","b"],"c"]'
        #[arg(long)]
        order: String,

        /// Block being dragged
        #[arg(long)]
        source: String,

        /// Block being dropped onto
        #[arg(long)]
        destination: String,

        #[arg(long, value_enum)]
        intent: IntentArg,

        /// Column of the drop target inside its row; only valid when the
        /// destination is in a row
        #[arg(long, allow_hyphen_values = true)]
        column: Option<i64>,
    },
    /// Print the drag-and-drop coordinate of one block
    Coordinate {
        #[arg(long)]
        order: String,

        #[arg(long)]
        block: String,
    },
    /// Report whether a property change would need confirmation
    Impact {
        /// Property template as JSON
        #[arg(long)]
        template: String,

        /// Cards of the board as a JSON array
        #[arg(long, default_value = "[]")]
        cards: String,

        /// New property type wire name, e.g. multiSelect
        #[arg(long = "to-type")]
        to_type: PropertyType,

        /// New property name; defaults to the current one
        #[arg(long)]
        name: Option<String>,
    },
    /// List property type wire names and display names
    Types,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum IntentArg {
    Above,
    Below,
    Merge,
}

impl From<IntentArg> for MoveIntent {
    fn from(value: IntentArg) -> Self {
        match value {
            IntentArg::Above => MoveIntent::AboveRow,
            IntentArg::Below => MoveIntent::BelowRow,
            IntentArg::Merge => MoveIntent::MergeIntoRow,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, &log_dir.to_string_lossy()) {
            eprintln!("logging disabled: {err}");
        }
    }

    match run(cli.command) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("event=cli_command module=cli status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<String, String> {
    match command {
        Commands::Move {
            order,
            source,
            destination,
            intent,
            column,
        } => {
            let current = parse_order(&order)?;
            let request = build_request(&current, &source, &destination, intent.into(), column)?;
            let next = rearrange(&current, &request);
            serde_json::to_string(&next).map_err(|err| format!("cannot encode order: {err}"))
        }
        Commands::Coordinate { order, block } => {
            let current = parse_order(&order)?;
            let coordinate = current
                .coordinate_of(&BlockId::from(block.as_str()))
                .ok_or_else(|| format!("block not found: {block}"))?;
            serde_json::to_string(&coordinate)
                .map_err(|err| format!("cannot encode coordinate: {err}"))
        }
        Commands::Impact {
            template,
            cards,
            to_type,
            name,
        } => {
            let template: PropertyTemplate = serde_json::from_str(&template)
                .map_err(|err| format!("invalid property template: {err}"))?;
            let cards: Vec<Card> =
                serde_json::from_str(&cards).map_err(|err| format!("invalid cards: {err}"))?;
            let new_name = name.unwrap_or_else(|| template.name.clone());
            let change = classify_change(&cards, &template, to_type, &new_name);
            Ok(describe_change(change))
        }
        Commands::Types => Ok(PropertyType::all()
            .iter()
            .map(|kind| format!("{}\t{}", kind.as_str(), kind.display_name()))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

fn describe_change(change: PropertyChange) -> String {
    let confirm = change.needs_confirmation();
    match change {
        PropertyChange::Unchanged => "unchanged".to_string(),
        PropertyChange::RenameOnly => format!("rename confirm={confirm}"),
        PropertyChange::TypeChange { affected_cards } => {
            format!("type_change affected_cards={affected_cards} confirm={confirm}")
        }
    }
}

fn parse_order(raw: &str) -> Result<ContentOrder, String> {
    let order: ContentOrder =
        serde_json::from_str(raw).map_err(|err| format!("invalid content order: {err}"))?;
    order
        .validate()
        .map_err(|err| format!("invalid content order: {err}"))?;
    Ok(order)
}

/// Derives coordinates from the order; `column` overrides the target's.
///
/// A column override needs a destination inside a row, since a single
/// slot's column is its top-level index.
fn build_request(
    current: &ContentOrder,
    source: &str,
    destination: &str,
    intent: MoveIntent,
    column: Option<i64>,
) -> Result<MoveRequest, String> {
    let locate = |id: &str| {
        current
            .coordinate_of(&BlockId::from(id))
            .unwrap_or(Coordinate::top_level(-1))
    };
    let mut target = locate(destination);
    if let Some(column) = column {
        if !target.is_in_row() {
            return Err(format!(
                "--column needs a destination inside a row: {destination}"
            ));
        }
        target.column = column;
    }
    Ok(MoveRequest::new(
        PlacedBlock::new(source, locate(source)),
        PlacedBlock::new(destination, target),
        intent,
    ))
}
