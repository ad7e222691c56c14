//! CLI tool to check and print the stage ordering of a flow export.
//!
//! Usage:
//!   flowlint --input flow.json [--json] [--strict] [--stats]

mod input;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use flowchain::stats;
use flowchain::{sequence, ChainIssue, Sequencing};
use input::InputFlow;

#[derive(Parser, Debug)]
#[command(
    name = "flowlint",
    about = "Check and print the stage ordering of a flow export",
    version
)]
struct Args {
    /// Input JSON file path (flow export with stages and sequences)
    #[arg(short, long)]
    input: PathBuf,

    /// Print the ordered stage ids as JSON instead of the report
    #[arg(long, default_value = "false")]
    json: bool,

    /// Exit with an error when the ordering is incomplete
    #[arg(long, default_value = "false")]
    strict: bool,

    /// Print per-stage case counts in chain order
    #[arg(long, default_value = "false")]
    stats: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // 1. Validate input exists
    let input_path = &args.input;
    if !input_path.exists() {
        anyhow::bail!("Input file does not exist: {}", input_path.display());
    }

    // 2. Read and parse the export
    let json_content =
        std::fs::read_to_string(input_path).context("Failed to read input file")?;
    let export: InputFlow =
        serde_json::from_str(&json_content).context("Failed to parse flow JSON")?;

    let flow_name = if export.name.is_empty() {
        input_path.display().to_string()
    } else {
        export.name.clone()
    };
    let (flow, counts) = export.into_parts();

    // 3. Recover the ordering
    let seq = sequence(&flow.sequences);
    let ordered = flowchain::order_stages(&flow.stages, &flow.sequences);
    let ids = seq.stage_ids();

    // 4. JSON output mode
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&ids).context("Failed to serialize ordering")?
        );
        return exit_status(&args, &seq);
    }

    // 5. Report
    println!("Flow: {}", flow_name);
    println!(
        "  {} stages, {} sequence edges",
        flow.stages.len(),
        flow.sequences.len()
    );

    match ids.first() {
        Some(head) => println!("  Head: {}", head),
        None => println!("  Head: (none)"),
    }

    println!();
    println!("Stage order:");
    for (i, stage) in ordered.iter().enumerate() {
        let marker = if ids.contains(&stage.id) { " " } else { "?" };
        println!("  {:>3}.{} {} [{}]", i + 1, marker, stage.name, stage.id);
    }

    let orphans = ordered.iter().filter(|s| !ids.contains(&s.id)).count();

    println!();
    if seq.complete && orphans == 0 {
        println!("Ordering is complete.");
    } else {
        println!("Ordering is PARTIAL:");
        match &seq.issue {
            Some(ChainIssue::NoHead) => {
                println!("  - no head stage (empty edge set or pure cycle)")
            }
            Some(ChainIssue::CycleTruncated(id)) => {
                println!("  - cycle cut before revisiting stage {}", id)
            }
            None => {}
        }
        if seq.edges.len() < flow.sequences.len() {
            println!(
                "  - {} of {} edges unreachable from the head",
                flow.sequences.len() - seq.edges.len(),
                flow.sequences.len()
            );
        }
        if orphans > 0 {
            println!("  - {} stage(s) referenced by no edge (marked '?')", orphans);
        }
    }

    // 6. Optional stats
    if args.stats {
        let report = stats::breakdown(&flow.stages, &flow.sequences, &counts);
        println!();
        println!("Case counts:");
        for tally in &report.tallies {
            println!("  {:>6}  {}", tally.count, tally.label);
        }
        for tally in &report.unsequenced {
            println!("  {:>6}  {} (unsequenced)", tally.count, tally.label);
        }
        println!("  {:>6}  total", report.total());
    }

    exit_status(&args, &seq)
}

fn exit_status(args: &Args, seq: &Sequencing) -> Result<()> {
    if args.strict && !seq.complete {
        anyhow::bail!("ordering is incomplete");
    }
    Ok(())
}
