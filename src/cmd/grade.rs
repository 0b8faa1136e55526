use crate::reports;
use clap::Args;
use echograde::catalog::SubstatCatalog;
use echograde::error::{EchoGradeError, EgResult};
use echograde::loader;
use echograde::scorer::{self, EchoEfficiency};
use serde::Serialize;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct GradeArgs {
    #[arg(short, long, default_value = "data/equipped_echoes.json")]
    pub input: String,

    #[arg(short = 'x', long, default_value_t = 0)]
    pub index: usize,

    #[arg(short, long, default_value_t = false)]
    pub all: bool,

    #[arg(short, long, default_value_t = 1.0)]
    pub max_efficiency: f64,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

// JSON shape for --json: the grade with its echo label folded in.
#[derive(Serialize)]
struct GradedEcho<'a> {
    echo: &'a str,
    #[serde(flatten)]
    result: &'a EchoEfficiency,
}

pub fn run(args: GradeArgs, catalog: &SubstatCatalog) -> EgResult<()> {
    info!("📂 Loading echo data: {}", args.input);
    let file = loader::load_echo_file(&args.input)?;

    let selected: Vec<(String, &loader::EchoEntry)> = if args.all {
        file.echo_data
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.label(i), entry))
            .collect()
    } else {
        let entry = file.echo_data.get(args.index).ok_or_else(|| {
            EchoGradeError::Input(format!(
                "echo index {} is out of range ({} entries loaded)",
                args.index,
                file.echo_data.len()
            ))
        })?;
        vec![(entry.label(args.index), entry)]
    };

    info!("⚖️  Grading {} echo(es)...", selected.len());

    let mut results: Vec<(String, EchoEfficiency)> = Vec::with_capacity(selected.len());
    for (label, entry) in selected {
        let graded = scorer::grade_substats(catalog, &entry.substats, args.max_efficiency)?;
        results.push((label, graded));
    }

    if args.json {
        let payload: Vec<GradedEcho> = results
            .iter()
            .map(|(label, result)| GradedEcho {
                echo: label,
                result,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    for (label, graded) in &results {
        reports::print_echo_report(label, graded, catalog);
    }

    if results.len() > 1 {
        reports::print_summary(&results);
    }

    Ok(())
}
