use crate::reports;
use clap::Args;
use echograde::catalog::SubstatCatalog;
use echograde::error::EgResult;

#[derive(Args, Debug, Clone)]
pub struct RangesArgs {
    #[arg(short, long)]
    pub stat: Option<String>,
}

pub fn run(args: RangesArgs, catalog: &SubstatCatalog) -> EgResult<()> {
    println!("\n🔎 === SUBSTAT RANGES === 🔎");

    let entries: Vec<_> = catalog
        .sorted_entries()
        .into_iter()
        .filter(|(name, _)| {
            if let Some(ref filter) = args.stat {
                name.to_lowercase().contains(&filter.to_lowercase())
            } else {
                true
            }
        })
        .collect();

    if entries.is_empty() {
        println!("No substats found matching criteria.");
        return Ok(());
    }

    reports::print_catalog(&entries);
    Ok(())
}
