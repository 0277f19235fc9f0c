use anyhow::Context as _;
use seedling_icons::OutputPlanner;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let planner = OutputPlanner::default();
    let written = planner
        .run()
        .with_context(|| format!("generating icons in {}", planner.root().display()))?;

    tracing::info!(count = written.len(), "done");
    Ok(())
}
