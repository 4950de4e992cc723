use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wealth_core::advisory::AdvisoryInput;

mod input;
mod report;

#[derive(Debug, Parser)]
#[command(name = "wealth_worker")]
struct Args {
    /// JSON file with the metrics batch: `{"companies": [...]}` or a bare array.
    #[arg(long)]
    input: PathBuf,

    /// Only print the first N ranked entries (N >= 1).
    #[arg(long, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    top: Option<usize>,

    #[arg(long, value_enum, default_value_t = report::OutputFormat::Table)]
    format: report::OutputFormat,

    /// Also print the payload handed to the advisory collaborator.
    #[arg(long)]
    advisory: bool,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = wealth_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer())
        .init();

    let args = Args::parse();

    if let Err(err) = run(&args, &settings) {
        sentry_anyhow::capture_anyhow(&err);
        tracing::error!(input = %args.input.display(), error = %err, "scoring run failed");
        return Err(err);
    }

    Ok(())
}

fn run(args: &Args, settings: &wealth_core::config::Settings) -> anyhow::Result<()> {
    let batch = input::read_batch(&args.input)?;
    let ranked = wealth_core::scoring::analyze_companies(&batch.companies)
        .with_context(|| format!("failed to score {}", args.input.display()))?;

    tracing::info!(
        input = %args.input.display(),
        input_len = batch.companies.len(),
        scored = ranked.len(),
        "scored metrics batch"
    );

    let shown = match args.top {
        Some(n) => &ranked[..n.min(ranked.len())],
        None => &ranked[..],
    };
    println!("{}", report::render(shown, args.format)?);

    if args.advisory {
        let advisory =
            AdvisoryInput::try_new(chrono::Utc::now(), &ranked, settings.advisory_top_n)?;
        println!("{}", serde_json::to_string_pretty(&advisory)?);
    }

    Ok(())
}

fn init_sentry(settings: &wealth_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_must_be_positive() {
        let parse = |top: &str| {
            Args::try_parse_from(["wealth_worker", "--input", "b.json", "--top", top])
        };
        assert!(parse("0").is_err());
        let args = parse("3").unwrap();
        assert_eq!(args.top, Some(3));
        assert_eq!(args.format, report::OutputFormat::Table);
    }
}
