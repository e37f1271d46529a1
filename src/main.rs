use std::env;
use std::num::NonZeroU32;
use std::time::Duration;

use anyhow::{bail, Context};
use watchface::logging::init_logging;
use watchface::{TimeOfDay, Watch, WatchConfig};

const USAGE: &str = "usage: watchface [--title <text>] [--size <px>] [--at <HH:MM[:SS]>] [--period-ms <ms>]";

#[derive(Debug, Default, PartialEq)]
struct Args {
    title: Option<String>,
    size: Option<u32>,
    at: Option<TimeOfDay>,
    period_ms: Option<u64>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<Args> {
    let mut parsed = Args::default();
    while let Some(arg) = args.next() {
        let mut value = |flag: &str| args.next().with_context(|| format!("{flag} needs a value"));
        match arg.as_str() {
            "--title" => parsed.title = Some(value("--title")?),
            "--size" => {
                let raw = value("--size")?;
                let size: NonZeroU32 =
                    raw.parse().with_context(|| format!("invalid size {raw:?}"))?;
                parsed.size = Some(size.get());
            }
            "--at" => {
                let raw = value("--at")?;
                parsed.at = Some(raw.parse().with_context(|| format!("invalid time {raw:?}"))?);
            }
            "--period-ms" => {
                let raw = value("--period-ms")?;
                parsed.period_ms =
                    Some(raw.parse().with_context(|| format!("invalid period {raw:?}"))?);
            }
            "-h" | "--help" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            other => bail!("unknown argument {other:?}\n{USAGE}"),
        }
    }
    Ok(parsed)
}

fn build_config(args: Args) -> WatchConfig {
    WatchConfig::builder()
        .title(args.title.unwrap_or_else(|| "Watch".to_string()))
        .maybe_preferred_size(args.size)
        .maybe_frozen_at(args.at)
        .tick_period(Duration::from_millis(args.period_ms.unwrap_or(1000)))
        .build()
}

fn main() -> anyhow::Result<()> {
    init_logging(None);

    let args = parse_args(env::args().skip(1))?;
    log::debug!("{args:?}");
    let watch = Watch::new(build_config(args));
    watch.show().context("watch window failed")?;
    Ok(())
}
