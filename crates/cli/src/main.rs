use remint_core::{
    price_placements, randomize, Event, EventBus, NewCost, NodePrice, RandomizerConfig, RngState,
};
use remint_data::{load_catalog, load_config, load_placements};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;

const DEFAULT_SEED: u64 = 0xC0FFEE;
const DEFAULT_DATA_DIR: &str = "assets";

#[derive(Debug, Clone)]
struct CliOptions {
    seed: Option<u64>,
    data_dir: PathBuf,
    config_path: Option<PathBuf>,
    quiet: bool,
}

/// Everything the patch-writing stage needs, in one document.
#[derive(Debug, Serialize)]
struct PatchPlan {
    seed: u64,
    new_costs: Vec<NewCost>,
    shop_prices: Vec<NodePrice>,
}

fn print_usage() {
    eprintln!("usage: remint [--seed N] [--data DIR] [--config FILE] [--quiet]");
    eprintln!("  --seed N       override the RNG seed (default: config, then {DEFAULT_SEED:#x})");
    eprintln!("  --data DIR     directory holding moves/items/placements JSON (default: {DEFAULT_DATA_DIR})");
    eprintln!("  --config FILE  randomizer flags and seed");
    eprintln!("  --quiet        suppress the per-badge BP trace");
}

fn parse_args(args: &[String]) -> Result<CliOptions, String> {
    let mut options = CliOptions {
        seed: None,
        data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        config_path: None,
        quiet: false,
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--seed" => {
                let value = iter.next().ok_or("--seed expects a value")?;
                let seed = value
                    .parse::<u64>()
                    .map_err(|_| format!("invalid seed {value}"))?;
                options.seed = Some(seed);
            }
            "--data" => {
                let value = iter.next().ok_or("--data expects a path")?;
                options.data_dir = PathBuf::from(value);
            }
            "--config" => {
                let value = iter.next().ok_or("--config expects a path")?;
                options.config_path = Some(PathBuf::from(value));
            }
            "--quiet" => options.quiet = true,
            "--help" | "-h" => return Err(String::new()),
            other => return Err(format!("unknown argument {other}")),
        }
    }

    Ok(options)
}

fn run(options: &CliOptions) -> anyhow::Result<()> {
    let config = match &options.config_path {
        Some(path) => load_config(path)?,
        None => RandomizerConfig::default(),
    };
    let catalog = load_catalog(&options.data_dir)?;
    let placements = load_placements(&options.data_dir, &catalog)?;

    let seed = options.seed.or(config.seed).unwrap_or(DEFAULT_SEED);
    let mut rng = RngState::from_seed(seed);
    let mut events = EventBus::default();

    let new_costs = randomize(&catalog, &config.costs, &mut rng, &mut events);
    let shop_prices = if config.shop_prices {
        price_placements(&placements, &catalog, &mut rng)
    } else {
        Vec::new()
    };

    if !options.quiet {
        for event in events.drain() {
            match event {
                Event::BpCostRolled {
                    name,
                    before,
                    after,
                } => eprintln!("BP: {name}: {before} -> {after}"),
            }
        }
    }

    let plan = PatchPlan {
        seed,
        new_costs,
        shop_prices,
    };
    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            if !message.is_empty() {
                eprintln!("{message}");
            }
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    match run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
