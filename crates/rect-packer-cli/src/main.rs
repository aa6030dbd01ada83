use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, anyhow};
use clap::{ArgAction, Args, Parser, Subcommand};
use rect_packer_core::{
    Layout, PackResult, PackerConfig, layout_to_json, pack_layout, pack_with_config,
    save_debug_image, to_json,
};
use serde::Deserialize;
use tracing::info;

mod fixtures;

use fixtures::Distribution;

#[derive(Parser, Debug)]
#[command(
    name = "rect-packer",
    about = "Pack rectangles into a single canvas",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action=ArgAction::Count, global=true, help_heading = "Logging/UX")]
    verbose: u8,
    /// Quiet mode (overrides verbose)
    #[arg(
        short,
        long,
        default_value_t = false,
        global = true,
        help_heading = "Logging/UX"
    )]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Pack a JSON list of rectangles
    Pack(PackArgs),
    /// Generate random rectangles, pack them and write a debug image
    Random(RandomArgs),
    /// Simple timing bench over random sets (prints time + occupancy)
    Bench(BenchArgs),
}

#[derive(Args, Debug, Clone)]
struct PackerOpts {
    /// YAML config file path (present fields override the flags below)
    #[arg(long, help_heading = "Packing")]
    config: Option<PathBuf>,
    /// Largest accepted rectangle side
    #[arg(long, default_value_t = 16384, help_heading = "Packing")]
    max_dimension: u32,
    /// Re-check the result for overlaps and containment
    #[arg(long, default_value_t = true, action=ArgAction::Set, help_heading = "Packing")]
    verify: bool,
    /// Parallel overlap scan (requires core feature `parallel`)
    #[arg(long, default_value_t = false, help_heading = "Packing")]
    parallel: bool,
    /// Print the merged configuration (after CLI/YAML) and exit
    #[arg(long, default_value_t = false, help_heading = "Packing")]
    print_config: bool,
    /// Output format for --print-config: json|yaml
    #[arg(long, default_value = "json", value_parser = ["json", "yaml"], help_heading = "Packing")]
    print_config_format: String,
}

#[derive(Args, Debug, Clone)]
struct OutputOpts {
    /// Write layout JSON here (stdout when omitted)
    #[arg(short, long, help_heading = "Output")]
    out: Option<PathBuf>,
    /// Print packing stats after the run
    #[arg(long, default_value_t = false, help_heading = "Output")]
    stats: bool,
    /// Seed for debug image colors
    #[arg(long, default_value_t = 0, help_heading = "Output")]
    color_seed: u64,
}

#[derive(Parser, Debug, Clone)]
struct PackArgs {
    /// Input JSON: `[[w, h], ...]`, `[{"w": .., "h": ..}]` or `[{"key": .., "w": .., "h": ..}]`
    input: PathBuf,
    /// Write a debug image (.bmp/.png) of the layout
    #[arg(long, help_heading = "Output")]
    image: Option<PathBuf>,
    #[command(flatten)]
    output: OutputOpts,
    #[command(flatten)]
    packer: PackerOpts,
}

#[derive(Parser, Debug, Clone)]
struct RandomArgs {
    /// Number of rectangles
    #[arg(long, default_value_t = 200, help_heading = "Generator")]
    count: usize,
    /// RNG seed
    #[arg(long, default_value_t = 0, help_heading = "Generator")]
    seed: u64,
    /// Side distribution: pow2 | uniform
    #[arg(long, value_parser = ["pow2", "uniform"], default_value = "pow2", help_heading = "Generator")]
    dist: String,
    /// Largest side for the uniform distribution
    #[arg(long, default_value_t = 256, help_heading = "Generator")]
    max_side: u32,
    /// Debug image path (.bmp/.png)
    #[arg(long, default_value = "plop.bmp", help_heading = "Output")]
    image: PathBuf,
    /// Skip the debug image
    #[arg(long, default_value_t = false, help_heading = "Output")]
    no_image: bool,
    #[command(flatten)]
    output: OutputOpts,
    #[command(flatten)]
    packer: PackerOpts,
}

#[derive(Parser, Debug, Clone)]
struct BenchArgs {
    /// Set sizes to time
    #[arg(long, value_delimiter = ',', default_values_t = vec![50usize, 100, 200])]
    counts: Vec<usize>,
    /// RNG seed
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Side distribution: pow2 | uniform
    #[arg(long, value_parser = ["pow2", "uniform"], default_value = "pow2")]
    dist: String,
    /// Largest side for the uniform distribution
    #[arg(long, default_value_t = 64)]
    max_side: u32,
    /// Parallel overlap scan (requires core feature `parallel`)
    #[arg(long, default_value_t = false)]
    parallel: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing_with_level(cli.quiet, cli.verbose);
    match &cli.command {
        Commands::Pack(args) => run_pack(args),
        Commands::Random(args) => run_random(args),
        Commands::Bench(args) => run_bench(args),
    }
}

fn run_pack(args: &PackArgs) -> anyhow::Result<()> {
    let Some(cfg) = resolve_config(&args.packer)? else {
        return Ok(());
    };
    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("read {}", args.input.display()))?;
    let entries: Vec<InputEntry> = serde_json::from_str(&text)
        .with_context(|| format!("parse {}", args.input.display()))?;
    info!(count = entries.len(), "loaded rectangles");

    let items: Vec<(String, u32, u32)> = entries
        .into_iter()
        .enumerate()
        .map(|(i, e)| e.into_item(i))
        .collect();
    let layout = pack_layout(items, cfg).context("pack")?;
    report(&layout, &args.output)?;

    if let Some(path) = &args.image {
        let result = PackResult {
            placements: layout.frames.iter().map(|f| f.frame).collect(),
            canvas_width: layout.width,
            canvas_height: layout.height,
        };
        write_image(&result, path, args.output.color_seed)?;
    }
    Ok(())
}

fn run_random(args: &RandomArgs) -> anyhow::Result<()> {
    let Some(cfg) = resolve_config(&args.packer)? else {
        return Ok(());
    };
    let dist = parse_dist(&args.dist)?;
    let sizes = fixtures::generate(args.count, dist, args.max_side, args.seed);
    info!(count = sizes.len(), ?dist, seed = args.seed, "generated rectangles");

    let start = Instant::now();
    let result = pack_with_config(&sizes, cfg).context("pack")?;
    info!(elapsed = ?start.elapsed(), "packed");

    let value = to_json(&result);
    emit_json(&value, &args.output)?;
    if args.output.stats {
        println!("{}", result.stats().summary());
    }
    if !args.no_image {
        write_image(&result, &args.image, args.output.color_seed)?;
    }
    Ok(())
}

fn run_bench(b: &BenchArgs) -> anyhow::Result<()> {
    let dist = parse_dist(&b.dist)?;
    let cfg = PackerConfig {
        verify: false,
        parallel: b.parallel,
        ..Default::default()
    };
    for &count in &b.counts {
        let sizes = fixtures::generate(count, dist, b.max_side, b.seed);
        let start = Instant::now();
        let result = pack_with_config(&sizes, cfg.clone()).context("pack")?;
        let elapsed = start.elapsed();
        let stats = result.stats();
        println!(
            "count={} time_ms={:.3} canvas={}x{} occupancy={:.2}%",
            count,
            elapsed.as_secs_f64() * 1000.0,
            stats.canvas_width,
            stats.canvas_height,
            stats.occupancy * 100.0
        );
    }
    Ok(())
}

fn report(layout: &Layout, output: &OutputOpts) -> anyhow::Result<()> {
    emit_json(&layout_to_json(layout), output)?;
    if output.stats {
        println!("{}", layout.stats().summary());
    }
    Ok(())
}

fn emit_json(value: &serde_json::Value, output: &OutputOpts) -> anyhow::Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    match &output.out {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("write {}", path.display()))?;
            info!(?path, "layout written");
        }
        None => println!("{}", text),
    }
    Ok(())
}

fn write_image(
    result: &PackResult,
    path: &Path,
    seed: u64,
) -> anyhow::Result<()> {
    save_debug_image(result, path, seed)
        .with_context(|| format!("write debug image {}", path.display()))
}

fn parse_dist(s: &str) -> anyhow::Result<Distribution> {
    s.parse()
        .map_err(|_| anyhow!("unknown distribution: {s} (expected pow2|uniform)"))
}

/// Merges the YAML file (if any) over the flags. Returns `None` when the config was
/// only printed.
fn resolve_config(opts: &PackerOpts) -> anyhow::Result<Option<PackerConfig>> {
    let base = PackerConfig {
        max_dimension: opts.max_dimension,
        verify: opts.verify,
        parallel: opts.parallel,
    };
    let cfg = if let Some(path) = &opts.config {
        let file =
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        let y: YamlConfig = serde_yaml::from_str(&file)?;
        y.into_packer_config(base)
    } else {
        base
    };
    cfg.validate()?;

    if opts.print_config {
        match opts.print_config_format.as_str() {
            "yaml" => println!("{}", serde_yaml::to_string(&cfg)?),
            _ => println!("{}", serde_json::to_string_pretty(&cfg)?),
        }
        return Ok(None);
    }
    Ok(Some(cfg))
}

fn init_tracing_with_level(quiet: bool, verbose: u8) {
    let level = if quiet {
        "error".to_string()
    } else {
        match verbose {
            0 => "info".into(),
            1 => "debug".into(),
            _ => "trace".into(),
        }
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InputEntry {
    Pair(u32, u32),
    Keyed { key: String, w: u32, h: u32 },
    Plain { w: u32, h: u32 },
}

impl InputEntry {
    fn into_item(self, index: usize) -> (String, u32, u32) {
        match self {
            InputEntry::Pair(w, h) | InputEntry::Plain { w, h } => (index.to_string(), w, h),
            InputEntry::Keyed { key, w, h } => (key, w, h),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct YamlConfig {
    max_dimension: Option<u32>,
    verify: Option<bool>,
    parallel: Option<bool>,
}

impl YamlConfig {
    fn into_packer_config(self, mut base: PackerConfig) -> PackerConfig {
        if let Some(v) = self.max_dimension {
            base.max_dimension = v;
        }
        if let Some(v) = self.verify {
            base.verify = v;
        }
        if let Some(v) = self.parallel {
            base.parallel = v;
        }
        base
    }
}
