//! evhist CLI

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};

use ev_core::artifact::Hist1DArtifact;
use ev_core::dataset::Dataset;
use ev_core::histogram::{Axis, FlowPolicy, Hist1D};
use ev_core::spectrum::{
    SpectrumConfig, fill_columnar, fill_event_loop, fill_frame, fill_frame_expr,
};
use ev_core::toy::{ToyConfig, generate};
use ev_render::RenderConfig;

#[derive(Parser)]
#[command(name = "evhist")]
#[command(about = "evhist - columnar event selection and histogramming")]
#[command(version)]
struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a toy event dataset (JSON)
    Generate {
        /// Output dataset file
        #[arg(short, long)]
        output: PathBuf,

        /// Number of events
        #[arg(long, default_value = "1000")]
        events: usize,

        /// RNG seed
        #[arg(long, default_value = "42")]
        seed: u64,
    },

    /// Fill the transverse-momentum spectrum from an event dataset
    Fill {
        /// Input dataset (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Engine used to run the selection and fill
        #[arg(long, value_enum, default_value_t = Engine::EventLoop)]
        engine: Engine,

        #[command(flatten)]
        spectrum: SpectrumArgs,

        /// Output file for the histogram artifact (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run all engines and verify they produce identical histograms
    Compare {
        /// Input dataset (JSON)
        #[arg(short, long)]
        input: PathBuf,

        #[command(flatten)]
        spectrum: SpectrumArgs,
    },

    /// Render a histogram artifact to SVG or terminal text
    Render {
        /// Input histogram artifact (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file; `.svg` renders SVG, anything else text. Defaults to stdout text.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print version information
    Version,
}

#[derive(clap::Args)]
struct SpectrumArgs {
    /// Strict lower energy cut
    #[arg(long, default_value = "100.0")]
    energy_min: f64,

    /// Number of histogram bins
    #[arg(long, default_value = "16")]
    bins: usize,

    /// Lower histogram edge
    #[arg(long, default_value = "0.0")]
    x_min: f64,

    /// Upper histogram edge
    #[arg(long, default_value = "4.0")]
    x_max: f64,

    /// Fold under/overflow into the edge bins
    #[arg(long)]
    fold_flows: bool,
}

impl SpectrumArgs {
    fn to_config(&self) -> SpectrumConfig {
        SpectrumConfig {
            energy_min: self.energy_min,
            axis: Axis::new(self.bins, self.x_min, self.x_max),
            flow_policy: if self.fold_flows { FlowPolicy::Fold } else { FlowPolicy::Drop },
            ..Default::default()
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Engine {
    /// Explicit per-event, per-candidate loop
    EventLoop,
    /// Vectorized filter/map over flat columns
    Columnar,
    /// Frame pipeline with closure stages
    Frame,
    /// Frame pipeline with string expressions
    FrameExpr,
}

impl Engine {
    fn name(self) -> &'static str {
        match self {
            Engine::EventLoop => "event-loop",
            Engine::Columnar => "columnar",
            Engine::Frame => "frame",
            Engine::FrameExpr => "frame-expr",
        }
    }

    fn run(self, store: &ev_core::EventStore, cfg: &SpectrumConfig) -> ev_core::Result<Hist1D> {
        match self {
            Engine::EventLoop => fill_event_loop(store, cfg),
            Engine::Columnar => fill_columnar(store, cfg),
            Engine::Frame => fill_frame(store, cfg),
            Engine::FrameExpr => fill_frame_expr(store, cfg),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt().with_max_level(cli.log_level).with_target(false).init();

    match cli.command {
        Commands::Generate { output, events, seed } => cmd_generate(&output, events, seed),
        Commands::Fill { input, engine, spectrum, output } => {
            cmd_fill(&input, engine, &spectrum.to_config(), output.as_deref())
        }
        Commands::Compare { input, spectrum } => cmd_compare(&input, &spectrum.to_config()),
        Commands::Render { input, output } => cmd_render(&input, output.as_deref()),
        Commands::Version => {
            println!("evhist {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn load_store(input: &std::path::Path) -> Result<ev_core::EventStore> {
    tracing::info!(path = %input.display(), "loading dataset");
    let data = Dataset::read_json(input)
        .with_context(|| format!("failed to read dataset {}", input.display()))?;
    tracing::info!(events = data.n_events(), "dataset loaded");
    Ok(data.to_store()?)
}

fn cmd_generate(output: &std::path::Path, events: usize, seed: u64) -> Result<()> {
    let data = generate(&ToyConfig { events, seed, ..Default::default() })?;
    data.write_json(output)
        .with_context(|| format!("failed to write dataset {}", output.display()))?;
    tracing::info!(events, seed, path = %output.display(), "dataset written");
    Ok(())
}

fn cmd_fill(
    input: &std::path::Path,
    engine: Engine,
    cfg: &SpectrumConfig,
    output: Option<&std::path::Path>,
) -> Result<()> {
    let store = load_store(input)?;
    let hist = engine.run(&store, cfg)?;
    tracing::info!(
        engine = engine.name(),
        entries = hist.entries,
        overflow = hist.overflow,
        "spectrum filled"
    );

    let artifact = Hist1DArtifact::from_hist("pt_spectrum", "pt", &hist);
    let text = serde_json::to_string_pretty(&artifact)?;
    match output {
        Some(path) => std::fs::write(path, text)
            .with_context(|| format!("failed to write artifact {}", path.display()))?,
        None => println!("{text}"),
    }
    Ok(())
}

fn cmd_compare(input: &std::path::Path, cfg: &SpectrumConfig) -> Result<()> {
    let store = load_store(input)?;
    let engines =
        [Engine::EventLoop, Engine::Columnar, Engine::Frame, Engine::FrameExpr];

    let mut results = Vec::with_capacity(engines.len());
    for engine in engines {
        let hist = engine.run(&store, cfg)?;
        tracing::debug!(engine = engine.name(), entries = hist.entries, "engine done");
        println!(
            "{:<12} entries={} in_range={} underflow={} overflow={}",
            engine.name(),
            hist.entries,
            hist.in_range_content(),
            hist.underflow,
            hist.overflow
        );
        results.push((engine, hist));
    }

    let (_, reference) = &results[0];
    for (engine, hist) in &results[1..] {
        if hist != reference {
            bail!("engine '{}' disagrees with '{}'", engine.name(), results[0].0.name());
        }
    }
    println!("all {} engines agree", results.len());
    Ok(())
}

fn cmd_render(input: &std::path::Path, output: Option<&std::path::Path>) -> Result<()> {
    let text = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read artifact {}", input.display()))?;
    let artifact = ev_render::artifact_from_json(&text)?;
    match output {
        Some(path) => {
            ev_render::render_to_file(&artifact, path, &RenderConfig::default())?;
            tracing::info!(path = %path.display(), "rendered");
        }
        None => print!("{}", ev_render::render_text(&artifact, 48)),
    }
    Ok(())
}
