use anyhow::Context;
use astro_wheel::chart::{BodyId, CelestialBody, ChartSettings, FocusEvent, FocusState};
use astro_wheel::layout::{load_bodies_from_json, load_chart_data_from_json};
use astro_wheel::rendering::{ChartSpec, ChartSpecGenerator};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// Drawing primitives as JSON.
    Json,
    /// Standalone SVG document.
    Svg,
}

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Natal chart JSON (`ascendant` + `planets`).
    #[arg(long)]
    chart: PathBuf,

    /// Optional JSON array of transit bodies drawn on the outer ring.
    #[arg(long)]
    transits: Option<PathBuf>,

    /// Optional TOML settings file; missing keys keep their defaults.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Surface width, overrides the settings file.
    #[arg(long)]
    width: Option<f64>,

    /// Surface height, overrides the settings file.
    #[arg(long)]
    height: Option<f64>,

    /// Body name to focus, as if the pointer hovered it.
    #[arg(long)]
    focus: Option<String>,

    /// Focus the transit body of that name instead of the natal one.
    #[arg(long, requires = "focus")]
    focus_transit: bool,

    #[arg(long, value_enum, default_value_t = Format::Svg)]
    format: Format,

    /// Output file (default: stdout).
    #[arg(long)]
    out: Option<PathBuf>,
}

fn read(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn load_settings(args: &Args) -> anyhow::Result<ChartSettings> {
    let mut settings = match &args.settings {
        Some(path) => ChartSettings::load(path)
            .with_context(|| format!("Failed to load settings {}", path.display()))?,
        None => ChartSettings::default(),
    };
    if let Some(width) = args.width {
        settings.width = width;
    }
    if let Some(height) = args.height {
        settings.height = height;
    }
    settings.validate().context("Invalid surface size")?;
    Ok(settings)
}

fn focus_state(args: &Args) -> FocusState {
    let Some(name) = &args.focus else {
        return FocusState::Idle;
    };
    let id = if args.focus_transit {
        BodyId::transit(name.clone())
    } else {
        BodyId::natal(name.clone())
    };
    FocusState::Idle.transition(FocusEvent::PointerEnter(id))
}

fn write_output(spec: &ChartSpec, args: &Args) -> anyhow::Result<()> {
    let text = match args.format {
        Format::Json => serde_json::to_string_pretty(spec)?,
        Format::Svg => spec.to_svg(),
    };
    match &args.out {
        Some(path) => std::fs::write(path, text)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => println!("{}", text),
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let settings = load_settings(&args)?;
    let chart = load_chart_data_from_json(&read(&args.chart)?)
        .with_context(|| format!("Failed to parse chart {}", args.chart.display()))?;
    let transits: Option<Vec<CelestialBody>> = match &args.transits {
        Some(path) => Some(
            load_bodies_from_json(&read(path)?)
                .with_context(|| format!("Failed to parse transits {}", path.display()))?,
        ),
        None => None,
    };

    let focus = focus_state(&args);
    let generator = ChartSpecGenerator::with_settings(settings);
    let spec = generator.generate(Some(&chart), transits.as_deref(), &focus);

    if args.focus.is_some() && spec.focused.is_none() {
        log::warn!("Focused body {:?} not found in chart", args.focus);
    }
    log::info!(
        "Rendered {} shapes, {} aspects",
        spec.shapes.len(),
        spec.aspects.len()
    );

    write_output(&spec, &args)
}
