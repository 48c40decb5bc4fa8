use clap::{Parser, Subcommand, ValueEnum};
use hp_profile::{DiagramModel, SegmentShape};
use hp_project::{ProfileDocument, ProjectResult};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "hp-cli")]
#[command(about = "HydroProfile CLI - Elevation profile and HGL diagram tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate profile file syntax and structure
    Validate {
        /// Path to the profile YAML or JSON file
        profile_path: PathBuf,
    },
    /// Compute the diagram model and print it
    Render {
        /// Path to the profile YAML or JSON file
        profile_path: PathBuf,
        /// Override the viewport width
        #[arg(long)]
        width: Option<f64>,
        /// Override the viewport height
        #[arg(long)]
        height: Option<f64>,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print a human-readable summary of the profile
    Summary {
        /// Path to the profile YAML or JSON file
        profile_path: PathBuf,
        /// Override the viewport width
        #[arg(long)]
        width: Option<f64>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Yaml,
}

fn main() -> ProjectResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { profile_path } => cmd_validate(&profile_path),
        Commands::Render {
            profile_path,
            width,
            height,
            format,
            output,
        } => cmd_render(&profile_path, width, height, format, output.as_deref()),
        Commands::Summary {
            profile_path,
            width,
        } => cmd_summary(&profile_path, width),
    }
}

fn cmd_validate(profile_path: &Path) -> ProjectResult<()> {
    println!("Validating profile: {}", profile_path.display());
    let doc = hp_project::load(profile_path)?;
    hp_project::to_elements(&doc)?;
    println!("✓ Profile is valid");
    Ok(())
}

fn render(doc: &ProfileDocument, width: Option<f64>, height: Option<f64>) -> ProjectResult<DiagramModel> {
    let mut config = doc.config.clone();
    if let Some(w) = width {
        config = config.with_width(w);
    }
    if let Some(h) = height {
        config = config.with_height(h);
    }
    hp_project::render_with(doc, &config)
}

fn cmd_render(
    profile_path: &Path,
    width: Option<f64>,
    height: Option<f64>,
    format: Format,
    output: Option<&Path>,
) -> ProjectResult<()> {
    let doc = hp_project::load(profile_path)?;
    let model = render(&doc, width, height)?;

    let content = match format {
        Format::Json => serde_json::to_string_pretty(&model)?,
        Format::Yaml => serde_yaml::to_string(&model)?,
    };

    match output {
        Some(path) => {
            std::fs::write(path, content)?;
            tracing::info!(path = %path.display(), "wrote diagram model");
            println!("✓ Diagram written to {}", path.display());
        }
        None => println!("{content}"),
    }
    Ok(())
}

fn cmd_summary(profile_path: &Path, width: Option<f64>) -> ProjectResult<()> {
    let doc = hp_project::load(profile_path)?;
    let model = render(&doc, width, None)?;
    let unit = doc.units.display.symbol();

    println!("Profile: {}", doc.name);
    if let Some(description) = &doc.description {
        println!("  {description}");
    }
    println!("  Elements: {}", doc.elements.len());
    println!("  Total length: {:.2} {unit}", model.total_length);
    println!(
        "  Elevation window: {:.2} - {:.2} {unit}",
        model.scale.min_el, model.scale.max_el
    );
    println!(
        "  Horizontal scale: {}",
        if model.scale.is_proportional() {
            "proportional to length"
        } else {
            "evenly spaced"
        }
    );

    if model.components.is_empty() {
        println!("\nNo components in profile");
        return Ok(());
    }

    println!("\nComponents:");
    for placed in &model.components {
        let c = &placed.position.component;
        println!(
            "  {:<12} x={:>8.1}  at {:>8.2} {unit}  el={:.2} {unit}",
            c.id, placed.x, placed.position.cumulative_length, c.p1_el
        );
    }

    println!("\nSegments:");
    for seg in &model.segments {
        let shape = match seg.shape {
            SegmentShape::Direct => "direct",
            SegmentShape::Simple => "simple",
            SegmentShape::Series => "series",
        };
        println!(
            "  {} -> {}  {shape}, {} connection(s), {:.2} {unit}",
            seg.start_id,
            seg.end_id,
            seg.connections.len(),
            seg.length
        );
    }

    println!("\nStatic HGL:");
    match &model.static_hgl {
        Some(s) => println!(
            "  {} {:.2} {unit} -> {} {:.2} {unit} across {}",
            s.upstream_source_id, s.upstream_head, s.downstream_source_id, s.downstream_head, s.flow_control_id
        ),
        None => println!("  not available (no flow control between sources)"),
    }

    println!("\nFlowing HGL:");
    match &model.flowing_hgl {
        Some(f) => {
            println!("  Start head: {:.2} {unit}", f.start_head);
            println!("  End head: {:.2} {unit}", f.end_head());
            println!("  Peak: {:.2} {unit} at {}", f.peak.head, f.peak.label);
            if f.peak_above_window {
                println!("  ⚠ Peak is above the elevation window");
            }
            println!("  Visible runs: {}", f.runs.len());
        }
        None => println!("  not available (no head changes)"),
    }

    Ok(())
}
