use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use mosaic::layout::solver::ElementCategory;
use mosaic::screens::catalog;
use mosaic::{
    CompositionalLayout, DemoScreen, LayoutDocument, LayoutEnvironment, ResolvedLayout, Screen,
    Size, resolve_layout,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "mosaic", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the demo catalog.
    List,
    /// Run the measurement pass for a demo screen or a layout document.
    Layout(LayoutArgs),
    /// Render every element of a demo screen to view descriptors (JSON).
    Render(RenderArgs),
}

#[derive(Args, Debug)]
struct EnvArgs {
    /// Container width in points.
    #[arg(long, default_value_t = 390.0)]
    width: f64,

    /// Container height in points.
    #[arg(long, default_value_t = 844.0)]
    height: f64,

    /// Layout environment JSON; overrides --width/--height.
    #[arg(long = "env")]
    env_path: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Demo screen to lay out.
    #[arg(long, required_unless_present = "in_path", conflicts_with = "in_path")]
    screen: Option<Screen>,

    /// Layout document JSON (a section description plus item counts).
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    #[command(flatten)]
    env: EnvArgs,

    /// Print every element's attributes as JSON instead of a summary.
    #[arg(long, conflicts_with = "describe")]
    json: bool,

    /// Print the section descriptions the layout produced for this environment as JSON.
    #[arg(long)]
    describe: bool,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Demo screen to render.
    #[arg(long)]
    screen: Screen,

    #[command(flatten)]
    env: EnvArgs,

    /// Output JSON path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::List => cmd_list(),
        Command::Layout(args) => cmd_layout(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> anyhow::Result<T> {
    let f = File::open(path).with_context(|| format!("open {what} '{}'", path.display()))?;
    let r = BufReader::new(f);
    serde_json::from_reader(r).with_context(|| format!("parse {what} JSON '{}'", path.display()))
}

fn environment(args: &EnvArgs) -> anyhow::Result<LayoutEnvironment> {
    if let Some(path) = &args.env_path {
        return read_json(path, "layout environment");
    }
    for (name, value) in [("width", args.width), ("height", args.height)] {
        if !value.is_finite() || value <= 0.0 {
            anyhow::bail!("--{name} must be a finite positive number, got {value}");
        }
    }
    Ok(LayoutEnvironment::from_container(Size::new(
        args.width,
        args.height,
    )))
}

fn cmd_list() -> anyhow::Result<()> {
    let catalog = catalog::controller().context("build catalog")?;
    for screen in catalog.data_source().current().item_identifiers() {
        println!("{:<30} {}", screen.slug(), screen.title());
    }
    Ok(())
}

/// What `layout` measures.
enum LayoutSource {
    Screen(Screen, Box<dyn DemoScreen>),
    Document(PathBuf, CompositionalLayout, Vec<usize>),
}

impl LayoutSource {
    fn load(args: &LayoutArgs) -> anyhow::Result<Self> {
        match (args.screen, &args.in_path) {
            (Some(screen), _) => {
                let instance = screen
                    .instantiate()
                    .with_context(|| format!("instantiate screen '{screen}'"))?;
                Ok(Self::Screen(screen, instance))
            }
            (None, Some(path)) => {
                let doc: LayoutDocument = read_json(path, "layout document")?;
                doc.validate()
                    .with_context(|| format!("validate layout document '{}'", path.display()))?;
                let (layout, counts) = doc.into_layout();
                Ok(Self::Document(path.clone(), layout, counts))
            }
            (None, None) => anyhow::bail!("either --screen or --in is required"),
        }
    }

    fn title(&self) -> String {
        match self {
            Self::Screen(screen, _) => screen.title().to_string(),
            Self::Document(path, _, _) => path.display().to_string(),
        }
    }

    fn layout(&self) -> &CompositionalLayout {
        match self {
            Self::Screen(_, instance) => instance.layout(),
            Self::Document(_, layout, _) => layout,
        }
    }

    fn item_counts(&self) -> Vec<usize> {
        match self {
            Self::Screen(_, instance) => instance.item_counts(),
            Self::Document(_, _, counts) => counts.clone(),
        }
    }
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let env = environment(&args.env)?;
    let source = LayoutSource::load(&args)?;
    let item_counts = source.item_counts();

    if args.describe {
        let description = source.layout().resolve_sections(item_counts.len(), &env);
        println!("{}", serde_json::to_string_pretty(&description)?);
        return Ok(());
    }

    let resolved = resolve_layout(source.layout(), &item_counts, &env);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&resolved)?);
    } else {
        print_summary(&source.title(), &env, &resolved);
    }
    Ok(())
}

fn print_summary(title: &str, env: &LayoutEnvironment, resolved: &ResolvedLayout) {
    println!(
        "{title}: container {}x{} ({:?}/{:?}), content {}x{}",
        env.container.width,
        env.container.height,
        env.horizontal_size_class,
        env.vertical_size_class,
        resolved.content_size.width,
        resolved.content_size.height,
    );
    for section in &resolved.sections {
        if !section.has_layout {
            println!("  section {}: no layout", section.index);
            continue;
        }
        println!(
            "  section {}: y {}..{}, {} groups, scrolling {:?}, extent {}",
            section.index,
            section.frame.y0,
            section.frame.y1,
            section.group_count,
            section.orthogonal_scrolling,
            section.scroll_extent,
        );
    }

    let (mut cells, mut supplementaries, mut decorations) = (0usize, 0usize, 0usize);
    for attributes in &resolved.attributes {
        match attributes.category {
            ElementCategory::Cell => cells += 1,
            ElementCategory::Supplementary(_) => supplementaries += 1,
            ElementCategory::Decoration(_) => decorations += 1,
        }
    }
    println!("  {cells} cells, {supplementaries} supplementary, {decorations} decoration");
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let env = environment(&args.env)?;
    let screen = args
        .screen
        .instantiate()
        .with_context(|| format!("instantiate screen '{}'", args.screen))?;
    let rendered = screen
        .render(&env)
        .with_context(|| format!("render screen '{}'", args.screen))?;
    let json = serde_json::to_string_pretty(&rendered)?;

    let Some(out) = args.out else {
        println!("{json}");
        return Ok(());
    };
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&out, json).with_context(|| format!("write '{}'", out.display()))?;
    eprintln!(
        "wrote {} ({} elements, {} skipped)",
        out.display(),
        rendered.elements.len(),
        rendered.skipped
    );
    Ok(())
}
