use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use notedown_config::Config;
use notedown_engine::{Document, Highlighter, HtmlRenderer, RenderOptions, io, parse};
use std::{
    io::{Read, Write},
    path::{Path, PathBuf},
};

const STDIN: &str = "-";

#[derive(Parser)]
#[command(name = "notedown")]
#[command(about = "Parse and render Notedown documents")]
struct Args {
    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the parsed document as JSON
    Parse {
        /// Source file, or `-` for stdin
        file: PathBuf,
    },
    /// Render the document to HTML
    Render {
        /// Source file, or `-` for stdin
        file: PathBuf,
        /// Output file (defaults to the configured output_dir, then stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Skip syntax highlighting of code blocks
        #[arg(long)]
        no_highlight: bool,
        /// Config file to use instead of the default location
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    match args.command {
        Command::Parse { file } => {
            let doc = read_input(&file)?;
            let json = serde_json::to_string_pretty(&doc).context("Failed to serialize document")?;
            println!("{json}");
        }
        Command::Render {
            file,
            output,
            no_highlight,
            config,
        } => {
            let config = load_config(config.as_deref())?;
            let doc = read_input(&file)?;
            let html = render(&doc, &config, !no_highlight);

            match output_target(&file, output, &config) {
                Some(path) => {
                    io::write_html(&path, &html)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    log::info!("Wrote {}", path.display());
                }
                None => {
                    let mut stdout = std::io::stdout().lock();
                    writeln!(stdout, "{html}").context("Failed to write to stdout")?;
                }
            }
        }
    }

    Ok(())
}

fn read_input(file: &Path) -> Result<Document> {
    if file.as_os_str() == STDIN {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        return Ok(parse(&text));
    }
    io::read_document(file).with_context(|| format!("Failed to read {}", file.display()))
}

/// An explicit `--config` must exist; the default location is optional.
fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from_path(path)?
            .with_context(|| format!("Config file not found: {}", path.display())),
        None => {
            log::debug!("Config path: {}", Config::config_path().display());
            Ok(Config::load()?.unwrap_or_default())
        }
    }
}

fn render_options(config: &Config) -> RenderOptions {
    RenderOptions {
        container_class: config.render.container_class.clone(),
        default_meta: config.meta.clone(),
    }
}

fn render(doc: &Document, config: &Config, highlight: bool) -> String {
    let renderer = HtmlRenderer::new(render_options(config));
    if highlight && config.highlight.enabled {
        let highlighter: Highlighter = Highlighter::default();
        renderer.with_highlighter(&highlighter).render(doc)
    } else {
        renderer.render(doc)
    }
}

/// `-o` wins, then `<output_dir>/<stem>.html` for file input, else stdout.
fn output_target(file: &Path, output: Option<PathBuf>, config: &Config) -> Option<PathBuf> {
    output.or_else(|| {
        let dir = config.render.output_dir.as_deref()?;
        (file.as_os_str() != STDIN).then(|| io::html_output_path(file, dir))
    })
}
