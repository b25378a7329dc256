use clap::{Parser, Subcommand};
use guidepost::{config, generate, output, render, scan};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "guidepost")]
#[command(about = "Static site generator for documentation and guide sites")]
#[command(long_about = "\
Static site generator for documentation and guide sites

Your filesystem is the data source. Markdown files become pages, ordered by
numeric prefix, and every section heading becomes a deep-linkable anchor
with a scroll-synchronized table of contents.

Content structure:

  content/
  ├── config.toml                  # Site config (optional)
  ├── index.md                     # Landing page
  ├── 010-getting-started.md       # Page (numbered = shown in nav)
  ├── 020-guide.md                 # Page with many sections
  ├── 050-github.md                # Link page (URL-only .md → external nav link)
  ├── wip-notes.md                 # No number prefix = hidden from nav
  └── assets/                      # Static assets → copied to output root
      └── favicon.svg

Each generated page pairs its content with a guide panel listing the page's
own sections (heading levels 2-4). As the reader scrolls, the panel tracks
the section in view and the URL fragment follows; every heading carries a
copy-link that puts a deep link on the clipboard.

Run 'guidepost gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Directory for intermediate files (manifests)
    #[arg(long, default_value = ".guidepost-temp", global = true)]
    temp_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan content directory into a manifest
    Scan,
    /// Render markdown bodies to HTML with heading ids and outlines
    Render,
    /// Produce the final HTML site from the rendered manifest
    Generate,
    /// Run the full pipeline: scan → render → generate
    Build,
    /// Validate content directory without building
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Scan => {
            let manifest = scan::scan(&cli.source)?;
            std::fs::create_dir_all(&cli.temp_dir)?;
            let manifest_path = cli.temp_dir.join("manifest.json");
            let json = serde_json::to_string_pretty(&manifest)?;
            std::fs::write(&manifest_path, json)?;
            output::print_scan_output(&manifest);
        }
        Command::Render => {
            let scan_manifest_path = cli.temp_dir.join("manifest.json");
            let manifest_content = std::fs::read_to_string(&scan_manifest_path)?;
            let input_manifest: scan::Manifest = serde_json::from_str(&manifest_content)?;
            init_thread_pool(&input_manifest.config.processing);
            let rendered = render::render(&scan_manifest_path)?;
            let rendered_path = cli.temp_dir.join("rendered.json");
            let json = serde_json::to_string_pretty(&rendered)?;
            std::fs::write(&rendered_path, json)?;
            output::print_render_output(&rendered);
        }
        Command::Generate => {
            let rendered_path = cli.temp_dir.join("rendered.json");
            generate::generate(&rendered_path, &cli.output, &cli.source)?;
            let manifest_content = std::fs::read_to_string(&rendered_path)?;
            let manifest: render::Manifest = serde_json::from_str(&manifest_content)?;
            output::print_generate_output(&manifest);
        }
        Command::Build => {
            std::fs::create_dir_all(&cli.temp_dir)?;

            println!("==> Stage 1: Scanning {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            let scan_manifest_path = cli.temp_dir.join("manifest.json");
            let json = serde_json::to_string_pretty(&manifest)?;
            std::fs::write(&scan_manifest_path, json)?;
            output::print_scan_output(&manifest);

            println!("==> Stage 2: Rendering pages");
            init_thread_pool(&manifest.config.processing);
            let rendered = render::render(&scan_manifest_path)?;
            let rendered_path = cli.temp_dir.join("rendered.json");
            let json = serde_json::to_string_pretty(&rendered)?;
            std::fs::write(&rendered_path, &json)?;
            output::print_render_output(&rendered);

            println!("==> Stage 3: Generating HTML → {}", cli.output.display());
            generate::generate(&rendered_path, &cli.output, &cli.source)?;
            output::print_generate_output(&rendered);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            output::print_scan_output(&manifest);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Initialize the rayon thread pool based on processing config.
///
/// Caps at the number of available CPU cores — user can constrain down, not up.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
