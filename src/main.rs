//! Invite Studio CLI
//!
//! Usage:
//!   invite-studio [OPTIONS] [FILE]
//!
//! Renders a design document (JSON) to an SVG preview. With `--store` the
//! document comes from a local design directory instead of a file, and
//! `--slug` resolves a public share link the way the share route does:
//! placeholders only, never live record values.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use invite_studio::{
    render_document_with_config, render_share, Catalog, Document, DocumentStore, EventRecord,
    FsStore, PreviewConfig, SvgConfig, TemplateGroup, Theme,
};

#[derive(Parser)]
#[command(name = "invite-studio")]
#[command(about = "Invitation designer: render, validate, and share design documents")]
struct Cli {
    /// Design document JSON (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Event record JSON for live field substitution
    #[arg(short, long)]
    record: Option<PathBuf>,

    /// Theme file for palette and fonts (TOML format)
    #[arg(short, long)]
    theme: Option<PathBuf>,

    /// Write the SVG here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Debug mode: draw element bounds and ids
    #[arg(short, long)]
    debug: bool,

    /// Inline local image files as data URIs
    #[arg(long)]
    embed_images: bool,

    /// Check the document against its invariants and exit
    #[arg(long)]
    validate: bool,

    /// Design directory to load from / list
    #[arg(short, long)]
    store: Option<PathBuf>,

    /// List the designs in the store
    #[arg(short, long)]
    list: bool,

    /// Render the design a public share slug resolves to (placeholders only)
    #[arg(long)]
    slug: Option<String>,

    /// Show the element templates the designer offers
    #[arg(long)]
    catalog: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.catalog {
        print_catalog();
        return;
    }

    // Store-backed modes
    if let Some(dir) = &cli.store {
        let store = match FsStore::open(dir) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error opening store '{}': {}", dir.display(), e);
                std::process::exit(1);
            }
        };

        if cli.list {
            match store.list() {
                Ok(summaries) => {
                    for s in summaries {
                        println!(
                            "{:<24} {:<28} {}x{}  {} elements",
                            s.id,
                            s.name,
                            s.canvas_size.width,
                            s.canvas_size.height,
                            s.element_count
                        );
                    }
                }
                Err(e) => {
                    eprintln!("Error listing designs: {}", e);
                    std::process::exit(1);
                }
            }
            return;
        }

        if let Some(slug) = &cli.slug {
            let document = store
                .resolve_slug(slug)
                .and_then(|id| store.load(&id))
                .unwrap_or_else(|e| {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                });
            let theme = load_theme(&cli);
            let svg = render_share(&document, &svg_config(&cli), &theme);
            write_output(&cli, &svg);
            return;
        }

        eprintln!("--store requires --list or --slug");
        std::process::exit(2);
    }

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let json = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    if cli.validate {
        let result = serde_json::from_str::<Document>(&json)
            .map_err(|e| e.to_string())
            .and_then(|doc| doc.validate().map_err(|e| e.to_string()));
        match result {
            Ok(()) => println!("ok"),
            Err(e) => {
                eprintln!("Invalid design: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let record = cli.record.as_ref().map(|path| {
        let content = fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error reading record '{}': {}", path.display(), e);
            std::process::exit(1);
        });
        serde_json::from_str::<EventRecord>(&content).unwrap_or_else(|e| {
            eprintln!("Error parsing record '{}': {}", path.display(), e);
            std::process::exit(1);
        })
    });

    let mut config = PreviewConfig::new()
        .with_svg(svg_config(&cli))
        .with_theme(load_theme(&cli));
    if let Some(record) = record {
        config = config.with_record(record);
    }

    match render_document_with_config(&json, config) {
        Ok(svg) => write_output(&cli, &svg),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn svg_config(cli: &Cli) -> SvgConfig {
    SvgConfig::default()
        .with_debug(cli.debug)
        .with_embed_images(cli.embed_images)
}

fn load_theme(cli: &Cli) -> Theme {
    match &cli.theme {
        Some(path) => match Theme::from_file(path) {
            Ok(theme) => theme,
            Err(e) => {
                eprintln!("Error loading theme '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Theme::default(),
    }
}

fn write_output(cli: &Cli, svg: &str) {
    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, svg) {
                eprintln!("Error writing '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        }
        None => println!("{}", svg),
    }
}

fn print_catalog() {
    let catalog = Catalog::standard();
    println!("BASIC ELEMENTS");
    println!("--------------");
    for t in catalog.group(TemplateGroup::Basic) {
        println!(
            "{:<16} {}x{}",
            t.label, t.default_size.width, t.default_size.height
        );
    }
    println!();
    println!("DATA-BOUND FIELDS");
    println!("-----------------");
    for t in catalog.group(TemplateGroup::Fields) {
        let binding = t
            .default_binding
            .as_ref()
            .map(|b| b.as_str())
            .unwrap_or("-");
        println!(
            "{:<16} binds {:<14} {}x{}",
            t.label, binding, t.default_size.width, t.default_size.height
        );
    }
}

fn print_intro() {
    println!(
        r#"Invite Studio - invitation designer core

USAGE:
    invite-studio [OPTIONS] [FILE]
    cat design.json | invite-studio

OPTIONS:
    -r, --record       Event record JSON for live field values
    -t, --theme        Custom palette and fonts (TOML file)
    -o, --output       Write the SVG to a file
    -d, --debug        Draw element bounds and ids
    -s, --store        Design directory (with --list or --slug)
    -l, --list         List stored designs
    --slug             Render a public share slug (placeholders only)
    --validate         Check document invariants and exit
    --embed-images     Inline local images as data URIs
    --catalog          Show the element templates
    -h, --help         Print help

QUICK START:
    invite-studio design.json > preview.svg
    invite-studio design.json --record wedding.json > live.svg

Run --catalog to see what the designer can place on a canvas."#
    );
}
