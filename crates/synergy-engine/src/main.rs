use anyhow::{bail, Context, Result};
use chroma_core::filter::FilterParams;
use chroma_core::graph::RenderProfile;
use chroma_core::ingest::scryfall::{CardCache, ScryfallClient};
use chroma_core::ingest::{parse_decklist, resolve_deck};
use chroma_core::pipeline::analyze;
use chroma_core::render;
use chroma_core::synergy::ScoringPolicy;
use std::env;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: chroma [OPTIONS]

Reads a decklist (one card name per line) and writes a force-directed
synergy graph.

Options:
  --deck FILE       Read the decklist from FILE (default: stdin)
  --out FILE        Output path (default: synergy_graph.html)
  --min-mana N      Keep cards with mana value >= N (default: 0)
  --max-mana N      Keep cards with mana value <= N (default: 15)
  --no-lands        Exclude lands from the graph
  --compact         Thin flat-colored edges instead of the chromatic tiers
  --json            Print the graph JSON to stdout instead of writing HTML
  --help            Show this help
";

struct Options {
    deck_path: Option<PathBuf>,
    out_path: PathBuf,
    params: FilterParams,
    profile: RenderProfile,
    emit_json: bool,
}

fn parse_args(args: &[String]) -> Result<Option<Options>> {
    let mut opts = Options {
        deck_path: None,
        out_path: PathBuf::from("synergy_graph.html"),
        params: FilterParams::default(),
        profile: RenderProfile::chromatic(),
        emit_json: false,
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--deck" => {
                let value = iter.next().context("--deck requires a file path")?;
                opts.deck_path = Some(PathBuf::from(value));
            }
            "--out" => {
                let value = iter.next().context("--out requires a file path")?;
                opts.out_path = PathBuf::from(value);
            }
            "--min-mana" => {
                let value = iter.next().context("--min-mana requires a number")?;
                opts.params.min_mana = value.parse().context("invalid --min-mana value")?;
            }
            "--max-mana" => {
                let value = iter.next().context("--max-mana requires a number")?;
                opts.params.max_mana = value.parse().context("invalid --max-mana value")?;
            }
            "--no-lands" => opts.params.include_lands = false,
            "--compact" => opts.profile = RenderProfile::compact(),
            "--json" => opts.emit_json = true,
            "--help" | "-h" => {
                print!("{USAGE}");
                return Ok(None);
            }
            other => bail!("unknown option {other:?}\n\n{USAGE}"),
        }
    }

    Ok(Some(opts))
}

fn read_decklist(opts: &Options) -> Result<String> {
    match &opts.deck_path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read decklist {path:?}")),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("failed to read decklist from stdin")?;
            Ok(input)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let opts = match parse_args(&args)? {
        Some(opts) => opts,
        None => return Ok(()),
    };

    let names = parse_decklist(&read_decklist(&opts)?);
    if names.is_empty() {
        println!("Nothing to show: the decklist is empty.");
        return Ok(());
    }
    let commander = names[0].clone();

    // Cache lives for this batch only; a fresh run starts cold.
    let cache = Arc::new(CardCache::new());
    let client = ScryfallClient::new(cache);
    let records = resolve_deck(&client, &names).await;

    let policy = ScoringPolicy::standard();
    let graph = match analyze(
        records,
        &opts.params,
        &policy,
        &opts.profile,
        Some(commander.as_str()),
    ) {
        Some(graph) => graph,
        None => {
            println!("Nothing to show: no cards survived fetching and filtering.");
            return Ok(());
        }
    };

    println!(
        "🌈 Graph built: {} nodes, {} edges.",
        graph.node_count(),
        graph.edge_count()
    );

    if opts.emit_json {
        println!("{}", render::to_json(&graph)?);
    } else {
        render::write_html(&graph, &opts.out_path)?;
        println!("Saved to {}", opts.out_path.display());
    }

    Ok(())
}
