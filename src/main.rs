use std::fs::File;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use env_logger::Env;
use log::{debug, info};

use vpngate::generator::{servers_to_json, servers_to_list, servers_to_table, to_openvpn};
use vpngate::models::{filter_by_country, find_by_hostname, sort_by_score};
use vpngate::{fetch_feed_report, parse_feed_report, ParsedFeed, Settings};

/// List VPN Gate relay servers with their OpenVPN client configs
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Feed URL to fetch instead of the configured one
    #[arg(long, value_name = "URL", conflicts_with = "file")]
    url: Option<String>,

    /// Parse a local feed file instead of fetching
    #[arg(short, long, value_name = "FEED")]
    file: Option<PathBuf>,

    /// Only keep servers of this country code (e.g. JP)
    #[arg(long, value_name = "CC")]
    country: Option<String>,

    /// Write the OpenVPN config of this server to the output file
    #[arg(long, value_name = "HOSTNAME", requires = "output")]
    choose: Option<String>,

    /// Output file for the chosen server's config (must be used with --choose)
    #[arg(short, long, value_name = "OUTPUT_FILE", requires = "choose")]
    output: Option<PathBuf>,

    /// Print the servers as JSON
    #[arg(long, conflicts_with = "table")]
    json: bool,

    /// Print one summary line per server
    #[arg(long)]
    table: bool,
}

fn load_feed(args: &Args) -> anyhow::Result<ParsedFeed> {
    if let Some(path) = &args.file {
        info!("Parsing server list from {}", path.display());
        let file = File::open(path)
            .with_context(|| format!("Failed to open feed file {}", path.display()))?;
        return parse_feed_report(file).context("Failed to parse server list");
    }

    let mut settings = Settings::load(args.config.as_deref())?;
    if let Some(url) = &args.url {
        settings.set_feed_url(url)?;
    }
    fetch_feed_report(&settings).context("Failed to fetch server list")
}

fn main() -> anyhow::Result<()> {
    // Initialize the logger
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let args = Args::parse();

    let parsed = load_feed(&args)?;
    debug!("{} server(s) dropped as incomplete", parsed.dropped);

    let mut servers = match &args.country {
        Some(country) => filter_by_country(&parsed.servers, country),
        None => parsed.servers,
    };
    sort_by_score(&mut servers);

    if let (Some(hostname), Some(output)) = (&args.choose, &args.output) {
        let Some(server) = find_by_hostname(&servers, hostname) else {
            bail!("No server named {}", hostname);
        };
        std::fs::write(output, to_openvpn(server))
            .with_context(|| format!("Failed to write {}", output.display()))?;
        info!(
            "Wrote config for {} ({}) to {}",
            server.hostname,
            server.country,
            output.display()
        );
        return Ok(());
    }

    if args.json {
        println!("{}", servers_to_json(&servers)?);
    } else if args.table {
        print!("{}", servers_to_table(&servers));
    } else {
        print!("{}", servers_to_list(&servers));
    }

    Ok(())
}
