use clap::Parser;
use jsonfetch::accumulator::ResponseAccumulator;
use jsonfetch::client::{fetch_into, HttpSource};
use jsonfetch::config::FetchConfig;
use jsonfetch::matcher::report_known_fields;
use tracing::{debug, warn};

#[derive(Parser, Debug)]
#[command(name = "jsonfetch", about = "Fetch a URL and report known fields from its JSON body")]
struct Args {
    /// Target URL (overrides JSONFETCH_URL)
    #[arg(short, long)]
    url: Option<String>,

    /// Maximum number of body bytes to keep (overrides JSONFETCH_MAXSIZE)
    #[arg(long)]
    max_size: Option<usize>,
}

#[tokio::main]
async fn main() {
    // Load .env first so RUST_LOG in .env is seen
    let _ = dotenvy::dotenv();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let args = Args::parse();
    let mut config = FetchConfig::from_env();
    if let Some(url) = args.url {
        config.url = url;
    }
    if let Some(max) = args.max_size {
        config.max_body = max;
    }

    println!("URL: {}", config.url);

    // Failures are reported as printed status lines; the exit code stays 0.
    let source = HttpSource::new();
    let mut acc = ResponseAccumulator::new(config.max_body);

    match fetch_into(&source, &config.url, &mut acc).await {
        Err(e) => {
            warn!(error = %e, logical_len = acc.logical_len(), "fetch failed");
            println!("get json size: {}", acc.logical_len());
        }
        Ok(()) => match report_known_fields(acc.bytes()) {
            Ok(lines) => {
                for line in &lines {
                    println!("{}", line);
                }
                println!("Parse OK");
            }
            Err(e) => {
                debug!(error = %e, "report failed");
                println!("Parse error");
            }
        },
    }

    acc.release();
}
