use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "panel-cli")]
#[command(about = "Inspect the regions served by a running panel-poller", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://127.0.0.1:7658")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check dashboard status
    Status,
    /// List every region with its update count
    Regions,
    /// Print the raw content of one region
    Region {
        /// Region identifier
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    match cli.command {
        Commands::Status => {
            let res = client.get(format!("{}/status", base)).send().await?;
            print_json(res).await?;
        }
        Commands::Regions => {
            let res = client.get(format!("{}/regions", base)).send().await?;
            print_json(res).await?;
        }
        Commands::Region { id } => {
            let res = client.get(format!("{}/regions/{}", base, id)).send().await?;
            let status = res.status();
            if !status.is_success() {
                eprintln!("Error: region '{}' not available (status {})", id, status);
                return Ok(());
            }
            println!("{}", res.text().await?);
        }
    }

    Ok(())
}

async fn print_json(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: dashboard returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
