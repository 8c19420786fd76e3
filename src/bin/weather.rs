use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};
use practice_api::weather::{lookup, AlertQuery, WeatherClient, DEFAULT_URL};

#[derive(Parser, Debug)]
#[command(name = "weather", about = "Read the US National Weather Service API")]
struct Opt {
    /// Base URL of the weather API
    #[arg(long, global = true, default_value = DEFAULT_URL)]
    url: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the API is up
    Status,
    /// Print alert headlines and descriptions
    Alerts {
        /// Filter on whether alerts are active (true or false)
        #[arg(long)]
        active: Option<bool>,
        /// State or marine area code, e.g. NY
        #[arg(long)]
        area: Option<String>,
        /// Event name, e.g. "Test Message"
        #[arg(long)]
        event: Option<String>,
        /// Alert status, e.g. actual
        #[arg(long)]
        status: Option<String>,
    },
    /// Look up glossary terms; prompts for terms when none is given
    Glossary { term: Option<String> },
}

const TERM_NOT_FOUND: &str = "Term not found.";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let opt = Opt::parse();
    let client = WeatherClient::new(&opt.url)?;

    match opt.command {
        Command::Status => {
            println!("{}", client.status().await?.status);
        }
        Command::Alerts {
            active,
            area,
            event,
            status,
        } => {
            let query = AlertQuery {
                active,
                area,
                event,
                status,
            };
            let alerts = client.alerts(&query).await?;

            if let Some(title) = alerts.title {
                println!("{title}\n");
            }

            for alert in alerts.features {
                let properties = alert.properties;
                println!("{}", properties.headline.unwrap_or_default());
                println!("{}\n", properties.description.unwrap_or_default());
            }
        }
        Command::Glossary { term: Some(term) } => {
            let glossary = client.glossary().await?;
            println!("{}", lookup(&glossary, &term).unwrap_or(TERM_NOT_FOUND));
        }
        Command::Glossary { term: None } => {
            let glossary = client.glossary().await?;
            let stdin = io::stdin();

            loop {
                print!("Enter term: ");
                io::stdout().flush()?;

                let mut line = String::new();
                if stdin.lock().read_line(&mut line)? == 0 {
                    break;
                }

                match lookup(&glossary, line.trim()) {
                    Some(definition) => println!("Definition: {definition}"),
                    None => println!("{TERM_NOT_FOUND}"),
                }
            }
        }
    }

    Ok(())
}
