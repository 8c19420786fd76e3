use clap::{Parser, Subcommand};
use practice_api::client::{PracticeClient, DEFAULT_URL};

#[derive(Parser, Debug)]
#[command(name = "practice-client", about = "Call the practice API with GET, POST, PUT and DELETE")]
struct Opt {
    /// URL of the practice API
    #[arg(long, global = true, default_value = DEFAULT_URL)]
    url: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// GET one entry, or every entry when no key is given
    Get { key: Option<String> },
    /// POST a new entry
    Post { key: String, value: String },
    /// PUT a new value for an existing entry
    Put { key: String, value: String },
    /// DELETE an entry
    Delete { key: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let opt = Opt::parse();
    let client = PracticeClient::new(opt.url);
    log::debug!("calling {}", client.url());

    let entries = match opt.command {
        Command::Get { key: Some(key) } => client.get(&key).await?,
        Command::Get { key: None } => client.all().await?,
        Command::Post { key, value } => client.create(&key, &value).await?,
        Command::Put { key, value } => client.update(&key, &value).await?,
        Command::Delete { key } => client.delete(&key).await?,
    };

    println!("{}", serde_json::to_string_pretty(&entries)?);

    Ok(())
}
