use clap::{Parser, Subcommand, ValueEnum};
use pinsight_analysis::{analyze_profile, AnalyzeOptions, ApiCredentials, ProfileSource};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "pinsight-cli")]
#[command(about = "Profile insight synthesis command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Analyze a profile and print its insight and site-configuration suggestion
    Analyze {
        /// Profile username (fixture name for the fixture source)
        username: String,

        /// Where to load the profile from
        #[arg(long, value_enum, default_value_t = SourceArg::Fixture)]
        source: SourceArg,

        /// Write JSON and markdown artifacts to the output directory
        #[arg(long)]
        persist: bool,

        /// Generative service key; overrides OPENAI_API_KEY
        #[arg(long)]
        api_key: Option<String>,

        /// Live API access token; overrides INSTAGRAM_ACCESS_TOKEN
        #[arg(long)]
        access_token: Option<String>,

        /// Live API account id; overrides INSTAGRAM_ACCOUNT_ID
        #[arg(long)]
        account_id: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SourceArg {
    Fixture,
    Api,
}

impl From<SourceArg> for ProfileSource {
    fn from(value: SourceArg) -> Self {
        match value {
            SourceArg::Fixture => ProfileSource::Fixture,
            SourceArg::Api => ProfileSource::Api,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = pinsight_core::load_app_config()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(config = ?config, "configuration loaded");

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Analyze {
            username,
            source,
            persist,
            api_key,
            access_token,
            account_id,
        }) => {
            let options = AnalyzeOptions {
                source: source.into(),
                persist,
                api_key,
                credentials: ApiCredentials {
                    access_token,
                    account_id,
                },
            };
            let outcome = analyze_profile(&config, &username, &options).await?;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        None => println!("pinsight-cli ready; run `pinsight-cli analyze <username>`"),
    }

    Ok(())
}
