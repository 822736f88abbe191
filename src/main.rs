use anyhow::Result;
use clap::Parser;
use create_pull_request::{Config, git::Logger, github::GitHubClient, run};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "create-pull-request")]
#[command(about = "Commit changes made during a workflow run and open a pull request for them")]
#[command(
    long_about = "Commit changes made during a workflow run and open a pull request for them.\n\n\
    Configuration is read from the environment: GITHUB_EVENT_PATH, GITHUB_TOKEN and \
    GITHUB_REPOSITORY are required; PULL_REQUEST_BRANCH, COMMIT_MESSAGE, PULL_REQUEST_TITLE, \
    PULL_REQUEST_BODY, GITHUB_API_URL and DEBUG_EVENT are optional."
)]
#[command(version)]
struct Cli {
    /// Working tree to inspect (defaults to the current directory)
    #[arg(short = 'C', long, default_value = ".")]
    path: PathBuf,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = execute(&cli).await {
        Logger::new("create-pull-request").error(&format!("Error: {:#}", e));
        std::process::exit(1);
    }
}

async fn execute(cli: &Cli) -> Result<()> {
    let config = Config::from_env()?;
    let client = GitHubClient::with_api_url(config.token.clone(), &config.api_url);

    run(&config, &cli.path, &client).await?;

    Ok(())
}
