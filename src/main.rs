use log::error;
use promptrun::{PromptRunner, RunnerConfig};

#[tokio::main(flavor = "current_thread")]
async fn main()
{   dotenvy::dotenv().ok();
    env_logger::init();

    let config = RunnerConfig::from_env();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    // Always exit 0; only a broken stdout is worth a log line
    if let Err(e) = PromptRunner::execute(config, &mut out).await
    {   error!("Failed to write to stdout: {}", e);
    }
}
