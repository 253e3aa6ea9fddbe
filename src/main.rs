use clap::Parser;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use voicelab::cli::Cli;
use voicelab::domain::synthesis::{read_batch_file, SynthesisService};
use voicelab::error::{AppError, AppResult};
use voicelab::infrastructure::config::{Config, LogFormat};
use voicelab::infrastructure::playback;
use voicelab::infrastructure::repositories::ElevenLabsRepository;
use voicelab::infrastructure::store;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::from_env();
    init_logging(&config);

    match run(cli, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, config: Config) -> AppResult<()> {
    let config_dir = cli.config.clone().unwrap_or_else(|| config.config_dir.clone());
    let catalog = store::load_all(&config_dir)?;

    if cli.list {
        println!("Available profiles:");
        for (name, profile) in catalog.iter() {
            let marker = if catalog.default_profile() == Some(name.as_str()) {
                " (default)"
            } else {
                ""
            };
            println!(
                "- {name}{marker}: profileId={} | voiceId={}",
                profile.profile_id, profile.voice_id
            );
        }
        return Ok(());
    }

    let profile = catalog.resolve(cli.profile.as_deref())?.clone();
    let api_key = config.require_api_key()?.to_string();

    let output_dir = cli.output_dir.clone().unwrap_or_else(|| config.output_dir.clone());
    let repository = Arc::new(ElevenLabsRepository::new(api_key));
    let service = SynthesisService::new(
        repository,
        output_dir,
        cli.format.clone(),
        !cli.no_metadata,
    );

    if let Some(input_file) = &cli.input_file {
        let items = read_batch_file(input_file)?;

        println!(
            "Batch mode: {} lines from {}",
            items.len(),
            input_file.display()
        );
        println!(
            "Profile: {} (voiceId={})",
            profile.profile_id, profile.voice_id
        );

        let summary = service
            .synthesize_batch(&profile, &items, cli.name.as_deref())
            .await;

        for outcome in &summary.outcomes {
            match &outcome.result {
                Ok(paths) => {
                    println!(
                        "[{}/{}] Saved: {}",
                        outcome.index,
                        items.len(),
                        paths.audio.display()
                    );
                    if let Some(metadata) = &paths.metadata {
                        println!(
                            "[{}/{}] Metadata: {}",
                            outcome.index,
                            items.len(),
                            metadata.display()
                        );
                    }
                }
                Err(err) => {
                    println!("[{}/{}] Failed: {err}", outcome.index, items.len());
                }
            }
        }
        println!(
            "Batch complete: {} succeeded, {} failed",
            summary.succeeded(),
            summary.failed()
        );

        // Batch playback covers the first successful item only.
        if cli.play {
            if let Some(paths) = summary.first_success() {
                play(&paths.audio);
            }
        }

        if summary.all_failed() {
            return Err(AppError::BatchFailed(summary.failed()));
        }
        return Ok(());
    }

    let paths = service
        .synthesize_one(&profile, &cli.text, cli.name.as_deref(), None)
        .await?;

    println!("Saved: {}", paths.audio.display());
    if let Some(metadata) = &paths.metadata {
        println!("Metadata: {}", metadata.display());
    }
    println!(
        "Profile: {} (voiceId={})",
        profile.profile_id, profile.voice_id
    );

    if cli.play {
        play(&paths.audio);
    }

    Ok(())
}

/// Best-effort playback; a missing or failing player never fails the run.
fn play(path: &Path) {
    match playback::play_file(path) {
        Ok(()) => println!("Playback: completed"),
        Err(err) => tracing::warn!(error = %err, "Playback skipped"),
    }
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "voicelab=info".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "voicelab=info".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
