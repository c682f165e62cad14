//! Command implementations

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use crate::app::AppContainer;
use crate::cli::args::{DownloadArgs, GenerateArgs, InfoArgs, SaveArgs, WizardArgs};
use crate::config::Settings;
use crate::domain::model::DEFAULT_FORMAT_ID;
use crate::domain::rules::WizardStep;
use crate::output::renderer;

/// Execute the info command
pub async fn info(args: InfoArgs, container: &AppContainer, json: bool) -> Result<()> {
    info!("Starting metadata lookup");

    let video = container
        .info_interactor()
        .fetch(&args.url)
        .await
        .context("Failed to fetch video info")?;

    if json {
        renderer::print_json(&video)?;
    } else {
        renderer::print_video_info(&video);
    }

    Ok(())
}

/// Execute the download command
pub async fn download(args: DownloadArgs, container: &AppContainer, json: bool) -> Result<()> {
    info!("Starting source download");

    let downloaded = container
        .download_interactor()
        .fetch_source(&args.url, &args.format_id)
        .await
        .context("Failed to download source video")?;

    if json {
        renderer::print_json(&downloaded)?;
    } else {
        renderer::print_downloaded(&downloaded);
    }

    Ok(())
}

/// Execute the generate command
pub async fn generate(args: GenerateArgs, container: &AppContainer, json: bool) -> Result<()> {
    info!("Starting clip generation");

    let shorts = container
        .generate_interactor()
        .generate(&args.video_path, args.max_duration, args.segments)
        .await
        .context("Failed to generate shorts")?;

    if json {
        renderer::print_json(&shorts)?;
    } else {
        renderer::print_shorts(&shorts);
    }

    Ok(())
}

/// Execute the save command
pub async fn save(args: SaveArgs, container: &AppContainer) -> Result<()> {
    info!("Saving short {}", args.id);

    let dest = args
        .output
        .unwrap_or_else(|| PathBuf::from(format!("{}.mp4", args.id)));

    let written = container
        .download_interactor()
        .save_short(&args.id, &dest)
        .await
        .context("Failed to save short")?;

    println!("Saved {} ({} bytes) to {}", args.id, written, dest.display());
    Ok(())
}

/// Execute the wizard command: walk the whole flow interactively
pub async fn wizard(args: WizardArgs, container: &AppContainer, settings: &Settings) -> Result<()> {
    let interactor = container.wizard_interactor();
    let mut session = interactor.start_session();
    let mut pending_url = args.url;

    println!("ShortsGen wizard - turn a YouTube video into short clips.");
    println!();

    loop {
        match session.step() {
            WizardStep::Input => {
                let url = match pending_url.take() {
                    Some(url) => url,
                    None => prompt("YouTube URL (blank to quit): ")?,
                };
                if url.is_empty() {
                    break;
                }

                if let Err(e) = interactor.submit_url(&mut session, &url).await {
                    eprintln!("Error fetching video info: {}", e);
                }
            }
            WizardStep::Processing => {
                print_step_header(session.step());
                if let Some(video) = session.video() {
                    renderer::print_video_info(video);
                }
                println!("URL:       {}", session.url());
                if let Some(path) = session.source_path() {
                    println!();
                    println!("Source ready on backend: {}", path);
                }

                println!();
                let choice =
                    prompt("[g]enerate shorts, [d]ownload source first, [n]ew video, [q]uit: ")?;
                match choice.as_str() {
                    "g" => {
                        println!("Generating shorts...");
                        if let Err(e) = interactor
                            .generate(&mut session, settings.max_duration, Vec::new())
                            .await
                        {
                            eprintln!("Error generating shorts: {}", e);
                        }
                    }
                    "d" => match interactor.fetch_source(&mut session, DEFAULT_FORMAT_ID).await {
                        Ok(downloaded) => {
                            println!("Backend stored the source at {}", downloaded.file_path)
                        }
                        Err(e) => eprintln!("Error downloading source: {}", e),
                    },
                    "n" => interactor.reset(&mut session),
                    "q" => break,
                    other => println!("Unknown choice '{}'", other),
                }
            }
            WizardStep::Editing => {
                print_step_header(session.step());
                renderer::print_shorts(session.shorts());

                println!();
                let choice = prompt(
                    "[s]ave a clip, publish to [t]iktok, publish to [y]outube, [n]ew video, [q]uit: ",
                )?;
                match choice.as_str() {
                    "s" => {
                        let picked = prompt("Clip number: ")?;
                        match picked.parse::<usize>() {
                            Ok(n) if n >= 1 && n <= session.shorts().len() => {
                                let clip_id = session.shorts()[n - 1].id.clone();
                                let dest = PathBuf::from(format!("{}.mp4", clip_id));
                                match container
                                    .download_interactor()
                                    .save_short(&clip_id, &dest)
                                    .await
                                {
                                    Ok(written) => println!(
                                        "Saved {} ({} bytes) to {}",
                                        clip_id,
                                        written,
                                        dest.display()
                                    ),
                                    Err(e) => eprintln!("Error saving clip: {}", e),
                                }
                            }
                            _ => println!("No clip number '{}'", picked),
                        }
                    }
                    "t" => renderer::print_publish_notice("TikTok"),
                    "y" => renderer::print_publish_notice("YouTube"),
                    "n" => interactor.reset(&mut session),
                    "q" => break,
                    other => println!("Unknown choice '{}'", other),
                }
            }
            WizardStep::Upload => {
                // Declared in the step enum but never produced by the
                // transition table; bounce back to the start if reached.
                interactor.reset(&mut session);
            }
        }
    }

    println!("Done.");
    Ok(())
}

/// Print the banner for a wizard step
fn print_step_header(step: WizardStep) {
    println!();
    println!(
        "--- Step {}/{}: {} ---",
        step.number(),
        WizardStep::total_steps(),
        step.title()
    );
}

/// Print a prompt and read one trimmed line from stdin
fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Failed to read input")?;

    Ok(line.trim().to_string())
}
