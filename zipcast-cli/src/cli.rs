use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use inquire::{InquireError, Text};
use zipcast_core::{Config, Page, Pipeline, Submission};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "zipcast", version, about = "Three-day forecast for a US postal code")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the forecast for one postal code.
    Show {
        /// 5-digit or ZIP+4 postal code, e.g. "12345" or "12345-6789".
        postal_code: String,

        #[command(flatten)]
        output: Output,

        /// Print the raw forecast as JSON instead of the page.
        #[arg(long, conflicts_with = "html")]
        json: bool,
    },

    /// Interactive form: enter postal codes until Esc or Ctrl-C.
    Form {
        #[command(flatten)]
        output: Output,
    },

    /// Set the geocoding and forecast service endpoints.
    Configure,

    /// Print the location of the config file.
    ConfigPath,
}

#[derive(Debug, Args)]
pub struct Output {
    /// Print the page as HTML instead of text.
    #[arg(long)]
    html: bool,
}

impl Output {
    fn print(&self, page: &Page) {
        if self.html {
            println!("{}", page.to_html());
        } else {
            print!("{page}");
        }
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        match self.command {
            Command::Show { postal_code, output, json } => {
                let pipeline = Pipeline::from_config(&Config::load()?);

                if json {
                    return match pipeline.lookup(&postal_code).await {
                        Ok(forecast) => {
                            println!("{}", serde_json::to_string_pretty(&forecast)?);
                            Ok(ExitCode::SUCCESS)
                        }
                        Err(err) => {
                            eprintln!("{err}");
                            Ok(ExitCode::FAILURE)
                        }
                    };
                }

                let outcome = pipeline.submit(&postal_code).await;
                output.print(&pipeline.page().await);

                Ok(match outcome {
                    Submission::Rendered => ExitCode::SUCCESS,
                    Submission::Failed(_) | Submission::Busy => ExitCode::FAILURE,
                })
            }
            Command::Form { output } => {
                let pipeline = Pipeline::from_config(&Config::load()?);
                run_form(&pipeline, &output).await?;
                Ok(ExitCode::SUCCESS)
            }
            Command::Configure => {
                configure()?;
                Ok(ExitCode::SUCCESS)
            }
            Command::ConfigPath => {
                println!("{}", Config::config_file_path()?.display());
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

async fn run_form(pipeline: &Pipeline, output: &Output) -> anyhow::Result<()> {
    loop {
        let input = match Text::new("Zip code:")
            .with_help_message("Esc or Ctrl-C to quit")
            .prompt()
        {
            Ok(input) => input,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                return Ok(());
            }
            Err(err) => return Err(err).context("Failed to read postal code"),
        };

        if let Submission::Failed(err) = pipeline.submit(&input).await {
            tracing::debug!(kind = ?err.kind(), "submission failed");
        }

        output.print(&pipeline.page().await);
        println!();
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let geo_url = Text::new("Geocoding endpoint:")
        .with_default(&config.geo_url)
        .prompt()
        .context("Failed to read geocoding endpoint")?;
    config.set_geo_url(&geo_url)?;

    let forecast_url = Text::new("Forecast endpoint:")
        .with_default(&config.forecast_url)
        .prompt()
        .context("Failed to read forecast endpoint")?;
    config.set_forecast_url(&forecast_url)?;

    config.save()?;
    println!("Saved to {}", Config::config_file_path()?.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn show_parses_output_flags() {
        let cli = Cli::try_parse_from(["zipcast", "show", "12345", "--html"]).unwrap();
        match cli.command {
            Command::Show { postal_code, output, json } => {
                assert_eq!(postal_code, "12345");
                assert!(output.html);
                assert!(!json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn html_and_json_conflict() {
        assert!(Cli::try_parse_from(["zipcast", "show", "12345", "--html", "--json"]).is_err());
    }
}
