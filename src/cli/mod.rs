use crate::{
    fetch::{FetchOutcome, Fetcher, FetcherArgsBuilder},
    notebook::{NotebookWriter, NotebookWriterArgsBuilder},
};
use anyhow::{bail, Context};
use args::{Args, Commands};
use clap::{CommandFactory, Parser};
use tracing::Level;

pub mod args;
pub struct Cli;

impl Cli {
    pub async fn init() -> anyhow::Result<()> {
        let args = Args::parse();
        init_tracing(args.verbose);
        Self::run(args).await
    }

    pub async fn run(args: Args) -> anyhow::Result<()> {
        let Some(command) = args.command else {
            Args::command().print_help()?;
            return Ok(());
        };

        match command {
            Commands::Fetch { url, output } => {
                let args = FetcherArgsBuilder::default()
                    .url(url)
                    .destination(output)
                    .build()
                    .context("failed to build fetcher args")?;
                let fetcher = Fetcher::new(args);

                println!("Downloading Shakespeare dataset...");
                match fetcher.run().await? {
                    FetchOutcome::Saved { path, bytes, chars } => {
                        println!("Dataset downloaded successfully to {}", path.display());
                        println!("File size: {chars} characters ({bytes} bytes)");
                    }
                    FetchOutcome::Rejected { status } => {
                        println!(
                            "Error downloading file. Status code: {}",
                            status.as_u16()
                        );
                        bail!("{} answered with {status}", fetcher.url());
                    }
                }
            }
            Commands::Notebook { output } => {
                let args = NotebookWriterArgsBuilder::default()
                    .destination(output)
                    .build()
                    .context("failed to build notebook writer args")?;
                let writer = NotebookWriter::new(args);

                let cells = writer.run()?;
                println!(
                    "Notebook written to {} ({cells} cells)",
                    writer.destination().display()
                );
            }
        };

        Ok(())
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::{args::Args, Cli};
    use crate::fetch::test_server::serve_once;
    use clap::Parser;
    use std::fs;

    #[tokio::test]
    async fn rejected_download_fails_the_run() {
        let url = serve_once("404 Not Found", "missing").await;
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("x.txt");

        let args = Args::try_parse_from([
            "shakenb",
            "fetch",
            "--url",
            url.as_str(),
            "--output",
            output.to_str().unwrap(),
        ])
        .unwrap();

        assert!(Cli::run(args).await.is_err());
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn successful_download_exits_cleanly() {
        let url = serve_once("200 OK", "To be, or not to be").await;
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("data").join("shakespeare.txt");

        let args = Args::try_parse_from([
            "shakenb",
            "fetch",
            "--url",
            url.as_str(),
            "--output",
            output.to_str().unwrap(),
        ])
        .unwrap();

        Cli::run(args).await.unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "To be, or not to be");
    }

    #[tokio::test]
    async fn no_subcommand_prints_help() {
        let args = Args::try_parse_from(["shakenb"]).unwrap();
        assert!(args.command.is_none());
        assert!(Cli::run(args).await.is_ok());
    }

    #[tokio::test]
    async fn notebook_subcommand_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("notebooks").join("nb.ipynb");

        let args =
            Args::try_parse_from(["shakenb", "notebook", "--output", output.to_str().unwrap()])
                .unwrap();

        Cli::run(args).await.unwrap();
        assert!(output.is_file());
    }
}
