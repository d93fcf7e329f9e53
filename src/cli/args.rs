use clap::{Parser, Subcommand};
use std::path::PathBuf;
use url::Url;

use crate::{
    fetch::{SHAKESPEARE_PATH, SHAKESPEARE_URL},
    notebook::NOTEBOOK_PATH,
};

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(about = "Download the tiny shakespeare dataset")]
    Fetch {
        #[arg(short, long, env = "SHAKENB_DATA_URL", default_value = SHAKESPEARE_URL)]
        url: Url,
        #[arg(short, long, default_value = SHAKESPEARE_PATH)]
        output: PathBuf,
    },
    #[command(about = "Write the tokenization and embeddings notebook")]
    Notebook {
        #[arg(short, long, default_value = NOTEBOOK_PATH)]
        output: PathBuf,
    },
}

#[derive(Debug, Parser)]
#[command(version, about, long_about = "Shakespeare dataset and tokenization notebook tooling")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}
