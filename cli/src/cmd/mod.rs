mod delete;
mod download;
mod info;
mod list;
mod moving;
mod publish;
mod upload;

use clap::Subcommand;
use yandex_disk::Client;

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Show the metadata of a file or directory
    Info(info::Command),
    /// Publish a file or directory and print its public url
    Publish(publish::Command),
    /// List the content of a directory
    List(list::Command),
    /// Download a file
    Download(download::Command),
    /// Upload a file
    Upload(upload::Command),
    /// Delete a file or directory
    Delete(delete::Command),
    /// Move or rename a file or directory
    Move(moving::Command),
}

impl Command {
    pub(crate) async fn execute(&self, client: Client) {
        match self {
            Self::Info(cmd) => cmd.execute(client).await,
            Self::Publish(cmd) => cmd.execute(client).await,
            Self::List(cmd) => cmd.execute(client).await,
            Self::Download(cmd) => cmd.execute(client).await,
            Self::Upload(cmd) => cmd.execute(client).await,
            Self::Delete(cmd) => cmd.execute(client).await,
            Self::Move(cmd) => cmd.execute(client).await,
        }
    }
}

/// Prints the value as json on stdout
fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(err) => {
            tracing::error!("unable to serialize result: {err}");
            std::process::exit(exitcode::SOFTWARE);
        }
    }
}
