use clap::Parser;
use yandex_disk::Client;

#[derive(Parser)]
pub(crate) struct Command {
    pub(crate) from: String,
    pub(crate) to: String,
    /// Replace the destination when it already exists
    #[clap(long)]
    pub(crate) overwrite: bool,
}

impl Command {
    #[tracing::instrument(skip_all)]
    pub(crate) async fn execute(&self, client: Client) {
        match client.move_file(&self.from, &self.to, self.overwrite).await {
            Ok(true) => {
                tracing::info!("{} moved to {}", self.from, self.to);
                std::process::exit(exitcode::OK);
            }
            Ok(false) => {
                tracing::error!("{} already exists", self.to);
                std::process::exit(exitcode::DATAERR);
            }
            Err(err) => {
                tracing::error!("unable to move {}: {err}", self.from);
                std::process::exit(exitcode::DATAERR);
            }
        }
    }
}
