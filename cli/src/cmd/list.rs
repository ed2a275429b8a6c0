use clap::Parser;
use yandex_disk::Client;

#[derive(Parser)]
pub(crate) struct Command {
    pub(crate) path: String,
    /// Include the directories
    #[clap(short, long)]
    pub(crate) all: bool,
}

impl Command {
    #[tracing::instrument(skip_all)]
    pub(crate) async fn execute(&self, client: Client) {
        match client.get_file_list(&self.path, !self.all).await {
            Ok(items) => {
                tracing::info!("found {} entries in {}", items.len(), self.path);
                super::print_json(&items);
                std::process::exit(exitcode::OK);
            }
            Err(err) => {
                tracing::error!("unable to list {}: {err}", self.path);
                std::process::exit(exitcode::DATAERR);
            }
        }
    }
}
