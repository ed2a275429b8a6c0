use std::path::PathBuf;

use clap::Parser;
use yandex_disk::Client;

#[derive(Parser)]
pub(crate) struct Command {
    pub(crate) disk_path: String,
    pub(crate) local_path: PathBuf,
}

impl Command {
    #[tracing::instrument(skip_all)]
    pub(crate) async fn execute(&self, client: Client) {
        tracing::info!("downloading {} to {:?}", self.disk_path, self.local_path);
        match client.download_file(&self.disk_path, &self.local_path).await {
            Ok(size) => {
                tracing::info!("{size} bytes downloaded");
                std::process::exit(exitcode::OK);
            }
            Err(err) => {
                tracing::error!("unable to download file: {err}");
                std::process::exit(exitcode::DATAERR);
            }
        }
    }
}
