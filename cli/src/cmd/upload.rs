use std::path::PathBuf;

use clap::Parser;
use yandex_disk::Client;

#[derive(Parser)]
pub(crate) struct Command {
    pub(crate) local_path: PathBuf,
    pub(crate) disk_path: String,
    /// Replace the file when it already exists
    #[clap(long)]
    pub(crate) overwrite: bool,
}

impl Command {
    #[tracing::instrument(skip_all)]
    pub(crate) async fn execute(&self, client: Client) {
        tracing::info!("uploading {:?} to {}", self.local_path, self.disk_path);
        match client
            .upload_file(&self.local_path, &self.disk_path, self.overwrite)
            .await
        {
            Ok(true) => {
                tracing::info!("file uploaded");
                std::process::exit(exitcode::OK);
            }
            Ok(false) => {
                tracing::error!("{} already exists", self.disk_path);
                std::process::exit(exitcode::DATAERR);
            }
            Err(err) => {
                tracing::error!("unable to upload file: {err}");
                std::process::exit(exitcode::DATAERR);
            }
        }
    }
}
