use clap::Parser;
use yandex_disk::resource::Deletion;
use yandex_disk::Client;

#[derive(Parser)]
pub(crate) struct Command {
    pub(crate) path: String,
}

impl Command {
    #[tracing::instrument(skip_all)]
    pub(crate) async fn execute(&self, client: Client) {
        match client.delete_file(&self.path).await {
            Ok(Deletion::Done) => {
                tracing::info!("{} deleted", self.path);
                std::process::exit(exitcode::OK);
            }
            Ok(Deletion::InProgress(link)) => {
                tracing::info!("{} is being deleted", self.path);
                super::print_json(&link);
                std::process::exit(exitcode::OK);
            }
            Err(err) => {
                tracing::error!("unable to delete {}: {err}", self.path);
                std::process::exit(exitcode::DATAERR);
            }
        }
    }
}
