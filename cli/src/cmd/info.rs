use clap::Parser;
use yandex_disk::Client;

#[derive(Parser)]
pub(crate) struct Command {
    pub(crate) path: String,
}

impl Command {
    #[tracing::instrument(skip_all)]
    pub(crate) async fn execute(&self, client: Client) {
        match client.get_file_info(&self.path).await {
            Ok(resource) => {
                super::print_json(&resource);
                std::process::exit(exitcode::OK);
            }
            Err(err) => {
                tracing::error!("unable to get file info: {err}");
                std::process::exit(exitcode::DATAERR);
            }
        }
    }
}
