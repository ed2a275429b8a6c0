use clap::Parser;
use yandex_disk::Client;

#[derive(Parser)]
pub(crate) struct Command {
    pub(crate) path: String,
}

impl Command {
    #[tracing::instrument(skip_all)]
    pub(crate) async fn execute(&self, client: Client) {
        match client.publish_object_and_get_link(&self.path).await {
            Ok(Some(url)) => {
                tracing::info!("{} published", self.path);
                super::print_json(&serde_json::json!({ "public_url": url }));
                std::process::exit(exitcode::OK);
            }
            Ok(None) => {
                tracing::error!("unable to publish {}", self.path);
                std::process::exit(exitcode::DATAERR);
            }
            Err(err) => {
                tracing::error!("unable to publish {}: {err}", self.path);
                std::process::exit(exitcode::DATAERR);
            }
        }
    }
}
