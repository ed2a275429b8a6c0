use std::time::Duration;

use clap::Parser;
use yandex_disk::builder::{ClientBuilder, Error as BuilderError};
use yandex_disk::{Client, Credentials};

#[derive(Parser)]
#[clap(name = "yandex-disk", about, version)]
pub struct Command {
    /// OAuth token used to access the disk.
    #[clap(long, env = "YANDEX_DISK_TOKEN", hide_env_values = true)]
    token: Option<String>,
    /// Root of the disk api.
    #[clap(long, env = "YANDEX_DISK_BASE_URL")]
    base_url: Option<String>,
    /// Total timeout of a request, in milliseconds.
    #[clap(long, env = "YANDEX_DISK_TIMEOUT")]
    timeout: Option<u64>,
    #[clap(short, long)]
    verbose: bool,
    #[clap(subcommand)]
    subcmd: crate::cmd::Command,
}

impl Command {
    pub fn build_client(&self) -> Result<Client, BuilderError> {
        let mut builder = ClientBuilder::default();
        if let Some(ref token) = self.token {
            builder.set_credentials(Credentials::oauth(token.as_str()));
        }
        if let Some(ref base_url) = self.base_url {
            builder.set_base_url(base_url.clone());
        }
        if let Some(timeout) = self.timeout.map(Duration::from_millis) {
            builder.set_timeout(timeout);
        }
        builder.build()
    }

    pub async fn execute(&self, client: Client) {
        self.subcmd.execute(client).await
    }

    pub fn set_log_level(&self) {
        let filter = if self.verbose {
            "yandex_disk=debug,yandex_disk_cli=debug"
        } else {
            "warn"
        };
        if let Err(err) = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
        {
            eprintln!("couldn't init logger: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Command;
    use crate::cmd::Command as Sub;
    use clap::Parser;

    #[test]
    fn global_flags() {
        let cmd = Command::try_parse_from([
            "yandex-disk",
            "--token",
            "my-token",
            "--base-url",
            "http://localhost:1234/v1/disk",
            "--timeout",
            "1500",
            "-v",
            "info",
            "disk:/foo.txt",
        ])
        .unwrap();
        assert_eq!(cmd.token.as_deref(), Some("my-token"));
        assert_eq!(cmd.timeout, Some(1500));
        assert!(cmd.verbose);
        let client = cmd.build_client().unwrap();
        assert_eq!(client.base_url(), "http://localhost:1234/v1/disk");
    }

    #[test]
    fn list_flags() {
        let cmd =
            Command::try_parse_from(["yandex-disk", "--token", "t", "list", "disk:/", "--all"])
                .unwrap();
        assert!(matches!(cmd.subcmd, Sub::List(ref inner) if inner.all));
        let cmd = Command::try_parse_from(["yandex-disk", "--token", "t", "list", "disk:/"])
            .unwrap();
        assert!(matches!(cmd.subcmd, Sub::List(ref inner) if !inner.all));
    }

    #[test]
    fn transfer_arguments() {
        let cmd = Command::try_parse_from([
            "yandex-disk",
            "--token",
            "t",
            "upload",
            "./photo.png",
            "disk:/photo.png",
            "--overwrite",
        ])
        .unwrap();
        match cmd.subcmd {
            Sub::Upload(inner) => {
                assert_eq!(inner.local_path.to_str(), Some("./photo.png"));
                assert_eq!(inner.disk_path, "disk:/photo.png");
                assert!(inner.overwrite);
            }
            _ => panic!("expected upload"),
        }
        let cmd =
            Command::try_parse_from(["yandex-disk", "--token", "t", "move", "disk:/a", "disk:/b"])
                .unwrap();
        match cmd.subcmd {
            Sub::Move(inner) => {
                assert_eq!(inner.from, "disk:/a");
                assert_eq!(inner.to, "disk:/b");
                assert!(!inner.overwrite);
            }
            _ => panic!("expected move"),
        }
    }

    #[test]
    fn missing_path() {
        assert!(Command::try_parse_from(["yandex-disk", "--token", "t", "delete"]).is_err());
    }
}
