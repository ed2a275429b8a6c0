mod app;
mod cmd;

use clap::Parser;

#[tokio::main]
async fn main() {
    let cmd = app::Command::parse();
    cmd.set_log_level();

    let client = match cmd.build_client() {
        Ok(client) => client,
        Err(err) => {
            tracing::error!("unable to build client: {err}");
            std::process::exit(exitcode::CONFIG);
        }
    };
    cmd.execute(client).await;
}
