use std::io::Read;

use rolewarden_db::PgRoleStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // stdout carries the response document, so logs go to stderr.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "rolewarden_provisioner=debug,rolewarden_core=debug,rolewarden_db=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .expect("Failed to read event from stdin");

    let response = rolewarden_provisioner::handle_json(&PgRoleStore, &input).await;

    let body = serde_json::to_string(&response).expect("Failed to serialize response");
    println!("{body}");
}
