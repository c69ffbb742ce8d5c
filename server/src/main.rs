use std::env;

use controlhub::AppBuilder;
use controlhub_types::error::ChResult;

#[tokio::main]
async fn main() -> ChResult<()> {
	tracing_subscriber::fmt()
		.with_env_filter(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| "controlhub=info".into()),
		)
		.init();

	let mut builder = AppBuilder::new();
	if let Ok(listen) = env::var("LISTEN") {
		builder.listen(listen);
	}
	if let Ok(db_dir) = env::var("DB_DIR") {
		builder.db_dir(db_dir);
	}

	let app = builder.build().await?;
	controlhub::run(app).await
}

// vim: ts=4
