//! App state type

use std::{
	path::{Path, PathBuf},
	sync::Arc,
};

use controlhub_store_adapter_sqlite::ControlStoreSqlite;
use controlhub_types::store_adapter::ControlStore;

use crate::prelude::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct AppState {
	pub store: Arc<dyn ControlStore>,
	pub opts: AppBuilderOpts,
}

pub type App = Arc<AppState>;

#[derive(Debug)]
pub struct AppBuilderOpts {
	pub listen: Box<str>,
	pub db_dir: Box<Path>,
}

pub struct AppBuilder {
	opts: AppBuilderOpts,
	store: Option<Arc<dyn ControlStore>>,
}

impl AppBuilder {
	pub fn new() -> Self {
		AppBuilder {
			opts: AppBuilderOpts {
				listen: "127.0.0.1:8080".into(),
				db_dir: PathBuf::from("./data").into(),
			},
			store: None,
		}
	}

	// Opts
	pub fn listen(&mut self, listen: impl Into<Box<str>>) -> &mut Self { self.opts.listen = listen.into(); self }
	pub fn db_dir(&mut self, db_dir: impl Into<PathBuf>) -> &mut Self { self.opts.db_dir = db_dir.into().into(); self }

	/// Use a pre-built store instead of the default SQLite adapter.
	pub fn store(&mut self, store: Arc<dyn ControlStore>) -> &mut Self { self.store = Some(store); self }

	pub async fn build(self) -> ChResult<App> {
		let store: Arc<dyn ControlStore> = match self.store {
			Some(store) => store,
			None => {
				tokio::fs::create_dir_all(&self.opts.db_dir).await?;
				Arc::new(ControlStoreSqlite::new(self.opts.db_dir.join("controlhub.db")).await?)
			}
		};

		info!(version = VERSION, listen = %self.opts.listen, "Controlhub configured");
		Ok(Arc::new(AppState { store, opts: self.opts }))
	}
}

impl Default for AppBuilder {
	fn default() -> Self {
		Self::new()
	}
}

// vim: ts=4
