use std::path::PathBuf;
use std::sync::Arc;

use sqlx::PgPool;

use crate::conf::Conf;

/// Shared by every request handler through an extension layer.
/// The pool and the uploads directory are resolved once at startup and
/// read-shared afterwards.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub conf: Arc<Conf>,
    pub uploads_dir: PathBuf,
}

impl AppState {
    pub fn new(db: PgPool, conf: &Conf) -> Self {
        Self {
            db,
            uploads_dir: conf.uploads_dir(),
            conf: Arc::new(conf.clone()),
        }
    }
}
