// Configuration definitions, functions and tests
//

use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string as de_num;

pub static DEFAULT_PORT: u16 = 5000;
pub static DEFAULT_FRONTEND_URL: &str = "https://veloshop-web.onrender.com";

#[derive(Clone)]
pub struct Conf {
    pub env_conf: EnvConf,
    pub env: Env,
}

impl Conf {
    /// Directory served under `/uploads`, resolved once at startup.
    ///
    /// An explicit `UPLOADS_DIR` wins; otherwise the directory depends on
    /// the runtime mode, matching where the deployment actually keeps files.
    pub fn uploads_dir(&self) -> std::path::PathBuf {
        if let Some(dir) = &self.env_conf.uploads_dir {
            return std::path::PathBuf::from(dir);
        }

        let root = std::env::current_dir().expect("accessible working directory");
        match self.env {
            Env::Prod => root.join("backend").join("uploads"),
            Env::Local => root.join("frontend").join("uploads"),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct EnvConf {
    #[serde(deserialize_with = "de_num")]
    pub port: u16,
    pub host: String,
    pub frontend_url: String,
    pub paypal_client_id: Option<String>,
    pub database_url: String,
    pub uploads_dir: Option<String>,
    pub log: Log,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Log {
    pub pretty: bool,
}

impl EnvConf {
    pub fn derive() -> Self {
        let conf_builder = config::Config::builder()
            .set_default("port", DEFAULT_PORT.to_string())
            .unwrap()
            .set_default("host", "0.0.0.0")
            .unwrap()
            .set_default("frontend_url", DEFAULT_FRONTEND_URL)
            .unwrap()
            .set_default("log.pretty", false)
            .unwrap()
            .add_source(config::Environment::default().separator("__"))
            .build();

        let conf = conf_builder.unwrap();

        match conf.try_deserialize() {
            Ok(conf) => conf,
            Err(e) => {
                dbg!(&e);
                Err(e).expect("correct config")
            }
        }
    }

    #[allow(unused)] // RA bug
    pub fn test_default() -> Self {
        Self {
            port: 0,
            host: "127.0.0.1".into(),
            frontend_url: "http://localhost:5173".into(),
            paypal_client_id: None,
            database_url: "postgres://postgres@127.0.0.1/veloshop_test".into(),
            uploads_dir: None,
            log: Log { pretty: false },
        }
    }
}

use derive_more::Display;

#[derive(Debug, PartialEq, Display, Clone, Copy)]
pub enum Env {
    #[display(fmt = "local")]
    Local,
    #[display(fmt = "prod")]
    Prod,
}

impl Env {
    /// Deployment platforms set `NODE_ENV=production`; every other value,
    /// including none at all, counts as local.
    pub fn derive() -> Self {
        match std::env::var("NODE_ENV") {
            Ok(v) if v == "production" => Self::Prod,
            _ => Self::Local,
        }
    }

    pub fn local(&self) -> bool {
        matches!(self, Self::Local)
    }

    pub fn prod(&self) -> bool {
        matches!(self, Self::Prod)
    }
}

impl AsRef<str> for Env {
    fn as_ref(&self) -> &str {
        match self {
            Self::Local => "local",
            Self::Prod => "prod",
        }
    }
}
