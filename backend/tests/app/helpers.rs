use backend::{conf, db, startup::Application, state::AppState, telemetry};
use once_cell::sync::Lazy;

static TRACING: Lazy<()> = Lazy::new(|| {
    let subscriber = telemetry::TracingSubscriber::new();

    if std::env::var("TEST_LOG").is_ok() {
        telemetry::init_global_default(subscriber.build(std::io::stdout));
    } else {
        telemetry::init_global_default(subscriber.build(std::io::sink));
    };
});

pub async fn spawn_app() -> TestApp {
    spawn_app_with(conf::EnvConf::test_default()).await
}

/// Spins the application up on an ephemeral port with a throwaway uploads
/// directory. The database pool is lazy, so no live server is required for
/// bootstrap-level tests.
pub async fn spawn_app_with(mut env_conf: conf::EnvConf) -> TestApp {
    Lazy::force(&TRACING);

    let uploads_dir = tempfile::tempdir().expect("temp uploads dir");
    env_conf.uploads_dir = Some(uploads_dir.path().to_str().unwrap().to_owned());

    let conf = conf::Conf {
        env: conf::Env::Local,
        env_conf,
    };

    let pool = db::connect_lazy(&conf.env_conf.database_url);
    let state = AppState::new(pool, &conf);

    let application = Application::build(&conf, state).await;

    let host = application.host().to_owned();
    let port = application.port();
    let address = format!("http://{}:{}", host, port);

    let _ = tokio::spawn(application.server());

    let api_client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .cookie_store(true)
        .build()
        .unwrap();

    TestApp {
        address,
        port,
        api_client,
        uploads_dir,
    }
}

pub struct TestApp {
    pub address: String,
    #[allow(unused)]
    pub port: u16,
    pub api_client: reqwest::Client,
    pub uploads_dir: tempfile::TempDir,
}

impl TestApp {
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }
}
