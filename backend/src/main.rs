use backend::conf;
use backend::db;
use backend::startup::Application;
use backend::state::AppState;
use backend::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let env = conf::Env::derive();
    let env_conf = conf::EnvConf::derive();
    let conf = conf::Conf { env, env_conf };

    let subscriber = telemetry::TracingSubscriber::new()
        .pretty(conf.env_conf.log.pretty)
        .build(std::io::stdout);
    telemetry::init_global_default(subscriber);

    tracing::info!("Env: {}", conf.env);
    if conf.env_conf.paypal_client_id.is_none() {
        tracing::warn!("PAYPAL_CLIENT_ID is not set, /api/config/paypal will serve an empty object");
    }

    let db = db::connect(&conf.env_conf.database_url).await?;
    let state = AppState::new(db, &conf);

    let application = Application::build(&conf, state).await;
    application.server().await?;

    Ok(())
}
