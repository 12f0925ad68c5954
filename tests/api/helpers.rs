use novavoyage_landing::configuration::get_configuration;
use novavoyage_landing::startup::Application;
use novavoyage_landing::telemetry::get_subscriber;
use novavoyage_landing::telemetry::init_subscriber;
use once_cell::sync::Lazy;
use wiremock::MockServer;

/// Init the tracing subscriber once for the whole test binary.
///
/// To opt in to verbose logging, use the env var `TEST_LOG`:
///
/// ```sh
///      TEST_LOG=true cargo test [test_name] | bunyan
/// ```
static TRACING: Lazy<()> = Lazy::new(|| {
    match std::env::var("TEST_LOG") {
        Ok(_) => {
            let subscriber = get_subscriber("test", "debug", std::io::stdout);
            init_subscriber(subscriber);
        }
        Err(_) => {
            let subscriber = get_subscriber("test", "debug", std::io::sink);
            init_subscriber(subscriber);
        }
    };
});

pub struct TestApp {
    pub addr: String,
    /// Stands in for the external service that persists waitlist signups.
    /// Mock expectations are verified when this drops at the end of a test.
    pub backend_server: MockServer,
}

impl TestApp {
    pub async fn get_home(&self) -> reqwest::Response {
        reqwest::Client::new()
            .get(format!("{}/", self.addr))
            .send()
            .await
            .expect("execute request")
    }

    /// Convenience method for making a `/waitlist` `POST` request, mimicking
    /// the landing page form
    pub async fn post_waitlist(
        &self,
        body: String,
    ) -> reqwest::Response {
        reqwest::Client::new()
            .post(format!("{}/waitlist", self.addr))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .expect("execute request")
    }
}

/// Spawn the app on a random port, pointed at a wiremock stand-in for the
/// waitlist backend. Returns the address clients should send requests to (the
/// `http://` prefix matters).
pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let backend_server = MockServer::start().await;
    spawn_app_with_backend(backend_server.uri(), backend_server).await
}

/// Same as `spawn_app`, but with an explicit backend URL; lets a test point
/// the app at an address nothing listens on
pub async fn spawn_app_with_backend(
    backend_url: String,
    backend_server: MockServer,
) -> TestApp {
    Lazy::force(&TRACING);

    let cfg = {
        let mut rand_cfg = get_configuration().unwrap();

        // port 0 is reserved by the OS; the server will be spawned on a
        // random available port, retrieved via Application.get_port()
        rand_cfg.application.port = 0;
        rand_cfg.waitlist.backend_url = backend_url;

        rand_cfg
    };

    let app = Application::build(cfg).await.unwrap();
    let addr = format!("http://localhost:{}", app.get_port());
    tokio::spawn(app.run_until_stopped());

    TestApp {
        addr,
        backend_server,
    }
}
