use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::web;
use actix_web::web::Data;
use actix_web::App;
use actix_web::HttpServer;
use tera::Tera;
use tracing_actix_web::TracingLogger;

use crate::configuration::Settings;
use crate::routes::health_check;
use crate::routes::home;
use crate::routes::join_waitlist;
use crate::waitlist_client::WaitlistClient;

/// Wrapper for actix's `Server` with access to the bound port. Not to be
/// confused with actix's `App`!
pub struct Application {
    /// Left private; use `get_port` to access
    port: u16,
    server: Server,
}

impl Application {
    /// Wrapper over `startup::run` that builds a `Server`
    pub async fn build(cfg: Settings) -> Result<Self, anyhow::Error> {
        let addr = format!("{}:{}", cfg.application.host, cfg.application.port);
        let listener = TcpListener::bind(addr)?;

        // get the randomised port assigned by the OS (tests bind port 0)
        let port = listener.local_addr()?.port();

        let timeout = cfg.waitlist.timeout();
        let client = WaitlistClient::new(cfg.waitlist.backend_url, timeout);

        let server = run(listener, client)?;

        Ok(Self { port, server })
    }

    pub fn get_port(&self) -> u16 { self.port }

    /// Because this consumes `self`, this should be the final function call
    /// (or passed to `tokio::spawn`)
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> { self.server.await }
}

/// The landing page template, embedded at compile time so the binary carries
/// no runtime template directory
fn templates() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_template("landing.html", include_str!("routes/landing.html"))?;
    Ok(tera)
}

/// The server is not responsible for binding to an address, it only listens
/// to an already bound address.
///
/// Declares all API endpoints.
pub fn run(
    listener: TcpListener,
    client: WaitlistClient,
) -> Result<Server, anyhow::Error> {
    // `Data` is externally an `Arc` (for sharing/cloning), internally a
    // `HashMap` (for wrapping arbitrary types)
    let client = Data::new(client);
    let templates = Data::new(templates()?);

    // actix spins up a worker per core; each worker runs its own copy of the
    // `App` built by this closure, hence the shared state must be cloneable
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/", web::get().to(home))
            .route("/health_check", web::get().to(health_check))
            .route("/waitlist", web::post().to(join_waitlist))
            .app_data(client.clone())
            .app_data(templates.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
