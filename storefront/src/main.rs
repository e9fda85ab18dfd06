use clap::Parser;
use error_stack::Report;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use application::service::CatalogService;
use driver::clock::SystemClock;
use kernel::KernelError;

use crate::command::Cli;
use crate::error::StackTrace;
use crate::handler::AppModule;

mod command;
mod controller;
mod error;
mod handler;
mod request;
mod response;

fn main() -> Result<(), StackTrace> {
    // Before any other thread exists.
    let clock = SystemClock::local();

    let appender = tracing_appender::rolling::daily(std::path::Path::new("./logs/"), "storefront.log");
    let (non_blocking_appender, _guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(tracing_subscriber::EnvFilter::new(
                    std::env::var("RUST_LOG").unwrap_or_else(|_| {
                        "storefront=info,application=info,driver=info".into()
                    }),
                )),
        )
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_writer(non_blocking_appender)
                .with_ansi(false)
                .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG),
        )
        .init();

    let cli = Cli::parse();
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|error| Report::new(error).change_context(KernelError::Internal))?;

    runtime.block_on(async {
        let app = AppModule::new(cli.storage, cli.seed, clock).await?;

        // Every invocation is a page load.
        app.load_catalog().await?;

        tracing::debug!(command = ?cli.command, "Dispatching");
        let view = cli.command.dispatch(&app).await?;
        println!("{view}");
        Ok::<(), StackTrace>(())
    })
}
