use std::path::PathBuf;

use clap::{Parser, Subcommand};

use application::service::{CatalogService, DraftService, OrderLedgerService, ReservationService};
use kernel::KernelError;

use crate::controller::Controller;
use crate::handler::AppModule;
use crate::request::{
    CatalogTransformer, ConfirmRequest, FormRequest, ListRequest, OrderTransformer,
    OrdersRequest, ReservationTransformer, SelectRequest, SuggestRequest,
};
use crate::response::{CatalogPresenter, OrderPresenter, ReservationPresenter};

#[derive(Debug, Parser)]
#[command(name = "storefront", about = "Browse and reserve rental cars", version)]
pub struct Cli {
    /// Backing file of the local storage [env: STOREFRONT_STORAGE]
    #[arg(long, global = true)]
    pub storage: Option<PathBuf>,
    /// Seed catalog path or http(s) URL [env: STOREFRONT_SEED]
    #[arg(long, global = true)]
    pub seed: Option<String>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List cars, optionally filtered
    List(ListRequest),
    /// Show the vehicle types and makes available for filtering
    Filters,
    /// Autocomplete a search keyword
    Suggest(SuggestRequest),
    /// Pick a car to rent and open the reservation form
    Select(SelectRequest),
    /// Open the reservation form for the selected car
    Show,
    /// Fill in the reservation form
    Draft(FormRequest),
    /// Cancel the reservation in progress
    Cancel,
    /// Submit the reservation form
    Submit(FormRequest),
    /// Confirm a pending order
    Confirm(ConfirmRequest),
    /// List placed orders
    Orders(OrdersRequest),
}

impl Command {
    pub async fn dispatch(self, app: &AppModule) -> error_stack::Result<String, KernelError> {
        match self {
            Command::List(request) => {
                Controller::new(CatalogTransformer, CatalogPresenter)
                    .handle(request, |dto| app.list_vehicles(dto))
                    .await
            }
            Command::Filters => {
                Controller::present(CatalogPresenter)
                    .run(|| app.filters())
                    .await
            }
            Command::Suggest(request) => {
                Controller::new(CatalogTransformer, CatalogPresenter)
                    .handle(request, |dto| app.suggest(dto))
                    .await
            }
            Command::Select(request) => {
                Controller::new(ReservationTransformer, ReservationPresenter)
                    .handle(request, |dto| app.choose_vehicle(dto))
                    .await
            }
            Command::Show => {
                Controller::present(ReservationPresenter)
                    .run(|| app.enter_reservation())
                    .await
            }
            Command::Draft(request) => {
                let saved = open_form(app).await?;
                Controller::new(ReservationTransformer, ReservationPresenter)
                    .handle((saved, request), |dto| app.edit_form(dto))
                    .await
            }
            Command::Cancel => {
                Controller::present(ReservationPresenter)
                    .run(|| app.cancel())
                    .await
            }
            Command::Submit(request) => {
                let saved = open_form(app).await?;
                Controller::new(ReservationTransformer, ReservationPresenter)
                    .handle((saved, request), |dto| app.submit(dto))
                    .await
            }
            Command::Confirm(request) => {
                Controller::new(OrderTransformer, ReservationPresenter)
                    .handle(request, |dto| app.confirm(dto))
                    .await
            }
            Command::Orders(request) if request.latest() => {
                Controller::present(OrderPresenter)
                    .run(|| app.latest_order())
                    .await
            }
            Command::Orders(request) => match request.id() {
                Some(id) => {
                    Controller::new(OrderTransformer, OrderPresenter)
                        .handle(id, |dto| app.find_order(dto))
                        .await
                }
                None => {
                    Controller::present(OrderPresenter)
                        .run(|| app.list_orders())
                        .await
                }
            },
        }
    }
}

/// Loads the reservation page: consumes a stale cancellation, then returns the saved form.
async fn open_form(
    app: &AppModule,
) -> error_stack::Result<application::transfer::ReservationFormDto, KernelError> {
    app.enter_reservation().await?;
    Ok(app.load_draft().await?.unwrap_or_default())
}

#[cfg(test)]
mod test {
    use std::path::Path;

    use clap::Parser;
    use time::format_description::well_known::Iso8601;
    use time::{Duration, OffsetDateTime, UtcOffset};

    use application::service::CatalogService;
    use driver::clock::SystemClock;
    use kernel::KernelError;

    use crate::handler::AppModule;

    use super::Cli;

    const SEED: &str = r#"[
        {"id": 1, "make": "Toyota", "model": "Corolla", "year": 2022, "type": "Sedan",
         "price_per_day": 50, "mileage": 15000, "fuel_type": "Petrol",
         "description": "Reliable and efficient", "image_url": "images/corolla.jpg",
         "availability": true},
        {"id": 2, "make": "Ford", "model": "Ranger", "year": 2021, "type": "Truck",
         "price_per_day": 75.5, "description": "Tough pickup", "image_url": "images/ranger.jpg",
         "availability": false}
    ]"#;

    /// One process invocation against the given storage and seed.
    async fn run(dir: &Path, args: &[&str]) -> error_stack::Result<String, KernelError> {
        let storage = dir.join("storage.json");
        let seed = dir.join("cars.json");
        let mut argv = vec![
            "storefront".to_string(),
            "--storage".to_string(),
            storage.display().to_string(),
            "--seed".to_string(),
            seed.display().to_string(),
        ];
        argv.extend(args.iter().map(|arg| arg.to_string()));
        let cli = Cli::try_parse_from(argv).unwrap();
        let app = AppModule::new(cli.storage, cli.seed, SystemClock::new(UtcOffset::UTC)).await?;
        app.load_catalog().await?;
        cli.command.dispatch(&app).await
    }

    fn start_date() -> String {
        let date = OffsetDateTime::now_utc().date() + Duration::days(3);
        date.format(&Iso8601::DATE).unwrap()
    }

    #[tokio::test]
    async fn listing_and_filters() -> error_stack::Result<(), KernelError> {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("cars.json"), SEED).unwrap();

        let listing = run(dir.path(), &["list"]).await?;
        assert!(listing.starts_with("All Cars (2 cars found)"));
        assert!(listing.contains("$75.5/day | Unavailable"));

        let listing = run(dir.path(), &["list", "--type", "Truck"]).await?;
        assert!(listing.contains("(1 car found)"));

        let filters = run(dir.path(), &["filters"]).await?;
        assert_eq!(filters, "Types: Sedan, Truck\nMakes: Ford, Toyota");
        Ok(())
    }

    #[tokio::test]
    async fn reservation_flow_across_invocations() -> error_stack::Result<(), KernelError> {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("cars.json"), SEED).unwrap();

        let form = run(dir.path(), &["select", "1"]).await?;
        assert!(form.contains("Total price: $0.00"));

        let form = run(dir.path(), &["draft", "--name", "Jane Doe", "--days", "3"]).await?;
        assert!(form.contains("Total price: $150.00 (3 x $50/day)"));

        let start = start_date();
        let pending = run(
            dir.path(),
            &[
                "submit",
                "--phone",
                "555-123-4567",
                "--email",
                "jane@example.com",
                "--license",
                "D1234567",
                "--start-date",
                &start,
            ],
        )
        .await?;
        assert!(pending.starts_with("Reservation Pending Confirmation"));
        let order_id = pending
            .lines()
            .find_map(|line| line.strip_prefix("Order ID: "))
            .unwrap()
            .to_string();
        let code = pending
            .lines()
            .find_map(|line| line.strip_prefix("Confirmation code: "))
            .unwrap()
            .to_string();

        let listing = run(dir.path(), &["list", "--make", "Toyota"]).await?;
        assert!(listing.contains("$50/day | Unavailable"));

        let denied = run(dir.path(), &["confirm", &order_id, "--code", "CONF"]).await;
        assert!(denied.is_err_and(|report| report.current_context() == &KernelError::Validation));

        let confirmed = run(dir.path(), &["confirm", &order_id, "--code", &code]).await?;
        assert!(confirmed.starts_with("Reservation Confirmed!"));

        let orders = run(dir.path(), &["orders", "--latest"]).await?;
        assert!(orders.starts_with(&format!("{order_id} [confirmed]")));
        Ok(())
    }

    #[tokio::test]
    async fn cancelled_form_starts_clean() -> error_stack::Result<(), KernelError> {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("cars.json"), SEED).unwrap();

        run(dir.path(), &["select", "1"]).await?;
        run(dir.path(), &["draft", "--name", "Jane Doe"]).await?;
        let cancelled = run(dir.path(), &["cancel"]).await?;
        assert!(cancelled.starts_with("Reservation cancelled."));

        let shown = run(dir.path(), &["show"]).await?;
        assert!(shown.starts_with("No car selected."));
        Ok(())
    }
}
