use error_stack::{Report, ResultExt};
use time::{Date, OffsetDateTime};
use tracing::{info, warn};

use kernel::interface::clock::{Clock, DependOnClock};
use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::OrderQuery;
use kernel::interface::update::{DraftModifier, OrderModifier};
use kernel::prelude::entity::{
    ConfirmationCode, Draft, FormField, FormReport, Order, OrderId, OrderStatus, OrderedAt,
    RentalDetails, ReservationRequest, Vehicle,
};
use kernel::KernelError;

use crate::service::{
    CatalogService, DraftService, OrderLedgerService, SelectionService, SelectionState,
};
use crate::transfer::{
    issues_of, ConfirmOrderDto, GetVehicleDto, ReservationFormDto, ReservationStateDto,
    SelectVehicleDto, VehicleDto,
};

/// Drives a reservation from vehicle choice to confirmed order.
#[async_trait::async_trait]
pub trait ReservationService:
    'static + Sync + Send + SelectionService + DraftService + OrderLedgerService + DependOnClock
{
    /// Picks a vehicle and enters the reservation form for it.
    async fn choose_vehicle(
        &self,
        dto: SelectVehicleDto,
    ) -> error_stack::Result<ReservationStateDto, KernelError> {
        let id = dto.id;
        match self.select_vehicle(dto).await {
            Ok(_) => self.enter_reservation().await,
            Err(report) if report.current_context() == &KernelError::Unavailable => {
                match self.find_vehicle(GetVehicleDto { id }).await? {
                    Some(vehicle) => Ok(ReservationStateDto::Unavailable { vehicle }),
                    None => Err(report),
                }
            }
            Err(report) => Err(report),
        }
    }

    /// Opening the reservation view. A cancellation left over from an earlier
    /// visit is consumed first so its draft never reappears.
    #[tracing::instrument(skip_all)]
    async fn enter_reservation(&self) -> error_stack::Result<ReservationStateDto, KernelError> {
        if self.take_cancellation().await? {
            info!("Previous reservation was cancelled, starting with an empty form");
        }

        let mut connection = self.database_connection().transact().await?;
        let state = match self.inspect_selection(&mut connection).await? {
            SelectionState::Absent => ReservationStateDto::NoSelection,
            SelectionState::Invalidated(snapshot) => ReservationStateDto::Unavailable {
                vehicle: snapshot.into(),
            },
            SelectionState::Active(vehicle) => {
                let draft = self.stored_draft(&mut connection).await?;
                form_state(vehicle, draft, self.clock().today(), None)
            }
        };
        connection.commit().await?;
        Ok(state)
    }

    /// Live edit of the form: persists the draft and returns the issues of
    /// every filled-in field together with the price quote.
    async fn edit_form(
        &self,
        dto: ReservationFormDto,
    ) -> error_stack::Result<ReservationStateDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let state = self.inspect_selection(&mut connection).await?;
        connection.commit().await?;

        match state {
            SelectionState::Absent => Ok(ReservationStateDto::NoSelection),
            SelectionState::Invalidated(snapshot) => Ok(ReservationStateDto::Unavailable {
                vehicle: snapshot.into(),
            }),
            SelectionState::Active(vehicle) => {
                self.save_draft(dto.clone()).await?;
                Ok(form_state(
                    vehicle,
                    Draft::from(dto),
                    self.clock().today(),
                    None,
                ))
            }
        }
    }

    async fn cancel(&self) -> error_stack::Result<ReservationStateDto, KernelError> {
        self.cancel_reservation().await?;
        Ok(ReservationStateDto::Cancelled)
    }

    /// Re-checks the selection against a freshly loaded catalog, validates the
    /// form and commits the order.
    #[tracing::instrument(skip_all)]
    async fn submit(
        &self,
        dto: ReservationFormDto,
    ) -> error_stack::Result<ReservationStateDto, KernelError> {
        self.load_catalog().await?;

        let mut connection = self.database_connection().transact().await?;
        let vehicle = match self.inspect_selection(&mut connection).await? {
            SelectionState::Absent => return Ok(ReservationStateDto::NoSelection),
            SelectionState::Invalidated(snapshot) => {
                self.draft_modifier().delete(&mut connection).await?;
                connection.commit().await?;
                warn!("Selected car just became unavailable, no order created");
                return Ok(ReservationStateDto::Unavailable {
                    vehicle: snapshot.into(),
                });
            }
            SelectionState::Active(vehicle) => vehicle,
        };

        let draft = Draft::from(dto);
        let request = match draft.validate(self.clock().today()) {
            Ok(request) => request,
            Err(report) => {
                connection.commit().await?;
                return Ok(form_state(
                    vehicle,
                    draft,
                    self.clock().today(),
                    Some(report),
                ));
            }
        };

        let order = issue_order(&vehicle, &request, self.clock().now());
        self.commit_order(&mut connection, &order).await?;
        connection.commit().await?;
        Ok(ReservationStateDto::Pending {
            order: order.into(),
        })
    }

    /// Marks the car unavailable, then records the order. Once the flip has
    /// happened any failure is a consistency error and nothing is undone.
    async fn commit_order(
        &self,
        con: &mut <Self::DatabaseConnection as DatabaseConnection>::Transaction,
        order: &Order,
    ) -> error_stack::Result<(), KernelError> {
        let car_id = order.car().as_ref().id().clone();
        if !self.flip_availability(con, &car_id, false).await? {
            return Err(Report::new(KernelError::NotFound)
                .attach_printable(format!("Car with id {car_id} is no longer listed")));
        }

        self.record_order(con, order)
            .await
            .change_context(KernelError::Consistency)
            .attach_printable_lazy(|| {
                format!(
                    "Car {car_id} was marked unavailable but order {} was not recorded",
                    order.id()
                )
            })?;

        let recorded = self
            .order_query()
            .find_by_id(con, order.id())
            .await
            .change_context(KernelError::Consistency)?;
        if !recorded.is_some_and(|recorded| recorded.car().as_ref().id() == &car_id) {
            return Err(Report::new(KernelError::Consistency).attach_printable(format!(
                "Order {} could not be verified after commit",
                order.id()
            )));
        }

        if let Err(report) = self.order_modifier().set_latest_id(con, order.id()).await {
            warn!("Latest order id not updated: {report:?}");
        }
        if let Err(report) = self.draft_modifier().delete(con).await {
            warn!("Draft not cleared after commit: {report:?}");
        }
        info!("Order {} placed for car {car_id}", order.id());
        Ok(())
    }

    /// Reaffirms that the car of a pending order is unavailable, then confirms it.
    #[tracing::instrument(skip_all, fields(order_id = %dto.order_id))]
    async fn confirm(
        &self,
        dto: ConfirmOrderDto,
    ) -> error_stack::Result<ReservationStateDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let id = OrderId::new(dto.order_id);

        let Some(order) = self.order_query().find_by_id(&mut connection, &id).await? else {
            return Err(Report::new(KernelError::NotFound)
                .attach_printable(format!("Order {id} not found")));
        };
        if let Some(code) = dto.confirmation_code.as_deref() {
            if !order.confirmation_code().matches(code) {
                return Err(Report::new(KernelError::Validation)
                    .attach_printable("Invalid confirmation code"));
            }
        }

        // Reaffirmed before the transition: a failed write leaves the order pending.
        if order.status().can_transition_to(&OrderStatus::Confirmed) {
            let car_id = order.car().as_ref().id().clone();
            if !self.flip_availability(&mut connection, &car_id, false).await? {
                warn!("Car {car_id} of order {id} is missing from the catalog");
            }
        }
        let order = self
            .transition_order(&mut connection, &id, OrderStatus::Confirmed)
            .await?;
        connection.commit().await?;
        Ok(ReservationStateDto::Confirmed {
            order: order.into(),
        })
    }
}

impl<T> ReservationService for T where
    T: SelectionService + DraftService + OrderLedgerService + DependOnClock
{
}

/// Without a report only fields that hold a value are checked, the way
/// inline validation reacts to input.
fn form_state(
    vehicle: Vehicle,
    draft: Draft,
    today: Date,
    report: Option<FormReport>,
) -> ReservationStateDto {
    let quote = draft
        .requested_days()
        .map(|days| vehicle.quote(days).into());
    let issues = match report {
        Some(report) => issues_of(&report),
        None => match draft.validate(today) {
            Ok(_) => Vec::new(),
            Err(report) => issues_of(&report)
                .into_iter()
                .filter(|issue| {
                    FormField::ALL
                        .iter()
                        .find(|field| field.key() == issue.field)
                        .is_some_and(|field| !draft.value(*field).is_empty())
                })
                .collect(),
        },
    };
    ReservationStateDto::FormActive {
        vehicle: VehicleDto::from(vehicle),
        form: draft.into(),
        issues,
        quote,
    }
}

fn issue_order(vehicle: &Vehicle, request: &ReservationRequest, now: OffsetDateTime) -> Order {
    let mut rng = rand::thread_rng();
    let id = OrderId::issue(&now, &mut rng);
    let confirmation_code = ConfirmationCode::issue(&mut rng);
    let days = *request.days();
    let quote = vehicle.quote(days.into());
    Order::new(
        id,
        vehicle.snapshot(),
        request.customer().clone(),
        RentalDetails::new(*request.start_date(), days, quote.total().clone()),
        OrderStatus::Pending,
        confirmation_code,
        OrderedAt::new(now),
    )
}
