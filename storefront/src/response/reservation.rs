use std::fmt::{Display, Formatter};

use application::transfer::{FieldIssueDto, PriceQuoteDto, ReservationStateDto};

use crate::controller::Exhaust;
use crate::response::VehicleCard;

const FORM_FIELDS: [(&str, &str, &str); 6] = [
    ("name", "Full name", "--name"),
    ("phone", "Phone", "--phone"),
    ("email", "Email", "--email"),
    ("license", "Driver's license", "--license"),
    ("startDate", "Start date", "--start-date"),
    ("days", "Days", "--days"),
];

pub struct ReservationView(ReservationStateDto);

impl ReservationView {
    fn issue<'a>(issues: &'a [FieldIssueDto], field: &str) -> Option<&'a str> {
        issues
            .iter()
            .find(|issue| issue.field == field)
            .map(|issue| issue.message)
    }

    fn total(quote: Option<&PriceQuoteDto>) -> String {
        match quote {
            Some(quote) => format!(
                "${:.2} ({} x ${}/day)",
                quote.total_price,
                quote.days,
                quote.price_per_day.normalize()
            ),
            None => "$0.00".to_string(),
        }
    }
}

impl Display for ReservationView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            ReservationStateDto::NoSelection => write!(
                f,
                "No car selected. Browse with `storefront list` and pick one with `storefront select <id>`."
            ),
            ReservationStateDto::Unavailable { vehicle } => write!(
                f,
                "We're sorry, the {} {} has just become unavailable.\nPlease return to the listings with `storefront list` to select another vehicle.",
                vehicle.make, vehicle.model
            ),
            ReservationStateDto::FormActive {
                vehicle,
                form,
                issues,
                quote,
            } => {
                writeln!(f, "{}", VehicleCard(vehicle))?;
                writeln!(f, "    {}", vehicle.description)?;
                writeln!(f)?;
                let values = [
                    &form.name,
                    &form.phone,
                    &form.email,
                    &form.license,
                    &form.start_date,
                    &form.days,
                ];
                for ((key, label, flag), value) in FORM_FIELDS.iter().zip(values) {
                    write!(f, "{label:<18}{value:<24}({flag})")?;
                    if let Some(message) = Self::issue(issues, key) {
                        write!(f, "  ! {message}")?;
                    }
                    writeln!(f)?;
                }
                writeln!(f)?;
                write!(f, "Total price: {}", Self::total(quote.as_ref()))
            }
            ReservationStateDto::Pending { order } => {
                writeln!(f, "Reservation Pending Confirmation")?;
                writeln!(
                    f,
                    "Your reservation for the {} {} has been placed but is not yet confirmed.",
                    order.car.make, order.car.model
                )?;
                writeln!(f, "Order ID: {}", order.order_id)?;
                writeln!(f, "Confirmation code: {}", order.confirmation_code)?;
                writeln!(f, "Total price: ${:.2}", order.total_price)?;
                writeln!(
                    f,
                    "Confirm with `storefront confirm {} --code {}`.",
                    order.order_id, order.confirmation_code
                )?;
                write!(
                    f,
                    "Note: The car will remain reserved for 30 minutes. If not confirmed within this time, the reservation may be cancelled."
                )
            }
            ReservationStateDto::Confirmed { order } => {
                writeln!(f, "Reservation Confirmed!")?;
                writeln!(f, "Your car rental has been successfully confirmed.")?;
                writeln!(f, "Order ID: {}", order.order_id)?;
                write!(f, "Thank you for choosing SpeedyWheels!")
            }
            ReservationStateDto::Cancelled => write!(
                f,
                "Reservation cancelled. Your form data was cleared."
            ),
        }
    }
}

pub struct ReservationPresenter;

impl Exhaust<ReservationStateDto> for ReservationPresenter {
    type To = ReservationView;
    fn emit(&self, input: ReservationStateDto) -> Self::To {
        ReservationView(input)
    }
}

#[cfg(test)]
mod test {
    use rust_decimal::Decimal;

    use application::transfer::{
        FieldIssueDto, PriceQuoteDto, ReservationFormDto, ReservationStateDto,
    };

    use crate::controller::Exhaust;
    use crate::response::catalog::test::corolla;

    use super::ReservationPresenter;

    #[test]
    fn form_shows_issues_next_to_fields_and_total() {
        let view = ReservationPresenter
            .emit(ReservationStateDto::FormActive {
                vehicle: corolla(),
                form: ReservationFormDto {
                    name: "Jo".to_string(),
                    days: "3".to_string(),
                    ..Default::default()
                },
                issues: vec![FieldIssueDto {
                    field: "name",
                    message: "Name must be at least 3 characters long",
                }],
                quote: Some(PriceQuoteDto {
                    price_per_day: Decimal::new(5000, 2),
                    days: 3,
                    total_price: Decimal::new(15000, 2),
                }),
            })
            .to_string();

        let name_line = view
            .lines()
            .find(|line| line.starts_with("Full name"))
            .unwrap();
        assert!(name_line.ends_with("! Name must be at least 3 characters long"));
        assert!(view.contains("Total price: $150.00 (3 x $50/day)"));
    }

    #[test]
    fn form_without_quote_totals_zero() {
        let view = ReservationPresenter
            .emit(ReservationStateDto::FormActive {
                vehicle: corolla(),
                form: ReservationFormDto::default(),
                issues: Vec::new(),
                quote: None,
            })
            .to_string();
        assert!(view.ends_with("Total price: $0.00"));
        assert!(!view.contains('!'));
    }

    #[test]
    fn unavailable_names_the_car() {
        let view = ReservationPresenter
            .emit(ReservationStateDto::Unavailable { vehicle: corolla() })
            .to_string();
        assert!(view.starts_with("We're sorry, the Toyota Corolla has just become unavailable."));
    }
}
