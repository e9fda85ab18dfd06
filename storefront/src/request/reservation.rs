use clap::Args;

use application::transfer::{ReservationFormDto, SelectVehicleDto};

use crate::controller::Intake;

#[derive(Debug, Args)]
pub struct SelectRequest {
    id: i64,
}

/// Form fields. Omitted fields keep the value of the saved draft.
#[derive(Debug, Default, Args)]
pub struct FormRequest {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    license: Option<String>,
    /// YYYY-MM-DD or MM/DD/YYYY
    #[arg(long)]
    start_date: Option<String>,
    #[arg(long)]
    days: Option<String>,
}

pub struct ReservationTransformer;

impl Intake<SelectRequest> for ReservationTransformer {
    type To = SelectVehicleDto;
    fn emit(&self, input: SelectRequest) -> Self::To {
        SelectVehicleDto { id: input.id }
    }
}

impl Intake<(ReservationFormDto, FormRequest)> for ReservationTransformer {
    type To = ReservationFormDto;
    fn emit(&self, input: (ReservationFormDto, FormRequest)) -> Self::To {
        let (saved, input) = input;
        ReservationFormDto {
            name: input.name.unwrap_or(saved.name),
            phone: input.phone.unwrap_or(saved.phone),
            email: input.email.unwrap_or(saved.email),
            license: input.license.unwrap_or(saved.license),
            start_date: input.start_date.unwrap_or(saved.start_date),
            days: input.days.unwrap_or(saved.days),
        }
    }
}

#[cfg(test)]
mod test {
    use application::transfer::ReservationFormDto;

    use crate::controller::Intake;

    use super::{FormRequest, ReservationTransformer};

    #[test]
    fn given_fields_overlay_saved_draft() {
        let saved = ReservationFormDto {
            name: "Jane Doe".to_string(),
            days: "3".to_string(),
            ..Default::default()
        };
        let form = ReservationTransformer.emit((
            saved,
            FormRequest {
                days: Some("5".to_string()),
                email: Some(String::new()),
                ..Default::default()
            },
        ));
        assert_eq!(form.name, "Jane Doe");
        assert_eq!(form.days, "5");
        assert_eq!(form.email, "");
    }
}
