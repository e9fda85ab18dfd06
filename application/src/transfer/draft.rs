use kernel::prelude::entity::{DestructDraft, Draft};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservationFormDto {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub license: String,
    pub start_date: String,
    pub days: String,
}

impl From<Draft> for ReservationFormDto {
    fn from(value: Draft) -> Self {
        let DestructDraft {
            name,
            phone,
            email,
            license,
            start_date,
            days,
        } = value.into_destruct();
        Self {
            name,
            phone,
            email,
            license,
            start_date,
            days,
        }
    }
}

impl From<ReservationFormDto> for Draft {
    fn from(value: ReservationFormDto) -> Self {
        Draft::new(
            value.name,
            value.phone,
            value.email,
            value.license,
            value.start_date,
            value.days,
        )
    }
}
