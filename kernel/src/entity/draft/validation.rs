use once_cell::sync::Lazy;
use regex::Regex;
use time::macros::format_description;
use time::Date;
use vodca::References;

use crate::entity::{Customer, Draft, FormField, RentalDays};

const MIN_NAME_LEN: usize = 3;
const MIN_LICENSE_LEN: usize = 5;
pub const MAX_RENTAL_DAYS: u32 = 30;

static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[0-9]{10}|[0-9]{3}-[0-9]{3}-[0-9]{4})$").expect("phone pattern is valid")
});
static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

#[derive(Debug, Clone, Eq, PartialEq, References)]
pub struct FieldIssue {
    field: FormField,
    message: &'static str,
}

impl FieldIssue {
    pub fn new(field: FormField, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Per-field validation outcome. Blocks submission but is never raised as an error.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct FormReport(Vec<FieldIssue>);

impl FormReport {
    pub fn is_valid(&self) -> bool {
        self.0.is_empty()
    }

    pub fn issues(&self) -> &[FieldIssue] {
        &self.0
    }

    pub fn issue(&self, field: FormField) -> Option<&FieldIssue> {
        self.0.iter().find(|issue| issue.field == field)
    }
}

/// A form that passed every field validator.
#[derive(Debug, Clone, Eq, PartialEq, References)]
pub struct ReservationRequest {
    customer: Customer,
    start_date: Date,
    days: RentalDays,
}

impl Draft {
    pub fn validate(&self, today: Date) -> Result<ReservationRequest, FormReport> {
        let mut issues = Vec::new();
        let mut check = |field: FormField, outcome: Result<(), &'static str>| {
            if let Err(message) = outcome {
                issues.push(FieldIssue::new(field, message));
            }
        };

        check(FormField::Name, validate_name(self.name()));
        check(FormField::Phone, validate_phone(self.phone()));
        check(FormField::Email, validate_email(self.email()));
        check(FormField::License, validate_license(self.license()));
        let start_date = validate_start_date(self.start_date(), today);
        check(FormField::StartDate, start_date.map(|_| ()));
        let days = validate_days(self.days());
        check(FormField::Days, days.map(|_| ()));

        match (start_date, days) {
            (Ok(start_date), Ok(days)) if issues.is_empty() => Ok(ReservationRequest {
                customer: Customer::new(
                    self.name().clone(),
                    self.phone().clone(),
                    self.email().clone(),
                    self.license().clone(),
                ),
                start_date,
                days,
            }),
            _ => Err(FormReport(issues)),
        }
    }
}

fn validate_name(name: &str) -> Result<(), &'static str> {
    if name.is_empty() {
        return Err("Name is required");
    }
    if name.chars().count() < MIN_NAME_LEN {
        return Err("Name must be at least 3 characters long");
    }
    Ok(())
}

fn validate_phone(phone: &str) -> Result<(), &'static str> {
    if phone.is_empty() {
        return Err("Phone number is required");
    }
    if !PHONE.is_match(phone) {
        return Err("Phone number must be 10 digits");
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.is_empty() {
        return Err("Email is required");
    }
    if !EMAIL.is_match(email) {
        return Err("Invalid email format");
    }
    Ok(())
}

fn validate_license(license: &str) -> Result<(), &'static str> {
    if license.is_empty() {
        return Err("Driver's license number is required");
    }
    if license.chars().count() < MIN_LICENSE_LEN {
        return Err("License number must be at least 5 characters long");
    }
    Ok(())
}

/// Accepts `YYYY-MM-DD` and the date picker's `MM/DD/YYYY`.
pub fn parse_start_date(value: &str) -> Option<Date> {
    let value = value.trim();
    Date::parse(value, format_description!("[year]-[month]-[day]"))
        .or_else(|_| Date::parse(value, format_description!("[month]/[day]/[year]")))
        .ok()
}

fn validate_start_date(value: &str, today: Date) -> Result<Date, &'static str> {
    if value.is_empty() {
        return Err("Start date is required");
    }
    let date = parse_start_date(value).ok_or("Please enter a valid date")?;
    if date < today {
        return Err("Start date cannot be in the past");
    }
    Ok(date)
}

fn validate_days(value: &str) -> Result<RentalDays, &'static str> {
    value
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|days| (1..=MAX_RENTAL_DAYS).contains(days))
        .map(RentalDays::new)
        .ok_or("Number of days must be between 1 and 30.")
}
