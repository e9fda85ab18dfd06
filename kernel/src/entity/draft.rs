mod validation;

pub use self::validation::*;
use destructure::Destructure;
use vodca::References;

/// Raw contents of the reservation form, exactly as typed.
#[derive(Debug, Clone, Default, Eq, PartialEq, References, Destructure)]
pub struct Draft {
    name: String,
    phone: String,
    email: String,
    license: String,
    start_date: String,
    days: String,
}

impl Draft {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        license: impl Into<String>,
        start_date: impl Into<String>,
        days: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            license: license.into(),
            start_date: start_date.into(),
            days: days.into(),
        }
    }

    pub fn is_blank(&self) -> bool {
        FormField::ALL.iter().all(|field| self.value(*field).is_empty())
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Phone => &self.phone,
            FormField::Email => &self.email,
            FormField::License => &self.license,
            FormField::StartDate => &self.start_date,
            FormField::Days => &self.days,
        }
    }

    /// Day count used for the live price panel. Any positive integer counts,
    /// even one the validator would reject.
    pub fn requested_days(&self) -> Option<u32> {
        self.days.trim().parse::<u32>().ok().filter(|days| *days > 0)
    }
}

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum FormField {
    Name,
    Phone,
    Email,
    License,
    StartDate,
    Days,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Name,
        FormField::Phone,
        FormField::Email,
        FormField::License,
        FormField::StartDate,
        FormField::Days,
    ];

    /// Key used for this field in the persisted draft.
    pub fn key(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Phone => "phone",
            FormField::Email => "email",
            FormField::License => "license",
            FormField::StartDate => "startDate",
            FormField::Days => "days",
        }
    }
}
