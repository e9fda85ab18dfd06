use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References)]
pub struct Customer {
    name: String,
    phone: String,
    email: String,
    license: String,
}

impl Customer {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        license: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            license: license.into(),
        }
    }
}
