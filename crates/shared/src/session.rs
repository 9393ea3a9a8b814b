/// Identity of whoever is driving the current operation.
///
/// Every persistence operation takes a `&Session`; with no user attached the
/// operation is skipped instead of failing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    user_id: Option<String>,
}

impl Session {
    pub fn new(user_id: impl Into<Option<String>>) -> Self {
        let user_id = user_id
            .into()
            .map(|id| id.trim().to_owned())
            .filter(|id| !id.is_empty());

        Self { user_id }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn user(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }

    pub fn require_user(&self) -> crate::Result<&str> {
        match self.user() {
            Some(id) => Ok(id),
            _ => crate::bail!("User not found in session"),
        }
    }
}
