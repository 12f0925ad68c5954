/// Email address submitted through the waitlist form.
///
/// Only emptiness is checked: format validation is left to the browser's
/// native `type="email"` constraint, which is advisory, and the backend
/// collaborator has the final say anyway.
#[derive(Clone, Debug)]
pub struct WaitlistEmail(String);

impl WaitlistEmail {
    /// An empty submission is not an error to report, it is a no-op; the
    /// caller decides what to do with `None`.
    pub fn parse(email: String) -> Option<Self> {
        if email.is_empty() {
            return None;
        }
        Some(Self(email))
    }
}

impl AsRef<str> for WaitlistEmail {
    fn as_ref(&self) -> &str { &self.0 }
}
