use reqwest::header::HeaderMap;

/// Focusable elements of the login form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
    Submit,
}

impl LoginField {
    pub fn next(self) -> Self {
        match self {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Submit,
            LoginField::Submit => LoginField::Email,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            LoginField::Email => LoginField::Submit,
            LoginField::Password => LoginField::Email,
            LoginField::Submit => LoginField::Password,
        }
    }
}

/// State of the mounted Login screen.
///
/// Dropped on navigation, which discards any typed credentials.
#[derive(Debug, Default)]
pub struct LoginState {
    pub email: String,
    pub password: String,
    pub focus: LoginField,
    /// A credential submission is in flight.
    pub loading: bool,
    /// A focus-triggered session probe is in flight.
    pub checking: bool,
    /// Headers of the last accepted login. Kept, not read.
    pub session_headers: Option<HeaderMap>,
}

impl LoginState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inputs and the submit button are disabled while busy.
    pub fn is_busy(&self) -> bool {
        self.loading || self.checking
    }

    /// Returns the text buffer of the focused field, if a field has focus.
    pub fn focused_value_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            LoginField::Email => Some(&mut self.email),
            LoginField::Password => Some(&mut self.password),
            LoginField::Submit => None,
        }
    }
}
