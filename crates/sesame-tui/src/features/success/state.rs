/// State of the mounted Success screen.
#[derive(Debug, Default)]
pub struct SuccessState {
    /// A logout call is in flight.
    pub loading: bool,
}

impl SuccessState {
    pub fn new() -> Self {
        Self::default()
    }
}
