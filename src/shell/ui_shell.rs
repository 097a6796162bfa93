use std::time::Duration;

///
/// Downstream collaborator rendering passive UI effects.
///
#[cfg_attr(test, mockall::automock)]
pub trait UiShell: Send + Sync {
    fn toast(&self, toast: Toast);

    /// One-time prompt asking the user to interact so sound can play
    fn sound_prompt(&self);

    fn navigate(&self, target: NavigationTarget);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub message: String,
    /// `None` keeps the toast until manually dismissed
    pub duration: Option<Duration>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationTarget {
    Order(String),
    Enquiry(String),
}
