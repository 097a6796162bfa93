use super::{NavigationTarget, Toast, UiShell};

///
/// Terminal rendition of the dashboard shell: toasts and prompts
/// become structured log lines.
///
pub struct ConsoleShell;

impl UiShell for ConsoleShell {
    fn toast(&self, toast: Toast) {
        tracing::info!(
            title = %toast.title,
            message = %toast.message,
            auto_hide_ms = toast.duration.map(|d| d.as_millis() as u64),
            "toast"
        );
    }

    fn sound_prompt(&self) {
        tracing::warn!("sound alerts are unavailable until the terminal audio device accepts output");
    }

    fn navigate(&self, target: NavigationTarget) {
        match target {
            NavigationTarget::Order(id) => tracing::info!(order_id = %id, "navigate to order"),
            NavigationTarget::Enquiry(id) => {
                tracing::info!(enquiry_id = %id, "navigate to enquiry")
            }
        }
    }
}
