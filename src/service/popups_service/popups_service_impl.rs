use super::{Popup, PopupsService, PopupsServiceConfig};
use crate::{
    dto::NotificationRecord,
    shell::{NavigationTarget, UiShell},
};
use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

pub struct PopupsServiceImpl {
    config: PopupsServiceConfig,
    shell: Arc<dyn UiShell>,

    queue: Mutex<VecDeque<NotificationRecord>>,
}

impl PopupsServiceImpl {
    pub fn new(config: PopupsServiceConfig, shell: Arc<dyn UiShell>) -> Self {
        let queue = VecDeque::new();
        let queue = Mutex::new(queue);

        Self {
            config,
            shell,
            queue,
        }
    }

    fn lock_queue(&self) -> MutexGuard<'_, VecDeque<NotificationRecord>> {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PopupsService for PopupsServiceImpl {
    fn push(&self, record: NotificationRecord) {
        let mut queue = self.lock_queue();

        if queue.len() >= self.config.max_queued {
            if let Some(evicted) = queue.pop_front() {
                tracing::debug!(id = %evicted.id, "popup queue full, evicting oldest");
            }
        }

        tracing::info!(id = %record.id, kind = %record.kind, "queueing blocking popup");
        queue.push_back(record);
    }

    fn dismiss(&self, id: &str) {
        self.lock_queue().retain(|record| record.id != id);
    }

    fn view(&self, id: &str) {
        let record = {
            let mut queue = self.lock_queue();
            let position = queue.iter().position(|record| record.id == id);
            position.and_then(|position| queue.remove(position))
        };

        let Some(record) = record else {
            return;
        };

        let target = record
            .payload
            .order_id
            .map(NavigationTarget::Order)
            .or_else(|| record.payload.enquiry_id.map(NavigationTarget::Enquiry));

        match target {
            Some(target) => self.shell.navigate(target),
            None => tracing::debug!(id, "popup carries no detail view to navigate to"),
        }
    }

    fn active(&self) -> Vec<Popup> {
        let queue = self.lock_queue();
        let last = queue.len().saturating_sub(1);

        queue
            .iter()
            .enumerate()
            .map(|(i, record)| Popup {
                record: record.clone(),
                is_topmost: i == last && !queue.is_empty(),
            })
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        dto::{NotificationPayload, NotificationType},
        shell::MockUiShell,
    };
    use time::OffsetDateTime;

    #[test]
    fn push_three_only_last_is_topmost() {
        let service = create_service(MockUiShell::new());

        service.push(create_record("a", None, None));
        service.push(create_record("b", None, None));
        service.push(create_record("c", None, None));

        let popups = service.active();

        assert_eq!(popups.len(), 3);
        assert!(!popups[0].is_topmost);
        assert!(!popups[1].is_topmost);
        assert!(popups[2].is_topmost);
        assert_eq!(popups[2].record.id, "c");
    }

    #[test]
    fn dismiss_non_topmost_keeps_backdrop_owner() {
        let service = create_service(MockUiShell::new());
        service.push(create_record("a", None, None));
        service.push(create_record("b", None, None));
        service.push(create_record("c", None, None));

        service.dismiss("b");

        let popups = service.active();
        assert_eq!(popups.len(), 2);
        assert!(popups[1].is_topmost);
        assert_eq!(popups[1].record.id, "c");
    }

    #[test]
    fn dismiss_topmost_promotes_previous() {
        let service = create_service(MockUiShell::new());
        service.push(create_record("a", None, None));
        service.push(create_record("b", None, None));

        service.dismiss("b");

        let popups = service.active();
        assert_eq!(popups.len(), 1);
        assert!(popups[0].is_topmost);
        assert_eq!(popups[0].record.id, "a");
    }

    #[test]
    fn push_beyond_capacity_evicts_oldest() {
        let service = create_service(MockUiShell::new());

        for i in 0..7 {
            service.push(create_record(&format!("popup-{i}"), None, None));
        }

        let popups = service.active();
        assert_eq!(popups.len(), 5);
        assert_eq!(popups[0].record.id, "popup-2");
        assert_eq!(popups[4].record.id, "popup-6");
    }

    #[test]
    fn view_order_navigates_and_dismisses() {
        let mut shell = MockUiShell::new();
        shell
            .expect_navigate()
            .withf(|target| matches!(target, NavigationTarget::Order(id) if id == "o-1"))
            .once()
            .returning(|_| ());

        let service = create_service(shell);
        service.push(create_record("a", Some("o-1"), None));

        service.view("a");

        assert!(service.active().is_empty());
    }

    #[test]
    fn view_enquiry_navigates_to_enquiry() {
        let mut shell = MockUiShell::new();
        shell
            .expect_navigate()
            .withf(|target| matches!(target, NavigationTarget::Enquiry(id) if id == "e-9"))
            .once()
            .returning(|_| ());

        let service = create_service(shell);
        service.push(create_record("a", None, Some("e-9")));

        service.view("a");
    }

    #[test]
    fn view_without_correlation_id_only_dismisses() {
        let mut shell = MockUiShell::new();
        shell.expect_navigate().never();

        let service = create_service(shell);
        service.push(create_record("a", None, None));

        service.view("a");

        assert!(service.active().is_empty());
    }

    #[test]
    fn view_unknown_id_is_noop() {
        let mut shell = MockUiShell::new();
        shell.expect_navigate().never();

        let service = create_service(shell);
        service.push(create_record("a", Some("o-1"), None));

        service.view("no-such-popup");

        assert_eq!(service.active().len(), 1);
    }

    fn create_service(shell: MockUiShell) -> PopupsServiceImpl {
        PopupsServiceImpl::new(PopupsServiceConfig::default(), Arc::new(shell))
    }

    fn create_record(
        id: &str,
        order_id: Option<&str>,
        enquiry_id: Option<&str>,
    ) -> NotificationRecord {
        NotificationRecord {
            id: id.to_string(),
            kind: NotificationType::NewOrder,
            payload: NotificationPayload {
                order_id: order_id.map(str::to_string),
                enquiry_id: enquiry_id.map(str::to_string),
                ..Default::default()
            },
            timestamp: OffsetDateTime::now_utc(),
            read: false,
        }
    }
}
