use airco_leads::client::{ChannelKind, LeadChannel};
use airco_leads::error::{ChannelError, ChannelResult};
use airco_leads::models::ContactRecord;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Barrier;

/// What a mock channel does when a record is submitted.
#[allow(dead_code)]
pub enum Behavior {
    /// Accept immediately.
    Succeed,
    /// Reject with a status error.
    Fail(u16),
    /// Panic inside the channel task.
    Panic,
    /// Accept after sleeping.
    SucceedAfter(Duration),
    /// Wait at the barrier, then accept.
    Rendezvous(Arc<Barrier>),
}

/// Mock delivery channel for testing.
///
/// Counts submissions and keeps every record it received so tests can assert
/// on call counts and payloads.
#[allow(dead_code)]
pub struct MockChannel {
    kind: ChannelKind,
    behavior: Behavior,
    calls: AtomicUsize,
    received: Mutex<Vec<ContactRecord>>,
}

#[allow(dead_code)]
impl MockChannel {
    pub fn new(kind: ChannelKind, behavior: Behavior) -> Arc<Self> {
        Arc::new(Self {
            kind,
            behavior,
            calls: AtomicUsize::new(0),
            received: Mutex::new(Vec::new()),
        })
    }

    pub fn email(behavior: Behavior) -> Arc<Self> {
        Self::new(ChannelKind::Email, behavior)
    }

    pub fn webhook(behavior: Behavior) -> Arc<Self> {
        Self::new(ChannelKind::Webhook, behavior)
    }

    /// Get the number of times submit was called.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Records received so far, in arrival order.
    pub fn received(&self) -> Vec<ContactRecord> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl LeadChannel for MockChannel {
    fn kind(&self) -> ChannelKind {
        self.kind
    }

    async fn submit(&self, record: Arc<ContactRecord>) -> ChannelResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.received.lock().unwrap().push((*record).clone());

        match &self.behavior {
            Behavior::Succeed => Ok(()),
            Behavior::Fail(status) => Err(ChannelError::Status {
                status: *status,
                body: "mock failure".to_string(),
            }),
            Behavior::Panic => panic!("mock {} channel exploded", self.kind),
            Behavior::SucceedAfter(delay) => {
                tokio::time::sleep(*delay).await;
                Ok(())
            }
            Behavior::Rendezvous(barrier) => {
                barrier.wait().await;
                Ok(())
            }
        }
    }
}
