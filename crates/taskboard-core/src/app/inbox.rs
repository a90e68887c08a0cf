//! In-memory inbox for the contact form.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::info;
use validator::Validate;

use crate::domain::{ContactError, ContactMessage, ReceivedMessage};
use crate::ports::{Clock, IdGenerator};

pub struct ContactInbox {
    messages: Mutex<Vec<ReceivedMessage>>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

impl ContactInbox {
    pub fn new(clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
            clock,
            ids,
        }
    }

    /// Validate and store. Fields are kept as typed except for trimming.
    pub async fn submit(
        &self,
        message: ContactMessage,
    ) -> Result<ReceivedMessage, ContactError> {
        message.validate().map_err(ContactError::Validation)?;

        let received = ReceivedMessage {
            id: self.ids.generate_message_id(),
            received_on: self.clock.today(),
            message: ContactMessage {
                name: message.name.trim().to_string(),
                email: message.email.trim().to_string(),
                subject: message.subject.trim().to_string(),
                message: message.message.trim().to_string(),
            },
        };
        self.messages.lock().await.insert(0, received.clone());
        info!(
            message_id = %received.id,
            subject = %received.message.subject,
            "contact message received"
        );
        Ok(received)
    }

    /// Newest first.
    pub async fn messages(&self) -> Vec<ReceivedMessage> {
        self.messages.lock().await.clone()
    }
}
