//! Message, reply, session, schedule, bulk-session, and chat resource
//! methods.

use crate::client::{TextMagicClient, TextMagicError, csv, flag};
use crate::domain::{
    BulkSession, Chat, ChatMessage, DeleteResult, LinkResult, Message, MessagePrice, Page, Phone,
    Reply, Schedule, SendMessageOptions, Session,
};
use crate::transport::RequestDescriptor;

/// Parameter set shared by `POST messages` and `GET messages/price`.
fn sending_params(options: &SendMessageOptions) -> Vec<(String, String)> {
    let mut params = Vec::<(String, String)>::new();

    if let Some(text) = options.text.as_deref() {
        params.push(("text".to_owned(), text.to_owned()));
    }
    if let Some(template_id) = options.template_id {
        params.push(("templateId".to_owned(), template_id.to_string()));
    }
    if let Some(sending_time) = options.sending_time {
        params.push(("sendingTime".to_owned(), sending_time.timestamp().to_string()));
    }
    if !options.contact_ids.is_empty() {
        params.push(("contacts".to_owned(), csv(&options.contact_ids)));
    }
    if !options.list_ids.is_empty() {
        params.push(("lists".to_owned(), csv(&options.list_ids)));
    }
    if !options.phones.is_empty() {
        let phones = options
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(",");
        params.push(("phones".to_owned(), phones));
    }
    if options.cut_extra {
        params.push(("cutExtra".to_owned(), flag(true).to_owned()));
    }
    if let Some(parts_count) = options.parts_count {
        params.push(("partsCount".to_owned(), parts_count.to_string()));
    }
    if let Some(reference_id) = options.reference_id.as_deref() {
        params.push(("referenceId".to_owned(), reference_id.to_owned()));
    }
    if let Some(from) = options.from.as_deref() {
        params.push(("from".to_owned(), from.to_owned()));
    }
    if let Some(rrule) = options.rrule.as_deref() {
        params.push(("rrule".to_owned(), rrule.to_owned()));
    }
    if options.dummy {
        params.push(("dummy".to_owned(), flag(true).to_owned()));
    }

    params
}

impl TextMagicClient {
    /// Get a single outbound message.
    pub async fn get_message(&self, id: i32) -> Result<Message, TextMagicError> {
        self.execute(RequestDescriptor::get("messages/{id}").path("id", id))
            .await
    }

    /// Get all outbound messages.
    pub async fn get_messages(
        &self,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Page<Message>, TextMagicError> {
        self.execute(
            RequestDescriptor::get("messages")
                .query_opt("page", page)
                .query_opt("limit", limit),
        )
        .await
    }

    /// Delete a single outbound message.
    pub async fn delete_message(&self, id: i32) -> Result<DeleteResult, TextMagicError> {
        self.execute(RequestDescriptor::delete("messages/{id}").path("id", id))
            .await
    }

    /// Send a new message.
    pub async fn send_message(
        &self,
        options: &SendMessageOptions,
    ) -> Result<LinkResult, TextMagicError> {
        let mut descriptor = RequestDescriptor::post("messages");
        for (name, value) in sending_params(options) {
            descriptor = descriptor.body(&name, value);
        }
        self.execute(descriptor).await
    }

    /// Check the price of a prospective sending without sending it.
    pub async fn get_price(
        &self,
        options: &SendMessageOptions,
    ) -> Result<MessagePrice, TextMagicError> {
        let mut descriptor = RequestDescriptor::get("messages/price");
        for (name, value) in sending_params(options) {
            descriptor = descriptor.query(&name, value);
        }
        self.execute(descriptor).await
    }

    /// Get a single inbound reply.
    pub async fn get_reply(&self, id: i32) -> Result<Reply, TextMagicError> {
        self.execute(RequestDescriptor::get("replies/{id}").path("id", id))
            .await
    }

    /// Get all inbound replies.
    pub async fn get_replies(
        &self,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Page<Reply>, TextMagicError> {
        self.execute(
            RequestDescriptor::get("replies")
                .query_opt("page", page)
                .query_opt("limit", limit),
        )
        .await
    }

    /// Delete a single inbound reply.
    pub async fn delete_reply(&self, id: i32) -> Result<DeleteResult, TextMagicError> {
        self.execute(RequestDescriptor::delete("replies/{id}").path("id", id))
            .await
    }

    /// Get a single sending session.
    pub async fn get_session(&self, id: i32) -> Result<Session, TextMagicError> {
        self.execute(RequestDescriptor::get("sessions/{id}").path("id", id))
            .await
    }

    /// Get all sending sessions.
    pub async fn get_sessions(
        &self,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Page<Session>, TextMagicError> {
        self.execute(
            RequestDescriptor::get("sessions")
                .query_opt("page", page)
                .query_opt("limit", limit),
        )
        .await
    }

    /// Delete a single sending session.
    pub async fn delete_session(&self, id: i32) -> Result<DeleteResult, TextMagicError> {
        self.execute(RequestDescriptor::delete("sessions/{id}").path("id", id))
            .await
    }

    /// Fetch messages that were sent during a session.
    pub async fn get_session_messages(
        &self,
        id: i32,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Page<Message>, TextMagicError> {
        self.execute(
            RequestDescriptor::get("sessions/{id}/messages")
                .path("id", id)
                .query_opt("page", page)
                .query_opt("limit", limit),
        )
        .await
    }

    /// Get a single scheduled sending.
    pub async fn get_schedule(&self, id: i32) -> Result<Schedule, TextMagicError> {
        self.execute(RequestDescriptor::get("schedules/{id}").path("id", id))
            .await
    }

    /// Get all scheduled sendings.
    pub async fn get_schedules(
        &self,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Page<Schedule>, TextMagicError> {
        self.execute(
            RequestDescriptor::get("schedules")
                .query_opt("page", page)
                .query_opt("limit", limit),
        )
        .await
    }

    /// Delete a single scheduled sending.
    pub async fn delete_schedule(&self, id: i32) -> Result<DeleteResult, TextMagicError> {
        self.execute(RequestDescriptor::delete("schedules/{id}").path("id", id))
            .await
    }

    /// Get a single bulk sending session.
    pub async fn get_bulk_session(&self, id: i32) -> Result<BulkSession, TextMagicError> {
        self.execute(RequestDescriptor::get("bulks/{id}").path("id", id))
            .await
    }

    /// Get all bulk sending sessions.
    pub async fn get_bulk_sessions(
        &self,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Page<BulkSession>, TextMagicError> {
        self.execute(
            RequestDescriptor::get("bulks")
                .query_opt("page", page)
                .query_opt("limit", limit),
        )
        .await
    }

    /// Get all chats.
    pub async fn get_chats(
        &self,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Page<Chat>, TextMagicError> {
        self.execute(
            RequestDescriptor::get("chats")
                .query_opt("page", page)
                .query_opt("limit", limit),
        )
        .await
    }

    /// Fetch messages exchanged with a single phone number.
    pub async fn get_chat_messages(
        &self,
        phone: &Phone,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Page<ChatMessage>, TextMagicError> {
        self.execute(
            RequestDescriptor::get("chats/{phone}")
                .path("phone", phone.as_str())
                .query_opt("page", page)
                .query_opt("limit", limit),
        )
        .await
    }
}
