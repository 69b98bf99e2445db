use crate::{
    error::{delivery::DeliveryError, fetch::FetchError},
    model::{
        attachment::Attachment,
        deletion::{DeletionEvent, MessageAuthor},
        destination::DestinationMap,
        notification::NotificationRecord,
    },
    service::{
        deletion_log::{
            classify::ContentTypePolicy, warned::WarnedGuilds, DeletionLogService,
            DeletionOutcome,
        },
        delivery::LogChannelSender,
        fetch::AttachmentFetcher,
    },
};
use chrono::{TimeZone, Utc};
use serenity::async_trait;
use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
};

mod handle_deletion;

const GUILD_ID: u64 = 100;
const UNCONFIGURED_GUILD_ID: u64 = 200;
const LOG_CHANNEL_ID: u64 = 900;
const SOURCE_CHANNEL_ID: u64 = 300;

/// Fetcher returning the URL's bytes, or a 404 for URLs marked as failing.
#[derive(Default)]
struct StubFetcher {
    failing: HashSet<String>,
    calls: Mutex<Vec<String>>,
}

impl StubFetcher {
    fn failing(urls: &[&str]) -> Self {
        Self {
            failing: urls.iter().map(|url| url.to_string()).collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AttachmentFetcher for StubFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        self.calls.lock().unwrap().push(url.to_string());

        if self.failing.contains(url) {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: 404,
            });
        }

        Ok(url.as_bytes().to_vec())
    }
}

/// A notification captured by `RecordingSender`.
#[derive(Debug, Clone)]
struct SentNotification {
    channel_id: u64,
    notification: NotificationRecord,
    file: Vec<u8>,
    filename: String,
}

/// Sender recording every delivery, optionally failing all of them.
#[derive(Default)]
struct RecordingSender {
    unavailable: bool,
    sent: Mutex<Vec<SentNotification>>,
    attempts: Mutex<usize>,
}

impl RecordingSender {
    fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Default::default()
        }
    }

    fn sent(&self) -> Vec<SentNotification> {
        self.sent.lock().unwrap().clone()
    }

    fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

#[async_trait]
impl LogChannelSender for RecordingSender {
    async fn send(
        &self,
        channel_id: u64,
        notification: &NotificationRecord,
        file: Vec<u8>,
        filename: &str,
    ) -> Result<(), DeliveryError> {
        *self.attempts.lock().unwrap() += 1;

        if self.unavailable {
            return Err(DeliveryError::ChannelUnavailable {
                channel_id,
                reason: "Unknown Channel".to_string(),
            });
        }

        self.sent.lock().unwrap().push(SentNotification {
            channel_id,
            notification: notification.clone(),
            file,
            filename: filename.to_string(),
        });

        Ok(())
    }
}

/// Service wired to the doubles with `GUILD_ID` mapped to `LOG_CHANNEL_ID`.
struct TestService {
    service: DeletionLogService,
    fetcher: Arc<StubFetcher>,
    sender: Arc<RecordingSender>,
    warned_guilds: WarnedGuilds,
}

fn test_service(
    fetcher: StubFetcher,
    sender: RecordingSender,
    policy: ContentTypePolicy,
) -> TestService {
    let fetcher = Arc::new(fetcher);
    let sender = Arc::new(sender);
    let warned_guilds = WarnedGuilds::new();
    let destinations: DestinationMap = [(GUILD_ID, LOG_CHANNEL_ID)].into_iter().collect();

    let service = DeletionLogService::new(
        Arc::new(destinations),
        warned_guilds.clone(),
        fetcher.clone(),
        sender.clone(),
        policy,
    );

    TestService {
        service,
        fetcher,
        sender,
        warned_guilds,
    }
}

fn default_service() -> TestService {
    test_service(
        StubFetcher::default(),
        RecordingSender::default(),
        ContentTypePolicy::Lenient,
    )
}

fn attachment(url: &str, name: Option<&str>, content_type: Option<&str>) -> Attachment {
    Attachment {
        url: url.to_string(),
        name: name.map(str::to_string),
        content_type: content_type.map(str::to_string),
    }
}

fn deletion_event(guild_id: u64, attachments: Vec<Attachment>) -> DeletionEvent {
    DeletionEvent {
        message_id: 555,
        created_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        author: MessageAuthor {
            id: 42,
            tag: "alice".to_string(),
            avatar_url: "https://cdn.discordapp.com/embed/avatars/0.png".to_string(),
        },
        channel_id: SOURCE_CHANNEL_ID,
        guild_id,
        attachments,
    }
}
