use super::*;

/// Tests handling a deletion without attachments.
///
/// Verifies that nothing is looked up, fetched, warned about or sent, even for a
/// guild without a configured log channel.
///
/// Expected: NoAttachments with no side effects
#[tokio::test]
async fn ignores_message_without_attachments() {
    let test = default_service();

    let outcome = test
        .service
        .handle_deletion(deletion_event(UNCONFIGURED_GUILD_ID, vec![]))
        .await;

    assert_eq!(outcome, DeletionOutcome::NoAttachments);
    assert!(!test.warned_guilds.contains(UNCONFIGURED_GUILD_ID).await);
    assert!(test.fetcher.calls().is_empty());
    assert_eq!(test.sender.attempts(), 0);
}

/// Tests the once-per-guild warning for unconfigured guilds.
///
/// Verifies that the first deletion in an unconfigured guild warns, an identical
/// second deletion stays silent, and nothing is ever fetched or delivered.
///
/// Expected: NoDestination { warned: true } then NoDestination { warned: false }
#[tokio::test]
async fn warns_once_for_unconfigured_guild() {
    let test = default_service();
    let event = deletion_event(
        UNCONFIGURED_GUILD_ID,
        vec![attachment("https://cdn/a.png", Some("a.png"), Some("image/png"))],
    );

    let first = test.service.handle_deletion(event.clone()).await;
    let second = test.service.handle_deletion(event).await;

    assert_eq!(first, DeletionOutcome::NoDestination { warned: true });
    assert_eq!(second, DeletionOutcome::NoDestination { warned: false });
    assert!(test.warned_guilds.contains(UNCONFIGURED_GUILD_ID).await);
    assert!(test.fetcher.calls().is_empty());
    assert_eq!(test.sender.attempts(), 0);
}

/// Tests that the warning state is tracked per guild.
///
/// Expected: each unconfigured guild warns once on its own first deletion
#[tokio::test]
async fn warns_each_unconfigured_guild_separately() {
    let test = default_service();
    let files = vec![attachment("https://cdn/a.txt", Some("a.txt"), Some("text/plain"))];

    let first = test
        .service
        .handle_deletion(deletion_event(UNCONFIGURED_GUILD_ID, files.clone()))
        .await;
    let other = test
        .service
        .handle_deletion(deletion_event(UNCONFIGURED_GUILD_ID + 1, files))
        .await;

    assert_eq!(first, DeletionOutcome::NoDestination { warned: true });
    assert_eq!(other, DeletionOutcome::NoDestination { warned: true });
}

/// Tests a mixed deletion in a configured guild.
///
/// Two unnamed PNGs and a named PDF, with the PDF delivered between the images.
/// Verifies images are logged first in their relative order, the PDF last with a
/// download link, and that the fetched bytes are re-uploaded unchanged.
///
/// Expected: Processed { delivered: 3, failed: 0 } with image #1, image #2, report.pdf
#[tokio::test]
async fn logs_images_before_files_in_order() {
    let test = default_service();
    let event = deletion_event(
        GUILD_ID,
        vec![
            attachment("https://cdn/1", None, Some("image/png")),
            attachment("https://cdn/report", Some("report.pdf"), Some("application/pdf")),
            attachment("https://cdn/2", None, Some("image/png")),
        ],
    );

    let outcome = test.service.handle_deletion(event).await;

    assert_eq!(
        outcome,
        DeletionOutcome::Processed {
            delivered: 3,
            failed: 0
        }
    );
    assert_eq!(
        test.fetcher.calls(),
        vec!["https://cdn/1", "https://cdn/2", "https://cdn/report"]
    );

    let sent = test.sender.sent();
    let filenames: Vec<&str> = sent.iter().map(|s| s.filename.as_str()).collect();
    assert_eq!(
        filenames,
        vec!["deleted_image_1.png", "deleted_image_2.png", "report.pdf"]
    );
    assert!(sent.iter().all(|s| s.channel_id == LOG_CHANNEL_ID));

    assert_eq!(
        sent[0].notification.description,
        "Image 1 of 2 deleted in <#300>."
    );
    assert_eq!(
        sent[1].notification.description,
        "Image 2 of 2 deleted in <#300>."
    );
    assert_eq!(sent[2].notification.description, "File deleted in <#300>.");

    assert!(sent[0].notification.download_link.is_none());
    assert!(sent[1].notification.download_link.is_none());
    assert_eq!(
        sent[2].notification.download_link.as_deref(),
        Some("[report.pdf](https://cdn/report)")
    );

    assert_eq!(sent[0].file, b"https://cdn/1".to_vec());
    assert_eq!(sent[2].notification.footer, "Message ID: 555");
    assert_eq!(
        sent[2].notification.timestamp,
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    );
}

/// Tests that a failed fetch does not abort sibling attachments.
///
/// Expected: Processed { delivered: 1, failed: 1 } with the second attachment sent
#[tokio::test]
async fn continues_after_fetch_failure() {
    let test = test_service(
        StubFetcher::failing(&["https://cdn/broken.png"]),
        RecordingSender::default(),
        ContentTypePolicy::Lenient,
    );
    let event = deletion_event(
        GUILD_ID,
        vec![
            attachment("https://cdn/broken.png", Some("broken.png"), Some("image/png")),
            attachment("https://cdn/ok.png", Some("ok.png"), Some("image/png")),
        ],
    );

    let outcome = test.service.handle_deletion(event).await;

    assert_eq!(
        outcome,
        DeletionOutcome::Processed {
            delivered: 1,
            failed: 1
        }
    );
    assert_eq!(test.fetcher.calls().len(), 2);

    let sent = test.sender.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].filename, "ok.png");
    // Numbering still reflects the full category
    assert_eq!(
        sent[0].notification.description,
        "Image 2 of 2 deleted in <#300>."
    );
}

/// Tests that delivery failures are counted and never retried.
///
/// Expected: Processed { delivered: 0, failed: 2 } with exactly one attempt each
#[tokio::test]
async fn reports_unavailable_log_channel() {
    let test = test_service(
        StubFetcher::default(),
        RecordingSender::unavailable(),
        ContentTypePolicy::Lenient,
    );
    let event = deletion_event(
        GUILD_ID,
        vec![
            attachment("https://cdn/a.png", Some("a.png"), Some("image/png")),
            attachment("https://cdn/b.zip", Some("b.zip"), Some("application/zip")),
        ],
    );

    let outcome = test.service.handle_deletion(event).await;

    assert_eq!(
        outcome,
        DeletionOutcome::Processed {
            delivered: 0,
            failed: 2
        }
    );
    assert_eq!(test.sender.attempts(), 2);
}

/// Tests the lenient policy with a missing content type.
///
/// Expected: the attachment is logged as a generic file named `unknown_file`
#[tokio::test]
async fn lenient_policy_logs_untyped_attachment_as_file() {
    let test = default_service();
    let event = deletion_event(GUILD_ID, vec![attachment("https://cdn/x", None, None)]);

    let outcome = test.service.handle_deletion(event).await;

    assert_eq!(
        outcome,
        DeletionOutcome::Processed {
            delivered: 1,
            failed: 0
        }
    );
    let sent = test.sender.sent();
    assert_eq!(sent[0].filename, "unknown_file");
    assert_eq!(sent[0].notification.description, "File deleted in <#300>.");
}

/// Tests the strict policy with a missing content type.
///
/// Verifies that only the untyped attachment is skipped and its valid sibling is
/// still fetched and delivered.
///
/// Expected: Processed { delivered: 1, failed: 1 } with only a.png sent
#[tokio::test]
async fn strict_policy_skips_only_untyped_attachment() {
    let test = test_service(
        StubFetcher::default(),
        RecordingSender::default(),
        ContentTypePolicy::Strict,
    );
    let event = deletion_event(
        GUILD_ID,
        vec![
            attachment("https://cdn/x", None, None),
            attachment("https://cdn/a.png", Some("a.png"), Some("image/png")),
        ],
    );

    let outcome = test.service.handle_deletion(event).await;

    assert_eq!(
        outcome,
        DeletionOutcome::Processed {
            delivered: 1,
            failed: 1
        }
    );
    assert_eq!(test.fetcher.calls(), vec!["https://cdn/a.png"]);

    let sent = test.sender.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].filename, "a.png");
    assert_eq!(sent[0].notification.description, "Image deleted in <#300>.");
}
