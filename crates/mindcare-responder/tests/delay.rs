use std::time::Duration;

use mindcare_core::models::Persona;
use mindcare_responder::ReplyScheduler;
use tokio_util::sync::CancellationToken;

#[tokio::test(start_paused = true)]
async fn reply_arrives_after_the_typing_delay() {
    let scheduler = ReplyScheduler::for_persona(Persona::Peer);
    let started = tokio::time::Instant::now();

    let delivered = scheduler
        .deliver("hello".to_string(), CancellationToken::new())
        .await;

    assert_eq!(delivered.as_deref(), Some("hello"));
    assert_eq!(started.elapsed(), Duration::from_secs(1));
}

#[tokio::test(start_paused = true)]
async fn therapist_delay_is_longer_than_peer() {
    assert!(
        ReplyScheduler::for_persona(Persona::Therapist).delay()
            > ReplyScheduler::for_persona(Persona::Peer).delay()
    );
}

#[tokio::test(start_paused = true)]
async fn cancelled_token_suppresses_delivery() {
    let scheduler = ReplyScheduler::new(Duration::from_secs(5));
    let cancel = CancellationToken::new();
    cancel.cancel();

    let delivered = scheduler.deliver("hello".to_string(), cancel).await;
    assert_eq!(delivered, None);
}

#[tokio::test(start_paused = true)]
async fn uncancelled_pending_reply_always_fires() {
    let scheduler = ReplyScheduler::new(Duration::from_secs(5));
    let cancel = CancellationToken::new();

    let pending = tokio::spawn({
        let scheduler = scheduler;
        let cancel = cancel.clone();
        async move { scheduler.deliver("hello".to_string(), cancel).await }
    });

    tokio::time::advance(Duration::from_secs(5)).await;
    assert_eq!(pending.await.expect("join").as_deref(), Some("hello"));
}
