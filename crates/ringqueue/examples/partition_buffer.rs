//! A topic partition buffer driven the way a broker drives it.
//!
//! Messages are shared as `Arc`s: the publisher keeps a handle so it can later
//! retract exactly the message it published, even if another message carries
//! identical contents.
//!
//! Run with: RUST_LOG=info cargo run --example partition_buffer

use flexi_logger::Logger;
use ringqueue::{Config, QueueError, RingQueue};
use std::sync::Arc;

#[derive(Debug, PartialEq, Eq)]
struct Message {
    id: u32,
    payload: &'static str,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _logger = Logger::try_with_env_or_str("info")?.start()?;

    let mut partition = RingQueue::<Arc<Message>>::with_config(Config::default().with_metrics());

    let published: Vec<Arc<Message>> = [
        (1, "order-created"),
        (2, "order-paid"),
        (3, "order-paid"),
        (4, "order-shipped"),
    ]
    .into_iter()
    .map(|(id, payload)| Arc::new(Message { id, payload }))
    .collect();

    for message in &published {
        partition.enqueue(Arc::clone(message))?;
    }
    if let Err(QueueError::InvalidArgument) = partition.enqueue(None) {
        log::warn!("publisher sent an empty message, dropped");
    }

    log::info!("partition holds {} messages:", partition.len());
    partition.log_contents();

    // Retract message 3 by identity; message 2 has the same payload and stays.
    let retracted = partition.delete(&published[2]);
    log::info!("retracted {:?}", retracted);

    while let Some(message) = partition.dequeue() {
        log::info!("deliver #{} {}", message.id, message.payload);
    }

    match partition.peek_head() {
        Ok(message) => log::info!("still pending: {:?}", message),
        Err(err) => log::info!("partition drained ({})", err),
    }
    log::info!("metrics: {:?}", partition.metrics());
    Ok(())
}
