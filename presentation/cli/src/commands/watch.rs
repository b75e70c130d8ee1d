use std::time::Duration;

use crate::render::table;
use crate::setup::dependency_injection::DependencyContainer;

/// Live inbox view: one refresh up front, then the hub's poll loop and
/// invalidation bus keep the snapshot current until Ctrl-C.
pub async fn run(container: &DependencyContainer, poll_period: Duration) -> anyhow::Result<()> {
    let _tasks = container.hub.spawn_background(poll_period);
    if container.hub.refresh().await.is_err() {
        println!("Backend unreachable, showing nothing until the next poll");
    }
    let mut signals = container.hub.bus().subscribe();

    println!("Watching inbox (Ctrl-C to stop)");
    loop {
        render(container).await;
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            _ = signals.recv() => {}
            _ = tokio::time::sleep(poll_period) => {}
        }
    }
    Ok(())
}

async fn render(container: &DependencyContainer) {
    let snapshot = container.hub.snapshot().await;
    let rows = snapshot
        .recent
        .iter()
        .map(|notification| {
            vec![
                if notification.read { "" } else { "*" }.to_string(),
                notification.message.clone(),
                notification.created_at.format("%H:%M").to_string(),
            ]
        })
        .collect();
    println!("{}", table(&["", "MESSAGE", "AT"], rows));
    println!("{} unread", snapshot.unread_count);
}
