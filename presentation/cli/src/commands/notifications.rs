use business::domain::notification::errors::NotificationError;
use business::domain::notification::use_cases::delete::DeleteNotificationParams;
use business::domain::notification::use_cases::get_inbox::GetInboxParams;
use business::domain::notification::use_cases::mark_as_read::MarkAsReadParams;

use crate::cli::NotificationsAction;
use crate::render::table;
use crate::setup::dependency_injection::DependencyContainer;

pub async fn run(
    container: &DependencyContainer,
    action: Option<NotificationsAction>,
) -> anyhow::Result<()> {
    match action.unwrap_or(NotificationsAction::List { page: 0, size: 20 }) {
        NotificationsAction::List { page, size } => list(container, page, size).await,
        NotificationsAction::MarkRead { id } => {
            match container
                .mark_as_read
                .execute(MarkAsReadParams { id })
                .await
            {
                Ok(()) => println!("Marked as read"),
                Err(err) => println!("{}", display(err, "notification.mark_read_failed")),
            }
            Ok(())
        }
        NotificationsAction::MarkAllRead => {
            match container.mark_all_as_read.execute().await {
                Ok(()) => println!("Inbox marked as read"),
                Err(err) => println!("{}", display(err, "notification.mark_all_failed")),
            }
            Ok(())
        }
        NotificationsAction::Delete { id } => {
            match container
                .delete_notification
                .execute(DeleteNotificationParams { id })
                .await
            {
                Ok(()) => println!("Notification deleted"),
                Err(err) => println!("{}", display(err, "notification.delete_failed")),
            }
            Ok(())
        }
    }
}

fn display(err: NotificationError, fallback: &str) -> String {
    match err {
        NotificationError::Gateway(inner) => inner.user_message(fallback),
        other => other.to_string(),
    }
}

async fn list(container: &DependencyContainer, page: u32, size: u32) -> anyhow::Result<()> {
    match container
        .get_inbox
        .execute(GetInboxParams {
            page,
            page_size: size,
        })
        .await
    {
        Ok(inbox) => {
            let rows = inbox
                .items
                .iter()
                .map(|notification| {
                    vec![
                        notification.id.clone(),
                        if notification.read { "" } else { "*" }.to_string(),
                        notification.kind.to_string(),
                        notification.message.clone(),
                        notification.created_at.format("%Y-%m-%d %H:%M").to_string(),
                    ]
                })
                .collect();
            println!("{}", table(&["ID", "", "KIND", "MESSAGE", "AT"], rows));
            println!(
                "Page {}/{} — {} notification(s)",
                inbox.page + 1,
                inbox.total_pages.max(1),
                inbox.total
            );
        }
        Err(err) => println!("{}", display(err, "notification.list_failed")),
    }
    Ok(())
}
