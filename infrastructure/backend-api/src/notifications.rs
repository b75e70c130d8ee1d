use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;

use business::domain::errors::GatewayError;
use business::domain::notification::gateway::{NotificationGateway, NotificationPage};
use business::domain::notification::model::{Notification, NotificationKind};
use business::domain::notification::read_state::{self, RawReadState};

use crate::client::ApiClient;
use crate::error::{expect_success, read_json};

/// Inbox payload. The read flag arrives under two names and three value
/// encodings depending on the endpoint; both fields are captured raw and
/// normalized by the domain, never trusted individually.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NotificationDto {
    id: String,
    #[serde(default)]
    user_id: String,
    message: String,
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    is_read: Option<bool>,
    #[serde(default)]
    read: Option<serde_json::Value>,
    created_at: DateTime<Utc>,
    #[serde(default)]
    additional_data: Option<serde_json::Value>,
}

impl From<NotificationDto> for Notification {
    fn from(dto: NotificationDto) -> Self {
        let read = read_state::is_read(&RawReadState {
            is_read: dto.is_read,
            read: dto.read,
        });
        Notification {
            id: dto.id,
            user_id: dto.user_id,
            message: dto.message,
            kind: dto
                .kind
                .as_deref()
                .unwrap_or("SYSTEM")
                .parse::<NotificationKind>()
                .unwrap_or(NotificationKind::System),
            read,
            created_at: dto.created_at,
            additional_data: dto.additional_data,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NotificationPageDto {
    items: Vec<NotificationDto>,
    page: u32,
    total_pages: u32,
    total: u64,
}

#[derive(Debug, Deserialize)]
struct UnreadCountDto {
    count: u64,
}

pub struct NotificationGatewayHttp {
    api: ApiClient,
}

impl NotificationGatewayHttp {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl NotificationGateway for NotificationGatewayHttp {
    async fn list(&self, page: u32, page_size: u32) -> Result<NotificationPage, GatewayError> {
        let response = self
            .api
            .client
            .get(self.api.url("/notifications"))
            .header(AUTHORIZATION, self.api.auth_header())
            .query(&[("page", page), ("size", page_size)])
            .send()
            .await;

        let dto: NotificationPageDto = read_json(response).await?;
        Ok(NotificationPage {
            items: dto.items.into_iter().map(Notification::from).collect(),
            page: dto.page,
            total_pages: dto.total_pages,
            total: dto.total,
        })
    }

    async fn recent(&self, limit: u32) -> Result<Vec<Notification>, GatewayError> {
        let response = self
            .api
            .client
            .get(self.api.url("/notifications/recent"))
            .header(AUTHORIZATION, self.api.auth_header())
            .query(&[("limit", limit)])
            .send()
            .await;

        let dtos: Vec<NotificationDto> = read_json(response).await?;
        Ok(dtos.into_iter().map(Notification::from).collect())
    }

    async fn unread_count(&self) -> Result<u64, GatewayError> {
        let response = self
            .api
            .client
            .get(self.api.url("/notifications/unread-count"))
            .header(AUTHORIZATION, self.api.auth_header())
            .send()
            .await;

        let dto: UnreadCountDto = read_json(response).await?;
        Ok(dto.count)
    }

    async fn mark_as_read(&self, id: &str) -> Result<(), GatewayError> {
        let response = self
            .api
            .client
            .put(self.api.url(&format!("/notifications/{id}/read")))
            .header(AUTHORIZATION, self.api.auth_header())
            .send()
            .await;

        expect_success(response).await
    }

    async fn mark_all_as_read(&self) -> Result<(), GatewayError> {
        let response = self
            .api
            .client
            .put(self.api.url("/notifications/read-all"))
            .header(AUTHORIZATION, self.api.auth_header())
            .send()
            .await;

        expect_success(response).await
    }

    async fn delete(&self, id: &str) -> Result<(), GatewayError> {
        let response = self
            .api
            .client
            .delete(self.api.url(&format!("/notifications/{id}")))
            .header(AUTHORIZATION, self.api.auth_header())
            .send()
            .await;

        expect_success(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(raw: &str) -> Notification {
        let dto: NotificationDto = serde_json::from_str(raw).unwrap();
        dto.into()
    }

    #[test]
    fn should_normalize_every_legacy_read_encoding() {
        let read_payloads = [
            r#"{"id":"n1","message":"m","isRead":true,"createdAt":"2025-01-01T00:00:00Z"}"#,
            r#"{"id":"n2","message":"m","read":1,"createdAt":"2025-01-01T00:00:00Z"}"#,
            r#"{"id":"n3","message":"m","read":"1","createdAt":"2025-01-01T00:00:00Z"}"#,
            r#"{"id":"n4","message":"m","read":"true","createdAt":"2025-01-01T00:00:00Z"}"#,
        ];

        for payload in read_payloads {
            assert!(decode(payload).read, "expected read for {payload}");
        }
    }

    #[test]
    fn should_leave_other_encodings_unread() {
        let unread_payloads = [
            r#"{"id":"n1","message":"m","createdAt":"2025-01-01T00:00:00Z"}"#,
            r#"{"id":"n2","message":"m","isRead":false,"createdAt":"2025-01-01T00:00:00Z"}"#,
            r#"{"id":"n3","message":"m","read":0,"createdAt":"2025-01-01T00:00:00Z"}"#,
            r#"{"id":"n4","message":"m","read":"0","createdAt":"2025-01-01T00:00:00Z"}"#,
        ];

        for payload in unread_payloads {
            assert!(!decode(payload).read, "expected unread for {payload}");
        }
    }

    #[test]
    fn should_decode_inbox_page() {
        let dto: NotificationPageDto = serde_json::from_str(
            r#"{"items":[{"id":"n1","userId":"u1","type":"ORDER","message":"m",
                "isRead":true,"createdAt":"2025-01-01T00:00:00Z"}],
                "page":0,"totalPages":3,"total":25}"#,
        )
        .unwrap();

        assert_eq!(dto.items.len(), 1);
        assert_eq!(dto.total_pages, 3);
    }

    #[test]
    fn should_default_unknown_kind_to_other() {
        let notification = decode(
            r#"{"id":"n1","message":"m","type":"FLASH_SALE","createdAt":"2025-01-01T00:00:00Z"}"#,
        );

        assert_eq!(
            notification.kind,
            NotificationKind::Other("FLASH_SALE".to_string())
        );
    }
}
