//! Twilio Video VideoProvider 実装
//!
//! Twilio Video REST API (v1) に対する読み取り専用クライアント。
//! ルーム検索と参加者一覧の 2 つの操作のみを使用します。
//!
//! 一覧 API はページングされるため、`meta.next_page_url` を辿って全件を取得します。

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::{
    domain::{ProviderError, ProviderParticipant, ProviderRoom, RoomName, RoomSid, VideoProvider},
    infrastructure::dto::twilio::{
        Page, ParticipantPageDto, ROOM_STATUS_IN_PROGRESS, RoomPageDto, TwilioErrorDto,
    },
};

/// Default Twilio Video API host
pub const DEFAULT_BASE_URL: &str = "https://video.twilio.com";

const PAGE_SIZE: &str = "50";

/// Upper bound on pages followed for a single listing.
const MAX_PAGES: usize = 100;

/// Twilio 接続設定
#[derive(Debug, Clone)]
pub struct TwilioConfig {
    /// API のベース URL（テストではフェイクサーバーを指す）
    pub base_url: String,
    /// Basic 認証のユーザー名（Account SID または API Key SID）
    pub username: String,
    /// Basic 認証のパスワード（Auth Token または API Key Secret）
    pub password: String,
    /// 1 リクエストあたりのタイムアウト
    pub timeout: Duration,
}

/// Twilio Video VideoProvider 実装
pub struct TwilioVideoProvider {
    client: reqwest::Client,
    base_url: String,
    username: String,
    password: String,
}

impl TwilioVideoProvider {
    /// 新しい TwilioVideoProvider を作成
    pub fn new(config: TwilioConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        let base_url = config.base_url.trim_end_matches('/').to_string();

        tracing::info!(
            "Initialized Twilio video provider with base URL: {} (timeout: {:?})",
            base_url,
            config.timeout
        );

        Ok(Self {
            client,
            base_url,
            username: config.username,
            password: config.password,
        })
    }

    fn get(&self, url: &str) -> RequestBuilder {
        self.client
            .get(url)
            .basic_auth(&self.username, Some(&self.password))
    }

    /// 次ページの URL に認証情報付きのリクエストを組み立てる
    ///
    /// 認証情報を送るのはベース URL 配下の URL に限る。
    fn next_page(&self, url: &str) -> Result<RequestBuilder, ProviderError> {
        if !url.starts_with(&format!("{}/", self.base_url)) {
            return Err(ProviderError::InvalidResponse(format!(
                "next page URL outside {}: {}",
                self.base_url, url
            )));
        }
        Ok(self.get(url))
    }

    /// 最初のページから `next_page_url` を辿り、全ページの要素を連結する
    ///
    /// `MAX_PAGES` を超えても続く場合は件数が不完全になるためエラーとする。
    async fn fetch_all<P>(&self, first: RequestBuilder) -> Result<Vec<P::Item>, ProviderError>
    where
        P: Page + DeserializeOwned,
    {
        let mut items = Vec::new();
        let mut request = first;

        for _ in 0..MAX_PAGES {
            let page: P = self.send(request).await?;
            let (mut batch, next_page_url) = page.into_parts();
            items.append(&mut batch);

            match next_page_url {
                Some(url) => request = self.next_page(&url)?,
                None => return Ok(items),
            }
        }

        tracing::warn!("Stopped paging after {} pages", MAX_PAGES);
        Err(ProviderError::InvalidResponse(format!(
            "listing did not end within {MAX_PAGES} pages"
        )))
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ProviderError> {
        let response = request
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(api_error(status, &body));
        }

        serde_json::from_str(&body).map_err(|e| ProviderError::InvalidResponse(e.to_string()))
    }
}

/// 非 2xx レスポンスを ProviderError::Api に変換する
fn api_error(status: StatusCode, body: &str) -> ProviderError {
    match serde_json::from_str::<TwilioErrorDto>(body) {
        Ok(error) => ProviderError::Api {
            status: error.status.unwrap_or(status.as_u16()),
            code: error.code,
            message: error.message,
        },
        Err(_) => ProviderError::Api {
            status: status.as_u16(),
            code: None,
            message: if body.trim().is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            } else {
                body.trim().to_string()
            },
        },
    }
}

#[async_trait]
impl VideoProvider for TwilioVideoProvider {
    async fn find_in_progress_rooms(
        &self,
        name: &RoomName,
    ) -> Result<Vec<ProviderRoom>, ProviderError> {
        let url = format!("{}/v1/Rooms", self.base_url);
        let request = self.get(&url).query(&[
            ("Status", ROOM_STATUS_IN_PROGRESS),
            ("UniqueName", name.as_str()),
            ("PageSize", PAGE_SIZE),
        ]);

        let rooms = self.fetch_all::<RoomPageDto>(request).await?;

        rooms
            .into_iter()
            .map(|room| {
                RoomSid::new(room.sid)
                    .map(|sid| ProviderRoom { sid })
                    .map_err(|e| ProviderError::InvalidResponse(e.to_string()))
            })
            .collect()
    }

    async fn list_participants(
        &self,
        room: &RoomSid,
    ) -> Result<Vec<ProviderParticipant>, ProviderError> {
        let url = format!("{}/v1/Rooms/{}/Participants", self.base_url, room);
        let request = self.get(&url).query(&[("PageSize", PAGE_SIZE)]);

        let participants = self.fetch_all::<ParticipantPageDto>(request).await?;

        Ok(participants
            .into_iter()
            .map(|p| ProviderParticipant {
                sid: p.sid,
                identity: p.identity,
            })
            .collect())
    }
}
