//! HTTPリクエストメッセージ

use http::Uri;

use crate::error::Error;
use crate::header::HeaderCollection;
use crate::validation::{validate_host, validate_request_target};

const HOST_HEADER: &str = "Host";

/// HTTP/1.1リクエストのスタートラインとヘッダーを表す不変値
///
/// スタートラインの各フィールドは構築後に変更できない。ヘッダーは
/// `headers_mut()`経由で変更できるが、`Host`は保護キーとして常に
/// ホストと同じ値を保持する。
#[derive(Debug, Clone)]
pub struct RequestMessage {
    method: String,
    host: String,
    request_target: String,
    headers: HeaderCollection,
}

impl RequestMessage {
    /// 絶対URIからリクエストを作成する
    ///
    /// URIのホスト（明示ポートがあれば`host:port`）をHostに、
    /// パス+クエリをorigin形式のターゲットとして採用する。
    pub fn new(method: impl Into<String>, absolute_uri: &str) -> Result<Self, Error> {
        let uri: Uri = absolute_uri.parse().map_err(|e: http::uri::InvalidUri| {
            Error::InvalidRequestTarget(format!(
                "'{}' is not a well-formed URI: {}",
                absolute_uri, e
            ))
        })?;

        match uri.scheme_str() {
            Some(s) if s.eq_ignore_ascii_case("http") || s.eq_ignore_ascii_case("https") => {}
            Some(s) => {
                return Err(Error::InvalidRequestTarget(format!(
                    "unsupported scheme '{}'",
                    s
                )))
            }
            None => {
                return Err(Error::InvalidRequestTarget(format!(
                    "'{}' is not an absolute URI",
                    absolute_uri
                )))
            }
        }

        let host_name = uri.host().ok_or_else(|| {
            Error::InvalidRequestTarget(format!("'{}' has no host component", absolute_uri))
        })?;
        let host = match uri.port_u16() {
            Some(port) => format!("{}:{}", host_name, port),
            None => host_name.to_string(),
        };

        let request_target = match uri.path_and_query() {
            Some(pq) if !pq.as_str().is_empty() => pq.as_str().to_string(),
            _ => "/".to_string(),
        };

        Self::with_host(method, host, request_target)
    }

    /// ホストとリクエストターゲットを個別に指定してリクエストを作成する
    ///
    /// 検証はホスト文法、ターゲット形式、（絶対URIターゲットの場合）
    /// ホスト/ポートの整合の順に行い、最初の違反で中断する。
    pub fn with_host(
        method: impl Into<String>,
        host: impl Into<String>,
        request_target: impl Into<String>,
    ) -> Result<Self, Error> {
        let method = method.into();
        let host = host.into();
        let request_target = request_target.into();

        // メソッドは慣習として大文字を期待するが、ハードエラーにはしない。
        // 警告を出してからassertする（debugビルドでもログが残るように）
        if method.bytes().any(|b| b.is_ascii_lowercase()) {
            log::warn!("HTTP method '{}' is not upper-case", method);
            debug_assert!(false, "HTTP method should be upper-case: {}", method);
        }

        validate_host(&host)?;
        validate_request_target(&request_target, &host)?;

        let mut headers = HeaderCollection::new([HOST_HEADER]);
        headers.set_unchecked(HOST_HEADER, host.clone());

        Ok(Self {
            method,
            host,
            request_target,
            headers,
        })
    }

    /// メソッドを取得
    pub fn method(&self) -> &str {
        &self.method
    }

    /// ホスト（`hostname`または`hostname:port`）を取得
    pub fn host(&self) -> &str {
        &self.host
    }

    /// リクエストターゲットを取得
    pub fn request_target(&self) -> &str {
        &self.request_target
    }

    /// ヘッダーコレクションの不変参照を取得
    pub fn headers(&self) -> &HeaderCollection {
        &self.headers
    }

    /// ヘッダーコレクションの可変参照を取得
    ///
    /// `Host`は保護されているため、この参照経由でも変更できない。
    pub fn headers_mut(&mut self) -> &mut HeaderCollection {
        &mut self.headers
    }
}
