//! エラー型の定義

use thiserror::Error;

/// メッセージ構築・ヘッダー操作のエラー型
#[derive(Error, Debug)]
pub enum Error {
    /// HTTPバージョンが1.1を超えている
    #[error("Invalid HTTP version: {0}")]
    InvalidHttpVersion(String),

    /// ステータスコードが範囲外
    #[error("Invalid status code: {0}")]
    InvalidStatusCode(String),

    /// 理由句に禁止文字が含まれる
    #[error("Invalid reason phrase: {0}")]
    InvalidReasonPhrase(String),

    /// ホスト文字列が文法に合わない
    #[error("Invalid host: {0}")]
    InvalidHost(String),

    /// リクエストターゲットがいずれの形式にも一致しない
    #[error("Invalid request target: {0}")]
    InvalidRequestTarget(String),

    /// 絶対URIターゲットのホスト/ポートがHostと一致しない
    #[error("Request target does not match host: {0}")]
    TargetHostMismatch(String),

    /// 保護されたヘッダーキーへの変更操作
    #[error("Header '{0}' is read-only")]
    HeaderReadOnly(String),

    /// 既存キーへのadd操作
    #[error("Header '{0}' already exists")]
    DuplicateHeader(String),

    /// 存在しないキーの参照
    #[error("Header '{0}' not found")]
    HeaderNotFound(String),
}

impl Error {
    /// 構築時検証のエラーかどうか判定（ヘッダー操作のエラーと区別する）
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidHttpVersion(_)
                | Error::InvalidStatusCode(_)
                | Error::InvalidReasonPhrase(_)
                | Error::InvalidHost(_)
                | Error::InvalidRequestTarget(_)
                | Error::TargetHostMismatch(_)
        )
    }
}
