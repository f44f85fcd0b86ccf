//! HTTPレスポンスメッセージ

use std::fmt;

use crate::error::Error;
use crate::header::HeaderCollection;
use crate::status::KnownStatusCode;
use crate::validation::validate_reason_phrase;

/// HTTPバージョン（メジャー/マイナーの組）
///
/// 1.1を超えるバージョンは作成できない。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpVersion {
    major: u8,
    minor: u8,
}

impl HttpVersion {
    /// 新しいHTTPバージョンを作成する（上限は1.1）
    pub fn new(major: u8, minor: u8) -> Result<Self, Error> {
        if major > 1 || (major == 1 && minor > 1) {
            return Err(Error::InvalidHttpVersion(format!(
                "HTTP/{}.{} exceeds the supported ceiling of HTTP/1.1",
                major, minor
            )));
        }
        Ok(Self { major, minor })
    }

    /// メジャーバージョンを取得
    pub fn major(&self) -> u8 {
        self.major
    }

    /// マイナーバージョンを取得
    pub fn minor(&self) -> u8 {
        self.minor
    }
}

impl fmt::Display for HttpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP/{}.{}", self.major, self.minor)
    }
}

/// ステータスコードと理由句の組
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    code: u16,
    reason_phrase: String,
}

impl StatusLine {
    /// ステータスコードを取得
    pub fn code(&self) -> u16 {
        self.code
    }

    /// 理由句を取得
    pub fn reason_phrase(&self) -> &str {
        &self.reason_phrase
    }
}

/// HTTP/1.1レスポンスのスタートラインとヘッダーを表す不変値
///
/// スタートラインの各フィールドは構築後に変更できない。
/// ヘッダーはデフォルトでは保護キーを持たない。
#[derive(Debug, Clone)]
pub struct ResponseMessage {
    version: HttpVersion,
    status: StatusLine,
    headers: HeaderCollection,
}

impl ResponseMessage {
    /// 既知のステータスコードからレスポンスを作成する
    ///
    /// 理由句は正規の対応表から引く。
    pub fn new(major: u8, minor: u8, status: KnownStatusCode) -> Result<Self, Error> {
        Self::with_reason_phrase(major, minor, status.as_u16(), status.reason_phrase())
    }

    /// ステータスコードと理由句を明示してレスポンスを作成する
    ///
    /// 検証はHTTPバージョン、コード範囲、理由句の順に行い、
    /// 最初の違反で中断する。
    pub fn with_reason_phrase(
        major: u8,
        minor: u8,
        code: u16,
        reason_phrase: impl Into<String>,
    ) -> Result<Self, Error> {
        let version = HttpVersion::new(major, minor)?;

        if code > 999 {
            return Err(Error::InvalidStatusCode(format!(
                "status code {} exceeds 999",
                code
            )));
        }

        let reason_phrase = reason_phrase.into();
        validate_reason_phrase(&reason_phrase)?;

        Ok(Self {
            version,
            status: StatusLine { code, reason_phrase },
            headers: HeaderCollection::default(),
        })
    }

    /// HTTPバージョンを取得
    pub fn version(&self) -> HttpVersion {
        self.version
    }

    /// ステータスラインを取得
    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    /// ステータスコードを取得
    pub fn status_code(&self) -> u16 {
        self.status.code
    }

    /// 理由句を取得
    pub fn reason_phrase(&self) -> &str {
        &self.status.reason_phrase
    }

    /// ヘッダーコレクションの不変参照を取得
    pub fn headers(&self) -> &HeaderCollection {
        &self.headers
    }

    /// ヘッダーコレクションの可変参照を取得
    pub fn headers_mut(&mut self) -> &mut HeaderCollection {
        &mut self.headers
    }
}
