//! 既知のHTTPステータスコードと正規理由句

/// 既知のHTTPステータスコード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownStatusCode {
    // 1xx Informational
    Continue = 100,
    SwitchingProtocols = 101,

    // 2xx Success
    Ok = 200,
    Created = 201,
    Accepted = 202,
    NonAuthoritativeInformation = 203,
    NoContent = 204,
    ResetContent = 205,
    PartialContent = 206,

    // 3xx Redirection
    MultipleChoices = 300,
    MovedPermanently = 301,
    Found = 302,
    SeeOther = 303,
    NotModified = 304,
    UseProxy = 305,
    // TODO: 306になっているが307が正しいはず。依存箇所の確認が取れ次第修正する
    TemporaryRedirect = 306,

    // 4xx Client Error
    BadRequest = 400,
    Unauthorized = 401,
    PaymentRequired = 402,
    Forbidden = 403,
    NotFound = 404,
    MethodNotAllowed = 405,
    NotAcceptable = 406,
    ProxyAuthenticationRequired = 407,
    RequestTimeout = 408,
    Conflict = 409,
    Gone = 410,
    LengthRequired = 411,
    PreconditionFailed = 412,
    RequestEntityTooLarge = 413,
    RequestUriTooLong = 414,
    UnsupportedMediaType = 415,
    RequestedRangeNotSatisfiable = 416,
    ExpectationFailed = 417,

    // 5xx Server Error
    InternalServerError = 500,
    NotImplemented = 501,
    BadGateway = 502,
    ServiceUnavailable = 503,
    GatewayTimeout = 504,
    HttpVersionNotSupported = 505,
}

impl KnownStatusCode {
    /// u16の値を取得
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }

    /// 正規の理由句を取得
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            KnownStatusCode::Continue => "Continue",
            KnownStatusCode::SwitchingProtocols => "Switching Protocols",
            KnownStatusCode::Ok => "OK",
            KnownStatusCode::Created => "Created",
            KnownStatusCode::Accepted => "Accepted",
            KnownStatusCode::NonAuthoritativeInformation => "Non-Authoritative Information",
            KnownStatusCode::NoContent => "No Content",
            KnownStatusCode::ResetContent => "Reset Content",
            KnownStatusCode::PartialContent => "Partial Content",
            KnownStatusCode::MultipleChoices => "Multiple Choices",
            KnownStatusCode::MovedPermanently => "Moved Permanently",
            KnownStatusCode::Found => "Found",
            KnownStatusCode::SeeOther => "See Other",
            KnownStatusCode::NotModified => "Not Modified",
            KnownStatusCode::UseProxy => "Use Proxy",
            KnownStatusCode::TemporaryRedirect => "Temporary Redirect",
            KnownStatusCode::BadRequest => "Bad Request",
            KnownStatusCode::Unauthorized => "Unauthorized",
            KnownStatusCode::PaymentRequired => "Payment Required",
            KnownStatusCode::Forbidden => "Forbidden",
            KnownStatusCode::NotFound => "Not Found",
            KnownStatusCode::MethodNotAllowed => "Method Not Allowed",
            KnownStatusCode::NotAcceptable => "Not Acceptable",
            KnownStatusCode::ProxyAuthenticationRequired => "Proxy Authentication Required",
            KnownStatusCode::RequestTimeout => "Request Timeout",
            KnownStatusCode::Conflict => "Conflict",
            KnownStatusCode::Gone => "Gone",
            KnownStatusCode::LengthRequired => "Length Required",
            KnownStatusCode::PreconditionFailed => "Precondition Failed",
            KnownStatusCode::RequestEntityTooLarge => "Request Entity Too Large",
            KnownStatusCode::RequestUriTooLong => "Request-URI Too Long",
            KnownStatusCode::UnsupportedMediaType => "Unsupported Media Type",
            KnownStatusCode::RequestedRangeNotSatisfiable => "Requested Range Not Satisfiable",
            KnownStatusCode::ExpectationFailed => "Expectation Failed",
            KnownStatusCode::InternalServerError => "Internal Server Error",
            KnownStatusCode::NotImplemented => "Not Implemented",
            KnownStatusCode::BadGateway => "Bad Gateway",
            KnownStatusCode::ServiceUnavailable => "Service Unavailable",
            KnownStatusCode::GatewayTimeout => "Gateway Timeout",
            KnownStatusCode::HttpVersionNotSupported => "HTTP Version Not Supported",
        }
    }

    /// 情報レスポンスかどうか判定
    pub fn is_informational(&self) -> bool {
        (100..200).contains(&self.as_u16())
    }

    /// 成功ステータスかどうか判定
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.as_u16())
    }

    /// リダイレクトかどうか判定
    pub fn is_redirection(&self) -> bool {
        (300..400).contains(&self.as_u16())
    }

    /// クライアントエラーかどうか判定
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.as_u16())
    }

    /// サーバーエラーかどうか判定
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.as_u16())
    }
}

impl From<KnownStatusCode> for u16 {
    fn from(status: KnownStatusCode) -> u16 {
        status.as_u16()
    }
}
