//! httpmsg: HTTP/1.1メッセージのスタートラインとヘッダーを
//! 検証付きの不変値オブジェクトとして表現するライブラリ
//!
//! ソケットやトランスポートには依存しない。ワイヤ形式への
//! シリアライズと、ワイヤ形式からのパースは外部コンポーネントの責務。
//! すべての検証はコンストラクタで行われ、構築後はスタートラインの
//! フィールドは不変、ヘッダーのみ（保護キーを除き）変更可能。

pub mod error;
pub mod header;
pub mod request;
pub mod response;
pub mod status;
pub mod validation;

pub use error::Error;
pub use header::{HeaderCollection, HeaderKey};
pub use request::RequestMessage;
pub use response::{HttpVersion, ResponseMessage, StatusLine};
pub use status::KnownStatusCode;
