//! スタートライン各要素の検証関数群

use http::Uri;

use crate::error::Error;

/// ホスト文字列（`hostname` または `hostname:port`）を検証する
///
/// 先頭は英数字、以降は英数字・`-`・`.`のみを許可する。
/// `:` は一度だけ、ポート区切りとして現れてよい。
/// ポートは省略可能だが、あれば16ビット符号なし整数として解釈できること。
pub fn validate_host(host: &str) -> Result<(), Error> {
    let (name, port) = match host.split_once(':') {
        Some((name, port)) => (name, Some(port)),
        None => (host, None),
    };

    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphanumeric() => {}
        Some(c) => {
            return Err(Error::InvalidHost(format!(
                "hostname must not start with '{}'",
                c
            )))
        }
        None => return Err(Error::InvalidHost("hostname is empty".to_string())),
    }
    if let Some(c) = chars.find(|c| !c.is_ascii_alphanumeric() && *c != '-' && *c != '.') {
        return Err(Error::InvalidHost(format!(
            "hostname contains invalid character '{}'",
            c
        )));
    }

    if let Some(port) = port {
        if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidHost(format!("invalid port '{}'", port)));
        }
        if port.parse::<u16>().is_err() {
            return Err(Error::InvalidHost(format!(
                "port '{}' is out of range",
                port
            )));
        }
    }

    Ok(())
}

/// 検証済みホスト文字列をホスト名とポートに分解する
pub(crate) fn split_host_port(host: &str) -> (&str, Option<u16>) {
    match host.split_once(':') {
        Some((name, port)) => (name, port.parse::<u16>().ok()),
        None => (host, None),
    }
}

/// 理由句に禁止制御文字が含まれていないか検証する
pub fn validate_reason_phrase(phrase: &str) -> Result<(), Error> {
    // TODO: 行終端のCR(0x0D)/LF(0x0A)ではなく0x13/0x10を拒否している。
    // 既存実装との互換を保つため維持中。確認が取れ次第CR/LFに改める
    if phrase.chars().any(|c| c == '\u{13}' || c == '\u{10}') {
        return Err(Error::InvalidReasonPhrase(
            "reason phrase contains a line terminator control character".to_string(),
        ));
    }
    Ok(())
}

/// リクエストターゲットを検証する
///
/// 許可する形式は次の3つのみ:
/// - `*`（アスタリスク形式）
/// - スキームが`http`/`https`の絶対URI（ホスト・実効ポートが`host`と一致すること）
/// - `/`で始まる絶対パス（origin形式、クエリ付き可）
///
/// CONNECT用のauthority形式（`host:port`のみ）はサポートしない。
pub fn validate_request_target(target: &str, host: &str) -> Result<(), Error> {
    if target == "*" {
        return Ok(());
    }
    if target.is_empty() {
        return Err(Error::InvalidRequestTarget(
            "request target is empty".to_string(),
        ));
    }

    let uri: Uri = target.parse().map_err(|e: http::uri::InvalidUri| {
        Error::InvalidRequestTarget(format!("'{}' is not a well-formed URI: {}", target, e))
    })?;

    if target.starts_with('/') {
        // network-path参照（`//host/path`）はパスとしてパースに通るが、
        // ホスト名を含むためorigin形式としては認めない
        if target.starts_with("//") || uri.scheme().is_some() || uri.authority().is_some() {
            return Err(Error::InvalidRequestTarget(format!(
                "'{}' is a network-path reference, not an absolute path",
                target
            )));
        }
        return Ok(());
    }

    let scheme = match uri.scheme_str() {
        Some(s) => s,
        None => {
            // authority形式（CONNECT用）やスキームなしの相対形式はここに落ちる
            return Err(Error::InvalidRequestTarget(format!(
                "'{}' is neither '*', an absolute http(s) URI, nor an absolute path",
                target
            )));
        }
    };

    let default_port = if scheme.eq_ignore_ascii_case("http") {
        80
    } else if scheme.eq_ignore_ascii_case("https") {
        443
    } else {
        return Err(Error::InvalidRequestTarget(format!(
            "unsupported scheme '{}'",
            scheme
        )));
    };

    let uri_host = uri.host().ok_or_else(|| {
        Error::InvalidRequestTarget(format!("'{}' has no host component", target))
    })?;

    let (host_name, host_port) = split_host_port(host);
    let uri_port = uri.port_u16().unwrap_or(default_port);
    let host_port = host_port.unwrap_or(default_port);

    if !uri_host.eq_ignore_ascii_case(host_name) || uri_port != host_port {
        return Err(Error::TargetHostMismatch(format!(
            "target '{}:{}' does not match host '{}:{}'",
            uri_host, uri_port, host_name, host_port
        )));
    }

    Ok(())
}
