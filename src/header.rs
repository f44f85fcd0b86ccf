//! 大文字小文字を区別しないヘッダーキーとヘッダーコレクション

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::Error;

/// 大文字小文字を区別せずに比較・ハッシュされるヘッダーキー
///
/// 等価性とハッシュはASCII小文字に正規化した射影で計算するが、
/// 表示用には与えられた綴りをそのまま保持する。
#[derive(Debug, Clone)]
pub struct HeaderKey {
    text: String,
}

impl HeaderKey {
    /// 新しいヘッダーキーを作成
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// 元の綴りを取得
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl PartialEq for HeaderKey {
    fn eq(&self, other: &Self) -> bool {
        self.text.eq_ignore_ascii_case(&other.text)
    }
}

impl Eq for HeaderKey {}

impl Hash for HeaderKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // eqと整合させるため、小文字化したバイト列でハッシュする
        for b in self.text.bytes() {
            state.write_u8(b.to_ascii_lowercase());
        }
    }
}

impl fmt::Display for HeaderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for HeaderKey {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for HeaderKey {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// HTTPヘッダーのコレクション
///
/// キーは大文字小文字を区別せずに照合する。構築時に指定された
/// 保護キーは公開APIからの追加・上書き・削除を拒否する。
/// 内部で同期は行わないため、スレッド間で共有する場合は
/// 呼び出し側で排他制御すること（`&mut`を要求するAPI設計により、
/// 同一スレッド内ではイテレーション中の変更はコンパイル時に防がれる）。
#[derive(Debug, Clone)]
pub struct HeaderCollection {
    entries: HashMap<HeaderKey, String>,
    protected: HashSet<HeaderKey>,
}

impl Default for HeaderCollection {
    /// 保護キーなしの空コレクションを作成
    fn default() -> Self {
        Self::new(std::iter::empty::<String>())
    }
}

impl HeaderCollection {
    /// 空のコレクションを作成する。保護キー集合はインスタンスの生存期間中固定
    pub fn new<I, K>(protected_keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self {
            entries: HashMap::new(),
            protected: protected_keys
                .into_iter()
                .map(|k| HeaderKey::new(k))
                .collect(),
        }
    }

    /// キーに対応する値を取得（大文字小文字を区別しない）
    pub fn get(&self, key: &str) -> Result<&str, Error> {
        self.entries
            .get(&HeaderKey::new(key))
            .map(String::as_str)
            .ok_or_else(|| Error::HeaderNotFound(key.to_string()))
    }

    /// キーに値を設定する（既存なら上書き）
    ///
    /// 保護キーに対しては`HeaderReadOnly`を返す。
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Result<(), Error> {
        let key = HeaderKey::new(key);
        if self.protected.contains(&key) {
            return Err(Error::HeaderReadOnly(key.to_string()));
        }
        self.entries.insert(key, value.into());
        Ok(())
    }

    /// キーに値を追加する（既存キーは拒否）
    ///
    /// 保護キーなら`HeaderReadOnly`、同一キーが既にあれば`DuplicateHeader`を返す。
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) -> Result<(), Error> {
        let key = HeaderKey::new(key);
        if self.protected.contains(&key) {
            return Err(Error::HeaderReadOnly(key.to_string()));
        }
        if self.entries.contains_key(&key) {
            return Err(Error::DuplicateHeader(key.to_string()));
        }
        self.entries.insert(key, value.into());
        Ok(())
    }

    /// キーのエントリを削除する（存在しないキーの削除は成功扱い）
    pub fn remove(&mut self, key: &str) -> Result<(), Error> {
        let key = HeaderKey::new(key);
        if self.protected.contains(&key) {
            return Err(Error::HeaderReadOnly(key.to_string()));
        }
        self.entries.remove(&key);
        Ok(())
    }

    /// キーが存在するか判定（大文字小文字を区別しない）
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(&HeaderKey::new(key))
    }

    /// キーが保護されているか判定
    pub fn is_protected(&self, key: &str) -> bool {
        self.protected.contains(&HeaderKey::new(key))
    }

    /// エントリ数を取得
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// エントリが空かどうか判定
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// (キー, 値) ペアのイテレータを取得。順序は保証しない
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// 保護チェックを迂回して値を設定する
    ///
    /// メッセージのコンストラクタが保護キー（Host等）を初期投入するための
    /// 内部専用API。クレート外には公開しない。
    pub(crate) fn set_unchecked(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(HeaderKey::new(key), value.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_key_case_insensitive_eq() {
        assert_eq!(HeaderKey::new("Content-Type"), HeaderKey::new("content-type"));
        assert_eq!(HeaderKey::new("HOST"), HeaderKey::new("host"));
        assert_ne!(HeaderKey::new("X-Foo"), HeaderKey::new("X-Bar"));
        // 表示は元の綴りを保つ
        assert_eq!(HeaderKey::new("X-Foo").as_str(), "X-Foo");
    }

    #[test]
    fn test_header_key_hash_consistency() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let hash = |k: &HeaderKey| {
            let mut h = DefaultHasher::new();
            k.hash(&mut h);
            h.finish()
        };
        assert_eq!(hash(&HeaderKey::new("X-Foo")), hash(&HeaderKey::new("x-FOO")));
    }

    #[test]
    fn test_set_and_get_case_insensitive() {
        let mut headers = HeaderCollection::new(Vec::<String>::new());
        headers.set("X-Foo", "1").unwrap();

        assert_eq!(headers.get("x-foo").unwrap(), "1");
        assert_eq!(headers.get("X-FOO").unwrap(), "1");
        assert!(headers.contains_key("X-fOo"));
    }

    #[test]
    fn test_get_missing_key() {
        let headers = HeaderCollection::new(Vec::<String>::new());
        assert!(matches!(headers.get("X-Foo"), Err(Error::HeaderNotFound(_))));
    }

    #[test]
    fn test_set_overwrites() {
        let mut headers = HeaderCollection::new(Vec::<String>::new());
        headers.set("X-Custom", "a").unwrap();
        headers.set("X-Custom", "b").unwrap();

        assert_eq!(headers.get("X-Custom").unwrap(), "b");
        assert_eq!(headers.len(), 1);
    }

    #[test]
    fn test_add_duplicate_rejected() {
        let mut headers = HeaderCollection::new(Vec::<String>::new());
        headers.add("X-Custom", "a").unwrap();

        // 大文字小文字違いでも重複扱い
        assert!(matches!(
            headers.add("x-custom", "b"),
            Err(Error::DuplicateHeader(_))
        ));
        assert_eq!(headers.get("X-Custom").unwrap(), "a");
    }

    #[test]
    fn test_protected_key_rejects_mutation() {
        let mut headers = HeaderCollection::new(["Host"]);
        headers.set_unchecked("Host", "example.com");

        assert!(matches!(headers.set("Host", "x"), Err(Error::HeaderReadOnly(_))));
        assert!(matches!(headers.set("host", "x"), Err(Error::HeaderReadOnly(_))));
        assert!(matches!(headers.add("HOST", "x"), Err(Error::HeaderReadOnly(_))));
        assert!(matches!(headers.remove("Host"), Err(Error::HeaderReadOnly(_))));

        // 値は変化していない
        assert_eq!(headers.get("Host").unwrap(), "example.com");
        assert!(headers.is_protected("hOsT"));
    }

    #[test]
    fn test_remove_absent_is_ok() {
        let mut headers = HeaderCollection::new(Vec::<String>::new());
        assert!(headers.remove("X-Missing").is_ok());
    }

    #[test]
    fn test_remove_existing() {
        let mut headers = HeaderCollection::new(Vec::<String>::new());
        headers.set("X-Foo", "1").unwrap();
        headers.remove("x-foo").unwrap();

        assert!(!headers.contains_key("X-Foo"));
        assert!(headers.is_empty());
    }

    #[test]
    fn test_iteration() {
        let mut headers = HeaderCollection::new(Vec::<String>::new());
        headers.set("A", "1").unwrap();
        headers.set("B", "2").unwrap();

        let mut pairs: Vec<(String, String)> = headers
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        pairs.sort();

        assert_eq!(
            pairs,
            vec![("A".to_string(), "1".to_string()), ("B".to_string(), "2".to_string())]
        );

        // イテレータは再取得できる
        assert_eq!(headers.iter().count(), 2);
    }

    #[test]
    fn test_protected_set_fixed_at_construction() {
        let headers = HeaderCollection::new(["Host", "Content-Length"]);
        assert!(headers.is_protected("host"));
        assert!(headers.is_protected("content-length"));
        assert!(!headers.is_protected("X-Foo"));
        // 保護キーはエントリとしては存在しない
        assert!(headers.is_empty());
    }
}
