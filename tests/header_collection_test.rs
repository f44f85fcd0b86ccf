//! HeaderCollectionを単体で使う場合の統合テスト

use httpmsg::{Error, HeaderCollection, HeaderKey};

#[test]
fn test_standalone_collection_with_custom_protected_keys() {
    let mut headers = HeaderCollection::new(["Content-Length", "Transfer-Encoding"]);

    // 保護キーは公開APIから投入できない
    assert!(matches!(
        headers.set("Content-Length", "10"),
        Err(Error::HeaderReadOnly(_))
    ));
    assert!(matches!(
        headers.add("transfer-encoding", "chunked"),
        Err(Error::HeaderReadOnly(_))
    ));

    // それ以外のキーは自由に操作できる
    headers.set("Content-Type", "application/json").unwrap();
    headers.add("X-Request-Id", "42").unwrap();
    assert_eq!(headers.len(), 2);
}

#[test]
fn test_case_insensitive_lookup() {
    let mut headers = HeaderCollection::default();
    headers.set("X-Foo", "1").unwrap();

    assert_eq!(headers.get("x-foo").unwrap(), "1");
    assert!(headers.contains_key("X-FOO"));
    assert!(matches!(headers.get("X-Bar"), Err(Error::HeaderNotFound(_))));
}

#[test]
fn test_add_then_set_semantics() {
    let mut headers = HeaderCollection::default();

    headers.add("X-Custom", "a").unwrap();
    assert!(matches!(
        headers.add("X-Custom", "b"),
        Err(Error::DuplicateHeader(_))
    ));
    assert_eq!(headers.get("X-Custom").unwrap(), "a");

    headers.set("X-Custom", "b").unwrap();
    assert_eq!(headers.get("X-Custom").unwrap(), "b");
}

#[test]
fn test_iteration_restartable() {
    let mut headers = HeaderCollection::default();
    headers.set("A", "1").unwrap();
    headers.set("B", "2").unwrap();
    headers.set("C", "3").unwrap();

    assert_eq!(headers.iter().count(), 3);
    // 同じコレクションから何度でもイテレータを取り直せる
    let keys: Vec<&str> = headers.iter().map(|(k, _)| k).collect();
    assert_eq!(keys.len(), 3);
    assert!(keys.contains(&"A"));
}

#[test]
fn test_header_key_value_semantics() {
    use std::collections::HashMap;

    let mut map: HashMap<HeaderKey, u32> = HashMap::new();
    map.insert(HeaderKey::new("Content-Type"), 1);

    // 別の綴りでも同じエントリに当たる
    assert_eq!(map.get(&HeaderKey::new("CONTENT-TYPE")), Some(&1));
    map.insert(HeaderKey::new("content-type"), 2);
    assert_eq!(map.len(), 1);
}
