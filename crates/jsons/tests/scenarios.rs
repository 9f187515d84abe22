use jsons::{path, Node, NodeType, Object, PathError, Raw};

#[test]
fn nested_get_int_and_exist() {
    let doc =
        Node::decode_str(r#"{"key": ["hello", [1024, {"name": "seven", "age": 10240}]]}"#).unwrap();

    let name = doc.get(&path!("key", 1, 1, "name"));
    assert!(name.is_string());
    assert_eq!(name.to_str(), "seven");
    assert_eq!(doc.int(&path!("key", 1, 1, "age")), 10240);
    assert!(!doc.exist(&path!("key", 1, 2)));
}

#[test]
fn set_into_missing_parent_is_rejected() {
    let mut doc = Node::decode_str("{}").unwrap();

    doc.set(&path!("a", "b"), "c");
    assert_eq!(doc.to_json_string(), "{}");
    assert_eq!(
        doc.try_set(&path!("a", "b"), "c"),
        Err(PathError::MissingParent)
    );
}

#[test]
fn set_creates_member_when_parent_exists() {
    let mut doc = Node::decode_str("{}").unwrap();

    doc.set(&path!("a"), Object::new());
    doc.set(&path!("a", "b"), "c");
    assert_eq!(doc.to_json_string(), r#"{"a":{"b":"c"}}"#);
    assert_eq!(doc.string(&path!("a", "b")), "c");
}

#[test]
fn raw_number_sniffing() {
    let padded = Raw::from("   123");
    assert!(padded.is_number());
    assert_eq!(padded.int(&path!()), 123);

    let negative = Raw::from("-1");
    assert!(negative.is_number());
    assert!(!negative.is_null());
    assert_eq!(negative.type_of(&path!()), NodeType::Number);
}

#[test]
fn null_roundtrip() {
    let node = Node::decode(b"null").unwrap();
    assert!(node.is_null());
    assert_eq!(node, Node::Null);
    assert_eq!(node.encode().unwrap(), b"null");
}

#[test]
fn reverse_then_sort() {
    let mut node = Node::decode_str("[1,2,3]").unwrap();
    node.reverse();
    assert_eq!(node.to_json_string(), "[3,2,1]");
    node.sort_by(|a, b| a.to_int().cmp(&b.to_int()));
    assert_eq!(node.to_json_string(), "[1,2,3]");
}
