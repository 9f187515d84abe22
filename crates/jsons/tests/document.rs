use jsons::{
    json_pointer, mysql_path, normalize, path, Array, EncodeOptions, Key, Node, NodeType, Object,
    Path, Storage,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::ops::ControlFlow;

fn fixture() -> Node {
    Node::from(json!({
        "b": {"c": {"d": "d"}},
        "c": {"d": "d"},
        "list": [1, "two", null, {"x": 1.5}],
    }))
}

#[test]
fn mutate_through_views() {
    let mut doc = fixture();

    doc.set(&path!("a"), "b");
    assert_eq!(doc.string(&path!("a")), "b");
    doc.delete(&path!("a"));
    assert!(!doc.exist(&path!("a")));

    if let Some(c) = doc.get_mut(&path!("c")).and_then(Node::as_object_mut) {
        c.insert("d", "dd");
    }
    assert_eq!(doc.string(&path!("c", "d")), "dd");

    doc.delete(&path!("c", "d"));
    assert!(!doc.exist(&path!("c", "d")));
    assert!(doc.exist(&path!("c")));
    doc.delete(&path!("c"));
    assert!(!doc.exist(&path!("c")));

    if let Some(c) = doc.get_mut(&path!("b", "c")) {
        c.set(&path!("d"), "ddd");
    }
    assert_eq!(doc.string(&path!("b", "c", "d")), "ddd");
}

#[test]
fn array_slot_writes() {
    let mut doc = fixture();

    doc.set(&path!("list", 2), true);
    assert!(doc.bool(&path!("list", 2)));

    doc.set(&path!("list", 4), "past the end");
    assert_eq!(doc.len_at(&path!("list")), 4);

    if let Some(list) = doc.get_mut(&path!("list")).and_then(Node::as_array_mut) {
        list.push("appended");
    }
    assert_eq!(doc.string(&path!("list", 4)), "appended");

    doc.delete(&path!("list", 0));
    assert_eq!(doc.string(&path!("list", 0)), "two");
    assert_eq!(doc.float(&path!("list", 2, "x")), 1.5);
}

#[test]
fn missing_paths_yield_zero_values() {
    let doc = fixture();
    let missing: Vec<Path> = vec![
        path!("nope"),
        path!("list", 99),
        path!("list", "0"),
        path!("b", 0),
        path!("c", "d", "e"),
    ];
    for p in &missing {
        assert!(!doc.exist(p), "{p}");
        assert_eq!(doc.type_of(p), NodeType::Undefined);
        assert!(doc.get(p).is_null());
        assert!(!doc.bool(p));
        assert_eq!(doc.int(p), 0);
        assert_eq!(doc.uint(p), 0);
        assert_eq!(doc.float(p), 0.0);
        assert_eq!(doc.number(p).as_str(), "0");
        assert_eq!(doc.string(p), "");
        assert!(doc.array(p).is_empty());
        assert!(doc.object(p).is_empty());
        assert_eq!(doc.len_at(p), 0);
    }
}

#[test]
fn clone_is_independent() {
    let original = fixture();
    let mut copy = original.clone();
    copy.set(&path!("b", "c", "d"), "changed");
    copy.delete(&path!("list", 0));

    assert_eq!(original.string(&path!("b", "c", "d")), "d");
    assert_eq!(original.len_at(&path!("list")), 4);
    assert_ne!(original, copy);
}

#[test]
fn range_visits_in_order_and_stops_early() {
    let doc = fixture();
    let mut seen = Vec::new();
    let done = doc.get(&path!("list")).range(|k, v| {
        seen.push((k.to_key(), v.kind()));
        ControlFlow::Continue(())
    });
    assert!(done);
    assert_eq!(
        seen,
        [
            (Key::Index(0), NodeType::Number),
            (Key::Index(1), NodeType::String),
            (Key::Index(2), NodeType::Null),
            (Key::Index(3), NodeType::Object),
        ]
    );

    let mut count = 0;
    let done = doc.range(|_, _| {
        count += 1;
        ControlFlow::Break(())
    });
    assert!(!done);
    assert_eq!(count, 1);
}

#[test]
fn numbers_survive_roundtrip() {
    let text = r#"{"id":123456789012345678901234567890,"ratio":0.1000000000000000055511151231257827,"e":1E+2}"#;
    let doc = Node::decode_str(text).unwrap();
    assert_eq!(doc.to_json_string(), text);
    assert_eq!(doc.number(&path!("id")).as_str(), "123456789012345678901234567890");
    assert_eq!(doc.int(&path!("e")), 100);
    assert!(doc.try_int(&path!("id")).is_err());
}

#[test]
fn sorted_encoding_is_stable() {
    let a = Node::decode_str(r#"{"z":1,"a":{"y":2,"b":3}}"#).unwrap();
    let b = Node::decode_str(r#"{"a":{"b":3,"y":2},"z":1}"#).unwrap();
    assert_eq!(a, b);
    let opts = EncodeOptions::sorted();
    assert_eq!(a.encode_with(&opts).unwrap(), b.encode_with(&opts).unwrap());
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Product {
    id: u64,
    attrs: Node,
}

#[test]
fn embeds_in_caller_structs() {
    let product: Product =
        serde_json::from_str(r#"{"id": 7, "attrs": {"color": "red", "sizes": [38, 40]}}"#).unwrap();
    assert_eq!(product.attrs.string(&path!("color")), "red");
    assert_eq!(product.attrs.int(&path!("sizes", 1)), 40);

    let text = serde_json::to_string(&product).unwrap();
    assert_eq!(text, r#"{"id":7,"attrs":{"color":"red","sizes":[38,40]}}"#);

    let again = normalize(&product);
    assert_eq!(again.get(&path!("attrs")), &product.attrs);
}

#[test]
fn column_roundtrip_and_path_export() {
    let mut attrs = Object::new();
    attrs.insert("tags", Array::from(vec!["a", "b"]));
    let doc = Node::from(attrs);

    let stored = doc.to_storage().unwrap();
    let loaded = Node::from_storage(Some(stored.as_slice())).unwrap();
    assert_eq!(loaded, doc);

    let p = path!("tags", 1);
    assert_eq!(loaded.string(&p), "b");
    assert_eq!(mysql_path(&p), r#"'$."tags".[1]'"#);
    assert_eq!(json_pointer(&p), "/tags/1");
    assert_eq!(loaded.string(&Path::parse_pointer("/tags/1")), "b");
}
