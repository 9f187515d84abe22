use jsons::{is_json_number, Key, Node, Number, Path};
use proptest::prelude::*;
use proptest::sample::Index;

fn arb_node() -> impl Strategy<Value = Node> {
    let leaf = prop_oneof![
        Just(Node::Null),
        any::<bool>().prop_map(Node::from),
        any::<i64>().prop_map(Node::from),
        "[a-z ]{0,6}".prop_map(Node::from),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Node::from),
            prop::collection::vec(("[a-z]{1,3}", inner), 0..4)
                .prop_map(|entries| Node::Object(entries.into_iter().collect())),
        ]
    })
}

/// Every non-root path that resolves in `node`.
fn all_paths(node: &Node, prefix: &mut Path, out: &mut Vec<Path>) {
    let children: Vec<(Key, &Node)> = match node {
        Node::Array(a) => a.iter().enumerate().map(|(i, c)| (Key::Index(i), c)).collect(),
        Node::Object(o) => o.iter().map(|(k, c)| (Key::field(k.as_str()), c)).collect(),
        _ => return,
    };
    for (key, child) in children {
        prefix.push(key);
        out.push(prefix.clone());
        all_paths(child, prefix, out);
        prefix.pop();
    }
}

fn paths_of(node: &Node) -> Vec<Path> {
    let mut out = Vec::new();
    all_paths(node, &mut Path::root(), &mut out);
    out
}

proptest! {
    #[test]
    fn number_literals_roundtrip(text in "-?(0|[1-9][0-9]{0,30})(\\.[0-9]{1,20})?([eE][+-]?[0-9]{1,2})?") {
        prop_assert!(is_json_number(text.as_bytes()));
        let n: Number = text.parse().unwrap();
        prop_assert_eq!(n.as_str(), text.as_str());
        let node = Node::decode_str(&text).unwrap();
        prop_assert_eq!(node.to_json_string(), text);
    }

    #[test]
    fn integers_coerce_exactly(i in any::<i64>()) {
        let node = Node::decode_str(&i.to_string()).unwrap();
        prop_assert_eq!(node.to_int(), i);
        prop_assert_eq!(Node::from(i.to_string()).to_int(), i);
    }

    #[test]
    fn document_roundtrip(doc in arb_node()) {
        let bytes = doc.encode().unwrap();
        prop_assert_eq!(Node::decode(&bytes).unwrap(), doc);
    }

    #[test]
    fn get_after_set(doc in arb_node(), pick in any::<Index>(), value in any::<i64>()) {
        let paths = paths_of(&doc);
        prop_assume!(!paths.is_empty());
        let p = pick.get(&paths);

        let mut doc = doc;
        prop_assert!(doc.try_set(p, value).is_ok());
        prop_assert_eq!(doc.get(p), &Node::from(value));
        prop_assert_eq!(doc.int(p), value);
    }

    #[test]
    fn delete_removes_target(doc in arb_node(), pick in any::<Index>()) {
        let paths = paths_of(&doc);
        prop_assume!(!paths.is_empty());
        let p = pick.get(&paths);
        let parent = p.parent().unwrap_or_default();
        let before = doc.len_at(&parent);

        let mut doc = doc;
        let removed = doc.delete(p);
        prop_assert!(removed.is_some());
        prop_assert_eq!(doc.len_at(&parent), before - 1);
        if let Some(Key::Field(_)) = p.last() {
            prop_assert!(!doc.exist(p));
        }
    }

    #[test]
    fn delete_missing_is_noop(doc in arb_node(), name in "[A-Z]{4}") {
        let mut copy = doc.clone();
        prop_assert_eq!(copy.delete(&[Key::field(name.as_str()), Key::Index(0)]), None);
        prop_assert_eq!(copy, doc);
    }

    #[test]
    fn clone_isolation(doc in arb_node(), pick in any::<Index>()) {
        let paths = paths_of(&doc);
        prop_assume!(!paths.is_empty());
        let p = pick.get(&paths);
        let snapshot = doc.to_json_string();

        let mut copy = doc.clone();
        copy.set(p, "mutated-in-copy");
        copy.delete(p);
        prop_assert_eq!(doc.to_json_string(), snapshot);
    }

    #[test]
    fn missing_paths_are_zero(doc in arb_node(), name in "[A-Z]{4}") {
        let p = [Key::field(name.as_str())];
        prop_assert!(!doc.exist(&p));
        prop_assert_eq!(doc.int(&p), 0);
        prop_assert_eq!(doc.string(&p), "");
        prop_assert!(!doc.bool(&p));
        prop_assert!(doc.array(&p).is_empty());
    }
}
