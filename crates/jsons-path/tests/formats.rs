use jsons_path::{json_pointer, mysql_path, mysql_path_lossy, path, Key, Path};
use serde_json::json;

#[test]
fn mysql_path_matrix() {
    let cases: Vec<(Path, &str)> = vec![
        (path!(), ""),
        (path!(0), "'$.[0]'"),
        (path!("a"), r#"'$."a"'"#),
        (path!("a", 1, "b"), r#"'$."a".[1]."b"'"#),
        (path!(1, 2, 3, 4, 5), "'$.[1].[2].[3].[4].[5]'"),
        (path!("a", "b", "c", "d"), r#"'$."a"."b"."c"."d"'"#),
        (path!("with space", 10), r#"'$."with space".[10]'"#),
        (path!("ünï"), r#"'$."ünï"'"#),
    ];
    for (p, expected) in cases {
        assert_eq!(mysql_path(&p), expected, "path {p}");
    }
}

#[test]
fn mysql_path_lossy_matches_typed_form() {
    let dynamic = [json!("a"), json!(1), json!("b")];
    assert_eq!(mysql_path_lossy(&dynamic), mysql_path(&path!("a", 1, "b")));

    let noisy = [json!(null), json!("a"), json!(-1), json!(2.5), json!({}), json!(1)];
    assert_eq!(mysql_path_lossy(&noisy), r#"'$."a".[-1].[1]'"#);
}

#[test]
fn pointer_roundtrip_matrix() {
    let cases: Vec<(Path, &str)> = vec![
        (path!(), ""),
        (path!("a"), "/a"),
        (path!("a", 0), "/a/0"),
        (path!("a/b", "c~d"), "/a~1b/c~0d"),
        (path!(""), "/"),
        (path!("x", "", 3), "/x//3"),
    ];
    for (p, pointer) in cases {
        assert_eq!(json_pointer(&p), pointer);
        assert_eq!(Path::parse_pointer(pointer), p, "pointer {pointer:?}");
    }
}

#[test]
fn pointer_components_that_are_not_indices_stay_fields() {
    let p = Path::parse_pointer("/items/007/-/1e3");
    assert_eq!(
        p.keys(),
        [
            Key::field("items"),
            Key::field("007"),
            Key::field("-"),
            Key::field("1e3"),
        ]
    );
}

#[test]
fn path_display_and_builder() {
    let p = Path::root().key("users").index(3).key("name");
    assert_eq!(p.to_string(), "$.users[3].name");
    assert_eq!(p.parent(), Some(path!("users", 3)));
    assert!(path!("users").is_prefix_of(&p));
    assert!(!path!("name").is_prefix_of(&p));
    assert_eq!(path!("users").join(&path!(3, "name")), p);
    assert_eq!(Path::root().parent(), None);
}

#[test]
fn path_serde_is_a_plain_array() {
    let p = path!("a", 0, "b");
    let text = serde_json::to_string(&p).unwrap();
    assert_eq!(text, r#"["a",0,"b"]"#);
    let back: Path = serde_json::from_str(&text).unwrap();
    assert_eq!(back, p);
    assert!(serde_json::from_str::<Path>("[true]").is_err());
}
