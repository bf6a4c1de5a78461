//! Tests for the parameter mapping and its form encoding.

use super::*;

mod mapping {
    use super::*;

    #[test]
    fn insert_keeps_order_and_replaces_in_place() {
        let mut params = Params::new().with("a", "1").with("b", "2");
        let previous = params.insert("a", "3");

        assert_eq!(previous, Some(ParamValue::Str("1".to_string())));
        let keys: Vec<&str> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(params.get_str("a"), Some("3"));
    }

    #[test]
    fn remove_returns_value_and_drops_key() {
        let mut params = Params::new().with("sig", "abc").with("email", "x");

        assert_eq!(params.remove("sig"), Some(ParamValue::from("abc")));
        assert!(!params.contains_key("sig"));
        assert_eq!(params.len(), 1);
        assert_eq!(params.remove("missing"), None);
    }

    #[test]
    fn extend_overrides_existing_keys() {
        let mut params = Params::new().with("name", "base").with("list", "news");
        params.extend(Params::new().with("name", "override").with("extra", 1));

        assert_eq!(params.get_str("name"), Some("override"));
        assert_eq!(params.get("extra"), Some(&ParamValue::Int(1)));
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn get_str_ignores_non_string_values() {
        let params = Params::new().with("n", 5);

        assert_eq!(params.get_str("n"), None);
    }

    #[test]
    fn from_json_object_converts_nested_values() {
        let json = serde_json::json!({
            "name": "Ann",
            "age": 31,
            "score": 2.5,
            "active": true,
            "tags": ["a", "b"],
            "vars": { "city": "Oslo" },
            "none": null
        });
        let serde_json::Value::Object(map) = json else {
            panic!("expected object");
        };

        let params = Params::from(map);

        assert_eq!(params.get_str("name"), Some("Ann"));
        assert_eq!(params.get("age"), Some(&ParamValue::Int(31)));
        assert_eq!(params.get("score"), Some(&ParamValue::Float(2.5)));
        assert_eq!(params.get("active"), Some(&ParamValue::Bool(true)));
        assert_eq!(
            params.get("tags"),
            Some(&ParamValue::List(vec!["a".into(), "b".into()]))
        );
        assert_eq!(
            params.get("vars"),
            Some(&ParamValue::Map(Params::new().with("city", "Oslo")))
        );
        assert_eq!(params.get("none"), Some(&ParamValue::Null));
    }

    #[test]
    fn large_unsigned_values_fall_back_to_text() {
        assert_eq!(
            ParamValue::from(u64::MAX),
            ParamValue::Str(u64::MAX.to_string())
        );
        assert_eq!(ParamValue::from(7_u64), ParamValue::Int(7));
    }

    #[test]
    fn large_json_integers_fall_back_to_text() {
        let json = serde_json::json!({
            "id": 18_446_744_073_709_551_615_u64,
            "small": 7,
            "ratio": 0.5
        });
        let serde_json::Value::Object(map) = json else {
            panic!("expected object");
        };

        let params = Params::from(map);

        assert_eq!(
            params.get("id"),
            Some(&ParamValue::Str("18446744073709551615".to_string()))
        );
        assert_eq!(params.get("small"), Some(&ParamValue::Int(7)));
        assert_eq!(params.get("ratio"), Some(&ParamValue::Float(0.5)));
        assert_eq!(
            Params::new().with("id", params.get("id").unwrap().clone()).to_form(),
            "id=18446744073709551615"
        );
    }

    #[test]
    fn option_none_becomes_null() {
        assert_eq!(ParamValue::from(None::<&str>), ParamValue::Null);
        assert_eq!(ParamValue::from(Some("x")), ParamValue::from("x"));
    }

    #[test]
    fn empty_container_detection() {
        assert!(ParamValue::Map(Params::new()).is_empty_container());
        assert!(ParamValue::List(Vec::new()).is_empty_container());
        assert!(!ParamValue::from("").is_empty_container());
    }
}

mod form_encoding {
    use super::*;

    #[test]
    fn encodes_flat_pairs_in_order() {
        let params = Params::new().with("email", "ann@example.com").with("n", 2);

        assert_eq!(params.to_form(), "email=ann%40example.com&n=2");
    }

    #[test]
    fn encodes_nested_mappings_with_bracketed_keys() {
        let params = Params::new().with("vars", Params::new().with("name", "Ann Lee"));

        assert_eq!(params.to_form(), "vars%5Bname%5D=Ann+Lee");
    }

    #[test]
    fn encodes_lists_with_numeric_keys() {
        let params = Params::new().with("lists", vec!["news", "deals"]);

        assert_eq!(params.to_form(), "lists%5B0%5D=news&lists%5B1%5D=deals");
    }

    #[test]
    fn omits_null_values_and_empty_containers() {
        let params = Params::new()
            .with("a", ParamValue::Null)
            .with("b", Params::new())
            .with("c", "x");

        assert_eq!(params.to_form(), "c=x");
    }

    #[test]
    fn encodes_booleans_as_digits() {
        let params = Params::new().with("on", true).with("off", false);

        assert_eq!(params.to_form(), "on=1&off=0");
    }

    #[test]
    fn empty_params_encode_to_empty_string() {
        assert_eq!(Params::new().to_form(), "");
    }
}

mod form_decoding {
    use super::*;

    #[test]
    fn decodes_pairs_as_strings() {
        let params = Params::from_form("action=verify&email=ann%40example.com&send_id=42");

        assert_eq!(params.get_str("action"), Some("verify"));
        assert_eq!(params.get_str("email"), Some("ann@example.com"));
        assert_eq!(params.get_str("send_id"), Some("42"));
    }

    #[test]
    fn keeps_bracketed_keys_verbatim() {
        let params = Params::from_form("vars%5Bname%5D=Ann+Lee");

        assert_eq!(params.get_str("vars[name]"), Some("Ann Lee"));
    }

    #[test]
    fn repeated_key_collects_all_values() {
        let params = Params::from_form("lists%5B%5D=news&email=a%40b.c&lists%5B%5D=deals&lists%5B%5D=sale");

        assert_eq!(params.len(), 2);
        assert_eq!(
            params.get("lists[]"),
            Some(&ParamValue::List(vec![
                "news".into(),
                "deals".into(),
                "sale".into()
            ]))
        );
        assert_eq!(params.get_str("email"), Some("a@b.c"));
    }

    #[test]
    fn encoded_nested_params_keep_their_leaf_values() {
        let nested = Params::new()
            .with("email", "ann@example.com")
            .with("vars", Params::new().with("name", "Ann"))
            .with("lists", vec!["news"]);

        let decoded = Params::from_form(&nested.to_form());
        let mut values: Vec<&str> = decoded.iter().filter_map(|(_, v)| v.as_str()).collect();
        values.sort_unstable();

        assert_eq!(values, vec!["Ann", "ann@example.com", "news"]);
    }
}
