use rstest::rstest;
use serde::Deserialize;
use serde_json::{json, Value};
use xyml::{Error, Options, Parser};

#[rstest]
fn parses_valued_node_with_attribute_and_child() {
    let value = xyml::parse("name: 1\n\t+tag: x\n\tval: 2").expect("parse");
    assert_eq!(value, json!({"name": [{"#": 1, "$tag": "x", "val": 2}]}));
}

#[rstest]
#[case("n: 42", json!(42))]
#[case("n: true", json!(true))]
#[case("n: \"hi\"", json!("hi"))]
#[case("n: null", json!(null))]
#[case("n: [1,2]", json!([1, 2]))]
#[case("n: hello world", json!("hello world"))]
fn scalar_fidelity(#[case] input: &str, #[case] expected: Value) {
    let value = xyml::parse(input).expect("parse");
    assert_eq!(value, json!({ "n": [expected] }));
}

#[rstest]
fn attribute_without_value_defaults_to_true() {
    let value = xyml::parse("node:\n\t+ enabled:").expect("parse");
    assert_eq!(value, json!({"node": [{"$enabled": true}]}));
}

#[rstest]
fn explicit_null_attribute_differs_from_missing_value() {
    let value = xyml::parse("node:\n\t+a:\n\t+b: null").expect("parse");
    assert_eq!(value, json!({"node": [{"$a": true, "$b": null}]}));
}

#[rstest]
fn repeated_siblings_group_into_one_array() {
    let value = xyml::parse("item: 1\nitem: 2").expect("parse");
    assert_eq!(value, json!({"item": [1, 2]}));
}

#[rstest]
fn singleton_array_compression() {
    let options = Options::default().with_collapse_singleton_arrays(true);
    let value = xyml::parse_with_options("item: 1\nother: 2", &options).expect("parse");
    assert_eq!(value, json!({"item": 1, "other": 2}));
}

#[rstest]
fn value_object_compression_at_root() {
    let value = xyml::parse("42").expect("parse");
    assert_eq!(value, json!(42));

    let value = xyml::parse("plain text").expect("parse");
    assert_eq!(value, json!("plain text"));
}

#[rstest]
fn uncompressed_wrapper_objects_survive() {
    let options = Options::default()
        .with_collapse_single_value_objects(false)
        .with_summarize_leaf_values(false);
    let value = xyml::parse_with_options("a: 1", &options).expect("parse");
    assert_eq!(value, json!({"a": [{"#": 1}]}));
}

#[rstest]
fn compression_is_idempotent_end_to_end() {
    let options = Options::default().with_collapse_singleton_arrays(true);
    let source = "doc:\n\titem: [1]\n\titem: 2\n\tmeta: 3\n\t\tnote: deep";
    let once = xyml::parse_with_options(source, &options).expect("parse");
    // re-running the post-pass over an already-compressed value changes nothing
    let twice = xyml::parse::compress::compress(once.clone(), &options);
    assert_eq!(once, twice);
}

#[rstest]
fn parser_handle_matches_free_functions() {
    let options = Options::default().with_collapse_singleton_arrays(true);
    let parser = Parser::new(options.clone());
    let source = "a: 1\nb: two";
    assert_eq!(
        parser.parse(source).expect("parse"),
        xyml::parse_with_options(source, &options).expect("parse")
    );
}

#[rstest]
fn deep_nesting_round_trip() {
    let source = "a: 1\n\tb: 2\n\t\tc: 3\n\td: 4\ne: 5";
    let value = xyml::parse(source).expect("parse");
    assert_eq!(
        value,
        json!({
            "a": [{"#": 1, "b": {"#": 2, "c": 3}, "d": 4}],
            "e": [5]
        })
    );
}

#[rstest]
fn indentation_jump_aborts_without_partial_output() {
    let err = xyml::parse("a: 1\n\t\t\tb: 2").expect_err("two-level jump");
    match err {
        Error::Indentation { line, found, max } => {
            assert_eq!(line, 2);
            assert_eq!(found, 3);
            assert_eq!(max, 1);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[rstest]
fn missing_file_surfaces_io_error() {
    let err = xyml::parse_file("definitely/not/here.xyml").expect_err("missing file");
    assert!(matches!(err, Error::Io(_)));
    assert_eq!(err.line(), None);
}

#[rstest]
fn blank_lines_and_crlf_are_tolerated() {
    let value = xyml::parse("a: 1\r\n\r\n\tb: 2\r\n").expect("parse");
    assert_eq!(value, json!({"a": [{"#": 1, "b": 2}]}));
}

#[rstest]
fn typed_decoding_via_serde() {
    #[derive(Debug, Deserialize, PartialEq)]
    struct Document {
        server: Vec<Server>,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Server {
        host: Vec<String>,
        port: Vec<u16>,
    }

    let doc: Document =
        xyml::from_str("server:\n\thost: \"localhost\"\n\tport: 8080").expect("decode");
    assert_eq!(
        doc,
        Document {
            server: vec![Server {
                host: vec!["localhost".to_string()],
                port: vec![8080],
            }],
        }
    );
}

#[rstest]
fn typed_decoding_with_collapsed_arrays() {
    #[derive(Debug, Deserialize, PartialEq)]
    struct Config {
        name: String,
        retries: u32,
    }

    let options = Options::default().with_collapse_singleton_arrays(true);
    let config: Config =
        xyml::from_str_with_options("name: \"primary\"\nretries: 3", &options).expect("decode");
    assert_eq!(
        config,
        Config {
            name: "primary".to_string(),
            retries: 3,
        }
    );
}

#[rstest]
fn from_reader_reads_to_end() {
    let source: &[u8] = b"a: 1\nb: 2";
    let value: Value = xyml::from_reader(source).expect("decode");
    assert_eq!(value, json!({"a": [1], "b": [2]}));
}

#[rstest]
fn from_slice_rejects_invalid_utf8() {
    let err = xyml::from_slice::<Value>(&[0x61, 0xff, 0xfe]).expect_err("invalid utf-8");
    assert!(matches!(err, Error::Io(_)));
}

#[rstest]
fn mixed_document() {
    let source = "message: \"hello\"\n\t+lang: en\n\t+draft:\nrecipient:\n\tname: Ada\n\tname: Grace";
    let value = xyml::parse(source).expect("parse");
    assert_eq!(
        value,
        json!({
            "message": [{"#": "hello", "$lang": "en", "$draft": true}],
            "recipient": [{"name": ["Ada", "Grace"]}]
        })
    );
}
