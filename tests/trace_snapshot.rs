//! Snapshot of the intermediate stages recorded by `QuadHasher::trace`.

use quadhash::QuadHasher;

#[test]
fn test_trace_of_complex_roots() {
    let trace = QuadHasher::default().trace("z").unwrap();

    insta::assert_json_snapshot!(trace, @r###"
    {
      "code_count": 1,
      "packed": 122,
      "digits": 3,
      "chunks": {
        "a": 1,
        "b": 2,
        "c": 2
      },
      "roots": {
        "real": 1,
        "imag": 2
      },
      "quad": 1000002,
      "fallback": false,
      "digest": "9ea31825cfea0400"
    }
    "###);
}

#[test]
fn test_trace_of_degenerate_fallback() {
    let trace = QuadHasher::default().trace("a").unwrap();

    insta::assert_json_snapshot!(trace, @r###"
    {
      "code_count": 1,
      "packed": 97,
      "digits": 2,
      "chunks": {
        "a": 0,
        "b": 0,
        "c": 0
      },
      "roots": null,
      "quad": 0,
      "fallback": true,
      "digest": "685fdf50e51fa977"
    }
    "###);
}
