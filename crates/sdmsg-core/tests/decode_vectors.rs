//! Wire text -> message vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use bytes::Bytes;

use sdmsg_core::decode_bytes;

use vector_loader::load;

#[test]
fn decode_vectors() {
    let files = [
        "rfc_example.json",
        "nil_msgid.json",
        "empty_sd.json",
        "multi_element.json",
        "escaped_quote.json",
        "backslash_stripped.json",
        "utf8_hex.json",
        "base64_frame.json",
        "no_brackets.json",
        "unterminated.json",
        "two_header_tokens.json",
        "leading_bracket.json",
        "escaped_bracket.json",
        "space_in_value.json",
        "unquoted_value.json",
        "invalid_utf8.json",
    ];

    for f in files {
        let v = load(&format!("decode/{f}"));
        let raw = v.wire.as_ref().expect("missing wire block").decode();
        let res = decode_bytes(Bytes::from(raw));

        if let Some(err) = v.expect_error {
            let e = res.expect_err("expected error");
            assert_eq!(e.code().as_str(), err.code, "vector={}", v.description);
            continue;
        }

        let msg = res.unwrap_or_else(|e| panic!("vector={}: {e}", v.description));
        let ex = v.message.expect("missing message block");

        assert_eq!(msg.message_id(), ex.message_id(), "vector={}", v.description);
        assert_eq!(msg.message(), ex.message(), "vector={}", v.description);
        assert_eq!(msg.structured_data(), ex.structured_data(), "vector={}", v.description);

        // Wire order is kept, not just map equality.
        let got: Vec<_> = msg.structured_data().keys().collect();
        let want: Vec<_> = ex.structured_data().keys().collect();
        assert_eq!(got, want, "vector={}", v.description);
        assert!(msg.proc_id().is_none(), "vector={}", v.description);
    }
}
