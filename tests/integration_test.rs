//! Integration tests for neoclip.

#![allow(clippy::expect_used)]

use neoclip::{RegTag, SelectionKind, classify, join, split};
use test_case::test_case;

#[test_case('c', SelectionKind::Char ; "c is charwise")]
#[test_case('v', SelectionKind::Char ; "v is charwise")]
#[test_case('l', SelectionKind::Line ; "l is linewise")]
#[test_case('V', SelectionKind::Line ; "upper v is linewise")]
#[test_case('b', SelectionKind::Block ; "b is blockwise")]
#[test_case('\u{16}', SelectionKind::Block ; "ctrl v is blockwise")]
#[test_case('C', SelectionKind::Auto ; "upper c is auto")]
#[test_case(' ', SelectionKind::Auto ; "space is auto")]
#[test_case('\0', SelectionKind::Auto ; "nul is auto")]
fn test_classify(ch: char, expected: SelectionKind) {
    assert_eq!(classify(ch), expected);
}

#[test]
fn test_classify_total_over_bytes() {
    let explicit: Vec<u8> = (0..=u8::MAX)
        .filter(|&b| classify(b as char).is_explicit())
        .collect();
    assert_eq!(explicit, vec![0x16, b'V', b'b', b'c', b'l', b'v']);
}

#[test_case(b"ab\x00cd", &["ab"] ; "nul truncates")]
#[test_case(b"foo\r\nbar", &["foo", "bar"] ; "crlf terminator")]
#[test_case(b"foo\rbar", &["foo\rbar"] ; "lone cr is content")]
#[test_case(b"a\xE2\x82", &["a"] ; "incomplete sequence dropped")]
#[test_case(b"\n", &["", ""] ; "single newline")]
#[test_case(b"x\xFFy", &["x"] ; "invalid octet")]
fn test_split_cases(input: &[u8], expected: &[&str]) {
    let reg = split(input, SelectionKind::Char).expect("non-empty input");
    assert_eq!(reg.lossy_lines(), expected);
    assert_eq!(reg.regtype(), RegTag::Char);
}

#[test]
fn test_split_empty_input() {
    for hint in [
        SelectionKind::Char,
        SelectionKind::Line,
        SelectionKind::Block,
        SelectionKind::Auto,
    ] {
        assert!(split(b"", hint).is_none());
    }
}

#[test]
fn test_auto_tag_inference() {
    let reg = split(b"line1\nline2\n", SelectionKind::Auto).expect("split");
    assert_eq!(reg.regtype(), RegTag::Line);

    let reg = split(b"line1\nline2", SelectionKind::Auto).expect("split");
    assert_eq!(reg.regtype(), RegTag::Char);
}

#[test]
fn test_join_separator_placement() {
    let out = join(&["one", "two", "three"], b",");
    assert_eq!(out.iter().filter(|&&b| b == b',').count(), 2);
    assert_eq!(out, b"one,two,three");

    assert!(join::<&str>(&[], b",").is_empty());
    assert_eq!(join(&["solo"], b","), b"solo");
}

#[test]
fn test_windows_clipboard_paste() {
    // CF_UNICODETEXT converted to UTF-8 keeps CRLF and the terminating NUL
    let data = "première\r\nligne\r\n\0".as_bytes();
    let reg = split(data, SelectionKind::Auto).expect("split");
    assert_eq!(reg.lossy_lines(), ["première", "ligne", ""]);
    assert_eq!(reg.regtype(), RegTag::Line);
}

/// Provider tests over the in-memory backend.
mod provider_tests {
    use neoclip::{
        ClipboardFormat, MemoryClipboard, Provider, ProviderConfig, RegTag, Register,
        SelectionKind, Separator,
    };

    fn provider(format: ClipboardFormat) -> Provider<MemoryClipboard> {
        Provider::new(
            MemoryClipboard::new(),
            ProviderConfig {
                separator: Separator::Lf,
                format,
            },
        )
    }

    #[test]
    fn test_yank_paste_cycle_keeps_blockwise() {
        for format in [ClipboardFormat::VimText, ClipboardFormat::VimEncText] {
            let mut p = provider(format);
            let reg = Register::from_lines(["ab", "cd", "ef"], RegTag::Block);
            p.set(&reg).expect("set");
            let back = p.get(SelectionKind::Auto).expect("get").expect("register");
            assert_eq!(back, reg);
        }
    }

    #[test]
    fn test_plain_text_loses_blockwise() {
        let mut p = provider(ClipboardFormat::Text);
        p.set(&Register::from_lines(["ab", "cd"], RegTag::Block))
            .expect("set");
        let back = p.get(SelectionKind::Auto).expect("get").expect("register");
        assert_eq!(back.regtype(), RegTag::Char);
    }
}

mod property_tests {
    use neoclip::{RegTag, SelectionKind, join, split};
    use proptest::prelude::*;

    fn line() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9 \t.,é世🦀]{0,16}"
    }

    proptest! {
        #[test]
        fn split_inverts_join(
            lines in prop::collection::vec(line(), 1..8),
            linewise in any::<bool>(),
        ) {
            let joined = join(&lines, b"\n");
            prop_assume!(!joined.is_empty());

            let (tag, kind) = if linewise {
                (RegTag::Line, SelectionKind::Line)
            } else {
                (RegTag::Char, SelectionKind::Char)
            };
            let reg = split(&joined, kind).expect("non-empty");
            prop_assert_eq!(reg.regtype(), tag);
            prop_assert_eq!(reg.lossy_lines(), lines);
        }

        #[test]
        fn join_inverts_split(text in "[a-z\n世]{1,64}") {
            prop_assume!(!text.ends_with('\n'));
            let reg = split(text.as_bytes(), SelectionKind::Auto).expect("non-empty");
            prop_assert_eq!(reg.regtype(), RegTag::Char);
            prop_assert_eq!(reg.join(b"\n"), text.as_bytes());
        }

        #[test]
        fn split_never_fails_on_arbitrary_bytes(data in prop::collection::vec(any::<u8>(), 1..256)) {
            let reg = split(&data, SelectionKind::Auto).expect("non-empty");
            prop_assert!(!reg.is_empty());
            for line in reg.lines() {
                prop_assert!(!line.contains(&b'\n'));
                prop_assert!(!line.contains(&0));
            }
        }

        #[test]
        fn join_separator_count(lines in prop::collection::vec("[a-z]{0,8}", 0..10)) {
            let out = join(&lines, b",");
            let commas = out.iter().filter(|&&b| b == b',').count();
            prop_assert_eq!(commas, lines.len().saturating_sub(1));
        }

        #[test]
        fn split_prefix_is_kept_before_nul(prefix in "[a-z]{0,20}", suffix in "[a-z\n]{0,20}") {
            let mut data = prefix.clone().into_bytes();
            data.push(0);
            data.extend_from_slice(suffix.as_bytes());
            let reg = split(&data, SelectionKind::Char).expect("non-empty");
            prop_assert_eq!(reg.lossy_lines(), vec![prefix]);
        }
    }
}

/// CLI integration tests.
mod cli_tests {
    use assert_cmd::Command;
    use predicates::prelude::*;
    use tempfile::TempDir;

    fn neoclip() -> Command {
        let mut cmd = Command::cargo_bin("neoclip").expect("binary");
        cmd.env_remove("NEOCLIP_SEPARATOR")
            .env_remove("NEOCLIP_TARGET")
            .env_remove("RUST_LOG");
        cmd
    }

    #[test]
    fn test_split_stdin() {
        neoclip()
            .arg("split")
            .write_stdin(&b"foo\r\nbar\n\0"[..])
            .assert()
            .success()
            .stdout(predicate::str::contains("regtype V (line)"))
            .stdout(predicate::str::contains("Truncated at byte 9: NUL byte"));
    }

    #[test]
    fn test_split_json() {
        neoclip()
            .args(["split", "--format", "json", "--regtype", "b"])
            .write_stdin("ab\ncd")
            .assert()
            .success()
            .stdout(predicate::str::contains("\"regtype\": \"\\u0016\""));
    }

    #[test]
    fn test_join_stdin_to_stdout() {
        neoclip()
            .args(["join", "--separator", "lf"])
            .write_stdin(r#"{"lines":["a","b"],"regtype":"v"}"#)
            .assert()
            .success()
            .stdout("a\nb");
    }

    #[test]
    fn test_join_vimenc_to_file() {
        let temp = TempDir::new().expect("temp dir");
        let out = temp.path().join("clip.bin");

        neoclip()
            .args(["join", "--separator", "lf", "--target", "vimenc", "-o"])
            .arg(&out)
            .write_stdin(r#"["x","y"]"#)
            .assert()
            .success()
            .stdout(predicate::str::contains("Wrote"));

        assert_eq!(std::fs::read(&out).expect("read"), b"\xFFutf-8\0x\ny");
    }

    #[test]
    fn test_separator_from_env() {
        neoclip()
            .env("NEOCLIP_SEPARATOR", "crlf")
            .arg("join")
            .write_stdin(r#"["1","2"]"#)
            .assert()
            .success()
            .stdout("1\r\n2");
    }

    #[test]
    fn test_regtype_json() {
        neoclip()
            .args(["regtype", "V", "--format", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"kind\": \"line\""));
    }

    #[test]
    fn test_bad_target_fails() {
        neoclip()
            .args(["split", "--target", "rtf"])
            .write_stdin("x")
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown clipboard format"));
    }

    #[test]
    fn test_bad_framing_fails_json() {
        neoclip()
            .args(["split", "--target", "vim", "--format", "json"])
            .write_stdin(&b"\x05text"[..])
            .assert()
            .failure()
            .stdout(predicate::str::contains("unknown motion type byte"));
    }
}
