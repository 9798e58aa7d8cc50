//! End-to-end checks of the public engine API.

use unicode_width::UnicodeWidthStr;
use unistyle::tables::SUBSTITUTION_TABLES;
use unistyle::{apply, apply_named, is_styled, strip, StyleError, StyleKind, StyleTag};

const SUBSTITUTION_STYLES: [StyleTag; 4] = [
    StyleTag::Bold,
    StyleTag::Italic,
    StyleTag::BoldItalic,
    StyleTag::Monospace,
];

#[test]
fn every_mapped_char_styles_and_strips_back() {
    for style in SUBSTITUTION_STYLES {
        let StyleKind::Substitution(table) = style.kind() else {
            panic!("{} should be a substitution style", style);
        };
        for (plain, _) in table.iter() {
            let source = plain.to_string();
            let styled = apply(&source, style);

            assert_eq!(styled.chars().count(), 1, "{} '{}'", style, plain);
            assert_ne!(styled, source, "{} left '{}' unchanged", style, plain);
            assert_eq!(strip(&styled), source, "{} '{}' did not strip", style, plain);
        }
    }
}

#[test]
fn tables_cover_documented_alphabets() {
    let sizes: Vec<usize> = SUBSTITUTION_TABLES.iter().map(|t| t.len()).collect();
    assert_eq!(sizes, vec![62, 52, 52, 62]);
}

#[test]
fn bold_maps_digits_italic_does_not() {
    assert_eq!(apply("5", StyleTag::Bold), "𝟱");
    assert_eq!(apply("5", StyleTag::Italic), "5");
}

#[test]
fn bold_hello() {
    assert_eq!(apply("Hello", StyleTag::Bold), "𝗛𝗲𝗹𝗹𝗼");
}

#[test]
fn underline_hi_is_four_scalars() {
    let out = apply("Hi", StyleTag::Underline);
    assert_eq!(out.chars().count(), 4);
    assert_eq!(out, "H\u{332}i\u{332}");
}

#[test]
fn combining_styles_round_trip() {
    let text = "Mixed: 42 apples, naïve café!";
    for style in [StyleTag::Underline, StyleTag::Strikethrough] {
        let styled = apply(text, style);
        assert_eq!(styled.chars().count(), text.chars().count() * 2);
        assert_eq!(strip(&styled), text);
    }
}

#[test]
fn combining_marks_do_not_change_display_width() {
    let text = "Hello, world";
    for style in [StyleTag::Underline, StyleTag::Strikethrough] {
        assert_eq!(apply(text, style).width(), text.width());
    }
}

#[test]
fn strip_mixed_input_in_one_pass() {
    assert_eq!(strip("𝗔𝗠𝗕𝗮𝗾𝗿\u{332}\u{336}"), "AMBaqr");
}

#[test]
fn strip_is_idempotent_on_layered_styles() {
    let layered = apply(&apply("Layer 9", StyleTag::Monospace), StyleTag::Strikethrough);
    let once = strip(&layered);
    assert_eq!(once, "Layer 9");
    assert_eq!(strip(&once), once);
}

#[test]
fn restyling_goes_through_plain_text() {
    let bold = apply("swap", StyleTag::Bold);
    let italic = apply(&strip(&bold), StyleTag::Italic);
    assert_eq!(italic, apply("swap", StyleTag::Italic));
}

#[test]
fn empty_input_everywhere() {
    for style in StyleTag::ALL {
        assert_eq!(apply("", style), "");
    }
    assert_eq!(strip(""), "");
    assert!(!is_styled(""));
}

#[test]
fn unknown_style_name_fails() {
    let err = apply_named("text", "bolder").unwrap_err();
    assert_eq!(
        err,
        StyleError::UnknownStyleTag {
            tag: "bolder".to_string(),
            available: StyleTag::names(),
        }
    );
    assert!(err.to_string().contains("Available: bold, italic, boldItalic"));
}

#[test]
fn concurrent_callers_agree() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let text = format!("thread {}", i);
                let styled = apply(&text, StyleTag::ALL[i % StyleTag::ALL.len()]);
                (text, strip(&styled))
            })
        })
        .collect();

    for handle in handles {
        let (text, stripped) = handle.join().unwrap();
        assert_eq!(stripped, text);
    }
}
