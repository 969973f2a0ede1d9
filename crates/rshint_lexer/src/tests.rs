#![cfg(test)]

use crate::*;
use quickcheck_macros::quickcheck;
use std::collections::BTreeSet;

macro_rules! assert_lex {
    ($src:expr, $($kind:ident:$raw:expr $(,)?)*) => {{
        let tokens = Lexer::new($src, &LexOptions::default()).collect::<Vec<_>>();
        #[allow(unused_mut)]
        let mut idx = 0;

        $(
            assert_eq!(tokens[idx].kind, TokenKind::$kind,
                "expected token kind {}, but found {:?}", stringify!($kind), tokens[idx].kind
            );
            assert_eq!(tokens[idx].raw, $raw,
                "expected token text {:?}, but found {:?} for token {:?}", $raw, tokens[idx].raw, tokens[idx].kind);
            idx += 1;
        )*

        assert!(tokens[idx].is_eof(), "expected EOF, but found {:?}", tokens[idx]);
        assert_eq!(idx + 1, tokens.len());
    }}
}

// Diagnostics as (line, message) pairs, duplicates collapse
fn messages(lines: &[&str], options: &LexOptions) -> BTreeSet<(usize, String)> {
    lex(&lines.join("\n"), options)
        .diagnostics
        .into_iter()
        .map(|d| (d.line(), d.message.to_string()))
        .collect()
}

fn expected(pairs: &[(usize, &str)]) -> BTreeSet<(usize, String)> {
    pairs.iter().map(|(l, m)| (*l, m.to_string())).collect()
}

#[test]
fn empty() {
    assert_lex! {
        "",
    }
}

#[test]
fn identifiers_and_keywords() {
    assert_lex! {
        "var foo = this",
        Keyword:"var",
        Identifier:"foo",
        Punctuator:"=",
        Keyword:"this",
    }
}

#[test]
fn unicode_identifiers() {
    assert_lex! {
        "ñandú $_a1 \\u0061bc",
        Identifier:"ñandú",
        Identifier:"$_a1",
        Identifier:"\\u0061bc",
    }

    let lexed = lex("\\u0061bc", &LexOptions::default());
    assert_eq!(lexed.tokens[0].value, TokenValue::Name("abc".into()));
    assert!(lexed.diagnostics.is_empty());

    let lexed = lex("\\u00zz", &LexOptions::default());
    assert!(lexed.tokens[0].is_malformed());
    assert_eq!(lexed.diagnostics[0].message, "Bad escapement.");
}

#[test]
fn punctuators() {
    assert_lex! {
        ">>>= ... === !== **= => ?. ?? ++ -- &&= <<",
        Punctuator:">>>=",
        Punctuator:"...",
        Punctuator:"===",
        Punctuator:"!==",
        Punctuator:"**=",
        Punctuator:"=>",
        Punctuator:"?.",
        Punctuator:"??",
        Punctuator:"++",
        Punctuator:"--",
        Punctuator:"&&=",
        Punctuator:"<<",
    }
}

#[test]
fn consecutive_punctuators() {
    assert_lex! {
        "&&&^^|||",
        Punctuator:"&&",
        Punctuator:"&",
        Punctuator:"^",
        Punctuator:"^",
        Punctuator:"||",
        Punctuator:"|",
    }
}

#[test]
fn conditional_before_leading_dot_number() {
    assert_lex! {
        "a?.5:b",
        Identifier:"a",
        Punctuator:"?",
        NumericLiteral:".5",
        Punctuator:":",
        Identifier:"b",
    }
}

#[test]
fn division_after_values() {
    assert_lex! {
        "a / b /= c",
        Identifier:"a",
        Punctuator:"/",
        Identifier:"b",
        Punctuator:"/=",
        Identifier:"c",
    }

    assert_lex! {
        "(a) / 2; x[0] / 2; this / 2",
        Punctuator:"(",
        Identifier:"a",
        Punctuator:")",
        Punctuator:"/",
        NumericLiteral:"2",
        Punctuator:";",
        Identifier:"x",
        Punctuator:"[",
        NumericLiteral:"0",
        Punctuator:"]",
        Punctuator:"/",
        NumericLiteral:"2",
        Punctuator:";",
        Keyword:"this",
        Punctuator:"/",
        NumericLiteral:"2",
    }
}

#[test]
fn regex_after_operators_and_keywords() {
    assert_lex! {
        "x = /a[/]b/gi; return /c/",
        Identifier:"x",
        Punctuator:"=",
        RegExpLiteral:"/a[/]b/gi",
        Punctuator:";",
        Keyword:"return",
        RegExpLiteral:"/c/",
    }

    let lexed = lex("x = /a+b/gi", &LexOptions::default());
    assert_eq!(
        lexed.tokens[2].value,
        TokenValue::Regex {
            pattern: "a+b".into(),
            flags: RegexFlags::G | RegexFlags::I,
        }
    );
}

#[test]
fn templates() {
    assert_lex! {
        "`a${ {b: `c${d}`, e: '}'} }f` + 1",
        TemplateLiteral:"`a${ {b: `c${d}`, e: '}'} }f`",
        Punctuator:"+",
        NumericLiteral:"1",
    }

    let lexed = lex("`x\ny`", &LexOptions::default());
    assert_eq!(lexed.tokens[0].value, TokenValue::Template("x\ny".to_string()));
    assert!(lexed.diagnostics.is_empty());
}

#[test]
fn comments_are_skipped_unless_asked_for() {
    assert_lex! {
        "a // line\n/* block */ b",
        Identifier:"a",
        Identifier:"b",
    }

    let tokens = Lexer::new("/*jshint maxlen: 80 */ a // b", &LexOptions::default())
        .with_comments()
        .collect::<Vec<_>>();
    assert_eq!(tokens.len(), 4);
    assert_eq!(
        tokens[0].value,
        TokenValue::Comment {
            style: CommentStyle::Block,
            text: "jshint maxlen: 80 ".to_string(),
            directive: Some(Directive::Jshint),
        }
    );
    assert_eq!(
        tokens[2].value,
        TokenValue::Comment {
            style: CommentStyle::Line,
            text: " b".to_string(),
            directive: None,
        }
    );
}

#[test]
fn comments_do_not_change_regex_context() {
    assert_lex! {
        "a /* c */ / b",
        Identifier:"a",
        Punctuator:"/",
        Identifier:"b",
    }
}

#[test]
fn decoded_values() {
    let lexed = lex("0x332 010 1.5e3 'a\\nb' \"\\u{1F600}\"", &LexOptions::default());
    let values = lexed
        .tokens
        .iter()
        .map(|t| t.value.clone())
        .collect::<Vec<_>>();
    assert_eq!(
        values,
        vec![
            TokenValue::Number(818.0),
            TokenValue::Number(8.0),
            TokenValue::Number(1500.0),
            TokenValue::Str("a\nb".to_string()),
            TokenValue::Str("😀".to_string()),
            TokenValue::None,
        ]
    );
}

#[test]
fn positions() {
    let lexed = lex("a\r\n  bc\rd", &LexOptions::default());
    let tokens = lexed.tokens;
    assert_eq!(tokens[0].start, Position::new(1, 1));
    assert!(!tokens[0].preceded_by_newline());
    assert_eq!(tokens[1].start, Position::new(2, 3));
    assert_eq!(tokens[1].end, Position::new(2, 5));
    assert_eq!(tokens[1].range, 5..7);
    assert!(tokens[1].preceded_by_newline());
    assert_eq!(tokens[2].start, Position::new(3, 1));
    assert_eq!(tokens[3].start, Position::new(3, 2));
    assert!(tokens[3].is_eof());
}

#[test]
fn exactly_one_eof() {
    let mut lexer = Lexer::new("a", &LexOptions::default());
    assert!(!lexer.next().unwrap().is_eof());
    assert!(lexer.next().unwrap().is_eof());
    assert!(lexer.next().is_none());
    assert!(lexer.next().is_none());
}

#[test]
fn leading_bom_is_skipped() {
    assert!(lex("\u{feff}var a;", &LexOptions::default()).diagnostics.is_empty());
    assert_eq!(
        messages(&["a\u{feff}b"], &LexOptions::default()),
        expected(&[(1, "Unsafe character.")])
    );
}

#[test]
fn unsafe_character() {
    let found = messages(
        &["var a\u{b}", " =\"Here is a unsafe character\";"],
        &LexOptions::default(),
    );
    assert_eq!(found, expected(&[(1, "Unsafe character.")]));

    let lexed = lex("var a\u{b}\n =\"x\";", &LexOptions::default());
    assert_eq!(lexed.diagnostics.len(), 1);
    assert_eq!(lexed.diagnostics[0].severity, Severity::Warning);
    assert_eq!(lexed.diagnostics[0].position, Position::new(1, 6));
}

#[test]
fn unsafe_characters_in_literals_and_comments() {
    let found = messages(
        &["a; // x\u{200c}", "'\u{2028}';", "`\u{ad}`;"],
        &LexOptions::default(),
    );
    assert_eq!(
        found,
        expected(&[
            (1, "Unsafe character."),
            (2, "Unsafe character."),
            (3, "Unsafe character."),
        ])
    );
}

#[test]
fn shebang() {
    let source = "#!test\nvar a = \"xxx\";\n#!test";
    let mut lexer = Lexer::new(source, &LexOptions::default());
    assert_eq!(lexer.shebang(), Some("#!test"));
    let tokens = lexer.by_ref().collect::<Vec<_>>();
    assert!(lexer.finish().is_empty());

    let line_three = tokens
        .iter()
        .filter(|t| t.start.line == 3 && !t.is_eof())
        .map(|t| t.raw.as_str())
        .collect::<Vec<_>>();
    assert_eq!(line_three, vec!["#", "!", "test"]);
    assert!(tokens[5].is_punct("#"));
    assert!(tokens[5].is_malformed());
    assert!(tokens[5].preceded_by_newline());
}

#[test]
fn unexpected_characters() {
    let lexed = lex("a § b @dec", &LexOptions::default());
    assert_eq!(lexed.diagnostics.len(), 1);
    assert_eq!(lexed.diagnostics[0].message, "Unexpected '§'.");
    assert!(lexed.has_errors());
    assert!(lexed.tokens[1].is_malformed());
    assert!(lexed.tokens[3].is_punct("@"));
    assert!(lexed.tokens[3].is_malformed());
}

#[test]
fn numbers() {
    let found = messages(
        &[
            "var a = 10e307;",
            "var b = 10e308;",
            "var c = 0.03;",
            "var d = 03;",
            "var f = .3;",
        ],
        &LexOptions::default(),
    );
    assert_eq!(
        found,
        expected(&[
            (2, "Bad number '10e308'."),
            (4, "Don't use extra leading zeros '03'."),
            (5, "A leading decimal point can be confused with a dot: '.3'."),
        ])
    );

    let lexed = lex("var b = 10e308;", &LexOptions::default());
    assert_eq!(lexed.tokens[3].number(), Some(f64::INFINITY));
    assert!(lexed.tokens[3].is_malformed());
}

#[test]
fn number_edge_cases() {
    let found = messages(&["1.;", "0x;", "1e;", "var x = 5px;"], &LexOptions::default());
    assert_eq!(
        found,
        expected(&[
            (1, "A trailing decimal point can be confused with a dot '1.'."),
            (2, "Bad number '0x'."),
            (3, "Missing space after '1'."),
            (4, "Missing space after '5'."),
        ])
    );
}

#[test]
fn binary_and_octal_numbers() {
    let lexed = lex("var n = 0b101 + 0o17 + 0B1;", &LexOptions::default());
    assert!(lexed.diagnostics.is_empty());
    assert_eq!(lexed.tokens[3].raw, "0b101");
    assert_eq!(lexed.tokens[3].number(), Some(5.0));
    assert_eq!(lexed.tokens[5].number(), Some(15.0));
    assert_eq!(lexed.tokens[7].number(), Some(1.0));

    let found = messages(&["0b;", "0o9;"], &LexOptions::default());
    assert_eq!(
        found,
        expected(&[(1, "Bad number '0b'."), (2, "Bad number '0o'.")])
    );
}

#[test]
fn comments() {
    let found = messages(
        &["/*", "/* nested */", "*/", "/* unclosed ..."],
        &LexOptions::default(),
    );
    assert_eq!(
        found,
        expected(&[
            (2, "Nested comment."),
            (2, "Unbegun comment."),
            (4, "Unclosed comment."),
        ])
    );

    let tokens = Lexer::new("/* open", &LexOptions::default())
        .with_comments()
        .collect::<Vec<_>>();
    assert!(tokens[0].is_unclosed());
}

#[test]
fn stray_comment_end() {
    let lexed = lex("a */ b", &LexOptions::default());
    assert_eq!(lexed.diagnostics.len(), 1);
    assert_eq!(lexed.diagnostics[0].message, "Unbegun comment.");
    assert_eq!(lexed.tokens.len(), 3);
}

#[test]
fn regexp() {
    let found = messages(
        &[
            "var a1 = /\\\u{1f}/;",
            "var a2 = /[\\\u{1f}]/;",
            "var b1 = /\\</;",
            "var b2 = /[\\<]/;",
            "var c = /(?(a)b)/;",
            "var d = /)[--aa-b-cde-]/;",
            "var e = /[]/;",
            "var f = /[^]/;",
            "var g = /[a^[]/;",
            "var h = /[a-\\s-\\w-\\d\\x10-\\x20--]/;",
            "var i = /[/-a1-/]/;",
            "var j = /[a-<<-3]./;",
            "var k = /]}/;",
            "var l = /?(*)(+)({)/;",
            "var m = /a{b}b{2,c}c{3,2}d{4,?}x{30,40}/;",
            "var n = /a??b+?c*?d{3,4}? a?b+c*d{3,4}/;",
            "var o = /a\\/*  [a-^-22-]/;",
            "var p = /(?:(?=a|(?!b)))/;",
            "var q = /=x=/;",
            "var r = /dsdg;",
        ],
        &LexOptions::default(),
    );

    assert_eq!(
        found,
        expected(&[
            (1, "Unsafe character."),
            (1, "Unexpected control character in regular expression."),
            (2, "Unsafe character."),
            (2, "Unexpected control character in regular expression."),
            (3, "Unexpected escaped character '<' in regular expression."),
            (4, "Unexpected escaped character '<' in regular expression."),
            (5, "Expected ':' and instead saw '('."),
            (6, "Unescaped ')'."),
            (6, "Unescaped '-'."),
            (7, "Empty class."),
            (8, "Unescaped '^'."),
            (9, "Unescaped '^'."),
            (9, "Unescaped '['."),
            (10, "Unescaped '-'."),
            (11, "Unescaped '/'."),
            (13, "Unescaped ']'."),
            (13, "Unescaped '}'."),
            (14, "Unescaped '?'."),
            (14, "Unescaped '*'."),
            (14, "Unescaped '+'."),
            (14, "Unescaped '{'."),
            (15, "Expected a number and instead saw 'b'."),
            (15, "Expected '}' and instead saw 'c'."),
            (15, "Unescaped '}'."),
            (15, "Expected '}' and instead saw '?'."),
            (15, "'3' should not be greater than '2'."),
            (17, "Spaces are hard to count. Use {2}."),
            (17, "Unescaped '^'."),
            (17, "Unescaped '-'."),
            (19, "A regular expression literal can be confused with '/='."),
            (20, "Unclosed regular expression."),
        ])
    );
}

#[test]
fn regex_class_errors() {
    let lexed = lex("var e = /[]/;", &LexOptions::default());
    assert_eq!(lexed.diagnostics.len(), 1);
    assert_eq!(lexed.diagnostics[0].message, "Empty class.");
    assert_eq!(lexed.diagnostics[0].severity, Severity::Error);

    let found = messages(&["var k = /]}/;"], &LexOptions::default());
    assert_eq!(
        found,
        expected(&[(1, "Unescaped ']'."), (1, "Unescaped '}'.")])
    );
}

#[test]
fn unclosed_regex_resumes_on_next_line() {
    let lexed = lex("x = /abc\ny;", &LexOptions::default());
    assert!(lexed.tokens[2].is_unclosed());
    assert!(lexed.tokens[2].is_malformed());
    assert_eq!(lexed.tokens[2].raw, "/abc");
    assert!(lexed.tokens[3].preceded_by_newline());
    assert_eq!(lexed.tokens[3].raw, "y");
}

#[test]
fn regex_groups_and_flags() {
    let found = messages(
        &["x = /(a/;", "x = /a/gg;", "x = /a/q;", "x = /a//2;"],
        &LexOptions::default(),
    );
    assert_eq!(
        found,
        expected(&[
            (1, "1 unterminated regular expression group(s)."),
            (2, "Invalid regular expression flag 'g'."),
            (3, "Invalid regular expression flag 'q'."),
            (4, "Confusing regular expression."),
        ])
    );
}

#[test]
fn strings() {
    let found = messages(
        &[
            "var a = \"\u{12}\\r\";",
            "var b = '\\g';",
            "var c = \"\\u0022\\u0070\\u005C\";",
            "var x = \"ax",
        ],
        &LexOptions::default(),
    );
    assert_eq!(
        found,
        expected(&[
            (1, "Control character in string: ."),
            (1, "Unsafe character."),
            (2, "Bad escapement."),
            (3, "Unnecessary escapement."),
            (4, "Unclosed string."),
        ])
    );
}

#[test]
fn escaping_the_other_quote_is_unnecessary() {
    let found = messages(
        &[
            "var s = \"it\\'s\";",
            "var t = 'say \\\"hi\\\"';",
            "var u = 'it\\'s';",
            "var v = `it\\'s`;",
        ],
        &LexOptions::default(),
    );
    assert_eq!(
        found,
        expected(&[(1, "Unnecessary escapement."), (2, "Unnecessary escapement.")])
    );

    let lexed = lex("var s = \"it\\'s\";", &LexOptions::default());
    assert_eq!(lexed.tokens[3].string(), Some("it's"));
    assert_eq!(lexed.diagnostics[0].position, Position::new(1, 12));
}

#[test]
fn bad_escapes_are_kept_verbatim() {
    let lexed = lex("'\\g\\x4'", &LexOptions::default());
    assert_eq!(lexed.tokens[0].string(), Some("\\g\\x4"));
}

#[test]
fn control_character_quotes_preceding_text() {
    let lexed = lex("'ab\u{1}c'", &LexOptions::default());
    assert_eq!(
        lexed.diagnostics[0].message,
        "Control character in string: ab."
    );
}

#[test]
fn unclosed_string_resumes_on_next_line() {
    let lexed = lex("a = 'abc\nb;", &LexOptions::default());
    assert!(lexed.tokens[2].is_unclosed());
    assert_eq!(lexed.tokens[2].raw, "'abc");
    assert_eq!(lexed.tokens[3].raw, "b");
    assert!(lexed.has_errors());
}

#[test]
fn eol_escapement() {
    let lexed = lex("var s = \"a\\\nb\";", &LexOptions::default());
    assert_eq!(
        lexed.diagnostics[0].message,
        "Bad escapement of EOL. Use option multistr if needed."
    );
    assert_eq!(lexed.tokens[3].string(), Some("ab"));

    let multistr = LexOptions::default().multistr(true);
    assert!(lex("var s = \"a\\\r\nb\";", &multistr).diagnostics.is_empty());
}

#[test]
fn carriage_returns_are_line_terminators() {
    for source in &["var a = 1;\r\nvar b = 2;\r\n", "a;\rb;"] {
        let lexed = lex(source, &LexOptions::default());
        assert!(lexed.diagnostics.is_empty(), "{:?}", lexed.diagnostics);
    }

    let lexed = lex("a;\r\nb;\rc;", &LexOptions::default());
    let lines = lexed.tokens.iter().map(|t| t.start.line).collect::<Vec<_>>();
    assert_eq!(lines, vec![1, 1, 2, 2, 3, 3, 3]);
}

#[test]
fn script_urls() {
    let source = ["var u = 'javascript:void(0)';", "var v = \"VBScript :x\";"];
    assert_eq!(
        messages(&source, &LexOptions::default()),
        expected(&[(1, "Script URL."), (2, "Script URL.")])
    );

    let options = LexOptions {
        scripturl: true,
        ..LexOptions::default()
    };
    assert!(messages(&source, &options).is_empty());
}

#[test]
fn own_property() {
    let found = messages(&["hasOwnProperty: for(;;) {break;}"], &LexOptions::default());
    assert_eq!(
        found,
        expected(&[(1, "'hasOwnProperty' is a really bad name.")])
    );

    assert!(messages(&["obj.hasOwnProperty(key);"], &LexOptions::default()).is_empty());
}

#[test]
fn proto_and_iterator() {
    let source = ["a.__proto__ = b;", "c.__iterator__ = d;"];
    assert_eq!(
        messages(&source, &LexOptions::default()),
        expected(&[
            (1, "The '__proto__' property is deprecated."),
            (2, "'__iterator__' is only available in JavaScript 1.7."),
        ])
    );

    let options = LexOptions {
        proto: true,
        iterator: true,
        ..LexOptions::default()
    };
    assert!(messages(&source, &options).is_empty());
}

#[test]
fn json_mode() {
    let found = messages(
        &[
            "{",
            "   a: 2,",
            "   'b': \"hallo\\\"\\v\\x12\\'world\",",
            "   \"c\\\"\\v\\x12\": '4',",
            "   \"d\": \"4\\",
            "   \",",
            "   \"e\": 0x332,",
            "   \"x\": 0",
            "}",
        ],
        &LexOptions::json().multistr(true),
    );
    assert_eq!(
        found,
        expected(&[
            (2, "Expected a string and instead saw a."),
            (3, "Strings must use doublequote."),
            (3, "Avoid \\v."),
            (3, "Avoid \\x-."),
            (3, "Avoid \\'."),
            (4, "Avoid \\v."),
            (4, "Avoid \\x-."),
            (4, "Strings must use doublequote."),
            (5, "Avoid EOL escapement."),
            (7, "Avoid 0x-. '0x332'."),
        ])
    );
}

#[test]
fn json_checks_only_apply_in_json_mode() {
    let found = messages(&["x = {a: '\\v', b: 0x1};"], &LexOptions::default());
    assert!(found.is_empty());
}

#[test]
fn line_checks() {
    let options = LexOptions::default().maxlen(10);
    assert_eq!(
        messages(&["var a = 1;", "var bb = 22;"], &options),
        expected(&[(2, "Line too long.")])
    );

    let options = LexOptions {
        trailing: true,
        ..LexOptions::default()
    };
    assert_eq!(
        messages(&["a; ", "b;", "c;\t"], &options),
        expected(&[(1, "Trailing whitespace."), (3, "Trailing whitespace.")])
    );
}

#[test]
fn mixed_spaces_and_tabs() {
    let source = ["\t  a;", "  \tb;", "\t * c"];
    assert_eq!(
        messages(&source, &LexOptions::default()),
        expected(&[(1, "Mixed spaces and tabs."), (2, "Mixed spaces and tabs.")])
    );

    let options = LexOptions {
        smarttabs: true,
        ..LexOptions::default()
    };
    assert_eq!(
        messages(&source, &options),
        expected(&[(2, "Mixed spaces and tabs.")])
    );
}

#[test]
fn unclosed_template() {
    let lexed = lex("var t = `abc${x}", &LexOptions::default());
    assert_eq!(lexed.diagnostics.len(), 1);
    assert_eq!(lexed.diagnostics[0].message, "Unclosed template literal.");
    assert!(lexed.tokens[3].is_unclosed());

    let found = messages(&["`\\x41 \\q \\``"], &LexOptions::default());
    assert_eq!(
        found,
        expected(&[(1, "Unnecessary escapement."), (1, "Bad escapement.")])
    );
}

#[test]
fn options_from_toml() {
    let options = LexOptions::from_toml("json = true\nmultistr = true").unwrap();
    assert_eq!(
        messages(&["{", "  \"a\": \"b\\", "c\"", "}"], &options),
        expected(&[(2, "Avoid EOL escapement.")])
    );
}

#[test]
fn round_trip() {
    let source = "var a = [1, 2.5, 'x'];\n// note\nfunction f(b) {\n\treturn b / 2 + `t${a}`;\n}\n/re+/g.test(a);\n";
    let tokens = Lexer::new(source, &LexOptions::default())
        .with_comments()
        .collect::<Vec<_>>();

    let mut rebuilt = String::new();
    let mut last = 0;
    for token in &tokens {
        let gap = &source[last..token.range.start];
        assert!(gap.chars().all(char::is_whitespace), "unexpected gap {:?}", gap);
        rebuilt.push_str(gap);
        rebuilt.push_str(&token.raw);
        last = token.range.end;
    }
    rebuilt.push_str(&source[last..]);

    assert_eq!(rebuilt, source);
    assert_eq!(tokens.iter().filter(|t| t.kind == TokenKind::RegExpLiteral).count(), 1);
}

#[quickcheck]
fn lexing_is_total(source: String) -> bool {
    let lexed = lex(&source, &LexOptions::default());
    lexed.tokens.iter().filter(|t| t.is_eof()).count() == 1
        && lexed.tokens.last().map_or(false, Token::is_eof)
}

#[quickcheck]
fn json_lexing_is_total(source: String) -> bool {
    let lexed = lex(&source, &LexOptions::json().multistr(true));
    lexed.tokens.last().map_or(false, Token::is_eof)
}

#[quickcheck]
fn tokens_are_ordered_and_match_source(source: String) -> bool {
    let tokens = Lexer::new(&source, &LexOptions::default())
        .with_comments()
        .collect::<Vec<_>>();

    tokens
        .windows(2)
        .all(|w| w[0].range.end <= w[1].range.start && w[0].end <= w[1].start)
        && tokens
            .iter()
            .all(|t| t.raw == source[t.range.clone()] && t.start <= t.end)
}

#[quickcheck]
fn diagnostics_are_ordered(source: String) -> bool {
    lex(&source, &LexOptions::default())
        .diagnostics
        .windows(2)
        .all(|w| w[0].position <= w[1].position)
}

#[quickcheck]
fn lexing_is_idempotent(source: String) -> bool {
    let summary = |lexed: Lexed| {
        let tokens = lexed
            .tokens
            .into_iter()
            .map(|t| (t.kind, t.raw, t.range, t.flags))
            .collect::<Vec<_>>();
        (tokens, lexed.diagnostics)
    };
    let options = LexOptions::default();
    summary(lex(&source, &options)) == summary(lex(&source, &options))
}
