use alloc::{string::String, vec::Vec};

use super::*;

fn significant(input: &str) -> Result<Vec<Option<char>>, MinifyError> {
    let mut scanner = Scanner::new(input);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_significant()?;
        tokens.push(token);
        if token.is_none() {
            return Ok(tokens);
        }
    }
}

#[test]
fn line_comment_becomes_its_terminator() {
    let tokens = significant("a//x y z\nb").unwrap();
    assert_eq!(tokens, [Some('a'), Some('\n'), Some('b'), None]);
}

#[test]
fn line_comment_at_end_of_input_becomes_end() {
    let tokens = significant("a// trailing").unwrap();
    assert_eq!(tokens, [Some('a'), None]);
}

#[test]
fn block_comment_becomes_single_space() {
    let tokens = significant("a/* one\ntwo */b").unwrap();
    assert_eq!(tokens, [Some('a'), Some(' '), Some('b'), None]);
}

#[test]
fn block_comment_with_extra_stars() {
    let tokens = significant("/***x**/;").unwrap();
    assert_eq!(tokens, [Some(' '), Some(';'), None]);
}

#[test]
fn lone_slash_is_pushed_back() {
    let tokens = significant("a/b").unwrap();
    assert_eq!(tokens, [Some('a'), Some('/'), Some('b'), None]);
}

#[test]
fn unterminated_block_comment_reports_opening() {
    let err = significant("x;\n  /* never closed *").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnterminatedComment);
    assert_eq!((err.line, err.column), (2, 3));
}

fn copy_string(input: &str) -> (Result<(), MinifyError>, String, Option<char>) {
    let mut scanner = Scanner::new(input);
    let quote = scanner.next_significant().unwrap().unwrap();
    let mut out = String::new();
    let res = scanner.copy_string_literal(quote, &mut out);
    let rest = scanner.next_significant().unwrap();
    (res, out, rest)
}

#[test]
fn string_copy_stops_before_closing_quote() {
    let (res, out, rest) = copy_string("'a  b';");
    res.unwrap();
    assert_eq!(out, "'a  b");
    assert_eq!(rest, Some(';'));
}

#[test]
fn string_copy_keeps_escapes_and_other_quotes() {
    let (res, out, _) = copy_string(r#""say \"hi\" it's \\""#);
    res.unwrap();
    assert_eq!(out, r#""say \"hi\" it's \\"#);
}

#[test]
fn string_copy_keeps_comment_markers_and_tabs() {
    let (res, out, _) = copy_string("'//\t/* */'");
    res.unwrap();
    assert_eq!(out, "'//\t/* */");
}

#[test]
fn string_line_continuation_survives_crlf() {
    let (res, out, _) = copy_string("'a\\\r\nb'");
    res.unwrap();
    assert_eq!(out, "'a\\\nb");
}

#[test]
fn string_broken_by_newline() {
    let mut scanner = Scanner::new("  'abc\ndef'");
    scanner.next_significant().unwrap();
    scanner.next_significant().unwrap();
    let quote = scanner.next_significant().unwrap().unwrap();
    let err = scanner.copy_string_literal(quote, &mut String::new()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnterminatedString);
    assert_eq!((err.line, err.column), (1, 3));
}

#[test]
fn string_broken_by_end_after_escape() {
    let (res, _, _) = copy_string("'abc\\");
    assert_eq!(res.unwrap_err().kind(), ErrorKind::UnterminatedString);
}

fn copy_regex(input: &str) -> (Result<(), MinifyError>, String) {
    let mut scanner = Scanner::new(input);
    assert_eq!(scanner.next_significant().unwrap(), Some('/'));
    let mut out = String::new();
    let res = scanner.copy_regex_literal(&mut out);
    (res, out)
}

#[test]
fn regex_copy_stops_before_closing_slash() {
    let (res, out) = copy_regex("/a b+/g");
    res.unwrap();
    assert_eq!(out, "a b+");
}

#[test]
fn regex_copy_keeps_escaped_slash() {
    let (res, out) = copy_regex(r"/^\/\/ x\\/");
    res.unwrap();
    assert_eq!(out, r"^\/\/ x\\");
}

#[test]
fn regex_broken_by_newline() {
    let (res, _) = copy_regex("/abc\n/");
    let err = res.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnterminatedRegex);
    assert_eq!((err.line, err.column), (1, 1));
}

#[test]
fn regex_broken_by_end() {
    let (res, _) = copy_regex("/abc\\");
    assert_eq!(res.unwrap_err().kind(), ErrorKind::UnterminatedRegex);
}
