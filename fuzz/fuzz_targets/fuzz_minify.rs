#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

/// Fragments weighted towards the constructs the minifier treats specially,
/// so the fuzzer reaches literal and comment handling quickly.
#[derive(Debug, Arbitrary)]
enum Fragment {
    Raw(String),
    Word(u8),
    Punct(u8),
    Space(u8),
    Quote(bool, String),
    Regex(String),
    LineComment(String),
    BlockComment(String),
}

const PUNCT: &[u8] = b"{}()[];,.=:?!&|+-*/<>%^~";
const SPACE: &[&str] = &[" ", "\t", "\n", "\r", "\r\n", "\u{0c}", "\u{0}"];

impl Fragment {
    fn render(&self, out: &mut String) {
        match self {
            Fragment::Raw(s) => out.push_str(s),
            Fragment::Word(n) => {
                out.push_str("id");
                out.push_str(&n.to_string());
            }
            Fragment::Punct(n) => out.push(PUNCT[*n as usize % PUNCT.len()] as char),
            Fragment::Space(n) => out.push_str(SPACE[*n as usize % SPACE.len()]),
            Fragment::Quote(double, body) => {
                let quote = if *double { '"' } else { '\'' };
                out.push(quote);
                out.push_str(body);
                out.push(quote);
            }
            Fragment::Regex(body) => {
                out.push_str("=/");
                out.push_str(body);
                out.push('/');
            }
            Fragment::LineComment(body) => {
                out.push_str("//");
                out.push_str(body);
                out.push('\n');
            }
            Fragment::BlockComment(body) => {
                out.push_str("/*");
                out.push_str(body);
                out.push_str("*/");
            }
        }
    }
}

fn check(src: &str) {
    let Ok(out) = jsmin::minify(src) else {
        return;
    };
    assert!(out.len() <= src.len(), "output grew: {src:?} -> {out:?}");
    assert!(!out.starts_with(&[' ', '\n'][..]), "leading separator: {out:?}");
    assert!(!out.ends_with(&[' ', '\n'][..]), "trailing separator: {out:?}");
}

fuzz_target!(|fragments: Vec<Fragment>| {
    let mut src = String::new();
    for fragment in &fragments {
        fragment.render(&mut src);
    }
    check(&src);
});
