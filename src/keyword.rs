//! The reserved words of Lox.

use crate::TokenKind;

use fnv::FnvHashMap;
use once_cell::sync::Lazy;

/// Reserved words and the token each one scans to.
pub static KEYWORDS: Lazy<FnvHashMap<&'static str, TokenKind>> = Lazy::new(|| {
    let mut map = FnvHashMap::default();
    map.insert("and", TokenKind::And);
    map.insert("class", TokenKind::Class);
    map.insert("else", TokenKind::Else);
    map.insert("false", TokenKind::False);
    map.insert("for", TokenKind::For);
    map.insert("fun", TokenKind::Fun);
    map.insert("if", TokenKind::If);
    map.insert("nil", TokenKind::Nil);
    map.insert("or", TokenKind::Or);
    map.insert("print", TokenKind::Print);
    map.insert("return", TokenKind::Return);
    map.insert("super", TokenKind::Super);
    map.insert("this", TokenKind::This);
    map.insert("true", TokenKind::True);
    map.insert("var", TokenKind::Var);
    map.insert("while", TokenKind::While);
    map
});

/// Look up a lexeme in the keyword table. `None` means it's an identifier.
pub fn lookup(s: &str) -> Option<TokenKind> {
    KEYWORDS.get(s).copied()
}

#[cfg(test)]
mod test {
    use super::{lookup, KEYWORDS};
    use crate::TokenKind;

    #[test]
    fn exact_match_only() {
        assert_eq!(lookup("while"), Some(TokenKind::While));
        assert_eq!(lookup("While"), None);
        assert_eq!(lookup("whil"), None);
        assert_eq!(lookup("while1"), None);
        assert_eq!(lookup(""), None);
    }

    #[test]
    fn table_agrees_with_kinds() {
        assert_eq!(KEYWORDS.len(), 16);
        for (spelling, kind) in KEYWORDS.iter() {
            assert!(kind.is_keyword(), "{spelling} maps to {kind}");
            assert_eq!(kind.name().to_lowercase(), *spelling);
        }
    }

    #[test]
    fn shared_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| lookup("return")))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), Some(TokenKind::Return));
        }
    }
}
