//! Character classes driving the lexer's dispatch.

/// Lexical class of a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Whitespace,
    Digit,
    Dot,
    HyphenMinus,
    Colon,
    Comma,
    ParenthesisOpen,
    Quote,
    Apostrophe,
    Ampersand,
    Dollar,
    CurlyBraceOpen,
    CurlyBraceClose,
    NameStartChar,
    /// Continues a name but cannot start one.
    NameChar,
    Punctuation,
    Other,
}

impl CharClass {
    pub fn of(c: char) -> CharClass {
        match c {
            ' ' | '\t' | '\r' | '\n' => CharClass::Whitespace,
            '0'..='9' => CharClass::Digit,
            '.' => CharClass::Dot,
            '-' => CharClass::HyphenMinus,
            ':' => CharClass::Colon,
            ',' => CharClass::Comma,
            '(' => CharClass::ParenthesisOpen,
            '"' => CharClass::Quote,
            '\'' => CharClass::Apostrophe,
            '&' => CharClass::Ampersand,
            '$' => CharClass::Dollar,
            '{' => CharClass::CurlyBraceOpen,
            '}' => CharClass::CurlyBraceClose,
            ')' | '[' | ']' | ';' | '=' | '!' | '<' | '>' | '|' | '+' | '*' | '/' | '@' | '?'
            | '#' | '%' => CharClass::Punctuation,
            c if is_name_start_char(c) => CharClass::NameStartChar,
            c if is_name_only_char(c) => CharClass::NameChar,
            _ => CharClass::Other,
        }
    }

    #[inline]
    pub fn is_name_start(self) -> bool {
        self == CharClass::NameStartChar
    }

    /// Whether the class may appear after the first character of an NCName.
    #[inline]
    pub fn is_name_char(self) -> bool {
        matches!(
            self,
            CharClass::NameStartChar
                | CharClass::NameChar
                | CharClass::Digit
                | CharClass::Dot
                | CharClass::HyphenMinus
        )
    }
}

/// XML 1.0 (5th edition) `NameStartChar`, excluding `:`.
fn is_name_start_char(c: char) -> bool {
    matches!(c,
        'A'..='Z'
        | '_'
        | 'a'..='z'
        | '\u{C0}'..='\u{D6}'
        | '\u{D8}'..='\u{F6}'
        | '\u{F8}'..='\u{2FF}'
        | '\u{370}'..='\u{37D}'
        | '\u{37F}'..='\u{1FFF}'
        | '\u{200C}'..='\u{200D}'
        | '\u{2070}'..='\u{218F}'
        | '\u{2C00}'..='\u{2FEF}'
        | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}'
        | '\u{FDF0}'..='\u{FFFD}'
        | '\u{10000}'..='\u{EFFFF}'
    )
}

fn is_name_only_char(c: char) -> bool {
    matches!(c, '\u{B7}' | '\u{300}'..='\u{36F}' | '\u{203F}'..='\u{2040}')
}

/// Whether `text` is a complete NCName.
pub fn is_ncname(text: &str) -> bool {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    CharClass::of(first).is_name_start() && chars.all(|c| CharClass::of(c).is_name_char())
}
