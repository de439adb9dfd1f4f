//! Best-effort JSON parsing for payloads that are still being streamed.
//!
//! [`parse_partial`] closes whatever the text left open: unterminated strings
//! keep their received prefix, open arrays and objects are closed, and members
//! whose value has not started (or is a half-written literal) are dropped.
//! Text that can never become valid JSON yields `None`.

use serde_json::Map;
use serde_json::Value;

/// Parse a possibly truncated JSON document.
///
/// Returns `None` for empty input, for input whose only value is still
/// incomplete past recovery, and for real syntax errors.
pub fn parse_partial(text: &str) -> Option<Value> {
    let mut parser = Parser { src: text, pos: 0 };
    parser.skip_ws();
    if parser.at_end() {
        return None;
    }
    let value = parser.value().ok()??;
    parser.skip_ws();
    if parser.at_end() { Some(value) } else { None }
}

/// Strict parse, used once the payload is known to be complete.
pub fn parse_complete(text: &str) -> Result<Value, serde_json::Error> {
    if text.trim().is_empty() {
        // Tools without parameters often stream nothing at all.
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_str(text)
}

/// Unrecoverable syntax error.
struct Invalid;

type Step<T> = Result<T, Invalid>;

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl Parser<'_> {
    fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_ws(&mut self) {
        while let Some(c) = self.peek() {
            if matches!(c, ' ' | '\t' | '\n' | '\r') {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    /// `Ok(None)` means the input ended before a usable value.
    fn value(&mut self) -> Step<Option<Value>> {
        self.skip_ws();
        match self.peek() {
            None => Ok(None),
            Some('{') => self.object().map(Some),
            Some('[') => self.array().map(Some),
            Some('"') => self.string().map(|(s, _)| s.map(Value::String)),
            Some('t') => self.literal("true", Value::Bool(true)),
            Some('f') => self.literal("false", Value::Bool(false)),
            Some('n') => self.literal("null", Value::Null),
            Some(c) if c == '-' || c.is_ascii_digit() => self.number(),
            Some(_) => Err(Invalid),
        }
    }

    fn object(&mut self) -> Step<Value> {
        self.bump();
        let mut map = Map::new();
        let mut first = true;
        loop {
            self.skip_ws();
            match self.peek() {
                None => return Ok(Value::Object(map)),
                Some('}') => {
                    self.bump();
                    return Ok(Value::Object(map));
                }
                _ => {}
            }
            if !first {
                if self.bump() != Some(',') {
                    return Err(Invalid);
                }
                self.skip_ws();
                if self.at_end() {
                    return Ok(Value::Object(map));
                }
            }
            first = false;

            if self.peek() != Some('"') {
                return Err(Invalid);
            }
            let (key, complete) = self.string()?;
            let Some(key) = key.filter(|_| complete) else {
                return Ok(Value::Object(map));
            };
            self.skip_ws();
            match self.bump() {
                None => return Ok(Value::Object(map)),
                Some(':') => {}
                Some(_) => return Err(Invalid),
            }
            match self.value()? {
                Some(value) => {
                    map.insert(key, value);
                }
                None => return Ok(Value::Object(map)),
            }
        }
    }

    fn array(&mut self) -> Step<Value> {
        self.bump();
        let mut items = Vec::new();
        let mut first = true;
        loop {
            self.skip_ws();
            match self.peek() {
                None => return Ok(Value::Array(items)),
                Some(']') => {
                    self.bump();
                    return Ok(Value::Array(items));
                }
                _ => {}
            }
            if !first {
                if self.bump() != Some(',') {
                    return Err(Invalid);
                }
                self.skip_ws();
            }
            first = false;
            match self.value()? {
                Some(value) => items.push(value),
                None => return Ok(Value::Array(items)),
            }
        }
    }

    /// Returns the decoded prefix and whether the closing quote was seen.
    fn string(&mut self) -> Step<(Option<String>, bool)> {
        self.bump();
        let mut out = String::new();
        loop {
            let Some(c) = self.bump() else {
                return Ok((Some(out), false));
            };
            match c {
                '"' => return Ok((Some(out), true)),
                '\\' => match self.escape()? {
                    Some(decoded) => out.push(decoded),
                    // Escape cut off by the end of input.
                    None => return Ok((Some(out), false)),
                },
                other => out.push(other),
            }
        }
    }

    fn escape(&mut self) -> Step<Option<char>> {
        let Some(c) = self.bump() else {
            return Ok(None);
        };
        let decoded = match c {
            '"' => '"',
            '\\' => '\\',
            '/' => '/',
            'b' => '\u{8}',
            'f' => '\u{c}',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'u' => return self.unicode_escape(),
            _ => return Err(Invalid),
        };
        Ok(Some(decoded))
    }

    fn hex4(&mut self) -> Step<Option<u32>> {
        let rest = &self.src[self.pos..];
        let digits: String = rest.chars().take(4).collect();
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Invalid);
        }
        if digits.len() < 4 {
            self.pos = self.src.len();
            return Ok(None);
        }
        self.pos += 4;
        u32::from_str_radix(&digits, 16).map(Some).map_err(|_| Invalid)
    }

    fn unicode_escape(&mut self) -> Step<Option<char>> {
        let Some(high) = self.hex4()? else {
            return Ok(None);
        };
        if !(0xD800..0xDC00).contains(&high) {
            return Ok(Some(char::from_u32(high).unwrap_or(char::REPLACEMENT_CHARACTER)));
        }
        let rest = &self.src[self.pos..];
        if rest.is_empty() || rest == "\\" {
            self.pos = self.src.len();
            return Ok(None);
        }
        if !rest.starts_with("\\u") {
            return Ok(Some(char::REPLACEMENT_CHARACTER));
        }
        self.pos += 2;
        let Some(low) = self.hex4()? else {
            return Ok(None);
        };
        if !(0xDC00..0xE000).contains(&low) {
            return Err(Invalid);
        }
        let code = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
        Ok(Some(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)))
    }

    fn literal(&mut self, word: &str, value: Value) -> Step<Option<Value>> {
        let rest = &self.src[self.pos..];
        if rest.starts_with(word) {
            self.pos += word.len();
            return Ok(Some(value));
        }
        if word.starts_with(rest) {
            // Half-written literal at the end of input.
            self.pos = self.src.len();
            return Ok(None);
        }
        Err(Invalid)
    }

    fn number(&mut self) -> Step<Option<Value>> {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E') {
                self.pos += 1;
            } else {
                break;
            }
        }
        let text = &self.src[start..self.pos];
        if let Ok(value) = serde_json::from_str::<Value>(text) {
            return Ok(Some(value));
        }
        if !self.at_end() {
            return Err(Invalid);
        }
        // Truncated number: keep the longest valid prefix.
        let mut end = text.len();
        while end > 0 {
            end -= 1;
            if let Ok(value) = serde_json::from_str::<Value>(&text[..end]) {
                return Ok(Some(value));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
#[path = "lib.test.rs"]
mod tests;
