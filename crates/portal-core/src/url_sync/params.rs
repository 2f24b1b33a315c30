use std::fmt;

use url::form_urlencoded;

use crate::filter::Choice;
use crate::models::WireEnum;

/// Ordered query-string parameters with `URLSearchParams` semantics.
/// 具有 `URLSearchParams` 语义的有序查询参数
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Decode a query string; a leading `?` is ignored. Never fails.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self {
            pairs: form_urlencoded::parse(query.as_bytes())
                .into_owned()
                .collect(),
        }
    }

    /// First value stored under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Replace the first `name` entry in place and drop any later duplicates,
    /// or append when absent.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.pairs.iter().position(|(key, _)| key == name) {
            Some(index) => {
                self.pairs[index].1 = value;
                let mut seen = 0usize;
                self.pairs.retain(|(key, _)| {
                    if key != name {
                        return true;
                    }
                    seen += 1;
                    seen == 1
                });
            }
            None => self.pairs.push((name.to_string(), value)),
        }
    }

    pub fn delete(&mut self, name: &str) {
        self.pairs.retain(|(key, _)| key != name);
    }

    /// Stable sort by parameter name, comparing UTF-16 code units.
    pub fn sort(&mut self) {
        self.pairs
            .sort_by(|(a, _), (b, _)| a.encode_utf16().cmp(b.encode_utf16()));
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// `application/x-www-form-urlencoded` serialization without a leading `?`.
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }

    /// Write a free-text filter; empty deletes the parameter.
    pub(crate) fn put_text(&mut self, name: &str, value: &str) {
        if value.is_empty() {
            self.delete(name);
        } else {
            self.set(name, value);
        }
    }

    /// Write a categorical filter; `Any` deletes the parameter.
    pub(crate) fn put_choice<T: WireEnum>(&mut self, name: &str, choice: &Choice<T>) {
        match choice {
            Choice::Any => self.delete(name),
            Choice::Only(member) => self.set(name, member.as_str()),
        }
    }

    /// Non-empty free-text value.
    pub(crate) fn text(&self, name: &str) -> Option<String> {
        self.get(name)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    }

    /// Value that names a member of `T` exactly.
    pub(crate) fn member<T: WireEnum>(&self, name: &str) -> Option<T> {
        self.get(name).and_then(T::from_wire)
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

/// Leading-integer parse: optional whitespace and sign, then digits.
/// Anything after the digits is ignored; no digits at all yields `None`.
pub fn parse_leading_int(value: &str) -> Option<i32> {
    let trimmed = value.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    let signed = if negative { -magnitude } else { magnitude };
    i32::try_from(signed).ok()
}
