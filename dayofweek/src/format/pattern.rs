use std::{iter::Peekable, str::Chars};

use crate::{DowError, DowResult};

/// Width of a rendered weekday name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NameWidth {
    /// `EEE`, e.g. "Tue"
    Abbreviated,
    /// `EEEE`, e.g. "Tuesday"
    Wide,
    /// `EEEEE`, e.g. "T"
    Narrow,
    /// `EEEEEE`, e.g. "Tu"
    Short,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PatternItem {
    Literal(String),
    Name(NameWidth),
    /// Day number relative to the first day of week, starting at 1.
    LocalNumber { padded: bool },
}

/// A parsed weekday-only date pattern.
///
/// Uses the CLDR date pattern syntax, restricted to the day-of-week fields
/// `E`, `e` and `c`. Text in single quotes and any character that is not an
/// ASCII letter is copied through.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeekdayPattern {
    items: Vec<PatternItem>,
}

impl WeekdayPattern {
    pub fn parse(pattern: &str) -> DowResult<WeekdayPattern> {
        if pattern.is_empty() {
            return Err(DowError::format("empty pattern"));
        }

        let mut items = Vec::new();
        let mut literal = String::new();
        let mut chars = pattern.chars().peekable();

        while let Some(c) = chars.next() {
            if c == '\'' {
                read_quoted(&mut chars, &mut literal, pattern)?;
            } else if c.is_ascii_alphabetic() {
                let mut width = 1;
                while chars.peek() == Some(&c) {
                    chars.next();
                    width += 1;
                }

                if !literal.is_empty() {
                    items.push(PatternItem::Literal(std::mem::take(&mut literal)));
                }
                items.push(field(c, width, pattern)?);
            } else {
                literal.push(c);
            }
        }

        if !literal.is_empty() {
            items.push(PatternItem::Literal(literal));
        }

        if !items
            .iter()
            .any(|item| !matches!(item, PatternItem::Literal(_)))
        {
            return Err(DowError::format(&format!(
                "pattern '{}' has no weekday field",
                pattern
            )));
        }

        Ok(WeekdayPattern { items })
    }

    pub fn items(&self) -> &[PatternItem] {
        &self.items
    }
}

fn read_quoted(
    chars: &mut Peekable<Chars<'_>>,
    literal: &mut String,
    pattern: &str,
) -> DowResult<()> {
    // '' outside of a quoted section is a single quote
    if chars.peek() == Some(&'\'') {
        chars.next();
        literal.push('\'');
        return Ok(());
    }

    loop {
        match chars.next() {
            Some('\'') => {
                if chars.peek() == Some(&'\'') {
                    chars.next();
                    literal.push('\'');
                } else {
                    return Ok(());
                }
            }
            Some(c) => literal.push(c),
            None => {
                return Err(DowError::format(&format!(
                    "unterminated quote in pattern '{}'",
                    pattern
                )))
            }
        }
    }
}

fn field(letter: char, width: usize, pattern: &str) -> DowResult<PatternItem> {
    let item = match (letter, width) {
        ('E', 1..=3) => PatternItem::Name(NameWidth::Abbreviated),
        ('e', 1) | ('c', 1..=2) => PatternItem::LocalNumber { padded: false },
        ('e', 2) => PatternItem::LocalNumber { padded: true },
        ('E' | 'e' | 'c', 3) => PatternItem::Name(NameWidth::Abbreviated),
        ('E' | 'e' | 'c', 4) => PatternItem::Name(NameWidth::Wide),
        ('E' | 'e' | 'c', 5) => PatternItem::Name(NameWidth::Narrow),
        ('E' | 'e' | 'c', 6) => PatternItem::Name(NameWidth::Short),
        ('E' | 'e' | 'c', _) => {
            return Err(DowError::format(&format!(
                "field '{}' is too wide in pattern '{}'",
                letter.to_string().repeat(width),
                pattern
            )))
        }
        _ => {
            return Err(DowError::format(&format!(
                "'{}' is not a day-of-week field in pattern '{}'",
                letter, pattern
            )))
        }
    };

    Ok(item)
}
