//! Locale-aware string collation for brand and model ordering.
//!
//! The tree presents Russian and Latin catalog labels side by side, so the
//! sort must follow reader expectations for both alphabets rather than raw
//! code-point order: digits before letters, Latin before Cyrillic, ё right
//! after е, case differences last. Comparison runs over a multi-level
//! [`CollationKey`]: all primary weights first, then secondary (diacritics,
//! ё), then tertiary (case). Scripts outside the two alphabets fall back to
//! code-point order within their level.

use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use super::key::is_cyrillic;

const GROUP_WHITESPACE: u32 = 0;
const GROUP_SYMBOL: u32 = 1;
const GROUP_DIGIT: u32 = 2;
const GROUP_LATIN: u32 = 3;
const GROUP_CYRILLIC: u32 = 4;
const GROUP_OTHER: u32 = 5;

/// Secondary weight of ё; below every combining-mark weight so precomposed
/// ё stays the closest follower of е.
const YO_SECONDARY: u16 = 1;

/// Precomputed comparison key for one string.
///
/// Field order is comparison order: lexicographic on primaries, ties broken
/// by secondaries, then tertiaries.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    primaries: Vec<u32>,
    secondaries: Vec<u16>,
    tertiaries: Vec<u8>,
}

impl CollationKey {
    #[must_use]
    pub fn new(input: &str) -> Self {
        let mut key = Self {
            primaries: Vec::with_capacity(input.len()),
            secondaries: Vec::with_capacity(input.len()),
            tertiaries: Vec::with_capacity(input.len()),
        };
        for c in input.chars() {
            key.append_char(c);
        }
        key
    }

    fn push(&mut self, primary: u32, secondary: u16, tertiary: u8) {
        self.primaries.push(primary);
        self.secondaries.push(secondary);
        self.tertiaries.push(tertiary);
    }

    fn append_char(&mut self, c: char) {
        match c {
            // ё is primary-equal to е; the difference lives at the
            // secondary level, like a diacritic.
            'ё' => self.push(cyrillic_primary('е'), YO_SECONDARY, 0),
            'Ё' => self.push(cyrillic_primary('е'), YO_SECONDARY, 1),
            'а'..='я' => self.push(cyrillic_primary(c), 0, 0),
            'А'..='Я' => {
                let lowered = char::from_u32(c as u32 + 0x20).unwrap_or(c);
                self.push(cyrillic_primary(lowered), 0, 1);
            }
            _ => {
                for piece in c.nfkd() {
                    self.append_piece(piece);
                }
            }
        }
    }

    fn append_piece(&mut self, piece: char) {
        if is_combining_mark(piece) {
            self.secondaries.push(mark_secondary(piece));
            return;
        }
        match piece {
            'ё' => self.push(cyrillic_primary('е'), YO_SECONDARY, 0),
            'Ё' => self.push(cyrillic_primary('е'), YO_SECONDARY, 1),
            'а'..='я' => self.push(cyrillic_primary(piece), 0, 0),
            'А'..='Я' => {
                let lowered = char::from_u32(piece as u32 + 0x20).unwrap_or(piece);
                self.push(cyrillic_primary(lowered), 0, 1);
            }
            'a'..='z' => self.push(latin_primary(piece), 0, 0),
            'A'..='Z' => self.push(latin_primary(piece.to_ascii_lowercase()), 0, 1),
            '0'..='9' => self.push(
                primary(GROUP_DIGIT, piece as u32 - '0' as u32),
                0,
                0,
            ),
            _ if piece.is_whitespace() => {
                self.push(primary(GROUP_WHITESPACE, piece as u32), 0, 0);
            }
            _ if is_cyrillic(piece) => {
                // Non-Russian Cyrillic letters, placed after the а..я range
                self.push(primary(GROUP_CYRILLIC, 64 + (piece as u32 - 0x400)), 0, 0);
            }
            _ if piece.is_numeric() => {
                self.push(primary(GROUP_DIGIT, piece as u32), 0, 0);
            }
            _ if piece.is_alphabetic() => {
                self.push(primary(GROUP_OTHER, piece as u32), 0, 0);
            }
            _ => self.push(primary(GROUP_SYMBOL, piece as u32), 0, 0),
        }
    }
}

fn primary(group: u32, within: u32) -> u32 {
    (group << 24) | within
}

fn cyrillic_primary(lowered: char) -> u32 {
    primary(GROUP_CYRILLIC, lowered as u32 - 'а' as u32)
}

fn latin_primary(lowered: char) -> u32 {
    primary(GROUP_LATIN, lowered as u32 - 'a' as u32)
}

fn mark_secondary(mark: char) -> u16 {
    let weight = (mark as u32)
        .saturating_sub(0x300)
        .saturating_add(u32::from(YO_SECONDARY) + 1);
    weight.min(u32::from(u16::MAX)) as u16
}

/// Compare two strings in collation order.
///
/// Canonically equivalent spellings may compare equal; stable sorts then
/// keep their insertion order.
#[must_use]
pub fn collate(a: &str, b: &str) -> Ordering {
    CollationKey::new(a).cmp(&CollationKey::new(b))
}
