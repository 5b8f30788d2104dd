//! Fiscal code check character
//!
//! The Italian fiscal code carries a control letter computed over the first
//! 15 characters. Characters at odd 1-indexed positions and even positions
//! map through two distinct value tables; digits and letters have separate
//! rows in each table. The sum modulo 26 selects the expected letter.

/// Value of a character at an odd 1-indexed position.
fn odd_value(c: char) -> u32 {
    match c {
        '0' => 1,
        '1' => 0,
        '2' => 5,
        '3' => 7,
        '4' => 9,
        '5' => 13,
        '6' => 15,
        '7' => 17,
        '8' => 19,
        '9' => 21,
        'A' => 1,
        'B' => 0,
        'C' => 5,
        'D' => 7,
        'E' => 9,
        'F' => 13,
        'G' => 15,
        'H' => 17,
        'I' => 19,
        'J' => 21,
        'K' => 2,
        'L' => 4,
        'M' => 18,
        'N' => 20,
        'O' => 11,
        'P' => 3,
        'Q' => 6,
        'R' => 8,
        'S' => 12,
        'T' => 14,
        'U' => 16,
        'V' => 10,
        'W' => 22,
        'X' => 25,
        'Y' => 24,
        'Z' => 23,
        _ => 0,
    }
}

/// Value of a character at an even 1-indexed position.
fn even_value(c: char) -> u32 {
    match c {
        '0'..='9' => c as u32 - '0' as u32,
        'A'..='Z' => c as u32 - 'A' as u32,
        _ => 0,
    }
}

/// Compute the expected check character for the first 15 characters of a
/// fiscal code. The input must already be trimmed and uppercased.
pub fn fiscal_code_check_char(body: &str) -> char {
    let total: u32 = body
        .chars()
        .take(15)
        .enumerate()
        .map(|(i, c)| {
            if i % 2 == 0 {
                // 1-indexed odd position
                odd_value(c)
            } else {
                even_value(c)
            }
        })
        .sum();

    (b'A' + (total % 26) as u8) as char
}
