//! Token substitution pass
//!
//! Rewrites a coded itinerary into customer-friendly text. The stages run in
//! a fixed order over the whole document:
//!
//! 1. `\v`, `\f` and `\r` become `\n`
//! 2. runs of three or more line feeds collapse to one blank line
//! 3. city tokens `*##<code>` and `*#<code>`
//! 4. airport tokens `##<code>` and `#<code>`
//! 5. dates `D(...)`
//! 6. 12-hour times `T12(...)`
//! 7. 24-hour times `T24(...)`
//!
//! City tokens must go first: `##JFK` is a substring of `*##JFK`.

use std::collections::HashMap;
use std::sync::LazyLock;

use log::{debug, trace};
use regex::{Captures, Regex};

use crate::date::{reformat, TimestampFormat};
use crate::lookup::AirportLookup;

static BLANK_LINES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());
static DATE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"D\((.+?)\)").unwrap());
static TIME12_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"T12\((.+?)\)").unwrap());
static TIME24_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"T24\((.+?)\)").unwrap());

/// Run the full substitution pass over a document
///
/// Malformed or unknown tokens are left exactly as written.
pub fn prettify(document: &str, lookup: &AirportLookup) -> String {
    let text = normalize_line_breaks(document);
    let text = collapse_blank_lines(&text);
    let text = substitute_cities(&text, lookup.cities());
    let text = substitute_airports(&text, lookup.names());
    let text = substitute_timestamps(&text, &DATE_RE, TimestampFormat::Date);
    let text = substitute_timestamps(&text, &TIME12_RE, TimestampFormat::Time12);
    substitute_timestamps(&text, &TIME24_RE, TimestampFormat::Time24)
}

/// Turn vertical tab, form feed and carriage return into line feeds
pub fn normalize_line_breaks(text: &str) -> String {
    text.replace('\u{0B}', "\n")
        .replace('\u{0C}', "\n")
        .replace('\r', "\n")
}

/// Keep at most one blank line between paragraphs
pub fn collapse_blank_lines(text: &str) -> String {
    BLANK_LINES_RE.replace_all(text, "\n\n").into_owned()
}

/// Replace `*##<code>` and `*#<code>` with the city name
pub fn substitute_cities(text: &str, cities: &HashMap<String, String>) -> String {
    substitute_codes(text, cities, ["*##", "*#"])
}

/// Replace `##<code>` and `#<code>` with the airport name
pub fn substitute_airports(text: &str, names: &HashMap<String, String>) -> String {
    substitute_codes(text, names, ["##", "#"])
}

/// Literal replacement of `<prefix><code>` for every code in the table.
///
/// Longer codes go first so a code that is a prefix of another (`AB`, `ABC`)
/// cannot eat the start of the longer token. Equal lengths are ordered
/// alphabetically to keep the output stable across runs.
fn substitute_codes(text: &str, table: &HashMap<String, String>, prefixes: [&str; 2]) -> String {
    let mut codes: Vec<&String> = table.keys().collect();
    codes.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    let mut output = text.to_string();
    for code in codes {
        let replacement = &table[code];
        for prefix in prefixes {
            let token = format!("{}{}", prefix, code);
            if output.contains(&token) {
                output = output.replace(&token, replacement);
            }
        }
    }

    debug!("Substituted {} codes with prefixes {:?}", table.len(), prefixes);
    output
}

/// Reformat every timestamp token matched by `re`
fn substitute_timestamps(text: &str, re: &Regex, format: TimestampFormat) -> String {
    re.replace_all(text, |caps: &Captures| match reformat(&caps[1], format) {
        Some(formatted) => formatted,
        None => {
            trace!("Leaving malformed {:?} token as-is: {}", format, &caps[0]);
            caps[0].to_string()
        }
    })
    .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::AirportRecord;

    fn jfk_lookup() -> AirportLookup {
        AirportLookup::from_records(vec![
            AirportRecord {
                full_name: "John F Kennedy Intl".to_string(),
                country: "US".to_string(),
                city: "New York".to_string(),
                icao_code: "KJFK".to_string(),
                iata_code: "JFK".to_string(),
            },
            AirportRecord {
                full_name: "Los Angeles Intl".to_string(),
                country: "US".to_string(),
                city: "Los Angeles".to_string(),
                icao_code: "KLAX".to_string(),
                iata_code: "LAX".to_string(),
            },
        ])
        .unwrap()
    }

    #[test]
    fn test_city_and_airport_tokens() {
        let lookup = jfk_lookup();
        assert_eq!(prettify("*##JFK", &lookup), "New York");
        assert_eq!(prettify("*#JFK", &lookup), "New York");
        assert_eq!(prettify("##JFK", &lookup), "John F Kennedy Intl");
        assert_eq!(prettify("#JFK", &lookup), "John F Kennedy Intl");
        assert_eq!(prettify("##KJFK", &lookup), "John F Kennedy Intl");
        assert_eq!(prettify("*#KLAX", &lookup), "Los Angeles");
    }

    #[test]
    fn test_mixed_line() {
        let lookup = jfk_lookup();
        let input = "Fly from *#JFK (#JFK) to ##KLAX on D(2024-12-25T10:30-07:00).";
        assert_eq!(
            prettify(input, &lookup),
            "Fly from New York (John F Kennedy Intl) to Los Angeles Intl on 25-Dec-2024."
        );
    }

    #[test]
    fn test_unknown_code_passes_through() {
        let lookup = jfk_lookup();
        assert_eq!(prettify("#XYZ and *#QQQ", &lookup), "#XYZ and *#QQQ");
    }

    #[test]
    fn test_line_break_normalization() {
        let lookup = AirportLookup::default();
        assert_eq!(prettify("line1\u{0B}\u{0B}\u{0B}line2", &lookup), "line1\n\nline2");
        assert_eq!(prettify("a\r\nb", &lookup), "a\n\nb");
        assert_eq!(prettify("a\u{0C}b", &lookup), "a\nb");
        assert_eq!(prettify("a\n\n\n\n\nb\n\nc", &lookup), "a\n\nb\n\nc");
    }

    #[test]
    fn test_collapse_blank_lines() {
        assert_eq!(collapse_blank_lines("a\n\n\nb"), "a\n\nb");
        assert_eq!(collapse_blank_lines("a\n\nb"), "a\n\nb");
        assert_eq!(collapse_blank_lines("a\nb"), "a\nb");
    }

    #[test]
    fn test_date_and_time_tokens() {
        let lookup = AirportLookup::default();
        assert_eq!(prettify("D(2024-12-25T10:30-07:00)", &lookup), "25-Dec-2024");
        assert_eq!(prettify("T12(2024-12-25T15:04-07:00)", &lookup), "03:04PM (-07:00)");
        assert_eq!(prettify("T24(2024-12-25T15:04-07:00)", &lookup), "15:04 (-07:00)");
    }

    #[test]
    fn test_unicode_minus_in_token() {
        let lookup = AirportLookup::default();
        assert_eq!(prettify("D(2024-12-25T10:30\u{2212}07:00)", &lookup), "25-Dec-2024");
        assert_eq!(
            prettify("T24(2024-12-25T10:30\u{2212}07:00)", &lookup),
            "10:30 (-07:00)"
        );
    }

    #[test]
    fn test_malformed_tokens_unchanged() {
        let lookup = AirportLookup::default();
        let cases = vec![
            "D(not-a-date)",
            "T12(2024-12-25)",
            "T24(2024-12-25T25:00+00:00)",
            "D(2024-12-25T10:30\u{2212}07:00Z)",
            "D()",
        ];
        for input in cases {
            assert_eq!(prettify(input, &lookup), input);
        }
    }

    #[test]
    fn test_multiple_tokens_on_one_line() {
        let lookup = AirportLookup::default();
        let input = "D(2024-01-02T03:04+05:00) D(bad) T12(2024-01-02T13:04+05:00)";
        assert_eq!(prettify(input, &lookup), "02-Jan-2024 D(bad) 01:04PM (+05:00)");
    }

    #[test]
    fn test_longer_code_wins_over_prefix() {
        let mut table = HashMap::new();
        table.insert("AB".to_string(), "Short".to_string());
        table.insert("ABC".to_string(), "Long".to_string());
        assert_eq!(substitute_airports("#ABC #AB", &table), "Long Short");
        assert_eq!(substitute_cities("*##ABC *#AB", &table), "Long Short");
    }

    #[test]
    fn test_code_substitution_is_idempotent() {
        let lookup = jfk_lookup();
        let once = prettify("From *##JFK via #KLAX", &lookup);
        let cities = substitute_cities(&once, lookup.cities());
        let twice = substitute_airports(&cities, lookup.names());
        assert_eq!(once, twice);
    }
}
