//! Genre choices and the stored genre-list format
//!
//! Genres are kept in a single text column shaped like `{Jazz,Rock n Roll}`.
//! Decoding strips the braces, splits on commas, trims whitespace and any
//! surrounding double quotes, and drops empty entries. There is no escaping,
//! so a genre name must never contain `,`, `{`, `}` or `"`.

/// Genres offered by the venue and artist forms
pub const GENRE_CHOICES: &[&str] = &[
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

const RESERVED: &[char] = &[',', '{', '}', '"'];

/// True when `genre` is one of [`GENRE_CHOICES`]
pub fn is_known_genre(genre: &str) -> bool {
    GENRE_CHOICES.contains(&genre)
}

/// True when `genre` can be stored without corrupting the list format
pub fn is_storable(genre: &str) -> bool {
    !genre.trim().is_empty() && !genre.contains(RESERVED)
}

/// Encode a genre list into its stored form
pub fn encode_genres<S: AsRef<str>>(genres: &[S]) -> String {
    let joined = genres
        .iter()
        .map(|g| g.as_ref().trim())
        .filter(|g| !g.is_empty())
        .collect::<Vec<_>>()
        .join(",");
    format!("{{{}}}", joined)
}

/// Decode a stored genre string into a list
pub fn decode_genres(stored: &str) -> Vec<String> {
    let trimmed = stored.trim();
    let inner = trimmed.strip_prefix('{').unwrap_or(trimmed);
    let inner = inner.strip_suffix('}').unwrap_or(inner);

    inner
        .split(',')
        .map(|g| g.trim().trim_matches('"').trim())
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_wraps_in_braces() {
        assert_eq!(encode_genres(&["Jazz", "Rock n Roll"]), "{Jazz,Rock n Roll}");
        assert_eq!(encode_genres::<&str>(&[]), "{}");
    }

    #[test]
    fn test_decode_plain_list() {
        assert_eq!(decode_genres("{Jazz,Reggae,Swing}"), vec!["Jazz", "Reggae", "Swing"]);
    }

    #[test]
    fn test_decode_quoted_entries() {
        // Array literals quote entries containing spaces
        assert_eq!(
            decode_genres(r#"{Jazz,"Rock n Roll"}"#),
            vec!["Jazz", "Rock n Roll"]
        );
    }

    #[test]
    fn test_decode_tolerates_missing_braces_and_blanks() {
        assert_eq!(decode_genres("Jazz, Blues ,"), vec!["Jazz", "Blues"]);
        assert!(decode_genres("{}").is_empty());
        assert!(decode_genres("").is_empty());
    }

    #[test]
    fn test_every_choice_is_storable() {
        for genre in GENRE_CHOICES {
            assert!(is_storable(genre), "{genre} would corrupt the list format");
            assert_eq!(decode_genres(&encode_genres(&[genre])), vec![genre.to_string()]);
        }
    }

    #[test]
    fn test_reserved_characters_not_storable() {
        assert!(!is_storable("Rock, Paper"));
        assert!(!is_storable("{Jazz}"));
        assert!(!is_storable("  "));
        assert!(is_known_genre("R&B"));
        assert!(!is_known_genre("Polka"));
    }
}
