use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::logger;
use crate::models::{Card, Deck};

/// Overrides the default `decks` directory when set.
pub const DECKS_DIR_VAR: &str = "FLIPDECK_DECKS";

/// The decks every installation starts with.
pub fn sample_decks() -> Vec<Deck> {
    vec![
        Deck {
            name: "General Knowledge".to_string(),
            cards: vec![
                Card::new("What is the capital of France?", "Paris"),
                Card::new("Who painted the Mona Lisa?", "Leonardo da Vinci"),
                Card::new(
                    "What is the largest planet in our solar system?",
                    "Jupiter",
                ),
            ],
        },
        Deck {
            name: "Math Basics".to_string(),
            cards: vec![
                Card::new("What is 2 + 2?", "4"),
                Card::new("What is the square root of 16?", "4"),
                Card::new("What is 5 × 5?", "25"),
            ],
        },
        Deck {
            name: "Vocabulary".to_string(),
            cards: vec![
                Card::new(
                    "What is the meaning of \"ephemeral\"?",
                    "Lasting for a very short time",
                ),
                Card::new(
                    "Define \"ubiquitous\"",
                    "Present, appearing, or found everywhere",
                ),
                Card::new(
                    "What does \"serendipity\" mean?",
                    "The occurrence of events by chance in a happy or beneficial way",
                ),
            ],
        },
    ]
}

pub fn decks_dir() -> PathBuf {
    match env::var(DECKS_DIR_VAR) {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => PathBuf::from("decks"),
    }
}

/// Deck files under `dir`, sorted by path. Only `.csv` and `.json` files
/// count; a missing directory yields an empty list.
pub fn deck_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    if dir.is_dir()
        && let Ok(entries) = fs::read_dir(dir)
    {
        for entry in entries.flatten() {
            if let Some(ext) = entry.path().extension()
                && (ext == "csv" || ext == "json")
            {
                files.push(entry.path());
            }
        }
    }

    files.sort();
    files
}

/// Splits one CSV line into question and answer. Fields may be wrapped in
/// double quotes to protect commas, with `""` standing for a literal quote.
/// Malformed lines still produce a pair; blank fields are filtered later.
pub fn parse_card_line(line: &str) -> (String, String) {
    let mut question = String::new();
    let mut answer = String::new();
    let mut in_quotes = false;
    let mut closed_quote = false;
    let mut in_answer = false;

    for c in line.chars() {
        let field = if in_answer { &mut answer } else { &mut question };
        match c {
            '"' if in_quotes => {
                // Either the closing quote or the first half of an escaped
                // "" pair; the next character decides which.
                in_quotes = false;
                closed_quote = true;
                continue;
            }
            '"' => {
                if closed_quote {
                    field.push('"');
                }
                in_quotes = true;
            }
            ',' if !in_quotes && !in_answer => {
                in_answer = true;
            }
            _ => field.push(c),
        }
        closed_quote = false;
    }

    (question, answer)
}

/// Reads one deck file. A `.json` file holds a whole array of decks; a
/// `.csv` file is a single deck named after the file stem, one card per
/// line. Cards with a blank question or answer are dropped either way.
pub fn load_deck_file(path: &Path) -> io::Result<Vec<Deck>> {
    let content = fs::read_to_string(path)?;

    let mut decks = if path.extension().is_some_and(|ext| ext == "json") {
        serde_json::from_str::<Vec<Deck>>(&content)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?
    } else {
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Unnamed".to_string());
        let cards = content
            .lines()
            .map(parse_card_line)
            .map(|(question, answer)| Card { question, answer })
            .collect();
        vec![Deck { name, cards }]
    };

    for deck in &mut decks {
        deck.cards
            .retain(|card| !card.question.trim().is_empty() && !card.answer.trim().is_empty());
    }

    Ok(decks)
}

/// Loads every deck file under `dir`. Files that fail to read or parse are
/// logged and skipped, as are decks left with no usable cards, so one bad
/// file never takes the app down.
pub fn load_decks(dir: &Path) -> Vec<Deck> {
    let mut decks = Vec::new();

    for path in deck_files(dir) {
        match load_deck_file(&path) {
            Ok(loaded) => {
                for deck in loaded {
                    if deck.cards.is_empty() {
                        logger::log(&format!(
                            "Skipping deck {:?} from {}: no usable cards",
                            deck.name,
                            path.display()
                        ));
                    } else {
                        decks.push(deck);
                    }
                }
            }
            Err(e) => {
                logger::log(&format!("Failed to load {}: {}", path.display(), e));
            }
        }
    }

    decks
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_sample_decks_shape() {
        let decks = sample_decks();
        assert_eq!(decks.len(), 3);
        assert_eq!(decks[0].name, "General Knowledge");
        assert_eq!(decks[1].name, "Math Basics");
        assert_eq!(decks[2].name, "Vocabulary");
        for deck in &decks {
            assert_eq!(deck.cards.len(), 3);
        }
        assert_eq!(decks[0].cards[0].answer, "Paris");
        assert_eq!(decks[1].cards[2].question, "What is 5 × 5?");
    }

    #[test]
    fn test_parse_simple_line() {
        let (question, answer) = parse_card_line("What is 2+2?,Four");
        assert_eq!(question, "What is 2+2?");
        assert_eq!(answer, "Four");
    }

    #[test]
    fn test_parse_quoted_fields() {
        let (question, answer) = parse_card_line("\"What is 2+2?\",\"Four\"");
        assert_eq!(question, "What is 2+2?");
        assert_eq!(answer, "Four");
    }

    #[test]
    fn test_parse_commas_inside_quotes() {
        let (question, answer) =
            parse_card_line("\"What is 2+2, 3+3?\",\"Four, or 4\"");
        assert_eq!(question, "What is 2+2, 3+3?");
        assert_eq!(answer, "Four, or 4");
    }

    #[test]
    fn test_parse_escaped_quotes() {
        let (question, answer) =
            parse_card_line("\"What is \"\"quoted\"\"?\",\"Answer with \"\"quotes\"\"\"");
        assert_eq!(question, "What is \"quoted\"?");
        assert_eq!(answer, "Answer with \"quotes\"");
    }

    #[test]
    fn test_parse_mixed_quoting() {
        let (question, answer) = parse_card_line("\"What is 2+2?\",Four");
        assert_eq!(question, "What is 2+2?");
        assert_eq!(answer, "Four");

        let (question, answer) = parse_card_line("What is 2+2?,\"Four\"");
        assert_eq!(question, "What is 2+2?");
        assert_eq!(answer, "Four");
    }

    #[test]
    fn test_parse_empty_fields() {
        assert_eq!(parse_card_line(","), (String::new(), String::new()));
        assert_eq!(parse_card_line(""), (String::new(), String::new()));
    }

    #[test]
    fn test_parse_extra_commas_stay_in_answer() {
        let (question, answer) = parse_card_line("q,a,b,c");
        assert_eq!(question, "q");
        assert_eq!(answer, "a,b,c");
    }

    #[test]
    fn test_load_csv_deck_named_after_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("Capitals.csv");
        fs::write(&path, "France?,Paris\n\nItaly?,Rome\n,missing\n").unwrap();

        let decks = load_deck_file(&path).unwrap();
        assert_eq!(decks.len(), 1);
        assert_eq!(decks[0].name, "Capitals");
        assert_eq!(decks[0].cards.len(), 2);
        assert_eq!(decks[0].cards[1].answer, "Rome");
    }

    #[test]
    fn test_load_json_deck_array() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("extra.json");
        let mut file = fs::File::create(&path).unwrap();
        write!(
            file,
            r#"[{{"name": "Chemistry", "cards": [{{"question": "H2O?", "answer": "Water"}}, {{"question": " ", "answer": "blank"}}]}}]"#
        )
        .unwrap();

        let decks = load_deck_file(&path).unwrap();
        assert_eq!(decks.len(), 1);
        assert_eq!(decks[0].name, "Chemistry");
        assert_eq!(decks[0].cards.len(), 1);
        assert_eq!(decks[0].cards[0].answer, "Water");
    }

    #[test]
    fn test_load_json_rejects_malformed_content() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_deck_file(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_deck_files_filters_and_sorts() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join("b.csv"), "q,a\n").unwrap();
        fs::write(temp_dir.path().join("a.json"), "[]").unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "ignored").unwrap();

        let files = deck_files(temp_dir.path());
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].file_name().unwrap(), "a.json");
        assert_eq!(files[1].file_name().unwrap(), "b.csv");
    }

    #[test]
    fn test_deck_files_missing_dir_is_empty() {
        let temp_dir = tempfile::tempdir().unwrap();
        let missing = temp_dir.path().join("nowhere");
        assert!(deck_files(&missing).is_empty());
    }

    #[test]
    fn test_load_decks_skips_bad_files_and_empty_decks() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join("good.csv"), "q,a\n").unwrap();
        fs::write(temp_dir.path().join("broken.json"), "nope").unwrap();
        fs::write(temp_dir.path().join("empty.csv"), "\n,\n").unwrap();

        let decks = load_decks(temp_dir.path());
        assert_eq!(decks.len(), 1);
        assert_eq!(decks[0].name, "good");
    }

    #[test]
    fn test_load_decks_missing_dir_is_empty() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(load_decks(&temp_dir.path().join("nowhere")).is_empty());
    }
}
