use crate::engine::{WORD_LENGTH, WordSource};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordbank.txt");

fn is_usable(word: &str) -> bool {
    word.len() == WORD_LENGTH && word.chars().all(|c| c.is_ascii_alphabetic())
}

/// The pool of candidate goal words for a game.
///
/// Words are uppercased on load; anything that is not exactly five ASCII
/// letters is dropped.
pub struct WordBank {
    words: Vec<String>,
}

impl WordBank {
    /// The word list compiled into the binary.
    pub fn embedded() -> WordBank {
        WordBank::from_lines(EMBEDDED_WORDBANK)
    }

    pub fn from_lines(data: &str) -> WordBank {
        WordBank {
            words: data
                .lines()
                .map(|line| line.trim().to_uppercase())
                .filter(|word| is_usable(word))
                .collect(),
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<WordBank> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let mut words = Vec::new();
        for line in reader.lines() {
            let word = line?.trim().to_uppercase();
            if is_usable(&word) {
                words.push(word);
            }
        }
        Ok(WordBank { words })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordSource for WordBank {
    fn random_word(&mut self) -> Option<String> {
        if self.words.is_empty() {
            return None;
        }
        let random: usize = rand::random();
        self.words.get(random % self.words.len()).cloned()
    }
}
