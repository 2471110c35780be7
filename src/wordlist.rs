use crate::Error;
use std::collections::HashSet;
use std::fmt;
use std::fs::read_to_string;

/// Word validity oracle consulted by move validation.
///
/// Implementations must be free of side effects. The text passed in is upper case.
pub trait Dictionary {
    /// Check if `word` is an accepted word.
    fn is_defined(&self, word: &str) -> bool;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn is_defined(&self, word: &str) -> bool {
        (**self).is_defined(word)
    }
}

impl Dictionary for HashSet<String> {
    fn is_defined(&self, word: &str) -> bool {
        self.contains(word)
    }
}

/// A set of accepted words, stored in upper case.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wordlist {
    words: HashSet<String>,
    /// Path of the wordfile used to build the wordlist.
    /// Empty if the wordlist is not build from a file.
    pub wordfile: String,
}

impl fmt::Display for Wordlist {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Wordlist: {} words from '{}'>",
            self.words.len(),
            self.wordfile
        )
    }
}

impl Dictionary for Wordlist {
    fn is_defined(&self, word: &str) -> bool {
        self.contains(word)
    }
}

impl Wordlist {
    /// Read the wordlist from a file. The file must be encoded in utf-8 and
    /// have one word per line. Blank lines are skipped.
    /// ## Errors
    /// Fails if the wordlist can not be read.
    pub fn from_file(wordfile: &str) -> Result<Wordlist, Error> {
        let words = read_to_string(wordfile)
            .map_err(|source| Error::ReadError {
                path: String::from(wordfile),
                source,
            })?
            .lines()
            .map(str::trim)
            .filter(|word| !word.is_empty())
            .map(str::to_uppercase)
            .collect::<HashSet<_>>();
        tracing::info!("Loaded {} words from {}", words.len(), wordfile);
        Ok(Wordlist {
            words,
            wordfile: String::from(wordfile),
        })
    }

    /// Build a wordlist from a list of words.
    /// ## Example
    /// ```
    /// use wordboard::{Dictionary, Wordlist};
    /// let wordlist = Wordlist::from_words(&["aardvark", "zebra"]);
    /// assert!(wordlist.is_defined("ZEBRA"));
    /// assert!(wordlist.contains("zebra"));
    /// ```
    pub fn from_words(words: &[&str]) -> Wordlist {
        Wordlist {
            words: words.iter().map(|word| word.trim().to_uppercase()).collect(),
            wordfile: String::new(),
        }
    }

    #[cfg(feature = "bincode")]
    /// Serialize the wordlist to a bincoded file.
    /// ## Errors
    /// If the file can not be written.
    pub fn serialize_into(&self, wordfile: &str) -> Result<(), Error> {
        use std::fs::File;
        use std::io::BufWriter;
        let file = File::create(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        bincode::serialize_into(BufWriter::new(file), self)
            .map_err(|_| Error::WordlistDeserializeError(String::from(wordfile)))
    }

    #[cfg(feature = "bincode")]
    /// Deserialize the wordlist from a bincoded file.
    /// ## Errors
    /// - If the wordlist can not be read.
    /// - If the contents can not be deserialized
    pub fn deserialize_from(wordfile: &str) -> Result<Wordlist, Error> {
        use std::fs::File;
        use std::io::BufReader;
        let file = File::open(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let reader = BufReader::new(file);
        let mut wordlist: Wordlist = bincode::deserialize_from(reader)
            .map_err(|_| Error::WordlistDeserializeError(String::from(wordfile)))?;
        wordlist.wordfile = String::from(wordfile);
        Ok(wordlist)
    }

    /// Check if `word` is in the list, ignoring case.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_uppercase())
    }

    /// The number of words in the wordlist
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_words() {
        let wordlist = Wordlist::from_words(&["cat", "Cats", " dog "]);
        assert_eq!(wordlist.len(), 3);
        assert!(wordlist.is_defined("CAT"));
        assert!(wordlist.is_defined("DOG"));
        assert!(wordlist.contains("cats"));
        assert!(!wordlist.is_defined("CA"));
        assert_eq!(wordlist.to_string(), "<Wordlist: 3 words from ''>");
    }

    #[test]
    fn test_from_file() -> Result<(), Error> {
        let path = std::env::temp_dir().join("wordboard-test-words.txt");
        std::fs::write(&path, "rust\n\nrest\n").unwrap();
        let wordfile = path.to_str().unwrap();
        let wordlist = Wordlist::from_file(wordfile)?;
        assert_eq!(wordlist.len(), 2);
        assert!(wordlist.is_defined("REST"));
        assert_eq!(wordlist.wordfile, wordfile);
        Ok(())
    }

    #[test]
    fn test_read_error() {
        let result = Wordlist::from_file("no/such/wordfile.txt");
        assert!(matches!(result, Err(Error::ReadError { .. })));
    }

    #[test]
    fn test_hashset_dictionary() {
        let words: HashSet<String> = vec![String::from("AB")].into_iter().collect();
        let dictionary: &dyn Dictionary = &words;
        assert!(dictionary.is_defined("AB"));
        assert!(!(&words).is_defined("BA"));
    }

    #[cfg(feature = "bincode")]
    #[test]
    fn test_serialize_roundtrip() -> Result<(), Error> {
        let path = std::env::temp_dir().join("wordboard-test-words.bin");
        let wordlist = Wordlist::from_words(&["cat", "dog"]);
        wordlist.serialize_into(path.to_str().unwrap())?;
        let loaded = Wordlist::deserialize_from(path.to_str().unwrap())?;
        assert_eq!(loaded.len(), 2);
        assert!(loaded.is_defined("DOG"));
        Ok(())
    }
}
