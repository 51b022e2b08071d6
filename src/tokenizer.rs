// WHY: Word extraction from a single sentence
// Only colons, commas and trailing periods are removed; all other punctuation stays in the word

/// Characters removed anywhere in a sentence before splitting into words
pub const STRIPPED_CHARS: [char; 2] = [':', ','];

/// Splits one sentence into normalized words
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Tokenize a sentence into owned words
    pub fn tokenize(&self, sentence: &str) -> Vec<String> {
        let mut buffer = String::new();
        self.words_into(sentence, &mut buffer)
            .map(str::to_string)
            .collect()
    }

    /// Tokenize using a caller-supplied buffer, yielding words borrowed from it
    ///
    /// Words are separated by single `' '` characters only; tabs and other
    /// whitespace stay inside a word. Empty tokens are skipped.
    pub fn words_into<'b>(
        &self,
        sentence: &str,
        buffer: &'b mut String,
    ) -> impl Iterator<Item = &'b str> + 'b {
        buffer.clear();
        buffer.extend(sentence.chars().filter(|ch| !STRIPPED_CHARS.contains(ch)));

        let cleaned: &'b String = buffer;
        cleaned
            .trim_end_matches('.')
            .split(' ')
            .filter(|word| !word.is_empty())
    }
}
