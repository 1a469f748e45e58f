/// The result of tokenizing a single input line.
#[derive(Debug, PartialEq)]
pub struct Tokenization<'a> {
    /// The command key, i.e. the first token. `None` for empty or whitespace-only lines.
    pub key: Option<&'a str>,
    /// Every token after the key, in order.
    pub args: Vec<&'a str>,
}

impl<'a> Tokenization<'a> {
    /// Returns the arguments as owned Strings, which is what command handlers take.
    pub fn owned_args(&self) -> Vec<String> {
        self.args.iter().map(|arg| arg.to_string()).collect()
    }
}

/// Tokenizers pre-process an input line into a command key and its arguments for the matcher.
pub trait Tokenizer {
    fn tokenize<'a>(&self, line: &'a str) -> Tokenization<'a>;
}

/// WhitespaceTokenizer splits a line on runs of whitespace. Leading and trailing whitespace never
/// produce empty tokens, and there is no quoting or escaping.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Constructs a `WhitespaceTokenizer`.
    pub fn new() -> WhitespaceTokenizer {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize<'a>(&self, line: &'a str) -> Tokenization<'a> {
        let mut tokens = line.split_whitespace();
        let key = tokens.next();
        Tokenization {
            key,
            args: tokens.collect(),
        }
    }
}
