use super::separators::Separators;

/// Classification of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
	/// Run of non-separator characters.
	Word,
	/// Run of separator characters.
	Separator,
}

/// Maximal run of characters sharing one classification.
///
/// `text` borrows from the line being tokenized and keeps its original
/// casing. Words are lowercased by the consumer, not here, so that
/// concatenating tokens reproduces the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
	pub text: &'a str,
	pub kind: TokenKind,
}

impl Token<'_> {
	pub fn is_word(&self) -> bool {
		self.kind == TokenKind::Word
	}

	/// Lowercased form used as a frequency map key.
	pub fn to_word(&self) -> String {
		self.text.to_lowercase()
	}
}

/// Returns the maximal run starting at byte offset `position` in `text`.
///
/// The first character decides the classification, and the run extends
/// while following characters share it. The token therefore ends either
/// at the end of `text` or right before a character of the other kind.
///
/// Returns `None` if `position` is past the end of `text` or does not
/// fall on a character boundary.
pub fn next_token<'a>(text: &'a str, position: usize, separators: &Separators) -> Option<Token<'a>> {
	let rest = text.get(position..)?;
	let first = rest.chars().next()?;
	let is_separator = separators.is_separator(first);

	let len = rest
		.char_indices()
		.find(|(_, c)| separators.is_separator(*c) != is_separator)
		.map_or(rest.len(), |(i, _)| i);

	Some(Token {
		text: &rest[..len],
		kind: if is_separator { TokenKind::Separator } else { TokenKind::Word },
	})
}

/// Lazy iterator over the tokens of one line.
///
/// Created by [`tokenize`].
#[derive(Clone, Debug)]
pub struct Tokens<'a, 's> {
	text: &'a str,
	position: usize,
	separators: &'s Separators,
}

impl<'a> Iterator for Tokens<'a, '_> {
	type Item = Token<'a>;

	fn next(&mut self) -> Option<Self::Item> {
		let token = next_token(self.text, self.position, self.separators)?;
		self.position += token.text.len();
		Some(token)
	}
}

/// Splits `line` into consecutive word and separator tokens.
///
/// An empty line yields no tokens.
pub fn tokenize<'a, 's>(line: &'a str, separators: &'s Separators) -> Tokens<'a, 's> {
	Tokens { text: line, position: 0, separators }
}
