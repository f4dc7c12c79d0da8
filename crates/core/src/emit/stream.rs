//! The in-progress document as an ordered, append-only fragment sequence.

use std::borrow::Cow;

/// Document start sentinel. Stored once, at construction.
pub const START: &str = "^XA";
/// Document end sentinel. Appended at render time, never stored.
pub const END: &str = "^XZ";
/// Line break appended after every completed command.
pub const NEWLINE: &str = "\n";

/// Ordered text fragments of a document being built.
///
/// The first fragment is always [`START`] followed by a newline. The stream
/// only grows; there is no removal or rollback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStream {
    fragments: Vec<Cow<'static, str>>,
}

impl TokenStream {
    /// A stream holding only the start sentinel and its newline.
    pub fn new() -> Self {
        Self {
            fragments: vec![Cow::Borrowed(START), Cow::Borrowed(NEWLINE)],
        }
    }

    /// Stored fragments, in append order.
    pub fn fragments(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.fragments.iter().map(AsRef::as_ref)
    }

    /// Number of stored fragments.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Always `false`: the start sentinel is stored at construction.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub(crate) fn push(&mut self, fragment: impl Into<Cow<'static, str>>) {
        self.fragments.push(fragment.into());
    }

    pub(crate) fn newline(&mut self) {
        self.fragments.push(Cow::Borrowed(NEWLINE));
    }

    /// Byte length of the rendered text, including the end sentinel.
    pub(crate) fn text_len(&self) -> usize {
        self.fragments.iter().map(|f| f.len()).sum::<usize>() + END.len()
    }
}

impl Default for TokenStream {
    fn default() -> Self {
        Self::new()
    }
}
