//! Sequential-optional parameter emission.
//!
//! A command is an opcode followed by positional parameters. The command
//! language cannot address position `n + 1` while position `n` is empty, so
//! the first unset parameter halts the command: nothing after it is written,
//! even values the caller supplied. [`CommandWriter::optional`] is the one
//! documented exception and is used only where the source command set skips
//! an absent value and carries on.

use std::borrow::Cow;

use super::stream::TokenStream;
use crate::error::ValidationError;
use crate::validate::{Param, Value};

/// Separator written before every parameter except the first.
pub const SEPARATOR: &str = ",";

/// Appends one command's opcode and parameters to a [`TokenStream`].
///
/// Created by [`LabelBuilder::add`](crate::LabelBuilder::add); the builder
/// appends the trailing newline once the command completes.
#[derive(Debug)]
pub struct CommandWriter<'a> {
    stream: &'a mut TokenStream,
    emitted: usize,
    halted: bool,
    fragments: usize,
}

impl<'a> CommandWriter<'a> {
    /// Push `opcode` and start a new command.
    pub(crate) fn open(stream: &'a mut TokenStream, opcode: &'static str) -> Self {
        stream.push(opcode);
        Self {
            stream,
            emitted: 0,
            halted: false,
            fragments: 1,
        }
    }

    /// Validate and write the next positional parameter.
    ///
    /// `None` halts the command. Once halted, every later call is a no-op.
    pub fn param<'v, V: Into<Value<'v>>>(
        &mut self,
        param: &Param,
        value: Option<V>,
    ) -> Result<&mut Self, ValidationError> {
        if let Some(v) = self.accept(value) {
            let text = param.render(&v.into())?;
            self.emit(text);
        }
        Ok(self)
    }

    /// Like [`param`](Self::param), but an absent value is skipped without
    /// halting the command.
    ///
    /// This shifts every later parameter one position to the left in the
    /// output. Only the Code 11, Code 39 and Plessey check digit slots use it.
    pub fn optional<'v, V: Into<Value<'v>>>(
        &mut self,
        param: &Param,
        value: Option<V>,
    ) -> Result<&mut Self, ValidationError> {
        if self.halted {
            return Ok(self);
        }
        if let Some(v) = value {
            let text = param.render(&v.into())?;
            self.emit(text);
        }
        Ok(self)
    }

    /// Write a parameter directly after the opcode, with no separator and
    /// without counting as a positional parameter (e.g. a font name).
    pub fn suffix<'v, V: Into<Value<'v>>>(
        &mut self,
        param: &Param,
        value: V,
    ) -> Result<&mut Self, ValidationError> {
        let text = param.render(&value.into())?;
        self.stream.push(text);
        self.fragments += 1;
        Ok(self)
    }

    /// Write an implicit positional token that the caller never supplies.
    pub fn fixed(&mut self, token: &'static str) -> &mut Self {
        if !self.halted {
            self.emit(token);
        }
        self
    }

    /// Gate a value that needs command-specific validation.
    ///
    /// Returns `None` (halting the command) if the command is already halted
    /// or the value is unset. The caller validates the returned value and
    /// writes it with [`emit`](Self::emit).
    pub fn accept<T>(&mut self, value: Option<T>) -> Option<T> {
        if self.halted {
            return None;
        }
        if value.is_none() {
            self.halted = true;
        }
        value
    }

    /// Write an already-validated parameter, preceded by a separator unless
    /// it is the first one.
    pub fn emit(&mut self, text: impl Into<Cow<'static, str>>) -> &mut Self {
        if self.emitted > 0 {
            self.stream.push(SEPARATOR);
            self.fragments += 1;
        }
        self.stream.push(text);
        self.emitted += 1;
        self.fragments += 1;
        self
    }

    /// Append unvalidated text with no separator.
    pub fn raw(&mut self, fragment: impl Into<Cow<'static, str>>) -> &mut Self {
        self.stream.push(fragment);
        self.fragments += 1;
        self
    }

    /// Append the command's newline. Returns the fragment count, newline
    /// included.
    pub(crate) fn finish(self) -> usize {
        self.stream.newline();
        self.fragments + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::Constraint;

    const A: Param = Param::new("a", Constraint::range(0, 10));
    const B: Param = Param::new("b", Constraint::range(0, 10));
    const C: Param = Param::new("c", Constraint::range(0, 10));

    fn write(a: Option<u8>, b: Option<u8>, c: Option<u8>) -> String {
        let mut stream = TokenStream::new();
        let mut w = CommandWriter::open(&mut stream, "^ZZ");
        w.param(&A, a).unwrap().param(&B, b).unwrap().param(&C, c).unwrap();
        w.finish();
        stream.fragments().skip(2).collect()
    }

    #[test]
    fn all_present() {
        assert_eq!(write(Some(1), Some(2), Some(3)), "^ZZ1,2,3\n");
    }

    #[test]
    fn first_gap_halts() {
        assert_eq!(write(Some(1), None, Some(3)), "^ZZ1\n");
        assert_eq!(write(None, Some(2), Some(3)), "^ZZ\n");
    }

    #[test]
    fn none_supplied_writes_opcode_and_newline() {
        assert_eq!(write(None, None, None), "^ZZ\n");
    }

    #[test]
    fn optional_skips_without_halting() {
        let mut stream = TokenStream::new();
        let mut w = CommandWriter::open(&mut stream, "^ZZ");
        w.param(&A, Some(1u8)).unwrap();
        w.optional(&B, None::<u8>).unwrap();
        w.param(&C, Some(3u8)).unwrap();
        assert_eq!(w.finish(), 5);
        assert_eq!(stream.fragments().skip(2).collect::<String>(), "^ZZ1,3\n");
    }

    #[test]
    fn failed_field_appends_nothing_for_itself() {
        let mut stream = TokenStream::new();
        let mut w = CommandWriter::open(&mut stream, "^ZZ");
        w.param(&A, Some(1u8)).unwrap();
        assert!(w.param(&B, Some(11u8)).is_err());
        drop(w);
        assert_eq!(stream.fragments().skip(2).collect::<String>(), "^ZZ1");
    }

    #[test]
    fn suffix_precedes_first_param_without_separator() {
        let font = Param::new("font_name", Constraint::Char);
        let mut stream = TokenStream::new();
        let mut w = CommandWriter::open(&mut stream, "^A");
        w.suffix(&font, "0").unwrap();
        w.param(&A, Some(5u8)).unwrap();
        w.finish();
        assert_eq!(stream.fragments().skip(2).collect::<String>(), "^A05\n");
    }
}
