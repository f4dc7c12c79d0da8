//! Text commands: `^A` font selection, `^FD` field data, `^FX` comments.

use serde::{Deserialize, Deserializer, Serialize};

use super::Encode;
use crate::emit::CommandWriter;
use crate::error::BuildError;
use crate::tokens::Orientation;
use crate::validate::{Constraint, Param, check_length};

/// End-of-field marker; also joins multi-segment field data.
pub(crate) const FIELD_SEPARATOR: &str = "^FS";
/// Escape the printer reads as a line break inside field data.
const NEWLINE_ESCAPE: &str = "\\&";

/// Font selection (`^A`).
///
/// The font name is part of the opcode (`^A0`), so the first parameter
/// follows it without a separator: `^A0N,30,30`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Font {
    /// Single character font name, `A`–`Z` or `0`–`9`.
    pub name: String,
    /// Text rotation.
    pub orientation: Option<Orientation>,
    /// Character height in dots, 10–32000.
    pub character_height: Option<u32>,
    /// Character width in dots, 10–32000.
    pub width: Option<u32>,
}

impl Encode for Font {
    const OPCODE: &'static str = "^A";

    fn encode(&self, w: &mut CommandWriter<'_>) -> Result<(), BuildError> {
        const NAME: Param = Param::new(
            "font_name",
            Constraint::Charset("ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789"),
        );
        const ORIENTATION: Param = Param::new("orientation", Constraint::OneOf(Orientation::TOKENS));
        const CHARACTER_HEIGHT: Param = Param::new("character_height", Constraint::range(10, 32000));
        const WIDTH: Param = Param::new("width", Constraint::range(10, 32000));

        check_length(NAME.name, &self.name, 1, 1)?;
        w.suffix(&NAME, self.name.as_str())?;
        w.param(&ORIENTATION, self.orientation)?
            .param(&CHARACTER_HEIGHT, self.character_height)?
            .param(&WIDTH, self.width)?;
        Ok(())
    }
}

/// Field data (`^FD…^FS`): the printed or encoded payload of a field.
///
/// Multiple segments are joined with `^FS`, each becoming its own field
/// block. The payload is written as-is; symbology checks belong to
/// [`BarcodeData`](crate::BarcodeData).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldData {
    /// One or more data segments.
    #[serde(deserialize_with = "one_or_many")]
    pub data: Vec<String>,
    /// Replace `\n` with the printer's `\&` line break.
    pub replace_newlines: bool,
}

impl FieldData {
    /// A single-segment field.
    pub fn text(data: impl Into<String>) -> Self {
        Self {
            data: vec![data.into()],
            replace_newlines: false,
        }
    }

    /// A multi-segment field.
    pub fn segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            data: segments.into_iter().map(Into::into).collect(),
            replace_newlines: false,
        }
    }

    /// Enable `\n` → `\&` substitution.
    pub fn replace_newlines(mut self) -> Self {
        self.replace_newlines = true;
        self
    }

    /// The payload between `^FD` and the final `^FS`.
    pub fn payload(&self) -> String {
        let joined = self.data.join(FIELD_SEPARATOR);
        if self.replace_newlines {
            joined.replace('\n', NEWLINE_ESCAPE)
        } else {
            joined
        }
    }
}

impl Encode for FieldData {
    const OPCODE: &'static str = "^FD";

    fn encode(&self, w: &mut CommandWriter<'_>) -> Result<(), BuildError> {
        w.raw(self.payload()).raw(FIELD_SEPARATOR);
        Ok(())
    }
}

fn one_or_many<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }
    Ok(match OneOrMany::deserialize(d)? {
        OneOrMany::One(s) => vec![s],
        OneOrMany::Many(v) => v,
    })
}

/// Comment (`^FX…^FS`). Ignored by the printer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Comment {
    /// Comment text.
    pub text: String,
}

impl Comment {
    /// A comment holding `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Encode for Comment {
    const OPCODE: &'static str = "^FX";

    fn encode(&self, w: &mut CommandWriter<'_>) -> Result<(), BuildError> {
        w.raw(self.text.clone()).raw(FIELD_SEPARATOR);
        Ok(())
    }
}
