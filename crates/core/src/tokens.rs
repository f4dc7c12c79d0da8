//! Letter- and digit-coded parameter values.
//!
//! Each enum maps to a fixed token set. Parsing from text (including serde
//! deserialization) goes through the enumerated-value check, so a bad token
//! fails with the same [`ValidationError`] the builder reports.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::validate::{Value, not_in_set};

/// Raw token accepted from serialized input: text, or an integer that is
/// compared by its decimal representation.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TokenInput {
    /// Text token.
    Text(String),
    /// Integer token.
    Int(i64),
}

impl From<TokenInput> for String {
    fn from(t: TokenInput) -> Self {
        match t {
            TokenInput::Text(s) => s,
            TokenInput::Int(n) => n.to_string(),
        }
    }
}

macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $($(#[$vmeta:meta])* $variant:ident => $token:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "TokenInput", into = "String")]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Every token, in declaration order.
            pub const TOKENS: &'static [&'static str] = &[$($token),+];

            /// The token written to the document.
            pub const fn token(self) -> &'static str {
                match self {
                    $($name::$variant => $token),+
                }
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($token => Ok($name::$variant),)+
                    _ => Err(not_in_set($field, s, Self::TOKENS)),
                }
            }
        }

        impl TryFrom<TokenInput> for $name {
            type Error = ValidationError;

            fn try_from(t: TokenInput) -> Result<Self, Self::Error> {
                String::from(t).parse()
            }
        }

        impl From<$name> for String {
            fn from(v: $name) -> Self {
                v.token().to_string()
            }
        }

        impl From<$name> for Value<'static> {
            fn from(v: $name) -> Self {
                Value::Text(Cow::Borrowed(v.token()))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.token())
            }
        }
    };
}

token_enum! {
    /// Field or barcode rotation.
    Orientation, "orientation" {
        /// Upright.
        Normal => "N",
        /// Rotated 90 degrees clockwise.
        Rotated => "R",
        /// Inverted 180 degrees.
        Inverted => "I",
        /// Read from bottom up, 270 degrees.
        BottomUp => "B",
    }
}

token_enum! {
    /// Field origin justification.
    Justification, "justification" {
        /// Left justified.
        Left => "0",
        /// Right justified.
        Right => "1",
        /// Chosen by the printer.
        Auto => "2",
    }
}

token_enum! {
    /// Text justification inside a field block.
    TextJustification, "text_justification" {
        /// Left.
        Left => "L",
        /// Centered.
        Center => "C",
        /// Right.
        Right => "R",
        /// Justified.
        Justified => "J",
    }
}

token_enum! {
    /// Boolean flag as written in the command language.
    YesNo, "flag" {
        /// Affirmative.
        Yes => "Y",
        /// Negative.
        No => "N",
    }
}

impl From<bool> for YesNo {
    fn from(b: bool) -> Self {
        if b { YesNo::Yes } else { YesNo::No }
    }
}

token_enum! {
    /// Graphic line color.
    LineColor, "line_color" {
        /// Black.
        Black => "B",
        /// White.
        White => "W",
    }
}

token_enum! {
    /// QR code error correction level.
    #[derive(Default)]
    QrErrorCorrection, "error_correction" {
        /// Ultra-high reliability.
        UltraHigh => "H",
        /// High reliability.
        High => "Q",
        /// Standard level.
        #[default]
        Standard => "M",
        /// High density.
        Low => "L",
    }
}

token_enum! {
    /// MSI check digit selection.
    MsiCheckDigit, "check_digit" {
        /// No check digits.
        NoCheck => "A",
        /// One Mod 10.
        Mod10 => "B",
        /// Two Mod 10.
        Mod10Mod10 => "C",
        /// One Mod 11 and one Mod 10.
        Mod11Mod10 => "D",
    }
}

impl MsiCheckDigit {
    /// Longest payload accepted under this check digit mode.
    pub const fn max_data_len(self) -> usize {
        match self {
            MsiCheckDigit::NoCheck => 14,
            MsiCheckDigit::Mod10 | MsiCheckDigit::Mod10Mod10 | MsiCheckDigit::Mod11Mod10 => 13,
        }
    }
}

token_enum! {
    /// CODABLOCK encoding mode.
    #[derive(Default)]
    CodablockMode, "mode" {
        /// Code 39 character set.
        Code39 => "A",
        /// Code 128 with FNC1.
        Code128Fnc1 => "E",
        /// Code 128.
        #[default]
        Code128 => "F",
    }
}

token_enum! {
    /// ANSI Codabar start or stop character.
    CodabarStartStop, "start_stop_character" {
        /// `A`.
        A => "A",
        /// `B`.
        B => "B",
        /// `C`.
        C => "C",
        /// `D`.
        D => "D",
    }
}

token_enum! {
    /// Code 49 starting mode.
    Code49StartingMode, "starting_mode" {
        /// Regular alphanumeric.
        RegularAlphanumeric => "0",
        /// Multiple read alphanumeric.
        MultipleReadAlphanumeric => "1",
        /// Regular numeric.
        RegularNumeric => "2",
        /// Group alphanumeric.
        GroupAlphanumeric => "3",
        /// Regular alphanumeric, shift 1.
        Shift1 => "4",
        /// Regular alphanumeric, shift 2.
        Shift2 => "5",
        /// Chosen by the printer from the field data.
        Automatic => "A",
    }
}
