//! Print control: `^PQ`.

use serde::{Deserialize, Serialize};

use super::Encode;
use crate::emit::CommandWriter;
use crate::error::BuildError;
use crate::tokens::YesNo;
use crate::validate::{Constraint, Param};

const COUNT_MAX: i64 = 99_999_999;

/// Print quantity (`^PQ`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PrintQuantity {
    /// Labels to print, 1–99,999,999.
    pub quantity: Option<u32>,
    /// Labels between pauses (and cuts), 0–99,999,999.
    pub pause_and_cut: Option<u32>,
    /// Replicates of each serial number, 0–99,999,999.
    pub replicates: Option<u32>,
    /// Skip the pause after each batch.
    pub override_pause: Option<YesNo>,
    /// Cut when an error occurs.
    pub cut_on_error: Option<YesNo>,
}

impl PrintQuantity {
    /// Print `quantity` labels.
    pub fn new(quantity: u32) -> Self {
        Self {
            quantity: Some(quantity),
            ..Default::default()
        }
    }
}

impl Encode for PrintQuantity {
    const OPCODE: &'static str = "^PQ";

    fn encode(&self, w: &mut CommandWriter<'_>) -> Result<(), BuildError> {
        const QUANTITY: Param = Param::new("quantity", Constraint::range(1, COUNT_MAX));
        const PAUSE_AND_CUT: Param = Param::new("pause_and_cut", Constraint::range(0, COUNT_MAX));
        const REPLICATES: Param = Param::new("replicates", Constraint::range(0, COUNT_MAX));
        const OVERRIDE_PAUSE: Param = Param::new("override_pause", Constraint::Flag);
        const CUT_ON_ERROR: Param = Param::new("cut_on_error", Constraint::Flag);

        w.param(&QUANTITY, self.quantity)?
            .param(&PAUSE_AND_CUT, self.pause_and_cut)?
            .param(&REPLICATES, self.replicates)?
            .param(&OVERRIDE_PAUSE, self.override_pause)?
            .param(&CUT_ON_ERROR, self.cut_on_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LabelBuilder;

    #[test]
    fn quantity_only() {
        let mut label = LabelBuilder::new();
        label.add(&PrintQuantity::new(5)).unwrap();
        assert_eq!(label.render_text(), "^XA\n^PQ5\n^XZ");
    }

    #[test]
    fn all_fields() {
        let mut label = LabelBuilder::new();
        label
            .add(&PrintQuantity {
                quantity: Some(99_999_999),
                pause_and_cut: Some(0),
                replicates: Some(2),
                override_pause: Some(YesNo::Yes),
                cut_on_error: Some(YesNo::No),
            })
            .unwrap();
        assert_eq!(label.render_text(), "^XA\n^PQ99999999,0,2,Y,N\n^XZ");
    }

    #[test]
    fn quantity_bounds() {
        assert!(LabelBuilder::new().add(&PrintQuantity::new(0)).is_err());
        assert!(LabelBuilder::new()
            .add(&PrintQuantity::new(100_000_000))
            .is_err());
    }
}
