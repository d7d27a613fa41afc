use serde::{Deserialize, Serialize};

/// Which character codes feed the digit packer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CodeUnit {
    /// Raw UTF-8 bytes, one code (0-255) per byte.
    #[default]
    Byte,
    /// Unicode scalar values, one code per `char`.
    Char,
}

/// What to do when the quadratic's leading coefficient is zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DegeneratePolicy {
    /// Skip the quadratic step and mix with a quad integer of 0.
    #[default]
    Fallback,
    /// Fail with `DigestError::DegenerateInput`.
    Reject,
}

/// Fully resolved digest options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct DigestOptions {
    pub code_unit: CodeUnit,
    pub degenerate: DegeneratePolicy,
}

impl DigestOptions {
    /// Options that surface degenerate inputs as errors.
    pub fn strict() -> Self {
        Self {
            degenerate: DegeneratePolicy::Reject,
            ..Self::default()
        }
    }

    /// Apply a layer on top of these options; keys present in the layer win.
    pub fn merged_with(self, layer: &OptionsLayer) -> Self {
        Self {
            code_unit: layer.code_unit.unwrap_or(self.code_unit),
            degenerate: layer.degenerate.unwrap_or(self.degenerate),
        }
    }
}

/// One configuration source (file or command line) with every key optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct OptionsLayer {
    pub code_unit: Option<CodeUnit>,
    pub degenerate: Option<DegeneratePolicy>,
}

/// Resolve layers in order of increasing precedence over the defaults.
pub fn merge_layers<'a, I>(layers: I) -> DigestOptions
where
    I: IntoIterator<Item = &'a OptionsLayer>,
{
    layers
        .into_iter()
        .fold(DigestOptions::default(), DigestOptions::merged_with)
}
