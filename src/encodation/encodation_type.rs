use core::str::FromStr;

use flagset::{flags, FlagSet};

use super::{ascii, base256, c40, edifact, text, x12, DataEncodingError};

flags! {
    /// List of data encodation types
    ///
    /// Data Matrix knows several "codecs" to turn the input into codewords.
    /// Each one has its strengths and weaknesses. The declaration order is
    /// also the order of preference if two encodations produce the same
    /// number of codewords.
    pub enum EncodationType: u8 {
        Ascii   = 0b0000001,
        C40     = 0b0000010,
        Text    = 0b0000100,
        X12     = 0b0001000,
        Edifact = 0b0010000,
        Base256 = 0b0100000,
        /// ASCII with the group separator (29) written as FNC1.
        Gs1     = 0b1000000,
    }
}

impl EncodationType {
    /// Get flag set with all encodation types activated.
    pub fn all() -> FlagSet<Self> {
        FlagSet::full()
    }

    /// The encodations tried when none is forced. GS1 is only used on request.
    pub fn auto() -> FlagSet<Self> {
        Self::Ascii | Self::C40 | Self::Text | Self::X12 | Self::Edifact | Self::Base256
    }

    /// Short name of the encodation, as accepted by [FromStr].
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ascii => "ascii",
            Self::C40 => "c40",
            Self::Text => "txt",
            Self::X12 => "x12",
            Self::Edifact => "edifact",
            Self::Base256 => "base",
            Self::Gs1 => "gs1",
        }
    }

    /// Run the encodation over the full input.
    ///
    /// Returns `None` if the input can not be represented.
    pub(super) fn encode(&self, data: &[u8]) -> Option<Vec<u8>> {
        match self {
            Self::Ascii => Some(ascii::encode(data)),
            Self::Gs1 => Some(ascii::encode_gs1(data)),
            Self::C40 => c40::encode(data),
            Self::Text => text::encode(data),
            Self::X12 => x12::encode(data),
            Self::Edifact => edifact::encode(data),
            Self::Base256 => base256::encode(data),
        }
    }
}

impl FromStr for EncodationType {
    type Err = DataEncodingError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|t| t.name() == name)
            .ok_or_else(|| DataEncodingError::InvalidOption(name.into()))
    }
}

#[test]
fn test_names_round_trip() {
    for t in EncodationType::all() {
        assert_eq!(t.name().parse::<EncodationType>().unwrap(), t);
    }
}

#[test]
fn test_unknown_name() {
    assert_eq!(
        "qr".parse::<EncodationType>(),
        Err(DataEncodingError::InvalidOption("qr".into()))
    );
    // names are case sensitive
    assert!("ASCII".parse::<EncodationType>().is_err());
}

#[test]
fn test_auto_excludes_gs1() {
    assert!(!EncodationType::auto().contains(EncodationType::Gs1));
    assert_eq!(EncodationType::auto().into_iter().count(), 6);
}
