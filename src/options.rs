use crate::encodation::{DataEncodingError, EncodationType};

use flagset::FlagSet;

/// Options for [encode](crate::encode).
///
/// The default produces a square symbol and picks the encodation which
/// needs the fewest codewords.
///
/// ```rust
/// # use dmtx::{EncodeOptions, EncodationType};
/// let options = EncodeOptions::default()
///     .rectangular(true)
///     .encodation(EncodationType::C40);
/// # let _ = options;
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    pub(crate) rectangular: bool,
    pub(crate) encodation: Option<EncodationType>,
}

impl EncodeOptions {
    /// Prefer rectangular symbols.
    ///
    /// Rectangles hold at most 49 data codewords, longer input still
    /// ends up in a square symbol.
    pub fn rectangular(mut self, rectangular: bool) -> Self {
        self.rectangular = rectangular;
        self
    }

    /// Force an encodation instead of the automatic choice.
    pub fn encodation(mut self, encodation: EncodationType) -> Self {
        self.encodation = Some(encodation);
        self
    }

    /// Force an encodation given by its name, see [EncodationType::name].
    ///
    /// Fails with [DataEncodingError::InvalidOption] for unknown names.
    pub fn encodation_name(self, name: &str) -> Result<Self, DataEncodingError> {
        Ok(self.encodation(name.parse()?))
    }

    /// The encodations considered for these options.
    pub(crate) fn encodations(&self) -> FlagSet<EncodationType> {
        match self.encodation {
            Some(forced) => forced.into(),
            None => EncodationType::auto(),
        }
    }
}

#[test]
fn test_default_is_auto() {
    let options = EncodeOptions::default();
    assert!(!options.rectangular);
    assert_eq!(options.encodations(), EncodationType::auto());
}

#[test]
fn test_encodation_name() {
    let options = EncodeOptions::default().encodation_name("txt").unwrap();
    assert_eq!(options.encodations(), FlagSet::from(EncodationType::Text));

    let options = EncodeOptions::default().encodation_name("gs1").unwrap();
    assert_eq!(options.encodations(), FlagSet::from(EncodationType::Gs1));
}

#[test]
fn test_encodation_name_unknown() {
    assert_eq!(
        EncodeOptions::default().encodation_name("qr"),
        Err(DataEncodingError::InvalidOption("qr".into()))
    );
    // names are case sensitive
    assert!(EncodeOptions::default().encodation_name("ASCII").is_err());
}
