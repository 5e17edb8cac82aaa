//! Implementation of the data encodation using all specified modes.
//!
//! Every encodation turns the complete input into codewords on its own,
//! starting in ASCII mode and returning to it at the end where the mode
//! requires this. [encode] runs a set of them and keeps the shortest result.
use flagset::FlagSet;
use thiserror::Error;

pub(crate) mod ascii;
mod base256;
mod c40;
mod edifact;
mod text;
mod x12;

mod encodation_type;

#[cfg(test)]
mod tests;

pub use encodation_type::EncodationType;

pub(crate) const UNLATCH: u8 = 254;

/// Errors while turning the input into a Data Matrix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataEncodingError {
    /// The requested encodation name is not known.
    #[error("unknown encodation {0:?}")]
    InvalidOption(String),
    /// None of the allowed encodations can represent the input.
    #[error("the input can not be represented with the allowed encodations")]
    IllegalData,
    /// The encoded input does not fit into any symbol size.
    #[error("the input is too long for any symbol size")]
    TooMuchData,
}

impl DataEncodingError {
    /// Is this a failure of the encoding itself, as opposed to bad options?
    pub fn is_encoding_error(&self) -> bool {
        matches!(self, Self::IllegalData | Self::TooMuchData)
    }
}

/// Run every encodation in `types` and collect the successful results.
///
/// An encodation fails if it can not represent the input, or if it produces
/// no codewords at all. The results are ordered like [EncodationType]'s
/// declaration.
pub(crate) fn candidates(data: &[u8], types: FlagSet<EncodationType>) -> Vec<(EncodationType, Vec<u8>)> {
    types
        .into_iter()
        .filter_map(|t| {
            let codewords = t.encode(data).filter(|cw| !cw.is_empty());
            match &codewords {
                Some(cw) => tracing::debug!(encodation = t.name(), len = cw.len(), "candidate"),
                None => tracing::debug!(encodation = t.name(), "encodation not applicable"),
            }
            codewords.map(|cw| (t, cw))
        })
        .collect()
}

/// Encode the input with the encodation which needs the fewest codewords.
pub(crate) fn encode(
    data: &[u8],
    types: FlagSet<EncodationType>,
) -> Result<(EncodationType, Vec<u8>), DataEncodingError> {
    // min_by_key keeps the first of several minima, so ties go to the
    // encodation declared first
    let (encodation, codewords) = candidates(data, types)
        .into_iter()
        .min_by_key(|(_, cw)| cw.len())
        .ok_or(DataEncodingError::IllegalData)?;
    tracing::debug!(
        encodation = encodation.name(),
        len = codewords.len(),
        "encodation selected"
    );
    Ok((encodation, codewords))
}
