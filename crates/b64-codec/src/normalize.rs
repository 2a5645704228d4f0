//! Unicode normalization shared by the text entry points.

use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;

use crate::options::Normalization;

/// Applies the requested normalization form, borrowing the input when no
/// normalization is requested.
pub(crate) fn apply_normalization(text: &str, form: Normalization) -> Cow<'_, str> {
    match form {
        Normalization::None => Cow::Borrowed(text),
        Normalization::Nfc => Cow::Owned(text.nfc().collect()),
        Normalization::Nfd => Cow::Owned(text.nfd().collect()),
        Normalization::Nfkc => Cow::Owned(text.nfkc().collect()),
        Normalization::Nfkd => Cow::Owned(text.nfkd().collect()),
    }
}
