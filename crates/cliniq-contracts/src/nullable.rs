//! Serde helpers for classifier fields that may arrive as JSON `null`.

use serde::{de, Deserialize, Deserializer};

/// Deserialize `T`, reading an explicit `null` as `T::default()`.
///
/// Pair with `#[serde(default)]` so an absent field and a `null` field end
/// up the same.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserialize an optional severity score, accepting whole-number floats
/// such as `2.0`.
pub(crate) fn severity_score<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<f64>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if raw.fract() != 0.0 || !(0.0..=f64::from(u8::MAX)).contains(&raw) {
        return Err(de::Error::custom(format!(
            "severity {raw} is not a whole number in 0..=255"
        )));
    }
    Ok(Some(raw as u8))
}
