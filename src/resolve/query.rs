/// Serialize leftover parameters as an `application/x-www-form-urlencoded`
/// query string.
///
/// Pair order is preserved: callers rely on the output being reproducible for
/// a given parameter bag. Keys and values are percent-encoded independently.
pub fn encode_query(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| {
            format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
        })
        .collect::<Vec<_>>()
        .join("&")
}
