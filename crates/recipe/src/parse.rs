/// Decode a list that remote sources encode as a quoted literal, e.g.
/// `"['Pasta', 'Garlic']"`.
///
/// Single quotes are swapped for double quotes and the result decoded as
/// JSON. Anything that still fails to decode falls back to comma-splitting
/// with quote and bracket characters stripped from each piece. This never
/// fails; malformed input degrades to the best available split.
pub fn parse_delimited_list(raw: &str) -> Vec<String> {
    let normalized = raw.replace('\'', "\"");
    match serde_json::from_str::<Vec<String>>(&normalized) {
        Ok(items) => items,
        Err(err) => {
            tracing::debug!("list literal is not valid JSON ({err}), splitting on commas");
            raw.split(',')
                .map(|piece| {
                    piece
                        .trim()
                        .trim_matches(['\'', '"', '[', ']'])
                        .trim()
                        .to_string()
                })
                .filter(|piece| !piece.is_empty())
                .collect()
        }
    }
}
