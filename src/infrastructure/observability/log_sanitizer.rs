const MAX_VISIBLE_CHARS: usize = 200;
const HF_TOKEN_PREFIX: &str = "hf_";
const MIN_HF_TOKEN_BODY: usize = 20;

/// Prepares user- or remote-supplied text for logging: trims, truncates and
/// redacts anything that looks like a credential.
pub fn sanitize_for_log(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let redacted = redact_hf_tokens(&redact_key_values(trimmed));

    match redacted.char_indices().nth(MAX_VISIBLE_CHARS) {
        Some((cut, _)) => format!(
            "{}... ({} chars total)",
            &redacted[..cut],
            redacted.chars().count()
        ),
        None => redacted,
    }
}

fn redact_key_values(text: &str) -> String {
    let patterns = [
        ("Bearer ", "Bearer [REDACTED]"),
        ("token=", "token=[REDACTED]"),
        ("api_key=", "api_key=[REDACTED]"),
    ];

    let mut result = text.to_string();
    for (pattern, replacement) in patterns {
        let mut search_from = 0;
        while let Some(found) = result[search_from..].find(pattern) {
            let idx = search_from + found;
            let value_start = idx + pattern.len();
            let end = result[value_start..]
                .find(|c: char| c.is_whitespace() || c == '&' || c == '"' || c == '\'')
                .map(|i| value_start + i)
                .unwrap_or(result.len());
            result = format!("{}{}{}", &result[..idx], replacement, &result[end..]);
            search_from = idx + replacement.len();
        }
    }

    result
}

fn redact_hf_tokens(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(idx) = rest.find(HF_TOKEN_PREFIX) {
        let body_start = idx + HF_TOKEN_PREFIX.len();
        let body_len = rest[body_start..]
            .find(|c: char| !c.is_ascii_alphanumeric())
            .unwrap_or(rest.len() - body_start);

        result.push_str(&rest[..idx]);
        if body_len >= MIN_HF_TOKEN_BODY {
            result.push_str("hf_[REDACTED]");
        } else {
            result.push_str(&rest[idx..body_start + body_len]);
        }
        rest = &rest[body_start + body_len..];
    }
    result.push_str(rest);

    result
}
