//! Channel data parsing for `--data` and `--hex`.

use artcast_core::layout;

/// Parse decimal channel values separated by commas and/or whitespace.
pub fn parse_channel_list(input: &str) -> Result<Vec<u8>, String> {
    let mut values = Vec::new();
    for (index, token) in input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
    {
        let value: u16 = token
            .parse()
            .map_err(|_| format!("channel {} is not a number: '{}'", index + 1, token))?;
        let value = u8::try_from(value)
            .map_err(|_| format!("channel {} value {} is outside 0..=255", index + 1, value))?;
        values.push(value);
    }
    check_len(values)
}

/// Parse a hex string (`ff0080`, optional `0x` prefix, whitespace ignored).
pub fn parse_hex(input: &str) -> Result<Vec<u8>, String> {
    let trimmed = input.trim();
    let trimmed = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let digits: Vec<char> = trimmed.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.len() % 2 != 0 {
        return Err(format!("hex input has an odd number of digits ({})", digits.len()));
    }
    let mut values = Vec::with_capacity(digits.len() / 2);
    for pair in digits.chunks(2) {
        let text: String = pair.iter().collect();
        let value = u8::from_str_radix(&text, 16)
            .map_err(|_| format!("invalid hex byte '{}'", text))?;
        values.push(value);
    }
    check_len(values)
}

pub fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

fn check_len(values: Vec<u8>) -> Result<Vec<u8>, String> {
    if values.len() > layout::MAX_FRAME_LEN {
        return Err(format!(
            "channel frame has {} bytes, the maximum is {}",
            values.len(),
            layout::MAX_FRAME_LEN
        ));
    }
    Ok(values)
}
