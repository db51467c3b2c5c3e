/// Formats an amount in rupees with Indian digit grouping: the last three
/// digits, then groups of two (`₹ 1,23,45,678.90`). Negative amounts keep
/// the sign after the symbol.
pub fn format_inr(value: f64) -> String {
    if !value.is_finite() {
        return format!("₹ {value}");
    }

    let rounded = (value * 100.0).round() / 100.0;
    let negative = rounded < 0.0;
    let text = format!("{:.2}", rounded.abs());
    let (digits, decimals) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let sign = if negative { "-" } else { "" };
    format!("₹ {sign}{}.{decimals}", group_indian(digits))
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::with_capacity(head.len() / 2 + 2);
    let lead = head.len() % 2;
    if lead == 1 {
        groups.push(&head[..1]);
    }
    groups.extend(
        head.as_bytes()[lead..]
            .chunks(2)
            .map(|pair| std::str::from_utf8(pair).unwrap_or_default()),
    );
    groups.push(tail);
    groups.join(",")
}
