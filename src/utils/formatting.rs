//! Text formatting helpers for the CLI views.

/// Render a completion bar like `[########------------]  40%`.
pub fn completion_bar(pct: u8, width: usize) -> String {
    let pct = pct.min(100);
    let filled = (pct as usize * width) / 100;

    let mut out = String::with_capacity(width + 8);
    out.push('[');
    for i in 0..width {
        out.push(if i < filled { '#' } else { '-' });
    }
    out.push(']');
    out.push_str(&format!(" {:>3}%", pct));
    out
}

/// Checkbox cell for daily views.
pub fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}
