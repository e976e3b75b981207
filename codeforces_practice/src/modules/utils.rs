/// Codeforces rank color for a problem rating.
pub fn rate_to_color(rate: i32) -> String {
    match rate {
        i32::MIN..=1199 => "gray",
        1200..=1399 => "green",
        1400..=1599 => "cyan",
        1600..=1899 => "blue",
        1900..=2099 => "violet",
        2100..=2399 => "orange",
        _ => "red",
    }
    .to_string()
}
