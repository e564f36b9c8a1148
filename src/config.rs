use log::Level;

pub const BUSINESS_NAME: &str = "HOMANOL Gas Plant";
pub const FOUNDED_YEAR: i32 = 2015;

pub const ADDRESS: &str = "98 Port Harcourt Road, Aba, Abia State";
pub const SHORT_ADDRESS: &str = "98 Port Harcourt Road, Aba";
pub const ADDRESS_LANDMARK: &str = "Opposite Trinity Hospital, Near Ariaria Junction";
pub const MAPS_QUERY: &str = "98 Port Harcourt Road Aba";
pub const COORDINATES: &str = "5.1167° N, 7.3667° E";

/// International format without spaces, used for `tel:` and WhatsApp links.
pub const PHONE_E164: &str = "+2348031234567";
pub const PHONE_DISPLAY: &str = "+234 803 123 4567";
pub const EMERGENCY_PHONE_DISPLAY: &str = "+234 803 999 4567";
pub const EMAIL: &str = "info@homanolgas.com";

/// Monday to Saturday.
pub const HOURS_WEEKDAYS: &str = "7:00 AM - 8:00 PM";
pub const HOURS_SUNDAYS: &str = "9:00 AM - 4:00 PM";

/// Naira per kilogram of LPG.
pub const PRICE_PER_KG: u32 = 1_050;

/// Cylinder sizes on the price list, in kilograms.
pub const PRICED_CYLINDERS_KG: &[f64] = &[3.0, 5.0, 12.5, 25.0];

/// Cylinder sizes we refill.
pub const REFILL_SIZES: &str = "3kg, 5kg, 6kg, 12.5kg, 25kg, 50kg";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while developing with `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn tel_href(phone: &str) -> String {
    format!("tel:{}", phone)
}

pub fn whatsapp_href(phone: &str) -> String {
    format!("https://wa.me/{}", phone.trim_start_matches('+'))
}

pub fn mailto_href(email: &str) -> String {
    format!("mailto:{}", email)
}

/// Maps search URL with every word percent-encoded and words joined by `+`.
pub fn maps_href(query: &str) -> String {
    let q = query
        .split_whitespace()
        .map(|word| urlencoding::encode(word).into_owned())
        .collect::<Vec<_>>()
        .join("+");
    format!("https://maps.google.com/?q={}", q)
}

pub fn cylinder_price(kg: f64) -> u32 {
    (kg * PRICE_PER_KG as f64).round() as u32
}

/// Formats naira with thousands separators, e.g. `₦13,125`.
pub fn format_naira(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    format!("₦{}", out)
}

/// Cylinder size label without a trailing `.0`, e.g. `12.5kg`, `3kg`.
pub fn format_kg(kg: f64) -> String {
    if kg.fract() == 0.0 {
        format!("{}kg", kg as u32)
    } else {
        format!("{}kg", kg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_links() {
        assert_eq!(tel_href(PHONE_E164), "tel:+2348031234567");
        assert_eq!(whatsapp_href(PHONE_E164), "https://wa.me/2348031234567");
        assert_eq!(mailto_href(EMAIL), "mailto:info@homanolgas.com");
    }

    #[test]
    fn maps_link_joins_words_with_plus() {
        assert_eq!(
            maps_href(MAPS_QUERY),
            "https://maps.google.com/?q=98+Port+Harcourt+Road+Aba"
        );
    }

    #[test]
    fn maps_link_encodes_reserved_characters() {
        assert_eq!(
            maps_href("Aba & Umuahia"),
            "https://maps.google.com/?q=Aba+%26+Umuahia"
        );
    }

    #[test]
    fn price_list_matches_per_kg_rate() {
        let prices: Vec<u32> = PRICED_CYLINDERS_KG.iter().map(|kg| cylinder_price(*kg)).collect();
        assert_eq!(prices, vec![3_150, 5_250, 13_125, 26_250]);
    }

    #[test]
    fn naira_formatting() {
        assert_eq!(format_naira(0), "₦0");
        assert_eq!(format_naira(950), "₦950");
        assert_eq!(format_naira(1_050), "₦1,050");
        assert_eq!(format_naira(13_125), "₦13,125");
        assert_eq!(format_naira(1_234_567), "₦1,234,567");
    }

    #[test]
    fn short_address_is_a_prefix_of_the_full_one() {
        assert!(ADDRESS.starts_with(SHORT_ADDRESS));
    }

    #[test]
    fn kg_formatting() {
        assert_eq!(format_kg(3.0), "3kg");
        assert_eq!(format_kg(12.5), "12.5kg");
    }
}
