//! Phone number validation for the African markets the platform serves.
//!
//! Numbers are matched against a fixed, ordered table of per-country
//! patterns. Every operation first strips whitespace and hyphens, and the
//! first country in table order whose patterns match wins.
use crate::error::phone::PhoneError;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::fmt;

mod carrier;

pub use carrier::Carrier;

pub const KENYA: &str = "Kenya";
const KENYA_CODE: &str = "254";

struct CountrySpec {
    name: &'static str,
    code: &'static str,
    local: &'static str,
    international: &'static str,
    carriers: &'static [&'static str],
}

const COUNTRY_SPECS: &[CountrySpec] = &[
    CountrySpec {
        name: KENYA,
        code: KENYA_CODE,
        local: r"^07[0-9]{8}$",
        international: r"^(\+?254)7[0-9]{8}$",
        carriers: &["Safaricom", "Airtel"],
    },
    CountrySpec {
        name: "Nigeria",
        code: "234",
        local: r"^0[789][0-9]{9}$",
        international: r"^(\+?234)[789][0-9]{9}$",
        carriers: &["MTN", "Glo", "Airtel", "9mobile"],
    },
    CountrySpec {
        name: "South Africa",
        code: "27",
        local: r"^0[6-8][0-9]{8}$",
        international: r"^(\+?27)[6-8][0-9]{8}$",
        carriers: &["Vodacom", "MTN", "Cell C"],
    },
    CountrySpec {
        name: "Ghana",
        code: "233",
        local: r"^0[25][0-9]{8}$",
        international: r"^(\+?233)[25][0-9]{8}$",
        carriers: &["MTN", "Vodafone", "AirtelTigo"],
    },
    CountrySpec {
        name: "Tanzania",
        code: "255",
        local: r"^0[67][0-9]{8}$",
        international: r"^(\+?255)[67][0-9]{8}$",
        carriers: &["Vodacom", "Airtel", "Tigo"],
    },
    CountrySpec {
        name: "Uganda",
        code: "256",
        local: r"^0[37][0-9]{8}$",
        international: r"^(\+?256)[37][0-9]{8}$",
        carriers: &["MTN", "Airtel"],
    },
    CountrySpec {
        name: "Rwanda",
        code: "250",
        local: r"^07[0-9]{8}$",
        international: r"^(\+?250)7[0-9]{8}$",
        carriers: &["MTN", "Airtel"],
    },
    CountrySpec {
        name: "Ethiopia",
        code: "251",
        local: r"^09[0-9]{8}$",
        international: r"^(\+?251)9[0-9]{8}$",
        carriers: &["Ethio Telecom"],
    },
    CountrySpec {
        name: "Egypt",
        code: "20",
        local: r"^01[0125][0-9]{8}$",
        international: r"^(\+?20)1[0125][0-9]{8}$",
        carriers: &["Vodafone", "Orange", "Etisalat"],
    },
    CountrySpec {
        name: "Morocco",
        code: "212",
        local: r"^0[67][0-9]{8}$",
        international: r"^(\+?212)[67][0-9]{8}$",
        carriers: &["Maroc Telecom", "Orange", "Inwi"],
    },
    CountrySpec {
        name: "Zambia",
        code: "260",
        local: r"^09[567][0-9]{7}$",
        international: r"^(\+?260)9[567][0-9]{7}$",
        carriers: &["MTN", "Airtel", "Zamtel"],
    },
    CountrySpec {
        name: "Zimbabwe",
        code: "263",
        local: r"^07[1378][0-9]{7}$",
        international: r"^(\+?263)7[1378][0-9]{7}$",
        carriers: &["Econet", "NetOne", "Telecel"],
    },
    CountrySpec {
        name: "Cameroon",
        code: "237",
        local: r"^6[5-9][0-9]{7}$",
        international: r"^(\+?237)6[5-9][0-9]{7}$",
        carriers: &["MTN", "Orange"],
    },
    CountrySpec {
        name: "Senegal",
        code: "221",
        local: r"^7[0678][0-9]{7}$",
        international: r"^(\+?221)7[0678][0-9]{7}$",
        carriers: &["Orange", "Free", "Expresso"],
    },
    CountrySpec {
        name: "Ivory Coast",
        code: "225",
        local: r"^0[1-9][0-9]{8}$",
        international: r"^(\+?225)[0-9][0-9]{8}$",
        carriers: &["MTN", "Orange", "Moov"],
    },
    CountrySpec {
        name: "Mozambique",
        code: "258",
        local: r"^8[2-7][0-9]{7}$",
        international: r"^(\+?258)8[2-7][0-9]{7}$",
        carriers: &["Vodacom", "Movitel", "TMcel"],
    },
];

/// A country the portal accepts phone numbers from.
#[derive(Debug)]
pub struct Country {
    pub name: &'static str,
    /// Dialing code without the leading `+`.
    pub code: &'static str,
    pub carriers: &'static [&'static str],
    patterns: [Regex; 2],
}

impl Country {
    fn matches(&self, cleaned: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(cleaned))
    }
}

lazy_static! {
    static ref COUNTRIES: Vec<Country> = COUNTRY_SPECS
        .iter()
        .map(|spec| Country {
            name: spec.name,
            code: spec.code,
            carriers: spec.carriers,
            patterns: [
                Regex::new(spec.local).unwrap(),
                Regex::new(spec.international).unwrap(),
            ],
        })
        .collect();
}

/// All supported countries, in matching order.
pub fn countries() -> &'static [Country] {
    &COUNTRIES
}

/// Removes whitespace and hyphens.
pub fn clean(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}

fn match_cleaned(cleaned: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|country| country.matches(cleaned))
}

pub fn validate(phone: &str) -> bool {
    detect_country(phone).is_some()
}

pub fn detect_country(phone: &str) -> Option<&'static Country> {
    match_cleaned(&clean(phone))
}

pub fn country_code(phone: &str) -> Option<&'static str> {
    detect_country(phone).map(|c| c.code)
}

/// Rewrites a Kenyan number given as `+254…` or `254…` into its local `0…` form.
fn kenyan_local_form(cleaned: &str) -> String {
    if let Some(rest) = cleaned.strip_prefix("+254") {
        format!("0{rest}")
    } else if let Some(rest) = cleaned.strip_prefix(KENYA_CODE) {
        format!("0{rest}")
    } else {
        cleaned.to_string()
    }
}

/// Carrier lookup. Only Kenyan numbers are mapped; everything else is `Unknown`.
pub fn detect_carrier(phone: &str) -> Carrier {
    let cleaned = clean(phone);
    match match_cleaned(&cleaned) {
        Some(country) if country.name == KENYA => {
            Carrier::from_kenyan_local(&kenyan_local_form(&cleaned))
        }
        _ => Carrier::Unknown,
    }
}

/// Human-friendly rendering: Kenyan numbers as `07XX XXX XXX`, others in
/// international form. Unrecognised input is returned untouched.
pub fn format_for_display(phone: &str) -> String {
    let cleaned = clean(phone);
    let country = match_cleaned(&cleaned);

    if country.is_some_and(|c| c.name == KENYA) {
        let local = kenyan_local_form(&cleaned);
        if local.len() == 10 && local.starts_with("07") {
            return format!("{} {} {}", &local[..4], &local[4..7], &local[7..]);
        }
    }

    if cleaned.starts_with('+') {
        return cleaned;
    }

    match country {
        Some(country) => match cleaned.strip_prefix('0') {
            Some(rest) => format!("+{}{}", country.code, rest),
            None => format!("+{cleaned}"),
        },
        None => phone.to_string(),
    }
}

/// International storage form, e.g. `0712345678` becomes `+254712345678`.
///
/// Numbers that match a country's local pattern without a trunk `0`
/// (Cameroon, Senegal, Mozambique) are left as cleaned input.
pub fn normalize(phone: &str) -> String {
    let cleaned = clean(phone);
    if cleaned.starts_with('+') {
        return cleaned;
    }

    for country in COUNTRIES.iter().filter(|c| c.matches(&cleaned)) {
        if let Some(rest) = cleaned.strip_prefix('0') {
            return format!("+{}{}", country.code, rest);
        }
        if cleaned.starts_with(country.code) {
            return format!("+{cleaned}");
        }
    }

    cleaned
}

/// A phone number that passed validation, kept in normalized form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhoneNumber {
    normalized: String,
    country: &'static str,
}

impl PhoneNumber {
    pub fn parse(input: &str) -> Result<Self, PhoneError> {
        if input.trim().is_empty() {
            return Err(PhoneError::Missing);
        }
        let country = detect_country(input)
            .ok_or_else(|| PhoneError::InvalidFormat(input.trim().to_string()))?;
        Ok(PhoneNumber {
            normalized: normalize(input),
            country: country.name,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    pub fn country(&self) -> &'static str {
        self.country
    }

    pub fn carrier(&self) -> Carrier {
        detect_carrier(&self.normalized)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}

/// Everything the portal can tell about a phone number.
#[derive(Debug, Serialize)]
pub struct PhoneReport {
    pub input: String,
    pub valid: bool,
    pub country: Option<&'static str>,
    pub country_code: Option<&'static str>,
    pub carrier: Option<Carrier>,
    pub display: String,
    pub normalized: String,
    pub known_carriers: Vec<&'static str>,
}

pub fn inspect(phone: &str) -> PhoneReport {
    let country = detect_country(phone);
    let carrier = match country {
        Some(c) if c.name == KENYA => Some(detect_carrier(phone)),
        _ => None,
    };
    PhoneReport {
        input: phone.to_string(),
        valid: country.is_some(),
        country: country.map(|c| c.name),
        country_code: country.map(|c| c.code),
        carrier,
        display: format_for_display(phone),
        normalized: normalize(phone),
        known_carriers: country.map(|c| c.carriers.to_vec()).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn table_compiles_and_keeps_order() {
        let names: Vec<_> = countries().iter().map(|c| c.name).collect();
        assert_eq!(names.len(), 16);
        assert_eq!(names[0], KENYA);
        assert_eq!(names[15], "Mozambique");
    }

    #[test]
    fn cleans_spaces_and_hyphens() {
        assert_eq!(clean(" 0712-345 678\t"), "0712345678");
        assert!(validate("0712 345 678"));
        assert!(validate("+254-712-345-678"));
    }

    #[test]
    fn validates_sample_number_per_country() {
        for (number, country) in [
            ("0712345678", KENYA),
            ("254712345678", KENYA),
            ("+254712345678", KENYA),
            ("08031234567", "Nigeria"),
            ("+2348031234567", "Nigeria"),
            ("0821234567", "South Africa"),
            ("0241234567", "Ghana"),
            ("+255612345678", "Tanzania"),
            ("0312345678", "Uganda"),
            ("+250712345678", "Rwanda"),
            ("0912345678", "Ethiopia"),
            ("01012345678", "Egypt"),
            ("+212612345678", "Morocco"),
            ("+260951234567", "Zambia"),
            ("+263771234567", "Zimbabwe"),
            ("651234567", "Cameroon"),
            ("701234567", "Senegal"),
            ("+225012345678", "Ivory Coast"),
            ("821234567", "Mozambique"),
        ] {
            assert_eq!(
                detect_country(number).map(|c| c.name),
                Some(country),
                "{number}"
            );
        }
    }

    #[test]
    fn first_match_wins() {
        // Rwanda shares Kenya's local pattern.
        assert_eq!(detect_country("0788123456").unwrap().name, KENYA);
        // South Africa shadows Tanzania and Morocco, Ethiopia shadows Zambia.
        assert_eq!(detect_country("0612345678").unwrap().name, "South Africa");
        assert_eq!(detect_country("0951234567").unwrap().name, "Ethiopia");
        assert_eq!(country_code("0712345678"), Some("254"));
    }

    #[test]
    fn rejects_invalid_numbers() {
        assert!(!validate(""));
        assert!(!validate("12345"));
        assert!(!validate("071234567"));
        assert!(!validate("+1 555 123 4567"));
        assert!(!validate("07a2345678"));
        assert!(detect_country("not a phone").is_none());
        assert_eq!(country_code("999"), None);
    }

    #[test]
    fn only_ascii_digits_are_accepted() {
        assert!(!validate("07١٢٣٤٥٦٧٨"));
        assert!(!validate("+254७१२३४५६७८"));
        assert!(detect_country("０７１２３４５６７８").is_none());
        assert!(PhoneNumber::parse("07١٢٣٤٥٦٧٨").is_err());
    }

    #[test]
    fn detects_kenyan_carriers() {
        assert_eq!(detect_carrier("0712345678"), Carrier::Airtel);
        assert_eq!(detect_carrier("0733123456"), Carrier::Airtel);
        assert_eq!(detect_carrier("0751123456"), Carrier::Airtel);
        assert_eq!(detect_carrier("0789123456"), Carrier::Airtel);
        assert_eq!(detect_carrier("0722123456"), Carrier::Safaricom);
        assert_eq!(detect_carrier("0799123456"), Carrier::Safaricom);
        assert_eq!(detect_carrier("+254 722 123 456"), Carrier::Safaricom);
        assert_eq!(detect_carrier("254712345678"), Carrier::Airtel);
    }

    #[test]
    fn carrier_is_unknown_outside_kenya() {
        assert_eq!(detect_carrier("+250712345678"), Carrier::Unknown);
        assert_eq!(detect_carrier("08031234567"), Carrier::Unknown);
        assert_eq!(detect_carrier("07"), Carrier::Unknown);
    }

    #[test]
    fn formats_for_display() {
        assert_eq!(format_for_display("0712345678"), "0712 345 678");
        assert_eq!(format_for_display("+254712345678"), "0712 345 678");
        assert_eq!(format_for_display("254 712 345 678"), "0712 345 678");
        assert_eq!(format_for_display("+2348031234567"), "+2348031234567");
        assert_eq!(format_for_display("08031234567"), "+2348031234567");
        assert_eq!(format_for_display("2348031234567"), "+2348031234567");
        assert_eq!(format_for_display("651234567"), "+651234567");
        assert_eq!(format_for_display("12 34"), "12 34");
    }

    #[test]
    fn normalizes_to_international() {
        assert_eq!(normalize("0712 345 678"), "+254712345678");
        assert_eq!(normalize("254712345678"), "+254712345678");
        assert_eq!(normalize("+254712345678"), "+254712345678");
        assert_eq!(normalize("0241234567"), "+233241234567");
        assert_eq!(normalize("01012345678"), "+201012345678");
        // Local forms without a trunk prefix stay as they are.
        assert_eq!(normalize("651234567"), "651234567");
        assert_eq!(normalize("abc-def"), "abcdef");
    }

    #[test]
    fn parses_phone_numbers() {
        let phone = PhoneNumber::parse("0722 123 456").unwrap();
        assert_eq!(phone.as_str(), "+254722123456");
        assert_eq!(phone.country(), KENYA);
        assert_eq!(phone.carrier(), Carrier::Safaricom);
        assert_eq!(PhoneNumber::parse("  "), Err(PhoneError::Missing));
        assert_eq!(
            PhoneNumber::parse("12345"),
            Err(PhoneError::InvalidFormat("12345".to_string()))
        );
    }

    #[test]
    fn inspect_reports_everything() {
        let report = inspect("0733 123 456");
        assert!(report.valid);
        assert_eq!(report.country, Some(KENYA));
        assert_eq!(report.country_code, Some("254"));
        assert_eq!(report.carrier, Some(Carrier::Airtel));
        assert_eq!(report.display, "0733 123 456");
        assert_eq!(report.normalized, "+254733123456");
        assert_eq!(report.known_carriers, vec!["Safaricom", "Airtel"]);

        let report = inspect("08031234567");
        assert_eq!(report.carrier, None);
        assert_eq!(report.known_carriers.len(), 4);

        let report = inspect("nope");
        assert!(!report.valid);
        assert!(report.known_carriers.is_empty());
    }

    proptest! {
        #[test]
        fn kenyan_numbers_normalize_stably(rest in "[0-9]{8}") {
            let local = format!("07{rest}");
            let normalized = normalize(&local);
            prop_assert_eq!(&normalized, &format!("+2547{rest}"));
            prop_assert_eq!(normalize(&normalized), normalized.clone());
            prop_assert!(validate(&normalized));
            prop_assert_eq!(detect_carrier(&local), detect_carrier(&normalized));
        }
    }
}
