use serde::Serialize;
use std::fmt;

/// Four-digit prefix blocks (`0710`-`0719`, `0730`-`0739`, ...) assigned to Airtel Kenya.
const AIRTEL_KENYA_BLOCKS: [&str; 4] = ["071", "073", "075", "078"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Carrier {
    Safaricom,
    Airtel,
    Unknown,
}

impl Carrier {
    /// Maps a Kenyan number in local `07XXXXXXXX` form to its carrier.
    pub(super) fn from_kenyan_local(local: &str) -> Self {
        match local.get(..4) {
            Some(prefix) if AIRTEL_KENYA_BLOCKS.iter().any(|b| prefix.starts_with(b)) => {
                Carrier::Airtel
            }
            Some(prefix) if prefix.starts_with("07") => Carrier::Safaricom,
            _ => Carrier::Unknown,
        }
    }
}

impl fmt::Display for Carrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Carrier::Safaricom => "Safaricom",
            Carrier::Airtel => "Airtel",
            Carrier::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_prefix_blocks() {
        for block in ["0710", "0719", "0730", "0739", "0750", "0759", "0780", "0789"] {
            assert_eq!(
                Carrier::from_kenyan_local(&format!("{block}123456")),
                Carrier::Airtel
            );
        }
        for block in ["0700", "0720", "0740", "0768", "0790", "0799"] {
            assert_eq!(
                Carrier::from_kenyan_local(&format!("{block}123456")),
                Carrier::Safaricom
            );
        }
        assert_eq!(Carrier::from_kenyan_local("0812345678"), Carrier::Unknown);
        assert_eq!(Carrier::from_kenyan_local("07"), Carrier::Unknown);
    }
}
