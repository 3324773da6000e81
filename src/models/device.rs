//! Hardware catalog: every supported machine identifier and its device family.
//!
//! The catalog is versioned data. When new hardware ships, add its identifier
//! here; an identifier missing from the table is reported as unsupported
//! hardware, not as an error in the catalog.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical hardware size grouping used to select layout constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeviceFamily {
    /// 4.7" to 5.4" phones (SE 2nd/3rd gen, 12 mini, 13 mini)
    PhoneMini,
    /// Every other phone
    Phone,
    /// Tablets of any size
    Tablet,
}

impl DeviceFamily {
    /// All families in catalog order.
    pub const ALL: [Self; 3] = [Self::PhoneMini, Self::Phone, Self::Tablet];

    /// Kebab-case name used on the command line and in serialized output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PhoneMini => "phone-mini",
            Self::Phone => "phone",
            Self::Tablet => "tablet",
        }
    }
}

impl fmt::Display for DeviceFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "phone-mini" | "mini" => Ok(Self::PhoneMini),
            "phone" => Ok(Self::Phone),
            "tablet" => Ok(Self::Tablet),
            other => Err(format!(
                "Unknown device family '{other}'. Must be 'phone-mini', 'phone', or 'tablet'"
            )),
        }
    }
}

/// One entry of the hardware catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Machine {
    /// Raw hardware identifier reported by the platform (e.g., "iPhone16,2")
    pub identifier: &'static str,
    /// Marketing name
    pub name: &'static str,
    /// Layout family
    pub family: DeviceFamily,
}

const fn machine(identifier: &'static str, name: &'static str, family: DeviceFamily) -> Machine {
    Machine {
        identifier,
        name,
        family,
    }
}

use DeviceFamily::{Phone, PhoneMini, Tablet};

/// Every supported machine, grouped by family.
pub static CATALOG: &[Machine] = &[
    // Phone mini
    machine("iPhone12,8", "iPhone SE (2nd generation)", PhoneMini),
    machine("iPhone14,6", "iPhone SE (3rd generation)", PhoneMini),
    machine("iPhone13,1", "iPhone 12 mini", PhoneMini),
    machine("iPhone14,4", "iPhone 13 mini", PhoneMini),
    // Phone
    machine("iPhone10,1", "iPhone 8", Phone),
    machine("iPhone10,4", "iPhone 8", Phone),
    machine("iPhone10,2", "iPhone 8 Plus", Phone),
    machine("iPhone10,5", "iPhone 8 Plus", Phone),
    machine("iPhone10,3", "iPhone X", Phone),
    machine("iPhone10,6", "iPhone X", Phone),
    machine("iPhone11,8", "iPhone XR", Phone),
    machine("iPhone11,2", "iPhone XS", Phone),
    machine("iPhone11,4", "iPhone XS Max", Phone),
    machine("iPhone11,6", "iPhone XS Max", Phone),
    machine("iPhone12,1", "iPhone 11", Phone),
    machine("iPhone12,3", "iPhone 11 Pro", Phone),
    machine("iPhone12,5", "iPhone 11 Pro Max", Phone),
    machine("iPhone13,2", "iPhone 12", Phone),
    machine("iPhone13,3", "iPhone 12 Pro", Phone),
    machine("iPhone13,4", "iPhone 12 Pro Max", Phone),
    machine("iPhone14,5", "iPhone 13", Phone),
    machine("iPhone14,2", "iPhone 13 Pro", Phone),
    machine("iPhone14,3", "iPhone 13 Pro Max", Phone),
    machine("iPhone14,7", "iPhone 14", Phone),
    machine("iPhone14,8", "iPhone 14 Plus", Phone),
    machine("iPhone15,2", "iPhone 14 Pro", Phone),
    machine("iPhone15,3", "iPhone 14 Pro Max", Phone),
    machine("iPhone15,4", "iPhone 15", Phone),
    machine("iPhone15,5", "iPhone 15 Plus", Phone),
    machine("iPhone16,1", "iPhone 15 Pro", Phone),
    machine("iPhone16,2", "iPhone 15 Pro Max", Phone),
    machine("iPhone17,3", "iPhone 16", Phone),
    machine("iPhone17,4", "iPhone 16 Plus", Phone),
    machine("iPhone17,1", "iPhone 16 Pro", Phone),
    machine("iPhone17,2", "iPhone 16 Pro Max", Phone),
    // Tablet
    machine("iPad13,18", "iPad (10th generation)", Tablet),
    machine("iPad13,19", "iPad (10th generation)", Tablet),
    machine("iPad12,1", "iPad (9th generation)", Tablet),
    machine("iPad12,2", "iPad (9th generation)", Tablet),
    machine("iPad11,6", "iPad (8th generation)", Tablet),
    machine("iPad11,7", "iPad (8th generation)", Tablet),
    machine("iPad7,11", "iPad (7th generation)", Tablet),
    machine("iPad7,12", "iPad (7th generation)", Tablet),
    machine("iPad7,5", "iPad (6th generation)", Tablet),
    machine("iPad7,6", "iPad (6th generation)", Tablet),
    machine("iPad6,11", "iPad (5th generation)", Tablet),
    machine("iPad6,12", "iPad (5th generation)", Tablet),
    machine("iPad14,8", "iPad Air 11-inch (M2)", Tablet),
    machine("iPad14,9", "iPad Air 11-inch (M2)", Tablet),
    machine("iPad14,10", "iPad Air 13-inch (M2)", Tablet),
    machine("iPad14,11", "iPad Air 13-inch (M2)", Tablet),
    machine("iPad13,16", "iPad Air (5th generation)", Tablet),
    machine("iPad13,17", "iPad Air (5th generation)", Tablet),
    machine("iPad13,1", "iPad Air (4th generation)", Tablet),
    machine("iPad13,2", "iPad Air (4th generation)", Tablet),
    machine("iPad16,1", "iPad mini (A17 Pro)", Tablet),
    machine("iPad16,2", "iPad mini (A17 Pro)", Tablet),
    machine("iPad14,1", "iPad mini (6th generation)", Tablet),
    machine("iPad14,2", "iPad mini (6th generation)", Tablet),
    machine("iPad11,1", "iPad mini (5th generation)", Tablet),
    machine("iPad11,2", "iPad mini (5th generation)", Tablet),
    machine("iPad6,3", "iPad Pro (9.7-inch)", Tablet),
    machine("iPad6,4", "iPad Pro (9.7-inch)", Tablet),
    machine("iPad6,7", "iPad Pro (12.9-inch)", Tablet),
    machine("iPad6,8", "iPad Pro (12.9-inch)", Tablet),
    machine("iPad7,1", "iPad Pro (12.9-inch) (2nd generation)", Tablet),
    machine("iPad7,2", "iPad Pro (12.9-inch) (2nd generation)", Tablet),
    machine("iPad7,3", "iPad Pro (10.5-inch)", Tablet),
    machine("iPad7,4", "iPad Pro (10.5-inch)", Tablet),
    machine("iPad8,1", "iPad Pro (11-inch)", Tablet),
    machine("iPad8,2", "iPad Pro (11-inch)", Tablet),
    machine("iPad8,3", "iPad Pro (11-inch)", Tablet),
    machine("iPad8,4", "iPad Pro (11-inch)", Tablet),
    machine("iPad8,5", "iPad Pro (12.9-inch) (3rd generation)", Tablet),
    machine("iPad8,6", "iPad Pro (12.9-inch) (3rd generation)", Tablet),
    machine("iPad8,7", "iPad Pro (12.9-inch) (3rd generation)", Tablet),
    machine("iPad8,8", "iPad Pro (12.9-inch) (3rd generation)", Tablet),
    machine("iPad8,9", "iPad Pro (11-inch) (2nd generation)", Tablet),
    machine("iPad8,10", "iPad Pro (11-inch) (2nd generation)", Tablet),
    machine("iPad8,11", "iPad Pro (12.9-inch) (4th generation)", Tablet),
    machine("iPad8,12", "iPad Pro (12.9-inch) (4th generation)", Tablet),
    machine("iPad13,4", "iPad Pro (11-inch) (3rd generation)", Tablet),
    machine("iPad13,5", "iPad Pro (11-inch) (3rd generation)", Tablet),
    machine("iPad13,6", "iPad Pro (11-inch) (3rd generation)", Tablet),
    machine("iPad13,7", "iPad Pro (11-inch) (3rd generation)", Tablet),
    machine("iPad13,8", "iPad Pro (12.9-inch) (5th generation)", Tablet),
    machine("iPad13,9", "iPad Pro (12.9-inch) (5th generation)", Tablet),
    machine("iPad13,10", "iPad Pro (12.9-inch) (5th generation)", Tablet),
    machine("iPad13,11", "iPad Pro (12.9-inch) (5th generation)", Tablet),
    machine("iPad14,3", "iPad Pro (11-inch) (4th generation)", Tablet),
    machine("iPad14,4", "iPad Pro (11-inch) (4th generation)", Tablet),
    machine("iPad14,5", "iPad Pro (12.9-inch) (6th generation)", Tablet),
    machine("iPad14,6", "iPad Pro (12.9-inch) (6th generation)", Tablet),
    machine("iPad16,3", "iPad Pro 11-inch (M4)", Tablet),
    machine("iPad16,4", "iPad Pro 11-inch (M4)", Tablet),
    machine("iPad16,5", "iPad Pro 13-inch (M4)", Tablet),
    machine("iPad16,6", "iPad Pro 13-inch (M4)", Tablet),
];
