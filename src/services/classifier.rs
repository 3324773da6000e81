//! Device classification: raw hardware identifier to layout family.
//!
//! Classification is a pure catalog lookup. The simulator override is passed in
//! as a [`HostEnvironment`] value instead of being baked in at build time, so
//! the same code path resolves real hardware, previews, and test hosts.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SIMULATOR_MACHINE;
use crate::models::{DeviceFamily, Machine, CATALOG};

/// Description of the host the skin is generated for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostEnvironment {
    /// Running on a non-hardware host (simulator, preview, CI)
    #[serde(default)]
    pub simulator: bool,
    /// Identifier forced when `simulator` is set
    #[serde(default = "default_simulator_machine")]
    pub simulator_machine: String,
}

fn default_simulator_machine() -> String {
    DEFAULT_SIMULATOR_MACHINE.to_string()
}

impl Default for HostEnvironment {
    fn default() -> Self {
        Self::hardware()
    }
}

impl HostEnvironment {
    /// A real device: identifiers are used as reported.
    #[must_use]
    pub fn hardware() -> Self {
        Self {
            simulator: false,
            simulator_machine: default_simulator_machine(),
        }
    }

    /// A simulator host resolving to the default representative machine.
    #[must_use]
    pub fn simulator() -> Self {
        Self {
            simulator: true,
            simulator_machine: default_simulator_machine(),
        }
    }

    /// Returns the identifier classification should use.
    ///
    /// On a simulator host the reported identifier is meaningless (it names the
    /// host CPU), so the configured representative machine replaces it.
    #[must_use]
    pub fn effective_identifier<'a>(&'a self, reported: &'a str) -> &'a str {
        if self.simulator {
            &self.simulator_machine
        } else {
            reported
        }
    }
}

/// Looks up a machine in the catalog.
#[must_use]
pub fn lookup(identifier: &str) -> Option<&'static Machine> {
    CATALOG
        .iter()
        .find(|machine| machine.identifier == identifier)
}

/// Maps a raw hardware identifier to its layout family.
///
/// Returns `None` for anything outside the catalog, including the empty
/// string. Callers treat `None` as "no default skin for this device".
#[must_use]
pub fn classify(identifier: &str) -> Option<DeviceFamily> {
    let family = lookup(identifier).map(|machine| machine.family);
    tracing::debug!(identifier, family = ?family, "classified device");
    family
}

/// Returns every catalog machine of a family, in catalog order.
pub fn machines_in(family: DeviceFamily) -> impl Iterator<Item = &'static Machine> {
    CATALOG.iter().filter(move |machine| machine.family == family)
}

/// Checks that an identifier has the `<Product><major>,<minor>` shape.
///
/// A well-formed identifier can still be unknown hardware; this only helps
/// diagnostics tell a typo from a device newer than the catalog.
#[must_use]
pub fn is_well_formed(identifier: &str) -> bool {
    Regex::new(r"^(iPhone|iPad)\d+,\d+$").is_ok_and(|pattern| pattern.is_match(identifier))
}
