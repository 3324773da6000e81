//! Default skin assembly.
//!
//! Ties the pipeline together: classify the device, resolve the geometry
//! basis, generate the layout once, and wrap it with metadata. Nothing is
//! cached; callers re-request a skin whenever the window geometry changes.

use std::fmt;

use crate::constants::{DEFAULT_SKIN_AUTHOR, DEFAULT_SKIN_AUTHOR_TWITTER, DEFAULT_SKIN_TITLE};
use crate::models::{Author, Core, Orientations, Skin, Social, SocialPlatform};

use super::basis::{resolve_basis, WindowSnapshot};
use super::classifier::{classify, machines_in, HostEnvironment};
use super::layout::generate;

/// Reasons a default skin cannot be produced this cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkinUnavailable {
    /// Hardware identifier is not in the catalog; the overlay is suppressed
    DeviceUnrecognized {
        /// Identifier that was looked up (after any simulator override)
        identifier: String,
    },
    /// No window or safe-area source yet; retry on the next lifecycle event
    WindowUnavailable,
}

impl fmt::Display for SkinUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeviceUnrecognized { identifier } if identifier.is_empty() => {
                write!(f, "No default skin: empty device identifier")
            }
            Self::DeviceUnrecognized { identifier } => {
                write!(f, "No default skin for unrecognized device '{identifier}'")
            }
            Self::WindowUnavailable => write!(f, "No default skin: window is not available"),
        }
    }
}

impl std::error::Error for SkinUnavailable {}

/// Builds the default skin for a device and window.
///
/// # Arguments
///
/// * `identifier` - Hardware identifier reported by the platform
/// * `window` - Screen bounds and safe area, or `None` if no window exists yet
/// * `host` - Host description; on a simulator the identifier is overridden
///
/// # Errors
///
/// Returns `DeviceUnrecognized` for identifiers outside the catalog and
/// `WindowUnavailable` when `window` is `None`. No partial skin is returned.
pub fn assemble_default_skin(
    identifier: &str,
    window: Option<&WindowSnapshot>,
    host: &HostEnvironment,
) -> Result<Skin, SkinUnavailable> {
    let Some(window) = window else {
        tracing::warn!("window unavailable, skipping skin construction");
        return Err(SkinUnavailable::WindowUnavailable);
    };

    let identifier = host.effective_identifier(identifier);
    let Some(family) = classify(identifier) else {
        tracing::warn!(identifier, "no default skin for unrecognized device");
        return Err(SkinUnavailable::DeviceUnrecognized {
            identifier: identifier.to_string(),
        });
    };

    let basis = resolve_basis(window);
    let portrait = generate(
        family,
        basis.width,
        basis.height,
        &basis.control_insets,
        &basis.viewport_insets,
    );

    let supported_devices = machines_in(family)
        .map(|machine| machine.identifier.to_string())
        .collect();

    Ok(Skin {
        author: Author {
            name: DEFAULT_SKIN_AUTHOR.to_string(),
            socials: vec![Social {
                platform: SocialPlatform::Twitter,
                handle: DEFAULT_SKIN_AUTHOR_TWITTER.to_string(),
            }],
        },
        core: Core::Cytrus,
        orientations: Orientations {
            landscape_left: portrait.clone(),
            landscape_right: portrait.clone(),
            portrait,
            supported_devices,
        },
        title: DEFAULT_SKIN_TITLE.to_string(),
    })
}
