//! Layout generation: one orientation's controls and viewport from a geometry basis.
//!
//! All three device families share a single derivation. Only the numbers in
//! [`FamilyMetrics`] differ, so a new family is a new table row, not a new
//! copy of the formulas.
//!
//! # Layout (portrait, bottom of screen)
//!
//! ```text
//!  [L ] [ZL]                         [ZR] [R ]
//!
//!      [Up]                          [X]
//!  [Lf]    [Rt]                  [Y]     [A]
//!      [Dn]      [-] [H] [+]         [B]
//! ```
//!
//! The thumbsticks are `3u` squares sharing the d-pad and face-button
//! footprints. The viewport fills the screen below the top safe area.

use crate::models::{ControlElement, ControlType, DeviceFamily, Insets, Orientation, Rect};

/// Edge margin between a cluster and the safe area, in points.
pub const MARGIN: f64 = 10.0;

/// Horizontal gap between a shoulder button and its trigger, in points.
pub const GAP: f64 = 20.0;

/// Opacity shared by every control.
pub const SHARED_ALPHA: f64 = 0.2;

/// Smallest screen width the layout is guaranteed to fit.
pub const MIN_SCREEN_WIDTH: f64 = 320.0;

/// Smallest screen height the layout is guaranteed to fit.
pub const MIN_SCREEN_HEIGHT: f64 = 568.0;

/// Per-family layout constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FamilyMetrics {
    /// Base control unit `u`: side of a face button or d-pad arrow
    pub unit: u32,
    /// Side of the home/minus/plus buttons
    pub system_button: f64,
    /// Distance from screen centre to the minus button's left edge
    pub minus_offset: f64,
    /// Distance from screen centre to the plus button's left edge
    pub plus_offset: f64,
    /// Whether the zero-size settings placeholder is appended
    pub settings_placeholder: bool,
}

impl FamilyMetrics {
    /// Returns the constant table row for a family.
    #[must_use]
    pub const fn for_family(family: DeviceFamily) -> Self {
        match family {
            DeviceFamily::PhoneMini => Self {
                unit: 45,
                system_button: 25.0,
                minus_offset: 55.0,
                plus_offset: 30.0,
                settings_placeholder: true,
            },
            DeviceFamily::Phone | DeviceFamily::Tablet => Self {
                unit: 50,
                system_button: 30.0,
                minus_offset: 65.0,
                plus_offset: 35.0,
                settings_placeholder: false,
            },
        }
    }

    /// Shoulder/trigger width: `u * (3 / 2)` in integer arithmetic, i.e. `u`.
    ///
    /// Kept as integer division; the buttons are square, not 1.5 units wide.
    #[must_use]
    pub const fn shoulder_width(&self) -> u32 {
        self.unit * (3 / 2)
    }

    /// Thumbstick side: three units.
    #[must_use]
    pub fn thumbstick(&self) -> f64 {
        f64::from(self.unit) * 3.0
    }
}

/// Generates one orientation's layout.
///
/// `control_insets` positions every touch control; `viewport_insets` sizes the
/// single emulated display. The result is deterministic in its inputs.
#[must_use]
pub fn generate(
    family: DeviceFamily,
    width: f64,
    height: f64,
    control_insets: &Insets,
    viewport_insets: &Insets,
) -> Orientation {
    let metrics = FamilyMetrics::for_family(family);
    let u = f64::from(metrics.unit);
    let m = MARGIN;
    let Insets {
        left: l,
        bottom: b,
        right: r,
        ..
    } = *control_insets;

    let mut buttons = Vec::with_capacity(16);

    // Face buttons, anchored bottom-right
    let face = [
        (ControlType::A, width - (u + m + r), height - (2.0 * u + b)),
        (ControlType::B, width - (2.0 * u + m + r), height - (u + b)),
        (ControlType::X, width - (2.0 * u + m + r), height - (3.0 * u + b)),
        (ControlType::Y, width - (3.0 * u + m + r), height - (2.0 * u + b)),
    ];

    // D-pad, mirrored bottom-left
    let dpad = [
        (ControlType::DpadUp, u + m + l, height - (3.0 * u + b)),
        (ControlType::DpadDown, u + m + l, height - (u + b)),
        (ControlType::DpadLeft, m + l, height - (2.0 * u + b)),
        (ControlType::DpadRight, 2.0 * u + m + l, height - (2.0 * u + b)),
    ];

    buttons.extend(
        face.iter()
            .chain(dpad.iter())
            .map(|&(kind, x, y)| ControlElement::new(Rect::square(x, y, u), kind)),
    );

    // System buttons, centred along the bottom edge
    let s = metrics.system_button;
    let centre = width / 2.0;
    let system_y = height - (s + b);
    buttons.extend([
        ControlElement::new(Rect::square(centre - s / 2.0, system_y, s), ControlType::Home),
        ControlElement::new(
            Rect::square(centre - metrics.minus_offset, system_y, s),
            ControlType::Minus,
        ),
        ControlElement::new(
            Rect::square(centre + metrics.plus_offset, system_y, s),
            ControlType::Plus,
        ),
    ]);

    // Shoulder row above the clusters
    let w = f64::from(metrics.shoulder_width());
    let shoulder_y = height - (4.0 * u + m + b);
    buttons.extend(
        [
            (ControlType::L, m + l),
            (ControlType::ZL, m + w + GAP + l),
            (ControlType::R, width - (m + w + r)),
            (ControlType::ZR, width - (m + 2.0 * w + GAP + r)),
        ]
        .map(|(kind, x)| ControlElement::new(Rect::new(x, shoulder_y, w, u), kind)),
    );

    if metrics.settings_placeholder {
        buttons.push(ControlElement::new(Rect::ZERO, ControlType::Settings));
    }

    let stick = metrics.thumbstick();
    let stick_y = height - (stick + b);
    let thumbsticks = vec![
        ControlElement::new(Rect::square(m + l, stick_y, stick), ControlType::Left),
        ControlElement::new(
            Rect::square(width - (stick + m + r), stick_y, stick),
            ControlType::Right,
        ),
    ];

    let screens = vec![Rect::new(0.0, 0.0, width, height).inset_by(viewport_insets)];

    tracing::debug!(
        %family,
        width,
        height,
        buttons = buttons.len(),
        "generated layout"
    );

    Orientation {
        shared_alpha: SHARED_ALPHA,
        buttons,
        screens,
        thumbsticks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_of(orientation: &Orientation, kind: ControlType) -> Rect {
        orientation.control(kind).map(ControlElement::frame).unwrap()
    }

    #[test]
    fn test_metrics_table() {
        let mini = FamilyMetrics::for_family(DeviceFamily::PhoneMini);
        assert_eq!(mini.unit, 45);
        assert_eq!(mini.system_button, 25.0);
        assert!(mini.settings_placeholder);

        let phone = FamilyMetrics::for_family(DeviceFamily::Phone);
        let tablet = FamilyMetrics::for_family(DeviceFamily::Tablet);
        assert_eq!(phone, tablet);
        assert_eq!(phone.unit, 50);
        assert!(!phone.settings_placeholder);
    }

    #[test]
    fn test_shoulder_width_is_integer_division() {
        assert_eq!(FamilyMetrics::for_family(DeviceFamily::PhoneMini).shoulder_width(), 45);
        assert_eq!(FamilyMetrics::for_family(DeviceFamily::Tablet).shoulder_width(), 50);
    }

    #[test]
    fn test_phone_mini_face_button_a() {
        let insets = Insets::new(47.0, 0.0, 34.0, 0.0);
        let layout = generate(
            DeviceFamily::PhoneMini,
            375.0,
            812.0,
            &insets,
            &Insets::top_only(47.0),
        );
        assert_eq!(frame_of(&layout, ControlType::A), Rect::new(320.0, 688.0, 45.0, 45.0));
    }

    #[test]
    fn test_tablet_shoulder_l() {
        let layout = generate(
            DeviceFamily::Tablet,
            1024.0,
            1366.0,
            &Insets::ZERO,
            &Insets::ZERO,
        );
        assert_eq!(frame_of(&layout, ControlType::L), Rect::new(10.0, 1156.0, 50.0, 50.0));
    }

    #[test]
    fn test_phone_full_layout() {
        let insets = Insets::new(59.0, 0.0, 34.0, 0.0);
        let layout = generate(DeviceFamily::Phone, 393.0, 852.0, &insets, &Insets::top_only(59.0));

        // 852 - 34 = 818 is the usable bottom edge
        assert_eq!(frame_of(&layout, ControlType::A), Rect::square(333.0, 718.0, 50.0));
        assert_eq!(frame_of(&layout, ControlType::B), Rect::square(283.0, 768.0, 50.0));
        assert_eq!(frame_of(&layout, ControlType::X), Rect::square(283.0, 668.0, 50.0));
        assert_eq!(frame_of(&layout, ControlType::Y), Rect::square(233.0, 718.0, 50.0));

        assert_eq!(frame_of(&layout, ControlType::DpadUp), Rect::square(60.0, 668.0, 50.0));
        assert_eq!(frame_of(&layout, ControlType::DpadDown), Rect::square(60.0, 768.0, 50.0));
        assert_eq!(frame_of(&layout, ControlType::DpadLeft), Rect::square(10.0, 718.0, 50.0));
        assert_eq!(frame_of(&layout, ControlType::DpadRight), Rect::square(110.0, 718.0, 50.0));

        assert_eq!(frame_of(&layout, ControlType::Home), Rect::square(181.5, 788.0, 30.0));
        assert_eq!(frame_of(&layout, ControlType::Minus), Rect::square(131.5, 788.0, 30.0));
        assert_eq!(frame_of(&layout, ControlType::Plus), Rect::square(231.5, 788.0, 30.0));

        assert_eq!(frame_of(&layout, ControlType::L), Rect::square(10.0, 608.0, 50.0));
        assert_eq!(frame_of(&layout, ControlType::ZL), Rect::square(80.0, 608.0, 50.0));
        assert_eq!(frame_of(&layout, ControlType::R), Rect::square(333.0, 608.0, 50.0));
        assert_eq!(frame_of(&layout, ControlType::ZR), Rect::square(263.0, 608.0, 50.0));

        assert_eq!(frame_of(&layout, ControlType::Left), Rect::square(10.0, 668.0, 150.0));
        assert_eq!(frame_of(&layout, ControlType::Right), Rect::square(233.0, 668.0, 150.0));

        assert_eq!(layout.screens, vec![Rect::new(0.0, 59.0, 393.0, 793.0)]);
        assert!(layout.control(ControlType::Settings).is_none());
    }

    #[test]
    fn test_phone_mini_system_buttons_and_settings() {
        let layout = generate(
            DeviceFamily::PhoneMini,
            375.0,
            667.0,
            &Insets::new(20.0, 0.0, 0.0, 0.0),
            &Insets::top_only(20.0),
        );

        assert_eq!(frame_of(&layout, ControlType::Home), Rect::square(175.0, 642.0, 25.0));
        assert_eq!(frame_of(&layout, ControlType::Minus), Rect::square(132.5, 642.0, 25.0));
        assert_eq!(frame_of(&layout, ControlType::Plus), Rect::square(217.5, 642.0, 25.0));
        assert_eq!(frame_of(&layout, ControlType::L).y, 667.0 - 190.0);

        let last = layout.buttons.last().unwrap();
        assert_eq!(last.kind, ControlType::Settings);
        assert_eq!(last.frame(), Rect::ZERO);
    }

    #[test]
    fn test_button_order() {
        let layout = generate(DeviceFamily::Phone, 390.0, 844.0, &Insets::ZERO, &Insets::ZERO);
        let kinds: Vec<ControlType> = layout.buttons.iter().map(|b| b.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ControlType::A,
                ControlType::B,
                ControlType::X,
                ControlType::Y,
                ControlType::DpadUp,
                ControlType::DpadDown,
                ControlType::DpadLeft,
                ControlType::DpadRight,
                ControlType::Home,
                ControlType::Minus,
                ControlType::Plus,
                ControlType::L,
                ControlType::ZL,
                ControlType::R,
                ControlType::ZR,
            ]
        );
        let sticks: Vec<ControlType> = layout.thumbsticks.iter().map(|t| t.kind).collect();
        assert_eq!(sticks, vec![ControlType::Left, ControlType::Right]);
        assert_eq!(layout.shared_alpha, SHARED_ALPHA);
    }

    #[test]
    fn test_side_insets_shift_controls_not_viewport() {
        let control_insets = Insets::new(0.0, 59.0, 21.0, 59.0);
        let layout = generate(
            DeviceFamily::Phone,
            852.0,
            393.0,
            &control_insets,
            &Insets::top_only(0.0),
        );

        assert_eq!(frame_of(&layout, ControlType::DpadLeft).x, 69.0);
        assert_eq!(frame_of(&layout, ControlType::A).x, 852.0 - (50.0 + 10.0 + 59.0));
        assert_eq!(layout.screens[0], Rect::new(0.0, 0.0, 852.0, 393.0));
    }

    #[test]
    fn test_minimum_screen_fits() {
        for family in DeviceFamily::ALL {
            let layout = generate(
                family,
                MIN_SCREEN_WIDTH,
                MIN_SCREEN_HEIGHT,
                &Insets::ZERO,
                &Insets::ZERO,
            );
            assert!(
                layout.out_of_bounds(MIN_SCREEN_WIDTH, MIN_SCREEN_HEIGHT).is_empty(),
                "{family} overflows the minimum screen"
            );
        }
    }
}
