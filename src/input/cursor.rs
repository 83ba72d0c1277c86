//! Device input events normalized into a single cursor sample shape.

use kurbo::Point;

use crate::foundation::error::{YuvLensError, YuvLensResult};

/// A pointer position projected into three coincident coordinate spaces.
///
/// Ephemeral: recomputed per input event, never persisted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorSample {
    /// Screen-global coordinates.
    pub screen: Point,
    /// Viewport-relative coordinates; anchors the magnifier overlay.
    pub viewport: Point,
    /// Surface-local pixel offset; drives the magnifier crop origin.
    pub surface: Point,
}

/// One active touch point, in the three spaces a touch event reports.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    /// Screen-global position.
    pub screen: Point,
    /// Viewport-relative position.
    pub client: Point,
    /// Page-relative position; surface-local is `page - surface_origin`.
    pub page: Point,
}

/// Device-level input events the viewer shell forwards to the core.
///
/// Both variants normalize to the same [`CursorSample`]; nothing downstream branches on
/// the device kind.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// Mouse/pen event carrying a ready-made surface-local offset.
    Pointer {
        /// Screen-global position.
        screen: Point,
        /// Viewport-relative position.
        client: Point,
        /// Surface-local position.
        offset: Point,
    },
    /// Touch event; the first active touch point wins.
    Touch {
        /// Active touch points, possibly empty at touch-end.
        touches: Vec<TouchPoint>,
    },
}

impl CursorSample {
    /// Normalize an input event against the surface's page-space origin.
    ///
    /// A touch event with no active touch points cannot yield a sample and fails that
    /// single event with [`YuvLensError::UnsupportedInput`].
    pub fn from_event(event: &InputEvent, surface_origin: Point) -> YuvLensResult<Self> {
        match event {
            InputEvent::Pointer {
                screen,
                client,
                offset,
            } => Ok(Self {
                screen: *screen,
                viewport: *client,
                surface: *offset,
            }),
            InputEvent::Touch { touches } => {
                let touch = touches.first().ok_or_else(|| {
                    YuvLensError::unsupported_input("touch event carries no touch points")
                })?;
                Ok(Self {
                    screen: touch.screen,
                    viewport: touch.client,
                    surface: Point::new(
                        touch.page.x - surface_origin.x,
                        touch.page.y - surface_origin.y,
                    ),
                })
            }
        }
    }
}
