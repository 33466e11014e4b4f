//! Flash message lifecycle
//!
//! A flash is fully visible for 3000ms, fades for 500ms, then is removed.

/// Time a flash stays fully visible
pub const FLASH_VISIBLE_MS: u128 = 3000;

/// Fade-out duration after the visible period
pub const FLASH_FADE_MS: u128 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashPhase {
    Visible,
    Fading,
    Expired,
}

/// Phase of a flash message given the milliseconds since it was shown
///
/// # Examples
/// ```
/// use shelftui::logic::flash::{flash_phase, FlashPhase};
///
/// assert_eq!(flash_phase(0), FlashPhase::Visible);
/// assert_eq!(flash_phase(3200), FlashPhase::Fading);
/// assert_eq!(flash_phase(3500), FlashPhase::Expired);
/// ```
pub fn flash_phase(elapsed_ms: u128) -> FlashPhase {
    if elapsed_ms < FLASH_VISIBLE_MS {
        FlashPhase::Visible
    } else if elapsed_ms < FLASH_VISIBLE_MS + FLASH_FADE_MS {
        FlashPhase::Fading
    } else {
        FlashPhase::Expired
    }
}

/// Check if a flash should be removed
pub fn should_dismiss_flash(elapsed_ms: u128) -> bool {
    flash_phase(elapsed_ms) == FlashPhase::Expired
}
