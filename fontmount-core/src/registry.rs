//! The session font-manager seam.

/// Backend that registers fonts with the running desktop session.
///
/// `spec` is the raw command-line argument, `metric|outline` pair syntax
/// included; the platform font manager accepts pairs in that form
/// directly.
pub trait FontRegistry {
    /// Make the font available to the session. Returns false on refusal.
    fn register(&self, spec: &str) -> bool;
    /// Withdraw the font from the session. Returns false on refusal.
    fn unregister(&self, spec: &str) -> bool;
    /// Tell running applications that the font table changed.
    fn broadcast_change(&self);
}

/// The registry backing the current platform.
#[cfg(target_family = "windows")]
pub fn platform() -> GdiRegistry {
    GdiRegistry
}

/// The registry backing the current platform.
#[cfg(not(target_family = "windows"))]
pub fn platform() -> UnsupportedRegistry {
    UnsupportedRegistry
}

#[cfg(target_family = "windows")]
pub use gdi::GdiRegistry;

#[cfg(target_family = "windows")]
mod gdi {
    use std::ffi::OsStr;
    use std::iter::once;
    use std::os::windows::ffi::OsStrExt;
    use std::ptr;

    use winapi::um::wingdi::{AddFontResourceW, RemoveFontResourceW};
    use winapi::um::winuser::{
        SendMessageTimeoutW, HWND_BROADCAST, SMTO_ABORTIFHUNG, WM_FONTCHANGE,
    };

    use super::FontRegistry;

    /// GDI-backed session registration.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct GdiRegistry;

    fn wide(spec: &str) -> Vec<u16> {
        OsStr::new(spec).encode_wide().chain(once(0)).collect()
    }

    impl FontRegistry for GdiRegistry {
        fn register(&self, spec: &str) -> bool {
            let spec = wide(spec);
            unsafe { AddFontResourceW(spec.as_ptr()) != 0 }
        }

        fn unregister(&self, spec: &str) -> bool {
            let spec = wide(spec);
            unsafe { RemoveFontResourceW(spec.as_ptr()) != 0 }
        }

        fn broadcast_change(&self) {
            // A plain SendMessage to HWND_BROADCAST blocks on any hung
            // top-level window; the timeout bounds that wait.
            unsafe {
                SendMessageTimeoutW(
                    HWND_BROADCAST,
                    WM_FONTCHANGE,
                    0,
                    0,
                    SMTO_ABORTIFHUNG,
                    1_000,
                    ptr::null_mut(),
                );
            }
        }
    }
}

/// Fallback for platforms without a session font-registration primitive.
/// Validation still runs; every registration attempt is refused.
#[cfg(not(target_family = "windows"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedRegistry;

#[cfg(not(target_family = "windows"))]
impl FontRegistry for UnsupportedRegistry {
    fn register(&self, spec: &str) -> bool {
        log::warn!("session font registration is not available on this platform: {spec}");
        false
    }

    fn unregister(&self, spec: &str) -> bool {
        log::warn!("session font registration is not available on this platform: {spec}");
        false
    }

    fn broadcast_change(&self) {}
}
