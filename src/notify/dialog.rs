//! Modal dialog notifier.

use super::Notifier;

/// Shows alerts in a modal warning message box.
///
/// Off Windows there is no message box; the alert is logged at warn level.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialogNotifier;

impl Notifier for DialogNotifier {
    fn alert(&self, title: &str, message: &str) {
        tracing::warn!("{}: {}", title, message);
        show_message_box(title, message);
    }
}

#[cfg(windows)]
fn show_message_box(title: &str, message: &str) {
    use windows::core::{HSTRING, PCWSTR};
    use windows::Win32::Foundation::HWND;
    use windows::Win32::UI::WindowsAndMessaging::{MessageBoxW, MB_ICONWARNING, MB_OK};

    let text = HSTRING::from(message);
    let caption = HSTRING::from(title);

    // SAFETY: Calling Win32 API as documented. Both strings are
    // null-terminated and outlive the call.
    unsafe {
        MessageBoxW(
            HWND::default(),
            PCWSTR(text.as_ptr()),
            PCWSTR(caption.as_ptr()),
            MB_ICONWARNING | MB_OK,
        );
    }
}

#[cfg(not(windows))]
fn show_message_box(_title: &str, _message: &str) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(windows))]
    #[test]
    fn alert_does_not_block_off_windows() {
        DialogNotifier.alert("Sorry", "nothing to show");
    }
}
