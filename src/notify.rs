/// Delivery seam for the launcher's fatal diagnostics. Implementations show
/// the message and return; they never recover or retry.
pub trait ErrorNotifier {
    fn notify(&self, title: &str, body: &str);
}

/// Native modal error dialog.
pub struct DialogNotifier;

impl ErrorNotifier for DialogNotifier {
    fn notify(&self, title: &str, body: &str) {
        let _ = rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Error)
            .set_title(title)
            .set_description(body)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }
}

/// Same diagnostics on stderr, for headless runs.
pub struct StderrNotifier;

impl ErrorNotifier for StderrNotifier {
    fn notify(&self, title: &str, body: &str) {
        eprintln!("ERROR: {title}: {body}");
    }
}
