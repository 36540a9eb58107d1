/// Browser confirmation dialog. Deletions must not be issued unless this
/// returns `true`; with no window available it answers `false`.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|window| window.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}
