pub fn set_panic_hook() {
    // Better error messages on panic, when the `console_error_panic_hook`
    // feature is enabled (it is by default)
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
