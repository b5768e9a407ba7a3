/// Intercept messages using the `log` crate and print them to STDERR. The filter defaults to
/// `info`, but `RUST_LOG` overrides it.
pub fn setup() {
    use env_logger::{Builder, Env};
    Builder::from_env(Env::default().default_filter_or("info")).init();
}

/// Like `setup`, but doesn't fail if a logger was already installed. Tests call this from many
/// threads.
pub fn setup_for_tests() {
    use env_logger::{Builder, Env};
    let _ = Builder::from_env(Env::default().default_filter_or("debug"))
        .is_test(true)
        .try_init();
}
