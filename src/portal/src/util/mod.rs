pub mod clap;
pub mod stderr_wrapper;

/// Current local time in the `YYYY-MM-DD HH:MM` form used by release records.
pub fn now_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M").to_string()
}
