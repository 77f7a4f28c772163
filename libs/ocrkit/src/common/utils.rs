use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;

/// Initialise logging under the running executable's name, falling back to
/// this crate's name when the executable path cannot be resolved.
pub fn init_logger_exe() {
    let name = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.file_stem().and_then(|stem| stem.to_str()).map(str::to_owned))
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());
    init_logger(name);
}

pub fn init_logger(name: impl Into<String>) {
    let crate_name = name.into().replace('-', "_");
    let filters = std::env::var("RUST_LOG").ok();

    let mut builder = logger_builder(&crate_name, filters.as_deref());
    if let Ok(style) = std::env::var("RUST_LOG_STYLE") {
        builder.parse_write_style(&style);
    }

    // A second initialisation (tests, embedding binaries) is not an error.
    let _ = builder.try_init();
}

/// `crate_name` always logs at `Trace`; every other target follows `filters`.
fn logger_builder(crate_name: &str, filters: Option<&str>) -> Builder {
    let mut builder = Builder::new();
    if let Some(filters) = filters {
        builder.parse_filters(filters);
    }

    let name = crate_name.to_string();
    builder
        .filter(Some(crate_name), LevelFilter::Trace)
        .format(move |f, rec| {
            let now = humantime::format_rfc3339_millis(std::time::SystemTime::now());
            let module = rec.module_path().unwrap_or("<unknown>");
            let line = rec.line().unwrap_or(u32::MIN);
            let level = rec.level();

            writeln!(
                f,
                "[{} {} {} {}:{}] {}",
                level,
                name,
                now,
                module,
                line,
                rec.args()
            )
        });
    builder
}
