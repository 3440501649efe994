use chrono::Local;
use std::path::PathBuf;
use std::sync::Once;

static INIT: Once = Once::new();

/// Sets up log/fern once per process. Level comes from `IBAN_LOG_LEVEL` (or
/// `RUST_LOG`), default info. Output goes to stdout; set `IBAN_LOG_DIR` to
/// also write a dated log file there (`off`, `none` or empty disables).
pub fn init_logging(app_name: &str) -> Result<(), String> {
    let mut init_result: Result<(), String> = Ok(());
    INIT.call_once(|| {
        if let Err(err) = init_logging_inner(app_name) {
            init_result = Err(err);
        }
    });
    init_result
}

fn init_logging_inner(app_name: &str) -> Result<(), String> {
    let level = std::env::var("IBAN_LOG_LEVEL")
        .or_else(|_| std::env::var("RUST_LOG"))
        .ok()
        .and_then(|value| value.parse::<log::LevelFilter>().ok())
        .unwrap_or(log::LevelFilter::Info);

    let mut dispatch = fern::Dispatch::new()
        .level(level)
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} | {:<5} | {} | {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .chain(std::io::stdout());

    if let Some(dir) = resolve_log_dir(std::env::var("IBAN_LOG_DIR").ok().as_deref()) {
        std::fs::create_dir_all(&dir).map_err(|err| err.to_string())?;
        let file_path = dir.join(format!("{app_name}-{}.log", Local::now().format("%Y_%m_%d")));
        dispatch = dispatch.chain(fern::log_file(file_path).map_err(|err| err.to_string())?);
    }

    dispatch.apply().map_err(|err| err.to_string())
}

/// File logging is opt-in: unset, `off`, `none` and empty all disable it.
fn resolve_log_dir(value: Option<&str>) -> Option<PathBuf> {
    match value {
        None | Some("off") | Some("none") | Some("") => None,
        Some(path) => Some(PathBuf::from(path)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_dir_sentinels_disable_file_logging() {
        assert_eq!(resolve_log_dir(None), None);
        assert_eq!(resolve_log_dir(Some("off")), None);
        assert_eq!(resolve_log_dir(Some("none")), None);
        assert_eq!(resolve_log_dir(Some("")), None);
    }

    #[test]
    fn log_dir_path_is_kept() {
        assert_eq!(
            resolve_log_dir(Some("run/logs")),
            Some(PathBuf::from("run/logs"))
        );
    }
}
