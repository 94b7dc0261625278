use color_eyre::eyre::{eyre, Result};
use directories::ProjectDirs;
use once_cell::sync::OnceCell;
use std::path::PathBuf;
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    self, prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt, Layer,
};

pub static PROJECT_NAME: OnceCell<String> = OnceCell::new();
pub static LOG_ENV: OnceCell<String> = OnceCell::new();
pub static LOG_FILE: OnceCell<String> = OnceCell::new();

pub fn init() -> Result<()> {
    init_globals();
    init_panic_handler()?;
    init_logging()?;
    Ok(())
}

fn init_globals() {
    let project_name = PROJECT_NAME.get_or_init(|| env!("CARGO_CRATE_NAME").to_uppercase());
    LOG_ENV.get_or_init(|| format!("{}_LOGLEVEL", project_name));
    LOG_FILE.get_or_init(|| format!("{}.log", env!("CARGO_PKG_NAME")));
}

fn init_panic_handler() -> Result<()> {
    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default()
        .panic_section(format!(
            "This is a bug. Consider reporting it at {}",
            env!("CARGO_PKG_REPOSITORY")
        ))
        .capture_span_trace_by_default(false)
        .display_location_section(false)
        .display_env_section(false)
        .into_hooks();
    eyre_hook.install()?;
    std::panic::set_hook(Box::new(move |panic_info| {
        #[cfg(not(debug_assertions))]
        {
            use human_panic::{handle_dump, metadata, print_msg};
            let meta = metadata!();
            let file_path = handle_dump(&meta, panic_info);
            print_msg(file_path, &meta)
                .expect("human-panic: printing error message to console failed");
            eprintln!("{}", panic_hook.panic_report(panic_info));
        }
        let msg = format!("{}", panic_hook.panic_report(panic_info));
        tracing::error!("Error: {}", strip_ansi_escapes::strip_str(msg));

        #[cfg(debug_assertions)]
        {
            // Better Panic stacktrace that is only enabled when debugging.
            better_panic::Settings::auto()
                .most_recent_first(false)
                .lineno_suffix(true)
                .verbosity(better_panic::Verbosity::Full)
                .create_panic_handler()(panic_info);
        }

        std::process::exit(1);
    }));
    Ok(())
}

fn init_logging() -> Result<()> {
    let data_dir = project_directory()
        .ok_or_else(|| eyre!("Could not determine the user's home directory"))?
        .data_local_dir()
        .to_path_buf();
    std::fs::create_dir_all(&data_dir)?;
    let log_file = LOG_FILE
        .get()
        .ok_or_else(|| eyre!("Log file name is not initialized"))?;
    let log_path = data_dir.join(log_file);
    let log_file = std::fs::File::create(log_path)?;

    let log_env = LOG_ENV
        .get()
        .ok_or_else(|| eyre!("Log level variable is not initialized"))?;
    let filter = std::env::var("RUST_LOG")
        .or_else(|_| std::env::var(log_env))
        .unwrap_or_else(|_| default_filter());
    let file_subscriber = tracing_subscriber::fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(tracing_subscriber::filter::EnvFilter::new(filter));
    tracing_subscriber::registry()
        .with(file_subscriber)
        .with(ErrorLayer::default())
        .init();
    Ok(())
}

fn default_filter() -> String {
    format!("{}=info,melody_dataset=info", env!("CARGO_CRATE_NAME"))
}

pub fn project_directory() -> Option<ProjectDirs> {
    ProjectDirs::from("cool", "jacoblin", env!("CARGO_PKG_NAME")).or_else(|| {
        std::env::var("HOME")
            .ok()
            .map(PathBuf::from)
            .and_then(|h| ProjectDirs::from_path(h.join(format!(".{}", env!("CARGO_PKG_NAME")))))
    })
}
