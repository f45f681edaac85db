use tracing_subscriber::{
    field::MakeExt,
    filter::EnvFilter,
    fmt::{format, FormatFields},
};

use crate::config;

pub fn set_up(verbosity: u8) {
    let level = max_level(verbosity);
    let filter = EnvFilter::new(format!(
        "warn,{}={level},sarvodaya_lib={level}",
        config::BIN_NAME,
        level = level
    ));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(true)
        .fmt_fields(fields())
        .init();
}

fn fields() -> impl for<'writer> FormatFields<'writer> + 'static {
    format::debug_fn(|writer, field, value| {
        if field.name() == "message" {
            write!(writer, "{:?}", value)
        } else {
            write!(writer, "{}={:?}", field, value)
        }
    })
    .delimited(" ")
}

fn max_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
