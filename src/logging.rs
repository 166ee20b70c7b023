/// Where `tracing` output ends up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogSink {
	/// The Android system log, under `LOG_TAG`.
	Logcat,
	Stdout,
}

/// Tag shown in `adb logcat`.
pub const LOG_TAG: &str = "drawingapp";

#[derive(thiserror::Error, Debug)]
#[error("no global tracing subscriber set")]
struct NoTracingSubscriber;

fn max_level() -> tracing::Level {
	if cfg!(debug_assertions) {
		tracing::Level::TRACE
	} else {
		tracing::Level::INFO
	}
}

// An app process's stdout goes nowhere on Android, so the system log comes first there.
#[cfg(target_os = "android")]
fn configure_logcat() -> anyhow::Result<LogSink> {
	use tracing_subscriber::layer::SubscriberExt;

	let subscriber = tracing_subscriber::registry()
		.with(tracing_subscriber::filter::LevelFilter::from_level(max_level()))
		.with(tracing_android::layer(LOG_TAG)?);
	tracing::subscriber::set_global_default(subscriber)?;
	Ok(LogSink::Logcat)
}

fn configure_stdout() -> anyhow::Result<LogSink> {
	tracing::subscriber::set_global_default(
		tracing_subscriber::FmtSubscriber::builder()
			.with_max_level(max_level())
			.finish(),
	)?;
	Ok(LogSink::Stdout)
}

fn configure_tracing() -> anyhow::Result<LogSink> {
	let result: anyhow::Result<LogSink> = Err(NoTracingSubscriber.into());

	#[cfg(target_os = "android")]
	let result = result.or_else(|_| configure_logcat());

	result.or_else(|_| configure_stdout())
}

/// Installs the global `tracing` subscriber. Fails if one is already set.
///
/// With the "log" feature, records from crates that use `log` (like `jni`) are forwarded to
/// `tracing`.
pub fn configure_logging() -> anyhow::Result<LogSink> {
	let sink = configure_tracing()?;

	#[cfg(feature = "log")]
	tracing_log::LogTracer::init()?;

	Ok(sink)
}
