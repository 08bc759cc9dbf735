use {super::*, std::fs::OpenOptions, std::sync::Mutex};

const DEFAULT_FILTER: &str = "hn_top=info";

/// Installs the global subscriber. Logs go to `log_file` when given,
/// otherwise to stderr when `stderr` is set, otherwise nowhere.
pub(crate) fn init(log_file: Option<&Path>, stderr: bool) -> Result {
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

  let subscriber = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_target(false);

  let installed = match (log_file, stderr) {
    (Some(path), _) => {
      let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("could not open log file `{}`", path.display()))?;

      subscriber
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
    }
    (None, true) => subscriber.with_writer(io::stderr).try_init(),
    (None, false) => return Ok(()),
  };

  installed.map_err(|error| anyhow!("could not install logger: {error}"))
}
