use super::*;

#[derive(Debug, Parser)]
#[command(version, about = "Browse the top Hacker News stories a page at a time")]
pub(crate) struct Arguments {
  /// Base URL of the Hacker News API
  #[arg(long, env = "HN_TOP_API_URL", default_value = Client::DEFAULT_API_BASE_URL)]
  pub(crate) api_url: String,
  /// Maximum number of story fetches in flight at once
  #[arg(long, env = "HN_TOP_CONCURRENCY", default_value_t = DEFAULT_CONCURRENCY)]
  pub(crate) concurrency: usize,
  /// Number of top stories to load
  #[arg(long, env = "HN_TOP_LIMIT", default_value_t = DEFAULT_LIMIT)]
  pub(crate) limit: usize,
  /// Append logs to this file
  #[arg(long, env = "HN_TOP_LOG_FILE")]
  pub(crate) log_file: Option<PathBuf>,
  /// Page to print with --print
  #[arg(long, default_value_t = 1)]
  pub(crate) page: usize,
  /// Stories per page
  #[arg(long, env = "HN_TOP_PAGE_SIZE", default_value_t = DEFAULT_PAGE_SIZE)]
  pub(crate) page_size: usize,
  /// Print one page to stdout instead of starting the interface
  #[arg(long)]
  pub(crate) print: bool,
}

impl Arguments {
  pub(crate) fn pipeline(&self) -> Pipeline<Client> {
    Pipeline::new(Client::new(&self.api_url), self.limit, self.concurrency)
  }
}
