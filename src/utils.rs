use super::*;

pub(crate) fn format_comments(count: usize) -> String {
  match count {
    1 => "1 comment".to_string(),
    _ => format!("{count} comments"),
  }
}

/// Renders epoch seconds as `DD/M/YYYY` in `zone`: the day is zero-padded,
/// the month and year are not.
pub(crate) fn format_date<Tz: TimeZone>(time: i64, zone: &Tz) -> Option<String> {
  let date = zone.timestamp_opt(time, 0).earliest()?;

  Some(format!("{:02}/{}/{}", date.day(), date.month(), date.year()))
}

pub(crate) fn format_points(score: u64) -> String {
  match score {
    1 => "1 point".to_string(),
    _ => format!("{score} points"),
  }
}

pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
  if text.chars().count() <= max_chars {
    return text.to_string();
  }

  let mut result = String::new();

  for (idx, ch) in text.chars().enumerate() {
    if idx >= max_chars {
      result.push_str("...");
      break;
    }

    result.push(ch);
  }

  result.trim_end().to_string()
}
