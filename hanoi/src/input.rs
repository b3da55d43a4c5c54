use crate::{DiskCount, Error};

/// Parses the disk count from the first whitespace-separated token of `input`.
pub fn parse_disk_count(input: &str) -> Result<DiskCount, Error> {
    let token = input.split_whitespace().next().ok_or(Error::MissingInput)?;
    match token.strip_prefix('-') {
        Some(magnitude) if is_integer(magnitude) => {
            if magnitude.chars().all(|c| c == '0') {
                Ok(0)
            } else {
                Err(Error::NegativeDiskCount(token.to_string()))
            }
        }
        _ => token
            .parse::<DiskCount>()
            .map_err(|_| Error::InvalidDiskCount(token.to_string())),
    }
}

fn is_integer(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}
