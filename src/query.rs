use crate::catalog::VideoRecord;

/// Trimmed, lowercased form of a raw query. Empty means "match everything".
pub fn normalize(query: &str) -> String {
  query.trim().to_lowercase()
}

/// Check if a record matches an already-normalized needle.
/// Matches case-insensitively against both title and channel.
pub fn matches(record: &VideoRecord, needle: &str) -> bool {
  if needle.is_empty() {
    return true;
  }
  record.title.to_lowercase().contains(needle) || record.channel.to_lowercase().contains(needle)
}

/// Catalog positions of every record matching `query`, in catalog order.
pub fn search_indices(catalog: &[VideoRecord], query: &str) -> Vec<usize> {
  let needle = normalize(query);
  if needle.is_empty() {
    return (0..catalog.len()).collect();
  }
  catalog.iter().enumerate().filter(|(_, record)| matches(record, &needle)).map(|(i, _)| i).collect()
}

/// Stable filter of `catalog` by `query`. Never reorders, never fails.
pub fn search<'a>(catalog: &'a [VideoRecord], query: &str) -> Vec<&'a VideoRecord> {
  search_indices(catalog, query).into_iter().map(|i| &catalog[i]).collect()
}
