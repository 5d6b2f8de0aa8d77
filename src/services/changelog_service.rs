use serde::Serialize;

use crate::models::ChangelogEntry;
use crate::utils::page_path;

/// One page of the paginated changelog. `index` is 1-based.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChangelogPage<'a> {
    pub index: usize,
    pub page_count: usize,
    pub first: bool,
    pub last: bool,
    pub path: String,
    pub previous_href: Option<String>,
    pub next_href: Option<String>,
    pub entries: &'a [ChangelogEntry],
}

/// `/changelog/` for the first page, `/changelog/{n}/` after that.
pub fn changelog_path(index: usize) -> String {
    if index <= 1 {
        page_path(&["changelog"])
    } else {
        page_path(&["changelog", &index.to_string()])
    }
}

/// Split entries into pages of `per_page`, keeping CMS order.
///
/// Always yields at least one page so `/changelog/` exists even when empty.
pub fn paginate(entries: &[ChangelogEntry], per_page: usize) -> Vec<ChangelogPage<'_>> {
    let per_page = per_page.max(1);
    let chunks: Vec<&[ChangelogEntry]> = if entries.is_empty() {
        vec![entries]
    } else {
        entries.chunks(per_page).collect()
    };
    let page_count = chunks.len();

    chunks
        .into_iter()
        .enumerate()
        .map(|(i, chunk)| {
            let index = i + 1;
            ChangelogPage {
                index,
                page_count,
                first: index == 1,
                last: index == page_count,
                path: changelog_path(index),
                previous_href: (index > 1).then(|| changelog_path(index - 1)),
                next_href: (index < page_count).then(|| changelog_path(index + 1)),
                entries: chunk,
            }
        })
        .collect()
}
