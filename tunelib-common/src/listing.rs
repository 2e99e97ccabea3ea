//! Sorted, filtered, paginated listing engine
//!
//! Every catalog listing goes through the same pipeline: resolve the sort
//! key to a comparator over display fields, stable-sort the full collection,
//! apply the equality filters (order-preserving), then slice out one page.
//! Filtering happens after sorting and never affects comparator selection.
//!
//! There is no secondary tie-break key: ties keep their input order, so the
//! output is reproducible across runs given identical input order.

use std::cmp::Ordering;

use serde::Serialize;

use crate::db::songs::SongWithNames;

/// Rows per listing page
pub const PAGE_SIZE: i64 = 8;

/// One page of a listing, with the total needed to render pager controls
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: i64,
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
}

impl<T> Page<T> {
    /// Project the page items into another shape, keeping the counts
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            page: self.page,
            page_size: self.page_size,
            total_pages: self.total_pages,
        }
    }
}

/// Slice one 1-based page out of an already sorted and filtered collection
///
/// `page` is clamped to at least 1. A slice start past the end of the
/// collection yields an empty page (never an error), with `total_count`
/// still reporting the full filtered size.
pub fn paginate<T>(items: Vec<T>, page: i64, page_size: i64) -> Page<T> {
    let page = page.max(1);
    let total_count = items.len() as i64;
    let total_pages = (total_count + page_size - 1) / page_size;
    let start = (page - 1) * page_size;

    let items = if start >= total_count {
        Vec::new()
    } else {
        items
            .into_iter()
            .skip(start as usize)
            .take(page_size as usize)
            .collect()
    };

    Page {
        items,
        total_count,
        page,
        page_size,
        total_pages,
    }
}

/// Closed set of song sort keys
///
/// Parsed from the wire strings the admin panel sends. Anything
/// unrecognized falls back to `TitleAsc` (fail-soft, never an error).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SongSort {
    #[default]
    TitleAsc,
    TitleDesc,
    ArtistNameAsc,
    ArtistNameDesc,
    GenreTitleAsc,
    GenreTitleDesc,
    ReleaseAsc,
    ReleaseDesc,
}

impl SongSort {
    /// Parse a sort key from its wire string
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("SongTitleDesc") => SongSort::TitleDesc,
            Some("ArtistNameAsc") => SongSort::ArtistNameAsc,
            Some("ArtistNameDesc") => SongSort::ArtistNameDesc,
            Some("GenreTitleAsc") => SongSort::GenreTitleAsc,
            Some("GenreTitleDesc") => SongSort::GenreTitleDesc,
            Some("SongReleaseDateAsc") => SongSort::ReleaseAsc,
            Some("SongReleaseDateDesc") => SongSort::ReleaseDesc,
            // "SongTitleAsc", absent, and anything unrecognized
            _ => SongSort::TitleAsc,
        }
    }

    fn compare(&self, a: &SongWithNames, b: &SongWithNames) -> Ordering {
        match self {
            SongSort::TitleAsc => cmp_opt(&a.title, &b.title),
            SongSort::TitleDesc => cmp_opt(&b.title, &a.title),
            SongSort::ArtistNameAsc => cmp_opt(&a.artist_name, &b.artist_name),
            SongSort::ArtistNameDesc => cmp_opt(&b.artist_name, &a.artist_name),
            SongSort::GenreTitleAsc => cmp_opt(&a.genre_title, &b.genre_title),
            SongSort::GenreTitleDesc => cmp_opt(&b.genre_title, &a.genre_title),
            SongSort::ReleaseAsc => cmp_opt(&a.release, &b.release),
            SongSort::ReleaseDesc => cmp_opt(&b.release, &a.release),
        }
    }
}

// Display fields are free-form strings; comparison is plain lexicographic,
// with absent values ordering first.
fn cmp_opt(a: &Option<String>, b: &Option<String>) -> Ordering {
    a.as_deref().cmp(&b.as_deref())
}

/// Equality filters on song foreign keys; 0 means "all" for either field
#[derive(Debug, Clone, Copy, Default)]
pub struct SongFilter {
    pub artist_id: i64,
    pub genre_id: i64,
}

impl SongFilter {
    fn matches(&self, song: &SongWithNames) -> bool {
        (self.artist_id == 0 || song.artist_id == Some(self.artist_id))
            && (self.genre_id == 0 || song.genre_id == Some(self.genre_id))
    }
}

/// Run the full song listing pipeline: sort, filter, paginate
pub fn list_songs(
    mut rows: Vec<SongWithNames>,
    sort: SongSort,
    filter: &SongFilter,
    page: i64,
) -> Page<SongWithNames> {
    // Vec::sort_by is stable: ties preserve input order
    rows.sort_by(|a, b| sort.compare(a, b));
    rows.retain(|song| filter.matches(song));
    paginate(rows, page, PAGE_SIZE)
}

/// Sort direction for listings ordered by a single display field
/// (genres, roles, artists, users, audio files)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldSort {
    #[default]
    Asc,
    Desc,
}

impl FieldSort {
    /// Parse a direction from a wire string; unrecognized input is ascending
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(s) if s.ends_with("Desc") || s.ends_with("_desc") => FieldSort::Desc,
            _ => FieldSort::Asc,
        }
    }
}

/// Sort a collection by one display field and slice out a page
pub fn list_by_field<T>(
    mut items: Vec<T>,
    sort: FieldSort,
    key: impl for<'a> Fn(&'a T) -> Option<&'a str>,
    page: i64,
) -> Page<T> {
    items.sort_by(|a, b| {
        let ord = key(a).cmp(&key(b));
        match sort {
            FieldSort::Asc => ord,
            FieldSort::Desc => ord.reverse(),
        }
    });
    paginate(items, page, PAGE_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(id: i64, title: &str, artist_id: i64, artist: &str, genre_id: i64) -> SongWithNames {
        SongWithNames {
            id,
            title: Some(title.to_string()),
            release: Some(format!("19{:02}", 60 + id % 40)),
            youtube_link: None,
            genre_id: Some(genre_id),
            genre_title: Some(format!("genre-{}", genre_id)),
            artist_id: Some(artist_id),
            artist_name: Some(artist.to_string()),
            audio_id: None,
            audio_file_name: None,
        }
    }

    fn sample() -> Vec<SongWithNames> {
        vec![
            song(1, "Delta", 5, "Miles", 1),
            song(2, "Alpha", 2, "Ella", 2),
            song(3, "Charlie", 5, "Miles", 1),
            song(4, "Bravo", 3, "Nina", 2),
            song(5, "Echo", 5, "Miles", 3),
        ]
    }

    #[test]
    fn test_sort_is_deterministic() {
        let first = list_songs(sample(), SongSort::TitleAsc, &SongFilter::default(), 1);
        let second = list_songs(sample(), SongSort::TitleAsc, &SongFilter::default(), 1);
        let ids: Vec<i64> = first.items.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![2, 4, 3, 1, 5]);
        assert_eq!(
            ids,
            second.items.iter().map(|s| s.id).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_asc_and_desc_are_reverses() {
        let asc = list_songs(sample(), SongSort::ArtistNameAsc, &SongFilter::default(), 1);
        let desc = list_songs(sample(), SongSort::ArtistNameDesc, &SongFilter::default(), 1);

        let asc_names: Vec<_> = asc
            .items
            .iter()
            .map(|s| s.artist_name.clone().unwrap())
            .collect();
        let mut desc_names: Vec<_> = desc
            .items
            .iter()
            .map(|s| s.artist_name.clone().unwrap())
            .collect();
        desc_names.reverse();

        // Exact reverses modulo stable-sort tie placement, so compare keys
        assert_eq!(asc_names, desc_names);
    }

    #[test]
    fn test_unrecognized_sort_key_falls_back_to_title_asc() {
        assert_eq!(SongSort::parse(Some("Bogus")), SongSort::TitleAsc);
        assert_eq!(SongSort::parse(None), SongSort::TitleAsc);
        assert_eq!(SongSort::parse(Some("SongTitleAsc")), SongSort::TitleAsc);
        assert_eq!(
            SongSort::parse(Some("SongReleaseDateDesc")),
            SongSort::ReleaseDesc
        );
    }

    #[test]
    fn test_page_past_the_end_is_empty() {
        let result = list_songs(sample(), SongSort::TitleAsc, &SongFilter::default(), 99);
        assert!(result.items.is_empty());
        assert_eq!(result.total_count, 5);
        assert_eq!(result.page, 99);
    }

    #[test]
    fn test_page_is_clamped_to_one() {
        let result = list_songs(sample(), SongSort::TitleAsc, &SongFilter::default(), 0);
        assert_eq!(result.page, 1);
        assert_eq!(result.items.len(), 5);
    }

    #[test]
    fn test_filter_selects_subset_independent_of_order() {
        let filter = SongFilter {
            artist_id: 5,
            genre_id: 0,
        };

        // Filter applied after sorting...
        let sorted_then_filtered =
            list_songs(sample(), SongSort::TitleAsc, &filter, 1);

        // ...selects the same set as filtering up front
        let mut prefiltered = sample();
        prefiltered.retain(|s| s.artist_id == Some(5));
        let filtered_then_sorted =
            list_songs(prefiltered, SongSort::TitleAsc, &SongFilter::default(), 1);

        let a: Vec<i64> = sorted_then_filtered.items.iter().map(|s| s.id).collect();
        let b: Vec<i64> = filtered_then_sorted.items.iter().map(|s| s.id).collect();
        assert_eq!(a, b);
        assert_eq!(a, vec![3, 1, 5]);
    }

    #[test]
    fn test_filters_combine_with_logical_and() {
        let filter = SongFilter {
            artist_id: 5,
            genre_id: 1,
        };
        let result = list_songs(sample(), SongSort::TitleAsc, &filter, 1);
        let ids: Vec<i64> = result.items.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![3, 1]);
        assert_eq!(result.total_count, 2);
    }

    #[test]
    fn test_filtered_listing_fits_on_one_page() {
        // 10 songs, 3 by artist 7, page size 8: everything fits on page 1
        let mut rows = Vec::new();
        for id in 1..=10 {
            let artist_id = if id % 3 == 0 { 7 } else { 1 };
            rows.push(song(id, &format!("Song {:02}", id), artist_id, "X", 1));
        }

        let filter = SongFilter {
            artist_id: 7,
            genre_id: 0,
        };
        let result = list_songs(rows, SongSort::TitleAsc, &filter, 1);
        assert_eq!(result.items.len(), 3);
        assert_eq!(result.total_count, 3);
        assert_eq!(result.total_pages, 1);
    }

    #[test]
    fn test_pagination_slices() {
        let rows: Vec<SongWithNames> = (1..=20)
            .map(|id| song(id, &format!("Song {:02}", id), 1, "X", 1))
            .collect();

        let page1 = list_songs(rows.clone(), SongSort::TitleAsc, &SongFilter::default(), 1);
        assert_eq!(page1.items.len(), 8);
        assert_eq!(page1.items[0].id, 1);
        assert_eq!(page1.total_pages, 3);

        let page3 = list_songs(rows, SongSort::TitleAsc, &SongFilter::default(), 3);
        assert_eq!(page3.items.len(), 4);
        assert_eq!(page3.items[0].id, 17);
    }

    #[test]
    fn test_list_by_field() {
        let items: Vec<String> = ["Rock", "Blues", "Pop"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let page = list_by_field(
            items,
            FieldSort::parse(Some("title_desc")),
            |s| Some(s.as_str()),
            1,
        );
        let names: Vec<&str> = page.items.iter().map(String::as_str).collect();
        assert_eq!(names, vec!["Rock", "Pop", "Blues"]);

        assert_eq!(FieldSort::parse(Some("NameDesc")), FieldSort::Desc);
        assert_eq!(FieldSort::parse(Some("garbage")), FieldSort::Asc);
        assert_eq!(FieldSort::parse(None), FieldSort::Asc);
    }
}
