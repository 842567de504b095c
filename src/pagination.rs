use serde::Serialize;

/// Page size shared by the owner list and the HTML vet list.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 5;

/// Number of pages needed to show `total_items` items, never less than one.
pub fn total_pages(total_items: usize, per_page: usize) -> usize {
    total_items.div_ceil(per_page).max(1)
}

fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// One page of a listed collection plus the totals the templates render.
///
/// A requested page beyond `total_pages` is kept as-is: the item slice is
/// empty but `page`, `total_pages` and `total_items` stay truthful.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total_pages: usize, total_items: usize) -> Self {
        let current_page = if current_page == 0 { 1 } else { current_page };

        let pages = get_pages(total_pages, current_page, 2, 2, 4, 2);

        Self {
            items,
            pages,
            page: current_page,
            total_pages,
            total_items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_has_a_floor_of_one() {
        assert_eq!(total_pages(0, 5), 1);
        assert_eq!(total_pages(1, 5), 1);
        assert_eq!(total_pages(5, 5), 1);
        assert_eq!(total_pages(6, 5), 2);
        assert_eq!(total_pages(11, 5), 3);
    }

    #[test]
    fn page_zero_is_clamped_to_one() {
        let paginated = Paginated::new(vec![1, 2, 3], 0, 1, 3);
        assert_eq!(paginated.page, 1);
    }

    #[test]
    fn out_of_range_page_keeps_requested_number() {
        let paginated: Paginated<i32> = Paginated::new(vec![], 999, 2, 7);
        assert_eq!(paginated.page, 999);
        assert_eq!(paginated.total_pages, 2);
        assert_eq!(paginated.total_items, 7);
        assert!(paginated.items.is_empty());
    }

    #[test]
    fn window_collapses_for_short_lists() {
        let paginated = Paginated::new(vec![1, 2], 1, 2, 7);
        assert_eq!(paginated.pages, vec![Some(1), Some(2)]);
    }

    #[test]
    fn window_elides_middle_pages() {
        let paginated: Paginated<i32> = Paginated::new(vec![], 10, 20, 100);
        assert!(paginated.pages.contains(&None));
        assert!(paginated.pages.contains(&Some(1)));
        assert!(paginated.pages.contains(&Some(10)));
        assert!(paginated.pages.contains(&Some(20)));
    }
}
