use serde::Serialize;

use super::PaginationError;

/// Neighbouring pages shown on each side of the current page.
pub const DEFAULT_RADIUS: u64 = 2;

/// Page numbers a compact pager renders around the current page.
///
/// `left` and `right` are contiguous runs that immediately precede and
/// follow the current page. Page 1 and the last page only appear inside them
/// when the run reaches that far; otherwise `show_first` / `show_last` ask
/// for a dedicated link, and the ellipsis flags mark a gap between that link
/// and the run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct WindowResult {
    pub left: Vec<u64>,
    pub right: Vec<u64>,
    pub show_first: bool,
    pub show_last: bool,
    pub left_ellipsis: bool,
    pub right_ellipsis: bool,
}

impl WindowResult {
    /// Every page number the pager mentions, in display order.
    pub fn pages(&self, current_page: u64, total_pages: u64) -> Vec<u64> {
        let mut out = Vec::with_capacity(self.left.len() + self.right.len() + 3);
        if self.show_first {
            out.push(1);
        }
        out.extend_from_slice(&self.left);
        out.push(current_page);
        out.extend_from_slice(&self.right);
        if self.show_last {
            out.push(total_pages);
        }
        out
    }
}

pub fn compute_window(
    current_page: u64,
    total_pages: u64,
    radius: u64,
) -> Result<WindowResult, PaginationError> {
    if total_pages < 1 {
        return Err(PaginationError::InvalidArgument(format!(
            "total pages must be at least 1, got {}",
            total_pages
        )));
    }
    if current_page < 1 || current_page > total_pages {
        return Err(PaginationError::InvalidArgument(format!(
            "page {} is outside 1..={}",
            current_page, total_pages
        )));
    }
    if total_pages == 1 {
        return Ok(WindowResult::default());
    }

    let left: Vec<u64> = (current_page.saturating_sub(radius).max(1)..current_page).collect();
    // current_page < total_pages keeps current_page + 1 in range
    let right: Vec<u64> = if current_page < total_pages {
        (current_page + 1..=current_page.saturating_add(radius).min(total_pages)).collect()
    } else {
        Vec::new()
    };

    let (left_ellipsis, show_first) = match left.first() {
        Some(&first) => (first > 2, first > 1),
        None => (false, false),
    };
    let (right_ellipsis, show_last) = match right.last() {
        Some(&last) => (last < total_pages - 1, last < total_pages),
        None => (false, false),
    };

    Ok(WindowResult {
        left,
        right,
        show_first,
        show_last,
        left_ellipsis,
        right_ellipsis,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(current: u64, total: u64) -> WindowResult {
        compute_window(current, total, DEFAULT_RADIUS).unwrap()
    }

    #[test]
    fn test_single_page() {
        assert_eq!(window(1, 1), WindowResult::default());
    }

    #[test]
    fn test_first_of_four() {
        let w = window(1, 4);
        assert!(w.left.is_empty());
        assert_eq!(w.right, vec![2, 3]);
        assert!(!w.show_first);
        assert!(!w.left_ellipsis);
        assert!(w.show_last);
        assert!(!w.right_ellipsis);
    }

    #[test]
    fn test_u64_edges() {
        let max = u64::MAX;

        let w = compute_window(max, max, 2).unwrap();
        assert_eq!(w.left, vec![max - 2, max - 1]);
        assert!(w.right.is_empty());
        assert!(w.show_first && w.left_ellipsis);
        assert!(!w.show_last && !w.right_ellipsis);

        let w = compute_window(max - 1, max, 2).unwrap();
        assert_eq!(w.right, vec![max]);
        assert!(!w.show_last && !w.right_ellipsis);

        let w = compute_window(1, max, 2).unwrap();
        assert_eq!(w.right, vec![2, 3]);
        assert!(w.show_last && w.right_ellipsis);

        let w = compute_window(2, 3, max).unwrap();
        assert_eq!((w.left, w.right), (vec![1], vec![3]));
        assert!(!w.show_first && !w.show_last);

        assert!(compute_window(max, max - 1, 2).is_err());
    }

    #[test]
    fn test_last_of_four() {
        let w = window(4, 4);
        assert_eq!(w.left, vec![2, 3]);
        assert!(w.right.is_empty());
        assert!(w.show_first);
        assert!(!w.left_ellipsis);
        assert!(!w.show_last);
        assert!(!w.right_ellipsis);
    }

    #[test]
    fn test_middle_of_ten() {
        let w = window(5, 10);
        assert_eq!(w.left, vec![3, 4]);
        assert_eq!(w.right, vec![6, 7]);
        assert!(w.show_first);
        assert!(w.show_last);
        assert!(w.left_ellipsis);
        assert!(w.right_ellipsis);
    }

    #[test]
    fn test_two_pages() {
        let w = window(1, 2);
        assert!(w.left.is_empty());
        assert_eq!(w.right, vec![2]);
        assert!(!w.show_last);
        assert!(!w.right_ellipsis);

        let w = window(2, 2);
        assert_eq!(w.left, vec![1]);
        assert!(w.right.is_empty());
        assert!(!w.show_first);
        assert!(!w.left_ellipsis);
    }

    #[test]
    fn test_window_reaches_edges() {
        // 1 2 [3] 4 5
        let w = window(3, 5);
        assert_eq!(w.left, vec![1, 2]);
        assert_eq!(w.right, vec![4, 5]);
        assert!(!w.show_first && !w.show_last);
        assert!(!w.left_ellipsis && !w.right_ellipsis);

        // 1 2 3 [4] 5 6 ... 10
        let w = window(4, 10);
        assert_eq!(w.left, vec![2, 3]);
        assert!(w.show_first);
        assert!(!w.left_ellipsis);
        assert!(w.right_ellipsis);
    }

    #[test]
    fn test_radius() {
        let w = compute_window(10, 20, 3).unwrap();
        assert_eq!(w.left, vec![7, 8, 9]);
        assert_eq!(w.right, vec![11, 12, 13]);

        let w = compute_window(10, 20, 0).unwrap();
        assert!(w.left.is_empty() && w.right.is_empty());
        assert!(!w.show_first && !w.show_last);
    }

    #[test]
    fn test_invalid_arguments() {
        assert!(compute_window(1, 0, 2).is_err());
        assert!(compute_window(0, 3, 2).is_err());
        assert!(compute_window(4, 3, 2).is_err());
    }

    #[test]
    fn test_properties_hold_for_all_inputs() {
        for total in 1..=30u64 {
            for current in 1..=total {
                for radius in 0..=4u64 {
                    let w = compute_window(current, total, radius).unwrap();
                    assert!(w.left.len() as u64 <= radius);
                    assert!(w.right.len() as u64 <= radius);
                    assert!(!w.left.contains(&current) && !w.right.contains(&current));

                    // contiguous and adjacent to the current page
                    for (i, p) in w.left.iter().rev().enumerate() {
                        assert_eq!(*p, current - 1 - i as u64);
                    }
                    for (i, p) in w.right.iter().enumerate() {
                        assert_eq!(*p, current + 1 + i as u64);
                    }

                    assert_eq!(w.left_ellipsis, w.left.first().is_some_and(|&p| p > 2));
                    assert_eq!(
                        w.right_ellipsis,
                        w.right.last().is_some_and(|&p| p < total - 1)
                    );
                    if w.show_first {
                        assert!(!w.left.contains(&1));
                    }
                    if w.show_last {
                        assert!(!w.right.contains(&total));
                    }
                    if current == 1 {
                        assert!(w.left.is_empty() && !w.show_first && !w.left_ellipsis);
                    }
                    if current == total {
                        assert!(w.right.is_empty() && !w.show_last && !w.right_ellipsis);
                    }

                    let pages = w.pages(current, total);
                    assert!(pages.windows(2).all(|p| p[0] < p[1]));
                }
            }
        }
    }
}
