use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffsetLimit {
    pub offset: u64,
    pub limit: u64,
}

impl Default for OffsetLimit {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 100,
        }
    }
}

/// Largest offset the storage layer accepts (signed 64-bit).
pub const MAX_OFFSET: u64 = i64::MAX as u64;

impl OffsetLimit {
    pub fn new(offset: u64, limit: u64) -> Self {
        Self {
            offset: offset.min(MAX_OFFSET),
            limit,
        }
    }

    /// Converts a 1-based page number and page size into an offset window.
    pub fn from_page(page_num: u64, page_size: u64) -> Self {
        Self::new(page_num.saturating_sub(1).saturating_mul(page_size), page_size)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub offset: u64,
    pub limit: u64,
    pub total: u64,
}

impl<T> Paginated<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            offset: self.offset,
            limit: self.limit,
            total: self.total,
        }
    }

    pub fn try_map<U, E>(self, f: impl FnMut(T) -> Result<U, E>) -> Result<Paginated<U>, E> {
        Ok(Paginated {
            items: self.items.into_iter().map(f).collect::<Result<Vec<U>, E>>()?,
            offset: self.offset,
            limit: self.limit,
            total: self.total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_page_is_one_based() {
        assert_eq!(OffsetLimit::from_page(1, 10), OffsetLimit::new(0, 10));
        assert_eq!(OffsetLimit::from_page(3, 10), OffsetLimit::new(20, 10));
        assert_eq!(OffsetLimit::from_page(0, 10), OffsetLimit::new(0, 10));
    }

    #[test]
    fn test_from_page_saturates_on_huge_page_numbers() {
        assert_eq!(
            OffsetLimit::from_page(u64::MAX, 500),
            OffsetLimit {
                offset: MAX_OFFSET,
                limit: 500
            }
        );
    }
}
