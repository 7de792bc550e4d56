use crate::store::query::Window;

/// Maps 1-based page numbers of the blog index onto store windows.
pub struct Paginator {
    page_size: u32,
}

impl Paginator {
    pub fn new(page_size: u32) -> Self {
        Paginator { page_size }
    }

    pub fn window(&self, page: u32) -> Result<Window, String> {
        if page == 0 {
            return Err("Page has to be greater than 0".to_string());
        }

        let offset = (page - 1)
            .checked_mul(self.page_size)
            .ok_or_else(|| format!("Page {} is out of range", page))?;

        Ok(Window {
            offset,
            limit: self.page_size,
        })
    }

    pub fn has_previous(&self, page: u32) -> bool {
        page > 1
    }

    /// The store doesn't report totals, a full page means there may be more.
    pub fn may_have_next(&self, items_on_page: usize) -> bool {
        items_on_page > 0 && items_on_page as u32 >= self.page_size
    }
}
