/// Read-only view of the library totals kept in shared UI state.
pub trait LibraryCounts {
    fn audiobooks_count(&self) -> usize;

    fn podcasts_count(&self) -> usize;
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct LibraryStats {
    pub audiobooks: usize,
    pub podcasts: usize,
}

impl LibraryCounts for LibraryStats {
    fn audiobooks_count(&self) -> usize {
        self.audiobooks
    }

    fn podcasts_count(&self) -> usize {
        self.podcasts
    }
}

impl<L: LibraryCounts + ?Sized> LibraryCounts for &L {
    fn audiobooks_count(&self) -> usize {
        (**self).audiobooks_count()
    }

    fn podcasts_count(&self) -> usize {
        (**self).podcasts_count()
    }
}
