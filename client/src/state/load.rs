//! Initial-load status for the board page.

/// Whether the initial files/notes fetch is still in flight.
#[derive(Clone, Copy, Debug)]
pub struct LoadState {
    pub loading: bool,
}

impl Default for LoadState {
    fn default() -> Self {
        Self { loading: true }
    }
}
