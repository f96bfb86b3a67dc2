//! Paginated book list controller

use crate::api::PageSource;
use crate::config::PagerConfig;
use crate::pagination::{Direction, OffsetPolicy, PaginationState, DEFAULT_LIMIT};
use crate::view::{BookRow, BookView, LinkId, LinkKind};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, error};

type Callback = Box<dyn FnOnce() + Send + 'static>;

/// Options for a single `display_books` call
#[derive(Default)]
pub struct DisplayOptions {
    /// Window to load; the displayed offset when unset
    pub offset: Option<i64>,
    callback: Option<Callback>,
}

impl DisplayOptions {
    /// Options that reload the displayed window
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the window starting at `offset`
    #[must_use]
    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Run `callback` once the page has been rendered
    #[must_use]
    pub fn callback(mut self, callback: impl FnOnce() + Send + 'static) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }
}

impl std::fmt::Debug for DisplayOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DisplayOptions")
            .field("offset", &self.offset)
            .field("has_callback", &self.callback.is_some())
            .finish()
    }
}

/// What a `display_books` call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayOutcome {
    /// The page was rendered and the cursor moved to `offset`
    Rendered { offset: i64, rows: usize },
    /// The request failed; view and cursor are unchanged
    Failed,
    /// A newer request was issued before this one completed; nothing changed
    Stale,
}

impl DisplayOutcome {
    /// Check if the page was rendered
    pub fn is_rendered(&self) -> bool {
        matches!(self, Self::Rendered { .. })
    }

    /// Offset of the rendered page, which the offset policy may have
    /// moved away from the one asked for
    pub fn offset(&self) -> Option<i64> {
        match self {
            Self::Rendered { offset, .. } => Some(*offset),
            Self::Failed | Self::Stale => None,
        }
    }
}

#[derive(Debug)]
struct Shared {
    pagination: PaginationState,
    /// Number of the most recently issued request
    issued: u64,
}

/// Controller for a paginated book table
pub struct PaginatedBookList<S, V> {
    source: S,
    view: Mutex<V>,
    shared: Mutex<Shared>,
    /// Clicks in flight per link
    pending_clicks: Mutex<HashMap<LinkId, usize>>,
    expand: bool,
}

impl<S: PageSource, V: BookView> PaginatedBookList<S, V> {
    /// Create a controller with the default page size and offset policy
    pub fn new(source: S, view: V) -> Self {
        Self::with_settings(source, view, DEFAULT_LIMIT, OffsetPolicy::default(), true)
    }

    /// Create a controller with explicit paging settings
    pub fn with_settings(
        source: S,
        view: V,
        limit: u32,
        policy: OffsetPolicy,
        expand: bool,
    ) -> Self {
        Self {
            source,
            view: Mutex::new(view),
            shared: Mutex::new(Shared {
                pagination: PaginationState::new(limit, policy),
                issued: 0,
            }),
            pending_clicks: Mutex::new(HashMap::new()),
            expand,
        }
    }

    /// Create a controller using the paging settings of `config`
    pub fn from_config(source: S, view: V, config: &PagerConfig) -> Self {
        Self::with_settings(
            source,
            view,
            config.limit,
            config.offset_policy,
            config.expand,
        )
    }

    /// The page source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Snapshot of the pagination state
    pub fn state(&self) -> PaginationState {
        lock(&self.shared).pagination.clone()
    }

    /// Offset of the displayed page
    pub fn current_offset(&self) -> i64 {
        lock(&self.shared).pagination.offset
    }

    /// Read the view
    pub fn with_view<R>(&self, f: impl FnOnce(&V) -> R) -> R {
        let view = lock(&self.view);
        f(&*view)
    }

    /// Take the view back
    pub fn into_view(self) -> V {
        self.view
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Load the displayed window (offset 0 on a fresh controller)
    pub async fn init(&self) -> DisplayOutcome {
        self.display_books(DisplayOptions::new()).await
    }

    /// Fetch one window and render it.
    ///
    /// Request failures are logged and reported as `Failed`; the view is left
    /// as it was and the callback is not run.
    pub async fn display_books(&self, options: DisplayOptions) -> DisplayOutcome {
        let DisplayOptions { offset, callback } = options;

        let (request, sequence) = {
            let mut shared = lock(&self.shared);
            let offset = offset.unwrap_or(shared.pagination.offset);
            let request = shared.pagination.request_for(offset, self.expand);
            shared.issued += 1;
            (request, shared.issued)
        };

        let page = match self.source.fetch_page(&request).await {
            Ok(page) => page,
            Err(e) => {
                error!(offset = request.offset, "Failed to load books: {}", e);
                lock(&self.shared).pagination.record_failure();
                return DisplayOutcome::Failed;
            }
        };

        let rows = {
            let mut shared = lock(&self.shared);
            if sequence != shared.issued {
                debug!(
                    "Discarding response #{} for offset {}, request #{} is newer",
                    sequence, request.offset, shared.issued
                );
                shared.pagination.record_stale();
                return DisplayOutcome::Stale;
            }

            let rows: Vec<BookRow> = page.results.iter().map(BookRow::from).collect();
            let count = rows.len();
            {
                let mut view = lock(&self.view);
                view.replace_rows(rows);
                view.set_links_visible(LinkKind::Previous, page.has_previous());
                view.set_links_visible(LinkKind::Next, page.has_next());
            }
            shared.pagination.record_page(request.offset, &page);
            count
        };

        debug!("Rendered {} books at offset {}", rows, request.offset);

        if let Some(callback) = callback {
            callback();
        }

        DisplayOutcome::Rendered {
            offset: request.offset,
            rows,
        }
    }

    /// Load `offset` on behalf of `link`, which stays disabled until every
    /// request started from it has completed
    pub async fn handle_link_click(&self, link: LinkId, offset: i64) -> DisplayOutcome {
        let _disabled = DisabledLink::acquire(&self.pending_clicks, &self.view, link);
        self.display_books(DisplayOptions::new().offset(offset))
            .await
    }

    /// Activate the `index`-th next link
    pub async fn next(&self, index: usize) -> DisplayOutcome {
        self.navigate(Direction::Next, LinkId::next(index)).await
    }

    /// Activate the `index`-th previous link
    pub async fn previous(&self, index: usize) -> DisplayOutcome {
        self.navigate(Direction::Previous, LinkId::previous(index))
            .await
    }

    /// Activate any link
    pub async fn click(&self, link: LinkId) -> DisplayOutcome {
        let direction = match link.kind {
            LinkKind::Next => Direction::Next,
            LinkKind::Previous => Direction::Previous,
        };
        self.navigate(direction, link).await
    }

    async fn navigate(&self, direction: Direction, link: LinkId) -> DisplayOutcome {
        let offset = lock(&self.shared).pagination.target_offset(direction);
        self.handle_link_click(link, offset).await
    }
}

impl<S, V> std::fmt::Debug for PaginatedBookList<S, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaginatedBookList")
            .field("shared", &self.shared)
            .field("expand", &self.expand)
            .finish_non_exhaustive()
    }
}

/// Keeps a link disabled for as long as any guard for it is alive
struct DisabledLink<'a, V: BookView> {
    pending: &'a Mutex<HashMap<LinkId, usize>>,
    view: &'a Mutex<V>,
    link: LinkId,
}

impl<'a, V: BookView> DisabledLink<'a, V> {
    fn acquire(
        pending: &'a Mutex<HashMap<LinkId, usize>>,
        view: &'a Mutex<V>,
        link: LinkId,
    ) -> Self {
        let mut pending_clicks = lock(pending);
        let count = pending_clicks.entry(link).or_insert(0);
        *count += 1;
        if *count == 1 {
            lock(view).set_link_disabled(link, true);
        }
        Self {
            pending,
            view,
            link,
        }
    }
}

impl<V: BookView> Drop for DisabledLink<'_, V> {
    fn drop(&mut self) {
        let mut pending_clicks = lock(self.pending);
        let remaining = match pending_clicks.get_mut(&self.link) {
            Some(count) => {
                *count = count.saturating_sub(1);
                *count
            }
            None => 0,
        };
        if remaining == 0 {
            pending_clicks.remove(&self.link);
            lock(self.view).set_link_disabled(self.link, false);
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
