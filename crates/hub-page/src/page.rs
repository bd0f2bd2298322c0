// File: crates/hub-page/src/page.rs
// Summary: Page assembly; component failures are absorbed and logged at this boundary.

use hub_chart::{RenderOptions, SeasonChart, SurfaceSpec};
use hub_widgets::store::KeyValueStore;
use hub_widgets::{comments, feed, poll, Comment, FeedCursor, FeedPage, PollRow};

use crate::share::{share_links, ShareLinks, DEFAULT_SHARE_TEXT};
use crate::stats::TeamStats;

/// Host-environment inputs the page consumes per boot.
#[derive(Clone, Debug)]
pub struct PageEnv {
    /// Logical size and density of the chart surface, or `None` when the host
    /// document has no such surface (the chart is then skipped, not failed).
    pub surface: Option<SurfaceSpec>,
    pub page_url: String,
    pub now_ms: i64,
}

/// Everything the booted page displays, as plain values.
#[derive(Clone, Debug)]
pub struct PageView {
    pub stats: TeamStats,
    pub chart_png: Option<Vec<u8>>,
    pub poll: Vec<PollRow>,
    pub comments: Vec<Comment>,
    pub feed: FeedPage,
    pub share: ShareLinks,
}

pub struct Page {
    pub stats: TeamStats,
    pub options: RenderOptions,
}

impl Page {
    pub fn new(stats: TeamStats) -> Self {
        Self {
            stats,
            options: RenderOptions::default(),
        }
    }

    /// Render the season chart for `spec` as PNG bytes. A missing surface is
    /// a precondition not met, never an error; render failures degrade to no
    /// chart. Re-invoking with a new spec is the whole resize story: the full
    /// chart is redrawn from the same dataset.
    pub fn render_chart(&self, spec: Option<SurfaceSpec>) -> Option<Vec<u8>> {
        let spec = match spec {
            Some(spec) => spec,
            None => {
                tracing::debug!("chart surface missing, skipping render");
                return None;
            }
        };
        let chart = SeasonChart::new(self.stats.runs_per_season.clone());
        match chart.render_to_png_bytes(spec, &self.options) {
            Ok(bytes) => Some(bytes),
            Err(err) => {
                tracing::error!(error = %err, "chart render failed");
                None
            }
        }
    }

    /// Boot the page. Each component failure is caught here and logged so the
    /// remainder of the view stays usable; a broken chart or widget never
    /// takes the page down.
    pub fn boot(&self, store: &mut dyn KeyValueStore, env: &PageEnv) -> PageView {
        let chart_png = self.render_chart(env.surface);

        let poll = poll::results(store).unwrap_or_else(|err| {
            tracing::error!(error = %err, "poll results unavailable");
            Vec::new()
        });
        let comments = comments::newest_first(store).unwrap_or_else(|err| {
            tracing::error!(error = %err, "comments unavailable");
            Vec::new()
        });
        let posts = feed::posts(store, env.now_ms).unwrap_or_else(|err| {
            tracing::error!(error = %err, "feed unavailable");
            Vec::new()
        });
        let feed = feed::load_more(&posts, FeedCursor::default(), feed::DEFAULT_PAGE_SIZE);
        let share = share_links(&env.page_url, DEFAULT_SHARE_TEXT);

        PageView {
            stats: self.stats.clone(),
            chart_png,
            poll,
            comments,
            feed,
            share,
        }
    }
}
