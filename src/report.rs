use std::fmt;
use youtube_client::Video;

/// Column width every title is cut or padded to.
pub const TITLE_WIDTH: usize = 70;
const ELLIPSIS: &str = "...";

/// Videos ordered by view count, most viewed first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    videos: Vec<Video>,
}

impl Report {
    /// Sorts `videos` by views, descending. Equal counts keep their input order.
    pub fn new(mut videos: Vec<Video>) -> Self {
        videos.sort_by(|a, b| b.views().cmp(&a.views()));
        Self { videos }
    }

    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    /// Sum of all view counts. Widened so any number of `u64` counts fits.
    pub fn total_views(&self) -> u128 {
        self.videos.iter().map(|video| u128::from(video.views())).sum()
    }
}

/// One line per video: the fitted title, two spaces, the view count. No trailing newline.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, video) in self.videos.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{}  {}", fit_title(&video.title, TITLE_WIDTH), video.views())?;
        }
        Ok(())
    }
}

/// Pads `title` with spaces to `width` characters, or cuts it and appends `...` when longer.
pub fn fit_title(title: &str, width: usize) -> String {
    if title.chars().count() <= width {
        return format!("{title:<width$}");
    }

    let mut fitted: String = title.chars().take(width.saturating_sub(ELLIPSIS.len())).collect();
    fitted.push_str(ELLIPSIS);
    fitted
}
