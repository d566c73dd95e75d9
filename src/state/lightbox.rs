/// Lightbox slider state
///
/// The lightbox owns three things: whether it is open, the image
/// sequence it is showing, and the current position in that sequence.
/// The index is always clamped into range; closed implies an empty
/// sequence and index 0. Everything else the overlay displays (title,
/// bullets, downloads) is captured once at open time and is read-only.
use iced::Point;

use super::data::{Link, WorkRecord};

/// Minimum horizontal displacement (in logical pixels) for a drag over
/// the stage to count as a swipe instead of a click.
pub const SWIPE_THRESHOLD: f32 = 40.0;

/// Presentation fields captured from the work record at open time.
#[derive(Debug, Clone, Default)]
pub struct WorkDetail {
    pub title: String,
    pub sub: String,
    pub bullets: Vec<String>,
    pub downloads: Vec<Link>,
}

/// The slider state machine.
#[derive(Debug, Default)]
pub struct Lightbox {
    open: bool,
    images: Vec<String>,
    index: usize,
    detail: WorkDetail,
    swipe: SwipeTracker,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn detail(&self) -> &WorkDetail {
        &self.detail
    }

    /// The image currently on the stage, if any.
    pub fn current_image(&self) -> Option<&str> {
        self.images.get(self.index).map(String::as_str)
    }

    /// Whether navigation affordances (prev/next, dots) should show.
    pub fn has_multiple(&self) -> bool {
        self.images.len() > 1
    }

    pub fn at_first(&self) -> bool {
        self.index == 0
    }

    pub fn at_last(&self) -> bool {
        self.images.len() <= self.index + 1
    }

    pub fn swipe_mut(&mut self) -> &mut SwipeTracker {
        &mut self.swipe
    }

    /// Open the slider on the work record at `index`.
    ///
    /// Out of range is a silent no-op (`false`): nothing to open.
    /// A record with no images still opens, with an empty stage.
    pub fn open_at(&mut self, items: &[WorkRecord], index: usize) -> bool {
        let Some(record) = items.get(index) else {
            return false;
        };

        self.images = record.resolved_images();
        self.index = 0;
        self.detail = WorkDetail {
            title: record.title.clone(),
            sub: record.sub.clone(),
            bullets: record.resolved_bullets(),
            downloads: record.downloads.clone(),
        };
        self.open = true;
        self.show(0);
        true
    }

    /// Move to image `i`, clamped into the valid range.
    ///
    /// `i` is signed so `index - 1` at the left edge clamps to 0
    /// instead of underflowing. No-op while the sequence is empty.
    pub fn show(&mut self, i: isize) {
        if self.images.is_empty() {
            return;
        }
        let last = (self.images.len() - 1) as isize;
        self.index = i.clamp(0, last) as usize;
    }

    pub fn next(&mut self) {
        self.show(self.index as isize + 1);
    }

    pub fn prev(&mut self) {
        self.show(self.index as isize - 1);
    }

    /// Close the slider. Idempotent.
    pub fn close(&mut self) {
        self.open = false;
        self.images.clear();
        self.index = 0;
    }
}

/// Direction of a completed swipe over the stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Dragged leftwards: advance to the next image.
    Left,
    /// Dragged rightwards: go back to the previous image.
    Right,
}

/// Press/move/release tracking for stage swipes.
///
/// Mirrors touch handling: the pointer position is recorded
/// continuously, a press marks the origin, and the release decides
/// whether the gesture was a swipe. Vertical displacement is tracked by
/// the origin/cursor pair but never acted upon, so vertical drags fall
/// through as ordinary clicks.
#[derive(Debug)]
pub struct SwipeTracker {
    cursor: Point,
    origin: Option<Point>,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self {
            cursor: Point::ORIGIN,
            origin: None,
        }
    }
}

impl SwipeTracker {
    /// Record the pointer position over the stage.
    pub fn moved(&mut self, position: Point) {
        self.cursor = position;
    }

    /// Mark the start of a potential swipe at the current position.
    pub fn press(&mut self) {
        self.origin = Some(self.cursor);
    }

    /// Finish the gesture. Returns the swipe direction if the
    /// horizontal displacement reached [`SWIPE_THRESHOLD`]; smaller
    /// movements are taps, not swipes.
    pub fn release(&mut self) -> Option<Swipe> {
        let origin = self.origin.take()?;
        let dx = self.cursor.x - origin.x;
        if dx.abs() < SWIPE_THRESHOLD {
            return None;
        }
        Some(if dx < 0.0 { Swipe::Left } else { Swipe::Right })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn work(title: &str, images: &[&str]) -> WorkRecord {
        WorkRecord {
            title: title.to_string(),
            images: images.iter().map(|s| s.to_string()).collect(),
            ..WorkRecord::default()
        }
    }

    fn three_image_items() -> Vec<WorkRecord> {
        vec![work("Triptych", &["a.png", "b.png", "c.png"])]
    }

    #[test]
    fn test_open_at_starts_on_first_image() {
        let items = three_image_items();
        let mut lb = Lightbox::new();
        assert!(lb.open_at(&items, 0));
        assert!(lb.is_open());
        assert_eq!(lb.index(), 0);
        assert_eq!(lb.current_image(), Some("a.png"));
    }

    #[test]
    fn test_open_at_out_of_range_is_a_noop() {
        let items = three_image_items();
        let mut lb = Lightbox::new();
        assert!(!lb.open_at(&items, 7));
        assert!(!lb.is_open());
        assert!(lb.images().is_empty());
        assert_eq!(lb.index(), 0);
    }

    #[test]
    fn test_legacy_img_becomes_one_element_sequence() {
        let items = vec![WorkRecord {
            title: "Old".to_string(),
            img: Some("x.png".to_string()),
            ..WorkRecord::default()
        }];
        let mut lb = Lightbox::new();
        assert!(lb.open_at(&items, 0));
        assert_eq!(lb.images().to_vec(), vec!["x.png"]);
        assert!(!lb.has_multiple());
    }

    #[test]
    fn test_show_clamps_both_ends() {
        let items = three_image_items();
        let mut lb = Lightbox::new();
        lb.open_at(&items, 0);

        lb.show(-5);
        assert_eq!(lb.index(), 0);
        lb.show(99);
        assert_eq!(lb.index(), 2);
        lb.show(1);
        assert_eq!(lb.index(), 1);
    }

    #[test]
    fn test_prev_at_first_image_stays_put() {
        let items = three_image_items();
        let mut lb = Lightbox::new();
        lb.open_at(&items, 0);

        lb.prev();
        assert_eq!(lb.index(), 0);
        assert!(lb.at_first());
    }

    #[test]
    fn test_next_stops_at_last_image() {
        let items = three_image_items();
        let mut lb = Lightbox::new();
        lb.open_at(&items, 0);

        lb.next();
        lb.next();
        assert!(lb.at_last());
        lb.next();
        assert_eq!(lb.index(), 2);
        assert_eq!(lb.current_image(), Some("c.png"));
    }

    #[test]
    fn test_show_is_idempotent_for_a_clamped_target() {
        let items = three_image_items();
        let mut lb = Lightbox::new();
        lb.open_at(&items, 0);

        lb.show(1);
        let first = (lb.index(), lb.current_image().map(str::to_owned));
        lb.show(1);
        assert_eq!(first, (lb.index(), lb.current_image().map(str::to_owned)));
    }

    #[test]
    fn test_close_resets_after_navigation() {
        let items = three_image_items();
        let mut lb = Lightbox::new();
        lb.open_at(&items, 0);
        lb.next();
        lb.next();

        lb.close();
        assert!(!lb.is_open());
        assert!(lb.images().is_empty());
        assert_eq!(lb.index(), 0);

        // Idempotent: closing again re-asserts the same state.
        lb.close();
        assert!(!lb.is_open());
        assert_eq!(lb.index(), 0);
    }

    #[test]
    fn test_record_without_images_opens_with_empty_stage() {
        let items = vec![work("Empty", &[])];
        let mut lb = Lightbox::new();
        assert!(lb.open_at(&items, 0));
        assert!(lb.is_open());
        assert_eq!(lb.current_image(), None);
        assert!(!lb.has_multiple());

        // Nothing to clamp against: show mutates nothing.
        lb.show(3);
        assert_eq!(lb.index(), 0);
        lb.next();
        assert_eq!(lb.index(), 0);
    }

    #[test]
    fn test_open_captures_detail_from_the_record() {
        let items = vec![WorkRecord {
            title: "Poster".to_string(),
            sub: "Print".to_string(),
            description: Some("line one\nline two".to_string()),
            downloads: vec![Link {
                url: "assets/poster.pdf".to_string(),
                label: "PDF".to_string(),
            }],
            img: Some("poster.png".to_string()),
            ..WorkRecord::default()
        }];
        let mut lb = Lightbox::new();
        lb.open_at(&items, 0);

        assert_eq!(lb.detail().title, "Poster");
        assert_eq!(lb.detail().sub, "Print");
        assert_eq!(lb.detail().bullets, vec!["line one", "line two"]);
        assert_eq!(lb.detail().downloads.len(), 1);
    }

    fn finish_drag(from: Point, to: Point) -> Option<Swipe> {
        let mut tracker = SwipeTracker::default();
        tracker.moved(from);
        tracker.press();
        tracker.moved(to);
        tracker.release()
    }

    #[test]
    fn test_swipe_below_threshold_is_ignored() {
        let swipe = finish_drag(Point::new(100.0, 50.0), Point::new(61.0, 50.0));
        assert_eq!(swipe, None); // 39 px leftwards: a tap, not a swipe
    }

    #[test]
    fn test_swipe_past_threshold_navigates() {
        let left = finish_drag(Point::new(100.0, 50.0), Point::new(59.0, 50.0));
        assert_eq!(left, Some(Swipe::Left)); // 41 px leftwards

        let right = finish_drag(Point::new(100.0, 50.0), Point::new(141.0, 50.0));
        assert_eq!(right, Some(Swipe::Right));
    }

    #[test]
    fn test_vertical_motion_does_not_block_a_horizontal_swipe() {
        let swipe = finish_drag(Point::new(100.0, 50.0), Point::new(41.0, 300.0));
        assert_eq!(swipe, Some(Swipe::Left));
    }

    #[test]
    fn test_release_without_press_is_ignored() {
        let mut tracker = SwipeTracker::default();
        tracker.moved(Point::new(10.0, 10.0));
        assert_eq!(tracker.release(), None);
    }

    #[test]
    fn test_release_consumes_the_gesture() {
        let mut tracker = SwipeTracker::default();
        tracker.moved(Point::new(0.0, 0.0));
        tracker.press();
        tracker.moved(Point::new(80.0, 0.0));
        assert_eq!(tracker.release(), Some(Swipe::Right));
        assert_eq!(tracker.release(), None);
    }
}
