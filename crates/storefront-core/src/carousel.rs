use crate::config::CarouselConfig;

/// A bounded strip showing `visible_count` items at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Carousel {
    item_count: usize,
    visible_count: usize,
    index: usize,
}

impl Carousel {
    pub fn new(item_count: usize, visible_count: usize) -> Self {
        Self {
            item_count,
            visible_count: visible_count.max(1),
            index: 0,
        }
    }

    pub fn with_viewport(item_count: usize, viewport_width: f64, config: &CarouselConfig) -> Self {
        Self::new(item_count, config.visible_for(viewport_width))
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }
    pub fn visible_count(&self) -> usize {
        self.visible_count
    }
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn max_index(&self) -> usize {
        self.item_count.saturating_sub(self.visible_count)
    }

    /// One dot per reachable start position.
    pub fn page_count(&self) -> usize {
        self.max_index() + 1
    }

    pub fn active_dot(&self) -> usize {
        self.index
    }

    pub fn prev_disabled(&self) -> bool {
        self.index == 0
    }

    pub fn next_disabled(&self) -> bool {
        self.index >= self.max_index()
    }

    /// Returns whether the index moved.
    pub fn next(&mut self) -> bool {
        self.go_to(self.index + 1)
    }

    pub fn prev(&mut self) -> bool {
        match self.index.checked_sub(1) {
            Some(i) => self.go_to(i),
            None => false,
        }
    }

    pub fn go_to(&mut self, index: usize) -> bool {
        let clamped = index.min(self.max_index());
        let moved = clamped != self.index;
        self.index = clamped;
        moved
    }

    /// Track translation as a percentage of the viewport.
    pub fn offset_percent(&self) -> f64 {
        -(self.index as f64) * 100.0 / self.visible_count as f64
    }

    pub fn on_resize(&mut self, viewport_width: f64, config: &CarouselConfig) {
        self.visible_count = config.visible_for(viewport_width).max(1);
        self.index = self.index.min(self.max_index());
    }
}
