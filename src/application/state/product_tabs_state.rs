//! Tab selection for the review panel.

/// Review panel tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductTab {
    /// List of submitted reviews.
    #[default]
    Reviews,
    /// The review form.
    MakeAReview,
}

impl ProductTab {
    /// Tabs in display order.
    pub const ALL: [Self; 2] = [Self::Reviews, Self::MakeAReview];

    /// Returns the tab title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Reviews => "Reviews",
            Self::MakeAReview => "Make a Review",
        }
    }

    /// Returns the position in [`ProductTab::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Reviews => 0,
            Self::MakeAReview => 1,
        }
    }
}

/// Which tab is currently shown. Independent of review data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductTabsState {
    selected: ProductTab,
}

impl ProductTabsState {
    /// Creates state with the reviews tab selected.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            selected: ProductTab::Reviews,
        }
    }

    /// Returns the selected tab.
    #[must_use]
    pub const fn selected(&self) -> ProductTab {
        self.selected
    }

    /// Selects `tab`.
    pub fn select(&mut self, tab: ProductTab) {
        self.selected = tab;
    }

    /// Moves to the other tab.
    pub fn next(&mut self) {
        let next = (self.selected.index() + 1) % ProductTab::ALL.len();
        self.selected = ProductTab::ALL[next];
    }
}
