use crate::api::ListFilter;

/// The four sidebar-selectable views. `Submit` shows the application form;
/// the other three are filtered slices of the application list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveView {
    Submit,
    Mine,
    Pending,
    Approved,
}

impl ActiveView {
    pub const ALL: [ActiveView; 4] = [
        ActiveView::Submit,
        ActiveView::Mine,
        ActiveView::Pending,
        ActiveView::Approved,
    ];

    /// Slice of the collection this view shows, `None` for the form view.
    pub fn filter(&self) -> Option<ListFilter> {
        match self {
            ActiveView::Submit => None,
            ActiveView::Mine => Some(ListFilter::Mine),
            ActiveView::Pending => Some(ListFilter::Pending),
            ActiveView::Approved => Some(ListFilter::Approved),
        }
    }

    pub fn sidebar_label(&self) -> &'static str {
        match self {
            ActiveView::Submit => "New request",
            ActiveView::Mine => "My applications",
            ActiveView::Pending => "Pending approvals",
            ActiveView::Approved => "Approved",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ActiveView::Submit => "Submit a leave request",
            ActiveView::Mine => "My leave applications",
            ActiveView::Pending => "Pending approvals",
            ActiveView::Approved => "Approved applications",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ActiveView::Submit => "Pick the leave type and period, then submit the request.",
            ActiveView::Mine => "Requests you have submitted, newest first.",
            ActiveView::Pending => "Requests waiting for a decision.",
            ActiveView::Approved => "Approved and rejected applications.",
        }
    }

    /// Whether this view offers the approve/reject row actions.
    pub fn can_decide(&self) -> bool {
        matches!(self, ActiveView::Pending)
    }
}
