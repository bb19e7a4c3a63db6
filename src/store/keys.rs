//! Storage keys shared between pages. Any page may read any of these; the
//! comment on each names the page that writes it.

/// JSON `UserProfile`. Written at account setup.
pub const USER: &str = "user";

/// JSON number of hours slept. Written by the daily check-in.
pub const DASHBOARD_SLEEP: &str = "dashboardSleep";

/// Plain-text note. Written by the daily check-in, removed on dismiss.
pub const DASHBOARD_FEEDBACK: &str = "dashboardFeedback";

/// JSON array of `ReportAttachment`. Written by the report shelf.
pub const REPORTS: &str = "reports";
