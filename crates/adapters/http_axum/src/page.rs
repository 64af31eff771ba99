//! Dashboard page and region frames.
//!
//! The page is a static shell: alerts, the command form and two `<iframe>`s.
//! Only the frames carry `<meta http-equiv="refresh">`, so polling never
//! reloads the form and whatever the user is typing survives.

use askama::Template;
use snutz_app::render;
use snutz_domain::command::CommandForm;
use snutz_domain::error::SnutzError;

use crate::regions::RegionsSnapshot;

/// Command types offered by the test-type selector, as `(value, label)`.
pub const TEST_TYPES: &[(&str, &str)] = &[("ping", "Ping")];

struct TestTypeOption {
    value: &'static str,
    label: &'static str,
    selected: bool,
}

#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate<'a> {
    alerts: &'a [String],
    device_options: String,
    test_types: Vec<TestTypeOption>,
    target: &'a str,
}

#[derive(Template)]
#[template(path = "frame.html")]
struct FrameTemplate<'a> {
    refresh_seconds: u64,
    alerts: &'a [String],
    body: &'a str,
}

fn render_template(template: &impl Template) -> Result<String, SnutzError> {
    template
        .render()
        .map_err(|err| SnutzError::Render(Box::new(err)))
}

/// Render the dashboard shell.
///
/// `form` holds the values to show in the command form: the device and test
/// type it names are preselected and its target is prefilled. Each entry of
/// `alerts` becomes an open modal dialog dismissed with an OK button.
///
/// # Errors
///
/// Returns [`SnutzError::Render`] if a template fails.
pub fn render_page(
    snapshot: &RegionsSnapshot,
    alerts: &[String],
    form: &CommandForm,
) -> Result<String, SnutzError> {
    let test_types = TEST_TYPES
        .iter()
        .map(|&(value, label)| TestTypeOption {
            value,
            label,
            selected: value == form.test_type,
        })
        .collect();
    render_template(&PageTemplate {
        alerts,
        device_options: render::device_options(&snapshot.device_choices, &form.device_id)?,
        test_types,
        target: &form.target,
    })
}

/// Render one region as a self-refreshing document.
///
/// # Errors
///
/// Returns [`SnutzError::Render`] if the template fails.
pub fn render_frame(
    body: &str,
    alerts: &[String],
    refresh_seconds: u64,
) -> Result<String, SnutzError> {
    render_template(&FrameTemplate {
        refresh_seconds,
        alerts,
        body,
    })
}
