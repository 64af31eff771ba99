//! Pure markup rendering.
//!
//! Every function here maps fetched data (plus the current time) to an HTML
//! fragment through an askama template under `templates/`. Nothing touches
//! the document; loaders hand the output to a
//! [`DashboardView`](crate::ports::DashboardView).

use askama::Template;
use snutz_domain::device::Device;
use snutz_domain::error::SnutzError;
use snutz_domain::test_result::TestResult;
use snutz_domain::time::{Timestamp, time_ago};

/// Placeholder label of the device selector. Its value is empty.
pub const DEVICE_PLACEHOLDER: &str = "Select device...";

struct DeviceRow {
    device_id: String,
    name: String,
    status_class: &'static str,
    status: &'static str,
    last_seen: String,
}

#[derive(Template)]
#[template(path = "devices.html")]
struct DevicesTemplate {
    rows: Vec<DeviceRow>,
}

struct DeviceOption<'a> {
    value: &'a str,
    label: String,
    selected: bool,
}

#[derive(Template)]
#[template(path = "device_options.html")]
struct DeviceOptionsTemplate<'a> {
    placeholder: &'a str,
    options: Vec<DeviceOption<'a>>,
}

struct ResultRow<'a> {
    id: i64,
    device_id: &'a str,
    test_type: &'a str,
    when: String,
    target: &'a str,
    status_class: &'static str,
    status: &'static str,
}

#[derive(Template)]
#[template(path = "results.html")]
struct ResultsTemplate<'a> {
    rows: Vec<ResultRow<'a>>,
}

fn render(template: &impl Template) -> Result<String, SnutzError> {
    template
        .render()
        .map_err(|err| SnutzError::Render(Box::new(err)))
}

/// Heading plus devices table: Device ID, Name, Status, Last Seen.
///
/// # Errors
///
/// Returns [`SnutzError::Render`] if the template fails.
pub fn devices_section(devices: &[Device], now: Timestamp) -> Result<String, SnutzError> {
    let rows = devices
        .iter()
        .map(|device| {
            let status = device.status_at(now);
            DeviceRow {
                device_id: device.device_id.clone(),
                name: device.name.clone(),
                status_class: status.css_class(),
                status: status.label(),
                last_seen: device.last_seen_label(now),
            }
        })
        .collect();
    render(&DevicesTemplate { rows })
}

/// Placeholder option followed by one option per device, in the given order.
///
/// The option whose value equals `selected` is marked `selected`.
///
/// # Errors
///
/// Returns [`SnutzError::Render`] if the template fails.
pub fn device_options(devices: &[Device], selected: &str) -> Result<String, SnutzError> {
    let options = devices
        .iter()
        .map(|device| DeviceOption {
            value: &device.device_id,
            label: device.option_label(),
            selected: !selected.is_empty() && device.device_id == selected,
        })
        .collect();
    render(&DeviceOptionsTemplate {
        placeholder: DEVICE_PLACEHOLDER,
        options,
    })
}

/// Heading plus results table: Test ID, Device ID, Test Type, Timestamp,
/// Target, Result.
///
/// # Errors
///
/// Returns [`SnutzError::Payload`] if any row's `result_data` cannot be
/// decoded. No partial markup is produced.
pub fn results_section(results: &[TestResult], now: Timestamp) -> Result<String, SnutzError> {
    let rows = results
        .iter()
        .map(|result| {
            let status = result.decode()?.status();
            Ok(ResultRow {
                id: result.id,
                device_id: &result.device_id,
                test_type: &result.test_type,
                when: time_ago(result.timestamp, now),
                target: &result.target,
                status_class: status.css_class(),
                status: status.label(),
            })
        })
        .collect::<Result<Vec<_>, SnutzError>>()?;
    render(&ResultsTemplate { rows })
}
