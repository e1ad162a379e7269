//! Client-side spreadsheet export of the currently loaded event rows

use chrono::NaiveDate;
use rust_xlsxwriter::{Workbook, XlsxError};
use tracing::warn;

use crate::types::Event;

/// Sheet name of the exported workbook.
pub const SHEET_NAME: &str = "Events";

/// Column headers, in sheet order.
pub const COLUMNS: [&str; 9] = [
    "Date",
    "Start Time",
    "End Time",
    "Title",
    "Organizer",
    "Industry",
    "Market",
    "Attending",
    "Link",
];

/// One spreadsheet row, projected from an event record.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRow {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub title: String,
    pub organizer: String,
    pub industry: String,
    pub market: String,
    pub attending: i64,
    pub link: String,
}

impl ExportRow {
    fn from_event(event: &Event) -> Self {
        Self {
            date: event.start_datetime.format("%Y-%m-%d").to_string(),
            start_time: event.start_datetime.format("%H:%M").to_string(),
            end_time: event.end_datetime.format("%H:%M").to_string(),
            title: event.title.clone(),
            organizer: event.organizer.clone(),
            industry: event.industry.clone(),
            market: event.market.clone(),
            attending: event.attending,
            link: event.event_link.clone(),
        }
    }
}

/// Project the row set to the export schema.
pub fn export_rows(events: &[Event]) -> Vec<ExportRow> {
    events.iter().map(ExportRow::from_event).collect()
}

/// Filename for an export started on `today`.
pub fn export_filename(today: NaiveDate) -> String {
    format!("Events_Export_{}.xlsx", today.format("%Y-%m-%d"))
}

/// Build the workbook for the given rows. Returns `None` on an empty row
/// set: that is not an error the user sees, only a diagnostic.
pub fn build_workbook(events: &[Event]) -> Result<Option<Vec<u8>>, XlsxError> {
    if events.is_empty() {
        warn!("no event data to export");
        return Ok(None);
    }

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, header) in COLUMNS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }

    for (index, row) in export_rows(events).iter().enumerate() {
        let row_num = index as u32 + 1;
        worksheet.write_string(row_num, 0, &row.date)?;
        worksheet.write_string(row_num, 1, &row.start_time)?;
        worksheet.write_string(row_num, 2, &row.end_time)?;
        worksheet.write_string(row_num, 3, &row.title)?;
        worksheet.write_string(row_num, 4, &row.organizer)?;
        worksheet.write_string(row_num, 5, &row.industry)?;
        worksheet.write_string(row_num, 6, &row.market)?;
        worksheet.write_number(row_num, 7, row.attending as f64)?;
        worksheet.write_string(row_num, 8, &row.link)?;
    }

    Ok(Some(workbook.save_to_buffer()?))
}

/// Hand the workbook bytes to the browser as a file download.
#[cfg(feature = "web")]
pub fn download_workbook(bytes: &[u8], filename: &str) {
    if let Err(err) = trigger_download(bytes, filename) {
        tracing::error!(?err, "export download failed");
    }
}

#[cfg(feature = "web")]
fn trigger_download(bytes: &[u8], filename: &str) -> Result<(), wasm_bindgen::JsValue> {
    use wasm_bindgen::{JsCast, JsValue};

    let buffer = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&buffer);
    let blob = web_sys::Blob::new_with_u8_array_sequence(&parts)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let anchor: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    web_sys::Url::revoke_object_url(&url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::sample_event;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_empty_row_set_produces_no_artifact() {
        assert_eq!(build_workbook(&[]).unwrap(), None);
    }

    #[test]
    fn test_workbook_built_for_loaded_rows() {
        let created = Utc.with_ymd_and_hms(2026, 8, 1, 8, 0, 0).unwrap();
        let events = [sample_event(1, created), sample_event(2, created)];

        let bytes = build_workbook(&events).unwrap().expect("workbook bytes");
        assert!(!bytes.is_empty());
    }

    #[test]
    fn test_row_projection_splits_date_and_times() {
        let created = Utc.with_ymd_and_hms(2026, 8, 1, 8, 0, 0).unwrap();
        let rows = export_rows(&[sample_event(7, created)]);

        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.date, "2026-08-06");
        assert_eq!(row.start_time, "09:30");
        assert_eq!(row.end_time, "11:00");
        assert_eq!(row.attending, 42);
        assert_eq!(row.link, "https://example.org/events/networking");
    }

    #[test]
    fn test_export_filename_embeds_date() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        assert_eq!(export_filename(today), "Events_Export_2026-08-06.xlsx");
    }
}
