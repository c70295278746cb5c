use super::domain::{PrioritizationRecord, RecordStatus, Viewer};

/// Select the records the viewer may see, preserving input order.
///
/// Three tiers, checked in priority order: anonymous viewers get published
/// records only; page admins get everything; any other authenticated viewer
/// gets published records plus their own drafts.
pub fn visible_records<'a>(
    records: &'a [PrioritizationRecord],
    viewer: &Viewer,
) -> Vec<&'a PrioritizationRecord> {
    let identity = match &viewer.identity {
        None => {
            return records
                .iter()
                .filter(|record| record.record_status == RecordStatus::Published)
                .collect();
        }
        Some(identity) => identity,
    };

    if viewer.is_page_admin {
        return records.iter().collect();
    }

    records
        .iter()
        .filter(|record| match record.record_status {
            RecordStatus::Published => true,
            RecordStatus::Draft => &record.submitted_by == identity,
        })
        .collect()
}
