//! Document checklist
//!
//! Once a payer and specialty are chosen, the backend serves the list of
//! documents that payer expects for that specialty. Uploads are tracked
//! against the checklist and submitted with the claim.

use serde::{Deserialize, Serialize};

/// One required document in a payer's checklist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub document_type: String,
    pub description: String,
    #[serde(default)]
    pub mandatory: bool,
}

/// A document the user has uploaded for this claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedDocument {
    pub document_type: String,
    pub file_name: String,
    /// Backend handle for the stored file
    pub storage_ref: String,
}

/// Checks whether every mandatory item has an upload against it
pub fn missing_mandatory<'a>(
    checklist: &'a [ChecklistItem],
    uploads: &[UploadedDocument],
) -> Vec<&'a ChecklistItem> {
    checklist
        .iter()
        .filter(|item| {
            item.mandatory
                && !uploads
                    .iter()
                    .any(|u| u.document_type == item.document_type)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(doc: &str, mandatory: bool) -> ChecklistItem {
        ChecklistItem {
            document_type: doc.to_string(),
            description: format!("{doc} copy"),
            mandatory,
        }
    }

    #[test]
    fn test_missing_mandatory_reports_gaps() {
        let checklist = vec![
            item("DISCHARGE_SUMMARY", true),
            item("FINAL_BILL", true),
            item("LAB_REPORTS", false),
        ];
        let uploads = vec![UploadedDocument {
            document_type: "FINAL_BILL".to_string(),
            file_name: "bill.pdf".to_string(),
            storage_ref: "ref-1".to_string(),
        }];

        let missing = missing_mandatory(&checklist, &uploads);
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].document_type, "DISCHARGE_SUMMARY");
    }

    #[test]
    fn test_optional_items_never_block() {
        let checklist = vec![item("LAB_REPORTS", false)];
        assert!(missing_mandatory(&checklist, &[]).is_empty());
    }
}
