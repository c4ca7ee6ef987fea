//! Bill amount derivation
//!
//! The claim form carries four entered amounts and three derived ones:
//!
//! ```text
//! total_patient_paid_amount = patient_discount_amount + amount_paid_by_patient
//! amount_charged_to_payer   = total_bill_amount - total_patient_paid_amount
//! claimed_amount            = amount_charged_to_payer - mou_discount_amount
//! ```
//!
//! [`derive_bill`] is the single reducer behind every surface that edits
//! these fields (the submission page and the claim dialog). It takes the
//! current field set plus the field that just changed and returns the full
//! next field set, recomputing in the fixed order above.
//!
//! The recompute triggers are deliberately asymmetric:
//! `total_patient_paid_amount` only recomputes when one of its two inputs
//! changed, `amount_charged_to_payer` when any of its contributors changed
//! (including a manual override of `total_patient_paid_amount`), and
//! `claimed_amount` on every change. That keeps the two intermediate fields
//! user-editable while `claimed_amount` stays read-only.
//!
//! Fields hold raw user-entered text. Empty or unparseable text counts as
//! zero; derivation never fails.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The bill fields of the claim form, as raw entry text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillFields {
    pub total_bill_amount: String,
    pub patient_discount_amount: String,
    pub amount_paid_by_patient: String,
    pub total_patient_paid_amount: String,
    pub amount_charged_to_payer: String,
    pub mou_discount_amount: String,
    pub claimed_amount: String,
}

/// Identifies which bill field an edit landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillField {
    TotalBillAmount,
    PatientDiscountAmount,
    AmountPaidByPatient,
    TotalPatientPaidAmount,
    AmountChargedToPayer,
    MouDiscountAmount,
}

impl BillField {
    /// The form field name, as the backend and the UI know it
    pub fn as_str(&self) -> &'static str {
        match self {
            BillField::TotalBillAmount => "total_bill_amount",
            BillField::PatientDiscountAmount => "patient_discount_amount",
            BillField::AmountPaidByPatient => "amount_paid_by_patient",
            BillField::TotalPatientPaidAmount => "total_patient_paid_amount",
            BillField::AmountChargedToPayer => "amount_charged_to_payer",
            BillField::MouDiscountAmount => "mou_discount_amount",
        }
    }
}

/// Parses entered amount text, treating empty or malformed input as zero
pub fn parse_amount(raw: &str) -> Decimal {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Decimal::ZERO;
    }
    trimmed
        .parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(trimmed))
        .unwrap_or(Decimal::ZERO)
}

/// Applies an edit to one bill field and recomputes the dependent amounts
///
/// Returns the full next field set. The changed field's raw value is stored
/// as entered; derived fields are rewritten per the rules above, with
/// `claimed_amount` rendered to two decimal places.
pub fn derive_bill(fields: &BillFields, changed: BillField, value: &str) -> BillFields {
    let mut next = fields.clone();

    match changed {
        BillField::TotalBillAmount => next.total_bill_amount = value.to_string(),
        BillField::PatientDiscountAmount => next.patient_discount_amount = value.to_string(),
        BillField::AmountPaidByPatient => next.amount_paid_by_patient = value.to_string(),
        BillField::TotalPatientPaidAmount => next.total_patient_paid_amount = value.to_string(),
        BillField::AmountChargedToPayer => next.amount_charged_to_payer = value.to_string(),
        BillField::MouDiscountAmount => next.mou_discount_amount = value.to_string(),
    }

    let total_bill = parse_amount(&next.total_bill_amount);
    let patient_discount = parse_amount(&next.patient_discount_amount);
    let paid_by_patient = parse_amount(&next.amount_paid_by_patient);

    if matches!(
        changed,
        BillField::PatientDiscountAmount | BillField::AmountPaidByPatient
    ) {
        let total_patient_paid = patient_discount + paid_by_patient;
        next.total_patient_paid_amount = total_patient_paid.to_string();
    }

    if matches!(
        changed,
        BillField::TotalBillAmount
            | BillField::PatientDiscountAmount
            | BillField::AmountPaidByPatient
            | BillField::TotalPatientPaidAmount
    ) {
        let total_patient_paid = parse_amount(&next.total_patient_paid_amount);
        next.amount_charged_to_payer = (total_bill - total_patient_paid).to_string();
    }

    let charged_to_payer = parse_amount(&next.amount_charged_to_payer);
    let mou_discount = parse_amount(&next.mou_discount_amount);
    next.claimed_amount = format!("{:.2}", charged_to_payer - mou_discount);

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn entered(a: &str, b: &str, c: &str, d: &str) -> BillFields {
        // Replay the edits the way a user would type them
        let mut fields = BillFields::default();
        fields = derive_bill(&fields, BillField::TotalBillAmount, a);
        fields = derive_bill(&fields, BillField::PatientDiscountAmount, b);
        fields = derive_bill(&fields, BillField::AmountPaidByPatient, c);
        derive_bill(&fields, BillField::MouDiscountAmount, d)
    }

    #[test]
    fn test_standard_scenario() {
        let fields = entered("10000", "500", "1500", "200");

        assert_eq!(fields.total_patient_paid_amount, "2000");
        assert_eq!(fields.amount_charged_to_payer, "8000");
        assert_eq!(fields.claimed_amount, "7800.00");
    }

    #[test]
    fn test_all_zero_scenario() {
        let fields = entered("0", "0", "0", "0");

        assert_eq!(fields.total_patient_paid_amount, "0");
        assert_eq!(fields.amount_charged_to_payer, "0");
        assert_eq!(fields.claimed_amount, "0.00");
    }

    #[test]
    fn test_empty_input_treated_as_zero() {
        let mut fields = BillFields::default();
        fields = derive_bill(&fields, BillField::TotalBillAmount, "10000");
        fields = derive_bill(&fields, BillField::MouDiscountAmount, "");

        assert_eq!(fields.claimed_amount, "10000.00");
    }

    #[test]
    fn test_garbage_input_treated_as_zero() {
        let mut fields = entered("10000", "500", "1500", "200");
        fields = derive_bill(&fields, BillField::TotalBillAmount, "not a number");

        // total bill coerces to 0; charged = 0 - 2000
        assert_eq!(fields.amount_charged_to_payer, "-2000");
        assert_eq!(fields.claimed_amount, "-2200.00");
    }

    #[test]
    fn test_mou_change_touches_only_claimed_amount() {
        let before = entered("10000", "500", "1500", "200");
        let after = derive_bill(&before, BillField::MouDiscountAmount, "300");

        assert_eq!(after.total_patient_paid_amount, before.total_patient_paid_amount);
        assert_eq!(after.amount_charged_to_payer, before.amount_charged_to_payer);
        assert_eq!(after.claimed_amount, "7700.00");
    }

    #[test]
    fn test_manual_override_of_total_patient_paid() {
        let fields = entered("10000", "500", "1500", "0");
        // User overrides the derived intermediate directly
        let fields = derive_bill(&fields, BillField::TotalPatientPaidAmount, "3000");

        assert_eq!(fields.total_patient_paid_amount, "3000");
        assert_eq!(fields.amount_charged_to_payer, "7000");
        assert_eq!(fields.claimed_amount, "7000.00");
    }

    #[test]
    fn test_manual_override_of_charged_to_payer() {
        let fields = entered("10000", "500", "1500", "100");
        let fields = derive_bill(&fields, BillField::AmountChargedToPayer, "7500");

        // Overriding the second intermediate only re-derives claimed_amount
        assert_eq!(fields.total_patient_paid_amount, "2000");
        assert_eq!(fields.amount_charged_to_payer, "7500");
        assert_eq!(fields.claimed_amount, "7400.00");
    }

    #[test]
    fn test_override_survives_unrelated_mou_edits() {
        let fields = entered("10000", "500", "1500", "0");
        let fields = derive_bill(&fields, BillField::TotalPatientPaidAmount, "2500");
        let fields = derive_bill(&fields, BillField::MouDiscountAmount, "100");

        assert_eq!(fields.total_patient_paid_amount, "2500");
        assert_eq!(fields.claimed_amount, "7400.00");
    }

    #[test]
    fn test_rederivation_is_idempotent() {
        let first = entered("12345.67", "111.11", "222.22", "33.33");
        let second = derive_bill(
            &first,
            BillField::MouDiscountAmount,
            &first.mou_discount_amount.clone(),
        );

        assert_eq!(first, second);
    }

    #[test]
    fn test_decimal_precision_no_float_drift() {
        let fields = entered("100.30", "0.10", "0.20", "0");

        assert_eq!(fields.total_patient_paid_amount, "0.30");
        assert_eq!(fields.amount_charged_to_payer, "100.00");
        assert_eq!(fields.claimed_amount, "100.00");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(""), Decimal::ZERO);
        assert_eq!(parse_amount("   "), Decimal::ZERO);
        assert_eq!(parse_amount("abc"), Decimal::ZERO);
        assert_eq!(parse_amount("12.5"), dec!(12.5));
        assert_eq!(parse_amount(" 42 "), dec!(42));
        assert_eq!(parse_amount("1e3"), dec!(1000));
    }
}
