use serde::{Deserialize, Serialize};

use crate::features::budget_details::models::BudgetDetail;

/// Body of the login call
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: String,
}

/// Body sent with every page request of one region; identical across pages
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataRequest {
    #[serde(rename = "tahun")]
    pub year: i32,
    #[serde(rename = "kd_prov")]
    pub province_code: String,
    #[serde(rename = "kd_kab")]
    pub regency_code: String,
}

/// Top-level page envelope: `{"data": {...}}`
#[derive(Debug, Deserialize)]
pub struct PageEnvelope {
    pub data: PageResponse,
}

/// One page of records plus the server-supplied link to the next page
#[derive(Debug, Deserialize)]
pub struct PageResponse {
    #[serde(rename = "data", default)]
    pub records: Vec<BudgetDetail>,
    #[serde(default)]
    pub next_page_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::budget_detail_json;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_data_request_uses_upstream_keys() {
        let body = DataRequest {
            year: 2025,
            province_code: "51".to_string(),
            regency_code: "03".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"tahun": 2025, "kd_prov": "51", "kd_kab": "03"})
        );
    }

    #[test]
    fn test_page_decodes_records_and_null_next_link() {
        let raw = serde_json::json!({
            "data": {
                "current_page": 3,
                "data": [budget_detail_json("51", "03", "002.")],
                "next_page_url": null,
                "total": 201
            }
        });
        let envelope: PageEnvelope = serde_json::from_value(raw).unwrap();

        assert_eq!(envelope.data.records.len(), 1);
        assert!(envelope.data.next_page_url.is_none());

        let record = &envelope.data.records[0];
        assert_eq!(record.village_code, "002.");
        assert_eq!(record.activity_id, None);
        assert_eq!(record.budget_year_2, Decimal::from_str("27500000.50").unwrap());
        assert_eq!(record.realized_year_1, Decimal::from_str("12345678.91").unwrap());
    }

    #[test]
    fn test_amounts_decode_losslessly_from_strings() {
        let mut raw = budget_detail_json("11", "71", "2001");
        raw["anggaran1"] = serde_json::json!("123456789012345.67");
        raw["realisasi2"] = serde_json::json!(1500);

        let record: BudgetDetail = serde_json::from_value(raw).unwrap();
        assert_eq!(record.budget_year_1.to_string(), "123456789012345.67");
        assert_eq!(record.realized_year_2, Decimal::from(1500));
    }

    #[test]
    fn test_missing_classification_fields_are_none() {
        let mut raw = budget_detail_json("11", "71", "2001");
        let object = raw.as_object_mut().unwrap();
        object.remove("kd_bid");
        object.remove("id_keg");

        let record: BudgetDetail = serde_json::from_value(raw).unwrap();
        assert!(record.field_code.is_none());
        assert!(record.activity_id.is_none());
    }

    #[test]
    fn test_null_or_missing_text_fields_decode_as_empty() {
        let mut incomplete = budget_detail_json("51", "03", "002.");
        incomplete["nama_desa"] = serde_json::Value::Null;
        incomplete.as_object_mut().unwrap().remove("kode_sumber");

        let raw = serde_json::json!({
            "data": {
                "data": [budget_detail_json("51", "03", "001."), incomplete],
                "next_page_url": null
            }
        });
        let envelope: PageEnvelope = serde_json::from_value(raw).unwrap();

        assert_eq!(envelope.data.records.len(), 2);
        let record = &envelope.data.records[1];
        assert_eq!(record.village_name, "");
        assert_eq!(record.source_code, "");
        assert_eq!(record.village_code, "002.");
    }

    #[test]
    fn test_null_amount_is_rejected() {
        let mut raw = budget_detail_json("51", "03", "002.");
        raw["anggaran1"] = serde_json::Value::Null;

        assert!(serde_json::from_value::<BudgetDetail>(raw).is_err());
    }

    #[test]
    fn test_login_response_without_token_is_empty() {
        let response: LoginResponse = serde_json::from_str(r#"{"message":"ok"}"#).unwrap();
        assert!(response.token.is_empty());
    }
}
