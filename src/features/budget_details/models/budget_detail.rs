use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// One budget realization line: a (region, sub-region, activity, account) row
/// as published by the realization API.
///
/// Text fields that arrive null or missing decode as empty strings so one
/// incomplete row does not fail its page; the amounts stay strict.
///
/// JSON keys follow the upstream payload; the same names are used as column
/// names in `siskeudes_detail_anggaran`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetDetail {
    #[serde(rename = "tahun", default, deserialize_with = "null_as_empty")]
    pub year: String,
    #[serde(rename = "kd_prov", default, deserialize_with = "null_as_empty")]
    pub province_code: String,
    #[serde(rename = "nama_provinsi", default, deserialize_with = "null_as_empty")]
    pub province_name: String,
    #[serde(rename = "kd_kab", default, deserialize_with = "null_as_empty")]
    pub regency_code: String,
    #[serde(rename = "nama_kabupaten", default, deserialize_with = "null_as_empty")]
    pub regency_name: String,
    #[serde(rename = "kd_kec", default, deserialize_with = "null_as_empty")]
    pub district_code: String,
    #[serde(rename = "nama_kecamatan", default, deserialize_with = "null_as_empty")]
    pub district_name: String,
    #[serde(rename = "kd_desa", default, deserialize_with = "null_as_empty")]
    pub village_code: String,
    #[serde(rename = "nama_desa", default, deserialize_with = "null_as_empty")]
    pub village_name: String,

    // Absent below the activity level; null is not an error
    #[serde(rename = "kd_bid", default)]
    pub field_code: Option<String>,
    #[serde(rename = "nama_bidang", default)]
    pub field_name: Option<String>,
    #[serde(rename = "kd_sub", default)]
    pub sub_field_code: Option<String>,
    #[serde(rename = "nama_subbidang", default)]
    pub sub_field_name: Option<String>,
    #[serde(rename = "id_keg", default)]
    pub activity_id: Option<String>,
    #[serde(rename = "nama_kegiatan", default)]
    pub activity_name: Option<String>,

    #[serde(rename = "kd_subrinci", default, deserialize_with = "null_as_empty")]
    pub sub_detail_code: String,
    #[serde(rename = "kode_sumber", default, deserialize_with = "null_as_empty")]
    pub source_code: String,
    #[serde(rename = "akun", default, deserialize_with = "null_as_empty")]
    pub account_code: String,
    #[serde(rename = "nama_akun", default, deserialize_with = "null_as_empty")]
    pub account_name: String,
    #[serde(rename = "kelompok", default, deserialize_with = "null_as_empty")]
    pub group_code: String,
    #[serde(rename = "nama_kelompok", default, deserialize_with = "null_as_empty")]
    pub group_name: String,
    #[serde(rename = "jenis", default, deserialize_with = "null_as_empty")]
    pub type_code: String,
    #[serde(rename = "nama_jenis", default, deserialize_with = "null_as_empty")]
    pub type_name: String,
    #[serde(rename = "obyek", default, deserialize_with = "null_as_empty")]
    pub object_code: String,
    #[serde(rename = "nama_obyek", default, deserialize_with = "null_as_empty")]
    pub object_name: String,

    /// Amounts arrive as numeric strings ("1500000.00"); Decimal keeps them exact
    #[serde(rename = "anggaran1")]
    pub budget_year_1: Decimal,
    #[serde(rename = "anggaran2")]
    pub budget_year_2: Decimal,
    #[serde(rename = "realisasi1")]
    pub realized_year_1: Decimal,
    #[serde(rename = "realisasi2")]
    pub realized_year_2: Decimal,
}

impl BudgetDetail {
    /// Rewrite the regency, district and village codes into dotted compound
    /// codes carrying their ancestry:
    ///
    /// - `kd_kab`  -> `prov.kab`
    /// - `kd_kec`  -> `prov.kab.kec`
    /// - `kd_desa` -> `prov.kab.desa` (one trailing `.` dropped first)
    ///
    /// Not idempotent: calling it on an already rewritten record composes the
    /// prefixes a second time. Each decoded record must pass through exactly once.
    pub fn into_compound_codes(mut self) -> Self {
        let province = self.province_code.as_str();
        let regency = self.regency_code.as_str();
        let village = self
            .village_code
            .strip_suffix('.')
            .unwrap_or(&self.village_code);

        let regency_code = format!("{}.{}", province, regency);
        let district_code = format!("{}.{}.{}", province, regency, self.district_code);
        let village_code = format!("{}.{}.{}", province, regency, village);

        self.regency_code = regency_code;
        self.district_code = district_code;
        self.village_code = village_code;
        self
    }
}

/// Decode `null` as an empty string
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
