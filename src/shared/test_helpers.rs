#[cfg(test)]
use crate::features::budget_details::BudgetDetail;

#[cfg(test)]
use fake::{faker::address::en::CityName, faker::lorem::en::Sentence, Fake};

#[cfg(test)]
use rust_decimal::Decimal;

/// A raw (not yet transformed) budget line for the given region codes
#[cfg(test)]
pub fn budget_detail(
    province_code: &str,
    regency_code: &str,
    district_code: &str,
    village_code: &str,
) -> BudgetDetail {
    BudgetDetail {
        year: "2025".to_string(),
        province_code: province_code.to_string(),
        province_name: CityName().fake(),
        regency_code: regency_code.to_string(),
        regency_name: CityName().fake(),
        district_code: district_code.to_string(),
        district_name: CityName().fake(),
        village_code: village_code.to_string(),
        village_name: CityName().fake(),
        field_code: Some("01".to_string()),
        field_name: Some("Penyelenggaraan Pemerintahan Desa".to_string()),
        sub_field_code: Some("01".to_string()),
        sub_field_name: Some("Penyelenggaraan Belanja Siltap".to_string()),
        activity_id: Some("5103012001010101".to_string()),
        activity_name: Some(Sentence(2..5).fake()),
        sub_detail_code: "01".to_string(),
        source_code: "DDS".to_string(),
        account_code: "5".to_string(),
        account_name: "Belanja".to_string(),
        group_code: "5.1".to_string(),
        group_name: "Belanja Pegawai".to_string(),
        type_code: "5.1.1".to_string(),
        type_name: "Penghasilan Tetap dan Tunjangan".to_string(),
        object_code: "5.1.1.01".to_string(),
        object_name: "Penghasilan Tetap Kepala Desa".to_string(),
        budget_year_1: Decimal::new(150_000_000, 2),
        budget_year_2: Decimal::new(175_000_050, 2),
        realized_year_1: Decimal::new(120_000_000, 2),
        realized_year_2: Decimal::ZERO,
    }
}

/// The JSON shape of one record as the API sends it, amounts as strings
#[cfg(test)]
pub fn budget_detail_json(
    province_code: &str,
    regency_code: &str,
    village_code: &str,
) -> serde_json::Value {
    serde_json::json!({
        "tahun": "2025",
        "kd_prov": province_code,
        "nama_provinsi": "BALI",
        "kd_kab": regency_code,
        "nama_kabupaten": "BADUNG",
        "kd_kec": "01",
        "nama_kecamatan": "KUTA SELATAN",
        "kd_desa": village_code,
        "nama_desa": "PECATU",
        "kd_bid": null,
        "nama_bidang": null,
        "kd_sub": null,
        "nama_subbidang": null,
        "id_keg": null,
        "nama_kegiatan": null,
        "kd_subrinci": "1",
        "kode_sumber": "PAD",
        "akun": "4",
        "nama_akun": "Pendapatan",
        "kelompok": "4.1",
        "nama_kelompok": "Pendapatan Asli Desa",
        "jenis": "4.1.1",
        "nama_jenis": "Hasil Usaha Desa",
        "obyek": "4.1.1.01",
        "nama_obyek": "Bagi Hasil BUMDes",
        "anggaran1": "25000000.00",
        "anggaran2": "27500000.50",
        "realisasi1": "12345678.91",
        "realisasi2": "0"
    })
}
