//! Regional revenue records served by the dashboard and ranking screens, plus the ranking CSV
//! export and the axis-label number formatter.

// self
use crate::_prelude::*;

/// `{data, message, ...}` envelope returned by the revenue endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataResponse<T> {
	/// Returned records.
	#[serde(default = "Vec::new")]
	pub data: Vec<T>,
	/// Backend message.
	#[serde(default)]
	pub message: String,
}

/// Yearly count of regions with and without targets and realizations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionalCount {
	/// Number of regions.
	#[serde(rename = "jumlah_daerah")]
	pub regions: i64,
	/// Regions without a realization.
	#[serde(rename = "jumlah_daerah_belum_realisasi")]
	pub without_realization: i64,
	/// Regions without a target.
	#[serde(rename = "jumlah_daerah_belum_target")]
	pub without_target: i64,
	/// Regions with a realization.
	#[serde(rename = "jumlah_daerah_realisasi")]
	pub with_realization: i64,
	/// Regions with a target.
	#[serde(rename = "jumlah_daerah_target")]
	pub with_target: i64,
	/// Share without a realization, preformatted by the backend.
	#[serde(rename = "persentase_belum_r")]
	pub pct_without_realization: String,
	/// Share without a target, preformatted by the backend.
	#[serde(rename = "persentase_belum_t")]
	pub pct_without_target: String,
	/// Share with a realization, preformatted by the backend.
	#[serde(rename = "persentase_sudah_r")]
	pub pct_with_realization: String,
	/// Share with a target, preformatted by the backend.
	#[serde(rename = "persentase_sudah_t")]
	pub pct_with_target: String,
	/// Fiscal year.
	#[serde(rename = "tahun")]
	pub year: i32,
}

/// Target versus realization of one revenue account for one year.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnnualRealization {
	/// Account code.
	#[serde(rename = "kode_akun")]
	pub account_code: String,
	/// Account name.
	#[serde(rename = "nama_akun")]
	pub account_name: String,
	/// Realization as a percentage of the target.
	#[serde(rename = "persentase_realisasi")]
	pub realization_pct: f64,
	/// Realized amount.
	#[serde(rename = "realisasi")]
	pub realization: f64,
	/// Fiscal year.
	#[serde(rename = "tahun")]
	pub year: i32,
	/// Target amount.
	pub target: f64,
}

/// Province or regency from the regional master data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
	/// `true` for provinces.
	pub is_prop: bool,
	/// Province identifier.
	pub id_prop: i64,
	/// Region identifier.
	pub id_daerah: i64,
	/// Region name.
	pub nama_daerah: String,
	/// Logo URL.
	#[serde(default)]
	pub logo: String,
	/// Home-affairs code.
	#[serde(default)]
	pub kode_ddn: String,
	/// Secondary home-affairs code.
	#[serde(default)]
	pub kode_ddn_2: String,
	/// Fiscal-balance province code.
	#[serde(default)]
	pub kode_prov_djpk: String,
	/// Fiscal-balance regency code.
	#[serde(default)]
	pub kode_kab_djpk: String,
	/// Government tier.
	#[serde(default)]
	pub jns_pemda: String,
	/// Province code.
	#[serde(default)]
	pub kode_prop: String,
	/// Regency code.
	#[serde(default)]
	pub kode_kab: String,
}

/// Body of `POST /master/daerah/provinsi`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvinceQuery {
	/// Name fragment to search for.
	pub nama_daerah: String,
}

/// Body of `POST /master/daerah/kabkota`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegencyQuery {
	/// Name fragment to search for.
	pub nama_daerah: String,
	/// Province to search within.
	pub id_prop: i64,
}

/// Body of `POST /pendapatan/peringkat/data-pajak-perdaerah`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxRankingQuery {
	/// Fiscal year.
	pub tahun: i32,
	/// Region identifier.
	pub id_daerah: i64,
}

/// Per-account tax realization of one region.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaxRanking {
	/// Government tier.
	pub jns_pemda: String,
	/// Account code.
	pub kode_akun: String,
	/// Account name.
	pub nama_akun: String,
	/// Region name.
	pub nama_daerah: String,
	/// Realization as a percentage of the target.
	pub persentase: f64,
	/// Realized amount.
	pub realisasi: f64,
	/// Fiscal year.
	pub tahun: i32,
	/// Target amount.
	pub target: f64,
}

/// Sorts rows by realization percentage, highest first.
pub fn rank_by_percentage(rows: &mut [TaxRanking]) {
	rows.sort_by(|a, b| b.persentase.total_cmp(&a.persentase));
}

/// Header row of [`tax_ranking_csv`].
pub const TAX_RANKING_CSV_HEADER: [&str; 5] =
	["Kode Akun", "Nama Akun", "Target", "Realisasi", "Persentase"];

/// Renders rows as the downloadable CSV: account code, name, target, realization, percentage.
///
/// Fields containing the delimiter, quotes, or line breaks are quoted.
pub fn tax_ranking_csv(rows: &[TaxRanking]) -> Result<String> {
	let mut writer = csv::Writer::from_writer(Vec::new());

	writer.write_record(TAX_RANKING_CSV_HEADER)?;

	for row in rows {
		writer.write_record([
			row.kode_akun.as_str(),
			row.nama_akun.as_str(),
			row.target.to_string().as_str(),
			row.realisasi.to_string().as_str(),
			format!("{:.2}%", row.persentase).as_str(),
		])?;
	}

	let bytes = writer.into_inner().map_err(|e| csv::Error::from(e.into_error()))?;

	Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Shortens large amounts for chart axes: `T` (trillion), `M` (billion), `J` (million),
/// `R` (thousand), each with one decimal.
pub fn format_large_number(num: f64) -> String {
	const SCALES: [(f64, &str); 4] = [(1e12, "T"), (1e9, "M"), (1e6, "J"), (1e3, "R")];

	SCALES
		.iter()
		.find(|(scale, _)| num >= *scale)
		.map(|(scale, suffix)| format!("{:.1} {suffix}", num / scale))
		.unwrap_or_else(|| num.to_string())
}
