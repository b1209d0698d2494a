//! Revenue dashboard and ranking calls.

// self
use crate::{
	_prelude::*,
	client::ApiClient,
	http::ApiTransport,
	revenue::{
		AnnualRealization, DataResponse, ProvinceQuery, Region, RegionalCount, RegencyQuery,
		TaxRanking, TaxRankingQuery,
	},
};

impl<T> ApiClient<T>
where
	T: ?Sized + ApiTransport,
{
	/// `GET /pendapatan/dashboard/jumlah-daerah`: regions with and without targets, per year.
	pub async fn regional_counts(&self) -> Result<Vec<RegionalCount>> {
		self.get::<DataResponse<RegionalCount>>("/pendapatan/dashboard/jumlah-daerah")
			.await
			.map(|r| r.data)
	}

	/// `GET /pendapatan/dashboard/data-realiasi-tahuan`: target versus realization per account.
	pub async fn annual_realization(&self) -> Result<Vec<AnnualRealization>> {
		self.get::<DataResponse<AnnualRealization>>("/pendapatan/dashboard/data-realiasi-tahuan")
			.await
			.map(|r| r.data)
	}

	/// `POST /master/daerah/provinsi`: provinces whose name matches `query`.
	pub async fn search_provinces(&self, query: &ProvinceQuery) -> Result<Vec<Region>> {
		self.post::<_, DataResponse<Region>>("/master/daerah/provinsi", query).await.map(|r| r.data)
	}

	/// `POST /master/daerah/kabkota`: regencies of one province whose name matches `query`.
	pub async fn search_regencies(&self, query: &RegencyQuery) -> Result<Vec<Region>> {
		self.post::<_, DataResponse<Region>>("/master/daerah/kabkota", query).await.map(|r| r.data)
	}

	/// `POST /pendapatan/peringkat/data-pajak-perdaerah`: per-account tax realization of a region.
	pub async fn regional_tax_ranking(&self, query: &TaxRankingQuery) -> Result<Vec<TaxRanking>> {
		self.post::<_, DataResponse<TaxRanking>>("/pendapatan/peringkat/data-pajak-perdaerah", query)
			.await
			.map(|r| r.data)
	}
}
