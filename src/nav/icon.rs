//! Icons shown next to navigation entries.

// self
use crate::_prelude::*;

/// Sidebar icon chosen by entry title.
///
/// The shell maps each variant to its icon set; [`Icon::as_str`] yields the icon slug.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
	/// Dashboard layout.
	LayoutDashboard,
	/// User with a cog.
	UserCog,
	/// Group of users.
	Users,
	/// Application grid.
	Apps,
	/// User with a shield.
	UserShield,
	/// Sign-out arrow.
	Logout,
	/// Histogram.
	ChartHistogram,
	/// Component blocks.
	Components,
	/// Exclamation mark in a circle.
	ExclamationCircle,
	/// Cog.
	Settings,
	/// Hexagon numbered 1.
	HexagonNumber1,
	/// Hexagon numbered 2.
	HexagonNumber2,
	/// Hexagon numbered 3.
	HexagonNumber3,
	/// Hexagon numbered 4.
	HexagonNumber4,
	/// Hexagon numbered 5.
	HexagonNumber5,
	/// 404 sign.
	Error404,
	/// Server switched off.
	ServerOff,
	/// Road barrier.
	BarrierBlock,
	/// Truck.
	Truck,
	/// Hamburger menu.
	Menu2,
	/// License document.
	License,
	/// Upload arrow over a file.
	FileUpload,
	/// No matching icon; renders as an empty slot of the same size.
	#[default]
	Blank,
}
impl Icon {
	/// Looks up the icon for an entry title, falling back to [`Icon::Blank`].
	pub fn for_title(title: &str) -> Self {
		match title {
			"Dashboard" => Self::LayoutDashboard,
			"Pengaturan" => Self::UserCog,
			"User Management" | "Users" => Self::Users,
			"Profile Users" => Self::Apps,
			"Authentication" | "Detail RBAC Users" => Self::UserShield,
			"Keluar" => Self::Logout,
			"Analysis" => Self::ChartHistogram,
			"Extra Components" => Self::Components,
			"Error Pages" => Self::ExclamationCircle,
			"Settings" => Self::Settings,
			"Data Pendapatan" => Self::HexagonNumber1,
			"Sign In (Box)" => Self::HexagonNumber2,
			"Sign Up" => Self::HexagonNumber3,
			"Forgot Password" => Self::HexagonNumber4,
			"OTP" => Self::HexagonNumber5,
			"Not Found" => Self::Error404,
			"Internal Server Error" => Self::ServerOff,
			"Maintenance Error" => Self::BarrierBlock,
			"Trucks" => Self::Truck,
			"List Menu" => Self::Menu2,
			"List Semua Permission" | "List Semua Roles" => Self::License,
			"Upload Dokumen" => Self::FileUpload,
			_ => Self::Blank,
		}
	}

	/// Returns `true` for the fallback variant.
	pub const fn is_blank(self) -> bool {
		matches!(self, Self::Blank)
	}

	/// Stable icon slug.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::LayoutDashboard => "layout-dashboard",
			Self::UserCog => "user-cog",
			Self::Users => "users",
			Self::Apps => "apps",
			Self::UserShield => "user-shield",
			Self::Logout => "logout",
			Self::ChartHistogram => "chart-histogram",
			Self::Components => "components",
			Self::ExclamationCircle => "exclamation-circle",
			Self::Settings => "settings",
			Self::HexagonNumber1 => "hexagon-number1",
			Self::HexagonNumber2 => "hexagon-number2",
			Self::HexagonNumber3 => "hexagon-number3",
			Self::HexagonNumber4 => "hexagon-number4",
			Self::HexagonNumber5 => "hexagon-number5",
			Self::Error404 => "error404",
			Self::ServerOff => "server-off",
			Self::BarrierBlock => "barrier-block",
			Self::Truck => "truck",
			Self::Menu2 => "menu2",
			Self::License => "license",
			Self::FileUpload => "file-upload",
			Self::Blank => "blank",
		}
	}
}
impl Display for Icon {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
