//! Application constants for the shelter and police converters
//!
//! Default input/output locations, the column headers of the upstream
//! government CSV files, and the wrapper keys the app decodes.

// =============================================================================
// Default Paths
// =============================================================================

/// Nationwide designated emergency evacuation site registry
pub const DEFAULT_SHELTER_INPUT: &str = "RawDatas/全国指定緊急避難場所データ.csv";

/// Shelter JSON bundled with the app
pub const DEFAULT_SHELTER_OUTPUT: &str = "AnshinNavi/Datas/shelters.json";

/// Prefectural police headquarters with geocoded coordinates
pub const DEFAULT_HONBU_INPUT: &str = "RawDatas/honbu_with_coord(2024:11:20).csv";

/// Police stations with geocoded coordinates
pub const DEFAULT_KEISATSUSHO_INPUT: &str = "RawDatas/keisatsusyo_with_coord(2024:11:20).csv";

/// Police boxes and residential police posts with geocoded coordinates
pub const DEFAULT_KOBAN_INPUT: &str = "RawDatas/koban_with_coord(2024:11:20).csv";

/// Police JSON bundled with the app
pub const DEFAULT_POLICE_OUTPUT: &str = "AnshinNavi/Datas/polices.json";

/// Config file name under the user config directory
pub const CONFIG_DIR_NAME: &str = "anshin-data";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "ANSHIN_";

// =============================================================================
// JSON Document Keys
// =============================================================================

pub const SHELTERS_KEY: &str = "shelters";
pub const POLICES_KEY: &str = "polices";

// =============================================================================
// Shelter Columns
// =============================================================================

pub mod shelter_columns {
    pub const REGION_CODE: &str = "市町村コード";
    pub const REGION_NAME: &str = "都道府県名及び市町村名";
    pub const NUMBER: &str = "NO";
    pub const NAME: &str = "施設・場所名";
    pub const ADDRESS: &str = "住所";
    pub const GENERAL_FLOODING: &str = "洪水";
    pub const LANDSLIDE: &str = "崖崩れ、土石流及び地滑り";
    pub const HIGH_TIDE: &str = "高潮";
    pub const EARTHQUAKE: &str = "地震";
    pub const TSUNAMI: &str = "津波";
    pub const FIRE: &str = "大規模な火事";
    pub const INTERNAL_FLOODING: &str = "内水氾濫";
    pub const VOLCANO: &str = "火山現象";
    pub const SAME_AS_EVACUATION_CENTER: &str = "指定避難所との住所同一";
    pub const LATITUDE: &str = "緯度";
    pub const LONGITUDE: &str = "経度";
    pub const REMARKS: &str = "備考";

    /// Columns every shelter file must carry
    pub const REQUIRED: &[&str] = &[
        REGION_CODE,
        REGION_NAME,
        NUMBER,
        NAME,
        ADDRESS,
        GENERAL_FLOODING,
        LANDSLIDE,
        HIGH_TIDE,
        EARTHQUAKE,
        TSUNAMI,
        FIRE,
        INTERNAL_FLOODING,
        VOLCANO,
        SAME_AS_EVACUATION_CENTER,
        LATITUDE,
        LONGITUDE,
    ];
}

// =============================================================================
// Police Columns
// =============================================================================

pub mod police_columns {
    pub const NAME: &str = "名称";
    /// Prefecture header used by the honbu and keisatsusho files
    pub const PREFECTURE: &str = "都道府県";
    /// Prefecture header used by the koban file
    pub const PREFECTURE_NAME: &str = "都道府県名";
    pub const FURIGANA: &str = "フリガナ";
    pub const KOBAN_FURIGANA: &str = "交番・駐在所頭名（フリガナ）";
    pub const PHONE: &str = "電話番号";
    pub const POSTAL_CODE: &str = "郵便番号";
    pub const CITY: &str = "市区町村";
    pub const GOVERNMENT_CODE: &str = "全国地方公共団体コード";
    pub const FULL_NOTATION: &str = "全体表記";
    pub const TOWN_ONWARDS: &str = "町又は大字以降";
    pub const REMARKS: &str = "備考";

    /// Parent name declared by a station row
    pub const HONBU_NAME: &str = "警察本部名称";
    /// Parent name declared by a koban row
    pub const KEISATSUSHO_NAME: &str = "警察署名称";

    /// Coordinate headers, in both capitalizations seen upstream
    pub const LONGITUDE: &[&str] = &["longitude", "Longitude"];
    pub const LATITUDE: &[&str] = &["latitude", "Latitude"];
    pub const IS_TRUSTFUL: &str = "isTrustful";
}
